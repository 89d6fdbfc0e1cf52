//! Hydrograph plots for routed output.
use crate::routing::RoutedStep;
use plotters::prelude::*;

/// Plot the inflow and routed outflow hydrographs against time step.
///  - `steps` is the routed output series.
///  - `title` is the path of the png file to write.
pub fn flow_plot(steps: &[RoutedStep], title: &str) -> Result<(), Box<dyn std::error::Error>> {
    let inflow: Vec<(f64, f64)> = steps
        .iter()
        .enumerate()
        .map(|(i, s)| (i as f64, s.inflow))
        .collect();
    let outflow: Vec<(f64, f64)> = steps
        .iter()
        .enumerate()
        .map(|(i, s)| (i as f64, s.outflow))
        .collect();

    let ymax = inflow
        .iter()
        .chain(outflow.iter())
        .map(|xi| xi.1)
        .fold(0.0, f64::max);
    let xmax = (steps.len().max(1) - 1) as f64;
    let root = BitMapBackend::new(title, (640, 480)).into_drawing_area();
    root.fill(&WHITE)?;
    root.margin(10, 10, 10, 10);
    // construct a chart context
    let mut chart = ChartBuilder::on(&root)
        // Set the size of the label region
        .x_label_area_size(40)
        .y_label_area_size(60)
        // Finally attach a coordinate on the drawing area and make a chart context
        .build_cartesian_2d(0.0..xmax, 0.0..ymax)?;

    // Then we can draw a mesh
    chart
        .configure_mesh()
        // We can customize the maximum number of labels allowed for each axis
        .x_labels(5)
        .y_labels(5)
        // We can also change the format of the label text
        .y_label_formatter(&|x| format!("{:.1}", x))
        .x_label_formatter(&|x| format!("{:.0}", x))
        .x_desc("Time step")
        .y_desc("Q, m3/s")
        .draw()?;

    chart
        .draw_series(LineSeries::new(inflow, &BLUE))?
        .label("inflow")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &BLUE));

    chart
        .draw_series(LineSeries::new(outflow, &GREEN))?
        .label("outflow")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &GREEN));

    chart
        .configure_series_labels()
        .background_style(WHITE.filled())
        .draw()?;
    Ok(())
}

/// Plot routed reservoir storage against time step.
///  - `steps` is the routed output series.
///  - `title` is the path of the png file to write.
pub fn storage_plot(steps: &[RoutedStep], title: &str) -> Result<(), Box<dyn std::error::Error>> {
    let storage: Vec<(f64, f64)> = steps
        .iter()
        .enumerate()
        .map(|(i, s)| (i as f64, s.storage))
        .collect();

    let ymax = storage.iter().map(|xi| xi.1).fold(0.0, f64::max);
    let xmax = (steps.len().max(1) - 1) as f64;
    let root = BitMapBackend::new(title, (640, 480)).into_drawing_area();
    root.fill(&WHITE)?;
    root.margin(10, 10, 10, 10);
    let mut chart = ChartBuilder::on(&root)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..xmax, 0.0..ymax)?;

    chart
        .configure_mesh()
        .x_labels(5)
        .y_labels(5)
        .y_label_formatter(&|x| format!("{:.0}", x))
        .x_label_formatter(&|x| format!("{:.0}", x))
        .x_desc("Time step")
        .y_desc("Storage, m3")
        .draw()?;

    chart
        .draw_series(LineSeries::new(storage, &BLACK))?
        .label("storage")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &BLACK));

    chart
        .configure_series_labels()
        .background_style(WHITE.filled())
        .draw()?;
    Ok(())
}
