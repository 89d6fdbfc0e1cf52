use levelpool::prelude::*;

/// Routes the bundled half-hourly storm through the demo lake and plots the
/// attenuated hydrograph alongside reservoir storage.
fn main() {
    pretty_env_logger::init();
    // Run from the repository root, panics on invalid path
    let series = InflowSeries::read("data/inflow.csv").unwrap();
    let table = EsoTable::read("data/eso_table.txt").unwrap();

    let mut routed = Router::new(table).route(&series).unwrap();

    utils::record(&mut routed, "routed.csv").unwrap();
    plot::flow_plot(&routed, "routed.png").unwrap();
    plot::storage_plot(&routed, "storage.png").unwrap();
}
