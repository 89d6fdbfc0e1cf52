use levelpool::prelude::*;
use std::env;

/// Routes an inflow hydrograph through a reservoir described by an
/// elevation-storage-outflow table, then writes routed.csv and routed.png.
fn main() -> Result<(), RouteError> {
    pretty_env_logger::init();
    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        eprintln!("usage: route_lake <inflow csv> <relationship table> [initial elevation]");
        std::process::exit(2);
    }

    let series = InflowSeries::read(&args[1])?;
    let table = EsoTable::read(&args[2])?;

    let mut router = Router::new(table);
    if let Some(z) = args.get(3) {
        // override the assumed starting water surface, defaults to 0.5
        router = router.initial_elevation(&z.parse::<f64>()?);
    }

    let mut routed = router.route(&series)?;
    utils::record(&mut routed, "routed.csv")?;
    plot::flow_plot(&routed, "routed.png").unwrap();

    Ok(())
}
