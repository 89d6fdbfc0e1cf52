/*!
* # Levelpool - A library for level-pool (modified Puls) reservoir routing.
* Level-pool routing propagates an inflow hydrograph through a reservoir or
* lake whose behavior is summarized by a tabulated elevation-storage-outflow
* relationship.  The discretized mass balance
* `2*S(t+1)/dt + O(t+1) = I(t) + I(t+1) + 2*S(t)/dt - O(t)` is implicit in the
* unknowns at `t+1`, but tabulating `2s/dt + o` against storage and outflow
* turns each step into two direct table lookups, so no root finding is needed.
*
* The crate owns the numerical core only: piecewise-linear interpolation, the
* derived-curve construction, and the sequential time-stepping recurrence.
* File readers for the relationship table and the inflow series, a csv writer
* for the routed output, and hydrograph plots are thin wrappers around it.
*
*  - Please direct questions or comments to the github repository.
*
*  ## Quick Start
*
* To use levelpool, add it to your `Cargo.toml`
* ```toml
* [dependencies]
* levelpool = "^0.1.0"
* ```
*
*  - Load the crate prelude in the preamble of your `main.rs`.
*  - Route a flood wave through a lake:
* ```no_run
* use levelpool::prelude::*;
*
* fn main() -> Result<(), RouteError> {
*     // elevation-storage-outflow relationship, whitespace-delimited with a header
*     let table = EsoTable::read("data/eso_table.txt")?;
*     // half-hourly inflow hydrograph
*     let series = InflowSeries::read("data/inflow.csv")?;
*
*     // route with an assumed starting water surface at 0.5
*     let mut routed = Router::new(table)
*         .initial_elevation(&0.5)
*         .route(&series)?;
*
*     // write the (time, inflow, outflow, storage) series and plot it
*     utils::record(&mut routed, "routed.csv")?;
*     plot::flow_plot(&routed, "routed.png").unwrap();
*
*     Ok(())
* }
* ```
*
* Build a routing engine using a builder pattern.  First wrap a validated
* [EsoTable](table/struct.EsoTable.html) with
* [new](routing/struct.Router.html#method.new), then override the assumed
* starting elevation with
* [initial_elevation](routing/struct.Router.html#method.initial_elevation)
* if the default of 0.5 does not suit the table's datum.
*
* ```rust
* use levelpool::prelude::*;
*
* # fn main() -> Result<(), RouteError> {
* let table = EsoTable::new(&[(0.0, 0.0, 0.0), (1.0, 10.0, 5.0), (2.0, 20.0, 10.0)])?;
*
* // build step by step
* let mut router = Router::new(table.clone());
* router = router.initial_elevation(&0.5);
*
* // or inline, same result
* let router_b = Router::new(table).initial_elevation(&0.5);
* # Ok(())
* # }
* ```
*/

#![warn(missing_docs)]
pub mod errors;
pub mod interp;
pub mod plot;
pub mod routing;
pub mod table;
pub mod utils;

/// Common imports for routing runs.
pub mod prelude {
    pub use crate::errors::RouteError;
    pub use crate::plot;
    pub use crate::routing::{Inflow, InflowSeries, RoutedStep, Router, DEFAULT_INITIAL_ELEVATION};
    pub use crate::table::{DerivedCurve, EsoTable};
    pub use crate::utils;
}
