//! Csv output for routed series.
use crate::errors;
use serde::Serialize;

/// Write serializable records to a csv file.
///  - `rec` is a mutable reference to a vector of records, such as the
///    routed output of [Router::route](crate::routing::Router::route).
///  - `path` is the csv file to write.
pub fn record<T: Serialize>(rec: &mut Vec<T>, path: &str) -> Result<(), errors::RouteError> {
    let mut wtr = csv::Writer::from_path(path)?;
    for i in rec {
        wtr.serialize(i)?;
    }
    wtr.flush()?;
    Ok(())
}
