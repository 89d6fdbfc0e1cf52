//! The level-pool time-stepping engine.
//!
//! Solves `2*S(t+1)/dt + O(t+1) = I(t) + I(t+1) + 2*S(t)/dt - O(t)` given the
//! relationship between storage and `2s/dt + o`, and between outflow and
//! `2s/dt + o`.  Each step depends on the one before it, so the loop is a
//! fold of a pure step transition over the inflow series.
use crate::errors::RouteError;
use crate::table::{DerivedCurve, EsoTable};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs::File;

/// Assumed water surface elevation used to initialize a routing run, in the
/// same units as the relationship table's elevation column.
pub const DEFAULT_INITIAL_ELEVATION: f64 = 0.5;

/// One timestamped inflow observation.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Inflow {
    /// Observation time in seconds since the epoch.
    pub time: i64,
    /// Inflow rate in volume per second.
    pub inflow: f64,
}

/// A uniformly spaced inflow hydrograph.
///
/// The routing time step is taken from the difference between the first two
/// timestamps and assumed constant across the series; irregular spacing is
/// not supported.
#[derive(Debug, Clone)]
pub struct InflowSeries {
    points: Vec<Inflow>,
}

impl InflowSeries {
    /// Build a series from timestamped observations.  Requires at least two
    /// points and strictly increasing timestamps.
    pub fn new(points: Vec<Inflow>) -> Result<Self, RouteError> {
        if points.len() < 2 {
            return Err(RouteError::InputShape {
                what: "inflow series",
                len: points.len(),
            });
        }
        for i in 1..points.len() {
            let dt = (points[i].time - points[i - 1].time) as f64;
            if dt <= 0.0 {
                return Err(RouteError::TimeStep { dt });
            }
        }
        Ok(InflowSeries { points })
    }

    /// Read an inflow series from a csv file with a header line and columns
    /// `time` (seconds since the epoch) and `inflow`.
    pub fn read(path: &str) -> Result<Self, RouteError> {
        let var = File::open(path)?;
        let mut rdr = csv::Reader::from_reader(var);
        let mut points = Vec::new();
        for result in rdr.records() {
            let row = result?;
            let row: Inflow = row.deserialize(None)?;
            points.push(row);
        }
        InflowSeries::new(points)
    }

    /// The routing time step in seconds, from the first two timestamps.
    pub fn dt(&self) -> f64 {
        (self.points[1].time - self.points[0].time) as f64
    }

    /// The observations in time order.
    pub fn points(&self) -> &[Inflow] {
        &self.points
    }

    /// Number of observations in the series.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when the series holds no observations.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// One routed time step of the output hydrograph.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RoutedStep {
    /// Observation time in seconds since the epoch.
    pub time: i64,
    /// Inflow rate at this step.
    pub inflow: f64,
    /// Routed outflow rate at this step.
    pub outflow: f64,
    /// Reservoir storage at this step.
    pub storage: f64,
}

/// Level-pool routing engine for a single reservoir.
///
/// Owns the relationship table for the duration of a run and carries the
/// configurable initial elevation, which defaults to
/// [DEFAULT_INITIAL_ELEVATION].
///
/// # Examples
///
/// ```rust
/// use levelpool::prelude::*;
///
/// let table = EsoTable::new(&[(0.0, 0.0, 0.0), (1.0, 10.0, 5.0), (2.0, 20.0, 10.0)])?;
/// let series = InflowSeries::new(vec![
///     Inflow { time: 0, inflow: 1.0 },
///     Inflow { time: 1800, inflow: 2.0 },
/// ])?;
/// let routed = Router::new(table).initial_elevation(&0.5).route(&series)?;
/// assert_eq!(2, routed.len());
/// # Ok::<(), RouteError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Router {
    table: EsoTable,
    initial_elevation: f64,
}

impl Router {
    /// Create a routing engine over a relationship table, with the default
    /// initial elevation.
    pub fn new(table: EsoTable) -> Self {
        Router {
            table,
            initial_elevation: DEFAULT_INITIAL_ELEVATION,
        }
    }

    /// Override the assumed starting water surface elevation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use levelpool::prelude::*;
    /// # let table = EsoTable::new(&[(0.0, 0.0, 0.0), (1.0, 10.0, 5.0)]).unwrap();
    /// let router = Router::new(table).initial_elevation(&1.2);
    /// ```
    pub fn initial_elevation(mut self, elevation: &f64) -> Self {
        self.initial_elevation = *elevation;
        self
    }

    /// The relationship table the engine routes against.
    pub fn table(&self) -> &EsoTable {
        &self.table
    }

    /// Route an inflow hydrograph through the reservoir.
    ///
    /// Builds the derived curve once, initializes storage and outflow from
    /// the initial elevation, then folds the mass-balance step over the
    /// series.  Returns one [RoutedStep] per input observation.  Any
    /// interpolation failure aborts the run; a corrupted step would poison
    /// every step after it.
    pub fn route(&self, series: &InflowSeries) -> Result<Vec<RoutedStep>, RouteError> {
        let points = series.points();
        let dt = series.dt();
        let curve = self.table.derived(dt)?;

        let storage = self.table.storage_at(self.initial_elevation)?;
        let outflow = self.table.outflow_at(self.initial_elevation)?;
        let mut routed = Vec::with_capacity(points.len());
        routed.push(RoutedStep {
            time: points[0].time,
            inflow: points[0].inflow,
            outflow,
            storage,
        });

        let mut state = (storage, outflow);
        for t in 1..points.len() {
            debug!("time step: {}", t);
            state = step(state, points[t - 1].inflow, points[t].inflow, dt, &curve)?;
            routed.push(RoutedStep {
                time: points[t].time,
                inflow: points[t].inflow,
                outflow: state.1,
                storage: state.0,
            });
        }
        Ok(routed)
    }
}

/// Advance the mass balance by one step.  `prev` carries `(storage, outflow)`
/// from the step before; returns the new pair.
fn step(
    prev: (f64, f64),
    inflow_prev: f64,
    inflow_next: f64,
    dt: f64,
    curve: &DerivedCurve,
) -> Result<(f64, f64), RouteError> {
    let rhs = inflow_prev + inflow_next + 2.0 * prev.0 / dt - prev.1;
    let outflow = curve.outflow_at(rhs)?;
    let storage = curve.storage_at(rhs)?;
    Ok((storage, outflow))
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: i64 = 1800;

    // storage scaled so the recurrence damps quickly relative to dt
    fn table() -> EsoTable {
        EsoTable::new(&[
            (0.0, 0.0, 0.0),
            (1.0, 9000.0, 5.0),
            (2.0, 18000.0, 10.0),
        ])
        .unwrap()
    }

    fn series(inflows: &[f64]) -> InflowSeries {
        let points = inflows
            .iter()
            .enumerate()
            .map(|(i, q)| Inflow {
                time: i as i64 * DT,
                inflow: *q,
            })
            .collect();
        InflowSeries::new(points).unwrap()
    }

    #[test]
    fn initializes_from_elevation() {
        let routed = Router::new(table())
            .initial_elevation(&0.5)
            .route(&series(&[1.0, 1.0]))
            .unwrap();
        assert_eq!(4500.0, routed[0].storage);
        assert_eq!(2.5, routed[0].outflow);
    }

    #[test]
    fn output_matches_input_length() {
        let inflows = vec![0.0, 3.0, 7.0, 4.0, 1.0, 0.0, 0.0];
        let routed = Router::new(table()).route(&series(&inflows)).unwrap();
        assert_eq!(inflows.len(), routed.len());
        for (p, r) in series(&inflows).points().iter().zip(routed.iter()) {
            assert_eq!(p.time, r.time);
            assert_eq!(p.inflow, r.inflow);
        }
    }

    #[test]
    fn steps_satisfy_mass_balance() {
        let dt = DT as f64;
        let routed = Router::new(table())
            .route(&series(&[2.0, 3.0, 4.0, 3.0, 2.0]))
            .unwrap();
        for t in 1..routed.len() {
            let rhs = routed[t - 1].inflow + routed[t].inflow
                + 2.0 * routed[t - 1].storage / dt
                - routed[t - 1].outflow;
            let lhs = 2.0 * routed[t].storage / dt + routed[t].outflow;
            assert!((lhs - rhs).abs() < 1e-9, "step {}: {} vs {}", t, lhs, rhs);
        }
    }

    #[test]
    fn constant_inflow_reaches_steady_state() {
        let inflows = vec![7.5; 200];
        let routed = Router::new(table()).route(&series(&inflows)).unwrap();
        let last = routed.last().unwrap();
        assert!((last.outflow - 7.5).abs() < 1e-6, "outflow {}", last.outflow);
        // o = 7.5 sits halfway between the top two rows, s follows suit
        assert!((last.storage - 13500.0).abs() < 1e-2, "storage {}", last.storage);
    }

    #[test]
    fn zero_inflow_drains_to_lowest_entry() {
        let mut inflows = vec![0.0, 60.0, 120.0, 60.0, 20.0];
        inflows.extend(vec![0.0; 150]);
        let routed = Router::new(table()).route(&series(&inflows)).unwrap();
        let last = routed.last().unwrap();
        assert!(last.outflow.abs() < 1e-9);
        assert!(last.storage.abs() < 1e-6);
    }

    #[test]
    fn rejects_short_series() {
        let err = InflowSeries::new(vec![Inflow {
            time: 0,
            inflow: 1.0,
        }])
        .unwrap_err();
        assert_eq!(
            RouteError::InputShape {
                what: "inflow series",
                len: 1
            },
            err
        );
    }

    #[test]
    fn rejects_unordered_timestamps() {
        let err = InflowSeries::new(vec![
            Inflow {
                time: 1800,
                inflow: 1.0,
            },
            Inflow {
                time: 1800,
                inflow: 2.0,
            },
        ])
        .unwrap_err();
        assert_eq!(RouteError::TimeStep { dt: 0.0 }, err);
    }

    #[test]
    fn reads_csv_series() {
        let path = std::env::temp_dir().join("levelpool_inflow_test.csv");
        std::fs::write(&path, "time,inflow\n0,0.0\n1800,79.2\n3600,212.5\n").unwrap();
        let series = InflowSeries::read(path.to_str().unwrap()).unwrap();
        assert_eq!(3, series.len());
        assert_eq!(1800.0, series.dt());
        assert_eq!(79.2, series.points()[1].inflow);
    }
}
