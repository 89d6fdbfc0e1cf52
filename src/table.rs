//! Tabulated elevation-storage-outflow relationships and the derived
//! storage-plus-half-outflow curve used by the routing recurrence.
use crate::errors::RouteError;
use crate::interp;
use log::warn;
use rayon::prelude::*;
use std::fs;

/// Tabulated elevation-storage-outflow relationship for a reservoir.
///
/// Rows are sorted ascending by elevation; the constructor rejects tables
/// whose elevation column is not strictly increasing.  Storage and outflow
/// are expected to be non-decreasing in elevation for the routing recurrence
/// to be well defined, but a dip there only draws a warning since the
/// interpolation itself stays valid.
#[derive(Debug, Clone)]
pub struct EsoTable {
    z: Vec<f64>,
    s: Vec<f64>,
    o: Vec<f64>,
}

impl EsoTable {
    /// Build a relationship table from `(elevation, storage, outflow)` rows.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use levelpool::prelude::*;
    /// let table = EsoTable::new(&[(0.0, 0.0, 0.0), (1.0, 10.0, 5.0), (2.0, 20.0, 10.0)])?;
    /// # Ok::<(), RouteError>(())
    /// ```
    pub fn new(rows: &[(f64, f64, f64)]) -> Result<Self, RouteError> {
        if rows.len() < 2 {
            return Err(RouteError::InputShape {
                what: "relationship table",
                len: rows.len(),
            });
        }
        let z: Vec<f64> = rows.iter().map(|r| r.0).collect();
        let s: Vec<f64> = rows.iter().map(|r| r.1).collect();
        let o: Vec<f64> = rows.iter().map(|r| r.2).collect();
        for i in 1..z.len() {
            if z[i] <= z[i - 1] {
                return Err(RouteError::Monotonicity {
                    row: i,
                    value: z[i],
                });
            }
            if s[i] < s[i - 1] {
                warn!("storage column decreases at row {} ({})", i, s[i]);
            }
            if o[i] < o[i - 1] {
                warn!("outflow column decreases at row {} ({})", i, o[i]);
            }
        }
        Ok(EsoTable { z, s, o })
    }

    /// Read a relationship table from a whitespace-delimited text file with
    /// one header line followed by rows of elevation, storage and outflow.
    pub fn read(path: &str) -> Result<Self, RouteError> {
        let raw = fs::read_to_string(path)?;
        let mut rows = Vec::new();
        for (ln, line) in raw.lines().enumerate().skip(1) {
            if line.trim().is_empty() {
                continue;
            }
            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.len() != 3 {
                return Err(RouteError::Parse(format!(
                    "line {}: expected 3 columns, got {}",
                    ln + 1,
                    fields.len()
                )));
            }
            let mut row = [0.0; 3];
            for (col, field) in fields.iter().enumerate() {
                row[col] = field
                    .parse::<f64>()
                    .map_err(|e| RouteError::Parse(format!("line {}: {}", ln + 1, e)))?;
            }
            rows.push((row[0], row[1], row[2]));
        }
        EsoTable::new(&rows)
    }

    /// Number of rows in the table.
    pub fn len(&self) -> usize {
        self.z.len()
    }

    /// True when the table holds no rows.
    pub fn is_empty(&self) -> bool {
        self.z.is_empty()
    }

    /// The elevation column.
    pub fn elevations(&self) -> &[f64] {
        &self.z
    }

    /// The storage column.
    pub fn storages(&self) -> &[f64] {
        &self.s
    }

    /// The outflow column.
    pub fn outflows(&self) -> &[f64] {
        &self.o
    }

    /// Storage at a water surface elevation, by linear interpolation.
    pub fn storage_at(&self, elevation: f64) -> Result<f64, RouteError> {
        interp::interpolate(elevation, &self.z, &self.s)
    }

    /// Outflow at a water surface elevation, by linear interpolation.
    pub fn outflow_at(&self, elevation: f64) -> Result<f64, RouteError> {
        interp::interpolate(elevation, &self.z, &self.o)
    }

    /// Build the derived lookup curve for a routing time step of `dt` seconds.
    pub fn derived(&self, dt: f64) -> Result<DerivedCurve, RouteError> {
        DerivedCurve::build(self, dt)
    }
}

/// The storage-plus-half-outflow curve `k = 2s/dt + o`, the lookup axis that
/// turns the implicit mass-balance equation into a direct table lookup.
///
/// Built once per routing run; `k` is non-decreasing in the source row order
/// whenever the storage and outflow columns are.
#[derive(Debug, Clone)]
pub struct DerivedCurve {
    k: Vec<f64>,
    s: Vec<f64>,
    o: Vec<f64>,
}

impl DerivedCurve {
    /// Derive the curve from a relationship table and a time step in seconds.
    /// The transform is row-wise and order preserving.
    pub fn build(table: &EsoTable, dt: f64) -> Result<Self, RouteError> {
        if !(dt > 0.0) {
            return Err(RouteError::TimeStep { dt });
        }
        let k: Vec<f64> = table
            .s
            .par_iter()
            .zip(table.o.par_iter())
            .map(|(s, o)| 2.0 * s / dt + o)
            .collect();
        Ok(DerivedCurve {
            k,
            s: table.s.clone(),
            o: table.o.clone(),
        })
    }

    /// The `2s/dt + o` lookup axis.
    pub fn knots(&self) -> &[f64] {
        &self.k
    }

    /// Outflow for a value of `2s/dt + o`, by linear interpolation.
    pub fn outflow_at(&self, k: f64) -> Result<f64, RouteError> {
        interp::interpolate(k, &self.k, &self.o)
    }

    /// Storage for a value of `2s/dt + o`, by linear interpolation.
    pub fn storage_at(&self, k: f64) -> Result<f64, RouteError> {
        interp::interpolate(k, &self.k, &self.s)
    }
}
