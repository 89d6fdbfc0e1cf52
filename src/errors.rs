//! Error types for routing runs.

/// Custom error type for the levelpool crate.
///
/// Every failure aborts the routing run in progress.  The recurrence is
/// sequential and stateful, so a corrupted step would poison all later
/// steps; there is no retry or partial output.
#[derive(Debug, PartialEq)]
pub enum RouteError {
    /// Table or series has too few entries to route.
    InputShape {
        /// Which input was too short.
        what: &'static str,
        /// Number of entries received.
        len: usize,
    },
    /// Elevation column fails to increase at a row.
    Monotonicity {
        /// Index of the offending row.
        row: usize,
        /// Elevation value that failed to increase.
        value: f64,
    },
    /// Repeated reference point makes an interpolation denominator zero.
    Degenerate {
        /// Index of the repeated knot.
        index: usize,
        /// The repeated reference value.
        value: f64,
    },
    /// Non-positive time step between consecutive observations.
    TimeStep {
        /// The offending time difference in seconds.
        dt: f64,
    },
    /// Malformed numeric field in an input file.
    Parse(String),
    /// Error type from csv crate.
    CsvError,
    /// Error type from std::io.
    IoError,
}

impl std::error::Error for RouteError {}

impl std::fmt::Display for RouteError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            RouteError::InputShape { what, len } => {
                write!(f, "The {} needs at least 2 entries, got {}.", what, len)
            }
            RouteError::Monotonicity { row, value } => write!(
                f,
                "Elevation column must be strictly increasing, row {} has {}.",
                row, value
            ),
            RouteError::Degenerate { index, value } => write!(
                f,
                "Reference points at index {} repeat the value {}, interpolation is undefined.",
                index, value
            ),
            RouteError::TimeStep { dt } => {
                write!(f, "Time step must be positive, got {} s.", dt)
            }
            RouteError::Parse(msg) => write!(f, "Could not parse input: {}", msg),
            RouteError::CsvError => write!(f, "Could not serialize/deserialize csv file."),
            RouteError::IoError => write!(f, "Could not read file from path provided."),
        }
    }
}

impl From<csv::Error> for RouteError {
    fn from(_: csv::Error) -> Self {
        RouteError::CsvError
    }
}

impl From<std::io::Error> for RouteError {
    fn from(_: std::io::Error) -> Self {
        RouteError::IoError
    }
}

impl From<std::num::ParseFloatError> for RouteError {
    fn from(err: std::num::ParseFloatError) -> Self {
        RouteError::Parse(err.to_string())
    }
}

impl From<std::num::ParseIntError> for RouteError {
    fn from(err: std::num::ParseIntError) -> Self {
        RouteError::Parse(err.to_string())
    }
}
