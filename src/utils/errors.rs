use std::fmt;
use std::error::Error;
use std::io;

/// Represents errors that can occur while loading or integrating a cluster.
#[derive(Debug, Clone, PartialEq)]
pub enum NBodyError {
    /// No bodies were supplied; an empty cluster has no meaningful energy baseline.
    EmptyCluster,
    /// Indicates an invalid mass value (zero, negative or non-finite) for the body at `index`.
    InvalidMass { index: usize },
    /// The time step must be finite and strictly positive.
    InvalidTimeStep,
    /// The stop time must be finite.
    InvalidStopTime,
    /// The energy report period must be at least one step.
    InvalidReportPeriod,
    /// A generator parameter is out of range.
    InvalidParameter { name: &'static str },
    /// A token of an input record could not be parsed.
    Parse {
        record: usize,
        field: &'static str,
        message: String,
    },
    /// Reading initial conditions or writing reports failed.
    Io(String),
    /// A driver operation was called in the wrong lifecycle state.
    InvalidState {
        expected: &'static str,
        found: &'static str,
    },
}

impl fmt::Display for NBodyError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            NBodyError::EmptyCluster => write!(f, "Cluster contains no bodies"),
            NBodyError::InvalidMass { index } => write!(f, "Invalid mass value for body {}", index),
            NBodyError::InvalidTimeStep => write!(f, "Invalid time step value"),
            NBodyError::InvalidStopTime => write!(f, "Invalid stop time value"),
            NBodyError::InvalidReportPeriod => write!(f, "Invalid report period value"),
            NBodyError::InvalidParameter { name } => write!(f, "Invalid value for parameter {}", name),
            NBodyError::Parse { record, field, message } => {
                write!(f, "Parse error in record {} ({}): {}", record, field, message)
            }
            NBodyError::Io(msg) => write!(f, "I/O error: {}", msg),
            NBodyError::InvalidState { expected, found } => {
                write!(f, "Invalid driver state: expected {}, found {}", expected, found)
            }
        }
    }
}

impl Error for NBodyError {}

impl From<io::Error> for NBodyError {
    fn from(err: io::Error) -> Self {
        NBodyError::Io(err.to_string())
    }
}
