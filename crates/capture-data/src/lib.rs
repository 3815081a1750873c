//! Motion-Capture Session Data
//!
//! Turns raw capture exports into in-memory time-series tables:
//! - Keypoint string parsing (17 body landmarks per frame)
//! - Named point/angle columns indexed by sample time
//! - Nearest-time-index lookup for event windows
//! - CSV session loading

pub mod loader;
mod parse;
mod point;
mod session;

pub use parse::{parse_angle_triple, parse_keypoint_frame, KeypointFrame, BODY_KEYPOINTS};
pub use point::{Axis, Point3};
pub use session::{CaptureSession, Column};

use thiserror::Error;

/// Errors raised while building or querying a capture session
#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("invalid float value `{0}` in point list")]
    InvalidFloat(String),

    #[error("point list has {actual} values, expected {expected}")]
    WrongValueCount { expected: usize, actual: usize },

    #[error("unknown column: {0}")]
    UnknownColumn(String),

    #[error("column {name} holds {actual} data, expected {expected}")]
    ColumnKind {
        name: String,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("column {name} has {rows} rows, session has {expected}")]
    LengthMismatch {
        name: String,
        rows: usize,
        expected: usize,
    },

    #[error("missing required column: {0}")]
    MissingColumn(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
