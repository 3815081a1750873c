//! Diagnostic Chart Rendering
//!
//! Renders capture-session diagnostics as SVG charts:
//! - Per-joint 3-axis angle traces over an event window
//! - Average joint velocity summaries across all angle columns

pub mod angles;
pub mod velocities;

pub use angles::{AngleChart, EventMarker, JointKind};
pub use velocities::{collect_velocities, JointVelocitySeries, VelocityChart};

use capture_data::CaptureError;
use kinematic_features::FeatureError;
use thiserror::Error;

/// Chart rendering error types
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("chart rendering failed: {0}")]
    Render(String),

    #[error("session has no 3-axis angle columns")]
    NoAngleColumns,

    #[error(transparent)]
    Feature(#[from] FeatureError),

    #[error(transparent)]
    Capture(#[from] CaptureError),
}

pub(crate) fn render_err<E: std::fmt::Display>(err: E) -> ChartError {
    ChartError::Render(err.to_string())
}
