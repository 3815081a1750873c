//! Angular velocity over an event window

use crate::FeatureError;
use capture_data::{Axis, CaptureSession};
use serde::{Deserialize, Serialize};

/// Mean angular velocity with its spread over a window
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AngularVelocity {
    /// Mean of the per-step speeds, deg/s
    pub mean: f64,
    /// Population standard deviation of the per-step speeds, deg/s
    pub std_dev: f64,
}

/// Mean angular velocity of one rotation axis of a 3-axis angle column
/// over the window `[t1, t2)`.
///
/// Per-step speed is `|angle[i+1] - angle[i]| / (time[i+1] - time[i])`.
/// A constant signal yields zero mean; an empty or reversed window and
/// windows with fewer than two samples are errors.
pub fn angular_velocity(
    session: &CaptureSession,
    t1: f64,
    t2: f64,
    column: &str,
    axis: Axis,
) -> Result<AngularVelocity, FeatureError> {
    let range = session.window(t1, t2);
    if range.is_empty() {
        return Err(FeatureError::EmptyWindow { t1, t2 });
    }
    let angles: Vec<f64> = session.triple_column(column)?[range.clone()]
        .iter()
        .map(|p| p.component(axis))
        .collect();
    let times = &session.times()[range];

    if angles.len() < 2 {
        return Err(FeatureError::TooFewSamples {
            needed: 2,
            got: angles.len(),
        });
    }

    let speeds: Vec<f64> = angles
        .windows(2)
        .zip(times.windows(2))
        .map(|(a, t)| ((a[1] - a[0]) / (t[1] - t[0])).abs())
        .collect();

    let n = speeds.len() as f64;
    let mean = speeds.iter().sum::<f64>() / n;
    let variance = speeds.iter().map(|s| (s - mean) * (s - mean)).sum::<f64>() / n;

    Ok(AngularVelocity {
        mean,
        std_dev: variance.sqrt(),
    })
}
