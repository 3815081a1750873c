//! Trajectory distance features

use crate::FeatureError;
use capture_data::CaptureSession;

/// Total distance travelled by one point column across the window `[t1, t2)`,
/// summed over consecutive samples. A single-sample window covers no distance.
pub fn path_length(
    session: &CaptureSession,
    t1: f64,
    t2: f64,
    column: &str,
) -> Result<f64, FeatureError> {
    let range = session.window(t1, t2);
    if range.is_empty() {
        return Err(FeatureError::EmptyWindow { t1, t2 });
    }
    let points = &session.triple_column(column)?[range];
    Ok(points
        .windows(2)
        .map(|pair| pair[0].distance(&pair[1]))
        .sum())
}

/// Straight-line distance between the positions at the two window endpoints.
pub fn displacement(
    session: &CaptureSession,
    t1: f64,
    t2: f64,
    column: &str,
) -> Result<f64, FeatureError> {
    if session.is_empty() {
        return Err(FeatureError::EmptyWindow { t1, t2 });
    }
    let points = session.triple_column(column)?;
    let a = points[session.nearest_index(t1)];
    let b = points[session.nearest_index(t2)];
    Ok(a.distance(&b))
}

/// Absolute time span between the two resolved window endpoints.
pub fn window_duration(session: &CaptureSession, t1: f64, t2: f64) -> Result<f64, FeatureError> {
    if session.is_empty() {
        return Err(FeatureError::EmptyWindow { t1, t2 });
    }
    let times = session.times();
    Ok((times[session.nearest_index(t1)] - times[session.nearest_index(t2)]).abs())
}
