//! Range of motion

use crate::FeatureError;
use capture_data::{Axis, CaptureSession};

/// Range of motion of an angle signal over the window `[t1, t2)`: max minus min.
///
/// `axis` selects one rotation axis of a 3-axis angle column; `None` reads a
/// scalar column (e.g. a naive joint angle).
pub fn range_of_motion(
    session: &CaptureSession,
    t1: f64,
    t2: f64,
    column: &str,
    axis: Option<Axis>,
) -> Result<f64, FeatureError> {
    let range = session.window(t1, t2);
    if range.is_empty() {
        return Err(FeatureError::EmptyWindow { t1, t2 });
    }

    let values: Vec<f64> = match axis {
        Some(axis) => session.triple_column(column)?[range]
            .iter()
            .map(|p| p.component(axis))
            .collect(),
        None => session.scalar_column(column)?[range].to_vec(),
    };

    let max = values.iter().cloned().fold(f64::MIN, f64::max);
    let min = values.iter().cloned().fold(f64::MAX, f64::min);
    Ok(max - min)
}
