//! Keypoint string parsing
//!
//! Capture exports store each frame as a flat bracketed list of floats,
//! four values per landmark (x, y, z, detector confidence).

use crate::{CaptureError, Point3};
use tracing::trace;

/// Number of tracked body landmarks per frame
pub const BODY_KEYPOINTS: usize = 17;

/// Values encoded per landmark: x, y, z, confidence
const VALUES_PER_KEYPOINT: usize = 4;

/// The 17 body keypoints of one sampled timestep
pub type KeypointFrame = [Point3; BODY_KEYPOINTS];

fn split_floats(raw: &str) -> Result<Vec<f64>, CaptureError> {
    raw.replace(['[', ']'], "")
        .split(',')
        .map(|tok| {
            let tok = tok.trim();
            tok.parse::<f64>()
                .map_err(|_| CaptureError::InvalidFloat(tok.to_string()))
        })
        .collect()
}

/// Parse a string-encoded keypoint frame into 17 body points.
///
/// The per-landmark confidence value is dropped; only x, y, z are kept.
pub fn parse_keypoint_frame(raw: &str) -> Result<KeypointFrame, CaptureError> {
    let values = split_floats(raw)?;
    let expected = BODY_KEYPOINTS * VALUES_PER_KEYPOINT;
    if values.len() != expected {
        return Err(CaptureError::WrongValueCount {
            expected,
            actual: values.len(),
        });
    }

    let mut frame = [Point3::default(); BODY_KEYPOINTS];
    for (point, chunk) in frame.iter_mut().zip(values.chunks_exact(VALUES_PER_KEYPOINT)) {
        *point = Point3::new(chunk[0], chunk[1], chunk[2]);
    }
    trace!("parsed keypoint frame with {} landmarks", BODY_KEYPOINTS);
    Ok(frame)
}

/// Parse a string-encoded 3-axis angle triple, e.g. `"[12.0, -3.5, 88.1]"`.
pub fn parse_angle_triple(raw: &str) -> Result<Point3, CaptureError> {
    let values = split_floats(raw)?;
    if values.len() != 3 {
        return Err(CaptureError::WrongValueCount {
            expected: 3,
            actual: values.len(),
        });
    }
    Ok(Point3::new(values[0], values[1], values[2]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame_string() -> String {
        // 17 landmarks, landmark i at (i, i+0.5, -i) with confidence 0.9
        let values: Vec<String> = (0..BODY_KEYPOINTS)
            .flat_map(|i| {
                let i = i as f64;
                vec![
                    format!("{:.1}", i),
                    format!("{:.1}", i + 0.5),
                    format!("{:.1}", -i),
                    "0.9".to_string(),
                ]
            })
            .collect();
        format!("[{}]", values.join(", "))
    }

    #[test]
    fn test_parse_known_frame() {
        let frame = parse_keypoint_frame(&frame_string()).unwrap();
        assert_eq!(frame.len(), BODY_KEYPOINTS);
        assert_eq!(frame[0], Point3::new(0.0, 0.5, 0.0));
        assert_eq!(frame[16], Point3::new(16.0, 16.5, -16.0));
    }

    #[test]
    fn test_confidence_is_discarded() {
        let frame = parse_keypoint_frame(&frame_string()).unwrap();
        // No component of any parsed point carries the 0.9 confidence
        for point in &frame {
            assert_ne!(point.x, 0.9);
            assert_ne!(point.y, 0.9);
            assert_ne!(point.z, 0.9);
        }
    }

    #[test]
    fn test_wrong_value_count() {
        let err = parse_keypoint_frame("[1.0, 2.0, 3.0]").unwrap_err();
        assert!(matches!(
            err,
            CaptureError::WrongValueCount { expected: 68, actual: 3 }
        ));
    }

    #[test]
    fn test_malformed_float() {
        let err = parse_keypoint_frame("[1.0, oops, 3.0, 0.9]").unwrap_err();
        assert!(matches!(err, CaptureError::InvalidFloat(_)));
    }

    #[test]
    fn test_parse_angle_triple() {
        let p = parse_angle_triple("[12.0, -3.5, 88.1]").unwrap();
        assert_eq!(p, Point3::new(12.0, -3.5, 88.1));
    }

    #[test]
    fn test_angle_triple_wrong_count() {
        assert!(parse_angle_triple("[1.0, 2.0]").is_err());
    }
}
