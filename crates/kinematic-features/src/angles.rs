//! Naive joint angles from body points
//!
//! The angle at a joint is taken between the two limb vectors pointing at
//! its parent and child keypoints, via the dot product:
//! `cos(theta) = u1 . u2` for unit vectors u1, u2.

use crate::FeatureError;
use capture_data::{CaptureSession, Column, Point3};
use tracing::debug;

/// Angle in degrees at `joint` between the vectors to `parent` and `child`.
///
/// 180 means the limb chain is fully extended. A zero-length limb vector
/// (coincident keypoints) is an error.
pub fn joint_angle(parent: Point3, joint: Point3, child: Point3) -> Result<f64, FeatureError> {
    let u1 = (parent - joint)
        .unit()
        .ok_or(FeatureError::DegenerateVector)?;
    let u2 = (child - joint)
        .unit()
        .ok_or(FeatureError::DegenerateVector)?;
    // Clamp against rounding drift outside [-1, 1]
    Ok(u1.dot(&u2).clamp(-1.0, 1.0).acos().to_degrees())
}

/// Compute the naive joint angle per row and append it to the session as
/// the scalar column `<joint>_angle`.
pub fn annotate_joint_angles(
    session: &mut CaptureSession,
    parent: &str,
    joint: &str,
    child: &str,
) -> Result<(), FeatureError> {
    let angles: Vec<f64> = {
        let parents = session.triple_column(parent)?;
        let joints = session.triple_column(joint)?;
        let children = session.triple_column(child)?;
        parents
            .iter()
            .zip(joints)
            .zip(children)
            .map(|((&p, &j), &c)| joint_angle(p, j, c))
            .collect::<Result<_, _>>()?
    };

    let name = format!("{joint}_angle");
    debug!(column = %name, rows = angles.len(), "annotated naive joint angles");
    session.insert_column(name, Column::Scalar(angles))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use capture_data::CaptureSession;

    #[test]
    fn test_straight_limb_is_180_degrees() {
        let shoulder = Point3::new(0.0, 0.0, 0.0);
        let elbow = Point3::new(0.5, 0.0, 0.0);
        let wrist = Point3::new(1.0, 0.0, 0.0);
        let angle = joint_angle(shoulder, elbow, wrist).unwrap();
        assert!((angle - 180.0).abs() < 1e-9);
    }

    #[test]
    fn test_right_angle_limb() {
        let shoulder = Point3::new(0.0, 0.0, 0.0);
        let elbow = Point3::new(0.5, 0.0, 0.0);
        let wrist = Point3::new(0.5, 0.5, 0.0);
        let angle = joint_angle(shoulder, elbow, wrist).unwrap();
        assert!((angle - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_coincident_points_are_degenerate() {
        let p = Point3::new(1.0, 1.0, 1.0);
        let err = joint_angle(p, p, Point3::new(2.0, 0.0, 0.0)).unwrap_err();
        assert!(matches!(err, FeatureError::DegenerateVector));
    }

    #[test]
    fn test_annotate_appends_scalar_column() {
        let mut session = CaptureSession::new(vec![0.0, 0.1]);
        session
            .insert_column(
                "point_5".into(),
                Column::Triple(vec![Point3::new(0.0, 0.0, 0.0); 2]),
            )
            .unwrap();
        session
            .insert_column(
                "point_7".into(),
                Column::Triple(vec![Point3::new(1.0, 0.0, 0.0); 2]),
            )
            .unwrap();
        session
            .insert_column(
                "point_9".into(),
                Column::Triple(vec![Point3::new(1.0, 1.0, 0.0); 2]),
            )
            .unwrap();

        annotate_joint_angles(&mut session, "point_5", "point_7", "point_9").unwrap();

        let angles = session.scalar_column("point_7_angle").unwrap();
        assert_eq!(angles.len(), 2);
        assert!((angles[0] - 90.0).abs() < 1e-9);
    }
}
