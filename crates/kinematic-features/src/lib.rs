//! Kinematic Feature Extraction
//!
//! Windowed features over a capture session:
//! - Naive joint angles from three body points
//! - Mean angular velocity per rotation axis
//! - Trajectory path length and straight-line displacement
//! - Range of motion

pub mod angles;
pub mod rom;
pub mod trajectory;
pub mod velocity;

pub use angles::{annotate_joint_angles, joint_angle};
pub use rom::range_of_motion;
pub use trajectory::{displacement, path_length, window_duration};
pub use velocity::{angular_velocity, AngularVelocity};

use capture_data::CaptureError;
use thiserror::Error;

/// Feature extraction error types
#[derive(Debug, Error)]
pub enum FeatureError {
    #[error("time window [{t1}, {t2}] resolves to no samples")]
    EmptyWindow { t1: f64, t2: f64 },

    #[error("window holds {got} samples, need at least {needed}")]
    TooFewSamples { needed: usize, got: usize },

    #[error("zero-length limb vector, joint angle undefined")]
    DegenerateVector,

    #[error(transparent)]
    Capture(#[from] CaptureError),
}
