//! In-memory capture session table

use crate::{CaptureError, KeypointFrame, Point3};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ops::Range;
use tracing::debug;

/// A named time-series column
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Column {
    /// One 3D point or 3-axis angle triple per row
    Triple(Vec<Point3>),
    /// One scalar value per row (e.g. a derived joint angle)
    Scalar(Vec<f64>),
}

impl Column {
    /// Number of rows in the column
    pub fn len(&self) -> usize {
        match self {
            Column::Triple(rows) => rows.len(),
            Column::Scalar(rows) => rows.len(),
        }
    }

    /// Whether the column has no rows
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn kind(&self) -> &'static str {
        match self {
            Column::Triple(_) => "triple",
            Column::Scalar(_) => "scalar",
        }
    }
}

/// One capture recording: a sample-time vector plus named columns.
///
/// All columns have exactly one row per sampled timestep. Rows have no
/// identity beyond their order; the session lives in memory for a single
/// analysis pass.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CaptureSession {
    times: Vec<f64>,
    columns: BTreeMap<String, Column>,
}

impl CaptureSession {
    /// Create an empty session over the given sample times (seconds)
    pub fn new(times: Vec<f64>) -> Self {
        Self {
            times,
            columns: BTreeMap::new(),
        }
    }

    /// Build a session from parsed keypoint frames.
    ///
    /// Landmark `i` across all frames becomes the triple column `point_i`,
    /// mirroring the layout of the capture export.
    pub fn from_keypoint_frames(
        times: Vec<f64>,
        frames: &[KeypointFrame],
    ) -> Result<Self, CaptureError> {
        let mut session = Self::new(times);
        let n_points = frames.first().map_or(0, |f| f.len());
        for i in 0..n_points {
            let rows: Vec<Point3> = frames.iter().map(|frame| frame[i]).collect();
            session.insert_column(format!("point_{i}"), Column::Triple(rows))?;
        }
        debug!(
            rows = session.len(),
            columns = n_points,
            "built session from keypoint frames"
        );
        Ok(session)
    }

    /// Number of sampled timesteps
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Whether the session has no rows
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Sample times in seconds
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Names of all columns, in sorted order
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    /// Add a column; its row count must match the session
    pub fn insert_column(&mut self, name: String, column: Column) -> Result<(), CaptureError> {
        if column.len() != self.times.len() {
            return Err(CaptureError::LengthMismatch {
                name,
                rows: column.len(),
                expected: self.times.len(),
            });
        }
        self.columns.insert(name, column);
        Ok(())
    }

    /// Look up a column by name
    pub fn column(&self, name: &str) -> Result<&Column, CaptureError> {
        self.columns
            .get(name)
            .ok_or_else(|| CaptureError::UnknownColumn(name.to_string()))
    }

    /// Look up a triple column by name
    pub fn triple_column(&self, name: &str) -> Result<&[Point3], CaptureError> {
        match self.column(name)? {
            Column::Triple(rows) => Ok(rows),
            other => Err(CaptureError::ColumnKind {
                name: name.to_string(),
                expected: "triple",
                actual: other.kind(),
            }),
        }
    }

    /// Look up a scalar column by name
    pub fn scalar_column(&self, name: &str) -> Result<&[f64], CaptureError> {
        match self.column(name)? {
            Column::Scalar(rows) => Ok(rows),
            other => Err(CaptureError::ColumnKind {
                name: name.to_string(),
                expected: "scalar",
                actual: other.kind(),
            }),
        }
    }

    /// Index of the row whose sample time is closest to `t`.
    ///
    /// Ties break to the earlier row. Returns 0 for an empty session.
    pub fn nearest_index(&self, t: f64) -> usize {
        let mut best = 0;
        let mut best_dist = f64::INFINITY;
        for (i, &time) in self.times.iter().enumerate() {
            let dist = (time - t).abs();
            if dist < best_dist {
                best = i;
                best_dist = dist;
            }
        }
        best
    }

    /// Half-open row range covering the event window `[t1, t2)`.
    ///
    /// Both endpoints resolve through [`nearest_index`](Self::nearest_index);
    /// a reversed or out-of-capture window yields an empty range.
    pub fn window(&self, t1: f64, t2: f64) -> Range<usize> {
        self.nearest_index(t1)..self.nearest_index(t2)
    }
}
