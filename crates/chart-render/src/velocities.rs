//! Joint velocity summary charts

use crate::{render_err, ChartError};
use capture_data::{Axis, CaptureSession};
use kinematic_features::{angular_velocity, AngularVelocity};
use plotters::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

const AXIS_COLORS: [RGBColor; 3] = [RED, GREEN, BLUE];
const AXIS_LABELS: [&str; 3] = [
    "Rotation around x-axis",
    "Rotation around y-axis",
    "Rotation around z-axis",
];

/// Average angular velocity of one joint, per rotation axis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JointVelocitySeries {
    /// Angle column name
    pub joint: String,
    /// Velocities for the x, y, z axes
    pub per_axis: [AngularVelocity; 3],
}

/// Gather average angular velocities for every 3-axis angle column in the
/// session (column names containing `angles`) over the window `[t1, t2)`.
pub fn collect_velocities(
    session: &CaptureSession,
    t1: f64,
    t2: f64,
) -> Result<Vec<JointVelocitySeries>, ChartError> {
    let names: Vec<String> = session
        .column_names()
        .filter(|name| name.contains("angles"))
        .map(str::to_string)
        .collect();
    if names.is_empty() {
        return Err(ChartError::NoAngleColumns);
    }

    let mut series = Vec::with_capacity(names.len());
    for joint in names {
        let mut per_axis = [AngularVelocity::default(); 3];
        for (slot, axis) in per_axis.iter_mut().zip(Axis::ALL) {
            *slot = angular_velocity(session, t1, t2, &joint, axis)?;
        }
        series.push(JointVelocitySeries { joint, per_axis });
    }
    debug!(joints = series.len(), "collected joint velocities");
    Ok(series)
}

/// Summary chart of average joint velocities across all angle columns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VelocityChart {
    /// Event description used in the chart title
    pub event: String,
    /// Draw one-standard-deviation error bars instead of plain markers
    pub with_error: bool,
    /// Output size in pixels
    pub size: (u32, u32),
}

impl VelocityChart {
    /// Chart of all joint velocities during an event
    pub fn new(event: impl Into<String>) -> Self {
        Self {
            event: event.into(),
            with_error: false,
            size: (1200, 480),
        }
    }

    /// Enable error bars (one standard deviation)
    pub fn with_error_bars(mut self) -> Self {
        self.with_error = true;
        self
    }

    /// Render the chart over the window `[t1, t2)` into an SVG file
    pub fn render<P: AsRef<Path>>(
        &self,
        session: &CaptureSession,
        t1: f64,
        t2: f64,
        path: P,
    ) -> Result<(), ChartError> {
        let series = collect_velocities(session, t1, t2)?;
        let names: Vec<String> = series.iter().map(|s| s.joint.clone()).collect();

        let y_max = series
            .iter()
            .flat_map(|s| s.per_axis.iter())
            .map(|v| if self.with_error { v.mean + v.std_dev } else { v.mean })
            .fold(f64::MIN, f64::max)
            .max(1.0);

        let root = SVGBackend::new(path.as_ref(), self.size).into_drawing_area();
        root.fill(&WHITE).map_err(render_err)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(
                format!("Average joint velocities when {}", self.event),
                ("sans-serif", 22),
            )
            .margin(10)
            .x_label_area_size(60)
            .y_label_area_size(60)
            .build_cartesian_2d(-0.5..(series.len() as f64 - 0.5), 0.0..(y_max * 1.1))
            .map_err(render_err)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(series.len())
            .x_label_formatter(&|x| {
                let idx = x.round();
                if idx < 0.0 || (x - idx).abs() > 1e-6 {
                    return String::new();
                }
                names.get(idx as usize).cloned().unwrap_or_default()
            })
            .y_desc("Average joint velocities [deg/s]")
            .draw()
            .map_err(render_err)?;

        for (axis_idx, (&color, label)) in AXIS_COLORS.iter().zip(AXIS_LABELS).enumerate() {
            if self.with_error {
                chart
                    .draw_series(series.iter().enumerate().map(|(i, s)| {
                        let v = s.per_axis[axis_idx];
                        ErrorBar::new_vertical(
                            i as f64,
                            v.mean - v.std_dev,
                            v.mean,
                            v.mean + v.std_dev,
                            color.stroke_width(1),
                            8,
                        )
                    }))
                    .map_err(render_err)?
                    .label(label)
                    .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
            } else {
                chart
                    .draw_series(series.iter().enumerate().map(|(i, s)| {
                        Circle::new((i as f64, s.per_axis[axis_idx].mean), 4, color.filled())
                    }))
                    .map_err(render_err)?
                    .label(label)
                    .legend(move |(x, y)| Circle::new((x + 10, y), 4, color.filled()));
            }
        }

        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()
            .map_err(render_err)?;

        root.present().map_err(render_err)?;
        Ok(())
    }
}
