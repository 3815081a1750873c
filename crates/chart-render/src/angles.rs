//! Per-joint angle trace charts

use crate::{render_err, ChartError};
use capture_data::{Axis, CaptureSession};
use kinematic_features::FeatureError;
use plotters::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

const SERIES_COLORS: [RGBColor; 3] = [RED, GREEN, BLUE];
const MARKER_COLORS: [RGBColor; 2] = [RGBColor(128, 128, 128), RED];

/// Joint kind inferred from a column name; selects the per-axis legend labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JointKind {
    Shoulder,
    Elbow,
    Trunk,
    Other,
}

impl JointKind {
    /// Infer the joint kind from an angle column name
    pub fn from_name(name: &str) -> Self {
        if name.contains("trunk") {
            JointKind::Trunk
        } else if name.contains("shoulder") {
            JointKind::Shoulder
        } else if name.contains("elbow") {
            JointKind::Elbow
        } else {
            JointKind::Other
        }
    }

    /// Legend labels for the x, y, z rotation axes
    pub fn axis_labels(self) -> [&'static str; 3] {
        match self {
            JointKind::Shoulder => [
                "Rotation around x-axis (flexion)",
                "Rotation around y-axis",
                "Rotation around z-axis (abduction)",
            ],
            JointKind::Elbow => [
                "Rotation around x-axis",
                "Rotation around y-axis",
                "Rotation around z-axis (flexion)",
            ],
            JointKind::Trunk => [
                "Rotation around x-axis (flexion)",
                "Rotation around y-axis",
                "Rotation around z-axis (lateral flexion)",
            ],
            JointKind::Other => [
                "Rotation around x-axis",
                "Rotation around y-axis",
                "Rotation around z-axis",
            ],
        }
    }
}

/// A labeled vertical marker on the time axis (e.g. ball release)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventMarker {
    /// Marker time in seconds
    pub time: f64,
    /// Legend label
    pub label: String,
}

/// Angle trace chart: the three rotation axes of one joint over an event window.
///
/// The y axis is inverted (angle increases downward), matching the capture
/// convention.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AngleChart {
    /// Name of the 3-axis angle column to plot
    pub joint: String,
    /// Event description used in the chart title
    pub event: String,
    /// Optional vertical markers; the first two render grey and red dashed
    pub markers: Vec<EventMarker>,
    /// Output size in pixels
    pub size: (u32, u32),
}

impl AngleChart {
    /// Chart for one joint during an event
    pub fn new(joint: impl Into<String>, event: impl Into<String>) -> Self {
        Self {
            joint: joint.into(),
            event: event.into(),
            markers: Vec::new(),
            size: (960, 400),
        }
    }

    /// Add a labeled vertical marker
    pub fn with_marker(mut self, time: f64, label: impl Into<String>) -> Self {
        self.markers.push(EventMarker {
            time,
            label: label.into(),
        });
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
        let range = session.window(t1, t2);
        if range.is_empty() {
            return Err(FeatureError::EmptyWindow { t1, t2 }.into());
        }

        let times = &session.times()[range.clone()];
        let angles = &session.triple_column(&self.joint)?[range];
        let labels = JointKind::from_name(&self.joint).axis_labels();

        let t_min = times[0];
        let t_max = *times.last().unwrap_or(&t_min);
        let (y_min, y_max) = angles
            .iter()
            .flat_map(|p| Axis::ALL.map(|a| p.component(a)))
            .fold((f64::MAX, f64::MIN), |(lo, hi), v| (lo.min(v), hi.max(v)));
        let pad = ((y_max - y_min) * 0.05).max(1.0);

        debug!(joint = %self.joint, samples = times.len(), "rendering angle chart");

        let root = SVGBackend::new(path.as_ref(), self.size).into_drawing_area();
        root.fill(&WHITE).map_err(render_err)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(
                format!("{} when {}", self.joint, self.event),
                ("sans-serif", 22),
            )
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(55)
            // Inverted y axis: larger angles render lower
            .build_cartesian_2d(t_min..t_max, (y_max + pad)..(y_min - pad))
            .map_err(render_err)?;

        chart
            .configure_mesh()
            .x_desc("Time [s]")
            .y_desc("Angle [deg]")
            .draw()
            .map_err(render_err)?;

        for (axis, (color, label)) in Axis::ALL.iter().zip(SERIES_COLORS.iter().zip(labels)) {
            let series: Vec<(f64, f64)> = times
                .iter()
                .zip(angles)
                .map(|(&t, p)| (t, p.component(*axis)))
                .collect();
            let color = *color;
            chart
                .draw_series(LineSeries::new(series, &color))
                .map_err(render_err)?
                .label(label)
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
        }

        for (marker, &color) in self.markers.iter().zip(MARKER_COLORS.iter().cycle()) {
            let line = [(marker.time, y_max + pad), (marker.time, y_min - pad)];
            chart
                .draw_series(DashedLineSeries::new(line, 6, 4, color.stroke_width(1)))
                .map_err(render_err)?
                .label(marker.label.clone())
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
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
