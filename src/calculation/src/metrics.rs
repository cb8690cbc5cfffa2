//! Summary figures for a computed flight path.
//!
//! These back the textual readouts shown next to a diagram (estimated
//! distance, how far the disc drifts either way) and let callers check
//! whether a path stays on its canvas.

use std::collections::HashMap;

use crate::bezier::CubicBezier;
use crate::constants::CanvasConfig;
use crate::disc::{FlightNumbers, ReleaseAngle, Stability, ThrowStyle};
use crate::engine::{PathGeometry, build_path, validate_canvas};
use crate::error::InvalidInputError;

/// Samples taken along the curve for excursion and length figures.
pub const METRIC_SAMPLES: usize = 64;

/// Derived figures of one rendered path.
#[derive(Debug, Clone, PartialEq)]
pub struct PathMetrics {
    /// Throw style the path was computed for
    pub style: ThrowStyle,
    /// Release angle the path was computed for
    pub angle: ReleaseAngle,
    /// Stability class of the disc
    pub stability: Stability,
    /// Estimated distance after the canvas cap (ft)
    pub estimated_distance_ft: f64,
    /// Vertical extent of the path (px)
    pub flight_length_px: f64,
    /// Signed horizontal pull of the first control point (px)
    pub turn_offset_px: f64,
    /// Signed horizontal offset of the end point from the origin (px)
    pub end_offset_px: f64,
    /// End offset converted back to feet; `None` on a zero-height canvas
    pub end_offset_ft: Option<f64>,
    /// How far the second control point sits below the end point (px)
    pub arc_height_px: f64,
    /// Furthest sampled excursion right of the origin (px, >= 0)
    pub max_right_px: f64,
    /// Furthest sampled excursion left of the origin (px, >= 0)
    pub max_left_px: f64,
    /// Polyline approximation of the curve length (px)
    pub path_length_px: f64,
    /// Whether every sample lies on the canvas
    pub fits_canvas: bool,
}

impl PathMetrics {
    /// Compute the path for one release angle and summarise it.
    pub fn from_path(
        flight: &FlightNumbers,
        style: ThrowStyle,
        angle: ReleaseAngle,
        canvas: &CanvasConfig,
    ) -> Result<Self, InvalidInputError> {
        flight.validate()?;
        validate_canvas(canvas)?;

        let (geometry, path) = build_path(flight, style, angle, canvas)?;
        Ok(Self::assemble(flight, style, angle, canvas, &geometry, &path))
    }

    /// Metrics for hyzer, flat and anhyzer, in that order.
    pub fn for_all_angles(
        flight: &FlightNumbers,
        style: ThrowStyle,
        canvas: &CanvasConfig,
    ) -> Result<Vec<Self>, InvalidInputError> {
        ReleaseAngle::ALL
            .into_iter()
            .map(|angle| Self::from_path(flight, style, angle, canvas))
            .collect()
    }

    fn assemble(
        flight: &FlightNumbers,
        style: ThrowStyle,
        angle: ReleaseAngle,
        canvas: &CanvasConfig,
        geometry: &PathGeometry,
        path: &CubicBezier,
    ) -> Self {
        let samples = path.sample(METRIC_SAMPLES);
        let (mut max_right, mut max_left) = (0.0_f64, 0.0_f64);
        for p in &samples {
            let dx = p.x - canvas.start_x;
            max_right = max_right.max(dx);
            max_left = max_left.max(-dx);
        }
        // The curve stays inside its control polygon.
        let (min, max) = path.control_bounds();
        let fits_canvas = (canvas.contains(min.x, min.y) && canvas.contains(max.x, max.y))
            || samples.iter().all(|p| canvas.contains(p.x, p.y));

        let end_offset_px = path.end.x - canvas.start_x;
        let ppf = canvas.pixels_per_foot();
        let end_offset_ft = (ppf != 0.0).then(|| end_offset_px / ppf);

        Self {
            style,
            angle,
            stability: flight.stability_class(),
            estimated_distance_ft: geometry.estimated_distance,
            flight_length_px: geometry.flight_length,
            turn_offset_px: path.control1.x - canvas.start_x,
            end_offset_px,
            end_offset_ft,
            arc_height_px: geometry.arc_height,
            max_right_px: max_right,
            max_left_px: max_left,
            path_length_px: path.approx_length(METRIC_SAMPLES),
            fits_canvas,
        }
    }

    /// Get summary statistics as a dictionary.
    pub fn summary(&self) -> HashMap<String, f64> {
        let mut summary = HashMap::new();
        summary.insert("estimated_distance_ft".to_string(), self.estimated_distance_ft);
        summary.insert("flight_length_px".to_string(), self.flight_length_px);
        summary.insert("turn_offset_px".to_string(), self.turn_offset_px);
        summary.insert("end_offset_px".to_string(), self.end_offset_px);
        if let Some(ft) = self.end_offset_ft {
            summary.insert("end_offset_ft".to_string(), ft);
        }
        summary.insert("arc_height_px".to_string(), self.arc_height_px);
        summary.insert("max_right_px".to_string(), self.max_right_px);
        summary.insert("max_left_px".to_string(), self.max_left_px);
        summary.insert("path_length_px".to_string(), self.path_length_px);
        summary.insert("fits_canvas".to_string(), if self.fits_canvas { 1.0 } else { 0.0 });
        summary
    }
}
