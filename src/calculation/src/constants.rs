//! Canvas configuration and the tuning constants of the flight-path model.
//!
//! All distances on this side of the conversion are real-world feet; everything
//! after `pixels_per_foot` is canvas pixels.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Fixed part of the distance estimate (ft).
pub const BASE_DISTANCE_FT: f64 = 30.0;
/// Feet of distance added per point of speed.
pub const FEET_PER_SPEED: f64 = 28.0;
/// Feet of distance added per point of glide.
pub const FEET_PER_GLIDE: f64 = 5.0;

/// Pixels kept free above the highest possible end point.
pub const TOP_MARGIN_PX: f64 = 20.0;
/// Rendered length at which turn and fade apply at their nominal magnitude.
pub const EFFECT_REFERENCE_PX: f64 = 250.0;

/// Horizontal pixels per point of turn, at reference length.
pub const TURN_GAIN: f64 = 10.0;
/// Horizontal pixels per point of fade, at reference length.
pub const FADE_GAIN: f64 = 15.0;
/// Apex bulge in pixels per point of glide, at reference length.
pub const ARC_GAIN: f64 = 6.0;

/// Fraction of the flight length at which the first control point sits.
pub const TURN_ANCHOR: f64 = 0.4;
/// Share of the turn effect carried into the second control point.
pub const RESIDUAL_TURN: f64 = 0.5;
/// Share of the fade effect pulled into the second control point.
pub const INCOMING_FADE: f64 = 0.3;

/// Drawing-area parameters for the rendered paths.
///
/// `start_x`/`start_y` is the throw origin in pixels and `max_distance` is the
/// distance in feet that maps onto the usable vertical extent of the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CanvasConfig {
    /// Canvas width (px)
    pub width: f64,
    /// Canvas height (px)
    pub height: f64,
    /// Throw origin, horizontal (px)
    pub start_x: f64,
    /// Throw origin, vertical (px)
    pub start_y: f64,
    /// Real-world distance mapped to the full usable height (ft)
    pub max_distance: f64,
}

impl CanvasConfig {
    /// The standard 200x300 canvas with the tee near the bottom centre.
    pub const fn new() -> Self {
        Self {
            width: 200.0,
            height: 300.0,
            start_x: 100.0,
            start_y: 280.0,
            max_distance: 400.0,
        }
    }

    /// A canvas of the given size, origin centred horizontally and 20 px above
    /// the bottom edge.
    pub fn with_size(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            start_x: width / 2.0,
            start_y: height - TOP_MARGIN_PX,
            ..Self::new()
        }
    }

    /// Fully custom canvas. Origin defaults to the `with_size` placement.
    pub fn custom(
        width: f64,
        height: f64,
        start_x: Option<f64>,
        start_y: Option<f64>,
        max_distance: Option<f64>,
    ) -> Self {
        let base = Self::with_size(width, height);
        Self {
            start_x: start_x.unwrap_or(base.start_x),
            start_y: start_y.unwrap_or(base.start_y),
            max_distance: max_distance.unwrap_or(base.max_distance),
            ..base
        }
    }

    /// Usable vertical pixels between the origin and the top margin.
    #[inline(always)]
    pub fn available_height(&self) -> f64 {
        self.start_y - TOP_MARGIN_PX
    }

    /// Vertical pixels per real-world foot.
    #[inline(always)]
    pub fn pixels_per_foot(&self) -> f64 {
        self.available_height() / self.max_distance
    }

    /// Whether a point lies on the canvas (edges included).
    pub fn contains(&self, x: f64, y: f64) -> bool {
        (0.0..=self.width).contains(&x) && (0.0..=self.height).contains(&y)
    }

    /// Get a summary of the configuration for reporting.
    pub fn summary(&self) -> HashMap<String, String> {
        let mut map = HashMap::new();
        map.insert("width (px)".to_string(), format!("{:.1}", self.width));
        map.insert("height (px)".to_string(), format!("{:.1}", self.height));
        map.insert("start x (px)".to_string(), format!("{:.1}", self.start_x));
        map.insert("start y (px)".to_string(), format!("{:.1}", self.start_y));
        map.insert("max distance (ft)".to_string(), format!("{:.1}", self.max_distance));
        map.insert("px per ft".to_string(), format!("{:.4}", self.pixels_per_foot()));
        map
    }
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Turn/fade multipliers per release angle.
pub mod weights {
    /// Multipliers applied to the raw turn and fade effects.
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct AngleWeights {
        /// Turn multiplier
        pub turn: f64,
        /// Fade multiplier
        pub fade: f64,
    }

    /// Hyzer holds the turn back and lets the fade finish harder.
    pub const HYZER: AngleWeights = AngleWeights { turn: 0.5, fade: 1.4 };
    /// Flat release applies both effects unchanged.
    pub const FLAT: AngleWeights = AngleWeights { turn: 1.0, fade: 1.0 };
    /// Anhyzer exaggerates the turn and fights off the fade.
    pub const ANHYZER: AngleWeights = AngleWeights { turn: 1.6, fade: 0.6 };
}

/// Typical manufacturer ranges for flight numbers. Informational only.
pub mod ranges {
    use std::ops::RangeInclusive;

    /// Speed
    pub const SPEED: RangeInclusive<f64> = 1.0..=15.0;
    /// Glide
    pub const GLIDE: RangeInclusive<f64> = 1.0..=7.0;
    /// Turn
    pub const TURN: RangeInclusive<f64> = -5.0..=1.0;
    /// Fade
    pub const FADE: RangeInclusive<f64> = 0.0..=5.0;
}
