//! 2D point operations in canvas pixel space.
//!
//! Canvas coordinates follow the usual screen convention: `x` grows to the
//! right and `y` grows downwards, so a throw travels towards smaller `y`.

use serde::{Deserialize, Serialize};

/// A point (or offset) on the drawing canvas, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal position (px)
    pub x: f64,
    /// Vertical position, growing downwards (px)
    pub y: f64,
}

impl Point {
    /// Creates a new point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Element-wise subtraction.
    #[inline(always)]
    pub fn sub(&self, other: &Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }

    /// Euclidean distance to another point.
    pub fn distance(&self, other: &Self) -> f64 {
        let d = self.sub(other);
        d.x.hypot(d.y)
    }

    /// Horizontal reflection about the vertical line `x = axis_x`.
    pub fn mirrored_about(&self, axis_x: f64) -> Self {
        Self::new(axis_x - (self.x - axis_x), self.y)
    }

    /// Whether both coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Convert to array `[x, y]`.
    pub fn to_array(&self) -> [f64; 2] {
        [self.x, self.y]
    }
}
