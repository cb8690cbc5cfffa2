//! Cubic Bézier path descriptors.
//!
//! A descriptor is the only thing handed to a renderer: either as SVG path
//! data through [`CubicBezier::to_svg_path`] or as raw points.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::vector::Point;

/// Start, two control points and end of a cubic curve, in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CubicBezier {
    /// Throw origin
    pub start: Point,
    /// First control point, pulled towards the turn
    pub control1: Point,
    /// Second control point, shaping the finish
    pub control2: Point,
    /// Landing point
    pub end: Point,
}

impl CubicBezier {
    /// Curve from its four defining points.
    pub const fn new(start: Point, control1: Point, control2: Point, end: Point) -> Self {
        Self { start, control1, control2, end }
    }

    /// SVG path data: `M x0 y0 C cx1 cy1, cx2 cy2, x1 y1`.
    pub fn to_svg_path(&self) -> String {
        format!(
            "M {} {} C {} {}, {} {}, {} {}",
            self.start.x,
            self.start.y,
            self.control1.x,
            self.control1.y,
            self.control2.x,
            self.control2.y,
            self.end.x,
            self.end.y,
        )
    }

    /// Point on the curve at parameter `t` in [0, 1] (Bernstein form).
    pub fn eval(&self, t: f64) -> Point {
        let t = t.clamp(0.0, 1.0);
        let mt = 1.0 - t;
        let b0 = mt * mt * mt;
        let b1 = 3.0 * mt * mt * t;
        let b2 = 3.0 * mt * t * t;
        let b3 = t * t * t;
        Point::new(
            b0 * self.start.x + b1 * self.control1.x + b2 * self.control2.x + b3 * self.end.x,
            b0 * self.start.y + b1 * self.control1.y + b2 * self.control2.y + b3 * self.end.y,
        )
    }

    /// `n` points evenly spaced in `t`, both end points included.
    ///
    /// Fewer than two samples still returns the end points.
    pub fn sample(&self, n: usize) -> Vec<Point> {
        let n = n.max(2);
        let last = (n - 1) as f64;
        (0..n)
            .map(|i| match i {
                0 => self.start,
                i if i == n - 1 => self.end,
                i => self.eval(i as f64 / last),
            })
            .collect()
    }

    /// Polyline length over `n` samples; approaches arc length as `n` grows.
    pub fn approx_length(&self, n: usize) -> f64 {
        self.sample(n)
            .windows(2)
            .map(|pair| pair[0].distance(&pair[1]))
            .sum()
    }

    /// Horizontal reflection of every point about `x = axis_x`.
    pub fn mirrored_about(&self, axis_x: f64) -> Self {
        Self::new(
            self.start.mirrored_about(axis_x),
            self.control1.mirrored_about(axis_x),
            self.control2.mirrored_about(axis_x),
            self.end.mirrored_about(axis_x),
        )
    }

    /// Axis-aligned bounds of the control polygon as `(min, max)`.
    ///
    /// The curve lies inside its control polygon's hull, so these bounds
    /// always contain the curve.
    pub fn control_bounds(&self) -> (Point, Point) {
        let pts = self.points();
        let min = pts
            .iter()
            .fold(Point::new(f64::INFINITY, f64::INFINITY), |acc, p| {
                Point::new(acc.x.min(p.x), acc.y.min(p.y))
            });
        let max = pts
            .iter()
            .fold(Point::new(f64::NEG_INFINITY, f64::NEG_INFINITY), |acc, p| {
                Point::new(acc.x.max(p.x), acc.y.max(p.y))
            });
        (min, max)
    }

    /// Start, control points and end, in drawing order.
    pub fn points(&self) -> [Point; 4] {
        [self.start, self.control1, self.control2, self.end]
    }

    /// Whether every coordinate is finite, i.e. the curve can be drawn.
    pub fn is_finite(&self) -> bool {
        self.points().iter().all(Point::is_finite)
    }
}

impl fmt::Display for CubicBezier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_svg_path())
    }
}
