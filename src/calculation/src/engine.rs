//! Flight-path geometry: flight numbers to cubic Bézier descriptors.
//!
//! Every path starts at the throw origin and travels up the canvas. The
//! first control point pulls towards the turn side 40% of the way up; the
//! second blends leftover turn with incoming fade and sits `arc height` below
//! the end point; the end point is displaced by the full fade.
//!
//! Right-hand backhand (and left-hand forehand) is the reference orientation:
//! the turn offset takes the sign of `turn` and positive fade finishes left of
//! the origin. The other two styles negate both lateral effects after
//! release-angle weighting, so they are exact reflections about `start_x`.

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::bezier::CubicBezier;
use crate::constants::{
    ARC_GAIN, BASE_DISTANCE_FT, CanvasConfig, EFFECT_REFERENCE_PX, FADE_GAIN, FEET_PER_GLIDE,
    FEET_PER_SPEED, INCOMING_FADE, RESIDUAL_TURN, TURN_ANCHOR, TURN_GAIN, weights,
};
use crate::disc::{FlightNumbers, ReleaseAngle, ThrowStyle};
use crate::error::{InvalidInputError, ensure_bounded, ensure_finite, ensure_positive};
use crate::vector::Point;

/// One path per release angle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlightPathSet {
    /// Disc released with its outer edge tilted down.
    pub hyzer: CubicBezier,
    /// Disc released level.
    pub flat: CubicBezier,
    /// Disc released with its outer edge tilted up.
    pub anhyzer: CubicBezier,
}

impl FlightPathSet {
    /// Path for one release angle.
    pub fn get(&self, angle: ReleaseAngle) -> &CubicBezier {
        match angle {
            ReleaseAngle::Hyzer => &self.hyzer,
            ReleaseAngle::Flat => &self.flat,
            ReleaseAngle::Anhyzer => &self.anhyzer,
        }
    }

    /// Paths in hyzer, flat, anhyzer order.
    pub fn iter(&self) -> impl Iterator<Item = (ReleaseAngle, &CubicBezier)> {
        ReleaseAngle::ALL.into_iter().map(move |angle| (angle, self.get(angle)))
    }

    /// SVG path data keyed by release angle.
    pub fn to_svg_paths(&self) -> SvgPathSet {
        SvgPathSet {
            hyzer: self.hyzer.to_svg_path(),
            flat: self.flat.to_svg_path(),
            anhyzer: self.anhyzer.to_svg_path(),
        }
    }
}

/// String-encoded form of a [`FlightPathSet`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SvgPathSet {
    /// SVG path data of the hyzer path
    pub hyzer: String,
    /// SVG path data of the flat path
    pub flat: String,
    /// SVG path data of the anhyzer path
    pub anhyzer: String,
}

/// Horizontal pixel offsets applied to the control and end points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct LateralEffects {
    pub turn: f64,
    pub fade: f64,
}

/// Intermediate quantities of one path, shared with the metrics module.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct PathGeometry {
    pub estimated_distance: f64,
    pub flight_length: f64,
    pub effects: LateralEffects,
    pub arc_height: f64,
}

impl PathGeometry {
    pub(crate) fn compute(
        flight: &FlightNumbers,
        style: ThrowStyle,
        angle: ReleaseAngle,
        canvas: &CanvasConfig,
    ) -> Self {
        let estimated_distance = estimated_distance(flight, canvas);
        // Written as a ratio so a capped distance lands on the available
        // height exactly.
        let flight_length = canvas.available_height() * (estimated_distance / canvas.max_distance);
        let effect_scale = flight_length / EFFECT_REFERENCE_PX;

        let w = angle_weights(angle);
        let mut effects = LateralEffects {
            turn: flight.turn * TURN_GAIN * effect_scale * w.turn,
            fade: flight.fade * FADE_GAIN * effect_scale * w.fade,
        };
        if style.is_mirrored() {
            effects.turn = -effects.turn;
            effects.fade = -effects.fade;
        }

        Self {
            estimated_distance,
            flight_length,
            effects,
            arc_height: flight.glide * ARC_GAIN * effect_scale,
        }
    }

    /// Huge but finite flight numbers can overflow any intermediate.
    pub(crate) fn check(&self) -> Result<(), InvalidInputError> {
        ensure_bounded("estimatedDistance", self.estimated_distance)?;
        ensure_bounded("flightLength", self.flight_length)?;
        ensure_bounded("turnEffect", self.effects.turn)?;
        ensure_bounded("fadeEffect", self.effects.fade)?;
        ensure_bounded("arcHeight", self.arc_height)?;
        Ok(())
    }

    pub(crate) fn to_bezier(&self, canvas: &CanvasConfig) -> CubicBezier {
        let sx = canvas.start_x;
        let sy = canvas.start_y;
        let LateralEffects { turn, fade } = self.effects;

        let end_y = sy - self.flight_length;
        CubicBezier::new(
            Point::new(sx, sy),
            Point::new(sx + turn, sy - self.flight_length * TURN_ANCHOR),
            Point::new(sx + (turn * RESIDUAL_TURN - fade * INCOMING_FADE), end_y + self.arc_height),
            Point::new(sx - fade, end_y),
        )
    }
}

/// Geometry and curve for one release angle. Fails instead of handing out a
/// curve with a non-finite coordinate.
pub(crate) fn build_path(
    flight: &FlightNumbers,
    style: ThrowStyle,
    angle: ReleaseAngle,
    canvas: &CanvasConfig,
) -> Result<(PathGeometry, CubicBezier), InvalidInputError> {
    let geometry = PathGeometry::compute(flight, style, angle, canvas);
    geometry.check()?;
    let path = geometry.to_bezier(canvas);
    if !path.is_finite() {
        let value = path
            .points()
            .iter()
            .flat_map(|p| [p.x, p.y])
            .find(|v| !v.is_finite())
            .unwrap_or(f64::NAN);
        return Err(InvalidInputError::Overflow { field: "path", value });
    }
    Ok((geometry, path))
}

fn angle_weights(angle: ReleaseAngle) -> weights::AngleWeights {
    match angle {
        ReleaseAngle::Hyzer => weights::HYZER,
        ReleaseAngle::Flat => weights::FLAT,
        ReleaseAngle::Anhyzer => weights::ANHYZER,
    }
}

/// Estimated throw distance in feet, capped at the canvas' `max_distance`.
pub fn estimated_distance(flight: &FlightNumbers, canvas: &CanvasConfig) -> f64 {
    let base = BASE_DISTANCE_FT + flight.speed * FEET_PER_SPEED;
    let glide_bonus = flight.glide * FEET_PER_GLIDE;
    (base + glide_bonus).min(canvas.max_distance)
}

pub(crate) fn validate_canvas(canvas: &CanvasConfig) -> Result<(), InvalidInputError> {
    ensure_positive("width", canvas.width)?;
    ensure_positive("height", canvas.height)?;
    ensure_finite("startX", canvas.start_x)?;
    ensure_finite("startY", canvas.start_y)?;
    ensure_positive("maxDistance", canvas.max_distance)?;
    Ok(())
}

/// Compute the hyzer, flat and anhyzer paths for a disc.
///
/// `canvas` falls back to [`CanvasConfig::default`]. Flight numbers outside
/// the usual manufacturer ranges still produce a path. Non-finite input, a
/// degenerate canvas and input large enough to overflow the model are
/// rejected.
pub fn compute_flight_paths(
    flight: &FlightNumbers,
    style: ThrowStyle,
    canvas: Option<&CanvasConfig>,
) -> Result<FlightPathSet, InvalidInputError> {
    let default_canvas = CanvasConfig::default();
    let canvas = canvas.unwrap_or(&default_canvas);
    flight.validate()?;
    validate_canvas(canvas)?;
    flight.warn_if_atypical();

    let path = |angle: ReleaseAngle| -> Result<CubicBezier, InvalidInputError> {
        let (geometry, path) = build_path(flight, style, angle, canvas)?;
        trace!(
            "{angle}: length {:.2}px, turn {:.2}px, fade {:.2}px",
            geometry.flight_length, geometry.effects.turn, geometry.effects.fade
        );
        Ok(path)
    };

    let set = FlightPathSet {
        hyzer: path(ReleaseAngle::Hyzer)?,
        flat: path(ReleaseAngle::Flat)?,
        anhyzer: path(ReleaseAngle::Anhyzer)?,
    };
    debug!("computed flight paths for {flight} ({style})");
    Ok(set)
}

/// Compute the path for a single release angle.
pub fn compute_flight_path(
    flight: &FlightNumbers,
    style: ThrowStyle,
    angle: ReleaseAngle,
    canvas: &CanvasConfig,
) -> Result<CubicBezier, InvalidInputError> {
    flight.validate()?;
    validate_canvas(canvas)?;
    flight.warn_if_atypical();
    build_path(flight, style, angle, canvas).map(|(_, path)| path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const DRIVER: FlightNumbers = FlightNumbers::new(12.0, 5.0, -1.0, 3.0);

    fn sweep() -> Vec<FlightNumbers> {
        let mut discs = Vec::new();
        for speed in [1.0, 2.0, 5.0, 7.0, 9.0, 12.0, 14.0] {
            for glide in [1.0, 4.0, 6.0] {
                for turn in [-5.0, -2.0, -0.5, 0.0, 1.0] {
                    for fade in [0.0, 1.0, 3.5, 5.0] {
                        discs.push(FlightNumbers::new(speed, glide, turn, fade));
                    }
                }
            }
        }
        discs
    }

    fn canvases() -> Vec<CanvasConfig> {
        vec![
            CanvasConfig::new(),
            CanvasConfig::with_size(360.0, 540.0),
            CanvasConfig::custom(123.0, 777.0, Some(61.3), Some(700.1), Some(450.0)),
        ]
    }

    fn paths(flight: &FlightNumbers, style: ThrowStyle) -> FlightPathSet {
        compute_flight_paths(flight, style, None).unwrap()
    }

    #[test]
    fn test_driver_flat_scenario() {
        let set = paths(&DRIVER, ThrowStyle::RightHandBackhand);
        assert_eq!(set.flat.start, Point::new(100.0, 280.0));
        assert_relative_eq!(estimated_distance(&DRIVER, &CanvasConfig::new()), 391.0);

        let flight_length = 254.15;
        let fade = 3.0 * 15.0 * (flight_length / 250.0);
        assert_relative_eq!(set.flat.end.y, 25.85, epsilon = 1e-9);
        assert_relative_eq!(set.flat.end.x, 100.0 - fade, epsilon = 1e-9);
        assert_relative_eq!(set.flat.end.x, 54.253, epsilon = 1e-9);
    }

    #[test]
    fn test_driver_flat_control_points() {
        let set = paths(&DRIVER, ThrowStyle::RightHandBackhand);
        let scale = 254.15 / 250.0;
        let turn = -10.0 * scale;
        let fade = 45.0 * scale;
        let arc = 30.0 * scale;
        assert_relative_eq!(set.flat.control1.x, 100.0 + turn, epsilon = 1e-9);
        assert_relative_eq!(set.flat.control1.y, 280.0 - 254.15 * 0.4, epsilon = 1e-9);
        assert_relative_eq!(set.flat.control2.x, 100.0 + turn * 0.5 - fade * 0.3, epsilon = 1e-9);
        assert_relative_eq!(set.flat.control2.y, 25.85 + arc, epsilon = 1e-9);
    }

    #[test]
    fn test_forehand_scenario_is_mirror() {
        let set = paths(&DRIVER, ThrowStyle::RightHandForehand);
        assert_relative_eq!(set.flat.end.x, 145.747, epsilon = 1e-9);
        assert_relative_eq!(set.flat.end.y, 25.85, epsilon = 1e-9);
    }

    #[test]
    fn test_symmetric_styles_are_identical() {
        for canvas in canvases() {
            for flight in sweep() {
                let rhbh = compute_flight_paths(&flight, ThrowStyle::RightHandBackhand, Some(&canvas)).unwrap();
                let lhfh = compute_flight_paths(&flight, ThrowStyle::LeftHandForehand, Some(&canvas)).unwrap();
                let rhfh = compute_flight_paths(&flight, ThrowStyle::RightHandForehand, Some(&canvas)).unwrap();
                let lhbh = compute_flight_paths(&flight, ThrowStyle::LeftHandBackhand, Some(&canvas)).unwrap();
                assert_eq!(rhbh, lhfh);
                assert_eq!(rhfh, lhbh);
            }
        }
    }

    #[test]
    fn test_mirror_negates_lateral_effects_exactly() {
        for canvas in canvases() {
            for flight in sweep() {
                for angle in ReleaseAngle::ALL {
                    let bh = PathGeometry::compute(&flight, ThrowStyle::RightHandBackhand, angle, &canvas);
                    let fh = PathGeometry::compute(&flight, ThrowStyle::RightHandForehand, angle, &canvas);
                    assert_eq!(fh.effects.turn, -bh.effects.turn);
                    assert_eq!(fh.effects.fade, -bh.effects.fade);
                    assert_eq!(fh.flight_length, bh.flight_length);
                    assert_eq!(fh.arc_height, bh.arc_height);
                }
            }
        }
    }

    #[test]
    fn test_mirror_reflects_points_about_origin() {
        for canvas in canvases() {
            for flight in sweep() {
                let bh = compute_flight_paths(&flight, ThrowStyle::RightHandBackhand, Some(&canvas)).unwrap();
                let fh = compute_flight_paths(&flight, ThrowStyle::LeftHandBackhand, Some(&canvas)).unwrap();
                for angle in ReleaseAngle::ALL {
                    let expected = bh.get(angle).mirrored_about(canvas.start_x);
                    let actual = fh.get(angle);
                    for (e, a) in expected.points().iter().zip(actual.points().iter()) {
                        assert_relative_eq!(e.x, a.x, epsilon = 1e-9);
                        assert_eq!(e.y, a.y);
                    }
                }
            }
        }
    }

    #[test]
    fn test_distance_cap_fills_available_height() {
        for canvas in canvases() {
            let bomber = FlightNumbers::new(14.0, 6.0, -2.0, 2.0);
            assert!(30.0 + 14.0 * 28.0 + 30.0 > canvas.max_distance);
            for angle in ReleaseAngle::ALL {
                let g = PathGeometry::compute(&bomber, ThrowStyle::RightHandBackhand, angle, &canvas);
                assert_eq!(g.estimated_distance, canvas.max_distance);
                assert_eq!(g.flight_length, canvas.available_height());
            }
            let set = compute_flight_paths(&bomber, ThrowStyle::RightHandBackhand, Some(&canvas)).unwrap();
            assert_eq!(set.flat.end.y, canvas.start_y - canvas.available_height());
        }
    }

    #[test]
    fn test_flight_length_non_decreasing_in_speed() {
        let canvas = CanvasConfig::new();
        for glide in [1.0, 4.0, 7.0] {
            let mut previous = f64::NEG_INFINITY;
            for speed in 1..=15 {
                let flight = FlightNumbers::new(speed as f64, glide, -1.0, 2.0);
                let g = PathGeometry::compute(&flight, ThrowStyle::RightHandBackhand, ReleaseAngle::Flat, &canvas);
                assert!(g.flight_length >= previous);
                previous = g.flight_length;
            }
        }
    }

    #[test]
    fn test_release_angle_fade_ordering() {
        for style in ThrowStyle::ALL {
            for flight in sweep().into_iter().filter(|f| f.fade != 0.0) {
                let set = paths(&flight, style);
                let offset = |angle| (set.get(angle).end.x - 100.0).abs();
                assert!(offset(ReleaseAngle::Hyzer) > offset(ReleaseAngle::Flat));
                assert!(offset(ReleaseAngle::Anhyzer) < offset(ReleaseAngle::Flat));
            }
        }
    }

    #[test]
    fn test_reference_orientation() {
        let set = paths(&DRIVER, ThrowStyle::RightHandBackhand);
        assert!(set.flat.control1.x < 100.0);
        assert!(set.flat.end.x < 100.0);

        let flippy = FlightNumbers::new(9.0, 5.0, 1.0, 1.0);
        let set = paths(&flippy, ThrowStyle::RightHandBackhand);
        assert!(set.flat.control1.x > 100.0);
        assert!(set.flat.end.x < 100.0);
    }

    #[test]
    fn test_deterministic() {
        let a = paths(&DRIVER, ThrowStyle::LeftHandBackhand);
        let b = paths(&DRIVER, ThrowStyle::LeftHandBackhand);
        assert_eq!(a, b);
        assert_eq!(a.to_svg_paths(), b.to_svg_paths());
    }

    #[test]
    fn test_default_canvas_matches_explicit() {
        let implicit = compute_flight_paths(&DRIVER, ThrowStyle::RightHandBackhand, None).unwrap();
        let explicit =
            compute_flight_paths(&DRIVER, ThrowStyle::RightHandBackhand, Some(&CanvasConfig::new())).unwrap();
        assert_eq!(implicit, explicit);
    }

    #[test]
    fn test_single_angle_matches_set() {
        let canvas = CanvasConfig::new();
        let set = paths(&DRIVER, ThrowStyle::RightHandForehand);
        for (angle, path) in set.iter() {
            let single = compute_flight_path(&DRIVER, ThrowStyle::RightHandForehand, angle, &canvas).unwrap();
            assert_eq!(&single, path);
        }
    }

    #[test]
    fn test_out_of_range_numbers_still_render() {
        let wild = FlightNumbers::new(-3.0, 12.0, 7.0, -4.0);
        let set = paths(&wild, ThrowStyle::RightHandBackhand);
        assert!(set.iter().all(|(_, p)| p.is_finite()));
    }

    #[test]
    fn test_extreme_finite_numbers_are_rejected() {
        let cases = [
            (FlightNumbers::new(-1e308, 5.0, 0.0, 3.0), "estimatedDistance"),
            (FlightNumbers::new(12.0, 1e308, -1.0, 3.0), "arcHeight"),
            (FlightNumbers::new(12.0, 5.0, -1e308, 3.0), "turnEffect"),
            (FlightNumbers::new(12.0, 5.0, -1.0, f64::MAX), "fadeEffect"),
        ];
        for (flight, field) in cases {
            let err = compute_flight_paths(&flight, ThrowStyle::RightHandBackhand, None).unwrap_err();
            assert!(matches!(err, InvalidInputError::Overflow { .. }), "{flight}: {err}");
            assert_eq!(err.field(), field);

            let err = compute_flight_path(&flight, ThrowStyle::LeftHandBackhand, ReleaseAngle::Flat, &CanvasConfig::new())
                .unwrap_err();
            assert_eq!(err.field(), field);
        }
    }

    #[test]
    fn test_overflowing_control_point_is_rejected() {
        let canvas = CanvasConfig { start_x: f64::MAX, ..CanvasConfig::new() };
        let flight = FlightNumbers::new(12.0, 5.0, 1e300, 3.0);
        let err = compute_flight_paths(&flight, ThrowStyle::RightHandBackhand, Some(&canvas)).unwrap_err();
        assert_eq!(err.field(), "path");
        assert!(matches!(err, InvalidInputError::Overflow { value, .. } if value == f64::INFINITY));
    }

    #[test]
    fn test_rejects_non_finite_input() {
        let bad = FlightNumbers::new(f64::NAN, 5.0, -1.0, 3.0);
        let err = compute_flight_paths(&bad, ThrowStyle::RightHandBackhand, None).unwrap_err();
        assert_eq!(err.field(), "speed");

        let mut canvas = CanvasConfig::new();
        canvas.start_x = f64::INFINITY;
        let err = compute_flight_paths(&DRIVER, ThrowStyle::RightHandBackhand, Some(&canvas)).unwrap_err();
        assert_eq!(err, InvalidInputError::NonFinite { field: "startX", value: f64::INFINITY });
    }

    #[test]
    fn test_rejects_zero_max_distance() {
        let canvas = CanvasConfig { max_distance: 0.0, ..CanvasConfig::new() };
        let err = compute_flight_path(&DRIVER, ThrowStyle::RightHandBackhand, ReleaseAngle::Flat, &canvas)
            .unwrap_err();
        assert!(matches!(err, InvalidInputError::NonPositive { field: "maxDistance", .. }));
    }

    #[test]
    fn test_svg_paths_serialize_by_angle() {
        let svg = paths(&DRIVER, ThrowStyle::RightHandBackhand).to_svg_paths();
        assert!(svg.flat.starts_with("M 100 280 C "));
        let json = serde_json::to_value(&svg).unwrap();
        assert!(json.get("hyzer").is_some());
        assert!(json.get("anhyzer").is_some());
    }
}
