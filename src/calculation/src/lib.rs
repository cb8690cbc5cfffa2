//! Flight-path geometry for disc golf diagrams.
//!
//! Turns a disc's four flight numbers (speed, glide, turn, fade), a throwing
//! style and a canvas description into three cubic Bézier curves, one per
//! release angle, ready to be drawn as a flight chart.
//!
//! # Features
//!
//! - **Pure**: no I/O and no shared state; identical input gives identical output
//! - **Symmetric**: forehand and backhand paths are exact mirror images
//! - **Renderer-agnostic**: SVG path data or raw control points
//! - **Python bindings**: Optional PyO3 bindings behind `python-bindings`
//!
//! ```
//! use discflight_calc::{FlightNumbers, ThrowStyle, compute_flight_paths};
//!
//! let destroyer = FlightNumbers::new(12.0, 5.0, -1.0, 3.0);
//! let paths = compute_flight_paths(&destroyer, ThrowStyle::RightHandBackhand, None)?;
//! assert!(paths.flat.to_svg_path().starts_with("M 100 280 C"));
//! # Ok::<(), discflight_calc::InvalidInputError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::doc_markdown)]

pub mod bezier;
pub mod constants;
pub mod disc;
pub mod engine;
pub mod error;
pub mod metrics;
pub mod vector;

// Optional Python bindings
#[cfg(feature = "python-bindings")]
pub mod python;

// Re-export key types and functions for easy use
pub use bezier::CubicBezier;
pub use constants::CanvasConfig;
pub use disc::{FlightNumbers, Hand, Motion, ReleaseAngle, Stability, ThrowStyle};
pub use engine::{FlightPathSet, SvgPathSet, compute_flight_path, compute_flight_paths, estimated_distance};
pub use error::InvalidInputError;
pub use metrics::PathMetrics;
pub use vector::Point;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
