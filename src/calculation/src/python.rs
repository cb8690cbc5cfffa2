//! Python bindings for the flight-path engine.
//!
//! NOTE: This module requires the `python-bindings` feature to be enabled.
//! Compile with: `cargo build --features python-bindings --release`
//!
//! Usage in Python:
//! ```python
//! import discflight_calc as dfc
//! paths = dfc.compute_flight_paths(12, 5, -1, 3, "rhbh")
//! paths["flat"]  # "M 100 280 C ..."
//! ```

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::bezier::CubicBezier;
use crate::constants::CanvasConfig;
use crate::disc::{FlightNumbers, ReleaseAngle, ThrowStyle};
use crate::engine::compute_flight_paths;
use crate::error::InvalidInputError;
use crate::metrics::PathMetrics;

fn to_py_err(err: InvalidInputError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

fn parse_style(style: &str) -> PyResult<ThrowStyle> {
    style.parse().map_err(PyValueError::new_err)
}

/// Canvas configuration (defaults: 200x300, origin (100, 280), 400 ft).
#[pyclass(name = "CanvasConfig")]
#[derive(Debug, Clone)]
pub struct PyCanvasConfig {
    canvas: CanvasConfig,
}

#[pymethods]
impl PyCanvasConfig {
    /// Canvas of the given size. The origin defaults to the horizontal
    /// centre, 20 px above the bottom edge.
    #[new]
    #[pyo3(signature = (width=200.0, height=300.0, start_x=None, start_y=None, max_distance=None))]
    pub fn new(
        width: f64,
        height: f64,
        start_x: Option<f64>,
        start_y: Option<f64>,
        max_distance: Option<f64>,
    ) -> Self {
        Self { canvas: CanvasConfig::custom(width, height, start_x, start_y, max_distance) }
    }

    /// Canvas width (px)
    #[getter]
    pub fn width(&self) -> f64 { self.canvas.width }

    /// Canvas height (px)
    #[getter]
    pub fn height(&self) -> f64 { self.canvas.height }

    /// Throw origin, horizontal (px)
    #[getter]
    pub fn start_x(&self) -> f64 { self.canvas.start_x }

    /// Throw origin, vertical (px)
    #[getter]
    pub fn start_y(&self) -> f64 { self.canvas.start_y }

    /// Distance mapped onto the usable height (ft)
    #[getter]
    pub fn max_distance(&self) -> f64 { self.canvas.max_distance }

    /// Python `repr()`.
    pub fn __repr__(&self) -> String {
        format!(
            "CanvasConfig(width={}, height={}, start=({}, {}), max_distance={})",
            self.canvas.width, self.canvas.height, self.canvas.start_x, self.canvas.start_y,
            self.canvas.max_distance
        )
    }
}

fn bezier_dict<'py>(py: Python<'py>, path: &CubicBezier) -> PyResult<&'py PyDict> {
    let dict = PyDict::new(py);
    dict.set_item("start", path.start.to_array())?;
    dict.set_item("control1", path.control1.to_array())?;
    dict.set_item("control2", path.control2.to_array())?;
    dict.set_item("end", path.end.to_array())?;
    dict.set_item("svg", path.to_svg_path())?;
    Ok(dict)
}

/// SVG path data for hyzer, flat and anhyzer, keyed by release angle.
#[pyfunction]
#[pyo3(name = "compute_flight_paths", signature = (speed, glide, turn, fade, style="right-hand-backhand", canvas=None))]
pub fn py_compute_flight_paths(
    speed: f64,
    glide: f64,
    turn: f64,
    fade: f64,
    style: &str,
    canvas: Option<PyCanvasConfig>,
) -> PyResult<PyObject> {
    let flight = FlightNumbers::new(speed, glide, turn, fade);
    let style = parse_style(style)?;
    let canvas = canvas.map(|c| c.canvas);
    let paths = compute_flight_paths(&flight, style, canvas.as_ref()).map_err(to_py_err)?;

    Python::with_gil(|py| {
        let dict = PyDict::new(py);
        for (angle, path) in paths.iter() {
            dict.set_item(angle.as_str(), path.to_svg_path())?;
        }
        Ok(dict.into())
    })
}

/// Control points of every path: `{angle: {"start": [x, y], ..., "svg": str}}`.
#[pyfunction]
#[pyo3(name = "compute_flight_points", signature = (speed, glide, turn, fade, style="right-hand-backhand", canvas=None))]
pub fn py_compute_flight_points(
    speed: f64,
    glide: f64,
    turn: f64,
    fade: f64,
    style: &str,
    canvas: Option<PyCanvasConfig>,
) -> PyResult<PyObject> {
    let flight = FlightNumbers::new(speed, glide, turn, fade);
    let style = parse_style(style)?;
    let canvas = canvas.map(|c| c.canvas);
    let paths = compute_flight_paths(&flight, style, canvas.as_ref()).map_err(to_py_err)?;

    Python::with_gil(|py| {
        let dict = PyDict::new(py);
        for (angle, path) in paths.iter() {
            dict.set_item(angle.as_str(), bezier_dict(py, path)?)?;
        }
        Ok(dict.into())
    })
}

/// Summary figures of a single path.
#[pyfunction]
#[pyo3(name = "path_metrics", signature = (speed, glide, turn, fade, style="right-hand-backhand", angle="flat", canvas=None))]
pub fn py_path_metrics(
    speed: f64,
    glide: f64,
    turn: f64,
    fade: f64,
    style: &str,
    angle: &str,
    canvas: Option<PyCanvasConfig>,
) -> PyResult<PyObject> {
    let flight = FlightNumbers::new(speed, glide, turn, fade);
    let style = parse_style(style)?;
    let angle: ReleaseAngle = angle.parse().map_err(PyValueError::new_err)?;
    let canvas = canvas.map(|c| c.canvas).unwrap_or_default();
    let metrics = PathMetrics::from_path(&flight, style, angle, &canvas).map_err(to_py_err)?;

    Python::with_gil(|py| {
        let dict = PyDict::new(py);
        for (key, value) in metrics.summary() {
            dict.set_item(key, value)?;
        }
        Ok(dict.into())
    })
}

/// Flight-path geometry for disc golf flight numbers.
#[pymodule]
fn discflight_calc(_py: Python<'_>, m: &PyModule) -> PyResult<()> {
    m.add_class::<PyCanvasConfig>()?;

    m.add_function(wrap_pyfunction!(py_compute_flight_paths, m)?)?;
    m.add_function(wrap_pyfunction!(py_compute_flight_points, m)?)?;
    m.add_function(wrap_pyfunction!(py_path_metrics, m)?)?;

    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    Ok(())
}
