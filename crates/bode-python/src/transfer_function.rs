//! Python bindings for TransferFunction class

use bode_core::constants::{CROSSOVER_TOL, DEFAULT_PLOT_POINTS, MARGIN_SEARCH_POINTS};
use bode_core::input::parse_transfer_function;
use bode_core::{Analyzer, FrequencyRange, MarginSearch, TransferFunction};
use num_complex::Complex64;
use numpy::{PyArray1, ToPyArray};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::margins::PyStabilityMargins;

type BodeArrays<'py> = (
    Bound<'py, PyArray1<f64>>,
    Bound<'py, PyArray1<f64>>,
    Bound<'py, PyArray1<f64>>,
);

fn value_error(e: impl std::fmt::Display) -> PyErr {
    PyValueError::new_err(e.to_string())
}

fn check_npoints(npoints: usize) -> PyResult<()> {
    if npoints < 2 {
        return Err(PyValueError::new_err(format!(
            "npoints must be at least 2, got {}",
            npoints
        )));
    }
    Ok(())
}

/// Python wrapper for TransferFunction
#[pyclass(name = "TransferFunction")]
#[derive(Clone)]
pub struct PyTransferFunction {
    inner: TransferFunction,
}

#[pymethods]
impl PyTransferFunction {
    /// Create a new TransferFunction
    ///
    /// Args:
    ///     numerator: N(s) coefficients, highest degree first
    ///     denominator: D(s) coefficients, highest degree first
    #[new]
    pub fn new(numerator: Vec<f64>, denominator: Vec<f64>) -> PyResult<Self> {
        TransferFunction::new(numerator, denominator)
            .map(|tf| Self { inner: tf })
            .map_err(value_error)
    }

    /// Create a TransferFunction from comma-separated coefficient text
    ///
    /// Args:
    ///     numerator: e.g. "1, 2"
    ///     denominator: e.g. "1, 3, 2"
    #[staticmethod]
    pub fn from_text(numerator: &str, denominator: &str) -> PyResult<Self> {
        parse_transfer_function(numerator, denominator)
            .map(|tf| Self { inner: tf })
            .map_err(value_error)
    }

    /// Numerator coefficients, highest degree first
    #[getter]
    pub fn numerator(&self) -> Vec<f64> {
        self.inner.numerator().to_vec()
    }

    /// Denominator coefficients, highest degree first
    #[getter]
    pub fn denominator(&self) -> Vec<f64> {
        self.inner.denominator().to_vec()
    }

    /// System order (denominator degree)
    #[getter]
    pub fn order(&self) -> usize {
        self.inner.order()
    }

    /// Evaluate H(jw) at angular frequency w in rad/s
    pub fn evaluate(&self, w: f64) -> Complex64 {
        self.inner.evaluate(w)
    }

    /// Compute Bode data over log-spaced angular frequencies
    ///
    /// Args:
    ///     start: First angular frequency in rad/s
    ///     stop: Last angular frequency in rad/s
    ///     npoints: Number of points (default: 500)
    ///
    /// Returns:
    ///     Tuple of numpy arrays (w, magnitude_db, phase_deg)
    #[pyo3(signature = (start, stop, npoints=DEFAULT_PLOT_POINTS))]
    pub fn bode<'py>(
        &self,
        py: Python<'py>,
        start: f64,
        stop: f64,
        npoints: usize,
    ) -> PyResult<BodeArrays<'py>> {
        let range = FrequencyRange::new(start, stop).map_err(value_error)?;
        check_npoints(npoints)?;

        let bode = self.inner.bode(range.min(), range.max(), npoints);
        Ok((
            bode.frequency.w().to_pyarray(py),
            bode.magnitude_db.to_pyarray(py),
            bode.phase_deg.to_pyarray(py),
        ))
    }

    /// Compute gain/phase margins and the stability verdict
    ///
    /// The verdict uses the magnitude trace of a plotting sweep over
    /// [start, stop]; the margins come from separate dense searches.
    ///
    /// Args:
    ///     start: First angular frequency of the plotting sweep in rad/s
    ///     stop: Last angular frequency of the plotting sweep in rad/s
    ///     npoints: Plotting sweep points (default: 500)
    ///     search_points: Margin search points (default: 1000000)
    ///     tolerance: Crossover tolerance in dB / degrees (default: 1e-3)
    #[pyo3(signature = (start, stop, npoints=DEFAULT_PLOT_POINTS, search_points=MARGIN_SEARCH_POINTS, tolerance=CROSSOVER_TOL))]
    pub fn margins(
        &self,
        start: f64,
        stop: f64,
        npoints: usize,
        search_points: usize,
        tolerance: f64,
    ) -> PyResult<PyStabilityMargins> {
        let range = FrequencyRange::new(start, stop).map_err(value_error)?;
        check_npoints(npoints)?;
        check_npoints(search_points)?;

        let search = MarginSearch {
            npoints: search_points,
            ..MarginSearch::default()
        }
        .with_tolerance(tolerance);
        let analyzer = Analyzer::new()
            .with_plot_points(npoints)
            .with_search(search);

        let analysis = analyzer.analyze(&self.inner, &range);
        Ok(PyStabilityMargins::from_margins(analysis.margins))
    }

    fn __repr__(&self) -> String {
        format!(
            "TransferFunction(numerator={:?}, denominator={:?})",
            self.inner.numerator(),
            self.inner.denominator()
        )
    }
}

impl PyTransferFunction {
    /// Get the inner TransferFunction reference
    pub fn inner(&self) -> &TransferFunction {
        &self.inner
    }
}
