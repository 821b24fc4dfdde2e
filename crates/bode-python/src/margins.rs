//! Python bindings for StabilityMargins

use bode_core::StabilityMargins;
use pyo3::prelude::*;

/// Python wrapper for StabilityMargins
#[pyclass(name = "StabilityMargins")]
#[derive(Clone)]
pub struct PyStabilityMargins {
    inner: StabilityMargins,
}

#[pymethods]
impl PyStabilityMargins {
    /// Phase margin in degrees (inf if there is no gain crossover)
    #[getter]
    pub fn phase_margin(&self) -> f64 {
        self.inner.phase_margin_deg
    }

    /// Gain margin in dB (inf if there is no phase crossover)
    #[getter]
    pub fn gain_margin(&self) -> f64 {
        self.inner.gain_margin_db
    }

    /// Stability verdict: 'stable', 'marginally_stable', 'possibly_unstable' or 'unstable'
    #[getter]
    pub fn verdict(&self) -> &'static str {
        self.inner.verdict.as_str()
    }

    /// Gain crossover frequency in rad/s, or None
    #[getter]
    pub fn gain_crossover_w(&self) -> Option<f64> {
        self.inner.gain_crossover.map(|c| c.w)
    }

    /// Phase crossover frequency in rad/s, or None
    #[getter]
    pub fn phase_crossover_w(&self) -> Option<f64> {
        self.inner.phase_crossover.map(|c| c.w)
    }

    fn __repr__(&self) -> String {
        format!(
            "StabilityMargins(phase_margin={}, gain_margin={}, verdict='{}')",
            self.phase_margin(),
            self.gain_margin(),
            self.verdict()
        )
    }
}

impl PyStabilityMargins {
    /// Create from existing StabilityMargins
    pub fn from_margins(margins: StabilityMargins) -> Self {
        Self { inner: margins }
    }
}
