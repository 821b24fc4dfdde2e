//! Python bindings for bode-core
//!
//! This module exposes bode-core functionality to Python via PyO3.
//!
//! ## Classes
//!
//! - `TransferFunction` - Rational H(s) with Bode sweeps and margin search
//! - `StabilityMargins` - Gain/phase margins and stability verdict

use pyo3::prelude::*;

mod margins;
mod transfer_function;

pub use margins::PyStabilityMargins;
pub use transfer_function::PyTransferFunction;

/// bode_python - Python bindings for bode-core
///
/// Frequency response and stability margins of rational transfer functions.
///
/// Example:
///     >>> import bode_python as bode
///     >>> tf = bode.TransferFunction([1.0], [1.0, 1.0])
///     >>> w, mag_db, phase_deg = tf.bode(0.01, 100.0)
///     >>> print(tf.margins(0.01, 100.0).verdict)
#[pymodule]
fn bode_python(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyTransferFunction>()?;
    m.add_class::<PyStabilityMargins>()?;

    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    Ok(())
}
