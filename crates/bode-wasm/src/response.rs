//! WASM bindings for Bode data and stability margins

use bode_core::{BodeResponse, StabilityMargins};
use js_sys::Float64Array;
use wasm_bindgen::prelude::*;

/// Bode data for WASM: three equal-length arrays
#[wasm_bindgen]
pub struct WasmBodeResponse {
    inner: BodeResponse,
}

#[wasm_bindgen]
impl WasmBodeResponse {
    /// Angular frequencies in rad/s
    #[wasm_bindgen(getter)]
    pub fn w(&self) -> Float64Array {
        Float64Array::from(self.inner.frequency.w())
    }

    /// Magnitude in dB
    #[wasm_bindgen(getter, js_name = magnitudeDb)]
    pub fn magnitude_db(&self) -> Float64Array {
        Float64Array::from(self.inner.magnitude_db.to_vec().as_slice())
    }

    /// Unwrapped phase in degrees
    #[wasm_bindgen(getter, js_name = phaseDeg)]
    pub fn phase_deg(&self) -> Float64Array {
        Float64Array::from(self.inner.phase_deg.to_vec().as_slice())
    }

    /// Number of samples
    #[wasm_bindgen(getter)]
    pub fn length(&self) -> usize {
        self.inner.len()
    }
}

impl WasmBodeResponse {
    /// Create from existing BodeResponse
    pub fn from_response(response: BodeResponse) -> Self {
        Self { inner: response }
    }
}

/// Gain/phase margins and verdict for WASM
#[wasm_bindgen]
pub struct WasmStabilityMargins {
    inner: StabilityMargins,
}

#[wasm_bindgen]
impl WasmStabilityMargins {
    /// Phase margin in degrees (Infinity if there is no gain crossover)
    #[wasm_bindgen(getter, js_name = phaseMargin)]
    pub fn phase_margin(&self) -> f64 {
        self.inner.phase_margin_deg
    }

    /// Gain margin in dB (Infinity if there is no phase crossover)
    #[wasm_bindgen(getter, js_name = gainMargin)]
    pub fn gain_margin(&self) -> f64 {
        self.inner.gain_margin_db
    }

    /// Verdict: 'stable', 'marginally_stable', 'possibly_unstable' or 'unstable'
    #[wasm_bindgen(getter)]
    pub fn verdict(&self) -> String {
        self.inner.verdict.to_string()
    }

    /// Gain crossover frequency in rad/s, if found
    #[wasm_bindgen(getter, js_name = gainCrossoverW)]
    pub fn gain_crossover_w(&self) -> Option<f64> {
        self.inner.gain_crossover.map(|c| c.w)
    }

    /// Phase crossover frequency in rad/s, if found
    #[wasm_bindgen(getter, js_name = phaseCrossoverW)]
    pub fn phase_crossover_w(&self) -> Option<f64> {
        self.inner.phase_crossover.map(|c| c.w)
    }
}

impl WasmStabilityMargins {
    /// Create from existing StabilityMargins
    pub fn from_margins(margins: StabilityMargins) -> Self {
        Self { inner: margins }
    }
}
