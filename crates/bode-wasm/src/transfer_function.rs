//! WASM bindings for TransferFunction class

use bode_core::constants::DEFAULT_PLOT_POINTS;
use bode_core::input::parse_transfer_function;
use bode_core::{Analyzer, FrequencyRange, MarginSearch, TransferFunction};
use js_sys::Float64Array;
use wasm_bindgen::prelude::*;

use crate::response::{WasmBodeResponse, WasmStabilityMargins};

fn js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn check_npoints(npoints: usize) -> Result<usize, JsValue> {
    if npoints < 2 {
        return Err(JsValue::from_str(&format!(
            "npoints must be at least 2, got {}",
            npoints
        )));
    }
    Ok(npoints)
}

fn check_tolerance(tolerance: f64) -> Result<f64, JsValue> {
    if !(tolerance.is_finite() && tolerance > 0.0) {
        return Err(JsValue::from_str(&format!(
            "tolerance must be a positive number, got {}",
            tolerance
        )));
    }
    Ok(tolerance)
}

/// Rational transfer function for WASM
#[wasm_bindgen]
pub struct WasmTransferFunction {
    inner: TransferFunction,
}

#[wasm_bindgen]
impl WasmTransferFunction {
    /// Create a TransferFunction from comma-separated coefficients
    ///
    /// @param numerator - N(s) coefficients, highest degree first (e.g. "1, 2")
    /// @param denominator - D(s) coefficients, highest degree first (e.g. "1, 3, 2")
    #[wasm_bindgen(constructor)]
    pub fn new(numerator: &str, denominator: &str) -> Result<WasmTransferFunction, JsValue> {
        let tf = parse_transfer_function(numerator, denominator).map_err(js_error)?;
        Ok(WasmTransferFunction { inner: tf })
    }

    /// Create a TransferFunction from coefficient arrays
    #[wasm_bindgen(js_name = fromCoefficients)]
    pub fn from_coefficients(
        numerator: Vec<f64>,
        denominator: Vec<f64>,
    ) -> Result<WasmTransferFunction, JsValue> {
        let tf = TransferFunction::new(numerator, denominator).map_err(js_error)?;
        Ok(WasmTransferFunction { inner: tf })
    }

    /// Numerator coefficients
    #[wasm_bindgen(getter)]
    pub fn numerator(&self) -> Float64Array {
        Float64Array::from(self.inner.numerator())
    }

    /// Denominator coefficients
    #[wasm_bindgen(getter)]
    pub fn denominator(&self) -> Float64Array {
        Float64Array::from(self.inner.denominator())
    }

    /// System order
    #[wasm_bindgen(getter)]
    pub fn order(&self) -> usize {
        self.inner.order()
    }

    /// Evaluate H(jw), returned as [re, im]
    pub fn evaluate(&self, w: f64) -> Float64Array {
        let h = self.inner.evaluate(w);
        Float64Array::from([h.re, h.im].as_slice())
    }

    /// Compute Bode data over log-spaced angular frequencies
    ///
    /// @param start - First angular frequency in rad/s
    /// @param stop - Last angular frequency in rad/s
    /// @param npoints - Number of points (default: 500)
    pub fn bode(
        &self,
        start: f64,
        stop: f64,
        npoints: Option<usize>,
    ) -> Result<WasmBodeResponse, JsValue> {
        let range = FrequencyRange::new(start, stop).map_err(js_error)?;
        let npoints = check_npoints(npoints.unwrap_or(DEFAULT_PLOT_POINTS))?;

        let bode = self.inner.bode(range.min(), range.max(), npoints);
        Ok(WasmBodeResponse::from_response(bode))
    }

    /// Compute gain/phase margins and the stability verdict
    ///
    /// @param start - First angular frequency of the plotting sweep in rad/s
    /// @param stop - Last angular frequency of the plotting sweep in rad/s
    /// @param npoints - Plotting sweep points (default: 500)
    /// @param search_points - Margin search points (default: 1000000)
    /// @param tolerance - Crossover tolerance in dB / degrees (default: 1e-3)
    pub fn margins(
        &self,
        start: f64,
        stop: f64,
        npoints: Option<usize>,
        search_points: Option<usize>,
        tolerance: Option<f64>,
    ) -> Result<WasmStabilityMargins, JsValue> {
        let range = FrequencyRange::new(start, stop).map_err(js_error)?;
        let npoints = check_npoints(npoints.unwrap_or(DEFAULT_PLOT_POINTS))?;

        let mut search = MarginSearch::default();
        if let Some(points) = search_points {
            search.npoints = check_npoints(points)?;
        }
        if let Some(tolerance) = tolerance {
            search = search.with_tolerance(check_tolerance(tolerance)?);
        }

        let analysis = Analyzer::new()
            .with_plot_points(npoints)
            .with_search(search)
            .analyze(&self.inner, &range);
        Ok(WasmStabilityMargins::from_margins(analysis.margins))
    }
}

impl WasmTransferFunction {
    /// Get the inner TransferFunction reference
    pub fn inner(&self) -> &TransferFunction {
        &self.inner
    }
}
