//! WASM bindings for bode-core
//!
//! This module exposes bode-core functionality to JavaScript/WASM.

use wasm_bindgen::prelude::*;

mod response;
mod transfer_function;

pub use response::{WasmBodeResponse, WasmStabilityMargins};
pub use transfer_function::WasmTransferFunction;

/// Get the library version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
