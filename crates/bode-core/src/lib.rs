//! bode-core: Frequency response and stability margins of LTI systems
//!
//! Analyzes rational transfer functions H(s) = N(s)/D(s) on the imaginary
//! axis.
//!
//! ## Modules
//!
//! - `frequency` - Logarithmic angular frequency sweeps
//! - `math` - dB/degree conversions and phase unwrapping
//! - `transfer_function` - H(jω) evaluation, Bode sweeps, crossover search
//! - `stability` - Stability verdict from gain/phase margins
//! - `analysis` - Plotting sweep plus margin searches for one request
//! - `input` - Coefficient and frequency range validation

pub mod analysis;
pub mod constants;
pub mod frequency;
pub mod input;
pub mod math;
pub mod stability;
pub mod transfer_function;

pub use analysis::{Analysis, Analyzer};
pub use frequency::{Frequency, LogSweep};
pub use input::{FrequencyRange, InputError};
pub use stability::{classify, Stability, StabilityMargins};
pub use transfer_function::{
    BodeResponse, Crossover, FrequencyResponseSample, MarginSearch, TransferFunction,
    TransferFunctionError,
};
