//! Transfer function module - rational H(s) = N(s) / D(s)
//!
//! Provides the TransferFunction struct, its evaluation on the imaginary
//! axis, Bode sweeps and crossover searches.

mod core;
mod eval;
mod margins;
mod response;

pub use self::core::{TransferFunction, TransferFunctionError};
pub use margins::{Crossover, MarginSearch};
pub use response::{BodeResponse, FrequencyResponseSample, ResponseSweep};

pub(crate) use margins::{gain_margin_at, phase_margin_at};
