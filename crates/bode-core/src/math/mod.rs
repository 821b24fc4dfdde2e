//! Mathematical functions module
//!
//! Provides the dB/degree conversions and phase unwrapping used by every sweep.

pub mod conversions;
pub mod unwrap;

pub use conversions::*;
pub use unwrap::{unwrap_phase_deg, PhaseUnwrapper};
