//! Numerical constants for frequency response analysis
//!
//! Provides the default sweep resolutions, search bounds and tolerances
//! used throughout the library.

/// Default number of points for a plotting sweep.
pub const DEFAULT_PLOT_POINTS: usize = 500;

/// Lower bound of the margin search sweep in rad/s.
pub const MARGIN_SEARCH_START: f64 = 1e-2;

/// Upper bound of the margin search sweep in rad/s.
pub const MARGIN_SEARCH_STOP: f64 = 1e7;

/// Number of samples in each margin search sweep.
/// Crossovers are located by dense scanning, not root finding.
pub const MARGIN_SEARCH_POINTS: usize = 1_000_000;

/// Absolute crossover tolerance (degrees for phase, dB for magnitude).
pub const CROSSOVER_TOL: f64 = 1e-3;

/// Phase at which the phase crossover is detected, in degrees.
pub const PHASE_CROSSOVER_DEG: f64 = -180.0;

/// Magnitude at which the gain crossover is detected, in dB.
pub const GAIN_CROSSOVER_DB: f64 = 0.0;

/// Half a turn in degrees. Phase steps larger than this are unwrapped.
pub const HALF_TURN_DEG: f64 = 180.0;

/// Full turn in degrees.
pub const FULL_TURN_DEG: f64 = 360.0;
