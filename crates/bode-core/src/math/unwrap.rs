//! Phase unwrapping
//!
//! Raw phase from `arg(H)` is wrapped to (-180°, 180°]. Plotting or searching
//! the raw values shows spurious ±360° jumps, so every sweep runs its samples
//! through a [`PhaseUnwrapper`] to get a continuous trace.

use crate::constants::{FULL_TURN_DEG, HALF_TURN_DEG};

/// Running phase unwrapper for one sweep
///
/// Each sweep owns its own unwrapper. Start a new sweep with a new value
/// or call [`PhaseUnwrapper::reset`].
///
/// # Example
/// ```
/// use bode_core::math::PhaseUnwrapper;
/// let mut unwrapper = PhaseUnwrapper::new();
/// assert_eq!(unwrapper.unwrap(-170.0), -170.0);
/// assert_eq!(unwrapper.unwrap(170.0), -190.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PhaseUnwrapper {
    last_unwrapped: f64,
    started: bool,
}

impl PhaseUnwrapper {
    /// Create an unwrapper with fresh state
    pub fn new() -> Self {
        Self::default()
    }

    /// Unwrap the next wrapped phase sample (degrees)
    ///
    /// Non-finite samples are returned unchanged and leave the state alone,
    /// so a pole sitting on the grid does not break the rest of the trace.
    pub fn unwrap(&mut self, phase_deg: f64) -> f64 {
        if !phase_deg.is_finite() {
            return phase_deg;
        }

        let unwrapped = if self.started {
            let diff = phase_deg - self.last_unwrapped;
            if diff > HALF_TURN_DEG {
                phase_deg - FULL_TURN_DEG * ((diff - HALF_TURN_DEG) / FULL_TURN_DEG).ceil()
            } else if diff < -HALF_TURN_DEG {
                phase_deg + FULL_TURN_DEG * ((diff.abs() - HALF_TURN_DEG) / FULL_TURN_DEG).ceil()
            } else {
                phase_deg
            }
        } else {
            phase_deg
        };

        self.last_unwrapped = unwrapped;
        self.started = true;
        unwrapped
    }

    /// Last unwrapped phase, 0 before the first sample
    #[inline]
    pub fn last(&self) -> f64 {
        self.last_unwrapped
    }

    /// Forget all state so the next sample starts a new sweep
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Unwrap a whole sequence of wrapped phase samples (degrees)
pub fn unwrap_phase_deg(phase_deg: &[f64]) -> Vec<f64> {
    let mut unwrapper = PhaseUnwrapper::new();
    phase_deg.iter().map(|&p| unwrapper.unwrap(p)).collect()
}
