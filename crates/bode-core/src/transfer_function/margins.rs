//! Gain and phase margin search
//!
//! Crossovers are located by scanning a dense logarithmic sweep and taking
//! the first sample within tolerance of the target. No interpolation is done
//! between samples, and the scan stops at the first hit.

use log::debug;

use super::core::TransferFunction;
use super::response::FrequencyResponseSample;
use crate::constants::{
    CROSSOVER_TOL, GAIN_CROSSOVER_DB, HALF_TURN_DEG, MARGIN_SEARCH_POINTS, MARGIN_SEARCH_START,
    MARGIN_SEARCH_STOP, PHASE_CROSSOVER_DEG,
};

/// Resolution and range of a margin search sweep
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarginSearch {
    /// First angular frequency in rad/s
    pub start: f64,
    /// Last angular frequency in rad/s
    pub stop: f64,
    /// Number of log-spaced samples
    pub npoints: usize,
    /// Absolute tolerance (degrees for phase, dB for magnitude)
    pub tolerance: f64,
}

impl Default for MarginSearch {
    fn default() -> Self {
        Self {
            start: MARGIN_SEARCH_START,
            stop: MARGIN_SEARCH_STOP,
            npoints: MARGIN_SEARCH_POINTS,
            tolerance: CROSSOVER_TOL,
        }
    }
}

impl MarginSearch {
    /// Create a search over [start, stop] with `npoints` samples and the default tolerance
    pub fn new(start: f64, stop: f64, npoints: usize) -> Self {
        Self {
            start,
            stop,
            npoints,
            tolerance: CROSSOVER_TOL,
        }
    }

    /// Set the crossover tolerance
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }
}

/// The sample at which a crossover was detected
pub type Crossover = FrequencyResponseSample;

impl TransferFunction {
    /// Scan `search` for the first sample matching `is_crossover`
    fn find_first(
        &self,
        search: &MarginSearch,
        is_crossover: impl Fn(&FrequencyResponseSample) -> bool,
    ) -> Option<Crossover> {
        self.response_sweep(search.start, search.stop, search.npoints)
            .find(|sample| is_crossover(sample))
    }

    /// Find the first phase crossover (unwrapped phase within tolerance of -180°)
    pub fn find_phase_crossover(&self, search: &MarginSearch) -> Option<Crossover> {
        let crossover = self.find_first(search, |s| {
            (s.phase_deg - PHASE_CROSSOVER_DEG).abs() < search.tolerance
        });
        match &crossover {
            Some(c) => debug!(
                "Phase crossover at {:e} rad/s ({:.4} dB)",
                c.w, c.magnitude_db
            ),
            None => debug!(
                "No phase crossover in [{:e}, {:e}] rad/s",
                search.start, search.stop
            ),
        }
        crossover
    }

    /// Find the first gain crossover (magnitude within tolerance of 0 dB)
    pub fn find_gain_crossover(&self, search: &MarginSearch) -> Option<Crossover> {
        let crossover = self.find_first(search, |s| {
            (s.magnitude_db - GAIN_CROSSOVER_DB).abs() < search.tolerance
        });
        match &crossover {
            Some(c) => debug!("Gain crossover at {:e} rad/s ({:.4}°)", c.w, c.phase_deg),
            None => debug!(
                "No gain crossover in [{:e}, {:e}] rad/s",
                search.start, search.stop
            ),
        }
        crossover
    }

    /// Gain margin in dB: -(magnitude at the phase crossover), +inf if none
    ///
    /// # Example
    /// ```
    /// use bode_core::{MarginSearch, TransferFunction};
    /// // An integrator never reaches -180°
    /// let tf = TransferFunction::new(vec![1.0], vec![1.0, 0.0]).unwrap();
    /// let search = MarginSearch::new(0.1, 10.0, 1001);
    /// assert_eq!(tf.gain_margin(&search), f64::INFINITY);
    /// ```
    pub fn gain_margin(&self, search: &MarginSearch) -> f64 {
        gain_margin_at(self.find_phase_crossover(search).as_ref())
    }

    /// Phase margin in degrees: 180 + (phase at the gain crossover), +inf if none
    pub fn phase_margin(&self, search: &MarginSearch) -> f64 {
        phase_margin_at(self.find_gain_crossover(search).as_ref())
    }
}

/// Gain margin from an optional phase crossover
pub(crate) fn gain_margin_at(phase_crossover: Option<&Crossover>) -> f64 {
    phase_crossover.map_or(f64::INFINITY, |c| -c.magnitude_db)
}

/// Phase margin from an optional gain crossover
pub(crate) fn phase_margin_at(gain_crossover: Option<&Crossover>) -> f64 {
    gain_crossover.map_or(f64::INFINITY, |c| HALF_TURN_DEG + c.phase_deg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// K / (s + a)^3 with a = 10/sqrt(3): phase is -180° at w = 10,
    /// and K puts |H(j10)| at 2 (+6.02 dB)
    fn third_order_plant() -> TransferFunction {
        let a = 10.0 / 3.0_f64.sqrt();
        let k = 2.0 * (100.0 + a * a).powf(1.5);
        TransferFunction::new(vec![k], vec![1.0, 3.0 * a, 3.0 * a * a, a * a * a]).unwrap()
    }

    #[test]
    fn test_default_search() {
        let search = MarginSearch::default();
        assert_eq!(search.start, 1e-2);
        assert_eq!(search.stop, 1e7);
        assert_eq!(search.npoints, 1_000_000);
        assert_eq!(search.tolerance, 1e-3);
    }

    #[test]
    fn test_phase_crossover_location() {
        let tf = third_order_plant();
        let search = MarginSearch::new(1.0, 100.0, 100_000).with_tolerance(1e-2);

        let c = tf.find_phase_crossover(&search).expect("phase crossover");
        assert_relative_eq!(c.w, 10.0, max_relative = 1e-3);
        assert_relative_eq!(c.phase_deg, -180.0, epsilon = 1e-2);
        assert_relative_eq!(c.magnitude_db, 20.0 * 2.0_f64.log10(), epsilon = 1e-2);
    }

    #[test]
    fn test_gain_margin_negative_when_unstable() {
        let tf = third_order_plant();
        let search = MarginSearch::new(1.0, 100.0, 100_000).with_tolerance(1e-2);

        assert_relative_eq!(tf.gain_margin(&search), -6.0206, epsilon = 1e-2);
    }

    #[test]
    fn test_phase_margin_of_third_order_plant() {
        // |H| = 1 where w^2 + a^2 = (100 + a^2) * 2^(2/3)
        let tf = third_order_plant();
        let search = MarginSearch::new(1.0, 100.0, 100_000).with_tolerance(1e-2);

        let a2 = 100.0 / 3.0;
        let wc = ((100.0 + a2) * 2.0_f64.powf(2.0 / 3.0) - a2).sqrt();
        let expected = 180.0 - 3.0 * (wc / a2.sqrt()).atan().to_degrees();

        let c = tf.find_gain_crossover(&search).expect("gain crossover");
        assert_relative_eq!(c.w, wc, max_relative = 1e-3);
        assert_relative_eq!(tf.phase_margin(&search), expected, epsilon = 0.05);
        assert!(expected < 0.0);
    }

    #[test]
    fn test_integrator_margins() {
        // 1/s: |H| = 1 at w = 1 (a grid point), phase is -90° everywhere
        let tf = TransferFunction::new(vec![1.0], vec![1.0, 0.0]).unwrap();
        let search = MarginSearch::new(0.1, 10.0, 10_001);

        assert_eq!(tf.gain_margin(&search), f64::INFINITY);
        assert_relative_eq!(tf.phase_margin(&search), 90.0, epsilon = 1e-9);
    }

    #[test]
    fn test_no_gain_crossover() {
        // Magnitude stays below -20 dB
        let tf = TransferFunction::new(vec![0.1], vec![1.0, 1.0]).unwrap();
        let search = MarginSearch::new(0.01, 100.0, 10_000);

        assert!(tf.find_gain_crossover(&search).is_none());
        assert_eq!(tf.phase_margin(&search), f64::INFINITY);
    }

    #[test]
    fn test_first_crossover_only() {
        let tf = third_order_plant();
        let coarse = MarginSearch::new(1.0, 100.0, 100_000).with_tolerance(1e-2);
        let c = tf.find_phase_crossover(&coarse).expect("phase crossover");

        // Every sample before the reported one is outside tolerance
        let earlier = tf
            .response_sweep(coarse.start, coarse.stop, coarse.npoints)
            .take_while(|s| s.w < c.w)
            .filter(|s| (s.phase_deg + 180.0).abs() < coarse.tolerance)
            .count();
        assert_eq!(earlier, 0);
    }
}
