//! Full analysis of a transfer function
//!
//! One request runs three independent sweeps in sequence: the plotting
//! sweep and the two margin searches. The verdict uses the plotting
//! sweep's magnitude trace.

use log::debug;

use crate::constants::DEFAULT_PLOT_POINTS;
use crate::input::FrequencyRange;
use crate::stability::{classify, StabilityMargins};
use crate::transfer_function::{
    gain_margin_at, phase_margin_at, BodeResponse, MarginSearch, TransferFunction,
};

/// Analysis settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Analyzer {
    /// Number of points in the plotting sweep
    pub plot_points: usize,
    /// Range and resolution of the margin searches
    pub search: MarginSearch,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self {
            plot_points: DEFAULT_PLOT_POINTS,
            search: MarginSearch::default(),
        }
    }
}

/// Result of one analysis request
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    /// Plotting sweep over the requested range
    pub response: BodeResponse,
    /// Margins from the dense searches
    pub margins: StabilityMargins,
}

impl Analyzer {
    /// Create an analyzer with the default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the plotting sweep resolution
    pub fn with_plot_points(mut self, plot_points: usize) -> Self {
        self.plot_points = plot_points;
        self
    }

    /// Set the margin search
    pub fn with_search(mut self, search: MarginSearch) -> Self {
        self.search = search;
        self
    }

    /// Compute margins and verdict, classifying against `response`'s magnitude trace
    pub fn margins(&self, tf: &TransferFunction, response: &BodeResponse) -> StabilityMargins {
        let phase_crossover = tf.find_phase_crossover(&self.search);
        let gain_crossover = tf.find_gain_crossover(&self.search);

        let gain_margin_db = gain_margin_at(phase_crossover.as_ref());
        let phase_margin_deg = phase_margin_at(gain_crossover.as_ref());

        let verdict = match response.magnitude_db.as_slice() {
            Some(magnitude) => classify(phase_margin_deg, gain_margin_db, magnitude),
            None => classify(
                phase_margin_deg,
                gain_margin_db,
                &response.magnitude_db.to_vec(),
            ),
        };
        debug!(
            "Margins: PM = {} deg, GM = {} dB, verdict = {}",
            phase_margin_deg, gain_margin_db, verdict
        );

        StabilityMargins {
            phase_margin_deg,
            gain_margin_db,
            verdict,
            gain_crossover,
            phase_crossover,
        }
    }

    /// Run the plotting sweep over `range` and the margin searches
    ///
    /// # Example
    /// ```
    /// use bode_core::{Analyzer, FrequencyRange, MarginSearch, Stability, TransferFunction};
    /// let tf = TransferFunction::new(vec![1.0], vec![1.0, 1.0]).unwrap();
    /// let range = FrequencyRange::new(0.01, 100.0).unwrap();
    /// let analyzer = Analyzer::new().with_search(MarginSearch::new(0.01, 100.0, 10_000));
    /// let analysis = analyzer.analyze(&tf, &range);
    /// assert_eq!(analysis.margins.verdict, Stability::Stable);
    /// ```
    pub fn analyze(&self, tf: &TransferFunction, range: &FrequencyRange) -> Analysis {
        let response = tf.bode(range.min(), range.max(), self.plot_points);
        let margins = self.margins(tf, &response);
        Analysis { response, margins }
    }
}
