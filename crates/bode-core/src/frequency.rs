//! Frequency module - logarithmic angular frequency sweeps
//!
//! All frequencies are angular frequencies in rad/s. Sweeps are spaced
//! uniformly in log10(ω), the usual grid for Bode analysis.

/// Streaming generator for a logarithmically spaced sweep
///
/// Yields `npoints` angular frequencies from `start` to `stop` without
/// allocating, which keeps million-point margin searches cheap.
///
/// # Example
/// ```
/// use bode_core::frequency::LogSweep;
/// let w: Vec<f64> = LogSweep::new(1.0, 100.0, 3).collect();
/// assert_eq!(w.len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct LogSweep {
    log_start: f64,
    log_span: f64,
    npoints: usize,
    index: usize,
}

impl LogSweep {
    /// Create a new sweep
    ///
    /// # Arguments
    /// * `start` - First angular frequency in rad/s (> 0)
    /// * `stop` - Last angular frequency in rad/s (> start)
    /// * `npoints` - Number of samples (>= 2)
    pub fn new(start: f64, stop: f64, npoints: usize) -> Self {
        let log_start = start.log10();
        let log_stop = stop.log10();
        Self {
            log_start,
            log_span: log_stop - log_start,
            npoints,
            index: 0,
        }
    }

    /// Angular frequency of sample `i`
    #[inline]
    pub fn nth_frequency(&self, i: usize) -> f64 {
        if self.npoints < 2 {
            return 10.0_f64.powf(self.log_start);
        }
        let log_w = self.log_start + self.log_span * i as f64 / (self.npoints - 1) as f64;
        10.0_f64.powf(log_w)
    }

    /// Total number of samples in the sweep
    #[inline]
    pub fn npoints(&self) -> usize {
        self.npoints
    }
}

impl Iterator for LogSweep {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.index >= self.npoints {
            return None;
        }
        let w = self.nth_frequency(self.index);
        self.index += 1;
        Some(w)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.npoints - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for LogSweep {}

/// Logarithmically spaced angular frequencies collected into a vector
pub fn log_space(start: f64, stop: f64, npoints: usize) -> Vec<f64> {
    LogSweep::new(start, stop, npoints).collect()
}

/// An angular frequency grid
#[derive(Debug, Clone, PartialEq)]
pub struct Frequency {
    /// Angular frequency vector in rad/s
    w: Vec<f64>,
}

impl Frequency {
    /// Create a logarithmically spaced grid from start/stop/npoints
    ///
    /// # Example
    /// ```
    /// use bode_core::frequency::Frequency;
    /// let freq = Frequency::log(0.1, 10.0, 3);
    /// assert_eq!(freq.npoints(), 3);
    /// ```
    pub fn log(start: f64, stop: f64, npoints: usize) -> Self {
        Self {
            w: log_space(start, stop, npoints),
        }
    }

    /// Create from an existing angular frequency vector
    pub fn from_w(w: Vec<f64>) -> Self {
        Self { w }
    }

    /// Angular frequency vector in rad/s
    #[inline]
    pub fn w(&self) -> &[f64] {
        &self.w
    }

    /// Get the number of frequency points
    #[inline]
    pub fn npoints(&self) -> usize {
        self.w.len()
    }

    /// First angular frequency in rad/s
    #[inline]
    pub fn start(&self) -> f64 {
        *self.w.first().unwrap_or(&0.0)
    }

    /// Last angular frequency in rad/s
    #[inline]
    pub fn stop(&self) -> f64 {
        *self.w.last().unwrap_or(&0.0)
    }

    /// Number of decades covered by the grid
    pub fn span_decades(&self) -> f64 {
        if self.w.len() < 2 {
            return 0.0;
        }
        self.stop().log10() - self.start().log10()
    }
}
