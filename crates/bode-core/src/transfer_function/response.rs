//! Bode response generation
//!
//! Sweeps H(jω) over a logarithmic grid and records magnitude (dB) and
//! unwrapped phase (degrees) for each angular frequency.

use log::debug;
use ndarray::Array1;

use super::core::TransferFunction;
use crate::frequency::{Frequency, LogSweep};
use crate::math::conversions::{complex_2_db, complex_2_degree};
use crate::math::PhaseUnwrapper;

/// One point of a frequency response
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrequencyResponseSample {
    /// Angular frequency in rad/s
    pub w: f64,
    /// Magnitude in dB
    pub magnitude_db: f64,
    /// Unwrapped phase in degrees
    pub phase_deg: f64,
}

/// Streams [`FrequencyResponseSample`]s for a sweep
///
/// Owns its own [`PhaseUnwrapper`], so two sweeps over the same
/// transfer function never share phase state.
#[derive(Debug, Clone)]
pub struct ResponseSweep<'a> {
    tf: &'a TransferFunction,
    sweep: LogSweep,
    unwrapper: PhaseUnwrapper,
}

impl<'a> ResponseSweep<'a> {
    pub fn new(tf: &'a TransferFunction, sweep: LogSweep) -> Self {
        Self {
            tf,
            sweep,
            unwrapper: PhaseUnwrapper::new(),
        }
    }
}

impl Iterator for ResponseSweep<'_> {
    type Item = FrequencyResponseSample;

    fn next(&mut self) -> Option<Self::Item> {
        let w = self.sweep.next()?;
        let h = self.tf.evaluate(w);
        Some(FrequencyResponseSample {
            w,
            magnitude_db: complex_2_db(h),
            phase_deg: self.unwrapper.unwrap(complex_2_degree(h)),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.sweep.size_hint()
    }
}

impl ExactSizeIterator for ResponseSweep<'_> {}

/// Bode data for a sweep: three equal-length sequences
///
/// A pole on the grid leaves NaN in `phase_deg`, so `==` between two
/// identical responses is false there; compare bit patterns instead.
#[derive(Debug, Clone, PartialEq)]
pub struct BodeResponse {
    /// Angular frequency grid
    pub frequency: Frequency,
    /// Magnitude in dB [nfreq]
    pub magnitude_db: Array1<f64>,
    /// Unwrapped phase in degrees [nfreq]
    pub phase_deg: Array1<f64>,
}

impl BodeResponse {
    /// Number of samples
    #[inline]
    pub fn len(&self) -> usize {
        self.frequency.npoints()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sample at index `i`
    pub fn get(&self, i: usize) -> Option<FrequencyResponseSample> {
        let w = *self.frequency.w().get(i)?;
        Some(FrequencyResponseSample {
            w,
            magnitude_db: self.magnitude_db[i],
            phase_deg: self.phase_deg[i],
        })
    }

    /// Iterate over the samples in increasing frequency order
    pub fn samples(&self) -> impl Iterator<Item = FrequencyResponseSample> + '_ {
        (0..self.len()).filter_map(move |i| self.get(i))
    }

    /// True if every magnitude sample is below 0 dB
    pub fn all_below_unity(&self) -> bool {
        self.magnitude_db.iter().all(|&m| m < 0.0)
    }

    /// True if every magnitude sample is above 0 dB
    pub fn all_above_unity(&self) -> bool {
        self.magnitude_db.iter().all(|&m| m > 0.0)
    }
}

impl FromIterator<FrequencyResponseSample> for BodeResponse {
    fn from_iter<I: IntoIterator<Item = FrequencyResponseSample>>(iter: I) -> Self {
        let mut w = Vec::new();
        let mut magnitude_db = Vec::new();
        let mut phase_deg = Vec::new();
        for sample in iter {
            w.push(sample.w);
            magnitude_db.push(sample.magnitude_db);
            phase_deg.push(sample.phase_deg);
        }
        Self {
            frequency: Frequency::from_w(w),
            magnitude_db: Array1::from_vec(magnitude_db),
            phase_deg: Array1::from_vec(phase_deg),
        }
    }
}

impl TransferFunction {
    /// Stream the response over a logarithmic sweep
    pub fn response_sweep(&self, start: f64, stop: f64, npoints: usize) -> ResponseSweep<'_> {
        ResponseSweep::new(self, LogSweep::new(start, stop, npoints))
    }

    /// Compute Bode data over `npoints` log-spaced frequencies in [start, stop]
    ///
    /// # Arguments
    /// * `start` - First angular frequency in rad/s (> 0)
    /// * `stop` - Last angular frequency in rad/s (> start)
    /// * `npoints` - Number of samples (>= 2)
    ///
    /// # Example
    /// ```
    /// use bode_core::TransferFunction;
    /// let tf = TransferFunction::new(vec![1.0], vec![1.0, 1.0]).unwrap();
    /// let bode = tf.bode(0.01, 100.0, 500);
    /// assert_eq!(bode.magnitude_db.len(), 500);
    /// ```
    pub fn bode(&self, start: f64, stop: f64, npoints: usize) -> BodeResponse {
        debug!(
            "Bode sweep: {} points over [{:e}, {:e}] rad/s",
            npoints, start, stop
        );
        self.response_sweep(start, stop, npoints).collect()
    }
}
