//! Evaluation of H(jω) on the imaginary axis

use num_complex::Complex64;

use super::core::TransferFunction;
use crate::math::conversions::{complex_2_db, complex_2_degree};

/// Evaluate a polynomial (highest degree first) at `s`
///
/// Each term is c_i * s^(k - i) with integer complex powers, so
/// s = 0 is evaluated directly.
fn polyval(coeffs: &[f64], s: Complex64) -> Complex64 {
    let degree = coeffs.len().saturating_sub(1);
    coeffs
        .iter()
        .enumerate()
        .map(|(i, &c)| s.powu((degree - i) as u32) * c)
        .sum()
}

/// Complex division that stays finite over the whole f64 range
///
/// num-complex's `/` divides by the squared norm, which overflows for
/// |den| above ~1e154, underflows for tiny |den| and turns x / 0 into NaN.
/// `fdiv` scales by the norm instead. A nonzero numerator over an exact
/// zero becomes a complex infinity (|z| = inf, undefined phase); 0 / 0
/// stays NaN.
fn divide(num: Complex64, den: Complex64) -> Complex64 {
    if den.re == 0.0 && den.im == 0.0 {
        if num.re == 0.0 && num.im == 0.0 {
            return Complex64::new(f64::NAN, f64::NAN);
        }
        return Complex64::new(f64::INFINITY, f64::NAN);
    }
    num.fdiv(den)
}

impl TransferFunction {
    /// Evaluate N(jω)
    pub fn evaluate_numerator(&self, w: f64) -> Complex64 {
        polyval(&self.numerator, Complex64::new(0.0, w))
    }

    /// Evaluate D(jω)
    pub fn evaluate_denominator(&self, w: f64) -> Complex64 {
        polyval(&self.denominator, Complex64::new(0.0, w))
    }

    /// Evaluate H(jω) = N(jω) / D(jω) at angular frequency `w` in rad/s
    ///
    /// Never panics. A denominator that is exactly zero at `w` yields a
    /// complex infinity, see [`TransferFunction::magnitude_db`].
    ///
    /// # Example
    /// ```
    /// use bode_core::TransferFunction;
    /// let tf = TransferFunction::new(vec![1.0], vec![1.0, 0.0]).unwrap();
    /// let h = tf.evaluate(2.0);
    /// assert!((h.im + 0.5).abs() < 1e-12);
    /// ```
    pub fn evaluate(&self, w: f64) -> Complex64 {
        divide(self.evaluate_numerator(w), self.evaluate_denominator(w))
    }

    /// Magnitude of H(jω) in dB (+inf at a pole on the grid)
    pub fn magnitude_db(&self, w: f64) -> f64 {
        complex_2_db(self.evaluate(w))
    }

    /// Wrapped phase of H(jω) in degrees, in (-180, 180]
    pub fn phase_deg(&self, w: f64) -> f64 {
        complex_2_degree(self.evaluate(w))
    }
}
