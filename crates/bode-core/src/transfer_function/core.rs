//! Core TransferFunction struct and constructors

use thiserror::Error;

/// Transfer function construction errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransferFunctionError {
    #[error("Numerator has no coefficients")]
    EmptyNumerator,

    #[error("Denominator has no coefficients")]
    EmptyDenominator,

    #[error("Non-finite coefficient {value} at index {index}")]
    NonFiniteCoefficient { index: usize, value: f64 },
}

/// A rational transfer function H(s) = N(s) / D(s)
///
/// Coefficients are stored highest degree first, so `[1.0, 2.0, 3.0]`
/// is s² + 2s + 3.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferFunction {
    /// Numerator coefficients, highest degree first
    pub(crate) numerator: Vec<f64>,
    /// Denominator coefficients, highest degree first
    pub(crate) denominator: Vec<f64>,
}

impl TransferFunction {
    /// Create a new TransferFunction from polynomial coefficients
    ///
    /// # Arguments
    /// * `numerator` - N(s) coefficients, highest degree first
    /// * `denominator` - D(s) coefficients, highest degree first
    ///
    /// # Example
    /// ```
    /// use bode_core::TransferFunction;
    /// // H(s) = 1 / (s + 1)
    /// let tf = TransferFunction::new(vec![1.0], vec![1.0, 1.0]).unwrap();
    /// assert_eq!(tf.order(), 1);
    /// ```
    pub fn new(numerator: Vec<f64>, denominator: Vec<f64>) -> Result<Self, TransferFunctionError> {
        if numerator.is_empty() {
            return Err(TransferFunctionError::EmptyNumerator);
        }
        if denominator.is_empty() {
            return Err(TransferFunctionError::EmptyDenominator);
        }
        Self::check_finite(&numerator)?;
        Self::check_finite(&denominator)?;

        Ok(Self {
            numerator,
            denominator,
        })
    }

    fn check_finite(coeffs: &[f64]) -> Result<(), TransferFunctionError> {
        match coeffs.iter().position(|c| !c.is_finite()) {
            Some(index) => Err(TransferFunctionError::NonFiniteCoefficient {
                index,
                value: coeffs[index],
            }),
            None => Ok(()),
        }
    }

    /// Numerator coefficients, highest degree first
    #[inline]
    pub fn numerator(&self) -> &[f64] {
        &self.numerator
    }

    /// Denominator coefficients, highest degree first
    #[inline]
    pub fn denominator(&self) -> &[f64] {
        &self.denominator
    }

    /// Degree of the numerator polynomial as written
    #[inline]
    pub fn numerator_degree(&self) -> usize {
        self.numerator.len() - 1
    }

    /// System order (degree of the denominator polynomial as written)
    #[inline]
    pub fn order(&self) -> usize {
        self.denominator.len() - 1
    }

    /// Denominator degree minus numerator degree
    pub fn relative_degree(&self) -> isize {
        self.order() as isize - self.numerator_degree() as isize
    }

    /// True if the numerator degree does not exceed the denominator degree
    pub fn is_proper(&self) -> bool {
        self.relative_degree() >= 0
    }
}
