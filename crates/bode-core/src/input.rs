//! Input validation for analysis requests
//!
//! Coefficient text and frequency ranges are checked here, before the
//! numerical engine sees them. The engine itself never re-validates.

use thiserror::Error;

use crate::transfer_function::{TransferFunction, TransferFunctionError};

/// Input validation errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("No coefficients given")]
    Empty,

    #[error("Invalid coefficient at position {position}: '{text}'")]
    InvalidNumber { position: usize, text: String },

    #[error("Invalid frequency range [{min}, {max}]: bounds must be positive and ordered")]
    InvalidRange { min: f64, max: f64 },

    #[error(transparent)]
    TransferFunction(#[from] TransferFunctionError),
}

/// Parse comma-separated polynomial coefficients, highest degree first
///
/// # Example
/// ```
/// use bode_core::input::parse_coefficients;
/// assert_eq!(parse_coefficients("1, 2.5, -3").unwrap(), vec![1.0, 2.5, -3.0]);
/// ```
pub fn parse_coefficients(text: &str) -> Result<Vec<f64>, InputError> {
    if text.trim().is_empty() {
        return Err(InputError::Empty);
    }

    text.split(',')
        .enumerate()
        .map(|(position, item)| {
            let item = item.trim();
            match item.parse::<f64>() {
                Ok(value) if value.is_finite() => Ok(value),
                _ => Err(InputError::InvalidNumber {
                    position,
                    text: item.to_string(),
                }),
            }
        })
        .collect()
}

/// Build a transfer function from numerator and denominator text
pub fn parse_transfer_function(
    numerator: &str,
    denominator: &str,
) -> Result<TransferFunction, InputError> {
    let num = parse_coefficients(numerator)?;
    let den = parse_coefficients(denominator)?;
    Ok(TransferFunction::new(num, den)?)
}

/// A validated angular frequency range in rad/s
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrequencyRange {
    min: f64,
    max: f64,
}

impl FrequencyRange {
    /// Create a range, requiring 0 < min < max and both finite
    pub fn new(min: f64, max: f64) -> Result<Self, InputError> {
        let valid = min.is_finite() && max.is_finite() && min > 0.0 && min < max;
        if !valid {
            return Err(InputError::InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }

    #[inline]
    pub fn min(&self) -> f64 {
        self.min
    }

    #[inline]
    pub fn max(&self) -> f64 {
        self.max
    }
}
