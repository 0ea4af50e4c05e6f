//! Error Types for Domain Validation Failures
//!
//! Only the `*_checked` tier of the API returns these; the permissive
//! tier mirrors the field formulas and silently propagates non-finite
//! values instead (see the crate docs for the two-tier contract).
//!
//! Variants are kept small and `Copy` with inline data and
//! `&'static str` reasons, so errors cost nothing to return from hot
//! paths and carry no allocation.

use thiserror_no_std::Error;

/// Result type for checked psychrometric operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Physical-domain errors - kept small for embedded use
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum DomainError {
    /// Input outside a correlation's validated accuracy domain
    #[error("Value {value} outside range [{min}, {max}]")]
    OutOfRange {
        /// The input that failed validation
        value: f64,
        /// Lower bound of the validated domain
        min: f64,
        /// Upper bound of the validated domain
        max: f64,
    },

    /// Input makes no numeric sense (NaN, infinity)
    #[error("Invalid value: not a valid number")]
    InvalidValue,

    /// Barometric pressure at or below the wet-bulb saturation threshold,
    /// which would drive the moisture-content denominator non-positive
    #[error("Pressure {pressure_kpa} kPa at or below saturation threshold {threshold_kpa} kPa")]
    PressureBelowSaturation {
        /// The supplied barometric pressure (kPa)
        pressure_kpa: f64,
        /// Enhancement-corrected saturation pressure at the wet bulb (kPa)
        threshold_kpa: f64,
    },

    /// Relative humidity at or below zero where a logarithm is taken
    #[error("Relative humidity {value}% must be positive")]
    NonPositiveHumidity {
        /// The supplied relative humidity (%)
        value: f64,
    },

    /// Readings contradict each other (e.g., wet bulb above dry bulb)
    #[error("Cross-validation failed: {reason}")]
    CrossValidationFailed {
        /// Which physical constraint the inputs violate
        reason: &'static str,
    },

    /// Batch input slices disagree on length
    #[error("Slice length mismatch: expected {expected}, got {actual}")]
    LengthMismatch {
        /// Length of the first input slice
        expected: usize,
        /// Length of the offending slice
        actual: usize,
    },
}

#[cfg(feature = "defmt")]
impl defmt::Format for DomainError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::OutOfRange { value, min, max } =>
                defmt::write!(fmt, "Value {} outside [{}, {}]", value, min, max),
            Self::InvalidValue =>
                defmt::write!(fmt, "Invalid value"),
            Self::PressureBelowSaturation { pressure_kpa, threshold_kpa } =>
                defmt::write!(fmt, "Pressure {} kPa below threshold {} kPa", pressure_kpa, threshold_kpa),
            Self::NonPositiveHumidity { value } =>
                defmt::write!(fmt, "RH {}% must be positive", value),
            Self::CrossValidationFailed { reason } =>
                defmt::write!(fmt, "Cross-validation: {}", reason),
            Self::LengthMismatch { expected, actual } =>
                defmt::write!(fmt, "Expected {} elements, got {}", expected, actual),
        }
    }
}
