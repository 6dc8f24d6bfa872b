// src/error.rs
use std::fmt;

/// Error types for the bsm-greeks library
///
/// The pricing queries never produce these: degenerate inputs surface as
/// NaN/Inf. Errors only come from the hardened constructors, option type
/// parsing and sweep configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum PricingError {
    /// Invalid parameter values
    InvalidParameters {
        parameter: String,
        value: f64,
        constraint: String,
    },

    /// Option type string that is neither call nor put
    UnknownOptionType { value: String },

    /// Invalid spot sweep configuration
    InvalidSweep { field: String, reason: String },
}

impl fmt::Display for PricingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PricingError::InvalidParameters {
                parameter,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "Invalid parameter '{}' = {}: {}",
                    parameter, value, constraint
                )
            }
            PricingError::UnknownOptionType { value } => {
                write!(
                    f,
                    "Unknown option type '{}': expected 'call' or 'put'",
                    value
                )
            }
            PricingError::InvalidSweep { field, reason } => {
                write!(f, "Invalid sweep configuration for '{}': {}", field, reason)
            }
        }
    }
}

impl std::error::Error for PricingError {}

/// Result type alias for bsm-greeks operations
pub type PricingResult<T> = Result<T, PricingError>;

/// Validation utilities
pub mod validation {
    use super::{PricingError, PricingResult};

    /// Validate that a parameter is positive and finite
    pub fn validate_positive(name: &str, value: f64) -> PricingResult<()> {
        if value.is_nan() || value <= 0.0 || value.is_infinite() {
            Err(PricingError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be positive (> 0) and finite".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that a value is finite and not NaN
    pub fn validate_finite(name: &str, value: f64) -> PricingResult<()> {
        if !value.is_finite() {
            Err(PricingError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be finite (not NaN or infinite)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate the number of points in a sweep
    pub fn validate_points(points: usize) -> PricingResult<()> {
        if points == 0 {
            Err(PricingError::InvalidSweep {
                field: "points".to_string(),
                reason: "must be greater than 0".to_string(),
            })
        } else if points > 10_000_000 {
            Err(PricingError::InvalidSweep {
                field: "points".to_string(),
                reason: "exceeds maximum allowed (10 million)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate a sweep range `[start, end]`
    pub fn validate_range(start: f64, end: f64) -> PricingResult<()> {
        validate_finite("start", start)?;
        validate_finite("end", end)?;
        if start > end {
            return Err(PricingError::InvalidSweep {
                field: "range".to_string(),
                reason: format!("start ({}) must not exceed end ({})", start, end),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::validation::*;
    use super::*;

    #[test]
    fn test_validate_positive() {
        assert!(validate_positive("sigma", 0.2).is_ok());
        assert!(validate_positive("sigma", 0.0).is_err());
        assert!(validate_positive("sigma", -0.1).is_err());
        assert!(validate_positive("sigma", f64::NAN).is_err());
        assert!(validate_positive("sigma", f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_finite() {
        assert!(validate_finite("value", 1.0).is_ok());
        assert!(validate_finite("value", -0.02).is_ok());
        assert!(validate_finite("value", f64::NAN).is_err());
        assert!(validate_finite("value", f64::INFINITY).is_err());
        assert!(validate_finite("value", f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_validate_points_and_range() {
        assert!(validate_points(1).is_ok());
        assert!(validate_points(0).is_err());
        assert!(validate_range(50.0, 150.0).is_ok());
        assert!(validate_range(100.0, 100.0).is_ok());
        assert!(validate_range(150.0, 50.0).is_err());
        assert!(validate_range(f64::NAN, 50.0).is_err());
    }

    #[test]
    fn test_error_display() {
        let error = PricingError::InvalidParameters {
            parameter: "sigma".to_string(),
            value: -0.1,
            constraint: "must be positive".to_string(),
        };

        let display = format!("{}", error);
        assert!(display.contains("sigma"));
        assert!(display.contains("-0.1"));
        assert!(display.contains("positive"));
    }

    #[test]
    fn test_unknown_option_type_display() {
        let error = PricingError::UnknownOptionType {
            value: "straddle".to_string(),
        };

        let display = format!("{}", error);
        assert!(display.contains("straddle"));
        assert!(display.contains("call"));
        assert!(display.contains("put"));
    }
}
