//! Error types for pricing and surface generation.
//!
//! Every fallible engine operation returns `Result<T, SurfaceError>`. Errors are
//! raised at the operation boundary, before any grid cell is evaluated, and
//! always name the offending input.

use thiserror::Error;

/// Convenience type alias for results in this crate.
pub type Result<T> = std::result::Result<T, SurfaceError>;

/// Errors raised by [`price`](crate::price), [`sweep`](crate::sweep) and
/// [`evaluate`](crate::evaluate) under the strict validation policy.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum SurfaceError {
    /// A scalar model input is outside the formula's domain
    /// (non-positive maturity/strike/spot/volatility, or non-finite).
    #[error("invalid parameter `{field}`: {value}")]
    InvalidParameter { field: &'static str, value: f64 },

    /// Grid bounds are inverted, negative or otherwise unusable.
    #[error("invalid range `{field}`: {message}")]
    InvalidRange {
        field: &'static str,
        message: String,
    },
}

impl SurfaceError {
    /// Name of the input that triggered the error.
    pub fn field(&self) -> &'static str {
        match self {
            SurfaceError::InvalidParameter { field, .. } => field,
            SurfaceError::InvalidRange { field, .. } => field,
        }
    }
}

/// Reject NaN, infinities, zero and negatives.
pub(crate) fn validate_positive(value: f64, field: &'static str) -> Result<f64> {
    if !value.is_finite() || value <= 0.0 {
        return Err(SurfaceError::InvalidParameter { field, value });
    }
    Ok(value)
}

/// Reject NaN and infinities; zero and negatives are allowed.
pub(crate) fn validate_finite(value: f64, field: &'static str) -> Result<f64> {
    if !value.is_finite() {
        return Err(SurfaceError::InvalidParameter { field, value });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_parameter_display_names_field() {
        let err = SurfaceError::InvalidParameter {
            field: "strike",
            value: -1.0,
        };
        let display = format!("{err}");
        assert!(display.contains("strike"));
        assert!(display.contains("-1"));
        assert_eq!(err.field(), "strike");
    }

    #[test]
    fn invalid_range_display_includes_message() {
        let err = SurfaceError::InvalidRange {
            field: "volatility_min",
            message: "0.5 exceeds volatility_max 0.1".into(),
        };
        assert!(format!("{err}").contains("exceeds volatility_max"));
        assert_eq!(err.field(), "volatility_min");
    }

    #[test]
    fn validators_reject_non_finite() {
        assert!(validate_positive(f64::NAN, "spot").is_err());
        assert!(validate_positive(f64::INFINITY, "spot").is_err());
        assert!(validate_positive(0.0, "spot").is_err());
        assert_eq!(validate_positive(1.5, "spot"), Ok(1.5));

        assert!(validate_finite(f64::NEG_INFINITY, "risk_free_rate").is_err());
        assert_eq!(validate_finite(-0.01, "risk_free_rate"), Ok(-0.01));
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SurfaceError>();
    }
}
