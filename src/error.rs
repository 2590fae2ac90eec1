//! Error taxonomy shared by the pricing engine and the grid sweep.
//!
//! Every failure is raised before any formula evaluation (or, for
//! [`PricingError::NonFiniteResult`], instead of handing back a NaN/Inf), so a
//! caller never sees a partially computed result.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PricingError {
    /// A scalar input is out of its domain (S, K, σ, T must be finite and > 0,
    /// r must be finite, purchase prices must be finite and >= 0).
    #[error("invalid parameter `{name}`: {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    /// A sweep axis is empty, not strictly increasing, or a grid spec is malformed.
    #[error("invalid grid: {0}")]
    InvalidGrid(String),

    /// An option leg name other than "call"/"put".
    #[error("unknown option type `{0}`")]
    UnknownOptionType(String),

    /// The closed form overflowed for otherwise valid inputs.
    #[error("non-finite {quantity} for valid inputs")]
    NonFiniteResult { quantity: &'static str },
}

pub type Result<T> = std::result::Result<T, PricingError>;

impl PricingError {
    pub fn invalid(name: &'static str, value: f64) -> Self {
        Self::InvalidParameter { name, value }
    }

    pub fn grid(msg: impl Into<String>) -> Self {
        Self::InvalidGrid(msg.into())
    }

    /// True for [`PricingError::InvalidParameter`], whatever the parameter.
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, Self::InvalidParameter { .. })
    }
}

/// Ensures `value` is finite and strictly positive.
pub(crate) fn ensure_positive(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(PricingError::invalid(name, value))
    }
}

pub(crate) fn ensure_finite(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(PricingError::invalid(name, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_checks() {
        assert_eq!(ensure_positive("spot", 1.5), Ok(1.5));
        assert!(ensure_positive("spot", 0.0).unwrap_err().is_invalid_parameter());
        assert!(ensure_positive("spot", f64::NAN).is_err());
        assert!(ensure_positive("spot", f64::INFINITY).is_err());
        assert_eq!(ensure_finite("risk_free_rate", -0.01), Ok(-0.01));
    }

    #[test]
    fn test_error_messages() {
        let err = PricingError::invalid("volatility", -0.1);
        assert_eq!(err.to_string(), "invalid parameter `volatility`: -0.1");
        assert_eq!(
            PricingError::grid("empty spot axis").to_string(),
            "invalid grid: empty spot axis"
        );
    }
}
