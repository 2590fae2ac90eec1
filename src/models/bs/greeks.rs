//! Per-leg views over a [`PricingResult`] and the unit conventions used to
//! report the Greeks.

use std::fmt;
use std::str::FromStr;

use super::PricingResult;
use crate::error::PricingError;

const DAYS_PER_YEAR: f64 = 365.0;
const PERCENT: f64 = 100.0;

/// Option leg: "call" or "put"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionType {
    Call,
    Put,
}

impl OptionType {
    pub const ALL: [OptionType; 2] = [OptionType::Call, OptionType::Put];
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Call => f.write_str("call"),
            OptionType::Put => f.write_str("put"),
        }
    }
}

impl FromStr for OptionType {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "call" | "c" => Ok(OptionType::Call),
            "put" | "p" => Ok(OptionType::Put),
            _ => Err(PricingError::UnknownOptionType(s.to_string())),
        }
    }
}

/// Scaling applied to theta, vega and rho when they are reported.
///
/// Delta and gamma are never rescaled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum GreekUnits {
    /// Raw derivatives: theta per year, vega per 1.00 of volatility,
    /// rho per 1.00 of rate. This is what [`PricingResult`] stores.
    #[default]
    PerUnit,
    /// Desk quoting: theta per calendar day (/365), vega per volatility
    /// point (/100), rho per 1% rate move (/100).
    Market,
}

impl GreekUnits {
    fn theta_divisor(self) -> f64 {
        match self {
            GreekUnits::PerUnit => 1.0,
            GreekUnits::Market => DAYS_PER_YEAR,
        }
    }

    fn percent_divisor(self) -> f64 {
        match self {
            GreekUnits::PerUnit => 1.0,
            GreekUnits::Market => PERCENT,
        }
    }
}

/// Sensitivities of a single option leg
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Greeks {
    /// dV/dS
    pub delta: f64,
    /// d²V/dS², shared by both legs
    pub gamma: f64,
    /// Time decay
    pub theta: f64,
    /// dV/dσ, shared by both legs
    pub vega: f64,
    /// dV/dr
    pub rho: f64,
}

impl PricingResult {
    /// Model price of one leg
    pub fn option_price(&self, option_type: OptionType) -> f64 {
        match option_type {
            OptionType::Call => self.call_price,
            OptionType::Put => self.put_price,
        }
    }

    /// Greeks of one leg expressed in `units`.
    pub fn greeks(&self, option_type: OptionType, units: GreekUnits) -> Greeks {
        let (delta, theta, rho) = match option_type {
            OptionType::Call => (self.delta_call, self.theta_call, self.rho_call),
            OptionType::Put => (self.delta_put, self.theta_put, self.rho_put),
        };

        Greeks {
            delta,
            gamma: self.gamma,
            theta: theta / units.theta_divisor(),
            vega: self.vega / units.percent_divisor(),
            rho: rho / units.percent_divisor(),
        }
    }
}
