use crate::error::{ensure_finite, ensure_positive, PricingError, Result};
use crate::models::bs::{MarketParameters, OptionType};

/// Contract terms held constant across a sweep
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FixedParameters {
    /// Strike price
    pub strike: f64,
    /// Time to expiration in years
    pub years_to_exp: f64,
    /// Risk-free rate
    pub risk_free_rate: f64,
}

impl FixedParameters {
    pub fn validate(&self) -> Result<()> {
        ensure_positive("strike", self.strike)?;
        ensure_positive("years_to_exp", self.years_to_exp)?;
        ensure_finite("risk_free_rate", self.risk_free_rate)?;
        Ok(())
    }

    /// Full parameter set for one grid cell
    pub fn at(&self, spot: f64, volatility: f64) -> MarketParameters {
        MarketParameters {
            spot,
            strike: self.strike,
            volatility,
            years_to_exp: self.years_to_exp,
            risk_free_rate: self.risk_free_rate,
        }
    }
}

impl From<&MarketParameters> for FixedParameters {
    fn from(params: &MarketParameters) -> Self {
        Self {
            strike: params.strike,
            years_to_exp: params.years_to_exp,
            risk_free_rate: params.risk_free_rate,
        }
    }
}

/// Optional premium paid for each leg. A supplied price switches that leg's
/// matrix from raw model prices to profit/loss.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PurchasePrices {
    pub call: Option<f64>,
    pub put: Option<f64>,
}

impl PurchasePrices {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn new(call: Option<f64>, put: Option<f64>) -> Self {
        Self { call, put }
    }

    /// Form-style inputs where 0 (or anything below) stands for "not entered".
    pub fn from_inputs(call: f64, put: f64) -> Self {
        let entered = |p: f64| if p > 0.0 { Some(p) } else { None };
        Self {
            call: entered(call),
            put: entered(put),
        }
    }

    pub fn get(&self, option_type: OptionType) -> Option<f64> {
        match option_type {
            OptionType::Call => self.call,
            OptionType::Put => self.put,
        }
    }

    pub fn validate(&self) -> Result<()> {
        let legs = [
            ("call_purchase_price", self.call),
            ("put_purchase_price", self.put),
        ];
        for (name, price) in legs {
            if let Some(p) = price {
                if !p.is_finite() || p < 0.0 {
                    return Err(PricingError::invalid(name, p));
                }
            }
        }
        Ok(())
    }

    pub fn mode(&self, option_type: OptionType) -> ValueMode {
        match self.get(option_type) {
            Some(purchase_price) => ValueMode::ProfitLoss { purchase_price },
            None => ValueMode::Price,
        }
    }
}

/// What a matrix cell holds
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ValueMode {
    /// Model price
    Price,
    /// Model price minus the purchase price
    ProfitLoss { purchase_price: f64 },
}

impl ValueMode {
    pub fn apply(&self, model_price: f64) -> f64 {
        match self {
            ValueMode::Price => model_price,
            ValueMode::ProfitLoss { purchase_price } => model_price - purchase_price,
        }
    }

    pub fn is_pnl(&self) -> bool {
        matches!(self, ValueMode::ProfitLoss { .. })
    }
}

/// Values over a volatility × spot grid.
///
/// Row `j` corresponds to `vols[j]` and column `i` to `spots[i]`, so
/// `values.len() == vols.len()` and every row has `spots.len()` entries.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PriceMatrix {
    pub option_type: OptionType,
    pub mode: ValueMode,
    pub spots: Vec<f64>,
    pub vols: Vec<f64>,
    pub values: Vec<Vec<f64>>,
}

impl PriceMatrix {
    /// `(rows, cols)` = `(vols.len(), spots.len())`
    pub fn shape(&self) -> (usize, usize) {
        (self.vols.len(), self.spots.len())
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.values.get(row)?.get(col).copied()
    }

    pub fn row(&self, row: usize) -> Option<&[f64]> {
        self.values.get(row).map(Vec::as_slice)
    }

    pub fn min(&self) -> f64 {
        self.iter().map(|(_, _, v)| v).fold(f64::INFINITY, f64::min)
    }

    pub fn max(&self) -> f64 {
        self.iter().map(|(_, _, v)| v).fold(f64::NEG_INFINITY, f64::max)
    }

    /// Row-major iteration yielding `(vol, spot, value)`
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        self.vols.iter().zip(&self.values).flat_map(move |(&vol, row)| {
            self.spots
                .iter()
                .zip(row)
                .map(move |(&spot, &value)| (vol, spot, value))
        })
    }
}

/// Call and put matrices over the same grid
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SweepOutput {
    pub call: PriceMatrix,
    pub put: PriceMatrix,
}

impl SweepOutput {
    pub fn matrix(&self, option_type: OptionType) -> &PriceMatrix {
        match option_type {
            OptionType::Call => &self.call,
            OptionType::Put => &self.put,
        }
    }
}
