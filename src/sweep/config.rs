#[cfg(feature = "serde")]
use std::path::Path;

use anyhow::{Context, Result};

use super::evaluator::sweep;
use super::grid::GridSpec;
use super::types::{FixedParameters, PurchasePrices, SweepOutput};
use crate::models::bs::{price, MarketParameters, PricingResult};

/// Everything needed to price one contract and draw its heatmaps.
///
/// Loaded from TOML:
///
/// ```toml
/// [market]
/// spot = 100.0
/// strike = 100.0
/// volatility = 0.2
/// years_to_exp = 1.0
/// risk_free_rate = 0.05
///
/// # optional, defaults to GridSpec::around(market)
/// [grid]
/// spot_min = 80.0
/// spot_max = 120.0
/// vol_min = 0.1
/// vol_max = 0.3
/// steps = 10
///
/// # optional, omitted legs show raw prices
/// [purchase]
/// call = 10.0
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeatmapConfig {
    pub market: MarketParameters,
    #[cfg_attr(feature = "serde", serde(default))]
    pub grid: Option<GridSpec>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub purchase: PurchasePrices,
}

impl HeatmapConfig {
    pub fn new(market: MarketParameters) -> Self {
        Self {
            market,
            grid: None,
            purchase: PurchasePrices::none(),
        }
    }

    pub fn with_grid(mut self, grid: GridSpec) -> Self {
        self.grid = Some(grid);
        self
    }

    pub fn with_purchase(mut self, purchase: PurchasePrices) -> Self {
        self.purchase = purchase;
        self
    }

    /// Parse and validate a TOML document.
    #[cfg(feature = "serde")]
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s).context("failed to parse heatmap config")?;
        config.validate()?;
        Ok(config)
    }

    #[cfg(feature = "serde")]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_toml_str(&raw).with_context(|| format!("invalid config in {}", path.display()))
    }

    #[cfg(feature = "serde")]
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).context("failed to serialize heatmap config")
    }

    pub fn validate(&self) -> Result<()> {
        self.market.validate().context("invalid [market] section")?;
        self.grid_spec().validate().context("invalid [grid] section")?;
        self.purchase.validate().context("invalid [purchase] section")?;
        Ok(())
    }

    /// Configured grid, or the default ranges around the market parameters.
    pub fn grid_spec(&self) -> GridSpec {
        self.grid.unwrap_or_else(|| GridSpec::around(&self.market))
    }

    pub fn fixed(&self) -> FixedParameters {
        FixedParameters::from(&self.market)
    }

    /// Price and Greeks at the configured market point.
    pub fn pricing(&self) -> Result<PricingResult> {
        Ok(price(&self.market)?)
    }

    /// Evaluate the configured heatmap grid.
    pub fn run(&self) -> Result<SweepOutput> {
        let grid = self.grid_spec();
        let spots = grid.spots()?;
        let vols = grid.vols()?;
        let output = sweep(&spots, &vols, &self.fixed(), &self.purchase)?;
        Ok(output)
    }
}
