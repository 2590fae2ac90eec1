//! # bs-heatmap: Black-Scholes Pricing, Greeks and Heatmap Sweeps
//!
//! `bs-heatmap` prices European calls and puts with the closed-form
//! Black-Scholes model and evaluates them over spot × volatility grids, the
//! numbers behind an interactive price / P&L heatmap.
//!
//! ## Core Features
//!
//! - **Pricing Engine**: call and put prices plus Delta, Gamma, Theta, Vega and Rho
//! - **Grid Sweeps**: volatility × spot matrices of prices or P&L against a purchase price
//! - **Explicit validation**: non-positive S, K, σ or T is an error, never a NaN
//! - **TOML configuration**: describe a contract and its heatmap ranges in a file
//!
//! ## Quick Start
//!
//! ```rust
//! use bs_heatmap::{price_options, sweep, FixedParameters, MarketParameters, PurchasePrices};
//!
//! let params = MarketParameters::new(100.0, 100.0, 0.2, 1.0, 0.05)?;
//! let result = price_options(&params)?;
//! assert!((result.call_price - 10.4506).abs() < 1e-3);
//!
//! // Call P&L for a contract bought at 10.00, raw put prices
//! let fixed = FixedParameters::from(&params);
//! let purchase = PurchasePrices::new(Some(10.0), None);
//! let heatmap = sweep(&[90.0, 100.0, 110.0], &[0.1, 0.2, 0.3], &fixed, &purchase)?;
//! assert_eq!(heatmap.call.shape(), (3, 3));
//! # Ok::<(), bs_heatmap::PricingError>(())
//! ```
//!
//! ## Conventions
//!
//! - Matrices are indexed `[row][col]` = `[volatility][spot]`.
//! - [`PricingResult`] stores per-unit Greeks (theta per year, vega and rho per
//!   1.00 move). [`GreekUnits::Market`] gives per-day and per-1% figures.
//! - T = 0 is rejected; there is no intrinsic-value limit.

// ================================================================================================
// MODULES
// ================================================================================================

pub mod error;
pub mod models;
pub mod sweep;

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

pub use error::{PricingError, Result};

pub use models::bs::{d1_d2, GreekUnits, Greeks, MarketParameters, OptionType, PricingResult};

pub use sweep::{
    linspace, FixedParameters, GridSpec, HeatmapConfig, PriceMatrix, PurchasePrices,
    SweepOutput, ValueMode, DEFAULT_STEPS,
};

// ================================================================================================
// DEFAULT CONFIGURATIONS
// ================================================================================================

/// Ready-made heatmap configurations.
///
/// All presets use the same at-the-money contract (S = K = 100, σ = 20%,
/// T = 1 year, r = 5%) with ranges from [`GridSpec::around`]; they differ in
/// grid resolution only.
pub mod default_configs {
    use crate::models::bs::MarketParameters;
    use crate::sweep::{GridSpec, HeatmapConfig};

    fn atm_contract() -> MarketParameters {
        MarketParameters {
            spot: 100.0,
            strike: 100.0,
            volatility: 0.2,
            years_to_exp: 1.0,
            risk_free_rate: 0.05,
        }
    }

    fn with_steps(steps: usize) -> HeatmapConfig {
        let market = atm_contract();
        HeatmapConfig::new(market).with_grid(GridSpec::around(&market).with_steps(steps))
    }

    /// 10 × 10 grid, the usual dashboard view.
    ///
    /// ```rust
    /// let config = bs_heatmap::default_configs::dashboard();
    /// let heatmap = config.run()?;
    /// assert_eq!(heatmap.put.shape(), (10, 10));
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn dashboard() -> HeatmapConfig {
        with_steps(10)
    }

    /// 5 × 5 grid for quick checks
    pub fn coarse() -> HeatmapConfig {
        with_steps(5)
    }

    /// 20 × 20 grid
    pub fn fine() -> HeatmapConfig {
        with_steps(20)
    }
}

// ================================================================================================
// ENTRY POINTS
// ================================================================================================

/// Price a European call and put with their Greeks.
///
/// Thin wrapper over [`models::bs::price`]. Fails with
/// [`PricingError::InvalidParameter`] when S, K, σ or T is not strictly
/// positive.
pub fn price_options(params: &MarketParameters) -> Result<PricingResult> {
    models::bs::price(params)
}

/// Evaluate call and put matrices over a volatility × spot grid.
///
/// See [`sweep::evaluator::sweep`] for the layout and validation rules.
pub fn sweep(
    spots: &[f64],
    vols: &[f64],
    fixed: &FixedParameters,
    purchase: &PurchasePrices,
) -> Result<SweepOutput> {
    sweep::evaluator::sweep(spots, vols, fixed, purchase)
}
