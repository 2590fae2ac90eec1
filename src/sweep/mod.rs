//! Grid sweep evaluator
//!
//! Prices the call and put on every point of a volatility × spot grid, as
//! raw model prices or as P&L against a purchase price, for heatmap display.

pub mod config;
pub mod evaluator;
pub mod grid;
pub mod types;

pub use config::HeatmapConfig;
pub use evaluator::sweep;
pub use grid::{linspace, GridSpec, DEFAULT_STEPS};
pub use types::{FixedParameters, PriceMatrix, PurchasePrices, SweepOutput, ValueMode};
