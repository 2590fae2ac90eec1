use crate::error::{ensure_positive, PricingError, Result};
use crate::models::bs::MarketParameters;

/// Default number of points per axis, matching a 10 × 10 heatmap
pub const DEFAULT_STEPS: usize = 10;

const SPOT_SPAN: (f64, f64) = (0.8, 1.2);
const VOL_SPAN: (f64, f64) = (0.5, 1.5);

/// `steps` evenly spaced points from `start` to `end`, both inclusive.
///
/// A single step yields `[start]`.
pub fn linspace(start: f64, end: f64, steps: usize) -> Result<Vec<f64>> {
    if steps == 0 {
        return Err(PricingError::grid("linspace needs at least one step"));
    }
    if !start.is_finite() || !end.is_finite() {
        return Err(PricingError::grid(format!(
            "linspace bounds must be finite, got [{start}, {end}]"
        )));
    }
    if steps == 1 {
        return Ok(vec![start]);
    }

    let step = (end - start) / (steps - 1) as f64;
    let mut points: Vec<f64> = (0..steps).map(|i| start + step * i as f64).collect();
    // Pin the last point so rounding never overshoots the requested bound
    points[steps - 1] = end;
    Ok(points)
}

/// Spot and volatility ranges of a heatmap
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridSpec {
    pub spot_min: f64,
    pub spot_max: f64,
    pub vol_min: f64,
    pub vol_max: f64,
    /// Points per axis
    #[cfg_attr(feature = "serde", serde(default = "default_steps"))]
    pub steps: usize,
}

fn default_steps() -> usize {
    DEFAULT_STEPS
}

impl GridSpec {
    /// Ranges centred on the current market: spot from 80% to 120% of S and
    /// volatility from half to one and a half times σ.
    pub fn around(params: &MarketParameters) -> Self {
        Self {
            spot_min: params.spot * SPOT_SPAN.0,
            spot_max: params.spot * SPOT_SPAN.1,
            vol_min: params.volatility * VOL_SPAN.0,
            vol_max: params.volatility * VOL_SPAN.1,
            steps: DEFAULT_STEPS,
        }
    }

    pub fn with_steps(self, steps: usize) -> Self {
        Self { steps, ..self }
    }

    pub fn validate(&self) -> Result<()> {
        ensure_positive("spot_min", self.spot_min)?;
        ensure_positive("spot_max", self.spot_max)?;
        ensure_positive("vol_min", self.vol_min)?;
        ensure_positive("vol_max", self.vol_max)?;
        if self.steps == 0 {
            return Err(PricingError::grid("steps must be at least 1"));
        }
        if self.steps > 1 && (self.spot_min >= self.spot_max || self.vol_min >= self.vol_max) {
            return Err(PricingError::grid(format!(
                "ranges must satisfy min < max, got spot [{}, {}] vol [{}, {}]",
                self.spot_min, self.spot_max, self.vol_min, self.vol_max
            )));
        }
        Ok(())
    }

    pub fn spots(&self) -> Result<Vec<f64>> {
        self.validate()?;
        linspace(self.spot_min, self.spot_max, self.steps)
    }

    pub fn vols(&self) -> Result<Vec<f64>> {
        self.validate()?;
        linspace(self.vol_min, self.vol_max, self.steps)
    }
}
