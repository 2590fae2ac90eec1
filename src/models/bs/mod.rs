// Closed-form Black-Scholes pricing for European calls and puts, together with
// the five first-order Greeks. Inputs are validated up front; T = 0 is rejected
// rather than collapsed to intrinsic value.

pub mod greeks;

use crate::error::{ensure_finite, ensure_positive, PricingError, Result};
use crate::models::utils::{normal_cdf, normal_pdf};

pub use greeks::{GreekUnits, Greeks, OptionType};

/// Scalar inputs for a single pricing evaluation
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarketParameters {
    /// Current underlying price (S > 0)
    pub spot: f64,
    /// Strike price (K > 0)
    pub strike: f64,
    /// Annualized volatility as decimal, e.g. 0.2 for 20% (σ > 0)
    pub volatility: f64,
    /// Time to expiration in years (T > 0)
    pub years_to_exp: f64,
    /// Annualized continuously compounded risk-free rate, may be negative
    pub risk_free_rate: f64,
}

impl MarketParameters {
    /// Build and validate a parameter set.
    pub fn new(
        spot: f64,
        strike: f64,
        volatility: f64,
        years_to_exp: f64,
        risk_free_rate: f64,
    ) -> Result<Self> {
        let params = Self {
            spot,
            strike,
            volatility,
            years_to_exp,
            risk_free_rate,
        };
        params.validate()?;
        Ok(params)
    }

    /// Check the domain of every field. The first offending field is reported.
    pub fn validate(&self) -> Result<()> {
        ensure_positive("spot", self.spot)?;
        ensure_positive("strike", self.strike)?;
        ensure_positive("volatility", self.volatility)?;
        ensure_positive("years_to_exp", self.years_to_exp)?;
        ensure_finite("risk_free_rate", self.risk_free_rate)?;
        Ok(())
    }

    /// Same contract with a different spot and volatility, as used by grid sweeps.
    pub fn with_spot_vol(&self, spot: f64, volatility: f64) -> Self {
        Self {
            spot,
            volatility,
            ..*self
        }
    }

    /// Present value of the strike, K·e^(-rT)
    pub fn discounted_strike(&self) -> f64 {
        self.strike * (-self.risk_free_rate * self.years_to_exp).exp()
    }
}

/// Prices and sensitivities of the call and put sharing one [`MarketParameters`].
///
/// Greeks are stored per unit: theta per year, vega per 1.00 change in σ and
/// rho per 1.00 change in r. Use [`PricingResult::greeks`] with
/// [`GreekUnits::Market`] for per-day / per-1% figures.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricingResult {
    pub call_price: f64,
    pub put_price: f64,
    pub delta_call: f64,
    pub delta_put: f64,
    pub gamma: f64,
    pub theta_call: f64,
    pub theta_put: f64,
    pub rho_call: f64,
    pub rho_put: f64,
    pub vega: f64,
}

impl PricingResult {
    fn ensure_finite(self) -> Result<Self> {
        let fields = [
            ("call_price", self.call_price),
            ("put_price", self.put_price),
            ("delta_call", self.delta_call),
            ("delta_put", self.delta_put),
            ("gamma", self.gamma),
            ("theta_call", self.theta_call),
            ("theta_put", self.theta_put),
            ("rho_call", self.rho_call),
            ("rho_put", self.rho_put),
            ("vega", self.vega),
        ];
        match fields.iter().find(|(_, v)| !v.is_finite()) {
            Some(&(quantity, _)) => Err(PricingError::NonFiniteResult { quantity }),
            None => Ok(self),
        }
    }
}

/// Standardized moneyness terms `(d1, d2)`.
///
/// Assumes validated parameters; call [`MarketParameters::validate`] first when
/// the value was built by hand.
#[allow(non_snake_case)]
pub fn d1_d2(params: &MarketParameters) -> (f64, f64) {
    let S = params.spot;
    let K = params.strike;
    let T = params.years_to_exp;
    let r = params.risk_free_rate;
    let sigma = params.volatility;

    let sigma_sqrt_t = sigma * T.sqrt();
    let d1 = ((S / K).ln() + (r + 0.5 * sigma.powi(2)) * T) / sigma_sqrt_t;
    (d1, d1 - sigma_sqrt_t)
}

/// Price a European call and put and compute their Greeks.
///
/// # Errors
///
/// * [`PricingError::InvalidParameter`] if S, K, σ or T is not finite and
///   strictly positive, or r is not finite. Nothing is evaluated in that case.
/// * [`PricingError::NonFiniteResult`] if the inputs are valid but so extreme
///   that a price or Greek overflows.
#[allow(non_snake_case)]
pub fn price(params: &MarketParameters) -> Result<PricingResult> {
    params.validate()?;

    let S = params.spot;
    let T = params.years_to_exp;
    let r = params.risk_free_rate;
    let sigma = params.volatility;
    let sqrt_t = T.sqrt();

    let (d1, d2) = d1_d2(params);
    let nd1 = normal_cdf(d1);
    let nd2 = normal_cdf(d2);
    // N(-x) evaluated directly rather than as 1 - N(x)
    let n_minus_d1 = normal_cdf(-d1);
    let n_minus_d2 = normal_cdf(-d2);
    let pdf_d1 = normal_pdf(d1);
    let k_disc = params.discounted_strike();

    let decay = -(S * pdf_d1 * sigma) / (2.0 * sqrt_t);

    PricingResult {
        call_price: S * nd1 - k_disc * nd2,
        put_price: k_disc * n_minus_d2 - S * n_minus_d1,
        delta_call: nd1,
        delta_put: nd1 - 1.0,
        gamma: pdf_d1 / (S * sigma * sqrt_t),
        theta_call: decay - r * k_disc * nd2,
        theta_put: decay + r * k_disc * n_minus_d2,
        rho_call: T * k_disc * nd2,
        rho_put: -T * k_disc * n_minus_d2,
        vega: S * pdf_d1 * sqrt_t,
    }
    .ensure_finite()
}
