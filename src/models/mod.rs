pub mod bs;

/// Standard normal helpers shared by the pricing formulas
pub mod utils {
    use statrs::consts::SQRT_2PI;
    use statrs::function::erf::erfc;

    /// Standard normal cumulative distribution function N(x).
    ///
    /// Evaluated as `0.5 * erfc(-x / sqrt(2))`, which keeps full relative
    /// precision in the lower tail where `1 + erf(..)` would cancel.
    pub fn normal_cdf(x: f64) -> f64 {
        0.5 * erfc(-x / std::f64::consts::SQRT_2)
    }

    /// Standard normal probability density function N'(x)
    pub fn normal_pdf(x: f64) -> f64 {
        (-0.5 * x * x).exp() / SQRT_2PI
    }
}
