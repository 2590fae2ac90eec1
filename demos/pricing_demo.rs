// demos/pricing_demo.rs

//! Prices an at-the-money contract and prints call/put values with their Greeks
//! in the per-day / per-1% convention traders quote.
//!
//! Usage:
//!     cargo run --example pricing_demo -- [spot strike vol years rate]

use std::env;

use anyhow::{bail, Context, Result};
use bs_heatmap::{price_options, GreekUnits, MarketParameters, OptionType};

fn parse_args() -> Result<MarketParameters> {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() {
        return Ok(MarketParameters::new(100.0, 100.0, 0.2, 1.0, 0.05)?);
    }
    if args.len() != 5 {
        bail!("expected 5 arguments: spot strike vol years rate");
    }

    let mut values = [0.0; 5];
    for (slot, raw) in values.iter_mut().zip(&args) {
        *slot = raw
            .parse()
            .with_context(|| format!("`{raw}` is not a number"))?;
    }
    let [spot, strike, vol, years, rate] = values;
    Ok(MarketParameters::new(spot, strike, vol, years, rate)?)
}

fn main() -> Result<()> {
    let params = parse_args()?;
    let result = price_options(&params)?;

    println!("Black-Scholes Pricing");
    println!("=====================");
    println!("Spot:            {:.2}", params.spot);
    println!("Strike:          {:.2}", params.strike);
    println!("Volatility:      {:.2}%", params.volatility * 100.0);
    println!("Time to expiry:  {:.4} years", params.years_to_exp);
    println!("Risk-free rate:  {:.2}%", params.risk_free_rate * 100.0);

    println!();
    println!("Call Price: ${:.2}", result.call_price);
    println!("Put Price:  ${:.2}", result.put_price);

    let call = result.greeks(OptionType::Call, GreekUnits::Market);
    let put = result.greeks(OptionType::Put, GreekUnits::Market);

    println!();
    println!("{:<12} {:>10} {:>10}", "Greek", "Call", "Put");
    println!("{}", "-".repeat(34));
    println!("{:<12} {:>10.4} {:>10.4}", "Delta", call.delta, put.delta);
    println!("{:<12} {:>10.4} {:>10.4}", "Gamma", call.gamma, put.gamma);
    println!("{:<12} {:>10.4} {:>10.4}", "Theta/day", call.theta, put.theta);
    println!("{:<12} {:>10.4} {:>10.4}", "Vega/1%", call.vega, put.vega);
    println!("{:<12} {:>10.4} {:>10.4}", "Rho/1%", call.rho, put.rho);

    Ok(())
}
