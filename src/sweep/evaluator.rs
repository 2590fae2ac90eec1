use tracing::{debug, warn};

use super::types::{FixedParameters, PriceMatrix, PurchasePrices, SweepOutput};
use crate::error::{ensure_positive, PricingError, Result};
use crate::models::bs::{price, OptionType};

/// Check one sweep axis: non-empty, finite, strictly positive and strictly increasing.
fn validate_axis(name: &'static str, values: &[f64]) -> Result<()> {
    if values.is_empty() {
        return Err(PricingError::grid(format!("{name} axis is empty")));
    }
    for &v in values {
        ensure_positive(name, v)?;
    }
    if let Some(pos) = values.windows(2).position(|w| w[0] >= w[1]) {
        return Err(PricingError::grid(format!(
            "{name} axis must be strictly increasing, got {} then {} at index {}",
            values[pos],
            values[pos + 1],
            pos + 1
        )));
    }
    Ok(())
}

fn validate_inputs(
    spots: &[f64],
    vols: &[f64],
    fixed: &FixedParameters,
    purchase: &PurchasePrices,
) -> Result<()> {
    validate_axis("spot", spots)?;
    validate_axis("volatility", vols)?;
    fixed.validate()?;
    purchase.validate()
}

/// Evaluate call and put values on every (volatility, spot) pair.
///
/// Both matrices have `vols.len()` rows and `spots.len()` columns; cell
/// `(j, i)` is priced with `S = spots[i]` and `σ = vols[j]`. A leg with a
/// purchase price holds P&L (model price minus purchase price), otherwise the
/// raw model price.
///
/// All inputs are validated before the first evaluation and any failure
/// rejects the whole sweep, so a partially filled matrix is never returned.
///
/// # Example
///
/// ```rust
/// use bs_heatmap::{sweep, FixedParameters, PurchasePrices};
///
/// let fixed = FixedParameters { strike: 100.0, years_to_exp: 1.0, risk_free_rate: 0.05 };
/// let out = sweep(&[90.0, 100.0, 110.0], &[0.1, 0.2], &fixed, &PurchasePrices::none())?;
/// assert_eq!(out.call.shape(), (2, 3));
/// # Ok::<(), bs_heatmap::PricingError>(())
/// ```
pub fn sweep(
    spots: &[f64],
    vols: &[f64],
    fixed: &FixedParameters,
    purchase: &PurchasePrices,
) -> Result<SweepOutput> {
    if let Err(e) = validate_inputs(spots, vols, fixed, purchase) {
        warn!(error = %e, "rejecting sweep");
        return Err(e);
    }

    let call_mode = purchase.mode(OptionType::Call);
    let put_mode = purchase.mode(OptionType::Put);
    debug!(
        rows = vols.len(),
        cols = spots.len(),
        strike = fixed.strike,
        call_pnl = call_mode.is_pnl(),
        put_pnl = put_mode.is_pnl(),
        "starting sweep"
    );

    let mut call_values = Vec::with_capacity(vols.len());
    let mut put_values = Vec::with_capacity(vols.len());

    for &vol in vols {
        let mut call_row = Vec::with_capacity(spots.len());
        let mut put_row = Vec::with_capacity(spots.len());
        for &spot in spots {
            let result = price(&fixed.at(spot, vol)).inspect_err(|e| {
                warn!(spot, vol, error = %e, "cell evaluation failed, abandoning sweep");
            })?;
            call_row.push(call_mode.apply(result.call_price));
            put_row.push(put_mode.apply(result.put_price));
        }
        call_values.push(call_row);
        put_values.push(put_row);
    }

    debug!(cells = spots.len() * vols.len(), "sweep complete");

    Ok(SweepOutput {
        call: PriceMatrix {
            option_type: OptionType::Call,
            mode: call_mode,
            spots: spots.to_vec(),
            vols: vols.to_vec(),
            values: call_values,
        },
        put: PriceMatrix {
            option_type: OptionType::Put,
            mode: put_mode,
            spots: spots.to_vec(),
            vols: vols.to_vec(),
            values: put_values,
        },
    })
}
