//! Zakat calculation logic.
//!
//! This module contains the eligibility and liability-netting engine:
//! per-asset valuation, nisab threshold lookup, and the aggregate
//! [`compute_zakat`] entry point that produces a [`CalculationResult`]
//! snapshot. Everything here is a pure function of its arguments, safe to
//! recompute on every state change.

mod nisab;
mod valuation;

pub use nisab::{GOLD_NISAB_GRAMS, SILVER_NISAB_GRAMS, nisab_threshold};
pub use valuation::asset_valuation;

use rust_decimal::Decimal;

use crate::models::{
    Asset, BreakdownLine, CalculationResult, Fiqh, Liability, MetalPrices, NisabStandard,
};

/// The Zakat rate: 2.5% of net zakatable wealth. Fixed by religious law,
/// not configurable.
pub const ZAKAT_RATE: Decimal = Decimal::from_parts(25, 0, 0, false, 3);

/// Computes a Zakat obligation snapshot.
///
/// Gross wealth is the sum of valuations of the zakatable assets; only
/// strictly positive valuations are included and appear in the breakdown,
/// in input order. Liabilities are summed unconditionally and netted
/// against the gross, floored at zero. Eligibility requires both the
/// caller-supplied religious preconditions (`conditions_met`, the
/// conjunction of being a Muslim, complete ownership, and a completed
/// hawl) and net wealth at or above the nisab threshold.
///
/// Degenerate inputs (negative prices or amounts) propagate arithmetically
/// rather than being rejected; validation is the caller's responsibility.
///
/// # Example
///
/// ```
/// use zakat_engine::engine::compute_zakat;
/// use zakat_engine::models::{Asset, AssetCategory, Fiqh, MetalPrices, NisabStandard};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let assets = vec![Asset::new(
///     AssetCategory::Cash,
///     "Savings",
///     Decimal::from_str("10000").unwrap(),
///     true,
/// )];
/// let prices = MetalPrices::new(
///     Decimal::from_str("65").unwrap(),
///     Decimal::from_str("0.8").unwrap(),
/// );
///
/// let result = compute_zakat(
///     &assets,
///     &[],
///     Fiqh::Hanafi,
///     NisabStandard::Silver,
///     &prices,
///     true,
/// );
/// assert!(result.is_eligible);
/// assert_eq!(result.zakat_payable, Decimal::from_str("250.000").unwrap());
/// ```
pub fn compute_zakat(
    assets: &[Asset],
    liabilities: &[Liability],
    fiqh: Fiqh,
    nisab_standard: NisabStandard,
    prices: &MetalPrices,
    conditions_met: bool,
) -> CalculationResult {
    let mut total_assets_value = Decimal::ZERO;
    let mut breakdown = Vec::new();

    for asset in assets {
        if !asset.is_zakatable {
            continue;
        }

        let value = asset_valuation(asset, fiqh, prices);
        if value > Decimal::ZERO {
            total_assets_value += value;
            breakdown.push(BreakdownLine {
                label: asset.name.clone(),
                amount: value,
            });
        }
    }

    // Liabilities are deducted in full; there is no zakatability filter
    // on the debt side.
    let total_liabilities: Decimal = liabilities.iter().map(|l| l.amount).sum();

    let net_zakatable_wealth = (total_assets_value - total_liabilities).max(Decimal::ZERO);
    let nisab_threshold = nisab_threshold(nisab_standard, prices);

    let is_eligible = conditions_met && net_zakatable_wealth >= nisab_threshold;
    let zakat_payable = if is_eligible {
        net_zakatable_wealth * ZAKAT_RATE
    } else {
        Decimal::ZERO
    };

    tracing::debug!(
        %total_assets_value,
        %total_liabilities,
        %net_zakatable_wealth,
        %nisab_threshold,
        is_eligible,
        "computed zakat snapshot"
    );

    CalculationResult {
        total_assets_value,
        total_liabilities,
        net_zakatable_wealth,
        nisab_threshold,
        is_eligible,
        zakat_payable,
        breakdown,
    }
}
