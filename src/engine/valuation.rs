//! Per-asset valuation rules.
//!
//! The valuation of an asset depends on its category: monetary categories
//! pass their value through unchanged, metal categories convert grams at
//! the supplied spot price, and jewelry is the one place where the
//! jurisprudence school matters.

use rust_decimal::Decimal;

use crate::models::{Asset, AssetCategory, Fiqh, MetalPrices};

/// Values a single asset in the operating currency.
///
/// The match is exhaustive over the closed category set, so adding a
/// category is a compile-time-checked change rather than a silent
/// fallback. Jewelry valuation follows the school: the Shafi school
/// exempts it as personal ornamentation, the Hanafi school values its
/// mass as gold.
///
/// Note that the zakatable flag is *not* consulted here; the engine skips
/// non-zakatable assets before valuation.
///
/// # Example
///
/// ```
/// use zakat_engine::engine::asset_valuation;
/// use zakat_engine::models::{Asset, AssetCategory, Fiqh, MetalPrices};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let prices = MetalPrices::new(
///     Decimal::from_str("65").unwrap(),
///     Decimal::from_str("0.8").unwrap(),
/// );
/// let jewelry = Asset::new(
///     AssetCategory::Jewelry,
///     "Wedding set",
///     Decimal::from_str("50").unwrap(),
///     true,
/// );
///
/// assert_eq!(
///     asset_valuation(&jewelry, Fiqh::Hanafi, &prices),
///     Decimal::from_str("3250").unwrap(),
/// );
/// assert_eq!(asset_valuation(&jewelry, Fiqh::Shafi, &prices), Decimal::ZERO);
/// ```
pub fn asset_valuation(asset: &Asset, fiqh: Fiqh, prices: &MetalPrices) -> Decimal {
    match asset.category {
        AssetCategory::Cash
        | AssetCategory::Business
        | AssetCategory::Investment
        | AssetCategory::Crypto => asset.value,
        AssetCategory::Gold => asset.value * prices.gold_per_gram,
        AssetCategory::Silver => asset.value * prices.silver_per_gram,
        AssetCategory::Jewelry => match fiqh {
            // Shafi exempts personal jewelry; Hanafi treats it as
            // gold-equivalent mass.
            Fiqh::Shafi => Decimal::ZERO,
            Fiqh::Hanafi => asset.value * prices.gold_per_gram,
        },
    }
}
