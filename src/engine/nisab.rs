//! Nisab threshold calculation.
//!
//! The nisab is the minimum-wealth threshold below which no Zakat is due,
//! defined by a fixed reference mass of gold or silver valued at the
//! supplied spot price.

use rust_decimal::Decimal;

use crate::models::{MetalPrices, NisabStandard};

/// Reference mass of gold defining the gold nisab, in grams: 7.5.
pub const GOLD_NISAB_GRAMS: Decimal = Decimal::from_parts(75, 0, 0, false, 1);

/// Reference mass of silver defining the silver nisab, in grams: 52.5.
pub const SILVER_NISAB_GRAMS: Decimal = Decimal::from_parts(525, 0, 0, false, 1);

/// Computes the nisab threshold in the operating currency.
///
/// The selected standard picks which reference mass and spot price apply;
/// the masses themselves are fixed religious-law constants.
///
/// # Example
///
/// ```
/// use zakat_engine::engine::nisab_threshold;
/// use zakat_engine::models::{MetalPrices, NisabStandard};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let prices = MetalPrices::new(
///     Decimal::from_str("65").unwrap(),
///     Decimal::from_str("0.8").unwrap(),
/// );
/// let threshold = nisab_threshold(NisabStandard::Silver, &prices);
/// assert_eq!(threshold, Decimal::from_str("42.0").unwrap());
/// ```
pub fn nisab_threshold(standard: NisabStandard, prices: &MetalPrices) -> Decimal {
    match standard {
        NisabStandard::Gold => GOLD_NISAB_GRAMS * prices.gold_per_gram,
        NisabStandard::Silver => SILVER_NISAB_GRAMS * prices.silver_per_gram,
    }
}
