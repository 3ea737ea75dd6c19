//! Settings types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Fiqh, MetalPrices, NisabStandard};

/// The payer's persistent calculation settings.
///
/// Defaults match the application's initial state: Hanafi school, silver
/// nisab, USD, and placeholder spot prices the payer is expected to
/// update.
///
/// # Example
///
/// ```
/// use zakat_engine::config::ZakatSettings;
/// use zakat_engine::models::{Fiqh, NisabStandard};
///
/// let settings = ZakatSettings::default();
/// assert_eq!(settings.fiqh, Fiqh::Hanafi);
/// assert_eq!(settings.nisab_standard, NisabStandard::Silver);
/// assert_eq!(settings.currency, "USD");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZakatSettings {
    /// The school of jurisprudence to apply.
    pub fiqh: Fiqh,
    /// Which metal defines the nisab threshold.
    pub nisab_standard: NisabStandard,
    /// Operating currency code (display only; the engine is unit-blind).
    pub currency: String,
    /// Gold spot price per gram in the operating currency.
    pub gold_price_per_gram: Decimal,
    /// Silver spot price per gram in the operating currency.
    pub silver_price_per_gram: Decimal,
}

impl ZakatSettings {
    /// Returns the spot prices as the engine's [`MetalPrices`] pair.
    pub fn metal_prices(&self) -> MetalPrices {
        MetalPrices::new(self.gold_price_per_gram, self.silver_price_per_gram)
    }
}

impl Default for ZakatSettings {
    fn default() -> Self {
        Self {
            fiqh: Fiqh::Hanafi,
            nisab_standard: NisabStandard::Silver,
            currency: "USD".to_string(),
            gold_price_per_gram: Decimal::from(65),
            silver_price_per_gram: Decimal::new(8, 1),
        }
    }
}
