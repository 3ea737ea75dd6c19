//! Jurisprudential selectors and price inputs for the Zakat Engine.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The school of Islamic jurisprudence applied to the calculation.
///
/// The selector alters jewelry treatment only: the Shafi school exempts
/// personal jewelry from the wealth base, the Hanafi school values it as
/// gold-equivalent mass.
///
/// # Example
///
/// ```
/// use zakat_engine::models::Fiqh;
///
/// assert_eq!(Fiqh::default(), Fiqh::Hanafi);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Fiqh {
    /// Hanafi school: jewelry is zakatable as gold-equivalent mass.
    #[default]
    Hanafi,
    /// Shafi school: personal jewelry is exempt.
    Shafi,
}

impl std::fmt::Display for Fiqh {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Fiqh::Hanafi => write!(f, "Hanafi"),
            Fiqh::Shafi => write!(f, "Shafi"),
        }
    }
}

/// Which precious metal defines the minimum-wealth (nisab) threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum NisabStandard {
    /// Threshold is the gold reference mass times the gold spot price.
    Gold,
    /// Threshold is the silver reference mass times the silver spot price.
    #[default]
    Silver,
}

impl std::fmt::Display for NisabStandard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NisabStandard::Gold => write!(f, "Gold"),
            NisabStandard::Silver => write!(f, "Silver"),
        }
    }
}

/// Spot prices per gram for the two reference metals.
///
/// Prices are supplied by the caller, never fetched. Degenerate values
/// (negative prices) propagate arithmetically rather than being rejected;
/// validation is the caller's responsibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetalPrices {
    /// Gold spot price per gram, in the operating currency.
    pub gold_per_gram: Decimal,
    /// Silver spot price per gram, in the operating currency.
    pub silver_per_gram: Decimal,
}

impl MetalPrices {
    /// Creates a price pair.
    pub fn new(gold_per_gram: Decimal, silver_per_gram: Decimal) -> Self {
        Self {
            gold_per_gram,
            silver_per_gram,
        }
    }
}

/// The three independent religious preconditions for Zakat liability.
///
/// The engine itself consumes only the combined boolean produced by
/// [`Conditions::all_met`]; this struct exists so callers can carry the
/// three answers separately, as the surrounding application does.
///
/// # Example
///
/// ```
/// use zakat_engine::models::Conditions;
///
/// let conditions = Conditions {
///     is_muslim: true,
///     has_ownership: true,
///     hawl_complete: false,
/// };
/// assert!(!conditions.all_met());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conditions {
    /// The payer is a Muslim.
    pub is_muslim: bool,
    /// The payer holds complete ownership of the wealth.
    pub has_ownership: bool,
    /// The wealth has been held for a full lunar year (hawl).
    pub hawl_complete: bool,
}

impl Conditions {
    /// Returns the conjunction of the three preconditions.
    pub fn all_met(&self) -> bool {
        self.is_muslim && self.has_ownership && self.hawl_complete
    }
}

impl Default for Conditions {
    fn default() -> Self {
        Self {
            is_muslim: true,
            has_ownership: true,
            hawl_complete: true,
        }
    }
}
