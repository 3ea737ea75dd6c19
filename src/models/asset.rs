//! Asset models for the Zakat Engine.
//!
//! An asset is a single item of wealth owned by the payer. Its `value`
//! field is unit-polymorphic: a mass in grams for the precious-metal
//! categories, a monetary amount in the operating currency for the rest.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The category of an asset, determining its valuation rule.
///
/// This is a closed set: adding a category is a compile-time-checked
/// exhaustive match in the valuation logic, not a silent string fallback.
///
/// # Example
///
/// ```
/// use zakat_engine::models::AssetCategory;
///
/// let category = AssetCategory::Gold;
/// assert!(category.is_measured_in_grams());
/// assert!(!AssetCategory::Cash.is_measured_in_grams());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetCategory {
    /// Cash on hand or in bank accounts, in currency units.
    Cash,
    /// Gold holdings, measured in grams.
    Gold,
    /// Silver holdings, measured in grams.
    Silver,
    /// Business inventory and trade goods, in currency units.
    Business,
    /// Shares, funds and other investments, in currency units.
    Investment,
    /// Cryptocurrency holdings, in currency units.
    Crypto,
    /// Personal jewelry, measured in grams of gold-equivalent mass.
    Jewelry,
}

impl AssetCategory {
    /// Returns `true` if this category's `value` is a mass in grams
    /// rather than a monetary amount.
    pub fn is_measured_in_grams(&self) -> bool {
        matches!(
            self,
            AssetCategory::Gold | AssetCategory::Silver | AssetCategory::Jewelry
        )
    }
}

impl std::fmt::Display for AssetCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssetCategory::Cash => write!(f, "Cash"),
            AssetCategory::Gold => write!(f, "Gold"),
            AssetCategory::Silver => write!(f, "Silver"),
            AssetCategory::Business => write!(f, "Business"),
            AssetCategory::Investment => write!(f, "Investment"),
            AssetCategory::Crypto => write!(f, "Crypto"),
            AssetCategory::Jewelry => write!(f, "Jewelry"),
        }
    }
}

/// A single item of wealth owned by the payer.
///
/// Assets are owned exclusively by the caller's collection; the engine
/// never mutates or retains them.
///
/// # Example
///
/// ```
/// use zakat_engine::models::{Asset, AssetCategory};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let asset = Asset::new(
///     AssetCategory::Cash,
///     "Savings account",
///     Decimal::from_str("10000").unwrap(),
///     true,
/// );
/// assert!(asset.is_zakatable);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    /// Stable identity of this asset.
    pub id: Uuid,
    /// The category, which selects the valuation rule.
    pub category: AssetCategory,
    /// Display name for breakdown line items.
    pub name: String,
    /// Grams for gold/silver/jewelry, currency units otherwise.
    pub value: Decimal,
    /// Whether this asset is included in the zakatable wealth base.
    pub is_zakatable: bool,
}

impl Asset {
    /// Creates a new asset with a freshly generated id.
    pub fn new(
        category: AssetCategory,
        name: impl Into<String>,
        value: Decimal,
        is_zakatable: bool,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            category,
            name: name.into(),
            value,
            is_zakatable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_category_serialization_is_snake_case() {
        let json = serde_json::to_string(&AssetCategory::Cash).unwrap();
        assert_eq!(json, "\"cash\"");

        let json = serde_json::to_string(&AssetCategory::Jewelry).unwrap();
        assert_eq!(json, "\"jewelry\"");
    }

    #[test]
    fn test_category_deserialization() {
        let category: AssetCategory = serde_json::from_str("\"investment\"").unwrap();
        assert_eq!(category, AssetCategory::Investment);

        let category: AssetCategory = serde_json::from_str("\"crypto\"").unwrap();
        assert_eq!(category, AssetCategory::Crypto);
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let result: Result<AssetCategory, _> = serde_json::from_str("\"livestock\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_gram_measured_categories() {
        assert!(AssetCategory::Gold.is_measured_in_grams());
        assert!(AssetCategory::Silver.is_measured_in_grams());
        assert!(AssetCategory::Jewelry.is_measured_in_grams());
        assert!(!AssetCategory::Cash.is_measured_in_grams());
        assert!(!AssetCategory::Business.is_measured_in_grams());
        assert!(!AssetCategory::Investment.is_measured_in_grams());
        assert!(!AssetCategory::Crypto.is_measured_in_grams());
    }

    #[test]
    fn test_new_generates_unique_ids() {
        let a = Asset::new(AssetCategory::Cash, "a", dec("1"), true);
        let b = Asset::new(AssetCategory::Cash, "b", dec("1"), true);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_asset_round_trips_through_json() {
        let asset = Asset::new(AssetCategory::Gold, "Gold coins", dec("12.5"), true);
        let json = serde_json::to_string(&asset).unwrap();
        let back: Asset = serde_json::from_str(&json).unwrap();
        assert_eq!(asset, back);
    }
}
