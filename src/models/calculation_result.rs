//! Calculation result models for the Zakat Engine.
//!
//! This module contains the [`CalculationResult`] snapshot produced by
//! [`compute_zakat`](crate::engine::compute_zakat) and its per-asset
//! [`BreakdownLine`] entries.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single asset's contribution to the gross zakatable wealth.
///
/// Only strictly positive contributions appear in the breakdown, in the
/// order the assets were supplied.
///
/// # Example
///
/// ```
/// use zakat_engine::models::BreakdownLine;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let line = BreakdownLine {
///     label: "Gold coins".to_string(),
///     amount: Decimal::from_str("3250").unwrap(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownLine {
    /// The display name of the contributing asset.
    pub label: String,
    /// The asset's valuation in the operating currency.
    pub amount: Decimal,
}

/// The complete result of a Zakat calculation.
///
/// A derived, recomputed-on-demand snapshot: a pure function of the engine
/// inputs with no identity or lifecycle of its own. The engine never
/// persists it; the caller re-derives it on every state change.
///
/// # Example
///
/// ```
/// use zakat_engine::models::CalculationResult;
/// use rust_decimal::Decimal;
///
/// let result = CalculationResult {
///     total_assets_value: Decimal::ZERO,
///     total_liabilities: Decimal::ZERO,
///     net_zakatable_wealth: Decimal::ZERO,
///     nisab_threshold: Decimal::ZERO,
///     is_eligible: false,
///     zakat_payable: Decimal::ZERO,
///     breakdown: vec![],
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Gross value of all included zakatable assets.
    pub total_assets_value: Decimal,
    /// Sum of all liability amounts, unconditionally.
    pub total_liabilities: Decimal,
    /// `max(0, total_assets_value - total_liabilities)`.
    pub net_zakatable_wealth: Decimal,
    /// The nisab threshold in the operating currency.
    pub nisab_threshold: Decimal,
    /// Whether Zakat is due: preconditions met and net wealth at threshold.
    pub is_eligible: bool,
    /// The payable amount: 2.5% of net wealth when eligible, zero otherwise.
    pub zakat_payable: Decimal,
    /// Per-asset contributions with positive valuations, in input order.
    pub breakdown: Vec<BreakdownLine>,
}
