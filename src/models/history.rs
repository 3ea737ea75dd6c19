//! History records of saved Zakat calculations.
//!
//! The surrounding application lets the payer save a snapshot of a completed
//! calculation, mark it paid, and track the arrears across unpaid records.
//! The records live in the caller's collection; this module only defines the
//! value type and the arrears aggregation.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A saved snapshot of a completed Zakat calculation.
///
/// # Example
///
/// ```
/// use zakat_engine::models::HistoryRecord;
/// use chrono::Utc;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let record = HistoryRecord::new(
///     Utc::now(),
///     "2024-03-11",
///     "USD",
///     Decimal::from_str("10000").unwrap(),
///     Decimal::from_str("250").unwrap(),
/// );
/// assert!(!record.is_paid);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// Stable identity of this record.
    pub id: Uuid,
    /// When the record was saved (caller-supplied, keeping the core clock-free).
    pub timestamp: DateTime<Utc>,
    /// The hawl start date at the time of saving, as an ISO-8601 string.
    pub hawl_date: String,
    /// The operating currency code at the time of saving.
    pub currency: String,
    /// The net zakatable wealth that was computed.
    pub net_wealth: Decimal,
    /// The Zakat amount that was due.
    pub zakat_payable: Decimal,
    /// Whether the payer has marked this obligation as paid.
    pub is_paid: bool,
}

impl HistoryRecord {
    /// Creates a new, unpaid record with a freshly generated id.
    pub fn new(
        timestamp: DateTime<Utc>,
        hawl_date: impl Into<String>,
        currency: impl Into<String>,
        net_wealth: Decimal,
        zakat_payable: Decimal,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp,
            hawl_date: hawl_date.into(),
            currency: currency.into(),
            net_wealth,
            zakat_payable,
            is_paid: false,
        }
    }
}

/// Sums the payable amounts of all unpaid records.
///
/// # Example
///
/// ```
/// use zakat_engine::models::{HistoryRecord, total_arrears};
/// use chrono::Utc;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let mut paid = HistoryRecord::new(
///     Utc::now(), "2023-03-22", "USD",
///     Decimal::from_str("8000").unwrap(),
///     Decimal::from_str("200").unwrap(),
/// );
/// paid.is_paid = true;
/// let unpaid = HistoryRecord::new(
///     Utc::now(), "2024-03-11", "USD",
///     Decimal::from_str("10000").unwrap(),
///     Decimal::from_str("250").unwrap(),
/// );
///
/// assert_eq!(total_arrears(&[paid, unpaid]), Decimal::from_str("250").unwrap());
/// ```
pub fn total_arrears(records: &[HistoryRecord]) -> Decimal {
    records
        .iter()
        .filter(|r| !r.is_paid)
        .map(|r| r.zakat_payable)
        .sum()
}
