//! Liability model for the Zakat Engine.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A debt or obligation deducted from gross zakatable wealth.
///
/// Amounts are non-negative by convention, not enforced; the netting step
/// floors the result at zero regardless (see
/// [`compute_zakat`](crate::engine::compute_zakat)).
///
/// # Example
///
/// ```
/// use zakat_engine::models::Liability;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let liability = Liability::new("Car loan", Decimal::from_str("3000").unwrap());
/// assert_eq!(liability.name, "Car loan");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Liability {
    /// Stable identity of this liability.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Outstanding amount in the operating currency.
    pub amount: Decimal,
}

impl Liability {
    /// Creates a new liability with a freshly generated id.
    pub fn new(name: impl Into<String>, amount: Decimal) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_liability_round_trips_through_json() {
        let liability = Liability::new("Utility bills", Decimal::from_str("120.50").unwrap());
        let json = serde_json::to_string(&liability).unwrap();
        let back: Liability = serde_json::from_str(&json).unwrap();
        assert_eq!(liability, back);
    }
}
