//! High-level calendar conversions composing the JDN pivot.

use super::date::{GregorianDate, HijriDate};
use super::jdn::{gregorian_to_jdn, hijri_to_jdn, jdn_to_gregorian, jdn_to_hijri};

/// Converts a Gregorian calendar date to the civil Hijri date.
///
/// # Example
///
/// ```
/// use zakat_engine::calendar::{GregorianDate, HijriDate, gregorian_to_hijri};
///
/// let hijri = gregorian_to_hijri(GregorianDate::new(2000, 1, 1));
/// assert_eq!(hijri, HijriDate::new(1420, 8, 25));
/// ```
pub fn gregorian_to_hijri(date: GregorianDate) -> HijriDate {
    jdn_to_hijri(gregorian_to_jdn(date))
}

/// Converts a civil Hijri date to the Gregorian calendar date.
///
/// The day of month is not validated against the tabular month length: a
/// day-30 input for a 29-day month rolls over into the following month
/// rather than producing an error.
///
/// # Example
///
/// ```
/// use zakat_engine::calendar::{GregorianDate, HijriDate, hijri_to_gregorian};
///
/// let gregorian = hijri_to_gregorian(HijriDate::new(1420, 8, 25));
/// assert_eq!(gregorian, GregorianDate::new(2000, 1, 1));
/// ```
pub fn hijri_to_gregorian(date: HijriDate) -> GregorianDate {
    jdn_to_gregorian(hijri_to_jdn(date))
}
