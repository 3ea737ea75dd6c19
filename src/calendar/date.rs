//! Calendar date value types.
//!
//! Both types are plain immutable values. Day-of-month inputs are not
//! validated against the actual length of the target month: a caller that
//! supplies day 30 for a 29-day lunar month receives whatever the pivot
//! arithmetic produces (silent normalization), not an error. Validation
//! happens only at the ISO-8601 parsing boundary.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A Gregorian calendar date.
///
/// Years may be negative for proleptic use, though callers only exercise
/// post-1582 dates.
///
/// # Example
///
/// ```
/// use zakat_engine::calendar::GregorianDate;
///
/// let date = GregorianDate::parse_iso("2024-03-11").unwrap();
/// assert_eq!(date, GregorianDate::new(2024, 3, 11));
/// assert_eq!(date.to_string(), "2024-03-11");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GregorianDate {
    /// Calendar year.
    pub year: i32,
    /// Month of year, 1–12.
    pub month: u32,
    /// Day of month, 1–31.
    pub day: u32,
}

impl GregorianDate {
    /// Creates a date from its components. No calendar validation is done.
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Parses an ISO-8601 (`YYYY-MM-DD`) date string.
    ///
    /// This is the validating boundary: the string must denote a real
    /// Gregorian calendar date.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidDate`] if the string is not a valid
    /// ISO-8601 calendar date.
    pub fn parse_iso(input: &str) -> EngineResult<Self> {
        let date = NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|e| {
            EngineError::InvalidDate {
                input: input.to_string(),
                message: e.to_string(),
            }
        })?;
        Ok(date.into())
    }
}

impl std::fmt::Display for GregorianDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl From<NaiveDate> for GregorianDate {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }
}

impl TryFrom<GregorianDate> for NaiveDate {
    type Error = EngineError;

    fn try_from(date: GregorianDate) -> EngineResult<Self> {
        NaiveDate::from_ymd_opt(date.year, date.month, date.day).ok_or_else(|| {
            EngineError::InvalidDate {
                input: date.to_string(),
                message: "no such calendar date".to_string(),
            }
        })
    }
}

/// A civil Hijri (lunar Islamic) calendar date.
///
/// The month is a 0-based index (0 = Muharram) as the conversion reports
/// it; [`HijriDate::format_with_month`] renders the localized month name.
///
/// # Example
///
/// ```
/// use zakat_engine::calendar::{HijriDate, Locale};
///
/// let date = HijriDate::new(1420, 8, 25);
/// assert_eq!(date.format_with_month(Locale::En), "25 Ramadan 1420");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HijriDate {
    /// Hijri year (anno Hegirae).
    pub year: i32,
    /// Month index, 0–11.
    pub month: u32,
    /// Day of month, starting at 1.
    pub day: u32,
}

impl HijriDate {
    /// Creates a date from its components. No calendar validation is done.
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Renders the date as `"<day> <month name> <year>"` in the given locale.
    ///
    /// # Panics
    ///
    /// Panics if `month` is outside 0–11 (caller contract).
    pub fn format_with_month(&self, locale: super::Locale) -> String {
        format!(
            "{} {} {}",
            self.day,
            super::month_name(self.month as usize, locale),
            self.year
        )
    }
}
