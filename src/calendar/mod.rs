//! Gregorian ↔ Hijri calendar conversion.
//!
//! This module implements a tabular (arithmetic) Islamic calendar pivoting
//! on the Julian Day Number: Gregorian dates are converted to an integer
//! JDN, and the JDN is converted to a civil Hijri date using a fixed mean
//! lunar month and the 30-year (10631-day) intercalation cycle. The
//! approximation is deliberate — displayed Hijri dates are defined by this
//! arithmetic, not by lunar observation — and its known quirks are
//! preserved rather than corrected so that forward and inverse conversions
//! agree exactly.

mod convert;
mod date;
mod jdn;
mod month_names;

pub use convert::{gregorian_to_hijri, hijri_to_gregorian};
pub use date::{GregorianDate, HijriDate};
pub use jdn::{
    GREGORIAN_CUTOVER_JDN, HIJRI_EPOCH_ASTRO, gregorian_to_jdn, hijri_to_jdn, jdn_to_gregorian,
    jdn_to_hijri,
};
pub use month_names::{Locale, month_name};
