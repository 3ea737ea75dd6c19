//! Julian Day Number pivot arithmetic.
//!
//! The four functions here implement the tabular conversion in both
//! directions, keeping the floating-point `floor` formulation of the
//! published algorithm so that forward and inverse conversions agree
//! exactly: `hijri_to_jdn(jdn_to_hijri(j)) == j` and
//! `gregorian_to_jdn(jdn_to_gregorian(j)) == j` over the supported range.

use super::date::{GregorianDate, HijriDate};

/// Astronomical epoch of the Hijri calendar: JDN of the day before
/// 1 Muharram 1 AH in the civil reckoning.
pub const HIJRI_EPOCH_ASTRO: i64 = 1948084;

/// The last Julian-reckoned day: 4 October 1582. Dates with a larger JDN
/// receive the Gregorian leap correction in the inverse conversion.
pub const GREGORIAN_CUTOVER_JDN: i64 = 2299160;

/// Mean Hijri year length in days: thirty years span 10631 days.
const MEAN_HIJRI_YEAR: f64 = 10631.0 / 30.0;

/// Epoch alignment shift applied to the mean-year accumulation.
const EPOCH_SHIFT: f64 = 8.01 / 60.0;

/// Length of one 30-year intercalation cycle, in days.
const CYCLE_DAYS: f64 = 10631.0;

/// Converts a Gregorian calendar date to its Julian Day Number.
///
/// January and February are treated as months 13 and 14 of the previous
/// year. Years before 1583 receive no Gregorian leap correction (they are
/// treated as pre-reform Julian dates), and October 1582 is special-cased
/// around the ten dropped days of the calendar reform.
///
/// # Example
///
/// ```
/// use zakat_engine::calendar::{GregorianDate, gregorian_to_jdn};
///
/// assert_eq!(gregorian_to_jdn(GregorianDate::new(2000, 1, 1)), 2451545);
/// ```
pub fn gregorian_to_jdn(date: GregorianDate) -> i64 {
    let mut year = i64::from(date.year);
    let mut month = i64::from(date.month);
    let day = i64::from(date.day);

    if month < 3 {
        year -= 1;
        month += 12;
    }

    let century = year.div_euclid(100);
    let mut b = 2 - century + century.div_euclid(4);
    if year < 1583 {
        b = 0;
    }
    if year == 1582 {
        if month > 10 {
            b = -10;
        }
        if month == 10 {
            b = if day > 4 { -10 } else { 0 };
        }
    }

    (365.25 * (year as f64 + 4716.0)).floor() as i64
        + (30.6001 * (month as f64 + 1.0)).floor() as i64
        + day
        + b
        - 1524
}

/// Converts a Julian Day Number to a Gregorian calendar date.
///
/// JDNs after the October 1582 cutover receive the Gregorian leap
/// correction; earlier JDNs are interpreted as Julian dates, mirroring the
/// forward conversion.
pub fn jdn_to_gregorian(jdn: i64) -> GregorianDate {
    let jd = jdn as f64 + 0.5;
    let z = jd.floor();
    let f = jd - z;

    let a = if jdn > GREGORIAN_CUTOVER_JDN {
        let alpha = ((z - 1867216.25) / 36524.25).floor();
        z + 1.0 + alpha - (alpha / 4.0).floor()
    } else {
        z
    };

    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day = (b - d - (30.6001 * e).floor() + f).floor();
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };

    GregorianDate::new(year as i32, month as u32, day as u32)
}

/// Converts a Julian Day Number to a civil Hijri date.
///
/// Uses the 30-year tabular cycle: days since the astronomical epoch are
/// split into whole cycles, a year within the cycle via the mean year
/// length, and a month via the mean lunar month of 29.5 days. The rounding
/// occasionally yields a spurious thirteenth month, which is collapsed
/// into month 12; that quirk is preserved intentionally because the
/// inverse conversion compensates for it exactly.
pub fn jdn_to_hijri(jdn: i64) -> HijriDate {
    let mut z = (jdn - HIJRI_EPOCH_ASTRO) as f64;
    let cycle = (z / CYCLE_DAYS).floor();
    z -= CYCLE_DAYS * cycle;

    let year_in_cycle = ((z - EPOCH_SHIFT) / MEAN_HIJRI_YEAR).floor();
    let year = (30.0 * cycle + year_in_cycle) as i32;
    z -= (year_in_cycle * MEAN_HIJRI_YEAR + EPOCH_SHIFT).floor();

    let mut month = ((z + 28.5001) / 29.5).floor() as i64;
    if month == 13 {
        month = 12;
    }
    let day = z as i64 - (29.5 * month as f64 - 29.0001).floor() as i64;

    HijriDate::new(year, (month - 1) as u32, day as u32)
}

/// Converts a civil Hijri date to its Julian Day Number.
///
/// The day of month is not validated against the tabular month length;
/// out-of-range days normalize silently through the arithmetic.
pub fn hijri_to_jdn(date: HijriDate) -> i64 {
    let month = f64::from(date.month + 1);

    i64::from(date.day)
        + (29.5 * month - 29.0001).floor() as i64
        + (f64::from(date.year) * MEAN_HIJRI_YEAR + EPOCH_SHIFT).floor() as i64
        + HIJRI_EPOCH_ASTRO
}
