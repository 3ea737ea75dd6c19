//! Localized Hijri month names.

use serde::{Deserialize, Serialize};

/// Display locale for Hijri month names.
///
/// # Example
///
/// ```
/// use zakat_engine::calendar::Locale;
///
/// assert_eq!(Locale::from_code("ur"), Locale::Ur);
/// // Unknown codes fall back to the default locale.
/// assert_eq!(Locale::from_code("fr"), Locale::En);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English (default).
    #[default]
    En,
    /// Urdu.
    Ur,
    /// Hindi.
    Hi,
    /// Arabic.
    Ar,
}

impl Locale {
    /// Resolves a language code, falling back to English for unknown codes.
    pub fn from_code(code: &str) -> Self {
        match code {
            "en" => Locale::En,
            "ur" => Locale::Ur,
            "hi" => Locale::Hi,
            "ar" => Locale::Ar,
            _ => Locale::En,
        }
    }
}

const MONTHS_EN: [&str; 12] = [
    "Muharram",
    "Safar",
    "Rabi' al-Awwal",
    "Rabi' al-Thani",
    "Jumada al-Awwal",
    "Jumada al-Thani",
    "Rajab",
    "Sha'ban",
    "Ramadan",
    "Shawwal",
    "Dhul-Qi'dah",
    "Dhul-Hijjah",
];

const MONTHS_UR: [&str; 12] = [
    "محرم",
    "صفر",
    "ربیع الاول",
    "ربیع الثانی",
    "جمادی الاول",
    "جمادی الثانی",
    "رجب",
    "شعبان",
    "رمضان",
    "شوال",
    "ذو القعدہ",
    "ذو الحجہ",
];

const MONTHS_AR: [&str; 12] = [
    "محرم",
    "صفر",
    "ربيع الأول",
    "ربيع الثاني",
    "جمادى الأولى",
    "جمادى الآخرة",
    "رجب",
    "شعبان",
    "رمضان",
    "شوال",
    "ذو القعدة",
    "ذو الحجة",
];

const MONTHS_HI: [&str; 12] = [
    "मुहर्रम",
    "सफर",
    "रबी अल-अव्वल",
    "रबी अल-थानी",
    "जुमादा अल-अव्वल",
    "जुमादा अल-थानी",
    "रजब",
    "शाबान",
    "रमजान",
    "शव्वाल",
    "धुल-क़ादा",
    "धुल-हिज्जा",
];

/// Looks up a lunar month's localized name.
///
/// # Panics
///
/// Panics if `month_index` is outside 0–11: an out-of-range index is a
/// programming error in the caller, not an input condition.
///
/// # Example
///
/// ```
/// use zakat_engine::calendar::{Locale, month_name};
///
/// assert_eq!(month_name(8, Locale::En), "Ramadan");
/// assert_eq!(month_name(0, Locale::Ar), "محرم");
/// ```
pub fn month_name(month_index: usize, locale: Locale) -> &'static str {
    let table = match locale {
        Locale::En => &MONTHS_EN,
        Locale::Ur => &MONTHS_UR,
        Locale::Hi => &MONTHS_HI,
        Locale::Ar => &MONTHS_AR,
    };
    table[month_index]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_locales_cover_twelve_months() {
        for locale in [Locale::En, Locale::Ur, Locale::Hi, Locale::Ar] {
            for index in 0..12 {
                assert!(!month_name(index, locale).is_empty());
            }
        }
    }

    #[test]
    fn test_first_and_last_months() {
        assert_eq!(month_name(0, Locale::En), "Muharram");
        assert_eq!(month_name(11, Locale::En), "Dhul-Hijjah");
    }

    #[test]
    fn test_unknown_code_falls_back_to_english() {
        assert_eq!(Locale::from_code("de"), Locale::En);
        assert_eq!(Locale::from_code(""), Locale::En);
    }

    #[test]
    fn test_locale_serde_is_lowercase() {
        assert_eq!(serde_json::to_string(&Locale::Ar).unwrap(), "\"ar\"");
        let back: Locale = serde_json::from_str("\"hi\"").unwrap();
        assert_eq!(back, Locale::Hi);
    }

    #[test]
    #[should_panic]
    fn test_out_of_range_index_panics() {
        month_name(12, Locale::En);
    }
}
