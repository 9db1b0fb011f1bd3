//! Reference catalog of supported languages.
//!
//! A fixed table of display name, language code and locale code triples,
//! intended for populating language pickers. Bundles are not checked
//! against it.

use serde::Serialize;

/// One supported language/locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Language {
    /// Human-readable name, e.g. `English (UK)`.
    pub name: &'static str,
    pub language_code: &'static str,
    pub locale_code: &'static str,
}

impl Language {
    const fn new(
        name: &'static str,
        language_code: &'static str,
        locale_code: &'static str,
    ) -> Self {
        Self {
            name,
            language_code,
            locale_code,
        }
    }
}

static LANGUAGES: &[Language] = &[
    Language::new("Amharic", "am", "AM"),
    Language::new("Arabic", "ar", "AR"),
    Language::new("Basque", "eu", "EU"),
    Language::new("Bengali", "bn", "BN"),
    Language::new("English (UK)", "en", "GB"),
    Language::new("Portuguese (Brazil)", "pt", "BR"),
    Language::new("Bulgarian", "bg", "BG"),
    Language::new("Catalan", "ca", "CA"),
    Language::new("Cherokee", "chr", "CHR"),
    Language::new("Croatian", "hr", "HR"),
    Language::new("Czech", "cs", "CS"),
    Language::new("Danish", "da", "DA"),
    Language::new("Dutch", "nl", "NL"),
    Language::new("English (US)", "en", "EN"),
    Language::new("Estonian", "et", "ET"),
    Language::new("Filipino", "fil", "FIL"),
    Language::new("Finnish", "fi", "FI"),
    Language::new("French", "fr", "FR"),
    Language::new("German", "de", "DE"),
    Language::new("Greek", "el", "EL"),
    Language::new("Gujarati", "gu", "GU"),
    Language::new("Hebrew", "iw", "IW"),
    Language::new("Hindi", "hi", "HI"),
    Language::new("Hungarian", "hu", "HU"),
    Language::new("Icelandic", "is", "IS"),
    Language::new("Indonesian", "id", "ID"),
    Language::new("Italian", "it", "IT"),
    Language::new("Japanese", "ja", "JA"),
    Language::new("Kannada", "kn", "KN"),
    Language::new("Korean", "ko", "KO"),
    Language::new("Latvian", "lv", "LV"),
    Language::new("Lithuanian", "lt", "LT"),
    Language::new("Malay", "ms", "MS"),
    Language::new("Malayalam", "ml", "ML"),
    Language::new("Marathi", "mr", "MR"),
    Language::new("Norwegian", "no", "NO"),
    Language::new("Polish", "pl", "PL"),
    Language::new("Portuguese (Portugal)", "pt", "PT"),
    Language::new("Romanian", "ro", "RO"),
    Language::new("Russian", "ru", "RU"),
    Language::new("Serbian", "sr", "SR"),
    Language::new("Chinese (PRC)", "zh", "CN"),
    Language::new("Slovak", "sk", "SK"),
    Language::new("Slovenian", "sl", "SL"),
    Language::new("Spanish", "es", "ES"),
    Language::new("Swahili", "sw", "SW"),
    Language::new("Swedish", "sv", "SV"),
    Language::new("Tamil", "ta", "TA"),
    Language::new("Telugu", "te", "TE"),
    Language::new("Thai", "th", "TH"),
    Language::new("Chinese (Taiwan)", "zh", "TW"),
    Language::new("Turkish", "tr", "TR"),
    Language::new("Urdu", "ur", "UR"),
    Language::new("Ukrainian", "uk", "UK"),
    Language::new("Vietnamese", "vi", "VI"),
    Language::new("Welsh", "cy", "CY"),
];

/// The full catalog.
pub fn languages() -> &'static [Language] {
    LANGUAGES
}

/// Look up the catalog entry for an exact pair.
pub fn find_language(language_code: &str, locale_code: &str) -> Option<&'static Language> {
    LANGUAGES
        .iter()
        .find(|l| l.language_code == language_code && l.locale_code == locale_code)
}

/// All catalog entries for one language code.
pub fn languages_for(language_code: &str) -> impl Iterator<Item = &'static Language> + '_ {
    LANGUAGES
        .iter()
        .filter(move |l| l.language_code == language_code)
}
