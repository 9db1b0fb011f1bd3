//! Archive metadata and entry naming.
//!
//! An archive holds one `meta.properties` entry naming the default bundle and
//! one `<language>_<locale>.<ext>` entry per bundle.

use crate::properties::TextMap;
use crate::{Error, Result};

/// Metadata entry name within the archive.
pub const META_FILE_NAME: &str = "meta.properties";

/// Metadata key holding the default bundle's language code.
pub const DEFAULT_LANG_KEY: &str = "defaultLang";

/// Metadata key holding the default bundle's locale code.
pub const DEFAULT_LOCALE_KEY: &str = "defaultLocal";

/// Default selector stored in `meta.properties`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveMeta {
    pub default_language: String,
    pub default_locale: String,
}

impl ArchiveMeta {
    pub fn new(default_language: impl Into<String>, default_locale: impl Into<String>) -> Self {
        Self {
            default_language: default_language.into(),
            default_locale: default_locale.into(),
        }
    }

    /// Read the selector from decoded metadata.
    ///
    /// Returns `None` if either key is missing.
    pub fn from_map(map: &TextMap) -> Option<Self> {
        let language = map.get(DEFAULT_LANG_KEY)?;
        let locale = map.get(DEFAULT_LOCALE_KEY)?;
        Some(Self::new(language.as_str(), locale.as_str()))
    }

    /// Metadata entry content: two lines, no trailing newline.
    pub fn to_properties(&self) -> Vec<u8> {
        format!(
            "{}={}\n{}={}",
            DEFAULT_LANG_KEY, self.default_language, DEFAULT_LOCALE_KEY, self.default_locale
        )
        .into_bytes()
    }
}

/// Split an entry name `<language>_<locale>.<ext>` into its codes.
///
/// The stem ends at the first `.` and is split at its first `_`, so the
/// locale may itself contain `_`.
pub fn parse_entry_name(name: &str) -> Result<(&str, &str)> {
    let (stem, _extension) = name
        .split_once('.')
        .ok_or_else(|| Error::MalformedEntryName(name.to_string()))?;
    stem.split_once('_')
        .ok_or_else(|| Error::MalformedEntryName(name.to_string()))
}

/// Check that a pair can be written as an entry name and read back as the
/// same pair.
///
/// The language ends at the first `_` and the stem at the first `.`, so the
/// language may not hold `_` and neither code may hold `.`. Path separators
/// and line breaks would corrupt the entry name or `meta.properties`.
pub fn check_entry_codes(language: &str, locale: &str) -> Result<()> {
    const FORBIDDEN: &[char] = &['.', '/', '\\', '\r', '\n'];

    if language.contains('_') || language.contains(FORBIDDEN) || locale.contains(FORBIDDEN) {
        return Err(Error::UnencodableCodes {
            language: language.to_string(),
            locale: locale.to_string(),
        });
    }
    Ok(())
}
