//! A single language/locale text mapping.

use crate::properties::{self, TextMap};
use crate::Result;
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Extension used for bundle entries written to an archive.
pub const PROPERTIES_EXTENSION: &str = "properties";

/// Localized texts for one `(language, locale)` pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bundle {
    /// Language code, e.g. `en`.
    pub language_code: String,

    /// Locale code distinguishing variants of one language, e.g. `GB`.
    #[serde(alias = "localCode")]
    pub locale_code: String,

    /// Key to localized text.
    #[serde(default)]
    pub text_map: TextMap,
}

impl Bundle {
    /// Create an empty bundle.
    pub fn new(language_code: impl Into<String>, locale_code: impl Into<String>) -> Self {
        Self {
            language_code: language_code.into(),
            locale_code: locale_code.into(),
            text_map: TextMap::new(),
        }
    }

    /// Create a bundle with an existing mapping.
    pub fn with_texts(
        language_code: impl Into<String>,
        locale_code: impl Into<String>,
        text_map: TextMap,
    ) -> Self {
        Self {
            language_code: language_code.into(),
            locale_code: locale_code.into(),
            text_map,
        }
    }

    /// Build a bundle from `key=value` text.
    ///
    /// Content never causes a failure; only a read error does.
    pub fn from_text(
        language_code: impl Into<String>,
        locale_code: impl Into<String>,
        data: &[u8],
    ) -> Result<Self> {
        Self::from_reader(language_code, locale_code, data)
    }

    /// Build a bundle from a reader yielding `key=value` text.
    pub fn from_reader<R: Read>(
        language_code: impl Into<String>,
        locale_code: impl Into<String>,
        reader: R,
    ) -> Result<Self> {
        let text_map = properties::decode(reader)?;
        Ok(Self::with_texts(language_code, locale_code, text_map))
    }

    /// Build a bundle from a properties file on disk.
    pub fn from_properties_file(
        language_code: impl Into<String>,
        locale_code: impl Into<String>,
        path: &Path,
    ) -> Result<Self> {
        let data = std::fs::read(path)?;
        let bundle = Self::from_text(language_code, locale_code, &data)?;
        debug!(
            path = %path.display(),
            language = %bundle.language_code,
            locale = %bundle.locale_code,
            keys = bundle.len(),
            "Loaded bundle from file"
        );
        Ok(bundle)
    }

    /// Encode the mapping as `key=value` lines.
    pub fn to_text(&self) -> Vec<u8> {
        properties::encode(&self.text_map)
    }

    /// Whether this bundle is identified by the given pair.
    pub fn matches(&self, language_code: &str, locale_code: &str) -> bool {
        self.language_code == language_code && self.locale_code == locale_code
    }

    /// Whether two bundles share the same `(language, locale)` identity.
    pub fn same_pair(&self, other: &Bundle) -> bool {
        self.matches(&other.language_code, &other.locale_code)
    }

    /// Archive entry name, `<language>_<locale>.properties`.
    pub fn entry_name(&self) -> String {
        format!(
            "{}_{}.{}",
            self.language_code, self.locale_code, PROPERTIES_EXTENSION
        )
    }

    /// Look up a text.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.text_map.get(key).map(String::as_str)
    }

    /// Insert or replace a text, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.text_map.insert(key.into(), value.into())
    }

    /// Remove a text.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.text_map.remove(key)
    }

    /// Number of texts.
    pub fn len(&self) -> usize {
        self.text_map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text_map.is_empty()
    }

    /// Iterate keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.text_map.keys().map(String::as_str)
    }
}
