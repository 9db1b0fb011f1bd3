//! The resource bundle container and its fallback lookup.
//!
//! A [`ResourceBundle`] owns a list of [`Bundle`]s, unique by
//! `(language, locale)`, and designates one of them as the default. Lookups
//! go exact pair → language only → default, and never fail.

use crate::properties::TextMap;
use crate::{Bundle, Error, Result};
use tracing::{debug, warn};

/// Where the default bundle lives.
///
/// `Shared` points into the bundle list, so edits through the default are
/// edits of the list entry. `Detached` only occurs when a default was
/// supplied whose pair has no entry in the list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
enum DefaultSlot {
    #[default]
    Unset,
    Shared(usize),
    Detached(Bundle),
}

/// A set of bundles plus the target selection used by [`ResourceBundle::get`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceBundle {
    language_code: String,
    locale_code: String,
    default: DefaultSlot,
    bundles: Vec<Bundle>,
}

impl ResourceBundle {
    /// Create a container from parts.
    ///
    /// Uniqueness of `bundles` is not checked. The default is bound to the
    /// list entry with the same pair; when there is none it is kept as a
    /// detached copy.
    pub fn new(
        language_code: impl Into<String>,
        locale_code: impl Into<String>,
        default: Option<Bundle>,
        bundles: Vec<Bundle>,
    ) -> Self {
        let mut rb = Self {
            language_code: language_code.into(),
            locale_code: locale_code.into(),
            default: DefaultSlot::Unset,
            bundles,
        };
        if let Some(default) = default {
            rb.bind_default(default);
        }
        rb
    }

    /// Create a container with no bundles.
    pub fn empty(language_code: impl Into<String>, locale_code: impl Into<String>) -> Self {
        Self::new(language_code, locale_code, None, Vec::new())
    }

    /// Bind `default` to the list entry sharing its pair.
    ///
    /// Returns false if no entry matched and the default was kept detached.
    pub(crate) fn bind_default(&mut self, default: Bundle) -> bool {
        match self.position(&default.language_code, &default.locale_code) {
            Some(index) => {
                self.default = DefaultSlot::Shared(index);
                true
            }
            None => {
                warn!(
                    language = %default.language_code,
                    locale = %default.locale_code,
                    "Default bundle not present in bundle list; keeping detached copy"
                );
                self.default = DefaultSlot::Detached(default);
                false
            }
        }
    }

    /// Add a bundle, optionally making it the default.
    ///
    /// Fails without modifying the container if the pair already exists.
    pub fn add_bundle(&mut self, bundle: Bundle, is_default: bool) -> Result<()> {
        if self
            .position(&bundle.language_code, &bundle.locale_code)
            .is_some()
        {
            return Err(Error::duplicate(&bundle.language_code, &bundle.locale_code));
        }

        debug!(
            language = %bundle.language_code,
            locale = %bundle.locale_code,
            keys = bundle.len(),
            is_default,
            "Added bundle"
        );

        self.bundles.push(bundle);
        if is_default {
            self.default = DefaultSlot::Shared(self.bundles.len() - 1);
        }
        Ok(())
    }

    /// Remove the bundle with the given pair.
    ///
    /// Removing the default bundle leaves the container without a default.
    pub fn remove_bundle(&mut self, language_code: &str, locale_code: &str) -> Option<Bundle> {
        let index = self.position(language_code, locale_code)?;
        let removed = self.bundles.remove(index);

        if let DefaultSlot::Shared(current) = self.default {
            if current == index {
                self.default = DefaultSlot::Unset;
            } else if current > index {
                self.default = DefaultSlot::Shared(current - 1);
            }
        }
        Some(removed)
    }

    /// Make the bundle with the given pair the default.
    pub fn set_default(&mut self, language_code: &str, locale_code: &str) -> Result<()> {
        let index = self
            .position(language_code, locale_code)
            .ok_or_else(|| Error::BundleNotFound {
                language: language_code.to_string(),
                locale: locale_code.to_string(),
            })?;
        self.default = DefaultSlot::Shared(index);
        Ok(())
    }

    /// Find a bundle for `(language, locale)`.
    ///
    /// Prefers an exact pair, then the first bundle with the same language.
    pub fn find_bundle(&self, language_code: &str, locale_code: &str) -> Option<&Bundle> {
        self.find_index(language_code, locale_code)
            .map(|index| &self.bundles[index])
    }

    /// The bundle the configured target resolves to, without the default fallback.
    pub fn target_bundle(&self) -> Option<&Bundle> {
        self.find_bundle(&self.language_code, &self.locale_code)
    }

    /// Resolve a text for the configured target.
    ///
    /// Order: matched bundle, then the default (unless the matched bundle is
    /// the default), then empty text.
    pub fn get(&self, key: &str) -> &str {
        let found = self.find_index(&self.language_code, &self.locale_code);
        let bundle = match found.map(|index| &self.bundles[index]) {
            Some(bundle) => bundle,
            None => match self.default_bundle() {
                Some(bundle) => bundle,
                None => return "",
            },
        };

        if let Some(text) = bundle.get(key) {
            return text;
        }

        let found_is_default = match found {
            None => true,
            Some(index) => self.default == DefaultSlot::Shared(index),
        };
        if found_is_default {
            return "";
        }

        self.default_bundle()
            .and_then(|default| default.get(key))
            .unwrap_or("")
    }

    /// Target language code.
    pub fn language_code(&self) -> &str {
        &self.language_code
    }

    /// Target locale code.
    pub fn locale_code(&self) -> &str {
        &self.locale_code
    }

    /// Change the target selection.
    pub fn set_target(&mut self, language_code: impl Into<String>, locale_code: impl Into<String>) {
        self.language_code = language_code.into();
        self.locale_code = locale_code.into();
    }

    /// Builder form of [`ResourceBundle::set_target`].
    pub fn with_target(
        mut self,
        language_code: impl Into<String>,
        locale_code: impl Into<String>,
    ) -> Self {
        self.set_target(language_code, locale_code);
        self
    }

    /// The default bundle, if any.
    pub fn default_bundle(&self) -> Option<&Bundle> {
        match &self.default {
            DefaultSlot::Unset => None,
            DefaultSlot::Shared(index) => self.bundles.get(*index),
            DefaultSlot::Detached(bundle) => Some(bundle),
        }
    }

    /// Mutable texts of the default bundle.
    ///
    /// For a shared default these are the texts of the list entry.
    pub fn default_texts_mut(&mut self) -> Option<&mut TextMap> {
        match &mut self.default {
            DefaultSlot::Unset => None,
            DefaultSlot::Shared(index) => self.bundles.get_mut(*index).map(|b| &mut b.text_map),
            DefaultSlot::Detached(bundle) => Some(&mut bundle.text_map),
        }
    }

    /// Whether the default is an entry of the bundle list.
    pub fn default_is_shared(&self) -> bool {
        matches!(self.default, DefaultSlot::Shared(_))
    }

    /// Mutable texts of the bundle with exactly this pair.
    pub fn texts_mut(&mut self, language_code: &str, locale_code: &str) -> Option<&mut TextMap> {
        let index = self.position(language_code, locale_code)?;
        Some(&mut self.bundles[index].text_map)
    }

    /// All bundles in insertion order.
    pub fn bundles(&self) -> &[Bundle] {
        &self.bundles
    }

    pub fn len(&self) -> usize {
        self.bundles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bundles.is_empty()
    }

    fn position(&self, language_code: &str, locale_code: &str) -> Option<usize> {
        self.bundles
            .iter()
            .position(|b| b.matches(language_code, locale_code))
    }

    fn find_index(&self, language_code: &str, locale_code: &str) -> Option<usize> {
        self.position(language_code, locale_code).or_else(|| {
            self.bundles
                .iter()
                .position(|b| b.language_code == language_code)
        })
    }
}
