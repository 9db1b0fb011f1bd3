//! Target selection resolution.
//!
//! Implements deterministic resolution order for the language/locale that
//! lookups target:
//! 1. Explicit CLI flags (--lang, --locale)
//! 2. Environment variables (RBUNDLE_LANG, RBUNDLE_LOCALE)
//! 3. The loaded container's default bundle
//! 4. Empty (lookups then resolve straight to the default)

use std::env;

/// Environment variable holding the target language code.
pub const LANG_ENV: &str = "RBUNDLE_LANG";

/// Environment variable holding the target locale code.
pub const LOCALE_ENV: &str = "RBUNDLE_LOCALE";

/// How a target code was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetResolution {
    CliFlag,
    EnvVar,
    ArchiveDefault,
    Unset,
}

impl std::fmt::Display for TargetResolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TargetResolution::CliFlag => write!(f, "cli"),
            TargetResolution::EnvVar => write!(f, "env"),
            TargetResolution::ArchiveDefault => write!(f, "default"),
            TargetResolution::Unset => write!(f, "unset"),
        }
    }
}

/// Resolved target selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetConfig {
    pub language_code: String,
    pub locale_code: String,
    /// Where the language code came from
    pub language_source: TargetResolution,
    /// Where the locale code came from
    pub locale_source: TargetResolution,
}

/// Resolver for the lookup target.
#[derive(Debug, Clone, Default)]
pub struct TargetResolver {
    cli_language: Option<String>,
    cli_locale: Option<String>,
}

impl TargetResolver {
    /// Create a resolver with values from CLI flags.
    pub fn new(cli_language: Option<String>, cli_locale: Option<String>) -> Self {
        TargetResolver {
            cli_language,
            cli_locale,
        }
    }

    /// Resolve against the process environment.
    pub fn resolve(&self, fallback: Option<(&str, &str)>) -> TargetConfig {
        self.resolve_with(|name| env::var(name).ok(), fallback)
    }

    /// Resolve with an explicit environment lookup.
    pub fn resolve_with<F>(&self, lookup: F, fallback: Option<(&str, &str)>) -> TargetConfig
    where
        F: Fn(&str) -> Option<String>,
    {
        let (language_code, language_source) = resolve_one(
            self.cli_language.as_deref(),
            lookup(LANG_ENV),
            fallback.map(|(language, _)| language),
        );
        let (locale_code, locale_source) = resolve_one(
            self.cli_locale.as_deref(),
            lookup(LOCALE_ENV),
            fallback.map(|(_, locale)| locale),
        );

        TargetConfig {
            language_code,
            locale_code,
            language_source,
            locale_source,
        }
    }
}

fn resolve_one(
    cli: Option<&str>,
    env: Option<String>,
    fallback: Option<&str>,
) -> (String, TargetResolution) {
    if let Some(value) = cli {
        return (value.to_string(), TargetResolution::CliFlag);
    }
    if let Some(value) = env.filter(|v| !v.is_empty()) {
        return (value, TargetResolution::EnvVar);
    }
    if let Some(value) = fallback {
        return (value.to_string(), TargetResolution::ArchiveDefault);
    }
    (String::new(), TargetResolution::Unset)
}

/// Parse a `<language>_<locale>` pair as used by `--default`.
pub fn parse_pair(value: &str) -> Result<(String, String), String> {
    value
        .split_once('_')
        .map(|(language, locale)| (language.to_string(), locale.to_string()))
        .ok_or_else(|| format!("expected <language>_<locale>, got '{}'", value))
}
