//! Error types for resource bundle operations.

use thiserror::Error;

/// Errors that can occur while building, importing or exporting bundles.
///
/// Lookups never produce an error: a missing key or bundle resolves to
/// empty text.
#[derive(Error, Debug)]
pub enum Error {
    /// A bundle with the same language and locale is already present.
    #[error("bundle with language '{language}' and locale '{locale}' already exists")]
    DuplicateBundle { language: String, locale: String },

    /// No bundle with the requested language and locale is present.
    #[error("no bundle with language '{language}' and locale '{locale}'")]
    BundleNotFound { language: String, locale: String },

    /// Archive entry name is not of the form `<language>_<locale>.<ext>`.
    #[error("malformed archive entry name '{0}': expected <language>_<locale>.<ext>")]
    MalformedEntryName(String),

    /// Interchange document could not be parsed into a resource bundle.
    #[error("malformed resource bundle document: {0}")]
    MalformedDocument(#[source] serde_json::Error),

    /// Archive export needs a default bundle to describe in the metadata entry.
    #[error("resource bundle has no default bundle to export")]
    MissingDefault,

    /// Codes that would not survive the `<language>_<locale>.<ext>` entry
    /// name or the metadata lines.
    #[error("language '{language}' and locale '{locale}' cannot be stored as an archive entry")]
    UnencodableCodes { language: String, locale: String },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// ZIP archive error
    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),
}

impl Error {
    /// Whether the error stems from corrupt input rather than the environment
    /// or caller misuse.
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            Error::MalformedEntryName(_)
                | Error::MalformedDocument(_)
                | Error::UnencodableCodes { .. }
        ) || matches!(self, Error::Zip(zip::result::ZipError::InvalidArchive(_)))
    }

    pub(crate) fn duplicate(language: &str, locale: &str) -> Self {
        Error::DuplicateBundle {
            language: language.to_string(),
            locale: locale.to_string(),
        }
    }
}

/// Result type alias for bundle operations.
pub type Result<T> = std::result::Result<T, Error>;
