//! Localized resource bundles.
//!
//! A [`ResourceBundle`] holds one [`Bundle`] of `key=value` texts per
//! `(language, locale)` pair and a designated default bundle. Lookups go
//! exact pair → same language → default, and a miss is empty text rather
//! than an error.
//!
//! # Archive Format
//!
//! Archives are ZIP files containing:
//! - `meta.properties`: `defaultLang` and `defaultLocal` naming the default bundle
//! - `<language>_<locale>.properties`: one `key=value` line per text
//!
//! # Interchange Format
//!
//! The whole container also serializes to a single JSON document
//! (`languageCode`, `localeCode`, `default`, `bundles`). The default is
//! written by value and rebound to its list entry on load.
//!
//! # Example
//!
//! ```no_run
//! use rb_bundle::{Bundle, ResourceBundle};
//!
//! let mut rb = ResourceBundle::empty("en", "GB");
//! rb.add_bundle(Bundle::from_text("en", "US", b"greeting=Hi\n").unwrap(), true).unwrap();
//! rb.add_bundle(Bundle::from_text("en", "GB", b"greeting=Hello\n").unwrap(), false).unwrap();
//! assert_eq!(rb.get("greeting"), "Hello");
//!
//! // Archive round-trip
//! let bytes = rb.to_archive().unwrap();
//! let restored = ResourceBundle::from_archive("en", "GB", &bytes).unwrap();
//! assert_eq!(restored.get("greeting"), "Hello");
//! ```

pub mod bundle;
pub mod document;
pub mod error;
pub mod languages;
pub mod meta;
pub mod properties;
pub mod reader;
pub mod resource;
pub mod writer;

pub use bundle::Bundle;
pub use error::{Error, Result};
pub use languages::{find_language, languages, Language};
pub use meta::{ArchiveMeta, META_FILE_NAME};
pub use properties::TextMap;
pub use reader::ArchiveReader;
pub use resource::ResourceBundle;
pub use writer::ArchiveWriter;
