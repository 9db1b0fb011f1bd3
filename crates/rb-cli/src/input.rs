//! Loading containers and bundles from disk.

use rb_bundle::meta::parse_entry_name;
use rb_bundle::{Bundle, ResourceBundle, Result};
use std::path::Path;
use tracing::debug;

/// Kind of container file, decided by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// ZIP archive with `meta.properties`
    Archive,
    /// JSON interchange document
    Document,
}

impl InputKind {
    /// `.json` files are documents; everything else is read as an archive.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => InputKind::Document,
            _ => InputKind::Archive,
        }
    }
}

/// Load a container from an archive or a JSON document.
///
/// Archives carry no target selection, so it is left empty for the caller
/// to set.
pub fn load_container(path: &Path) -> Result<ResourceBundle> {
    let kind = InputKind::from_path(path);
    debug!(path = %path.display(), kind = ?kind, "Loading resource bundle");
    match kind {
        InputKind::Document => ResourceBundle::from_json(&std::fs::read(path)?),
        InputKind::Archive => ResourceBundle::open_archive("", "", path),
    }
}

/// Read a `<language>_<locale>.<ext>` properties file into a bundle.
pub fn bundle_from_file(path: &Path) -> Result<Bundle> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let (language, locale) = parse_entry_name(&name)?;
    Bundle::from_properties_file(language, locale, path)
}
