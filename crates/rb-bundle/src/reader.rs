//! Archive reader for importing resource bundles.
//!
//! Reads ZIP archives of `key=value` entries plus `meta.properties`.

use crate::meta::{parse_entry_name, ArchiveMeta, META_FILE_NAME};
use crate::{properties, Bundle, Error, ResourceBundle, Result};
use std::fs::File;
use std::io::{Cursor, Read, Seek};
use std::path::Path;
use tracing::{debug, info, warn};
use zip::ZipArchive;

/// Reader for resource bundle archives.
pub struct ArchiveReader<R: Read + Seek> {
    archive: ZipArchive<R>,
}

impl ArchiveReader<File> {
    /// Open an archive from a file path.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }
}

impl ArchiveReader<Cursor<Vec<u8>>> {
    /// Open an archive from bytes.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        Self::from_reader(Cursor::new(bytes))
    }
}

impl<R: Read + Seek> ArchiveReader<R> {
    /// Create a reader from any Read + Seek source.
    pub fn from_reader(reader: R) -> Result<Self> {
        let archive = ZipArchive::new(reader)?;
        debug!(entries = archive.len(), "Archive opened");
        Ok(Self { archive })
    }

    /// Number of entries, including `meta.properties` and directories.
    pub fn len(&self) -> usize {
        self.archive.len()
    }

    pub fn is_empty(&self) -> bool {
        self.archive.is_empty()
    }

    /// Entry names in archive order.
    pub fn entry_names(&self) -> impl Iterator<Item = &str> {
        self.archive.file_names()
    }

    /// Read the default selector, if the archive has a usable metadata entry.
    pub fn read_meta(&mut self) -> Result<Option<ArchiveMeta>> {
        let entry = match self.archive.by_name(META_FILE_NAME) {
            Ok(entry) => entry,
            Err(zip::result::ZipError::FileNotFound) => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let map = properties::decode(entry)?;
        Ok(ArchiveMeta::from_map(&map))
    }

    /// Import every entry into a new container targeting `(language, locale)`.
    ///
    /// The first malformed name, duplicate pair or read failure aborts the
    /// whole import.
    pub fn import(
        mut self,
        language_code: impl Into<String>,
        locale_code: impl Into<String>,
    ) -> Result<ResourceBundle> {
        let mut rb = ResourceBundle::empty(language_code, locale_code);
        let mut meta = None;

        for index in 0..self.archive.len() {
            let entry = self.archive.by_index(index)?;
            if entry.is_dir() {
                debug!(name = entry.name(), "Skipping directory entry");
                continue;
            }

            let name = entry.name().to_string();
            if name == META_FILE_NAME {
                let map = properties::decode(entry)?;
                meta = ArchiveMeta::from_map(&map);
                if meta.is_none() {
                    warn!(name = %name, "Metadata entry lacks default selector keys");
                }
                continue;
            }

            let (language, locale) = parse_entry_name(&name)?;
            let bundle = Bundle::from_reader(language, locale, entry)?;
            debug!(name = %name, keys = bundle.len(), "Read bundle entry");
            rb.add_bundle(bundle, false)?;
        }

        match meta {
            Some(meta) => match rb.set_default(&meta.default_language, &meta.default_locale) {
                Ok(()) => {}
                Err(Error::BundleNotFound { language, locale }) => {
                    warn!(
                        language = %language,
                        locale = %locale,
                        "Default named in metadata has no bundle; default left unset"
                    );
                }
                Err(e) => return Err(e),
            },
            None => warn!("Archive has no default selector; default left unset"),
        }

        info!(
            bundles = rb.len(),
            default = ?rb.default_bundle().map(|b| b.entry_name()),
            "Archive imported"
        );

        Ok(rb)
    }
}

impl ResourceBundle {
    /// Import a resource bundle archive held in memory.
    pub fn from_archive(
        language_code: impl Into<String>,
        locale_code: impl Into<String>,
        data: &[u8],
    ) -> Result<Self> {
        ArchiveReader::from_reader(Cursor::new(data))?.import(language_code, locale_code)
    }

    /// Import a resource bundle archive from disk.
    pub fn open_archive(
        language_code: impl Into<String>,
        locale_code: impl Into<String>,
        path: &Path,
    ) -> Result<Self> {
        ArchiveReader::open(path)?.import(language_code, locale_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ArchiveWriter;
    use std::io::Write;
    use zip::write::{FileOptions, ZipWriter};

    fn raw_archive(entries: &[(&str, &[u8])]) -> Vec<u8> {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let options: FileOptions<'_, ()> = FileOptions::default();
        for (name, data) in entries {
            zip.start_file(*name, options).unwrap();
            zip.write_all(data).unwrap();
        }
        zip.finish().unwrap().into_inner()
    }

    #[test]
    fn test_import_binds_default() {
        let bytes = raw_archive(&[
            ("meta.properties", b"defaultLang=en\ndefaultLocal=US"),
            ("en_US.properties", b"greeting=Hi\n"),
            ("en_GB.properties", b"greeting=Hello\n"),
        ]);

        let rb = ResourceBundle::from_archive("en", "GB", &bytes).unwrap();

        assert_eq!(rb.len(), 2);
        assert!(rb.default_is_shared());
        assert_eq!(rb.default_bundle().unwrap().locale_code, "US");
        assert_eq!(rb.get("greeting"), "Hello");
    }

    #[test]
    fn test_import_meta_after_bundles() {
        let bytes = raw_archive(&[
            ("de_DE.properties", b"k=v\n"),
            ("meta.properties", b"defaultLang=de\ndefaultLocal=DE"),
        ]);

        let rb = ResourceBundle::from_archive("fr", "FR", &bytes).unwrap();
        assert_eq!(rb.get("k"), "v");
    }

    #[test]
    fn test_import_unknown_default_left_unset() {
        let bytes = raw_archive(&[
            ("meta.properties", b"defaultLang=ja\ndefaultLocal=JA"),
            ("en_US.properties", b"k=v\n"),
        ]);

        let rb = ResourceBundle::from_archive("en", "US", &bytes).unwrap();
        assert!(rb.default_bundle().is_none());
        assert_eq!(rb.get("k"), "v");
    }

    #[test]
    fn test_import_without_meta() {
        let bytes = raw_archive(&[("en_US.properties", b"k=v\n")]);

        let rb = ResourceBundle::from_archive("en", "US", &bytes).unwrap();
        assert!(rb.default_bundle().is_none());
    }

    #[test]
    fn test_import_malformed_name_fails() {
        let bytes = raw_archive(&[
            ("meta.properties", b"defaultLang=en\ndefaultLocal=US"),
            ("en_US.properties", b"k=v\n"),
            ("broken", b"k=v\n"),
        ]);

        let err = ResourceBundle::from_archive("en", "US", &bytes).unwrap_err();
        assert!(matches!(&err, Error::MalformedEntryName(name) if name == "broken"));
        assert!(err.is_format_error());
    }

    #[test]
    fn test_import_duplicate_pair_fails() {
        let bytes = raw_archive(&[
            ("en_US.properties", b"k=v\n"),
            ("en_US.txt", b"k=other\n"),
        ]);

        let err = ResourceBundle::from_archive("en", "US", &bytes).unwrap_err();
        assert!(matches!(err, Error::DuplicateBundle { .. }));
    }

    #[test]
    fn test_import_not_a_zip() {
        let err = ResourceBundle::from_archive("en", "US", b"definitely not a zip").unwrap_err();
        assert!(matches!(err, Error::Zip(_)));
    }

    #[test]
    fn test_reader_entry_names_and_meta() {
        let mut rb = ResourceBundle::empty("en", "US");
        rb.add_bundle(Bundle::from_text("en", "US", b"a=1\n").unwrap(), true)
            .unwrap();
        let bytes = ArchiveWriter::from_resource_bundle(&rb)
            .unwrap()
            .write_to_vec()
            .unwrap();

        let mut reader = ArchiveReader::from_bytes(bytes).unwrap();
        let names: Vec<_> = reader.entry_names().map(str::to_string).collect();
        assert!(names.contains(&"meta.properties".to_string()));
        assert!(names.contains(&"en_US.properties".to_string()));
        assert_eq!(reader.len(), 2);
        assert_eq!(reader.read_meta().unwrap(), Some(ArchiveMeta::new("en", "US")));
    }
}
