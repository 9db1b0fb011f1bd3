//! Archive writer for exporting resource bundles.
//!
//! Creates ZIP archives with a `meta.properties` entry followed by one
//! `<language>_<locale>.properties` entry per bundle.

use crate::meta::{check_entry_codes, ArchiveMeta, META_FILE_NAME};
use crate::{Bundle, Error, ResourceBundle, Result};
use std::fs::File;
use std::io::{Cursor, Seek, Write};
use std::path::Path;
use tracing::{debug, info};
use zip::write::{FileOptions, ZipWriter};
use zip::CompressionMethod;

/// Builder for resource bundle archives.
pub struct ArchiveWriter {
    meta: ArchiveMeta,
    entries: Vec<(String, Vec<u8>)>,
}

impl ArchiveWriter {
    /// Create a writer whose metadata names the given default.
    pub fn new(meta: ArchiveMeta) -> Result<Self> {
        check_entry_codes(&meta.default_language, &meta.default_locale)?;
        Ok(Self {
            meta,
            entries: Vec::new(),
        })
    }

    /// Create a writer holding every bundle of a container.
    ///
    /// Fails if the container has no default, since the metadata entry
    /// cannot omit it, or if any pair cannot be read back from its entry
    /// name.
    pub fn from_resource_bundle(rb: &ResourceBundle) -> Result<Self> {
        let default = rb.default_bundle().ok_or(Error::MissingDefault)?;
        let mut writer = Self::new(ArchiveMeta::new(
            default.language_code.as_str(),
            default.locale_code.as_str(),
        ))?;
        for bundle in rb.bundles() {
            writer.add_bundle(bundle)?;
        }
        Ok(writer)
    }

    /// Add a bundle under its `<language>_<locale>.properties` name.
    pub fn add_bundle(&mut self, bundle: &Bundle) -> Result<()> {
        check_entry_codes(&bundle.language_code, &bundle.locale_code)?;
        self.add_entry(bundle.entry_name(), bundle.to_text());
        Ok(())
    }

    fn add_entry(&mut self, name: String, data: Vec<u8>) {
        debug!(name = %name, bytes = data.len(), "Added entry to archive");
        self.entries.push((name, data));
    }

    /// Total uncompressed size of the entries.
    pub fn total_bytes(&self) -> u64 {
        self.entries.iter().map(|(_, data)| data.len() as u64).sum()
    }

    /// Write the archive to a file.
    pub fn write(self, path: &Path) -> Result<()> {
        let file = File::create(path)?;
        self.write_archive(file)?;

        info!(
            path = %path.display(),
            entries = self.entries.len(),
            bytes = self.total_bytes(),
            "Archive written"
        );
        Ok(())
    }

    /// Write the archive to a byte vector.
    pub fn write_to_vec(self) -> Result<Vec<u8>> {
        let bytes = self.write_archive(Cursor::new(Vec::new()))?.into_inner();

        info!(
            entries = self.entries.len(),
            compressed_bytes = bytes.len(),
            uncompressed_bytes = self.total_bytes(),
            "Archive written to memory"
        );
        Ok(bytes)
    }

    fn write_archive<W: Write + Seek>(&self, sink: W) -> Result<W> {
        let mut zip = ZipWriter::new(sink);

        let options: FileOptions<'_, ()> = FileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .unix_permissions(0o644);

        // Metadata first
        zip.start_file(META_FILE_NAME, options)?;
        zip.write_all(&self.meta.to_properties())?;

        for (name, data) in &self.entries {
            zip.start_file(name.as_str(), options)?;
            zip.write_all(data)?;
        }

        Ok(zip.finish()?)
    }
}

impl ResourceBundle {
    /// Export this container as an archive held in memory.
    pub fn to_archive(&self) -> Result<Vec<u8>> {
        ArchiveWriter::from_resource_bundle(self)?.write_to_vec()
    }

    /// Export this container as an archive file.
    pub fn write_archive(&self, path: &Path) -> Result<()> {
        ArchiveWriter::from_resource_bundle(self)?.write(path)
    }
}
