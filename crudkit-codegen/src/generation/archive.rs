//! Archive writers.
//!
//! Writers are strictly sequential: each call appends one fully formed entry.

use std::{
    io::Write,
    path::{Path, PathBuf},
};

use eyre::{Result, WrapErr, bail};
use flate2::{Compression, GzBuilder, write::GzEncoder};
use tar::{EntryType, Header};

/// A sink for generated entries.
pub trait ArchiveWriter {
    /// Append one entry. Any error is fatal for the whole run.
    fn write_entry(&mut self, path: &str, contents: &[u8]) -> Result<()>;
}

/// In-memory gzip-compressed tar archive.
///
/// Every header carries fixed metadata (mtime 0, mode 0644, uid/gid 0), so
/// identical entries in identical order always produce identical bytes.
///
/// # Example
///
/// ```
/// use crudkit_codegen::generation::{ArchiveWriter, TarGzArchive};
///
/// let mut archive = TarGzArchive::new();
/// archive.write_entry("README.md", b"# CRUD Module\n").unwrap();
/// let bytes = archive.finish().unwrap();
/// assert_eq!(&bytes[..2], &[0x1f, 0x8b]);
/// ```
pub struct TarGzArchive {
    builder: tar::Builder<GzEncoder<Vec<u8>>>,
    entries: usize,
}

impl TarGzArchive {
    const MODE: u32 = 0o644;

    /// Create an empty archive.
    pub fn new() -> Self {
        // GzBuilder leaves mtime at zero and writes no file name
        let encoder = GzBuilder::new().write(Vec::new(), Compression::default());
        Self {
            builder: tar::Builder::new(encoder),
            entries: 0,
        }
    }

    /// Number of entries written so far.
    pub fn len(&self) -> usize {
        self.entries
    }

    /// Returns true if no entry has been written.
    pub fn is_empty(&self) -> bool {
        self.entries == 0
    }

    /// Close the tar stream and the gzip stream, returning the archive bytes.
    pub fn finish(self) -> Result<Vec<u8>> {
        let encoder = self
            .builder
            .into_inner()
            .wrap_err("failed to finish tar stream")?;
        encoder.finish().wrap_err("failed to finish gzip stream")
    }
}

impl Default for TarGzArchive {
    fn default() -> Self {
        Self::new()
    }
}

impl ArchiveWriter for TarGzArchive {
    fn write_entry(&mut self, path: &str, contents: &[u8]) -> Result<()> {
        let mut header = Header::new_gnu();
        header.set_entry_type(EntryType::Regular);
        header.set_size(contents.len() as u64);
        header.set_mode(Self::MODE);
        header.set_mtime(0);
        header.set_uid(0);
        header.set_gid(0);

        self.builder
            .append_data(&mut header, path, contents)
            .wrap_err_with(|| format!("failed to append '{}' to archive", path))?;
        self.entries += 1;
        Ok(())
    }
}

/// Writes entries as plain files below a base directory.
#[derive(Debug)]
pub struct DirectoryWriter {
    base: PathBuf,
}

impl DirectoryWriter {
    /// Create a writer rooted at `base`. The directory is created on demand.
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    /// The base directory.
    pub fn base(&self) -> &Path {
        &self.base
    }
}

impl ArchiveWriter for DirectoryWriter {
    fn write_entry(&mut self, path: &str, contents: &[u8]) -> Result<()> {
        let relative = Path::new(path);
        if relative.is_absolute()
            || relative
                .components()
                .any(|c| matches!(c, std::path::Component::ParentDir))
        {
            bail!("refusing to write '{}' outside of {}", path, self.base.display());
        }

        let target = self.base.join(relative);
        if let Some(parent) = target.parent() {
            std::fs::create_dir_all(parent)
                .wrap_err_with(|| format!("failed to create {}", parent.display()))?;
        }
        let mut file = std::fs::File::create(&target)
            .wrap_err_with(|| format!("failed to create {}", target.display()))?;
        file.write_all(contents)
            .wrap_err_with(|| format!("failed to write {}", target.display()))?;
        Ok(())
    }
}
