//! Code generation outputs and file management.
//!
//! - [`ImportCollector`] - Import tracking and deduplication
//! - [`FileRegistry`] - Ordered registration of generated files
//! - [`ArchiveWriter`] - Sequential sink for generated entries
//! - [`TarGzArchive`] - Deterministic gzip-compressed tar archive
//! - [`DirectoryWriter`] - Writes entries below a directory on disk

mod archive;
mod imports;
mod registry;

pub use archive::{ArchiveWriter, DirectoryWriter, TarGzArchive};
pub use imports::ImportCollector;
pub use registry::{FileCategory, FileEntry, FileRegistry, PreviewEntry, WriteStats};
