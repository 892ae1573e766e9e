//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `sorspec-adapters` crate provides implementations.

use crate::error::SorspecResult;
use std::path::Path;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `sorspec_adapters::filesystem::LocalFilesystem` (production)
/// - `sorspec_adapters::filesystem::MemoryFilesystem` (testing)
///
/// Calls are made from a single thread in a fixed order; implementations
/// need no internal ordering guarantees beyond that.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> SorspecResult<()>;

    /// Replace the file's content with `content` in one write.
    fn write_file(&self, path: &Path, content: &str) -> SorspecResult<()>;

    /// Create an empty file unless one already exists.
    ///
    /// Returns `true` when the file was created.
    fn create_file_if_missing(&self, path: &Path) -> SorspecResult<bool>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}
