//! Local filesystem adapter using std::fs.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use sorspec_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{SorspecError, SorspecResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> SorspecResult<()> {
        fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    /// Write to a sibling temp file, then rename it over `path`.
    fn write_file(&self, path: &Path, content: &str) -> SorspecResult<()> {
        let tmp = temp_sibling(path);

        let result = fs::File::create(&tmp)
            .and_then(|mut file| {
                file.write_all(content.as_bytes())?;
                file.sync_all()
            })
            .and_then(|()| fs::rename(&tmp, path));

        if let Err(e) = result {
            match fs::remove_file(&tmp) {
                Err(cleanup) if cleanup.kind() != io::ErrorKind::NotFound => {
                    warn!(path = %tmp.display(), error = %cleanup, "temp file left behind");
                }
                _ => {}
            }
            return Err(map_io_error(path, e, "write file"));
        }

        debug!(path = %path.display(), bytes = content.len(), "file written");
        Ok(())
    }

    fn create_file_if_missing(&self, path: &Path) -> SorspecResult<bool> {
        match OpenOptions::new().write(true).create_new(true).open(path) {
            Ok(_) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => Ok(false),
            Err(e) => Err(map_io_error(path, e, "create file")),
        }
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

fn temp_sibling(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{name}.tmp"))
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> SorspecError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {operation}: {e}"),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn write_file_replaces_content_and_leaves_no_temp() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("sorspec.yaml");
        let fs_adapter = LocalFilesystem::new();

        fs_adapter.write_file(&path, "old: 1\n").unwrap();
        fs_adapter.write_file(&path, "app:\n  name: x\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "app:\n  name: x\n");
        assert!(!temp_sibling(&path).exists());
    }

    #[test]
    fn write_file_into_missing_directory_fails() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing").join("sorspec.yaml");

        let err = LocalFilesystem.write_file(&path, "a: b\n").unwrap_err();
        assert!(matches!(
            err,
            SorspecError::Application(ApplicationError::FilesystemError { .. })
        ));
    }

    #[test]
    fn create_file_if_missing_keeps_existing_content() {
        let temp = TempDir::new().unwrap();
        let readme = temp.path().join("README.md");
        fs::write(&readme, "# hello\n").unwrap();

        assert!(!LocalFilesystem.create_file_if_missing(&readme).unwrap());
        assert_eq!(fs::read_to_string(&readme).unwrap(), "# hello\n");

        let gitignore = temp.path().join(".gitignore");
        assert!(LocalFilesystem.create_file_if_missing(&gitignore).unwrap());
        assert_eq!(fs::read_to_string(&gitignore).unwrap(), "");
    }
}
