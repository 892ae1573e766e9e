//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use sorspec_core::{
    application::{ApplicationError, ports::Filesystem},
    error::SorspecResult,
};

/// In-memory filesystem for testing.
///
/// Clones share state, so a test can hand one clone to a service and inspect
/// the other afterwards.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<Inner>>,
}

#[derive(Debug, Default)]
struct Inner {
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
    failing_writes: BTreeSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every `write_file` to `path` fail.
    pub fn fail_writes_to(self, path: impl Into<PathBuf>) -> Self {
        if let Ok(mut inner) = self.inner.write() {
            inner.failing_writes.insert(path.into());
        }
        self
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        self.inner.read().ok()?.files.get(path).cloned()
    }

    /// All files, sorted by path.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// All directories, sorted by path.
    pub fn list_directories(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.directories.iter().cloned().collect())
            .unwrap_or_default()
    }

    fn read(&self) -> SorspecResult<RwLockReadGuard<'_, Inner>> {
        Ok(self.inner.read().map_err(|_| ApplicationError::LockPoisoned)?)
    }

    fn write(&self) -> SorspecResult<RwLockWriteGuard<'_, Inner>> {
        Ok(self.inner.write().map_err(|_| ApplicationError::LockPoisoned)?)
    }
}

impl Inner {
    fn check_parent(&self, path: &Path) -> SorspecResult<()> {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() && !self.directories.contains(parent) => {
                Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into())
            }
            _ => Ok(()),
        }
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> SorspecResult<()> {
        let mut inner = self.write()?;

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> SorspecResult<()> {
        let mut inner = self.write()?;
        inner.check_parent(path)?;

        if inner.failing_writes.contains(path) {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "simulated write failure".into(),
            }
            .into());
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn create_file_if_missing(&self, path: &Path) -> SorspecResult<bool> {
        let mut inner = self.write()?;
        inner.check_parent(path)?;

        if inner.files.contains_key(path) {
            return Ok(false);
        }
        inner.files.insert(path.to_path_buf(), String::new());
        Ok(true)
    }

    fn exists(&self, path: &Path) -> bool {
        self.read()
            .map(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_requires_parent_directory() {
        let fs = MemoryFilesystem::new();
        assert!(fs.write_file(Path::new("app/sorspec.yaml"), "x").is_err());

        fs.create_dir_all(Path::new("app")).unwrap();
        fs.write_file(Path::new("app/sorspec.yaml"), "x").unwrap();
        assert_eq!(fs.read_file(Path::new("app/sorspec.yaml")).as_deref(), Some("x"));
    }

    #[test]
    fn create_if_missing_does_not_truncate() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("app")).unwrap();
        fs.write_file(Path::new("app/README.md"), "# app").unwrap();

        assert!(!fs.create_file_if_missing(Path::new("app/README.md")).unwrap());
        assert!(fs.create_file_if_missing(Path::new("app/.gitignore")).unwrap());
        assert_eq!(fs.read_file(Path::new("app/README.md")).as_deref(), Some("# app"));
    }

    #[test]
    fn clones_share_state() {
        let fs = MemoryFilesystem::new();
        let other = fs.clone();
        other.create_dir_all(Path::new("a/b")).unwrap();
        assert!(fs.exists(Path::new("a")));
        assert_eq!(fs.list_directories(), vec![PathBuf::from("a"), PathBuf::from("a/b")]);
    }
}
