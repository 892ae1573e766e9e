use std::path::{Path, PathBuf};

/// Base scope name of the generated configuration. Becomes `sorspec.yaml`
/// or a `sorspec/` directory depending on the output mode.
pub const CONFIG_SCOPE: &str = "sorspec";

/// Placeholder files created next to the configuration in every mode.
pub const PLACEHOLDER_FILES: &[&str] = &[".gitignore", "README.md"];

/// Where one `init` run puts things on disk.
///
/// Pure data: produced by an output strategy, materialized by the
/// application layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    pub(crate) root: PathBuf,
    pub(crate) config_file: PathBuf,
    pub(crate) directories: Vec<PathBuf>,
    pub(crate) placeholders: Vec<PathBuf>,
}

impl OutputLayout {
    /// Layout rooted at `root` writing the configuration to `config_file`
    /// (relative to `root`). Placeholders are always included.
    pub fn new(root: impl Into<PathBuf>, config_file: impl AsRef<Path>) -> Self {
        let root = root.into();
        Self {
            config_file: root.join(config_file),
            directories: Vec::new(),
            placeholders: PLACEHOLDER_FILES.iter().map(|f| root.join(f)).collect(),
            root,
        }
    }

    /// Add a directory (relative to root) to create before writing.
    pub fn with_directory(mut self, path: impl AsRef<Path>) -> Self {
        self.directories.push(self.root.join(path));
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config_file(&self) -> &Path {
        &self.config_file
    }

    pub fn directories(&self) -> &[PathBuf] {
        &self.directories
    }

    pub fn placeholders(&self) -> &[PathBuf] {
        &self.placeholders
    }
}
