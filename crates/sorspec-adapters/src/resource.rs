//! Resource directory discovery.
//!
//! Requirement defaults that do not ship inside the binary live under a
//! resource directory laid out as `<dir>/requirement/<id>/config/default.yaml`.
//!
//! # Resolution order
//!
//! The first candidate that exists as a directory wins:
//!
//! 1. **`$SORSPEC_RESOURCE_DIR`**, environment override.
//! 2. **`resources.dir`** from the sorspec config file.
//! 3. **`./resource`**, relative to the current working directory.
//! 4. **`<executable-dir>/resource`**, sibling to the installed binary.
//!
//! When none exists, `./resource` is used anyway so that error messages name
//! the path a user is most likely to create.

use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

/// Environment variable overriding the resource directory.
pub const RESOURCE_DIR_ENV: &str = "SORSPEC_RESOURCE_DIR";

/// Directory name looked up next to the working directory and the executable.
pub const DEFAULT_RESOURCE_DIR: &str = "resource";

/// Where a [`ResourceDir`] was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceOrigin {
    Environment,
    Configured,
    WorkingDir,
    Executable,
    Fallback,
}

/// A resolved resource directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceDir {
    path: PathBuf,
    origin: ResourceOrigin,
}

impl ResourceDir {
    /// Use `path` as-is, without probing.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            origin: ResourceOrigin::Configured,
        }
    }

    /// Check the candidates described in the module docs.
    #[instrument(skip_all)]
    pub fn discover(configured: Option<&Path>) -> Self {
        let env = std::env::var_os(RESOURCE_DIR_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        Self::select(candidate_paths(env, configured))
    }

    /// First existing candidate, else the `./resource` fallback.
    fn select(candidates: Vec<(PathBuf, ResourceOrigin)>) -> Self {
        for (path, origin) in candidates {
            if path.is_dir() {
                debug!(path = %path.display(), ?origin, "resource directory selected");
                return Self { path, origin };
            }
            debug!(path = %path.display(), "resource candidate missing, skipping");
        }

        debug!("no resource directory found, falling back to ./resource");
        Self {
            path: PathBuf::from(DEFAULT_RESOURCE_DIR),
            origin: ResourceOrigin::Fallback,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn origin(&self) -> ResourceOrigin {
        self.origin
    }

    pub fn exists(&self) -> bool {
        self.path.is_dir()
    }

    /// `<dir>/requirement`
    pub fn requirement_root(&self) -> PathBuf {
        self.path.join("requirement")
    }

    /// `<dir>/requirement/<id>/config/default.yaml`
    pub fn default_config_path(&self, id: &str) -> PathBuf {
        self.requirement_root()
            .join(id)
            .join("config")
            .join("default.yaml")
    }
}

/// Ordered candidate list. Missing env or exe paths are omitted.
fn candidate_paths(
    env: Option<PathBuf>,
    configured: Option<&Path>,
) -> Vec<(PathBuf, ResourceOrigin)> {
    let mut paths = Vec::with_capacity(4);

    if let Some(p) = env {
        paths.push((p, ResourceOrigin::Environment));
    }

    if let Some(p) = configured {
        paths.push((p.to_path_buf(), ResourceOrigin::Configured));
    }

    paths.push((PathBuf::from(DEFAULT_RESOURCE_DIR), ResourceOrigin::WorkingDir));

    if let Some(p) = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(DEFAULT_RESOURCE_DIR)))
    {
        paths.push((p, ResourceOrigin::Executable));
    }

    paths
}
