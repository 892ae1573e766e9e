//! Requirement providers backed by the resource directory, and the
//! built-in requirement catalog.
//!
//! # Built-in requirements
//!
//! | id               | default configuration source                              |
//! |------------------|-----------------------------------------------------------|
//! | `authentication` | `<resource-dir>/requirement/authentication/config/default.yaml` |
//! | `authorization`  | compiled in: `method: JWT`                                |
//!
//! Any other `<resource-dir>/requirement/<id>/` holding a
//! `config/default.yaml` is catalogued as well. An optional
//! `requirement.toml` next to it supplies the description:
//!
//! ```toml
//! [requirement]
//! description = "Rate limiting for public endpoints"
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, info, instrument, warn};
use walkdir::WalkDir;

use sorspec_core::domain::{
    DefaultConfigProvider, ProviderError, Requirement, RequirementCatalog, StaticConfig,
};

use crate::resource::ResourceDir;

/// Optional per-requirement manifest file name.
pub const MANIFEST_FILE: &str = "requirement.toml";

const AUTHORIZATION_DEFAULT: &str = "method: JWT";

/// Provider that reads the default configuration from a file on each call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceFileConfig {
    path: PathBuf,
}

impl ResourceFileConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Provider for `<dir>/requirement/<id>/config/default.yaml`.
    pub fn for_requirement(dir: &ResourceDir, id: &str) -> Self {
        Self::new(dir.default_config_path(id))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DefaultConfigProvider for ResourceFileConfig {
    fn default_config(&self) -> Result<String, ProviderError> {
        let bytes = fs::read(&self.path).map_err(|e| ProviderError::Unavailable {
            reason: format!("open {}: {}", self.path.display(), describe(&e)),
        })?;

        String::from_utf8(bytes).map_err(|e| ProviderError::Malformed {
            reason: format!("{} is not valid UTF-8: {e}", self.path.display()),
        })
    }

    fn source(&self) -> String {
        self.path.display().to_string()
    }
}

fn describe(e: &io::Error) -> String {
    match e.kind() {
        io::ErrorKind::NotFound => "no such file or directory".into(),
        io::ErrorKind::PermissionDenied => "permission denied".into(),
        _ => e.to_string(),
    }
}

#[derive(Debug, Deserialize)]
struct RequirementManifest {
    requirement: ManifestSection,
}

#[derive(Debug, Deserialize)]
struct ManifestSection {
    description: Option<String>,
}

/// Build the requirement catalog: built-ins plus anything found on disk.
///
/// Built-in entries always win over on-disk entries with the same id.
#[instrument(skip_all, fields(dir = %resources.path().display()))]
pub fn builtin_requirements(resources: &ResourceDir) -> RequirementCatalog {
    let mut catalog = RequirementCatalog::new()
        .with(Requirement::new(
            "authentication",
            "User identity and login defaults",
            ResourceFileConfig::for_requirement(resources, "authentication"),
        ))
        .with(Requirement::new(
            "authorization",
            "Access control for authenticated users",
            StaticConfig::new(AUTHORIZATION_DEFAULT),
        ));

    for requirement in discover_requirements(resources) {
        if catalog.contains(requirement.id().as_str()) {
            debug!(id = %requirement.id(), "on-disk requirement shadowed by built-in");
            continue;
        }
        catalog = catalog.with(requirement);
    }

    info!(count = catalog.len(), "requirement catalog ready");
    catalog
}

/// Requirements found under `<dir>/requirement/`.
///
/// Directories without `config/default.yaml` are ignored. A malformed
/// `requirement.toml` skips that requirement with a `WARN`.
pub fn discover_requirements(resources: &ResourceDir) -> Vec<Requirement> {
    let root = resources.requirement_root();
    if !root.is_dir() {
        debug!(path = %root.display(), "no requirement directory");
        return Vec::new();
    }

    let mut found = Vec::new();
    let entries = WalkDir::new(&root)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!(error = %e, "skipping unreadable requirement entry");
                None
            }
        })
        .filter(|entry| entry.file_type().is_dir());

    for entry in entries {
        let Some(id) = entry.file_name().to_str().map(str::to_owned) else {
            warn!(path = %entry.path().display(), "skipping non UTF-8 requirement name");
            continue;
        };

        let provider = ResourceFileConfig::for_requirement(resources, &id);
        if !provider.path().is_file() {
            debug!(id = %id, "no default config, skipping");
            continue;
        }

        match read_description(entry.path()) {
            Ok(description) => {
                debug!(id = %id, "discovered requirement");
                found.push(Requirement::new(id, description, provider));
            }
            Err(reason) => {
                warn!(id = %id, error = %reason, "skipping requirement due to manifest error");
            }
        }
    }

    found
}

fn read_description(dir: &Path) -> Result<String, String> {
    let manifest_path = dir.join(MANIFEST_FILE);
    if !manifest_path.exists() {
        return Ok(String::new());
    }

    let raw = fs::read_to_string(&manifest_path)
        .map_err(|e| format!("failed to read '{}': {e}", manifest_path.display()))?;
    let manifest: RequirementManifest = toml::from_str(&raw)
        .map_err(|e| format!("failed to parse '{}': {e}", manifest_path.display()))?;

    Ok(manifest.requirement.description.unwrap_or_default())
}
