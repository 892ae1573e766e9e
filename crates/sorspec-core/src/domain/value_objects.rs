//! Domain value objects: Layer, OutputMode, RequirementId.
//!
//! # Design
//!
//! These are pure value types with equality-by-value and no identity.
//! Layer metadata (descriptions, CLI flags, core resolution) lives in
//! `layers.rs`. This file's only job is to define the types, their string
//! representations, and the `OutputMode` parser.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── Layer ────────────────────────────────────────────────────────────────────

/// An architectural slot of the generated project.
///
/// Declaration order is the emission order in the config document, so the
/// derived `Ord` matches catalog order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Layer {
    Database,
    Server,
    Browser,
    Ios,
    Android,
}

impl Layer {
    /// Every layer, in emission order.
    pub const ALL: [Layer; 5] = [
        Self::Database,
        Self::Server,
        Self::Browser,
        Self::Ios,
        Self::Android,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Database => "database",
            Self::Server => "server",
            Self::Browser => "browser",
            Self::Ios => "ios",
            Self::Android => "android",
        }
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── OutputMode ───────────────────────────────────────────────────────────────

/// Physical layout of the generated configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// `<base>/sorspec.yaml`
    #[default]
    File,
    /// `<base>/sorspec/app.yaml` plus a reserved `requirement/` directory.
    Dir,
}

impl OutputMode {
    /// Valid modes, in the order they are reported to users.
    pub const ALL: [OutputMode; 2] = [Self::File, Self::Dir];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Dir => "dir",
        }
    }

    /// Comma-separated list of valid modes: `file, dir`.
    pub fn available() -> String {
        Self::ALL
            .iter()
            .map(|m| m.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| DomainError::InvalidMode {
                mode: s.to_string(),
                available: Self::available(),
            })
    }
}

// ── RequirementId ────────────────────────────────────────────────────────────

/// Identifier of a cross-cutting requirement (`authentication`, ...).
///
/// Used verbatim as the top-level key of the requirement's section.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequirementId(String);

impl RequirementId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RequirementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RequirementId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for RequirementId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::borrow::Borrow<str> for RequirementId {
    fn borrow(&self) -> &str {
        &self.0
    }
}
