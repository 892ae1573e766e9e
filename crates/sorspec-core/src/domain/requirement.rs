//! Requirement catalog.
//!
//! A requirement contributes a block of default configuration to the
//! generated document. Where that text comes from is hidden behind
//! [`DefaultConfigProvider`]; the catalog maps ids to providers and is
//! frozen once built.

use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;

use crate::domain::value_objects::RequirementId;

/// Why a provider could not produce default configuration text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// The backing resource could not be read.
    #[error("{reason}")]
    Unavailable { reason: String },

    /// The resource was read but is not YAML-like text.
    #[error("{reason}")]
    Malformed { reason: String },
}

/// Capability: produce the default configuration text of one requirement.
///
/// The text is opaque to sorspec. It is only positioned and indented.
pub trait DefaultConfigProvider: Send + Sync + fmt::Debug {
    fn default_config(&self) -> Result<String, ProviderError>;

    /// Human-readable origin of the text, shown by `sorspec list`.
    fn source(&self) -> String;
}

/// Provider backed by text compiled into the binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticConfig {
    text: &'static str,
}

impl StaticConfig {
    pub const fn new(text: &'static str) -> Self {
        Self { text }
    }
}

impl DefaultConfigProvider for StaticConfig {
    fn default_config(&self) -> Result<String, ProviderError> {
        Ok(self.text.to_string())
    }

    fn source(&self) -> String {
        "built-in".into()
    }
}

/// A catalogued requirement.
#[derive(Debug)]
pub struct Requirement {
    id: RequirementId,
    description: String,
    provider: Box<dyn DefaultConfigProvider>,
}

impl Requirement {
    pub fn new(
        id: impl Into<RequirementId>,
        description: impl Into<String>,
        provider: impl DefaultConfigProvider + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            provider: Box::new(provider),
        }
    }

    pub fn id(&self) -> &RequirementId {
        &self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn default_config(&self) -> Result<String, ProviderError> {
        self.provider.default_config()
    }

    pub fn source(&self) -> String {
        self.provider.source()
    }
}

/// Immutable id → requirement mapping, iterated in id order.
#[derive(Debug, Default)]
pub struct RequirementCatalog {
    entries: BTreeMap<RequirementId, Requirement>,
}

impl RequirementCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a requirement while constructing the catalog. A later entry with
    /// the same id replaces the earlier one.
    pub fn with(mut self, requirement: Requirement) -> Self {
        self.entries.insert(requirement.id.clone(), requirement);
        self
    }

    pub fn lookup(&self, id: &str) -> Option<&Requirement> {
        self.entries.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &RequirementId> {
        self.entries.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Requirement> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<Requirement> for RequirementCatalog {
    fn from_iter<I: IntoIterator<Item = Requirement>>(iter: I) -> Self {
        iter.into_iter().fold(Self::new(), Self::with)
    }
}
