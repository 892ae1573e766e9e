use std::path::{Path, PathBuf};

use crate::domain::value_objects::{Layer, OutputMode, RequirementId};

/// A layer bound to the core the caller chose for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerSelection {
    pub layer: Layer,
    pub core: String,
}

impl LayerSelection {
    pub fn new(layer: Layer, core: impl Into<String>) -> Self {
        Self {
            layer,
            core: core.into(),
        }
    }
}

/// Raw, unvalidated `init` input as collected by a driving adapter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InitOptions {
    pub path: PathBuf,
    pub mode: String,
    pub layers: Vec<LayerSelection>,
    pub requirements: Vec<String>,
}

impl InitOptions {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            mode: OutputMode::default().as_str().to_string(),
            ..Self::default()
        }
    }

    pub fn mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = mode.into();
        self
    }

    pub fn layer(mut self, layer: Layer, core: impl Into<String>) -> Self {
        self.layers.push(LayerSelection::new(layer, core));
        self
    }

    pub fn requirement(mut self, id: impl Into<String>) -> Self {
        self.requirements.push(id.into());
        self
    }
}

/// A validated `init` request.
///
/// Only constructible through validation in the application layer, so
/// holding one means mode, layers and requirement ids were all accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitRequest {
    pub(crate) base_dir: PathBuf,
    pub(crate) app_name: String,
    pub(crate) mode: OutputMode,
    pub(crate) layers: Vec<LayerSelection>,
    pub(crate) requirements: Vec<RequirementId>,
}

impl InitRequest {
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Selected layers, in catalog order.
    pub fn layers(&self) -> &[LayerSelection] {
        &self.layers
    }

    pub fn layer(&self, layer: Layer) -> Option<&LayerSelection> {
        self.layers.iter().find(|s| s.layer == layer)
    }

    /// Requirement ids, in caller order.
    pub fn requirements(&self) -> &[RequirementId] {
        &self.requirements
    }
}
