use crate::domain::{
    error::DomainError,
    value_objects::{Layer, RequirementId},
};

/// Key of the root section.
pub const APP_KEY: &str = "app";

/// One entry of the configuration tree.
///
/// Depth in the tree decides indentation when serialized; nodes carry no
/// depth of their own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigNode {
    /// `key: value`
    Scalar { key: String, value: String },

    /// `key:` followed by nested children.
    Section { key: String, children: Vec<ConfigNode> },

    /// Opaque multi-line text, indented line by line at its depth.
    Block(String),
}

impl ConfigNode {
    pub fn scalar(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Scalar {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn section(key: impl Into<String>) -> Self {
        Self::Section {
            key: key.into(),
            children: Vec::new(),
        }
    }

    pub fn block(text: impl Into<String>) -> Self {
        Self::Block(text.into())
    }

    /// Builder-style child append. No-op on scalars and blocks.
    pub fn with_child(mut self, child: ConfigNode) -> Self {
        if let Self::Section { children, .. } = &mut self {
            children.push(child);
        }
        self
    }

    pub fn key(&self) -> Option<&str> {
        match self {
            Self::Scalar { key, .. } | Self::Section { key, .. } => Some(key),
            Self::Block(_) => None,
        }
    }

    pub fn children(&self) -> &[ConfigNode] {
        match self {
            Self::Section { children, .. } => children,
            _ => &[],
        }
    }

    pub fn is_section(&self) -> bool {
        matches!(self, Self::Section { .. })
    }
}

/// In-memory model of the generated configuration file.
///
/// Shape: a root `app` section whose first child is the scalar `name`,
/// followed by one section per selected layer; then one top-level section
/// per requirement. The document is append-only and rejects appends that
/// would break the (app, layers…, requirements…) order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigDocument {
    app: ConfigNode,
    requirements: Vec<ConfigNode>,
    last_layer: Option<Layer>,
}

impl ConfigDocument {
    pub fn new(app_name: impl Into<String>) -> Self {
        Self {
            app: ConfigNode::section(APP_KEY).with_child(ConfigNode::scalar("name", app_name)),
            requirements: Vec::new(),
            last_layer: None,
        }
    }

    /// Append `<layer>: { core: <core> }` under `app`.
    ///
    /// Layers must arrive in catalog order, each at most once, and before
    /// any requirement.
    pub fn push_layer(&mut self, layer: Layer, core: impl Into<String>) -> Result<(), DomainError> {
        if !self.requirements.is_empty() {
            return Err(DomainError::DocumentOrder(format!(
                "layer '{layer}' appended after a requirement"
            )));
        }
        if let Some(last) = self.last_layer {
            if layer <= last {
                return Err(DomainError::DocumentOrder(format!(
                    "layer '{layer}' appended after '{last}'"
                )));
            }
        }

        if let ConfigNode::Section { children, .. } = &mut self.app {
            children.push(
                ConfigNode::section(layer.as_str()).with_child(ConfigNode::scalar("core", core)),
            );
        }
        self.last_layer = Some(layer);
        Ok(())
    }

    /// Append a top-level `<id>:` section whose body is `text`, nested one
    /// level deeper than the key.
    ///
    /// Trailing line breaks of `text` are dropped.
    pub fn push_requirement(&mut self, id: &RequirementId, text: &str) -> Result<(), DomainError> {
        if self.requirement(id.as_str()).is_some() {
            return Err(DomainError::DocumentOrder(format!(
                "requirement '{id}' appended twice"
            )));
        }
        let body = text.trim_end_matches(['\n', '\r']);
        let mut section = ConfigNode::section(id.as_str());
        if !body.is_empty() {
            section = section.with_child(ConfigNode::block(body));
        }
        self.requirements.push(section);
        Ok(())
    }

    pub fn app(&self) -> &ConfigNode {
        &self.app
    }

    pub fn app_name(&self) -> &str {
        match self.app.children().first() {
            Some(ConfigNode::Scalar { value, .. }) => value,
            _ => "",
        }
    }

    /// Layer sections, in document order.
    pub fn layers(&self) -> impl Iterator<Item = &ConfigNode> {
        self.app.children().iter().filter(|n| n.is_section())
    }

    pub fn requirements(&self) -> &[ConfigNode] {
        &self.requirements
    }

    pub fn requirement(&self, id: &str) -> Option<&ConfigNode> {
        self.requirements.iter().find(|n| n.key() == Some(id))
    }

    /// Top-level nodes in document order.
    pub fn roots(&self) -> impl Iterator<Item = &ConfigNode> {
        std::iter::once(&self.app).chain(self.requirements.iter())
    }
}
