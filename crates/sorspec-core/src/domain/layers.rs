//! Layer catalog.
//!
//! Each layer is described exactly once by a [`LayerDef`] in
//! [`LAYER_REGISTRY`]. Registry order is the emission order of layer
//! sections in the config document.
//!
//! # Adding a New Layer
//!
//! 1. Add a variant to `Layer` in `value_objects.rs`
//! 2. Add one [`LayerDef`] entry to [`LAYER_REGISTRY`]

use serde::Serialize;

use crate::domain::value_objects::Layer;

/// Version reported for every resolvable core until per-core versioning exists.
pub const LATEST_CORE_VERSION: &str = "1.0.0";

/// Static description of a layer.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct LayerDef {
    pub layer: Layer,

    /// Long CLI flag selecting the layer's core (`--server`).
    pub flag: &'static str,

    /// Short CLI flag (`-s`).
    pub short: char,

    pub description: &'static str,
}

/// Single source of truth for layers, in emission order.
pub static LAYER_REGISTRY: &[LayerDef] = &[
    LayerDef {
        layer: Layer::Database,
        flag: "database",
        short: 'd',
        description: "Persistent storage engine",
    },
    LayerDef {
        layer: Layer::Server,
        flag: "server",
        short: 's',
        description: "Backend service / API runtime",
    },
    LayerDef {
        layer: Layer::Browser,
        flag: "browser",
        short: 'b',
        description: "Web client",
    },
    LayerDef {
        layer: Layer::Ios,
        flag: "ios",
        short: 'i',
        description: "iOS client",
    },
    LayerDef {
        layer: Layer::Android,
        flag: "android",
        short: 'a',
        description: "Android client",
    },
];

/// A core resolved for a layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoreDescriptor {
    pub layer: Layer,
    pub name: String,
    pub version: &'static str,
}

/// Ordered, immutable view over a layer registry.
///
/// Constructed once and handed to the services that need it; tests can
/// build one over a reduced registry.
#[derive(Debug, Clone, Copy)]
pub struct LayerCatalog {
    defs: &'static [LayerDef],
}

impl LayerCatalog {
    pub const fn new(defs: &'static [LayerDef]) -> Self {
        Self { defs }
    }

    /// Catalog over [`LAYER_REGISTRY`].
    pub const fn builtin() -> Self {
        Self::new(LAYER_REGISTRY)
    }

    /// Layers in emission order.
    pub fn layers(&self) -> impl Iterator<Item = Layer> + '_ {
        self.defs.iter().map(|d| d.layer)
    }

    pub fn definitions(&self) -> &'static [LayerDef] {
        self.defs
    }

    pub fn find(&self, layer: Layer) -> Option<&'static LayerDef> {
        self.defs.iter().find(|d| d.layer == layer)
    }

    /// Resolve `core` for `layer`.
    ///
    /// Any non-blank core of a catalogued layer resolves to the latest
    /// version. Blank cores and layers missing from the catalog do not.
    pub fn resolve_core(&self, layer: Layer, core: &str) -> Option<CoreDescriptor> {
        let core = core.trim();
        if core.is_empty() {
            return None;
        }
        self.find(layer).map(|def| CoreDescriptor {
            layer: def.layer,
            name: core.to_string(),
            version: LATEST_CORE_VERSION,
        })
    }
}

impl Default for LayerCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Panics if the registry is inconsistent. Called from tests.
pub fn assert_registry_integrity() {
    let mut seen = Vec::new();
    for def in LAYER_REGISTRY {
        assert!(
            !seen.contains(&def.layer),
            "layer {} registered twice",
            def.layer
        );
        assert_eq!(def.flag, def.layer.as_str(), "flag must match layer name");
        seen.push(def.layer);
    }
    assert_eq!(seen, Layer::ALL, "registry order must match Layer::ALL");
}
