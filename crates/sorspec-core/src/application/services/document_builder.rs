//! Document Builder - assembles a [`ConfigDocument`] from selections.
//!
//! Order is fixed: app metadata, then layers in catalog order, then
//! requirements in caller order. Every requirement is resolved exactly once;
//! the first failure aborts the build and no document is returned.

use tracing::{debug, instrument};

use crate::{
    application::ApplicationError,
    domain::{
        ConfigDocument, DomainError, InitRequest, LayerCatalog, LayerSelection, ProviderError,
        RequirementCatalog, RequirementId,
    },
    error::SorspecResult,
};

/// Builds config documents against a pair of catalogs.
pub struct DocumentBuilder<'a> {
    layers: &'a LayerCatalog,
    requirements: &'a RequirementCatalog,
}

impl<'a> DocumentBuilder<'a> {
    pub fn new(layers: &'a LayerCatalog, requirements: &'a RequirementCatalog) -> Self {
        Self {
            layers,
            requirements,
        }
    }

    /// Build the document for a validated request.
    pub fn build_request(&self, request: &InitRequest) -> SorspecResult<ConfigDocument> {
        self.build(request.app_name(), request.layers(), request.requirements())
    }

    /// Build a document from an app name, layer selections (any order) and
    /// requirement ids (emitted in the given order).
    #[instrument(skip_all, fields(app = %app_name, layers = layers.len(), requirements = requirements.len()))]
    pub fn build(
        &self,
        app_name: &str,
        layers: &[LayerSelection],
        requirements: &[RequirementId],
    ) -> SorspecResult<ConfigDocument> {
        let mut document = ConfigDocument::new(app_name);

        for layer in self.layers.layers() {
            let Some(selection) = layers.iter().rev().find(|s| s.layer == layer) else {
                continue;
            };
            let core = self
                .layers
                .resolve_core(layer, &selection.core)
                .ok_or_else(|| DomainError::UnknownCore {
                    layer: layer.to_string(),
                    core: selection.core.clone(),
                })?;
            debug!(layer = %layer, core = %core.name, version = core.version, "layer added");
            document.push_layer(layer, core.name)?;
        }

        for id in requirements {
            let text = self.resolve(id)?;
            document.push_requirement(id, &text)?;
            debug!(requirement = %id, "requirement added");
        }

        Ok(document)
    }

    /// Fetch the default configuration text of one requirement.
    fn resolve(&self, id: &RequirementId) -> SorspecResult<String> {
        let requirement =
            self.requirements
                .lookup(id.as_str())
                .ok_or_else(|| DomainError::UnknownRequirement {
                    id: id.to_string(),
                    available: self.requirements.ids().map(|i| i.to_string()).collect(),
                })?;

        let text = requirement.default_config().map_err(|e| match e {
            ProviderError::Unavailable { reason } => ApplicationError::ConfigUnavailable {
                id: id.to_string(),
                reason,
            },
            ProviderError::Malformed { reason } => ApplicationError::Malformed {
                id: id.to_string(),
                reason,
            },
        })?;

        if text.trim().is_empty() {
            return Err(ApplicationError::Malformed {
                id: id.to_string(),
                reason: "default configuration is empty".into(),
            }
            .into());
        }

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{DefaultConfigProvider, Layer, Requirement, Serializer, StaticConfig},
        error::SorspecError,
    };

    #[derive(Debug)]
    struct Unreadable;

    impl DefaultConfigProvider for Unreadable {
        fn default_config(&self) -> Result<String, ProviderError> {
            Err(ProviderError::Unavailable {
                reason: "No such file or directory".into(),
            })
        }

        fn source(&self) -> String {
            "missing.yaml".into()
        }
    }

    fn catalog() -> RequirementCatalog {
        RequirementCatalog::new()
            .with(Requirement::new(
                "authorization",
                "",
                StaticConfig::new("method: JWT"),
            ))
            .with(Requirement::new("authentication", "", Unreadable))
            .with(Requirement::new("empty", "", StaticConfig::new("\n")))
    }

    #[test]
    fn builds_layers_in_catalog_order() {
        let layers = LayerCatalog::builtin();
        let requirements = catalog();
        let builder = DocumentBuilder::new(&layers, &requirements);

        let doc = builder
            .build(
                "app",
                &[
                    LayerSelection::new(Layer::Android, "kotlin"),
                    LayerSelection::new(Layer::Database, "postgres"),
                ],
                &[],
            )
            .unwrap();

        let keys: Vec<_> = doc.layers().filter_map(|n| n.key()).collect();
        assert_eq!(keys, vec!["database", "android"]);
    }

    #[test]
    fn requirement_text_nests_under_id() {
        let layers = LayerCatalog::builtin();
        let requirements = catalog();
        let builder = DocumentBuilder::new(&layers, &requirements);

        let doc = builder
            .build(
                "base",
                &[LayerSelection::new(Layer::Server, "go")],
                &["authorization".into()],
            )
            .unwrap();

        assert_eq!(
            Serializer::render_document(&doc),
            "app:\n  name: base\n  server:\n    core: go\n\nauthorization:\n  method: JWT\n"
        );
    }

    #[test]
    fn unavailable_config_names_requirement() {
        let layers = LayerCatalog::builtin();
        let requirements = catalog();
        let builder = DocumentBuilder::new(&layers, &requirements);

        let err = builder
            .build("x", &[], &["authorization".into(), "authentication".into()])
            .unwrap_err();

        match err {
            SorspecError::Application(app) => {
                assert!(matches!(app, ApplicationError::ConfigUnavailable { .. }));
                assert_eq!(app.requirement(), Some("authentication"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn empty_config_is_malformed() {
        let layers = LayerCatalog::builtin();
        let requirements = catalog();
        let builder = DocumentBuilder::new(&layers, &requirements);

        let err = builder.build("x", &[], &["empty".into()]).unwrap_err();
        assert!(matches!(
            err,
            SorspecError::Application(ApplicationError::Malformed { .. })
        ));
    }

    #[test]
    fn uncatalogued_requirement_is_rejected() {
        let layers = LayerCatalog::builtin();
        let requirements = catalog();
        let builder = DocumentBuilder::new(&layers, &requirements);

        let err = builder.build("x", &[], &["billing".into()]).unwrap_err();
        assert!(matches!(
            err,
            SorspecError::Domain(DomainError::UnknownRequirement { .. })
        ));
    }
}
