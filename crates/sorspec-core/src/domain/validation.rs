use std::path::Path;

use crate::domain::{
    entities::{InitOptions, InitRequest, LayerSelection},
    error::DomainError,
    layers::LayerCatalog,
    requirement::RequirementCatalog,
    value_objects::{OutputMode, RequirementId},
};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across entities.
pub struct DomainValidator;

impl DomainValidator {
    /// Validate raw `init` input against the catalogs.
    ///
    /// Checks run in order: mode, requirement ids, layer cores, path. The
    /// first failure wins. Nothing here touches the filesystem.
    pub fn validate_init(
        options: InitOptions,
        layers: &LayerCatalog,
        requirements: &RequirementCatalog,
    ) -> Result<InitRequest, DomainError> {
        let mode = Self::validate_mode(&options.mode)?;
        let requirement_ids = Self::validate_requirements(&options.requirements, requirements)?;
        let selections = Self::validate_layers(options.layers, layers)?;
        let app_name = Self::app_name(&options.path)?;

        Ok(InitRequest {
            base_dir: options.path,
            app_name,
            mode,
            layers: selections,
            requirements: requirement_ids,
        })
    }

    pub fn validate_mode(mode: &str) -> Result<OutputMode, DomainError> {
        mode.parse()
    }

    /// Every id must be catalogued. Repeated ids collapse to their first
    /// occurrence so each requirement section is emitted once.
    pub fn validate_requirements(
        ids: &[String],
        catalog: &RequirementCatalog,
    ) -> Result<Vec<RequirementId>, DomainError> {
        let mut resolved: Vec<RequirementId> = Vec::with_capacity(ids.len());
        for id in ids {
            if !catalog.contains(id) {
                return Err(DomainError::UnknownRequirement {
                    id: id.clone(),
                    available: catalog.ids().map(|i| i.to_string()).collect(),
                });
            }
            if !resolved.iter().any(|r| r.as_str() == id) {
                resolved.push(RequirementId::new(id.as_str()));
            }
        }
        Ok(resolved)
    }

    /// Every selected core must resolve. The result is in catalog order; a
    /// layer selected twice keeps its last core.
    pub fn validate_layers(
        selections: Vec<LayerSelection>,
        catalog: &LayerCatalog,
    ) -> Result<Vec<LayerSelection>, DomainError> {
        for selection in &selections {
            if catalog.resolve_core(selection.layer, &selection.core).is_none() {
                return Err(DomainError::UnknownCore {
                    layer: selection.layer.to_string(),
                    core: selection.core.clone(),
                });
            }
        }

        Ok(catalog
            .layers()
            .filter_map(|layer| {
                selections
                    .iter()
                    .rev()
                    .find(|s| s.layer == layer)
                    .map(|s| LayerSelection::new(layer, s.core.trim()))
            })
            .collect())
    }

    /// The application name is the final component of the target path.
    pub fn app_name(path: &Path) -> Result<String, DomainError> {
        let invalid = |reason: &str| DomainError::InvalidProjectPath {
            path: path.display().to_string(),
            reason: reason.into(),
        };

        let name = path
            .file_name()
            .ok_or_else(|| invalid("path has no final component"))?
            .to_str()
            .ok_or_else(|| invalid("directory name is not valid UTF-8"))?;

        if name.trim().is_empty() {
            return Err(invalid("directory name is empty"));
        }
        Ok(name.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        requirement::{Requirement, StaticConfig},
        value_objects::Layer,
    };
    use std::path::PathBuf;

    fn requirements() -> RequirementCatalog {
        RequirementCatalog::new()
            .with(Requirement::new(
                "authentication",
                "",
                StaticConfig::new("method: password"),
            ))
            .with(Requirement::new(
                "authorization",
                "",
                StaticConfig::new("method: JWT"),
            ))
    }

    fn validate(options: InitOptions) -> Result<InitRequest, DomainError> {
        DomainValidator::validate_init(options, &LayerCatalog::builtin(), &requirements())
    }

    #[test]
    fn minimal_request_defaults_to_file_mode() {
        let req = validate(InitOptions::new("projects/myapp")).unwrap();
        assert_eq!(req.mode(), OutputMode::File);
        assert_eq!(req.app_name(), "myapp");
        assert_eq!(req.base_dir(), PathBuf::from("projects/myapp"));
        assert!(req.layers().is_empty());
        assert!(req.requirements().is_empty());
    }

    #[test]
    fn invalid_mode_lists_file_and_dir() {
        let err = validate(InitOptions::new("x").mode("xyz")).unwrap_err();
        assert_eq!(
            err,
            DomainError::InvalidMode {
                mode: "xyz".into(),
                available: "file, dir".into()
            }
        );
        assert_eq!(
            err.to_string(),
            "invalid mode: xyz, available modes are: file, dir"
        );
    }

    #[test]
    fn unknown_requirement_is_named() {
        let err = validate(InitOptions::new("x").requirement("billing")).unwrap_err();
        match err {
            DomainError::UnknownRequirement { id, available } => {
                assert_eq!(id, "billing");
                assert_eq!(available, vec!["authentication", "authorization"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn mode_is_checked_before_requirements() {
        let err = validate(InitOptions::new("x").mode("xyz").requirement("billing")).unwrap_err();
        assert!(matches!(err, DomainError::InvalidMode { .. }));
    }

    #[test]
    fn blank_core_names_layer_and_core() {
        let err = validate(InitOptions::new("x").layer(Layer::Ios, " ")).unwrap_err();
        assert_eq!(
            err,
            DomainError::UnknownCore {
                layer: "ios".into(),
                core: " ".into()
            }
        );
    }

    #[test]
    fn layers_are_reordered_to_catalog_order() {
        let req = validate(
            InitOptions::new("x")
                .layer(Layer::Android, "kotlin")
                .layer(Layer::Database, "postgres")
                .layer(Layer::Server, "go"),
        )
        .unwrap();

        let order: Vec<_> = req.layers().iter().map(|s| s.layer).collect();
        assert_eq!(order, vec![Layer::Database, Layer::Server, Layer::Android]);
    }

    #[test]
    fn repeated_layer_keeps_last_core() {
        let req = validate(
            InitOptions::new("x")
                .layer(Layer::Server, "go")
                .layer(Layer::Server, "rust"),
        )
        .unwrap();
        assert_eq!(req.layers(), &[LayerSelection::new(Layer::Server, "rust")]);
    }

    #[test]
    fn repeated_requirement_collapses() {
        let req = validate(
            InitOptions::new("x")
                .requirement("authorization")
                .requirement("authentication")
                .requirement("authorization"),
        )
        .unwrap();
        let ids: Vec<_> = req.requirements().iter().map(|r| r.as_str()).collect();
        assert_eq!(ids, vec!["authorization", "authentication"]);
    }

    #[test]
    fn path_without_name_is_rejected() {
        assert!(matches!(
            validate(InitOptions::new("/")),
            Err(DomainError::InvalidProjectPath { .. })
        ));
        assert!(matches!(
            validate(InitOptions::new("..")),
            Err(DomainError::InvalidProjectPath { .. })
        ));
    }
}
