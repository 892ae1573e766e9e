// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for sorspec.
//!
//! This module contains pure business logic with ZERO external I/O.
//! Reading requirement resources and writing files are handled via ports
//! (traits) and the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No external crates**: Only std library + thiserror + serde derives
//! - **Append-only document**: `ConfigDocument` enforces section order
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod layers;
pub mod requirement;
pub mod serializer;
pub mod value_objects;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use entities::{
    config_document::{APP_KEY, ConfigDocument, ConfigNode},
    init_request::{InitOptions, InitRequest, LayerSelection},
    output_layout::{CONFIG_SCOPE, OutputLayout, PLACEHOLDER_FILES},
};

pub use error::{DomainError, ErrorCategory};

pub use layers::{CoreDescriptor, LAYER_REGISTRY, LayerCatalog, LayerDef};
pub use requirement::{
    DefaultConfigProvider, ProviderError, Requirement, RequirementCatalog, StaticConfig,
};
pub use serializer::{Fragment, FragmentKind, Serializer};
pub use validation::DomainValidator;
pub use value_objects::{Layer, OutputMode, RequirementId};

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    // ========================================================================
    // Value Object Tests
    // ========================================================================

    #[test]
    fn layer_names_are_lowercase() {
        let names: Vec<_> = Layer::ALL.iter().map(Layer::as_str).collect();
        assert_eq!(names, ["database", "server", "browser", "ios", "android"]);
    }

    #[test]
    fn layer_order_matches_emission_order() {
        let mut shuffled = vec![Layer::Android, Layer::Server, Layer::Database];
        shuffled.sort();
        assert_eq!(shuffled, vec![Layer::Database, Layer::Server, Layer::Android]);
    }

    #[test]
    fn mode_parses_exact_names() {
        assert_eq!(OutputMode::from_str("file").unwrap(), OutputMode::File);
        assert_eq!(OutputMode::from_str("dir").unwrap(), OutputMode::Dir);
        assert!(OutputMode::from_str("FILE").is_err());
    }

    #[test]
    fn default_mode_is_file() {
        assert_eq!(OutputMode::default(), OutputMode::File);
        assert_eq!(OutputMode::available(), "file, dir");
    }

    #[test]
    fn requirement_id_display() {
        assert_eq!(RequirementId::from("authorization").to_string(), "authorization");
    }

    // ========================================================================
    // Error Tests
    // ========================================================================

    #[test]
    fn unknown_requirement_suggests_catalog() {
        let err = DomainError::UnknownRequirement {
            id: "billing".into(),
            available: vec!["authentication".into(), "authorization".into()],
        };
        assert_eq!(err.to_string(), "no requirement named: 'billing'");
        assert!(err.suggestions().iter().any(|s| s.contains("authorization")));
        assert_eq!(err.category(), ErrorCategory::NotFound);
    }

    #[test]
    fn invalid_mode_is_validation() {
        let err = DomainError::InvalidMode {
            mode: "xyz".into(),
            available: OutputMode::available(),
        };
        assert_eq!(err.category(), ErrorCategory::Validation);
    }
}
