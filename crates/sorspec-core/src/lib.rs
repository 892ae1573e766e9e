//! sorspec Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the sorspec
//! project configuration tool, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           sorspec-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │   (InitService, DocumentBuilder,        │
//! │    OutputStrategy)                      │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │        (Driven: Filesystem)             │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    sorspec-adapters (Infrastructure)    │
//! │ (LocalFilesystem, ResourceFileConfig)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (LayerCatalog, RequirementCatalog,     │
//! │   ConfigDocument, Serializer)           │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use sorspec_core::{
//!     application::InitService,
//!     domain::{InitOptions, Layer, LayerCatalog},
//! };
//!
//! // Catalogs are built once and injected.
//! let service = InitService::new(LayerCatalog::builtin(), requirements, filesystem);
//!
//! let options = InitOptions::new("./myapp")
//!     .layer(Layer::Server, "go")
//!     .requirement("authorization");
//! service.init(options).unwrap();
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        DocumentBuilder, InitPlan, InitReport, InitService, OutputStrategy, ports::Filesystem,
    };
    pub use crate::domain::{
        ConfigDocument, ConfigNode, DefaultConfigProvider, InitOptions, InitRequest, Layer,
        LayerCatalog, LayerSelection, OutputMode, ProviderError, Requirement, RequirementCatalog,
        RequirementId, Serializer, StaticConfig,
    };
    pub use crate::error::{SorspecError, SorspecResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
