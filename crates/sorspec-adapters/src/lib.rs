//! Infrastructure adapters for sorspec.
//!
//! This crate implements the ports defined in `sorspec-core::application::ports`
//! and the requirement providers that need disk access. It contains all
//! external dependencies and I/O operations.

pub mod filesystem;
pub mod requirements;
pub mod resource;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use requirements::{ResourceFileConfig, builtin_requirements};
pub use resource::{RESOURCE_DIR_ENV, ResourceDir};
