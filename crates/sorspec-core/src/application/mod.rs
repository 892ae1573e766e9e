//! Application layer for sorspec.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (InitService, DocumentBuilder)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business rules itself. Validation and document invariants live in
//! `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    DirectoryTree, DocumentBuilder, InitPlan, InitReport, InitService, OutputStrategy, SingleFile,
    strategy_for,
};

// Re-export port traits (for adapter implementation)
pub use ports::Filesystem;

pub use error::ApplicationError;
