//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "initialise a project configuration".

pub mod document_builder;
pub mod init_service;
pub mod output_strategy;

pub use document_builder::DocumentBuilder;
pub use init_service::{InitPlan, InitReport, InitService};
pub use output_strategy::{DirectoryTree, OutputStrategy, SingleFile, strategy_for};
