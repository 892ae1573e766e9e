//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `sorspec-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: File operations
//!
//! Requirement text sources are a domain capability
//! (`crate::domain::DefaultConfigProvider`) rather than a port, since the
//! built-in providers need no I/O.

pub mod output;

pub use output::Filesystem;

#[cfg(test)]
pub use output::MockFilesystem;
