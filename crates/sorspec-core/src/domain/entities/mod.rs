pub mod config_document;
pub mod init_request;
pub mod output_layout;

pub use crate::domain::DomainError;
pub use config_document::{ConfigDocument, ConfigNode};
pub use init_request::{InitOptions, InitRequest, LayerSelection};
pub use output_layout::OutputLayout;
