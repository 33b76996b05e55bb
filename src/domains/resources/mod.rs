//! Resources domain module.
//!
//! Read-only data exposed to MCP clients: a server summary and one
//! dictionary entry per word.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual resource definitions (one file per resource)
//! - `registry.rs` - Central resource registration
//! - `service.rs` - Resource service for listing and reading

pub mod definitions;
mod error;
mod registry;
mod service;

pub use definitions::{
    ResourceDefinition, ResourceTemplateDefinition, ServerInfoResource, ServerSummary,
    WordEntryTemplate,
};
pub use error::ResourceError;
pub use registry::{get_all_resource_templates, get_all_resources};
pub use service::ResourceService;
