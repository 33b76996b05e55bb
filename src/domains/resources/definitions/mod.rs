//! Resource definitions module.
//!
//! Each resource is defined in its own file with:
//! - URI (or URI template) and metadata
//! - Content resolution
//!
//! ## Adding a New Resource
//!
//! 1. Create a new file (e.g., `my_resource.rs`)
//! 2. Implement `ResourceDefinition` or `ResourceTemplateDefinition`
//! 3. Export it here
//! 4. Register in `registry.rs`

pub mod server_info;
pub mod word_entry;

pub use server_info::{ServerInfoResource, ServerSummary};
pub use word_entry::WordEntryTemplate;

/// Metadata for a resource with a fixed URI.
pub trait ResourceDefinition {
    /// The unique URI of the resource.
    const URI: &'static str;

    /// The display name of the resource.
    const NAME: &'static str;

    /// A description of the resource.
    const DESCRIPTION: &'static str;

    /// The MIME type of the resource content.
    const MIME_TYPE: &'static str;
}

/// Metadata for a parameterized resource (RFC 6570 URI template).
pub trait ResourceTemplateDefinition {
    /// The URI template, e.g. `scheme://path/{param}`.
    const URI_TEMPLATE: &'static str;

    /// The display name of the template.
    const NAME: &'static str;

    /// A human-readable title.
    const TITLE: &'static str;

    /// A description of the template.
    const DESCRIPTION: &'static str;

    /// The MIME type of resolved content.
    const MIME_TYPE: &'static str;
}
