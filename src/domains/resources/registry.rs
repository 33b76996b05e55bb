//! Resource Registry - central registration of all resources.
//!
//! When adding a new resource:
//! 1. Create the resource file in `definitions/`
//! 2. Export it in `definitions/mod.rs`
//! 3. Register it here

use rmcp::model::{AnnotateAble, RawResource, RawResourceTemplate, Resource, ResourceTemplate};

use super::definitions::{
    ResourceDefinition, ResourceTemplateDefinition, ServerInfoResource, WordEntryTemplate,
};

/// Helper function to create an annotated resource from a definition.
fn build_resource<R: ResourceDefinition>() -> Resource {
    let mut raw = RawResource::new(R::URI, R::NAME);
    raw.description = Some(R::DESCRIPTION.to_string());
    raw.mime_type = Some(R::MIME_TYPE.to_string());
    raw.no_annotation()
}

/// Helper function to create an annotated template from a definition.
fn build_template<T: ResourceTemplateDefinition>() -> ResourceTemplate {
    RawResourceTemplate {
        uri_template: T::URI_TEMPLATE.to_string(),
        name: T::NAME.to_string(),
        title: Some(T::TITLE.to_string()),
        description: Some(T::DESCRIPTION.to_string()),
        mime_type: Some(T::MIME_TYPE.to_string()),
    }
    .no_annotation()
}

/// Get all registered resources.
pub fn get_all_resources() -> Vec<Resource> {
    vec![build_resource::<ServerInfoResource>()]
}

/// Get all registered resource templates.
///
/// Resource templates use URI templates (RFC 6570) to describe
/// parameterized resources that clients can fill in.
pub fn get_all_resource_templates() -> Vec<ResourceTemplate> {
    vec![build_template::<WordEntryTemplate>()]
}
