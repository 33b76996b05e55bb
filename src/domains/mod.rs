//! Domains module containing business logic organized by bounded contexts.
//!
//! - **dictionary**: word lookup, rendering and the search fallback
//! - **tools**: MCP tools exposing the dictionary to clients
//! - **resources**: read-only data resources

pub mod dictionary;
pub mod resources;
pub mod tools;
