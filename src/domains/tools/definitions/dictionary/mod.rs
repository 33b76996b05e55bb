//! Dictionary tools module.
//!
//! Three tools, each taking one string argument and returning one text
//! result:
//! - `definitions`: flat list of definitions for a word
//! - `details`: pronunciation, numbered definitions, examples, synonyms
//! - `search`: exact lookup with a naive variant fallback
//!
//! Lookups block on the network, so every call is offloaded with
//! `spawn_blocking`. Lookup failures are reported as text, never as errors.

pub mod common;
pub mod definitions;
pub mod details;
pub mod search;

pub use definitions::{GetDefinitionsParams, GetDefinitionsTool};
pub use details::{GetWordDetailsParams, GetWordDetailsTool};
pub use search::{SearchWordParams, SearchWordTool};
