//! Dictionary domain module.
//!
//! Looks English words up in the Free Dictionary API and renders the first
//! entry as text.
//!
//! ## Architecture
//!
//! - `model.rs` - Response data model
//! - `client.rs` - Blocking HTTP client and the `DictionarySource` seam
//! - `format.rs` - Definitions and detailed text views
//! - `variants.rs` - Candidate spellings for the search fallback
//! - `observer.rs` - Injected logging collaborator
//! - `service.rs` - Lookup + rendering + search, used by the tools domain

pub mod client;
mod error;
pub mod format;
pub mod model;
pub mod observer;
mod service;
pub mod variants;

pub use client::{DictionarySource, HttpDictionaryClient, normalize_word};
pub use error::LookupError;
pub use model::{Definition, LookupResult, Meaning, Phonetic};
pub use observer::{LookupObserver, TracingObserver};
pub use service::{DictionaryService, SearchOutcome};

#[cfg(test)]
pub(crate) use service::testing;
