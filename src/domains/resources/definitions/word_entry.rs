//! Word entry resource template.
//!
//! `dictionary://word/{word}` resolves to the detailed view of the word.

use rmcp::model::ResourceContents;

use super::ResourceTemplateDefinition;
use crate::domains::dictionary::DictionaryService;
use crate::domains::resources::error::ResourceError;

/// Detailed dictionary entry, addressed by word.
pub struct WordEntryTemplate;

impl ResourceTemplateDefinition for WordEntryTemplate {
    const URI_TEMPLATE: &'static str = "dictionary://word/{word}";
    const NAME: &'static str = "Dictionary Entry";
    const TITLE: &'static str = "Word Details";
    const DESCRIPTION: &'static str =
        "Pronunciation, parts of speech, definitions, examples, synonyms and antonyms of an English word";
    const MIME_TYPE: &'static str = "text/plain";
}

impl WordEntryTemplate {
    /// URI prefix shared by every entry of this template.
    pub const PREFIX: &'static str = "dictionary://word/";

    /// Extract the percent-decoded word from a URI.
    ///
    /// Returns `None` when the URI does not belong to this template.
    pub fn parse_word(uri: &str) -> Option<Result<String, ResourceError>> {
        let raw = uri.strip_prefix(Self::PREFIX)?;

        let parsed = urlencoding::decode(raw)
            .map_err(|e| ResourceError::invalid_uri(format!("{}: {}", uri, e)))
            .and_then(|word| {
                let word = word.trim();
                if word.is_empty() {
                    Err(ResourceError::invalid_uri(uri))
                } else {
                    Ok(word.to_string())
                }
            });

        Some(parsed)
    }

    /// Look the word up and render it. Blocks on the network.
    pub fn resolve(
        uri: &str,
        word: &str,
        service: &DictionaryService,
    ) -> Result<ResourceContents, ResourceError> {
        let text = service
            .try_details(word)
            .map_err(|e| ResourceError::not_found(format!("{} ({})", uri, e)))?;

        Ok(ResourceContents::text(text, uri))
    }
}
