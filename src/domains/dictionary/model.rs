//! Data model for dictionary API responses.
//!
//! The upstream API returns a JSON array of entries. Only the first entry is
//! ever consulted; alternate headwords and etymologies are discarded.

use serde::Deserialize;

/// The parsed entry for one looked-up word.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LookupResult {
    /// Headword as reported by the API.
    #[serde(default)]
    pub word: Option<String>,

    #[serde(default)]
    pub phonetics: Vec<Phonetic>,

    #[serde(default)]
    pub meanings: Vec<Meaning>,
}

/// A single pronunciation entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Phonetic {
    #[serde(default)]
    pub text: Option<String>,
}

/// One part-of-speech sense of a headword.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meaning {
    #[serde(default)]
    pub part_of_speech: Option<String>,

    #[serde(default)]
    pub definitions: Vec<Definition>,

    #[serde(default)]
    pub synonyms: Vec<String>,

    #[serde(default)]
    pub antonyms: Vec<String>,
}

/// A single definition, optionally with a usage example.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Definition {
    pub definition: String,

    #[serde(default)]
    pub example: Option<String>,
}

impl LookupResult {
    /// Headword to display, falling back to the requested word.
    pub fn headword<'a>(&'a self, requested: &'a str) -> &'a str {
        self.word
            .as_deref()
            .filter(|w| !w.is_empty())
            .unwrap_or(requested)
    }

    /// First pronunciation with non-empty text, if any.
    pub fn pronunciation(&self) -> Option<&str> {
        self.phonetics
            .iter()
            .filter_map(|p| p.text.as_deref())
            .find(|t| !t.is_empty())
    }

    /// Total number of definitions across all meanings.
    pub fn definition_count(&self) -> usize {
        self.meanings.iter().map(|m| m.definitions.len()).sum()
    }
}

impl Meaning {
    /// Part of speech, treating an empty string as absent.
    pub fn part_of_speech(&self) -> Option<&str> {
        self.part_of_speech.as_deref().filter(|p| !p.is_empty())
    }
}
