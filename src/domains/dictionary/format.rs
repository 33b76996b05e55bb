//! Text renderings of a lookup result.
//!
//! Two views exist: a flat definitions list and a detailed view with
//! pronunciation, numbered definitions, examples, synonyms and antonyms.

use std::fmt::Write;

use super::model::LookupResult;

/// Returned by the definitions view when there is nothing to show.
pub const NO_DEFINITIONS: &str = "No definitions found.";

/// Returned by the details view when the lookup failed.
pub const NO_DETAILS: &str = "No word details found.";

/// Maximum synonyms or antonyms listed per meaning.
pub const MAX_RELATED_WORDS: usize = 5;

/// One line per definition, in document order, prefixed with the part of
/// speech when the meaning has one.
pub fn definition_lines(result: &LookupResult) -> Vec<String> {
    result
        .meanings
        .iter()
        .flat_map(|meaning| {
            let pos = meaning.part_of_speech();
            meaning.definitions.iter().map(move |d| match pos {
                Some(pos) => format!("({}) {}", pos, d.definition),
                None => d.definition.clone(),
            })
        })
        .collect()
}

/// Definitions joined by blank lines, or `None` if there are none.
pub fn try_render_definitions(result: &LookupResult) -> Option<String> {
    let lines = definition_lines(result);
    if lines.is_empty() {
        None
    } else {
        Some(lines.join("\n\n"))
    }
}

/// Definitions view. Falls back to [`NO_DEFINITIONS`].
pub fn render_definitions(result: &LookupResult) -> String {
    try_render_definitions(result).unwrap_or_else(|| NO_DEFINITIONS.to_string())
}

/// Detailed view of a lookup result.
pub fn render_details(result: &LookupResult, requested_word: &str) -> String {
    let mut out = String::new();

    let _ = write!(
        out,
        "Word: {}\n\n",
        result.headword(requested_word).to_uppercase()
    );

    if !result.phonetics.is_empty() {
        if let Some(text) = result.pronunciation() {
            let _ = writeln!(out, "Pronunciation: {}", text);
        }
        out.push('\n');
    }

    for meaning in &result.meanings {
        let pos = meaning
            .part_of_speech()
            .map(title_case)
            .unwrap_or_else(|| "Unknown".to_string());
        let _ = writeln!(out, "Part of Speech: {}", pos);

        for (n, definition) in meaning.definitions.iter().enumerate() {
            let _ = writeln!(out, "  {}. {}", n + 1, definition.definition);
            if let Some(example) = &definition.example {
                let _ = writeln!(out, "     Example: {}", example);
            }
        }

        if !meaning.synonyms.is_empty() {
            let _ = writeln!(out, "  Synonyms: {}", join_related(&meaning.synonyms));
        }
        if !meaning.antonyms.is_empty() {
            let _ = writeln!(out, "  Antonyms: {}", join_related(&meaning.antonyms));
        }

        out.push('\n');
    }

    out.trim_end().to_string()
}

fn join_related(words: &[String]) -> String {
    words
        .iter()
        .take(MAX_RELATED_WORDS)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Upper-case the first letter of every alphabetic run, lower-case the rest.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;

    for c in text.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::dictionary::model::{Definition, Meaning, Phonetic};

    fn def(text: &str, example: Option<&str>) -> Definition {
        Definition {
            definition: text.to_string(),
            example: example.map(str::to_string),
        }
    }

    fn meaning(pos: Option<&str>, definitions: Vec<Definition>) -> Meaning {
        Meaning {
            part_of_speech: pos.map(str::to_string),
            definitions,
            ..Default::default()
        }
    }

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_render_definitions_single() {
        let result = LookupResult {
            word: Some("hello".to_string()),
            meanings: vec![meaning(
                Some("exclamation"),
                vec![def(
                    "used as a greeting or to begin a phone conversation.",
                    None,
                )],
            )],
            ..Default::default()
        };

        assert_eq!(
            render_definitions(&result),
            "(exclamation) used as a greeting or to begin a phone conversation."
        );
    }

    #[test]
    fn test_render_definitions_flattens_in_document_order() {
        let result = LookupResult {
            meanings: vec![
                meaning(Some("noun"), vec![def("first", None), def("second", None)]),
                meaning(None, vec![def("third", Some("ignored here"))]),
                meaning(Some(""), vec![def("fourth", None)]),
                meaning(Some("verb"), vec![def("fifth", None)]),
            ],
            ..Default::default()
        };

        let rendered = render_definitions(&result);
        let entries: Vec<_> = rendered.split("\n\n").collect();
        assert_eq!(entries.len(), 5);
        assert_eq!(
            entries,
            vec!["(noun) first", "(noun) second", "third", "fourth", "(verb) fifth"]
        );
    }

    #[test]
    fn test_render_definitions_empty() {
        let result = LookupResult {
            meanings: vec![meaning(Some("noun"), vec![])],
            ..Default::default()
        };
        assert_eq!(render_definitions(&result), NO_DEFINITIONS);
        assert_eq!(render_definitions(&LookupResult::default()), NO_DEFINITIONS);
        assert_eq!(try_render_definitions(&result), None);
    }

    #[test]
    fn test_render_details_full() {
        let result = LookupResult {
            word: Some("happy".to_string()),
            phonetics: vec![
                Phonetic { text: None },
                Phonetic {
                    text: Some("/ˈhæpi/".to_string()),
                },
                Phonetic {
                    text: Some("/ˈhapi/".to_string()),
                },
            ],
            meanings: vec![
                Meaning {
                    part_of_speech: Some("adjective".to_string()),
                    definitions: vec![
                        def("Feeling pleasure.", Some("a happy smile")),
                        def("Fortunate.", None),
                    ],
                    synonyms: words(&["glad", "joyful", "merry", "cheerful", "content", "elated"]),
                    antonyms: words(&["sad"]),
                },
                meaning(None, vec![def("Something else.", None)]),
            ],
        };

        let expected = "Word: HAPPY\n\
             \n\
             Pronunciation: /ˈhæpi/\n\
             \n\
             Part of Speech: Adjective\n\
             \x20 1. Feeling pleasure.\n\
             \x20    Example: a happy smile\n\
             \x20 2. Fortunate.\n\
             \x20 Synonyms: glad, joyful, merry, cheerful, content\n\
             \x20 Antonyms: sad\n\
             \n\
             Part of Speech: Unknown\n\
             \x20 1. Something else.";

        assert_eq!(render_details(&result, "happy"), expected);
    }

    #[test]
    fn test_render_details_at_most_one_pronunciation() {
        let result = LookupResult {
            phonetics: vec![
                Phonetic {
                    text: Some("/a/".to_string()),
                },
                Phonetic {
                    text: Some("/b/".to_string()),
                },
            ],
            ..Default::default()
        };
        let rendered = render_details(&result, "a");
        assert_eq!(rendered.matches("Pronunciation:").count(), 1);
        assert!(rendered.contains("Pronunciation: /a/"));
    }

    #[test]
    fn test_render_details_without_pronunciation_text() {
        let result = LookupResult {
            phonetics: vec![Phonetic { text: None }],
            meanings: vec![meaning(Some("noun"), vec![def("A thing.", None)])],
            ..Default::default()
        };
        assert_eq!(
            render_details(&result, "thing"),
            "Word: THING\n\n\nPart of Speech: Noun\n  1. A thing."
        );
    }

    #[test]
    fn test_render_details_truncates_related_words_silently() {
        let result = LookupResult {
            meanings: vec![Meaning {
                part_of_speech: Some("noun".to_string()),
                definitions: vec![def("d", None)],
                synonyms: words(&["a", "b", "c", "d", "e", "f", "g"]),
                antonyms: words(&["z", "y", "x", "w", "v", "u"]),
            }],
            ..Default::default()
        };
        let rendered = render_details(&result, "w");
        assert!(rendered.contains("  Synonyms: a, b, c, d, e\n"));
        assert!(rendered.ends_with("  Antonyms: z, y, x, w, v"));
        assert!(!rendered.contains("..."));
    }

    #[test]
    fn test_render_details_header_only() {
        assert_eq!(render_details(&LookupResult::default(), "ghost"), "Word: GHOST");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("noun"), "Noun");
        assert_eq!(title_case("NOUN"), "Noun");
        assert_eq!(title_case("phrasal verb"), "Phrasal Verb");
        assert_eq!(title_case("proper-noun"), "Proper-Noun");
        assert_eq!(title_case(""), "");
    }
}
