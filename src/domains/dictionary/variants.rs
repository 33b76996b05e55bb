//! Naive morphological variants used by the search fallback.
//!
//! No stemming and no edit distance: a fixed list of suffix additions and
//! truncations, reproduced as-is including the degenerate cases for short
//! words.

/// Maximum number of successful variants reported back.
pub const MAX_SUGGESTIONS: usize = 3;

/// Candidate spellings for a normalized query, in the order they are tried.
///
/// Always five entries. The truncations only apply to queries longer than
/// three (one letter dropped) or four (two letters dropped) characters;
/// otherwise the query itself is repeated.
pub fn candidate_variants(query: &str) -> Vec<String> {
    let len = query.chars().count();

    vec![
        format!("{query}s"),
        format!("{query}ed"),
        format!("{query}ing"),
        if len > 3 {
            drop_last_chars(query, 1)
        } else {
            query.to_string()
        },
        if len > 4 {
            drop_last_chars(query, 2)
        } else {
            query.to_string()
        },
    ]
}

fn drop_last_chars(text: &str, n: usize) -> String {
    let keep = text.chars().count().saturating_sub(n);
    text.chars().take(keep).collect()
}
