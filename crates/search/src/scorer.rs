//! Substring scorer
//!
//! Scoring is a fixed heuristic over lowercased text: a bonus for
//! containing the whole query, a smaller bonus per query token found, and
//! a multiplier for heading entries. No corpus statistics are involved.

use crate::types::IndexEntry;

/// Bonus when the entry contains the full query as a substring
pub const FULL_QUERY_BONUS: f32 = 10.0;

/// Bonus per query token found as a substring
///
/// Each occurrence of a token in the token list counts independently, so a
/// repeated token contributes its bonus once per repetition.
pub const TOKEN_BONUS: f32 = 3.0;

/// Multiplier applied to heading entries after the additive bonuses
pub const HEADING_MULTIPLIER: f32 = 1.5;

/// Score one entry against a lowercased query and its token list
///
/// Returns 0 for entries with no overlap; never negative.
pub(crate) fn score_entry(entry: &IndexEntry, query_lower: &str, tokens: &[String]) -> f32 {
    let text = entry.text.to_lowercase();
    let mut score = 0.0;

    if text.contains(query_lower) {
        score += FULL_QUERY_BONUS;
    }

    for token in tokens {
        if text.contains(token.as_str()) {
            score += TOKEN_BONUS;
        }
    }

    if entry.kind.is_heading() {
        score *= HEADING_MULTIPLIER;
    }

    score
}
