//! Query tokenizer
//!
//! Queries are matched by substring, so tokenization is deliberately
//! minimal: lowercase, split on whitespace, drop one-character fragments.
//! Duplicate tokens are kept; each occurrence contributes to the score
//! independently.

/// Tokenize a query into lowercased fragments
///
/// - Lowercase
/// - Split on whitespace
/// - Discard tokens of one character or less
/// - Duplicates preserved in order
///
/// # Example
///
/// ```
/// use coursekit_search::tokenizer::tokenize;
///
/// let tokens = tokenize("Print a List");
/// assert_eq!(tokens, vec!["print", "list"]);
/// ```
pub fn tokenize(query: &str) -> Vec<String> {
    query
        .to_lowercase()
        .split_whitespace()
        .filter(|w| w.chars().count() > 1)
        .map(String::from)
        .collect()
}
