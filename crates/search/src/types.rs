//! Search result types

use coursekit_page::NodeKind;

/// One indexed unit of page text
///
/// # Invariants
///
/// - `text` is trimmed, non-empty, and at least [`crate::MIN_TEXT_LEN`]
///   characters long
/// - `id` is unique within its index and resolves through
///   `Page::node_by_id` to the node it was read from or written onto
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    /// Trimmed plain-text content of the node
    pub text: String,

    /// Human-readable label for the grouping the node belongs to
    pub section_label: String,

    /// Semantic role of the backing node
    pub kind: NodeKind,

    /// Stable identifier of the backing node
    pub id: String,
}

/// An index entry decorated with a query score
///
/// Result sets are sorted by descending score; equal scores preserve the
/// entries' original index order.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit<'a> {
    /// The matched entry
    pub entry: &'a IndexEntry,

    /// Non-negative ranking weight (higher = more relevant)
    pub score: f32,
}
