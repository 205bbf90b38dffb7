//! Render-ready result views
//!
//! The presentation layer renders a results list and highlights the
//! top-scoring backing nodes. This module prepares that data (icons,
//! truncated previews with match ranges, highlight id selection) without
//! touching any rendering surface itself.

use crate::types::SearchHit;
use coursekit_page::NodeKind;
use std::ops::Range;

/// Maximum results a presentation layer renders per query
pub const RESULT_LIMIT: usize = 10;

/// How many top results get their backing node highlighted
pub const HIGHLIGHT_LIMIT: usize = 5;

/// Preview truncation length in characters
pub const PREVIEW_LEN: usize = 120;

/// Display icon for a node kind
pub fn icon(kind: NodeKind) -> &'static str {
    match kind {
        NodeKind::Heading2 => "📌",
        NodeKind::Heading3 => "📍",
        NodeKind::Paragraph => "📄",
        NodeKind::ListItem => "•",
        NodeKind::TocEntry => "📦",
    }
}

// ============================================================================
// ResultView
// ============================================================================

/// One rendered search result
///
/// `match_ranges` are byte ranges into `preview` covering case-insensitive
/// occurrences of the full query, for visual emphasis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultView {
    /// Icon for the entry's kind
    pub icon: &'static str,

    /// Entry text truncated to [`PREVIEW_LEN`] characters
    pub preview: String,

    /// Byte ranges of query matches within `preview`
    pub match_ranges: Vec<Range<usize>>,

    /// Section label shown alongside the result
    pub section_label: String,

    /// Identifier of the backing node, for scroll-to-target resolution
    pub id: String,
}

impl ResultView {
    /// Build the view for one hit
    pub fn from_hit(hit: &SearchHit<'_>, query: &str) -> ResultView {
        let preview = truncate(&hit.entry.text, PREVIEW_LEN);
        let match_ranges = match_ranges(&preview, query.trim());
        ResultView {
            icon: icon(hit.entry.kind),
            preview,
            match_ranges,
            section_label: hit.entry.section_label.clone(),
            id: hit.entry.id.clone(),
        }
    }
}

/// Build views for the first [`RESULT_LIMIT`] hits
pub fn result_views(hits: &[SearchHit<'_>], query: &str) -> Vec<ResultView> {
    hits.iter()
        .take(RESULT_LIMIT)
        .map(|hit| ResultView::from_hit(hit, query))
        .collect()
}

/// Ids of the first [`HIGHLIGHT_LIMIT`] hits' backing nodes
pub fn top_highlight_ids(hits: &[SearchHit<'_>]) -> Vec<String> {
    hits.iter()
        .take(HIGHLIGHT_LIMIT)
        .map(|hit| hit.entry.id.clone())
        .collect()
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut preview: String = text.chars().take(max_chars).collect();
    preview.push_str("...");
    preview
}

/// Case-insensitive occurrences of `query` within `text`, as byte ranges
///
/// Ranges found on the lowercased text are kept only when they fall on
/// char boundaries of the original, which drops the rare positions where
/// lowercasing shifted byte offsets.
fn match_ranges(text: &str, query: &str) -> Vec<Range<usize>> {
    if query.is_empty() {
        return Vec::new();
    }
    let text_lower = text.to_lowercase();
    let query_lower = query.to_lowercase();
    text_lower
        .match_indices(&query_lower)
        .map(|(start, matched)| start..start + matched.len())
        .filter(|range| text.get(range.clone()).is_some())
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
