//! Page search index
//!
//! This module provides:
//! - SearchIndex::build: one walk over the page's nodes at page-ready time
//! - Section-label derivation from the page path or title
//! - Deterministic identifier assignment for unlabeled nodes
//! - SearchIndex::search: the query engine over the built entries
//!
//! The index is built once per page and is immutable afterwards; the page
//! is assumed static for the session, so there is no incremental update.

use crate::scorer::score_entry;
use crate::tokenizer::tokenize;
use crate::types::{IndexEntry, SearchHit};
use coursekit_page::Page;
use std::cmp::Ordering;
use std::collections::HashSet;

/// Minimum trimmed text length for a node to be indexed
///
/// Shorter nodes are excluded as noise.
pub const MIN_TEXT_LEN: usize = 10;

/// Minimum query length (after trimming) for a search to run
pub const MIN_QUERY_LEN: usize = 2;

/// Section label used when neither the page path nor its title yields one
pub const DEFAULT_SECTION_LABEL: &str = "Content";

// ============================================================================
// SearchIndex
// ============================================================================

/// Immutable index over one page's qualifying text nodes
///
/// Entries are held in document order. Every entry's id is unique within
/// the index and resolves through `Page::node_by_id`.
#[derive(Debug, Clone)]
pub struct SearchIndex {
    entries: Vec<IndexEntry>,
}

impl SearchIndex {
    /// Build the index from a page
    ///
    /// Walks the nodes in document order, skipping any whose trimmed text
    /// is shorter than [`MIN_TEXT_LEN`] characters. Nodes without an
    /// identifier get a `search-<n>` id from a counter scoped to this pass,
    /// written back onto the node so later lookups by id resolve. A node
    /// whose existing id is already taken within this index is treated as
    /// unlabeled and reassigned, keeping entry ids unique.
    ///
    /// Building twice over an unchanged page yields identical ids: the
    /// second pass reuses what the first one wrote.
    pub fn build(page: &mut Page) -> SearchIndex {
        let section_label = derive_section_label(page);

        let mut used_ids: HashSet<String> = HashSet::new();
        let mut next_id: u32 = 1;
        let mut entries = Vec::new();

        for node in page.nodes_mut() {
            let text = node.text.trim();
            if text.chars().count() < MIN_TEXT_LEN {
                continue;
            }

            let id = match node.id.as_ref() {
                Some(existing) if !used_ids.contains(existing) => existing.clone(),
                _ => {
                    let fresh = loop {
                        let candidate = format!("search-{next_id}");
                        next_id += 1;
                        if !used_ids.contains(&candidate) {
                            break candidate;
                        }
                    };
                    node.id = Some(fresh.clone());
                    fresh
                }
            };
            used_ids.insert(id.clone());

            entries.push(IndexEntry {
                text: text.to_string(),
                section_label: section_label.clone(),
                kind: node.kind,
                id,
            });
        }

        tracing::info!(entries = entries.len(), "search index built");
        SearchIndex { entries }
    }

    /// Entries in document order
    pub fn entries(&self) -> &[IndexEntry] {
        &self.entries
    }

    /// Number of indexed entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the index holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Run a query against the index
    ///
    /// A trimmed query shorter than [`MIN_QUERY_LEN`] characters returns an
    /// empty result set, not an error. Entries scoring zero are dropped;
    /// the rest are sorted by descending score with equal scores keeping
    /// their document order (stable sort). Idempotent and side-effect-free.
    pub fn search(&self, query: &str) -> Vec<SearchHit<'_>> {
        let query = query.trim();
        if query.chars().count() < MIN_QUERY_LEN {
            return Vec::new();
        }

        let lowered = query.to_lowercase();
        let tokens = tokenize(&lowered);

        let mut hits: Vec<SearchHit<'_>> = self
            .entries
            .iter()
            .filter_map(|entry| {
                let score = score_entry(entry, &lowered, &tokens);
                (score > 0.0).then_some(SearchHit { entry, score })
            })
            .collect();

        // Scores are finite sums of the fixed bonuses, so the comparison
        // never sees NaN. Vec::sort_by is stable.
        hits.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        hits
    }
}

// ============================================================================
// Section label derivation
// ============================================================================

/// Derive the page's section label
///
/// Prefers a `<digits>-<slug>` directory segment of the page path,
/// humanized (dashes to spaces, leading digits stripped); falls back to
/// the page title, then to [`DEFAULT_SECTION_LABEL`].
fn derive_section_label(page: &Page) -> String {
    if let Some(segment) = page.path().and_then(module_segment) {
        return humanize_segment(segment);
    }
    match page.title() {
        Some(title) if !title.is_empty() => title.to_string(),
        _ => DEFAULT_SECTION_LABEL.to_string(),
    }
}

/// Find a `<digits>-<slug>` directory component of the path
///
/// Only components followed by a further `/` qualify, so a matching file
/// name does not count as a module directory.
fn module_segment(path: &str) -> Option<&str> {
    let components: Vec<&str> = path.split('/').collect();
    components
        .iter()
        .enumerate()
        .filter(|(i, _)| i + 1 < components.len())
        .map(|(_, c)| *c)
        .find(|c| {
            let mut chars = c.chars();
            chars.next().is_some_and(|first| first.is_ascii_digit()) && c.contains('-')
        })
}

/// Humanize a module directory segment: `1-python-essentials` → `python essentials`
fn humanize_segment(segment: &str) -> String {
    let spaced = segment.replace('-', " ");
    spaced
        .trim_start_matches(|c: char| c.is_ascii_digit())
        .trim_start()
        .to_string()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use coursekit_page::{NodeKind, PageNode};

    fn sample_page() -> Page {
        Page::new()
            .with_path("/course/1-python-essentials/index.html")
            .with_title("Python Essentials")
            .with_node(NodeKind::Heading2, "Python Basics")
            .with_node(NodeKind::Paragraph, "print(2**3) evaluates to eight")
            .with_node(NodeKind::Paragraph, "printing is fun once it clicks")
            .with_node(NodeKind::Paragraph, "nothing relevant in this one")
    }

    // ========================================
    // Build Tests
    // ========================================

    #[test]
    fn test_build_indexes_qualifying_nodes() {
        let mut page = sample_page();
        let index = SearchIndex::build(&mut page);

        assert_eq!(index.len(), 4);
        for entry in index.entries() {
            assert!(!entry.text.is_empty());
        }
    }

    #[test]
    fn test_build_skips_short_text() {
        let mut page = Page::new()
            .with_node(NodeKind::Paragraph, "too short")
            .with_node(NodeKind::Paragraph, "long enough to qualify");
        let index = SearchIndex::build(&mut page);

        assert_eq!(index.len(), 1);
        assert_eq!(index.entries()[0].text, "long enough to qualify");
    }

    #[test]
    fn test_build_length_filter_counts_chars() {
        // Nine characters, multi-byte: still below the threshold.
        let mut page = Page::new().with_node(NodeKind::Paragraph, "àéîõü çñå");
        let index = SearchIndex::build(&mut page);
        assert!(index.is_empty());
    }

    #[test]
    fn test_build_unique_ids() {
        let mut page = sample_page();
        let index = SearchIndex::build(&mut page);

        let mut seen = HashSet::new();
        for entry in index.entries() {
            assert!(seen.insert(entry.id.clone()), "duplicate id {}", entry.id);
        }
    }

    #[test]
    fn test_build_reuses_existing_ids() {
        let mut page = Page::new();
        page.push(PageNode::new(NodeKind::Heading2, "Already labeled heading").with_id("intro"));
        page.push(PageNode::new(NodeKind::Paragraph, "Unlabeled paragraph text"));

        let index = SearchIndex::build(&mut page);
        assert_eq!(index.entries()[0].id, "intro");
        assert_eq!(index.entries()[1].id, "search-1");
    }

    #[test]
    fn test_build_writes_ids_back() {
        let mut page = Page::new().with_node(NodeKind::Paragraph, "Unlabeled paragraph text");
        let index = SearchIndex::build(&mut page);

        let id = &index.entries()[0].id;
        assert_eq!(page.node_by_id(id).unwrap().text, "Unlabeled paragraph text");
    }

    #[test]
    fn test_build_is_idempotent() {
        let mut page = sample_page();
        let first: Vec<String> = SearchIndex::build(&mut page)
            .entries()
            .iter()
            .map(|e| e.id.clone())
            .collect();
        let second: Vec<String> = SearchIndex::build(&mut page)
            .entries()
            .iter()
            .map(|e| e.id.clone())
            .collect();

        assert_eq!(first, second);
    }

    #[test]
    fn test_build_skips_taken_counter_ids() {
        let mut page = Page::new();
        page.push(PageNode::new(NodeKind::Paragraph, "Carries a counter-shaped id").with_id("search-1"));
        page.push(PageNode::new(NodeKind::Paragraph, "Needs a generated identifier"));

        let index = SearchIndex::build(&mut page);
        assert_eq!(index.entries()[0].id, "search-1");
        assert_eq!(index.entries()[1].id, "search-2");
    }

    #[test]
    fn test_build_reassigns_duplicate_ids() {
        let mut page = Page::new();
        page.push(PageNode::new(NodeKind::Paragraph, "First with the shared id").with_id("dup"));
        page.push(PageNode::new(NodeKind::Paragraph, "Second with the shared id").with_id("dup"));

        let index = SearchIndex::build(&mut page);
        assert_eq!(index.entries()[0].id, "dup");
        assert_eq!(index.entries()[1].id, "search-1");
        // The reassignment was written back, so lookup is unambiguous.
        assert_eq!(page.node_by_id("search-1").unwrap().text, "Second with the shared id");
    }

    #[test]
    fn test_build_document_order() {
        let mut page = sample_page();
        let index = SearchIndex::build(&mut page);

        assert_eq!(index.entries()[0].text, "Python Basics");
        assert_eq!(index.entries()[3].text, "nothing relevant in this one");
    }

    // ========================================
    // Section Label Tests
    // ========================================

    #[test]
    fn test_section_label_from_path() {
        let mut page = sample_page();
        let index = SearchIndex::build(&mut page);
        assert_eq!(index.entries()[0].section_label, "python essentials");
    }

    #[test]
    fn test_section_label_falls_back_to_title() {
        let mut page = Page::new()
            .with_path("/course/about.html")
            .with_title("About the Course")
            .with_node(NodeKind::Paragraph, "Plenty of text to index");
        let index = SearchIndex::build(&mut page);
        assert_eq!(index.entries()[0].section_label, "About the Course");
    }

    #[test]
    fn test_section_label_default() {
        let mut page = Page::new().with_node(NodeKind::Paragraph, "Plenty of text to index");
        let index = SearchIndex::build(&mut page);
        assert_eq!(index.entries()[0].section_label, DEFAULT_SECTION_LABEL);
    }

    #[test]
    fn test_module_segment_requires_directory() {
        // The file name matches the shape but is not a directory component.
        assert_eq!(module_segment("/course/2-geo-analysis/page.html"), Some("2-geo-analysis"));
        assert_eq!(module_segment("/course/2-geo-analysis"), None);
        assert_eq!(module_segment("/course/2-geo-analysis/"), Some("2-geo-analysis"));
    }

    #[test]
    fn test_humanize_segment() {
        assert_eq!(humanize_segment("1-python-essentials"), "python essentials");
        assert_eq!(humanize_segment("12-machine-learning"), "machine learning");
    }

    // ========================================
    // Search Tests
    // ========================================

    #[test]
    fn test_search_short_query_empty() {
        let mut page = sample_page();
        let index = SearchIndex::build(&mut page);

        assert!(index.search("").is_empty());
        assert!(index.search("a").is_empty());
        assert!(index.search("   ").is_empty());
    }

    #[test]
    fn test_search_heading_outranks_paragraph() {
        let mut page = Page::new()
            .with_node(NodeKind::Heading2, "Python Basics")
            .with_node(NodeKind::Paragraph, "Python Basics");
        let index = SearchIndex::build(&mut page);

        let hits = index.search("python");
        assert_eq!(hits.len(), 2);
        assert!(hits[0].entry.kind.is_heading());
        assert_eq!(hits[0].score, hits[1].score * 1.5);
    }

    #[test]
    fn test_search_drops_zero_scores() {
        let mut page = sample_page();
        let index = SearchIndex::build(&mut page);

        let hits = index.search("print");
        assert_eq!(hits.len(), 2);
        assert!(hits.iter().all(|h| h.entry.text.contains("print")));
    }

    #[test]
    fn test_search_equal_scores_keep_document_order() {
        let mut page = Page::new()
            .with_node(NodeKind::Paragraph, "print(2**3) evaluates to eight")
            .with_node(NodeKind::Paragraph, "printing is fun once it clicks");
        let index = SearchIndex::build(&mut page);

        let hits = index.search("print");
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].score, hits[1].score);
        assert!(hits[0].entry.text.starts_with("print(2**3)"));
    }

    #[test]
    fn test_search_is_idempotent() {
        let mut page = sample_page();
        let index = SearchIndex::build(&mut page);

        let first: Vec<(String, f32)> = index
            .search("python")
            .iter()
            .map(|h| (h.entry.id.clone(), h.score))
            .collect();
        let second: Vec<(String, f32)> = index
            .search("python")
            .iter()
            .map(|h| (h.entry.id.clone(), h.score))
            .collect();

        assert_eq!(first, second);
    }

    #[test]
    fn test_search_empty_index() {
        let index = SearchIndex { entries: Vec::new() };
        assert!(index.search("anything").is_empty());
    }
}
