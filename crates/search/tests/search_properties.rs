//! Property tests for index construction and query ordering

use coursekit_page::{NodeKind, Page, PageNode};
use coursekit_search::{SearchIndex, MIN_TEXT_LEN};
use proptest::prelude::*;
use std::collections::HashSet;

fn arb_kind() -> impl Strategy<Value = NodeKind> {
    prop_oneof![
        Just(NodeKind::Heading2),
        Just(NodeKind::Heading3),
        Just(NodeKind::Paragraph),
        Just(NodeKind::ListItem),
        Just(NodeKind::TocEntry),
    ]
}

fn arb_page() -> impl Strategy<Value = Page> {
    prop::collection::vec((arb_kind(), "[a-z ]{0,40}"), 0..20).prop_map(|nodes| {
        let mut page = Page::new();
        for (kind, text) in nodes {
            page.push(PageNode::new(kind, text));
        }
        page
    })
}

proptest! {
    #[test]
    fn entry_count_matches_qualifying_nodes(mut page in arb_page()) {
        let qualifying = page
            .nodes()
            .iter()
            .filter(|n| n.text.trim().chars().count() >= MIN_TEXT_LEN)
            .count();

        let index = SearchIndex::build(&mut page);
        prop_assert_eq!(index.len(), qualifying);
        for entry in index.entries() {
            prop_assert!(!entry.text.is_empty());
        }
    }

    #[test]
    fn entry_ids_unique(mut page in arb_page()) {
        let index = SearchIndex::build(&mut page);
        let mut seen = HashSet::new();
        for entry in index.entries() {
            prop_assert!(seen.insert(entry.id.clone()));
        }
    }

    #[test]
    fn rebuild_reuses_ids(mut page in arb_page()) {
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
        prop_assert_eq!(first, second);
    }

    #[test]
    fn scores_positive_and_sorted(mut page in arb_page(), query in "[a-z ]{0,12}") {
        let index = SearchIndex::build(&mut page);
        let hits = index.search(&query);

        for window in hits.windows(2) {
            prop_assert!(window[0].score >= window[1].score);
        }
        for hit in &hits {
            prop_assert!(hit.score > 0.0);
        }
    }

    #[test]
    fn short_queries_return_nothing(mut page in arb_page(), query in "[a-z]?") {
        let index = SearchIndex::build(&mut page);
        prop_assert!(index.search(&query).is_empty());
    }

    #[test]
    fn search_is_idempotent(mut page in arb_page(), query in "[a-z ]{2,12}") {
        let index = SearchIndex::build(&mut page);
        let first: Vec<(String, f32)> = index
            .search(&query)
            .iter()
            .map(|h| (h.entry.id.clone(), h.score))
            .collect();
        let second: Vec<(String, f32)> = index
            .search(&query)
            .iter()
            .map(|h| (h.entry.id.clone(), h.score))
            .collect();
        prop_assert_eq!(first, second);
    }
}
