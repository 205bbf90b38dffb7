//! HTML ingestion
//!
//! Builds a [`Page`] from rendered HTML. Selection mirrors what the site
//! templates render: `h2`/`h3`/`p`/`li` inside module sections plus
//! table-of-contents entries, with the hero heading as the page title.

use crate::node::{NodeKind, PageNode};
use crate::page::Page;
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

/// Candidate elements, in one selector list so iteration stays in document order.
static CANDIDATES: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(
        ".module-section h2, .module-section h3, .module-section p, .module-section li, .toc-item",
    )
    .expect("static candidate selector is valid")
});

static HERO_TITLE: Lazy<Selector> =
    Lazy::new(|| Selector::parse(".hero h1").expect("static hero selector is valid"));

impl Page {
    /// Build a page snapshot from rendered HTML
    ///
    /// `path` is the page's location path, used later for section-label
    /// derivation. Candidate nodes are captured in document order with
    /// trimmed text and any identifier the markup already carries. Nothing
    /// is filtered by length here; that is the indexer's concern.
    pub fn from_html(html: &str, path: Option<&str>) -> Page {
        if html.trim().is_empty() {
            tracing::warn!("empty html input, page has no nodes");
            return match path {
                Some(p) => Page::new().with_path(p),
                None => Page::new(),
            };
        }

        let document = Html::parse_document(html);

        let mut page = Page::new();
        if let Some(p) = path {
            page = page.with_path(p);
        }
        if let Some(title) = hero_title(&document) {
            page = page.with_title(title);
        }

        for element in document.select(&CANDIDATES) {
            let Some(kind) = classify(&element) else {
                continue;
            };
            let text = element.text().collect::<String>().trim().to_string();
            let mut node = PageNode::new(kind, text);
            if let Some(id) = element.value().attr("id").filter(|id| !id.is_empty()) {
                node = node.with_id(id);
            }
            page.push(node);
        }

        tracing::debug!(nodes = page.len(), "page parsed");
        page
    }
}

/// Classify a matched element by tag name, falling back to the TOC class
fn classify(element: &ElementRef<'_>) -> Option<NodeKind> {
    match element.value().name() {
        "h2" => Some(NodeKind::Heading2),
        "h3" => Some(NodeKind::Heading3),
        "p" => Some(NodeKind::Paragraph),
        "li" => Some(NodeKind::ListItem),
        _ if element.value().classes().any(|c| c == "toc-item") => Some(NodeKind::TocEntry),
        _ => None,
    }
}

fn hero_title(document: &Html) -> Option<String> {
    let element = document.select(&HERO_TITLE).next()?;
    let title = element.text().collect::<String>().trim().to_string();
    (!title.is_empty()).then_some(title)
}
