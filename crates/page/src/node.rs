//! Text-bearing page nodes

/// Semantic role of a page node
///
/// Covers the candidate set the indexer selects: section headings at two
/// levels, paragraphs, list items, and table-of-contents entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Section heading (`h2`)
    Heading2,
    /// Subsection heading (`h3`)
    Heading3,
    /// Paragraph
    Paragraph,
    /// List item
    ListItem,
    /// Table-of-contents entry
    TocEntry,
}

impl NodeKind {
    /// True for either heading level
    ///
    /// Heading entries receive a ranking bonus during search.
    pub fn is_heading(&self) -> bool {
        matches!(self, NodeKind::Heading2 | NodeKind::Heading3)
    }

    /// Source tag name for display and logging
    pub fn tag(&self) -> &'static str {
        match self {
            NodeKind::Heading2 => "h2",
            NodeKind::Heading3 => "h3",
            NodeKind::Paragraph => "p",
            NodeKind::ListItem => "li",
            NodeKind::TocEntry => "div",
        }
    }
}

/// One text-bearing node of a rendered page
///
/// `text` is the trimmed plain-text content. `id` mirrors the element's
/// identifier attribute; the indexer writes one back when it is unset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageNode {
    /// Semantic role of the node
    pub kind: NodeKind,
    /// Trimmed plain-text content
    pub text: String,
    /// Element identifier, if the markup carried one or the indexer assigned one
    pub id: Option<String>,
}

impl PageNode {
    /// Create a node without an identifier
    pub fn new(kind: NodeKind, text: impl Into<String>) -> Self {
        PageNode {
            kind,
            text: text.into(),
            id: None,
        }
    }

    /// Builder: set the identifier
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_kinds() {
        assert!(NodeKind::Heading2.is_heading());
        assert!(NodeKind::Heading3.is_heading());
        assert!(!NodeKind::Paragraph.is_heading());
        assert!(!NodeKind::ListItem.is_heading());
        assert!(!NodeKind::TocEntry.is_heading());
    }

    #[test]
    fn test_tag_names() {
        assert_eq!(NodeKind::Heading2.tag(), "h2");
        assert_eq!(NodeKind::Heading3.tag(), "h3");
        assert_eq!(NodeKind::Paragraph.tag(), "p");
        assert_eq!(NodeKind::ListItem.tag(), "li");
        assert_eq!(NodeKind::TocEntry.tag(), "div");
    }

    #[test]
    fn test_node_builder() {
        let node = PageNode::new(NodeKind::Paragraph, "some text").with_id("intro");
        assert_eq!(node.kind, NodeKind::Paragraph);
        assert_eq!(node.text, "some text");
        assert_eq!(node.id, Some("intro".to_string()));
    }
}
