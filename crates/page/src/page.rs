//! Owned snapshot of one rendered page

use crate::node::{NodeKind, PageNode};

/// Snapshot of one rendered page
///
/// Nodes are held in document order, the order the selection walk
/// encountered them. The page is assumed static for the session; there is
/// no re-parse or mutation observation, and the only mutation after
/// construction is indexer id assignment.
#[derive(Debug, Clone, Default)]
pub struct Page {
    path: Option<String>,
    title: Option<String>,
    nodes: Vec<PageNode>,
}

impl Page {
    /// Create an empty page
    pub fn new() -> Self {
        Page::default()
    }

    /// Builder: set the page location path
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Builder: set the page-level title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Append a node in document order
    pub fn push(&mut self, node: PageNode) {
        self.nodes.push(node);
    }

    /// Builder: append a node in document order
    pub fn with_node(mut self, kind: NodeKind, text: impl Into<String>) -> Self {
        self.push(PageNode::new(kind, text));
        self
    }

    /// Page location path, if known
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Page-level title, if the page carried one
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Nodes in document order
    pub fn nodes(&self) -> &[PageNode] {
        &self.nodes
    }

    /// Mutable nodes in document order
    ///
    /// Used by the indexer to assign identifiers to unlabeled nodes.
    pub fn nodes_mut(&mut self) -> &mut [PageNode] {
        &mut self.nodes
    }

    /// Number of nodes on the page
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the page has no nodes
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Look up a node by identifier
    ///
    /// Returns the first node carrying the id, so an identifier assigned by
    /// the indexer resolves to exactly the node it was written onto.
    pub fn node_by_id(&self, id: &str) -> Option<&PageNode> {
        self.nodes.iter().find(|n| n.id.as_deref() == Some(id))
    }
}
