use indexmap::IndexMap;
use smallvec::SmallVec;

use crate::core::traverse::{Ancestors, Descendants};

/// Handle to one node of a [`PlotDocument`].
///
/// Handles stay valid for the lifetime of the document; nodes are annotated
/// in place and never removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    #[must_use]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone)]
pub(crate) struct NodeData {
    pub(crate) tag: String,
    pub(crate) ident: Option<String>,
    pub(crate) attributes: IndexMap<String, String>,
    pub(crate) classes: SmallVec<[String; 4]>,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}

impl NodeData {
    fn new(tag: String, parent: Option<NodeId>) -> Self {
        Self {
            tag,
            ident: None,
            attributes: IndexMap::new(),
            classes: SmallVec::new(),
            parent,
            children: Vec::new(),
        }
    }
}

/// Generic tree of one rendered plot document.
///
/// The tree is built by whatever ingests the externally rendered plot and is
/// independent of any graphics/DOM library. Nodes carry a tag name, an
/// optional identifier, an ordered attribute map, and an ordered class list.
/// This crate only annotates nodes; it never creates or destroys them after
/// ingestion.
#[derive(Debug, Clone)]
pub struct PlotDocument {
    nodes: Vec<NodeData>,
}

impl PlotDocument {
    /// Creates a document holding only a root node with the given tag.
    #[must_use]
    pub fn new(root_tag: impl Into<String>) -> Self {
        Self {
            nodes: vec![NodeData::new(root_tag.into(), None)],
        }
    }

    #[must_use]
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Appends a new child node under `parent` and returns its handle.
    pub fn append_child(&mut self, parent: NodeId, tag: impl Into<String>) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(NodeData::new(tag.into(), Some(parent)));
        self.nodes[parent.index()].children.push(id);
        id
    }

    /// Appends a new `g` child carrying the given identifier.
    pub fn append_group(&mut self, parent: NodeId, ident: impl Into<String>) -> NodeId {
        let id = self.append_child(parent, crate::core::convention::GROUP_TAG);
        self.set_ident(id, ident);
        id
    }

    #[must_use]
    pub fn tag(&self, node: NodeId) -> &str {
        &self.nodes[node.index()].tag
    }

    pub fn set_ident(&mut self, node: NodeId, ident: impl Into<String>) {
        self.nodes[node.index()].ident = Some(ident.into());
    }

    #[must_use]
    pub fn ident(&self, node: NodeId) -> Option<&str> {
        self.nodes[node.index()].ident.as_deref()
    }

    #[must_use]
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes[node.index()].parent
    }

    #[must_use]
    pub fn children(&self, node: NodeId) -> &[NodeId] {
        &self.nodes[node.index()].children
    }

    pub fn set_attribute(&mut self, node: NodeId, name: impl Into<String>, value: impl Into<String>) {
        self.nodes[node.index()]
            .attributes
            .insert(name.into(), value.into());
    }

    #[must_use]
    pub fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.nodes[node.index()].attributes.get(name).map(String::as_str)
    }

    /// Adds a class marker; already-present classes are not duplicated.
    pub fn add_class(&mut self, node: NodeId, class: &str) {
        let classes = &mut self.nodes[node.index()].classes;
        if !classes.iter().any(|c| c == class) {
            classes.push(class.to_owned());
        }
    }

    pub fn remove_class(&mut self, node: NodeId, class: &str) {
        self.nodes[node.index()].classes.retain(|c| c != class);
    }

    #[must_use]
    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.nodes[node.index()].classes.iter().any(|c| c == class)
    }

    #[must_use]
    pub fn classes(&self, node: NodeId) -> &[String] {
        &self.nodes[node.index()].classes
    }

    /// Preorder depth-first iterator over the strict descendants of `node`.
    ///
    /// This order is the indexing contract between classification results and
    /// caller-supplied group/label arrays.
    #[must_use]
    pub fn descendants(&self, node: NodeId) -> Descendants<'_> {
        Descendants::new(self, node)
    }

    /// Iterator over the strict ancestors of `node`, nearest first.
    #[must_use]
    pub fn ancestors(&self, node: NodeId) -> Ancestors<'_> {
        Ancestors::new(self, node)
    }

    /// All nodes carrying the given identifier, in document order.
    #[must_use]
    pub fn nodes_with_ident(&self, ident: &str) -> Vec<NodeId> {
        std::iter::once(self.root())
            .chain(self.descendants(self.root()))
            .filter(|&node| self.ident(node) == Some(ident))
            .collect()
    }
}
