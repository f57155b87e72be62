//! The page: a single owned element tree rooted at `<body>`.

use log::trace;

use crate::element::{self, Element, NodeId};
use crate::error::DomError;
use crate::path;

/// An in-memory page.
///
/// The document owns every element. Elements are addressed either by DOM id
/// (`get_element_by_id`) or by node handle (`node`). A cloned document gets
/// fresh node handles, so handles taken from the original do not resolve in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub body: Element,
}

impl Default for Document {
    fn default() -> Self {
        Self::new(Element::body())
    }
}

impl Document {
    pub fn new(body: Element) -> Self {
        Self { body }
    }

    /// Build a document whose body holds `children`.
    pub fn with_children(children: impl IntoIterator<Item = Element>) -> Self {
        Self::new(Element::body().children(children))
    }

    // Lookup

    pub fn get_element_by_id(&self, id: &str) -> Option<&Element> {
        if id.is_empty() {
            return None;
        }
        element::find_element(&self.body, id)
    }

    pub fn get_element_by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        if id.is_empty() {
            return None;
        }
        element::find_element_mut(&mut self.body, id)
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.get_element_by_id(id).is_some()
    }

    pub fn node(&self, node: NodeId) -> Option<&Element> {
        element::find_node(&self.body, node)
    }

    pub fn node_mut(&mut self, node: NodeId) -> Option<&mut Element> {
        element::find_node_mut(&mut self.body, node)
    }

    /// Like [`Document::node`], but a missing node is an error.
    pub fn require(&self, node: NodeId) -> Result<&Element, DomError> {
        self.node(node).ok_or(DomError::NodeNotFound(node))
    }

    /// Like [`Document::node_mut`], but a missing node is an error.
    pub fn require_mut(&mut self, node: NodeId) -> Result<&mut Element, DomError> {
        self.node_mut(node).ok_or(DomError::NodeNotFound(node))
    }

    /// First element in document order matching `predicate`.
    pub fn find_first<F>(&self, predicate: F) -> Option<&Element>
    where
        F: Fn(&Element) -> bool,
    {
        self.find_all(predicate).into_iter().next()
    }

    /// Every element in document order matching `predicate`.
    pub fn find_all<F>(&self, predicate: F) -> Vec<&Element>
    where
        F: Fn(&Element) -> bool,
    {
        let mut found = Vec::new();
        element::collect_matching(&self.body, &predicate, &mut found);
        found
    }

    // Structure

    /// Elements from the body down to `node`, both included.
    pub fn path_to(&self, node: NodeId) -> Option<Vec<&Element>> {
        path::path_to(&self.body, node)
    }

    /// Nearest ancestor-or-self of `node` satisfying `predicate`.
    pub fn closest<F>(&self, node: NodeId, predicate: F) -> Option<&Element>
    where
        F: Fn(&Element) -> bool,
    {
        path::closest(&self.body, node, predicate)
    }

    pub fn parent_of(&self, node: NodeId) -> Option<&Element> {
        let path = self.path_to(node)?;
        let parent = path.len().checked_sub(2)?;
        path.get(parent).copied()
    }

    /// Insert `element` immediately before `reference` in its parent.
    /// Returns the inserted element's handle.
    pub fn insert_before(
        &mut self,
        reference: NodeId,
        element: Element,
    ) -> Result<NodeId, DomError> {
        let parent = self
            .parent_of(reference)
            .map(|parent| parent.node_id)
            .ok_or_else(|| match self.node(reference) {
                Some(_) => DomError::NoParent(reference),
                None => DomError::NodeNotFound(reference),
            })?;

        let inserted = element.node_id;
        let parent = self.require_mut(parent)?;
        let index = parent
            .child_elements()
            .iter()
            .position(|child| child.node_id == reference)
            .ok_or(DomError::NodeNotFound(reference))?;
        parent.insert_child(index, element);

        trace!("inserted {} before {} at index {}", inserted, reference, index);
        Ok(inserted)
    }

    /// Append `element` as the last child of `parent`.
    pub fn append_to(&mut self, parent: NodeId, element: Element) -> Result<NodeId, DomError> {
        let inserted = element.node_id;
        self.require_mut(parent)?.append_child(element);
        Ok(inserted)
    }
}
