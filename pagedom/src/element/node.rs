use std::collections::BTreeMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use super::Content;

const ID_ATTRIBUTE: &str = "id";

static NEXT_NODE: AtomicU64 = AtomicU64::new(0);

/// Process-unique handle for an element.
///
/// Every element gets one on construction, independent of its DOM `id`
/// attribute. Events target node handles, not DOM ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u64);

impl NodeId {
    fn next() -> Self {
        Self(NEXT_NODE.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node-{}", self.0)
    }
}

/// A page element.
///
/// Cloning gives the copy and all of its descendants fresh node handles, so
/// a clone can be inserted next to its original without sharing identity.
#[derive(Debug, PartialEq, Eq)]
pub struct Element {
    // Identity
    pub node_id: NodeId,
    pub tag: String,
    /// DOM identifier. `None` and `Some("")` both mean "no id".
    pub id: Option<String>,

    // Classification
    pub classes: Vec<String>,
    pub attributes: BTreeMap<String, String>,

    // Content
    pub content: Content,
}

impl Clone for Element {
    fn clone(&self) -> Self {
        Self {
            node_id: NodeId::next(),
            tag: self.tag.clone(),
            id: self.id.clone(),
            classes: self.classes.clone(),
            attributes: self.attributes.clone(),
            content: self.content.clone(),
        }
    }
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            node_id: NodeId::next(),
            tag: tag.into().to_ascii_lowercase(),
            id: None,
            classes: Vec::new(),
            attributes: BTreeMap::new(),
            content: Content::None,
        }
    }

    pub fn body() -> Self {
        Self::new("body")
    }

    pub fn div() -> Self {
        Self::new("div")
    }

    pub fn span() -> Self {
        Self::new("span")
    }

    pub fn button() -> Self {
        Self::new("button")
    }

    pub fn select() -> Self {
        Self::new("select")
    }

    /// Create an `<option>` carrying a `value` attribute and display text.
    pub fn option(value: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new("option").attr("value", value).text(text)
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// The DOM id, if one is set and non-empty.
    pub fn dom_id(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.is_empty())
    }

    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = Some(id.into());
    }

    pub fn is(&self, tag: &str) -> bool {
        self.tag.eq_ignore_ascii_case(tag)
    }

    // Classes
    /// Add one or more whitespace-separated classes.
    pub fn class(mut self, classes: &str) -> Self {
        for class in classes.split_whitespace() {
            self.add_class(class);
        }
        self
    }

    /// Append a class unless it is already present.
    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    /// Remove a class. Returns whether it was present.
    pub fn remove_class(&mut self, class: &str) -> bool {
        let before = self.classes.len();
        self.classes.retain(|c| c != class);
        self.classes.len() != before
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// The `class` attribute value as the browser would report it.
    pub fn class_name(&self) -> String {
        self.classes.join(" ")
    }

    // Attributes
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    /// Set an attribute. `id` is stored as the element's DOM id.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        if name == ID_ATTRIBUTE {
            self.set_id(value);
        } else {
            self.attributes.insert(name, value.into());
        }
    }

    /// Remove an attribute. Returns whether it was present.
    pub fn remove_attribute(&mut self, name: &str) -> bool {
        if name == ID_ATTRIBUTE {
            return self.id.take().is_some();
        }
        self.attributes.remove(name).is_some()
    }

    /// Attribute value. An attribute set to `""` is present and returns `Some("")`.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        if name == ID_ATTRIBUTE {
            return self.id.as_deref();
        }
        self.attributes.get(name).map(String::as_str)
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }

    // Content
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.set_text(text);
        self
    }

    /// Replace all content with a text node.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.content = Content::Text(text.into());
    }

    pub fn child(mut self, child: Element) -> Self {
        self.append_child(child);
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        for child in new_children {
            self.append_child(child);
        }
        self
    }

    /// Append a child element. Text content, if any, is replaced.
    pub fn append_child(&mut self, child: Element) {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
    }

    /// Insert a child at `index`, clamped to the number of children.
    pub fn insert_child(&mut self, index: usize, child: Element) {
        match &mut self.content {
            Content::Children(children) => {
                let index = index.min(children.len());
                children.insert(index, child);
            }
            _ => self.content = Content::Children(vec![child]),
        }
    }

    pub fn clear_children(&mut self) {
        self.content = Content::None;
    }

    pub fn child_elements(&self) -> &[Element] {
        match &self.content {
            Content::Children(children) => children,
            _ => &[],
        }
    }

    pub fn child_elements_mut(&mut self) -> &mut [Element] {
        match &mut self.content {
            Content::Children(children) => children,
            _ => &mut [],
        }
    }

    /// Concatenated text of this element and all descendants.
    pub fn text_content(&self) -> String {
        match &self.content {
            Content::None => String::new(),
            Content::Text(text) => text.clone(),
            Content::Children(children) => children.iter().map(Element::text_content).collect(),
        }
    }
}
