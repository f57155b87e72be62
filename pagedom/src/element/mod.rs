mod content;
mod node;

pub use content::Content;
pub use node::{Element, NodeId};

/// Find an element by its DOM id in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id.as_deref() == Some(id) {
        return Some(root);
    }

    if let Content::Children(children) = &root.content {
        for child in children {
            if let Some(found) = find_element(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Find an element by its DOM id, mutably.
pub fn find_element_mut<'a>(root: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    if root.id.as_deref() == Some(id) {
        return Some(root);
    }

    if let Content::Children(children) = &mut root.content {
        for child in children {
            if let Some(found) = find_element_mut(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Find an element by node handle.
pub fn find_node(root: &Element, node: NodeId) -> Option<&Element> {
    if root.node_id == node {
        return Some(root);
    }

    root.child_elements()
        .iter()
        .find_map(|child| find_node(child, node))
}

/// Find an element by node handle, mutably.
pub fn find_node_mut(root: &mut Element, node: NodeId) -> Option<&mut Element> {
    if root.node_id == node {
        return Some(root);
    }

    if let Content::Children(children) = &mut root.content {
        for child in children {
            if let Some(found) = find_node_mut(child, node) {
                return Some(found);
            }
        }
    }

    None
}

/// Collect every element matching `predicate`, in document order.
pub fn collect_matching<'a, F>(root: &'a Element, predicate: &F, out: &mut Vec<&'a Element>)
where
    F: Fn(&Element) -> bool,
{
    if predicate(root) {
        out.push(root);
    }
    for child in root.child_elements() {
        collect_matching(child, predicate, out);
    }
}
