use crate::element::{Element, NodeId};

/// Chain of elements from `root` down to `node`, both included.
/// Returns None if `node` is not in the tree.
pub fn path_to(root: &Element, node: NodeId) -> Option<Vec<&Element>> {
    let mut path = Vec::new();
    if path_to_element(root, node, &mut path) {
        Some(path)
    } else {
        None
    }
}

fn path_to_element<'a>(element: &'a Element, node: NodeId, path: &mut Vec<&'a Element>) -> bool {
    path.push(element);

    if element.node_id == node {
        return true;
    }

    for child in element.child_elements() {
        if path_to_element(child, node, path) {
            return true;
        }
    }

    path.pop();
    false
}

/// Find the nearest element, starting at `node` itself and walking up
/// through its ancestors, that satisfies `predicate`.
pub fn closest<'a, F>(root: &'a Element, node: NodeId, predicate: F) -> Option<&'a Element>
where
    F: Fn(&Element) -> bool,
{
    path_to(root, node)?
        .into_iter()
        .rev()
        .find(|element| predicate(*element))
}
