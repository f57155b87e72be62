//! Hiding elements through their class list.

use crate::element::Element;

/// Class that hides an element (Bootstrap's display utility).
pub const HIDDEN_CLASS: &str = "d-none";

/// Hide an element by appending the hidden class. Existing classes are kept.
pub fn hide(element: &mut Element) {
    element.add_class(HIDDEN_CLASS);
}

/// Undo [`hide`]. Returns whether the element was hidden.
pub fn show(element: &mut Element) -> bool {
    element.remove_class(HIDDEN_CLASS)
}

pub fn is_hidden(element: &Element) -> bool {
    element.has_class(HIDDEN_CLASS)
}
