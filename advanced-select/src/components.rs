//! Element builders for the widget's parts, using Bootstrap 5 classes.
//!
//! ```text
//! div.dropdown[data-bs-overrides=<control id>]
//! ├── button.form-select.text-start[data-bs-toggle=dropdown]   (toggle)
//! │   └── div.btn.btn-secondary.btn-sm[value]                  (chip, multiple only)
//! │       ├── span                                             (label)
//! │       └── span.btn-close[data-bs-remove]                   (removal)
//! └── div.dropdown-menu.w-100                                  (menu)
//!     └── button.dropdown-item[value]                          (row)
//! ```

use pagedom::Element;

use crate::config::Configuration;
use crate::selection::Item;

/// Attribute on the widget root naming the native control it overrides.
pub const OVERRIDES_ATTRIBUTE: &str = "data-bs-overrides";
/// Attribute on a chip's removal affordance naming the value it removes.
pub const REMOVE_ATTRIBUTE: &str = "data-bs-remove";
/// Class Bootstrap uses to mark an open dropdown.
pub const SHOW_CLASS: &str = "show";

pub const ROOT_CLASS: &str = "dropdown";
pub const TOGGLE_CLASS: &str = "form-select";
pub const CHIP_CLASS: &str = "btn-secondary";
pub const CHIP_REMOVE_CLASS: &str = "btn-close";
pub const MENU_CLASS: &str = "dropdown-menu";
pub const MENU_ITEM_CLASS: &str = "dropdown-item";

/// Outer container tying the widget to its control.
pub fn dropdown_root(config: &Configuration) -> Element {
    Element::div()
        .class(ROOT_CLASS)
        .attr(OVERRIDES_ATTRIBUTE, config.control_id.as_str())
}

/// The toggle button, showing the prompt until the first render.
pub fn select_button(config: &Configuration) -> Element {
    Element::button()
        .class("form-select text-start")
        .attr("data-bs-toggle", "dropdown")
        .text(config.prompt_text.as_str())
}

/// A removable chip for one selected item.
pub fn selected_item_chip(value: &str, text: &str) -> Element {
    Element::div()
        .class("btn btn-secondary btn-sm")
        .attr("value", value)
        .child(Element::span().text(text))
        .child(
            Element::span()
                .class(CHIP_REMOVE_CLASS)
                .attr(REMOVE_ATTRIBUTE, value),
        )
}

/// The (initially closed) menu container.
pub fn select_menu() -> Element {
    Element::div().class("dropdown-menu w-100")
}

/// One clickable menu row.
pub fn menu_item(item: &Item) -> Element {
    Element::button()
        .class(MENU_ITEM_CLASS)
        .attr("value", item.value.as_str())
        .text(item.text.as_str())
}

/// Whether `element` is the widget root for `control_id`.
pub fn is_root_for(element: &Element, control_id: &str) -> bool {
    element.has_class(ROOT_CLASS) && element.attribute(OVERRIDES_ATTRIBUTE) == Some(control_id)
}

/// Whether `element` is any widget root.
pub fn is_root(element: &Element) -> bool {
    element.has_class(ROOT_CLASS) && element.has_attribute(OVERRIDES_ATTRIBUTE)
}
