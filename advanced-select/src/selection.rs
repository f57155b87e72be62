//! Reading and writing the native control's selection.
//!
//! Every function here looks the control up by id on each call and works
//! directly on its `<option>` children; nothing is cached between calls.
//! An option is selected when it carries the `selected` attribute.

use log::{debug, trace};
use pagedom::{Document, Element};

use crate::config::Configuration;
use crate::error::SelectError;

/// Attribute marking an option as selected.
pub const SELECTED_ATTRIBUTE: &str = "selected";

/// One option of the native control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub value: String,
    pub text: String,
    pub selected: bool,
}

impl Item {
    /// Snapshot an `<option>` element.
    ///
    /// An option without a `value` attribute uses its text as value.
    pub fn from_option(option: &Element) -> Self {
        let text = option.text_content();
        let value = option
            .attribute("value")
            .map(str::to_string)
            .unwrap_or_else(|| text.clone());
        Self {
            value,
            text,
            selected: option.has_attribute(SELECTED_ATTRIBUTE),
        }
    }
}

/// What a call to [`select_item`] changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionChange {
    /// Value that became selected, if it was not already.
    pub added: Option<String>,
    /// Whether a new option had to be appended for the value.
    pub appended: bool,
    /// Values deselected to keep a single-select control exclusive.
    pub removed: Vec<String>,
}

impl SelectionChange {
    /// Check if nothing changed.
    pub fn is_empty(&self) -> bool {
        self.added.is_none() && !self.appended && self.removed.is_empty()
    }
}

fn control<'a>(doc: &'a Document, control_id: &str) -> Result<&'a Element, SelectError> {
    let control = doc
        .get_element_by_id(control_id)
        .ok_or_else(|| SelectError::ControlNotFound {
            control_id: control_id.to_string(),
        })?;
    ensure_select(control, control_id)?;
    Ok(control)
}

fn control_mut<'a>(
    doc: &'a mut Document,
    control_id: &str,
) -> Result<&'a mut Element, SelectError> {
    let control = doc
        .get_element_by_id_mut(control_id)
        .ok_or_else(|| SelectError::ControlNotFound {
            control_id: control_id.to_string(),
        })?;
    ensure_select(control, control_id)?;
    Ok(control)
}

fn ensure_select(control: &Element, control_id: &str) -> Result<(), SelectError> {
    if control.is("select") {
        Ok(())
    } else {
        Err(SelectError::NotASelect {
            control_id: control_id.to_string(),
            tag: control.tag.clone(),
        })
    }
}

fn options(control: &Element) -> impl Iterator<Item = &Element> {
    control.child_elements().iter().filter(|el| el.is("option"))
}

fn option_value(option: &Element) -> String {
    option
        .attribute("value")
        .map(str::to_string)
        .unwrap_or_else(|| option.text_content())
}

/// Every option of the control, in document order.
pub fn list_items(doc: &Document, control_id: &str) -> Result<Vec<Item>, SelectError> {
    Ok(options(control(doc, control_id)?)
        .map(Item::from_option)
        .collect())
}

/// The selected options of the control, in document order.
pub fn list_selected_items(doc: &Document, control_id: &str) -> Result<Vec<Item>, SelectError> {
    Ok(list_items(doc, control_id)?
        .into_iter()
        .filter(|item| item.selected)
        .collect())
}

/// Select the option with `value`.
///
/// For a single-select configuration every other selected option is
/// deselected first. If no option has `value`, one is appended at the end
/// with `text` as its label. Selecting an already-selected option changes
/// nothing.
pub fn select_item(
    doc: &mut Document,
    config: &Configuration,
    value: &str,
    text: &str,
) -> Result<SelectionChange, SelectError> {
    let control = control_mut(doc, &config.control_id)?;
    let mut change = SelectionChange::default();

    let existing = control
        .child_elements()
        .iter()
        .position(|el| el.is("option") && option_value(el) == value);

    if !config.multiple {
        for (index, option) in control.child_elements_mut().iter_mut().enumerate() {
            if Some(index) == existing || !option.is("option") {
                continue;
            }
            if option.remove_attribute(SELECTED_ATTRIBUTE) {
                let removed = option_value(option);
                if removed != value {
                    change.removed.push(removed);
                }
            }
        }
    }

    match existing.and_then(|index| control.child_elements_mut().get_mut(index)) {
        Some(option) => {
            if !option.has_attribute(SELECTED_ATTRIBUTE) {
                option.set_attribute(SELECTED_ATTRIBUTE, "");
                change.added = Some(value.to_string());
            }
        }
        None => {
            trace!("appending option value={:?} text={:?}", value, text);
            control.append_child(Element::option(value, text).attr(SELECTED_ATTRIBUTE, ""));
            change.added = Some(value.to_string());
            change.appended = true;
        }
    }

    debug!(
        "select_item control_id={} value={:?} change={:?}",
        config.control_id, value, change
    );
    Ok(change)
}

/// Clear the selection of the option with `value`.
///
/// Returns whether an option was deselected. A value with no matching
/// option is not an error.
pub fn deselect_item(
    doc: &mut Document,
    control_id: &str,
    value: &str,
) -> Result<bool, SelectError> {
    let control = control_mut(doc, control_id)?;

    let changed = control
        .child_elements_mut()
        .iter_mut()
        .filter(|el| el.is("option") && option_value(el) == value)
        .fold(false, |changed, option| {
            option.remove_attribute(SELECTED_ATTRIBUTE) || changed
        });

    debug!(
        "deselect_item control_id={} value={:?} changed={}",
        control_id, value, changed
    );
    Ok(changed)
}
