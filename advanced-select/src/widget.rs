//! The advanced select widget.
//!
//! An `AdvancedSelect` is a handle holding the resolved configuration. All
//! visible state lives in the page: the widget root is found again by its
//! `data-bs-overrides` attribute and the selection is re-read from the
//! native control on every render, so the overlay cannot drift from it.
//!
//! # Example
//!
//! ```
//! use advanced_select::prelude::*;
//!
//! let select = Element::select()
//!     .id("fruit")
//!     .attr("multiple", "")
//!     .child(Element::option("apple", "Apple"))
//!     .child(Element::option("pear", "Pear"));
//! let control = select.node_id;
//! let mut doc = Document::with_children([select]);
//!
//! let widget = AdvancedSelect::attach(&mut doc, control, &ConfigOverrides::new()).unwrap();
//! widget.select(&mut doc, "pear", "Pear").unwrap();
//! assert_eq!(widget.toggle(&doc).unwrap().text_content(), "Pear");
//! ```

use log::{debug, trace};
use pagedom::event::MouseButton;
use pagedom::{Document, Element, Event, NodeId, get_or_create_id, visibility};

use crate::components::{
    self, CHIP_REMOVE_CLASS, MENU_CLASS, MENU_ITEM_CLASS, REMOVE_ATTRIBUTE, SHOW_CLASS,
    TOGGLE_CLASS,
};
use crate::config::{ConfigOverrides, Configuration, ControlAttributes, resolve_configuration};
use crate::error::SelectError;
use crate::selection::{self, Item, SelectionChange};

/// Result of a widget handling an event.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EventResult {
    /// Event was not for this widget.
    #[default]
    Ignored,
    /// The menu was opened or closed.
    Toggled { open: bool },
    /// A menu row was clicked and its item selected.
    Selected { value: String },
    /// A chip's removal affordance was clicked.
    Deselected { value: String },
}

impl EventResult {
    /// Check if the event was handled (not Ignored).
    pub fn is_handled(&self) -> bool {
        !matches!(self, EventResult::Ignored)
    }
}

/// What a click inside the widget asks for.
enum ClickAction {
    Toggle,
    Select { value: String, text: String },
    Deselect { value: String },
}

/// A dropdown overlay bound to one native `<select>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvancedSelect {
    config: Configuration,
}

impl AdvancedSelect {
    /// Build the widget for `control` and insert it just before the control,
    /// which is then hidden.
    ///
    /// Assigns the control an id if it has none. Fails if the node is not a
    /// `<select>` or already has a widget.
    pub fn attach(
        doc: &mut Document,
        control: NodeId,
        overrides: &ConfigOverrides,
    ) -> Result<Self, SelectError> {
        let element = doc.require(control)?;
        if !element.is("select") {
            return Err(SelectError::NotASelect {
                control_id: element
                    .dom_id()
                    .map(str::to_string)
                    .unwrap_or_else(|| control.to_string()),
                tag: element.tag.clone(),
            });
        }

        let control_id = get_or_create_id(doc, control)?;
        let attributes = ControlAttributes::read(doc.require(control)?);
        let config = resolve_configuration(&attributes, overrides);

        if doc
            .find_first(|el| components::is_root_for(el, &control_id))
            .is_some()
        {
            return Err(SelectError::AlreadyAttached { control_id });
        }

        let root = components::dropdown_root(&config)
            .child(components::select_button(&config))
            .child(components::select_menu());
        doc.insert_before(control, root)?;
        visibility::hide(doc.require_mut(control)?);

        let widget = Self { config };
        widget.render(doc)?;

        debug!(
            "attached advanced select to '{}' (multiple={})",
            widget.config.control_id, widget.config.multiple
        );
        Ok(widget)
    }

    /// Like [`AdvancedSelect::attach`], finding the control by its DOM id.
    pub fn attach_by_id(
        doc: &mut Document,
        control_id: &str,
        overrides: &ConfigOverrides,
    ) -> Result<Self, SelectError> {
        let control = doc
            .get_element_by_id(control_id)
            .map(|el| el.node_id)
            .ok_or_else(|| SelectError::ControlNotFound {
                control_id: control_id.to_string(),
            })?;
        Self::attach(doc, control, overrides)
    }

    pub fn configuration(&self) -> &Configuration {
        &self.config
    }

    pub fn control_id(&self) -> &str {
        &self.config.control_id
    }

    // Page lookups

    /// The widget root element.
    pub fn root<'a>(&self, doc: &'a Document) -> Result<&'a Element, SelectError> {
        doc.find_first(|el| components::is_root_for(el, &self.config.control_id))
            .ok_or_else(|| self.widget_not_found())
    }

    /// The toggle button.
    pub fn toggle<'a>(&self, doc: &'a Document) -> Result<&'a Element, SelectError> {
        self.part(doc, TOGGLE_CLASS)
    }

    /// The menu container.
    pub fn menu<'a>(&self, doc: &'a Document) -> Result<&'a Element, SelectError> {
        self.part(doc, MENU_CLASS)
    }

    fn part<'a>(&self, doc: &'a Document, class: &str) -> Result<&'a Element, SelectError> {
        self.root(doc)?
            .child_elements()
            .iter()
            .find(|el| el.has_class(class))
            .ok_or_else(|| self.widget_not_found())
    }

    fn part_mut<'a>(
        &self,
        doc: &'a mut Document,
        class: &str,
    ) -> Result<&'a mut Element, SelectError> {
        let node = self.part(doc, class)?.node_id;
        Ok(doc.require_mut(node)?)
    }

    fn widget_not_found(&self) -> SelectError {
        SelectError::WidgetNotFound {
            control_id: self.config.control_id.clone(),
        }
    }

    // Selection

    pub fn items(&self, doc: &Document) -> Result<Vec<Item>, SelectError> {
        selection::list_items(doc, &self.config.control_id)
    }

    pub fn selected_items(&self, doc: &Document) -> Result<Vec<Item>, SelectError> {
        selection::list_selected_items(doc, &self.config.control_id)
    }

    /// Select an item and re-render. The menu is rebuilt too, since the
    /// value may have been appended as a new option.
    pub fn select(
        &self,
        doc: &mut Document,
        value: &str,
        text: &str,
    ) -> Result<SelectionChange, SelectError> {
        let change = selection::select_item(doc, &self.config, value, text)?;
        self.render(doc)?;
        Ok(change)
    }

    /// Deselect an item and re-render the toggle.
    pub fn deselect(&self, doc: &mut Document, value: &str) -> Result<bool, SelectError> {
        let changed = selection::deselect_item(doc, &self.config.control_id, value)?;
        self.update_toggle(doc)?;
        Ok(changed)
    }

    // Rendering

    /// Rebuild the menu rows and the toggle from the control's current state.
    pub fn render(&self, doc: &mut Document) -> Result<(), SelectError> {
        let items = self.items(doc)?;

        let menu = self.part_mut(doc, MENU_CLASS)?;
        menu.clear_children();
        for item in &items {
            menu.append_child(components::menu_item(item));
        }
        trace!(
            "rendered {} menu rows for '{}'",
            items.len(),
            self.config.control_id
        );

        self.update_toggle(doc)
    }

    /// Redraw the toggle: the prompt when nothing is selected, the selected
    /// item's text for single select, or one chip per selected item.
    pub fn update_toggle(&self, doc: &mut Document) -> Result<(), SelectError> {
        let selected = self.selected_items(doc)?;
        let multiple = self.config.multiple;

        let toggle = self.part_mut(doc, TOGGLE_CLASS)?;
        toggle.clear_children();

        match selected.first() {
            None => toggle.set_text(self.config.prompt_text.as_str()),
            Some(item) if !multiple => toggle.set_text(item.text.as_str()),
            Some(_) => {
                for item in &selected {
                    toggle.append_child(components::selected_item_chip(&item.value, &item.text));
                }
            }
        }

        trace!(
            "updated toggle for '{}' with {} selected",
            self.config.control_id,
            selected.len()
        );
        Ok(())
    }

    // Open state

    /// Whether the menu is shown.
    pub fn is_open(&self, doc: &Document) -> Result<bool, SelectError> {
        Ok(self.menu(doc)?.has_class(SHOW_CLASS))
    }

    /// Show or hide the menu.
    pub fn set_open(&self, doc: &mut Document, open: bool) -> Result<(), SelectError> {
        for class in [TOGGLE_CLASS, MENU_CLASS] {
            let part = self.part_mut(doc, class)?;
            if open {
                part.add_class(SHOW_CLASS);
            } else {
                part.remove_class(SHOW_CLASS);
            }
        }
        Ok(())
    }

    // Events

    /// Handle an event if its target lies inside this widget.
    ///
    /// The owning widget is found from the target's position in the page, so
    /// several widgets can share a page and each only reacts to clicks on
    /// its own root.
    pub fn handle_event(
        &self,
        doc: &mut Document,
        event: &Event,
    ) -> Result<EventResult, SelectError> {
        let Event::Click { target, button } = *event;
        if button != MouseButton::Left {
            return Ok(EventResult::Ignored);
        }

        let Some(action) = self.resolve_click(doc, target) else {
            return Ok(EventResult::Ignored);
        };

        match action {
            ClickAction::Toggle => {
                let open = !self.is_open(doc)?;
                self.set_open(doc, open)?;
                debug!("toggled '{}' open={}", self.config.control_id, open);
                Ok(EventResult::Toggled { open })
            }
            ClickAction::Select { value, text } => {
                selection::select_item(doc, &self.config, &value, &text)?;
                if !self.config.multiple {
                    self.set_open(doc, false)?;
                }
                self.update_toggle(doc)?;
                debug!("clicked row '{}' in '{}'", value, self.config.control_id);
                Ok(EventResult::Selected { value })
            }
            ClickAction::Deselect { value } => {
                selection::deselect_item(doc, &self.config.control_id, &value)?;
                self.update_toggle(doc)?;
                debug!("removed chip '{}' in '{}'", value, self.config.control_id);
                Ok(EventResult::Deselected { value })
            }
        }
    }

    /// Work out what a click on `target` means for this widget, if anything.
    fn resolve_click(&self, doc: &Document, target: NodeId) -> Option<ClickAction> {
        let path = doc.path_to(target)?;

        // Nearest enclosing widget root decides ownership
        let root_index = path.iter().rposition(|el| components::is_root(el))?;
        if !components::is_root_for(path[root_index], &self.config.control_id) {
            return None;
        }

        path[root_index + 1..].iter().rev().find_map(|el| {
            if el.has_class(CHIP_REMOVE_CLASS) {
                let value = el.attribute(REMOVE_ATTRIBUTE)?;
                Some(ClickAction::Deselect {
                    value: value.to_string(),
                })
            } else if el.has_class(MENU_ITEM_CLASS) {
                let text = el.text_content();
                let value = el
                    .attribute("value")
                    .map(str::to_string)
                    .unwrap_or_else(|| text.clone());
                Some(ClickAction::Select { value, text })
            } else if el.has_class(TOGGLE_CLASS) {
                Some(ClickAction::Toggle)
            } else {
                None
            }
        })
    }
}

/// Route an event to the first widget that handles it.
pub fn dispatch(
    doc: &mut Document,
    widgets: &[AdvancedSelect],
    event: &Event,
) -> Result<EventResult, SelectError> {
    for widget in widgets {
        let result = widget.handle_event(doc, event)?;
        if result.is_handled() {
            return Ok(result);
        }
    }
    trace!("event {:?} not handled by any widget", event);
    Ok(EventResult::Ignored)
}
