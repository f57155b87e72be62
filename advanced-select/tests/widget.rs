use advanced_select::prelude::*;
use advanced_select::SelectionChange;
use pagedom::event::MouseButton;
use pagedom::visibility::is_hidden;

fn select(id: &str, multiple: bool, options: Vec<Element>) -> Element {
    let select = Element::select().id(id).children(options);
    if multiple {
        select.attr("multiple", "")
    } else {
        select
    }
}

fn selected(value: &str, text: &str) -> Element {
    Element::option(value, text).attr("selected", "")
}

fn attach(doc: &mut Document, id: &str) -> AdvancedSelect {
    AdvancedSelect::attach_by_id(doc, id, &ConfigOverrides::new()).unwrap()
}

/// Node handle of the menu row with `value`.
fn menu_row(doc: &Document, widget: &AdvancedSelect, value: &str) -> NodeId {
    widget
        .menu(doc)
        .unwrap()
        .child_elements()
        .iter()
        .find(|el| el.attribute("value") == Some(value))
        .unwrap()
        .node_id
}

/// Node handle of the removal affordance on the chip for `value`.
fn chip_close(doc: &Document, widget: &AdvancedSelect, value: &str) -> NodeId {
    widget
        .toggle(doc)
        .unwrap()
        .child_elements()
        .iter()
        .find(|chip| chip.attribute("value") == Some(value))
        .and_then(|chip| chip.child_elements().iter().find(|el| el.has_class("btn-close")))
        .unwrap()
        .node_id
}

fn selected_values(doc: &Document, widget: &AdvancedSelect) -> Vec<String> {
    widget
        .selected_items(doc)
        .unwrap()
        .into_iter()
        .map(|item| item.value)
        .collect()
}

// ============================================================================
// Attaching
// ============================================================================

#[test]
fn test_attach_inserts_root_immediately_before_control() {
    let mut doc = Document::with_children([
        Element::div().id("before"),
        select("arbitraryId", false, vec![Element::option("1", "Option 1")]),
    ]);

    attach(&mut doc, "arbitraryId");

    let children = doc.body.child_elements();
    assert_eq!(children.len(), 3);
    assert_eq!(children[0].dom_id(), Some("before"));
    assert!(children[1].has_class("dropdown"));
    assert_eq!(children[1].attribute("data-bs-overrides"), Some("arbitraryId"));
    assert_eq!(children[2].dom_id(), Some("arbitraryId"));
}

#[test]
fn test_attach_hides_control_keeping_classes() {
    let mut doc = Document::with_children([select("arbitraryId", false, vec![]).class("custom")]);

    attach(&mut doc, "arbitraryId");

    let control = doc.get_element_by_id("arbitraryId").unwrap();
    assert!(control.has_class("custom"));
    assert!(is_hidden(control));
}

#[test]
fn test_attach_assigns_id_to_anonymous_control() {
    let control = Element::select().child(Element::option("1", "Option 1"));
    let node = control.node_id;
    let mut doc = Document::with_children([control]);

    let widget = AdvancedSelect::attach(&mut doc, node, &ConfigOverrides::new()).unwrap();

    let assigned = doc.node(node).unwrap().dom_id().unwrap();
    assert_eq!(widget.control_id(), assigned);
    assert_eq!(
        widget.root(&doc).unwrap().attribute("data-bs-overrides"),
        Some(assigned)
    );
}

#[test]
fn test_attach_resolves_configuration() {
    let mut doc = Document::with_children([
        select("arbitraryId", true, vec![]).attr("data-bs-prompt", "X")
    ]);

    let widget = attach(&mut doc, "arbitraryId");

    assert_eq!(
        widget.configuration(),
        &Configuration {
            control_id: "arbitraryId".to_string(),
            multiple: true,
            prompt_text: "X".to_string(),
        }
    );
}

#[test]
fn test_attach_with_overrides() {
    let mut doc = Document::with_children([
        select("arbitraryId", true, vec![]).attr("data-bs-prompt", "X")
    ]);

    let widget = AdvancedSelect::attach_by_id(
        &mut doc,
        "arbitraryId",
        &ConfigOverrides::new().with_prompt_text("Y"),
    )
    .unwrap();

    assert_eq!(widget.configuration().prompt_text, "Y");
    assert_eq!(widget.toggle(&doc).unwrap().inner_html(), "Y");
}

#[test]
fn test_attach_twice_fails() {
    let mut doc = Document::with_children([select("arbitraryId", false, vec![])]);
    attach(&mut doc, "arbitraryId");

    let err = AdvancedSelect::attach_by_id(&mut doc, "arbitraryId", &ConfigOverrides::new())
        .unwrap_err();

    assert!(matches!(err, SelectError::AlreadyAttached { .. }));
    assert_eq!(doc.find_all(|el| el.has_class("dropdown")).len(), 1);
}

#[test]
fn test_attach_to_non_select_fails() {
    let mut doc = Document::with_children([Element::div().id("arbitraryId")]);

    let err = AdvancedSelect::attach_by_id(&mut doc, "arbitraryId", &ConfigOverrides::new())
        .unwrap_err();

    assert!(matches!(err, SelectError::NotASelect { .. }));
}

#[test]
fn test_attach_to_missing_control_fails() {
    let mut doc = Document::default();

    let err =
        AdvancedSelect::attach_by_id(&mut doc, "missing", &ConfigOverrides::new()).unwrap_err();

    assert!(matches!(err, SelectError::ControlNotFound { .. }));
}

// ============================================================================
// Toggle label
// ============================================================================

#[test]
fn test_toggle_shows_prompt_without_selection() {
    let mut doc = Document::with_children([
        select(
            "arbitraryId",
            false,
            vec![Element::option("1", "Option 1"), Element::option("2", "Option 2")],
        )
        .attr("data-bs-prompt", "arbitrary prompt text"),
    ]);

    let widget = attach(&mut doc, "arbitraryId");

    assert_eq!(
        widget.toggle(&doc).unwrap().inner_html(),
        "arbitrary prompt text"
    );
}

#[test]
fn test_toggle_shows_single_selection_text() {
    let mut doc = Document::with_children([select(
        "arbitraryId",
        false,
        vec![selected("1", "Option 1"), Element::option("2", "Option 2")],
    )]);

    let widget = attach(&mut doc, "arbitraryId");

    assert_eq!(widget.toggle(&doc).unwrap().inner_html(), "Option 1");
}

#[test]
fn test_toggle_shows_one_chip_per_selection() {
    let mut doc = Document::with_children([select(
        "arbitraryId",
        true,
        vec![selected("1", "Option 1"), selected("2", "Option 2")],
    )]);

    let widget = attach(&mut doc, "arbitraryId");

    let toggle = widget.toggle(&doc).unwrap();
    let html = toggle.inner_html();
    assert!(html.contains("Option 1"));
    assert!(html.contains("Option 2"));
    assert_eq!(toggle.child_elements().len(), 2);
    let chip_values: Vec<_> = toggle
        .child_elements()
        .iter()
        .filter_map(|chip| chip.attribute("value"))
        .collect();
    assert_eq!(chip_values, vec!["1", "2"]);
}

#[test]
fn test_multiple_without_selection_shows_prompt() {
    let mut doc = Document::with_children([select(
        "arbitraryId",
        true,
        vec![Element::option("1", "Option 1")],
    )]);

    let widget = attach(&mut doc, "arbitraryId");

    let toggle = widget.toggle(&doc).unwrap();
    assert_eq!(toggle.inner_html(), "Select an item");
    assert!(toggle.child_elements().is_empty());
}

// ============================================================================
// Menu
// ============================================================================

#[test]
fn test_menu_lists_every_item() {
    let mut doc = Document::with_children([select(
        "arbitraryId",
        false,
        vec![
            Element::option("1", "Option 1"),
            selected("2", "Option 2"),
            Element::option("3", "Option 3"),
        ],
    )]);

    let widget = attach(&mut doc, "arbitraryId");

    let rows: Vec<_> = widget
        .menu(&doc)
        .unwrap()
        .child_elements()
        .iter()
        .map(|row| (row.attribute("value").unwrap().to_string(), row.text_content()))
        .collect();
    assert_eq!(
        rows,
        vec![
            ("1".to_string(), "Option 1".to_string()),
            ("2".to_string(), "Option 2".to_string()),
            ("3".to_string(), "Option 3".to_string()),
        ]
    );
}

#[test]
fn test_programmatic_select_of_new_value_adds_menu_row() {
    let mut doc = Document::with_children([select(
        "arbitraryId",
        true,
        vec![selected("1", "A")],
    )]);
    let widget = attach(&mut doc, "arbitraryId");

    let change = widget.select(&mut doc, "3", "C").unwrap();

    assert_eq!(
        change,
        SelectionChange {
            added: Some("3".to_string()),
            appended: true,
            removed: vec![],
        }
    );
    assert_eq!(widget.menu(&doc).unwrap().child_elements().len(), 2);
    assert_eq!(widget.toggle(&doc).unwrap().child_elements().len(), 2);
    assert_eq!(selected_values(&doc, &widget), vec!["1", "3"]);
}

// ============================================================================
// Clicks
// ============================================================================

#[test]
fn test_menu_row_click_selects_and_rerenders() {
    let mut doc = Document::with_children([select(
        "arbitraryId",
        false,
        vec![Element::option("1", "Option 1"), Element::option("2", "Option 2")],
    )]);
    let widget = attach(&mut doc, "arbitraryId");
    let row = menu_row(&doc, &widget, "2");

    let result = widget.handle_event(&mut doc, &Event::click(row)).unwrap();

    assert_eq!(
        result,
        EventResult::Selected {
            value: "2".to_string()
        }
    );
    assert_eq!(selected_values(&doc, &widget), vec!["2"]);
    assert_eq!(widget.toggle(&doc).unwrap().inner_html(), "Option 2");
}

#[test]
fn test_menu_row_click_single_select_replaces_selection() {
    let mut doc = Document::with_children([select(
        "arbitraryId",
        false,
        vec![selected("1", "A"), Element::option("2", "B")],
    )]);
    let widget = attach(&mut doc, "arbitraryId");
    let row = menu_row(&doc, &widget, "2");

    widget.handle_event(&mut doc, &Event::click(row)).unwrap();

    assert_eq!(selected_values(&doc, &widget), vec!["2"]);
    assert_eq!(widget.toggle(&doc).unwrap().inner_html(), "B");
}

#[test]
fn test_menu_row_click_multiple_adds_chip() {
    let mut doc = Document::with_children([select(
        "arbitraryId",
        true,
        vec![Element::option("1", "A"), selected("2", "B")],
    )]);
    let widget = attach(&mut doc, "arbitraryId");
    let row = menu_row(&doc, &widget, "1");

    widget.handle_event(&mut doc, &Event::click(row)).unwrap();

    assert_eq!(selected_values(&doc, &widget), vec!["1", "2"]);
    assert_eq!(widget.toggle(&doc).unwrap().child_elements().len(), 2);
}

#[test]
fn test_chip_removal_click_deselects() {
    let mut doc = Document::with_children([select(
        "arbitraryId",
        true,
        vec![selected("1", "A"), selected("2", "B")],
    )]);
    let widget = attach(&mut doc, "arbitraryId");
    let close = chip_close(&doc, &widget, "1");

    let result = widget.handle_event(&mut doc, &Event::click(close)).unwrap();

    assert_eq!(
        result,
        EventResult::Deselected {
            value: "1".to_string()
        }
    );
    assert_eq!(selected_values(&doc, &widget), vec!["2"]);
    let toggle = widget.toggle(&doc).unwrap();
    assert_eq!(toggle.child_elements().len(), 1);
    assert_eq!(toggle.text_content(), "B");
}

#[test]
fn test_removing_last_chip_restores_prompt() {
    let mut doc = Document::with_children([select("arbitraryId", true, vec![selected("1", "A")])]);
    let widget = attach(&mut doc, "arbitraryId");
    let close = chip_close(&doc, &widget, "1");

    widget.handle_event(&mut doc, &Event::click(close)).unwrap();

    assert_eq!(widget.toggle(&doc).unwrap().inner_html(), "Select an item");
}

#[test]
fn test_toggle_click_opens_and_closes_menu() {
    let mut doc = Document::with_children([select("arbitraryId", false, vec![])]);
    let widget = attach(&mut doc, "arbitraryId");
    let toggle = widget.toggle(&doc).unwrap().node_id;

    let opened = widget.handle_event(&mut doc, &Event::click(toggle)).unwrap();
    assert_eq!(opened, EventResult::Toggled { open: true });
    assert!(widget.is_open(&doc).unwrap());
    assert!(widget.toggle(&doc).unwrap().has_class("show"));

    let closed = widget.handle_event(&mut doc, &Event::click(toggle)).unwrap();
    assert_eq!(closed, EventResult::Toggled { open: false });
    assert!(!widget.is_open(&doc).unwrap());
}

#[test]
fn test_single_select_row_click_closes_menu() {
    let mut doc = Document::with_children([select(
        "arbitraryId",
        false,
        vec![Element::option("1", "A")],
    )]);
    let widget = attach(&mut doc, "arbitraryId");
    widget.set_open(&mut doc, true).unwrap();
    let row = menu_row(&doc, &widget, "1");

    widget.handle_event(&mut doc, &Event::click(row)).unwrap();

    assert!(!widget.is_open(&doc).unwrap());
}

#[test]
fn test_multiple_select_row_click_keeps_menu_open() {
    let mut doc = Document::with_children([select(
        "arbitraryId",
        true,
        vec![Element::option("1", "A")],
    )]);
    let widget = attach(&mut doc, "arbitraryId");
    widget.set_open(&mut doc, true).unwrap();
    let row = menu_row(&doc, &widget, "1");

    widget.handle_event(&mut doc, &Event::click(row)).unwrap();

    assert!(widget.is_open(&doc).unwrap());
}

#[test]
fn test_secondary_button_click_is_ignored() {
    let mut doc = Document::with_children([select(
        "arbitraryId",
        false,
        vec![Element::option("1", "A")],
    )]);
    let widget = attach(&mut doc, "arbitraryId");
    let row = menu_row(&doc, &widget, "1");

    let event = Event::Click {
        target: row,
        button: MouseButton::Right,
    };
    let result = widget.handle_event(&mut doc, &event).unwrap();

    assert_eq!(result, EventResult::Ignored);
    assert!(selected_values(&doc, &widget).is_empty());
}

#[test]
fn test_click_outside_widget_is_ignored() {
    let mut doc = Document::with_children([
        Element::div().id("elsewhere"),
        select("arbitraryId", false, vec![Element::option("1", "A")]),
    ]);
    let widget = attach(&mut doc, "arbitraryId");
    let elsewhere = doc.get_element_by_id("elsewhere").unwrap().node_id;

    let result = widget
        .handle_event(&mut doc, &Event::click(elsewhere))
        .unwrap();

    assert_eq!(result, EventResult::Ignored);
}

// ============================================================================
// Multiple widgets
// ============================================================================

#[test]
fn test_dispatch_routes_to_owning_widget_only() {
    let mut doc = Document::with_children([
        select("fruit", false, vec![Element::option("1", "Apple")]),
        select("colour", false, vec![Element::option("1", "Red")]),
    ]);
    let fruit = attach(&mut doc, "fruit");
    let colour = attach(&mut doc, "colour");
    let widgets = [fruit.clone(), colour.clone()];
    let row = menu_row(&doc, &colour, "1");

    let result = dispatch(&mut doc, &widgets, &Event::click(row)).unwrap();

    assert_eq!(
        result,
        EventResult::Selected {
            value: "1".to_string()
        }
    );
    assert_eq!(selected_values(&doc, &colour), vec!["1"]);
    assert!(selected_values(&doc, &fruit).is_empty());
    assert_eq!(fruit.toggle(&doc).unwrap().inner_html(), "Select an item");
    assert_eq!(colour.toggle(&doc).unwrap().inner_html(), "Red");
}

#[test]
fn test_widget_ignores_clicks_on_other_widget() {
    let mut doc = Document::with_children([
        select("fruit", false, vec![Element::option("1", "Apple")]),
        select("colour", false, vec![Element::option("1", "Red")]),
    ]);
    let fruit = attach(&mut doc, "fruit");
    let colour = attach(&mut doc, "colour");
    let row = menu_row(&doc, &colour, "1");

    let result = fruit.handle_event(&mut doc, &Event::click(row)).unwrap();

    assert_eq!(result, EventResult::Ignored);
    assert!(selected_values(&doc, &colour).is_empty());
}

#[test]
fn test_dispatch_with_no_handler_is_ignored() {
    let mut doc = Document::with_children([Element::div().id("elsewhere")]);
    let elsewhere = doc.get_element_by_id("elsewhere").unwrap().node_id;

    let result = dispatch(&mut doc, &[], &Event::click(elsewhere)).unwrap();

    assert_eq!(result, EventResult::Ignored);
}

// ============================================================================
// Desynchronization
// ============================================================================

#[test]
fn test_render_after_control_lost_fails() {
    let mut doc = Document::with_children([select("arbitraryId", false, vec![])]);
    let widget = attach(&mut doc, "arbitraryId");
    doc.get_element_by_id_mut("arbitraryId")
        .unwrap()
        .set_id("renamed");

    let err = widget.render(&mut doc).unwrap_err();

    assert!(matches!(err, SelectError::ControlNotFound { .. }));
}
