use advanced_select::components::{
    dropdown_root, menu_item, select_button, select_menu, selected_item_chip,
};
use advanced_select::{Configuration, Item};

fn config() -> Configuration {
    Configuration {
        control_id: "arbitraryId".to_string(),
        multiple: false,
        prompt_text: "Some arbitrary prompt text".to_string(),
    }
}

// ============================================================================
// Toggle button
// ============================================================================

#[test]
fn test_select_button_is_a_button() {
    assert_eq!(select_button(&config()).tag, "button");
}

#[test]
fn test_select_button_toggles_dropdown() {
    let button = select_button(&config());

    assert!(button.has_attribute("data-bs-toggle"));
    assert_eq!(button.attribute("data-bs-toggle"), Some("dropdown"));
}

#[test]
fn test_select_button_classes() {
    let button = select_button(&config());

    assert!(button.has_class("form-select"));
    assert!(button.has_class("text-start"));
}

#[test]
fn test_select_button_shows_prompt() {
    assert_eq!(
        select_button(&config()).inner_html(),
        "Some arbitrary prompt text"
    );
}

// ============================================================================
// Chips
// ============================================================================

#[test]
fn test_chip_is_a_div_with_button_classes() {
    let chip = selected_item_chip("1", "arbitrary");

    assert_eq!(chip.tag, "div");
    assert!(chip.has_class("btn"));
    assert!(chip.has_class("btn-secondary"));
    assert!(chip.has_class("btn-sm"));
}

#[test]
fn test_chip_carries_value_and_text() {
    let chip = selected_item_chip("1", "Option 1");

    assert_eq!(chip.attribute("value"), Some("1"));
    assert!(chip.inner_html().contains("Option 1"));
    assert_eq!(chip.text_content(), "Option 1");
}

#[test]
fn test_chip_has_removal_affordance() {
    let chip = selected_item_chip("1", "Option 1");

    let close = chip
        .child_elements()
        .iter()
        .find(|el| el.has_class("btn-close"))
        .unwrap();
    assert_eq!(close.attribute("data-bs-remove"), Some("1"));
}

// ============================================================================
// Menu and root
// ============================================================================

#[test]
fn test_select_menu_is_a_div() {
    assert_eq!(select_menu().tag, "div");
}

#[test]
fn test_select_menu_classes() {
    let menu = select_menu();

    assert!(menu.has_class("dropdown-menu"));
    assert!(menu.has_class("w-100"));
    assert!(!menu.has_class("show"));
}

#[test]
fn test_menu_item_carries_value_and_text() {
    let row = menu_item(&Item {
        value: "2".to_string(),
        text: "Option 2".to_string(),
        selected: false,
    });

    assert!(row.has_class("dropdown-item"));
    assert_eq!(row.attribute("value"), Some("2"));
    assert_eq!(row.text_content(), "Option 2");
}

#[test]
fn test_root_names_the_control() {
    let root = dropdown_root(&config());

    assert!(root.has_class("dropdown"));
    assert_eq!(root.attribute("data-bs-overrides"), Some("arbitraryId"));
}
