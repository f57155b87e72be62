//! Advanced Select Example
//!
//! Builds a page with a single and a multiple select, attaches a widget to
//! each, simulates a few clicks and prints the resulting markup.
//!
//! Debug logs are written to `advanced-select-demo.log`.

use std::error::Error;
use std::fs::File;

use advanced_select::prelude::*;
use log::LevelFilter;
use serde_json::json;
use simplelog::{Config, WriteLogger};

fn menu_row(doc: &Document, widget: &AdvancedSelect, value: &str) -> Option<NodeId> {
    widget
        .menu(doc)
        .ok()?
        .child_elements()
        .iter()
        .find(|row| row.attribute("value") == Some(value))
        .map(|row| row.node_id)
}

fn main() -> Result<(), Box<dyn Error>> {
    let log_file = File::create("advanced-select-demo.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)?;

    let mut doc = Document::with_children([
        Element::select()
            .id("priority")
            .attr("data-bs-prompt", "Select priority")
            .children([
                Element::option("low", "Low"),
                Element::option("medium", "Medium"),
                Element::option("high", "High"),
            ]),
        Element::select()
            .attr("multiple", "")
            .children([
                Element::option("apple", "Apple").attr("selected", ""),
                Element::option("banana", "Banana"),
                Element::option("cherry", "Cherry"),
            ]),
    ]);

    let fruit_control = doc
        .find_all(|el| el.is("select"))
        .into_iter()
        .find(|el| el.dom_id().is_none())
        .map(|el| el.node_id)
        .ok_or("fruit select missing")?;

    let priority = AdvancedSelect::attach_by_id(&mut doc, "priority", &ConfigOverrides::new())?;
    let fruit = AdvancedSelect::attach(
        &mut doc,
        fruit_control,
        &ConfigOverrides::from_json(&json!({"promptText": "Pick some fruit", "multiple": null}))?,
    )?;
    let widgets = [priority.clone(), fruit.clone()];

    println!("priority config: {}", serde_json::to_string(priority.configuration())?);
    println!("fruit config:    {}", serde_json::to_string(fruit.configuration())?);

    let clicks = [
        (&priority, "high"),
        (&fruit, "cherry"),
        (&priority, "medium"),
    ];
    for (widget, value) in clicks {
        let target = menu_row(&doc, widget, value)
            .ok_or_else(|| format!("no menu row '{value}' in '{}'", widget.control_id()))?;
        let result = dispatch(&mut doc, &widgets, &Event::click(target))?;
        println!("click -> {result:?}");
    }

    fruit.select(&mut doc, "durian", "Durian")?;

    println!();
    println!("{}", doc.body);
    Ok(())
}
