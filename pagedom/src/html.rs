//! HTML serialization.

use std::fmt;

use crate::element::{Content, Element};

/// Escape text for use between tags.
pub fn escape_text(text: &str) -> String {
    askama_escape::escape(text, askama_escape::Html).to_string()
}

/// Escape text for use inside a double-quoted attribute value.
pub fn escape_attribute(value: &str) -> String {
    askama_escape::escape(value, askama_escape::Html).to_string()
}

impl Element {
    /// Markup of this element's content, excluding its own tag.
    pub fn inner_html(&self) -> String {
        let mut out = String::new();
        write_content(&self.content, &mut out);
        out
    }

    /// Markup of this element including its own tag.
    pub fn outer_html(&self) -> String {
        let mut out = String::new();
        write_element(self, &mut out);
        out
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.outer_html())
    }
}

fn write_element(element: &Element, out: &mut String) {
    out.push('<');
    out.push_str(&element.tag);

    if let Some(id) = element.dom_id() {
        write_attribute(out, "id", id);
    }
    if !element.classes.is_empty() {
        write_attribute(out, "class", &element.class_name());
    }
    for (name, value) in &element.attributes {
        write_attribute(out, name, value);
    }

    out.push('>');
    write_content(&element.content, out);
    out.push_str("</");
    out.push_str(&element.tag);
    out.push('>');
}

fn write_attribute(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    // Boolean attributes (`selected`, `multiple`) are written bare
    if !value.is_empty() {
        out.push_str("=\"");
        out.push_str(&escape_attribute(value));
        out.push('"');
    }
}

fn write_content(content: &Content, out: &mut String) {
    match content {
        Content::None => {}
        Content::Text(text) => out.push_str(&escape_text(text)),
        Content::Children(children) => {
            for child in children {
                write_element(child, out);
            }
        }
    }
}
