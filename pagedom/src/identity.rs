//! Identifier assignment for elements.

use log::debug;
use uuid::Uuid;

use crate::document::Document;
use crate::element::NodeId;
use crate::error::DomError;

/// Prefix for generated identifiers. Keeps them from starting with a digit,
/// which CSS id selectors reject.
pub const GENERATED_ID_PREFIX: &str = "GID";

/// Return the element's DOM id, assigning a fresh unique one first if it has none.
///
/// Calling this again on the same element returns the same id.
pub fn get_or_create_id(doc: &mut Document, node: NodeId) -> Result<String, DomError> {
    if let Some(id) = doc.require(node)?.dom_id() {
        return Ok(id.to_string());
    }

    let id = generate_unique_id(doc);
    doc.require_mut(node)?.set_id(id.clone());
    debug!("assigned generated id {} to {}", id, node);
    Ok(id)
}

/// Generate an identifier that no element in `doc` currently uses.
pub fn generate_unique_id(doc: &Document) -> String {
    loop {
        let candidate = format!("{GENERATED_ID_PREFIX}{}", Uuid::new_v4().simple());
        if !doc.contains_id(&candidate) {
            return candidate;
        }
    }
}
