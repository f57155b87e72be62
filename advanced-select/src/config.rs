//! Configuration resolution.
//!
//! A widget's settings come from three sources, lowest precedence first:
//!
//! 1. Built-in defaults
//! 2. Attributes on the native `<select>`
//! 3. Overrides passed by the caller
//!
//! A source only wins for the keys it actually provides. An attribute that
//! is missing from the element provides nothing, but an attribute set to
//! `""` provides the empty string.

use log::debug;
use pagedom::Element;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::SelectError;

/// Prompt shown when nothing is selected and no other source provides one.
pub const DEFAULT_PROMPT_TEXT: &str = "Select an item";

/// Attribute on the native control that sets the prompt text.
pub const PROMPT_ATTRIBUTE: &str = "data-bs-prompt";

/// Attribute that marks a native control as multi-select.
pub const MULTIPLE_ATTRIBUTE: &str = "multiple";

/// Resolved settings for one widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    /// DOM id of the native control this widget overrides.
    pub control_id: String,
    /// Whether more than one item may be selected.
    pub multiple: bool,
    /// Toggle label when nothing is selected.
    pub prompt_text: String,
}

/// The native control's attributes that feed configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlAttributes {
    pub id: String,
    pub multiple: bool,
    /// `None` when the prompt attribute is absent.
    pub prompt_text: Option<String>,
}

impl ControlAttributes {
    /// Read configuration attributes from a native control.
    ///
    /// The control is expected to already carry its id.
    pub fn read(control: &Element) -> Self {
        Self {
            id: control.dom_id().unwrap_or_default().to_string(),
            multiple: control.has_attribute(MULTIPLE_ATTRIBUTE),
            prompt_text: control.attribute(PROMPT_ATTRIBUTE).map(str::to_string),
        }
    }
}

/// Caller-supplied overrides. Every provided value wins, even when it
/// equals the default.
///
/// # Example
///
/// ```
/// use advanced_select::ConfigOverrides;
///
/// let overrides = ConfigOverrides::new()
///     .with_multiple(true)
///     .with_prompt_text("Pick some fruit");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigOverrides {
    pub multiple: Option<bool>,
    pub prompt_text: Option<String>,
}

impl ConfigOverrides {
    /// No overrides.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_multiple(mut self, multiple: bool) -> Self {
        self.multiple = Some(multiple);
        self
    }

    pub fn with_prompt_text(mut self, prompt_text: impl Into<String>) -> Self {
        self.prompt_text = Some(prompt_text.into());
        self
    }

    /// Parse overrides from a JSON object such as
    /// `{"multiple": true, "promptText": "Pick one"}`.
    ///
    /// Keys set to `null` count as not provided. Unknown keys are ignored.
    pub fn from_json(value: &Value) -> Result<Self, SelectError> {
        let stripped = match value {
            Value::Object(map) => Value::Object(remove_null_properties(map)),
            other => other.clone(),
        };
        Ok(serde_json::from_value(stripped)?)
    }
}

/// Copy of `map` without its null-valued keys. Other values are unchanged.
pub fn remove_null_properties(map: &Map<String, Value>) -> Map<String, Value> {
    map.iter()
        .filter(|(_, value)| !value.is_null())
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Merge defaults, control attributes and caller overrides.
pub fn resolve_configuration(
    attributes: &ControlAttributes,
    overrides: &ConfigOverrides,
) -> Configuration {
    let mut config = Configuration {
        control_id: attributes.id.clone(),
        multiple: attributes.multiple,
        prompt_text: DEFAULT_PROMPT_TEXT.to_string(),
    };

    if let Some(prompt_text) = &attributes.prompt_text {
        config.prompt_text = prompt_text.clone();
    }

    if let Some(multiple) = overrides.multiple {
        config.multiple = multiple;
    }
    if let Some(prompt_text) = &overrides.prompt_text {
        config.prompt_text = prompt_text.clone();
    }

    debug!(
        "resolved configuration control_id={} multiple={} prompt_text={:?}",
        config.control_id, config.multiple, config.prompt_text
    );
    config
}
