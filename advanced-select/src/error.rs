//! Error types for the advanced select.

use pagedom::DomError;
use thiserror::Error;

/// Errors from configuring, attaching or driving an advanced select.
///
/// Every variant except `InvalidOverrides` means the widget and the page have
/// drifted apart, which is a wiring bug rather than a runtime condition.
#[derive(Debug, Error)]
pub enum SelectError {
    /// No element carries the control id.
    #[error("no native control with id '{control_id}'")]
    ControlNotFound { control_id: String },

    /// The element exists but is not a `<select>`.
    #[error("element '{control_id}' is a <{tag}>, not a <select>")]
    NotASelect { control_id: String, tag: String },

    /// The control already has a widget rendered for it.
    #[error("an advanced select is already attached to '{control_id}'")]
    AlreadyAttached { control_id: String },

    /// The widget root for the control is missing from the page.
    #[error("no advanced select rendered for '{control_id}'")]
    WidgetNotFound { control_id: String },

    /// Caller overrides could not be parsed.
    #[error("invalid configuration overrides: {0}")]
    InvalidOverrides(#[from] serde_json::Error),

    #[error(transparent)]
    Dom(#[from] DomError),
}
