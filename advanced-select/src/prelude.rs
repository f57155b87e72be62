//! Common imports for pages using the advanced select.

pub use pagedom::{Document, Element, Event, NodeId};

pub use crate::config::{ConfigOverrides, Configuration};
pub use crate::error::SelectError;
pub use crate::selection::Item;
pub use crate::widget::{AdvancedSelect, EventResult, dispatch};
