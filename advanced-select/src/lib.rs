//! Advanced select: a Bootstrap-styled dropdown that overlays a native
//! `<select>` element.
//!
//! The native control stays the single source of truth for options and
//! selection. The widget reads it fresh on every render and writes user
//! clicks straight back into it.

pub mod components;
pub mod config;
pub mod error;
pub mod prelude;
pub mod selection;
pub mod widget;

pub use config::{ConfigOverrides, Configuration, ControlAttributes, resolve_configuration};
pub use error::SelectError;
pub use selection::{Item, SelectionChange};
pub use widget::{AdvancedSelect, EventResult, dispatch};
