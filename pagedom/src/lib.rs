pub mod document;
pub mod element;
pub mod error;
pub mod event;
pub mod html;
pub mod identity;
pub mod path;
pub mod visibility;

pub use document::Document;
pub use element::{Content, Element, NodeId};
pub use error::DomError;
pub use event::Event;
pub use identity::get_or_create_id;
pub use path::{closest, path_to};
