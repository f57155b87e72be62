use crate::element::NodeId;

/// Page events targeted at an element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Mouse click on an element
    Click { target: NodeId, button: MouseButton },
}

impl Event {
    /// Primary-button click on `target`.
    pub fn click(target: NodeId) -> Self {
        Self::Click {
            target,
            button: MouseButton::Left,
        }
    }

    pub fn target(&self) -> NodeId {
        match self {
            Self::Click { target, .. } => *target,
        }
    }
}

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}
