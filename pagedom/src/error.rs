//! Document error types

use thiserror::Error;

use crate::element::NodeId;

/// Errors raised by structural document operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
    /// No element with this handle is attached to the document.
    #[error("node {0} is not attached to the document")]
    NodeNotFound(NodeId),

    /// The operation needs a parent, but the node is the document root.
    #[error("node {0} has no parent")]
    NoParent(NodeId),
}
