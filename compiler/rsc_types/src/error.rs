//! Internal errors of the type context.
//!
//! Every condition that indicates a bug in the surrounding compiler (a
//! lookup before the fact exists, a duplicate registration, an
//! unimplemented path) is returned as an `InternalError` rather than
//! aborting, so callers and tests can observe it.

use rsc_diagnostic::{internal_error, recursion_limit_exceeded, Diagnostic, ErrorCode};
use rsc_ir::{Location, NodeId};

/// Result alias for fallible type-context operations.
pub type TyResult<T> = Result<T, InternalError>;

/// An invariant violation inside the type core.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum InternalError {
    /// A node id was used before any type was registered for it.
    #[error("no type registered for node {0}")]
    UnknownType(NodeId),

    /// An operation reached a path that has no implementation.
    #[error("`{what}` is not implemented (node {node})")]
    Unimplemented { node: NodeId, what: &'static str },

    /// An operation was invoked on a type kind it never accepts.
    #[error("unreachable: {what} (node {node})")]
    Unreachable { node: NodeId, what: &'static str },

    /// An autoderef chain was computed twice for the same node.
    #[error("autoderef adjustments already recorded for node {0}")]
    DuplicateAutoderef(NodeId),

    /// An enum item id was registered twice.
    #[error("enum item {0} is already registered")]
    DuplicateEnumItem(NodeId),

    /// A node was re-canonicalized to a longer, different path.
    #[error("node {node} already has canonical path `{existing}`, refusing `{attempted}`")]
    CanonicalPathConflict {
        node: NodeId,
        existing: String,
        attempted: String,
    },

    /// A bounded walk over the type graph ran out of steps.
    #[error("type resolution for node {node} exceeded the recursion limit of {limit}")]
    RecursionLimit { node: NodeId, limit: u32 },

    /// A placeholder was resolved before its associated type was mapped.
    #[error("placeholder {0} has no associated type mapping")]
    UnresolvedPlaceholder(NodeId),
}

impl InternalError {
    /// The node the error is about.
    pub fn node(&self) -> NodeId {
        match self {
            InternalError::UnknownType(node)
            | InternalError::DuplicateAutoderef(node)
            | InternalError::DuplicateEnumItem(node)
            | InternalError::UnresolvedPlaceholder(node)
            | InternalError::Unimplemented { node, .. }
            | InternalError::Unreachable { node, .. }
            | InternalError::CanonicalPathConflict { node, .. }
            | InternalError::RecursionLimit { node, .. } => *node,
        }
    }

    /// Convert to a diagnostic the driver can report.
    pub fn to_diagnostic(&self, location: Location) -> Diagnostic {
        match self {
            InternalError::RecursionLimit { node, limit } => {
                recursion_limit_exceeded(*node, location, *limit)
            }
            InternalError::UnresolvedPlaceholder(node) => Diagnostic::error(ErrorCode::E2002)
                .with_message("associated type is not known yet")
                .with_node(*node)
                .with_label(location, "placeholder used here"),
            InternalError::Unimplemented { node, .. } => {
                internal_error(ErrorCode::E9002, *node, self.to_string())
                    .with_label(location, "while checking this")
            }
            _ => internal_error(ErrorCode::E9001, self.node(), self.to_string())
                .with_label(location, "while checking this"),
        }
    }
}
