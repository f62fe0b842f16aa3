//! Errors to do with the incremental parse-tree substrate.

use thiserror::Error;

use crate::id::NodeId;

/// A contract violation raised by the [`crate::map::NodeIdMap`] or
/// [`crate::session::ParseSession`] lifecycle operations.
///
/// This is the *only* error surfaced by this crate. It is never raised for an
/// ordinary parsing failure (an unexpected token, a missing production): those
/// are represented structurally, as open contexts that never closed. An
/// `InvariantError` instead signals that the driver violated one of the
/// documented preconditions, or that the graph has otherwise become
/// inconsistent. It is not recoverable, and the driver is expected to fail the
/// parse session on receiving one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantError {
    /// Looked up an id expecting a closed ast-node, but it has no entry in `astById`.
    #[error("node {id} is not a closed ast-node")]
    MissingAst { id: NodeId },

    /// Looked up an id expecting an open context, but it has no entry in `contextById`.
    #[error("node {id} is not an open context")]
    MissingContext { id: NodeId },

    /// Looked up an id expecting either realm, but it is present in neither.
    #[error("node {id} is not present in either realm")]
    MissingXor { id: NodeId },

    /// Looked up the parent of an id that has no entry in `parentById`.
    #[error("node {id} has no recorded parent")]
    MissingParent { id: NodeId },

    /// Looked up the children of an id that has no entry in `childrenById`.
    #[error("node {id} has no recorded children list")]
    MissingChildren { id: NodeId },

    /// `startContext` was given a parent id absent from `contextById`.
    #[error("claimed parent {parent_id} is not an open context")]
    UnknownParent { parent_id: NodeId },

    /// `endContext` was called on a context that is already closed.
    #[error("context {id} has already been closed")]
    AlreadyClosed { id: NodeId },

    /// `endContext` was given an ast-node whose id does not match the context it closes.
    #[error("context {context_id} cannot be closed with ast-node {ast_id}: ids differ")]
    AstIdMismatch { context_id: NodeId, ast_id: NodeId },

    /// `deleteContext` was asked to delete a context with two or more children.
    #[error(
        "cannot delete context {id}: it has {child_count} children, collapse requires at most 1"
    )]
    TooManyChildrenToDelete { id: NodeId, child_count: usize },

    /// `deleteContext` (or any lifecycle op) was given an id absent from `contextById`.
    #[error("no open context with id {id}")]
    NoSuchContext { id: NodeId },

    /// A `SessionConfig::max_nodes` bound was exceeded by a `startContext` call.
    #[error("session exceeded its configured node limit of {limit}")]
    NodeLimitExceeded { limit: u32 },
}
