//! The open, still-growing realm of the parse graph.

use crate::id::NodeId;
use crate::kind::NodeKind;
use crate::token::Token;

/// A still-open parse-tree entry: a production the driver has entered but not
/// yet (or no longer) finished.
///
/// Whether a node is open or closed is not a field on this struct; it is
/// which of [`crate::map::NodeIdMap`]'s two realms holds the id. A `Context`
/// exists only while its id is registered in `contextById`; once
/// [`crate::session::ParseSession::end_context`] succeeds, the `Context` is
/// discarded and an [`crate::ast::AstNode`] of the same id takes its place in
/// `astById`. "Open" and "closed" are a realm membership question, not a flag
/// to check.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Context {
    id: NodeId,
    kind: NodeKind,
    token_index_start: u32,
    start_token: Option<Token>,
    /// How many attributes (child contexts) have been opened beneath this
    /// node so far. Never decremented, even across deletions of those
    /// children.
    attribute_counter: u32,
    /// This node's slot beneath its own parent, fixed at `start` time. `None`
    /// for the root context. Meaningless (but harmless) on a node that has
    /// been promoted to root by a collapse (see `deleteContext` case 4).
    attribute_index: Option<u32>,
}

impl Context {
    pub(crate) fn new(
        id: NodeId,
        kind: NodeKind,
        token_index_start: u32,
        start_token: Option<Token>,
        attribute_index: Option<u32>,
    ) -> Self {
        Self {
            id,
            kind,
            token_index_start,
            start_token,
            attribute_counter: 0,
            attribute_index,
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn token_index_start(&self) -> u32 {
        self.token_index_start
    }

    pub fn start_token(&self) -> Option<&Token> {
        self.start_token.as_ref()
    }

    pub fn attribute_counter(&self) -> u32 {
        self.attribute_counter
    }

    pub fn attribute_index(&self) -> Option<u32> {
        self.attribute_index
    }

    /// Increments the attribute counter and returns the value a newly-started
    /// child should use as its own `attribute_index`.
    pub(crate) fn allocate_attribute_index(&mut self) -> u32 {
        let index = self.attribute_counter;
        self.attribute_counter += 1;
        index
    }

    /// Used only by collapse: the surviving child inherits the deleted
    /// node's slot.
    pub(crate) fn set_attribute_index(&mut self, index: Option<u32>) {
        self.attribute_index = index;
    }
}
