//! The closed, immutable realm of the parse graph.

use crate::id::NodeId;
use crate::kind::NodeKind;
use crate::token::TokenSpan;

/// Kind-specific structural data carried by a closed [`AstNode`].
///
/// A leaf payload carries the literal text it covers (if any) and its span; a
/// non-leaf payload carries the ordered ids of its children plus the span of
/// the whole production. Children are referenced by id rather than embedded,
/// in keeping with the arena-plus-index discipline the rest of the graph
/// follows: looking a child up always goes back through the
/// [`crate::map::NodeIdMap`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodePayload {
    Leaf {
        span: TokenSpan,
        literal: Option<String>,
    },
    NonLeaf {
        span: TokenSpan,
        children: Vec<NodeId>,
    },
}

/// An immutable record produced when a production completes.
///
/// Once constructed, an `AstNode` is never mutated. Its id can leave the ast
/// realm only by being removed entirely via
/// [`crate::session::ParseSession::delete_context`], which operates on open
/// contexts, not closed ast-nodes; so a closed node stays closed for the
/// lifetime of the session.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AstNode {
    id: NodeId,
    kind: NodeKind,
    payload: NodePayload,
}

impl AstNode {
    /// Constructs a new leaf ast-node with the given id, kind, and payload.
    ///
    /// `kind.is_leaf()` must be true for this node to be treated as a leaf by
    /// the Context Lifecycle; this constructor does not itself enforce that,
    /// since it has no access to the session to raise `InvariantError`
    /// against; callers (in practice, only [`crate::session::ParseSession::end_context`])
    /// are expected to pass a leaf kind here.
    pub fn new_leaf(id: NodeId, kind: NodeKind, span: TokenSpan, literal: Option<String>) -> Self {
        Self {
            id,
            kind,
            payload: NodePayload::Leaf { span, literal },
        }
    }

    /// Constructs a new non-leaf ast-node with the given id, kind, and ordered children.
    pub fn new_non_leaf(id: NodeId, kind: NodeKind, span: TokenSpan, children: Vec<NodeId>) -> Self {
        Self {
            id,
            kind,
            payload: NodePayload::NonLeaf { span, children },
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn payload(&self) -> &NodePayload {
        &self.payload
    }

    /// Whether this node was closed as a leaf. This mirrors `kind.is_leaf()`
    /// but is derived from the payload shape actually stored, which is what
    /// the Context Lifecycle consults when deciding whether to record the id
    /// in `leafIds`.
    pub fn is_leaf(&self) -> bool {
        matches!(self.payload, NodePayload::Leaf { .. })
    }

    pub fn span(&self) -> TokenSpan {
        match &self.payload {
            NodePayload::Leaf { span, .. } => *span,
            NodePayload::NonLeaf { span, .. } => *span,
        }
    }

    /// The ordered child ids, for a non-leaf node. Empty for a leaf.
    pub fn children(&self) -> &[NodeId] {
        match &self.payload {
            NodePayload::Leaf { .. } => &[],
            NodePayload::NonLeaf { children, .. } => children,
        }
    }
}
