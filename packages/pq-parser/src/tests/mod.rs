mod deep_copy;
mod tracing_smoke;

pub use super::*;

/// A bare leaf ast-node, for scenarios that don't care about its payload.
pub(crate) fn leaf_ast(id: NodeId, kind: NodeKind, literal: &str) -> AstNode {
    AstNode::new_leaf(id, kind, TokenSpan::new(0, 1), Some(literal.to_string()))
}

/// A bare non-leaf ast-node with the given children, for scenarios that don't
/// care about its span.
pub(crate) fn non_leaf_ast(id: NodeId, kind: NodeKind, children: Vec<NodeId>) -> AstNode {
    AstNode::new_non_leaf(id, kind, TokenSpan::new(0, 1), children)
}
