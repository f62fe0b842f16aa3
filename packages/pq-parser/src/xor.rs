//! The cross-realm reference consumers use to walk the graph uniformly.

use crate::ast::AstNode;
use crate::context::Context;
use crate::id::NodeId;

/// A tagged handle naming either a still-open context or an already-closed
/// ast-node, both by id. Traversal helpers hand these out so a consumer can
/// match on realm rather than needing to know in advance whether a given id
/// has finished parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum XorNode<'a> {
    Context(&'a Context),
    Ast(&'a AstNode),
}

impl<'a> XorNode<'a> {
    /// The id of the underlying node, regardless of realm.
    pub fn id(&self) -> NodeId {
        match self {
            XorNode::Context(context) => context.id(),
            XorNode::Ast(ast) => ast.id(),
        }
    }

    pub fn is_context(&self) -> bool {
        matches!(self, XorNode::Context(_))
    }

    pub fn is_ast(&self) -> bool {
        matches!(self, XorNode::Ast(_))
    }

    pub fn as_context(&self) -> Option<&'a Context> {
        match self {
            XorNode::Context(context) => Some(context),
            XorNode::Ast(_) => None,
        }
    }

    pub fn as_ast(&self) -> Option<&'a AstNode> {
        match self {
            XorNode::Ast(ast) => Some(ast),
            XorNode::Context(_) => None,
        }
    }
}
