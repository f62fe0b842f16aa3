//! The relational core: four id-indexed mappings plus the leaf-closure list.
//!
//! This is a passive data substrate. It is mutated only through
//! [`crate::session::ParseSession`]'s Context Lifecycle methods; direct
//! mutation from outside the crate is not possible (all mutating methods here
//! are `pub(crate)`). Readers get `expect*` lookups that fail loudly with
//! [`InvariantError`] when an id is missing from the realm they asked for,
//! and `maybe*` lookups for callers that want to tolerate absence themselves.

use std::collections::HashMap;
use std::sync::Arc;

use crate::ast::AstNode;
use crate::context::Context;
use crate::error::InvariantError;
use crate::id::NodeId;
use crate::xor::XorNode;

/// The four mappings and the leaf-id list described in the data model.
///
/// Ast-node records are stored behind `Arc` so that [`NodeIdMap::deep_copy`]
/// can duplicate the mappings themselves in time proportional to their size
/// while sharing the (immutable, never-mutated) ast payloads with the
/// original.
#[derive(Debug, Clone, Default)]
pub struct NodeIdMap {
    ast_by_id: HashMap<NodeId, Arc<AstNode>>,
    context_by_id: HashMap<NodeId, Context>,
    parent_by_id: HashMap<NodeId, NodeId>,
    children_by_id: HashMap<NodeId, Vec<NodeId>>,
    leaf_ids: Vec<NodeId>,
}

impl NodeIdMap {
    pub fn new() -> Self {
        Self::default()
    }

    // --- expect* lookups: fail loudly on a missing id ---------------------

    pub fn expect_ast(&self, id: NodeId) -> Result<&AstNode, InvariantError> {
        self.ast_by_id
            .get(&id)
            .map(Arc::as_ref)
            .ok_or(InvariantError::MissingAst { id })
    }

    pub fn expect_context(&self, id: NodeId) -> Result<&Context, InvariantError> {
        self.context_by_id
            .get(&id)
            .ok_or(InvariantError::MissingContext { id })
    }

    pub fn expect_xor(&self, id: NodeId) -> Result<XorNode<'_>, InvariantError> {
        if let Some(context) = self.context_by_id.get(&id) {
            Ok(XorNode::Context(context))
        } else if let Some(ast) = self.ast_by_id.get(&id) {
            Ok(XorNode::Ast(ast.as_ref()))
        } else {
            Err(InvariantError::MissingXor { id })
        }
    }

    pub fn expect_children(&self, id: NodeId) -> Result<&[NodeId], InvariantError> {
        self.children_by_id
            .get(&id)
            .map(Vec::as_slice)
            .ok_or(InvariantError::MissingChildren { id })
    }

    pub fn expect_parent_id(&self, id: NodeId) -> Result<NodeId, InvariantError> {
        self.parent_by_id
            .get(&id)
            .copied()
            .ok_or(InvariantError::MissingParent { id })
    }

    // --- maybe* lookups: tolerate absence ----------------------------------

    pub fn maybe_ast(&self, id: NodeId) -> Option<&AstNode> {
        self.ast_by_id.get(&id).map(Arc::as_ref)
    }

    pub fn maybe_context(&self, id: NodeId) -> Option<&Context> {
        self.context_by_id.get(&id)
    }

    pub fn maybe_xor(&self, id: NodeId) -> Option<XorNode<'_>> {
        self.expect_xor(id).ok()
    }

    pub fn maybe_children(&self, id: NodeId) -> Option<&[NodeId]> {
        self.children_by_id.get(&id).map(Vec::as_slice)
    }

    pub fn maybe_parent_id(&self, id: NodeId) -> Option<NodeId> {
        self.parent_by_id.get(&id).copied()
    }

    /// Order-of-closure list of every id closed as a leaf ast-node and not
    /// since deleted.
    pub fn leaf_ids(&self) -> &[NodeId] {
        &self.leaf_ids
    }

    pub fn context_count(&self) -> usize {
        self.context_by_id.len()
    }

    pub fn ast_count(&self) -> usize {
        self.ast_by_id.len()
    }

    /// Produces an independent collection whose mutations do not affect the
    /// original. The four mappings and the leaf-id list are duplicated; the
    /// immutable ast-node records are shared (via `Arc`) since they are never
    /// mutated after creation, so sharing them is safe.
    pub fn deep_copy(&self) -> Self {
        self.clone()
    }

    // --- pub(crate) mutators, used only by the Context Lifecycle -----------

    pub(crate) fn insert_context(&mut self, context: Context) {
        self.context_by_id.insert(context.id(), context);
    }

    pub(crate) fn context_mut(&mut self, id: NodeId) -> Option<&mut Context> {
        self.context_by_id.get_mut(&id)
    }

    pub(crate) fn contains_context(&self, id: NodeId) -> bool {
        self.context_by_id.contains_key(&id)
    }

    pub(crate) fn set_parent(&mut self, child: NodeId, parent: NodeId) {
        self.parent_by_id.insert(child, parent);
    }

    pub(crate) fn remove_parent(&mut self, id: NodeId) -> Option<NodeId> {
        self.parent_by_id.remove(&id)
    }

    pub(crate) fn push_child(&mut self, parent: NodeId, child: NodeId) {
        self.children_by_id.entry(parent).or_default().push(child);
    }

    pub(crate) fn children_mut(&mut self, parent: NodeId) -> &mut Vec<NodeId> {
        self.children_by_id.entry(parent).or_default()
    }

    pub(crate) fn remove_children_list(&mut self, id: NodeId) -> Option<Vec<NodeId>> {
        self.children_by_id.remove(&id)
    }

    pub(crate) fn remove_context(&mut self, id: NodeId) -> Option<Context> {
        self.context_by_id.remove(&id)
    }

    pub(crate) fn insert_ast(&mut self, ast: AstNode) {
        self.ast_by_id.insert(ast.id(), Arc::new(ast));
    }

    pub(crate) fn push_leaf(&mut self, id: NodeId) {
        self.leaf_ids.push(id);
    }

    pub(crate) fn remove_leaf(&mut self, id: NodeId) {
        self.leaf_ids.retain(|&leaf_id| leaf_id != id);
    }
}
