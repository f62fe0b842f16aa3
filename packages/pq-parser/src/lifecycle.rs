//! Context Lifecycle: `start`, `end`, and `delete`, the three operations that
//! build and reconcile the parse graph.
//!
//! Every operation here validates its preconditions before touching the map
//! ("validate-then-commit"), so a failed call never leaves the graph
//! partially mutated.

use tracing::{debug, trace};

use crate::ast::AstNode;
use crate::context::Context;
use crate::error::InvariantError;
use crate::id::NodeId;
use crate::kind::NodeKind;
use crate::session::ParseSession;
use crate::token::Token;

impl ParseSession {
    /// Opens a new context of the given kind, starting at `token_index_start`.
    ///
    /// If `maybe_parent` is `Some`, the new context is attached as the next
    /// attribute beneath that parent: its `attribute_index` becomes the
    /// parent's current `attribute_counter`, which is then incremented. If
    /// `maybe_parent` is `None`, the new context becomes this session's root.
    ///
    /// Fails if the claimed parent id is not currently an open context, or if
    /// the session's configured node limit (if any) has been reached.
    pub fn start_context(
        &mut self,
        kind: NodeKind,
        token_index_start: u32,
        start_token: Option<Token>,
        maybe_parent: Option<NodeId>,
    ) -> Result<Context, InvariantError> {
        if let Some(limit) = self.config.max_nodes {
            if self.allocator.count() >= limit {
                return Err(InvariantError::NodeLimitExceeded { limit });
            }
        }
        if let Some(parent_id) = maybe_parent {
            if !self.map.contains_context(parent_id) {
                return Err(InvariantError::UnknownParent { parent_id });
            }
        }

        let id = self.allocator.next();
        let attribute_index = maybe_parent.map(|parent_id| {
            self.map.set_parent(id, parent_id);
            self.map.push_child(parent_id, id);
            self.map
                .context_mut(parent_id)
                .expect("parent existence validated above")
                .allocate_attribute_index()
        });

        let context = Context::new(id, kind, token_index_start, start_token, attribute_index);
        self.map.insert_context(context.clone());

        if maybe_parent.is_none() {
            self.maybe_root = Some(id);
        }

        trace!(id = %id, kind = ?kind, parent = ?maybe_parent, "started context");
        Ok(context)
    }

    /// Closes `context_id` by binding `ast` to it, promoting the id from the
    /// context realm to the ast realm.
    ///
    /// Fails if `context_id` has already been closed, if `context_id` is not
    /// a known node at all, or if `ast.id() != context_id` (the ast-node must
    /// reuse the context's identity so external references stay valid across
    /// the realm transition).
    pub fn end_context(
        &mut self,
        context_id: NodeId,
        ast: AstNode,
    ) -> Result<Option<Context>, InvariantError> {
        if self.map.maybe_ast(context_id).is_some() {
            return Err(InvariantError::AlreadyClosed { id: context_id });
        }
        if !self.map.contains_context(context_id) {
            return Err(InvariantError::NoSuchContext { id: context_id });
        }
        if context_id != ast.id() {
            return Err(InvariantError::AstIdMismatch {
                context_id,
                ast_id: ast.id(),
            });
        }

        if ast.is_leaf() {
            self.map.push_leaf(context_id);
        }
        self.map.insert_ast(ast);
        self.map.remove_context(context_id);

        debug!(id = %context_id, "closed context");

        let maybe_parent_context = self
            .map
            .maybe_parent_id(context_id)
            .and_then(|parent_id| self.map.maybe_context(parent_id).cloned());
        Ok(maybe_parent_context)
    }

    /// Removes the open context `node_id` and reconciles the graph around it.
    ///
    /// A context with zero children is simply erased. A context with exactly
    /// one child is collapsed: the child is spliced into the deleted node's
    /// slot (its parent's children list, if any, or the root handle),
    /// inheriting the deleted node's `attribute_index` when it is still open.
    /// A context with two or more children cannot be deleted; no grammar
    /// collapse should ever discard siblings, so this signals a driver bug.
    pub fn delete_context(&mut self, node_id: NodeId) -> Result<Option<Context>, InvariantError> {
        if !self.map.contains_context(node_id) {
            return Err(InvariantError::NoSuchContext { id: node_id });
        }

        let children: Vec<NodeId> = self
            .map
            .maybe_children(node_id)
            .map(|children| children.to_vec())
            .unwrap_or_default();
        if children.len() > 1 {
            return Err(InvariantError::TooManyChildrenToDelete {
                id: node_id,
                child_count: children.len(),
            });
        }

        let maybe_parent_id = self.map.maybe_parent_id(node_id);

        match (children.first().copied(), maybe_parent_id) {
            // Leaf collapse: no replacement, just drop the slot.
            (None, Some(parent_id)) => {
                self.map
                    .children_mut(parent_id)
                    .retain(|&child_id| child_id != node_id);
            }
            // Root leaf collapse: the tree becomes empty.
            (None, None) => {
                self.maybe_root = None;
            }
            // Interior collapse: splice the child into this node's slot.
            (Some(child_id), Some(parent_id)) => {
                let inherited_index = self
                    .map
                    .expect_context(node_id)
                    .expect("node_id validated as an open context above")
                    .attribute_index();

                for slot in self.map.children_mut(parent_id).iter_mut() {
                    if *slot == node_id {
                        *slot = child_id;
                    }
                }
                self.map.set_parent(child_id, parent_id);
                if let Some(child_context) = self.map.context_mut(child_id) {
                    child_context.set_attribute_index(inherited_index);
                }
            }
            // Root collapse: promote the child to root. If the child is
            // still open its attribute_index is left untouched; it becomes
            // semantically meaningless once the node is root, but clearing
            // it is not required to preserve any invariant.
            (Some(child_id), None) => {
                self.map.remove_parent(child_id);
                self.maybe_root = Some(child_id);
            }
        }

        let parent_context = maybe_parent_id.and_then(|pid| self.map.maybe_context(pid).cloned());

        self.map.remove_context(node_id);
        self.map.remove_children_list(node_id);
        self.map.remove_parent(node_id);
        self.map.remove_leaf(node_id);

        trace!(id = %node_id, children = children.len(), "deleted context");
        Ok(parent_context)
    }
}
