//! Parse Session State: the aggregate a driver holds for the duration of one parse.

use tracing::trace;

use crate::error::InvariantError;
use crate::id::{IdentityAllocator, NodeId};
use crate::map::NodeIdMap;
use crate::xor::XorNode;

/// A bound a driver may place on a session to guard against a runaway driver
/// opening unbounded contexts (for example, a buggy recursive-descent rule
/// that never makes progress against the token stream). The default has no
/// limit, matching the core's historical unbounded behavior.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionConfig {
    pub max_nodes: Option<u32>,
}

impl SessionConfig {
    pub fn unbounded() -> Self {
        Self { max_nodes: None }
    }

    pub fn with_max_nodes(max_nodes: u32) -> Self {
        Self {
            max_nodes: Some(max_nodes),
        }
    }
}

/// The aggregate state of one incremental parse: the [`NodeIdMap`], the
/// identity allocator, and a handle to the topmost open context, if any.
///
/// A session belongs to exactly one logical driver at a time. All operations
/// are synchronous, single-threaded, and complete before returning; there is
/// no internal locking. Two sessions are always fully independent; the only
/// relationship the crate defines between them is [`ParseSession::deep_copy`].
#[derive(Debug, Clone)]
pub struct ParseSession {
    pub(crate) map: NodeIdMap,
    pub(crate) allocator: IdentityAllocator,
    pub(crate) maybe_root: Option<NodeId>,
    pub(crate) config: SessionConfig,
}

impl Default for ParseSession {
    fn default() -> Self {
        Self::empty()
    }
}

impl ParseSession {
    /// A fresh session with no root, an empty map, id counter zero, and an
    /// empty leaf list.
    pub fn empty() -> Self {
        Self {
            map: NodeIdMap::new(),
            allocator: IdentityAllocator::new(),
            maybe_root: None,
            config: SessionConfig::unbounded(),
        }
    }

    /// A fresh session governed by the given [`SessionConfig`].
    pub fn with_config(config: SessionConfig) -> Self {
        Self {
            config,
            ..Self::empty()
        }
    }

    pub fn map(&self) -> &NodeIdMap {
        &self.map
    }

    pub fn config(&self) -> SessionConfig {
        self.config
    }

    /// The number of ids allocated so far in this session.
    pub fn id_counter(&self) -> u32 {
        self.allocator.count()
    }

    /// Resolves the root handle to a cross-realm reference, if a root exists.
    ///
    /// Fails only if the graph has become inconsistent (the root id is
    /// neither an open context nor a closed ast-node), which should not
    /// happen under correct driver discipline.
    pub fn root_xor(&self) -> Result<Option<XorNode<'_>>, InvariantError> {
        match self.maybe_root {
            Some(id) => self.map.expect_xor(id).map(Some),
            None => Ok(None),
        }
    }

    pub fn maybe_root_id(&self) -> Option<NodeId> {
        self.maybe_root
    }

    /// Produces a fully independent snapshot of this session; immutable
    /// ast-node payloads may be aliased with the original (see
    /// [`NodeIdMap::deep_copy`]). Mutations on the returned session are never
    /// visible on `self`, and vice versa.
    ///
    /// This is how speculative parsing is realized: attempt a production
    /// against a copy, and discard the copy (instead of painstakingly
    /// unwinding partial mutations) if the attempt fails.
    pub fn deep_copy(&self) -> Self {
        trace!(id_counter = self.allocator.count(), "deep-copying parse session");
        self.clone()
    }
}
