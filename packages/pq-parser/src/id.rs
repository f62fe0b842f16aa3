//! Node identity: the allocator that mints ids, and the id type itself.

use std::fmt;

/// A positive integer uniquely identifying a node within one [`crate::session::ParseSession`].
///
/// Ids are never reused, even after the node they named is deleted, and they
/// are compared only by equality; there is no meaningful ordering between two
/// ids beyond the order in which they were allocated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(u32);

impl NodeId {
    /// The reserved "none" id. Never allocated by [`IdentityAllocator::next`].
    pub const NONE: NodeId = NodeId(0);

    /// Returns the raw integer value of this id.
    pub fn value(self) -> u32 {
        self.0
    }

    /// Constructs an id from a raw value. Only meant for ids already known to
    /// have been allocated by an [`IdentityAllocator`] (e.g. when a caller
    /// wants to name an id that does not yet or no longer exists, such as in
    /// tests exercising `InvariantError`); never use this to mint an id that
    /// should instead come from `IdentityAllocator::next`.
    pub(crate) fn from_raw(value: u32) -> Self {
        Self(value)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stateful, session-scoped counter that issues monotonically increasing
/// [`NodeId`]s. Ids start from 1; 0 is reserved as "none."
///
/// Not shared across sessions and not re-entrant: each [`crate::session::ParseSession`]
/// owns exactly one allocator.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IdentityAllocator {
    counter: u32,
}

impl IdentityAllocator {
    /// Creates a fresh allocator whose next id will be 1.
    pub fn new() -> Self {
        Self { counter: 0 }
    }

    /// Increments the counter and returns the new id.
    pub fn next(&mut self) -> NodeId {
        self.counter += 1;
        NodeId(self.counter)
    }

    /// The number of ids issued so far by this allocator.
    pub fn count(&self) -> u32 {
        self.counter
    }
}
