//! An incremental, error-tolerant parser front-end for the Power Query / M
//! language. This crate does not implement the M grammar itself, nor the
//! lexer that feeds it tokens (both are external collaborators). What it
//! provides is the substrate a hand-written recursive-descent driver builds
//! its parse tree on top of: a two-realm node graph where a production being
//! matched lives as an *open context*, and a production that has finished
//! matching lives as a *closed ast-node*, with both realms addressed by the
//! same stable [`id::NodeId`] across the transition.
//!
//! That substrate is what lets a driver abandon a production mid-match
//! (backtracking, truncation at end of input, collapsing a wrapper that
//! turned out to be redundant) without losing the work already committed
//! elsewhere in the tree, which in turn is what makes this usable for
//! editor tooling operating on a document that is, at any given keystroke,
//! not valid M at all.
//!
//! Alongside the graph, this crate exposes the [`type_name`] module: a pure
//! renderer from structured M type descriptors back to their canonical
//! textual form, used by any downstream tool that needs to print a type it
//! has inferred or otherwise constructed.
//!
//! See [`session::ParseSession`] for the entry point, and
//! [`session::ParseSession::start_context`] /
//! [`session::ParseSession::end_context`] /
//! [`session::ParseSession::delete_context`] for the Context Lifecycle.

pub mod ast;
pub mod context;
/// Errors to do with contract violations in the parse-tree substrate.
pub mod error;
pub mod id;
pub mod kind;
pub mod map;
pub mod session;
pub mod token;
pub mod type_name;
pub mod xor;

mod lifecycle;

pub use ast::{AstNode, NodePayload};
pub use context::Context;
pub use error::InvariantError;
pub use id::{IdentityAllocator, NodeId};
pub use kind::NodeKind;
pub use map::NodeIdMap;
pub use session::{ParseSession, SessionConfig};
pub use token::{Token, TokenKind, TokenSpan};
pub use type_name::{render, FieldSet, FunctionParameter, PrimitiveKind, TypeDescriptor};
pub use xor::XorNode;

// Using this structure for ease of storing scenario-level integration tests
// colocated with the crate, mirroring the per-module unit tests.
#[cfg(test)]
mod tests;
