// Copyright (c) the gosyn contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Traversal and rewriting infrastructure for the syntax tree.
//!
//! # Traversal Order
//!
//! - **Depth-first, pre-order**: a node is presented to the callback before
//!   any of its children.
//! - Children are walked in declared field order, which matches source
//!   order; list children are walked element by element in index order.
//! - Optional children are skipped when absent; they produce no callback.
//! - After the last child of a node, the callback receives one **exit
//!   sentinel** for that node ([`Visitor::leave`] / [`Changer::leave`], or
//!   `f(None)` through the closure adapters).
//!
//! # Control Flow
//!
//! - [`VisitResult::Continue`]: descend into children, then emit the exit
//!   sentinel.
//! - [`VisitResult::Prune`]: do not descend; the pruned node gets **no**
//!   exit sentinel either.
//!
//! # Shared nodes
//!
//! A subtree may be referenced from more than one parent slot (a field type
//! shared by `a, b T` style declarations, for example). Such nodes are
//! walked once per reference path, not once per unique node; callers that
//! need single-visit semantics must track identities themselves.
//!
//! # Visitor Pattern
//!
//! The [`Visitor`] trait provides read-only traversal via [`walk`]:
//!
//! ```ignore
//! use gosyn_syntax::visitor::{walk, VisitResult, Visitor};
//! use gosyn_syntax::nodes::{Expr, Node};
//!
//! struct NameCounter {
//!     count: usize,
//! }
//!
//! impl Visitor for NameCounter {
//!     fn visit(&mut self, node: &Node) -> VisitResult {
//!         if let Node::Expr(Expr::Name(_)) = node {
//!             self.count += 1;
//!         }
//!         VisitResult::Continue
//!     }
//! }
//! ```
//!
//! # Changer Pattern
//!
//! The [`Changer`] trait provides mutating traversal via
//! [`walk_and_change`]. The changer may overwrite the node in its slot
//! before the walk descends; the walker writes the result back into the
//! parent under the slot's static contract and panics with a
//! [`TypeMismatch`](crate::error::TypeMismatch) message if the replacement
//! has the wrong family.
//!
//! ```ignore
//! use gosyn_syntax::visitor::{walk_and_change, Changer, VisitResult};
//! use gosyn_syntax::nodes::{Expr, Name, Node};
//!
//! struct Renamer;
//!
//! impl Changer for Renamer {
//!     fn change(&mut self, node: &mut Node) -> VisitResult {
//!         if let Node::Expr(Expr::Name(n)) = node {
//!             if n.value == "old" {
//!                 *node = Node::Expr(Expr::Name(Name::new("new")));
//!             }
//!         }
//!         VisitResult::Continue
//!     }
//! }
//! ```

mod dispatch;
mod transform;

pub use dispatch::{inspect, walk};
pub use transform::{rewrite, walk_and_change};

use crate::nodes::Node;

/// Result of visiting a node; controls how the walk proceeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VisitResult {
    /// Descend into children; the exit sentinel follows the last child.
    #[default]
    Continue,

    /// Skip this node's children entirely.
    ///
    /// A pruned node receives no exit sentinel: from the callback's point of
    /// view the subtree was never entered.
    Prune,
}

/// Read-only callback capability for [`walk`].
///
/// `visit` runs once per node entered, in pre-order; `leave` is the exit
/// sentinel, running once per node whose `visit` returned
/// [`VisitResult::Continue`], immediately after that node's last child.
pub trait Visitor {
    /// Called when the walk enters `node`.
    fn visit(&mut self, node: &Node) -> VisitResult;

    /// Called after all of `node`'s children have been walked.
    ///
    /// Not called for pruned nodes.
    #[allow(unused_variables)]
    fn leave(&mut self, node: &Node) {}
}

/// Mutating callback capability for [`walk_and_change`].
///
/// `change` receives the slot's current occupant and may overwrite it with a
/// replacement before the walk descends. The walker then writes the
/// (possibly replaced) node back into the parent slot, enforcing the slot's
/// static contract.
pub trait Changer {
    /// Called when the walk enters the node held in `node`'s slot.
    fn change(&mut self, node: &mut Node) -> VisitResult;

    /// The exit sentinel; `node` is the final occupant of the slot.
    ///
    /// Not called for pruned nodes.
    #[allow(unused_variables)]
    fn leave(&mut self, node: &Node) {}
}
