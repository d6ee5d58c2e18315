// Copyright (c) the gosyn contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Contract-breach errors.
//!
//! The traversal core has no transient failure modes: it performs no I/O and
//! never allocates new node kinds. The one condition it can detect at
//! runtime is a changer substituting a node of the wrong family into a typed
//! slot. That is a programmer error in the changer, so the mutating walker
//! aborts with a panic carrying the [`TypeMismatch`] message rather than
//! threading a `Result` through every slot; continuing with a corrupted
//! tree would poison every downstream pass.
//!
//! The other two contract breaches of the original design are ruled out
//! statically here: entry points take non-optional roots, and both dispatch
//! tables are exhaustive matches over sealed enums, so an absent root or an
//! out-of-grammar node kind cannot be expressed at all.

use thiserror::Error;

/// A mutating write-back received a node that does not satisfy the slot's
/// static contract (e.g. a `BlockStmt` written into an expression slot).
///
/// Surfaces as the panic message of
/// [`walk_and_change`](crate::visitor::walk_and_change); the `TryFrom`
/// conversions on [`Node`](crate::nodes::Node) return it directly for
/// callers that want to check a substitution without committing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("type mismatch: slot expects {expected}, found {found}")]
pub struct TypeMismatch {
    /// What the slot accepts, as a family or kind name.
    pub expected: &'static str,
    /// The kind that was actually supplied.
    pub found: &'static str,
}

impl TypeMismatch {
    pub(crate) fn new(expected: &'static str, found: &'static str) -> Self {
        Self { expected, found }
    }
}
