// Copyright (c) the gosyn contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Syntax tree model, traversal, and rewriting for a Go-style language.
//!
//! This crate is the tree core only: it defines the closed set of node
//! kinds and two walks over them. Producing trees (parsing, desugaring) and
//! consuming them (type checking, printing, code generation) are the jobs
//! of other crates; this one guarantees exact traversal order and checked
//! substitution, nothing more.
//!
//! # Overview
//!
//! - **Node model**: sealed families ([`Decl`], [`Expr`], [`Stmt`],
//!   [`SimpleStmt`]) plus standalone kinds, all behind `Rc` handles so that
//!   sharing a subtree between two parent slots is representable. See
//!   [`nodes`].
//! - **Read-only walk**: [`walk`] with a [`Visitor`], or [`inspect`] with a
//!   plain closure. Pre-order, depth-first, with subtree pruning and an
//!   exit sentinel per completed node.
//! - **Rewriting walk**: [`walk_and_change`] with a [`Changer`], or
//!   [`rewrite`] with a plain closure. Identical traversal shape; every
//!   child is written back into its parent slot under the slot's static
//!   contract, and a wrong-family substitution aborts with a
//!   [`TypeMismatch`] panic.
//!
//! # Quick Start
//!
//! ```
//! use std::rc::Rc;
//!
//! use gosyn_syntax::{inspect, Expr, Name, Node, Operation, Operator};
//!
//! // a + b, built by hand the way a parser would.
//! let sum = Expr::from(Rc::new(Operation {
//!     op: Operator::Add,
//!     x: Expr::Name(Name::new("a")),
//!     y: Some(Expr::Name(Name::new("b"))),
//! }));
//!
//! let mut names = 0;
//! inspect(&Node::Expr(sum), |node| {
//!     if let Some(Node::Expr(Expr::Name(_))) = node {
//!         names += 1;
//!     }
//!     true
//! });
//! assert_eq!(names, 2);
//! ```

pub mod error;
pub mod nodes;
pub mod visitor;

pub use error::TypeMismatch;
pub use nodes::*;
pub use visitor::{inspect, rewrite, walk, walk_and_change, Changer, VisitResult, Visitor};
