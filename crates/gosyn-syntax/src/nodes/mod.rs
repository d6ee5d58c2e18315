// Copyright (c) the gosyn contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! The syntax tree node model.
//!
//! # Families
//!
//! Nodes are grouped into sealed families ([`Decl`], [`Expr`], [`Stmt`],
//! and its [`SimpleStmt`] subset) plus a handful of standalone kinds
//! ([`File`], [`Field`], [`CaseClause`], [`CommClause`]) that occupy
//! dedicated slots. Every variant holds an `Rc` to the concrete node, so
//! cloning a family value is cheap and sharing a subtree between two parent
//! slots is a deliberate, representable state.
//!
//! # The universal handle
//!
//! [`Node`] is the type-erased handle the traversal capabilities see: any
//! node of any family, wrapped once. Converting a typed child into a `Node`
//! is infallible ([`From`]); converting a `Node` back into a typed slot is
//! checked ([`TryFrom`], failing with
//! [`TypeMismatch`](crate::error::TypeMismatch)).
//!
//! # What is not a child
//!
//! Fields like [`BranchStmt::target`] are lookup keys into side tables, not
//! node references; they are invisible to traversal by construction.

mod convert;
pub mod decl;
pub mod expr;
pub mod op;
pub mod stmt;

pub use decl::{ConstDecl, Decl, File, FuncDecl, ImportDecl, TypeDecl, VarDecl};
pub use expr::{
    ArrayType, AssertExpr, BadExpr, BasicLit, CallExpr, ChanType, CompositeLit, DotsType, Expr,
    Field, FuncLit, FuncType, IndexExpr, InterfaceType, KeyValueExpr, ListExpr, MapType, Name,
    Operation, ParenExpr, SelectorExpr, SliceExpr, SliceType, StructType, TypeSwitchGuard,
};
pub use op::{BranchKind, CallKind, ChanDir, LitKind, Operator};
pub use stmt::{
    AssignStmt, BlockStmt, BranchStmt, CallStmt, CaseClause, CommClause, DeclStmt, EmptyStmt,
    ExprStmt, ForStmt, IfStmt, LabelId, LabeledStmt, RangeClause, ReturnStmt, SelectStmt,
    SendStmt, SimpleStmt, Stmt, SwitchStmt,
};

use std::rc::Rc;

/// A type-erased handle to any node in the tree.
///
/// This is the value passed to [`Visitor`](crate::visitor::Visitor) and
/// [`Changer`](crate::visitor::Changer) implementations. It is cheap to
/// clone (one enum copy plus an `Rc` bump).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    File(Rc<File>),
    Decl(Decl),
    Expr(Expr),
    Stmt(Stmt),
    Field(Rc<Field>),
    Case(Rc<CaseClause>),
    Comm(Rc<CommClause>),
}

impl Node {
    /// The concrete kind name of this node, e.g. `"IfStmt"` or `"Name"`.
    ///
    /// Stable across releases; used in contract-breach diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Node::File(_) => "File",
            Node::Decl(d) => d.kind(),
            Node::Expr(e) => e.kind(),
            Node::Stmt(s) => s.kind(),
            Node::Field(_) => "Field",
            Node::Case(_) => "CaseClause",
            Node::Comm(_) => "CommClause",
        }
    }
}

impl Decl {
    /// The concrete kind name of this declaration.
    pub fn kind(&self) -> &'static str {
        match self {
            Decl::Import(_) => "ImportDecl",
            Decl::Const(_) => "ConstDecl",
            Decl::Var(_) => "VarDecl",
            Decl::Type(_) => "TypeDecl",
            Decl::Func(_) => "FuncDecl",
        }
    }
}

impl Expr {
    /// The concrete kind name of this expression or type.
    pub fn kind(&self) -> &'static str {
        match self {
            Expr::Bad(_) => "BadExpr",
            Expr::Name(_) => "Name",
            Expr::Lit(_) => "BasicLit",
            Expr::Composite(_) => "CompositeLit",
            Expr::KeyValue(_) => "KeyValueExpr",
            Expr::FuncLit(_) => "FuncLit",
            Expr::Paren(_) => "ParenExpr",
            Expr::Selector(_) => "SelectorExpr",
            Expr::Index(_) => "IndexExpr",
            Expr::Slice(_) => "SliceExpr",
            Expr::Assert(_) => "AssertExpr",
            Expr::TypeSwitchGuard(_) => "TypeSwitchGuard",
            Expr::Operation(_) => "Operation",
            Expr::Call(_) => "CallExpr",
            Expr::List(_) => "ListExpr",
            Expr::Array(_) => "ArrayType",
            Expr::SliceType(_) => "SliceType",
            Expr::Dots(_) => "DotsType",
            Expr::Struct(_) => "StructType",
            Expr::Interface(_) => "InterfaceType",
            Expr::Func(_) => "FuncType",
            Expr::Map(_) => "MapType",
            Expr::Chan(_) => "ChanType",
        }
    }
}

impl Stmt {
    /// The concrete kind name of this statement.
    pub fn kind(&self) -> &'static str {
        match self {
            Stmt::Simple(s) => s.kind(),
            Stmt::Labeled(_) => "LabeledStmt",
            Stmt::Block(_) => "BlockStmt",
            Stmt::Decl(_) => "DeclStmt",
            Stmt::Branch(_) => "BranchStmt",
            Stmt::Call(_) => "CallStmt",
            Stmt::Return(_) => "ReturnStmt",
            Stmt::If(_) => "IfStmt",
            Stmt::For(_) => "ForStmt",
            Stmt::Switch(_) => "SwitchStmt",
            Stmt::Select(_) => "SelectStmt",
        }
    }
}

impl SimpleStmt {
    /// The concrete kind name of this simple statement.
    pub fn kind(&self) -> &'static str {
        match self {
            SimpleStmt::Empty(_) => "EmptyStmt",
            SimpleStmt::Expr(_) => "ExprStmt",
            SimpleStmt::Send(_) => "SendStmt",
            SimpleStmt::Assign(_) => "AssignStmt",
            SimpleStmt::Range(_) => "RangeClause",
        }
    }
}
