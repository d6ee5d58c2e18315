// Copyright (c) the gosyn contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Statement nodes and the switch/select helper clauses.

use std::rc::Rc;

use super::decl::Decl;
use super::expr::{Expr, Name};
use super::op::{BranchKind, CallKind, Operator};

/// A statement node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    /// The subset of statements legal in `if`/`for`/`switch` init positions.
    Simple(SimpleStmt),
    Labeled(Rc<LabeledStmt>),
    Block(Rc<BlockStmt>),
    Decl(Rc<DeclStmt>),
    Branch(Rc<BranchStmt>),
    Call(Rc<CallStmt>),
    Return(Rc<ReturnStmt>),
    If(Rc<IfStmt>),
    For(Rc<ForStmt>),
    Switch(Rc<SwitchStmt>),
    Select(Rc<SelectStmt>),
}

/// A simple statement: the only statement forms allowed in the init/post
/// slots of `if`, `for`, and `switch` headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimpleStmt {
    Empty(Rc<EmptyStmt>),
    Expr(Rc<ExprStmt>),
    Send(Rc<SendStmt>),
    Assign(Rc<AssignStmt>),
    Range(Rc<RangeClause>),
}

/// The `;` statement, a leaf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyStmt;

/// `label: stmt`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledStmt {
    pub label: Rc<Name>,
    pub stmt: Stmt,
}

/// `{ stmts }`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockStmt {
    pub stmts: Vec<Stmt>,
}

/// An expression used as a statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExprStmt {
    pub x: Expr,
}

/// `chan <- value`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendStmt {
    pub chan: Expr,
    pub value: Expr,
}

/// A declaration group in statement position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclStmt {
    pub decls: Vec<Decl>,
}

/// `lhs op= rhs`, `lhs = rhs`, or `lhs++`/`lhs--` when `rhs` is absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignStmt {
    /// The compound-assignment operator, absent for plain `=`.
    pub op: Option<Operator>,
    pub lhs: Expr,
    pub rhs: Option<Expr>,
}

/// `break`, `continue`, `goto`, or `fallthrough`, with an optional label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchStmt {
    pub kind: BranchKind,
    pub label: Option<Rc<Name>>,
    /// Resolved branch target, filled in by an external control-flow pass.
    ///
    /// This is a lookup key into a label table kept outside the tree, not a
    /// child: the labeled statement it names is owned by some other parent,
    /// and neither walker ever follows it.
    pub target: Option<LabelId>,
}

/// A key into an externally maintained table of labeled statements.
///
/// Keys are plain indices so that holding one never keeps a subtree alive
/// and never introduces a cycle through the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LabelId(pub u32);

impl LabelId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

/// `go call` or `defer call`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallStmt {
    pub kind: CallKind,
    /// Loosely typed on purpose: a producer may leave a `BadExpr` or a
    /// parenthesized call here, so the slot carries the expression contract
    /// rather than requiring a `CallExpr`.
    pub call: Expr,
}

/// `return results`; results absent for a bare return.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReturnStmt {
    pub results: Option<Expr>,
}

/// `if init; cond { then } else orelse`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IfStmt {
    pub init: Option<SimpleStmt>,
    pub cond: Expr,
    pub then: Rc<BlockStmt>,
    /// Either another `if` or a block; absent when there is no `else` arm.
    pub orelse: Option<Stmt>,
}

/// `for init; cond; post { body }`; every header slot optional.
///
/// A range loop is a `ForStmt` whose `init` is a
/// [`RangeClause`](SimpleStmt::Range) and whose `cond`/`post` are absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForStmt {
    pub init: Option<SimpleStmt>,
    pub cond: Option<Expr>,
    pub post: Option<SimpleStmt>,
    pub body: Rc<BlockStmt>,
}

/// `switch init; tag { cases }`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitchStmt {
    pub init: Option<SimpleStmt>,
    pub tag: Option<Expr>,
    pub body: Vec<Rc<CaseClause>>,
}

/// `select { comms }`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectStmt {
    pub body: Vec<Rc<CommClause>>,
}

/// `lhs := range x` in a `for` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeClause {
    pub lhs: Option<Expr>,
    pub x: Expr,
}

/// `case exprs: body` or `default: body` (`cases` absent) in a `switch`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseClause {
    pub cases: Option<Expr>,
    pub body: Vec<Stmt>,
}

/// `case comm: body` or `default: body` (`comm` absent) in a `select`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommClause {
    pub comm: Option<SimpleStmt>,
    pub body: Vec<Stmt>,
}
