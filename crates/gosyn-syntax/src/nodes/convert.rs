// Copyright (c) the gosyn contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Conversions between typed node handles and the universal [`Node`].
//!
//! Lifting a typed child into a [`Node`] is infallible and is how the
//! walkers hand children to a visitor or changer. The reverse direction is
//! the slot contract: writing a node back into a parent slot goes through
//! `TryFrom<Node>`, and a value of the wrong family fails with
//! [`TypeMismatch`].

use std::rc::Rc;

use crate::error::TypeMismatch;

use super::decl::{ConstDecl, Decl, File, FuncDecl, ImportDecl, TypeDecl, VarDecl};
use super::expr::{
    ArrayType, AssertExpr, BadExpr, BasicLit, CallExpr, ChanType, CompositeLit, DotsType, Expr,
    Field, FuncLit, FuncType, IndexExpr, InterfaceType, KeyValueExpr, ListExpr, MapType, Name,
    Operation, ParenExpr, SelectorExpr, SliceExpr, SliceType, StructType, TypeSwitchGuard,
};
use super::stmt::{
    AssignStmt, BlockStmt, BranchStmt, CallStmt, CaseClause, CommClause, DeclStmt, EmptyStmt,
    ExprStmt, ForStmt, IfStmt, LabeledStmt, RangeClause, ReturnStmt, SelectStmt, SendStmt,
    SimpleStmt, Stmt, SwitchStmt,
};
use super::Node;

// ============================================================================
// Family lifts
// ============================================================================

impl From<Decl> for Node {
    fn from(d: Decl) -> Node {
        Node::Decl(d)
    }
}

impl From<Expr> for Node {
    fn from(e: Expr) -> Node {
        Node::Expr(e)
    }
}

impl From<Stmt> for Node {
    fn from(s: Stmt) -> Node {
        Node::Stmt(s)
    }
}

impl From<SimpleStmt> for Node {
    fn from(s: SimpleStmt) -> Node {
        Node::Stmt(Stmt::Simple(s))
    }
}

impl From<SimpleStmt> for Stmt {
    fn from(s: SimpleStmt) -> Stmt {
        Stmt::Simple(s)
    }
}

// ============================================================================
// Family slot contracts
// ============================================================================

impl TryFrom<Node> for Decl {
    type Error = TypeMismatch;

    fn try_from(node: Node) -> Result<Self, TypeMismatch> {
        match node {
            Node::Decl(d) => Ok(d),
            other => Err(TypeMismatch::new("declaration", other.kind())),
        }
    }
}

impl TryFrom<Node> for Expr {
    type Error = TypeMismatch;

    fn try_from(node: Node) -> Result<Self, TypeMismatch> {
        match node {
            Node::Expr(e) => Ok(e),
            other => Err(TypeMismatch::new("expression", other.kind())),
        }
    }
}

impl TryFrom<Node> for Stmt {
    type Error = TypeMismatch;

    fn try_from(node: Node) -> Result<Self, TypeMismatch> {
        match node {
            Node::Stmt(s) => Ok(s),
            other => Err(TypeMismatch::new("statement", other.kind())),
        }
    }
}

impl TryFrom<Node> for SimpleStmt {
    type Error = TypeMismatch;

    fn try_from(node: Node) -> Result<Self, TypeMismatch> {
        match node {
            Node::Stmt(Stmt::Simple(s)) => Ok(s),
            other => Err(TypeMismatch::new("simple statement", other.kind())),
        }
    }
}

// ============================================================================
// Concrete slot contracts
// ============================================================================

/// Implements the `Rc<T>` ⇄ [`Node`] pair for one node kind: the infallible
/// lift used when handing a child to a callback, and the checked extraction
/// used when writing a callback's result back into a typed slot.
macro_rules! impl_slot {
    ($ty:ty, $kind:literal, |$n:ident| $wrap:expr, $pat:pat => $out:expr) => {
        impl From<Rc<$ty>> for Node {
            fn from($n: Rc<$ty>) -> Node {
                $wrap
            }
        }

        impl TryFrom<Node> for Rc<$ty> {
            type Error = TypeMismatch;

            fn try_from(node: Node) -> Result<Self, TypeMismatch> {
                match node {
                    $pat => Ok($out),
                    other => Err(TypeMismatch::new($kind, other.kind())),
                }
            }
        }
    };
}

impl_slot!(File, "File", |n| Node::File(n), Node::File(n) => n);
impl_slot!(Name, "Name", |n| Node::Expr(Expr::Name(n)), Node::Expr(Expr::Name(n)) => n);
impl_slot!(BasicLit, "BasicLit", |n| Node::Expr(Expr::Lit(n)), Node::Expr(Expr::Lit(n)) => n);
impl_slot!(FuncType, "FuncType", |n| Node::Expr(Expr::Func(n)), Node::Expr(Expr::Func(n)) => n);
impl_slot!(BlockStmt, "BlockStmt", |n| Node::Stmt(Stmt::Block(n)), Node::Stmt(Stmt::Block(n)) => n);
impl_slot!(Field, "Field", |n| Node::Field(n), Node::Field(n) => n);
impl_slot!(CaseClause, "CaseClause", |n| Node::Case(n), Node::Case(n) => n);
impl_slot!(CommClause, "CommClause", |n| Node::Comm(n), Node::Comm(n) => n);

// ============================================================================
// Per-kind lifts into the families
// ============================================================================

/// Implements `From<Rc<T>>` for a family enum, so producers and changers can
/// wrap a freshly built node without spelling the variant path.
macro_rules! impl_family_from {
    ($family:ident { $($variant:ident($ty:ty)),* $(,)? }) => {
        $(
            impl From<Rc<$ty>> for $family {
                fn from(n: Rc<$ty>) -> $family {
                    $family::$variant(n)
                }
            }

            impl From<Rc<$ty>> for Node {
                fn from(n: Rc<$ty>) -> Node {
                    Node::from($family::$variant(n))
                }
            }
        )*
    };
}

impl_family_from!(Decl {
    Import(ImportDecl),
    Const(ConstDecl),
    Var(VarDecl),
    Type(TypeDecl),
    Func(FuncDecl),
});

impl_family_from!(Expr {
    Bad(BadExpr),
    Composite(CompositeLit),
    KeyValue(KeyValueExpr),
    FuncLit(FuncLit),
    Paren(ParenExpr),
    Selector(SelectorExpr),
    Index(IndexExpr),
    Slice(SliceExpr),
    Assert(AssertExpr),
    TypeSwitchGuard(TypeSwitchGuard),
    Operation(Operation),
    Call(CallExpr),
    List(ListExpr),
    Array(ArrayType),
    SliceType(SliceType),
    Dots(DotsType),
    Struct(StructType),
    Interface(InterfaceType),
    Map(MapType),
    Chan(ChanType),
});

impl_family_from!(Stmt {
    Labeled(LabeledStmt),
    Decl(DeclStmt),
    Branch(BranchStmt),
    Call(CallStmt),
    Return(ReturnStmt),
    If(IfStmt),
    For(ForStmt),
    Switch(SwitchStmt),
    Select(SelectStmt),
});

impl_family_from!(SimpleStmt {
    Empty(EmptyStmt),
    Expr(ExprStmt),
    Send(SendStmt),
    Assign(AssignStmt),
    Range(RangeClause),
});

// The kinds above whose `Node` lift is hand-written in `impl_slot!` still
// get their family lift here.

impl From<Rc<Name>> for Expr {
    fn from(n: Rc<Name>) -> Expr {
        Expr::Name(n)
    }
}

impl From<Rc<BasicLit>> for Expr {
    fn from(n: Rc<BasicLit>) -> Expr {
        Expr::Lit(n)
    }
}

impl From<Rc<FuncType>> for Expr {
    fn from(n: Rc<FuncType>) -> Expr {
        Expr::Func(n)
    }
}

impl From<Rc<BlockStmt>> for Stmt {
    fn from(n: Rc<BlockStmt>) -> Stmt {
        Stmt::Block(n)
    }
}
