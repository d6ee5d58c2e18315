// Copyright (c) the gosyn contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Expression and type nodes.
//!
//! Types are expressions in this grammar: a slot that holds "a type" is an
//! [`Expr`] slot, and the type kinds (`ArrayType`, `MapType`, ...) are
//! variants of [`Expr`] alongside the value expressions.

use std::rc::Rc;

use super::op::{ChanDir, LitKind, Operator};
use super::stmt::BlockStmt;

/// An expression or type node.
///
/// Cloning an `Expr` clones the `Rc` handle, not the node; placing the same
/// `Expr` in two parent slots aliases the subtree on purpose.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Bad(Rc<BadExpr>),
    Name(Rc<Name>),
    Lit(Rc<BasicLit>),
    Composite(Rc<CompositeLit>),
    KeyValue(Rc<KeyValueExpr>),
    FuncLit(Rc<FuncLit>),
    Paren(Rc<ParenExpr>),
    Selector(Rc<SelectorExpr>),
    Index(Rc<IndexExpr>),
    Slice(Rc<SliceExpr>),
    Assert(Rc<AssertExpr>),
    TypeSwitchGuard(Rc<TypeSwitchGuard>),
    Operation(Rc<Operation>),
    Call(Rc<CallExpr>),
    List(Rc<ListExpr>),
    Array(Rc<ArrayType>),
    SliceType(Rc<SliceType>),
    Dots(Rc<DotsType>),
    Struct(Rc<StructType>),
    Interface(Rc<InterfaceType>),
    Func(Rc<FuncType>),
    Map(Rc<MapType>),
    Chan(Rc<ChanType>),
}

/// Placeholder produced in place of an expression that could not be built.
/// A leaf; it has no children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadExpr;

/// An identifier. A leaf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Name {
    pub value: String,
}

impl Name {
    /// Convenience constructor, handy for producers and tests.
    pub fn new(value: impl Into<String>) -> Rc<Self> {
        Rc::new(Name {
            value: value.into(),
        })
    }
}

/// A literal value with its lexical class. A leaf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicLit {
    pub value: String,
    pub kind: LitKind,
}

/// `T{elem, elem, ...}`; the type is absent in nested untyped literals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositeLit {
    pub ty: Option<Expr>,
    pub elems: Vec<Expr>,
}

/// `key: value` inside a composite literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyValueExpr {
    pub key: Expr,
    pub value: Expr,
}

/// `func(...) {...}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuncLit {
    pub ty: Rc<FuncType>,
    pub body: Rc<BlockStmt>,
}

/// `(x)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParenExpr {
    pub x: Expr,
}

/// `x.sel`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorExpr {
    pub x: Expr,
    pub sel: Rc<Name>,
}

/// `x[index]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexExpr {
    pub x: Expr,
    pub index: Expr,
}

/// `x[lo : hi : max]`, any bound optional.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SliceExpr {
    pub x: Expr,
    pub index: [Option<Expr>; 3],
    /// True for the three-index form, which requires the last two bounds.
    pub full: bool,
}

/// `x.(T)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssertExpr {
    pub x: Expr,
    pub ty: Expr,
}

/// `lhs := x.(type)` in a switch header; `lhs` is absent for the bare form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeSwitchGuard {
    pub lhs: Option<Rc<Name>>,
    pub x: Expr,
}

/// A unary (`y` absent) or binary operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    pub op: Operator,
    pub x: Expr,
    pub y: Option<Expr>,
}

/// `fun(args...)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallExpr {
    pub fun: Expr,
    pub args: Vec<Expr>,
    /// True when the last argument is suffixed with `...`.
    pub has_dots: bool,
}

/// An ordered expression list occupying a single multi-value slot
/// (e.g. the right-hand side of a multi-assignment).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListExpr {
    pub elems: Vec<Expr>,
}

/// `[len]elem`; `len` is absent for `[...]elem` literals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayType {
    pub len: Option<Expr>,
    pub elem: Expr,
}

/// `[]elem`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SliceType {
    pub elem: Expr,
}

/// `...elem`, the variadic marker in a parameter list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DotsType {
    pub elem: Expr,
}

/// `struct { fields }` with an optional tag literal per field.
///
/// `tags` is parallel to `fields`: either empty, or the same length with
/// `None` for untagged fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructType {
    pub fields: Vec<Rc<Field>>,
    pub tags: Vec<Option<Rc<BasicLit>>>,
}

/// A single name/type pairing in a field list; the name is absent for
/// anonymous fields and unnamed parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: Option<Rc<Name>>,
    pub ty: Expr,
}

/// `interface { methods }`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceType {
    pub methods: Vec<Rc<Field>>,
}

/// `func(params) (results)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuncType {
    pub params: Vec<Rc<Field>>,
    pub results: Vec<Rc<Field>>,
}

/// `map[key]value`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapType {
    pub key: Expr,
    pub value: Expr,
}

/// `chan elem`, with direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChanType {
    pub dir: ChanDir,
    pub elem: Expr,
}
