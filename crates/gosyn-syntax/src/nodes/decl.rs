// Copyright (c) the gosyn contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! File and declaration nodes.

use std::rc::Rc;

use super::expr::{BasicLit, Expr, Field, FuncType, Name};
use super::stmt::BlockStmt;

/// A source file: package clause plus top-level declarations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    pub pkg_name: Rc<Name>,
    pub decls: Vec<Decl>,
}

/// A top-level or statement-level declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decl {
    Import(Rc<ImportDecl>),
    Const(Rc<ConstDecl>),
    Var(Rc<VarDecl>),
    Type(Rc<TypeDecl>),
    Func(Rc<FuncDecl>),
}

/// `import local "path"`; the local name is absent for plain imports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportDecl {
    pub local_pkg_name: Option<Rc<Name>>,
    pub path: Rc<BasicLit>,
}

/// `const a, b T = x, y`; type and values are each optional.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstDecl {
    pub names: Vec<Rc<Name>>,
    pub ty: Option<Expr>,
    pub values: Option<Expr>,
}

/// `var a, b T = x, y`; same shape as a const declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VarDecl {
    pub names: Vec<Rc<Name>>,
    pub ty: Option<Expr>,
    pub values: Option<Expr>,
}

/// `type Name[TParams] Underlying`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDecl {
    pub name: Rc<Name>,
    pub tparams: Vec<Rc<Field>>,
    /// True for `type T = U` alias declarations.
    pub alias: bool,
    pub ty: Expr,
}

/// `func (recv) Name[TParams](params) (results) { body }`
///
/// The receiver is absent for plain functions; the body is absent for
/// declarations linked against external code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuncDecl {
    pub recv: Option<Rc<Field>>,
    pub name: Rc<Name>,
    pub tparams: Vec<Rc<Field>>,
    pub ty: Rc<FuncType>,
    pub body: Option<Rc<BlockStmt>>,
}
