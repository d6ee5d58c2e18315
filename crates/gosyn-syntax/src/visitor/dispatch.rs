// Copyright (c) the gosyn contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! The read-only walk.
//!
//! [`walk`] drives a [`Visitor`] over a tree in depth-first pre-order;
//! [`inspect`] adapts a plain closure into a visitor. The child table in
//! [`Walker::children`] is the single source of truth for which fields are
//! children and in what order; the rewriting walk mirrors it exactly.
//!
//! The dispatch is an exhaustive match over the sealed node families, with
//! no fallback arm: adding a node kind fails compilation here until its
//! children are enumerated.

use crate::nodes::{Decl, Expr, Node, SimpleStmt, Stmt};

use super::{VisitResult, Visitor};

/// Walks the tree rooted at `root` in pre-order, driving `visitor`.
///
/// For every node entered, `visitor.visit` runs first; if it returns
/// [`VisitResult::Continue`], each non-absent child is walked in declared
/// order and `visitor.leave` runs once after the last of them. A node whose
/// `visit` returns [`VisitResult::Prune`] contributes neither children nor a
/// `leave` call.
///
/// Nodes shared between multiple parent slots are walked once per reference
/// path. A branch statement's resolved target is a side-table key, not a
/// child, and is never followed.
pub fn walk<V: Visitor + ?Sized>(root: &Node, visitor: &mut V) {
    Walker { v: visitor }.node(root);
}

/// Walks the tree rooted at `root`, calling `f(Some(node))` for every node
/// entered. If `f` returns `true` the walk descends into the node's
/// children and then calls `f(None)` once as the exit sentinel; if it
/// returns `false` the subtree is pruned and no sentinel is emitted.
pub fn inspect<F>(root: &Node, f: F)
where
    F: FnMut(Option<&Node>) -> bool,
{
    struct Inspector<F>(F);

    impl<F> Visitor for Inspector<F>
    where
        F: FnMut(Option<&Node>) -> bool,
    {
        fn visit(&mut self, node: &Node) -> VisitResult {
            if (self.0)(Some(node)) {
                VisitResult::Continue
            } else {
                VisitResult::Prune
            }
        }

        fn leave(&mut self, _node: &Node) {
            (self.0)(None);
        }
    }

    walk(root, &mut Inspector(f));
}

struct Walker<'v, V: ?Sized> {
    v: &'v mut V,
}

impl<V: Visitor + ?Sized> Walker<'_, V> {
    fn node(&mut self, n: &Node) {
        if self.v.visit(n) == VisitResult::Prune {
            return;
        }
        self.children(n);
        self.v.leave(n);
    }

    fn child<T>(&mut self, child: &T)
    where
        T: Clone + Into<Node>,
    {
        self.node(&child.clone().into());
    }

    fn list<T>(&mut self, list: &[T])
    where
        T: Clone + Into<Node>,
    {
        for child in list {
            self.child(child);
        }
    }

    fn children(&mut self, n: &Node) {
        match n {
            Node::File(file) => {
                self.child(&file.pkg_name);
                self.list(&file.decls);
            }

            Node::Decl(d) => self.decl(d),
            Node::Expr(e) => self.expr(e),
            Node::Stmt(s) => self.stmt(s),

            Node::Field(field) => {
                if let Some(name) = &field.name {
                    self.child(name);
                }
                self.child(&field.ty);
            }

            Node::Case(clause) => {
                if let Some(cases) = &clause.cases {
                    self.child(cases);
                }
                self.list(&clause.body);
            }

            Node::Comm(clause) => {
                if let Some(comm) = &clause.comm {
                    self.child(comm);
                }
                self.list(&clause.body);
            }
        }
    }

    fn decl(&mut self, d: &Decl) {
        match d {
            Decl::Import(n) => {
                if let Some(local) = &n.local_pkg_name {
                    self.child(local);
                }
                self.child(&n.path);
            }

            Decl::Const(n) => {
                self.list(&n.names);
                if let Some(ty) = &n.ty {
                    self.child(ty);
                }
                if let Some(values) = &n.values {
                    self.child(values);
                }
            }

            Decl::Var(n) => {
                self.list(&n.names);
                if let Some(ty) = &n.ty {
                    self.child(ty);
                }
                if let Some(values) = &n.values {
                    self.child(values);
                }
            }

            Decl::Type(n) => {
                self.child(&n.name);
                self.list(&n.tparams);
                self.child(&n.ty);
            }

            Decl::Func(n) => {
                if let Some(recv) = &n.recv {
                    self.child(recv);
                }
                self.child(&n.name);
                self.list(&n.tparams);
                self.child(&n.ty);
                if let Some(body) = &n.body {
                    self.child(body);
                }
            }
        }
    }

    fn expr(&mut self, e: &Expr) {
        match e {
            // leaves
            Expr::Bad(_) | Expr::Name(_) | Expr::Lit(_) => {}

            Expr::Composite(n) => {
                if let Some(ty) = &n.ty {
                    self.child(ty);
                }
                self.list(&n.elems);
            }

            Expr::KeyValue(n) => {
                self.child(&n.key);
                self.child(&n.value);
            }

            Expr::FuncLit(n) => {
                self.child(&n.ty);
                self.child(&n.body);
            }

            Expr::Paren(n) => self.child(&n.x),

            Expr::Selector(n) => {
                self.child(&n.x);
                self.child(&n.sel);
            }

            Expr::Index(n) => {
                self.child(&n.x);
                self.child(&n.index);
            }

            Expr::Slice(n) => {
                self.child(&n.x);
                for bound in n.index.iter().flatten() {
                    self.child(bound);
                }
            }

            Expr::Assert(n) => {
                self.child(&n.x);
                self.child(&n.ty);
            }

            Expr::TypeSwitchGuard(n) => {
                if let Some(lhs) = &n.lhs {
                    self.child(lhs);
                }
                self.child(&n.x);
            }

            Expr::Operation(n) => {
                self.child(&n.x);
                if let Some(y) = &n.y {
                    self.child(y);
                }
            }

            Expr::Call(n) => {
                self.child(&n.fun);
                self.list(&n.args);
            }

            Expr::List(n) => self.list(&n.elems),

            Expr::Array(n) => {
                if let Some(len) = &n.len {
                    self.child(len);
                }
                self.child(&n.elem);
            }

            Expr::SliceType(n) => self.child(&n.elem),
            Expr::Dots(n) => self.child(&n.elem),

            Expr::Struct(n) => {
                self.list(&n.fields);
                for tag in n.tags.iter().flatten() {
                    self.child(tag);
                }
            }

            Expr::Interface(n) => self.list(&n.methods),

            Expr::Func(n) => {
                self.list(&n.params);
                self.list(&n.results);
            }

            Expr::Map(n) => {
                self.child(&n.key);
                self.child(&n.value);
            }

            Expr::Chan(n) => self.child(&n.elem),
        }
    }

    fn stmt(&mut self, s: &Stmt) {
        match s {
            Stmt::Simple(s) => self.simple_stmt(s),

            Stmt::Labeled(n) => {
                self.child(&n.label);
                self.child(&n.stmt);
            }

            Stmt::Block(n) => self.list(&n.stmts),

            Stmt::Decl(n) => self.list(&n.decls),

            Stmt::Branch(n) => {
                if let Some(label) = &n.label {
                    self.child(label);
                }
                // n.target names a labeled statement owned elsewhere in the
                // tree; it is a side-table key, never a child.
            }

            Stmt::Call(n) => self.child(&n.call),

            Stmt::Return(n) => {
                if let Some(results) = &n.results {
                    self.child(results);
                }
            }

            Stmt::If(n) => {
                if let Some(init) = &n.init {
                    self.child(init);
                }
                self.child(&n.cond);
                self.child(&n.then);
                if let Some(orelse) = &n.orelse {
                    self.child(orelse);
                }
            }

            Stmt::For(n) => {
                if let Some(init) = &n.init {
                    self.child(init);
                }
                if let Some(cond) = &n.cond {
                    self.child(cond);
                }
                if let Some(post) = &n.post {
                    self.child(post);
                }
                self.child(&n.body);
            }

            Stmt::Switch(n) => {
                if let Some(init) = &n.init {
                    self.child(init);
                }
                if let Some(tag) = &n.tag {
                    self.child(tag);
                }
                self.list(&n.body);
            }

            Stmt::Select(n) => self.list(&n.body),
        }
    }

    fn simple_stmt(&mut self, s: &SimpleStmt) {
        match s {
            SimpleStmt::Empty(_) => {}

            SimpleStmt::Expr(n) => self.child(&n.x),

            SimpleStmt::Send(n) => {
                self.child(&n.chan);
                self.child(&n.value);
            }

            SimpleStmt::Assign(n) => {
                self.child(&n.lhs);
                if let Some(rhs) = &n.rhs {
                    self.child(rhs);
                }
            }

            SimpleStmt::Range(n) => {
                if let Some(lhs) = &n.lhs {
                    self.child(lhs);
                }
                self.child(&n.x);
            }
        }
    }
}
