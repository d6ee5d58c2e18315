// Copyright (c) the gosyn contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! The rewriting walk.
//!
//! [`walk_and_change`] mirrors the read-only walk node for node, but every
//! child travels through the [`Changer`] and is written back into its parent
//! slot. Write-back is checked: the slot's `TryFrom<Node>` contract must
//! accept the (possibly replaced) node, and a replacement of the wrong
//! family aborts the walk with a panic carrying the
//! [`TypeMismatch`](crate::error::TypeMismatch) message.
//!
//! Parents are updated through `Rc::make_mut`, so a rewrite reaching a node
//! through one reference path never mutates the tree seen through an
//! aliased path: shared subtrees are copied on first write and the aliases
//! diverge from there. List slots are rewritten element-wise in place;
//! their length never changes.

use std::rc::Rc;

use crate::error::TypeMismatch;
use crate::nodes::{Decl, Expr, Node, SimpleStmt, Stmt};

use super::{Changer, VisitResult};

/// Walks the tree rooted at `root` in pre-order, driving `changer`, and
/// returns the node that ends up occupying the root slot.
///
/// For every node entered, `changer.change` runs first and may overwrite the
/// slot; if it returns [`VisitResult::Continue`], each non-absent child slot
/// is rewritten in declared order and `changer.leave` runs once after the
/// last of them. On [`VisitResult::Prune`] the slot's current occupant is
/// kept as-is, children unvisited, with no `leave` call.
///
/// Replacing the root only affects the return value: references the caller
/// already holds to the original root are left untouched.
///
/// # Panics
///
/// Panics if a replacement does not satisfy the static contract of the slot
/// it is written back into, for example a statement substituted into an
/// expression-only slot. No further traversal happens past the
/// offending slot.
pub fn walk_and_change<C: Changer + ?Sized>(root: Node, changer: &mut C) -> Node {
    Rewriter { c: changer }.node(root)
}

/// Closure adapter for [`walk_and_change`]: `f(Some(slot))` runs for every
/// node entered and may overwrite the slot; returning `false` prunes the
/// subtree. `f(None)` is the exit sentinel, mirroring [`inspect`].
///
/// [`inspect`]: super::inspect
pub fn rewrite<F>(root: Node, f: F) -> Node
where
    F: FnMut(Option<&mut Node>) -> bool,
{
    struct Adapter<F>(F);

    impl<F> Changer for Adapter<F>
    where
        F: FnMut(Option<&mut Node>) -> bool,
    {
        fn change(&mut self, node: &mut Node) -> VisitResult {
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

    walk_and_change(root, &mut Adapter(f))
}

struct Rewriter<'c, C: ?Sized> {
    c: &'c mut C,
}

impl<C: Changer + ?Sized> Rewriter<'_, C> {
    fn node(&mut self, mut n: Node) -> Node {
        if self.c.change(&mut n) == VisitResult::Prune {
            return n;
        }
        self.children(&mut n);
        self.c.leave(&n);
        n
    }

    /// Rewrites one child and converts it back to the slot's type, aborting
    /// on a contract breach.
    fn slot<T>(&mut self, child: T) -> T
    where
        T: Into<Node> + TryFrom<Node, Error = TypeMismatch>,
    {
        match T::try_from(self.node(child.into())) {
            Ok(child) => child,
            Err(err) => panic!("{err}"),
        }
    }

    fn list<T>(&mut self, list: &mut [T])
    where
        T: Clone + Into<Node> + TryFrom<Node, Error = TypeMismatch>,
    {
        for slot in list {
            *slot = self.slot(slot.clone());
        }
    }

    fn children(&mut self, n: &mut Node) {
        match n {
            Node::File(file) => {
                let file = Rc::make_mut(file);
                file.pkg_name = self.slot(file.pkg_name.clone());
                self.list(&mut file.decls);
            }

            Node::Decl(d) => self.decl(d),
            Node::Expr(e) => self.expr(e),
            Node::Stmt(s) => self.stmt(s),

            Node::Field(field) => {
                let field = Rc::make_mut(field);
                if let Some(name) = &mut field.name {
                    *name = self.slot(name.clone());
                }
                field.ty = self.slot(field.ty.clone());
            }

            Node::Case(clause) => {
                let clause = Rc::make_mut(clause);
                if let Some(cases) = &mut clause.cases {
                    *cases = self.slot(cases.clone());
                }
                self.list(&mut clause.body);
            }

            Node::Comm(clause) => {
                let clause = Rc::make_mut(clause);
                if let Some(comm) = &mut clause.comm {
                    *comm = self.slot(comm.clone());
                }
                self.list(&mut clause.body);
            }
        }
    }

    fn decl(&mut self, d: &mut Decl) {
        match d {
            Decl::Import(n) => {
                let n = Rc::make_mut(n);
                if let Some(local) = &mut n.local_pkg_name {
                    *local = self.slot(local.clone());
                }
                n.path = self.slot(n.path.clone());
            }

            Decl::Const(n) => {
                let n = Rc::make_mut(n);
                self.list(&mut n.names);
                if let Some(ty) = &mut n.ty {
                    *ty = self.slot(ty.clone());
                }
                if let Some(values) = &mut n.values {
                    *values = self.slot(values.clone());
                }
            }

            Decl::Var(n) => {
                let n = Rc::make_mut(n);
                self.list(&mut n.names);
                if let Some(ty) = &mut n.ty {
                    *ty = self.slot(ty.clone());
                }
                if let Some(values) = &mut n.values {
                    *values = self.slot(values.clone());
                }
            }

            Decl::Type(n) => {
                let n = Rc::make_mut(n);
                n.name = self.slot(n.name.clone());
                self.list(&mut n.tparams);
                n.ty = self.slot(n.ty.clone());
            }

            Decl::Func(n) => {
                let n = Rc::make_mut(n);
                if let Some(recv) = &mut n.recv {
                    *recv = self.slot(recv.clone());
                }
                n.name = self.slot(n.name.clone());
                self.list(&mut n.tparams);
                n.ty = self.slot(n.ty.clone());
                if let Some(body) = &mut n.body {
                    *body = self.slot(body.clone());
                }
            }
        }
    }

    fn expr(&mut self, e: &mut Expr) {
        match e {
            // leaves
            Expr::Bad(_) | Expr::Name(_) | Expr::Lit(_) => {}

            Expr::Composite(n) => {
                let n = Rc::make_mut(n);
                if let Some(ty) = &mut n.ty {
                    *ty = self.slot(ty.clone());
                }
                self.list(&mut n.elems);
            }

            Expr::KeyValue(n) => {
                let n = Rc::make_mut(n);
                n.key = self.slot(n.key.clone());
                n.value = self.slot(n.value.clone());
            }

            Expr::FuncLit(n) => {
                let n = Rc::make_mut(n);
                n.ty = self.slot(n.ty.clone());
                n.body = self.slot(n.body.clone());
            }

            Expr::Paren(n) => {
                let n = Rc::make_mut(n);
                n.x = self.slot(n.x.clone());
            }

            Expr::Selector(n) => {
                let n = Rc::make_mut(n);
                n.x = self.slot(n.x.clone());
                n.sel = self.slot(n.sel.clone());
            }

            Expr::Index(n) => {
                let n = Rc::make_mut(n);
                n.x = self.slot(n.x.clone());
                n.index = self.slot(n.index.clone());
            }

            Expr::Slice(n) => {
                let n = Rc::make_mut(n);
                n.x = self.slot(n.x.clone());
                for bound in n.index.iter_mut().flatten() {
                    *bound = self.slot(bound.clone());
                }
            }

            Expr::Assert(n) => {
                let n = Rc::make_mut(n);
                n.x = self.slot(n.x.clone());
                n.ty = self.slot(n.ty.clone());
            }

            Expr::TypeSwitchGuard(n) => {
                let n = Rc::make_mut(n);
                if let Some(lhs) = &mut n.lhs {
                    *lhs = self.slot(lhs.clone());
                }
                n.x = self.slot(n.x.clone());
            }

            Expr::Operation(n) => {
                let n = Rc::make_mut(n);
                n.x = self.slot(n.x.clone());
                if let Some(y) = &mut n.y {
                    *y = self.slot(y.clone());
                }
            }

            Expr::Call(n) => {
                let n = Rc::make_mut(n);
                n.fun = self.slot(n.fun.clone());
                self.list(&mut n.args);
            }

            Expr::List(n) => {
                let n = Rc::make_mut(n);
                self.list(&mut n.elems);
            }

            Expr::Array(n) => {
                let n = Rc::make_mut(n);
                if let Some(len) = &mut n.len {
                    *len = self.slot(len.clone());
                }
                n.elem = self.slot(n.elem.clone());
            }

            Expr::SliceType(n) => {
                let n = Rc::make_mut(n);
                n.elem = self.slot(n.elem.clone());
            }

            Expr::Dots(n) => {
                let n = Rc::make_mut(n);
                n.elem = self.slot(n.elem.clone());
            }

            Expr::Struct(n) => {
                let n = Rc::make_mut(n);
                self.list(&mut n.fields);
                for tag in n.tags.iter_mut().flatten() {
                    *tag = self.slot(tag.clone());
                }
            }

            Expr::Interface(n) => {
                let n = Rc::make_mut(n);
                self.list(&mut n.methods);
            }

            Expr::Func(n) => {
                let n = Rc::make_mut(n);
                self.list(&mut n.params);
                self.list(&mut n.results);
            }

            Expr::Map(n) => {
                let n = Rc::make_mut(n);
                n.key = self.slot(n.key.clone());
                n.value = self.slot(n.value.clone());
            }

            Expr::Chan(n) => {
                let n = Rc::make_mut(n);
                n.elem = self.slot(n.elem.clone());
            }
        }
    }

    fn stmt(&mut self, s: &mut Stmt) {
        match s {
            Stmt::Simple(s) => self.simple_stmt(s),

            Stmt::Labeled(n) => {
                let n = Rc::make_mut(n);
                n.label = self.slot(n.label.clone());
                n.stmt = self.slot(n.stmt.clone());
            }

            Stmt::Block(n) => {
                let n = Rc::make_mut(n);
                self.list(&mut n.stmts);
            }

            Stmt::Decl(n) => {
                let n = Rc::make_mut(n);
                self.list(&mut n.decls);
            }

            Stmt::Branch(n) => {
                let n = Rc::make_mut(n);
                if let Some(label) = &mut n.label {
                    *label = self.slot(label.clone());
                }
                // n.target is a side-table key, never a child slot.
            }

            Stmt::Call(n) => {
                let n = Rc::make_mut(n);
                n.call = self.slot(n.call.clone());
            }

            Stmt::Return(n) => {
                let n = Rc::make_mut(n);
                if let Some(results) = &mut n.results {
                    *results = self.slot(results.clone());
                }
            }

            Stmt::If(n) => {
                let n = Rc::make_mut(n);
                if let Some(init) = &mut n.init {
                    *init = self.slot(init.clone());
                }
                n.cond = self.slot(n.cond.clone());
                n.then = self.slot(n.then.clone());
                if let Some(orelse) = &mut n.orelse {
                    *orelse = self.slot(orelse.clone());
                }
            }

            Stmt::For(n) => {
                let n = Rc::make_mut(n);
                if let Some(init) = &mut n.init {
                    *init = self.slot(init.clone());
                }
                if let Some(cond) = &mut n.cond {
                    *cond = self.slot(cond.clone());
                }
                if let Some(post) = &mut n.post {
                    *post = self.slot(post.clone());
                }
                n.body = self.slot(n.body.clone());
            }

            Stmt::Switch(n) => {
                let n = Rc::make_mut(n);
                if let Some(init) = &mut n.init {
                    *init = self.slot(init.clone());
                }
                if let Some(tag) = &mut n.tag {
                    *tag = self.slot(tag.clone());
                }
                self.list(&mut n.body);
            }

            Stmt::Select(n) => {
                let n = Rc::make_mut(n);
                self.list(&mut n.body);
            }
        }
    }

    fn simple_stmt(&mut self, s: &mut SimpleStmt) {
        match s {
            SimpleStmt::Empty(_) => {}

            SimpleStmt::Expr(n) => {
                let n = Rc::make_mut(n);
                n.x = self.slot(n.x.clone());
            }

            SimpleStmt::Send(n) => {
                let n = Rc::make_mut(n);
                n.chan = self.slot(n.chan.clone());
                n.value = self.slot(n.value.clone());
            }

            SimpleStmt::Assign(n) => {
                let n = Rc::make_mut(n);
                n.lhs = self.slot(n.lhs.clone());
                if let Some(rhs) = &mut n.rhs {
                    *rhs = self.slot(rhs.clone());
                }
            }

            SimpleStmt::Range(n) => {
                let n = Rc::make_mut(n);
                if let Some(lhs) = &mut n.lhs {
                    *lhs = self.slot(lhs.clone());
                }
                n.x = self.slot(n.x.clone());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use crate::nodes::{
        BasicLit, BlockStmt, CallExpr, Expr, ExprStmt, IfStmt, LitKind, Name, Node, SimpleStmt,
        Stmt,
    };
    use crate::visitor::inspect;

    use super::*;

    fn lit(value: &str) -> Expr {
        Expr::from(Rc::new(BasicLit {
            value: value.to_string(),
            kind: LitKind::Int,
        }))
    }

    fn call(fun: &str, args: Vec<Expr>) -> Expr {
        Expr::from(Rc::new(CallExpr {
            fun: Expr::Name(Name::new(fun)),
            args,
            has_dots: false,
        }))
    }

    fn expr_stmt(x: Expr) -> Stmt {
        Stmt::Simple(SimpleStmt::from(Rc::new(ExprStmt { x })))
    }

    fn if_stmt(cond: Expr, then: Vec<Stmt>) -> Stmt {
        Stmt::from(Rc::new(IfStmt {
            init: None,
            cond,
            then: Rc::new(BlockStmt { stmts: then }),
            orelse: None,
        }))
    }

    #[test]
    fn identity_changer_round_trips() {
        let original = if_stmt(
            Expr::Name(Name::new("cond")),
            vec![expr_stmt(call("g", vec![lit("1"), lit("2")]))],
        );

        let out = rewrite(Node::Stmt(original.clone()), |_| true);

        assert_eq!(out, Node::Stmt(original));
    }

    #[test]
    fn literal_substitution_rewrites_every_occurrence() {
        let tree = if_stmt(
            Expr::Name(Name::new("cond")),
            vec![
                expr_stmt(call("g", vec![lit("1"), lit("2")])),
                expr_stmt(call("h", vec![lit("2")])),
            ],
        );

        let out = rewrite(Node::Stmt(tree), |node| {
            if let Some(slot) = node {
                if matches!(&*slot, Node::Expr(Expr::Lit(l)) if l.value == "2") {
                    *slot = Node::Expr(lit("42"));
                }
            }
            true
        });

        let mut seen = Vec::new();
        inspect(&out, |node| {
            if let Some(Node::Expr(Expr::Lit(l))) = node {
                seen.push(l.value.clone());
            }
            true
        });

        assert_eq!(seen, vec!["1", "42", "42"]);
    }

    #[test]
    fn replacement_is_written_back_into_list_slots() {
        let tree = if_stmt(Expr::Name(Name::new("cond")), vec![
            expr_stmt(call("g", vec![])),
            expr_stmt(call("h", vec![])),
        ]);

        // Replace one statement wholesale at the statement level.
        let out = rewrite(Node::Stmt(tree), |node| {
            if let Some(slot) = node {
                let calls_g = matches!(
                    &*slot,
                    Node::Stmt(Stmt::Simple(SimpleStmt::Expr(e)))
                        if matches!(&e.x, Expr::Call(c)
                            if matches!(&c.fun, Expr::Name(n) if n.value == "g"))
                );
                if calls_g {
                    *slot = Node::Stmt(expr_stmt(call("k", vec![])));
                }
            }
            true
        });

        let Node::Stmt(Stmt::If(out)) = out else {
            panic!("rewrite changed the root kind");
        };
        assert_eq!(out.then.stmts.len(), 2);
        assert_eq!(out.then.stmts[0], expr_stmt(call("k", vec![])));
        assert_eq!(out.then.stmts[1], expr_stmt(call("h", vec![])));
    }

    #[test]
    fn prune_keeps_replacement_without_descending() {
        let tree = expr_stmt(call("g", vec![]));

        let mut entered = Vec::new();
        let out = rewrite(Node::Stmt(tree), |node| match node {
            Some(slot) => {
                entered.push(slot.kind());
                if let Node::Expr(Expr::Call(_)) = slot {
                    *slot = Node::Expr(call("replacement", vec![lit("9")]));
                    return false;
                }
                true
            }
            None => true,
        });

        // The replacement's own children were never presented to the changer.
        assert_eq!(entered, vec!["ExprStmt", "CallExpr"]);
        assert_eq!(
            out,
            Node::Stmt(expr_stmt(call("replacement", vec![lit("9")]))),
        );
    }

    #[test]
    #[should_panic(expected = "type mismatch: slot expects expression, found ExprStmt")]
    fn statement_in_expression_slot_is_fatal() {
        let tree = if_stmt(Expr::Name(Name::new("cond")), vec![]);

        rewrite(Node::Stmt(tree), |node| {
            if let Some(slot) = node {
                if matches!(&*slot, Node::Expr(Expr::Name(n)) if n.value == "cond") {
                    *slot = Node::Stmt(expr_stmt(lit("0")));
                }
            }
            true
        });
    }

    #[test]
    fn rewriting_one_alias_leaves_the_other_path_intact() {
        let shared = Rc::new(CallExpr {
            fun: Expr::Name(Name::new("g")),
            args: vec![],
            has_dots: false,
        });
        let tree = Stmt::Block(Rc::new(BlockStmt {
            stmts: vec![
                expr_stmt(Expr::Call(Rc::clone(&shared))),
                expr_stmt(Expr::Call(Rc::clone(&shared))),
            ],
        }));

        // Non-idempotent change: only the first occurrence is renamed.
        let mut renamed = false;
        let out = rewrite(Node::Stmt(tree), |node| {
            if let Some(slot) = node {
                if !renamed && matches!(&*slot, Node::Expr(Expr::Name(n)) if n.value == "g") {
                    renamed = true;
                    *slot = Node::Expr(Expr::Name(Name::new("h")));
                }
            }
            true
        });

        let Node::Stmt(Stmt::Block(out)) = out else {
            panic!("rewrite changed the root kind");
        };
        assert_eq!(out.stmts[0], expr_stmt(call("h", vec![])));
        assert_eq!(out.stmts[1], expr_stmt(call("g", vec![])));
        // The shared node itself was never mutated in place.
        assert_eq!(shared.fun, Expr::Name(Name::new("g")));
    }
}
