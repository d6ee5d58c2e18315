// Copyright (c) the gosyn contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Tree-building helpers shared by the integration tests, built by hand the
//! way a parser would build them.

// Not every test file uses every helper.
#![allow(dead_code)]

use std::rc::Rc;

use gosyn_syntax::*;

pub fn name(value: &str) -> Expr {
    Expr::Name(Name::new(value))
}

pub fn lit(value: &str, kind: LitKind) -> Rc<BasicLit> {
    Rc::new(BasicLit {
        value: value.to_string(),
        kind,
    })
}

pub fn int(value: &str) -> Expr {
    Expr::Lit(lit(value, LitKind::Int))
}

pub fn field(fname: Option<&str>, ty: Expr) -> Rc<Field> {
    Rc::new(Field {
        name: fname.map(Name::new),
        ty,
    })
}

pub fn func_type(params: Vec<Rc<Field>>, results: Vec<Rc<Field>>) -> Rc<FuncType> {
    Rc::new(FuncType { params, results })
}

pub fn block(stmts: Vec<Stmt>) -> Rc<BlockStmt> {
    Rc::new(BlockStmt { stmts })
}

pub fn expr_stmt(x: Expr) -> Stmt {
    SimpleStmt::from(Rc::new(ExprStmt { x })).into()
}

pub fn call(fun: Expr, args: Vec<Expr>) -> Rc<CallExpr> {
    Rc::new(CallExpr {
        fun,
        args,
        has_dots: false,
    })
}

pub fn assign(op: Option<Operator>, lhs: Expr, rhs: Option<Expr>) -> SimpleStmt {
    SimpleStmt::from(Rc::new(AssignStmt { op, lhs, rhs }))
}

pub fn unary(op: Operator, x: Expr) -> Expr {
    Expr::from(Rc::new(Operation { op, x, y: None }))
}

pub fn binary(op: Operator, x: Expr, y: Expr) -> Expr {
    Expr::from(Rc::new(Operation {
        op,
        x,
        y: Some(y),
    }))
}

/// Every node kind the walkers know, by its stable kind name.
pub const ALL_KINDS: &[&str] = &[
    "File",
    "ImportDecl",
    "ConstDecl",
    "VarDecl",
    "TypeDecl",
    "FuncDecl",
    "BadExpr",
    "Name",
    "BasicLit",
    "CompositeLit",
    "KeyValueExpr",
    "FuncLit",
    "ParenExpr",
    "SelectorExpr",
    "IndexExpr",
    "SliceExpr",
    "AssertExpr",
    "TypeSwitchGuard",
    "Operation",
    "CallExpr",
    "ListExpr",
    "ArrayType",
    "SliceType",
    "DotsType",
    "StructType",
    "Field",
    "InterfaceType",
    "FuncType",
    "MapType",
    "ChanType",
    "EmptyStmt",
    "LabeledStmt",
    "BlockStmt",
    "ExprStmt",
    "SendStmt",
    "DeclStmt",
    "AssignStmt",
    "BranchStmt",
    "CallStmt",
    "ReturnStmt",
    "IfStmt",
    "ForStmt",
    "SwitchStmt",
    "SelectStmt",
    "RangeClause",
    "CaseClause",
    "CommClause",
];

/// A single source file that contains at least one node of every kind.
///
/// Roughly:
///
/// ```text
/// package p
///
/// import foo "lib/foo"
/// import "bar"
///
/// const a, b int = 1, 2
/// var v []int = []int{1, 0: 2}
/// var ch chan int
/// var arr [4]byte
/// type Pair[K any] struct { x K `tag`; y map[string]int }
/// type Reader = interface { Read([]byte) int }
///
/// func (r *Pair) m(xs ...int) (out int) { ... }
/// ```
///
/// with a body that runs through every statement form, including a labeled
/// loop with a resolved `continue`, a type switch, a select, and a range
/// loop.
pub fn rich_file() -> Rc<File> {
    let int_ty = || name("int");

    let imports: Vec<Decl> = vec![
        Decl::from(Rc::new(ImportDecl {
            local_pkg_name: Some(Name::new("foo")),
            path: lit("\"lib/foo\"", LitKind::String),
        })),
        Decl::from(Rc::new(ImportDecl {
            local_pkg_name: None,
            path: lit("\"bar\"", LitKind::String),
        })),
    ];

    let const_decl = Decl::from(Rc::new(ConstDecl {
        names: vec![Name::new("a"), Name::new("b")],
        ty: Some(int_ty()),
        values: Some(Expr::from(Rc::new(ListExpr {
            elems: vec![int("1"), int("2")],
        }))),
    }));

    let slice_of_int = || Expr::from(Rc::new(SliceType { elem: int_ty() }));
    let var_v = Decl::from(Rc::new(VarDecl {
        names: vec![Name::new("v")],
        ty: Some(slice_of_int()),
        values: Some(Expr::from(Rc::new(CompositeLit {
            ty: Some(slice_of_int()),
            elems: vec![
                int("1"),
                Expr::from(Rc::new(KeyValueExpr {
                    key: int("0"),
                    value: int("2"),
                })),
            ],
        }))),
    }));

    let var_ch = Decl::from(Rc::new(VarDecl {
        names: vec![Name::new("ch")],
        ty: Some(Expr::from(Rc::new(ChanType {
            dir: ChanDir::Both,
            elem: int_ty(),
        }))),
        values: None,
    }));

    let var_arr = Decl::from(Rc::new(VarDecl {
        names: vec![Name::new("arr")],
        ty: Some(Expr::from(Rc::new(ArrayType {
            len: Some(int("4")),
            elem: name("byte"),
        }))),
        values: None,
    }));

    let type_pair = Decl::from(Rc::new(TypeDecl {
        name: Name::new("Pair"),
        tparams: vec![field(Some("K"), name("any"))],
        alias: false,
        ty: Expr::from(Rc::new(StructType {
            fields: vec![
                field(Some("x"), name("K")),
                field(
                    Some("y"),
                    Expr::from(Rc::new(MapType {
                        key: name("string"),
                        value: int_ty(),
                    })),
                ),
            ],
            tags: vec![Some(lit("`tag`", LitKind::String)), None],
        })),
    }));

    let type_reader = Decl::from(Rc::new(TypeDecl {
        name: Name::new("Reader"),
        tparams: vec![],
        alias: true,
        ty: Expr::from(Rc::new(InterfaceType {
            methods: vec![field(
                Some("Read"),
                Expr::from(func_type(
                    vec![field(None, Expr::from(Rc::new(SliceType { elem: name("byte") })))],
                    vec![field(None, int_ty())],
                )),
            )],
        })),
    }));

    // func (r *Pair) m(xs ...int) (out int) { ... }
    let func = Decl::from(Rc::new(FuncDecl {
        recv: Some(field(Some("r"), unary(Operator::Mul, name("Pair")))),
        name: Name::new("m"),
        tparams: vec![],
        ty: func_type(
            vec![field(
                Some("xs"),
                Expr::from(Rc::new(DotsType { elem: int_ty() })),
            )],
            vec![field(Some("out"), int_ty())],
        ),
        body: Some(block(func_body())),
    }));

    let mut decls = imports;
    decls.extend([
        const_decl, var_v, var_ch, var_arr, type_pair, type_reader, func,
    ]);

    Rc::new(File {
        pkg_name: Name::new("p"),
        decls,
    })
}

fn func_body() -> Vec<Stmt> {
    // var n = 0
    let decl_stmt = Stmt::from(Rc::new(DeclStmt {
        decls: vec![Decl::from(Rc::new(VarDecl {
            names: vec![Name::new("n")],
            ty: None,
            values: Some(int("0")),
        }))],
    }));

    // loop: for i := 0; i < n; i++ { if dbg(i) { continue loop } else { break } }
    let branch_continue = Stmt::from(Rc::new(BranchStmt {
        kind: BranchKind::Continue,
        label: Some(Name::new("loop")),
        target: Some(LabelId::new(0)),
    }));
    let branch_break = Stmt::from(Rc::new(BranchStmt {
        kind: BranchKind::Break,
        label: None,
        target: None,
    }));
    let if_stmt = Stmt::from(Rc::new(IfStmt {
        init: None,
        cond: Expr::from(call(name("dbg"), vec![name("i")])),
        then: block(vec![branch_continue]),
        orelse: Some(Stmt::Block(block(vec![branch_break]))),
    }));
    let labeled_for = Stmt::from(Rc::new(LabeledStmt {
        label: Name::new("loop"),
        stmt: Stmt::from(Rc::new(ForStmt {
            init: Some(assign(Some(Operator::Def), name("i"), Some(int("0")))),
            cond: Some(binary(Operator::Lss, name("i"), name("n"))),
            post: Some(assign(Some(Operator::Add), name("i"), None)),
            body: block(vec![if_stmt]),
        })),
    }));

    // w = v.(Reader)
    let assert_assign = Stmt::Simple(assign(
        None,
        name("w"),
        Some(Expr::from(Rc::new(AssertExpr {
            x: name("v"),
            ty: name("Reader"),
        }))),
    ));

    // ch <- v[0]
    let send = Stmt::Simple(SimpleStmt::from(Rc::new(SendStmt {
        chan: name("ch"),
        value: Expr::from(Rc::new(IndexExpr {
            x: name("v"),
            index: int("0"),
        })),
    })));

    // defer func() { ; }()
    let deferred = Stmt::from(Rc::new(CallStmt {
        kind: CallKind::Defer,
        call: Expr::from(call(
            Expr::from(Rc::new(FuncLit {
                ty: func_type(vec![], vec![]),
                body: block(vec![Stmt::Simple(SimpleStmt::Empty(Rc::new(EmptyStmt)))]),
            })),
            vec![],
        )),
    }));

    // go (g)(v[1:n], bad...)
    let go_call = Stmt::from(Rc::new(CallStmt {
        kind: CallKind::Go,
        call: Expr::from(Rc::new(CallExpr {
            fun: Expr::from(Rc::new(ParenExpr { x: name("g") })),
            args: vec![
                Expr::from(Rc::new(SliceExpr {
                    x: name("v"),
                    index: [Some(int("1")), Some(name("n")), None],
                    full: false,
                })),
                Expr::from(Rc::new(BadExpr)),
            ],
            has_dots: true,
        })),
    }));

    // switch t := v.load().(type) { case int: !t; default: }
    let type_switch = Stmt::from(Rc::new(SwitchStmt {
        init: Some(assign(None, name("s"), Some(int("1")))),
        tag: Some(Expr::from(Rc::new(TypeSwitchGuard {
            lhs: Some(Name::new("t")),
            x: Expr::from(call(
                Expr::from(Rc::new(SelectorExpr {
                    x: name("v"),
                    sel: Name::new("load"),
                })),
                vec![],
            )),
        }))),
        body: vec![
            Rc::new(CaseClause {
                cases: Some(name("int")),
                body: vec![expr_stmt(unary(Operator::Not, name("t")))],
            }),
            Rc::new(CaseClause {
                cases: None,
                body: vec![Stmt::Simple(SimpleStmt::Empty(Rc::new(EmptyStmt)))],
            }),
        ],
    }));

    // select { case x := <-ch: dbg(x); default: return }
    let select = Stmt::from(Rc::new(SelectStmt {
        body: vec![
            Rc::new(CommClause {
                comm: Some(assign(
                    Some(Operator::Def),
                    name("x"),
                    Some(unary(Operator::Recv, name("ch"))),
                )),
                body: vec![expr_stmt(Expr::from(call(name("dbg"), vec![name("x")])))],
            }),
            Rc::new(CommClause {
                comm: None,
                body: vec![Stmt::from(Rc::new(ReturnStmt { results: None }))],
            }),
        ],
    }));

    // for i2, x2 := range v { h(i2, x2...) }
    let range_loop = Stmt::from(Rc::new(ForStmt {
        init: Some(SimpleStmt::from(Rc::new(RangeClause {
            lhs: Some(Expr::from(Rc::new(ListExpr {
                elems: vec![name("i2"), name("x2")],
            }))),
            x: name("v"),
        }))),
        cond: None,
        post: None,
        body: block(vec![expr_stmt(Expr::from(Rc::new(CallExpr {
            fun: name("h"),
            args: vec![name("i2"), name("x2")],
            has_dots: true,
        })))]),
    }));

    // return out + 1
    let ret = Stmt::from(Rc::new(ReturnStmt {
        results: Some(binary(Operator::Add, name("out"), int("1"))),
    }));

    vec![
        decl_stmt,
        labeled_for,
        assert_assign,
        send,
        deferred,
        go_call,
        type_switch,
        select,
        range_loop,
        ret,
    ]
}
