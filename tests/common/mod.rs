//! Shared fixture: a small checked program and the table/tree the checker
//! would hand over for it.
#![allow(dead_code)]

use strata::base::{FileId, Loc, TextSize};
use strata::hir::{
    Assign, ClassDef, ConstantLit, IdentKind, Literal, LiteralValue, Local, LocalVariable,
    MethodArg, MethodDef, Node, Seq, SymbolRef, SymbolTable, Type, UnresolvedConstant,
    UnresolvedIdent,
};
use strata::ide::Query;

pub const FILE: FileId = FileId(0);
pub const PATH: &str = "lib/geo.rb";

pub const SOURCE: &str = "\
module Geo
  class Point
    @@count = 0
    def initialize(x, y = 0)
      @x = x
    end
    def self.count
      @@count
    end
  end
  Origin = Point
end
Geo::Origin
";

/// Span of the `nth` occurrence of `needle` in [`SOURCE`].
pub fn span(needle: &str, nth: usize) -> Loc {
    let (start, _) = SOURCE
        .match_indices(needle)
        .nth(nth)
        .unwrap_or_else(|| panic!("{needle:?} #{nth} not in fixture"));
    Loc::from_offsets(FILE, start as u32, (start + needle.len()) as u32)
}

/// Span of the first `inner` inside the `nth` occurrence of `needle`.
pub fn span_within(needle: &str, nth: usize, inner: &str) -> Loc {
    let outer = span(needle, nth);
    let offset = needle.find(inner).expect("inner text not in needle") as u32;
    let start = u32::from(outer.range.start()) + offset;
    Loc::from_offsets(FILE, start, start + inner.len() as u32)
}

/// Cursor placed on the first character of `loc`.
pub fn cursor(loc: Loc) -> Query {
    Query::by_loc(Loc::point(loc.file, loc.range.start()))
}

pub fn whole_file() -> Loc {
    Loc::new(FILE, strata::base::TextRange::up_to(TextSize::of(SOURCE)))
}

pub struct Fixture {
    pub table: SymbolTable,
    pub tree: Node,
    pub integer: SymbolRef,
    pub geo: SymbolRef,
    pub point: SymbolRef,
    pub point_singleton: SymbolRef,
    pub count_cvar: SymbolRef,
    pub ivar_x: SymbolRef,
    pub initialize: SymbolRef,
    pub count: SymbolRef,
    pub origin: SymbolRef,
}

/// A constant segment as written in source.
pub fn written_constant(
    table: &SymbolTable,
    loc: Loc,
    whole: Loc,
    symbol: SymbolRef,
    name: &str,
    scope: Node,
) -> Node {
    Node::ConstantLit(ConstantLit {
        loc,
        symbol,
        original: Some(Box::new(UnresolvedConstant {
            loc: whole,
            scope,
            name: table.intern(name),
        })),
    })
}

pub fn ident(table: &SymbolTable, loc: Loc, kind: IdentKind, name: &str) -> Node {
    Node::UnresolvedIdent(UnresolvedIdent {
        loc,
        kind,
        name: table.intern(name),
    })
}

pub fn integer_literal(loc: Loc, value: i64) -> Node {
    Node::Literal(Literal {
        loc,
        value: LiteralValue::Integer(value),
    })
}

pub fn fixture() -> Fixture {
    let mut table = SymbolTable::new();

    // Core classes live in generated RBI, not in any file on disk.
    let integer = table.enter_class(SymbolTable::ROOT, "Integer", Loc::detached());

    let geo = table.enter_module(SymbolTable::ROOT, "Geo", span("Geo", 0));
    let point = table.enter_class(geo, "Point", span("Point", 0));
    let point_singleton = table.lookup_singleton_class(point);

    let count_cvar = table.enter_static_field(point, "@@count", span("@@count", 0));
    table.set_result_type(count_cvar, Type::Class(integer));
    let ivar_x = table.enter_field(point, "@x", span("@x", 0));
    table.set_result_type(ivar_x, Type::Class(integer));

    let init_decl = span("def initialize(x, y = 0)", 0);
    let x_loc = span_within("initialize(x", 0, "x");
    let y_loc = span_within("y = 0", 0, "y");
    let initialize = table.enter_method(point, "initialize", init_decl);
    table.add_argument(initialize, "x", x_loc, Type::Class(integer));
    table.add_argument(initialize, "y", y_loc, Type::Class(integer));
    table.set_result_type(initialize, Type::Nil);

    let count_decl = span("def self.count", 0);
    let count = table.enter_method(point_singleton, "count", count_decl);
    table.set_result_type(count, Type::Class(integer));

    let origin = table.enter_static_field(geo, "Origin", span("Origin", 0));
    table.set_alias_target(origin, point);

    let x = LocalVariable::new(table.intern("x"), 0);
    let y = LocalVariable::new(table.intern("y"), 0);

    let initialize_def = Node::MethodDef(MethodDef {
        loc: init_decl,
        decl_loc: init_decl,
        symbol: initialize,
        name: table.intern("initialize"),
        args: vec![
            MethodArg::Required(Local {
                loc: x_loc,
                variable: x,
            }),
            MethodArg::Optional {
                local: Local {
                    loc: y_loc,
                    variable: y,
                },
                default: Box::new(integer_literal(span_within("y = 0", 0, "0"), 0)),
            },
        ],
        body: Box::new(Node::Assign(Assign {
            loc: span("@x = x", 0),
            lhs: Box::new(ident(&table, span("@x", 0), IdentKind::Instance, "@x")),
            rhs: Box::new(Node::Local(Local {
                loc: span_within("= x", 0, "x"),
                variable: x,
            })),
        })),
    });

    let count_def = Node::MethodDef(MethodDef {
        loc: count_decl,
        decl_loc: count_decl,
        symbol: count,
        name: table.intern("count"),
        args: Vec::new(),
        body: Box::new(ident(&table, span("@@count", 1), IdentKind::Class, "@@count")),
    });

    let point_def = Node::ClassDef(ClassDef {
        loc: span("class Point", 0),
        decl_loc: span("class Point", 0),
        symbol: point,
        name: Box::new(written_constant(
            &table,
            span("Point", 0),
            span("Point", 0),
            point,
            "Point",
            Node::Empty,
        )),
        ancestors: Vec::new(),
        body: vec![
            Node::Assign(Assign {
                loc: span("@@count = 0", 0),
                lhs: Box::new(ident(&table, span("@@count", 0), IdentKind::Class, "@@count")),
                rhs: Box::new(integer_literal(span_within("@@count = 0", 0, "0"), 0)),
            }),
            initialize_def,
            count_def,
        ],
    });

    let origin_assign = Node::Assign(Assign {
        loc: span("Origin = Point", 0),
        lhs: Box::new(written_constant(
            &table,
            span("Origin", 0),
            span("Origin", 0),
            origin,
            "Origin",
            Node::Empty,
        )),
        rhs: Box::new(written_constant(
            &table,
            span("Point", 1),
            span("Point", 1),
            point,
            "Point",
            Node::Empty,
        )),
    });

    let geo_def = Node::ClassDef(ClassDef {
        loc: span("module Geo", 0),
        decl_loc: span("module Geo", 0),
        symbol: geo,
        name: Box::new(written_constant(
            &table,
            span("Geo", 0),
            span("Geo", 0),
            geo,
            "Geo",
            Node::Empty,
        )),
        ancestors: Vec::new(),
        body: vec![point_def, origin_assign],
    });

    let geo_ref = written_constant(
        &table,
        span("Geo", 1),
        span("Geo", 1),
        geo,
        "Geo",
        Node::Empty,
    );
    let origin_ref = written_constant(
        &table,
        span("Origin", 1),
        span("Geo::Origin", 0),
        origin,
        "Origin",
        geo_ref,
    );

    let tree = Node::Seq(Seq {
        loc: whole_file(),
        stmts: vec![geo_def, origin_ref],
    });

    Fixture {
        table,
        tree,
        integer,
        geo,
        point,
        point_singleton,
        count_cvar,
        ivar_x,
        initialize,
        count,
        origin,
    }
}
