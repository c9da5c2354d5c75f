//! End-to-end scenarios for the C++ expression emitter
//!
//! Each test builds an expression the way the surrounding generator would, renders it through the public API and
//! checks both the text and the include registries.
//!
//! Run with: `cargo test --test emit_scenarios`
//! Review changes: `cargo insta review`

use cpptrans::ir::{FloatWidth, IntWidth};
use cpptrans::{
    BinaryOp, CppEmitter, EmitConfig, EmitError, EnumRef, Expr, ImportList, MapTypeProvider, MethodId,
    OutputSection, OwnershipStrategy, StaticType,
};

/// Types of a small archive format: `archive` holds `entries`, each with a `header` record.
fn archive_types() -> MapTypeProvider {
    MapTypeProvider::new(["archive"])
        .with_name("a", StaticType::int(true, IntWidth::W32))
        .with_name("b", StaticType::int(true, IntWidth::W32))
        .with_name("name", StaticType::Str)
        .with_name("magic", StaticType::Bytes)
        .with_name("ratio", StaticType::Float(FloatWidth::F64))
        .with_name("entries", StaticType::array_of(StaticType::record(["archive", "entry"])))
        .with_name("sizes", StaticType::array_of(StaticType::int(false, IntWidth::W32)))
        .with_name("x", StaticType::record(["archive", "entry"]))
        .with_member(["archive", "entry"], "header", StaticType::record(["archive", "header"]))
        .with_member(["archive", "header"], "len_body", StaticType::int(false, IntWidth::W32))
        .with_member(["archive", "header"], "file_name", StaticType::Str)
}

fn translate(config: &EmitConfig, expr: &Expr) -> Result<String, EmitError> {
    let types = archive_types();
    let (mut src, mut hdr) = (ImportList::new(), ImportList::new());
    CppEmitter::new(&types, config, &mut src, &mut hdr).translate(expr)
}

fn compat(expr: &Expr) -> String {
    translate(&EmitConfig::compat(), expr).expect("emission failed")
}

// =============================================================================
// Literals
// =============================================================================

#[test]
fn unsigned_32_literal_gets_ul_suffix() {
    insta::assert_snapshot!(compat(&Expr::int(4_294_967_295)), @"4294967295UL");
}

#[test]
fn below_int32_literal_gets_ll_suffix() {
    insta::assert_snapshot!(compat(&Expr::int(-2_147_483_649)), @"-2147483649LL");
}

#[test]
fn string_with_zero_byte_passes_byte_length() {
    insta::assert_snapshot!(compat(&Expr::str("a\u{0000}b")), @r#"std::string("a\000b", 3)"#);
}

#[test]
fn non_ascii_string_is_octal_escaped() {
    insta::assert_snapshot!(compat(&Expr::str("café")), @r#"std::string("caf\303\251")"#);
}

#[test]
fn question_marks_cannot_form_trigraphs() {
    insta::assert_snapshot!(compat(&Expr::str("what??!")), @r#"std::string("what\?\?!")"#);
}

#[test]
fn raw_strategy_array_literal_has_no_owning_wrapper() {
    let types = archive_types();
    let config = EmitConfig::compat();
    let (mut src, mut hdr) = (ImportList::new(), ImportList::new());

    let expr = Expr::Array(vec![Expr::int(1), Expr::int(2), Expr::int(3)]);
    let text = CppEmitter::new(&types, &config, &mut src, &mut hdr).translate(&expr).unwrap();

    insta::assert_snapshot!(text, @"new std::vector<int32_t>{1, 2, 3}");
    assert_eq!(src.to_lines(), vec!["#include <vector>"]);
    assert!(hdr.is_empty());
}

#[test]
fn shared_strategy_array_literal_is_unsupported() {
    let config = EmitConfig::new().with_ownership(OwnershipStrategy::Shared);
    let err = translate(&config, &Expr::Array(vec![Expr::int(1)])).unwrap_err();
    assert!(err.is_unsupported());
    assert_eq!(
        err.to_string(),
        "unsupported: array literals under the shared-pointer ownership strategy"
    );
}

// =============================================================================
// Operators
// =============================================================================

#[test]
fn int_modulo_uses_runtime_mod() {
    let expr = Expr::binop(Expr::name("a"), BinaryOp::Mod, Expr::name("b"));
    insta::assert_snapshot!(compat(&expr), @"kaitai::kstream::mod(a(), b())");
}

#[test]
fn runtime_namespace_is_configurable() {
    let config = EmitConfig::new().with_runtime_namespace("rt::stream");
    let expr = Expr::binop(Expr::name("a"), BinaryOp::Mod, Expr::int(4));
    assert_eq!(translate(&config, &expr).unwrap(), "rt::stream::mod(a(), 4)");
}

#[test]
fn string_ordering_against_member() {
    let file_name = Expr::attr(Expr::attr(Expr::name("x"), "header"), "file_name");
    let expr = Expr::binop(file_name, BinaryOp::Lt, Expr::name("name"));
    insta::assert_snapshot!(compat(&expr), @"(x()->header()->file_name().compare(name()) < 0)");
}

#[test]
fn conditional_inside_arithmetic() {
    let cond = Expr::if_exp(
        Expr::binop(Expr::name("a"), BinaryOp::Gt, Expr::int(0)),
        Expr::name("a"),
        Expr::unary(cpptrans::UnaryOp::Neg, Expr::name("a")),
    );
    let expr = Expr::binop(cond, BinaryOp::Mul, Expr::int(2));
    insta::assert_snapshot!(compat(&expr), @"((a() > 0) ? (a()) : (-a())) * 2");
}

// =============================================================================
// Access, methods, casts
// =============================================================================

#[test]
fn subscripted_member_length() {
    let header = Expr::attr(Expr::subscript(Expr::name("entries"), Expr::name("_index")), "header");
    let expr = Expr::binop(
        Expr::attr(header, "len_body"),
        BinaryOp::Add,
        Expr::method(Expr::name("magic"), MethodId::Length, vec![]),
    );
    insta::assert_snapshot!(compat(&expr), @"entries()->at(i)->header()->len_body() + magic().length()");
}

#[test]
fn max_over_array_registers_algorithm_once() {
    let types = archive_types();
    let config = EmitConfig::cpp11();
    let (mut src, mut hdr) = (ImportList::new(), ImportList::new());
    let mut emitter = CppEmitter::new(&types, &config, &mut src, &mut hdr);

    let max = Expr::method(Expr::name("sizes"), MethodId::Max, vec![]);
    let first = emitter.translate(&max).unwrap();
    let second = emitter.translate(&max).unwrap();

    assert_eq!(first, second);
    insta::assert_snapshot!(first, @"*std::max_element(sizes()->begin(), sizes()->end())");
    assert_eq!(src.to_lines(), vec!["#include <algorithm>"]);
}

#[test]
fn header_section_routes_system_includes() {
    let types = archive_types();
    let config = EmitConfig::cpp11();
    let (mut src, mut hdr) = (ImportList::new(), ImportList::new());
    let mut emitter = CppEmitter::new(&types, &config, &mut src, &mut hdr);
    emitter.set_section(OutputSection::Header);

    let expr = Expr::Array(vec![Expr::str("a"), Expr::str("b")]);
    let text = emitter.translate(&expr).unwrap();

    assert_eq!(
        text,
        r#"std::unique_ptr<std::vector<std::string>>(new std::vector<std::string>{std::string("a"), std::string("b")})"#
    );
    assert!(src.is_empty());
    assert_eq!(hdr.to_lines(), vec!["#include <vector>"]);
}

#[test]
fn shared_strategy_record_cast_preserves_ownership() {
    let config = EmitConfig::new().with_ownership(OwnershipStrategy::Shared);
    let expr = Expr::cast(Expr::name("x"), StaticType::record(["archive", "header"]));
    insta::assert_snapshot!(
        translate(&config, &expr).unwrap(),
        @"std::static_pointer_cast<archive_t::header_t>(x())"
    );
}

#[test]
fn foreign_enum_lands_in_header_registry() {
    let types = archive_types();
    let config = EmitConfig::compat();
    let (mut src, mut hdr) = (ImportList::new(), ImportList::new());
    let mut emitter = CppEmitter::new(&types, &config, &mut src, &mut hdr);

    let expr = Expr::binop(
        Expr::EnumById {
            enum_ref: EnumRef::new(["dos_datetime"], "month"),
            id: Box::new(Expr::name("a")),
        },
        BinaryOp::Eq,
        Expr::EnumByLabel {
            enum_ref: EnumRef::new(["dos_datetime"], "month"),
            label: "march".into(),
        },
    );
    insta::assert_snapshot!(
        emitter.translate(&expr).unwrap(),
        @"static_cast<dos_datetime_t::month_e>(a()) == dos_datetime_t::MONTH_MARCH"
    );
    assert_eq!(hdr.to_lines(), vec![r#"#include "dos_datetime.h""#]);
    assert!(src.is_empty());
}

#[test]
fn float_to_int_and_back_to_string() {
    let to_i = Expr::method(Expr::name("ratio"), MethodId::ToI, vec![]);
    let expr = Expr::method(to_i, MethodId::ToS, vec![]);
    insta::assert_snapshot!(compat(&expr), @"kaitai::kstream::to_string(static_cast<int>(ratio()))");
}

#[test]
fn hex_to_s_fails_generation() {
    let expr = Expr::method(Expr::name("a"), MethodId::ToS, vec![Expr::int(16)]);
    let err = translate(&EmitConfig::compat(), &expr).unwrap_err();
    assert_eq!(err, EmitError::UnsupportedRadix { radix: "16".into() });
}

#[test]
fn unresolved_identifier_is_reported() {
    let expr = Expr::binop(Expr::name("nope"), BinaryOp::Mod, Expr::int(2));
    let err = translate(&EmitConfig::compat(), &expr).unwrap_err();
    assert_eq!(
        err,
        EmitError::UnresolvedType {
            expr: "identifier `nope`".into()
        }
    );
}

#[test]
fn native_type_names() {
    let types = archive_types();
    let config = EmitConfig::compat();
    let (mut src, mut hdr) = (ImportList::new(), ImportList::new());
    let emitter = CppEmitter::new(&types, &config, &mut src, &mut hdr);

    assert_eq!(
        emitter.native_type(&StaticType::array_of(StaticType::record(["archive", "entry"]))),
        "std::vector<archive_t::entry_t*>*"
    );
    assert_eq!(emitter.native_type(&StaticType::Bytes), "std::string");
}
