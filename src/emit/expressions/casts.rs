//! Emit explicit casts and enum constants.
//!
//! Record casts are delegated to the ownership policy: a plain `static_cast` on a `std::shared_ptr` would lose the
//! reference count. Every other cast is a `static_cast` to the native type.
//!
//! Enums declared under a different top-level type live in that type's header, which is registered as a local
//! include for the declaration text.

use cpptrans_core::lang::conventions::{enum_to_constant, enum_to_type, header_file_name, types_to_class};
use cpptrans_core::lang::operators::prec;

use super::super::{CppEmitter, EmitError, Fragment};
use crate::ir::{EnumRef, Expr, StaticType};

impl<'a> CppEmitter<'a> {
    pub(super) fn emit_cast(&mut self, value: &Expr, to: &StaticType) -> Result<Fragment, EmitError> {
        let v = self.operand(value, prec::CONDITIONAL)?;
        let text = match to {
            StaticType::Record(r) => self.policy().cast_to_record(&types_to_class(&r.path), &v),
            other => format!("static_cast<{}>({v})", self.native_type(other)),
        };
        Ok(Fragment::postfix(text))
    }

    pub(super) fn emit_enum_by_label(&mut self, enum_ref: &EnumRef, label: &str) -> Fragment {
        self.require_enum_header(enum_ref);
        Fragment::primary(enum_to_constant(&enum_ref.owner, &enum_ref.name, label))
    }

    pub(super) fn emit_enum_by_id(&mut self, enum_ref: &EnumRef, id: &Expr) -> Result<Fragment, EmitError> {
        self.require_enum_header(enum_ref);
        let v = self.operand(id, prec::CONDITIONAL)?;
        Ok(Fragment::postfix(format!(
            "static_cast<{}>({v})",
            enum_to_type(&enum_ref.owner, &enum_ref.name)
        )))
    }

    fn require_enum_header(&mut self, enum_ref: &EnumRef) {
        let Some(top) = enum_ref.top_level() else {
            return;
        };
        if self.current_class().first().map(String::as_str) != Some(top) {
            let header = header_file_name(top);
            self.require_header_local(&header);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::fixture::{render, render_with};
    use crate::emit::{EmitConfig, OwnershipStrategy};
    use crate::ir::{EnumRef, Expr, FloatWidth, IntWidth, MapTypeProvider, StaticType};

    fn types() -> MapTypeProvider {
        MapTypeProvider::new(["zip", "entry"])
            .with_name("x", StaticType::record(["zip", "header"]))
            .with_name("f", StaticType::Float(FloatWidth::F64))
            .with_name("kind", StaticType::int(false, IntWidth::W8))
    }

    #[test]
    fn test_record_cast_follows_strategy() {
        let expr = Expr::cast(Expr::name("x"), StaticType::record(["zip", "local_file"]));
        let raw = render_with(&types(), &EmitConfig::compat(), &expr);
        assert_eq!(raw.text.as_deref(), Ok("static_cast<zip_t::local_file_t*>(x())"));

        let shared = EmitConfig::new().with_ownership(OwnershipStrategy::Shared);
        assert_eq!(
            render_with(&types(), &shared, &expr).text.as_deref(),
            Ok("std::static_pointer_cast<zip_t::local_file_t>(x())")
        );
    }

    #[test]
    fn test_scalar_cast_ignores_strategy() {
        let expr = Expr::cast(Expr::name("f"), StaticType::int(true, IntWidth::W64));
        let shared = EmitConfig::new().with_ownership(OwnershipStrategy::Shared);
        assert_eq!(
            render_with(&types(), &shared, &expr).text.as_deref(),
            Ok("static_cast<int64_t>(f())")
        );
    }

    #[test]
    fn test_local_enum_needs_no_header() {
        let expr = Expr::EnumByLabel {
            enum_ref: EnumRef::new(["zip"], "compression"),
            label: "deflated".into(),
        };
        let out = render_with(&types(), &EmitConfig::default(), &expr);
        assert_eq!(out.text.as_deref(), Ok("zip_t::COMPRESSION_DEFLATED"));
        assert!(out.header.is_empty());
    }

    #[test]
    fn test_foreign_enum_registers_header() {
        let expr = Expr::EnumById {
            enum_ref: EnumRef::new(["dos_datetime"], "weekday"),
            id: Box::new(Expr::name("kind")),
        };
        let out = render_with(&types(), &EmitConfig::default(), &expr);
        assert_eq!(
            out.text.as_deref(),
            Ok("static_cast<dos_datetime_t::weekday_e>(kind())")
        );
        assert_eq!(out.header.to_lines(), vec!["#include \"dos_datetime.h\""]);
        assert!(out.source.is_empty());
    }

    #[test]
    fn test_enum_without_owner() {
        let expr = Expr::EnumByLabel {
            enum_ref: EnumRef::new(Vec::<String>::new(), "color"),
            label: "red".into(),
        };
        assert_eq!(render(&types(), &expr).as_deref(), Ok("COLOR_RED"));
    }
}
