//! Emit C++ expressions from the expression IR.
//!
//! This module converts [`Expr`] nodes into C++ expression text. Each rendering returns a [`Fragment`] carrying the
//! precedence of its outermost construct so that callers can parenthesize operands only where C++ needs it.
//!
//! ## Module organization
//!
//! - [`literals`]: integer, float, boolean, string, byte-sequence and array literals
//! - [`operators`]: binary, unary and conditional operators
//! - [`access`]: member access and container subscripts
//! - [`methods`]: built-in pseudo-methods (`length`, `substring`, `min`, `to_i`, ...)
//! - [`casts`]: explicit casts and enum constants
//! - [`names`]: identifier renaming
//!
//! ## Notes
//!
//! - **Types come from the provider**: every type-dependent choice asks [`TypeProvider`](crate::ir::TypeProvider)
//!   on demand; nothing is cached between calls.
//! - **Ownership is centralized**: array construction and record casts go through the active
//!   [`OwnershipPolicy`](super::OwnershipPolicy), never through inline strategy checks.

mod access;
mod casts;
mod literals;
mod methods;
mod names;
mod operators;

use super::{CppEmitter, EmitError, Fragment};
use crate::ir::Expr;

impl<'a> CppEmitter<'a> {
    /// Emit an expression as a C++ fragment.
    ///
    /// ## Errors
    /// - `EmitError`: if the expression (or any sub-expression) is unsupported or ill-typed.
    pub(super) fn emit_expr(&mut self, expr: &Expr) -> Result<Fragment, EmitError> {
        match expr {
            Expr::Int(n) => Ok(Self::emit_int_literal(*n)),
            Expr::Float(x) => Ok(self.emit_float_literal(*x)),
            Expr::Bool(b) => Ok(Fragment::primary(if *b { "true" } else { "false" })),
            Expr::Str(s) => Ok(Self::emit_str_literal(s)),
            Expr::Bytes(bytes) => Ok(Self::emit_bytes_literal(bytes)),
            Expr::Array(items) => self.emit_array_literal(expr, items),

            Expr::Name(name) => Ok(Self::emit_name(name)),
            Expr::Attribute { value, attr } => self.emit_attribute(value, attr),
            Expr::Subscript { value, index } => self.emit_subscript(value, index),

            Expr::BinOp { left, op, right } => self.emit_binop(left, *op, right),
            Expr::UnaryOp { op, operand } => self.emit_unary(*op, operand),
            Expr::IfExp {
                condition,
                if_true,
                if_false,
            } => self.emit_if_exp(condition, if_true, if_false),

            Expr::CastTo { value, to } => self.emit_cast(value, to),
            Expr::EnumByLabel { enum_ref, label } => Ok(self.emit_enum_by_label(enum_ref, label)),
            Expr::EnumById { enum_ref, id } => self.emit_enum_by_id(enum_ref, id),

            Expr::Method {
                receiver,
                method,
                args,
            } => self.emit_method(receiver, *method, args),
        }
    }
}

#[cfg(test)]
pub(super) mod fixture {
    use crate::emit::{CppEmitter, EmitConfig, EmitError, ImportList};
    use crate::ir::{Expr, MapTypeProvider};

    /// Result of rendering one expression, plus both registries afterwards.
    pub(crate) struct Rendered {
        pub(crate) text: Result<String, EmitError>,
        pub(crate) source: ImportList,
        pub(crate) header: ImportList,
    }

    pub(crate) fn render_with(types: &MapTypeProvider, config: &EmitConfig, expr: &Expr) -> Rendered {
        let mut source = ImportList::new();
        let mut header = ImportList::new();
        let text = CppEmitter::new(types, config, &mut source, &mut header).translate(expr);
        Rendered { text, source, header }
    }

    pub(crate) fn render(types: &MapTypeProvider, expr: &Expr) -> Result<String, EmitError> {
        render_with(types, &EmitConfig::default(), expr).text
    }
}
