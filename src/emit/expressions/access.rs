//! Emit member access and container subscripts.
//!
//! Generated records expose fields through accessors and are always held by pointer, so `a.b` becomes `a->b()`.
//! Arrays are pointers to `std::vector` and use the bounds-checked `at()`; byte sequences are plain `std::string`
//! values indexed directly.

use cpptrans_core::lang::operators::prec;

use super::super::{CppEmitter, EmitError, Fragment};
use crate::ir::{Expr, StaticType};

impl<'a> CppEmitter<'a> {
    pub(super) fn emit_attribute(&mut self, value: &Expr, attr: &str) -> Result<Fragment, EmitError> {
        let v = self.operand(value, prec::POSTFIX)?;
        let field = Self::emit_name(attr).text;
        Ok(Fragment::postfix(format!("{v}->{field}")))
    }

    pub(super) fn emit_subscript(&mut self, value: &Expr, index: &Expr) -> Result<Fragment, EmitError> {
        let container = self.type_of(value)?;
        let v = self.operand(value, prec::POSTFIX)?;
        let i = self.operand(index, prec::CONDITIONAL)?;
        match container {
            StaticType::Array(_) => Ok(Fragment::postfix(format!("{v}->at({i})"))),
            StaticType::Bytes => Ok(Fragment::postfix(format!("{v}[{i}]"))),
            other => Err(EmitError::InvalidOperand {
                construct: "subscript".to_string(),
                found: other,
            }),
        }
    }
}
