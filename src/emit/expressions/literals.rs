//! Emit C++ literals.
//!
//! Literal text must reproduce the value exactly when compiled:
//! - integers carry the suffix of the narrowest 32/64-bit type that holds them,
//! - strings and byte sequences that may contain a zero byte pass an explicit length, since the
//!   `const char*` constructor would stop at the first `\0`.

use cpptrans_core::ints::render_int_literal;
use cpptrans_core::strings::{contains_nul, escape_str, hex_escape_bytes};
use cpptrans_core::lang::operators::prec;

use super::super::imports::VECTOR;
use super::super::types::vector_type;
use super::super::{CppEmitter, EmitError, Fragment};
use crate::ir::{Expr, StaticType};

impl<'a> CppEmitter<'a> {
    pub(super) fn emit_int_literal(n: i128) -> Fragment {
        let text = render_int_literal(n);
        if text.starts_with('-') {
            Fragment::unary(text)
        } else {
            Fragment::primary(text)
        }
    }

    pub(super) fn emit_float_literal(&mut self, x: f64) -> Fragment {
        if x.is_finite() {
            let text = format!("{x:?}");
            return if text.starts_with('-') {
                Fragment::unary(text)
            } else {
                Fragment::primary(text)
            };
        }
        self.require_system("limits");
        if x.is_nan() {
            Fragment::postfix("std::numeric_limits<double>::quiet_NaN()")
        } else if x > 0.0 {
            Fragment::postfix("std::numeric_limits<double>::infinity()")
        } else {
            Fragment::unary("-std::numeric_limits<double>::infinity()")
        }
    }

    /// `std::string("...")`, with an explicit byte length when the value contains a zero byte.
    pub(super) fn emit_str_literal(s: &str) -> Fragment {
        let escaped = escape_str(s);
        if contains_nul(s) {
            Fragment::postfix(format!("std::string(\"{escaped}\", {})", s.len()))
        } else {
            Fragment::postfix(format!("std::string(\"{escaped}\")"))
        }
    }

    /// `std::string("\x..", N)`; byte sequences always carry their length.
    pub(super) fn emit_bytes_literal(bytes: &[u8]) -> Fragment {
        Fragment::postfix(format!(
            "std::string(\"{}\", {})",
            hex_escape_bytes(bytes),
            bytes.len()
        ))
    }

    /// Construct a `std::vector` of the literal's element type under the active ownership policy.
    ///
    /// ## Errors
    /// - [`EmitError::UnsupportedArrayLiteral`]: the policy defines no literal construction.
    /// - [`EmitError::UnresolvedType`] / [`EmitError::InvalidOperand`]: no array type known for the literal.
    pub(super) fn emit_array_literal(&mut self, expr: &Expr, items: &[Expr]) -> Result<Fragment, EmitError> {
        let elem = match self.type_of(expr)? {
            StaticType::Array(elem) => elem,
            other => {
                return Err(EmitError::InvalidOperand {
                    construct: "array literal".to_string(),
                    found: other,
                });
            }
        };
        let vector = vector_type(self.policy(), &elem);

        let elements = items
            .iter()
            .map(|item| self.operand(item, prec::CONDITIONAL))
            .collect::<Result<Vec<_>, _>>()?
            .join(", ");

        let text = self.policy().construct_array(&vector, &elements)?;
        self.require_system(VECTOR);
        Ok(Fragment::unary(text))
    }
}
