//! Emit binary, unary and conditional operators.
//!
//! Native C++ operators are used wherever their semantics match the expression language. Two cases diverge:
//! - integer `%` truncates toward zero in C++, so it becomes a call to the runtime `mod` helper,
//! - `std::string` ordering goes through `compare()` against zero.
//!
//! Operands are parenthesized from precedence: a left operand needs at least the operator's precedence, a right
//! operand strictly more (all binary operators here are left-associative).

use cpptrans_core::lang::operators::prec;

use super::super::{CppEmitter, EmitError, Fragment};
use crate::ir::{BinaryOp, Expr, StaticType, UnaryOp};

impl<'a> CppEmitter<'a> {
    pub(super) fn emit_binop(&mut self, left: &Expr, op: BinaryOp, right: &Expr) -> Result<Fragment, EmitError> {
        let id = op.id();

        if op == BinaryOp::Mod {
            match (self.type_of(left)?, self.type_of(right)?) {
                (StaticType::Int(_), StaticType::Int(_)) => {
                    let call = self.runtime_fn("mod");
                    return self.emit_call(&call, left, right);
                }
                (StaticType::Float(_), _) | (_, StaticType::Float(_)) => {
                    self.require_system("cmath");
                    return self.emit_call("std::fmod", left, right);
                }
                _ => {}
            }
        }

        if id.is_ordering() && self.type_of(left)?.is_stringish() && self.type_of(right)?.is_stringish() {
            let l = self.operand(left, prec::POSTFIX)?;
            let r = self.operand(right, prec::CONDITIONAL)?;
            return Ok(Fragment::primary(format!("({l}.compare({r}) {} 0)", id.cpp())));
        }

        let precedence = id.precedence();
        let l = self.operand(left, precedence)?;
        let r = self.operand(right, precedence + 1)?;
        Ok(Fragment::new(format!("{l} {} {r}", id.cpp()), precedence))
    }

    fn emit_call(&mut self, function: &str, left: &Expr, right: &Expr) -> Result<Fragment, EmitError> {
        let l = self.operand(left, prec::CONDITIONAL)?;
        let r = self.operand(right, prec::CONDITIONAL)?;
        Ok(Fragment::postfix(format!("{function}({l}, {r})")))
    }

    pub(super) fn emit_unary(&mut self, op: UnaryOp, operand: &Expr) -> Result<Fragment, EmitError> {
        let id = op.id();
        let mut inner = self.operand(operand, prec::UNARY)?;
        // `- -x` must not collapse into the decrement token.
        if op == UnaryOp::Neg && inner.starts_with('-') {
            inner = format!("({inner})");
        }
        Ok(Fragment::unary(format!("{}{inner}", id.cpp())))
    }

    /// `((c) ? (t) : (f))`, fully parenthesized.
    pub(super) fn emit_if_exp(
        &mut self,
        condition: &Expr,
        if_true: &Expr,
        if_false: &Expr,
    ) -> Result<Fragment, EmitError> {
        let c = self.emit_expr(condition)?.text;
        let t = self.emit_expr(if_true)?.text;
        let f = self.emit_expr(if_false)?.text;
        Ok(Fragment::primary(format!("(({c}) ? ({t}) : ({f}))")))
    }
}
