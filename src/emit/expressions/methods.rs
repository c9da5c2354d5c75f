//! Emit built-in pseudo-methods.
//!
//! The rendering of each method depends on the receiver's static type:
//!
//! ```text
//! method      str / bytes                          array                                   other
//! length      s.length()                           a->size()                               -
//! first       s.front() | s[0]                     a->front()                              -
//! last        s.back()  | s[s.length() - 1]        a->back()                               -
//! min/max     rt::byte_array_min(b)   (bytes)      *std::min_element(a->begin(), a->end())  -
//! substring   s.substr(from, to - from)   (str)    -                                       -
//! reverse     rt::reverse(s)              (str)    -                                       -
//! to_s        rt::bytes_to_str(b, "enc")  (bytes)  -                                       int: rt::to_string(i)
//! to_i        std::stoi(s[, 0, radix])    (str)    -                                       bool/float/enum/int
//! ```
//!
//! `front()`/`back()` on `std::string` only exist from C++11 on; see
//! [`EmitConfig::std_string_front_back`](crate::emit::EmitConfig::std_string_front_back).

use cpptrans_core::lang::methods::{self, MethodId};
use cpptrans_core::lang::operators::prec;
use cpptrans_core::strings::escape_str;

use super::super::imports::ALGORITHM;
use super::super::{CppEmitter, EmitError, Fragment};
use crate::ir::{Expr, StaticType};

/// Radix assumed when none is given.
const DEFAULT_RADIX: i128 = 10;

impl<'a> CppEmitter<'a> {
    pub(super) fn emit_method(
        &mut self,
        receiver: &Expr,
        method: MethodId,
        args: &[Expr],
    ) -> Result<Fragment, EmitError> {
        let info = methods::info_for(method);
        if !info.accepts(args.len()) {
            let expected = if info.min_args == info.max_args {
                info.min_args.to_string()
            } else {
                format!("{}..={}", info.min_args, info.max_args)
            };
            return Err(EmitError::Arity {
                method: info.canonical,
                expected,
                found: args.len(),
            });
        }

        let ty = self.type_of(receiver)?;
        match method {
            MethodId::Length | MethodId::Size => self.emit_length(receiver, ty),
            MethodId::First => self.emit_first(receiver, ty),
            MethodId::Last => self.emit_last(receiver, ty),
            MethodId::Min => self.emit_min_max(receiver, ty, "min"),
            MethodId::Max => self.emit_min_max(receiver, ty, "max"),
            MethodId::Substring => self.emit_substring(receiver, ty, &args[0], &args[1]),
            MethodId::Reverse => match ty {
                StaticType::Str => {
                    let s = self.operand(receiver, prec::CONDITIONAL)?;
                    Ok(Fragment::postfix(format!("{}({s})", self.runtime_fn("reverse"))))
                }
                other => Err(invalid("reverse", other)),
            },
            MethodId::ToS => self.emit_to_s(receiver, ty, args.first()),
            MethodId::ToI => self.emit_to_i(receiver, ty, args.first()),
        }
    }

    fn emit_length(&mut self, receiver: &Expr, ty: StaticType) -> Result<Fragment, EmitError> {
        let r = self.operand(receiver, prec::POSTFIX)?;
        match ty {
            StaticType::Str | StaticType::Bytes => Ok(Fragment::postfix(format!("{r}.length()"))),
            StaticType::Array(_) => Ok(Fragment::postfix(format!("{r}->size()"))),
            other => Err(invalid("length", other)),
        }
    }

    fn emit_first(&mut self, receiver: &Expr, ty: StaticType) -> Result<Fragment, EmitError> {
        let r = self.operand(receiver, prec::POSTFIX)?;
        match ty {
            StaticType::Array(_) => Ok(Fragment::postfix(format!("{r}->front()"))),
            StaticType::Str | StaticType::Bytes if self.config().std_string_front_back => {
                Ok(Fragment::postfix(format!("{r}.front()")))
            }
            StaticType::Str | StaticType::Bytes => Ok(Fragment::postfix(format!("{r}[0]"))),
            other => Err(invalid("first", other)),
        }
    }

    fn emit_last(&mut self, receiver: &Expr, ty: StaticType) -> Result<Fragment, EmitError> {
        let r = self.operand(receiver, prec::POSTFIX)?;
        match ty {
            StaticType::Array(_) => Ok(Fragment::postfix(format!("{r}->back()"))),
            StaticType::Str | StaticType::Bytes if self.config().std_string_front_back => {
                Ok(Fragment::postfix(format!("{r}.back()")))
            }
            StaticType::Str | StaticType::Bytes => Ok(Fragment::postfix(format!("{r}[{r}.length() - 1]"))),
            other => Err(invalid("last", other)),
        }
    }

    /// `which` is `"min"` or `"max"`.
    fn emit_min_max(&mut self, receiver: &Expr, ty: StaticType, which: &'static str) -> Result<Fragment, EmitError> {
        match ty {
            StaticType::Array(_) => {
                let r = self.operand(receiver, prec::POSTFIX)?;
                self.require_system(ALGORITHM);
                Ok(Fragment::unary(format!("*std::{which}_element({r}->begin(), {r}->end())")))
            }
            StaticType::Bytes => {
                let r = self.operand(receiver, prec::CONDITIONAL)?;
                let helper = self.runtime_fn(&format!("byte_array_{which}"));
                Ok(Fragment::postfix(format!("{helper}({r})")))
            }
            other => Err(invalid(which, other)),
        }
    }

    /// The source offsets are `[from, to)`; `substr` takes a length.
    fn emit_substring(
        &mut self,
        receiver: &Expr,
        ty: StaticType,
        from: &Expr,
        to: &Expr,
    ) -> Result<Fragment, EmitError> {
        if ty != StaticType::Str {
            return Err(invalid("substring", ty));
        }
        let r = self.operand(receiver, prec::POSTFIX)?;
        let start = self.operand(from, prec::CONDITIONAL)?;
        let end = self.operand(to, prec::ADDITIVE)?;
        let subtrahend = self.operand(from, prec::ADDITIVE + 1)?;
        Ok(Fragment::postfix(format!("{r}.substr({start}, {end} - {subtrahend})")))
    }

    fn emit_to_s(&mut self, receiver: &Expr, ty: StaticType, arg: Option<&Expr>) -> Result<Fragment, EmitError> {
        match ty {
            StaticType::Int(_) => {
                if let Some(radix) = arg.filter(|radix| !is_default_radix(radix)) {
                    return Err(EmitError::UnsupportedRadix {
                        radix: radix_text(radix),
                    });
                }
                let i = self.operand(receiver, prec::CONDITIONAL)?;
                Ok(Fragment::postfix(format!("{}({i})", self.runtime_fn("to_string"))))
            }
            StaticType::Bytes => match arg {
                Some(Expr::Str(encoding)) => {
                    let b = self.operand(receiver, prec::CONDITIONAL)?;
                    Ok(Fragment::postfix(format!(
                        "{}({b}, \"{}\")",
                        self.runtime_fn("bytes_to_str"),
                        escape_str(encoding)
                    )))
                }
                Some(other) => Err(EmitError::InvalidArgument {
                    method: "to_s",
                    reason: format!("encoding must be a string literal, got {}", other.describe()),
                }),
                None => Err(EmitError::InvalidArgument {
                    method: "to_s",
                    reason: "decoding bytes requires an encoding name".to_string(),
                }),
            },
            StaticType::Str if arg.is_none() => self.emit_expr(receiver),
            other => Err(invalid("to_s", other)),
        }
    }

    fn emit_to_i(&mut self, receiver: &Expr, ty: StaticType, arg: Option<&Expr>) -> Result<Fragment, EmitError> {
        if let StaticType::Str = ty {
            let s = self.operand(receiver, prec::CONDITIONAL)?;
            return match arg.filter(|radix| !is_default_radix(radix)) {
                Some(radix) => {
                    let base = self.operand(radix, prec::CONDITIONAL)?;
                    Ok(Fragment::postfix(format!("std::stoi({s}, 0, {base})")))
                }
                None => Ok(Fragment::postfix(format!("std::stoi({s})"))),
            };
        }

        if arg.is_some() {
            return Err(EmitError::InvalidArgument {
                method: "to_i",
                reason: format!("a radix only applies to strings, not {ty}"),
            });
        }
        match ty {
            StaticType::Bool => {
                let b = self.emit_expr(receiver)?.text;
                Ok(Fragment::primary(format!("(({b}) ? 1 : 0)")))
            }
            StaticType::Float(_) => {
                let f = self.operand(receiver, prec::CONDITIONAL)?;
                Ok(Fragment::postfix(format!("static_cast<int>({f})")))
            }
            StaticType::Enum(_) | StaticType::Int(_) => self.emit_expr(receiver),
            other => Err(invalid("to_i", other)),
        }
    }
}

fn invalid(method: &str, found: StaticType) -> EmitError {
    EmitError::InvalidOperand {
        construct: format!("`{method}`"),
        found,
    }
}

fn is_default_radix(radix: &Expr) -> bool {
    matches!(radix, Expr::Int(n) if *n == DEFAULT_RADIX)
}

fn radix_text(radix: &Expr) -> String {
    match radix {
        Expr::Int(n) => n.to_string(),
        other => other.describe(),
    }
}
