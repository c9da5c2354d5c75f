//! Define error types for expression → C++ emission.
//!
//! These errors represent *emission* failures: constructs the emitter refuses to render rather than produce
//! plausible-looking but wrong C++.
//!
//! ## Notes
//!
//! - Prefer actionable messages: users should know what construct is unsupported and what to do instead.
//! - `InvalidOperand`, `Arity` and `UnresolvedType` indicate that an upstream stage handed over an ill-typed
//!   expression. They are reported instead of panicking.

use miette::Diagnostic;
use thiserror::Error;

use super::config::OwnershipStrategy;
use crate::ir::StaticType;

/// Error during expression emission.
#[derive(Debug, Clone, PartialEq, Error, Diagnostic)]
pub enum EmitError {
    #[error("unsupported: integer to string conversion with radix {radix}")]
    #[diagnostic(
        code(cpptrans::unsupported_radix),
        help("only radix 10 is supported for `to_s` on integers")
    )]
    UnsupportedRadix { radix: String },

    #[error("unsupported: array literals under the {strategy} ownership strategy")]
    #[diagnostic(
        code(cpptrans::unsupported_array_literal),
        help("no literal construction syntax is defined for this strategy; build the array at runtime instead")
    )]
    UnsupportedArrayLiteral { strategy: OwnershipStrategy },

    #[error("cannot render {construct} on an operand of type {found}")]
    #[diagnostic(code(cpptrans::invalid_operand))]
    InvalidOperand { construct: String, found: StaticType },

    #[error("`{method}` takes {expected} argument(s), got {found}")]
    #[diagnostic(code(cpptrans::arity))]
    Arity {
        method: &'static str,
        expected: String,
        found: usize,
    },

    #[error("invalid argument to `{method}`: {reason}")]
    #[diagnostic(code(cpptrans::invalid_argument))]
    InvalidArgument { method: &'static str, reason: String },

    #[error("no static type known for {expr}")]
    #[diagnostic(
        code(cpptrans::unresolved_type),
        help("the type provider must resolve every sub-expression before emission")
    )]
    UnresolvedType { expr: String },
}

impl EmitError {
    /// Check whether this is one of the deliberate unsupported-construct failures.
    pub fn is_unsupported(&self) -> bool {
        matches!(
            self,
            EmitError::UnsupportedRadix { .. } | EmitError::UnsupportedArrayLiteral { .. }
        )
    }
}
