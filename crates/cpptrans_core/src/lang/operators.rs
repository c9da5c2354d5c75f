//! Operator vocabulary.
//!
//! This module defines the operators of the expression language together with their C++ spelling and the C++
//! precedence of the rendered operator.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive** and needs the [`Fixity`]: `-` is both subtraction and negation.
//! - `precedence` follows the C++ grammar, higher binds tighter. See [`prec`] for the levels used by non-operator
//!   renderings (calls, member access, the conditional operator).
//!
//! ## Examples
//! ```rust
//! use cpptrans_core::lang::operators::{self, Fixity, OperatorId};
//!
//! assert_eq!(operators::from_str("and", Fixity::Infix), Some(OperatorId::And));
//! assert_eq!(operators::info_for(OperatorId::And).cpp, "&&");
//! ```

/// C++ precedence levels, higher binds tighter.
pub mod prec {
    /// `?:` and assignment.
    pub const CONDITIONAL: u8 = 1;
    pub const LOGICAL_OR: u8 = 3;
    pub const LOGICAL_AND: u8 = 4;
    pub const BIT_OR: u8 = 5;
    pub const BIT_XOR: u8 = 6;
    pub const BIT_AND: u8 = 7;
    pub const EQUALITY: u8 = 8;
    pub const RELATIONAL: u8 = 9;
    pub const SHIFT: u8 = 10;
    pub const ADDITIVE: u8 = 11;
    pub const MULTIPLICATIVE: u8 = 12;
    /// Prefix `-`, `!`, `~`, `*`.
    pub const UNARY: u8 = 13;
    /// Calls, `->`, `.`, `[]`.
    pub const POSTFIX: u8 = 14;
    /// Literals, names, parenthesized expressions.
    pub const PRIMARY: u8 = 15;
}

/// Define whether an operator is infix (binary) or prefix (unary).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fixity {
    Infix,
    Prefix,
}

/// Broad operator family, used to pick type-dependent renderings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorClass {
    Arithmetic,
    Bitwise,
    Comparison,
    Logical,
}

/// Stable identifier for every operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorId {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Mod,

    // Bitwise
    Shl,
    Shr,
    BitAnd,
    BitOr,
    BitXor,

    // Comparison
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,

    // Logical
    And,
    Or,

    // Prefix
    Neg,
    Not,
    Invert,
}

/// Metadata for an operator.
#[derive(Debug, Clone, Copy)]
pub struct OperatorInfo {
    pub id: OperatorId,
    /// Spelling in the expression language.
    pub spelling: &'static str,
    /// Spelling of the native C++ operator.
    pub cpp: &'static str,
    pub precedence: u8,
    pub fixity: Fixity,
    pub class: OperatorClass,
}

const fn op(
    id: OperatorId,
    spelling: &'static str,
    cpp: &'static str,
    precedence: u8,
    fixity: Fixity,
    class: OperatorClass,
) -> OperatorInfo {
    OperatorInfo {
        id,
        spelling,
        cpp,
        precedence,
        fixity,
        class,
    }
}

use Fixity::{Infix, Prefix};
use OperatorClass::{Arithmetic, Bitwise, Comparison, Logical};

/// Registry of all operators.
pub const OPERATORS: &[OperatorInfo] = &[
    op(OperatorId::Add, "+", "+", prec::ADDITIVE, Infix, Arithmetic),
    op(OperatorId::Sub, "-", "-", prec::ADDITIVE, Infix, Arithmetic),
    op(OperatorId::Mul, "*", "*", prec::MULTIPLICATIVE, Infix, Arithmetic),
    op(OperatorId::Div, "/", "/", prec::MULTIPLICATIVE, Infix, Arithmetic),
    op(OperatorId::Mod, "%", "%", prec::MULTIPLICATIVE, Infix, Arithmetic),
    op(OperatorId::Shl, "<<", "<<", prec::SHIFT, Infix, Bitwise),
    op(OperatorId::Shr, ">>", ">>", prec::SHIFT, Infix, Bitwise),
    op(OperatorId::BitAnd, "&", "&", prec::BIT_AND, Infix, Bitwise),
    op(OperatorId::BitOr, "|", "|", prec::BIT_OR, Infix, Bitwise),
    op(OperatorId::BitXor, "^", "^", prec::BIT_XOR, Infix, Bitwise),
    op(OperatorId::Eq, "==", "==", prec::EQUALITY, Infix, Comparison),
    op(OperatorId::NotEq, "!=", "!=", prec::EQUALITY, Infix, Comparison),
    op(OperatorId::Lt, "<", "<", prec::RELATIONAL, Infix, Comparison),
    op(OperatorId::LtEq, "<=", "<=", prec::RELATIONAL, Infix, Comparison),
    op(OperatorId::Gt, ">", ">", prec::RELATIONAL, Infix, Comparison),
    op(OperatorId::GtEq, ">=", ">=", prec::RELATIONAL, Infix, Comparison),
    op(OperatorId::And, "and", "&&", prec::LOGICAL_AND, Infix, Logical),
    op(OperatorId::Or, "or", "||", prec::LOGICAL_OR, Infix, Logical),
    op(OperatorId::Neg, "-", "-", prec::UNARY, Prefix, Arithmetic),
    op(OperatorId::Not, "not", "!", prec::UNARY, Prefix, Logical),
    op(OperatorId::Invert, "~", "~", prec::UNARY, Prefix, Bitwise),
];

/// Resolve an expression-language spelling to an operator id.
pub fn from_str(spelling: &str, fixity: Fixity) -> Option<OperatorId> {
    OPERATORS
        .iter()
        .find(|o| o.spelling == spelling && o.fixity == fixity)
        .map(|o| o.id)
}

/// Return the registry metadata for an operator.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: OperatorId) -> &'static OperatorInfo {
    OPERATORS
        .iter()
        .find(|o| o.id == id)
        .expect("INVARIANT: operator missing from OPERATORS")
}

impl OperatorId {
    /// Native C++ spelling.
    pub fn cpp(self) -> &'static str {
        info_for(self).cpp
    }

    /// C++ precedence of the native operator.
    pub fn precedence(self) -> u8 {
        info_for(self).precedence
    }

    pub fn class(self) -> OperatorClass {
        info_for(self).class
    }

    /// Check whether this is an ordering comparison (`<`, `<=`, `>`, `>=`).
    pub fn is_ordering(self) -> bool {
        matches!(self, OperatorId::Lt | OperatorId::LtEq | OperatorId::Gt | OperatorId::GtEq)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minus_resolves_by_fixity() {
        assert_eq!(from_str("-", Fixity::Infix), Some(OperatorId::Sub));
        assert_eq!(from_str("-", Fixity::Prefix), Some(OperatorId::Neg));
    }

    #[test]
    fn test_word_operators_map_to_symbols() {
        assert_eq!(OperatorId::Or.cpp(), "||");
        assert_eq!(OperatorId::Not.cpp(), "!");
    }

    #[test]
    fn test_precedence_ordering() {
        assert!(OperatorId::Mul.precedence() > OperatorId::Add.precedence());
        assert!(OperatorId::Lt.precedence() > OperatorId::Eq.precedence());
        assert!(OperatorId::And.precedence() > OperatorId::Or.precedence());
    }
}
