//! Expression AST consumed by the emitter.
//!
//! Nodes are immutable and owned by the caller. Static types are not stored on the nodes; they come from a
//! [`TypeProvider`](super::TypeProvider) on demand.
//!
//! ## Enum-based dispatch
//!
//! Operators and built-in pseudo-methods are closed enums ([`BinaryOp`], [`UnaryOp`], [`MethodId`]) instead of
//! strings, so the emitter's matches are checked for exhaustiveness.

use cpptrans_core::lang::methods::MethodId;
use cpptrans_core::lang::operators::OperatorId;

use super::types::{EnumRef, StaticType};

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Shl,
    Shr,
    BitAnd,
    BitOr,
    BitXor,
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    And,
    Or,
}

impl BinaryOp {
    /// Registry id for spelling and precedence lookups.
    pub fn id(self) -> OperatorId {
        match self {
            BinaryOp::Add => OperatorId::Add,
            BinaryOp::Sub => OperatorId::Sub,
            BinaryOp::Mul => OperatorId::Mul,
            BinaryOp::Div => OperatorId::Div,
            BinaryOp::Mod => OperatorId::Mod,
            BinaryOp::Shl => OperatorId::Shl,
            BinaryOp::Shr => OperatorId::Shr,
            BinaryOp::BitAnd => OperatorId::BitAnd,
            BinaryOp::BitOr => OperatorId::BitOr,
            BinaryOp::BitXor => OperatorId::BitXor,
            BinaryOp::Eq => OperatorId::Eq,
            BinaryOp::NotEq => OperatorId::NotEq,
            BinaryOp::Lt => OperatorId::Lt,
            BinaryOp::LtEq => OperatorId::LtEq,
            BinaryOp::Gt => OperatorId::Gt,
            BinaryOp::GtEq => OperatorId::GtEq,
            BinaryOp::And => OperatorId::And,
            BinaryOp::Or => OperatorId::Or,
        }
    }
}

/// Prefix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Neg,
    Not,
    Invert,
}

impl UnaryOp {
    pub fn id(self) -> OperatorId {
        match self {
            UnaryOp::Neg => OperatorId::Neg,
            UnaryOp::Not => OperatorId::Not,
            UnaryOp::Invert => OperatorId::Invert,
        }
    }
}

/// An expression node.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    // Literals
    /// Integer literal. Wide enough for every 64-bit signed and unsigned value and beyond.
    Int(i128),
    Float(f64),
    Bool(bool),
    Str(String),
    Bytes(Vec<u8>),
    /// Array literal; the element type comes from the type provider.
    Array(Vec<Expr>),

    /// Identifier reference (field of the current record, or a sentinel).
    Name(String),

    /// Member access `value.attr`.
    Attribute { value: Box<Expr>, attr: String },

    /// Container subscript `value[index]`.
    Subscript { value: Box<Expr>, index: Box<Expr> },

    BinOp {
        left: Box<Expr>,
        op: BinaryOp,
        right: Box<Expr>,
    },

    UnaryOp { op: UnaryOp, operand: Box<Expr> },

    /// Conditional `condition ? if_true : if_false`.
    IfExp {
        condition: Box<Expr>,
        if_true: Box<Expr>,
        if_false: Box<Expr>,
    },

    /// Explicit cast `value.as<to>`.
    CastTo { value: Box<Expr>, to: StaticType },

    /// Enum constant by label `enum::label`.
    EnumByLabel { enum_ref: EnumRef, label: String },

    /// Enum value from a raw integer id.
    EnumById { enum_ref: EnumRef, id: Box<Expr> },

    /// Built-in pseudo-method call `receiver.method(args)`.
    Method {
        receiver: Box<Expr>,
        method: MethodId,
        args: Vec<Expr>,
    },
}

impl Expr {
    pub fn int(n: i128) -> Self {
        Expr::Int(n)
    }

    pub fn str(s: impl Into<String>) -> Self {
        Expr::Str(s.into())
    }

    pub fn name(name: impl Into<String>) -> Self {
        Expr::Name(name.into())
    }

    pub fn attr(value: Expr, attr: impl Into<String>) -> Self {
        Expr::Attribute {
            value: Box::new(value),
            attr: attr.into(),
        }
    }

    pub fn subscript(value: Expr, index: Expr) -> Self {
        Expr::Subscript {
            value: Box::new(value),
            index: Box::new(index),
        }
    }

    pub fn binop(left: Expr, op: BinaryOp, right: Expr) -> Self {
        Expr::BinOp {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    pub fn unary(op: UnaryOp, operand: Expr) -> Self {
        Expr::UnaryOp {
            op,
            operand: Box::new(operand),
        }
    }

    pub fn if_exp(condition: Expr, if_true: Expr, if_false: Expr) -> Self {
        Expr::IfExp {
            condition: Box::new(condition),
            if_true: Box::new(if_true),
            if_false: Box::new(if_false),
        }
    }

    pub fn cast(value: Expr, to: StaticType) -> Self {
        Expr::CastTo {
            value: Box::new(value),
            to,
        }
    }

    pub fn method(receiver: Expr, method: MethodId, args: Vec<Expr>) -> Self {
        Expr::Method {
            receiver: Box::new(receiver),
            method,
            args,
        }
    }

    /// Short human-readable description used in diagnostics.
    pub fn describe(&self) -> String {
        match self {
            Expr::Int(n) => format!("integer literal {n}"),
            Expr::Float(x) => format!("float literal {x}"),
            Expr::Bool(b) => format!("boolean literal {b}"),
            Expr::Str(_) => "string literal".to_string(),
            Expr::Bytes(_) => "byte-sequence literal".to_string(),
            Expr::Array(_) => "array literal".to_string(),
            Expr::Name(n) => format!("identifier `{n}`"),
            Expr::Attribute { attr, .. } => format!("member access `.{attr}`"),
            Expr::Subscript { .. } => "subscript".to_string(),
            Expr::BinOp { op, .. } => format!("binary `{}`", op.id().cpp()),
            Expr::UnaryOp { op, .. } => format!("unary `{}`", op.id().cpp()),
            Expr::IfExp { .. } => "conditional expression".to_string(),
            Expr::CastTo { to, .. } => format!("cast to {to}"),
            Expr::EnumByLabel { enum_ref, label } => format!("enum constant {}::{label}", enum_ref.name),
            Expr::EnumById { enum_ref, .. } => format!("enum {} by id", enum_ref.name),
            Expr::Method { method, .. } => {
                format!("method `{}`", cpptrans_core::lang::methods::as_str(*method))
            }
        }
    }
}
