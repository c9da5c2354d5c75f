//! Type lookup for expressions.
//!
//! The emitter asks a [`TypeProvider`] for the static type of any sub-expression whenever the rendering depends on
//! it (modulo, string comparison, subscripts, pseudo-methods, array literals). Providers are read-only from the
//! emitter's point of view and may be shared across any number of rendering calls.

use std::collections::HashMap;

use cpptrans_core::lang::methods::MethodId;

use super::expr::{BinaryOp, Expr, UnaryOp};
use super::types::{FloatWidth, IntType, IntWidth, StaticType};

/// Resolve the static type of an expression.
pub trait TypeProvider {
    /// Static type of `expr`, or `None` if it cannot be resolved.
    fn type_of(&self, expr: &Expr) -> Option<StaticType>;

    /// Path of the record whose code is being generated (outermost first).
    fn current_class(&self) -> &[String];
}

/// A [`TypeProvider`] backed by explicit tables.
///
/// Identifiers and record members are looked up in tables; every other node's type is derived structurally from
/// its children. This is enough for a caller that already resolved names, and for tests.
#[derive(Debug, Clone, Default)]
pub struct MapTypeProvider {
    current_class: Vec<String>,
    names: HashMap<String, StaticType>,
    members: HashMap<(Vec<String>, String), StaticType>,
}

impl MapTypeProvider {
    pub fn new<S: Into<String>>(current_class: impl IntoIterator<Item = S>) -> Self {
        Self {
            current_class: current_class.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Declare the type of an identifier in the current record.
    pub fn with_name(mut self, name: impl Into<String>, ty: StaticType) -> Self {
        self.names.insert(name.into(), ty);
        self
    }

    /// Declare the type of a member of a record.
    pub fn with_member<S: Into<String>>(
        mut self,
        record: impl IntoIterator<Item = S>,
        attr: impl Into<String>,
        ty: StaticType,
    ) -> Self {
        let path = record.into_iter().map(Into::into).collect();
        self.members.insert((path, attr.into()), ty);
        self
    }

    fn int_literal_type(n: i128) -> StaticType {
        if i32::try_from(n).is_ok() {
            StaticType::Int(IntType::signed(IntWidth::W32))
        } else if i64::try_from(n).is_ok() {
            StaticType::Int(IntType::signed(IntWidth::W64))
        } else {
            StaticType::Int(IntType::unsigned(IntWidth::W64))
        }
    }

    fn element_type(container: &StaticType) -> Option<StaticType> {
        match container {
            StaticType::Array(elem) => Some(elem.as_ref().clone()),
            StaticType::Bytes | StaticType::Str => Some(StaticType::Int(IntType::unsigned(IntWidth::W8))),
            _ => None,
        }
    }

    fn arithmetic_type(left: StaticType, right: StaticType) -> Option<StaticType> {
        match (left, right) {
            (StaticType::Int(l), StaticType::Int(r)) => Some(StaticType::Int(IntType {
                signed: l.signed || r.signed,
                width: l.width.max(r.width),
            })),
            (StaticType::Float(_), StaticType::Int(_) | StaticType::Float(_))
            | (StaticType::Int(_), StaticType::Float(_)) => Some(StaticType::Float(FloatWidth::F64)),
            (StaticType::Str, StaticType::Str) => Some(StaticType::Str),
            _ => None,
        }
    }

    /// Element type able to hold both `left` and `right`: equal types unify, numbers widen.
    fn common_type(left: StaticType, right: StaticType) -> Option<StaticType> {
        let numeric = |ty: &StaticType| matches!(ty, StaticType::Int(_) | StaticType::Float(_));
        if left == right {
            Some(left)
        } else if numeric(&left) && numeric(&right) {
            Self::arithmetic_type(left, right)
        } else {
            None
        }
    }
}

impl TypeProvider for MapTypeProvider {
    fn type_of(&self, expr: &Expr) -> Option<StaticType> {
        match expr {
            Expr::Int(n) => Some(Self::int_literal_type(*n)),
            Expr::Float(_) => Some(StaticType::Float(FloatWidth::F64)),
            Expr::Bool(_) => Some(StaticType::Bool),
            Expr::Str(_) => Some(StaticType::Str),
            Expr::Bytes(_) => Some(StaticType::Bytes),
            Expr::Array(items) => {
                let (first, rest) = items.split_first()?;
                let elem = rest.iter().try_fold(self.type_of(first)?, |acc, item| {
                    Self::common_type(acc, self.type_of(item)?)
                })?;
                Some(StaticType::array_of(elem))
            }
            Expr::Name(name) => self.names.get(name).cloned(),
            Expr::Attribute { value, attr } => match self.type_of(value)? {
                StaticType::Record(r) => self.members.get(&(r.path, attr.clone())).cloned(),
                _ => None,
            },
            Expr::Subscript { value, .. } => Self::element_type(&self.type_of(value)?),
            Expr::BinOp { left, op, right } => match op {
                BinaryOp::Eq
                | BinaryOp::NotEq
                | BinaryOp::Lt
                | BinaryOp::LtEq
                | BinaryOp::Gt
                | BinaryOp::GtEq
                | BinaryOp::And
                | BinaryOp::Or => Some(StaticType::Bool),
                _ => Self::arithmetic_type(self.type_of(left)?, self.type_of(right)?),
            },
            Expr::UnaryOp { op, operand } => match op {
                UnaryOp::Not => Some(StaticType::Bool),
                UnaryOp::Neg | UnaryOp::Invert => self.type_of(operand),
            },
            Expr::IfExp { if_true, .. } => self.type_of(if_true),
            Expr::CastTo { to, .. } => Some(to.clone()),
            Expr::EnumByLabel { enum_ref, .. } | Expr::EnumById { enum_ref, .. } => {
                Some(StaticType::Enum(enum_ref.clone()))
            }
            Expr::Method { receiver, method, .. } => match method {
                MethodId::Length | MethodId::Size | MethodId::ToI => {
                    Some(StaticType::Int(IntType::signed(IntWidth::W32)))
                }
                MethodId::Substring | MethodId::Reverse | MethodId::ToS => Some(StaticType::Str),
                MethodId::Min | MethodId::Max | MethodId::First | MethodId::Last => {
                    Self::element_type(&self.type_of(receiver)?)
                }
            },
        }
    }

    fn current_class(&self) -> &[String] {
        &self.current_class
    }
}
