//! Expression IR consumed by the C++ emitter.
//!
//! - [`expr`]: the expression AST ([`Expr`]) and its operator enums,
//! - [`types`]: static types ([`StaticType`]) reported for expressions,
//! - [`provider`]: the [`TypeProvider`] capability plus a table-backed implementation.
//!
//! Parsing source text into this AST and resolving names are the surrounding generator's job.

pub mod expr;
pub mod provider;
pub mod types;

pub use expr::{BinaryOp, Expr, UnaryOp};
pub use provider::{MapTypeProvider, TypeProvider};
pub use types::{EnumRef, FloatWidth, IntType, IntWidth, RecordRef, StaticType};
