//! Emitter vocabulary registries.
//!
//! This module is the “front door” for the vocabulary the emitter dispatches on: operators (with their C++
//! spellings and precedence), built-in pseudo-methods, sentinel identifiers, and C++ naming conventions.
//!
//! ## Notes
//! - Registries are intentionally **pure**: no AST types, no IO, no side effects.
//! - Callers work with **stable IDs** (e.g. `OperatorId`, `MethodId`) and look up spellings via registry tables
//!   instead of matching on strings.
//!
//! ## Examples
//! ```rust
//! use cpptrans_core::lang::methods::{self, MethodId};
//!
//! assert_eq!(methods::from_str("substring"), Some(MethodId::Substring));
//! assert_eq!(methods::as_str(MethodId::ToI), "to_i");
//! ```

pub mod conventions;
pub mod identifiers;
pub mod methods;
pub mod operators;
