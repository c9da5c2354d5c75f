//! Provide shared, pure helpers and canonical vocabulary for the C++ expression emitter.
//!
//! This crate is intentionally small and dependency-free. It holds the deterministic pieces of the emitter that do
//! not depend on the expression AST:
//! - integer literal range classification ([`ints`]),
//! - string and byte-sequence escaping ([`strings`]),
//! - operator, pseudo-method and identifier vocabulary ([`lang`]).
//!
//! ## Notes
//!
//! - This is a “semantic core” crate: **no IO**, no global state, and no emitter-specific types.

pub mod ints;
pub mod lang;
pub mod strings;
