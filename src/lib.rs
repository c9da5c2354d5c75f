#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used)]
//! C++ expression emitter
//!
//! This crate renders typed expressions of a binary-format description language as C++ source text. It is the
//! expression layer of a code generator: the surrounding generator parses expressions, resolves their types and
//! writes files; this crate turns one expression at a time into text that can be spliced at an expression position.
//!
//! ## Crate layout
//!
//! - [`ir`]: the expression AST, static types and the type-lookup capability
//! - [`emit`]: the [`CppEmitter`], its configuration, ownership policies and include registries
//! - `cpptrans_core` (separate crate): dependency-free vocabularies and lexical helpers (operators, pseudo-methods,
//!   sentinel identifiers, integer suffixes, string escaping)
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. Ill-typed input is reported
//!   as an [`EmitError`], never a panic.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//! - **True invariants**: Registry lookups that can only fail on a programming error panic with an
//!   `"INVARIANT: ..."` message.
//!
//! ## Examples
//!
//! ```rust
//! use cpptrans::{CppEmitter, EmitConfig, Expr, ImportList, MapTypeProvider, OwnershipStrategy, StaticType};
//!
//! let types = MapTypeProvider::new(["gif"]).with_name("block", StaticType::record(["gif", "block"]));
//! let config = EmitConfig::new().with_ownership(OwnershipStrategy::Shared);
//! let (mut src, mut hdr) = (ImportList::new(), ImportList::new());
//!
//! let mut emitter = CppEmitter::new(&types, &config, &mut src, &mut hdr);
//! let text = emitter.translate(&Expr::cast(Expr::name("block"), StaticType::record(["gif", "extension"])))?;
//! assert_eq!(text, "std::static_pointer_cast<gif_t::extension_t>(block())");
//! # Ok::<(), cpptrans::EmitError>(())
//! ```

pub mod emit;
pub mod ir;

pub use emit::{
    CppEmitter, EmitConfig, EmitError, ImportList, Include, OutputSection, OwnershipPolicy, OwnershipStrategy,
};
pub use ir::{BinaryOp, EnumRef, Expr, MapTypeProvider, StaticType, TypeProvider, UnaryOp};

pub use cpptrans_core::lang::methods::MethodId;
