//! Emit C++ expression text from the expression IR.
//!
//! This module defines [`CppEmitter`] and wires together the focused submodules that implement expression → C++
//! emission. The per-construct rendering lives in those submodules.
//!
//! ## Notes
//! - Output is expression text suitable for splicing at an expression position, never a statement.
//! - Strategy-dependent renderings are centralized in [`ownership`] and must not be re-implemented ad hoc in
//!   emission code.
//! - The only side effect of rendering is registration into the caller's [`ImportList`]s.
//!
//! ## See also
//! - [`config`]: per-run configuration
//! - [`imports`]: include registries
//! - [`ownership`]: ownership policies
//! - `types`: native C++ type names
//! - `expressions`: literal, operator, access, method and cast rendering

pub mod config;
pub mod errors;
pub mod imports;
pub mod ownership;

mod expressions;
mod types;

pub use config::{EmitConfig, OwnershipStrategy};
pub use errors::EmitError;
pub use imports::{ImportList, Include, OutputSection};
pub use ownership::{OwnershipPolicy, policy_for};

use cpptrans_core::lang::operators::prec;

use crate::ir::{Expr, StaticType, TypeProvider};

/// A rendered expression together with the C++ precedence of its outermost construct.
///
/// Composite renderings use the precedence to decide whether an operand needs parentheses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Fragment {
    pub(crate) text: String,
    pub(crate) prec: u8,
}

impl Fragment {
    pub(crate) fn new(text: impl Into<String>, prec: u8) -> Self {
        Self {
            text: text.into(),
            prec,
        }
    }

    pub(crate) fn primary(text: impl Into<String>) -> Self {
        Self::new(text, prec::PRIMARY)
    }

    pub(crate) fn postfix(text: impl Into<String>) -> Self {
        Self::new(text, prec::POSTFIX)
    }

    pub(crate) fn unary(text: impl Into<String>) -> Self {
        Self::new(text, prec::UNARY)
    }

    /// Text of this fragment, parenthesized if it binds looser than `min_prec`.
    pub(crate) fn at_least(self, min_prec: u8) -> String {
        if self.prec < min_prec {
            format!("({})", self.text)
        } else {
            self.text
        }
    }
}

/// Emit C++ expressions.
///
/// One emitter serves one generation run (or one part of it): it borrows the type provider and configuration
/// read-only and the two include registries mutably.
///
/// ## Examples
///
/// ```rust
/// use cpptrans::emit::{CppEmitter, EmitConfig, ImportList};
/// use cpptrans::ir::{BinaryOp, Expr, IntWidth, MapTypeProvider, StaticType};
///
/// let types = MapTypeProvider::new(["gif"])
///     .with_name("a", StaticType::int(true, IntWidth::W32))
///     .with_name("b", StaticType::int(true, IntWidth::W32));
/// let config = EmitConfig::default();
/// let (mut src, mut hdr) = (ImportList::new(), ImportList::new());
///
/// let mut emitter = CppEmitter::new(&types, &config, &mut src, &mut hdr);
/// let expr = Expr::binop(Expr::name("a"), BinaryOp::Mod, Expr::name("b"));
/// assert_eq!(emitter.translate(&expr).unwrap(), "kaitai::kstream::mod(a(), b())");
/// ```
pub struct CppEmitter<'a> {
    provider: &'a dyn TypeProvider,
    config: &'a EmitConfig,
    policy: &'static dyn OwnershipPolicy,
    source_imports: &'a mut ImportList,
    header_imports: &'a mut ImportList,
    section: OutputSection,
}

impl<'a> CppEmitter<'a> {
    pub fn new(
        provider: &'a dyn TypeProvider,
        config: &'a EmitConfig,
        source_imports: &'a mut ImportList,
        header_imports: &'a mut ImportList,
    ) -> Self {
        Self {
            provider,
            config,
            policy: policy_for(config.ownership),
            source_imports,
            header_imports,
            section: OutputSection::Source,
        }
    }

    /// Select which part of the generated program subsequent renderings belong to.
    pub fn set_section(&mut self, section: OutputSection) {
        self.section = section;
    }

    pub fn section(&self) -> OutputSection {
        self.section
    }

    pub fn config(&self) -> &EmitConfig {
        self.config
    }

    /// Render an expression as C++ text.
    ///
    /// ## Errors
    /// - [`EmitError::UnsupportedRadix`] / [`EmitError::UnsupportedArrayLiteral`]: deliberate unsupported constructs.
    /// - Other variants: the expression is ill-typed according to the type provider.
    #[tracing::instrument(level = "trace", skip_all, fields(section = ?self.section))]
    pub fn translate(&mut self, expr: &Expr) -> Result<String, EmitError> {
        self.emit_expr(expr).map(|f| f.text).inspect_err(|err| {
            tracing::debug!(error = %err, expr = %expr.describe(), "expression not emitted");
        })
    }

    /// Native C++ type for a static type under the active ownership strategy.
    pub fn native_type(&self, ty: &StaticType) -> String {
        types::native_type(self.policy, ty)
    }

    /// Render `expr`, parenthesized if it binds looser than `min_prec`.
    pub(crate) fn operand(&mut self, expr: &Expr, min_prec: u8) -> Result<String, EmitError> {
        Ok(self.emit_expr(expr)?.at_least(min_prec))
    }

    /// Static type of `expr` from the provider.
    pub(crate) fn type_of(&self, expr: &Expr) -> Result<StaticType, EmitError> {
        self.provider.type_of(expr).ok_or_else(|| EmitError::UnresolvedType {
            expr: expr.describe(),
        })
    }

    pub(crate) fn current_class(&self) -> &[String] {
        self.provider.current_class()
    }

    /// Register a system header in the registry of the active section.
    pub(crate) fn require_system(&mut self, name: &str) {
        let section = self.section;
        let list = match section {
            OutputSection::Source => &mut *self.source_imports,
            OutputSection::Header => &mut *self.header_imports,
        };
        if list.add_system(name) {
            tracing::trace!(include = name, ?section, "registered system include");
        }
    }

    /// Register a local header needed by declarations.
    pub(crate) fn require_header_local(&mut self, name: &str) {
        if self.header_imports.add_local(name) {
            tracing::trace!(include = name, section = ?OutputSection::Header, "registered local include");
        }
    }

    pub(crate) fn runtime_fn(&self, name: &str) -> String {
        self.config.runtime_fn(name)
    }

    pub(crate) fn policy(&self) -> &'static dyn OwnershipPolicy {
        self.policy
    }
}
