//! Emitter configuration for one generation run.
//!
//! The configuration is fixed for the lifetime of a run: every expression rendered during that run sees the same
//! ownership strategy and target capabilities.
//!
//! ## Notes
//! - Array literals render with brace initialization (`new std::vector<T>{...}`) under every strategy, so the
//!   generated code needs a C++11 compiler whichever preset is chosen. The presets differ only in ownership and
//!   in the string accessors they assume.

use std::fmt;

/// Object-ownership convention for generated record and array handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OwnershipStrategy {
    /// Plain pointers everywhere.
    #[default]
    Raw,
    /// `std::unique_ptr` for owning handles, plain pointers for borrowed ones.
    UniqueAndRaw,
    /// `std::shared_ptr` everywhere.
    Shared,
}

impl fmt::Display for OwnershipStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OwnershipStrategy::Raw => "raw-pointer",
            OwnershipStrategy::UniqueAndRaw => "unique-and-raw-pointer",
            OwnershipStrategy::Shared => "shared-pointer",
        };
        f.write_str(name)
    }
}

/// Runtime-support class that hosts helpers like `mod` and `reverse`.
pub const DEFAULT_RUNTIME_NAMESPACE: &str = "kaitai::kstream";

/// Emitter configuration
#[derive(Debug, Clone)]
pub struct EmitConfig {
    /// Ownership strategy for record and array handles
    pub ownership: OwnershipStrategy,
    /// Whether `std::string::front()`/`back()` are available (C++11 and later)
    pub std_string_front_back: bool,
    /// Qualified name of the runtime-support class
    pub runtime_namespace: String,
}

impl Default for EmitConfig {
    fn default() -> Self {
        Self::compat()
    }
}

impl EmitConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Conservative settings: raw pointers, no string front/back accessors.
    ///
    /// This avoids C++11 library features in handle types and string access. It is not a C++98 mode: array
    /// literals still use brace initialization.
    pub fn compat() -> Self {
        Self {
            ownership: OwnershipStrategy::Raw,
            std_string_front_back: false,
            runtime_namespace: DEFAULT_RUNTIME_NAMESPACE.to_string(),
        }
    }

    /// Settings for a C++11 target: unique-and-raw pointers, string front/back accessors.
    pub fn cpp11() -> Self {
        Self {
            ownership: OwnershipStrategy::UniqueAndRaw,
            std_string_front_back: true,
            runtime_namespace: DEFAULT_RUNTIME_NAMESPACE.to_string(),
        }
    }

    /// Set the ownership strategy
    pub fn with_ownership(mut self, ownership: OwnershipStrategy) -> Self {
        self.ownership = ownership;
        self
    }

    /// Set whether string front/back accessors are available
    pub fn with_std_string_front_back(mut self, available: bool) -> Self {
        self.std_string_front_back = available;
        self
    }

    /// Set the runtime-support class
    pub fn with_runtime_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.runtime_namespace = namespace.into();
        self
    }

    /// Qualified call to a runtime-support helper (`kaitai::kstream::mod`).
    pub(crate) fn runtime_fn(&self, name: &str) -> String {
        format!("{}::{name}", self.runtime_namespace)
    }
}
