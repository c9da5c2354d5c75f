//! Auxiliary-declaration registries (C++ `#include` lists).
//!
//! Rendering an expression can require a support facility, e.g. `<vector>` for an array literal or `<algorithm>`
//! for `min`/`max` over arrays. The emitter records those needs in an [`ImportList`] owned by the caller, who
//! turns them into include directives when the file is written.
//!
//! ## Notes
//! - Lists are **append-only, order-preserving and duplicate-free**: the first registration of a facility fixes
//!   its position, later ones are no-ops. Output is therefore deterministic across runs.
//! - Two lists exist per generated unit, one for the implementation file and one for the header; see
//!   [`OutputSection`].

use std::fmt;

use indexmap::IndexSet;

/// Standard dynamic-array facility.
pub const VECTOR: &str = "vector";

/// Standard generic-algorithm facility.
pub const ALGORITHM: &str = "algorithm";

/// Which part of the generated program is being rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputSection {
    /// Implementation (`.cpp`) text.
    #[default]
    Source,
    /// Declaration (`.h`) text.
    Header,
}

/// One include directive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Include {
    /// `#include <name>`
    System(String),
    /// `#include "name"`
    Local(String),
}

impl fmt::Display for Include {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Include::System(name) => write!(f, "#include <{name}>"),
            Include::Local(name) => write!(f, "#include \"{name}\""),
        }
    }
}

/// Ordered, duplicate-free list of includes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportList {
    includes: IndexSet<Include>,
}

impl ImportList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a system header. Returns `true` if it was not registered before.
    pub fn add_system(&mut self, name: impl Into<String>) -> bool {
        self.includes.insert(Include::System(name.into()))
    }

    /// Register a local header. Returns `true` if it was not registered before.
    pub fn add_local(&mut self, name: impl Into<String>) -> bool {
        self.includes.insert(Include::Local(name.into()))
    }

    pub fn contains(&self, include: &Include) -> bool {
        self.includes.contains(include)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Include> {
        self.includes.iter()
    }

    pub fn len(&self) -> usize {
        self.includes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.includes.is_empty()
    }

    /// Include directives in registration order.
    pub fn to_lines(&self) -> Vec<String> {
        self.includes.iter().map(ToString::to_string).collect()
    }
}
