//! Built-in pseudo-method vocabulary.
//!
//! These are the method-like operations the expression language offers on built-in types (`s.length`,
//! `a.first`, `n.to_s`, ...). Which rendering applies depends on the receiver's static type; this registry only
//! records names and accepted argument counts.
//!
//! ## Examples
//! ```rust
//! use cpptrans_core::lang::methods::{self, MethodId};
//!
//! assert_eq!(methods::from_str("to_i"), Some(MethodId::ToI));
//! assert!(methods::info_for(MethodId::Substring).accepts(2));
//! ```

/// Stable identifier for a built-in pseudo-method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MethodId {
    Length,
    Size,
    Substring,
    Reverse,
    Min,
    Max,
    First,
    Last,
    ToS,
    ToI,
}

/// Metadata for a pseudo-method.
#[derive(Debug, Clone, Copy)]
pub struct MethodInfo {
    pub id: MethodId,
    pub canonical: &'static str,
    pub min_args: usize,
    pub max_args: usize,
    pub summary: &'static str,
}

impl MethodInfo {
    /// Check whether `count` arguments are accepted.
    pub fn accepts(&self, count: usize) -> bool {
        (self.min_args..=self.max_args).contains(&count)
    }
}

const fn info(
    id: MethodId,
    canonical: &'static str,
    min_args: usize,
    max_args: usize,
    summary: &'static str,
) -> MethodInfo {
    MethodInfo {
        id,
        canonical,
        min_args,
        max_args,
        summary,
    }
}

/// Registry of all pseudo-methods.
pub const METHODS: &[MethodInfo] = &[
    info(MethodId::Length, "length", 0, 0, "Length of a string or byte sequence."),
    info(MethodId::Size, "size", 0, 0, "Number of elements of an array or bytes."),
    info(
        MethodId::Substring,
        "substring",
        2,
        2,
        "Substring between a start and an end offset.",
    ),
    info(MethodId::Reverse, "reverse", 0, 0, "Reversed string."),
    info(MethodId::Min, "min", 0, 0, "Smallest element."),
    info(MethodId::Max, "max", 0, 0, "Largest element."),
    info(MethodId::First, "first", 0, 0, "First element."),
    info(MethodId::Last, "last", 0, 0, "Last element."),
    info(
        MethodId::ToS,
        "to_s",
        0,
        1,
        "Integer to string (optional radix), or bytes to string (encoding).",
    ),
    info(MethodId::ToI, "to_i", 0, 1, "Convert to an integer (optional radix for strings)."),
];

/// Resolve a method spelling to its id.
pub fn from_str(name: &str) -> Option<MethodId> {
    METHODS.iter().find(|m| m.canonical == name).map(|m| m.id)
}

/// Canonical spelling of a method.
pub fn as_str(id: MethodId) -> &'static str {
    info_for(id).canonical
}

/// Return the registry metadata for a method.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: MethodId) -> &'static MethodInfo {
    METHODS
        .iter()
        .find(|m| m.id == id)
        .expect("INVARIANT: method missing from METHODS")
}
