//! Sentinel identifiers with fixed C++ renderings.
//!
//! Repetition and loop constructs bind three implicit names. Generated C++ declares them as plain locals, so they
//! must not go through the accessor convention that every other identifier uses.

/// Stable identifier for a sentinel name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SentinelId {
    /// The current element of a repetition.
    Iterator,
    /// Raw-buffer alias of the current element.
    IteratorBuffer,
    /// Index of the current element.
    Index,
}

/// Metadata for a sentinel identifier.
#[derive(Debug, Clone, Copy)]
pub struct SentinelInfo {
    pub id: SentinelId,
    /// Spelling in the expression language.
    pub name: &'static str,
    /// Fixed C++ token.
    pub cpp: &'static str,
}

/// Registry of all sentinel identifiers.
pub const SENTINELS: &[SentinelInfo] = &[
    SentinelInfo {
        id: SentinelId::Iterator,
        name: "_",
        cpp: "_",
    },
    SentinelInfo {
        id: SentinelId::IteratorBuffer,
        name: "_buf",
        cpp: "_buf",
    },
    SentinelInfo {
        id: SentinelId::Index,
        name: "_index",
        cpp: "i",
    },
];

/// Resolve an identifier to a sentinel, if it is one.
pub fn from_str(name: &str) -> Option<SentinelId> {
    SENTINELS.iter().find(|s| s.name == name).map(|s| s.id)
}

/// Return the registry entry for a sentinel.
pub fn info_for(id: SentinelId) -> &'static SentinelInfo {
    match id {
        SentinelId::Iterator => &SENTINELS[0],
        SentinelId::IteratorBuffer => &SENTINELS[1],
        SentinelId::Index => &SENTINELS[2],
    }
}

/// Fixed C++ token for a sentinel.
pub fn cpp_token(id: SentinelId) -> &'static str {
    info_for(id).cpp
}
