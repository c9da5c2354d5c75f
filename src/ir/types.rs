//! Static types of expressions.
//!
//! These are the types the type-lookup capability reports for an expression. The emitter only reads them to pick
//! between renderings; it never derives or caches them itself.

use std::fmt;

/// Width of an integer type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum IntWidth {
    W8,
    W16,
    W32,
    W64,
}

impl IntWidth {
    pub fn bits(self) -> u32 {
        match self {
            IntWidth::W8 => 8,
            IntWidth::W16 => 16,
            IntWidth::W32 => 32,
            IntWidth::W64 => 64,
        }
    }

    pub fn bytes(self) -> u32 {
        self.bits() / 8
    }
}

/// Signed or unsigned integer of a given width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IntType {
    pub signed: bool,
    pub width: IntWidth,
}

impl IntType {
    pub const fn signed(width: IntWidth) -> Self {
        Self { signed: true, width }
    }

    pub const fn unsigned(width: IntWidth) -> Self {
        Self { signed: false, width }
    }

    /// C++ fixed-width type name (`int32_t`, `uint8_t`, ...).
    pub fn cpp_name(self) -> String {
        let prefix = if self.signed { "" } else { "u" };
        format!("{prefix}int{}_t", self.width.bits())
    }
}

/// Width of a floating point type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FloatWidth {
    F32,
    F64,
}

/// Reference to a user-defined record type, by its path of declared names (outermost first).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecordRef {
    pub path: Vec<String>,
}

impl RecordRef {
    pub fn new<S: Into<String>>(path: impl IntoIterator<Item = S>) -> Self {
        Self {
            path: path.into_iter().map(Into::into).collect(),
        }
    }
}

/// Reference to an enum type: the path of the record that declares it, and its own name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EnumRef {
    pub owner: Vec<String>,
    pub name: String,
}

impl EnumRef {
    pub fn new<S: Into<String>>(owner: impl IntoIterator<Item = S>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into_iter().map(Into::into).collect(),
            name: name.into(),
        }
    }

    /// Top-level type that declares this enum, if any.
    pub fn top_level(&self) -> Option<&str> {
        self.owner.first().map(String::as_str)
    }
}

/// Static type of an expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StaticType {
    Int(IntType),
    Float(FloatWidth),
    Bool,
    Str,
    Bytes,
    Array(Box<StaticType>),
    Record(RecordRef),
    Enum(EnumRef),
}

impl StaticType {
    pub fn int(signed: bool, width: IntWidth) -> Self {
        StaticType::Int(IntType { signed, width })
    }

    pub fn array_of(elem: StaticType) -> Self {
        StaticType::Array(Box::new(elem))
    }

    pub fn record<S: Into<String>>(path: impl IntoIterator<Item = S>) -> Self {
        StaticType::Record(RecordRef::new(path))
    }

    /// Strings and byte sequences share the `std::string` representation.
    pub fn is_stringish(&self) -> bool {
        matches!(self, StaticType::Str | StaticType::Bytes)
    }
}

impl fmt::Display for StaticType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StaticType::Int(it) => {
                let sign = if it.signed { 's' } else { 'u' };
                write!(f, "{sign}{}", it.width.bytes())
            }
            StaticType::Float(FloatWidth::F32) => write!(f, "f4"),
            StaticType::Float(FloatWidth::F64) => write!(f, "f8"),
            StaticType::Bool => write!(f, "bool"),
            StaticType::Str => write!(f, "str"),
            StaticType::Bytes => write!(f, "bytes"),
            StaticType::Array(elem) => write!(f, "{elem}[]"),
            StaticType::Record(r) => write!(f, "{}", r.path.join("::")),
            StaticType::Enum(e) => {
                if e.owner.is_empty() {
                    write!(f, "enum {}", e.name)
                } else {
                    write!(f, "enum {}::{}", e.owner.join("::"), e.name)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_cpp_names() {
        assert_eq!(IntType::signed(IntWidth::W32).cpp_name(), "int32_t");
        assert_eq!(IntType::unsigned(IntWidth::W8).cpp_name(), "uint8_t");
        assert_eq!(IntType::unsigned(IntWidth::W64).cpp_name(), "uint64_t");
    }

    #[test]
    fn test_display_uses_source_names() {
        assert_eq!(StaticType::int(false, IntWidth::W16).to_string(), "u2");
        assert_eq!(StaticType::array_of(StaticType::Str).to_string(), "str[]");
        assert_eq!(StaticType::record(["png", "chunk"]).to_string(), "png::chunk");
        assert_eq!(StaticType::Enum(EnumRef::new(["zoo"], "animal")).to_string(), "enum zoo::animal");
    }

    #[test]
    fn test_enum_top_level() {
        assert_eq!(EnumRef::new(["zoo", "cage"], "animal").top_level(), Some("zoo"));
        assert_eq!(EnumRef::new(Vec::<String>::new(), "animal").top_level(), None);
    }
}
