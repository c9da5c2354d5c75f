//! C++ naming conventions shared by generated declarations and expressions.
//!
//! Declared names in the source language are `lower_snake_case`. Generated C++ uses:
//! - `name_t` for record classes, nested as `outer_t::inner_t`,
//! - `name_e` for enum types,
//! - `UPPER_SNAKE` for enum constants, prefixed with the enum name,
//! - `name()` accessors for fields.

/// Suffix appended to record class names.
pub const CLASS_SUFFIX: &str = "_t";

/// Suffix appended to enum type names.
pub const ENUM_SUFFIX: &str = "_e";

/// Extension of generated header files.
pub const HEADER_EXTENSION: &str = "h";

/// Convert a `lower_snake` name into `UPPER_SNAKE`.
pub fn upper_underscore_case(name: &str) -> String {
    name.to_ascii_uppercase()
}

/// C++ class name for one declared type name (`foo` → `foo_t`).
pub fn type_to_class(name: &str) -> String {
    format!("{name}{CLASS_SUFFIX}")
}

/// Qualified C++ class name for a path of nested type names (`[a, b]` → `a_t::b_t`).
pub fn types_to_class(path: &[String]) -> String {
    path.iter().map(|n| type_to_class(n)).collect::<Vec<_>>().join("::")
}

/// Qualified C++ enum type name (`[a]`, `animal` → `a_t::animal_e`).
pub fn enum_to_type(owner: &[String], name: &str) -> String {
    if owner.is_empty() {
        format!("{name}{ENUM_SUFFIX}")
    } else {
        format!("{}::{name}{ENUM_SUFFIX}", types_to_class(owner))
    }
}

/// Qualified C++ enum constant (`[a]`, `animal`, `cat` → `a_t::ANIMAL_CAT`).
pub fn enum_to_constant(owner: &[String], name: &str, label: &str) -> String {
    let constant = upper_underscore_case(&format!("{name}_{label}"));
    if owner.is_empty() {
        constant
    } else {
        format!("{}::{constant}", types_to_class(owner))
    }
}

/// Header file declaring a top-level type (`foo` → `foo.h`).
pub fn header_file_name(top_level: &str) -> String {
    format!("{top_level}.{HEADER_EXTENSION}")
}

/// Accessor call for a field or plain identifier (`size` → `size()`).
pub fn accessor_call(name: &str) -> String {
    format!("{name}()")
}
