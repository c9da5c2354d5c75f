//! Define C++ string literal escaping (policy + pure helpers).
//!
//! ## Notes
//! - **Byte model**: strings are escaped over their UTF-8 bytes, so the literal reproduces the exact byte content
//!   regardless of the target compiler's source or execution character set.
//! - **Octal for generic escapes**: C++ hex escapes (`\x...`) consume every following hex digit, so `"\x01" "a"`
//!   would need splitting. Octal escapes stop after three digits, so they are always rendered at full width.
//! - **Question marks**: `?` is always written as `\?`, so no `??x` trigraph survives into the literal under a
//!   pre-C++17 compiler.
//! - **Embedded zero bytes**: a C++ string literal is zero-terminated; callers must pass an explicit length
//!   whenever [`contains_nul`] holds.

/// Fixed escapes for characters that have a short C++ spelling.
pub const CHAR_ESCAPES: &[(u8, &str)] = &[
    (b'\t', "\\t"),
    (b'\n', "\\n"),
    (b'\r', "\\r"),
    (b'"', "\\\""),
    (b'\\', "\\\\"),
    (0x07, "\\a"),
    (0x0c, "\\f"),
    (0x0b, "\\v"),
    (0x08, "\\b"),
    (b'?', "\\?"),
];

/// Look up the short escape for a byte, if it has one.
pub fn char_escape(byte: u8) -> Option<&'static str> {
    CHAR_ESCAPES.iter().find(|(b, _)| *b == byte).map(|(_, esc)| *esc)
}

/// Check whether a byte can be written into a C++ literal unescaped.
pub fn is_printable(byte: u8) -> bool {
    (0x20..0x7f).contains(&byte)
}

/// Check whether a string contains an embedded zero byte.
pub fn contains_nul(s: &str) -> bool {
    s.as_bytes().contains(&0)
}

/// Escape a string's UTF-8 bytes for use between C++ double quotes.
///
/// ## Examples
/// ```rust
/// use cpptrans_core::strings::escape_str;
///
/// assert_eq!(escape_str("a\tb"), "a\\tb");
/// assert_eq!(escape_str("a\0b"), "a\\000b");
/// assert_eq!(escape_str("é"), "\\303\\251");
/// ```
pub fn escape_str(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for &byte in s.as_bytes() {
        if let Some(esc) = char_escape(byte) {
            out.push_str(esc);
        } else if is_printable(byte) {
            out.push(byte as char);
        } else {
            out.push_str(&format!("\\{byte:03o}"));
        }
    }
    out
}

/// Escape every byte of a byte sequence as a two-digit hex escape.
///
/// ## Examples
/// ```rust
/// use cpptrans_core::strings::hex_escape_bytes;
///
/// assert_eq!(hex_escape_bytes(&[0x00, 0xff, 0x41]), "\\x00\\xff\\x41");
/// ```
pub fn hex_escape_bytes(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("\\x{b:02x}")).collect()
}
