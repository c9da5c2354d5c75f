//! Integer literal policy: pick the C++ literal suffix that makes a literal's compiled type match its value.
//!
//! C++ gives an unsuffixed decimal literal the first of `int`, `long`, `long long` that can hold it, which differs
//! between platforms. To keep generated code portable, every literal outside the native `int32_t` range carries an
//! explicit suffix:
//!
//! | range                                   | suffix | compiled type (common ABIs) |
//! |-----------------------------------------|--------|-----------------------------|
//! | `[MIN32 + 1, MAX32]`                    | none   | `int32_t`                   |
//! | `(MAX32, MAX_U32]`                      | `UL`   | `uint32_t`                  |
//! | `[MIN64 + 1, MIN32)`, `(MAX_U32, MAX64]`| `LL`   | `int64_t`                   |
//! | `(MAX64, MAX_U64]`                      | `ULL`  | `uint64_t`                  |
//! | anything else                           | n/a    | see [`render_boundary_int`] |
//!
//! The exact minimum of each signed width is excluded on purpose: `-2147483648` is parsed by C++ as unary minus
//! applied to `2147483648`, which does not fit `int` and silently widens. Those two values are rendered as
//! `(MIN + 1) - 1` instead.

/// Smallest `int32_t`.
pub const MIN_INT32: i128 = i32::MIN as i128;
/// Largest `int32_t`.
pub const MAX_INT32: i128 = i32::MAX as i128;
/// Largest `uint32_t`.
pub const MAX_UINT32: i128 = u32::MAX as i128;
/// Smallest `int64_t`.
pub const MIN_INT64: i128 = i64::MIN as i128;
/// Largest `int64_t`.
pub const MAX_INT64: i128 = i64::MAX as i128;
/// Largest `uint64_t`.
pub const MAX_UINT64: i128 = u64::MAX as i128;

/// The native integer type an integer literal is rendered as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntLiteralClass {
    /// `[MIN32 + 1, MAX32]`, no suffix.
    Int32,
    /// `(MAX32, MAX_U32]`, `UL`.
    UInt32,
    /// `[MIN64 + 1, MIN32)` or `(MAX_U32, MAX64]`, `LL`.
    Int64,
    /// `(MAX64, MAX_U64]`, `ULL`.
    UInt64,
    /// Exact signed minimums and everything not representable in 64 bits.
    Boundary,
}

impl IntLiteralClass {
    /// Classify an integer value into its literal range.
    ///
    /// ## Examples
    /// ```rust
    /// use cpptrans_core::ints::IntLiteralClass;
    ///
    /// assert_eq!(IntLiteralClass::of(2_147_483_647), IntLiteralClass::Int32);
    /// assert_eq!(IntLiteralClass::of(2_147_483_648), IntLiteralClass::UInt32);
    /// assert_eq!(IntLiteralClass::of(-2_147_483_648), IntLiteralClass::Boundary);
    /// ```
    pub fn of(n: i128) -> Self {
        if n > MIN_INT32 && n <= MAX_INT32 {
            IntLiteralClass::Int32
        } else if n > MAX_INT32 && n <= MAX_UINT32 {
            IntLiteralClass::UInt32
        } else if (n > MIN_INT64 && n < MIN_INT32) || (n > MAX_UINT32 && n <= MAX_INT64) {
            IntLiteralClass::Int64
        } else if n > MAX_INT64 && n <= MAX_UINT64 {
            IntLiteralClass::UInt64
        } else {
            IntLiteralClass::Boundary
        }
    }

    /// Literal suffix for this class, or `None` for [`IntLiteralClass::Boundary`].
    pub fn suffix(self) -> Option<&'static str> {
        match self {
            IntLiteralClass::Int32 => Some(""),
            IntLiteralClass::UInt32 => Some("UL"),
            IntLiteralClass::Int64 => Some("LL"),
            IntLiteralClass::UInt64 => Some("ULL"),
            IntLiteralClass::Boundary => None,
        }
    }
}

/// Render an integer literal in C++ syntax.
///
/// ## Returns
/// - Decimal text with the suffix chosen by [`IntLiteralClass::of`], or the [`render_boundary_int`] form.
///
/// ## Examples
/// ```rust
/// use cpptrans_core::ints::render_int_literal;
///
/// assert_eq!(render_int_literal(4_294_967_295), "4294967295UL");
/// assert_eq!(render_int_literal(-2_147_483_649), "-2147483649LL");
/// ```
pub fn render_int_literal(n: i128) -> String {
    match IntLiteralClass::of(n).suffix() {
        Some(suffix) => format!("{n}{suffix}"),
        None => render_boundary_int(n),
    }
}

/// Render an integer that has no exactly-typed suffixed form.
///
/// ## Notes
/// - `MIN32` and `MIN64` are spelled as `(MIN + 1) - 1` so that no literal ever exceeds its own type.
/// - Anything outside 64 bits is emitted as bare decimal text; C++ has no portable type for it and the compiler
///   will reject it loudly.
pub fn render_boundary_int(n: i128) -> String {
    if n == MIN_INT32 {
        format!("({} - 1)", n + 1)
    } else if n == MIN_INT64 {
        format!("({}LL - 1)", n + 1)
    } else {
        n.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries_of_int32() {
        assert_eq!(IntLiteralClass::of(MAX_INT32), IntLiteralClass::Int32);
        assert_eq!(IntLiteralClass::of(MIN_INT32 + 1), IntLiteralClass::Int32);
        assert_eq!(IntLiteralClass::of(0), IntLiteralClass::Int32);
        assert_eq!(IntLiteralClass::of(MIN_INT32), IntLiteralClass::Boundary);
    }

    #[test]
    fn test_boundaries_of_uint32() {
        assert_eq!(IntLiteralClass::of(MAX_INT32 + 1), IntLiteralClass::UInt32);
        assert_eq!(IntLiteralClass::of(MAX_UINT32), IntLiteralClass::UInt32);
        assert_eq!(IntLiteralClass::of(MAX_UINT32 + 1), IntLiteralClass::Int64);
    }

    #[test]
    fn test_boundaries_of_int64() {
        assert_eq!(IntLiteralClass::of(MIN_INT32 - 1), IntLiteralClass::Int64);
        assert_eq!(IntLiteralClass::of(MIN_INT64 + 1), IntLiteralClass::Int64);
        assert_eq!(IntLiteralClass::of(MAX_INT64), IntLiteralClass::Int64);
        assert_eq!(IntLiteralClass::of(MIN_INT64), IntLiteralClass::Boundary);
    }

    #[test]
    fn test_boundaries_of_uint64() {
        assert_eq!(IntLiteralClass::of(MAX_INT64 + 1), IntLiteralClass::UInt64);
        assert_eq!(IntLiteralClass::of(MAX_UINT64), IntLiteralClass::UInt64);
        assert_eq!(IntLiteralClass::of(MAX_UINT64 + 1), IntLiteralClass::Boundary);
    }

    #[test]
    fn test_render_suffixes() {
        assert_eq!(render_int_literal(2_147_483_647), "2147483647");
        assert_eq!(render_int_literal(2_147_483_648), "2147483648UL");
        assert_eq!(render_int_literal(4_294_967_296), "4294967296LL");
        assert_eq!(render_int_literal(9_223_372_036_854_775_807), "9223372036854775807LL");
        assert_eq!(render_int_literal(9_223_372_036_854_775_808), "9223372036854775808ULL");
        assert_eq!(render_int_literal(-5), "-5");
    }

    #[test]
    fn test_render_signed_minimums() {
        assert_eq!(render_int_literal(MIN_INT32), "(-2147483647 - 1)");
        assert_eq!(render_int_literal(MIN_INT64), "(-9223372036854775807LL - 1)");
    }

    #[test]
    fn test_render_beyond_64_bits_is_bare() {
        assert_eq!(render_int_literal(MAX_UINT64 + 1), "18446744073709551616");
        assert_eq!(render_int_literal(MIN_INT64 - 1), "-9223372036854775809");
    }
}
