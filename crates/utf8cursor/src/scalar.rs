//! Unicode scalar values.
//!
//! [`ScalarValue`] is the domain type everything in this crate decodes into
//! and encodes from: a code point in `0x0..=0x10FFFF`, excluding the
//! surrogate range reserved for UTF-16.

use core::fmt;

use thiserror::Error;

const MAX_ONE_B: u32 = 0x80;
const MAX_TWO_B: u32 = 0x800;
const MAX_THREE_B: u32 = 0x1_0000;

pub(crate) const SURROGATE_MIN: u32 = 0xD800;
pub(crate) const SURROGATE_MAX: u32 = 0xDFFF;

#[inline]
pub(crate) const fn is_surrogate(value: u32) -> bool {
    value >= SURROGATE_MIN && value <= SURROGATE_MAX
}

/// The error returned when a raw `u32` is not a Unicode scalar value.
///
/// Produced by the [`TryFrom<u32>`] implementation on [`ScalarValue`]; the
/// offending value is carried for diagnostics.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("not a Unicode scalar value: 0x{0:X}")]
pub struct InvalidScalarValue(pub u32);

/// A Unicode scalar value: a code point in `0x0..=0x10FFFF` excluding the
/// surrogate halves `0xD800..=0xDFFF`.
///
/// Unlike `char`, a `ScalarValue` obtained from a trusted decode of input
/// that was *not* actually valid UTF-8 may hold an out-of-range bit pattern.
/// Checked constructors ([`ScalarValue::from_u32`], [`TryFrom<u32>`]) never
/// produce such a value, and every validating decode in this crate yields
/// only valid scalars.
///
/// # Examples
///
/// ```
/// use utf8cursor::ScalarValue;
///
/// let euro = ScalarValue::from_u32(0x20AC).unwrap();
/// assert_eq!(euro.len_utf8(), 3);
/// assert_eq!(euro.to_char(), '€');
///
/// // Surrogate halves are not scalar values.
/// assert_eq!(ScalarValue::from_u32(0xD800), None);
/// ```
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "u32", into = "u32")
)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ScalarValue(pub(crate) u32);

impl ScalarValue {
    /// The highest scalar value, `U+10FFFF`.
    pub const MAX: ScalarValue = ScalarValue(0x10_FFFF);

    /// `U+FFFD REPLACEMENT CHARACTER`, substituted for malformed input by
    /// lossy conversions.
    pub const REPLACEMENT: ScalarValue = ScalarValue(0xFFFD);

    /// Converts a `u32` to a `ScalarValue`, returning `None` for values
    /// above `0x10FFFF` and for surrogate halves.
    ///
    /// # Examples
    ///
    /// ```
    /// use utf8cursor::ScalarValue;
    ///
    /// assert_eq!(ScalarValue::from_u32(0x41).map(ScalarValue::to_char), Some('A'));
    /// assert_eq!(ScalarValue::from_u32(0xDFFF), None);
    /// assert_eq!(ScalarValue::from_u32(0x11_0000), None);
    /// ```
    #[must_use]
    pub const fn from_u32(value: u32) -> Option<ScalarValue> {
        if value > 0x10_FFFF || is_surrogate(value) {
            None
        } else {
            Some(ScalarValue(value))
        }
    }

    /// Converts a `char` to a `ScalarValue`. Infallible: every `char` is a
    /// scalar value.
    #[must_use]
    pub const fn from_char(c: char) -> ScalarValue {
        ScalarValue(c as u32)
    }

    /// Returns the scalar as a `char`.
    ///
    /// A value holding an out-of-range bit pattern (possible only after a
    /// trusted decode of invalid input) converts to
    /// `char::REPLACEMENT_CHARACTER`.
    #[must_use]
    pub const fn to_char(self) -> char {
        if let Some(c) = char::from_u32(self.0) {
            c
        } else {
            char::REPLACEMENT_CHARACTER
        }
    }

    /// Returns the raw code point value.
    #[must_use]
    pub const fn to_u32(self) -> u32 {
        self.0
    }

    /// Number of bytes in the canonical UTF-8 encoding of this scalar, from
    /// 1 to 4.
    ///
    /// # Examples
    ///
    /// ```
    /// use utf8cursor::ScalarValue;
    ///
    /// assert_eq!(ScalarValue::from_char('A').len_utf8(), 1);
    /// assert_eq!(ScalarValue::from_char('é').len_utf8(), 2);
    /// assert_eq!(ScalarValue::from_char('€').len_utf8(), 3);
    /// assert_eq!(ScalarValue::MAX.len_utf8(), 4);
    /// ```
    #[must_use]
    pub const fn len_utf8(self) -> usize {
        if self.0 < MAX_ONE_B {
            1
        } else if self.0 < MAX_TWO_B {
            2
        } else if self.0 < MAX_THREE_B {
            3
        } else {
            4
        }
    }

    /// Number of UTF-16 code units needed for this scalar: 1 for the Basic
    /// Multilingual Plane, 2 (a surrogate pair) above it.
    #[must_use]
    pub const fn len_utf16(self) -> usize {
        if self.0 < MAX_THREE_B { 1 } else { 2 }
    }
}

impl From<char> for ScalarValue {
    fn from(c: char) -> Self {
        ScalarValue::from_char(c)
    }
}

impl From<ScalarValue> for u32 {
    fn from(scalar: ScalarValue) -> Self {
        scalar.0
    }
}

impl From<ScalarValue> for char {
    fn from(scalar: ScalarValue) -> Self {
        scalar.to_char()
    }
}

impl TryFrom<u32> for ScalarValue {
    type Error = InvalidScalarValue;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        ScalarValue::from_u32(value).ok_or(InvalidScalarValue(value))
    }
}

impl fmt::Debug for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "U+{:04X}", self.0)
    }
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
