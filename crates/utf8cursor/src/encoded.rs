//! Pre-encoded code points and byte-level search.
//!
//! Searching for one code point does not require decoding the haystack.
//! Canonical encodings are unique, and UTF-8 is self-synchronizing: every
//! byte of a sequence past the lead is a continuation byte and a lead never
//! is, so a byte-level match of an encoded code point can only occur where a
//! decoding scan would also find it. [`find_code_point`] exploits that with
//! a plain substring search; [`find_code_point_by_decode`] is the
//! decode-and-compare rendition of the same contract, kept as the baseline
//! the benchmarks measure against.

use core::fmt;

use bstr::ByteSlice;

use crate::{
    cursor::{ByteCursor, SliceCursor},
    decode::{decode_next, lead_len},
    encode::encode_trusted,
    scalar::ScalarValue,
};

/// The canonical UTF-8 encoding of one scalar value, held inline.
///
/// Four bytes of storage with the length derived from the lead byte; bytes
/// past the length are zero. Comparable and hashable as a value, viewable as
/// bytes for searching without decoding.
///
/// # Examples
///
/// ```
/// use utf8cursor::{EncodedCodePoint, ScalarValue};
///
/// let euro = EncodedCodePoint::new(ScalarValue::from_char('€'));
/// assert_eq!(euro.len(), 3);
/// assert_eq!(euro.as_bytes(), &[0xE2, 0x82, 0xAC]);
/// assert_eq!(euro.as_str(), "€");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct EncodedCodePoint {
    bytes: [u8; 4],
}

impl EncodedCodePoint {
    /// Encodes `scalar` into an inline buffer.
    #[must_use]
    pub fn new(scalar: ScalarValue) -> Self {
        let mut bytes = [0u8; 4];
        encode_trusted(scalar, &mut bytes);
        EncodedCodePoint { bytes }
    }

    /// Length of the encoding in bytes, `1..=4`, read back off the lead
    /// byte.
    #[must_use]
    pub const fn len(&self) -> usize {
        lead_len(self.bytes[0])
    }

    /// Always `false`; an encoding spans at least one byte.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The encoding, trimmed to its length.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len()]
    }

    /// The encoding viewed as a one-code-point `str`.
    ///
    /// # Panics
    ///
    /// Panics when the value was built from a scalar holding an
    /// out-of-range bit pattern, which only a trusted decode of invalid
    /// input can produce.
    #[must_use]
    pub fn as_str(&self) -> &str {
        let Ok(s) = core::str::from_utf8(self.as_bytes()) else {
            panic!("encoded code point holds an out-of-range scalar");
        };
        s
    }
}

impl AsRef<[u8]> for EncodedCodePoint {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl fmt::Debug for EncodedCodePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("EncodedCodePoint(")?;
        for (i, byte) in self.as_bytes().iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{byte:02X}")?;
        }
        f.write_str(")")
    }
}

/// The UTF-16 encoding of one scalar value, held inline.
///
/// One code unit for the Basic Multilingual Plane, a surrogate pair above
/// it; the length is derived from the first unit.
///
/// # Examples
///
/// ```
/// use utf8cursor::{EncodedCodePointUtf16, ScalarValue};
///
/// let bmp = EncodedCodePointUtf16::new(ScalarValue::from_char('€'));
/// assert_eq!(bmp.as_units(), &[0x20AC]);
///
/// let astral = EncodedCodePointUtf16::new(ScalarValue::from_char('𝄞'));
/// assert_eq!(astral.as_units(), &[0xD834, 0xDD1E]);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct EncodedCodePointUtf16 {
    units: [u16; 2],
}

impl EncodedCodePointUtf16 {
    /// Encodes `scalar` into one unit or a surrogate pair.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)] // both units stay below 0x10000
    pub fn new(scalar: ScalarValue) -> Self {
        let code = scalar.to_u32();
        let mut units = [0u16; 2];
        if code < 0x1_0000 {
            units[0] = code as u16;
        } else {
            units[0] = (0xD7C0 + (code >> 10)) as u16;
            units[1] = (0xDC00 + (code & 0x3FF)) as u16;
        }
        EncodedCodePointUtf16 { units }
    }

    /// Length of the encoding in code units: 2 when the first unit is a
    /// high surrogate, otherwise 1.
    #[must_use]
    pub const fn len(&self) -> usize {
        if self.units[0] >= 0xD800 && self.units[0] <= 0xDBFF {
            2
        } else {
            1
        }
    }

    /// Always `false`; an encoding spans at least one code unit.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The encoding, trimmed to its length.
    #[must_use]
    pub fn as_units(&self) -> &[u16] {
        &self.units[..self.len()]
    }
}

/// Finds the byte offset of the first occurrence of `scalar` in `haystack`
/// by searching for its encoded bytes.
///
/// The haystack does not have to be valid UTF-8; damaged regions simply
/// cannot contain a match. Returns the same offset
/// [`find_code_point_by_decode`] would, at substring-search speed.
///
/// # Examples
///
/// ```
/// use utf8cursor::{ScalarValue, find_code_point};
///
/// let hay = "price: 42€".as_bytes();
/// assert_eq!(find_code_point(hay, ScalarValue::from_char('€')), Some(9));
/// assert_eq!(find_code_point(hay, ScalarValue::from_char('$')), None);
/// ```
#[must_use]
pub fn find_code_point(haystack: &[u8], scalar: ScalarValue) -> Option<usize> {
    let needle = EncodedCodePoint::new(scalar);
    haystack.find(needle.as_bytes())
}

/// Finds the byte offset of the first occurrence of `scalar` in `haystack`
/// by decoding every code point and comparing.
///
/// The decode-and-compare twin of [`find_code_point`], kept for measuring
/// the byte-search fast path against. Positions that fail to decode are
/// skipped by their reported spans.
#[must_use]
pub fn find_code_point_by_decode(haystack: &[u8], scalar: ScalarValue) -> Option<usize> {
    let mut cursor = SliceCursor::new(haystack);
    loop {
        let at = cursor.position();
        match decode_next(&mut cursor)? {
            Ok(found) if found == scalar => return Some(at),
            Ok(_) | Err(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use std::format;

    use super::*;

    #[test]
    fn encoded_lengths_cover_all_widths() {
        for (c, len) in [('\0', 1), ('ß', 2), ('€', 3), ('𝄞', 4)] {
            let encoded = EncodedCodePoint::new(ScalarValue::from_char(c));
            assert_eq!(encoded.len(), len, "{c:?}");
            let mut expected = [0u8; 4];
            assert_eq!(encoded.as_bytes(), c.encode_utf8(&mut expected).as_bytes());
        }
    }

    #[test]
    fn utf16_matches_char_encoding() {
        for c in ['A', 'é', '€', '\u{D7FF}', '\u{E000}', '𝄞', '\u{10FFFF}'] {
            let encoded = EncodedCodePointUtf16::new(ScalarValue::from_char(c));
            let mut expected = [0u16; 2];
            assert_eq!(encoded.as_units(), c.encode_utf16(&mut expected), "{c:?}");
            assert_eq!(encoded.len(), c.len_utf16(), "{c:?}");
        }
    }

    #[test]
    fn debug_shows_trimmed_hex() {
        let encoded = EncodedCodePoint::new(ScalarValue::from_char('€'));
        assert_eq!(format!("{encoded:?}"), "EncodedCodePoint(E2 82 AC)");
    }

    #[test]
    fn finds_needle_after_damaged_region() {
        // A truncated "€" directly before the needle: the byte search sees
        // the needle bytes, the decoding scan skips the two-byte fault and
        // resumes exactly on them.
        let hay = [0xE2, 0x82, b'A'];
        let needle = ScalarValue::from_char('A');
        assert_eq!(find_code_point(&hay, needle), Some(2));
        assert_eq!(find_code_point_by_decode(&hay, needle), Some(2));
    }

    #[test]
    fn does_not_match_inside_a_longer_sequence() {
        // 0x82 occurs inside "€" only as a continuation byte; the needle's
        // own encoding is C2 82 and never matches there.
        let hay = "€".as_bytes();
        assert_eq!(find_code_point(hay, ScalarValue::from_u32(0x82).unwrap()), None);
        assert_eq!(
            find_code_point_by_decode(hay, ScalarValue::from_u32(0x82).unwrap()),
            None
        );
    }
}
