//! Validating and trusted decoding, one code point per call.
//!
//! The validating decoder reads every continuation byte that matches the
//! `10xxxxxx` pattern before judging the sequence, then classifies the
//! assembled value. `[0xED, 0xA0, 0x80]` is therefore reported as a single
//! three-byte surrogate fault, not as a continuation fault at the second
//! byte. Range rules follow [RFC 3629]: two-byte sequences start at `0xC2`
//! (`0xC0`/`0xC1` can only encode overlong forms), lead bytes past `0xF4`
//! would encode values above `U+10FFFF`.
//!
//! [RFC 3629]: https://tools.ietf.org/html/rfc3629

use crate::{
    cursor::{ByteCursor, SliceCursor},
    error::{DecodeError, DecodeErrorKind},
    scalar::{ScalarValue, is_surrogate},
};

/// Mask of the value bits of a continuation byte.
pub(crate) const CONT_MASK: u8 = 0b0011_1111;
/// Tag bits of a continuation byte (the tag mask is `!CONT_MASK`).
pub(crate) const TAG_CONT: u8 = 0b1000_0000;

#[inline]
const fn utf8_first_byte(byte: u8, width: u32) -> u32 {
    (byte & (0x7F >> width)) as u32
}

#[inline]
const fn utf8_acc_cont_byte(ch: u32, byte: u8) -> u32 {
    (ch << 6) | (byte & CONT_MASK) as u32
}

/// Sequence length claimed by the lead byte of a well-formed sequence.
#[inline]
pub(crate) const fn lead_len(first: u8) -> usize {
    if first < 0x80 {
        1
    } else if first < 0xE0 {
        2
    } else if first < 0xF0 {
        3
    } else {
        4
    }
}

#[inline]
#[allow(clippy::cast_possible_truncation)] // consumed is 1..=4
fn fail<C: ByteCursor>(
    cursor: &mut C,
    kind: DecodeErrorKind,
    consumed: usize,
) -> Result<ScalarValue, DecodeError> {
    cursor.advance(consumed);
    Err(DecodeError {
        kind,
        consumed: consumed as u8,
    })
}

/// Decodes the code point at the cursor, validating as it reads.
///
/// Returns `None` once the cursor is at the end of the input. Otherwise the
/// cursor advances past exactly the bytes the result accounts for: the
/// sequence length on success, [`DecodeError::consumed`] on failure. Errors
/// always consume at least one byte, so calling in a loop terminates; the
/// byte after the consumed span is the next position worth trying.
///
/// # Examples
///
/// ```
/// use utf8cursor::{DecodeErrorKind, SliceCursor, decode_next};
///
/// // "é" followed by a stray continuation byte.
/// let mut cursor = SliceCursor::new(&[0xC3, 0xA9, 0x80]);
/// assert_eq!(decode_next(&mut cursor).unwrap().unwrap().to_char(), 'é');
///
/// let err = decode_next(&mut cursor).unwrap().unwrap_err();
/// assert_eq!(err.kind, DecodeErrorKind::InvalidLeadByte);
/// assert_eq!(err.consumed, 1);
///
/// assert!(decode_next(&mut cursor).is_none());
/// ```
pub fn decode_next<C: ByteCursor>(cursor: &mut C) -> Option<Result<ScalarValue, DecodeError>> {
    let first = cursor.peek(0)?;
    if first < 0x80 {
        cursor.advance(1);
        return Some(Ok(ScalarValue(u32::from(first))));
    }

    let len = match first {
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        // 0xC0 and 0xC1 admit no sequence that is not overlong.
        0xC0 | 0xC1 => return Some(fail(cursor, DecodeErrorKind::Overlong, 1)),
        _ => return Some(fail(cursor, DecodeErrorKind::InvalidLeadByte, 1)),
    };

    let mut value = utf8_first_byte(first, len as u32);
    for i in 1..len {
        let Some(byte) = cursor.peek(i) else {
            // Everything present so far is part of one incomplete sequence.
            return Some(fail(cursor, DecodeErrorKind::TruncatedSequence, i));
        };
        if byte & !CONT_MASK != TAG_CONT {
            // The offender stays unconsumed; it may lead a valid sequence.
            return Some(fail(cursor, DecodeErrorKind::InvalidContinuationByte, i));
        }
        value = utf8_acc_cont_byte(value, byte);
    }

    let min = match len {
        2 => 0x80,
        3 => 0x800,
        _ => 0x1_0000,
    };
    if value < min {
        return Some(fail(cursor, DecodeErrorKind::Overlong, len));
    }
    if is_surrogate(value) {
        return Some(fail(cursor, DecodeErrorKind::SurrogateHalf, len));
    }
    if value > 0x10_FFFF {
        return Some(fail(cursor, DecodeErrorKind::OutOfRange, len));
    }

    cursor.advance(len);
    Some(Ok(ScalarValue(value)))
}

/// Decodes the code point at the cursor, assuming well-formed input.
///
/// Sequence length comes from the lead byte alone; continuation bytes are
/// folded in without pattern or range checks. On input that is not actually
/// well-formed UTF-8 the returned scalar is unspecified but never read from
/// outside the sequence's bytes.
///
/// Returns `None` once the cursor is at the end of the input.
///
/// # Panics
///
/// Panics if the input ends inside a sequence, which violates the
/// well-formedness precondition.
pub fn decode_next_trusted<C: ByteCursor>(cursor: &mut C) -> Option<ScalarValue> {
    let first = cursor.peek(0)?;
    if first < 0x80 {
        cursor.advance(1);
        return Some(ScalarValue(u32::from(first)));
    }

    let len = lead_len(first);
    let mut value = utf8_first_byte(first, len as u32);
    for i in 1..len {
        let Some(byte) = cursor.peek(i) else {
            panic!("trusted decode: input ends inside a {len}-byte sequence");
        };
        value = utf8_acc_cont_byte(value, byte);
    }

    cursor.advance(len);
    Some(ScalarValue(value))
}

/// Decodes the code point starting at byte offset `at` of `bytes`.
///
/// Returns the offset of the first byte not accounted for and the decode
/// result. On success the new offset is `at + scalar.len_utf8()`; on failure
/// it is `at + err.consumed`, which is always past `at`, so scanning by
/// repeated calls terminates.
///
/// # Panics
///
/// Panics if `at >= bytes.len()`.
///
/// # Examples
///
/// ```
/// use utf8cursor::{ScalarValue, decode};
///
/// let (next, result) = decode("€!".as_bytes(), 0);
/// assert_eq!(result, Ok(ScalarValue::from_char('€')));
/// assert_eq!(next, 3);
///
/// let (next, result) = decode("€!".as_bytes(), 3);
/// assert_eq!(result, Ok(ScalarValue::from_char('!')));
/// assert_eq!(next, 4);
/// ```
pub fn decode(bytes: &[u8], at: usize) -> (usize, Result<ScalarValue, DecodeError>) {
    let mut cursor = SliceCursor::with_position(bytes, at);
    let Some(result) = decode_next(&mut cursor) else {
        panic!("decode at {at} past the end of a {}-byte input", bytes.len());
    };
    (cursor.position(), result)
}

/// Decodes the code point starting at byte offset `at` of known-valid
/// `bytes`, without validating.
///
/// `at` must fall on a code point boundary of well-formed UTF-8; see
/// [`decode_next_trusted`] for the behavior on violated preconditions.
///
/// # Panics
///
/// Panics if `at >= bytes.len()` or if the input ends inside the sequence
/// starting at `at`.
///
/// # Examples
///
/// ```
/// use utf8cursor::decode_trusted;
///
/// let s = "2²";
/// let (next, scalar) = decode_trusted(s.as_bytes(), 1);
/// assert_eq!(scalar.to_char(), '²');
/// assert_eq!(next, s.len());
/// ```
#[must_use]
pub fn decode_trusted(bytes: &[u8], at: usize) -> (usize, ScalarValue) {
    let mut cursor = SliceCursor::with_position(bytes, at);
    let Some(scalar) = decode_next_trusted(&mut cursor) else {
        panic!("decode at {at} past the end of a {}-byte input", bytes.len());
    };
    (cursor.position(), scalar)
}
