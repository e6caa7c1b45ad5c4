//! Encoding scalar values into canonical UTF-8 bytes.
//!
//! Encoding is all-or-nothing: the capacity check in [`encode`] runs before
//! the first byte is written, and the slice-pattern dispatch in
//! [`encode_trusted`] refuses a short buffer before touching it, so a failed
//! encode never leaves a partial sequence behind.

use crate::{
    decode::{CONT_MASK, TAG_CONT},
    error::EncodeError,
    scalar::ScalarValue,
};

const TAG_TWO_B: u8 = 0b1100_0000;
const TAG_THREE_B: u8 = 0b1110_0000;
const TAG_FOUR_B: u8 = 0b1111_0000;

/// Encodes `scalar` at the start of `dst`, checking capacity first.
///
/// Returns the number of bytes written, `1..=4`.
///
/// # Errors
///
/// [`EncodeError::InsufficientOutputSpace`] when `dst` is too short for the
/// canonical encoding; `dst` is left untouched.
///
/// # Examples
///
/// ```
/// use utf8cursor::{EncodeError, ScalarValue, encode};
///
/// let mut buf = [0u8; 4];
/// assert_eq!(encode(ScalarValue::MAX, &mut buf), Ok(4));
/// assert_eq!(buf, [0xF4, 0x8F, 0xBF, 0xBF]);
///
/// let mut short = [0u8; 3];
/// assert_eq!(
///     encode(ScalarValue::MAX, &mut short),
///     Err(EncodeError::InsufficientOutputSpace {
///         required: 4,
///         available: 3,
///     })
/// );
/// assert_eq!(short, [0, 0, 0]);
/// ```
#[allow(clippy::cast_possible_truncation)] // required is 1..=4
pub fn encode(scalar: ScalarValue, dst: &mut [u8]) -> Result<usize, EncodeError> {
    let required = scalar.len_utf8();
    if dst.len() < required {
        return Err(EncodeError::InsufficientOutputSpace {
            required: required as u8,
            available: dst.len(),
        });
    }
    Ok(encode_trusted(scalar, dst))
}

/// Encodes `scalar` at the start of `dst`, assuming room for the encoding.
///
/// Returns the number of bytes written, `1..=4`. Callers that cannot
/// guarantee capacity use [`encode`]; a buffer of 4 bytes always suffices.
///
/// # Panics
///
/// Panics, without writing anything, if `dst` is shorter than the canonical
/// encoding of `scalar`.
#[allow(clippy::cast_possible_truncation)] // each cast keeps masked low bits
pub fn encode_trusted(scalar: ScalarValue, dst: &mut [u8]) -> usize {
    let code = scalar.to_u32();
    let len = scalar.len_utf8();
    match (len, &mut dst[..]) {
        (1, [a, ..]) => {
            *a = code as u8;
        }
        (2, [a, b, ..]) => {
            *a = (code >> 6 & 0x1F) as u8 | TAG_TWO_B;
            *b = (code & u32::from(CONT_MASK)) as u8 | TAG_CONT;
        }
        (3, [a, b, c, ..]) => {
            *a = (code >> 12 & 0x0F) as u8 | TAG_THREE_B;
            *b = (code >> 6 & u32::from(CONT_MASK)) as u8 | TAG_CONT;
            *c = (code & u32::from(CONT_MASK)) as u8 | TAG_CONT;
        }
        (4, [a, b, c, d, ..]) => {
            *a = (code >> 18 & 0x07) as u8 | TAG_FOUR_B;
            *b = (code >> 12 & u32::from(CONT_MASK)) as u8 | TAG_CONT;
            *c = (code >> 6 & u32::from(CONT_MASK)) as u8 | TAG_CONT;
            *d = (code & u32::from(CONT_MASK)) as u8 | TAG_CONT;
        }
        _ => panic!(
            "need {} bytes to encode U+{:04X}, buffer has {}",
            len,
            code,
            dst.len(),
        ),
    }
    len
}

/// Encodes `scalar` into `buf` starting at byte offset `at`, returning the
/// offset one past the written bytes.
///
/// # Errors
///
/// [`EncodeError::InsufficientOutputSpace`] when `buf[at..]` is too short
/// for the canonical encoding; `buf` is left untouched.
///
/// # Panics
///
/// Panics if `at > buf.len()`.
///
/// # Examples
///
/// ```
/// use utf8cursor::{ScalarValue, encode_at};
///
/// let mut buf = [0u8; 8];
/// let mut at = 0;
/// for c in ['o', 'u', 'ï'] {
///     at = encode_at(ScalarValue::from_char(c), &mut buf, at).unwrap();
/// }
/// assert_eq!(&buf[..at], "ouï".as_bytes());
/// ```
pub fn encode_at(scalar: ScalarValue, buf: &mut [u8], at: usize) -> Result<usize, EncodeError> {
    encode(scalar, &mut buf[at..]).map(|written| at + written)
}
