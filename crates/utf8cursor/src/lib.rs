//! One-code-point-at-a-time UTF-8 decoding and encoding over pluggable
//! cursors.
//!
//! The decoder enforces every well-formedness rule (continuation patterns,
//! overlong forms, surrogate halves, the `U+10FFFF` ceiling, truncation) and
//! reports each fault with the byte span it covers, so a caller can skip the
//! span and keep scanning. Trusted variants decode and encode known-valid
//! data without the checks. The same validation automaton runs over byte
//! slices and over cloneable byte iterators through the [`ByteCursor`]
//! trait, written once rather than per position representation.
//!
//! ```
//! use utf8cursor::{DecodeErrorKind, ScalarValue, decode, encode};
//!
//! // Decode: one code point per call, errors carry their span.
//! let bytes = [0xE2, 0x82, 0xAC, 0xFF, b'!'];
//! let (next, euro) = decode(&bytes, 0);
//! assert_eq!(euro, Ok(ScalarValue::from_char('€')));
//!
//! let (next, err) = decode(&bytes, next);
//! assert_eq!(err.unwrap_err().kind, DecodeErrorKind::InvalidLeadByte);
//! assert_eq!(decode(&bytes, next).1, Ok(ScalarValue::from_char('!')));
//!
//! // Encode: all-or-nothing into a bounded buffer.
//! let mut out = [0u8; 4];
//! let written = encode(ScalarValue::from_char('€'), &mut out).unwrap();
//! assert_eq!(&out[..written], &bytes[..3]);
//! ```
//!
//! Searching for one code point skips decoding entirely:
//! [`find_code_point`] matches the encoded bytes directly and agrees with
//! the decoding scan on every input, damaged or not.

#![no_std]

#[cfg(test)]
extern crate std;

mod cursor;
mod decode;
mod encode;
mod encoded;
mod error;
mod scalar;
mod scan;

#[cfg(test)]
mod tests;

pub use cursor::{ByteCursor, IterCursor, SliceCursor};
pub use decode::{decode, decode_next, decode_next_trusted, decode_trusted};
pub use encode::{encode, encode_at, encode_trusted};
pub use encoded::{
    EncodedCodePoint, EncodedCodePointUtf16, find_code_point, find_code_point_by_decode,
};
pub use error::{DecodeError, DecodeErrorKind, EncodeError, Utf8Error};
pub use scalar::{InvalidScalarValue, ScalarValue};
pub use scan::{CodePoints, LossyChars, chars_lossy, code_points, is_boundary, validate};
