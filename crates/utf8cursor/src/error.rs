//! Decode and encode failure reporting.

use thiserror::Error;

/// The ways a byte sequence can fail to decode as one UTF-8 code point.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeErrorKind {
    /// The input ended inside a multi-byte sequence.
    #[error("incomplete sequence at end of input")]
    TruncatedSequence,
    /// The first byte can never begin a sequence: a continuation byte in
    /// lead position (`0x80..=0xBF`) or one of `0xF5..=0xFF`.
    #[error("invalid lead byte")]
    InvalidLeadByte,
    /// A byte inside a multi-byte sequence did not match the continuation
    /// pattern `10xxxxxx`.
    #[error("invalid continuation byte")]
    InvalidContinuationByte,
    /// The sequence is longer than the minimal encoding of its code point.
    #[error("overlong encoding")]
    Overlong,
    /// The sequence encodes a surrogate half (`U+D800..=U+DFFF`).
    #[error("surrogate code point")]
    SurrogateHalf,
    /// The sequence encodes a value above `U+10FFFF`.
    #[error("code point out of range")]
    OutOfRange,
}

/// A single failed decode, reporting what went wrong and how many bytes the
/// fault spans.
///
/// `consumed` is always at least 1, so a scanning caller that advances by it
/// makes progress and can resume at the next undamaged position. The exact
/// span per kind:
///
/// * [`InvalidLeadByte`](DecodeErrorKind::InvalidLeadByte) and the immediate
///   rejection of the always-overlong leads `0xC0`/`0xC1`: 1.
/// * [`InvalidContinuationByte`](DecodeErrorKind::InvalidContinuationByte):
///   the lead plus every well-formed continuation byte before the offending
///   one. The offending byte itself is not consumed; it may begin a valid
///   sequence.
/// * [`TruncatedSequence`](DecodeErrorKind::TruncatedSequence): every byte
///   of the incomplete sequence still present in the input.
/// * [`Overlong`](DecodeErrorKind::Overlong) (multi-byte),
///   [`SurrogateHalf`](DecodeErrorKind::SurrogateHalf),
///   [`OutOfRange`](DecodeErrorKind::OutOfRange): the full length claimed by
///   the lead byte.
///
/// Skipping the consumed span never skips the start of a well-formed
/// sequence: every byte in the span past the first is a continuation byte,
/// and no sequence starts with one.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{kind} ({consumed}-byte span)")]
pub struct DecodeError {
    /// What went wrong.
    pub kind: DecodeErrorKind,
    /// How many input bytes the fault spans, `1..=4`.
    pub consumed: u8,
}

/// The error returned when an encode does not fit the output buffer.
///
/// Encoding is all-or-nothing: on this error the output is untouched.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeError {
    /// The scalar needs `required` bytes but only `available` remain.
    #[error("insufficient output space: need {required} bytes, {available} available")]
    InsufficientOutputSpace {
        /// Bytes the canonical encoding needs, `1..=4`.
        required: u8,
        /// Bytes left in the output buffer.
        available: usize,
    },
}

/// The error returned by [`validate`](crate::validate) for a byte slice
/// that is not well-formed UTF-8.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{error} at byte {valid_up_to}")]
pub struct Utf8Error {
    pub(crate) valid_up_to: usize,
    pub(crate) error: DecodeError,
}

impl Utf8Error {
    /// Length of the longest well-formed prefix: the maximum `index` such
    /// that `validate(&input[..index])` would succeed.
    #[must_use]
    pub const fn valid_up_to(&self) -> usize {
        self.valid_up_to
    }

    /// The decode fault found at [`valid_up_to`](Utf8Error::valid_up_to).
    #[must_use]
    pub const fn error(&self) -> DecodeError {
        self.error
    }
}
