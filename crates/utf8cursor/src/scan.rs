//! Scanning: repeated decoding over a whole input.

use crate::{
    cursor::{ByteCursor, SliceCursor},
    decode::decode_next,
    error::{DecodeError, Utf8Error},
    scalar::ScalarValue,
};

/// An iterator decoding one code point per step from any [`ByteCursor`].
///
/// Yields `Ok` for each well-formed sequence and `Err` for each fault, then
/// resumes after the fault's consumed span. Every step consumes at least one
/// byte, so the iterator always terminates.
///
/// # Examples
///
/// ```
/// use utf8cursor::{DecodeErrorKind, code_points};
///
/// let kinds: Vec<_> = code_points(&[b'a', 0xFF, 0xE2, 0x82, 0xAC])
///     .map(|step| step.map(|s| s.to_char()).map_err(|e| e.kind))
///     .collect();
/// assert_eq!(
///     kinds,
///     [Ok('a'), Err(DecodeErrorKind::InvalidLeadByte), Ok('€')]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct CodePoints<C> {
    cursor: C,
}

impl<C: ByteCursor> CodePoints<C> {
    /// Wraps a cursor; iteration starts wherever the cursor points.
    #[must_use]
    pub fn new(cursor: C) -> Self {
        CodePoints { cursor }
    }

    /// Position of the next decode, as reported by the cursor.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.cursor.position()
    }
}

impl<C: ByteCursor> Iterator for CodePoints<C> {
    type Item = Result<ScalarValue, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        decode_next(&mut self.cursor)
    }
}

/// An iterator yielding `char`s with `U+FFFD` substituted per decode fault.
///
/// One replacement per reported fault, not per damaged byte; a fault's whole
/// consumed span collapses into a single `U+FFFD`.
///
/// # Examples
///
/// ```
/// use utf8cursor::chars_lossy;
///
/// // Two leftover bytes of a "€", then "ok".
/// let text: String = chars_lossy(&[0xE2, 0x82, b'o', b'k']).collect();
/// assert_eq!(text, "\u{FFFD}ok");
/// ```
#[derive(Debug, Clone)]
pub struct LossyChars<C> {
    inner: CodePoints<C>,
}

impl<C: ByteCursor> LossyChars<C> {
    /// Wraps a cursor; iteration starts wherever the cursor points.
    #[must_use]
    pub fn new(cursor: C) -> Self {
        LossyChars {
            inner: CodePoints::new(cursor),
        }
    }
}

impl<C: ByteCursor> Iterator for LossyChars<C> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        Some(
            self.inner
                .next()?
                .map_or(char::REPLACEMENT_CHARACTER, ScalarValue::to_char),
        )
    }
}

/// Decodes `bytes` from the start, yielding a result per code point.
#[must_use]
pub fn code_points(bytes: &[u8]) -> CodePoints<SliceCursor<'_>> {
    CodePoints::new(SliceCursor::new(bytes))
}

/// Decodes `bytes` from the start, substituting `U+FFFD` per fault.
#[must_use]
pub fn chars_lossy(bytes: &[u8]) -> LossyChars<SliceCursor<'_>> {
    LossyChars {
        inner: code_points(bytes),
    }
}

/// Checks that `bytes` is well-formed UTF-8 from start to end.
///
/// # Errors
///
/// Returns a [`Utf8Error`] naming the first fault and the length of the
/// longest well-formed prefix before it.
///
/// # Examples
///
/// ```
/// use utf8cursor::{DecodeErrorKind, validate};
///
/// assert!(validate("καλημέρα".as_bytes()).is_ok());
///
/// let err = validate(&[b'o', b'k', 0xED, 0xA0, 0x80]).unwrap_err();
/// assert_eq!(err.valid_up_to(), 2);
/// assert_eq!(err.error().kind, DecodeErrorKind::SurrogateHalf);
/// ```
pub fn validate(bytes: &[u8]) -> Result<(), Utf8Error> {
    let mut cursor = SliceCursor::new(bytes);
    loop {
        let at = cursor.position();
        match decode_next(&mut cursor) {
            Some(Ok(_)) => {}
            Some(Err(error)) => {
                return Err(Utf8Error {
                    valid_up_to: at,
                    error,
                });
            }
            None => return Ok(()),
        }
    }
}

/// Whether byte index `i` falls on a code point boundary of well-formed
/// input.
///
/// The end of the slice counts as a boundary; positions past it do not.
/// In well-formed UTF-8 every byte outside `0x80..=0xBF` starts a code
/// point, and every byte inside that range continues one.
///
/// # Examples
///
/// ```
/// use utf8cursor::is_boundary;
///
/// let bytes = "a€".as_bytes();
/// assert!(is_boundary(bytes, 0));
/// assert!(is_boundary(bytes, 1));
/// assert!(!is_boundary(bytes, 2));
/// assert!(is_boundary(bytes, bytes.len()));
/// assert!(!is_boundary(bytes, bytes.len() + 1));
/// ```
#[must_use]
pub fn is_boundary(bytes: &[u8], i: usize) -> bool {
    match bytes.get(i) {
        None => i == bytes.len(),
        Some(&b) => !(0x80..=0xBF).contains(&b),
    }
}
