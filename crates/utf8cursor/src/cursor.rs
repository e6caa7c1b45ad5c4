//! Cursor: the position capability the codec is written against.
//!
//! Why this exists
//! - The decoder needs to run over an integer offset into a slice and over an
//!   iterator handle into a sequential container without being written twice.
//!   Everything the UTF-8 automaton actually requires is bounded lookahead
//!   (at most 4 bytes), an advance, and a position for distance and ordering.
//!   Centralizing that behind [`ByteCursor`] keeps a single copy of the
//!   validation state machine.
//!
//! What it does
//! - [`ByteCursor::peek`] reads the byte `ahead` positions past the cursor
//!   without moving it, [`ByteCursor::advance`] commits the decoded or
//!   skipped length, and [`ByteCursor::position`] reports how many bytes lie
//!   behind the cursor. Two cursors over the same sequence compare by
//!   position; their distance is the position difference.
//!
//! Invariants
//! - `advance(n)` is only called with `n` bytes known present, i.e. after
//!   `peek(n - 1)` returned `Some`. The decoders uphold this; manual callers
//!   must too.
//! - Peeking never moves the cursor, so a failed decode leaves the bytes it
//!   refused to consume readable.

/// A read position inside a byte sequence.
///
/// Implemented by [`SliceCursor`] for offset-addressed slices and by
/// [`IterCursor`] for cloneable byte iterators. The decode entry points
/// ([`decode_next`](crate::decode_next),
/// [`decode_next_trusted`](crate::decode_next_trusted),
/// [`CodePoints`](crate::CodePoints)) accept any implementation.
pub trait ByteCursor {
    /// Returns the byte `ahead` positions past the cursor, or `None` when
    /// that position is past the end of the sequence. Does not move the
    /// cursor.
    #[must_use]
    fn peek(&self, ahead: usize) -> Option<u8>;

    /// Moves the cursor forward by `n` bytes.
    fn advance(&mut self, n: usize);

    /// Number of bytes behind the cursor.
    ///
    /// For a [`SliceCursor`] this is the byte offset into the slice; for an
    /// [`IterCursor`] it counts bytes consumed since construction.
    #[must_use]
    fn position(&self) -> usize;
}

/// A [`ByteCursor`] over a byte slice, pairing the slice with an offset.
///
/// # Examples
///
/// ```
/// use utf8cursor::{ByteCursor, SliceCursor, decode_next};
///
/// let mut cursor = SliceCursor::new("hé".as_bytes());
/// assert_eq!(decode_next(&mut cursor).unwrap().unwrap().to_char(), 'h');
/// assert_eq!(decode_next(&mut cursor).unwrap().unwrap().to_char(), 'é');
/// assert_eq!(cursor.position(), 3);
/// assert!(decode_next(&mut cursor).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliceCursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> SliceCursor<'a> {
    /// Creates a cursor at the start of `bytes`.
    #[must_use]
    pub const fn new(bytes: &'a [u8]) -> Self {
        SliceCursor { bytes, pos: 0 }
    }

    /// Creates a cursor at byte offset `pos` into `bytes`.
    #[must_use]
    pub const fn with_position(bytes: &'a [u8], pos: usize) -> Self {
        SliceCursor { bytes, pos }
    }

    /// The bytes at and past the cursor.
    #[must_use]
    pub fn remaining(&self) -> &'a [u8] {
        &self.bytes[self.pos.min(self.bytes.len())..]
    }
}

impl ByteCursor for SliceCursor<'_> {
    #[inline]
    fn peek(&self, ahead: usize) -> Option<u8> {
        self.pos
            .checked_add(ahead)
            .and_then(|i| self.bytes.get(i))
            .copied()
    }

    #[inline]
    fn advance(&mut self, n: usize) {
        self.pos += n;
    }

    #[inline]
    fn position(&self) -> usize {
        self.pos
    }
}

/// A [`ByteCursor`] over any cloneable byte iterator.
///
/// Lookahead clones the iterator and walks the clone, so `peek` costs
/// `O(ahead)` per call; the automaton never looks more than 3 bytes ahead.
///
/// # Examples
///
/// ```
/// use utf8cursor::{ByteCursor, IterCursor, decode_next};
///
/// let mut cursor = IterCursor::new("éà".bytes());
/// assert_eq!(decode_next(&mut cursor).unwrap().unwrap().to_char(), 'é');
/// assert_eq!(cursor.position(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct IterCursor<I> {
    iter: I,
    consumed: usize,
}

impl<I> IterCursor<I>
where
    I: Iterator<Item = u8> + Clone,
{
    /// Wraps `iter` with the position counter at zero.
    #[must_use]
    pub fn new(iter: I) -> Self {
        IterCursor { iter, consumed: 0 }
    }
}

impl<I> ByteCursor for IterCursor<I>
where
    I: Iterator<Item = u8> + Clone,
{
    #[inline]
    fn peek(&self, ahead: usize) -> Option<u8> {
        self.iter.clone().nth(ahead)
    }

    #[inline]
    fn advance(&mut self, n: usize) {
        if n > 0 {
            let _ = self.iter.nth(n - 1);
        }
        self.consumed += n;
    }

    #[inline]
    fn position(&self) -> usize {
        self.consumed
    }
}
