//! Encoding-aware cursor over a borrowed byte range
//!
//! A [`TextCursor`] walks caller-owned bytes one character at a time under a
//! [`TextEncoding`]. It never copies or mutates the bytes and never outlives
//! them: the buffer and the encoding are both borrowed for `'a`.
//!
//! A cursor is either dereferenceable (`offset() < end`) or at its end bound.
//! Cursors built without an encoding (the [`Default`] one and
//! [`TextCursor::end_of`]) are end sentinels for loop comparisons and must not
//! be dereferenced.

use crate::encoding::{ByteClass, MAX_SEQUENCE_LENGTH, TextEncoding};
use crate::error::ScanError;
use std::fmt;
use std::iter::FusedIterator;
use std::ops::Range;
use tracing::trace;

#[derive(Clone, Copy, Default)]
pub struct TextCursor<'a> {
    encoding: Option<&'a dyn TextEncoding>,
    /// Bytes up to the end bound
    bytes: &'a [u8],
    position: usize,
}

impl<'a> TextCursor<'a> {
    /// Cursor over the whole of `text`
    pub fn new(text: &'a str, encoding: &'a dyn TextEncoding) -> Self {
        Self::from_bytes(text.as_bytes(), encoding)
    }

    /// Cursor over the whole of `bytes`
    pub fn from_bytes(bytes: &'a [u8], encoding: &'a dyn TextEncoding) -> Self {
        Self {
            encoding: Some(encoding),
            bytes,
            position: 0,
        }
    }

    /// Cursor over `bytes[range]`.
    ///
    /// Offsets reported by the cursor stay relative to the start of `bytes`.
    ///
    /// # Panics
    ///
    /// Panics if `range.end` is past the end of `bytes`.
    pub fn with_range(
        bytes: &'a [u8],
        range: Range<usize>,
        encoding: &'a dyn TextEncoding,
    ) -> Self {
        debug_assert!(range.start <= range.end, "inverted cursor range {range:?}");
        Self {
            encoding: Some(encoding),
            bytes: &bytes[..range.end],
            position: range.start.min(range.end),
        }
    }

    /// End sentinel for a cursor over the whole of `bytes`
    pub fn end_of(bytes: &'a [u8]) -> Self {
        Self {
            encoding: None,
            bytes,
            position: bytes.len(),
        }
    }

    /// Returns true once the cursor has reached its end bound
    #[inline]
    pub fn at_end(&self) -> bool {
        self.position == self.bytes.len()
    }

    /// Byte offset of the cursor from the start of the underlying buffer
    #[inline]
    pub fn offset(&self) -> usize {
        self.position
    }

    /// Bytes between the cursor and its end bound
    pub fn remaining(&self) -> &'a [u8] {
        &self.bytes[self.position..]
    }

    pub fn encoding(&self) -> Option<&'a dyn TextEncoding> {
        self.encoding
    }

    #[inline]
    fn check_dereferenceable(&self) {
        debug_assert!(
            self.encoding.is_some(),
            "text cursor used without an encoding"
        );
        debug_assert!(!self.at_end(), "text cursor used at its end bound");
    }

    /// Decodes the character at the cursor without moving it.
    ///
    /// Returns [`ScanError::UndecodableSequence`] when the byte is invalid in
    /// the encoding, when a multi-byte sequence is malformed, or when the end
    /// bound cuts a sequence short. Must not be called at the end bound.
    pub fn current(&self) -> Result<char, ScanError> {
        self.check_dereferenceable();
        let undecodable = ScanError::UndecodableSequence {
            offset: self.position,
        };
        let (Some(encoding), Some(&lead)) = (self.encoding, self.bytes.get(self.position)) else {
            return Err(undecodable);
        };

        match encoding.character_map().classify(lead) {
            ByteClass::Char(ch) => Ok(ch),
            ByteClass::Invalid => {
                trace!(offset = self.position, byte = lead, "invalid lead byte");
                Err(undecodable)
            }
            ByteClass::Sequence(length) => {
                debug_assert!(length <= MAX_SEQUENCE_LENGTH);
                let Some(sequence) = self.bytes.get(self.position..self.position + length) else {
                    trace!(
                        offset = self.position,
                        expected = length,
                        available = self.bytes.len() - self.position,
                        "sequence truncated by end bound"
                    );
                    return Err(undecodable);
                };
                encoding.convert(sequence).ok_or_else(|| {
                    trace!(offset = self.position, length, "malformed sequence");
                    undecodable
                })
            }
        }
    }

    /// Moves past the character at the cursor.
    ///
    /// A multi-byte sequence is skipped as a whole, or up to the end bound if
    /// it is truncated, so the cursor always makes progress. Must not be
    /// called at the end bound.
    pub fn advance(&mut self) {
        self.check_dereferenceable();
        let Some(&lead) = self.bytes.get(self.position) else {
            return;
        };
        let step = match self
            .encoding
            .map(|encoding| encoding.character_map().classify(lead))
        {
            Some(ByteClass::Sequence(length)) => length,
            _ => 1,
        };
        self.position = (self.position + step).min(self.bytes.len());
    }

    /// Moves past the current character, returning the cursor as it was before
    pub fn advance_post(&mut self) -> Self {
        let previous = *self;
        self.advance();
        previous
    }

    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(self, other);
    }
}

/// Cursors are equal when they point at the same position of the same
/// range; the encoding is not compared.
impl PartialEq for TextCursor<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.bytes.as_ptr(), other.bytes.as_ptr())
            && self.bytes.len() == other.bytes.len()
            && self.position == other.position
    }
}

impl Eq for TextCursor<'_> {}

impl fmt::Debug for TextCursor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextCursor")
            .field("encoding", &self.encoding.map(|encoding| encoding.name()))
            .field("position", &self.position)
            .field("end", &self.bytes.len())
            .finish()
    }
}

impl Iterator for TextCursor<'_> {
    type Item = Result<char, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.at_end() || self.encoding.is_none() {
            return None;
        }
        let item = self.current();
        self.advance();
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.encoding.is_none() {
            return (0, Some(0));
        }
        let remaining = self.bytes.len() - self.position;
        (remaining.div_ceil(MAX_SEQUENCE_LENGTH), Some(remaining))
    }
}

impl FusedIterator for TextCursor<'_> {}
