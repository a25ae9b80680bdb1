//! Error types for numeric scanning and encoded text iteration
//!
//! Every failure is local to a single scan or decode call. The detailed
//! [`ScanError`] carries the failure kind and, where meaningful, the byte
//! offset into the scanned range. The "must" parsing surface collapses all of
//! them into the payload-free [`SyntaxError`].

use crate::scanner::NumericKind;
use std::fmt;
use thiserror::Error;

/// Failure produced by a scan or decode call
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanError {
    /// Input was zero-length or contained only whitespace
    #[error("Empty input")]
    EmptyInput,

    /// A character that the grammar does not allow at this point,
    /// including a sign or radix that the target kind rejects
    #[error("Invalid character at offset {offset}")]
    InvalidCharacter { offset: usize },

    /// Accumulated magnitude does not fit the target kind
    #[error("Value out of range for {kind}")]
    Overflow { kind: NumericKind },

    /// Non-whitespace characters follow a complete literal
    #[error("Unexpected trailing characters at offset {offset}")]
    TrailingGarbage { offset: usize },

    /// Byte classified invalid by the encoding, or a multi-byte sequence
    /// cut short by the end of the range
    #[error("Undecodable byte sequence at offset {offset}")]
    UndecodableSequence { offset: usize },
}

/// Field-less discriminant of [`ScanError`], convenient for matching
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScanErrorKind {
    EmptyInput,
    InvalidCharacter,
    Overflow,
    TrailingGarbage,
    UndecodableSequence,
}

impl ScanError {
    /// Returns the kind of this error without its payload
    pub fn kind(&self) -> ScanErrorKind {
        match self {
            ScanError::EmptyInput => ScanErrorKind::EmptyInput,
            ScanError::InvalidCharacter { .. } => ScanErrorKind::InvalidCharacter,
            ScanError::Overflow { .. } => ScanErrorKind::Overflow,
            ScanError::TrailingGarbage { .. } => ScanErrorKind::TrailingGarbage,
            ScanError::UndecodableSequence { .. } => ScanErrorKind::UndecodableSequence,
        }
    }

    /// Byte offset the error points at, if it has one
    pub fn offset(&self) -> Option<usize> {
        match *self {
            ScanError::InvalidCharacter { offset }
            | ScanError::TrailingGarbage { offset }
            | ScanError::UndecodableSequence { offset } => Some(offset),
            ScanError::EmptyInput | ScanError::Overflow { .. } => None,
        }
    }
}

impl fmt::Display for ScanErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ScanErrorKind::EmptyInput => "empty input",
            ScanErrorKind::InvalidCharacter => "invalid character",
            ScanErrorKind::Overflow => "overflow",
            ScanErrorKind::TrailingGarbage => "trailing garbage",
            ScanErrorKind::UndecodableSequence => "undecodable sequence",
        };
        f.write_str(name)
    }
}

/// Raised by the `parse_*` family when the input is not parseable.
///
/// Carries only the requested kind. The `scan_*` family reports the reason.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Syntax error: not a valid {kind}")]
pub struct SyntaxError {
    pub kind: NumericKind,
}

impl SyntaxError {
    pub(crate) fn new(kind: NumericKind) -> Self {
        Self { kind }
    }
}

/// Errors raised while building an encoding table or registry
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodingError {
    /// Map entry is neither `-1`, a sequence length, nor a Unicode scalar value
    #[error("Invalid code point {value} for byte 0x{byte:02X}")]
    InvalidCodePoint { byte: u8, value: i32 },

    /// Map entry announces a sequence longer than the supported maximum
    #[error("Sequence length {value} for byte 0x{byte:02X} exceeds the maximum")]
    InvalidSequenceLength { byte: u8, value: i32 },

    /// Map does not have exactly 256 entries
    #[error("Character map must have 256 entries, found {len}")]
    MapLength { len: usize },

    /// Single-byte table encodings cannot announce multi-byte sequences
    #[error("Byte 0x{byte:02X} starts a multi-byte sequence in a single-byte table")]
    UnexpectedSequence { byte: u8 },

    /// Name or alias already taken by another encoding
    #[error("Encoding name '{name}' is already registered")]
    DuplicateName { name: String },
}
