//! # Text Scan
//!
//! Low-level string scanning primitives: strict numeric literal parsing and
//! encoding-aware iteration over byte ranges.
//!
//! ## Overview
//!
//! The crate has two independent halves that share only their error type:
//!
//! - **Number parsing**: decimal, hexadecimal and octal integers of 32 and
//!   64 bits, decimal floating point, and boolean literals. Surrounding
//!   whitespace is trimmed, everything else must be part of the literal, and
//!   overflow is detected before it can happen.
//! - **Text iteration**: a [`TextCursor`] decodes one character at a time from
//!   borrowed bytes under a caller-supplied [`TextEncoding`]. Truncated or
//!   malformed sequences decode as errors but never stall the cursor.
//!
//! Neither half allocates on its hot path or holds shared state.
//!
//! ## Parsing Numbers
//!
//! ```rust
//! use text_scan::{NumberParser, ScanError};
//!
//! assert_eq!(NumberParser::parse(" 42 ")?, 42);
//! assert_eq!(NumberParser::parse_hex("0xff")?, 255);
//! assert_eq!(NumberParser::parse_oct("017")?, 15);
//! assert_eq!(NumberParser::parse_float("-2.5e3")?, -2500.0);
//! assert!(!NumberParser::parse_bool("OFF")?);
//!
//! // The scan form reports why a literal was rejected
//! assert_eq!(
//!     NumberParser::scan_unsigned("4294967296").map_err(|e| e.kind()),
//!     Err(text_scan::ScanErrorKind::Overflow)
//! );
//! assert_eq!(NumberParser::scan("   "), Err(ScanError::EmptyInput));
//! # Ok::<(), text_scan::SyntaxError>(())
//! ```
//!
//! ## Iterating Encoded Text
//!
//! ```rust
//! use text_scan::{TextCursor, Utf8Encoding};
//!
//! let text = "a€b";
//! let mut cursor = TextCursor::new(text, &Utf8Encoding);
//! let end = TextCursor::end_of(text.as_bytes());
//!
//! let mut decoded = Vec::new();
//! while cursor != end {
//!     decoded.push(cursor.current()?);
//!     cursor.advance();
//! }
//! assert_eq!(decoded, vec!['a', '€', 'b']);
//! # Ok::<(), text_scan::ScanError>(())
//! ```
//!
//! ## Custom Encodings
//!
//! Single-byte code pages can be described as data and looked up by name:
//!
//! ```rust
//! use std::sync::Arc;
//! use text_scan::{EncodingRegistry, TableEncoding, TextCursor};
//!
//! let mut map: Vec<i32> = (0..128).collect();
//! map.extend(std::iter::repeat(-1).take(128));
//! map[0xA4] = '€' as i32;
//!
//! let json = serde_json::json!({ "name": "demo-euro", "aliases": ["euro"], "map": map });
//! let encoding: TableEncoding = serde_json::from_value(json)?;
//!
//! let mut registry = EncodingRegistry::with_builtins();
//! registry.register(Arc::new(encoding))?;
//!
//! let euro = registry.find("EURO").expect("registered above");
//! let bytes = [b'5', 0xA4];
//! let text: Result<String, _> = TextCursor::from_bytes(&bytes, euro.as_ref()).collect();
//! assert_eq!(text?, "5€");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod chars;
pub mod cursor;
pub mod encoding;
pub mod error;
pub mod parser;
pub mod scanner;

#[cfg(test)]
mod error_tests;

// Re-export main types
pub use cursor::TextCursor;
pub use error::{EncodingError, ScanError, ScanErrorKind, SyntaxError};
pub use parser::NumberParser;
pub use scanner::{IntegerFormat, NumericKind, Radix, ScanInteger, Value, scan};

// Re-export encoding types
pub use encoding::{
    AsciiEncoding, ByteClass, CharacterMap, EncodedChar, EncodingRegistry, Latin1Encoding,
    MAX_SEQUENCE_LENGTH, TableEncoding, TableEncodingSpec, TextEncoding, Utf8Encoding,
};
