//! Tests for error reporting across scanners and the cursor
//!
//! Covers error kinds, offsets, display text, and the collapse of detailed
//! errors into `SyntaxError` by the must-parse surface.

#[cfg(test)]
mod tests {
    use crate::cursor::TextCursor;
    use crate::encoding::{AsciiEncoding, Utf8Encoding};
    use crate::error::{EncodingError, ScanError, ScanErrorKind, SyntaxError};
    use crate::parser::NumberParser;
    use crate::scanner::NumericKind;

    #[test]
    fn test_error_kinds_for_each_failure() {
        let cases = [
            ("", ScanErrorKind::EmptyInput),
            (" \t ", ScanErrorKind::EmptyInput),
            ("abc", ScanErrorKind::InvalidCharacter),
            ("+", ScanErrorKind::InvalidCharacter),
            ("99999999999", ScanErrorKind::Overflow),
            ("7 7", ScanErrorKind::TrailingGarbage),
        ];
        for (input, expected) in cases {
            let error = NumberParser::scan(input).expect_err(input);
            assert_eq!(error.kind(), expected, "input {input:?}");
        }
    }

    #[test]
    fn test_error_offsets() {
        assert_eq!(ScanError::EmptyInput.offset(), None);
        assert_eq!(
            ScanError::Overflow {
                kind: NumericKind::Int32
            }
            .offset(),
            None
        );
        assert_eq!(NumberParser::scan("  x").unwrap_err().offset(), Some(2));
        assert_eq!(NumberParser::scan(" 1 2").unwrap_err().offset(), Some(3));
    }

    #[test]
    fn test_error_display() {
        assert_eq!(ScanError::EmptyInput.to_string(), "Empty input");
        assert_eq!(
            ScanError::InvalidCharacter { offset: 4 }.to_string(),
            "Invalid character at offset 4"
        );
        assert_eq!(
            ScanError::Overflow {
                kind: NumericKind::UInt64
            }
            .to_string(),
            "Value out of range for uint64"
        );
        assert_eq!(
            ScanError::TrailingGarbage { offset: 1 }.to_string(),
            "Unexpected trailing characters at offset 1"
        );
        assert_eq!(
            ScanError::UndecodableSequence { offset: 0 }.to_string(),
            "Undecodable byte sequence at offset 0"
        );
        assert_eq!(ScanErrorKind::TrailingGarbage.to_string(), "trailing garbage");
    }

    #[test]
    fn test_syntax_error_hides_reason() {
        let overflow = NumberParser::parse("99999999999").unwrap_err();
        let garbage = NumberParser::parse("9x").unwrap_err();
        assert_eq!(overflow, garbage);
        assert_eq!(overflow, SyntaxError { kind: NumericKind::Int32 });
        assert_eq!(
            NumberParser::parse_bool("maybe").unwrap_err().to_string(),
            "Syntax error: not a valid bool"
        );
    }

    #[test]
    fn test_errors_are_std_errors() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}
        assert_error(&ScanError::EmptyInput);
        assert_error(&SyntaxError {
            kind: NumericKind::Float64,
        });
        assert_error(&EncodingError::MapLength { len: 0 });
    }

    #[test]
    fn test_cursor_errors_use_undecodable_kind() {
        let bytes = [0xC3];
        let cursor = TextCursor::from_bytes(&bytes, &Utf8Encoding);
        assert_eq!(
            cursor.current().map_err(|e| e.kind()),
            Err(ScanErrorKind::UndecodableSequence)
        );

        let bytes = [b'o', b'k', 0xFF];
        let results: Vec<_> = TextCursor::from_bytes(&bytes, &AsciiEncoding).collect();
        assert_eq!(
            results,
            vec![
                Ok('o'),
                Ok('k'),
                Err(ScanError::UndecodableSequence { offset: 2 })
            ]
        );
    }

    #[test]
    fn test_encoding_error_display() {
        assert_eq!(
            EncodingError::InvalidCodePoint {
                byte: 0x41,
                value: -9
            }
            .to_string(),
            "Invalid code point -9 for byte 0x41"
        );
        assert_eq!(
            EncodingError::DuplicateName {
                name: "utf-8".to_string()
            }
            .to_string(),
            "Encoding name 'utf-8' is already registered"
        );
    }
}
