//! Property tests for the numeric scanners and the text cursor

use proptest::prelude::*;
use text_scan::{NumberParser, ScanErrorKind, TextCursor, Utf8Encoding};

proptest! {
    #[test]
    fn decimal_i64_round_trips(value in any::<i64>()) {
        prop_assert_eq!(NumberParser::try_parse64(&value.to_string()), Some(value));
    }

    #[test]
    fn decimal_u32_round_trips_with_padding(
        value in any::<u32>(),
        left in "[ \t\n]{0,4}",
        right in "[ \t\n]{0,4}",
    ) {
        let text = format!("{left}{value}{right}");
        prop_assert_eq!(NumberParser::try_parse_unsigned(&text), Some(value));
    }

    #[test]
    fn hex_u64_round_trips(value in any::<u64>(), prefixed in any::<bool>(), upper in any::<bool>()) {
        let digits = if upper { format!("{value:X}") } else { format!("{value:x}") };
        let text = if prefixed { format!("0x{digits}") } else { digits };
        prop_assert_eq!(NumberParser::try_parse_hex64(&text), Some(value));
    }

    #[test]
    fn octal_u32_round_trips(value in any::<u32>()) {
        prop_assert_eq!(NumberParser::try_parse_oct(&format!("{value:o}")), Some(value));
    }

    #[test]
    fn out_of_range_i32_is_overflow(value in (i64::from(i32::MAX) + 1)..i64::MAX, negate in any::<bool>()) {
        let value = if negate { -value - 1 } else { value };
        let result = NumberParser::scan(&value.to_string()).map_err(|e| e.kind());
        prop_assert_eq!(result, Err(ScanErrorKind::Overflow));
    }

    #[test]
    fn out_of_range_u64_is_overflow(value in (u128::from(u64::MAX) + 1)..u128::MAX) {
        let result = NumberParser::scan_unsigned64(&value.to_string()).map_err(|e| e.kind());
        prop_assert_eq!(result, Err(ScanErrorKind::Overflow));
    }

    #[test]
    fn finite_floats_round_trip(value in any::<f64>().prop_filter("finite", |v| v.is_finite())) {
        prop_assert_eq!(NumberParser::try_parse_float(&format!("{value:e}")), Some(value));
    }

    #[test]
    fn scanners_never_panic(input in ".{0,32}") {
        let _ = NumberParser::scan(&input);
        let _ = NumberParser::scan_hex64(&input);
        let _ = NumberParser::scan_oct(&input);
        let _ = NumberParser::scan_float(&input);
        let _ = NumberParser::scan_bool(&input);
    }

    #[test]
    fn cursor_always_reaches_end(bytes in proptest::collection::vec(any::<u8>(), 0..64)) {
        let mut cursor = TextCursor::from_bytes(&bytes, &Utf8Encoding);
        let mut steps = 0;
        while !cursor.at_end() {
            let before = cursor.offset();
            let _ = cursor.current();
            cursor.advance();
            prop_assert!(cursor.offset() > before);
            steps += 1;
        }
        prop_assert!(steps <= bytes.len());
        prop_assert_eq!(cursor, TextCursor::end_of(&bytes));
    }

    #[test]
    fn cursor_agrees_with_std_on_valid_utf8(text in "\\PC{0,32}") {
        let decoded: Result<String, _> = TextCursor::new(&text, &Utf8Encoding).collect();
        prop_assert_eq!(decoded, Ok(text.clone()));
    }
}
