//! Number parsing entry points
//!
//! [`NumberParser`] exposes every supported kind through three calling
//! conventions that share one scan:
//!
//! - `scan_*` returns the detailed [`ScanError`]
//! - `try_parse_*` returns `Option`, discarding the reason
//! - `parse_*` returns the payload-free [`SyntaxError`]
//!
//! ```rust
//! use text_scan::NumberParser;
//!
//! assert_eq!(NumberParser::parse("  -42 ")?, -42);
//! assert_eq!(NumberParser::try_parse_hex("0x1A"), Some(26));
//! assert_eq!(NumberParser::try_parse_oct("08"), None);
//! assert!(NumberParser::parse_bool("On")?);
//! # Ok::<(), text_scan::SyntaxError>(())
//! ```

use crate::error::{ScanError, SyntaxError};
use crate::scanner::{self, NumericKind, Radix, ScanInteger, Value};
use tracing::debug;

/// Static entry points for parsing numbers out of strings
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberParser;

fn reject(input: &str, kind: NumericKind, error: ScanError) -> SyntaxError {
    debug!(input, %kind, reason = %error, "number parse failed");
    SyntaxError::new(kind)
}

macro_rules! parse_entry_points {
    ($(
        $what:literal => $ty:ty, $kind:expr, |$input:ident| $scan_body:expr,
            $scan:ident, $try_parse:ident, $parse:ident;
    )*) => {
        impl NumberParser {
            $(
                #[doc = concat!("Scans ", $what, " from `s`, reporting why it failed.")]
                pub fn $scan(s: &str) -> Result<$ty, ScanError> {
                    let $input = s.as_bytes();
                    $scan_body
                }

                #[doc = concat!("Parses ", $what, " from `s`, or returns `None`.")]
                pub fn $try_parse(s: &str) -> Option<$ty> {
                    Self::$scan(s).ok()
                }

                #[doc = concat!(
                    "Parses ", $what, " from `s`.\n\n",
                    "Fails with [`SyntaxError`] if `s` does not hold one."
                )]
                pub fn $parse(s: &str) -> Result<$ty, SyntaxError> {
                    Self::$scan(s).map_err(|error| reject(s, $kind, error))
                }
            )*
        }
    };
}

parse_entry_points! {
    "a 32-bit signed integer in decimal notation" => i32, NumericKind::Int32,
        |input| scanner::scan_integer(input, Radix::Decimal),
        scan, try_parse, parse;
    "a 32-bit unsigned integer in decimal notation" => u32, NumericKind::UInt32,
        |input| scanner::scan_integer(input, Radix::Decimal),
        scan_unsigned, try_parse_unsigned, parse_unsigned;
    "a 32-bit unsigned integer in hexadecimal notation, with optional `0x` prefix" => u32,
        NumericKind::UInt32,
        |input| scanner::scan_integer(input, Radix::Hex),
        scan_hex, try_parse_hex, parse_hex;
    "a 32-bit unsigned integer in octal notation" => u32, NumericKind::UInt32,
        |input| scanner::scan_integer(input, Radix::Octal),
        scan_oct, try_parse_oct, parse_oct;
    "a 64-bit signed integer in decimal notation" => i64, NumericKind::Int64,
        |input| scanner::scan_integer(input, Radix::Decimal),
        scan64, try_parse64, parse64;
    "a 64-bit unsigned integer in decimal notation" => u64, NumericKind::UInt64,
        |input| scanner::scan_integer(input, Radix::Decimal),
        scan_unsigned64, try_parse_unsigned64, parse_unsigned64;
    "a 64-bit unsigned integer in hexadecimal notation, with optional `0x` prefix" => u64,
        NumericKind::UInt64,
        |input| scanner::scan_integer(input, Radix::Hex),
        scan_hex64, try_parse_hex64, parse_hex64;
    "a 64-bit unsigned integer in octal notation" => u64, NumericKind::UInt64,
        |input| scanner::scan_integer(input, Radix::Octal),
        scan_oct64, try_parse_oct64, parse_oct64;
    "a double in decimal floating point notation" => f64, NumericKind::Float64,
        |input| scanner::scan_float(input),
        scan_float, try_parse_float, parse_float;
    "a boolean (`0`, `1`, `true`, `false`, `on`, `off`, `yes`, `no`; any case)" => bool,
        NumericKind::Bool,
        |input| scanner::scan_bool(input),
        scan_bool, try_parse_bool, parse_bool;
}

impl NumberParser {
    /// Scans any integer type in any radix
    pub fn scan_as<T: ScanInteger>(s: &str, radix: Radix) -> Result<T, ScanError> {
        scanner::scan_integer(s.as_bytes(), radix)
    }

    /// Scans `s` as `kind` in `radix`
    pub fn scan_value(s: &str, kind: NumericKind, radix: Radix) -> Result<Value, ScanError> {
        scanner::scan(s.as_bytes(), kind, radix)
    }

    /// Parses `s` as `kind` in `radix`, failing with [`SyntaxError`]
    pub fn parse_value(s: &str, kind: NumericKind, radix: Radix) -> Result<Value, SyntaxError> {
        Self::scan_value(s, kind, radix).map_err(|error| reject(s, kind, error))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_forms_agree() {
        assert_eq!(NumberParser::scan("123"), Ok(123));
        assert_eq!(NumberParser::try_parse("123"), Some(123));
        assert_eq!(NumberParser::parse("123"), Ok(123));

        assert_eq!(
            NumberParser::scan("12x"),
            Err(ScanError::TrailingGarbage { offset: 2 })
        );
        assert_eq!(NumberParser::try_parse("12x"), None);
        assert_eq!(
            NumberParser::parse("12x"),
            Err(SyntaxError::new(NumericKind::Int32))
        );
    }

    #[test]
    fn test_syntax_error_names_kind() {
        let error = NumberParser::parse_hex64("zz").unwrap_err();
        assert_eq!(error.kind, NumericKind::UInt64);
        assert_eq!(error.to_string(), "Syntax error: not a valid uint64");
    }

    #[test]
    fn test_width_variants() {
        assert_eq!(NumberParser::try_parse("3000000000"), None);
        assert_eq!(NumberParser::try_parse64("3000000000"), Some(3_000_000_000));
        assert_eq!(
            NumberParser::try_parse_unsigned("3000000000"),
            Some(3_000_000_000)
        );
        assert_eq!(NumberParser::try_parse_hex("123456789"), None);
        assert_eq!(
            NumberParser::try_parse_hex64("123456789"),
            Some(0x1_2345_6789)
        );
        assert_eq!(NumberParser::try_parse_oct64("1777777777777777777777"), Some(u64::MAX));
    }

    #[test]
    fn test_generic_entry_points() {
        assert_eq!(NumberParser::scan_as::<u64>("ff", Radix::Hex), Ok(255));
        assert_eq!(
            NumberParser::parse_value("yes", NumericKind::Bool, Radix::Decimal),
            Ok(Value::Bool(true))
        );
        assert_eq!(
            NumberParser::parse_value("10", NumericKind::Int32, Radix::Octal),
            Err(SyntaxError::new(NumericKind::Int32))
        );
    }
}
