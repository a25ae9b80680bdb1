//! Numeric literal scanning
//!
//! Stateless scanners that turn a bounded byte range into a typed value or a
//! [`ScanError`]. All integer widths share one digit loop parameterized by an
//! [`IntegerFormat`]; floating point and boolean literals have their own small
//! grammars with the same whitespace rules.
//!
//! Scanners never allocate and never return a partial value: either the whole
//! range (minus surrounding whitespace) is a literal, or the call fails.

use crate::chars::CHARACTER_TABLE;
use crate::error::ScanError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Numeric base of an integer literal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Radix {
    Octal,
    #[default]
    Decimal,
    Hex,
}

impl Radix {
    pub const fn base(self) -> u64 {
        match self {
            Radix::Octal => 8,
            Radix::Decimal => 10,
            Radix::Hex => 16,
        }
    }
}

/// Target type of a scan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumericKind {
    Int32,
    UInt32,
    Int64,
    UInt64,
    Float64,
    Bool,
}

impl NumericKind {
    /// Returns a human-readable name for the kind
    pub const fn name(self) -> &'static str {
        match self {
            NumericKind::Int32 => "int32",
            NumericKind::UInt32 => "uint32",
            NumericKind::Int64 => "int64",
            NumericKind::UInt64 => "uint64",
            NumericKind::Float64 => "float64",
            NumericKind::Bool => "bool",
        }
    }
}

impl fmt::Display for NumericKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A successfully scanned value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Value {
    Int32(i32),
    UInt32(u32),
    Int64(i64),
    UInt64(u64),
    Float64(f64),
    Bool(bool),
}

impl Value {
    pub fn kind(&self) -> NumericKind {
        match self {
            Value::Int32(_) => NumericKind::Int32,
            Value::UInt32(_) => NumericKind::UInt32,
            Value::Int64(_) => NumericKind::Int64,
            Value::UInt64(_) => NumericKind::UInt64,
            Value::Float64(_) => NumericKind::Float64,
            Value::Bool(_) => NumericKind::Bool,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int32(v) => write!(f, "{v}"),
            Value::UInt32(v) => write!(f, "{v}"),
            Value::Int64(v) => write!(f, "{v}"),
            Value::UInt64(v) => write!(f, "{v}"),
            Value::Float64(v) => write!(f, "{v}"),
            Value::Bool(v) => write!(f, "{v}"),
        }
    }
}

/// Parameters of the shared integer digit loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntegerFormat {
    pub radix: Radix,
    /// Largest positive magnitude the target can hold
    pub max_magnitude: u64,
    /// Whether a leading sign is accepted (decimal only)
    pub signed: bool,
    /// Reported in overflow errors
    pub kind: NumericKind,
}

impl IntegerFormat {
    /// Format for the integer type `T` in the given radix
    pub const fn of<T: ScanInteger>(radix: Radix) -> Self {
        Self {
            radix,
            max_magnitude: T::MAX_MAGNITUDE,
            signed: T::SIGNED,
            kind: T::KIND,
        }
    }
}

/// Integer types the scanner can produce
pub trait ScanInteger: Copy + Sized {
    const KIND: NumericKind;
    const MAX_MAGNITUDE: u64;
    const SIGNED: bool;

    /// Builds the value from a sign and a magnitude already checked against
    /// `MAX_MAGNITUDE` (or `MAX_MAGNITUDE + 1` when negative).
    fn from_parts(negative: bool, magnitude: u64) -> Self;
}

macro_rules! impl_scan_integer {
    ($($ty:ty => $kind:expr, $signed:expr;)*) => {
        $(
            impl ScanInteger for $ty {
                const KIND: NumericKind = $kind;
                const MAX_MAGNITUDE: u64 = <$ty>::MAX as u64;
                const SIGNED: bool = $signed;

                #[inline]
                fn from_parts(negative: bool, magnitude: u64) -> Self {
                    let wide = i128::from(magnitude);
                    (if negative { -wide } else { wide }) as $ty
                }
            }
        )*
    };
}

impl_scan_integer! {
    i32 => NumericKind::Int32, true;
    u32 => NumericKind::UInt32, false;
    i64 => NumericKind::Int64, true;
    u64 => NumericKind::UInt64, false;
}

/// Offset to blame when a required digit is missing
#[inline]
fn missing_digit(input: &[u8], pos: usize, literal_start: usize) -> ScanError {
    ScanError::InvalidCharacter {
        offset: if pos < input.len() { pos } else { literal_start },
    }
}

/// Scans an integer literal into a sign and magnitude.
///
/// The magnitude is guaranteed to fit the format: the overflow guard compares
/// against `limit / base` before every multiply, so accumulation never wraps.
pub fn scan_magnitude(input: &[u8], format: IntegerFormat) -> Result<(bool, u64), ScanError> {
    if input.is_empty() {
        return Err(ScanError::EmptyInput);
    }
    // Hex and octal are unsigned-only
    if format.signed && format.radix != Radix::Decimal {
        return Err(ScanError::InvalidCharacter { offset: 0 });
    }

    let table = &CHARACTER_TABLE;
    let len = input.len();
    let mut pos = table.skip_whitespace(input, 0);
    if pos == len {
        return Err(ScanError::EmptyInput);
    }
    let literal_start = pos;

    let mut negative = false;
    if format.signed && table.is_sign(input[pos]) {
        negative = input[pos] == b'-';
        pos += 1;
    }

    let mut digits = 0usize;
    if format.radix == Radix::Hex {
        let zeros_start = pos;
        while pos < len && input[pos] == b'0' {
            pos += 1;
        }
        if pos > zeros_start {
            if pos < len && table.is_hex_prefix(input[pos]) {
                // "0x" needs at least one digit of its own
                pos += 1;
            } else {
                digits = pos - zeros_start;
            }
        }
    }

    let base = format.radix.base();
    let limit = format.max_magnitude + u64::from(negative);
    let (max_quotient, max_remainder) = (limit / base, limit % base);

    let mut magnitude: u64 = 0;
    while pos < len {
        let Some(digit) = table.digit_value(input[pos], format.radix) else {
            break;
        };
        let digit = u64::from(digit);
        if magnitude > max_quotient || (magnitude == max_quotient && digit > max_remainder) {
            return Err(ScanError::Overflow { kind: format.kind });
        }
        magnitude = magnitude * base + digit;
        digits += 1;
        pos += 1;
    }

    if digits == 0 {
        return Err(missing_digit(input, pos, literal_start));
    }

    let rest = table.skip_whitespace(input, pos);
    if rest != len {
        return Err(ScanError::TrailingGarbage { offset: rest });
    }

    Ok((negative && magnitude != 0, magnitude))
}

/// Scans an integer of type `T` in the given radix
#[inline]
pub fn scan_integer<T: ScanInteger>(input: &[u8], radix: Radix) -> Result<T, ScanError> {
    let (negative, magnitude) = scan_magnitude(input, IntegerFormat::of::<T>(radix))?;
    Ok(T::from_parts(negative, magnitude))
}

fn count_decimal_digits(input: &[u8], pos: &mut usize) -> usize {
    let start = *pos;
    while *pos < input.len() && CHARACTER_TABLE.is_decimal_digit(input[*pos]) {
        *pos += 1;
    }
    *pos - start
}

/// Scans a decimal floating point literal.
///
/// Grammar: `[+-] digits [. digits] [(e|E) [+-] digits]`, with at least one
/// mantissa digit on either side of the point. Word forms such as `inf` or
/// `nan` are not accepted; a literal too large for `f64` is an overflow.
pub fn scan_float(input: &[u8]) -> Result<f64, ScanError> {
    if input.is_empty() {
        return Err(ScanError::EmptyInput);
    }
    let table = &CHARACTER_TABLE;
    let len = input.len();
    let mut pos = table.skip_whitespace(input, 0);
    if pos == len {
        return Err(ScanError::EmptyInput);
    }
    let literal_start = pos;

    if table.is_sign(input[pos]) {
        pos += 1;
    }
    let mut mantissa_digits = count_decimal_digits(input, &mut pos);
    if pos < len && input[pos] == b'.' {
        pos += 1;
        mantissa_digits += count_decimal_digits(input, &mut pos);
    }
    if mantissa_digits == 0 {
        return Err(missing_digit(input, pos, literal_start));
    }

    if pos < len && table.is_exponent_marker(input[pos]) {
        let marker = pos;
        pos += 1;
        if pos < len && table.is_sign(input[pos]) {
            pos += 1;
        }
        if count_decimal_digits(input, &mut pos) == 0 {
            return Err(missing_digit(input, pos, marker));
        }
    }
    let literal_end = pos;

    let rest = table.skip_whitespace(input, pos);
    if rest != len {
        return Err(ScanError::TrailingGarbage { offset: rest });
    }

    // The grammar above only admits ASCII, so both conversions succeed for
    // any literal it accepted.
    let value = std::str::from_utf8(&input[literal_start..literal_end])
        .ok()
        .and_then(|text| text.parse::<f64>().ok())
        .ok_or(ScanError::InvalidCharacter {
            offset: literal_start,
        })?;

    if value.is_infinite() {
        return Err(ScanError::Overflow {
            kind: NumericKind::Float64,
        });
    }
    Ok(value)
}

/// Accepted boolean spellings, matched case-insensitively
const BOOL_LITERALS: [(&str, bool); 8] = [
    ("0", false),
    ("1", true),
    ("true", true),
    ("false", false),
    ("on", true),
    ("off", false),
    ("yes", true),
    ("no", false),
];

/// Scans a boolean literal: `0`/`1`, `true`/`false`, `on`/`off`, `yes`/`no`
pub fn scan_bool(input: &[u8]) -> Result<bool, ScanError> {
    let table = &CHARACTER_TABLE;
    let start = table.skip_whitespace(input, 0);
    if start == input.len() {
        return Err(ScanError::EmptyInput);
    }
    let mut end = input.len();
    while end > start && table.is_whitespace(input[end - 1]) {
        end -= 1;
    }
    let word = &input[start..end];

    BOOL_LITERALS
        .iter()
        .find(|(literal, _)| literal.as_bytes().eq_ignore_ascii_case(word))
        .map(|&(_, value)| value)
        .ok_or(ScanError::InvalidCharacter { offset: start })
}

/// Scans `input` as `kind` in `radix`.
///
/// Floating point and boolean literals are decimal-only; any other radix
/// fails on the first byte, as does a signed integer kind outside decimal.
pub fn scan(input: &[u8], kind: NumericKind, radix: Radix) -> Result<Value, ScanError> {
    match kind {
        NumericKind::Int32 => scan_integer::<i32>(input, radix).map(Value::Int32),
        NumericKind::UInt32 => scan_integer::<u32>(input, radix).map(Value::UInt32),
        NumericKind::Int64 => scan_integer::<i64>(input, radix).map(Value::Int64),
        NumericKind::UInt64 => scan_integer::<u64>(input, radix).map(Value::UInt64),
        NumericKind::Float64 | NumericKind::Bool if radix != Radix::Decimal => {
            if input.is_empty() {
                Err(ScanError::EmptyInput)
            } else {
                Err(ScanError::InvalidCharacter { offset: 0 })
            }
        }
        NumericKind::Float64 => scan_float(input).map(Value::Float64),
        NumericKind::Bool => scan_bool(input).map(Value::Bool),
    }
}
