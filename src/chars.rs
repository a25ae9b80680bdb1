//! Byte classification for the numeric scanners
//!
//! A single compile-time table answers every "what kind of byte is this"
//! question the scanners ask: whitespace, sign, and digit membership per
//! radix.

use crate::scanner::Radix;

/// Bitfield flags for byte classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharacterFlags(u8);

impl CharacterFlags {
    /// C `isspace` set: space, tab, newline, vertical tab, form feed, carriage return
    pub const WHITESPACE: Self = Self(1 << 0);
    /// `+` or `-`
    pub const SIGN: Self = Self(1 << 1);
    /// `0`-`7`
    pub const OCTAL_DIGIT: Self = Self(1 << 2);
    /// `0`-`9`
    pub const DECIMAL_DIGIT: Self = Self(1 << 3);
    /// `0`-`9`, `a`-`f`, `A`-`F`
    pub const HEX_DIGIT: Self = Self(1 << 4);
    /// `x` or `X`
    pub const HEX_PREFIX: Self = Self(1 << 5);
    /// `e` or `E`
    pub const EXPONENT: Self = Self(1 << 6);

    pub const fn empty() -> Self {
        Self(0)
    }

    /// Returns true if any flag is shared
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// Returns true if all flags of `other` are set
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl std::ops::BitOr for CharacterFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

/// Byte lookup table for O(1) classification
#[derive(Debug, Clone)]
pub struct CharacterTable {
    flags: [CharacterFlags; 256],
    digits: [u8; 256],
}

/// Marker stored in the digit table for bytes that are not hex digits
const NOT_A_DIGIT: u8 = 0xFF;

impl CharacterTable {
    /// Creates a new character table with compile-time initialization
    pub const fn new() -> Self {
        let mut flags = [CharacterFlags::empty(); 256];
        let mut digits = [NOT_A_DIGIT; 256];
        let mut i = 0;

        while i < 256 {
            let ch = i as u8;
            let mut f = CharacterFlags::empty();

            match ch {
                b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r' => {
                    f = f.union(CharacterFlags::WHITESPACE)
                }
                b'+' | b'-' => f = f.union(CharacterFlags::SIGN),
                b'x' | b'X' => f = f.union(CharacterFlags::HEX_PREFIX),
                _ => {}
            }

            match ch {
                b'0'..=b'7' => {
                    f = f
                        .union(CharacterFlags::OCTAL_DIGIT)
                        .union(CharacterFlags::DECIMAL_DIGIT)
                        .union(CharacterFlags::HEX_DIGIT);
                    digits[i] = ch - b'0';
                }
                b'8' | b'9' => {
                    f = f
                        .union(CharacterFlags::DECIMAL_DIGIT)
                        .union(CharacterFlags::HEX_DIGIT);
                    digits[i] = ch - b'0';
                }
                b'a'..=b'f' => {
                    f = f.union(CharacterFlags::HEX_DIGIT);
                    digits[i] = ch - b'a' + 10;
                }
                b'A'..=b'F' => {
                    f = f.union(CharacterFlags::HEX_DIGIT);
                    digits[i] = ch - b'A' + 10;
                }
                _ => {}
            }

            // 'e' and 'E' are hex digits too; the flag only matters to the float grammar
            if ch == b'e' || ch == b'E' {
                f = f.union(CharacterFlags::EXPONENT);
            }

            flags[i] = f;
            i += 1;
        }

        Self { flags, digits }
    }

    /// Tests if a byte has any of the given flags
    #[inline(always)]
    pub const fn test_character(&self, ch: u8, flags: CharacterFlags) -> bool {
        self.flags[ch as usize].intersects(flags)
    }

    /// Returns the flags for a byte
    #[inline(always)]
    pub const fn get_flags(&self, ch: u8) -> CharacterFlags {
        self.flags[ch as usize]
    }

    #[inline(always)]
    pub const fn is_whitespace(&self, ch: u8) -> bool {
        self.test_character(ch, CharacterFlags::WHITESPACE)
    }

    #[inline(always)]
    pub const fn is_sign(&self, ch: u8) -> bool {
        self.test_character(ch, CharacterFlags::SIGN)
    }

    #[inline(always)]
    pub const fn is_decimal_digit(&self, ch: u8) -> bool {
        self.test_character(ch, CharacterFlags::DECIMAL_DIGIT)
    }

    #[inline(always)]
    pub const fn is_hex_prefix(&self, ch: u8) -> bool {
        self.test_character(ch, CharacterFlags::HEX_PREFIX)
    }

    #[inline(always)]
    pub const fn is_exponent_marker(&self, ch: u8) -> bool {
        self.test_character(ch, CharacterFlags::EXPONENT)
    }

    /// Value of `ch` as a digit in `radix`, or `None` if it is not one
    #[inline(always)]
    pub const fn digit_value(&self, ch: u8, radix: Radix) -> Option<u8> {
        let flag = match radix {
            Radix::Octal => CharacterFlags::OCTAL_DIGIT,
            Radix::Decimal => CharacterFlags::DECIMAL_DIGIT,
            Radix::Hex => CharacterFlags::HEX_DIGIT,
        };
        if self.test_character(ch, flag) {
            Some(self.digits[ch as usize])
        } else {
            None
        }
    }

    /// Index of the first non-whitespace byte at or after `from`
    #[inline]
    pub fn skip_whitespace(&self, input: &[u8], from: usize) -> usize {
        let mut pos = from;
        while pos < input.len() && self.is_whitespace(input[pos]) {
            pos += 1;
        }
        pos
    }
}

impl Default for CharacterTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Global character table instance
pub static CHARACTER_TABLE: CharacterTable = CharacterTable::new();

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_matches_c_isspace() {
        for ch in [b' ', b'\t', b'\n', 0x0B, 0x0C, b'\r'] {
            assert!(CHARACTER_TABLE.is_whitespace(ch), "0x{ch:02X}");
        }
        for ch in [0u8, b'a', b'0', 0x85, 0xA0, b'_'] {
            assert!(!CHARACTER_TABLE.is_whitespace(ch), "0x{ch:02X}");
        }
    }

    #[test]
    fn test_digit_values_per_radix() {
        assert_eq!(CHARACTER_TABLE.digit_value(b'7', Radix::Octal), Some(7));
        assert_eq!(CHARACTER_TABLE.digit_value(b'8', Radix::Octal), None);
        assert_eq!(CHARACTER_TABLE.digit_value(b'9', Radix::Decimal), Some(9));
        assert_eq!(CHARACTER_TABLE.digit_value(b'a', Radix::Decimal), None);
        assert_eq!(CHARACTER_TABLE.digit_value(b'a', Radix::Hex), Some(10));
        assert_eq!(CHARACTER_TABLE.digit_value(b'F', Radix::Hex), Some(15));
        assert_eq!(CHARACTER_TABLE.digit_value(b'g', Radix::Hex), None);
    }

    #[test]
    fn test_flag_operations() {
        let flags = CharacterFlags::SIGN | CharacterFlags::WHITESPACE;
        assert!(flags.contains(CharacterFlags::SIGN));
        assert!(flags.intersects(CharacterFlags::WHITESPACE));
        assert!(!flags.intersects(CharacterFlags::HEX_DIGIT));
        assert!(CharacterFlags::empty().is_empty());
    }

    #[test]
    fn test_exponent_bytes_are_also_hex_digits() {
        let flags = CHARACTER_TABLE.get_flags(b'e');
        assert!(flags.contains(CharacterFlags::EXPONENT | CharacterFlags::HEX_DIGIT));
        assert!(!CHARACTER_TABLE.is_exponent_marker(b'f'));
    }

    #[test]
    fn test_skip_whitespace_stops_at_content() {
        let input = b" \t\x0B42 ";
        assert_eq!(CHARACTER_TABLE.skip_whitespace(input, 0), 3);
        assert_eq!(CHARACTER_TABLE.skip_whitespace(input, 5), 6);
        assert_eq!(CHARACTER_TABLE.skip_whitespace(b"", 0), 0);
    }
}
