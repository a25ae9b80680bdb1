//! Text encodings consumed by [`TextCursor`](crate::cursor::TextCursor)
//!
//! An encoding is described by a 256-entry [`CharacterMap`] plus a decode
//! routine for multi-byte sequences. Map entries follow one scheme for every
//! encoding:
//!
//! - `0..` : the byte alone is the given code point
//! - `-1`  : the byte cannot start a character
//! - `-n`  : the byte starts a sequence of `n` bytes (`2 <= n <= MAX_SEQUENCE_LENGTH`)
//!
//! Encodings are immutable once built and may be shared freely between
//! threads and cursors.

use crate::error::EncodingError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Longest byte sequence any encoding may announce in its character map
pub const MAX_SEQUENCE_LENGTH: usize = 6;

/// Bytes of one encoded character
pub type EncodedChar = SmallVec<[u8; MAX_SEQUENCE_LENGTH]>;

/// How a single byte is classified by a [`CharacterMap`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteClass {
    /// The byte alone decodes to this character
    Char(char),
    /// The byte cannot start a character
    Invalid,
    /// The byte starts a sequence of this many bytes
    Sequence(usize),
}

/// 256-entry classification table indexed by raw byte value
#[derive(Clone, PartialEq, Eq)]
pub struct CharacterMap([i32; 256]);

impl CharacterMap {
    /// Entry value for a byte that cannot start a character
    pub const INVALID: i32 = -1;

    /// Creates a map after validating every entry
    pub fn new(entries: [i32; 256]) -> Result<Self, EncodingError> {
        for (byte, &value) in entries.iter().enumerate() {
            let byte = byte as u8;
            if value >= 0 {
                if char::from_u32(value as u32).is_none() {
                    return Err(EncodingError::InvalidCodePoint { byte, value });
                }
            } else if value < -(MAX_SEQUENCE_LENGTH as i32) {
                return Err(EncodingError::InvalidSequenceLength { byte, value });
            }
        }
        Ok(Self(entries))
    }

    /// Creates a map from a slice that must hold exactly 256 entries
    pub fn from_slice(entries: &[i32]) -> Result<Self, EncodingError> {
        let entries: [i32; 256] = entries
            .try_into()
            .map_err(|_| EncodingError::MapLength { len: entries.len() })?;
        Self::new(entries)
    }

    /// Wraps entries known to be valid; used for the built-in tables
    const fn from_raw(entries: [i32; 256]) -> Self {
        Self(entries)
    }

    /// Raw entry for `byte`
    #[inline(always)]
    pub const fn get(&self, byte: u8) -> i32 {
        self.0[byte as usize]
    }

    /// Interprets the entry for `byte`
    #[inline]
    pub fn classify(&self, byte: u8) -> ByteClass {
        match self.get(byte) {
            value if value >= 0 => char::from_u32(value as u32)
                .map(ByteClass::Char)
                .unwrap_or(ByteClass::Invalid),
            Self::INVALID => ByteClass::Invalid,
            value => ByteClass::Sequence(value.unsigned_abs() as usize),
        }
    }

    /// Returns true if any byte starts a multi-byte sequence
    pub fn has_sequences(&self) -> bool {
        self.0.iter().any(|&value| value < Self::INVALID)
    }

    pub fn entries(&self) -> &[i32; 256] {
        &self.0
    }
}

impl fmt::Debug for CharacterMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let invalid = self.0.iter().filter(|&&v| v == Self::INVALID).count();
        let sequences = self.0.iter().filter(|&&v| v < Self::INVALID).count();
        f.debug_struct("CharacterMap")
            .field("single", &(256 - invalid - sequences))
            .field("invalid", &invalid)
            .field("sequence_starts", &sequences)
            .finish()
    }
}

/// A byte-oriented character encoding
pub trait TextEncoding: Send + Sync {
    /// Canonical name, e.g. `"UTF-8"`
    fn name(&self) -> &str;

    /// Alternative names accepted by [`EncodingRegistry::find`]
    fn aliases(&self) -> Vec<&str> {
        Vec::new()
    }

    /// Classification of every possible first byte
    fn character_map(&self) -> &CharacterMap;

    /// Decodes one complete multi-byte sequence.
    ///
    /// `bytes` holds exactly as many bytes as the map announced for its first
    /// byte. Returns `None` if the sequence is malformed.
    fn convert(&self, bytes: &[u8]) -> Option<char>;

    /// Encodes `ch`, or returns `None` if the encoding cannot represent it.
    ///
    /// The default searches the map for a single byte decoding to `ch`.
    fn encode(&self, ch: char) -> Option<EncodedChar> {
        let map = self.character_map();
        (0..=u8::MAX)
            .find(|&byte| map.get(byte) == ch as i32)
            .map(|byte| SmallVec::from_slice(&[byte]))
    }

    /// Returns true if `name` is the canonical name or an alias, ignoring case
    fn is_a(&self, name: &str) -> bool {
        self.name().eq_ignore_ascii_case(name)
            || self
                .aliases()
                .iter()
                .any(|alias| alias.eq_ignore_ascii_case(name))
    }
}

impl fmt::Debug for dyn TextEncoding + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextEncoding")
            .field("name", &self.name())
            .finish_non_exhaustive()
    }
}

const fn ascii_map() -> [i32; 256] {
    let mut map = [CharacterMap::INVALID; 256];
    let mut i = 0;
    while i < 0x80 {
        map[i] = i as i32;
        i += 1;
    }
    map
}

const fn latin1_map() -> [i32; 256] {
    let mut map = [0; 256];
    let mut i = 0;
    while i < 256 {
        map[i] = i as i32;
        i += 1;
    }
    map
}

const fn utf8_map() -> [i32; 256] {
    let mut map = [CharacterMap::INVALID; 256];
    let mut i = 0;
    while i < 256 {
        map[i] = match i {
            0x00..=0x7F => i as i32,
            0x80..=0xBF => CharacterMap::INVALID,
            0xC0..=0xDF => -2,
            0xE0..=0xEF => -3,
            0xF0..=0xF7 => -4,
            0xF8..=0xFB => -5,
            0xFC..=0xFD => -6,
            _ => CharacterMap::INVALID,
        };
        i += 1;
    }
    map
}

static ASCII_MAP: CharacterMap = CharacterMap::from_raw(ascii_map());
static LATIN1_MAP: CharacterMap = CharacterMap::from_raw(latin1_map());
static UTF8_MAP: CharacterMap = CharacterMap::from_raw(utf8_map());

/// 7-bit US-ASCII; bytes `0x80..=0xFF` are invalid
#[derive(Debug, Clone, Copy, Default)]
pub struct AsciiEncoding;

impl TextEncoding for AsciiEncoding {
    fn name(&self) -> &str {
        "US-ASCII"
    }

    fn aliases(&self) -> Vec<&str> {
        vec!["ASCII", "ANSI_X3.4-1968", "ISO646-US", "us", "IBM367", "cp367"]
    }

    fn character_map(&self) -> &CharacterMap {
        &ASCII_MAP
    }

    fn convert(&self, bytes: &[u8]) -> Option<char> {
        match bytes {
            [byte] if byte.is_ascii() => Some(char::from(*byte)),
            _ => None,
        }
    }

    fn encode(&self, ch: char) -> Option<EncodedChar> {
        ch.is_ascii().then(|| SmallVec::from_slice(&[ch as u8]))
    }
}

/// ISO-8859-1: every byte is the code point of the same value
#[derive(Debug, Clone, Copy, Default)]
pub struct Latin1Encoding;

impl TextEncoding for Latin1Encoding {
    fn name(&self) -> &str {
        "ISO-8859-1"
    }

    fn aliases(&self) -> Vec<&str> {
        vec!["Latin1", "Latin-1", "l1", "IBM819", "cp819"]
    }

    fn character_map(&self) -> &CharacterMap {
        &LATIN1_MAP
    }

    fn convert(&self, bytes: &[u8]) -> Option<char> {
        match bytes {
            [byte] => Some(char::from(*byte)),
            _ => None,
        }
    }

    fn encode(&self, ch: char) -> Option<EncodedChar> {
        u8::try_from(u32::from(ch))
            .ok()
            .map(|byte| SmallVec::from_slice(&[byte]))
    }
}

/// UTF-8 with strict decoding.
///
/// Continuation bytes that do not match `10xxxxxx`, overlong forms,
/// surrogates and values past `U+10FFFF` all decode as invalid. Lead bytes of
/// the historical 5- and 6-byte forms are still classified as sequence starts
/// so that the cursor skips the whole sequence.
#[derive(Debug, Clone, Copy, Default)]
pub struct Utf8Encoding;

/// Smallest code point that may use a sequence of the indexed length
const UTF8_MIN_FOR_LENGTH: [u32; MAX_SEQUENCE_LENGTH + 1] =
    [0, 0, 0x80, 0x800, 0x1_0000, 0x20_0000, 0x400_0000];

impl TextEncoding for Utf8Encoding {
    fn name(&self) -> &str {
        "UTF-8"
    }

    fn aliases(&self) -> Vec<&str> {
        vec!["UTF8"]
    }

    fn character_map(&self) -> &CharacterMap {
        &UTF8_MAP
    }

    fn convert(&self, bytes: &[u8]) -> Option<char> {
        let (&lead, continuation) = bytes.split_first()?;
        let length = match UTF8_MAP.classify(lead) {
            ByteClass::Char(ch) => return (bytes.len() == 1).then_some(ch),
            ByteClass::Invalid => return None,
            ByteClass::Sequence(length) => length,
        };
        if bytes.len() != length {
            return None;
        }

        // Lead byte keeps 7 - length payload bits
        let mut code_point = u32::from(lead) & (0x7F >> length);
        for &byte in continuation {
            if byte & 0xC0 != 0x80 {
                return None;
            }
            code_point = (code_point << 6) | u32::from(byte & 0x3F);
        }

        if code_point < UTF8_MIN_FOR_LENGTH[length] {
            return None;
        }
        char::from_u32(code_point)
    }

    fn encode(&self, ch: char) -> Option<EncodedChar> {
        let mut buffer = [0u8; 4];
        Some(SmallVec::from_slice(ch.encode_utf8(&mut buffer).as_bytes()))
    }
}

/// Serialized form of a [`TableEncoding`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableEncodingSpec {
    pub name: String,
    #[serde(default)]
    pub aliases: Vec<String>,
    /// 256 entries: a code point or `-1`
    pub map: Vec<i32>,
}

/// Single-byte encoding defined entirely by its character map, typically
/// loaded from configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "TableEncodingSpec", into = "TableEncodingSpec")]
pub struct TableEncoding {
    name: String,
    aliases: Vec<String>,
    map: CharacterMap,
}

impl TableEncoding {
    /// Creates a table encoding; the map must not announce multi-byte sequences
    pub fn new(name: impl Into<String>, map: CharacterMap) -> Result<Self, EncodingError> {
        if let Some(byte) = (0..=u8::MAX).find(|&b| map.get(b) < CharacterMap::INVALID) {
            return Err(EncodingError::UnexpectedSequence { byte });
        }
        Ok(Self {
            name: name.into(),
            aliases: Vec::new(),
            map,
        })
    }

    pub fn with_aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases.extend(aliases.into_iter().map(Into::into));
        self
    }
}

impl TryFrom<TableEncodingSpec> for TableEncoding {
    type Error = EncodingError;

    fn try_from(spec: TableEncodingSpec) -> Result<Self, Self::Error> {
        let map = CharacterMap::from_slice(&spec.map)?;
        Ok(Self::new(spec.name, map)?.with_aliases(spec.aliases))
    }
}

impl From<TableEncoding> for TableEncodingSpec {
    fn from(encoding: TableEncoding) -> Self {
        Self {
            name: encoding.name,
            aliases: encoding.aliases,
            map: encoding.map.entries().to_vec(),
        }
    }
}

impl TextEncoding for TableEncoding {
    fn name(&self) -> &str {
        &self.name
    }

    fn aliases(&self) -> Vec<&str> {
        self.aliases.iter().map(String::as_str).collect()
    }

    fn character_map(&self) -> &CharacterMap {
        &self.map
    }

    fn convert(&self, bytes: &[u8]) -> Option<char> {
        match bytes {
            [byte] => match self.map.classify(*byte) {
                ByteClass::Char(ch) => Some(ch),
                _ => None,
            },
            _ => None,
        }
    }
}

/// Name-keyed collection of encodings.
///
/// Lookup is case-insensitive and covers aliases. Registration order is
/// preserved for [`EncodingRegistry::names`].
#[derive(Default)]
pub struct EncodingRegistry {
    by_name: IndexMap<String, Arc<dyn TextEncoding>>,
}

impl EncodingRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry pre-populated with US-ASCII, ISO-8859-1 and UTF-8
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        let builtins: [Arc<dyn TextEncoding>; 3] = [
            Arc::new(AsciiEncoding),
            Arc::new(Latin1Encoding),
            Arc::new(Utf8Encoding),
        ];
        for encoding in builtins {
            registry.insert(encoding);
        }
        registry
    }

    /// Adds an encoding under its name and aliases.
    ///
    /// Fails without modifying the registry if any of those names is taken.
    pub fn register(&mut self, encoding: Arc<dyn TextEncoding>) -> Result<(), EncodingError> {
        if let Some(taken) = Self::keys_of(encoding.as_ref())
            .into_iter()
            .find(|key| self.by_name.contains_key(key))
        {
            return Err(EncodingError::DuplicateName { name: taken });
        }
        self.insert(encoding);
        Ok(())
    }

    /// Adds an encoding, replacing whatever was registered under its names
    pub fn replace(&mut self, encoding: Arc<dyn TextEncoding>) {
        self.insert(encoding);
    }

    fn insert(&mut self, encoding: Arc<dyn TextEncoding>) {
        let keys = Self::keys_of(encoding.as_ref());
        debug!(
            encoding = encoding.name(),
            aliases = keys.len() - 1,
            "registering text encoding"
        );
        for key in keys {
            if let Some(previous) = self.by_name.insert(key.clone(), Arc::clone(&encoding)) {
                debug!(name = %key, replaced = previous.name(), "encoding name reassigned");
            }
        }
    }

    fn keys_of(encoding: &dyn TextEncoding) -> Vec<String> {
        let mut keys = vec![encoding.name().to_ascii_lowercase()];
        for alias in encoding.aliases() {
            let key = alias.to_ascii_lowercase();
            if !keys.contains(&key) {
                keys.push(key);
            }
        }
        keys
    }

    /// Looks up an encoding by name or alias, ignoring case
    pub fn find(&self, name: &str) -> Option<Arc<dyn TextEncoding>> {
        self.by_name.get(&name.to_ascii_lowercase()).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(&name.to_ascii_lowercase())
    }

    /// Canonical names of the registered encodings, in registration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        let mut seen: Vec<&str> = Vec::new();
        self.by_name.values().filter_map(move |encoding| {
            let name = encoding.name();
            if seen.contains(&name) {
                None
            } else {
                seen.push(name);
                Some(name)
            }
        })
    }

    /// Number of lookup keys (names plus aliases)
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

impl fmt::Debug for EncodingRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}
