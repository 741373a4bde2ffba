//! Tolerant parser for the quoted key/value string-table grammar.
//!
//! A table file is a sequence of `"key" = "value";` statements interleaved
//! with `/* ... */` block comments and `//` line comments. Comments carry no
//! semantic weight and are stripped before scanning. Malformed fragments are
//! skipped rather than failing the file; the one structural error the parser
//! does report is a duplicate key, where the first occurrence stays the value
//! of record.

use crate::error::DecodeError;
use indexmap::IndexMap;
use indexmap::map::Entry;
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

static BLOCK_COMMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)/\*.*?\*/").unwrap());

static LINE_COMMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)//.*$").unwrap());

/// One `"key" = "value";` statement. A literal double quote inside either
/// side is escaped as `\"`; every backslash escape is captured verbatim, so
/// values round-trip byte-for-byte into sync output.
static STATEMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""([^"\\]*(?:\\.[^"\\]*)*)"\s*=\s*"([^"\\]*(?:\\.[^"\\]*)*)"\s*;"#).unwrap()
});

/// A structural problem found while parsing a table.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum StructuralError {
    /// The same key appeared more than once. The first value is kept.
    #[error("duplicate key: {key}")]
    DuplicateKey { key: String },
}

/// An ordered string table parsed from one language's resource file.
///
/// Entries keep first-occurrence order of appearance in the source text, and
/// the key of each entry is unique (later duplicates are recorded in
/// [`errors`](Self::errors) instead of overwriting).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StringsTable {
    entries: IndexMap<String, String>,
    errors: Vec<StructuralError>,
}

impl StringsTable {
    /// Build a table from literal pairs, applying the same first-seen-wins
    /// duplicate policy as [`parse`].
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut table = Self::default();
        for (key, value) in pairs {
            table.insert(key.into(), value.into());
        }
        table
    }

    fn insert(&mut self, key: String, value: String) {
        match self.entries.entry(key) {
            Entry::Occupied(occupied) => {
                self.errors.push(StructuralError::DuplicateKey {
                    key: occupied.key().clone(),
                });
            },
            Entry::Vacant(vacant) => {
                vacant.insert(value);
            },
        }
    }

    /// Look up the value of record for a key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys in first-occurrence order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Pairs in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Structural errors found while parsing.
    pub fn errors(&self) -> &[StructuralError] {
        &self.errors
    }
}

/// Parse decoded table text.
///
/// Never fails: fragments that do not match the statement grammar are simply
/// not recognized as pairs.
pub fn parse(content: &str) -> StringsTable {
    let without_blocks = BLOCK_COMMENT.replace_all(content, "");
    let stripped = LINE_COMMENT.replace_all(&without_blocks, "");

    let mut table = StringsTable::default();
    for caps in STATEMENT.captures_iter(&stripped) {
        table.insert(caps[1].to_string(), caps[2].to_string());
    }
    table
}

/// Decode raw table bytes, then [`parse`] them.
pub fn parse_bytes(bytes: &[u8]) -> Result<StringsTable, DecodeError> {
    Ok(parse(&decode(bytes)?))
}

/// Decode raw table bytes as UTF-8, falling back to UTF-16 (BOM-aware,
/// little-endian when no BOM is present).
pub fn decode(bytes: &[u8]) -> Result<String, DecodeError> {
    if let Ok(text) = std::str::from_utf8(bytes) {
        return Ok(text.strip_prefix('\u{feff}').unwrap_or(text).to_string());
    }

    tracing::debug!("content is not valid UTF-8, retrying as UTF-16");
    decode_utf16(bytes)
}

fn decode_utf16(bytes: &[u8]) -> Result<String, DecodeError> {
    let (little_endian, body) = match bytes {
        [0xff, 0xfe, rest @ ..] => (true, rest),
        [0xfe, 0xff, rest @ ..] => (false, rest),
        _ => (true, bytes),
    };

    if body.len() % 2 != 0 {
        return Err(DecodeError::TruncatedUtf16);
    }

    let units: Vec<u16> = body
        .chunks_exact(2)
        .map(|pair| {
            if little_endian {
                u16::from_le_bytes([pair[0], pair[1]])
            } else {
                u16::from_be_bytes([pair[0], pair[1]])
            }
        })
        .collect();

    String::from_utf16(&units).map_err(|_| DecodeError::InvalidEncoding)
}
