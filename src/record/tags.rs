//! Optional record tags.
//!
//! Tags are short-named, dynamically typed attributes attached to a record,
//! such as edit distance (`NM`) or read group (`RG`). A tag may be absent,
//! and its type is only known per record, so filter code classifies a value
//! before coercing it. Coercions return `None` unless the matching
//! classification holds, which keeps undefined conversions unrepresentable.
//!
//! # Examples
//!
//! ```
//! use bamsieve::{TagName, TagValue, Tags};
//!
//! let mut tags = Tags::new();
//! tags.insert("NM".parse::<TagName>().unwrap(), TagValue::Int(2));
//!
//! let nm = tags.get("NM".parse().unwrap());
//! assert!(nm.is_integer());
//! assert_eq!(nm.as_i64(), Some(2));
//! assert_eq!(nm.as_str(), None);
//!
//! // Missing tags classify as none of the three types.
//! let rg = tags.get("RG".parse().unwrap());
//! assert!(matches!(rg, TagValue::Absent));
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::FilterError;

/// Two-character tag identifier (e.g. `NM`, `RG`, `AS`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TagName([u8; 2]);

impl TagName {
    /// Build a tag name from its two ASCII bytes.
    pub const fn new(bytes: [u8; 2]) -> Self {
        Self(bytes)
    }

    /// The two bytes of the name.
    pub fn as_bytes(self) -> [u8; 2] {
        self.0
    }
}

impl FromStr for TagName {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        match bytes {
            [a, b] if a.is_ascii_graphic() && b.is_ascii_graphic() => Ok(Self([*a, *b])),
            _ => Err(FilterError::InvalidTagName(s.to_string())),
        }
    }
}

impl fmt::Display for TagName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.0[0] as char, self.0[1] as char)
    }
}

/// Decoded value of an optional tag.
#[derive(Debug, Clone, PartialEq)]
pub enum TagValue {
    /// Tag not present on the record
    Absent,
    /// Integer-typed value
    Int(i64),
    /// Float-typed value
    Float(f64),
    /// String-typed value
    Text(String),
}

impl TagValue {
    /// Check whether the value is integer-typed.
    pub fn is_integer(&self) -> bool {
        matches!(self, Self::Int(_))
    }

    /// Check whether the value is float-typed.
    pub fn is_float(&self) -> bool {
        matches!(self, Self::Float(_))
    }

    /// Check whether the value is string-typed.
    pub fn is_string(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    /// The integer value, if integer-typed.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(*value),
            _ => None,
        }
    }

    /// The float value, if float-typed.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(value) => Some(*value),
            _ => None,
        }
    }

    /// The string value, if string-typed.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }
}

static ABSENT: TagValue = TagValue::Absent;

/// Container for the optional tags of one record.
///
/// Records carry a handful of tags, stored here as ordered name/value pairs
/// with linear lookup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tags {
    entries: Vec<(TagName, TagValue)>,
}

impl Tags {
    /// Create an empty tag container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a tag by name.
    ///
    /// Returns [`TagValue::Absent`] when the record does not carry the tag.
    pub fn get(&self, name: TagName) -> &TagValue {
        self.entries
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, value)| value)
            .unwrap_or(&ABSENT)
    }

    /// Insert a tag, replacing any existing value under the same name.
    pub fn insert(&mut self, name: TagName, value: TagValue) {
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Number of tags on the record.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the record carries no tags.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
