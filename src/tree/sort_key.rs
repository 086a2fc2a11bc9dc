//! Presentation order derived from entry names.
//!
//! Names follow the course naming convention: `01_` numbered items, `01_a_`
//! lettered sub-items, `A_` appendices, the reserved `code` directory, and
//! everything else in alphabetical order after the appendices.

use serde::de::{self, Deserializer, SeqAccess, Visitor};
use serde::ser::{SerializeTuple, Serializer};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Name of the reserved code directory (compared case-insensitively).
pub const CODE_DIR_NAME: &str = "code";

/// Primary value used for uncategorized names.
pub const UNCATEGORIZED_PRIMARY: u64 = 999;

/// Largest primary emitted. Keys are read by JavaScript templates, so every
/// value stays within `Number.MAX_SAFE_INTEGER`.
pub const MAX_PRIMARY: u64 = (1u64 << 53) - 1;

/// Ordering category, compared first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Numbered = 0,
    Appendix = 1,
    Uncategorized = 2,
    Code = 3,
}

impl Category {
    fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Category::Numbered),
            1 => Some(Category::Appendix),
            2 => Some(Category::Uncategorized),
            3 => Some(Category::Code),
            _ => None,
        }
    }
}

/// 4-tuple total order over entry names: category, primary, sub, tiebreak.
///
/// Serialized as a JSON array `[category, primary, sub, tiebreak]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SortKey {
    pub category: Category,
    pub primary: u64,
    pub sub: u8,
    pub tiebreak: String,
}

impl SortKey {
    /// Derive the key for an entry name. Pure: no I/O, no sibling context.
    pub fn from_name(name: &str) -> Self {
        if let Some((number, rest)) = split_numeric_prefix(name) {
            return match lettered_sub_index(rest) {
                Some(letter) => SortKey {
                    category: Category::Numbered,
                    primary: number,
                    sub: 1,
                    tiebreak: letter.to_string(),
                },
                None => SortKey {
                    category: Category::Numbered,
                    primary: number,
                    sub: 0,
                    tiebreak: String::new(),
                },
            };
        }

        let bytes = name.as_bytes();
        if bytes.len() >= 2 && bytes[0].is_ascii_uppercase() && bytes[1] == b'_' {
            return SortKey {
                category: Category::Appendix,
                primary: u64::from(bytes[0]),
                sub: 0,
                tiebreak: String::new(),
            };
        }

        if name.eq_ignore_ascii_case(CODE_DIR_NAME) {
            return SortKey {
                category: Category::Code,
                primary: 0,
                sub: 0,
                tiebreak: String::new(),
            };
        }

        SortKey {
            category: Category::Uncategorized,
            primary: UNCATEGORIZED_PRIMARY,
            sub: 0,
            tiebreak: name.to_lowercase(),
        }
    }
}

/// Shorthand for [`SortKey::from_name`].
pub fn sort_key(name: &str) -> SortKey {
    SortKey::from_name(name)
}

/// Split `NN_rest` into the parsed number and `rest`.
///
/// Values beyond [`MAX_PRIMARY`] saturate so oversized prefixes still sort
/// numerically after every realistic prefix.
fn split_numeric_prefix(name: &str) -> Option<(u64, &str)> {
    let digits = name.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 || name.as_bytes().get(digits) != Some(&b'_') {
        return None;
    }
    let number = name[..digits].bytes().fold(0u64, |acc, d| {
        acc.saturating_mul(10)
            .saturating_add(u64::from(d - b'0'))
            .min(MAX_PRIMARY)
    });
    Some((number, &name[digits + 1..]))
}

/// `x_...` with a lowercase ASCII letter yields `x`.
fn lettered_sub_index(rest: &str) -> Option<char> {
    let bytes = rest.as_bytes();
    if bytes.len() >= 2 && bytes[0].is_ascii_lowercase() && bytes[1] == b'_' {
        Some(char::from(bytes[0]))
    } else {
        None
    }
}

impl Ord for SortKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.category
            .cmp(&other.category)
            .then(self.primary.cmp(&other.primary))
            .then(self.sub.cmp(&other.sub))
            .then_with(|| self.tiebreak.cmp(&other.tiebreak))
    }
}

impl PartialOrd for SortKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Serialize for SortKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(4)?;
        tuple.serialize_element(&(self.category as u8))?;
        tuple.serialize_element(&self.primary)?;
        tuple.serialize_element(&self.sub)?;
        tuple.serialize_element(&self.tiebreak)?;
        tuple.end()
    }
}

impl<'de> Deserialize<'de> for SortKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SortKeyVisitor;

        impl<'de> Visitor<'de> for SortKeyVisitor {
            type Value = SortKey;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a [category, primary, sub, tiebreak] array")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<SortKey, A::Error> {
                let category: u8 = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                let primary: u64 = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(1, &self))?;
                let sub: u8 = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(2, &self))?;
                let tiebreak: String = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(3, &self))?;
                let category = Category::from_u8(category).ok_or_else(|| {
                    de::Error::custom(format!("invalid sort category {}", category))
                })?;
                Ok(SortKey {
                    category,
                    primary,
                    sub,
                    tiebreak,
                })
            }
        }

        deserializer.deserialize_tuple(4, SortKeyVisitor)
    }
}
