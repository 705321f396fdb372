//! Cover image URL parameters.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which kind of record the cover belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CoverResource {
    #[serde(rename = "a")]
    Author,
    #[serde(rename = "b")]
    Book,
}

impl CoverResource {
    /// Path segment used by the covers service
    pub fn as_str(&self) -> &'static str {
        match self {
            CoverResource::Author => "a",
            CoverResource::Book => "b",
        }
    }
}

/// Identifier scheme of the cover key
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoverKeyType {
    #[default]
    Id,
    Isbn,
    Oclc,
    Lccn,
    Olid,
}

impl CoverKeyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CoverKeyType::Id => "id",
            CoverKeyType::Isbn => "isbn",
            CoverKeyType::Oclc => "oclc",
            CoverKeyType::Lccn => "lccn",
            CoverKeyType::Olid => "olid",
        }
    }
}

/// Image size: small, medium (default) or large
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CoverSize {
    S,
    #[default]
    M,
    L,
}

impl CoverSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            CoverSize::S => "S",
            CoverSize::M => "M",
            CoverSize::L => "L",
        }
    }
}

impl fmt::Display for CoverResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for CoverKeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for CoverSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Key identifying the cover: an Open Library id, ISBN, OLID, ... or a numeric cover id
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CoverKey {
    Number(u64),
    Text(String),
}

impl CoverKey {
    /// Empty strings and the number zero do not identify a cover
    pub fn is_empty(&self) -> bool {
        match self {
            CoverKey::Number(n) => *n == 0,
            CoverKey::Text(s) => s.is_empty(),
        }
    }
}

impl fmt::Display for CoverKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoverKey::Number(n) => write!(f, "{}", n),
            CoverKey::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for CoverKey {
    fn from(value: &str) -> Self {
        CoverKey::Text(value.to_string())
    }
}

impl From<String> for CoverKey {
    fn from(value: String) -> Self {
        CoverKey::Text(value)
    }
}

impl From<&String> for CoverKey {
    fn from(value: &String) -> Self {
        CoverKey::Text(value.clone())
    }
}

impl From<u64> for CoverKey {
    fn from(value: u64) -> Self {
        CoverKey::Number(value)
    }
}

impl From<u32> for CoverKey {
    fn from(value: u32) -> Self {
        CoverKey::Number(u64::from(value))
    }
}
