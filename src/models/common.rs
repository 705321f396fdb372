//! Shapes shared by every Open Library record: normalized text/datetime values,
//! typed key references, links and pagination.

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::ops::Deref;
use std::sync::LazyLock;

use crate::config::{DEFAULT_LIMIT, DEFAULT_OFFSET, MAX_LIMIT, MIN_LIMIT};
use crate::error::ValidationError;

/// Two-segment typed key path such as `/authors/OL34184A`
#[allow(clippy::expect_used)]
static KEY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/[^/]+/[^/]+$").expect("key regex is valid"));

/// Normalize a typed key path to its bare identifier.
///
/// `/authors/OL34184A` becomes `OL34184A`; anything that is not a two-segment path
/// is returned unchanged.
pub fn parse_key(key: &str) -> String {
    if KEY_PATTERN.is_match(key) {
        if let Some(id) = key.split('/').nth(2) {
            return id.to_string();
        }
    }

    key.to_string()
}

pub(crate) fn deserialize_key<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(parse_key(&raw))
}

pub(crate) fn deserialize_keys<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Vec<String>>::deserialize(deserializer)?;
    Ok(raw.map(|keys| keys.iter().map(|k| parse_key(k)).collect()))
}

/// Open Library wraps many values as `{ "type": "/type/...", "value": "..." }`
#[derive(Deserialize)]
struct TypedValue {
    #[serde(rename = "type")]
    #[allow(dead_code)]
    kind: String,
    value: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TextRepr {
    Plain(String),
    Typed(TypedValue),
}

/// Free text that may arrive as a bare string or as a `/type/text` capsule.
///
/// Both representations collapse to the plain string; serialization always emits
/// the bare string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TextValue(String);

impl TextValue {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl<'de> Deserialize<'de> for TextValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match TextRepr::deserialize(deserializer)? {
            TextRepr::Plain(s) => Ok(Self(s)),
            TextRepr::Typed(t) => Ok(Self(t.value)),
        }
    }
}

/// Timestamp delivered as a mandatory `/type/datetime` capsule, kept as its ISO-8601
/// string (e.g. `2009-10-15T11:34:21.437031`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct DatetimeValue(String);

impl DatetimeValue {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse the timestamp. Open Library omits the zone, so the result is naive.
    pub fn to_datetime(&self) -> Option<chrono::NaiveDateTime> {
        chrono::NaiveDateTime::parse_from_str(&self.0, "%Y-%m-%dT%H:%M:%S%.f").ok()
    }
}

impl<'de> Deserialize<'de> for DatetimeValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let typed = TypedValue::deserialize(deserializer)?;
        Ok(Self(typed.value))
    }
}

macro_rules! impl_str_newtype {
    ($name:ident) => {
        impl Deref for $name {
            type Target = str;

            fn deref(&self) -> &str {
                &self.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> String {
                value.0
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }
    };
}

impl_str_newtype!(TextValue);
impl_str_newtype!(DatetimeValue);

/// Reference to another record, e.g. `{ "key": "/type/author" }`.
///
/// The key is normalized with [`parse_key`], so `/type/author` is stored as `author`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypedKeyRef {
    #[serde(deserialize_with = "deserialize_key")]
    pub key: String,
}

impl TypedKeyRef {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

/// External link attached to a record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub title: String,
    pub url: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<TypedKeyRef>,
}

/// Range-checked `limit`/`offset` window for search requests.
///
/// Values outside `limit ∈ [1, 1000]` or `offset ≥ 0` are rejected, never clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPagination")]
pub struct PaginationInput {
    limit: u32,
    offset: u32,
}

impl PaginationInput {
    /// Create a validated pagination window
    pub fn new(limit: i64, offset: i64) -> Result<Self, ValidationError> {
        Ok(Self {
            limit: check_limit(limit)?,
            offset: check_offset(offset)?,
        })
    }

    /// Replace the limit, keeping the offset
    pub fn with_limit(self, limit: i64) -> Result<Self, ValidationError> {
        Self::new(limit, i64::from(self.offset))
    }

    /// Replace the offset, keeping the limit
    pub fn with_offset(self, offset: i64) -> Result<Self, ValidationError> {
        Self::new(i64::from(self.limit), offset)
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn offset(&self) -> u32 {
        self.offset
    }
}

impl Default for PaginationInput {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: DEFAULT_OFFSET,
        }
    }
}

fn check_limit(limit: i64) -> Result<u32, ValidationError> {
    if limit < i64::from(MIN_LIMIT) || limit > i64::from(MAX_LIMIT) {
        return Err(ValidationError::LimitOutOfRange {
            value: limit,
            min: MIN_LIMIT,
            max: MAX_LIMIT,
        });
    }
    // range-checked above
    Ok(limit as u32)
}

fn check_offset(offset: i64) -> Result<u32, ValidationError> {
    if offset < 0 {
        return Err(ValidationError::NegativeOffset(offset));
    }
    u32::try_from(offset).map_err(|_| ValidationError::OffsetTooLarge(offset))
}

#[derive(Deserialize)]
struct RawPagination {
    #[serde(default = "default_limit")]
    limit: i64,
    #[serde(default)]
    offset: i64,
}

fn default_limit() -> i64 {
    i64::from(DEFAULT_LIMIT)
}

impl TryFrom<RawPagination> for PaginationInput {
    type Error = ValidationError;

    fn try_from(raw: RawPagination) -> Result<Self, Self::Error> {
        Self::new(raw.limit, raw.offset)
    }
}

/// One page of search results, as returned by the search endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginationOutput<Doc> {
    pub docs: Vec<Doc>,
    pub start: u64,
    #[serde(rename = "numFound")]
    pub num_found: u64,
    #[serde(rename = "numFoundExact")]
    pub num_found_exact: bool,
}

impl<Doc> PaginationOutput<Doc> {
    /// Page with no documents starting at `start`
    pub fn empty(start: u64) -> Self {
        Self {
            docs: Vec::new(),
            start,
            num_found: 0,
            num_found_exact: false,
        }
    }
}
