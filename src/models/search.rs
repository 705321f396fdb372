//! General search request and response models.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::common::{deserialize_key, deserialize_keys, PaginationInput, PaginationOutput};
use crate::error::ValidationError;

/// Sort order accepted by `/search.json`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SearchSort {
    #[serde(rename = "editions")]
    Editions,
    #[serde(rename = "old")]
    Old,
    #[serde(rename = "new")]
    New,
    #[serde(rename = "rating")]
    Rating,
    #[serde(rename = "rating asc")]
    RatingAsc,
    #[serde(rename = "rating desc")]
    RatingDesc,
    #[serde(rename = "readinglog")]
    ReadingLog,
    #[serde(rename = "want_to_read")]
    WantToRead,
    #[serde(rename = "currently_reading")]
    CurrentlyReading,
    #[serde(rename = "already_read")]
    AlreadyRead,
    #[serde(rename = "title")]
    Title,
    #[serde(rename = "scans")]
    Scans,
    #[serde(rename = "lcc_sort")]
    LccSort,
    #[serde(rename = "lcc_sort asc")]
    LccSortAsc,
    #[serde(rename = "lcc_sort desc")]
    LccSortDesc,
    #[serde(rename = "ddc_sort")]
    DdcSort,
    #[serde(rename = "ddc_sort asc")]
    DdcSortAsc,
    #[serde(rename = "ddc_sort desc")]
    DdcSortDesc,
    #[serde(rename = "ebook_access")]
    EbookAccess,
    #[serde(rename = "ebook_access asc")]
    EbookAccessAsc,
    #[serde(rename = "ebook_access desc")]
    EbookAccessDesc,
    #[serde(rename = "key")]
    Key,
    #[serde(rename = "key asc")]
    KeyAsc,
    #[serde(rename = "key desc")]
    KeyDesc,
    #[serde(rename = "random")]
    Random,
    #[serde(rename = "random asc")]
    RandomAsc,
    #[serde(rename = "random desc")]
    RandomDesc,
    #[serde(rename = "random.hourly")]
    RandomHourly,
    #[serde(rename = "random.daily")]
    RandomDaily,
}

impl SearchSort {
    pub const ALL: [SearchSort; 29] = [
        SearchSort::Editions,
        SearchSort::Old,
        SearchSort::New,
        SearchSort::Rating,
        SearchSort::RatingAsc,
        SearchSort::RatingDesc,
        SearchSort::ReadingLog,
        SearchSort::WantToRead,
        SearchSort::CurrentlyReading,
        SearchSort::AlreadyRead,
        SearchSort::Title,
        SearchSort::Scans,
        SearchSort::LccSort,
        SearchSort::LccSortAsc,
        SearchSort::LccSortDesc,
        SearchSort::DdcSort,
        SearchSort::DdcSortAsc,
        SearchSort::DdcSortDesc,
        SearchSort::EbookAccess,
        SearchSort::EbookAccessAsc,
        SearchSort::EbookAccessDesc,
        SearchSort::Key,
        SearchSort::KeyAsc,
        SearchSort::KeyDesc,
        SearchSort::Random,
        SearchSort::RandomAsc,
        SearchSort::RandomDesc,
        SearchSort::RandomHourly,
        SearchSort::RandomDaily,
    ];

    /// The token sent as the `sort` query parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchSort::Editions => "editions",
            SearchSort::Old => "old",
            SearchSort::New => "new",
            SearchSort::Rating => "rating",
            SearchSort::RatingAsc => "rating asc",
            SearchSort::RatingDesc => "rating desc",
            SearchSort::ReadingLog => "readinglog",
            SearchSort::WantToRead => "want_to_read",
            SearchSort::CurrentlyReading => "currently_reading",
            SearchSort::AlreadyRead => "already_read",
            SearchSort::Title => "title",
            SearchSort::Scans => "scans",
            SearchSort::LccSort => "lcc_sort",
            SearchSort::LccSortAsc => "lcc_sort asc",
            SearchSort::LccSortDesc => "lcc_sort desc",
            SearchSort::DdcSort => "ddc_sort",
            SearchSort::DdcSortAsc => "ddc_sort asc",
            SearchSort::DdcSortDesc => "ddc_sort desc",
            SearchSort::EbookAccess => "ebook_access",
            SearchSort::EbookAccessAsc => "ebook_access asc",
            SearchSort::EbookAccessDesc => "ebook_access desc",
            SearchSort::Key => "key",
            SearchSort::KeyAsc => "key asc",
            SearchSort::KeyDesc => "key desc",
            SearchSort::Random => "random",
            SearchSort::RandomAsc => "random asc",
            SearchSort::RandomDesc => "random desc",
            SearchSort::RandomHourly => "random.hourly",
            SearchSort::RandomDaily => "random.daily",
        }
    }
}

impl fmt::Display for SearchSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchSort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SearchSort::ALL
            .iter()
            .copied()
            .find(|sort| sort.as_str() == s)
            .ok_or_else(|| format!("unknown sort order: {}", s))
    }
}

/// Options for the general search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchInput {
    #[serde(flatten)]
    pub pagination: PaginationInput,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<SearchSort>,
}

impl SearchInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a validated limit
    pub fn limit(mut self, limit: i64) -> Result<Self, ValidationError> {
        self.pagination = self.pagination.with_limit(limit)?;
        Ok(self)
    }

    /// Set a validated offset
    pub fn offset(mut self, offset: i64) -> Result<Self, ValidationError> {
        self.pagination = self.pagination.with_offset(offset)?;
        Ok(self)
    }

    /// Set the sort order
    pub fn sort(mut self, sort: SearchSort) -> Self {
        self.sort = Some(sort);
        self
    }
}

impl From<PaginationInput> for SearchInput {
    fn from(pagination: PaginationInput) -> Self {
        Self {
            pagination,
            sort: None,
        }
    }
}

/// A work matched by `/search.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchDoc {
    /// Normalized work key, e.g. `OL45804W`
    #[serde(deserialize_with = "deserialize_key")]
    pub key: String,
    pub title: String,

    /// Normalized author keys
    #[serde(
        default,
        deserialize_with = "deserialize_keys",
        skip_serializing_if = "Option::is_none"
    )]
    pub author_key: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_name: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_edition_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_i: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ebook_access: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edition_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_publish_year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_fulltext: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ia: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ia_collection: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lending_edition_s: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lending_identifier_s: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_scan_b: Option<bool>,
}

/// Response of `/search.json`.
///
/// The endpoint reports pagination twice: the `numFound`/`start` pair shared with
/// the other search endpoints, and its own `num_found`/`offset` pair. Both are kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchOutput {
    #[serde(flatten)]
    pub page: PaginationOutput<SearchDoc>,
    pub num_found: u64,
    pub documentation_url: String,
    pub q: String,
    pub offset: Option<u64>,
}
