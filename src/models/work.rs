//! Work record model.

use serde::{Deserialize, Serialize};

use super::common::{DatetimeValue, Link, TextValue, TypedKeyRef};

/// Author entry of a work, e.g. `{ "author": { "key": "/authors/OL34184A" } }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkAuthor {
    pub author: TypedKeyRef,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<TypedKeyRef>,
}

/// An Open Library work (the abstract book, independent of any edition)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Work {
    /// Record key as returned, e.g. `/works/OL45804W`
    pub key: String,
    pub title: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<TypedKeyRef>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<TextValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_sentence: Option<TextValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_publish_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authors: Option<Vec<WorkAuthor>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub covers: Option<Vec<i64>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subjects: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject_places: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject_people: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject_times: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<Link>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DatetimeValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<DatetimeValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revision: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest_revision: Option<u64>,
}

impl Work {
    /// Normalized keys of the work's authors
    pub fn author_keys(&self) -> Vec<&str> {
        self.authors
            .iter()
            .flatten()
            .map(|a| a.author.key.as_str())
            .collect()
    }
}
