//! Author record model.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::common::{DatetimeValue, Link, PaginationInput, PaginationOutput, TextValue, TypedKeyRef};

/// Marker for the literal `"author"` type used by search documents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuthorTypeLiteral {
    #[serde(rename = "author")]
    Author,
}

/// The `type` of an author record.
///
/// Full records carry `{ "key": "/type/author" }`; search documents carry the bare
/// string `"author"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AuthorType {
    Reference(TypedKeyRef),
    Literal(AuthorTypeLiteral),
}

/// An Open Library author.
///
/// Only `key`, `name` and `type` are guaranteed; everything else depends on how
/// complete the record is and which endpoint returned it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    /// Record key as returned, e.g. `/authors/OL34184A` or `OL34184A`
    pub key: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: AuthorType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<TextValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternate_names: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub death_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_subjects: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_work: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work_count: Option<u64>,

    // Reading-log and rating statistics (search documents only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ratings_average: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ratings_sortable: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ratings_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ratings_count_1: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ratings_count_2: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ratings_count_3: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ratings_count_4: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ratings_count_5: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub want_to_read_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub already_read_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currently_reading_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub readinglog_count: Option<u64>,
    #[serde(rename = "_version_", default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<Link>>,
    /// Identifiers in other catalogues (wikidata, viaf, isni, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote_ids: Option<HashMap<String, String>>,
    /// Cover ids of author photos; Open Library uses `-1` for removed photos
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photos: Option<Vec<i64>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuller_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personal_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DatetimeValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<DatetimeValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revision: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest_revision: Option<u64>,
}

/// Options for `authors().search`
pub type AuthorSearchInput = PaginationInput;

/// Page of authors returned by `authors().search`
pub type AuthorSearchOutput = PaginationOutput<Author>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn roald_dahl() -> serde_json::Value {
        json!({
            "key": "/authors/OL34184A",
            "name": "Roald Dahl",
            "type": { "key": "/type/author" }
        })
    }

    #[test]
    fn test_minimal_author() {
        let author: Author = serde_json::from_value(roald_dahl()).unwrap();
        assert_eq!(author.key, "/authors/OL34184A");
        assert_eq!(author.name, "Roald Dahl");
        assert_eq!(author.kind, AuthorType::Reference(TypedKeyRef::new("author")));
        assert!(author.bio.is_none());
        assert!(author.links.is_none());
    }

    #[test]
    fn test_author_type_literal() {
        let author: Author = serde_json::from_value(json!({
            "key": "OL123A",
            "name": "Jane Doe",
            "type": "author"
        }))
        .unwrap();
        assert_eq!(author.kind, AuthorType::Literal(AuthorTypeLiteral::Author));
        assert_eq!(serde_json::to_value(&author.kind).unwrap(), json!("author"));
    }

    #[test]
    fn test_author_type_rejects_other_strings() {
        let result = serde_json::from_value::<Author>(json!({
            "key": "/authors/OL34184A",
            "name": "Roald Dahl",
            "type": "/type/author"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_author_bio_forms() {
        let mut value = roald_dahl();
        value["bio"] = json!("British novelist and poet.");
        let author: Author = serde_json::from_value(value).unwrap();
        assert_eq!(author.bio.as_deref(), Some("British novelist and poet."));

        let mut value = roald_dahl();
        value["bio"] = json!({ "type": "/type/text", "value": "British novelist." });
        let author: Author = serde_json::from_value(value).unwrap();
        assert_eq!(author.bio.as_deref(), Some("British novelist."));
    }

    #[test]
    fn test_full_author_record() {
        let author: Author = serde_json::from_value(json!({
            "key": "/authors/OL34184A",
            "name": "Roald Dahl",
            "type": { "key": "/type/author" },
            "alternate_names": ["R. Dahl", "Ronald Dahl"],
            "birth_date": "13 September 1916",
            "death_date": "23 November 1990",
            "personal_name": "Roald Dahl",
            "links": [
                { "title": "Wikipedia", "url": "https://en.wikipedia.org/wiki/Roald_Dahl" }
            ],
            "remote_ids": { "viaf": "108159131", "wikidata": "Q25161" },
            "photos": [6606469, -1],
            "created": { "type": "/type/datetime", "value": "2008-04-01T03:28:50.625462" },
            "last_modified": { "type": "/type/datetime", "value": "2023-05-09T18:57:07.041917" },
            "revision": 42,
            "latest_revision": 42,
            "source_records": ["ignored:unknown-field"]
        }))
        .unwrap();

        assert_eq!(
            author.alternate_names,
            Some(vec!["R. Dahl".to_string(), "Ronald Dahl".to_string()])
        );
        let links = author.links.unwrap();
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].title, "Wikipedia");
        assert!(links[0].url.contains("wikipedia"));
        assert_eq!(
            author.remote_ids.unwrap().get("wikidata").map(String::as_str),
            Some("Q25161")
        );
        assert_eq!(author.photos, Some(vec![6606469, -1]));
        assert_eq!(author.created.unwrap(), "2008-04-01T03:28:50.625462");
        assert_eq!(author.revision, Some(42));
    }

    #[test]
    fn test_search_author_document() {
        let author: Author = serde_json::from_value(json!({
            "key": "OL34184A",
            "name": "Roald Dahl",
            "type": "author",
            "top_work": "Charlie and the Chocolate Factory",
            "work_count": 512,
            "top_subjects": ["Children's fiction"],
            "ratings_average": 4.1,
            "ratings_count": 2100,
            "want_to_read_count": 9000,
            "_version_": 1793245677393461248u64
        }))
        .unwrap();

        assert_eq!(author.work_count, Some(512));
        assert_eq!(author.ratings_average, Some(4.1));
        assert_eq!(author.version, Some(1793245677393461248));
    }

    #[test]
    fn test_author_missing_required_fields() {
        assert!(serde_json::from_value::<Author>(json!({
            "name": "Roald Dahl",
            "type": "author"
        }))
        .is_err());
        assert!(serde_json::from_value::<Author>(json!({
            "key": "/authors/OL34184A",
            "type": "author"
        }))
        .is_err());
        assert!(serde_json::from_value::<Author>(json!({
            "key": "/authors/OL34184A",
            "name": "Roald Dahl"
        }))
        .is_err());
    }

    #[test]
    fn test_author_search_output() {
        let page: AuthorSearchOutput = serde_json::from_value(json!({
            "start": 0,
            "numFound": 2,
            "numFoundExact": true,
            "docs": [
                roald_dahl(),
                { "key": "OL123A", "name": "Jane Doe", "type": "author" }
            ]
        }))
        .unwrap();

        assert_eq!(page.num_found, 2);
        assert!(page.num_found_exact);
        assert_eq!(page.docs.len(), 2);
        assert_eq!(page.docs[0].name, "Roald Dahl");

        assert!(serde_json::from_value::<AuthorSearchOutput>(json!({
            "start": 0,
            "numFound": 0,
            "numFoundExact": false,
            "docs": [{ "invalid": "author" }]
        }))
        .is_err());
        assert!(
            serde_json::from_value::<AuthorSearchOutput>(json!({ "start": 0, "numFound": 0 }))
                .is_err()
        );
    }
}
