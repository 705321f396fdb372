//! Response and request shapes for the Open Library API.
//!
//! Each model deserializes straight from the API's JSON and normalizes it on the way
//! in: text capsules collapse to strings, typed key paths collapse to identifiers,
//! and pagination windows are range-checked.

mod author;
mod common;
mod cover;
mod search;
mod work;

pub use author::{Author, AuthorSearchInput, AuthorSearchOutput, AuthorType, AuthorTypeLiteral};
pub use common::{
    parse_key, DatetimeValue, Link, PaginationInput, PaginationOutput, TextValue, TypedKeyRef,
};
pub use cover::{CoverKey, CoverKeyType, CoverResource, CoverSize};
pub use search::{SearchDoc, SearchInput, SearchOutput, SearchSort};
pub use work::{Work, WorkAuthor};
