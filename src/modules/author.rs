//! Author lookup and search.

use tracing::debug;

use crate::error::Result;
use crate::fetcher::{Fetcher, QueryParams};
use crate::models::{Author, AuthorSearchInput, AuthorSearchOutput, PaginationOutput};

/// Author endpoints: `/search/authors.json` and `/authors/{key}.json`
#[derive(Debug, Clone)]
pub struct AuthorModule {
    fetcher: Fetcher,
}

impl AuthorModule {
    pub fn new(fetcher: Fetcher) -> Self {
        Self { fetcher }
    }

    /// Search authors by name.
    ///
    /// A blank query returns an empty page without touching the network.
    pub async fn search(
        &self,
        query: &str,
        input: Option<AuthorSearchInput>,
    ) -> Result<AuthorSearchOutput> {
        let q = query.trim();
        let input = input.unwrap_or_default();

        if q.is_empty() {
            debug!("Blank author query, skipping request");
            return Ok(PaginationOutput::empty(u64::from(input.offset())));
        }

        let params = QueryParams::new()
            .set("q", q)
            .set("limit", input.limit())
            .set("offset", input.offset());

        self.fetcher
            .fetch_validated("/search/authors.json", &params)
            .await
    }

    /// Fetch one author by key.
    ///
    /// Accepts a bare id (`OL34184A`) or the full path (`/authors/OL34184A`); the
    /// trimmed input is placed into the request path as given.
    pub async fn get(&self, key: &str) -> Result<Author> {
        let path = format!("/authors/{}.json", key.trim());
        self.fetcher.fetch_validated(&path, &QueryParams::new()).await
    }
}
