//! General search over works (`/search.json`).

use tracing::debug;

use crate::config::DOCS_BASE_URL;
use crate::error::Result;
use crate::fetcher::{Fetcher, QueryParams};
use crate::models::{PaginationOutput, SearchInput, SearchOutput};

/// Search endpoint wrapper
#[derive(Debug, Clone)]
pub struct SearchModule {
    fetcher: Fetcher,
}

impl SearchModule {
    pub fn new(fetcher: Fetcher) -> Self {
        Self { fetcher }
    }

    /// Search works.
    ///
    /// A blank query returns an empty result without touching the network. Otherwise
    /// the query is sent as given, along with `limit`, `offset` and the optional
    /// `sort`.
    pub async fn search(&self, query: &str, input: Option<SearchInput>) -> Result<SearchOutput> {
        let input = input.unwrap_or_default();
        let offset = u64::from(input.pagination.offset());

        if query.trim().is_empty() {
            debug!("Blank search query, skipping request");
            return Ok(empty_output(offset));
        }

        let params = QueryParams::new()
            .set("q", query)
            .set("limit", input.pagination.limit())
            .set("offset", input.pagination.offset())
            .set_opt("sort", input.sort.map(|s| s.as_str()));

        self.fetcher.fetch_validated("/search.json", &params).await
    }
}

fn empty_output(offset: u64) -> SearchOutput {
    SearchOutput {
        page: PaginationOutput::empty(offset),
        num_found: 0,
        documentation_url: format!("{}/search", DOCS_BASE_URL),
        q: String::new(),
        offset: Some(offset),
    }
}
