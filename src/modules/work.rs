//! Work lookup.

use crate::error::Result;
use crate::fetcher::{Fetcher, QueryParams};
use crate::models::Work;

/// Work endpoint: `/works/{key}.json`
#[derive(Debug, Clone)]
pub struct WorkModule {
    fetcher: Fetcher,
}

impl WorkModule {
    pub fn new(fetcher: Fetcher) -> Self {
        Self { fetcher }
    }

    /// Fetch one work by key (`OL45804W`); the trimmed input is used as given
    pub async fn get(&self, key: &str) -> Result<Work> {
        let path = format!("/works/{}.json", key.trim());
        self.fetcher.fetch_validated(&path, &QueryParams::new()).await
    }
}
