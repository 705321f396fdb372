//! Client facade.
//!
//! [`OpenLibrary`] bundles the resource modules around one shared HTTP client.
//!
//! ```rust,no_run
//! # async fn run() -> olib::Result<()> {
//! let client = olib::create_open_library_client();
//! let page = client.authors().search("Roald Dahl", None).await?;
//! for author in &page.docs {
//!     println!("{} ({})", author.name, author.key);
//! }
//! # Ok(())
//! # }
//! ```

use std::sync::LazyLock;
use url::Url;

use crate::config::{ClientConfig, BASE_URL};
use crate::error::Result;
use crate::fetcher::Fetcher;
use crate::models::{SearchInput, SearchOutput};
use crate::modules::{AuthorModule, CoverModule, SearchModule, WorkModule};
use crate::utils::HttpClient;

#[allow(clippy::expect_used)]
static DEFAULT_BASE_URL: LazyLock<Url> =
    LazyLock::new(|| Url::parse(BASE_URL).expect("default base URL is valid"));

/// Typed Open Library client
#[derive(Debug, Clone)]
pub struct OpenLibrary {
    authors: AuthorModule,
    works: WorkModule,
    search: SearchModule,
    covers: CoverModule,
}

impl OpenLibrary {
    /// Client against the public origins with the default user agent
    pub fn new() -> Self {
        let config = ClientConfig::default();
        Self::assemble(
            HttpClient::with_user_agent(config.user_agent),
            DEFAULT_BASE_URL.clone(),
            config.covers_base_url,
        )
    }

    /// Client from explicit configuration.
    ///
    /// Fails only when `base_url` is not an absolute URL.
    pub fn with_config(config: ClientConfig) -> std::result::Result<Self, url::ParseError> {
        let base_url = Url::parse(&config.base_url)?;
        Ok(Self::assemble(
            HttpClient::with_user_agent(config.user_agent),
            base_url,
            config.covers_base_url,
        ))
    }

    fn assemble(http: HttpClient, base_url: Url, covers_base_url: String) -> Self {
        let fetcher = Fetcher::new(http, base_url);
        Self {
            authors: AuthorModule::new(fetcher.clone()),
            works: WorkModule::new(fetcher.clone()),
            search: SearchModule::new(fetcher),
            covers: CoverModule::new(covers_base_url),
        }
    }

    /// Author search and lookup
    pub fn authors(&self) -> &AuthorModule {
        &self.authors
    }

    /// Work lookup
    pub fn works(&self) -> &WorkModule {
        &self.works
    }

    /// Cover URL builders
    pub fn covers(&self) -> &CoverModule {
        &self.covers
    }

    /// General search over works
    pub async fn search(&self, query: &str, input: Option<SearchInput>) -> Result<SearchOutput> {
        self.search.search(query, input).await
    }
}

impl Default for OpenLibrary {
    fn default() -> Self {
        Self::new()
    }
}

/// Create a client with default settings
pub fn create_open_library_client() -> OpenLibrary {
    OpenLibrary::new()
}

/// General search with a default client
pub async fn search(query: &str, input: Option<SearchInput>) -> Result<SearchOutput> {
    OpenLibrary::new().search(query, input).await
}
