//! HTTP client utilities.

use reqwest::header::USER_AGENT;
use reqwest::{Client, RequestBuilder};
use std::sync::Arc;
use url::Url;

/// Shared HTTP client that stamps every request with the identifying user agent.
///
/// Timeouts are left at the transport defaults.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Arc<Client>,
    user_agent: String,
}

impl HttpClient {
    /// Create a new HTTP client with the default `olib/<version>` user agent
    pub fn new() -> Self {
        Self::with_user_agent(crate::config::USER_AGENT)
    }

    /// Create a new HTTP client with a custom user agent
    pub fn with_user_agent(user_agent: impl Into<String>) -> Self {
        Self::from_client(Arc::new(Client::new()), user_agent)
    }

    /// Create from an existing reqwest Client
    pub fn from_client(client: Arc<Client>, user_agent: impl Into<String>) -> Self {
        Self {
            client,
            user_agent: user_agent.into(),
        }
    }

    /// Start a GET request carrying the user agent header.
    ///
    /// An invalid header value surfaces as an error from `send()`.
    pub fn get(&self, url: Url) -> RequestBuilder {
        self.client
            .get(url)
            .header(USER_AGENT, self.user_agent.as_str())
    }

    /// Get the underlying client
    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}
