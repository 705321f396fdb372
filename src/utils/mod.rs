//! Utility modules.

mod http;

pub use http::HttpClient;
