//! # olib
//!
//! A typed client for the Open Library REST API.
//!
//! ## Architecture
//!
//! - [`client`]: the [`OpenLibrary`] facade and the free [`search`] function
//! - [`modules`]: author, work and search endpoints, plus cover URL builders
//! - [`fetcher`]: the fetch-and-validate pipeline every request goes through
//! - [`models`]: response and input types, with key and text normalization
//! - [`error`]: [`Error`] and its [`ErrorKind`] taxonomy
//! - [`config`]: defaults, [`ClientConfig`] and configuration files
//! - [`utils`]: the shared HTTP client
//!
//! ## Example
//!
//! ```rust,no_run
//! use olib::models::SearchInput;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = olib::create_open_library_client();
//!
//! let input = SearchInput::new().limit(5)?;
//! let results = client.search("fantastic mr fox", Some(input)).await?;
//! println!("{} works found", results.num_found);
//!
//! let author = client.authors().get("OL34184A").await?;
//! println!("{}", author.name);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod models;
pub mod modules;
pub mod utils;

// Re-export commonly used types
pub use client::{create_open_library_client, search, OpenLibrary};
pub use config::ClientConfig;
pub use error::{Error, ErrorKind, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
