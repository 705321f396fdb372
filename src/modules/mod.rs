//! Resource modules.
//!
//! Each module is a thin wrapper over the [`Fetcher`](crate::fetcher::Fetcher)
//! pipeline for one family of endpoints, except [`CoverModule`] which only formats
//! URLs.

mod author;
mod cover;
mod search;
mod work;

pub use author::AuthorModule;
pub use cover::{CoverModule, CoverUrlBuilder};
pub use search::SearchModule;
pub use work::WorkModule;
