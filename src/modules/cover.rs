//! Cover image URLs.
//!
//! Cover URLs are plain string formatting; no request is made.
//!
//! ```rust
//! use olib::modules::CoverUrlBuilder;
//! use olib::models::{CoverKeyType, CoverResource, CoverSize};
//!
//! let url = CoverUrlBuilder::new(CoverResource::Book, "0451526538")
//!     .key_type(CoverKeyType::Isbn)
//!     .size(CoverSize::L)
//!     .build();
//!
//! assert_eq!(
//!     url.as_deref(),
//!     Some("https://covers.openlibrary.org/b/isbn/0451526538-L.jpg")
//! );
//! ```

use tracing::warn;

use crate::config::COVERS_BASE_URL;
use crate::models::{CoverKey, CoverKeyType, CoverResource, CoverSize};

/// Builder for `<origin>/<a|b>/<key type>/<key>-<size>.jpg`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverUrlBuilder {
    base_url: String,
    resource: CoverResource,
    key: CoverKey,
    key_type: CoverKeyType,
    size: CoverSize,
}

impl CoverUrlBuilder {
    /// Builder against the public covers origin, with key type `id` and size `M`
    pub fn new(resource: CoverResource, key: impl Into<CoverKey>) -> Self {
        Self::with_base_url(COVERS_BASE_URL, resource, key)
    }

    /// Builder against a custom covers origin
    pub fn with_base_url(
        base_url: impl Into<String>,
        resource: CoverResource,
        key: impl Into<CoverKey>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            resource,
            key: key.into(),
            key_type: CoverKeyType::default(),
            size: CoverSize::default(),
        }
    }

    /// Set the key type
    pub fn key_type(mut self, key_type: CoverKeyType) -> Self {
        self.key_type = key_type;
        self
    }

    /// Set the image size
    pub fn size(mut self, size: CoverSize) -> Self {
        self.size = size;
        self
    }

    /// Build the URL, or `None` when the key is empty or zero
    pub fn build(&self) -> Option<String> {
        if self.key.is_empty() {
            warn!("Cover key is required");
            return None;
        }

        Some(format!(
            "{}/{}/{}/{}-{}.jpg",
            self.base_url.trim_end_matches('/'),
            self.resource,
            self.key_type,
            self.key,
            self.size
        ))
    }
}

/// Entry point for author and book cover builders
#[derive(Debug, Clone)]
pub struct CoverModule {
    base_url: String,
}

impl CoverModule {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Cover builder for an author photo
    pub fn author(&self, key: impl Into<CoverKey>) -> CoverUrlBuilder {
        CoverUrlBuilder::with_base_url(self.base_url.as_str(), CoverResource::Author, key)
    }

    /// Cover builder for a book cover
    pub fn book(&self, key: impl Into<CoverKey>) -> CoverUrlBuilder {
        CoverUrlBuilder::with_base_url(self.base_url.as_str(), CoverResource::Book, key)
    }
}

impl Default for CoverModule {
    fn default() -> Self {
        Self::new(COVERS_BASE_URL)
    }
}
