//! go-search.org support for depsearch.
//!
//! This crate provides the client for the go-search.org package index:
//! URL construction with path-safe identifier encoding, the upstream
//! response documents, and the [`depsearch_core::PackageIndex`]
//! implementation the aggregators run against.
//!
//! # Example
//!
//! ```no_run
//! use depsearch_core::HttpClient;
//! use depsearch_gosearch::GoSearchClient;
//!
//! # async fn example() -> depsearch_core::Result<()> {
//! let client = GoSearchClient::new(HttpClient::new());
//! let doc = client.lookup("github.com/gin-gonic/gin").await?;
//! println!("{} stars", doc.star_count);
//! # Ok(())
//! # }
//! ```

pub mod encode;
pub mod registry;
pub mod types;

// Re-export commonly used types
pub use encode::encode_path_segment;
pub use registry::GoSearchClient;
pub use types::{PackageDocument, SearchDocument, SearchRow};
