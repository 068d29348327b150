//! Core abstractions for depsearch.
//!
//! This crate holds everything that is independent of the HTTP surface:
//! the error taxonomy, the upstream JSON transport, the [`PackageIndex`]
//! seam to the external package index, and the aggregation logic built on
//! top of it (dependency intersection, search enrichment, ranking).
//!
//! # Architecture
//!
//! depsearch-core defines:
//! - **Traits**: [`PackageIndex`], the one capability the aggregators need
//! - **Transport**: [`HttpClient`], plain JSON-over-HTTP GET with no caching
//! - **Aggregation**: [`common_imports`], [`search_and_enrich`],
//!   [`rank_by_popularity`]
//!
//! Aggregation is generic over [`PackageIndex`], so tests drive it against
//! in-memory stubs without touching the network.

pub mod enrich;
pub mod error;
pub mod http;
pub mod index;
pub mod intersect;
pub mod rank;

#[cfg(test)]
pub(crate) mod testing;

// Re-export commonly used types
pub use enrich::search_and_enrich;
pub use error::{CoreError, Result};
pub use http::HttpClient;
pub use index::{EnrichedHit, PackageIndex, PackageRecord, SearchHit};
pub use intersect::{FetchFailurePolicy, IntersectMode, common_imports, humanize};
pub use rank::{rank_by_popularity, ranked_records};
