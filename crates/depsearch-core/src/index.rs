//! The seam between the aggregators and the external package index.

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// One package as the upstream index describes it.
///
/// Field names on the wire keep the index's capitalized form so existing
/// consumers of the aggregated responses decode them unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageRecord {
    /// Import path of the package (e.g. "github.com/gin-gonic/gin")
    #[serde(rename = "Package")]
    pub name: String,
    /// Star count reported by the index
    #[serde(rename = "StarCount")]
    pub popularity: i64,
    /// Home page of the project
    #[serde(rename = "ProjectURL")]
    pub source_url: String,
}

/// One row of a free-text search result, in relevance order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    #[serde(rename = "package")]
    pub name: String,
    pub author: String,
}

/// A [`SearchHit`] joined with its popularity lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichedHit {
    #[serde(rename = "package")]
    pub name: String,
    pub author: String,
    #[serde(rename = "StarCount")]
    pub popularity: i64,
}

/// Generic package index interface.
///
/// Implementors provide access to a package search index with dependency
/// listing, metadata lookup and free-text search. All methods return
/// `Result<T>`; aggregation decides per its failure policy what a failed
/// lookup means, so implementors must never swallow errors themselves.
#[async_trait]
pub trait PackageIndex: Send + Sync {
    /// Lists the import paths a package depends on.
    ///
    /// May contain duplicates and fully-qualified subpackage paths; callers
    /// normalize when they need to.
    ///
    /// # Errors
    ///
    /// Returns an error if the network request fails or the response cannot
    /// be decoded.
    async fn imported_packages(&self, id: &str) -> Result<Vec<String>>;

    /// Fetches the canonical record for a single package.
    ///
    /// # Errors
    ///
    /// Returns an error if the network request fails or the response cannot
    /// be decoded.
    async fn package_record(&self, id: &str) -> Result<PackageRecord>;

    /// Searches the index by free text.
    ///
    /// Returns up to `limit` hits in relevance order.
    ///
    /// # Errors
    ///
    /// Returns an error if the network request fails or the response cannot
    /// be decoded.
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<SearchHit>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_record_wire_names() {
        let record = PackageRecord {
            name: "github.com/gin-gonic/gin".into(),
            popularity: 42,
            source_url: "https://github.com/gin-gonic/gin".into(),
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["Package"], "github.com/gin-gonic/gin");
        assert_eq!(json["StarCount"], 42);
        assert_eq!(json["ProjectURL"], "https://github.com/gin-gonic/gin");
    }

    #[test]
    fn test_enriched_hit_wire_names() {
        let hit = EnrichedHit {
            name: "github.com/spf13/cobra".into(),
            author: "spf13".into(),
            popularity: 7,
        };

        let json = serde_json::to_value(&hit).unwrap();
        assert_eq!(json["package"], "github.com/spf13/cobra");
        assert_eq!(json["author"], "spf13");
        assert_eq!(json["StarCount"], 7);
    }
}
