//! go-search.org API client.
//!
//! Provides access to the index via two actions:
//! - `/api?action=package&id={id}` - canonical record plus import list
//! - `/api?action=search&q={query}` - free-text search
//!
//! Requests are plain GETs; nothing is cached.

use crate::encode::encode_path_segment;
use crate::types::{PackageDocument, SearchDocument};
use async_trait::async_trait;
use depsearch_core::{HttpClient, PackageIndex, PackageRecord, Result, SearchHit};

const GO_SEARCH_BASE: &str = "https://go-search.org";

/// Client for the go-search.org package index.
///
/// Wraps the shared [`HttpClient`] with URL construction for the two
/// upstream actions. The base URL is overridable so tests can point the
/// client at a local stub server.
#[derive(Clone)]
pub struct GoSearchClient {
    http: HttpClient,
    base_url: String,
}

impl GoSearchClient {
    /// Creates a client against the production go-search.org endpoint.
    pub fn new(http: HttpClient) -> Self {
        Self::with_base_url(http, GO_SEARCH_BASE)
    }

    /// Creates a client against an alternative base URL.
    pub fn with_base_url(http: HttpClient, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    /// Fetches the lookup document for one package identifier.
    ///
    /// The identifier is percent-encoded as a path component, so `/` in
    /// multi-segment identifiers survives while URL-corrupting characters
    /// do not.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the upstream responds with a
    /// non-2xx status, or the body is not a valid lookup document.
    pub async fn lookup(&self, id: &str) -> Result<PackageDocument> {
        let url = format!(
            "{}/api?action=package&id={}",
            self.base_url,
            encode_path_segment(id)
        );
        self.http.get_json(&url).await
    }

    /// Fetches the search document for a free-text query.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the upstream responds with a
    /// non-2xx status, or the body is not a valid search document.
    pub async fn search_index(&self, query: &str) -> Result<SearchDocument> {
        let url = format!(
            "{}/api?action=search&q={}",
            self.base_url,
            urlencoding::encode(query)
        );
        self.http.get_json(&url).await
    }
}

#[async_trait]
impl PackageIndex for GoSearchClient {
    async fn imported_packages(&self, id: &str) -> Result<Vec<String>> {
        Ok(self.lookup(id).await?.imported)
    }

    async fn package_record(&self, id: &str) -> Result<PackageRecord> {
        let doc = self.lookup(id).await?;
        Ok(PackageRecord {
            name: doc.package,
            popularity: doc.star_count,
            source_url: doc.project_url,
        })
    }

    async fn search(&self, query: &str, limit: usize) -> Result<Vec<SearchHit>> {
        let doc = self.search_index(query).await?;
        Ok(doc
            .hits
            .into_iter()
            .take(limit)
            .map(|row| SearchHit {
                name: row.package,
                author: row.author,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_lookup_decodes_document() {
        let mut server = mockito::Server::new_async().await;

        let _m = server
            .mock("GET", "/api?action=package&id=github.com/gin-gonic/gin")
            .with_status(200)
            .with_body(
                r#"{"Package":"github.com/gin-gonic/gin","StarCount":12,
                    "ProjectURL":"https://github.com/gin-gonic/gin",
                    "Imported":["github.com/mattn/go-isatty"]}"#,
            )
            .create_async()
            .await;

        let client = GoSearchClient::with_base_url(HttpClient::new(), server.url());
        let doc = client.lookup("github.com/gin-gonic/gin").await.unwrap();

        assert_eq!(doc.star_count, 12);
        assert_eq!(doc.imported, ["github.com/mattn/go-isatty"]);
    }

    #[tokio::test]
    async fn test_lookup_encodes_identifier_as_path_component() {
        let mut server = mockito::Server::new_async().await;

        let m = server
            .mock("GET", "/api?action=package&id=github.com/user/my%20repo")
            .with_status(200)
            .with_body("{}")
            .create_async()
            .await;

        let client = GoSearchClient::with_base_url(HttpClient::new(), server.url());
        client.lookup("github.com/user/my repo").await.unwrap();

        m.assert_async().await;
    }

    #[tokio::test]
    async fn test_search_index_encodes_query() {
        let mut server = mockito::Server::new_async().await;

        let m = server
            .mock("GET", "/api?action=search&q=web%20framework")
            .with_status(200)
            .with_body(r#"{"query":"web framework","hits":[]}"#)
            .create_async()
            .await;

        let client = GoSearchClient::with_base_url(HttpClient::new(), server.url());
        let doc = client.search_index("web framework").await.unwrap();

        assert!(doc.hits.is_empty());
        m.assert_async().await;
    }

    #[tokio::test]
    async fn test_trait_search_applies_limit() {
        let mut server = mockito::Server::new_async().await;

        let _m = server
            .mock("GET", "/api?action=search&q=web")
            .with_status(200)
            .with_body(
                r#"{"hits":[
                    {"package":"a/one","author":"a"},
                    {"package":"b/two","author":"b"},
                    {"package":"c/three","author":"c"}
                ]}"#,
            )
            .create_async()
            .await;

        let client = GoSearchClient::with_base_url(HttpClient::new(), server.url());
        let hits = client.search("web", 2).await.unwrap();

        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].name, "a/one");
        assert_eq!(hits[1].name, "b/two");
    }

    #[tokio::test]
    async fn test_trait_record_projection() {
        let mut server = mockito::Server::new_async().await;

        let _m = server
            .mock("GET", "/api?action=package&id=a/b")
            .with_status(200)
            .with_body(r#"{"Package":"a/b","StarCount":9,"ProjectURL":"https://a/b"}"#)
            .create_async()
            .await;

        let client = GoSearchClient::with_base_url(HttpClient::new(), server.url());
        let record = client.package_record("a/b").await.unwrap();

        assert_eq!(
            record,
            PackageRecord {
                name: "a/b".into(),
                popularity: 9,
                source_url: "https://a/b".into(),
            }
        );
    }

    #[tokio::test]
    async fn test_base_url_trailing_slash_trimmed() {
        let mut server = mockito::Server::new_async().await;

        let m = server
            .mock("GET", "/api?action=package&id=a/b")
            .with_status(200)
            .with_body("{}")
            .create_async()
            .await;

        let base = format!("{}/", server.url());
        let client = GoSearchClient::with_base_url(HttpClient::new(), base);
        client.lookup("a/b").await.unwrap();

        m.assert_async().await;
    }

    #[tokio::test]
    async fn test_upstream_error_propagates() {
        let mut server = mockito::Server::new_async().await;

        let _m = server
            .mock("GET", "/api?action=package&id=a/b")
            .with_status(500)
            .create_async()
            .await;

        let client = GoSearchClient::with_base_url(HttpClient::new(), server.url());
        let result = client.lookup("a/b").await;

        assert!(result.is_err());
    }

    #[tokio::test]
    #[ignore]
    async fn test_fetch_real_lookup() {
        let client = GoSearchClient::new(HttpClient::new());
        let doc = client.lookup("github.com/gin-gonic/gin").await.unwrap();

        assert!(!doc.package.is_empty());
    }
}
