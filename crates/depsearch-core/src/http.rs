use crate::error::{CoreError, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Timeout for every upstream request. Also bounds how long one slow
/// upstream call can stall an aggregation batch.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Validates that a URL uses HTTPS.
///
/// Plaintext HTTP is allowed only for loopback hosts, so integration tests
/// can point the client at a local stub server.
#[inline]
fn ensure_https(url: &str) -> Result<()> {
    if url.starts_with("https://") || is_loopback_http(url) {
        Ok(())
    } else {
        Err(CoreError::InsecureUrl(url.to_string()))
    }
}

/// Returns true for `http://` URLs whose host is a loopback address.
fn is_loopback_http(url: &str) -> bool {
    let Some(rest) = url.strip_prefix("http://") else {
        return false;
    };
    let authority = rest.split(['/', '?', '#']).next().unwrap_or("");
    let host = if let Some(bracketed) = authority.strip_prefix('[') {
        bracketed.split(']').next().unwrap_or("")
    } else {
        authority.split(':').next().unwrap_or("")
    };
    matches!(host, "localhost" | "127.0.0.1" | "::1")
}

/// Plain JSON-over-HTTP transport for the upstream package index.
///
/// Every call fetches fresh; responses are decoded directly into the target
/// type without an intermediate buffer. The underlying `reqwest::Client`
/// holds the connection pool, so clones are cheap and share it.
///
/// # Examples
///
/// ```no_run
/// use depsearch_core::HttpClient;
///
/// # async fn example() -> depsearch_core::Result<()> {
/// #[derive(serde::Deserialize)]
/// struct Doc {
///     name: String,
/// }
///
/// let client = HttpClient::new();
/// let doc: Doc = client.get_json("https://go-search.org/api?action=package&id=x/y").await?;
/// println!("{}", doc.name);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Creates a client with a 30-second timeout and the depsearch user agent.
    pub fn new() -> Self {
        let client = Client::builder()
            .user_agent("depsearch/0.2.1")
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("failed to create HTTP client");

        Self { client }
    }

    /// Fetches `url` and decodes the JSON body into `T`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the URL is plaintext HTTP to a non-loopback host
    /// - the network request fails or times out
    /// - the server returns a non-2xx status
    /// - the body is not valid JSON for `T`
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        ensure_https(url)?;
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| CoreError::Upstream {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(CoreError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.json::<T>().await.map_err(|source| CoreError::Decode {
            url: url.to_string(),
            source,
        })
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}
