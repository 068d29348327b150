use depsearch_core::FetchFailurePolicy;
use serde::Deserialize;
use std::net::SocketAddr;
use thiserror::Error;

/// How many intersected identifiers get a full-record lookup on the
/// `/intersect/repo` path. Bounds both response size and upstream fan-out.
pub const DEFAULT_INTERSECT_DETAIL_LIMIT: usize = 29;

/// How many search hits get a star-count lookup on the `/search` path.
pub const DEFAULT_SEARCH_HIT_LIMIT: usize = 5;

const DEFAULT_BIND: &str = "127.0.0.1:8080";
const DEFAULT_UPSTREAM: &str = "https://go-search.org";

/// A rejected environment override.
#[derive(Error, Debug)]
#[error("invalid {var}: {message}")]
pub struct ConfigError {
    pub var: &'static str,
    pub message: String,
}

/// Root configuration for the depsearch API server.
///
/// All fields have defaults; deployments override them through the
/// `DEPSEARCH_*` environment variables read by [`ServerConfig::from_env`].
///
/// # Examples
///
/// ```
/// use depsearch_api::config::ServerConfig;
///
/// let json = r#"{
///     "upstream_base_url": "https://go-search.example",
///     "fetch_failure": "skip"
/// }"#;
///
/// let config: ServerConfig = serde_json::from_str(json).unwrap();
/// assert_eq!(config.intersect_detail_limit, 29);
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Socket address the server listens on.
    #[serde(default = "default_bind")]
    pub bind: SocketAddr,
    /// Base URL of the package index.
    #[serde(default = "default_upstream")]
    pub upstream_base_url: String,
    /// Record-lookup cap on the repo-intersection path.
    #[serde(default = "default_intersect_detail_limit")]
    pub intersect_detail_limit: usize,
    /// Hit-enrichment cap on the search path.
    #[serde(default = "default_search_hit_limit")]
    pub search_hit_limit: usize,
    /// What a failed per-package fetch means for a batch.
    #[serde(default)]
    pub fetch_failure: FetchFailurePolicy,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            upstream_base_url: default_upstream(),
            intersect_detail_limit: default_intersect_detail_limit(),
            search_hit_limit: default_search_hit_limit(),
            fetch_failure: FetchFailurePolicy::default(),
        }
    }
}

impl ServerConfig {
    /// Builds a config from the process environment.
    ///
    /// Recognized variables: `DEPSEARCH_BIND`, `DEPSEARCH_UPSTREAM_URL`,
    /// `DEPSEARCH_INTERSECT_DETAIL_LIMIT`, `DEPSEARCH_SEARCH_HIT_LIMIT`,
    /// `DEPSEARCH_FETCH_FAILURE` (`fail` | `skip` | `zero-value`).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a set variable does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(bind) = lookup("DEPSEARCH_BIND") {
            config.bind = bind.parse().map_err(|e| ConfigError {
                var: "DEPSEARCH_BIND",
                message: format!("{e}"),
            })?;
        }
        if let Some(upstream) = lookup("DEPSEARCH_UPSTREAM_URL") {
            config.upstream_base_url = upstream;
        }
        if let Some(limit) = lookup("DEPSEARCH_INTERSECT_DETAIL_LIMIT") {
            config.intersect_detail_limit = limit.parse().map_err(|e| ConfigError {
                var: "DEPSEARCH_INTERSECT_DETAIL_LIMIT",
                message: format!("{e}"),
            })?;
        }
        if let Some(limit) = lookup("DEPSEARCH_SEARCH_HIT_LIMIT") {
            config.search_hit_limit = limit.parse().map_err(|e| ConfigError {
                var: "DEPSEARCH_SEARCH_HIT_LIMIT",
                message: format!("{e}"),
            })?;
        }
        if let Some(policy) = lookup("DEPSEARCH_FETCH_FAILURE") {
            config.fetch_failure = policy.parse().map_err(|message| ConfigError {
                var: "DEPSEARCH_FETCH_FAILURE",
                message,
            })?;
        }

        Ok(config)
    }
}

fn default_bind() -> SocketAddr {
    DEFAULT_BIND.parse().expect("default bind address is valid")
}

fn default_upstream() -> String {
    DEFAULT_UPSTREAM.to_string()
}

fn default_intersect_detail_limit() -> usize {
    DEFAULT_INTERSECT_DETAIL_LIMIT
}

fn default_search_hit_limit() -> usize {
    DEFAULT_SEARCH_HIT_LIMIT
}
