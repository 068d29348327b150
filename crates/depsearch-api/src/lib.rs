//! HTTP surface for depsearch.
//!
//! Three endpoints over the aggregation core:
//! - `POST /intersect/repo` - common imports as ranked full records
//! - `POST /intersect/human` - common imports collapsed to `org/repo` form
//! - `GET /search` - free-text search enriched with star counts
//!
//! Input validation is uniform: a missing or empty `packages` / `query`
//! parameter is a 400 on every endpoint.

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod server;
pub mod state;

// Re-export commonly used types
pub use config::ServerConfig;
pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use state::AppState;
