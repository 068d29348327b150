use crate::{handlers, state::AppState};
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

/// Assembles the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/intersect/repo", post(handlers::intersect_repo))
        .route("/intersect/human", post(handlers::intersect_human))
        .route("/search", get(handlers::search))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
