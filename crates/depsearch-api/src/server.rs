use crate::config::ServerConfig;
use crate::routes::create_router;
use crate::state::AppState;
use depsearch_core::HttpClient;
use depsearch_gosearch::GoSearchClient;
use std::sync::Arc;
use tracing::info;

/// Binds the configured address and serves requests until the process
/// exits.
///
/// # Errors
///
/// Returns an I/O error if the bind fails or the accept loop dies.
pub async fn run(config: ServerConfig) -> std::io::Result<()> {
    let client =
        GoSearchClient::with_base_url(HttpClient::new(), config.upstream_base_url.clone());
    let bind = config.bind;
    let state = AppState::new(Arc::new(client), config);

    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind(bind).await?;
    info!("depsearch API listening on http://{}", bind);

    axum::serve(listener, router).await
}
