use crate::config::ServerConfig;
use depsearch_core::PackageIndex;
use std::sync::Arc;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub index: Arc<dyn PackageIndex>,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(index: Arc<dyn PackageIndex>, config: ServerConfig) -> Self {
        Self {
            index,
            config: Arc::new(config),
        }
    }
}
