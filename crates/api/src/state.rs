use std::sync::Arc;

use heritage_db::store::HeritageStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Record storage; PostgreSQL or in-memory.
    pub store: Arc<dyn HeritageStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
