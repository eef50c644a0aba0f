use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the pool is an `Arc` internally and the config is
/// wrapped in one.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: helpdesk_db::DbPool,
    /// Server configuration (JWT settings, timeouts, CORS origins).
    pub config: Arc<ServerConfig>,
}
