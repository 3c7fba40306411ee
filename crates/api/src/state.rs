use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone: the pool is reference-counted internally and the config
/// sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool. Handlers pass `&state.pool` down explicitly.
    pub pool: moviesys_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
