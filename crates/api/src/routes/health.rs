use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Body of `GET /health`.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `"ok"`, or `"degraded"` when the store is unreachable or behind.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// Newest migration applied to the connected database.
    pub schema_version: Option<i64>,
    /// Newest migration this build ships with.
    pub expected_schema_version: Option<i64>,
}

async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = moviesys_db::health_check(&state.pool).await.is_ok();
    let schema_version = if db_healthy {
        moviesys_db::applied_migration_version(&state.pool)
            .await
            .unwrap_or_else(|err| {
                tracing::warn!(error = %err, "Could not read applied migrations");
                None
            })
    } else {
        None
    };
    let expected_schema_version = moviesys_db::latest_migration_version();

    let schema_current = schema_version.is_some() && schema_version >= expected_schema_version;
    let status = if db_healthy && schema_current {
        "ok"
    } else {
        "degraded"
    };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        schema_version,
        expected_schema_version,
    })
}

/// `/health`, mounted at the root rather than under `/api/v1`.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
