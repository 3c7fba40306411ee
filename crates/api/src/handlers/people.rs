//! Handlers for the `/people` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use moviesys_core::error::CoreError;
use moviesys_core::types::DbId;
use moviesys_db::repositories::PersonRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/people
pub async fn create(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let person = PersonRepo::create(&state.pool).await?;
    tracing::info!(person_id = person.id, "Person created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: person })))
}

/// GET /api/v1/people
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let people = PersonRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: people }))
}

/// GET /api/v1/people/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let person = PersonRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Person",
            id,
        }))?;
    Ok(Json(DataResponse { data: person }))
}

/// DELETE /api/v1/people/{id}
///
/// Also removes the person's movie associations.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if PersonRepo::delete(&state.pool, id).await? {
        tracing::info!(person_id = id, "Person deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Person",
            id,
        }))
    }
}
