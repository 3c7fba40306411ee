//! Handlers for the `/genres` resource.
//!
//! Title and description lengths are checked before the insert; duplicate
//! titles are left to the `uq_genres_genre_title` constraint.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use moviesys_core::catalog::validate_input;
use moviesys_core::error::CoreError;
use moviesys_core::types::DbId;
use moviesys_db::constraints::{is_unique_violation, UQ_GENRES_TITLE};
use moviesys_db::models::genre::CreateGenre;
use moviesys_db::repositories::GenreRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/genres
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateGenre>,
) -> AppResult<impl IntoResponse> {
    validate_input(&input)?;

    let genre = GenreRepo::create(&state.pool, &input)
        .await
        .map_err(|err| {
            if is_unique_violation(&err, UQ_GENRES_TITLE) {
                AppError::Core(CoreError::Conflict(format!(
                    "Genre with title '{}' already exists",
                    input.genre_title
                )))
            } else {
                AppError::Database(err)
            }
        })?;

    tracing::info!(genre_id = genre.id, "Genre created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: genre })))
}

/// GET /api/v1/genres
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let genres = GenreRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: genres }))
}

/// GET /api/v1/genres/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let genre = GenreRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Genre", id }))?;
    Ok(Json(DataResponse { data: genre }))
}

/// DELETE /api/v1/genres/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if GenreRepo::delete(&state.pool, id).await? {
        tracing::info!(genre_id = id, "Genre deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Genre", id }))
    }
}
