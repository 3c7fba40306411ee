//! Handlers for the `/person-movies` association resource.
//!
//! Each handler extracts path parameters and delegates to
//! [`PersonMovieService`], which owns the existence, duplicate, and rating
//! checks.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use moviesys_core::types::DbId;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::services::PersonMovieService;
use crate::state::AppState;

/// GET /api/v1/person-movies
pub async fn list_all(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let rows = PersonMovieService::list_all(&state.pool).await?;
    Ok(Json(DataResponse { data: rows }))
}

/// GET /api/v1/person-movies/{person_id}
///
/// Titles of every movie linked to the person.
pub async fn list_movies_for_person(
    State(state): State<AppState>,
    Path(person_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let titles = PersonMovieService::list_movies_for_person(&state.pool, person_id).await?;
    Ok(Json(DataResponse { data: titles }))
}

/// GET /api/v1/person-movies/entry/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let row = PersonMovieService::get_by_id(&state.pool, id).await?;
    Ok(Json(DataResponse { data: row }))
}

/// POST /api/v1/person-movies/{person_id}/{movie_id}
///
/// Returns the full association list after the insert.
pub async fn add_association(
    State(state): State<AppState>,
    Path((person_id, movie_id)): Path<(DbId, DbId)>,
) -> AppResult<impl IntoResponse> {
    let rows = PersonMovieService::add_association(&state.pool, person_id, movie_id).await?;
    Ok(Json(DataResponse { data: rows }))
}

/// POST /api/v1/person-movies/{person_id}/{movie_id}/{rating}
pub async fn set_rating(
    State(state): State<AppState>,
    Path((person_id, movie_id, rating)): Path<(DbId, DbId, f64)>,
) -> AppResult<impl IntoResponse> {
    let row = PersonMovieService::set_rating(&state.pool, person_id, movie_id, rating).await?;
    Ok(Json(DataResponse { data: row }))
}
