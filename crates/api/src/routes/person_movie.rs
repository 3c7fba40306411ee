//! Route definitions for person-movie associations.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::person_movie;
use crate::state::AppState;

/// Routes mounted at `/person-movies`.
///
/// ```text
/// GET    /                                 -> list_all
/// GET    /{person_id}                      -> list_movies_for_person
/// GET    /entry/{id}                       -> get_by_id
/// POST   /{person_id}/{movie_id}           -> add_association
/// POST   /{person_id}/{movie_id}/{rating}  -> set_rating
/// ```
///
/// Lookup by association ID lives under `/entry` because `/{id}` would
/// collide with `/{person_id}`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(person_movie::list_all))
        .route("/{person_id}", get(person_movie::list_movies_for_person))
        .route("/entry/{id}", get(person_movie::get_by_id))
        .route("/{person_id}/{movie_id}", post(person_movie::add_association))
        .route(
            "/{person_id}/{movie_id}/{rating}",
            post(person_movie::set_rating),
        )
}
