pub mod genres;
pub mod health;
pub mod movies;
pub mod people;
pub mod person_movie;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /people                                          list, create
/// /people/{id}                                     get, delete
///
/// /movies                                          list, create
/// /movies/{id}                                     get, delete
///
/// /genres                                          list, create
/// /genres/{id}                                     get, delete
///
/// /person-movies                                   list all associations
/// /person-movies/{person_id}                       movie titles for a person
/// /person-movies/entry/{id}                        single association
/// /person-movies/{person_id}/{movie_id}            add association (POST)
/// /person-movies/{person_id}/{movie_id}/{rating}   set rating (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/people", people::router())
        .nest("/movies", movies::router())
        .nest("/genres", genres::router())
        .nest("/person-movies", person_movie::router())
}
