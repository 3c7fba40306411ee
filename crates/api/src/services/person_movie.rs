//! Association service for the `person_movies` join entity.
//!
//! Every operation receives the pool explicitly. The duplicate check in
//! [`PersonMovieService::add_association`] is only a pre-check: the
//! `uq_person_movies_person_id_movie_id` constraint is authoritative, and a
//! violation raised by the insert is reported as the same conflict.

use moviesys_core::error::CoreError;
use moviesys_core::rating::validate_rating;
use moviesys_core::types::DbId;
use moviesys_db::constraints::{
    is_foreign_key_violation, is_unique_violation, UQ_PERSON_MOVIES_PAIR,
};
use moviesys_db::models::person_movie::PersonMovie;
use moviesys_db::repositories::{MovieRepo, PersonMovieRepo, PersonRepo};
use sqlx::PgPool;

use crate::error::{AppError, AppResult};

/// Reads and writes person-movie associations.
pub struct PersonMovieService;

impl PersonMovieService {
    /// Every association, ordered by ID. An empty table is not an error.
    pub async fn list_all(pool: &PgPool) -> AppResult<Vec<PersonMovie>> {
        Ok(PersonMovieRepo::list(pool).await?)
    }

    /// Titles of the movies associated with a person.
    ///
    /// Fails when the person does not exist, and separately when the person
    /// exists but has no associated movies.
    pub async fn list_movies_for_person(pool: &PgPool, person_id: DbId) -> AppResult<Vec<String>> {
        ensure_person(pool, person_id).await?;

        let titles = PersonMovieRepo::movie_titles_for_person(pool, person_id).await?;
        if titles.is_empty() {
            return Err(CoreError::Missing(format!(
                "No movies found for person with id {person_id}"
            ))
            .into());
        }
        Ok(titles)
    }

    /// A single association by its own ID.
    pub async fn get_by_id(pool: &PgPool, id: DbId) -> AppResult<PersonMovie> {
        PersonMovieRepo::find_by_id(pool, id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "PersonMovie",
                id,
            }))
    }

    /// Link a person to a movie with no rating, returning every association.
    pub async fn add_association(
        pool: &PgPool,
        person_id: DbId,
        movie_id: DbId,
    ) -> AppResult<Vec<PersonMovie>> {
        ensure_person(pool, person_id).await?;
        ensure_movie(pool, movie_id).await?;

        if PersonMovieRepo::find_by_pair(pool, person_id, movie_id)
            .await?
            .is_some()
        {
            return Err(duplicate_pair(person_id, movie_id));
        }

        let created = PersonMovieRepo::create(pool, person_id, movie_id)
            .await
            .map_err(|err| insert_error(err, person_id, movie_id))?;

        tracing::info!(
            id = created.id,
            person_id,
            movie_id,
            "Person-movie association created"
        );

        Self::list_all(pool).await
    }

    /// Set the rating on an existing association and return the updated row.
    ///
    /// Existence of the person, the movie, and the pair is checked before the
    /// rating bounds, so an unknown pair reports "not found" even when the
    /// rating is also out of range.
    pub async fn set_rating(
        pool: &PgPool,
        person_id: DbId,
        movie_id: DbId,
        rating: f64,
    ) -> AppResult<PersonMovie> {
        ensure_person(pool, person_id).await?;
        ensure_movie(pool, movie_id).await?;

        if PersonMovieRepo::find_by_pair(pool, person_id, movie_id)
            .await?
            .is_none()
        {
            return Err(missing_pair(person_id, movie_id));
        }

        validate_rating(rating)?;

        let updated = PersonMovieRepo::set_rating(pool, person_id, movie_id, rating)
            .await?
            .ok_or_else(|| missing_pair(person_id, movie_id))?;

        tracing::info!(
            id = updated.id,
            person_id,
            movie_id,
            rating,
            "Person-movie rating set"
        );

        Ok(updated)
    }
}

async fn ensure_person(pool: &PgPool, person_id: DbId) -> AppResult<()> {
    if !PersonRepo::exists(pool, person_id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Person",
            id: person_id,
        }));
    }
    Ok(())
}

async fn ensure_movie(pool: &PgPool, movie_id: DbId) -> AppResult<()> {
    if !MovieRepo::exists(pool, movie_id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Movie",
            id: movie_id,
        }));
    }
    Ok(())
}

fn duplicate_pair(person_id: DbId, movie_id: DbId) -> AppError {
    AppError::Core(CoreError::Conflict(format!(
        "Person with id {person_id} already has movie with id {movie_id}"
    )))
}

/// Translate a failed association insert. A pair inserted by a concurrent
/// request trips the unique constraint; a person or movie deleted after the
/// existence checks trips a foreign key.
fn insert_error(err: sqlx::Error, person_id: DbId, movie_id: DbId) -> AppError {
    if is_unique_violation(&err, UQ_PERSON_MOVIES_PAIR) {
        duplicate_pair(person_id, movie_id)
    } else if is_foreign_key_violation(&err) {
        AppError::Core(CoreError::Missing(format!(
            "Person with id {person_id} or movie with id {movie_id} no longer exists"
        )))
    } else {
        AppError::Database(err)
    }
}

fn missing_pair(person_id: DbId, movie_id: DbId) -> AppError {
    AppError::Core(CoreError::Missing(format!(
        "Person with id {person_id} does not have movie with id {movie_id}"
    )))
}
