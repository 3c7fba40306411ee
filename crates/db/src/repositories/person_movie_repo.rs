//! Repository for the `person_movies` junction table.
//!
//! The repository does not check that the referenced person and movie exist;
//! callers rely on the foreign keys and the unique pair constraint for the
//! final word.

use moviesys_core::types::DbId;
use sqlx::PgPool;

use crate::models::person_movie::PersonMovie;

const COLUMNS: &str = "id, person_id, movie_id, rating, created_at, updated_at";

/// Provides reads and writes for person-movie associations.
pub struct PersonMovieRepo;

impl PersonMovieRepo {
    /// List every association ordered by ID.
    pub async fn list(pool: &PgPool) -> Result<Vec<PersonMovie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM person_movies ORDER BY id");
        sqlx::query_as::<_, PersonMovie>(&query)
            .fetch_all(pool)
            .await
    }

    /// Find an association by its own ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<PersonMovie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM person_movies WHERE id = $1");
        sqlx::query_as::<_, PersonMovie>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find the association for an exact (person, movie) pair.
    pub async fn find_by_pair(
        pool: &PgPool,
        person_id: DbId,
        movie_id: DbId,
    ) -> Result<Option<PersonMovie>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM person_movies WHERE person_id = $1 AND movie_id = $2"
        );
        sqlx::query_as::<_, PersonMovie>(&query)
            .bind(person_id)
            .bind(movie_id)
            .fetch_optional(pool)
            .await
    }

    /// Titles of every movie associated with a person, in association order.
    pub async fn movie_titles_for_person(
        pool: &PgPool,
        person_id: DbId,
    ) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>(
            "SELECT m.movie_title
             FROM person_movies pm
             JOIN movies m ON m.id = pm.movie_id
             WHERE pm.person_id = $1
             ORDER BY pm.id",
        )
        .bind(person_id)
        .fetch_all(pool)
        .await
    }

    /// Insert a new association with no rating.
    ///
    /// Fails with a unique violation on `uq_person_movies_person_id_movie_id`
    /// if the pair already exists, and with a foreign-key violation if either
    /// side is missing.
    pub async fn create(
        pool: &PgPool,
        person_id: DbId,
        movie_id: DbId,
    ) -> Result<PersonMovie, sqlx::Error> {
        let query = format!(
            "INSERT INTO person_movies (person_id, movie_id)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, PersonMovie>(&query)
            .bind(person_id)
            .bind(movie_id)
            .fetch_one(pool)
            .await?;
        tracing::debug!(id = row.id, person_id, movie_id, "Inserted person_movies row");
        Ok(row)
    }

    /// Set the rating on an existing pair.
    ///
    /// Returns `None` if no association exists for the pair.
    pub async fn set_rating(
        pool: &PgPool,
        person_id: DbId,
        movie_id: DbId,
        rating: f64,
    ) -> Result<Option<PersonMovie>, sqlx::Error> {
        let query = format!(
            "UPDATE person_movies SET rating = $3
             WHERE person_id = $1 AND movie_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PersonMovie>(&query)
            .bind(person_id)
            .bind(movie_id)
            .bind(rating)
            .fetch_optional(pool)
            .await
    }
}
