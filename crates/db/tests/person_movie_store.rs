//! Integration tests for the catalog and association repositories.
//!
//! Exercises the store directly, bypassing the HTTP layer:
//! - Unique pair constraint on `person_movies`
//! - Foreign key and cascade behaviour
//! - Rating range check constraint
//! - Unique genre titles

use moviesys_db::constraints::{
    is_foreign_key_violation, is_unique_violation, violated_constraint, CHECK_VIOLATION,
    UQ_GENRES_TITLE, UQ_PERSON_MOVIES_PAIR,
};
use moviesys_db::models::genre::CreateGenre;
use moviesys_db::models::movie::CreateMovie;
use moviesys_db::repositories::{GenreRepo, MovieRepo, PersonMovieRepo, PersonRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_movie(title: &str) -> CreateMovie {
    CreateMovie {
        movie_title: title.to_string(),
    }
}

fn new_genre(title: &str) -> CreateGenre {
    CreateGenre {
        genre_title: title.to_string(),
        genre_description: String::new(),
    }
}

async fn count_pair(pool: &PgPool, person_id: i64, movie_id: i64) -> i64 {
    sqlx::query_scalar(
        "SELECT COUNT(*) FROM person_movies WHERE person_id = $1 AND movie_id = $2",
    )
    .bind(person_id)
    .bind(movie_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

// ---------------------------------------------------------------------------
// Associations
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_association_starts_unrated(pool: PgPool) {
    let person = PersonRepo::create(&pool).await.unwrap();
    let movie = MovieRepo::create(&pool, &new_movie("Inception")).await.unwrap();

    let pm = PersonMovieRepo::create(&pool, person.id, movie.id)
        .await
        .unwrap();
    assert_eq!(pm.person_id, person.id);
    assert_eq!(pm.movie_id, movie.id);
    assert_eq!(pm.rating, None);

    let found = PersonMovieRepo::find_by_pair(&pool, person.id, movie.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.id, pm.id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_pair_violates_unique_constraint(pool: PgPool) {
    let person = PersonRepo::create(&pool).await.unwrap();
    let movie = MovieRepo::create(&pool, &new_movie("Heat")).await.unwrap();

    PersonMovieRepo::create(&pool, person.id, movie.id)
        .await
        .unwrap();
    let err = PersonMovieRepo::create(&pool, person.id, movie.id)
        .await
        .unwrap_err();

    assert!(is_unique_violation(&err, UQ_PERSON_MOVIES_PAIR), "got {err}");
    assert_eq!(
        count_pair(&pool, person.id, movie.id).await,
        1
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_missing_person_violates_foreign_key(pool: PgPool) {
    let movie = MovieRepo::create(&pool, &new_movie("Alien")).await.unwrap();

    let err = PersonMovieRepo::create(&pool, 999_999, movie.id)
        .await
        .unwrap_err();
    assert!(is_foreign_key_violation(&err), "got {err}");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_set_rating_updates_in_place(pool: PgPool) {
    let person = PersonRepo::create(&pool).await.unwrap();
    let movie = MovieRepo::create(&pool, &new_movie("Arrival")).await.unwrap();
    let pm = PersonMovieRepo::create(&pool, person.id, movie.id)
        .await
        .unwrap();

    let updated = PersonMovieRepo::set_rating(&pool, person.id, movie.id, 7.5)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.id, pm.id);
    assert_eq!(updated.rating, Some(7.5));
    assert!(updated.updated_at >= pm.updated_at);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_set_rating_on_missing_pair_returns_none(pool: PgPool) {
    let result = PersonMovieRepo::set_rating(&pool, 1, 1, 5.0).await.unwrap();
    assert!(result.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_out_of_range_rating_rejected_by_check_constraint(pool: PgPool) {
    let person = PersonRepo::create(&pool).await.unwrap();
    let movie = MovieRepo::create(&pool, &new_movie("Up")).await.unwrap();
    PersonMovieRepo::create(&pool, person.id, movie.id)
        .await
        .unwrap();

    let err = PersonMovieRepo::set_rating(&pool, person.id, movie.id, 10.5)
        .await
        .unwrap_err();
    assert_eq!(
        violated_constraint(&err, CHECK_VIOLATION),
        Some("ck_person_movies_rating_range")
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_movie_titles_for_person_joins_movies(pool: PgPool) {
    let alice = PersonRepo::create(&pool).await.unwrap();
    let bob = PersonRepo::create(&pool).await.unwrap();
    let first = MovieRepo::create(&pool, &new_movie("Inception")).await.unwrap();
    let second = MovieRepo::create(&pool, &new_movie("Memento")).await.unwrap();

    PersonMovieRepo::create(&pool, alice.id, first.id).await.unwrap();
    PersonMovieRepo::create(&pool, alice.id, second.id).await.unwrap();
    PersonMovieRepo::create(&pool, bob.id, second.id).await.unwrap();

    let titles = PersonMovieRepo::movie_titles_for_person(&pool, alice.id)
        .await
        .unwrap();
    assert_eq!(titles, vec!["Inception".to_string(), "Memento".to_string()]);

    let titles = PersonMovieRepo::movie_titles_for_person(&pool, bob.id)
        .await
        .unwrap();
    assert_eq!(titles, vec!["Memento".to_string()]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_deleting_person_cascades_to_associations(pool: PgPool) {
    let person = PersonRepo::create(&pool).await.unwrap();
    let movie = MovieRepo::create(&pool, &new_movie("Jaws")).await.unwrap();
    let pm = PersonMovieRepo::create(&pool, person.id, movie.id)
        .await
        .unwrap();

    assert!(PersonRepo::delete(&pool, person.id).await.unwrap());
    assert!(PersonMovieRepo::find_by_id(&pool, pm.id)
        .await
        .unwrap()
        .is_none());
    assert!(MovieRepo::exists(&pool, movie.id).await.unwrap());
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_genre_title_violates_unique_constraint(pool: PgPool) {
    GenreRepo::create(&pool, &new_genre("Drama")).await.unwrap();
    let err = GenreRepo::create(&pool, &new_genre("Drama"))
        .await
        .unwrap_err();
    assert!(is_unique_violation(&err, UQ_GENRES_TITLE), "got {err}");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_exists_probes(pool: PgPool) {
    let person = PersonRepo::create(&pool).await.unwrap();
    assert!(PersonRepo::exists(&pool, person.id).await.unwrap());
    assert!(!PersonRepo::exists(&pool, person.id + 1).await.unwrap());
    assert!(!MovieRepo::exists(&pool, 1).await.unwrap());
}
