//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod genre_repo;
pub mod movie_repo;
pub mod person_movie_repo;
pub mod person_repo;

pub use genre_repo::GenreRepo;
pub use movie_repo::MovieRepo;
pub use person_movie_repo::PersonMovieRepo;
pub use person_repo::PersonRepo;
