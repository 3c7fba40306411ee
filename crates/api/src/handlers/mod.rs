pub mod genres;
pub mod movies;
pub mod people;
pub mod person_movie;
