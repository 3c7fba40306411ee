//! Domain services that sit between handlers and repositories.
//!
//! Services own the multi-step checks that a single repository call cannot
//! express (existence of referenced rows, duplicate pre-checks, value bounds).

pub mod person_movie;

pub use person_movie::PersonMovieService;
