//! Row models and request DTOs, one module per table.

pub mod genre;
pub mod movie;
pub mod person;
pub mod person_movie;
