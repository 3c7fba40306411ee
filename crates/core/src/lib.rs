//! Domain types, errors, and validation rules for the movie system.
//!
//! Nothing in this crate touches the network or the database.

pub mod catalog;
pub mod error;
pub mod rating;
pub mod types;
