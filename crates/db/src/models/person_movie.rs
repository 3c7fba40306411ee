//! Person-movie association model.

use moviesys_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `person_movies` junction table.
///
/// `rating` is `None` until a rating has been set for the pair.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PersonMovie {
    pub id: DbId,
    pub person_id: DbId,
    pub movie_id: DbId,
    pub rating: Option<f64>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
