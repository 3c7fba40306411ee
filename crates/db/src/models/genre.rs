//! Genre entity model and DTOs.

use moviesys_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `genres` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Genre {
    pub id: DbId,
    pub genre_title: String,
    pub genre_description: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new genre.
///
/// Length limits mirror the column widths in the `genres` table.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateGenre {
    #[validate(length(min = 1, max = 50, message = "must be between 1 and 50 characters"))]
    pub genre_title: String,
    #[serde(default)]
    #[validate(length(max = 70, message = "must be at most 70 characters"))]
    pub genre_description: String,
}
