//! Person entity model.

use moviesys_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `people` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Person {
    pub id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
