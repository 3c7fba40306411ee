//! Named schema constraints and helpers for recognising their violations.
//!
//! Constraint names are prefixed by kind (`uq_`, `fk_`, `ck_`) so the HTTP
//! layer can classify a violation without knowing every table.

/// Unique (person_id, movie_id) pair on `person_movies`.
pub const UQ_PERSON_MOVIES_PAIR: &str = "uq_person_movies_person_id_movie_id";

/// Unique `genre_title` on `genres`.
pub const UQ_GENRES_TITLE: &str = "uq_genres_genre_title";

/// PostgreSQL SQLSTATE for `unique_violation`.
pub const UNIQUE_VIOLATION: &str = "23505";

/// PostgreSQL SQLSTATE for `foreign_key_violation`.
pub const FOREIGN_KEY_VIOLATION: &str = "23503";

/// PostgreSQL SQLSTATE for `check_violation`.
pub const CHECK_VIOLATION: &str = "23514";

/// If `err` is a database error with the given SQLSTATE, return the name of
/// the violated constraint (or `"unknown"` when the server did not report one).
pub fn violated_constraint<'e>(err: &'e sqlx::Error, sqlstate: &str) -> Option<&'e str> {
    match err {
        sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some(sqlstate) => {
            Some(db_err.constraint().unwrap_or("unknown"))
        }
        _ => None,
    }
}

/// `true` when `err` violates the unique constraint called `constraint`.
pub fn is_unique_violation(err: &sqlx::Error, constraint: &str) -> bool {
    violated_constraint(err, UNIQUE_VIOLATION) == Some(constraint)
}

/// `true` when `err` is any foreign-key violation.
pub fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    violated_constraint(err, FOREIGN_KEY_VIOLATION).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_database_errors_are_not_violations() {
        let err = sqlx::Error::RowNotFound;
        assert_eq!(violated_constraint(&err, UNIQUE_VIOLATION), None);
        assert!(!is_unique_violation(&err, UQ_PERSON_MOVIES_PAIR));
        assert!(!is_foreign_key_violation(&err));
    }

    #[test]
    fn constraint_names_carry_kind_prefix() {
        assert!(UQ_PERSON_MOVIES_PAIR.starts_with("uq_"));
        assert!(UQ_GENRES_TITLE.starts_with("uq_"));
    }
}
