//! Field rules for the reference catalog (movies and genres).

use crate::error::CoreError;

/// Maximum length of `genres.genre_title` (VARCHAR(50)).
pub const GENRE_TITLE_MAX_LEN: u64 = 50;

/// Maximum length of `genres.genre_description` (VARCHAR(70)).
pub const GENRE_DESCRIPTION_MAX_LEN: u64 = 70;

/// Reject empty or whitespace-only movie titles.
pub fn validate_movie_title(title: &str) -> Result<(), CoreError> {
    if title.trim().is_empty() {
        return Err(CoreError::Validation("movie_title must not be empty".into()));
    }
    Ok(())
}

/// Flatten `validator` field errors into a single human-readable message.
///
/// Fields are sorted so the message is stable across runs.
pub fn describe_validation_errors(errors: &validator::ValidationErrors) -> String {
    let mut parts: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            let field = field.to_string();
            errs.iter().map(move |e| match &e.message {
                Some(msg) => format!("{field}: {msg}"),
                None => format!("{field}: {}", e.code),
            })
        })
        .collect();
    parts.sort();
    parts.join("; ")
}

/// Run a `validator` derive and convert failures into [`CoreError::Validation`].
pub fn validate_input<T: validator::Validate>(input: &T) -> Result<(), CoreError> {
    input
        .validate()
        .map_err(|e| CoreError::Validation(describe_validation_errors(&e)))
}
