//! Rating bounds for person-movie associations.

use crate::error::CoreError;

/// Lowest accepted rating (inclusive).
pub const MIN_RATING: f64 = 0.0;

/// Highest accepted rating (inclusive).
pub const MAX_RATING: f64 = 10.0;

/// Validate that a rating lies within `[MIN_RATING, MAX_RATING]`.
///
/// `NaN` never satisfies the range check and is rejected along with
/// out-of-range values.
pub fn validate_rating(rating: f64) -> Result<(), CoreError> {
    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(CoreError::Validation(format!(
            "Rating must be between {MIN_RATING} and {MAX_RATING}, got {rating}"
        )));
    }
    Ok(())
}
