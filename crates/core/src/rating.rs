//! Review rating bounds and validation.

use crate::error::CoreError;

/// Lowest rating a review may carry.
pub const MIN_RATING: f64 = 1.0;
/// Highest rating a review may carry.
pub const MAX_RATING: f64 = 5.0;

/// Validate a review rating: must be between 1.0 and 5.0 inclusive.
///
/// The database enforces the same range via a CHECK constraint; this runs
/// first so the caller gets a 400 instead of a constraint error.
pub fn validate_rating(rating: f64) -> Result<(), CoreError> {
    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(CoreError::Validation(format!(
            "Rating must be between 1 and 5 (got {rating})"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_rating_accepts_bounds_and_interior() {
        assert!(validate_rating(1.0).is_ok());
        assert!(validate_rating(3.5).is_ok());
        assert!(validate_rating(5.0).is_ok());
    }

    #[test]
    fn validate_rating_rejects_out_of_range() {
        assert!(validate_rating(0.0).is_err());
        assert!(validate_rating(0.9).is_err());
        assert!(validate_rating(5.1).is_err());
        assert!(validate_rating(-1.0).is_err());
    }

    #[test]
    fn validate_rating_rejects_nan() {
        let err = validate_rating(f64::NAN).unwrap_err();
        assert!(err.to_string().contains("between 1 and 5"));
    }
}
