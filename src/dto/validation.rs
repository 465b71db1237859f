//! Validation helpers for DTOs.

use validator::ValidationError;

/// Validates that a guess contains something other than whitespace.
///
/// # Examples
///
/// ```ignore
/// validate_guess("Halo")  // Ok
/// validate_guess("   ")   // Err - blank
/// validate_guess("")      // Err - empty
/// ```
pub fn validate_guess(guess: &str) -> Result<(), ValidationError> {
    if guess.trim().is_empty() {
        let mut err = ValidationError::new("guess_blank");
        err.message = Some("Guess must not be empty".into());
        return Err(err);
    }

    Ok(())
}
