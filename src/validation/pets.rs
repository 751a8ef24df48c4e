//! Pet validation functionality
//!
//! Enforces the renaming rule for pets: a name must carry at least
//! [`MIN_NAME_CHARS`] characters.

/// Minimum number of characters in a valid pet name
pub const MIN_NAME_CHARS: usize = 5;

/// Error during pet validation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PetValidationError {
    #[error("pet name {name:?} is too short: {actual} characters, minimum is {minimum}")]
    NameTooShort {
        name: String,
        actual: usize,
        minimum: usize,
    },
}

/// Check a candidate pet name against the minimum-length rule
///
/// Length is measured in characters, not bytes, so multi-byte names count
/// each character once.
pub fn validate_name(name: &str) -> Result<(), PetValidationError> {
    let actual = name.chars().count();
    if actual < MIN_NAME_CHARS {
        tracing::debug!(name, actual, "rejected pet name");
        return Err(PetValidationError::NameTooShort {
            name: name.to_string(),
            actual,
            minimum: MIN_NAME_CHARS,
        });
    }
    Ok(())
}
