//! Validation functionality
//!
//! Provides validation logic for:
//! - Pet renaming (minimum name length)

pub mod pets;

pub use pets::{validate_name, PetValidationError, MIN_NAME_CHARS};
