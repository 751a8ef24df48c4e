//! Bestiary Models - small creature model library
//!
//! Provides two unrelated model families:
//! - [`Pet`]: encapsulated fields, a rename that is validated, and an owned
//!   [`Appearance`] record (has-a relationship)
//! - [`Hobbit`]: name-based natural ordering plus external comparators for
//!   sorting by height, or by height and then weight

pub mod models;
pub mod ordering;
pub mod validation;

// Re-export commonly used types
pub use models::{Appearance, Hobbit, Pet, SizeCategory};
pub use ordering::{by_height, by_height_then_weight, sorted_by};
pub use validation::PetValidationError;
