//! Pet model with a validated name and an owned appearance

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::validation::pets::{validate_name, PetValidationError};

/// Broad size classification for a pet's appearance
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SizeCategory {
    Small,
    Medium,
    Large,
}

/// Physical appearance of a pet
///
/// Owned exclusively by a [`Pet`] (has-a relationship); set once at
/// construction and never reassigned.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Appearance {
    pub color: String,
    pub weight: f64,
    pub size: SizeCategory,
}

/// A domestic pet
///
/// The name can be reassigned after construction, but only through
/// [`Pet::set_name`], which enforces a minimum length. Construction itself
/// performs no validation, so a pet built directly with a short name bypasses
/// the rule; only later renames are checked.
///
/// # Example
///
/// ```rust
/// use bestiary_models::Pet;
///
/// let mut pet = Pet::new("El gato con botas", false, None);
/// assert!(pet.set_name("Tom").is_err());
/// assert_eq!(pet.name(), "El gato con botas");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Pet {
    name: String,
    exotic: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    appearance: Option<Appearance>,
}

impl Pet {
    /// Create a new pet with the given name, exotic flag, and appearance
    ///
    /// No validation is applied here; see [`Pet::set_name`] for the rename
    /// rule.
    pub fn new(name: impl Into<String>, exotic: bool, appearance: Option<Appearance>) -> Self {
        Self {
            name: name.into(),
            exotic,
            appearance,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the pet
    ///
    /// Fails with [`PetValidationError::NameTooShort`] when the new name has
    /// fewer than 5 characters; the stored name is left unchanged in that
    /// case.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), PetValidationError> {
        let name = name.into();
        validate_name(&name)?;
        self.name = name;
        Ok(())
    }

    pub fn is_exotic(&self) -> bool {
        self.exotic
    }

    pub fn set_exotic(&mut self, exotic: bool) {
        self.exotic = exotic;
    }

    pub fn appearance(&self) -> Option<&Appearance> {
        self.appearance.as_ref()
    }
}

impl fmt::Display for Pet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "AnimalDomestico [nombre={}, exotico={}]",
            self.name,
            if self.exotic { "Sí" } else { "No" }
        )
    }
}
