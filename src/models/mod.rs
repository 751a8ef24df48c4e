//! Models module
//!
//! Defines the two independent creature families of this crate: pets, which
//! carry a validated name and an owned appearance, and hobbits, which carry
//! a name-based natural ordering. Nothing connects the two.

pub mod hobbit;
pub mod pet;

pub use hobbit::Hobbit;
pub use pet::{Appearance, Pet, SizeCategory};
