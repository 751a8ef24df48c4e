//! Ordering functionality
//!
//! Provides external comparison strategies for:
//! - Hobbit ordering (by height, or by height then weight)
//! - Stable copying sort over a hobbit sequence

pub mod hobbits;

pub use hobbits::{by_height, by_height_then_weight, sorted_by};
