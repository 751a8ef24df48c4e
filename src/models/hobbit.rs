//! Hobbit model with a name-based natural ordering

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// A hobbit, identified by name
///
/// Identity, equality, hashing, and the natural ordering all key off `name`
/// alone; `height` and `weight` only participate in the external comparators
/// in [`crate::ordering`]. Keeping equality and the natural ordering on the
/// same field means `a.cmp(&b) == Ordering::Equal` exactly when `a == b`,
/// which sorted collections rely on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hobbit {
    pub name: String,
    /// Height in centimetres
    pub height: i32,
    /// Weight in kilograms
    pub weight: f64,
}

impl Hobbit {
    pub fn new(name: impl Into<String>, height: i32, weight: f64) -> Self {
        Self {
            name: name.into(),
            height,
            weight,
        }
    }
}

impl PartialEq for Hobbit {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Hobbit {}

impl Hash for Hobbit {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl Ord for Hobbit {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name.cmp(&other.name)
    }
}

impl PartialOrd for Hobbit {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Hobbit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Hobbit [nombre={}, altura={}, peso={}]",
            self.name, self.height, self.weight
        )
    }
}
