//! External comparators for hobbits
//!
//! The natural ordering of [`Hobbit`] is by name; these comparators supply
//! the alternative orderings by physical attributes. They are plain functions
//! so any of them (or a closure, or `Hobbit::cmp` itself) can be handed to
//! [`sorted_by`].

use std::cmp::Ordering;

use crate::models::Hobbit;

/// Compare two hobbits by height alone
///
/// Hobbits of equal height compare as equal, so a stable sort keeps their
/// input order.
pub fn by_height(a: &Hobbit, b: &Hobbit) -> Ordering {
    a.height.cmp(&b.height)
}

/// Compare two hobbits by height, breaking ties by weight
///
/// Lexicographic composite ordering: weight is only consulted when heights
/// are equal. Weights compare via `f64::total_cmp`.
pub fn by_height_then_weight(a: &Hobbit, b: &Hobbit) -> Ordering {
    a.height
        .cmp(&b.height)
        .then_with(|| a.weight.total_cmp(&b.weight))
}

/// Return a new vector with the hobbits sorted ascending by `compare`
///
/// The sort is stable: hobbits that compare as equal keep their relative
/// input order. The input is left untouched.
pub fn sorted_by<F>(hobbits: &[Hobbit], mut compare: F) -> Vec<Hobbit>
where
    F: FnMut(&Hobbit, &Hobbit) -> Ordering,
{
    let mut sorted = hobbits.to_vec();
    sorted.sort_by(|a, b| compare(a, b));
    sorted
}
