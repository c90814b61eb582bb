//! The total ordering used by the in-place sort.
//!
//! [`slot_order`] compares two storage slots: vacant slots sort before any
//! live element, and two live elements compare by their natural order. For
//! element types without a natural order, [`ByRendering`] supplies one by
//! comparing `Display` output lexicographically.

use std::cmp::Ordering;
use std::fmt;

/// Compare two storage slots.
///
/// Rules, in order:
/// 1. both vacant → `Equal`;
/// 2. `a` vacant → `Less` (vacant slots sort first);
/// 3. `b` vacant → `Greater`;
/// 4. both live → the elements' natural order.
///
/// This is a total order for any `T: Ord` — reflexive, antisymmetric,
/// transitive — and never panics. It coincides with `Option`'s own derived
/// ordering; it is spelled out here because it is the contract the sorter
/// relies on, not an accident of derivation.
pub fn slot_order<T: Ord>(a: &Option<T>, b: &Option<T>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => a.cmp(b),
    }
}

/// Orders a value by its `Display` rendering.
///
/// For element types with no natural order, wrapping them in `ByRendering`
/// sorts them lexicographically by what they print as. Note that this is a
/// string order: `10` renders as `"10"` and sorts before `"9"`.
///
/// ```
/// use flexlist::{ByRendering, FlexList};
///
/// let mut readings = FlexList::new();
/// readings.push(ByRendering(10_u32));
/// readings.push(ByRendering(9_u32));
/// readings.sort();
/// assert_eq!(readings.to_string(), "[10, 9]");
/// ```
#[derive(Clone, Copy, Debug)]
pub struct ByRendering<T>(pub T);

impl<T: fmt::Display> PartialEq for ByRendering<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T: fmt::Display> Eq for ByRendering<T> {}

impl<T: fmt::Display> PartialOrd for ByRendering<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: fmt::Display> Ord for ByRendering<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.to_string().cmp(&other.0.to_string())
    }
}

impl<T: fmt::Display> fmt::Display for ByRendering<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
