//! In-place quicksort over the list's slot buffer.
//!
//! Last-element-pivot Lomuto partitioning: each partition step scans the
//! range once, gathering slots that order at or below the pivot at the
//! front, then swaps the pivot into place between the two halves and
//! recurses into each half.
//!
//! The sort is unstable (equal elements may be reordered), average
//! O(n log n), and degrades to O(n²) on already-ordered input — ascending
//! or descending — where the last-element pivot splits maximally unevenly.

use std::cmp::Ordering;

use crate::ordering::slot_order;

/// Sort `slots` in place in ascending [`slot_order`]. No-op for fewer than
/// two slots.
pub(crate) fn quicksort<T: Ord>(slots: &mut [Option<T>]) {
    if slots.len() <= 1 {
        return;
    }
    let pivot = partition(slots);
    let (below, rest) = slots.split_at_mut(pivot);
    quicksort(below);
    // rest[0] is the pivot, already in its final position.
    quicksort(&mut rest[1..]);
}

/// Partition `slots` around its last element.
///
/// Slots ordering at or below the pivot end up in front of it, the rest
/// behind it. Returns the pivot's final position.
fn partition<T: Ord>(slots: &mut [Option<T>]) -> usize {
    let last = slots.len() - 1;
    let mut boundary = 0;
    for scan in 0..last {
        if slot_order(&slots[scan], &slots[last]) != Ordering::Greater {
            slots.swap(boundary, scan);
            boundary += 1;
        }
    }
    slots.swap(boundary, last);
    boundary
}
