//! A growable contiguous list with manual capacity management and an
//! in-place quicksort.
//!
//! [`FlexList`] keeps its backing buffer allocated to full capacity at all
//! times: live elements occupy the front, vacant slots fill the rest. The
//! buffer doubles when an append would overflow it, and [`FlexList::clear`]
//! swaps it for a fresh one at the initial capacity, so a cleared list has
//! the same footprint as a new one.
//!
//! # Architecture
//!
//! ```text
//! FlexList<T>
//! ├── slots: Vec<Option<T>>   (buffer length == capacity; None == vacant)
//! ├── len                     (live elements occupy slots[0..len])
//! └── sort() → quicksort      (last-element-pivot Lomuto partition,
//!                              ordered by ordering::slot_order)
//! ```
//!
//! # Example
//!
//! ```
//! use flexlist::FlexList;
//!
//! let mut names = FlexList::new();
//! names.push("Charlie");
//! names.push("Alice");
//! names.push("Bravo");
//! names.sort();
//! assert_eq!(names.to_string(), "[Alice, Bravo, Charlie]");
//! ```
//!
//! The list is single-threaded and synchronous; it is `Send`/`Sync` exactly
//! when `T` is, and callers needing shared mutation must synchronise
//! externally.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod list;
pub mod ordering;
mod sort;

// Public re-exports for the primary API surface.
pub use error::ListError;
pub use list::{FlexList, INITIAL_CAPACITY};
pub use ordering::{slot_order, ByRendering};
