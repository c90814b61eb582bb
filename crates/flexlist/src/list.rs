//! Growable contiguous storage with manual capacity management.
//!
//! [`FlexList`] owns a buffer allocated to full capacity: `slots.len()` IS
//! the capacity, with live elements in `Some` slots at the front and
//! vacant `None` slots behind them. Growth reallocates at double the
//! capacity and moves the elements across in order; `clear` swaps the
//! buffer for a fresh one at the initial capacity.

use std::fmt;

use crate::error::ListError;
use crate::sort;

/// Capacity of a freshly created (or cleared) list.
pub const INITIAL_CAPACITY: usize = 10;

/// A growable, contiguous, ordered container with O(1) amortised append.
///
/// Invariant: positions `[0, len)` are live (`Some`); positions from `len`
/// to the capacity are vacant (`None`).
///
/// Not reentrant-safe: `FlexList` has no interior mutability, so shared
/// mutation across threads requires external synchronisation.
#[derive(Clone)]
pub struct FlexList<T> {
    /// Backing storage. The buffer length is the capacity and never
    /// shrinks except through [`FlexList::clear`].
    slots: Vec<Option<T>>,
    /// Number of live elements.
    len: usize,
}

impl<T> FlexList<T> {
    /// Create an empty list at [`INITIAL_CAPACITY`].
    pub fn new() -> Self {
        Self {
            slots: fresh_buffer(INITIAL_CAPACITY),
            len: 0,
        }
    }

    /// Create an empty list with a buffer of exactly `capacity` slots.
    ///
    /// A zero capacity is allowed; the first append then grows the buffer
    /// to [`INITIAL_CAPACITY`].
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: fresh_buffer(capacity),
            len: 0,
        }
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the list holds no live elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current buffer capacity in slots.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Append an element at the end.
    ///
    /// Doubles the buffer first if it is full. O(1) amortised; allocation
    /// exhaustion aborts the process.
    pub fn push(&mut self, element: T) {
        if self.len == self.slots.len() {
            self.grow();
        }
        self.slots[self.len] = Some(element);
        self.len += 1;
    }

    /// Insert an element at `index`, shifting `[index, len)` right by one.
    ///
    /// `index == len` appends. O(len − index).
    pub fn insert(&mut self, index: usize, element: T) -> Result<(), ListError> {
        if index > self.len {
            return Err(ListError::OutOfBounds {
                index,
                len: self.len,
            });
        }
        if self.len == self.slots.len() {
            self.grow();
        }
        for slot in (index..self.len).rev() {
            self.slots[slot + 1] = self.slots[slot].take();
        }
        self.slots[index] = Some(element);
        self.len += 1;
        Ok(())
    }

    /// Get the element at `index`.
    ///
    /// Bounds-checked against the live length, never against the raw
    /// buffer: indexing a vacant slot is an error, not a default value.
    pub fn get(&self, index: usize) -> Result<&T, ListError> {
        let err = ListError::OutOfBounds {
            index,
            len: self.len,
        };
        if index >= self.len {
            return Err(err);
        }
        // Live slots are always Some; a vacant slot below len would be a
        // bookkeeping bug and surfaces as the same error.
        self.slots[index].as_ref().ok_or(err)
    }

    /// Remove and return the element at `index`, shifting `(index, len)`
    /// left by one. The vacated last live slot becomes vacant. O(len − index).
    pub fn remove(&mut self, index: usize) -> Result<T, ListError> {
        if index >= self.len {
            return Err(ListError::OutOfBounds {
                index,
                len: self.len,
            });
        }
        let Some(removed) = self.slots[index].take() else {
            return Err(ListError::OutOfBounds {
                index,
                len: self.len,
            });
        };
        for slot in index..self.len - 1 {
            self.slots[slot] = self.slots[slot + 1].take();
        }
        self.slots[self.len - 1] = None;
        self.len -= 1;
        Ok(removed)
    }

    /// Drop the buffer and start over at [`INITIAL_CAPACITY`].
    ///
    /// This is a real reallocation, not a length reset: the old buffer is
    /// discarded even when it is larger, so a cleared list's footprint
    /// matches a freshly created one. Observable via [`FlexList::capacity`].
    pub fn clear(&mut self) {
        self.slots = fresh_buffer(INITIAL_CAPACITY);
        self.len = 0;
    }

    /// Iterate over the live elements in order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.slots[..self.len].iter().filter_map(Option::as_ref)
    }

    /// Reallocate at double the capacity and move the elements across.
    fn grow(&mut self) {
        let capacity = self.slots.len();
        let doubled = if capacity == 0 {
            INITIAL_CAPACITY
        } else {
            capacity * 2
        };
        let mut next = fresh_buffer(doubled);
        for (dst, src) in next.iter_mut().zip(self.slots.iter_mut()) {
            *dst = src.take();
        }
        self.slots = next;
    }
}

impl<T: Ord> FlexList<T> {
    /// Sort the live elements in place in ascending natural order.
    ///
    /// In-place unstable quicksort (last-element-pivot Lomuto partition):
    /// average O(n log n), worst case O(n²) on already-ordered input.
    /// No-op when fewer than two elements are live.
    pub fn sort(&mut self) {
        sort::quicksort(&mut self.slots[..self.len]);
    }
}

impl<T> Default for FlexList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for FlexList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Renders `"[e0, e1, ..., en-1]"`; an empty list renders as `"[]"`.
impl<T: fmt::Display> fmt::Display for FlexList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (position, element) in self.iter().enumerate() {
            if position > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{element}")?;
        }
        write!(f, "]")
    }
}

impl<T> From<Vec<T>> for FlexList<T> {
    fn from(elements: Vec<T>) -> Self {
        let mut list = Self::with_capacity(elements.len().max(INITIAL_CAPACITY));
        for element in elements {
            list.push(element);
        }
        list
    }
}

impl<T> FromIterator<T> for FlexList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        for element in iter {
            list.push(element);
        }
        list
    }
}

fn fresh_buffer<T>(capacity: usize) -> Vec<Option<T>> {
    let mut buffer = Vec::with_capacity(capacity);
    buffer.resize_with(capacity, || None);
    buffer
}
