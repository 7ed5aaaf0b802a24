use std::cmp::Ordering;

use crate::error::{Error, Result};

/// A mutable binary heap ordered by a caller-supplied comparator.
///
/// The record that compares [`Ordering::Greater`] under the comparator is
/// the extreme and sits at the root, so the heap itself is agnostic to
/// min/max semantics: a natural comparator yields largest-first extraction,
/// while a reversed comparator yields smallest-first extraction (the same
/// trick used to drive `std::collections::BinaryHeap` as a min-heap).
///
/// Unlike the standard library heap, records can be replaced in place at a
/// caller-known position with [`Heap::replace_at`], which restores heap
/// order locally. Together with [`Heap::collection`] this supports the
/// decrease-key pattern used by Prim's algorithm.
///
/// # Examples
/// ```
/// use spantree::Heap;
///
/// // Reversed comparison makes the smallest value the extreme.
/// let mut heap = Heap::new(|a: &u32, b: &u32| b.cmp(a));
/// heap.insert(7);
/// heap.insert(2);
/// heap.insert(9);
///
/// assert_eq!(heap.extract().unwrap(), 2);
/// assert_eq!(heap.extract().unwrap(), 7);
/// assert_eq!(heap.extract().unwrap(), 9);
/// assert!(heap.extract().is_err());
/// ```
pub struct Heap<T, F> {
    items: Vec<T>,
    cmp: F,
}

impl<T, F> Heap<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    /// Creates an empty heap ordered by `cmp`.
    pub fn new(cmp: F) -> Self {
        Heap {
            items: Vec::new(),
            cmp,
        }
    }

    /// Creates an empty heap with space reserved for `capacity` records.
    pub fn with_capacity(capacity: usize, cmp: F) -> Self {
        Heap {
            items: Vec::with_capacity(capacity),
            cmp,
        }
    }

    /// Returns the number of records currently held.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the heap holds no records.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns a reference to the extreme record without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.items.first()
    }

    /// Read-only view of the backing storage, in heap order (not sorted).
    ///
    /// Callers may scan this slice to locate a record's current position,
    /// then update it through [`Heap::replace_at`].
    pub fn collection(&self) -> &[T] {
        &self.items
    }

    /// Adds a record, restoring heap order by sift-up.
    ///
    /// # Complexity
    /// * Time: O(log n)
    pub fn insert(&mut self, record: T) {
        self.items.push(record);
        self.sift_up(self.items.len() - 1);
    }

    /// Removes and returns the extreme record (the root), replacing it
    /// with the last record and restoring order by sift-down.
    ///
    /// # Errors
    /// * `Error::EmptyQueue` if the heap holds no records
    ///
    /// # Complexity
    /// * Time: O(log n)
    pub fn extract(&mut self) -> Result<T> {
        if self.items.is_empty() {
            return Err(Error::EmptyQueue);
        }
        let extreme = self.items.swap_remove(0);
        if !self.items.is_empty() {
            self.sift_down(0);
        }
        Ok(extreme)
    }

    /// Overwrites the record at `index` and restores heap order from that
    /// position, sifting up when the new record is more extreme than the
    /// one it replaces and down otherwise.
    ///
    /// This is the decrease-key primitive: locate a record through
    /// [`Heap::collection`], then replace it with a re-keyed copy.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds; the position is caller-known
    /// by contract.
    ///
    /// # Complexity
    /// * Time: O(log n)
    pub fn replace_at(&mut self, index: usize, record: T) {
        let raised = (self.cmp)(&record, &self.items[index]) == Ordering::Greater;
        self.items[index] = record;
        if raised {
            self.sift_up(index);
        } else {
            self.sift_down(index);
        }
    }

    /// Moves the record at `child` toward the root until its parent is at
    /// least as extreme.
    fn sift_up(&mut self, mut child: usize) {
        while child > 0 {
            let parent = (child - 1) / 2;
            if (self.cmp)(&self.items[child], &self.items[parent]) != Ordering::Greater {
                break;
            }
            self.items.swap(child, parent);
            child = parent;
        }
    }

    /// Moves the record at `parent` toward the leaves until both children
    /// are no more extreme than it.
    fn sift_down(&mut self, mut parent: usize) {
        let len = self.items.len();
        loop {
            let left = 2 * parent + 1;
            let right = 2 * parent + 2;
            let mut extreme = parent;

            if left < len
                && (self.cmp)(&self.items[left], &self.items[extreme]) == Ordering::Greater
            {
                extreme = left;
            }
            if right < len
                && (self.cmp)(&self.items[right], &self.items[extreme]) == Ordering::Greater
            {
                extreme = right;
            }
            if extreme == parent {
                break;
            }
            self.items.swap(parent, extreme);
            parent = extreme;
        }
    }
}
