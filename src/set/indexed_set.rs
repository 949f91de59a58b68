//! Indexed set backed by a sorted contiguous buffer.
//!
//! This module provides [`IndexedSet`], a mutable collection of unique
//! elements that supports both set operations and positional (index-based)
//! operations.
//!
//! # Overview
//!
//! `IndexedSet` stores its elements in strictly ascending order inside a
//! `SmallVec`:
//!
//! - Up to 8 elements live inline with no heap allocation
//! - Larger sets spill to a heap buffer, still sorted and contiguous
//! - Lookups use a linear scan while the set is small and binary search
//!   once it grows past the inline capacity
//!
//! Because the buffer is always sorted, index `i` addresses the `i`-th
//! smallest element, and the valid indices are exactly `[0, len)`. Positions
//! are stable between mutations; an insertion or removal may shift the
//! positions of other elements.
//!
//! # Time Complexity
//!
//! | Operation             | Small (n <= 8)    | Large (n > 8)       |
//! |-----------------------|-------------------|---------------------|
//! | `insert`              | O(n)              | O(n)                |
//! | `remove`              | O(n)              | O(n)                |
//! | `remove_at`           | O(n)              | O(n)                |
//! | `contains`            | O(n)              | O(log n)            |
//! | `index_of`            | O(n)              | O(log n)            |
//! | `element_at` / `get`  | O(1)              | O(1)                |
//! | `len` / `is_empty`    | O(1)              | O(1)                |
//! | `iter`                | O(1) + O(n)       | O(1) + O(n)         |
//! | `union`               | O(n + m)          | O(n + m)            |
//! | `difference`          | O(n + m)          | O(n + m)            |
//! | `intersection`        | O(n + m)          | O(n + m)            |
//!
//! **Note**: Set operations (`union`, `difference`, `intersection`) use
//! two-pointer algorithms over the sorted buffers and run in linear time.
//!
//! # Examples
//!
//! ```rust
//! use idxset::set::IndexedSet;
//!
//! let mut set = IndexedSet::new();
//! assert!(set.is_empty());
//!
//! // Insert elements; the return value reports whether the set changed
//! assert!(set.insert(5));
//! assert!(set.insert(3));
//! assert!(!set.insert(5)); // duplicate, set unchanged
//! assert_eq!(set.len(), 2);
//!
//! // Positional access: index 0 is the smallest element
//! assert_eq!(set.element_at(0), &3);
//! assert_eq!(set.element_at(1), &5);
//!
//! // Index-aware filtering walks indices high-to-low, so removing by
//! // position never disturbs a position that has not been visited yet
//! set.retain_all_indexed(|_, value| *value > 3);
//! assert_eq!(set.to_vec(), vec![5]);
//! ```
//!
//! # Iteration and Mutation
//!
//! The indexed helpers (`for_each_indexed`, `all_indexed`, `any_indexed`,
//! `none_indexed`) borrow the set for the duration of the call, so a
//! predicate cannot mutate the set it is iterating; the borrow checker
//! rejects such code at compile time.

use smallvec::SmallVec;
use static_assertions::const_assert;
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::ops::{AddAssign, Index, SubAssign};

/// Number of elements stored inline before the buffer spills to the heap.
///
/// Doubles as the cutoff below which lookups use a linear scan instead of
/// binary search.
const INLINE_CAPACITY: usize = 8;

// The linear-scan regime must cover at least the inline buffer.
const_assert!(INLINE_CAPACITY > 0);

/// A set of unique elements with stable positional access.
///
/// Elements are kept in strictly ascending order in a contiguous buffer, so
/// every element occupies an integer position in `[0, len)` and `element_at`
/// is a direct slice read. Uniqueness is enforced on insertion.
///
/// # Ordering
///
/// The positional order is ascending [`Ord`] order: `element_at(0)` is the
/// smallest element and `element_at(len - 1)` the largest. Positions are
/// stable between mutations; insertions and removals may shift the positions
/// of other elements.
///
/// # Type Parameters
///
/// * `T` - The element type. Must implement `Ord`; the total order is what
///   maintains the buffer layout and makes indices deterministic.
///
/// # Examples
///
/// ```rust
/// use idxset::set::IndexedSet;
///
/// let mut set = IndexedSet::new();
/// set.insert(3);
/// set.insert(1);
/// set.insert(2);
///
/// let values: Vec<i32> = set.iter().copied().collect();
/// assert_eq!(values, vec![1, 2, 3]);
/// ```
#[derive(Clone)]
pub struct IndexedSet<T: Ord> {
    elements: SmallVec<[T; INLINE_CAPACITY]>,
}

impl<T: Ord> IndexedSet<T> {
    /// Creates a new empty set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use idxset::set::IndexedSet;
    ///
    /// let set: IndexedSet<i32> = IndexedSet::new();
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            elements: SmallVec::new(),
        }
    }

    /// Creates a new empty set with space for at least `capacity` elements.
    ///
    /// Capacities up to the inline capacity (8) allocate nothing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use idxset::set::IndexedSet;
    ///
    /// let set: IndexedSet<i32> = IndexedSet::with_capacity(32);
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: SmallVec::with_capacity(capacity),
        }
    }

    /// Creates an `IndexedSet` from a sorted, deduplicated `Vec`.
    ///
    /// This provides efficient bulk construction by consuming the `Vec`
    /// directly instead of inserting element by element.
    ///
    /// # Preconditions
    ///
    /// - The vector must contain elements in strictly ascending order
    /// - No duplicate elements are allowed
    ///
    /// In debug builds, these preconditions are validated with
    /// `debug_assert!`. In release builds, invalid input yields an incorrect
    /// set state (logic error, not memory unsafety).
    ///
    /// # Complexity
    ///
    /// O(n).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use idxset::set::IndexedSet;
    ///
    /// let set = IndexedSet::from_sorted_vec(vec![2, 4, 6, 8, 10]);
    /// assert_eq!(set.len(), 5);
    /// assert_eq!(set.element_at(2), &6);
    /// ```
    #[must_use]
    pub fn from_sorted_vec(vec: Vec<T>) -> Self {
        #[cfg(debug_assertions)]
        debug_assert!(
            is_strictly_sorted(&vec),
            "{}",
            SORTED_INVARIANT_PANIC_MESSAGE
        );

        Self {
            elements: SmallVec::from_vec(vec),
        }
    }

    /// Creates an `IndexedSet` from a sorted, deduplicated iterator.
    ///
    /// # Preconditions
    ///
    /// - The iterator must yield elements in strictly ascending order
    /// - No duplicate elements are allowed
    ///
    /// In debug builds, these preconditions are validated with
    /// `debug_assert!`. In release builds, invalid input yields an incorrect
    /// set state (logic error, not memory unsafety).
    ///
    /// # Complexity
    ///
    /// O(n).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use idxset::set::IndexedSet;
    ///
    /// let set = IndexedSet::from_sorted_iter(1..=20);
    /// assert_eq!(set.len(), 20);
    /// assert_eq!(set.element_at(0), &1);
    /// ```
    #[must_use]
    pub fn from_sorted_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut elements: SmallVec<[T; INLINE_CAPACITY]> = SmallVec::new();

        for element in iter {
            debug_assert!(
                elements.last().is_none_or(|last| last < &element),
                "{}",
                SORTED_INVARIANT_PANIC_MESSAGE
            );
            elements.push(element);
        }

        Self { elements }
    }

    /// Returns the number of elements in the set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use idxset::set::IndexedSet;
    ///
    /// let mut set = IndexedSet::new();
    /// set.insert(1);
    /// set.insert(2);
    /// assert_eq!(set.len(), 2);
    /// ```
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the set contains no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the index of the last element, or `None` if the set is empty.
    ///
    /// Equals `len() - 1` for a non-empty set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use idxset::set::IndexedSet;
    ///
    /// let mut set = IndexedSet::new();
    /// assert_eq!(set.last_index(), None);
    ///
    /// set.insert(10);
    /// set.insert(20);
    /// assert_eq!(set.last_index(), Some(1));
    /// ```
    #[inline]
    #[must_use]
    pub fn last_index(&self) -> Option<usize> {
        self.elements.len().checked_sub(1)
    }

    /// Returns `true` if the set contains the specified element.
    ///
    /// This method supports borrowed forms of the element type through the
    /// `Borrow` trait. For example, with `IndexedSet<String>`, you can
    /// search using `&str` directly without allocating a new `String`.
    ///
    /// # Complexity
    ///
    /// O(n) linear scan up to 8 elements, O(log n) binary search above.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use idxset::set::IndexedSet;
    ///
    /// let mut set = IndexedSet::new();
    /// set.insert(1);
    /// set.insert(2);
    /// assert!(set.contains(&1));
    /// assert!(!set.contains(&3));
    /// ```
    #[inline]
    #[must_use]
    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.search(element).is_ok()
    }

    /// Returns the position of the specified element, or `None` if absent.
    ///
    /// The returned index is valid until the next mutation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use idxset::set::IndexedSet;
    ///
    /// let mut set = IndexedSet::new();
    /// set.insert(30);
    /// set.insert(10);
    /// set.insert(20);
    /// assert_eq!(set.index_of(&20), Some(1));
    /// assert_eq!(set.index_of(&99), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn index_of<Q>(&self, element: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.search(element).ok()
    }

    /// Returns a reference to the element at `index`, or `None` if the index
    /// is out of range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use idxset::set::IndexedSet;
    ///
    /// let set = IndexedSet::from_sorted_vec(vec![1, 2, 3]);
    /// assert_eq!(set.get(1), Some(&2));
    /// assert_eq!(set.get(3), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.elements.get(index)
    }

    /// Returns a reference to the element at `index`.
    ///
    /// Index `0` addresses the smallest element. Use [`get`](Self::get) for
    /// a non-panicking variant.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use idxset::set::IndexedSet;
    ///
    /// let mut set = IndexedSet::new();
    /// set.insert(5);
    /// set.insert(3);
    /// assert_eq!(set.element_at(0), &3);
    /// assert_eq!(set.element_at(1), &5);
    /// ```
    #[inline]
    #[must_use]
    pub fn element_at(&self, index: usize) -> &T {
        match self.elements.get(index) {
            Some(element) => element,
            None => index_out_of_range(index, self.elements.len()),
        }
    }

    /// Returns a reference to the smallest element, or `None` if empty.
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.elements.first()
    }

    /// Returns a reference to the largest element, or `None` if empty.
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.elements.last()
    }

    /// Returns the elements as a sorted slice.
    ///
    /// This is a zero-copy view of the underlying buffer; the slice is in
    /// ascending order and `slice[i]` equals `element_at(i)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use idxset::set::IndexedSet;
    ///
    /// let set = IndexedSet::from_sorted_vec(vec![1, 2, 3]);
    /// assert_eq!(set.as_slice(), &[1, 2, 3]);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        self.elements.as_slice()
    }

    /// Inserts an element into the set.
    ///
    /// Returns `true` if the element was inserted, `false` if it was already
    /// present (in which case the set is unchanged). Inserting may shift the
    /// positions of elements that compare greater than `element`.
    ///
    /// # Complexity
    ///
    /// O(n): position lookup plus buffer shift.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use idxset::set::IndexedSet;
    ///
    /// let mut set = IndexedSet::new();
    /// assert!(set.insert(42));
    /// assert!(!set.insert(42));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn insert(&mut self, element: T) -> bool {
        match self.search(&element) {
            Ok(_) => false,
            Err(position) => {
                self.elements.insert(position, element);
                true
            }
        }
    }

    /// Removes an element from the set.
    ///
    /// Returns `true` if the element was present and removed, `false` if it
    /// was absent (in which case the set is unchanged). Removing shifts the
    /// positions of elements that compare greater than `element` down by one.
    ///
    /// This method supports borrowed forms of the element type through the
    /// `Borrow` trait.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use idxset::set::IndexedSet;
    ///
    /// let mut set = IndexedSet::new();
    /// set.insert(1);
    /// set.insert(2);
    /// assert!(set.remove(&1));
    /// assert!(!set.remove(&1));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn remove<Q>(&mut self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        match self.search(element) {
            Ok(position) => {
                self.elements.remove(position);
                true
            }
            Err(_) => false,
        }
    }

    /// Removes and returns the element at `index`.
    ///
    /// Every element previously at a position greater than `index` moves
    /// down by one; the relative order of the remaining elements is
    /// preserved.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use idxset::set::IndexedSet;
    ///
    /// let mut set = IndexedSet::from_sorted_vec(vec![1, 2, 3]);
    /// assert_eq!(set.remove_at(1), 2);
    /// assert_eq!(set.to_vec(), vec![1, 3]);
    /// ```
    pub fn remove_at(&mut self, index: usize) -> T {
        if index >= self.elements.len() {
            index_out_of_range(index, self.elements.len());
        }
        self.elements.remove(index)
    }

    /// Removes all elements from the set.
    #[inline]
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// Invokes `action` once per element in increasing index order, passing
    /// each element's current index and value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use idxset::set::IndexedSet;
    ///
    /// let set = IndexedSet::from_sorted_vec(vec![10, 20, 30]);
    /// let mut seen = Vec::new();
    /// set.for_each_indexed(|index, value| seen.push((index, *value)));
    /// assert_eq!(seen, vec![(0, 10), (1, 20), (2, 30)]);
    /// ```
    pub fn for_each_indexed<F>(&self, mut action: F)
    where
        F: FnMut(usize, &T),
    {
        for (index, element) in self.elements.iter().enumerate() {
            action(index, element);
        }
    }

    /// Returns `true` if `predicate` holds for every `(index, element)`
    /// pair, short-circuiting on the first failure.
    ///
    /// Returns `true` on an empty set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use idxset::set::IndexedSet;
    ///
    /// let set = IndexedSet::from_sorted_vec(vec![1, 2, 3]);
    /// assert!(set.all_indexed(|index, value| *value > index as i32));
    /// assert!(!set.all_indexed(|_, value| *value > 1));
    /// ```
    pub fn all_indexed<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(usize, &T) -> bool,
    {
        for (index, element) in self.elements.iter().enumerate() {
            if !predicate(index, element) {
                return false;
            }
        }
        true
    }

    /// Returns `true` if `predicate` holds for at least one
    /// `(index, element)` pair, short-circuiting on the first success.
    ///
    /// Returns `false` on an empty set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use idxset::set::IndexedSet;
    ///
    /// let set = IndexedSet::from_sorted_vec(vec![1, 2, 3]);
    /// assert!(set.any_indexed(|_, value| *value == 2));
    /// assert!(!set.any_indexed(|_, value| *value > 9));
    /// ```
    pub fn any_indexed<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(usize, &T) -> bool,
    {
        for (index, element) in self.elements.iter().enumerate() {
            if predicate(index, element) {
                return true;
            }
        }
        false
    }

    /// Returns `true` if `predicate` holds for no `(index, element)` pair,
    /// short-circuiting on the first match.
    ///
    /// Returns `true` on an empty set. Logically equivalent to
    /// `!any_indexed(predicate)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use idxset::set::IndexedSet;
    ///
    /// let set = IndexedSet::from_sorted_vec(vec![1, 2, 3]);
    /// assert!(set.none_indexed(|_, value| *value > 9));
    /// assert!(!set.none_indexed(|_, value| *value == 2));
    /// ```
    pub fn none_indexed<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(usize, &T) -> bool,
    {
        for (index, element) in self.elements.iter().enumerate() {
            if predicate(index, element) {
                return false;
            }
        }
        true
    }

    /// Removes every element for which `predicate(index, element)` holds.
    ///
    /// Indices are visited from the highest down to 0, so removing an
    /// element never shifts the position of an element that has not been
    /// visited yet. The predicate receives each element's index as of the
    /// moment of invocation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use idxset::set::IndexedSet;
    ///
    /// let mut set = IndexedSet::from_sorted_vec(vec![1, 2, 3, 4]);
    /// set.remove_all_indexed(|_, value| *value % 2 == 0);
    /// assert_eq!(set.to_vec(), vec![1, 3]);
    /// ```
    pub fn remove_all_indexed<P>(&mut self, mut predicate: P)
    where
        P: FnMut(usize, &T) -> bool,
    {
        // High-to-low so a removal never shifts an unvisited position.
        for index in (0..self.elements.len()).rev() {
            if predicate(index, &self.elements[index]) {
                self.elements.remove(index);
            }
        }
    }

    /// Removes every element for which `predicate(index, element)` does NOT
    /// hold, keeping exactly the satisfying subset in its original relative
    /// order.
    ///
    /// Indices are visited from the highest down to 0, as in
    /// [`remove_all_indexed`](Self::remove_all_indexed).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use idxset::set::IndexedSet;
    ///
    /// let mut set = IndexedSet::from_sorted_vec(vec![1, 2, 3, 4]);
    /// set.retain_all_indexed(|_, value| *value % 2 == 0);
    /// assert_eq!(set.to_vec(), vec![2, 4]);
    /// ```
    pub fn retain_all_indexed<P>(&mut self, mut predicate: P)
    where
        P: FnMut(usize, &T) -> bool,
    {
        for index in (0..self.elements.len()).rev() {
            if !predicate(index, &self.elements[index]) {
                self.elements.remove(index);
            }
        }
    }

    /// Returns an iterator over references to the elements in ascending
    /// (index) order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use idxset::set::IndexedSet;
    ///
    /// let set = IndexedSet::from_sorted_vec(vec![1, 2, 3]);
    /// let doubled: Vec<i32> = set.iter().map(|value| value * 2).collect();
    /// assert_eq!(doubled, vec![2, 4, 6]);
    /// ```
    #[inline]
    #[must_use]
    pub fn iter(&self) -> IndexedSetIterator<'_, T> {
        IndexedSetIterator {
            inner: self.elements.iter(),
        }
    }

    /// Locates `element` in the sorted buffer.
    ///
    /// Returns `Ok(position)` if present, `Err(insertion_point)` otherwise.
    /// Uses a linear scan up to the inline capacity and binary search above.
    fn search<Q>(&self, element: &Q) -> Result<usize, usize>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        if self.elements.len() <= INLINE_CAPACITY {
            for (index, item) in self.elements.iter().enumerate() {
                match item.borrow().cmp(element) {
                    Ordering::Less => {}
                    Ordering::Equal => return Ok(index),
                    Ordering::Greater => return Err(index),
                }
            }
            Err(self.elements.len())
        } else {
            self.elements
                .binary_search_by(|item| item.borrow().cmp(element))
        }
    }
}

impl<T: Ord + Clone> IndexedSet<T> {
    /// Returns a sorted `Vec` containing clones of all elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use idxset::set::IndexedSet;
    ///
    /// let mut set = IndexedSet::new();
    /// set.insert(3);
    /// set.insert(1);
    /// set.insert(2);
    /// assert_eq!(set.to_vec(), vec![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.elements.as_slice().to_vec()
    }

    /// Returns the union of two sets as a new set.
    ///
    /// The result contains every element that is in `self`, in `other`, or
    /// in both. Neither input is modified.
    ///
    /// # Complexity
    ///
    /// O(n + m), two-pointer merge with a disjoint-range fast path.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use idxset::set::IndexedSet;
    ///
    /// let left = IndexedSet::from_sorted_vec(vec![1, 3, 5]);
    /// let right = IndexedSet::from_sorted_vec(vec![2, 3, 4]);
    /// assert_eq!(left.union(&right).to_vec(), vec![1, 2, 3, 4, 5]);
    /// ```
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        if self.is_empty() {
            return other.clone();
        }
        if other.is_empty() {
            return self.clone();
        }

        Self::from_sorted_vec(union_slices(self.as_slice(), other.as_slice()))
    }

    /// Returns the set difference (`self` minus `other`) as a new set.
    ///
    /// The result contains every element of `self` that is not in `other`.
    /// Neither input is modified.
    ///
    /// # Complexity
    ///
    /// O(n + m), two-pointer walk with a disjoint-range fast path.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use idxset::set::IndexedSet;
    ///
    /// let left = IndexedSet::from_sorted_vec(vec![1, 2, 3, 4, 5]);
    /// let right = IndexedSet::from_sorted_vec(vec![3, 4, 5, 6, 7]);
    /// assert_eq!(left.difference(&right).to_vec(), vec![1, 2]);
    /// ```
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        if self.is_empty() || other.is_empty() {
            return self.clone();
        }

        Self::from_sorted_vec(difference_slices(self.as_slice(), other.as_slice()))
    }

    /// Returns the set intersection as a new set.
    ///
    /// The result contains every element that is in both `self` and `other`.
    /// Neither input is modified.
    ///
    /// # Complexity
    ///
    /// O(n + m), two-pointer walk with a disjoint-range fast path.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use idxset::set::IndexedSet;
    ///
    /// let left = IndexedSet::from_sorted_vec(vec![1, 2, 3, 4, 5]);
    /// let right = IndexedSet::from_sorted_vec(vec![3, 4, 5, 6, 7]);
    /// assert_eq!(left.intersection(&right).to_vec(), vec![3, 4, 5]);
    /// ```
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        if self.is_empty() || other.is_empty() {
            return Self::new();
        }

        Self::from_sorted_vec(intersection_slices(self.as_slice(), other.as_slice()))
    }
}

impl<T: Ord> Default for IndexedSet<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord + std::fmt::Debug> std::fmt::Debug for IndexedSet<T> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<T: Ord> PartialEq for IndexedSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Ord> Eq for IndexedSet<T> {}

impl<T: Ord + Hash> Hash for IndexedSet<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // The sorted buffer is a canonical form: equal sets hash equally.
        self.as_slice().hash(state);
    }
}

impl<T: Ord> FromIterator<T> for IndexedSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T: Ord> Extend<T> for IndexedSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.insert(element);
        }
    }
}

impl<T: Ord> Index<usize> for IndexedSet<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        self.element_at(index)
    }
}

impl<T: Ord> AddAssign<T> for IndexedSet<T> {
    /// `set += element` inserts `element`; no-op if already present.
    #[inline]
    fn add_assign(&mut self, element: T) {
        self.insert(element);
    }
}

impl<T: Ord> SubAssign<T> for IndexedSet<T> {
    /// `set -= element` removes `element`; no-op if absent.
    #[inline]
    fn sub_assign(&mut self, element: T) {
        self.remove(&element);
    }
}

impl<'a, T: Ord> SubAssign<&'a T> for IndexedSet<T> {
    /// `set -= &element` removes `element`; no-op if absent.
    #[inline]
    fn sub_assign(&mut self, element: &'a T) {
        self.remove(element);
    }
}

impl<'a, T: Ord> IntoIterator for &'a IndexedSet<T> {
    type Item = &'a T;
    type IntoIter = IndexedSetIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Ord> IntoIterator for IndexedSet<T> {
    type Item = T;
    type IntoIter = IndexedSetIntoIterator<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IndexedSetIntoIterator {
            inner: self.elements.into_iter(),
        }
    }
}

/// Iterator over references to the elements of an [`IndexedSet`], in
/// ascending (index) order.
pub struct IndexedSetIterator<'a, T> {
    inner: std::slice::Iter<'a, T>,
}

impl<'a, T> Iterator for IndexedSetIterator<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IndexedSetIterator<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for IndexedSetIterator<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

/// Owning iterator over the elements of an [`IndexedSet`], in ascending
/// (index) order.
pub struct IndexedSetIntoIterator<T> {
    inner: smallvec::IntoIter<[T; INLINE_CAPACITY]>,
}

impl<T> Iterator for IndexedSetIntoIterator<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IndexedSetIntoIterator<T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for IndexedSetIntoIterator<T> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

/// Merges two sorted, deduplicated slices into a new sorted, deduplicated
/// `Vec`.
///
/// Uses an index-based two-pointer algorithm with an integrated disjoint
/// fast path. When the ranges do not overlap, the comparison loop is skipped
/// entirely and the slices are concatenated directly.
///
/// # Preconditions
///
/// Both `left` and `right` must be sorted in strictly ascending order.
fn union_slices<T: Clone + Ord>(left: &[T], right: &[T]) -> Vec<T> {
    if left.is_empty() {
        return right.to_vec();
    }
    if right.is_empty() {
        return left.to_vec();
    }

    // Disjoint fast path: no overlap between ranges.
    // Both slices are non-empty (checked above), so last()/first() are safe.
    if left.last().unwrap() < right.first().unwrap() {
        let mut result = Vec::with_capacity(left.len() + right.len());
        result.extend_from_slice(left);
        result.extend_from_slice(right);
        return result;
    }
    if right.last().unwrap() < left.first().unwrap() {
        let mut result = Vec::with_capacity(left.len() + right.len());
        result.extend_from_slice(right);
        result.extend_from_slice(left);
        return result;
    }

    // General two-pointer merge with deduplication
    let mut result = Vec::with_capacity(left.len() + right.len());
    let mut left_index = 0;
    let mut right_index = 0;

    while left_index < left.len() && right_index < right.len() {
        match left[left_index].cmp(&right[right_index]) {
            Ordering::Less => {
                result.push(left[left_index].clone());
                left_index += 1;
            }
            Ordering::Greater => {
                result.push(right[right_index].clone());
                right_index += 1;
            }
            Ordering::Equal => {
                result.push(left[left_index].clone());
                left_index += 1;
                right_index += 1;
            }
        }
    }

    // Tail: copy remaining elements in bulk
    if left_index < left.len() {
        result.extend_from_slice(&left[left_index..]);
    }
    if right_index < right.len() {
        result.extend_from_slice(&right[right_index..]);
    }

    result
}

/// Computes the set difference of two sorted, deduplicated slices.
///
/// Returns a new sorted `Vec` containing the elements of `left` that are not
/// in `right`.
///
/// # Preconditions
///
/// Both `left` and `right` must be sorted in strictly ascending order.
fn difference_slices<T: Clone + Ord>(left: &[T], right: &[T]) -> Vec<T> {
    if left.is_empty() {
        return Vec::new();
    }
    if right.is_empty() {
        return left.to_vec();
    }

    // Disjoint fast path: if the ranges don't overlap, left is the result.
    if left.last().unwrap() < right.first().unwrap()
        || right.last().unwrap() < left.first().unwrap()
    {
        return left.to_vec();
    }

    let mut result = Vec::with_capacity(left.len());
    let mut left_index = 0;
    let mut right_index = 0;

    while left_index < left.len() && right_index < right.len() {
        match left[left_index].cmp(&right[right_index]) {
            Ordering::Less => {
                result.push(left[left_index].clone());
                left_index += 1;
            }
            Ordering::Greater => {
                right_index += 1;
            }
            Ordering::Equal => {
                left_index += 1;
                right_index += 1;
            }
        }
    }

    // Remaining left elements are all in the difference
    if left_index < left.len() {
        result.extend_from_slice(&left[left_index..]);
    }

    result
}

/// Computes the set intersection of two sorted, deduplicated slices.
///
/// Returns a new sorted `Vec` containing the elements present in both
/// slices.
///
/// # Preconditions
///
/// Both `left` and `right` must be sorted in strictly ascending order.
fn intersection_slices<T: Clone + Ord>(left: &[T], right: &[T]) -> Vec<T> {
    if left.is_empty() || right.is_empty() {
        return Vec::new();
    }

    // Disjoint fast path: if the ranges don't overlap, nothing intersects.
    if left.last().unwrap() < right.first().unwrap()
        || right.last().unwrap() < left.first().unwrap()
    {
        return Vec::new();
    }

    let mut result = Vec::with_capacity(left.len().min(right.len()));
    let mut left_index = 0;
    let mut right_index = 0;

    while left_index < left.len() && right_index < right.len() {
        match left[left_index].cmp(&right[right_index]) {
            Ordering::Less => {
                left_index += 1;
            }
            Ordering::Greater => {
                right_index += 1;
            }
            Ordering::Equal => {
                result.push(left[left_index].clone());
                left_index += 1;
                right_index += 1;
            }
        }
    }

    result
}

/// Diverging out-of-range report for positional operations.
#[cold]
#[inline(never)]
fn index_out_of_range(index: usize, length: usize) -> ! {
    panic!("index out of range: the index is {index} but the length is {length}")
}

/// Message constant for panic when `from_sorted_*` receives invalid input.
const SORTED_INVARIANT_PANIC_MESSAGE: &str =
    "from_sorted_* requires strictly increasing elements (sorted + deduplicated)";

#[cfg(debug_assertions)]
#[inline]
fn is_strictly_sorted<T: Ord>(slice: &[T]) -> bool {
    slice.windows(2).all(|window| window[0] < window[1])
}
