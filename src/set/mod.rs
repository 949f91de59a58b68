//! Indexed set containers.
//!
//! This module provides [`IndexedSet`], a mutable set of unique elements
//! backed by a sorted contiguous buffer:
//!
//! - [`IndexedSet`]: a unique-element container with stable positional access
//!
//! # Positional Access
//!
//! Unlike a hash set, every element of an [`IndexedSet`] occupies an integer
//! position in `[0, len)`. Positions are stable between mutations: as long as
//! the set is not mutated, `element_at(i)` returns the same element for the
//! same `i`. Insertions and removals may shift the positions of other
//! elements (the buffer stays sorted and contiguous).
//!
//! # Examples
//!
//! ```rust
//! use idxset::set::IndexedSet;
//!
//! let mut set = IndexedSet::new();
//! assert!(set.insert(2));
//! assert!(set.insert(1));
//! assert!(!set.insert(2)); // already present
//!
//! assert_eq!(set.len(), 2);
//! assert_eq!(set.element_at(0), &1);
//! assert_eq!(set.element_at(1), &2);
//!
//! // Index-aware iteration
//! set.for_each_indexed(|index, value| {
//!     println!("{index}: {value}");
//! });
//!
//! // Removal by position
//! let removed = set.remove_at(0);
//! assert_eq!(removed, 1);
//! assert_eq!(set.element_at(0), &2);
//! ```

mod indexed_set;

pub use indexed_set::IndexedSet;
pub use indexed_set::IndexedSetIntoIterator;
pub use indexed_set::IndexedSetIterator;
