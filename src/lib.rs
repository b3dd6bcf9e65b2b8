//! Arena-backed Fibonacci heap
//!
//! This crate provides a Fibonacci heap over integer keys with:
//! - O(1) amortized insert and decrease_key
//! - O(log n) amortized extract_min and delete
//!
//! The structure is a forest of heap-ordered multi-way trees whose roots are
//! linked in a circular doubly linked list. Instead of owning nodes through
//! raw pointers, all nodes live in a slotmap arena and link to each other by
//! generational [`EntryId`] handles: extracting or deleting an entry frees its
//! slot, so any handle kept by the caller goes stale and is rejected rather
//! than dereferenced.
//!
//! # Example
//!
//! ```rust
//! use fibheap::FibonacciHeap;
//!
//! let mut heap = FibonacciHeap::new();
//! let five = heap.insert(5);
//! heap.insert(2);
//! heap.insert(8);
//!
//! assert_eq!(heap.find_min().map(|(_, k)| k), Some(2));
//! assert_eq!(heap.extract_min(), Some(2));
//! heap.decrease_key(five, 1).unwrap();
//! assert_eq!(heap.find_min().map(|(_, k)| k), Some(1));
//! ```

pub mod arena;
pub mod driver;
pub mod error;
pub mod heap;
pub mod traverse;

mod ring;

pub use arena::EntryId;
pub use error::HeapError;
pub use heap::FibonacciHeap;
