//! # Linked Deque
//!
//! An unbounded double-ended queue backed by a doubly-linked chain of heap
//! nodes, with constant-time insertion and removal at both ends.
//!
//! This crate provides `LinkedDeque`, a node-per-element alternative to
//! `std::collections::VecDeque` for workloads that only ever touch the two
//! ends of the queue, plus the `AnyDeque` trait for writing code that runs
//! against either backend.
//!
//! ## Key Features
//!
//! * **O(1) at both ends:** `push_left`, `push_right`, `pop_left`, and
//!   `pop_right` each allocate or free exactly one node, never shifting or
//!   reallocating the rest.
//! * **Typed empty-pop errors:** popping from an empty deque returns
//!   `Err(Error::EmptyContainer)` and leaves the deque untouched, instead of
//!   panicking.
//! * **Forward iteration:** `iter` produces an independent front-to-back
//!   cursor; any number of cursors can walk the same deque at once.
//! * **Backend abstraction:** the `AnyDeque` trait is implemented for both
//!   `LinkedDeque` and `VecDeque`, so generic callers can swap storage
//!   strategies without code changes.
//! * **Unbounded:** there is no capacity and no "full" state; the deque grows
//!   one node at a time for as long as memory holds out.
//!
//! ## Examples
//!
//! ### Pushing and popping at both ends
//!
//! ```rust
//! use linked_deque::LinkedDeque;
//!
//! let mut deque = LinkedDeque::new();
//! deque.push_left("B");
//! deque.push_left("A");
//! deque.push_right("C");
//!
//! assert_eq!(deque.len(), 3);
//! assert_eq!(deque.iter().copied().collect::<Vec<_>>(), ["A", "B", "C"]);
//!
//! assert_eq!(deque.pop_right(), Ok("C"));
//! assert_eq!(deque.pop_left(), Ok("A"));
//! ```
//!
//! ### Empty pops are errors, not panics
//!
//! ```rust
//! use linked_deque::{Error, LinkedDeque};
//!
//! let mut deque = LinkedDeque::new();
//! deque.push_right(1);
//!
//! assert_eq!(deque.pop_left(), Ok(1));
//! assert_eq!(deque.pop_left(), Err(Error::EmptyContainer));
//! assert!(deque.is_empty());
//! ```
//!
//! ### Generic code over any deque backend
//!
//! ```rust
//! use std::collections::VecDeque;
//!
//! use linked_deque::{AnyDeque, LinkedDeque};
//!
//! fn rotate<T, D: AnyDeque<T>>(deque: &mut D) {
//!     if let Ok(item) = deque.pop_left() {
//!         deque.push_right(item);
//!     }
//! }
//!
//! let mut linked: LinkedDeque<i32> = [1, 2, 3].into_iter().collect();
//! rotate(&mut linked);
//! assert_eq!(linked.iter().copied().collect::<Vec<_>>(), [2, 3, 1]);
//!
//! let mut ring: VecDeque<i32> = [1, 2, 3].into_iter().collect();
//! rotate(&mut ring);
//! assert_eq!(ring, [2, 3, 1]);
//! ```

// --- Module Declarations ---

pub mod deque;
pub mod error;

// --- Re-exports ---

pub use deque::{AnyDeque, LinkedDeque};
pub use error::{Error, Result};
