//! A contiguous, growable sequence container with explicit capacity control.
//!
//! # Overview
//!
//! [`GrowableArray`] keeps its elements in one owned buffer and tracks the
//! logical length separately from the allocated capacity:
//!
//! - Appends are amortized O(1): the buffer doubles when it runs out of room.
//! - Bulk operations ([`add_range`](GrowableArray::add_range),
//!   [`insert_range`](GrowableArray::insert_range)) reallocate at most once.
//! - Positional operations report bad indices through [`ArrayError`] instead
//!   of panicking, and never mutate the array when they fail.
//!
//! # Quick Start
//!
//! ```
//! use growable_array::{GrowableArray, growable_array};
//!
//! let mut numbers = GrowableArray::with_capacity(3);
//! numbers.add_range([1, 2, 3]);
//! numbers.add(5000);
//! assert_eq!(numbers.as_slice(), &[1, 2, 3, 5000]);
//! assert_eq!(numbers.capacity(), 6);
//!
//! numbers.insert(2, 2500).unwrap();
//! assert_eq!(numbers.remove_all(|x| *x > 1000), 2);
//! assert_eq!(numbers, [1, 2, 3]);
//!
//! let doubled = numbers.convert_all(|x| x * 2);
//! assert_eq!(doubled, growable_array![2, 4, 6]);
//! ```
//!
//! # Iteration
//!
//! [`GrowableArray::iter`] returns a [`SequenceIterator`], an explicit cursor
//! that can be driven by hand or used as a regular [`Iterator`]:
//!
//! ```
//! use growable_array::{CursorState, growable_array};
//!
//! let array = growable_array![10, 20];
//! let mut cursor = array.iter();
//! while cursor.advance() {
//!     assert!(cursor.current().is_some());
//! }
//! assert_eq!(cursor.state(), CursorState::Exhausted);
//!
//! let total: i32 = array.iter().sum();
//! assert_eq!(total, 30);
//! ```
//!
//! # Gotchas
//!
//! - `index == len` is a valid insertion point but never a valid read or write.
//! - [`GrowableArray::remove_all`] is a single pass but O(n²) in the worst case.
//! - [`GrowableArray::clear`] drops the elements and keeps the capacity; call
//!   [`GrowableArray::trim_excess`] to release it.

#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

// This works on std and no_std and is harmless.
extern crate alloc;

pub mod array;
pub mod error;
pub mod iter;
mod macros;
mod query;

pub use array::{DEFAULT_CAPACITY, GrowableArray};
pub use error::{ArrayError, Result};
pub use iter::{CursorState, IntoIter, SequenceIterator};
