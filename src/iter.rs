//! Traversal over a [`GrowableArray`].
//!
//! [`SequenceIterator`] is an explicit three-state cursor:
//!
//! ```text
//! NotStarted ──advance──▶ InRange ──advance──▶ InRange ... ──▶ Exhausted
//!      │                                                          ▲
//!      └──────────────── advance on an empty array ───────────────┘
//! ```
//!
//! The cursor re-reads the array's length on every [`advance`](SequenceIterator::advance).
//! It holds a shared borrow, so the array cannot be structurally modified while
//! a traversal is alive. A traversal cannot be restarted: call
//! [`GrowableArray::iter`] again for a fresh cursor.

use alloc::boxed::Box;
use core::{fmt, iter::FusedIterator, mem::MaybeUninit, ptr, slice};

use crate::array::GrowableArray;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorState {
    NotStarted,
    /// The cursor points at a live element that [`SequenceIterator::current`] returns.
    InRange,
    /// Terminal. Never left once entered.
    Exhausted,
}

/// A lazy, finite, forward cursor over one [`GrowableArray`].
pub struct SequenceIterator<'a, T> {
    array: &'a GrowableArray<T>,
    cursor: usize,
    state: CursorState,
}

impl<'a, T> SequenceIterator<'a, T> {
    pub fn new(array: &'a GrowableArray<T>) -> Self {
        Self {
            array,
            cursor: 0,
            state: CursorState::NotStarted,
        }
    }

    pub fn state(&self) -> CursorState {
        self.state
    }

    /// Moves to the next element. Returns `true` if one is available.
    pub fn advance(&mut self) -> bool {
        match self.state {
            CursorState::NotStarted => self.cursor = 0,
            CursorState::InRange => self.cursor += 1,
            CursorState::Exhausted => return false,
        }

        if self.cursor >= self.array.len() {
            self.state = CursorState::Exhausted;
            false
        } else {
            self.state = CursorState::InRange;
            true
        }
    }

    /// The element under the cursor, or `None` unless the state is [`CursorState::InRange`].
    pub fn current(&self) -> Option<&'a T> {
        match self.state {
            CursorState::InRange => self.array.as_slice().get(self.cursor),
            CursorState::NotStarted | CursorState::Exhausted => None,
        }
    }

    fn remaining(&self) -> usize {
        let len = self.array.len();
        match self.state {
            CursorState::NotStarted => len,
            CursorState::InRange => len.saturating_sub(self.cursor + 1),
            CursorState::Exhausted => 0,
        }
    }
}

impl<'a, T> Iterator for SequenceIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.advance() {
            self.current()
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for SequenceIterator<'_, T> {}

impl<T> FusedIterator for SequenceIterator<'_, T> {}

impl<T> Clone for SequenceIterator<'_, T> {
    fn clone(&self) -> Self {
        Self {
            array: self.array,
            cursor: self.cursor,
            state: self.state,
        }
    }
}

impl<T> fmt::Debug for SequenceIterator<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SequenceIterator")
            .field("cursor", &self.cursor)
            .field("state", &self.state)
            .field("len", &self.array.len())
            .finish()
    }
}

/// Owning iterator returned by `GrowableArray::into_iter`.
///
/// Elements that are never yielded are dropped with the iterator.
pub struct IntoIter<T> {
    buffer: Box<[MaybeUninit<T>]>,
    next: usize,
    end: usize,
}

impl<T> IntoIter<T> {
    /// `buffer` must hold `len` initialized elements at its start.
    pub(crate) fn new(buffer: Box<[MaybeUninit<T>]>, len: usize) -> Self {
        debug_assert!(len <= buffer.len());
        Self {
            buffer,
            next: 0,
            end: len,
        }
    }

    pub fn as_slice(&self) -> &[T] {
        // SAFETY: slots [next, end) are initialized and not yet yielded.
        unsafe {
            slice::from_raw_parts(
                self.buffer.as_ptr().add(self.next).cast::<T>(),
                self.end - self.next,
            )
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.next == self.end {
            return None;
        }
        // SAFETY: `next < end`, so the slot is initialized. Advancing `next`
        // marks it as moved out.
        let item = unsafe { self.buffer[self.next].assume_init_read() };
        self.next += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.next;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.next == self.end {
            return None;
        }
        self.end -= 1;
        // SAFETY: the slot at the old `end - 1` is initialized and now outside [next, end).
        Some(unsafe { self.buffer[self.end].assume_init_read() })
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        let remaining: *mut [T] = ptr::slice_from_raw_parts_mut(
            self.buffer[self.next..].as_mut_ptr().cast::<T>(),
            self.end - self.next,
        );
        self.next = self.end;
        // SAFETY: `remaining` covers the elements that were never yielded.
        unsafe { ptr::drop_in_place(remaining) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn sample() -> GrowableArray<i32> {
        crate::growable_array![1, 2, 3]
    }

    #[test]
    fn test_state_transitions() {
        let array = sample();
        let mut iter = array.iter();
        assert_eq!(iter.state(), CursorState::NotStarted);
        assert_eq!(iter.current(), None);

        assert!(iter.advance());
        assert_eq!(iter.state(), CursorState::InRange);
        assert_eq!(iter.current(), Some(&1));
        // current() does not move the cursor
        assert_eq!(iter.current(), Some(&1));

        assert!(iter.advance());
        assert_eq!(iter.current(), Some(&2));
        assert!(iter.advance());
        assert_eq!(iter.current(), Some(&3));

        assert!(!iter.advance());
        assert_eq!(iter.state(), CursorState::Exhausted);
        assert_eq!(iter.current(), None);

        assert!(!iter.advance());
        assert_eq!(iter.state(), CursorState::Exhausted);
    }

    #[test]
    fn test_empty_array_exhausts_immediately() {
        let array = GrowableArray::<i32>::new();
        let mut iter = array.iter();
        assert!(!iter.advance());
        assert_eq!(iter.state(), CursorState::Exhausted);
    }

    #[test]
    fn test_independent_cursors() {
        let array = sample();
        let mut first = array.iter();
        let mut second = array.iter();
        first.advance();
        first.advance();
        second.advance();
        assert_eq!(first.current(), Some(&2));
        assert_eq!(second.current(), Some(&1));
    }

    #[test]
    fn test_size_hint_tracks_cursor() {
        let array = sample();
        let mut iter = array.iter();
        assert_eq!(iter.len(), 3);
        iter.next();
        assert_eq!(iter.len(), 2);
        iter.next();
        iter.next();
        assert_eq!(iter.len(), 0);
        assert_eq!(iter.next(), None);
        assert_eq!(iter.len(), 0);
    }

    #[test]
    fn test_cursor_ignores_spare_capacity() {
        let mut array = GrowableArray::with_capacity(16);
        array.add(7);
        let items: Vec<_> = array.iter().copied().collect();
        assert_eq!(items, [7]);
    }

    #[test]
    fn test_into_iter_both_ends() {
        let array = crate::growable_array![1, 2, 3, 4];
        let mut iter = array.into_iter();
        assert_eq!(iter.next(), Some(1));
        assert_eq!(iter.next_back(), Some(4));
        assert_eq!(iter.as_slice(), &[2, 3]);
        assert_eq!(iter.len(), 2);
        assert_eq!(iter.collect::<Vec<_>>(), [2, 3]);
    }
}
