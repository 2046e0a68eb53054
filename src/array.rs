//! GrowableArray: a contiguous, growable sequence with explicit capacity control.
//!
//! The array owns a boxed slice of [`MaybeUninit`] slots. Only the prefix
//! `[0, len)` is initialized; the remaining `capacity - len` slots are spare
//! room for appends and are never handed out.
//!
//! ```text
//! buffer:  [ live | live | live | spare | spare ]
//!            └── len = 3 ──────┘
//!            └── capacity = 5 ────────────────┘
//! ```
//!
//! Growth is geometric: when an operation needs more room than the buffer has,
//! the new capacity is `max(capacity * 2, required)`. Reallocation moves the
//! live elements into a fresh buffer and replaces the old one, so elements are
//! never cloned or dropped while growing.

use alloc::{boxed::Box, vec::Vec};
use core::{
    fmt,
    mem::{self, ManuallyDrop, MaybeUninit},
    ops::{Index, IndexMut, Range},
    ptr, slice,
};

use crate::error::{ArrayError, Result};
use crate::iter::{IntoIter, SequenceIterator};

/// Capacity used by [`GrowableArray::new`] and [`Default`].
pub const DEFAULT_CAPACITY: usize = 5;

/// A contiguous, growable sequence of `T`.
///
/// See the [module docs](self) for the memory layout.
pub struct GrowableArray<T> {
    buffer: Box<[MaybeUninit<T>]>,
    len: usize,
}

static_assertions::assert_eq_size!(GrowableArray<u64>, [usize; 3]);
static_assertions::assert_impl_all!(GrowableArray<u64>: Send, Sync);
static_assertions::assert_not_impl_any!(GrowableArray<alloc::rc::Rc<u64>>: Send, Sync);

impl<T> GrowableArray<T> {
    /// Creates an empty array with room for [`DEFAULT_CAPACITY`] elements.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty array with room for exactly `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: Box::new_uninit_slice(capacity),
            len: 0,
        }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    pub fn as_slice(&self) -> &[T] {
        // SAFETY: slots [0, len) are initialized.
        unsafe { slice::from_raw_parts(self.buffer.as_ptr().cast::<T>(), self.len) }
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: slots [0, len) are initialized.
        unsafe { slice::from_raw_parts_mut(self.slots_mut_ptr(), self.len) }
    }

    /// Returns the element at `index`.
    ///
    /// `index == len` is not readable: it is only valid as an insertion point.
    pub fn get(&self, index: usize) -> Result<&T> {
        self.check_index(index)?;
        Ok(&self.as_slice()[index])
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        self.check_index(index)?;
        Ok(&mut self.as_mut_slice()[index])
    }

    /// Replaces the element at `index`, returning the previous one.
    pub fn set(&mut self, index: usize, value: T) -> Result<T> {
        let slot = self.get_mut(index)?;
        Ok(mem::replace(slot, value))
    }

    /// Makes sure `additional` more elements fit without reallocating.
    ///
    /// When the buffer is too small it grows to `max(capacity * 2, len + additional)`.
    ///
    /// # Panics
    ///
    /// Panics if `len + additional` overflows `usize`.
    pub fn ensure_capacity(&mut self, additional: usize) {
        let required = self.len.checked_add(additional).expect("capacity overflow");
        if required > self.capacity() {
            let doubled = self.capacity().saturating_mul(2);
            self.reallocate(doubled.max(required));
        }
    }

    /// Shrinks the buffer to exactly `len` slots. Does nothing if it is already tight.
    pub fn trim_excess(&mut self) {
        if self.len < self.capacity() {
            self.reallocate(self.len);
        }
    }

    /// Appends `item`. Amortized O(1).
    pub fn add(&mut self, item: T) {
        self.ensure_capacity(1);
        self.buffer[self.len].write(item);
        self.len += 1;
    }

    /// Appends every element of `items`, growing the buffer at most once.
    ///
    /// The input is collected first so its length is known before any slot is
    /// written.
    pub fn add_range<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = T>,
    {
        let batch: Vec<T> = items.into_iter().collect();
        let count = batch.len();
        self.ensure_capacity(count);
        let start = self.len;
        fill(&mut self.buffer[start..start + count], batch);
        self.len += count;
    }

    /// Inserts `item` at `index`, shifting `[index, len)` one slot to the right.
    ///
    /// Valid for `index <= len`. O(len - index).
    pub fn insert(&mut self, index: usize, item: T) -> Result<()> {
        self.check_insertion_point(index)?;
        self.ensure_capacity(1);
        // SAFETY: index <= len < capacity, so the shifted suffix stays inside the buffer.
        unsafe {
            let slot = self.slots_mut_ptr().add(index);
            ptr::copy(slot, slot.add(1), self.len - index);
            ptr::write(slot, item);
        }
        self.len += 1;
        Ok(())
    }

    /// Inserts every element of `items` at `index`, preserving their order.
    ///
    /// If the batch does not fit, a buffer of exactly `len + count` slots is
    /// allocated and the prefix, the batch and the suffix are moved into it in
    /// a single pass. Otherwise the suffix is shifted in place once.
    pub fn insert_range<I>(&mut self, index: usize, items: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
    {
        self.check_insertion_point(index)?;
        let batch: Vec<T> = items.into_iter().collect();
        let count = batch.len();
        let required = self.len.checked_add(count).expect("capacity overflow");
        let suffix = self.len - index;

        if required > self.capacity() {
            tracing::trace!(
                from = self.capacity(),
                to = required,
                len = self.len,
                "splicing into new buffer"
            );
            let mut fresh: Box<[MaybeUninit<T>]> = Box::new_uninit_slice(required);
            // SAFETY: `fresh` has room for len + count slots and does not overlap
            // the old buffer. Live elements are moved, never duplicated.
            unsafe {
                let src = self.buffer.as_ptr();
                let dst = fresh.as_mut_ptr();
                ptr::copy_nonoverlapping(src, dst, index);
                ptr::copy_nonoverlapping(src.add(index), dst.add(index + count), suffix);
            }
            fill(&mut fresh[index..index + count], batch);
            self.buffer = fresh;
        } else {
            // SAFETY: len + count <= capacity, so the shifted suffix stays inside the buffer.
            unsafe {
                let gap = self.slots_mut_ptr().add(index);
                ptr::copy(gap, gap.add(count), suffix);
            }
            fill(&mut self.buffer[index..index + count], batch);
        }

        self.len = required;
        Ok(())
    }

    /// Removes and returns the element at `index`. O(len - index).
    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        self.check_index(index)?;
        Ok(self.take_at(index))
    }

    /// Removes every element for which `predicate` returns `true` and returns
    /// how many were removed.
    ///
    /// Runs a single left-to-right pass. After a removal the same position is
    /// examined again, since the next element has slid into it. Each removal
    /// shifts the tail, so the worst case is O(n²).
    pub fn remove_all<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        let mut removed = 0;
        let mut index = 0;
        while index < self.len {
            if predicate(&self.as_slice()[index]) {
                drop(self.take_at(index));
                removed += 1;
            } else {
                index += 1;
            }
        }
        removed
    }

    /// Drops `amount` elements starting at `index` and shifts the tail left once.
    ///
    /// Requires `index < len` and `index + amount <= len`.
    pub fn remove_range(&mut self, index: usize, amount: usize) -> Result<()> {
        let fits = index < self.len
            && index
                .checked_add(amount)
                .is_some_and(|end| end <= self.len);
        if !fits {
            return Err(ArrayError::ArgumentOutOfRange {
                index,
                amount,
                len: self.len,
            });
        }

        let tail = self.len - index - amount;
        // SAFETY: [index, index + amount) is live. `len` drops to `index` before
        // the destructors run, so a panicking destructor leaks the tail instead
        // of exposing dropped slots.
        unsafe {
            let start = self.slots_mut_ptr().add(index);
            self.len = index;
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(start, amount));
            ptr::copy(start.add(amount), start, tail);
        }
        self.len = index + tail;
        Ok(())
    }

    /// Drops every element. The capacity is kept for reuse.
    pub fn clear(&mut self) {
        let live: *mut [T] = self.as_mut_slice();
        self.len = 0;
        // SAFETY: `live` covers the previously initialized prefix, which is no
        // longer reachable now that `len` is zero.
        unsafe { ptr::drop_in_place(live) }
    }

    /// Returns a fresh cursor over the live elements.
    pub fn iter(&self) -> SequenceIterator<'_, T> {
        SequenceIterator::new(self)
    }

    #[inline(always)]
    fn slots_mut_ptr(&mut self) -> *mut T {
        self.buffer.as_mut_ptr().cast::<T>()
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.len {
            Ok(())
        } else {
            Err(ArrayError::IndexOutOfRange {
                index,
                len: self.len,
            })
        }
    }

    fn check_insertion_point(&self, index: usize) -> Result<()> {
        if index <= self.len {
            Ok(())
        } else {
            Err(ArrayError::IndexOutOfRange {
                index,
                len: self.len,
            })
        }
    }

    fn checked_range(&self, index: usize, amount: usize) -> Result<Range<usize>> {
        if index > self.len {
            return Err(ArrayError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        match index.checked_add(amount) {
            Some(end) if end <= self.len => Ok(index..end),
            _ => Err(ArrayError::ArgumentOutOfRange {
                index,
                amount,
                len: self.len,
            }),
        }
    }

    fn take_at(&mut self, index: usize) -> T {
        debug_assert!(index < self.len);
        // SAFETY: index < len, so the slot is live. The tail is moved over it
        // before `len` shrinks, leaving [0, len) initialized.
        unsafe {
            let slot = self.slots_mut_ptr().add(index);
            let item = ptr::read(slot);
            ptr::copy(slot.add(1), slot, self.len - index - 1);
            self.len -= 1;
            item
        }
    }

    #[cold]
    fn reallocate(&mut self, new_capacity: usize) {
        debug_assert!(new_capacity >= self.len);
        tracing::trace!(
            from = self.capacity(),
            to = new_capacity,
            len = self.len,
            "reallocating buffer"
        );
        let mut fresh: Box<[MaybeUninit<T>]> = Box::new_uninit_slice(new_capacity);
        // SAFETY: both buffers hold at least `len` slots and do not overlap. The
        // old buffer only holds `MaybeUninit`, so releasing it drops nothing.
        unsafe {
            ptr::copy_nonoverlapping(self.buffer.as_ptr(), fresh.as_mut_ptr(), self.len);
        }
        self.buffer = fresh;
    }

    pub(crate) fn into_raw_parts(self) -> (Box<[MaybeUninit<T>]>, usize) {
        let this = ManuallyDrop::new(self);
        // SAFETY: `this` is never dropped, so the buffer is moved out exactly once.
        let buffer = unsafe { ptr::read(&this.buffer) };
        (buffer, this.len)
    }
}

impl<T: Clone> GrowableArray<T> {
    /// Returns a new array holding clones of `[index, index + amount)`.
    pub fn get_range(&self, index: usize, amount: usize) -> Result<Self> {
        let range = self.checked_range(index, amount)?;
        let mut copy = Self::with_capacity(amount);
        for item in &self.as_slice()[range] {
            copy.add(item.clone());
        }
        Ok(copy)
    }
}

impl<T: PartialEq> GrowableArray<T> {
    /// Removes the first element equal to `item`. Returns whether one was found.
    pub fn remove(&mut self, item: &T) -> bool {
        match self.index_of(item) {
            Some(index) => {
                drop(self.take_at(index));
                true
            }
            None => false,
        }
    }
}

/// Writes `batch` into `slots`, which must have exactly the same length.
fn fill<T>(slots: &mut [MaybeUninit<T>], batch: Vec<T>) {
    debug_assert_eq!(slots.len(), batch.len());
    for (slot, item) in slots.iter_mut().zip(batch) {
        slot.write(item);
    }
}

impl<T> Drop for GrowableArray<T> {
    fn drop(&mut self) {
        // SAFETY: slots [0, len) are live. The buffer itself is freed by `Box`.
        unsafe { ptr::drop_in_place(self.as_mut_slice()) }
    }
}

impl<T> Default for GrowableArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for GrowableArray<T> {
    fn clone(&self) -> Self {
        let mut copy = Self::with_capacity(self.len);
        for item in self.as_slice() {
            copy.add(item.clone());
        }
        copy
    }
}

impl<T: fmt::Debug> fmt::Debug for GrowableArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T: PartialEq> PartialEq for GrowableArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for GrowableArray<T> {}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for GrowableArray<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T> Index<usize> for GrowableArray<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.as_slice()[index]
    }
}

impl<T> IndexMut<usize> for GrowableArray<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.as_mut_slice()[index]
    }
}

impl<T> FromIterator<T> for GrowableArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut array = Self::new();
        array.add_range(iter);
        array
    }
}

impl<T> Extend<T> for GrowableArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add_range(iter);
    }
}

impl<T> From<Vec<T>> for GrowableArray<T> {
    fn from(items: Vec<T>) -> Self {
        let mut array = Self::with_capacity(items.len());
        array.add_range(items);
        array
    }
}

impl<T, const N: usize> From<[T; N]> for GrowableArray<T> {
    fn from(items: [T; N]) -> Self {
        let mut array = Self::with_capacity(N);
        array.add_range(items);
        array
    }
}

impl<'a, T> IntoIterator for &'a GrowableArray<T> {
    type Item = &'a T;
    type IntoIter = SequenceIterator<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for GrowableArray<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let (buffer, len) = self.into_raw_parts();
        IntoIter::new(buffer, len)
    }
}
