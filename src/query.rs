//! Predicate-driven queries and transformations over the live elements.

use crate::array::GrowableArray;

impl<T> GrowableArray<T> {
    /// Returns `true` if `predicate` holds for every element. Vacuously true when empty.
    pub fn true_for_all<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.as_slice().iter().all(predicate)
    }

    pub fn exists<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.as_slice().iter().any(predicate)
    }

    pub fn find<P>(&self, mut predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.as_slice().iter().find(|&item| predicate(item))
    }

    pub fn find_last<P>(&self, mut predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.as_slice().iter().rev().find(|&item| predicate(item))
    }

    pub fn find_index<P>(&self, predicate: P) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
    {
        self.as_slice().iter().position(predicate)
    }

    pub fn find_last_index<P>(&self, predicate: P) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
    {
        self.as_slice().iter().rposition(predicate)
    }

    /// Maps every element through `converter` into a new array of the same length.
    pub fn convert_all<U, F>(&self, mut converter: F) -> GrowableArray<U>
    where
        F: FnMut(&T) -> U,
    {
        let mut converted = GrowableArray::with_capacity(self.len());
        for item in self.as_slice() {
            converted.add(converter(item));
        }
        converted
    }

    /// Runs `action` on every element in index order.
    pub fn for_each<F>(&self, mut action: F)
    where
        F: FnMut(&T),
    {
        for item in self.as_slice() {
            action(item);
        }
    }
}

impl<T: Clone> GrowableArray<T> {
    /// Returns a new array with clones of the matching elements, in order.
    pub fn find_all<P>(&self, mut predicate: P) -> GrowableArray<T>
    where
        P: FnMut(&T) -> bool,
    {
        let mut matches = GrowableArray::new();
        for item in self.as_slice() {
            if predicate(item) {
                matches.add(item.clone());
            }
        }
        matches
    }
}

impl<T: PartialEq> GrowableArray<T> {
    pub fn contains(&self, item: &T) -> bool {
        self.as_slice().contains(item)
    }

    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.as_slice().iter().position(|candidate| candidate == item)
    }

    pub fn last_index_of(&self, item: &T) -> Option<usize> {
        self.as_slice().iter().rposition(|candidate| candidate == item)
    }
}
