//! Collection-initializer syntax for [`GrowableArray`](crate::GrowableArray).

/// Builds a [`GrowableArray`](crate::GrowableArray) by appending each item in order.
///
/// | Pattern | Meaning |
/// |---------|---------|
/// | `growable_array![a, b, c]` | default capacity, then `add` each item |
/// | `growable_array![capacity = n; a, b]` | capacity `n`, then `add` each item |
///
/// ```
/// use growable_array::growable_array;
///
/// let small = growable_array![1, 2, 3];
/// assert_eq!(small.capacity(), 5);
///
/// let large = growable_array![capacity = 500; 1];
/// assert_eq!(large.capacity(), 500);
/// assert_eq!(large.as_slice(), &[1]);
/// ```
#[macro_export]
macro_rules! growable_array {
    (capacity = $capacity:expr; $($item:expr),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut array = $crate::GrowableArray::with_capacity($capacity);
        $(array.add($item);)*
        array
    }};

    ($($item:expr),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut array = $crate::GrowableArray::new();
        $(array.add($item);)*
        array
    }};
}
