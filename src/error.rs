use thiserror::Error;

/// Errors returned by the checked operations of [`GrowableArray`](crate::GrowableArray).
///
/// A failing operation never mutates the array: bounds are validated before
/// any element is moved, dropped or consumed from an input sequence.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrayError {
    /// An index used to read, write, insert or remove is outside the live range.
    #[error("index {index} is out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// A range described by `index` and `amount` does not fit the live range.
    #[error("range of {amount} element(s) at index {index} is out of range for length {len}")]
    ArgumentOutOfRange {
        index: usize,
        amount: usize,
        len: usize,
    },
}

pub type Result<T> = core::result::Result<T, ArrayError>;
