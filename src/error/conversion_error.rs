use thiserror::Error;

/// Represents all errors that can occur while converting a numbers list.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConversionError {
    /// A list element held no value where a number was required.
    #[error("Error at index {index}: Element is null and cannot be converted to a number.")]
    NullElement {
        /// Position of the first null element in the list.
        index: usize,
    },
}
