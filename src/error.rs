/// Conversion errors.
///
/// Raised while turning a list of nullable numbers into a numeric array when
/// an element of the list is missing.
pub mod conversion_error;

pub use conversion_error::ConversionError;
