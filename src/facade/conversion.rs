use crate::error::ConversionError;

/// Converts a list of nullable numbers into a fixed-size array.
///
/// An absent list converts to an absent array. A present list always yields a
/// new array of the same length (possibly empty) with the values in the same
/// order. A missing element inside a present list is not skipped or replaced:
/// the conversion stops and reports its position.
///
/// # Parameters
/// - `numbers`: The list to convert, or `None`.
///
/// # Returns
/// - `Ok(None)`: If `numbers` is `None`.
/// - `Ok(Some(array))`: The unboxed values.
/// - `Err(ConversionError::NullElement)`: If any element is `None`.
///
/// # Example
/// ```
/// use exprbind::{ConversionError, numbers_to_array};
///
/// let list = [Some(1.0), Some(2.5), Some(3.0)];
/// let array = numbers_to_array(Some(list.as_slice())).unwrap();
/// assert_eq!(array.as_deref(), Some(&[1.0, 2.5, 3.0][..]));
///
/// assert_eq!(numbers_to_array(None), Ok(None));
///
/// let holes = [Some(1.0), None];
/// assert_eq!(numbers_to_array(Some(holes.as_slice())),
///            Err(ConversionError::NullElement { index: 1 }));
/// ```
pub fn numbers_to_array(numbers: Option<&[Option<f64>]>)
                        -> Result<Option<Box<[f64]>>, ConversionError> {
    let Some(numbers) = numbers else {
        return Ok(None);
    };

    numbers.iter()
           .enumerate()
           .map(|(index, n)| n.ok_or(ConversionError::NullElement { index }))
           .collect::<Result<Box<[f64]>, _>>()
           .map(Some)
}
