use std::convert::Infallible;

/// A formula that can be calculated to a number.
///
/// Implementations read whatever values their arguments currently hold, so
/// two calculations of the same expression may differ if an argument was
/// reassigned in between. Undefined results (division by zero, values outside
/// a function's domain) are usually reported as `NaN` rather than as an
/// error; [`Expression::Error`] is reserved for failures of the engine
/// itself.
///
/// Any `Fn() -> f64` closure is an infallible expression.
///
/// # Example
/// ```
/// use std::{cell::Cell, rc::Rc};
///
/// use exprbind::Expression;
///
/// let x = Rc::new(Cell::new(2.0));
/// let f = {
///     let x = Rc::clone(&x);
///     move || x.get() * 10.0
/// };
///
/// let Ok(v) = f.calculate();
/// assert_eq!(v, 20.0);
/// ```
pub trait Expression {
    /// Failure raised by the engine while calculating.
    type Error;

    /// Calculates the expression against the current argument values.
    fn calculate(&self) -> Result<f64, Self::Error>;
}

impl<F> Expression for F where F: Fn() -> f64 {
    type Error = Infallible;

    fn calculate(&self) -> Result<f64, Infallible> {
        Ok(self())
    }
}
