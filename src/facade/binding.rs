use crate::collaborator::{Argument, Expression};

/// Calculates `f(x0)` by binding `x = x0` and evaluating `f`.
///
/// The argument is assigned first and keeps the new value after the call,
/// whether or not the calculation succeeds. Nothing checks that `f` actually
/// depends on `x`; an unrelated argument simply has no effect on the result.
/// The result is passed through untouched, including `NaN` for undefined
/// operations.
///
/// # Parameters
/// - `f`: Expression to calculate.
/// - `x`: Argument read by `f`.
/// - `x0`: Value to bind to `x`.
///
/// # Returns
/// The value of `f` with `x = x0`, or the expression's own error.
///
/// # Example
/// ```
/// use std::rc::Rc;
///
/// use exprbind::{Variable, get_function_value};
///
/// let x = Rc::new(Variable::new("x", 0.0));
/// let f = {
///     let x = Rc::clone(&x);
///     move || x.value() + 1.0
/// };
///
/// let Ok(y) = get_function_value(&f, &*x, 4.0);
/// assert_eq!(y, 5.0);
/// assert_eq!(x.value(), 4.0);
/// ```
pub fn get_function_value<E, A>(f: &E, x: &A, x0: f64) -> Result<f64, E::Error>
    where E: Expression + ?Sized,
          A: Argument + ?Sized
{
    tracing::trace!(x0, "binding argument");
    x.set_argument_value(x0);
    f.calculate()
}
