use crate::{
    collaborator::{Argument, Expression},
    facade::binding::get_function_value,
};

/// Step of the classic first difference, `f(x + 1) - f(x)`.
pub const UNIT_STEP: f64 = 1.0;

/// Puts an argument back to its saved value when dropped.
///
/// Used so that the argument is restored on every exit path, including an
/// early return through `?`.
struct RestoreGuard<'a, A: Argument + ?Sized> {
    argument: &'a A,
    saved:    f64,
}

impl<'a, A: Argument + ?Sized> RestoreGuard<'a, A> {
    fn new(argument: &'a A) -> Self {
        Self { argument,
               saved: argument.argument_value() }
    }
}

impl<A: Argument + ?Sized> Drop for RestoreGuard<'_, A> {
    fn drop(&mut self) {
        self.argument.set_argument_value(self.saved);
    }
}

/// Computes the forward difference `f(p + h) - f(p)`.
///
/// The point `p` is `at` when given, otherwise the current value of `x`. The
/// value `x` held before the call is restored afterwards.
///
/// # Parameters
/// - `f`: Expression to difference.
/// - `x`: Argument `f` depends on.
/// - `h`: Step; [`UNIT_STEP`] for the first difference.
/// - `at`: Point to evaluate at, or `None` for the current value of `x`.
///
/// # Returns
/// The difference, or `NaN` if the point is `NaN`.
///
/// # Example
/// ```
/// use std::rc::Rc;
///
/// use exprbind::{UNIT_STEP, Variable, forward_difference};
///
/// let x = Rc::new(Variable::new("x", 10.0));
/// let f = {
///     let x = Rc::clone(&x);
///     move || x.value() * x.value()
/// };
///
/// // 4^2 - 3^2
/// let Ok(d) = forward_difference(&f, &*x, UNIT_STEP, Some(3.0));
/// assert_eq!(d, 7.0);
/// assert_eq!(x.value(), 10.0);
/// ```
pub fn forward_difference<E, A>(f: &E, x: &A, h: f64, at: Option<f64>) -> Result<f64, E::Error>
    where E: Expression + ?Sized,
          A: Argument + ?Sized
{
    let point = at.unwrap_or_else(|| x.argument_value());
    if point.is_nan() {
        return Ok(f64::NAN);
    }
    tracing::debug!(point, h, "forward difference");

    let _guard = RestoreGuard::new(x);
    let ahead = get_function_value(f, x, point + h)?;
    let here = get_function_value(f, x, point)?;
    Ok(ahead - here)
}

/// Computes the backward difference `f(p) - f(p - h)`.
///
/// The point `p` is `at` when given, otherwise the current value of `x`. The
/// value `x` held before the call is restored afterwards.
///
/// # Returns
/// The difference, or `NaN` if the point is `NaN`.
pub fn backward_difference<E, A>(f: &E, x: &A, h: f64, at: Option<f64>) -> Result<f64, E::Error>
    where E: Expression + ?Sized,
          A: Argument + ?Sized
{
    let point = at.unwrap_or_else(|| x.argument_value());
    if point.is_nan() {
        return Ok(f64::NAN);
    }
    tracing::debug!(point, h, "backward difference");

    let _guard = RestoreGuard::new(x);
    let here = get_function_value(f, x, point)?;
    let behind = get_function_value(f, x, point - h)?;
    Ok(here - behind)
}
