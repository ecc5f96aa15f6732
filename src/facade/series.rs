use std::iter;

use crate::{
    collaborator::{Argument, Expression},
    facade::binding::get_function_value,
};

/// Sums `f(i)` for `i = from, from + delta, ...` up to and including `to`.
///
/// The index walks from `from` towards `to` while it has not reached `to`, and
/// `f(to)` is always added as the final term. A range is only walked if
/// `delta` points from `from` towards `to`; otherwise the sum is empty, except
/// when `from == to`, which yields the single term `f(from)`.
///
/// The index argument keeps the last value bound to it.
///
/// # Parameters
/// - `f`: Expression to sum.
/// - `index`: Argument bound to each point of the range.
/// - `from`: First index value.
/// - `to`: Last index value.
/// - `delta`: Step between index values.
///
/// # Returns
/// - The sum, or `0.0` for an empty range.
/// - `NaN` if any of `from`, `to` or `delta` is `NaN`.
///
/// # Example
/// ```
/// use std::{cell::Cell, rc::Rc};
///
/// use exprbind::sigma_summation;
///
/// let i = Rc::new(Cell::new(0.0));
/// let f = {
///     let i = Rc::clone(&i);
///     move || i.get()
/// };
///
/// let Ok(sum) = sigma_summation(&f, &*i, 1.0, 10.0, 1.0);
/// assert_eq!(sum, 55.0);
/// ```
pub fn sigma_summation<E, A>(f: &E,
                             index: &A,
                             from: f64,
                             to: f64,
                             delta: f64)
                             -> Result<f64, E::Error>
    where E: Expression + ?Sized,
          A: Argument + ?Sized
{
    tracing::debug!(from, to, delta, "sigma summation");
    fold_range(f, index, from, to, delta, 0.0, |acc, term| acc + term)
}

/// Multiplies `f(i)` for `i = from, from + delta, ...` up to and including
/// `to`.
///
/// Follows the same range rules as [`sigma_summation`]. The empty product is
/// `1.0`.
///
/// # Example
/// ```
/// use std::{cell::Cell, rc::Rc};
///
/// use exprbind::pi_product;
///
/// let i = Rc::new(Cell::new(0.0));
/// let f = {
///     let i = Rc::clone(&i);
///     move || i.get()
/// };
///
/// // 5!
/// let Ok(product) = pi_product(&f, &*i, 1.0, 5.0, 1.0);
/// assert_eq!(product, 120.0);
/// ```
pub fn pi_product<E, A>(f: &E, index: &A, from: f64, to: f64, delta: f64) -> Result<f64, E::Error>
    where E: Expression + ?Sized,
          A: Argument + ?Sized
{
    tracing::debug!(from, to, delta, "pi product");
    fold_range(f, index, from, to, delta, 1.0, |acc, term| acc * term)
}

#[allow(clippy::float_cmp)]
fn fold_range<E, A>(f: &E,
                    index: &A,
                    from: f64,
                    to: f64,
                    delta: f64,
                    init: f64,
                    combine: impl Fn(f64, f64) -> f64)
                    -> Result<f64, E::Error>
    where E: Expression + ?Sized,
          A: Argument + ?Sized
{
    if from.is_nan() || to.is_nan() || delta.is_nan() {
        return Ok(f64::NAN);
    }

    let ascending = to >= from && delta > 0.0;
    let descending = to <= from && delta < 0.0;

    let mut acc = init;
    if ascending || descending {
        // Stops early if the step is lost to float resolution.
        let points = iter::successors(Some(from), |&i| {
                         let next = i + delta;
                         (next != i).then_some(next)
                     }).take_while(|&i| if ascending { i < to } else { i > to })
                       .chain(iter::once(to));

        for i in points {
            acc = combine(acc, get_function_value(f, index, i)?);
        }
    } else if from == to {
        acc = combine(acc, get_function_value(f, index, from)?);
    }

    Ok(acc)
}
