use std::{cell::Cell, rc::Rc};

use exprbind::{
    Argument, ConversionError, Expression, UNIT_STEP, Variable, backward_difference,
    facade::console::{write_line, write_newline, write_value},
    forward_difference, get_function_value, numbers_to_array, pi_product, sigma_summation,
};
use pretty_assertions::assert_eq;

fn init_test_logging() {
    use tracing_subscriber::{EnvFilter, fmt};

    let _ = fmt().with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("trace")))
                 .with_test_writer()
                 .try_init();
}

/// Builds `f(x)` reading from a shared variable.
fn function_of(x: &Rc<Variable>, f: impl Fn(f64) -> f64) -> impl Fn() -> f64 {
    let x = Rc::clone(x);
    move || f(x.value())
}

fn written(write: impl FnOnce(&mut Vec<u8>) -> std::io::Result<()>) -> String {
    let mut out = Vec::new();
    write(&mut out).expect("writing to a Vec can not fail");
    String::from_utf8(out).expect("output is valid UTF-8")
}

/// An engine whose calculation can fail.
struct Checked {
    x: Rc<Variable>,
}

impl Expression for Checked {
    type Error = String;

    fn calculate(&self) -> Result<f64, String> {
        let v = self.x.value();
        if v < 0.0 {
            return Err(format!("sqrt of negative value {v}"));
        }
        Ok(v.sqrt())
    }
}

#[test]
fn x_plus_one_at_four() {
    init_test_logging();
    let x = Rc::new(Variable::new("x", 0.0));
    let f = function_of(&x, |x| x + 1.0);

    let Ok(y) = get_function_value(&f, &*x, 4.0);

    assert_eq!(y, 5.0);
    assert_eq!(x.value(), 4.0);
}

#[test]
fn binding_is_visible_to_every_holder() {
    let x = Rc::new(Variable::new("x", 0.0));
    let f = function_of(&x, |x| x * 2.0);
    let g = function_of(&x, |x| x - 1.0);

    let Ok(_) = get_function_value(&f, &x, 3.0);

    assert_eq!(g.calculate(), Ok(2.0));
    assert_eq!(x.argument_value(), 3.0);
}

#[test]
fn binding_value_sticks_for_many_values() {
    let x = Cell::new(0.0);
    let f = || 0.0;
    for v in [-1.5, 0.0, 1e300, f64::INFINITY] {
        let Ok(_) = get_function_value(&f, &x, v);
        assert_eq!(x.get(), v);
    }
}

#[test]
fn unrelated_argument_does_not_change_result() {
    let x = Rc::new(Variable::new("x", 2.0));
    let unrelated = Variable::new("y", 0.0);
    let f = function_of(&x, |x| x * x);

    assert_eq!(get_function_value(&f, &unrelated, 100.0), Ok(4.0));
    assert_eq!(unrelated.value(), 100.0);
}

#[test]
fn engine_errors_pass_through_unchanged() {
    let x = Rc::new(Variable::new("x", 0.0));
    let f = Checked { x: Rc::clone(&x) };

    assert_eq!(get_function_value(&f, &*x, 9.0), Ok(3.0));
    assert_eq!(get_function_value(&f, &*x, -4.0),
               Err("sqrt of negative value -4".to_string()));
    assert_eq!(x.value(), -4.0);
}

#[test]
fn list_converts_in_order() {
    let list = vec![Some(1.0), Some(2.5), Some(3.0)];
    let array = numbers_to_array(Some(list.as_slice())).unwrap().unwrap();

    assert_eq!(&*array, &[1.0, 2.5, 3.0]);
}

#[test]
fn absent_list_is_absent_array() {
    assert_eq!(numbers_to_array(None), Ok(None));
}

#[test]
fn empty_list_is_empty_array() {
    let list: Vec<Option<f64>> = Vec::new();
    let array = numbers_to_array(Some(list.as_slice())).unwrap();

    assert_eq!(array.as_deref(), Some(&[][..]));
}

#[test]
fn conversion_leaves_input_untouched() {
    let list = vec![Some(-0.0), Some(f64::MAX), Some(7.25)];
    let before = list.clone();

    let array = numbers_to_array(Some(list.as_slice())).unwrap().unwrap();

    assert_eq!(list, before);
    assert_eq!(array.len(), list.len());
    for (converted, original) in array.iter().zip(&list) {
        assert_eq!(Some(*converted), *original);
    }
}

#[test]
fn null_element_is_an_error() {
    let list = vec![Some(1.0), Some(2.0), None, Some(4.0)];
    let err = numbers_to_array(Some(list.as_slice())).unwrap_err();

    assert_eq!(err, ConversionError::NullElement { index: 2 });
    assert_eq!(err.to_string(),
               "Error at index 2: Element is null and cannot be converted to a number.");
}

#[test]
fn line_is_value_and_one_terminator() {
    assert_eq!(written(|out| write_line(out, &42)), "42\n");
    assert_eq!(written(|out| write_line(out, "text")), "text\n");
    assert_eq!(written(|out| write_line(out, &Variable::new("x", 1.5))), "x = 1.5\n");
}

#[test]
fn newline_is_only_a_terminator() {
    assert_eq!(written(|out| write_newline(out)), "\n");
}

#[test]
fn value_has_no_terminator() {
    assert_eq!(written(|out| write_value(out, &2.5)), "2.5");
}

#[test]
fn summation_of_integers() {
    init_test_logging();
    let i = Rc::new(Variable::new("i", 0.0));
    let f = function_of(&i, |i| i);

    assert_eq!(sigma_summation(&f, &*i, 1.0, 10.0, 1.0), Ok(55.0));
    assert_eq!(i.value(), 10.0);
}

#[test]
fn summation_includes_end_off_the_grid() {
    let i = Rc::new(Variable::new("i", 0.0));
    let f = function_of(&i, |i| i);

    // 0 + 2 + 4 + 5
    assert_eq!(sigma_summation(&f, &*i, 0.0, 5.0, 2.0), Ok(11.0));
}

#[test]
fn degenerate_ranges() {
    let i = Rc::new(Variable::new("i", 0.0));
    let f = function_of(&i, |i| i + 1.0);

    assert_eq!(sigma_summation(&f, &*i, 3.0, 3.0, 0.0), Ok(4.0));
    assert_eq!(pi_product(&f, &*i, 3.0, 3.0, -1.0), Ok(4.0));
    assert_eq!(sigma_summation(&f, &*i, 5.0, 1.0, 1.0), Ok(0.0));
    assert_eq!(pi_product(&f, &*i, 5.0, 1.0, 1.0), Ok(1.0));
}

#[test]
fn nan_bounds_give_nan() {
    let i = Variable::new("i", 0.0);
    let f = || 1.0;

    for (from, to, delta) in [(f64::NAN, 1.0, 1.0), (0.0, f64::NAN, 1.0), (0.0, 1.0, f64::NAN)] {
        let Ok(sum) = sigma_summation(&f, &i, from, to, delta);
        let Ok(product) = pi_product(&f, &i, from, to, delta);
        assert!(sum.is_nan());
        assert!(product.is_nan());
    }
    assert_eq!(i.value(), 0.0);
}

#[test]
fn factorial_as_product() {
    let i = Rc::new(Variable::new("i", 0.0));
    let f = function_of(&i, |i| i);

    assert_eq!(pi_product(&f, &*i, 1.0, 5.0, 1.0), Ok(120.0));
    assert_eq!(pi_product(&f, &*i, 5.0, 1.0, -1.0), Ok(120.0));
}

#[test]
fn series_stop_at_first_engine_error() {
    let x = Rc::new(Variable::new("x", 0.0));
    let f = Checked { x: Rc::clone(&x) };

    assert_eq!(sigma_summation(&f, &*x, 1.0, -3.0, -1.0),
               Err("sqrt of negative value -1".to_string()));
    assert_eq!(x.value(), -1.0);
}

#[test]
fn differences_of_square() {
    init_test_logging();
    let x = Rc::new(Variable::new("x", 10.0));
    let f = function_of(&x, |x| x * x);

    assert_eq!(forward_difference(&f, &*x, UNIT_STEP, Some(3.0)), Ok(7.0));
    assert_eq!(backward_difference(&f, &*x, UNIT_STEP, Some(3.0)), Ok(5.0));
    assert_eq!(x.value(), 10.0);
}

#[test]
fn differences_at_current_value() {
    let x = Rc::new(Variable::new("x", 2.0));
    let f = function_of(&x, |x| x * x);

    assert_eq!(forward_difference(&f, &*x, 0.5, None), Ok(2.25));
    assert_eq!(backward_difference(&f, &*x, 0.5, None), Ok(1.75));
    assert_eq!(x.value(), 2.0);
}

#[test]
fn difference_restores_argument_on_error() {
    let x = Rc::new(Variable::new("x", 0.5));
    let f = Checked { x: Rc::clone(&x) };

    assert_eq!(backward_difference(&f, &*x, UNIT_STEP, Some(0.0)),
               Err("sqrt of negative value -1".to_string()));
    assert_eq!(x.value(), 0.5);
}

#[test]
fn nan_point_gives_nan() {
    let x = Rc::new(Variable::new("x", 1.0));
    let f = function_of(&x, |x| x);

    let Ok(d) = forward_difference(&f, &*x, UNIT_STEP, Some(f64::NAN));
    assert!(d.is_nan());
    assert_eq!(x.value(), 1.0);
}
