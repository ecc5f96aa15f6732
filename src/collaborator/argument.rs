use std::{cell::Cell, rc::Rc};

/// A numeric variable read by expressions during calculation.
///
/// Assignment takes `&self`: the argument is shared between the caller and
/// every expression built on it, and all of them must see the value that was
/// set last. Implementations based on [`Cell`] are `!Sync`, so the same
/// argument can not be rebound from two threads at once; parallel callers use
/// one argument per thread.
pub trait Argument {
    /// Returns the value currently bound to the argument.
    fn argument_value(&self) -> f64;

    /// Binds a new value to the argument.
    fn set_argument_value(&self, value: f64);
}

impl Argument for Cell<f64> {
    fn argument_value(&self) -> f64 {
        self.get()
    }

    fn set_argument_value(&self, value: f64) {
        self.set(value);
    }
}

impl<A: Argument + ?Sized> Argument for &A {
    fn argument_value(&self) -> f64 {
        (**self).argument_value()
    }

    fn set_argument_value(&self, value: f64) {
        (**self).set_argument_value(value);
    }
}

impl<A: Argument + ?Sized> Argument for Rc<A> {
    fn argument_value(&self) -> f64 {
        (**self).argument_value()
    }

    fn set_argument_value(&self, value: f64) {
        (**self).set_argument_value(value);
    }
}

impl<A: Argument + ?Sized> Argument for Box<A> {
    fn argument_value(&self) -> f64 {
        (**self).argument_value()
    }

    fn set_argument_value(&self, value: f64) {
        (**self).set_argument_value(value);
    }
}
