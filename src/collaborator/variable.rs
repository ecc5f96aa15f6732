use std::{cell::Cell, fmt};

use crate::collaborator::Argument;

/// A named argument.
///
/// `Variable` keeps its value in a [`Cell`], so it can be shared by reference
/// (or behind an `Rc`) between the caller and the expressions that read it.
///
/// # Example
/// ```
/// use exprbind::{Argument, Variable};
///
/// let x = Variable::new("x", 1.0);
/// x.set_argument_value(4.0);
///
/// assert_eq!(x.value(), 4.0);
/// assert_eq!(x.to_string(), "x = 4");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    name:  String,
    value: Cell<f64>,
}

impl Variable {
    /// Creates a variable with the given name and initial value.
    #[must_use]
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self { name:  name.into(),
               value: Cell::new(value), }
    }

    /// The name the variable was created with.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The value currently bound to the variable.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value.get()
    }
}

impl Argument for Variable {
    fn argument_value(&self) -> f64 {
        self.value.get()
    }

    fn set_argument_value(&self, value: f64) {
        self.value.set(value);
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.name, self.value.get())
    }
}
