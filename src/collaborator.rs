/// The argument contract and its implementations.
///
/// An argument is a numeric variable that an expression reads while it is
/// being calculated. Values are assigned through a shared reference, because
/// the expression holding the same argument must observe the new value.
pub mod argument;
/// The expression contract.
///
/// An expression is a pre-built formula that can be calculated to a single
/// `f64`, reading the current values of the arguments it depends on.
pub mod expression;
/// A named argument storing its value inline.
pub mod variable;

pub use argument::Argument;
pub use expression::Expression;
pub use variable::Variable;
