//! # exprbind
//!
//! exprbind is a thin, stateless layer over a mathematical expression engine.
//! It binds values to arguments and evaluates expressions against them, turns
//! lists of nullable numbers into plain numeric arrays, and writes diagnostic
//! text to standard output.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Interfaces of the external expression engine.
///
/// This module declares the two narrow traits the facade relies on:
/// [`Expression`](collaborator::Expression), something that can be calculated
/// to a number, and [`Argument`](collaborator::Argument), a numeric variable
/// whose current value the expression reads at evaluation time.
///
/// # Responsibilities
/// - Defines the evaluation and binding contracts.
/// - Lets plain closures act as expressions and shared cells act as
///   arguments.
/// - Provides [`Variable`](collaborator::Variable), a named argument.
pub mod collaborator;
/// Error types raised by the facade itself.
///
/// Failures coming from an expression are never wrapped; they pass through
/// with the expression's own error type.
pub mod error;
/// Stateless convenience operations over expressions and arguments.
///
/// Every function here is independent: none keeps state between calls or
/// holds on to its inputs after returning.
///
/// # Responsibilities
/// - Binds an argument and evaluates an expression in one step.
/// - Converts nullable number lists into fixed-size arrays.
/// - Prints values to standard output.
/// - Builds sums, products and finite differences from repeated bindings.
pub mod facade;

pub use collaborator::{Argument, Expression, Variable};
pub use error::ConversionError;
pub use facade::{
    binding::get_function_value,
    console::{console_newline, console_print, console_println},
    conversion::numbers_to_array,
    difference::{UNIT_STEP, backward_difference, forward_difference},
    series::{pi_product, sigma_summation},
};
