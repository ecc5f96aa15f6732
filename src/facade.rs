/// Binding an argument and evaluating an expression in one call.
pub mod binding;
/// Writing values to standard output or any other writer.
pub mod console;
/// Conversion of nullable number lists into numeric arrays.
pub mod conversion;
/// Forward and backward finite differences.
///
/// Both operations evaluate the expression at two neighbouring points and
/// restore the argument to the value it had before the call.
pub mod difference;
/// Summation and product over an argument range.
pub mod series;
