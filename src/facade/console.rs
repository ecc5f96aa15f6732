use std::{
    fmt::Display,
    io::{self, Write},
};

/// Writes a value followed by a line terminator.
///
/// The value is formatted using its `Display` implementation.
///
/// # Example
/// ```
/// use exprbind::facade::console::write_line;
///
/// let mut out = Vec::new();
/// write_line(&mut out, &2.5).unwrap();
/// assert_eq!(out, b"2.5\n");
/// ```
pub fn write_line<W, T>(out: &mut W, value: &T) -> io::Result<()>
    where W: Write + ?Sized,
          T: Display + ?Sized
{
    writeln!(out, "{value}")
}

/// Writes a single line terminator and nothing else.
pub fn write_newline<W: Write + ?Sized>(out: &mut W) -> io::Result<()> {
    writeln!(out)
}

/// Writes a value without a line terminator.
pub fn write_value<W, T>(out: &mut W, value: &T) -> io::Result<()>
    where W: Write + ?Sized,
          T: Display + ?Sized
{
    write!(out, "{value}")
}

/// Prints a value to standard output, followed by a new line.
///
/// Errors from the stream (for example a closed pipe) are returned to the
/// caller as they are.
///
/// # Example
/// ```
/// use exprbind::{Variable, console_println};
///
/// console_println(&Variable::new("x", 4.0)).unwrap();
/// ```
pub fn console_println<T: Display + ?Sized>(value: &T) -> io::Result<()> {
    write_line(&mut io::stdout().lock(), value)
}

/// Prints an empty line to standard output.
pub fn console_newline() -> io::Result<()> {
    write_newline(&mut io::stdout().lock())
}

/// Prints a value to standard output without a new line.
///
/// The output is not flushed.
pub fn console_print<T: Display + ?Sized>(value: &T) -> io::Result<()> {
    write_value(&mut io::stdout().lock(), value)
}
