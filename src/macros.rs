/// Conditionally print a formatted message to stdout.
///
/// Evaluates `$cond` at runtime; if `true`, calls [`println!`] with the
/// remaining arguments unchanged. With the crate-level [`crate::VERBOSE`]
/// constant as the condition, the optimizer eliminates the body entirely
/// when the `verbose` feature is off.
///
/// # Example
///
/// ```rust
/// use reduce_compare::{print_if, VERBOSE};
/// print_if!(VERBOSE, "{} finished in {:.3}s", "PCA", 0.012);
/// ```
#[macro_export]
macro_rules! print_if {
    ($cond:expr, $($arg:tt)*) => {
        if $cond {
            println!($($arg)*);
        }
    };
}
