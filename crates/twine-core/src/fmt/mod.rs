//! Brace-directive text formatting.
//!
//! A printf-like engine over a compact `{...}` mini-language. The format
//! string is scanned once per call; each directive is parsed into a
//! [`FormatSpec`] and matched to one argument, dispatched by the
//! argument's static type (never by the directive's class flags, which
//! only refine rendering). See the grammar in [`spec`].
//!
//! Entry points: the [`twformat!`](crate::twformat) /
//! [`try_twformat!`](crate::try_twformat) macros for call sites, and
//! [`format_args`] / [`parse_directive`] / the `render_*` functions for
//! extension renderers that want to reuse the grammar and padding rules.

pub mod arg;
pub mod num;
pub mod render;
pub mod spec;
pub mod writer;

pub use arg::{FmtArg, FormatArg, ToFmtArg};
pub use num::{Digits, format_float_code};
pub use render::{render_float, render_int, render_str};
pub use spec::{Align, DigitClass, FloatClass, FormatSpec, parse_directive};
pub use writer::format_args;

use thiserror::Error;

/// A formatting contract violation.
///
/// Parse and arity errors are programmer errors in semi-static format
/// strings; `BadFloatFormat` and `BadCharValue` can also arise from
/// runtime-computed codes and values, which is why the whole enum is a
/// catchable error rather than an abort. An error aborts the format call
/// with no partial output.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FormatError {
    /// A `{` was never closed by `}`.
    #[error("unterminated format directive starting at byte {start}")]
    UnterminatedDirective { start: usize },

    /// A character outside the directive grammar.
    #[error("unexpected character {ch:?} in format directive at byte {at}")]
    UnexpectedCharacter { ch: char, at: usize },

    /// `.` not followed by a digit run.
    #[error("`.` at byte {at} is not followed by a precision")]
    BadPrecision { at: usize },

    /// A directive remained after every argument was consumed.
    #[error("not enough arguments: directive at byte {at} has no argument to format")]
    NotEnoughArguments { at: usize },

    /// Arguments remained after the format string was exhausted.
    #[error("too many arguments: {unused} argument(s) never consumed")]
    TooManyArguments { unused: usize },

    /// An explicit `n$` index outside `[1, N]`.
    #[error("argument index {index} out of range for {count} argument(s)")]
    IndexOutOfRange { index: usize, count: usize },

    /// A float format code outside `f F e E g G`.
    #[error("unsupported float format code {code:?}")]
    BadFloatFormat { code: char },

    /// A `c`-class value that is not a Unicode scalar.
    #[error("value {value:#x} is not a valid character")]
    BadCharValue { value: u64 },
}
