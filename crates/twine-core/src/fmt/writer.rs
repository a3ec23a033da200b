//! The format writer: scan, parse, fetch, dispatch, compose.
//!
//! [`format_args`] drives the whole pipeline over a format string and a
//! slice of captured arguments. Literal text is copied verbatim (with
//! `{{` unescaping to `{`), each directive is parsed and matched to one
//! argument, and arity is strict in both directions: a directive with no
//! argument left and an argument no directive consumed are both fatal.

use crate::buf::OutBuf;
use crate::fmt::arg::FmtArg;
use crate::fmt::spec::parse_directive;
use crate::fmt::FormatError;
use crate::text::Str;

/// Formats `args` according to `fmt`, producing the rendered text.
///
/// Arguments are consumed in strict left-to-right order, one per
/// directive, except where a directive carries an explicit `n$` index:
/// that directive formats argument `n` (1-based) without advancing the
/// sequential cursor. Every argument must be consumed by at least one
/// directive.
///
/// Errors are contract violations (see [`FormatError`]); no partial output
/// is returned once one is raised.
pub fn format_args(fmt: &str, args: &[FmtArg<'_>]) -> Result<Str, FormatError> {
    let mut out = OutBuf::with_capacity(fmt.len() + 16);
    let bytes = fmt.as_bytes();
    let mut pos = 0;
    let mut next_sequential = 0;
    let mut consumed = vec![false; args.len()];

    while pos < bytes.len() {
        if bytes[pos] != b'{' {
            // Copy the literal run up to the next directive. '{' is ASCII,
            // so the cut always lands on a character boundary.
            let stop = bytes[pos..]
                .iter()
                .position(|&b| b == b'{')
                .map_or(bytes.len(), |off| pos + off);
            out.push_str(&fmt[pos..stop]);
            pos = stop;
            continue;
        }
        if bytes.get(pos + 1) == Some(&b'{') {
            out.push_char('{');
            pos += 2;
            continue;
        }

        let (spec, after) = parse_directive(fmt, pos)?;
        let selected = match spec.index {
            Some(index) => {
                if index == 0 || index > args.len() {
                    return Err(FormatError::IndexOutOfRange {
                        index,
                        count: args.len(),
                    });
                }
                index - 1
            }
            None => {
                if next_sequential >= args.len() {
                    return Err(FormatError::NotEnoughArguments { at: pos });
                }
                next_sequential += 1;
                next_sequential - 1
            }
        };
        consumed[selected] = true;
        args[selected].render(&spec, &mut out)?;
        pos = after;
    }

    let unused = consumed.iter().filter(|&&used| !used).count();
    if unused > 0 {
        return Err(FormatError::TooManyArguments { unused });
    }
    Ok(out.finish())
}

/// Formats into an owned [`Str`], panicking on any contract violation.
///
/// This is the assertion-style surface for static format strings; use
/// [`try_twformat!`](crate::try_twformat) (or [`format_args`]) where the
/// format string or codes come from runtime data.
#[macro_export]
macro_rules! twformat {
    ($fmt:expr $(, $arg:expr)* $(,)?) => {
        match $crate::try_twformat!($fmt $(, $arg)*) {
            Ok(rendered) => rendered,
            Err(error) => panic!("twformat!({:?}): {error}", $fmt),
        }
    };
}

/// Formats into `Result<Str, FormatError>`.
///
/// Expands to a [`format_args`](crate::fmt::format_args) call over the
/// captured arguments; each argument is captured by reference through
/// [`ToFmtArg`](crate::fmt::ToFmtArg), so its static type picks the
/// renderer at compile time.
#[macro_export]
macro_rules! try_twformat {
    ($fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::fmt::format_args(
            $fmt,
            &[$($crate::fmt::ToFmtArg::to_fmt_arg(&$arg)),*],
        )
    };
}
