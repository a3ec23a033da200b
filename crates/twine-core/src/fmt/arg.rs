//! Typed format arguments and dispatch.
//!
//! Each call-site argument is captured as a [`FmtArg`] variant chosen by
//! its static type (the [`ToFmtArg`] impl picked at compile time); the
//! directive's class flags only refine how that variant renders, never
//! which renderer runs. User types extend the closed set by implementing
//! [`FormatArg`] and wrapping themselves in [`FmtArg::Custom`].

use crate::buf::OutBuf;
use crate::fmt::render::{render_float, render_int, render_str};
use crate::fmt::spec::{DigitClass, FormatSpec};
use crate::fmt::FormatError;
use crate::text::Str;

/// A user-defined format argument.
///
/// Implementations receive the parsed directive and the output sink, and
/// will usually delegate to [`render_str`](crate::fmt::render::render_str)
/// or [`render_int`](crate::fmt::render::render_int) for padding.
pub trait FormatArg {
    /// Renders `self` under `spec` into `out`.
    fn render(&self, spec: &FormatSpec, out: &mut OutBuf) -> Result<(), FormatError>;
}

/// A format argument as captured at the call site.
#[derive(Clone, Copy)]
pub enum FmtArg<'a> {
    /// Any signed integer width, widened to `i64`.
    Signed(i64),
    /// Any unsigned integer width, widened to `u64`.
    Unsigned(u64),
    /// Any float width, widened to `f64`.
    Float(f64),
    /// A single character.
    Char(char),
    /// Borrowed text (`&str`, `String`, [`Str`]).
    Text(&'a str),
    /// A boolean, rendered as `true`/`false`.
    Bool(bool),
    /// A user-defined extension argument.
    Custom(&'a dyn FormatArg),
}

impl FmtArg<'_> {
    /// Dispatches to the render rule for this argument's type.
    pub(crate) fn render(&self, spec: &FormatSpec, out: &mut OutBuf) -> Result<(), FormatError> {
        match *self {
            FmtArg::Signed(v) => render_int(out, spec, v < 0, v.unsigned_abs()),
            FmtArg::Unsigned(v) => render_int(out, spec, false, v),
            FmtArg::Float(v) => {
                render_float(out, spec, v);
                Ok(())
            }
            FmtArg::Char(c) => {
                // A numeric digit class renders the codepoint instead.
                if spec.digit_class.is_some_and(|class| class != DigitClass::Char) {
                    render_int(out, spec, false, u64::from(u32::from(c)))
                } else {
                    let mut units = [0u8; 4];
                    render_str(out, spec, c.encode_utf8(&mut units));
                    Ok(())
                }
            }
            FmtArg::Text(s) => {
                render_str(out, spec, s);
                Ok(())
            }
            FmtArg::Bool(b) => {
                render_str(out, spec, if b { "true" } else { "false" });
                Ok(())
            }
            FmtArg::Custom(custom) => custom.render(spec, out),
        }
    }
}

impl std::fmt::Debug for FmtArg<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FmtArg::Signed(v) => f.debug_tuple("Signed").field(v).finish(),
            FmtArg::Unsigned(v) => f.debug_tuple("Unsigned").field(v).finish(),
            FmtArg::Float(v) => f.debug_tuple("Float").field(v).finish(),
            FmtArg::Char(v) => f.debug_tuple("Char").field(v).finish(),
            FmtArg::Text(v) => f.debug_tuple("Text").field(v).finish(),
            FmtArg::Bool(v) => f.debug_tuple("Bool").field(v).finish(),
            FmtArg::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Conversion into a [`FmtArg`], implemented for every built-in argument
/// type. This is the static-type dispatch point: the impl chosen at the
/// call site decides the renderer.
pub trait ToFmtArg {
    /// Captures `self` as a format argument borrowing from `self`.
    fn to_fmt_arg(&self) -> FmtArg<'_>;
}

macro_rules! impl_to_fmt_arg_signed {
    ($($ty:ty),*) => {$(
        impl ToFmtArg for $ty {
            fn to_fmt_arg(&self) -> FmtArg<'_> {
                FmtArg::Signed(i64::from(*self))
            }
        }
    )*};
}

macro_rules! impl_to_fmt_arg_unsigned {
    ($($ty:ty),*) => {$(
        impl ToFmtArg for $ty {
            fn to_fmt_arg(&self) -> FmtArg<'_> {
                FmtArg::Unsigned(u64::from(*self))
            }
        }
    )*};
}

impl_to_fmt_arg_signed!(i8, i16, i32, i64);
impl_to_fmt_arg_unsigned!(u8, u16, u32, u64);

impl ToFmtArg for isize {
    fn to_fmt_arg(&self) -> FmtArg<'_> {
        FmtArg::Signed(*self as i64)
    }
}

impl ToFmtArg for usize {
    fn to_fmt_arg(&self) -> FmtArg<'_> {
        FmtArg::Unsigned(*self as u64)
    }
}

impl ToFmtArg for f32 {
    fn to_fmt_arg(&self) -> FmtArg<'_> {
        FmtArg::Float(f64::from(*self))
    }
}

impl ToFmtArg for f64 {
    fn to_fmt_arg(&self) -> FmtArg<'_> {
        FmtArg::Float(*self)
    }
}

impl ToFmtArg for char {
    fn to_fmt_arg(&self) -> FmtArg<'_> {
        FmtArg::Char(*self)
    }
}

impl ToFmtArg for bool {
    fn to_fmt_arg(&self) -> FmtArg<'_> {
        FmtArg::Bool(*self)
    }
}

impl ToFmtArg for str {
    fn to_fmt_arg(&self) -> FmtArg<'_> {
        FmtArg::Text(self)
    }
}

impl ToFmtArg for String {
    fn to_fmt_arg(&self) -> FmtArg<'_> {
        FmtArg::Text(self)
    }
}

impl ToFmtArg for Str {
    fn to_fmt_arg(&self) -> FmtArg<'_> {
        FmtArg::Text(self.as_str())
    }
}

impl<T: ToFmtArg + ?Sized> ToFmtArg for &T {
    fn to_fmt_arg(&self) -> FmtArg<'_> {
        (**self).to_fmt_arg()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fmt::spec::parse_directive;

    fn render(arg: FmtArg<'_>, directive: &str) -> String {
        let spec = parse_directive(directive, 0).unwrap().0;
        let mut out = OutBuf::new();
        arg.render(&spec, &mut out).unwrap();
        out.finish().as_str().to_string()
    }

    #[test]
    fn test_static_type_selects_variant() {
        assert!(matches!((-3i16).to_fmt_arg(), FmtArg::Signed(-3)));
        assert!(matches!(3u8.to_fmt_arg(), FmtArg::Unsigned(3)));
        assert!(matches!(1.5f32.to_fmt_arg(), FmtArg::Float(_)));
        assert!(matches!('x'.to_fmt_arg(), FmtArg::Char('x')));
        assert!(matches!("s".to_fmt_arg(), FmtArg::Text("s")));
        assert!(matches!(true.to_fmt_arg(), FmtArg::Bool(true)));
        let owned = String::from("owned");
        assert!(matches!((&owned).to_fmt_arg(), FmtArg::Text("owned")));
    }

    #[test]
    fn test_bool_renders_as_text() {
        assert_eq!(render(FmtArg::Bool(true), "{}"), "true");
        assert_eq!(render(FmtArg::Bool(false), "{>7}"), "  false");
    }

    #[test]
    fn test_char_with_numeric_class() {
        assert_eq!(render(FmtArg::Char('A'), "{}"), "A");
        assert_eq!(render(FmtArg::Char('A'), "{d}"), "65");
        assert_eq!(render(FmtArg::Char('A'), "{#x}"), "0x41");
        assert_eq!(render(FmtArg::Char('A'), "{c}"), "A");
    }

    #[test]
    fn test_signed_min_magnitude() {
        assert_eq!(render(FmtArg::Signed(i64::MIN), "{}"), "-9223372036854775808");
    }

    struct Fraction(u32, u32);

    impl FormatArg for Fraction {
        fn render(&self, spec: &FormatSpec, out: &mut OutBuf) -> Result<(), FormatError> {
            let text = format!("{}/{}", self.0, self.1);
            crate::fmt::render::render_str(out, spec, &text);
            Ok(())
        }
    }

    #[test]
    fn test_custom_argument_reuses_padding() {
        let half = Fraction(1, 2);
        assert_eq!(render(FmtArg::Custom(&half), "{>5}"), "  1/2");
    }
}
