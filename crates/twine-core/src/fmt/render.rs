//! Padding, sign, and prefix composition.
//!
//! Every argument type funnels through one of three entry points:
//! [`render_str`] for text-shaped values, [`render_int`] for integers in
//! any digit class, and [`render_float`] for floating point. The
//! composition rules:
//!
//! - text defaults to left alignment, numerics to right; `<`/`>` override;
//! - a value is classed as negative, non-negative, or zero — zero never
//!   takes a class prefix or a minus sign;
//! - the pad count is the width minus the digits, minus one if a sign will
//!   be emitted, minus the prefix length, clamped at zero;
//! - numeric padding (`0` flag) always emits sign, prefix, zeros, digits in
//!   that order, regardless of alignment;
//! - generic padding surrounds the whole rendered field on the side the
//!   alignment leaves free.

use crate::buf::OutBuf;
use crate::fmt::num::{self, Digits};
use crate::fmt::spec::{Align, DigitClass, FloatClass, FormatSpec};
use crate::fmt::FormatError;

/// Renders text with truncation and generic padding. Default alignment is
/// left; `precision` truncates to that many characters first.
pub fn render_str(out: &mut OutBuf, spec: &FormatSpec, text: &str) {
    render_text(out, spec, text, Align::Left);
}

/// Text rendering with a caller-chosen default alignment (numeric-shaped
/// text such as `nan` wants right).
fn render_text(out: &mut OutBuf, spec: &FormatSpec, text: &str, default_align: Align) {
    let truncated = match spec.precision {
        Some(limit) => match text.char_indices().nth(limit) {
            Some((cut, _)) => &text[..cut],
            None => text,
        },
        None => text,
    };
    let width = truncated.chars().count();
    let pad = spec.min_width.saturating_sub(width);
    match spec.align.unwrap_or(default_align) {
        Align::Left => {
            out.push_str(truncated);
            out.pad(spec.pad, pad);
        }
        Align::Right => {
            out.pad(spec.pad, pad);
            out.push_str(truncated);
        }
    }
}

/// Renders an integer given its sign and magnitude.
///
/// The digit class refines the radix (default decimal); class `c` renders
/// the magnitude as a character instead, failing with
/// [`FormatError::BadCharValue`] for negative values or invalid scalars.
pub fn render_int(
    out: &mut OutBuf,
    spec: &FormatSpec,
    negative: bool,
    magnitude: u64,
) -> Result<(), FormatError> {
    let class = spec.digit_class.unwrap_or(DigitClass::Decimal);
    let Some(radix) = class.radix() else {
        return render_codepoint(out, spec, negative, magnitude);
    };
    let digits = Digits::render(magnitude, radix, class == DigitClass::HexUpper);

    let sign = if negative {
        Some('-')
    } else if spec.always_signed {
        Some('+')
    } else {
        None
    };
    // Zero is its own class: no prefix even under '#'.
    let prefix = if spec.class_prefix && magnitude != 0 {
        class.prefix()
    } else {
        ""
    };
    compose_numeric(out, spec, sign, prefix, digits.as_bytes());
    Ok(())
}

/// Renders a floating-point value per the directive's float class.
///
/// No class and no precision yields the shortest round-trippable decimal
/// form; no class with a precision renders fixed-point; `f`/`e`/`E`
/// without a precision use the POSIX default of 6.
pub fn render_float(out: &mut OutBuf, spec: &FormatSpec, value: f64) {
    let uppercase = spec.float_class == Some(FloatClass::ScientificUpper);
    if let Some(special) = num::special_body(value, uppercase) {
        // nan/inf never zero-pad; they field-pad like text, right-aligned.
        let text_spec = FormatSpec {
            pad: ' ',
            numeric_pad: false,
            precision: None,
            ..spec.clone()
        };
        render_text(out, &text_spec, special, Align::Right);
        return;
    }

    let abs = value.abs();
    let body = match spec.float_class {
        Some(FloatClass::Fixed) => num::fixed_body(abs, spec.precision.unwrap_or(6)),
        Some(FloatClass::Scientific) => num::sci_body(abs, spec.precision.unwrap_or(6), false),
        Some(FloatClass::ScientificUpper) => num::sci_body(abs, spec.precision.unwrap_or(6), true),
        None => match spec.precision {
            Some(precision) => num::fixed_body(abs, precision),
            None => format!("{abs}"),
        },
    };
    let sign = if value.is_sign_negative() {
        Some('-')
    } else if spec.always_signed {
        Some('+')
    } else {
        None
    };
    compose_numeric(out, spec, sign, "", body.as_bytes());
}

/// The uniform numeric emission order for all widths and digit classes.
fn compose_numeric(out: &mut OutBuf, spec: &FormatSpec, sign: Option<char>, prefix: &str, body: &[u8]) {
    let pad = spec
        .min_width
        .saturating_sub(body.len())
        .saturating_sub(usize::from(sign.is_some()))
        .saturating_sub(prefix.len());

    if spec.numeric_pad {
        // Zero padding is inherently right-aligned and prefix-adjacent.
        if let Some(sign) = sign {
            out.push_char(sign);
        }
        out.push_str(prefix);
        out.pad('0', pad);
        out.push_ascii(body);
        return;
    }

    match spec.align.unwrap_or(Align::Right) {
        Align::Right => {
            out.pad(spec.pad, pad);
            if let Some(sign) = sign {
                out.push_char(sign);
            }
            out.push_str(prefix);
            out.push_ascii(body);
        }
        Align::Left => {
            if let Some(sign) = sign {
                out.push_char(sign);
            }
            out.push_str(prefix);
            out.push_ascii(body);
            out.pad(spec.pad, pad);
        }
    }
}

/// Digit class `c`: the magnitude is a Unicode scalar value.
fn render_codepoint(
    out: &mut OutBuf,
    spec: &FormatSpec,
    negative: bool,
    magnitude: u64,
) -> Result<(), FormatError> {
    let scalar = u32::try_from(magnitude).ok().filter(|_| !negative);
    let Some(c) = scalar.and_then(char::from_u32) else {
        return Err(FormatError::BadCharValue { value: magnitude });
    };
    let mut units = [0u8; 4];
    render_text(out, spec, c.encode_utf8(&mut units), Align::Left);
    Ok(())
}
