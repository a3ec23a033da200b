//! Numeric digit and floating-point renderers.
//!
//! [`Digits`] converts an unsigned magnitude to its minimal digit string in
//! a given radix by repeated division, writing back-to-front into a fixed
//! buffer sized for the base-2 worst case. The float renderers produce the
//! unsigned body text for the `f F e E g G` format codes with POSIX-style
//! two-digit exponents; sign, width, and padding are the caller's business
//! (see [`render`](crate::fmt::render)).

use crate::fmt::FormatError;

/// Worst case is u64 in base 2: 64 digits.
const DIGIT_BUF: usize = 64;

/// A rendered digit sequence: minimal (no leading zeros), `"0"` for zero.
///
/// Transient and stack-local; rebuilt on every formatting call.
pub struct Digits {
    buf: [u8; DIGIT_BUF],
    len: usize,
}

impl Digits {
    /// Renders `value` in `radix` (2, 8, 10, or 16).
    ///
    /// Digits 10+ map to `a..` or `A..` per `uppercase`.
    pub fn render(value: u64, radix: u32, uppercase: bool) -> Digits {
        debug_assert!(matches!(radix, 2 | 8 | 10 | 16));
        let mut buf = [0u8; DIGIT_BUF];
        if value == 0 {
            buf[DIGIT_BUF - 1] = b'0';
            return Digits { buf, len: 1 };
        }
        let alpha = if uppercase { b'A' } else { b'a' };
        let radix = u64::from(radix);
        let mut rest = value;
        let mut pos = DIGIT_BUF;
        while rest > 0 {
            pos -= 1;
            let digit = (rest % radix) as u8;
            buf[pos] = if digit < 10 {
                b'0' + digit
            } else {
                alpha + (digit - 10)
            };
            rest /= radix;
        }
        Digits {
            buf,
            len: DIGIT_BUF - pos,
        }
    }

    /// The digit characters (ASCII).
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[DIGIT_BUF - self.len..]
    }

    /// Number of digits.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Never true: zero renders as `"0"`.
    pub fn is_empty(&self) -> bool {
        false
    }
}

/// Renders `value` with a runtime-supplied printf-style format code.
///
/// Accepts exactly `f F e E g G`; anything else is the catchable
/// [`FormatError::BadFloatFormat`], since format codes can legitimately be
/// computed at runtime rather than written in a static format string.
/// `precision` defaults to 6 (POSIX).
pub fn format_float_code(
    value: f64,
    code: char,
    precision: Option<usize>,
) -> Result<String, FormatError> {
    if !matches!(code, 'f' | 'F' | 'e' | 'E' | 'g' | 'G') {
        return Err(FormatError::BadFloatFormat { code });
    }
    let uppercase = code.is_ascii_uppercase();
    if let Some(special) = special_body(value, uppercase) {
        return Ok(special.to_string());
    }
    let precision = precision.unwrap_or(6);
    let sign = if value.is_sign_negative() { "-" } else { "" };
    let abs = value.abs();
    let body = match code.to_ascii_lowercase() {
        'f' => fixed_body(abs, precision),
        'e' => sci_body(abs, precision, uppercase),
        _ => general_body(abs, precision, uppercase),
    };
    Ok(format!("{sign}{body}"))
}

/// The nan/inf text for `value`, or `None` for finite values.
///
/// The sign of a negative infinity is included; NaN is unsigned.
pub(crate) fn special_body(value: f64, uppercase: bool) -> Option<&'static str> {
    if value.is_nan() {
        return Some(if uppercase { "NAN" } else { "nan" });
    }
    if value.is_infinite() {
        return Some(match (value > 0.0, uppercase) {
            (true, true) => "INF",
            (true, false) => "inf",
            (false, true) => "-INF",
            (false, false) => "-inf",
        });
    }
    None
}

/// Fixed-point body for a non-negative finite value.
pub(crate) fn fixed_body(abs: f64, precision: usize) -> String {
    format!("{abs:.precision$}")
}

/// Scientific body for a non-negative finite value: `d.dddde±XX` with a
/// two-digit exponent.
pub(crate) fn sci_body(abs: f64, precision: usize, uppercase: bool) -> String {
    let e = if uppercase { 'E' } else { 'e' };
    if abs == 0.0 {
        return if precision == 0 {
            format!("0{e}+00")
        } else {
            format!("{:.precision$}{e}+00", 0.0)
        };
    }
    let mut exp = abs.log10().floor() as i32;
    let mut mantissa = abs / 10f64.powi(exp);
    // Rounding at the requested precision can carry the mantissa to 10.
    if format!("{mantissa:.precision$}").starts_with("10") {
        mantissa /= 10.0;
        exp += 1;
    }
    let exp_sign = if exp < 0 { '-' } else { '+' };
    format!(
        "{mantissa:.precision$}{e}{exp_sign}{:02}",
        exp.unsigned_abs()
    )
}

/// General (`g`) body: fixed or scientific, whichever is shorter per the
/// POSIX exponent rule, with trailing zeros stripped.
pub(crate) fn general_body(abs: f64, precision: usize, uppercase: bool) -> String {
    let significant = precision.max(1);
    if abs == 0.0 {
        return "0".to_string();
    }
    let exp = abs.log10().floor() as i32;
    if exp >= -4 && exp < significant as i32 {
        let frac = (significant as i32 - 1 - exp).max(0) as usize;
        let mut body = format!("{abs:.frac$}");
        strip_trailing_zeros(&mut body);
        body
    } else {
        let mut body = sci_body(abs, significant - 1, uppercase);
        let marker = if uppercase { 'E' } else { 'e' };
        if let Some(split) = body.find(marker) {
            let mut mantissa = body[..split].to_string();
            strip_trailing_zeros(&mut mantissa);
            body = format!("{mantissa}{}", &body[split..]);
        }
        body
    }
}

/// Removes trailing zeros after a decimal point, and the point itself if
/// nothing follows it.
fn strip_trailing_zeros(s: &mut String) {
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
}
