//! Format directive parsing.
//!
//! One `{...}` directive is parsed into a [`FormatSpec`] by a cursor-driven
//! scanner. Flags may appear in any order before the closing `}`:
//!
//! ```text
//! directive   := '{' flag* '}'
//! flag        := index | alignment | pad-spec | width | precision
//!              | sign | prefix | digit-class | float-class
//! index       := digit+ '$'           1-based argument index (POSIX n$)
//! alignment   := '<' | '>'
//! pad-spec    := '_' any-char | '0'   bare '0' selects numeric padding
//! width       := digit+               first digit not '0'
//! precision   := '.' digit+
//! sign        := '+'
//! prefix      := '#'
//! digit-class := 'd' | 'x' | 'X' | 'o' | 'b' | 'c'
//! float-class := 'f' | 'e' | 'E'
//! ```
//!
//! A digit run is an argument index iff it is immediately followed by `$`;
//! otherwise it is a field width. A bare leading `0` is always the numeric
//! zero-pad flag (`_0` sets a generic zero pad instead), so `{08x}` is
//! numeric-pad + width 8 + hex.

use crate::fmt::FormatError;

/// Field alignment inside a padded directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

/// Radix/alphabet an integer renders in, or `Char` for codepoint output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigitClass {
    Decimal,
    Hex,
    HexUpper,
    Octal,
    Binary,
    Char,
}

impl DigitClass {
    /// Radix for the class; `Char` has no radix.
    pub fn radix(self) -> Option<u32> {
        match self {
            DigitClass::Decimal => Some(10),
            DigitClass::Hex | DigitClass::HexUpper => Some(16),
            DigitClass::Octal => Some(8),
            DigitClass::Binary => Some(2),
            DigitClass::Char => None,
        }
    }

    /// The class-prefix text emitted under `#` for non-zero values.
    pub fn prefix(self) -> &'static str {
        match self {
            DigitClass::Hex => "0x",
            DigitClass::HexUpper => "0X",
            DigitClass::Binary => "0b",
            DigitClass::Octal => "0",
            DigitClass::Decimal | DigitClass::Char => "",
        }
    }
}

/// Rendering style for floating-point arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FloatClass {
    /// `f`: fixed-point.
    Fixed,
    /// `e`: scientific with a lowercase exponent marker.
    Scientific,
    /// `E`: scientific with an uppercase exponent marker.
    ScientificUpper,
}

/// The fully parsed contents of one `{...}` directive.
///
/// Constructed fresh per directive and consumed immediately by a renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct FormatSpec {
    /// Minimum field width in characters; 0 means no padding.
    pub min_width: usize,
    /// Truncation length for text, digit precision for floats.
    pub precision: Option<usize>,
    /// Explicit alignment; `None` falls back to the argument's default
    /// (left for text, right for numerics).
    pub align: Option<Align>,
    /// Integer rendering class.
    pub digit_class: Option<DigitClass>,
    /// Floating-point rendering class.
    pub float_class: Option<FloatClass>,
    /// Fill character, default space.
    pub pad: char,
    /// `true` when the bare `0` flag selected numeric padding: zeros go
    /// between the sign/prefix and the digits instead of around the field.
    pub numeric_pad: bool,
    /// Force a `+` on non-negative numeric values.
    pub always_signed: bool,
    /// Emit the class prefix (`0x`/`0X`/`0b`/leading `0`) on non-zero values.
    pub class_prefix: bool,
    /// Explicit 1-based argument index; `None` means next sequential.
    pub index: Option<usize>,
}

impl Default for FormatSpec {
    fn default() -> Self {
        Self {
            min_width: 0,
            precision: None,
            align: None,
            digit_class: None,
            float_class: None,
            pad: ' ',
            numeric_pad: false,
            always_signed: false,
            class_prefix: false,
            index: None,
        }
    }
}

/// Parses one directive out of `fmt`.
///
/// `open` is the byte offset of the opening `{`. Returns the spec and the
/// byte offset just past the closing `}`. Exposed so extension renderers
/// can reuse the directive grammar.
pub fn parse_directive(fmt: &str, open: usize) -> Result<(FormatSpec, usize), FormatError> {
    debug_assert_eq!(fmt.as_bytes().get(open), Some(&b'{'));
    let mut spec = FormatSpec::default();
    let mut pos = open + 1;

    while pos < fmt.len() {
        let Some(c) = fmt[pos..].chars().next() else {
            break;
        };
        match c {
            '}' => return Ok((spec, pos + 1)),
            '<' => spec.align = Some(Align::Left),
            '>' => spec.align = Some(Align::Right),
            '+' => spec.always_signed = true,
            '#' => spec.class_prefix = true,
            '_' => {
                // The next character, whatever it is, becomes the generic
                // (non-numeric) fill character.
                pos += 1;
                let Some(fill) = fmt[pos..].chars().next() else {
                    return Err(FormatError::UnterminatedDirective { start: open });
                };
                spec.pad = fill;
                spec.numeric_pad = false;
                pos += fill.len_utf8();
                continue;
            }
            '0' => {
                spec.pad = '0';
                spec.numeric_pad = true;
            }
            '1'..='9' => {
                let (run, after) = scan_decimal(fmt, pos);
                if fmt.as_bytes().get(after) == Some(&b'$') {
                    spec.index = Some(run);
                    pos = after + 1;
                } else {
                    spec.min_width = run;
                    pos = after;
                }
                continue;
            }
            '.' => {
                let (run, after) = scan_decimal(fmt, pos + 1);
                if after == pos + 1 {
                    return Err(FormatError::BadPrecision { at: pos });
                }
                spec.precision = Some(run);
                pos = after;
                continue;
            }
            'd' => spec.digit_class = Some(DigitClass::Decimal),
            'x' => spec.digit_class = Some(DigitClass::Hex),
            'X' => spec.digit_class = Some(DigitClass::HexUpper),
            'o' => spec.digit_class = Some(DigitClass::Octal),
            'b' => spec.digit_class = Some(DigitClass::Binary),
            'c' => spec.digit_class = Some(DigitClass::Char),
            'f' => spec.float_class = Some(FloatClass::Fixed),
            'e' => spec.float_class = Some(FloatClass::Scientific),
            'E' => spec.float_class = Some(FloatClass::ScientificUpper),
            other => {
                return Err(FormatError::UnexpectedCharacter { ch: other, at: pos });
            }
        }
        pos += c.len_utf8();
    }

    Err(FormatError::UnterminatedDirective { start: open })
}

/// Scans a run of ASCII digits starting at `pos`, returning the saturated
/// value and the offset past the run. An empty run yields `(0, pos)`.
fn scan_decimal(fmt: &str, pos: usize) -> (usize, usize) {
    let bytes = fmt.as_bytes();
    let mut value = 0usize;
    let mut at = pos;
    while at < bytes.len() && bytes[at].is_ascii_digit() {
        value = value
            .saturating_mul(10)
            .saturating_add((bytes[at] - b'0') as usize);
        at += 1;
    }
    (value, at)
}
