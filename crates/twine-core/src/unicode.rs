//! Unicode transcoding between UTF-8, UTF-16, and UTF-32.
//!
//! Pure measure/convert function pairs: `measure_*` computes the exact
//! output size, `*_to_*` fills a pre-sized [`SharedBuf`] in a single pass
//! via [`SharedBuf::build_with`]. Validation is explicit: [`Validation::Strict`]
//! rejects malformed input with the offending unit offset, while
//! [`Validation::Lossy`] substitutes U+FFFD and never fails.

use thiserror::Error;

use crate::buf::SharedBuf;
use crate::text::Str;

/// How malformed input units are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validation {
    /// Reject malformed sequences.
    Strict,
    /// Replace malformed sequences with U+FFFD.
    Lossy,
}

/// A transcoding failure under [`Validation::Strict`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConvertError {
    /// The input is malformed at the given unit offset (UTF-16 units or
    /// UTF-32 units, matching the input encoding).
    #[error("invalid sequence at unit offset {offset}")]
    InvalidSequence { offset: usize },
}

/// Number of UTF-16 units needed to encode `s`.
pub fn measure_utf16(s: &str) -> usize {
    s.encode_utf16().count()
}

/// Number of UTF-32 units needed to encode `s`.
pub fn measure_utf32(s: &str) -> usize {
    s.chars().count()
}

/// Encodes `s` as UTF-16 into a shared buffer (always valid input).
pub fn utf8_to_utf16(s: &str) -> SharedBuf<u16> {
    let len = measure_utf16(s);
    SharedBuf::build_with(len, |out| {
        for (slot, unit) in out.iter_mut().zip(s.encode_utf16()) {
            *slot = unit;
        }
    })
}

/// Encodes `s` as UTF-32 into a shared buffer (always valid input).
pub fn utf8_to_utf32(s: &str) -> SharedBuf<u32> {
    let len = measure_utf32(s);
    SharedBuf::build_with(len, |out| {
        for (slot, c) in out.iter_mut().zip(s.chars()) {
            *slot = u32::from(c);
        }
    })
}

/// Number of UTF-8 bytes `units` decodes to, validating as it goes.
///
/// Under [`Validation::Strict`] an unpaired surrogate fails with its unit
/// offset; under [`Validation::Lossy`] it counts as U+FFFD (3 bytes).
pub fn measure_utf16_to_utf8(units: &[u16], validation: Validation) -> Result<usize, ConvertError> {
    let mut bytes = 0;
    let mut offset = 0;
    for decoded in char::decode_utf16(units.iter().copied()) {
        match decoded {
            Ok(c) => {
                bytes += c.len_utf8();
                offset += c.len_utf16();
            }
            Err(_) => {
                if validation == Validation::Strict {
                    return Err(ConvertError::InvalidSequence { offset });
                }
                bytes += char::REPLACEMENT_CHARACTER.len_utf8();
                offset += 1;
            }
        }
    }
    Ok(bytes)
}

/// Decodes UTF-16 `units` into a UTF-8 string.
pub fn utf16_to_utf8(units: &[u16], validation: Validation) -> Result<Str, ConvertError> {
    let len = measure_utf16_to_utf8(units, validation)?;
    let buf = SharedBuf::build_with(len, |out| {
        let mut at = 0;
        for decoded in char::decode_utf16(units.iter().copied()) {
            let c = decoded.unwrap_or(char::REPLACEMENT_CHARACTER);
            let width = c.len_utf8();
            c.encode_utf8(&mut out[at..at + width]);
            at += width;
        }
    });
    Ok(Str::from_verified_buf(buf))
}

/// Number of UTF-8 bytes `units` decodes to, validating each scalar.
pub fn measure_utf32_to_utf8(units: &[u32], validation: Validation) -> Result<usize, ConvertError> {
    let mut bytes = 0;
    for (offset, &unit) in units.iter().enumerate() {
        match char::from_u32(unit) {
            Some(c) => bytes += c.len_utf8(),
            None => {
                if validation == Validation::Strict {
                    return Err(ConvertError::InvalidSequence { offset });
                }
                bytes += char::REPLACEMENT_CHARACTER.len_utf8();
            }
        }
    }
    Ok(bytes)
}

/// Decodes UTF-32 `units` into a UTF-8 string.
pub fn utf32_to_utf8(units: &[u32], validation: Validation) -> Result<Str, ConvertError> {
    let len = measure_utf32_to_utf8(units, validation)?;
    let buf = SharedBuf::build_with(len, |out| {
        let mut at = 0;
        for &unit in units {
            let c = char::from_u32(unit).unwrap_or(char::REPLACEMENT_CHARACTER);
            let width = c.len_utf8();
            c.encode_utf8(&mut out[at..at + width]);
            at += width;
        }
    });
    Ok(Str::from_verified_buf(buf))
}
