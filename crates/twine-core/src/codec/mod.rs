//! Binary-to-text codecs.
//!
//! Pure encode/decode functions over byte slices: hexadecimal and standard
//! base64 (RFC 4648, with padding). Encoding is infallible; decoding
//! reports the first offending input offset.

pub mod base64;
pub mod hex;

use thiserror::Error;

/// A decode failure, carrying the first bad input position.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// A byte outside the codec's alphabet.
    #[error("invalid symbol {byte:#04x} at offset {offset}")]
    InvalidSymbol { byte: u8, offset: usize },

    /// Input length impossible for this encoding.
    #[error("input length {len} is not valid for this encoding")]
    InvalidLength { len: usize },

    /// A padding byte somewhere other than the end of the final group.
    #[error("misplaced padding at offset {offset}")]
    BadPadding { offset: usize },
}
