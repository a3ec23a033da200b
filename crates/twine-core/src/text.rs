//! Immutable UTF-8 strings over shared buffer storage.
//!
//! [`Str`] is a thin, immutable string value whose sole storage is a
//! [`SharedBuf<u8>`]: short strings live inline, long ones share a
//! reference-counted heap block, and cloning is always cheap. The
//! convenience layer here (`trim`, `split`, case-insensitive comparison)
//! is a set of thin wrappers over the buffer and the [`ascii`](crate::ascii)
//! helpers.

use std::ops::Deref;

use crate::ascii;
use crate::buf::SharedBuf;

/// An immutable, cheaply clonable UTF-8 string.
///
/// Invariant: the underlying buffer always holds valid UTF-8. Every
/// constructor either starts from `&str` or from bytes produced by the
/// crate's own UTF-8 writers.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Str {
    buf: SharedBuf<u8>,
}

impl Str {
    /// Creates an empty string.
    pub fn new() -> Self {
        Self {
            buf: SharedBuf::new(),
        }
    }

    /// Copies `s` into a new `Str`.
    pub fn from_str(s: &str) -> Self {
        Self {
            buf: SharedBuf::from_units(s.as_bytes()),
        }
    }

    /// Wraps bytes already known to be valid UTF-8.
    ///
    /// Crate-internal: callers uphold the UTF-8 invariant (the debug
    /// assertion catches violations in test builds).
    pub(crate) fn from_verified_bytes(bytes: &[u8]) -> Self {
        debug_assert!(std::str::from_utf8(bytes).is_ok());
        Self {
            buf: SharedBuf::from_units(bytes),
        }
    }

    /// Wraps an already-built buffer of valid UTF-8.
    pub(crate) fn from_verified_buf(buf: SharedBuf<u8>) -> Self {
        debug_assert!(std::str::from_utf8(buf.units()).is_ok());
        Self { buf }
    }

    /// The string contents.
    pub fn as_str(&self) -> &str {
        // The UTF-8 invariant is maintained by every constructor.
        std::str::from_utf8(self.buf.units()).expect("Str holds valid UTF-8")
    }

    /// The raw bytes, excluding the NUL terminator.
    pub fn as_bytes(&self) -> &[u8] {
        self.buf.units()
    }

    /// The raw bytes including the NUL terminator, usable as a C string.
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        self.buf.units_with_nul()
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns `true` for the empty string.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Returns `true` if the contents are stored inline (no heap block).
    pub fn is_inline(&self) -> bool {
        self.buf.is_inline()
    }

    /// Copy of this string with leading and trailing whitespace removed.
    pub fn trim(&self) -> Str {
        Str::from_str(self.as_str().trim())
    }

    /// Returns `true` if the string begins with `prefix`.
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.as_str().starts_with(prefix)
    }

    /// Splits on `sep`, yielding each piece as its own `Str`.
    pub fn split(&self, sep: char) -> impl Iterator<Item = Str> + '_ {
        self.as_str().split(sep).map(Str::from_str)
    }

    /// ASCII case-insensitive equality; non-ASCII bytes compare verbatim.
    pub fn eq_ignore_ascii_case(&self, other: &str) -> bool {
        ascii::eq_ignore_case(self.as_bytes(), other.as_bytes())
    }

    /// Copy of this string with ASCII letters uppercased.
    pub fn to_ascii_upper(&self) -> Str {
        let folded: Vec<u8> = self.as_bytes().iter().map(|&b| ascii::to_upper(b)).collect();
        Str::from_verified_bytes(&folded)
    }

    /// Copy of this string with ASCII letters lowercased.
    pub fn to_ascii_lower(&self) -> Str {
        let folded: Vec<u8> = self.as_bytes().iter().map(|&b| ascii::to_lower(b)).collect();
        Str::from_verified_bytes(&folded)
    }
}

impl Deref for Str {
    type Target = str;

    fn deref(&self) -> &str {
        self.as_str()
    }
}

impl From<&str> for Str {
    fn from(s: &str) -> Self {
        Str::from_str(s)
    }
}

impl From<&String> for Str {
    fn from(s: &String) -> Self {
        Str::from_str(s)
    }
}

impl PartialEq<str> for Str {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Str {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl PartialOrd for Str {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Str {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl std::hash::Hash for Str {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl std::fmt::Display for Str {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Debug for Str {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self.as_str(), f)
    }
}
