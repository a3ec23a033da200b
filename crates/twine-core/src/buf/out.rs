//! Exclusive growable output accumulator.
//!
//! [`OutBuf`] is the sink the formatting engine renders into: an exclusively
//! owned byte builder with a doubling growth strategy, no reference
//! counting, and a UTF-8-by-construction invariant (every public append
//! takes `&str` or `char`). `finish` seals the accumulated text into a
//! [`Str`].

use crate::text::Str;

/// Growable byte accumulator with doubling growth.
///
/// Invariants:
/// - contents are always valid UTF-8 (appends are `str`/`char`-shaped, and
///   crate-internal byte appends are ASCII-only);
/// - when an append would exceed capacity, capacity at least doubles, so
///   appending is amortized O(1) per byte.
#[derive(Debug, Default)]
pub struct OutBuf {
    data: Vec<u8>,
}

impl OutBuf {
    /// Creates an empty accumulator.
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Creates an accumulator with room for `capacity` bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Bytes accumulated so far.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if nothing has been appended yet.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Appends a string slice.
    pub fn push_str(&mut self, s: &str) {
        self.grow_for(s.len());
        self.data.extend_from_slice(s.as_bytes());
    }

    /// Appends a single character.
    pub fn push_char(&mut self, c: char) {
        let mut units = [0u8; 4];
        self.push_str(c.encode_utf8(&mut units));
    }

    /// Appends `count` copies of `fill`.
    pub fn pad(&mut self, fill: char, count: usize) {
        self.grow_for(fill.len_utf8() * count);
        for _ in 0..count {
            self.push_char(fill);
        }
    }

    /// Appends raw ASCII bytes (digit runs, signs, prefixes).
    pub(crate) fn push_ascii(&mut self, bytes: &[u8]) {
        debug_assert!(bytes.is_ascii());
        self.grow_for(bytes.len());
        self.data.extend_from_slice(bytes);
    }

    /// Seals the accumulated text into an immutable [`Str`].
    pub fn finish(self) -> Str {
        Str::from_verified_bytes(&self.data)
    }

    /// Grows capacity to at least double when `extra` more bytes would not
    /// fit, amortizing appends to O(1) per byte.
    fn grow_for(&mut self, extra: usize) {
        let needed = self.data.len() + extra;
        if needed > self.data.capacity() {
            let target = needed.max(self.data.capacity() * 2).max(16);
            self.data.reserve_exact(target - self.data.len());
        }
    }
}
