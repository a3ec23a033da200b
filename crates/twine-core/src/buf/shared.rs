//! Reference-counted unit buffers with inline small-buffer storage.
//!
//! A [`SharedBuf`] holds a NUL-terminated sequence of fixed-width character
//! units (`u8`, `u16`, or `u32`). Short sequences are stored by value inside
//! the buffer object; longer sequences live in a shared, immutable heap
//! block behind a non-atomic reference count.
//!
//! Invariants:
//! - storage mode is derived from `len` alone: inline iff
//!   `len < INLINE_CAPACITY`;
//! - the unit at offset `len` is always the NUL unit, for both modes;
//! - heap blocks are immutable once built, so aliased copies can never
//!   observe a mutation.
//!
//! `SharedBuf` is deliberately not thread-safe: the reference count is a
//! plain (non-atomic) count, so shared instances must not be cloned or
//! dropped from multiple threads. This is structural here (`Rc` is neither
//! `Send` nor `Sync`).

use std::rc::Rc;

/// Number of units an inline buffer can hold, including the NUL terminator.
///
/// A buffer of logical length `len` is stored inline iff
/// `len < INLINE_CAPACITY`. Sixteen units keeps the inline arm at least as
/// large as the heap arm's pointer for every supported unit width.
pub const INLINE_CAPACITY: usize = 16;

/// A fixed-width character unit: `u8` (UTF-8/Latin-1), `u16` (UTF-16), or
/// `u32` (UTF-32 / wide characters).
pub trait Unit: Copy + Default + Eq + std::fmt::Debug + 'static {
    /// The NUL terminator value for this unit width.
    const NUL: Self;
}

impl Unit for u8 {
    const NUL: Self = 0;
}

impl Unit for u16 {
    const NUL: Self = 0;
}

impl Unit for u32 {
    const NUL: Self = 0;
}

/// Active storage for a [`SharedBuf`].
///
/// The variant is never inspected to decide the storage mode; that decision
/// always goes through `len < INLINE_CAPACITY` so the two can not drift.
#[derive(Clone)]
enum Storage<C: Unit> {
    /// Small contents held by value, zero-filled past `len`.
    Inline([C; INLINE_CAPACITY]),
    /// `len + 1` units on the heap, last unit NUL, shared by refcount.
    Heap(Rc<[C]>),
}

/// A reference-counted, NUL-terminated buffer of character units with
/// small-buffer optimization.
///
/// Cloning a heap-backed buffer bumps the shared reference count instead of
/// copying units; cloning an inline buffer copies the inline array. The
/// contents are immutable once built: the only way to obtain writable
/// storage is [`SharedBuf::build_with`], which fills a fresh buffer in a
/// single pass.
pub struct SharedBuf<C: Unit> {
    len: usize,
    storage: Storage<C>,
}

impl<C: Unit> SharedBuf<C> {
    /// Creates an empty buffer (inline, zero-filled).
    pub fn new() -> Self {
        Self {
            len: 0,
            storage: Storage::Inline([C::NUL; INLINE_CAPACITY]),
        }
    }

    /// Creates a buffer holding a copy of `units`.
    ///
    /// Contents shorter than [`INLINE_CAPACITY`] are stored inline; anything
    /// longer gets a fresh heap block referenced once. The terminator is
    /// appended in both cases.
    pub fn from_units(units: &[C]) -> Self {
        Self::build_with(units.len(), |out| out.copy_from_slice(units))
    }

    /// Creates a buffer of exactly `len` units by handing `fill` a zeroed
    /// slice of that length to write in one pass.
    ///
    /// This is the writable-buffer entry point used by the conversion
    /// routines: the caller knows the converted size up front, fills the
    /// slice, and the buffer is sealed into inline or heap storage with its
    /// terminator already in place.
    pub fn build_with(len: usize, fill: impl FnOnce(&mut [C])) -> Self {
        let storage = if len < INLINE_CAPACITY {
            let mut units = [C::NUL; INLINE_CAPACITY];
            fill(&mut units[..len]);
            Storage::Inline(units)
        } else {
            // One extra unit for the terminator; NUL-initialized so the
            // terminator survives the fill of the first `len` units.
            let mut units = vec![C::NUL; len + 1];
            fill(&mut units[..len]);
            units[len] = C::NUL;
            Storage::Heap(Rc::from(units))
        };
        let buf = Self { len, storage };
        buf.debug_check();
        buf
    }

    /// Logical length in units, excluding the terminator.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the buffer holds no units.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if the contents are stored inline.
    ///
    /// Derived from `len` only; this is the single source of truth for the
    /// storage mode.
    pub fn is_inline(&self) -> bool {
        self.len < INLINE_CAPACITY
    }

    /// The buffer contents, excluding the terminator.
    pub fn units(&self) -> &[C] {
        match &self.storage {
            Storage::Inline(units) => &units[..self.len],
            Storage::Heap(units) => &units[..self.len],
        }
    }

    /// The buffer contents plus the trailing NUL unit.
    ///
    /// Valid even for an empty buffer, so the result can always stand in
    /// for a C-style string.
    pub fn units_with_nul(&self) -> &[C] {
        match &self.storage {
            Storage::Inline(units) => &units[..self.len + 1],
            Storage::Heap(units) => &units[..self.len + 1],
        }
    }

    /// Number of buffers currently sharing this one's storage.
    ///
    /// Inline buffers are never shared, so this is 1 for them.
    pub fn shared_owners(&self) -> usize {
        match &self.storage {
            Storage::Inline(_) => 1,
            Storage::Heap(units) => Rc::strong_count(units),
        }
    }

    /// Moves the contents out, leaving `self` as a valid empty buffer.
    ///
    /// Ownership transfers without touching the reference count.
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    fn debug_check(&self) {
        debug_assert_eq!(
            matches!(self.storage, Storage::Inline(_)),
            self.len < INLINE_CAPACITY,
            "storage mode drifted from the size-derived discriminant"
        );
        debug_assert_eq!(self.units_with_nul()[self.len], C::NUL);
    }
}

impl<C: Unit> Default for SharedBuf<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Unit> Clone for SharedBuf<C> {
    fn clone(&self) -> Self {
        Self {
            len: self.len,
            storage: self.storage.clone(),
        }
    }
}

impl<C: Unit> PartialEq for SharedBuf<C> {
    fn eq(&self, other: &Self) -> bool {
        self.units() == other.units()
    }
}

impl<C: Unit> Eq for SharedBuf<C> {}

impl<C: Unit> std::fmt::Debug for SharedBuf<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedBuf")
            .field("len", &self.len)
            .field("inline", &self.is_inline())
            .field("units", &self.units())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_buffer() {
        let buf: SharedBuf<u8> = SharedBuf::new();
        assert_eq!(buf.len(), 0);
        assert!(buf.is_empty());
        assert!(buf.is_inline());
        assert_eq!(buf.units(), b"");
        assert_eq!(buf.units_with_nul(), b"\0");
    }

    #[test]
    fn test_inline_round_trip() {
        let buf = SharedBuf::from_units(b"hello");
        assert!(buf.is_inline());
        assert_eq!(buf.len(), 5);
        assert_eq!(buf.units(), b"hello");
        assert_eq!(buf.units_with_nul(), b"hello\0");
    }

    #[test]
    fn test_heap_round_trip() {
        let data = b"0123456789abcdefghij";
        let buf = SharedBuf::from_units(data);
        assert!(!buf.is_inline());
        assert_eq!(buf.len(), 20);
        assert_eq!(buf.units(), data);
        assert_eq!(buf.units_with_nul()[20], 0);
    }

    #[test]
    fn test_boundary_is_heap() {
        // Exactly INLINE_CAPACITY units no longer fit with the terminator.
        let data = [7u8; INLINE_CAPACITY];
        let buf = SharedBuf::from_units(&data);
        assert!(!buf.is_inline());
        let data = [7u8; INLINE_CAPACITY - 1];
        let buf = SharedBuf::from_units(&data);
        assert!(buf.is_inline());
    }

    #[test]
    fn test_heap_clone_shares_storage() {
        let buf = SharedBuf::from_units(b"a much longer heap-backed string");
        assert_eq!(buf.shared_owners(), 1);
        let copy = buf.clone();
        assert_eq!(buf.shared_owners(), 2);
        assert_eq!(copy.shared_owners(), 2);
        drop(buf);
        assert_eq!(copy.shared_owners(), 1);
        assert_eq!(copy.units(), b"a much longer heap-backed string");
    }

    #[test]
    fn test_inline_clone_is_independent() {
        let mut buf = SharedBuf::from_units(b"short");
        let copy = buf.clone();
        assert_eq!(copy.shared_owners(), 1);
        buf = SharedBuf::build_with(3, |out| out.copy_from_slice(b"xyz"));
        assert_eq!(buf.units(), b"xyz");
        assert_eq!(copy.units(), b"short");
    }

    #[test]
    fn test_take_leaves_empty_buffer() {
        let mut buf = SharedBuf::from_units(b"contents that spill onto the heap");
        let moved = buf.take();
        assert_eq!(buf.len(), 0);
        assert!(buf.is_inline());
        assert_eq!(buf.units_with_nul(), b"\0");
        assert_eq!(moved.units(), b"contents that spill onto the heap");
        assert_eq!(moved.shared_owners(), 1);
    }

    #[test]
    fn test_build_with_wide_units() {
        let buf: SharedBuf<u32> = SharedBuf::build_with(3, |out| {
            out.copy_from_slice(&[0x41, 0x1F600, 0x42]);
        });
        assert!(buf.is_inline());
        assert_eq!(buf.units(), &[0x41, 0x1F600, 0x42]);
        assert_eq!(buf.units_with_nul()[3], 0);

        let wide: SharedBuf<u16> = SharedBuf::build_with(20, |out| out.fill(0x20AC));
        assert!(!wide.is_inline());
        assert_eq!(wide.units().len(), 20);
        assert!(wide.units().iter().all(|&u| u == 0x20AC));
    }

    #[test]
    fn test_equality_ignores_storage_mode() {
        let a = SharedBuf::from_units(b"same");
        let b = SharedBuf::build_with(4, |out| out.copy_from_slice(b"same"));
        assert_eq!(a, b);
    }
}
