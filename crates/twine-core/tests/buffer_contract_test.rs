//! Shared-buffer and string storage contracts.
//!
//! Round-trip, sharing, and move invariants for [`SharedBuf`] across unit
//! widths, plus the [`Str`] and transcoding layers that sit on it.

use twine_core::buf::{INLINE_CAPACITY, SharedBuf};
use twine_core::text::Str;
use twine_core::unicode::{self, Validation};

#[test]
fn test_round_trip_inline_and_heap() {
    for len in [0, 1, INLINE_CAPACITY - 1, INLINE_CAPACITY, 64, 1000] {
        let data: Vec<u8> = (0..len).map(|i| (i % 251) as u8 + 1).collect();
        let buf = SharedBuf::from_units(&data);
        assert_eq!(buf.len(), len);
        assert_eq!(buf.units(), &data[..]);
        assert_eq!(buf.units_with_nul()[len], 0, "terminator at offset {len}");
        assert_eq!(buf.is_inline(), len < INLINE_CAPACITY);
    }
}

#[test]
fn test_round_trip_wide_units() {
    let data: Vec<u32> = (0..40).map(|i| i * 7 + 1).collect();
    let buf = SharedBuf::from_units(&data);
    assert!(!buf.is_inline());
    assert_eq!(buf.units(), &data[..]);
    assert_eq!(buf.units_with_nul().last(), Some(&0));

    let short: SharedBuf<u16> = SharedBuf::from_units(&[0x20AC, 0x41]);
    assert!(short.is_inline());
    assert_eq!(short.units_with_nul(), &[0x20AC, 0x41, 0]);
}

#[test]
fn test_sharing_survives_source_drop() {
    let original = SharedBuf::from_units(b"heap-backed contents, well past inline");
    let copy = original.clone();
    assert_eq!(original.shared_owners(), 2);
    drop(original);
    assert_eq!(copy.shared_owners(), 1);
    assert_eq!(copy.units(), b"heap-backed contents, well past inline");
}

#[test]
fn test_writable_buffer_is_always_fresh() {
    // Filling a new buffer never disturbs clones of the value it replaces.
    let first = SharedBuf::from_units(b"abc");
    let witness = first.clone();
    let second: SharedBuf<u8> = SharedBuf::build_with(4, |out| out.copy_from_slice(b"wxyz"));
    drop(first);
    assert_eq!(witness.units(), b"abc");
    assert_eq!(second.units(), b"wxyz");
    assert_eq!(second.units_with_nul()[4], 0);
}

#[test]
fn test_move_leaves_valid_empty_source() {
    for content in [&b"tiny"[..], &[9u8; 100][..]] {
        let mut source = SharedBuf::from_units(content);
        let owners_before = source.shared_owners();
        let moved = source.take();
        assert_eq!(source.len(), 0);
        assert!(source.is_inline());
        assert_eq!(source.units_with_nul(), b"\0");
        assert_eq!(moved.units(), content);
        // Ownership transferred; the refcount did not move.
        assert_eq!(moved.shared_owners(), owners_before);
    }
}

#[test]
fn test_str_is_buffer_backed() {
    let short = Str::from_str("short");
    assert!(short.is_inline());
    let long = Str::from_str("a string that definitely spills to the heap");
    assert!(!long.is_inline());
    assert_eq!(long.as_bytes_with_nul().last(), Some(&0));
    let alias = long.clone();
    drop(long);
    assert_eq!(alias.as_str(), "a string that definitely spills to the heap");
}

#[test]
fn test_transcoding_materializes_through_buffers() {
    let text = "mixed: caf\u{E9} \u{1F600}";
    let wide = unicode::utf8_to_utf16(text);
    assert_eq!(wide.len(), unicode::measure_utf16(text));
    let back = unicode::utf16_to_utf8(wide.units(), Validation::Strict).unwrap();
    assert_eq!(back.as_str(), text);

    let wider = unicode::utf8_to_utf32(text);
    let back = unicode::utf32_to_utf8(wider.units(), Validation::Strict).unwrap();
    assert_eq!(back.as_str(), text);
}
