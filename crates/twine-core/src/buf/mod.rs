//! Buffer storage primitives.
//!
//! Two containers back everything in this crate: [`SharedBuf`], the
//! reference-counted small-buffer-optimized unit buffer that string values
//! live in, and [`OutBuf`], the exclusive growable accumulator the
//! formatting engine appends into.

pub mod out;
pub mod shared;

pub use out::OutBuf;
pub use shared::{INLINE_CAPACITY, SharedBuf, Unit};
