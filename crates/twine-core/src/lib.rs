//! # twine-core
//!
//! Compact shared strings and a brace-directive text formatting engine.
//!
//! The crate has two load-bearing pieces. [`SharedBuf`] is a
//! reference-counted, NUL-terminated character-unit buffer with inline
//! small-buffer storage; [`Str`] and the transcoding layer sit on top of
//! it. The [`fmt`] module is a printf-like engine over a `{...}`
//! mini-language whose argument list is captured with static types at the
//! call site, so directive count and argument types are checked before any
//! text is produced:
//!
//! ```
//! use twine_core::twformat;
//!
//! let s = twformat!("{} = {#08x}", "addr", 0x4D2);
//! assert_eq!(s, "addr = 0x0004d2");
//! ```
//!
//! No `unsafe` code is permitted at the crate level.

pub mod ascii;
pub mod buf;
pub mod codec;
pub mod fmt;
pub mod text;
pub mod unicode;

pub use buf::{INLINE_CAPACITY, OutBuf, SharedBuf, Unit};
pub use fmt::{FmtArg, FormatArg, FormatError, FormatSpec, ToFmtArg, format_args};
pub use text::Str;
