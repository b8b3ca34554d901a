//! # bitdecode
//!
//! Declarative decoding of register values, protocol fields and other packed
//! integers into human-readable lines.
//!
//! Describe the shape of a value once as a tree of [Decoder]s: single-bit signals
//! and flags, enumerated or numeric bit ranges, lists, shifted sub-tables and named
//! groups. Then decode any number of concrete values into an ordered list of text
//! lines. Group output is indented with one tab per nesting level.
//!
//! ## Example
//!
//! ```
//! use bitdecode::Decoder;
//!
//! let temp_stat = Decoder::group(
//!     "TEMP_STAT",
//!     Decoder::list([
//!         Decoder::signal(0, "TEMP_READY"),
//!         Decoder::signal(1, "OVERTEMP"),
//!         Decoder::func(4, 13, "TEMP", |v| {
//!             format!("{:.1} °C", v as f64 / 1.213 - 273.15)
//!         }),
//!     ]),
//! );
//!
//! assert_eq!(
//!     temp_stat.lines(0x1a53),
//!     ["TEMP_STAT", "\tTEMP_READY", "\tOVERTEMP", "\tTEMP: 73.9 °C"]
//! );
//! assert_eq!(temp_stat.lines(0x1758), ["TEMP_STAT", "\tTEMP: 34.4 °C"]);
//! ```
//!
//! Decoding never fails. Bit positions past 63 and reversed ranges are caller errors
//! and are only checked in debug builds; templates are checked by [Template::parse].
//! With the `serde` feature, decoder tables can also be loaded from data and
//! validated while compiling, see `serde::DecoderDef`.

pub mod bits;
pub mod decoder;
pub mod errors;
pub mod integer;
#[cfg(feature = "serde")]
pub mod serde;
pub mod signal;
pub mod template;
pub mod value;

pub use decoder::Decoder;
pub use errors::{CompileError, TemplateError};
pub use signal::RESERVED;
pub use template::Template;
