//! Serializable decoder tables.
//!
//! These types describe a decoder tree in a form that can be shipped as data (for
//! example a JSON register description) and compiled with
//! `Decoder::try_from(def)`. Compilation validates every bit position, range and
//! format template.
//!
//! Conversion closures cannot be serialized, so there is no counterpart for
//! [crate::decoder::Decoder::Func].
//!
//! ```json
//! {
//!   "type": "Group",
//!   "name": "TEMP_STAT",
//!   "decoder": {
//!     "type": "List",
//!     "decoders": [
//!       { "type": "Signal", "bit": 0, "name": "TEMP_READY" },
//!       { "type": "Int", "start_bit": 4, "end_bit": 13, "label": "RAW", "format": "%d" }
//!     ]
//!   }
//! }
//! ```

use serde::{Deserialize, Serialize};

/// One node of a serialized decoder tree.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum DecoderDef {
    /// Emits `name` while `bit` is set.
    Signal { bit: u32, name: String },
    /// Emits `name` or `!name`; a leading `!` inverts the polarity.
    Flag { bit: u32, name: String },
    /// Bit range mapped to a list of names.
    Value {
        start_bit: u32,
        end_bit: u32,
        #[serde(default)]
        label: String,
        names: Vec<String>,
        /// Used for field values past the end of `names`.
        #[serde(default)]
        default: String,
    },
    /// Bit range rendered with a printf-style template.
    Int {
        start_bit: u32,
        end_bit: u32,
        #[serde(default)]
        label: String,
        format: String,
    },
    /// Sub-decoders applied in order.
    List { decoders: Vec<DecoderDef> },
    /// Sub-decoder applied to the value shifted right by `offset`.
    Shift {
        offset: u32,
        decoder: Box<DecoderDef>,
    },
    /// Named, indented sub-decoder.
    Group {
        name: String,
        decoder: Box<DecoderDef>,
    },
}
