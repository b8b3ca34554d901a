//! Error types for decoder construction.
//!
//! Decoding itself never fails; these only surface while building a decoder tree
//! from untrusted input (a format template or a serialized table).

use thiserror::Error;

/// Errors produced when parsing a [crate::template::Template].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// Template contains no integer conversion.
    #[error("template has no integer conversion")]
    MissingConversion,
    /// Template contains more than one integer conversion.
    #[error("template has more than one integer conversion")]
    MultipleConversions,
    /// Conversion verb is not an integer verb.
    #[error("unsupported conversion verb '{0}'")]
    UnsupportedVerb(char),
    /// Template ends in the middle of a conversion.
    #[error("template ends inside a conversion")]
    Incomplete,
    /// Width or precision does not fit in a usize.
    #[error("width or precision is too large")]
    InvalidWidth,
}

/// Errors produced when compiling a decoder definition into a [crate::decoder::Decoder].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    /// Bit range is reversed or extends past bit 63.
    #[error("invalid bit range {start}..={end}")]
    InvalidBitRange { start: u32, end: u32 },
    /// Single bit position is past bit 63.
    #[error("invalid bit position {0}")]
    InvalidBitPosition(u32),
    /// Shift offset is past bit 63.
    #[error("invalid shift offset {0}")]
    InvalidShift(u32),
    /// Format template of an integer field is invalid.
    #[error("invalid format template: {0}")]
    Template(#[from] TemplateError),
}
