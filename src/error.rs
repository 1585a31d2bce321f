//! Errors raised by the coding core.
//!
//! Every check behind these errors runs in release builds as well. Malformed input is
//! reported to the caller, never accepted quietly.

use std::io;
use thiserror::Error;

/// Failures of tree building, encoding, decoding and the bit/number codec.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodingError {
    /// The frequency table cannot produce a binary code.
    #[error("cannot build a code tree: {0}")]
    Build(String),

    /// Nothing to encode (no words) or nothing to decode (no bits).
    #[error("nothing to {0}: input is empty")]
    EmptyInput(&'static str),

    /// A word to encode has no entry in the code table.
    #[error("word {0:?} is not in the code table")]
    UnknownSymbol(String),

    /// The bit string stopped in the middle of a code.
    #[error("bit string ends inside a code after {0} bits")]
    TruncatedCode(usize),

    /// The decoder was handed a lone leaf, which has no codes to walk.
    #[error("cannot decode with a single-leaf tree: it has no codes")]
    LeafRoot,

    /// A bit string held something other than '0' or '1'.
    #[error("invalid character {found:?} at bit {position}, expected '0' or '1'")]
    InvalidBit { position: usize, found: char },

    /// A decimal string was not a positive integer.
    #[error("{0:?} is not a valid encoded number")]
    InvalidNumber(String),
}

impl From<CodingError> for io::Error {
    fn from(e: CodingError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, e)
    }
}
