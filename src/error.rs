//! Error types for Huffman coding.

use thiserror::Error;

/// Error variants for Huffman operations.
///
/// Empty input is not an error: encoding nothing yields an empty bit-string
/// and no tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The code book has no entry for a symbol in the message.
    #[error("symbol {symbol} at position {position} has no code")]
    UnknownSymbol {
        /// Debug rendering of the offending symbol.
        symbol: String,
        /// Index of the symbol in the input sequence.
        position: usize,
    },

    /// The bit-string is not a valid walk of the supplied tree.
    #[error("malformed input at bit {position}: {reason}")]
    MalformedInput {
        /// Bit offset where decoding could not continue.
        position: usize,
        /// What went wrong.
        reason: Malformed,
    },

    /// An explicit frequency table listed a symbol with count zero.
    #[error("symbol {symbol} has zero frequency")]
    ZeroFrequency {
        /// Debug rendering of the offending symbol.
        symbol: String,
    },

    /// Frequencies summed past `u64::MAX`.
    #[error("frequency total overflows u64")]
    FrequencyOverflow,

    /// Text bit-strings may only contain `0` and `1`.
    #[error("invalid bit character: {0:?}")]
    InvalidBit(char),
}

/// Reasons a bit-string fails to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Malformed {
    /// Input ended part-way through a code.
    #[error("truncated code ({pending} dangling bits)")]
    TruncatedCode {
        /// Bits consumed since the last complete symbol.
        pending: usize,
    },

    /// Bits were supplied but there is no tree to walk.
    #[error("no tree supplied for non-empty input")]
    MissingTree,

    /// The cursor was asked to descend from a leaf.
    #[error("descent requested from a leaf")]
    DescentFromLeaf,
}

/// A specialized Result type for Huffman operations.
pub type Result<T> = std::result::Result<T, Error>;
