//! Error types for the codecs.

use thiserror::Error;

/// Result type alias for codec operations.
pub type Result<T> = std::result::Result<T, CodecError>;

/// Failures raised while encoding or decoding.
///
/// Every variant aborts the whole call; no partially decoded data is returned.
#[derive(Debug, Error)]
pub enum CodecError {
    /// Huffman encoding needs at least one symbol to build a tree from.
    #[error("cannot build a Huffman tree from empty input")]
    EmptyInput,

    /// The padding header is out of range or larger than the payload.
    #[error("malformed padding: header declares {declared} padding bits, {available} bits available")]
    MalformedPadding { declared: u8, available: usize },

    /// An LZW code that is neither in the dictionary nor the next one to be assigned.
    #[error("unknown LZW code {code} (next assignable code is {next})")]
    UnknownCode { code: u16, next: u32 },

    /// The LZW stream ends in the middle of a 2-byte code.
    #[error("incomplete trailing LZW code: {remaining} byte(s) left over")]
    IncompleteTrailingCode { remaining: usize },

    /// Missing or unreadable header in front of a payload.
    #[error("malformed header: {0}")]
    MalformedHeader(String),

    /// The running prefix grew past the longest code without matching one.
    #[error("invalid Huffman codeword after {bits} bits")]
    InvalidCodeword { bits: usize },

    /// A byte with no code in the table supplied for encoding.
    #[error("symbol 0x{0:02x} has no code in the table")]
    UnmappedSymbol(u8),

    /// The bit stream ended inside a codeword.
    #[error("{bits} trailing bit(s) do not form a complete codeword")]
    TrailingBits { bits: usize },

    /// I/O error from the bit writer or reader.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CodecError {
    /// Create a malformed header error.
    pub fn header(message: impl Into<String>) -> Self {
        CodecError::MalformedHeader(message.into())
    }
}
