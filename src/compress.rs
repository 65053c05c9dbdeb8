// compress.rs

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::{huffman, lzw};

/// Codec applied to a whole buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Algorithm {
    /// Static prefix codes; output carries its own frequency table.
    #[default]
    Huffman,
    /// Adaptive dictionary with fixed 16-bit codes.
    Lzw,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Huffman => f.write_str("huffman"),
            Algorithm::Lzw => f.write_str("lzw"),
        }
    }
}

pub fn compress(data: &[u8], algorithm: Algorithm) -> Result<Vec<u8>> {
    let compressed = match algorithm {
        Algorithm::Huffman => huffman::compress(data)?,
        Algorithm::Lzw => lzw::encode(data),
    };
    debug!(%algorithm, input = data.len(), output = compressed.len(), "compressed");
    Ok(compressed)
}

pub fn decompress(data: &[u8], algorithm: Algorithm) -> Result<Vec<u8>> {
    let decompressed = match algorithm {
        Algorithm::Huffman => huffman::decompress(data)?,
        Algorithm::Lzw => lzw::decode(data)?,
    };
    debug!(%algorithm, input = data.len(), output = decompressed.len(), "decompressed");
    Ok(decompressed)
}
