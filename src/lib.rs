//! # textpack
//!
//! Lossless text compression with two classical codecs: static Huffman
//! coding and LZW.
//!
//! ```rust
//! use textpack::{Algorithm, compress, decompress};
//!
//! let text = b"aaabccc";
//! for algorithm in [Algorithm::Huffman, Algorithm::Lzw] {
//!     let packed = compress(text, algorithm)?;
//!     assert_eq!(decompress(&packed, algorithm)?, text);
//! }
//! # Ok::<(), textpack::CodecError>(())
//! ```

pub mod bitstream;
pub mod compress;
pub mod error;
pub mod frequency;
pub mod huffman;
pub mod logger;
pub mod lzw;
pub mod utils;

pub use compress::{Algorithm, compress, decompress};
pub use error::{CodecError, Result};
pub use frequency::FrequencyTable;
