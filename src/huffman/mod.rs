//! Static Huffman coding over bytes.

pub mod codec;
pub mod table;
pub mod tree;

pub use codec::{HuffmanEncoded, compress, decode, decompress, encode, encode_with_table};
pub use table::{CodeTable, ReverseCodeTable};
pub use tree::HuffmanTree;
