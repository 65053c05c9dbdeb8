//! Adaptive dictionary (LZW) coding over bytes.

pub mod codec;
pub mod dictionary;

pub use codec::{CODE_WIDTH, decode, decode_codes, encode, encode_codes};
pub use dictionary::{DecodeDictionary, EMPTY_CODE, EncodeDictionary, MAX_CODES};
