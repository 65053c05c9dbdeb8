//! LZW encoding and decoding.
//!
//! The stream is a plain sequence of 16-bit big-endian codes. There is no
//! length prefix and no terminator: decoding stops when the bytes run out.

use tracing::debug;

use crate::error::{CodecError, Result};

use super::dictionary::{DecodeDictionary, EncodeDictionary};

/// Width of one serialized code, in bytes.
pub const CODE_WIDTH: usize = 2;

pub fn encode_codes(data: &[u8]) -> Vec<u16> {
    let mut dictionary = EncodeDictionary::seed();
    let mut codes = Vec::new();
    let mut phrase = Vec::new();
    let mut current = None;

    for &byte in data {
        phrase.push(byte);
        match dictionary.try_extend(&phrase) {
            Some(code) => current = Some(code),
            None => {
                // single bytes are always known, so the phrase had a code before this byte
                codes.extend(current);
                dictionary.insert(std::mem::replace(&mut phrase, vec![byte]));
                current = Some(u16::from(byte));
            }
        }
    }
    codes.extend(current);

    debug!(
        input = data.len(),
        codes = codes.len(),
        dictionary = dictionary.len(),
        "lzw encoded"
    );
    codes
}

pub fn encode(data: &[u8]) -> Vec<u8> {
    encode_codes(data)
        .into_iter()
        .flat_map(u16::to_be_bytes)
        .collect()
}

pub fn decode_codes(codes: &[u16]) -> Result<Vec<u8>> {
    let mut dictionary = DecodeDictionary::seed();
    let mut output = Vec::new();
    // never holds an empty string
    let mut previous: Option<Vec<u8>> = None;

    for &code in codes {
        let entry = if let Some(known) = dictionary.get(code) {
            known.to_vec()
        } else if let Some(prev) = previous
            .as_ref()
            .filter(|_| u32::from(code) == dictionary.next_code())
        {
            // the encoder used this entry right after creating it
            let mut string = prev.clone();
            string.push(prev[0]);
            string
        } else {
            return Err(CodecError::UnknownCode {
                code,
                next: dictionary.next_code(),
            });
        };

        output.extend_from_slice(&entry);

        if let (Some(mut string), Some(&first)) = (previous.take(), entry.first()) {
            string.push(first);
            dictionary.insert(string);
        }
        previous = (!entry.is_empty()).then_some(entry);
    }

    debug!(
        codes = codes.len(),
        output = output.len(),
        dictionary = dictionary.len(),
        "lzw decoded"
    );
    Ok(output)
}

pub fn decode(data: &[u8]) -> Result<Vec<u8>> {
    let chunks = data.chunks_exact(CODE_WIDTH);
    let remaining = chunks.remainder().len();
    if remaining != 0 {
        return Err(CodecError::IncompleteTrailingCode { remaining });
    }

    let codes: Vec<u16> = chunks
        .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
        .collect();
    decode_codes(&codes)
}
