//! Huffman encoding and decoding.
//!
//! The bare payload is `[padding count][packed codes]` and does not describe
//! its tree: [`decode`] needs the [`CodeTable`] that [`encode`] returned.
//! [`compress`] and [`decompress`] wrap the payload in a container that carries
//! the frequency table, from which the decoder rebuilds the same tree.

use tracing::debug;

use crate::bitstream::{self, BitStream};
use crate::error::{CodecError, Result};
use crate::frequency::FrequencyTable;

use super::table::CodeTable;
use super::tree::HuffmanTree;

/// Output of [`encode`]: the payload and the table needed to decode it.
#[derive(Debug, Clone)]
pub struct HuffmanEncoded {
    pub table: CodeTable,
    pub payload: Vec<u8>,
}

impl HuffmanEncoded {
    /// Zero bits appended after the last code.
    pub fn padding(&self) -> u8 {
        self.payload.first().copied().unwrap_or(0)
    }
}

pub fn encode(data: &[u8]) -> Result<HuffmanEncoded> {
    encode_counted(data, &FrequencyTable::count(data))
}

fn encode_counted(data: &[u8], frequencies: &FrequencyTable) -> Result<HuffmanEncoded> {
    let tree = HuffmanTree::build(frequencies)?;
    let table = tree.derive_codes();
    debug_assert!(table.is_prefix_free());
    debug!(
        symbols = table.len(),
        nodes = tree.len(),
        depth = tree.depth(),
        "built huffman tree"
    );

    let payload = encode_with_table(data, &table)?;
    Ok(HuffmanEncoded { table, payload })
}

/// Packs `data` with an existing table. Every byte of `data` must have a code.
pub fn encode_with_table(data: &[u8], table: &CodeTable) -> Result<Vec<u8>> {
    if data.is_empty() {
        return Err(CodecError::EmptyInput);
    }

    let mut stream = BitStream::new();
    for &byte in data {
        let code = table.get(byte).ok_or(CodecError::UnmappedSymbol(byte))?;
        stream.write_bits(code)?;
    }

    let bits = stream.bit_len();
    let (padding, packed) = stream.flush_with_padding()?;
    debug!(input = data.len(), bits, padding, "packed huffman codes");

    let mut payload = Vec::with_capacity(packed.len() + 1);
    payload.push(padding);
    payload.extend_from_slice(&packed);
    Ok(payload)
}

pub fn decode(payload: &[u8], table: &CodeTable) -> Result<Vec<u8>> {
    let bits = bitstream::read_bits(payload, true)?;
    let reverse = table.reverse();

    let mut output = Vec::new();
    let mut prefix = Vec::with_capacity(reverse.max_code_len());
    for bit in bits {
        prefix.push(bit);
        if let Some(symbol) = reverse.get(&prefix) {
            output.push(symbol);
            prefix.clear();
        } else if prefix.len() >= reverse.max_code_len() {
            return Err(CodecError::InvalidCodeword { bits: prefix.len() });
        }
    }

    if !prefix.is_empty() {
        return Err(CodecError::TrailingBits { bits: prefix.len() });
    }
    Ok(output)
}

/// Encodes into the self-describing container:
/// `[u32 LE header length][bincode frequency table][payload]`.
pub fn compress(data: &[u8]) -> Result<Vec<u8>> {
    let frequencies = FrequencyTable::count(data);
    let HuffmanEncoded { payload, .. } = encode_counted(data, &frequencies)?;

    let header = bincode::serialize(&frequencies).map_err(|e| CodecError::header(e.to_string()))?;

    let mut output = Vec::with_capacity(4 + header.len() + payload.len());
    output.extend_from_slice(&(header.len() as u32).to_le_bytes());
    output.extend_from_slice(&header);
    output.extend_from_slice(&payload);
    Ok(output)
}

pub fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    let (length, rest) = data
        .split_first_chunk::<4>()
        .ok_or_else(|| CodecError::header("missing header length"))?;
    let header_len = u32::from_le_bytes(*length) as usize;
    if rest.len() < header_len {
        return Err(CodecError::header(format!(
            "header declares {} bytes, only {} available",
            header_len,
            rest.len()
        )));
    }

    let (header, payload) = rest.split_at(header_len);
    let frequencies: FrequencyTable =
        bincode::deserialize(header).map_err(|e| CodecError::header(e.to_string()))?;
    if frequencies.is_empty() {
        return Err(CodecError::header("empty frequency table"));
    }
    let expected = frequencies
        .total()
        .ok_or_else(|| CodecError::header("symbol counts overflow"))?;

    let table = HuffmanTree::build(&frequencies)?.derive_codes();
    let output = decode(payload, &table)?;
    if output.len() as u64 != expected {
        return Err(CodecError::header(format!(
            "decoded {} bytes, header expects {}",
            output.len(),
            expected
        )));
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_small_text() {
        let text = b"aaabccc";
        let encoded = encode(text).unwrap();
        assert_eq!(decode(&encoded.payload, &encoded.table).unwrap(), text);
    }

    #[test]
    fn known_payload_layout() {
        // c=0, b=10, a=11 -> 11 11 11 10 0 0 0, 11 bits, 5 bits padding
        let encoded = encode(b"aaabccc").unwrap();
        assert_eq!(encoded.payload, vec![5, 0b1111_1110, 0b0000_0000]);
        assert_eq!(encoded.padding(), 5);
    }

    #[test]
    fn padding_header_for_two_symbols() {
        let encoded = encode(b"ab").unwrap();
        let total_bits: usize = b"ab"
            .iter()
            .map(|&b| encoded.table.get(b).unwrap().len())
            .sum();

        assert_eq!(total_bits, 2);
        assert_eq!(usize::from(encoded.payload[0]), (8 - total_bits % 8) % 8);
        assert_eq!(decode(&encoded.payload, &encoded.table).unwrap(), b"ab");
    }

    #[test]
    fn single_symbol_roundtrip() {
        let encoded = encode(b"aaaa").unwrap();
        assert_eq!(encoded.table.get(b'a'), Some(&[false][..]));
        assert_eq!(encoded.payload, vec![4, 0]);
        assert_eq!(decode(&encoded.payload, &encoded.table).unwrap(), b"aaaa");
    }

    #[test]
    fn byte_aligned_input_has_zero_padding() {
        // 8 symbols of a single-symbol alphabet -> exactly 8 bits
        let encoded = encode(b"zzzzzzzz").unwrap();
        assert_eq!(encoded.payload, vec![0, 0]);
        assert_eq!(decode(&encoded.payload, &encoded.table).unwrap(), b"zzzzzzzz");
    }

    #[test]
    fn empty_input_is_rejected() {
        assert!(matches!(encode(b""), Err(CodecError::EmptyInput)));
        assert!(matches!(compress(b""), Err(CodecError::EmptyInput)));
    }

    #[test]
    fn encoding_is_deterministic() {
        let text = b"mississippi river banks";
        assert_eq!(encode(text).unwrap().payload, encode(text).unwrap().payload);
        assert_eq!(compress(text).unwrap(), compress(text).unwrap());
    }

    #[test]
    fn foreign_symbol_is_rejected() {
        let table = encode(b"abc").unwrap().table;
        let err = encode_with_table(b"abd", &table).unwrap_err();
        assert!(matches!(err, CodecError::UnmappedSymbol(b'd')));
    }

    #[test]
    fn stream_ending_inside_a_code() {
        // c=0, b=10, a=11; a lone "1" cannot be decoded
        let table = encode(b"aaabccc").unwrap().table;
        let err = decode(&[7, 0b1000_0000], &table).unwrap_err();
        assert!(matches!(err, CodecError::TrailingBits { bits: 1 }));
    }

    #[test]
    fn codeword_not_in_table() {
        let table = encode(b"aaaa").unwrap().table;
        let err = decode(&[7, 0b1000_0000], &table).unwrap_err();
        assert!(matches!(err, CodecError::InvalidCodeword { bits: 1 }));
    }

    #[test]
    fn bad_padding_is_rejected() {
        let table = encode(b"ab").unwrap().table;
        assert!(matches!(
            decode(&[9, 0], &table),
            Err(CodecError::MalformedPadding { declared: 9, .. })
        ));
        assert!(matches!(
            decode(&[], &table),
            Err(CodecError::MalformedHeader(_))
        ));
    }

    #[test]
    fn container_roundtrip() {
        let text = b"It was the best of times, it was the worst of times.";
        let packed = compress(text).unwrap();
        assert_eq!(decompress(&packed).unwrap(), text);
    }

    #[test]
    fn container_truncated_header() {
        assert!(matches!(
            decompress(&[1, 0]),
            Err(CodecError::MalformedHeader(_))
        ));

        let packed = compress(b"hello").unwrap();
        let err = decompress(&packed[..6]).unwrap_err();
        assert!(matches!(err, CodecError::MalformedHeader(_)));
    }

    #[test]
    fn container_with_overflowing_counts() {
        let counts: std::collections::BTreeMap<u8, u64> =
            [(b'a', u64::MAX), (b'b', u64::MAX)].into_iter().collect();
        let header = bincode::serialize(&counts).unwrap();

        let mut packed = (header.len() as u32).to_le_bytes().to_vec();
        packed.extend_from_slice(&header);
        packed.extend_from_slice(&[0, 0x40]);

        assert!(matches!(
            decompress(&packed),
            Err(CodecError::MalformedHeader(_))
        ));
    }

    #[test]
    fn container_header_matches_counts() {
        let text = b"aaabccc";
        let packed = compress(text).unwrap();
        let header_len = u32::from_le_bytes(packed[..4].try_into().unwrap()) as usize;
        let frequencies: FrequencyTable =
            bincode::deserialize(&packed[4..4 + header_len]).unwrap();

        assert_eq!(frequencies, FrequencyTable::count(text));
        assert_eq!(&packed[4 + header_len..], encode(text).unwrap().payload.as_slice());
    }

    #[test]
    fn container_length_mismatch() {
        let mut packed = compress(b"abab").unwrap();
        // one extra zero byte decodes as extra 'a' symbols
        packed.push(0);
        assert!(matches!(
            decompress(&packed),
            Err(CodecError::MalformedHeader(_))
        ));
    }
}
