//! Property-based tests for both codecs.
//!
//! - Huffman and LZW reproduce their input exactly
//! - Huffman code tables are prefix free
//! - the padding header matches the number of code bits

use proptest::prelude::*;

use textpack::frequency::FrequencyTable;
use textpack::huffman::{self, HuffmanTree};
use textpack::lzw;
use textpack::{Algorithm, compress, decompress};

/// Strategy for text-like input drawn from a small alphabet, so phrases repeat.
fn text_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(prop::sample::select(b"abcde \n".to_vec()), 1..512)
}

/// Strategy for arbitrary bytes.
fn bytes_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 1..1024)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        ..ProptestConfig::default()
    })]

    /// Property: Huffman decode(encode(s), table) == s.
    #[test]
    fn prop_huffman_roundtrip(data in bytes_strategy()) {
        let encoded = huffman::encode(&data).unwrap();
        prop_assert_eq!(huffman::decode(&encoded.payload, &encoded.table).unwrap(), data);
    }

    /// Property: the self-describing container round-trips without out-of-band state.
    #[test]
    fn prop_huffman_container_roundtrip(data in text_strategy()) {
        let packed = compress(&data, Algorithm::Huffman).unwrap();
        prop_assert_eq!(decompress(&packed, Algorithm::Huffman).unwrap(), data);
    }

    /// Property: LZW decode(encode(s)) == s, including the empty sequence.
    #[test]
    fn prop_lzw_roundtrip(data in prop::collection::vec(any::<u8>(), 0..1024)) {
        prop_assert_eq!(lzw::decode(&lzw::encode(&data)).unwrap(), data);
    }

    /// Property: repetitive text needs fewer LZW codes than input bytes.
    #[test]
    fn prop_lzw_repetition_shrinks(unit in prop::collection::vec(any::<u8>(), 1..8), repeats in 8usize..32) {
        let data: Vec<u8> = unit.iter().copied().cycle().take(unit.len() * repeats).collect();
        prop_assert!(lzw::encode_codes(&data).len() < data.len());
    }

    /// Property: no code is a prefix of another.
    #[test]
    fn prop_codes_prefix_free(data in bytes_strategy()) {
        let codes = HuffmanTree::build(&FrequencyTable::count(&data)).unwrap().derive_codes();
        prop_assert!(codes.is_prefix_free());
        prop_assert!(codes.iter().all(|(_, code)| !code.is_empty()));
    }

    /// Property: header byte == (8 - bits % 8) % 8.
    #[test]
    fn prop_padding_header(data in text_strategy()) {
        let encoded = huffman::encode(&data).unwrap();
        let bits: usize = data.iter().map(|&b| encoded.table.get(b).unwrap().len()).sum();

        prop_assert_eq!(usize::from(encoded.padding()), (8 - bits % 8) % 8);
        prop_assert_eq!(encoded.payload.len(), 1 + bits.div_ceil(8));
    }
}

#[test]
fn concrete_scenario() {
    let text = b"aaabccc";
    for algorithm in [Algorithm::Huffman, Algorithm::Lzw] {
        let packed = compress(text, algorithm).unwrap();
        assert_eq!(decompress(&packed, algorithm).unwrap(), text);
    }
}
