//! Code tables derived from a Huffman tree.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

/// Symbol to code mapping. Codes are bit sequences, most significant first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeTable {
    codes: BTreeMap<u8, Vec<bool>>,
}

impl CodeTable {
    pub(crate) fn insert(&mut self, symbol: u8, code: Vec<bool>) {
        self.codes.insert(symbol, code);
    }

    pub fn get(&self, symbol: u8) -> Option<&[bool]> {
        self.codes.get(&symbol).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u8, &[bool])> + '_ {
        self.codes.iter().map(|(&symbol, code)| (symbol, code.as_slice()))
    }

    /// Length of the longest code, 0 for an empty table.
    pub fn max_code_len(&self) -> usize {
        self.codes.values().map(Vec::len).max().unwrap_or(0)
    }

    /// True when no code is a prefix of another code in the table.
    pub fn is_prefix_free(&self) -> bool {
        let mut codes: Vec<&Vec<bool>> = self.codes.values().collect();
        codes.sort();
        // after sorting, a prefix always sits right before some code it prefixes
        codes
            .windows(2)
            .all(|pair| !pair[1].starts_with(pair[0]))
    }

    /// Builds the code to symbol lookup used by the decoder.
    pub fn reverse(&self) -> ReverseCodeTable {
        let symbols = self
            .codes
            .iter()
            .map(|(&symbol, code)| (code.clone(), symbol))
            .collect();
        ReverseCodeTable {
            symbols,
            max_code_len: self.max_code_len(),
        }
    }
}

/// Code to symbol mapping, the inverse of a [`CodeTable`].
#[derive(Debug, Clone)]
pub struct ReverseCodeTable {
    symbols: HashMap<Vec<bool>, u8>,
    max_code_len: usize,
}

impl ReverseCodeTable {
    pub fn get(&self, code: &[bool]) -> Option<u8> {
        self.symbols.get(code).copied()
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn max_code_len(&self) -> usize {
        self.max_code_len
    }
}
