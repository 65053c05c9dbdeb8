//! LZW string tables for the encoder and the decoder.
//!
//! Both sides start from the same seed: the 256 single-byte strings at their
//! own ordinals and the empty string at [`EMPTY_CODE`]. Growth stops for good
//! once [`MAX_CODES`] entries exist, since codes travel as 16-bit values.

use std::collections::HashMap;

/// Code reserved for the empty string.
pub const EMPTY_CODE: u16 = 256;

/// First code handed out by `insert`.
pub const FIRST_FREE_CODE: u32 = 257;

/// Capacity of the 16-bit code space.
pub const MAX_CODES: u32 = 1 << 16;

fn seed_entries() -> impl Iterator<Item = (u16, Vec<u8>)> {
    (0..=u8::MAX)
        .map(|byte| (u16::from(byte), vec![byte]))
        .chain(std::iter::once((EMPTY_CODE, Vec::new())))
}

/// String to code mapping used while compressing.
#[derive(Debug, Clone)]
pub struct EncodeDictionary {
    codes: HashMap<Vec<u8>, u16>,
    next_code: u32,
}

impl EncodeDictionary {
    pub fn seed() -> Self {
        Self {
            codes: seed_entries().map(|(code, string)| (string, code)).collect(),
            next_code: FIRST_FREE_CODE,
        }
    }

    /// Looks `string` up without modifying the table.
    pub fn try_extend(&self, string: &[u8]) -> Option<u16> {
        self.codes.get(string).copied()
    }

    /// Assigns the next code to `string`, or returns `None` once the table is full.
    pub fn insert(&mut self, string: Vec<u8>) -> Option<u16> {
        if self.is_full() {
            return None;
        }
        let code = self.next_code as u16;
        self.codes.insert(string, code);
        self.next_code += 1;
        Some(code)
    }

    pub fn next_code(&self) -> u32 {
        self.next_code
    }

    pub(crate) fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_full(&self) -> bool {
        self.next_code >= MAX_CODES
    }
}

/// Code to string mapping used while decompressing, indexed by code.
#[derive(Debug, Clone)]
pub struct DecodeDictionary {
    strings: Vec<Vec<u8>>,
}

impl DecodeDictionary {
    pub fn seed() -> Self {
        Self {
            strings: seed_entries().map(|(_, string)| string).collect(),
        }
    }

    pub fn get(&self, code: u16) -> Option<&[u8]> {
        self.strings.get(usize::from(code)).map(Vec::as_slice)
    }

    /// Appends `string` under the next code, or returns `None` once the table is full.
    pub fn insert(&mut self, string: Vec<u8>) -> Option<u16> {
        if self.is_full() {
            return None;
        }
        let code = self.strings.len() as u16;
        self.strings.push(string);
        Some(code)
    }

    pub fn next_code(&self) -> u32 {
        self.strings.len() as u32
    }

    pub(crate) fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_full(&self) -> bool {
        self.next_code() >= MAX_CODES
    }
}
