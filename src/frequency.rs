// frequency.rs

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Occurrence count per byte, iterated in ascending byte order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyTable {
    counts: BTreeMap<u8, u64>,
}

impl FrequencyTable {
    /// Counts every byte of `symbols` in a single pass.
    pub fn count(symbols: &[u8]) -> Self {
        let mut counts = BTreeMap::new();
        for &byte in symbols {
            *counts.entry(byte).or_insert(0) += 1;
        }
        Self { counts }
    }

    pub fn get(&self, symbol: u8) -> Option<u64> {
        self.counts.get(&symbol).copied()
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, equal to the length of the counted input.
    ///
    /// `None` when the counts overflow `u64`, which only a forged table can do.
    pub fn total(&self) -> Option<u64> {
        self.counts
            .values()
            .try_fold(0u64, |sum, &count| sum.checked_add(count))
    }

    pub fn iter(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts.iter().map(|(&symbol, &count)| (symbol, count))
    }
}
