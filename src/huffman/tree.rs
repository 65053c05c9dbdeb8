//! Huffman tree construction.
//!
//! Nodes live in an arena and point at their children by index. The build is
//! deterministic: nodes are ordered by weight, then by arena index, so leaves
//! (pushed in ascending symbol order) win ties against nodes merged later.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::error::{CodecError, Result};
use crate::frequency::FrequencyTable;

use super::table::CodeTable;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NodeKind {
    Leaf(u8),
    Internal { left: usize, right: usize },
}

#[derive(Debug, Clone)]
struct HuffmanNode {
    weight: u64,
    kind: NodeKind,
}

#[derive(Debug, Clone)]
pub struct HuffmanTree {
    nodes: Vec<HuffmanNode>,
    root: usize,
}

impl HuffmanTree {
    /// Builds the tree by repeatedly merging the two lightest nodes.
    ///
    /// The first node popped becomes the left child of the merged node.
    pub fn build(frequencies: &FrequencyTable) -> Result<Self> {
        if frequencies.is_empty() {
            return Err(CodecError::EmptyInput);
        }

        let mut nodes = Vec::with_capacity(2 * frequencies.len() - 1);
        let mut heap = BinaryHeap::with_capacity(frequencies.len());
        for (symbol, count) in frequencies.iter() {
            heap.push(Reverse((count, nodes.len())));
            nodes.push(HuffmanNode {
                weight: count,
                kind: NodeKind::Leaf(symbol),
            });
        }

        loop {
            let Reverse((left_weight, left)) = heap.pop().ok_or(CodecError::EmptyInput)?;
            let Some(Reverse((right_weight, right))) = heap.pop() else {
                return Ok(Self { nodes, root: left });
            };

            let weight = left_weight
                .checked_add(right_weight)
                .ok_or_else(|| CodecError::header("symbol counts overflow"))?;
            heap.push(Reverse((weight, nodes.len())));
            nodes.push(HuffmanNode {
                weight,
                kind: NodeKind::Internal { left, right },
            });
        }
    }

    /// Walks the tree depth first: `0` for left, `1` for right.
    pub fn derive_codes(&self) -> CodeTable {
        let mut codes = CodeTable::default();
        self.collect_codes(self.root, Vec::new(), &mut codes);
        codes
    }

    fn collect_codes(&self, index: usize, prefix: Vec<bool>, codes: &mut CodeTable) {
        match self.nodes[index].kind {
            NodeKind::Leaf(symbol) => {
                // A lone leaf would get an empty code; give it "0" instead.
                if prefix.is_empty() {
                    codes.insert(symbol, vec![false]);
                } else {
                    codes.insert(symbol, prefix);
                }
            }
            NodeKind::Internal { left, right } => {
                let mut left_prefix = prefix.clone();
                left_prefix.push(false);
                self.collect_codes(left, left_prefix, codes);

                let mut right_prefix = prefix;
                right_prefix.push(true);
                self.collect_codes(right, right_prefix, codes);
            }
        }
    }

    /// Total weight, equal to the number of encoded symbols.
    pub fn weight(&self) -> u64 {
        self.nodes[self.root].weight
    }

    /// Number of nodes in the arena.
    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn leaf_count(&self) -> usize {
        self.nodes
            .iter()
            .filter(|node| matches!(node.kind, NodeKind::Leaf(_)))
            .count()
    }

    /// Longest root to leaf path, in edges.
    pub fn depth(&self) -> usize {
        self.depth_from(self.root)
    }

    fn depth_from(&self, index: usize) -> usize {
        match self.nodes[index].kind {
            NodeKind::Leaf(_) => 0,
            NodeKind::Internal { left, right } => {
                1 + self.depth_from(left).max(self.depth_from(right))
            }
        }
    }
}
