//! Huffman prefix tree: construction and wire format.
//!
//! The tree is serialized into the bitstream in pre-order so the container
//! is self-describing: a leaf is a `1` marker bit followed by the symbol
//! as 8 bits, an internal node is a `0` marker bit followed by its left
//! and right subtrees.

use oxihuff_core::bitstream::{BitReader, BitWriter};
use oxihuff_core::error::{OxiHuffError, Result};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Maximum depth accepted when deserializing a tree.
///
/// A strict binary tree over at most 256 distinct leaves is never deeper
/// than 255 levels, so anything deeper can only come from a corrupted
/// stream.
const MAX_TREE_DEPTH: u32 = 255;

/// A node of the Huffman prefix tree.
///
/// Every non-root node is owned exclusively by its parent, so the whole
/// tree tears down automatically when the root is dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuffmanNode {
    /// A leaf holding a symbol and its occurrence count.
    Leaf {
        /// The byte value this leaf encodes.
        symbol: u8,
        /// Aggregate frequency of the symbol in the input.
        freq: u64,
    },
    /// An internal node with exactly two children.
    Internal {
        /// Combined frequency of both subtrees.
        freq: u64,
        /// Subtree reached by a `0` bit.
        left: Box<HuffmanNode>,
        /// Subtree reached by a `1` bit.
        right: Box<HuffmanNode>,
    },
}

/// Heap entry pairing a node with its insertion sequence number.
///
/// The sequence number breaks frequency ties deterministically: leaves are
/// seeded in ascending symbol order and merged nodes continue the
/// numbering, so identical input always produces an identical tree.
#[derive(Debug)]
struct HeapNode {
    freq: u64,
    seq: u32,
    node: Box<HuffmanNode>,
}

impl PartialEq for HeapNode {
    fn eq(&self, other: &Self) -> bool {
        self.freq == other.freq && self.seq == other.seq
    }
}

impl Eq for HeapNode {}

impl Ord for HeapNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: the lowest (freq, seq) pair has the highest priority.
        other
            .freq
            .cmp(&self.freq)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for HeapNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl HuffmanNode {
    /// Build the optimal prefix tree for the given frequency entries.
    ///
    /// Classic Huffman construction: seed one leaf per distinct symbol,
    /// then repeatedly merge the two lowest-frequency nodes until a single
    /// root remains. Returns `None` for an empty frequency table. A table
    /// with exactly one entry yields the degenerate single-leaf tree.
    pub fn build(freqs: &[(u8, u64)]) -> Option<HuffmanNode> {
        let mut heap = BinaryHeap::with_capacity(freqs.len());
        let mut seq = 0u32;

        for &(symbol, freq) in freqs {
            heap.push(HeapNode {
                freq,
                seq,
                node: Box::new(HuffmanNode::Leaf { symbol, freq }),
            });
            seq += 1;
        }

        while heap.len() > 1 {
            // Loop condition guarantees both pops succeed
            let left = heap.pop()?;
            let right = heap.pop()?;
            let freq = left.freq + right.freq;
            heap.push(HeapNode {
                freq,
                seq,
                node: Box::new(HuffmanNode::Internal {
                    freq,
                    left: left.node,
                    right: right.node,
                }),
            });
            seq += 1;
        }

        heap.pop().map(|entry| *entry.node)
    }

    /// Frequency carried by this node.
    pub fn freq(&self) -> u64 {
        match self {
            HuffmanNode::Leaf { freq, .. } | HuffmanNode::Internal { freq, .. } => *freq,
        }
    }

    /// Whether this node is a leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self, HuffmanNode::Leaf { .. })
    }

    /// Child selected by one walk bit (`false` = left, `true` = right).
    ///
    /// Returns `None` on a leaf.
    pub fn child(&self, bit: bool) -> Option<&HuffmanNode> {
        match self {
            HuffmanNode::Internal { left, right, .. } => {
                Some(if bit { right.as_ref() } else { left.as_ref() })
            }
            HuffmanNode::Leaf { .. } => None,
        }
    }

    /// Number of leaves in this tree.
    pub fn leaf_count(&self) -> usize {
        match self {
            HuffmanNode::Leaf { .. } => 1,
            HuffmanNode::Internal { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }

    /// Serialize this tree into the bit writer, pre-order.
    ///
    /// Recursion depth is bounded by the tree height, which construction
    /// caps at one level per distinct symbol.
    pub fn serialize(&self, writer: &mut BitWriter) {
        match self {
            HuffmanNode::Leaf { symbol, .. } => {
                writer.write_bit(true);
                writer.write_bits(u32::from(*symbol), 8);
            }
            HuffmanNode::Internal { left, right, .. } => {
                writer.write_bit(false);
                left.serialize(writer);
                right.serialize(writer);
            }
        }
    }

    /// Deserialize a tree from the bit reader.
    ///
    /// Mirrors [`HuffmanNode::serialize`]. Reconstructed frequencies are
    /// irrelevant after construction and are set to zero. Running out of
    /// bits mid-structure, or a structure deeper than any valid tree,
    /// surfaces as a decode error.
    pub fn deserialize(reader: &mut BitReader<'_>) -> Result<HuffmanNode> {
        Self::deserialize_at(reader, 0)
    }

    fn deserialize_at(reader: &mut BitReader<'_>, depth: u32) -> Result<HuffmanNode> {
        if depth > MAX_TREE_DEPTH {
            return Err(OxiHuffError::corrupted(
                reader.bit_position(),
                "serialized tree exceeds maximum depth",
            ));
        }

        if reader.read_bit()? {
            let symbol = reader.read_bits(8)? as u8;
            Ok(HuffmanNode::Leaf { symbol, freq: 0 })
        } else {
            let left = Self::deserialize_at(reader, depth + 1)?;
            let right = Self::deserialize_at(reader, depth + 1)?;
            Ok(HuffmanNode::Internal {
                freq: 0,
                left: Box::new(left),
                right: Box::new(right),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::freq::symbol_frequencies;

    fn internal_count(node: &HuffmanNode) -> usize {
        match node {
            HuffmanNode::Leaf { .. } => 0,
            HuffmanNode::Internal { left, right, .. } => {
                1 + internal_count(left) + internal_count(right)
            }
        }
    }

    #[test]
    fn test_build_empty() {
        assert!(HuffmanNode::build(&[]).is_none());
    }

    #[test]
    fn test_build_single_symbol() {
        let tree = HuffmanNode::build(&[(b'A', 7)]).unwrap();
        assert_eq!(tree, HuffmanNode::Leaf { symbol: b'A', freq: 7 });
    }

    #[test]
    fn test_structural_invariant() {
        let freqs = symbol_frequencies(b"abracadabra");
        let tree = HuffmanNode::build(&freqs).unwrap();

        // n leaves, n-1 internal nodes, root frequency = input length
        assert_eq!(tree.leaf_count(), freqs.len());
        assert_eq!(internal_count(&tree), freqs.len() - 1);
        assert_eq!(tree.freq(), 11);
    }

    #[test]
    fn test_deterministic_ties() {
        // All frequencies equal: shape must still be reproducible
        let freqs: Vec<(u8, u64)> = (0..16).map(|s| (s, 1)).collect();
        let a = HuffmanNode::build(&freqs).unwrap();
        let b = HuffmanNode::build(&freqs).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_serialize_roundtrip() {
        let freqs = symbol_frequencies(b"mississippi river");
        let tree = HuffmanNode::build(&freqs).unwrap();

        let mut writer = BitWriter::new();
        tree.serialize(&mut writer);
        let data = writer.into_vec();

        let mut reader = BitReader::new(&data);
        let rebuilt = HuffmanNode::deserialize(&mut reader).unwrap();

        // Frequencies are not carried on the wire; compare shape and symbols
        fn shape(node: &HuffmanNode) -> Vec<Option<u8>> {
            match node {
                HuffmanNode::Leaf { symbol, .. } => vec![Some(*symbol)],
                HuffmanNode::Internal { left, right, .. } => {
                    let mut out = vec![None];
                    out.extend(shape(left));
                    out.extend(shape(right));
                    out
                }
            }
        }
        assert_eq!(shape(&tree), shape(&rebuilt));
    }

    #[test]
    fn test_serialized_leaf_layout() {
        let tree = HuffmanNode::Leaf { symbol: 0x41, freq: 5 };
        let mut writer = BitWriter::new();
        tree.serialize(&mut writer);
        writer.flush();
        // Marker 1, then 0x41 MSB-first, then zero padding
        assert_eq!(writer.into_vec(), vec![0xA0, 0x80]);
    }

    #[test]
    fn test_deserialize_truncated() {
        // Internal marker with no children following
        let data = vec![0b0000_0000];
        let mut reader = BitReader::new(&data);
        assert!(matches!(
            HuffmanNode::deserialize(&mut reader),
            Err(OxiHuffError::UnexpectedEof { .. })
        ));
    }

    #[test]
    fn test_deserialize_overdeep() {
        // A long run of 0 bits descends one level per bit and must be
        // rejected before the recursion can get anywhere near the stack
        let data = vec![0u8; 64];
        let mut reader = BitReader::new(&data);
        assert!(matches!(
            HuffmanNode::deserialize(&mut reader),
            Err(OxiHuffError::CorruptedData { .. })
        ));
    }
}
