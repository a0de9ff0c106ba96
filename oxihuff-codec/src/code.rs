//! Code table generation.

use crate::tree::HuffmanNode;

/// Mapping from symbol to its prefix-free bit sequence.
///
/// Derived from a completed tree by a pre-order walk: `false` (0) for a
/// left step, `true` (1) for a right step. Symbols without a leaf in the
/// tree have no entry.
#[derive(Debug, Clone)]
pub struct CodeTable {
    /// Per-symbol code bits; `None` for symbols absent from the tree.
    codes: Vec<Option<Vec<bool>>>,
}

impl CodeTable {
    /// Derive the code table from a completed tree.
    ///
    /// The degenerate single-leaf tree assigns its symbol the one-bit
    /// placeholder code `0`. That code is never written as payload — the
    /// single-symbol container stores a repetition count instead — but it
    /// keeps the table total-length arithmetic well-defined.
    pub fn from_tree(tree: &HuffmanNode) -> Self {
        let mut table = CodeTable {
            codes: vec![None; 256],
        };
        match tree {
            HuffmanNode::Leaf { symbol, .. } => {
                table.codes[*symbol as usize] = Some(vec![false]);
            }
            HuffmanNode::Internal { .. } => {
                table.assign(tree, &mut Vec::new());
            }
        }
        table
    }

    fn assign(&mut self, node: &HuffmanNode, path: &mut Vec<bool>) {
        match node {
            HuffmanNode::Leaf { symbol, .. } => {
                self.codes[*symbol as usize] = Some(path.clone());
            }
            HuffmanNode::Internal { left, right, .. } => {
                path.push(false);
                self.assign(left, path);
                path.pop();
                path.push(true);
                self.assign(right, path);
                path.pop();
            }
        }
    }

    /// Code bits for a symbol, if the symbol has a leaf in the tree.
    pub fn get(&self, symbol: u8) -> Option<&[bool]> {
        self.codes[symbol as usize].as_deref()
    }

    /// Total payload bits needed to encode the input with this table.
    ///
    /// Returns `None` if the input contains a symbol the table has no
    /// code for.
    pub fn payload_bits(&self, input: &[u8]) -> Option<u64> {
        let mut total = 0u64;
        for &byte in input {
            total += self.get(byte)?.len() as u64;
        }
        Some(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::freq::symbol_frequencies;

    fn is_prefix(a: &[bool], b: &[bool]) -> bool {
        a.len() <= b.len() && a == &b[..a.len()]
    }

    #[test]
    fn test_degenerate_placeholder_code() {
        let tree = HuffmanNode::build(&[(b'Z', 42)]).unwrap();
        let table = CodeTable::from_tree(&tree);
        assert_eq!(table.get(b'Z'), Some(&[false][..]));
        assert_eq!(table.get(b'A'), None);
    }

    #[test]
    fn test_prefix_free() {
        let freqs = symbol_frequencies(b"the quick brown fox jumps over the lazy dog");
        let tree = HuffmanNode::build(&freqs).unwrap();
        let table = CodeTable::from_tree(&tree);

        let codes: Vec<&[bool]> = (0u16..=255)
            .filter_map(|s| table.get(s as u8))
            .collect();
        assert_eq!(codes.len(), freqs.len());

        for (i, a) in codes.iter().enumerate() {
            for (j, b) in codes.iter().enumerate() {
                if i != j {
                    assert!(!is_prefix(a, b), "code {:?} is a prefix of {:?}", a, b);
                }
            }
        }
    }

    #[test]
    fn test_frequent_symbols_get_short_codes() {
        let mut input = vec![b'a'; 100];
        input.extend_from_slice(b"bcd");
        let freqs = symbol_frequencies(&input);
        let tree = HuffmanNode::build(&freqs).unwrap();
        let table = CodeTable::from_tree(&tree);

        let a_len = table.get(b'a').unwrap().len();
        let d_len = table.get(b'd').unwrap().len();
        assert!(a_len <= d_len);
    }

    #[test]
    fn test_payload_bits() {
        let freqs = symbol_frequencies(b"aab");
        let tree = HuffmanNode::build(&freqs).unwrap();
        let table = CodeTable::from_tree(&tree);

        // Two symbols: one bit each, three input bytes
        assert_eq!(table.payload_bits(b"aab"), Some(3));
        assert_eq!(table.payload_bits(b"xyz"), None);
    }
}
