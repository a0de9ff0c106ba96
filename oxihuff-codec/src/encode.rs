//! Compression (encoding) pipeline.
//!
//! Container layout, in order: the serialized tree (byte-aligned with zero
//! padding), a 4-byte little-endian count field, then the payload bits
//! (byte-aligned with zero padding). The count field holds the repetition
//! count for a single-symbol input and the exact number of payload bits
//! otherwise. An empty input produces an empty container.

use crate::code::CodeTable;
use crate::freq::symbol_frequencies;
use crate::tree::HuffmanNode;
use oxihuff_core::bitstream::BitWriter;
use oxihuff_core::error::{OxiHuffError, Result};

/// Compress a byte buffer into an OxiHuff container.
///
/// # Errors
///
/// Returns [`OxiHuffError::TooLarge`] when the input would overflow the
/// container's 4-byte count field.
pub fn compress(input: &[u8]) -> Result<Vec<u8>> {
    let freqs = symbol_frequencies(input);
    let Some(tree) = HuffmanNode::build(&freqs) else {
        // Empty input maps to an empty container
        return Ok(Vec::new());
    };
    let table = CodeTable::from_tree(&tree);

    let mut writer = BitWriter::new();
    tree.serialize(&mut writer);
    writer.flush();

    if tree.is_leaf() {
        // Degenerate alphabet: the count field stores the symbol's
        // frequency (= input length) and no payload bits follow.
        let count = input.len() as u64;
        let count = u32::try_from(count).map_err(|_| OxiHuffError::too_large(count))?;
        writer.write_bytes(&count.to_le_bytes());
        return Ok(writer.into_vec());
    }

    let total_bits = table.payload_bits(input).ok_or_else(|| {
        OxiHuffError::corrupted(writer.bits_written(), "input symbol missing from code table")
    })?;
    let total_bits =
        u32::try_from(total_bits).map_err(|_| OxiHuffError::too_large(total_bits))?;
    writer.write_bytes(&total_bits.to_le_bytes());

    for &byte in input {
        if let Some(code) = table.get(byte) {
            for &bit in code {
                writer.write_bit(bit);
            }
        }
    }
    writer.flush();

    Ok(writer.into_vec())
}
