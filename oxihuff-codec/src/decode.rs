//! Decompression (decoding) pipeline.

use crate::tree::HuffmanNode;
use oxihuff_core::bitstream::BitReader;
use oxihuff_core::error::{OxiHuffError, Result};

/// Decompress an OxiHuff container back into the original bytes.
///
/// # Errors
///
/// Returns [`OxiHuffError::UnexpectedEof`] when the container is truncated
/// mid-structure and [`OxiHuffError::CorruptedData`] when it is
/// structurally invalid (over-deep tree, payload ending inside a code).
pub fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    if data.is_empty() {
        // Empty container maps to empty output
        return Ok(Vec::new());
    }

    let mut reader = BitReader::new(data);
    let tree = HuffmanNode::deserialize(&mut reader)?;

    // The count field starts on the next byte boundary after the tree
    reader.align_to_byte();
    let mut count_buf = [0u8; 4];
    reader.read_bytes(&mut count_buf)?;
    let count = u32::from_le_bytes(count_buf);

    if let HuffmanNode::Leaf { symbol, .. } = &tree {
        // Single-symbol container: the count is a repetition count and
        // no payload bits are read.
        return Ok(vec![*symbol; count as usize]);
    }

    // The count is the exact number of payload bits. Termination is
    // measured in bits consumed, not symbols emitted: codes have variable
    // length, so counting symbols would desynchronize from the payload
    // boundary.
    let total = u64::from(count);
    let mut output = Vec::new();
    let mut node = &tree;
    let mut consumed = 0u64;

    while consumed < total {
        let bit = reader.read_bit()?;
        consumed += 1;

        let next = node.child(bit).ok_or_else(|| {
            OxiHuffError::corrupted(reader.bit_position(), "decode walk escaped the tree")
        })?;

        if let HuffmanNode::Leaf { symbol, .. } = next {
            output.push(*symbol);
            node = &tree;
        } else {
            node = next;
        }
    }

    if !std::ptr::eq(node, &tree) {
        return Err(OxiHuffError::corrupted(
            reader.bit_position(),
            "payload ended inside a code",
        ));
    }

    Ok(output)
}
