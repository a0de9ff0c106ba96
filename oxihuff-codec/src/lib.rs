//! # OxiHuff Codec
//!
//! Pure Rust static Huffman compression.
//!
//! The codec turns a byte buffer into a self-describing container: a
//! pre-order serialization of the Huffman tree, a 4-byte little-endian
//! count field, and the prefix-coded payload bits. Decoding rebuilds the
//! tree from the container itself, so no side-channel symbol table is
//! needed.
//!
//! ## Wire format
//!
//! ```text
//! [serialized tree, byte-aligned]      leaf = 1 + 8 symbol bits,
//!                                      internal = 0 + left + right
//! [4-byte little-endian count]         repetitions (single-symbol case)
//!                                      or number of payload bits
//! [payload bits, byte-aligned]         multi-symbol case only
//! ```
//!
//! Empty input maps to an empty container, and vice versa.
//!
//! ## Example
//!
//! ```rust
//! use oxihuff_codec::{compress, decompress};
//!
//! let original = b"TOBEORNOTTOBEORTOBEORNOT";
//! let compressed = compress(original).unwrap();
//! let decompressed = decompress(&compressed).unwrap();
//! assert_eq!(decompressed, original);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod code;
pub mod decode;
pub mod encode;
pub mod freq;
pub mod tree;

// Re-exports
pub use code::CodeTable;
pub use decode::decompress;
pub use encode::compress;
pub use freq::symbol_frequencies;
pub use tree::HuffmanNode;
