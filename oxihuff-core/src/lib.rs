//! # OxiHuff Core
//!
//! Core components for the OxiHuff compression library.
//!
//! This crate provides the building blocks shared by the codec and the CLI:
//!
//! - [`bitstream`]: MSB-first bit-level I/O for variable-length prefix codes
//! - [`error`]: Error types
//!
//! ## Architecture
//!
//! OxiHuff is designed as a small layered stack:
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ L3: CLI                                     │
//! │     file I/O, atomic output, reporting      │
//! ├─────────────────────────────────────────────┤
//! │ L2: Codec                                   │
//! │     frequency, tree, codes, container       │
//! ├─────────────────────────────────────────────┤
//! │ L1: BitStream (this crate)                  │
//! │     BitReader/BitWriter, errors             │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use oxihuff_core::bitstream::{BitReader, BitWriter};
//!
//! let mut writer = BitWriter::new();
//! writer.write_bits(0b1011, 4);
//! let data = writer.into_vec();
//!
//! let mut reader = BitReader::new(&data);
//! assert_eq!(reader.read_bits(4).unwrap(), 0b1011);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod bitstream;
pub mod error;

// Re-exports for convenience
pub use bitstream::{BitReader, BitWriter};
pub use error::{OxiHuffError, Result};
