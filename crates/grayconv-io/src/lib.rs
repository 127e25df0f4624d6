#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for I/O operations.
///
/// Defines [`error::IoError`] variants for file access and malformed input.
pub mod error;

/// Plain text PGM encoding and decoding.
///
/// Read and write single channel 8-bit images stored one row per line.
pub mod pgm;

pub use crate::error::IoError;
