//! Alignment arithmetic and over-aligned byte buffers for the memxfer crates.
//!
//! [`buffer::AlignedBuf`] pins the base address of a byte region to a chosen
//! power-of-two boundary, so that an offset into it has a known alignment. The
//! engine tests and benchmarks use this to force every alignment class.

pub mod align;
pub mod buffer;

pub use buffer::AlignedBuf;
