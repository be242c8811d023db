//! Aligned, overlap-safe raw memory transfer primitives.
//!
//! This crate is the lowest memory layer of a native runtime: copy, fill, byte-swap
//! and compare routines on raw addresses. Every routine is a leaf function: it never
//! allocates, locks, blocks or logs on the success path, so it is safe to call from
//! contexts that must not be suspended mid-transfer.
//!
//! # Key Functions
//!
//! - [`copy`]: `memmove` semantics, direction chosen from the address order
//! - [`copy_forward`] / [`copy_backward`]: explicit scan direction
//! - [`fill`]: repeated-byte fill
//! - [`copy_swapped`]: copy with per-element byte-order reversal
//! - [`compare`]: lexicographic comparison of two regions
//!
//! The [`region`] module wraps the same engine in a bounds-checked slice API that
//! reports bad arguments as [`memxfer_common::Result`] errors.
//!
//! # Algorithm
//!
//! The widest power-of-two alignment (up to 8) shared by source and destination is
//! computed from `from ^ to`. The region is split into an unaligned lower remainder,
//! an aligned bulk zone transferred in units of that alignment, and an unaligned
//! upper remainder. Remainders take at most three transfers (byte, short, int), each
//! naturally aligned in both regions.
//!
//! # Atomicity
//!
//! Every unit transfer is a single load and a single relaxed atomic store of its natural
//! width, so a concurrent reader observing the destination at the unit granularity
//! never sees a torn value. See [`atomicity::AtomicityPolicy`] for which regions
//! this covers end to end.
//!
//! # Failures
//!
//! Violated preconditions (null addresses, bad element widths, extents that are not
//! a multiple of the element width) are fatal: they are reported through
//! [`memxfer_common::fatal::fatal`] and the call does not return.
//!
//! # Example
//!
//! ```
//! let mut buf = [1u8, 2, 3, 4, 5, 6, 7, 8, 0, 0];
//! let base = buf.as_mut_ptr();
//! unsafe { memxfer::copy(base, base.add(2), 8) };
//! assert_eq!(buf, [1, 2, 1, 2, 3, 4, 5, 6, 7, 8]);
//! ```

pub mod alignment;
pub mod atomicity;
pub mod chunk;
pub mod compare;
pub mod direction;
pub mod fill;
pub mod region;
pub mod swap;
mod transfer;
mod unit;

pub use alignment::AlignmentClass;
pub use compare::compare;
pub use direction::Direction;
pub use fill::fill;
pub use swap::{ElementWidth, copy_swapped};
pub use transfer::{copy, copy_backward, copy_forward};

/// Widest chunk the engine ever transfers as a single unit.
pub const MAX_ALIGNMENT: usize = 8;

/// Size of one unrolled group in the long-aligned bulk zone.
pub const UNROLL_BYTES: usize = 32;

#[cfg(test)]
mod tests;
