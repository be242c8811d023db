//! Atomicity contract of the transfer engine.
//!
//! A *torn value* is a unit observed by a concurrent reader that mixes bytes of two
//! different writes. The engine writes every unit of a transfer with one store of
//! the unit's width, so a reader that loads the destination at granularity `g`
//! never sees a torn `g`-byte value provided every unit the engine writes covers
//! whole `g`-aligned slots, that is, no unit narrower than `g` touches the
//! destination.
//!
//! | class | unit store     | tear-free                          |
//! |-------|----------------|------------------------------------|
//! | 1     | byte store     | always                             |
//! | 2     | 16-bit store   | always                             |
//! | 4     | 32-bit store   | always                             |
//! | 8     | 64-bit store   | when the target has 64-bit atomics |
//!
//! The guarantee holds for the aligned bulk zone. The unaligned remainders are
//! written in narrower pieces, so a caller that needs a whole region to be tear-free
//! at granularity `g` must align both addresses and the extent to `g`
//! ([`AtomicityPolicy::covers`] checks exactly that). The engine does not enforce
//! it, and it gives no guarantee about the order in which units become visible.
//!
//! Byte-swapping copies use unaligned element accesses and are never tear-free
//! beyond single bytes.

use crate::alignment::{AlignmentClass, alignment_of_region};

/// Queries over the atomicity contract. Stateless.
#[derive(Debug, Clone, Copy, Default)]
pub struct AtomicityPolicy;

impl AtomicityPolicy {
    /// Returns `true` if a unit of `class` is written with a single atomic store.
    #[inline]
    pub const fn is_tear_free(class: AlignmentClass) -> bool {
        match class {
            AlignmentClass::Byte | AlignmentClass::Short | AlignmentClass::Int => true,
            AlignmentClass::Long => cfg!(target_has_atomic = "64"),
        }
    }

    /// Widest granularity at which a whole copy of `extent` bytes from `from` to `to`
    /// is tear-free for a reader of the destination.
    #[inline]
    pub fn tear_free_granularity(
        from: *const u8,
        to: *const u8,
        extent: usize,
    ) -> AlignmentClass {
        Self::clamp(alignment_of_region(from, to, extent))
    }

    /// Widest granularity at which a whole fill of `extent` bytes at `to` is
    /// tear-free.
    #[inline]
    pub fn tear_free_fill_granularity(to: *const u8, extent: usize) -> AlignmentClass {
        Self::clamp(alignment_of_region(to, to, extent))
    }

    /// Returns `true` if a reader observing the destination of a copy at `class`
    /// granularity can never see a torn value.
    #[inline]
    pub fn covers(from: *const u8, to: *const u8, extent: usize, class: AlignmentClass) -> bool {
        class <= Self::tear_free_granularity(from, to, extent)
    }

    #[inline]
    fn clamp(class: AlignmentClass) -> AlignmentClass {
        if Self::is_tear_free(class) {
            class
        } else {
            AlignmentClass::Int
        }
    }
}
