//! Chunked transfer of a region in a fixed scan direction.
//!
//! A region is split into three zones:
//!
//! - the lower remainder, 0 to 7 bytes that bring both addresses to the chunk
//!   boundary, moved as at most one byte, one short and one int (ascending);
//! - the bulk zone, moved in units of the chunk width, in 32-byte groups of four
//!   longs when the chunk width is 8 and the `wide-unroll` feature is on;
//! - the upper remainder, fewer bytes than one chunk, moved as at most one int, one
//!   short and one byte (descending).
//!
//! Each transfer is naturally aligned in both regions. A forward scan visits the
//! zones low to high and a backward scan high to low; the remainders are too short to
//! overlap anything the other zones still have to read, because a shared chunk width
//! of `w` means the two regions are at least `w` bytes apart.

use memxfer_bytes::align::align_down;
use memxfer_common::fatal::check_precondition;

use crate::{
    alignment::{AlignmentClass, alignment_of_pair, lower_remainder},
    direction::Direction,
    unit::Unit,
};

/// Copies `extent` bytes from `from` to `to` in chunks of `alignment`, scanning in
/// `direction`.
///
/// `alignment` may be any class not wider than [`alignment_of_pair`] of the two
/// addresses; passing a wider one is a fatal precondition violation. A
/// [`Direction::NoOp`] scan does nothing.
///
/// # Safety
///
/// - `from` must be valid for reads and `to` for writes of `extent` bytes.
/// - If the regions overlap, `direction` must be the one
///   [`select_direction`](crate::direction::select_direction) returns for them.
/// - Nothing else may write to either region for the duration of the call.
pub unsafe fn copy_chunks(
    from: *const u8,
    to: *mut u8,
    extent: usize,
    alignment: AlignmentClass,
    direction: Direction,
) {
    if extent == 0 || direction == Direction::NoOp {
        return;
    }
    check_precondition(
        alignment <= alignment_of_pair(from, to),
        "alignment",
        "alignment <= alignment_of_pair(from, to)",
    );

    let head = lower_remainder(from.addr(), extent, alignment);
    let bulk = align_down(extent - head, alignment.bytes());
    let tail = extent - head - bulk;

    unsafe {
        let (bulk_from, bulk_to) = (from.add(head), to.add(head));
        let (tail_from, tail_to) = (bulk_from.add(bulk), bulk_to.add(bulk));
        match direction {
            Direction::Forward => {
                copy_lower_remainder(from, to, head);
                copy_bulk(bulk_from, bulk_to, bulk, alignment, Direction::Forward);
                copy_upper_remainder(tail_from, tail_to, tail);
            }
            Direction::Backward => {
                copy_upper_remainder(tail_from, tail_to, tail);
                copy_bulk(bulk_from, bulk_to, bulk, alignment, Direction::Backward);
                copy_lower_remainder(from, to, head);
            }
            Direction::NoOp => {}
        }
    }
}

/// Moves `len < 8` bytes whose start is aligned only to its lowest set bit: byte,
/// then short, then int.
#[inline(always)]
unsafe fn copy_lower_remainder(from: *const u8, to: *mut u8, len: usize) {
    debug_assert!(len < 8);
    let mut off = 0;
    unsafe {
        if len & 1 != 0 {
            u8::transfer(from, to);
            off += 1;
        }
        if len & 2 != 0 {
            u16::transfer(from.add(off), to.add(off));
            off += 2;
        }
        if len & 4 != 0 {
            u32::transfer(from.add(off), to.add(off));
        }
    }
}

/// Moves `len < 8` bytes starting on a chunk boundary: int, then short, then byte.
#[inline(always)]
unsafe fn copy_upper_remainder(from: *const u8, to: *mut u8, len: usize) {
    debug_assert!(len < 8);
    let mut off = 0;
    unsafe {
        if len & 4 != 0 {
            u32::transfer(from, to);
            off += 4;
        }
        if len & 2 != 0 {
            u16::transfer(from.add(off), to.add(off));
            off += 2;
        }
        if len & 1 != 0 {
            u8::transfer(from.add(off), to.add(off));
        }
    }
}

#[inline]
unsafe fn copy_bulk(
    from: *const u8,
    to: *mut u8,
    len: usize,
    alignment: AlignmentClass,
    direction: Direction,
) {
    unsafe {
        match alignment {
            AlignmentClass::Byte => copy_units::<u8>(from, to, len, direction),
            AlignmentClass::Short => copy_units::<u16>(from, to, len, direction),
            AlignmentClass::Int => copy_units::<u32>(from, to, len, direction),
            AlignmentClass::Long => copy_longs(from, to, len, direction),
        }
    }
}

/// Moves `len` bytes, a multiple of `U::SIZE`, one unit at a time.
#[inline(always)]
unsafe fn copy_units<U: Unit>(from: *const u8, to: *mut u8, len: usize, direction: Direction) {
    debug_assert_eq!(len % U::SIZE, 0);
    let count = len / U::SIZE;
    unsafe {
        match direction {
            Direction::Forward => {
                for i in 0..count {
                    U::transfer(from.add(i * U::SIZE), to.add(i * U::SIZE));
                }
            }
            Direction::Backward => {
                for i in (0..count).rev() {
                    U::transfer(from.add(i * U::SIZE), to.add(i * U::SIZE));
                }
            }
            Direction::NoOp => {}
        }
    }
}

#[cfg(feature = "wide-unroll")]
#[inline(always)]
unsafe fn copy_longs(from: *const u8, to: *mut u8, len: usize, direction: Direction) {
    use crate::UNROLL_BYTES;

    let grouped = align_down(len, UNROLL_BYTES);
    let groups = grouped / UNROLL_BYTES;
    unsafe {
        match direction {
            Direction::Forward => {
                for g in 0..groups {
                    copy_group(from.add(g * UNROLL_BYTES), to.add(g * UNROLL_BYTES));
                }
                copy_units::<u64>(
                    from.add(grouped),
                    to.add(grouped),
                    len - grouped,
                    Direction::Forward,
                );
            }
            Direction::Backward => {
                copy_units::<u64>(
                    from.add(grouped),
                    to.add(grouped),
                    len - grouped,
                    Direction::Backward,
                );
                for g in (0..groups).rev() {
                    copy_group(from.add(g * UNROLL_BYTES), to.add(g * UNROLL_BYTES));
                }
            }
            Direction::NoOp => {}
        }
    }
}

#[cfg(not(feature = "wide-unroll"))]
#[inline(always)]
unsafe fn copy_longs(from: *const u8, to: *mut u8, len: usize, direction: Direction) {
    unsafe { copy_units::<u64>(from, to, len, direction) }
}

/// Moves one 32-byte group. All four longs are loaded before any is stored, so the
/// group is safe in either direction when the regions are 8 or more bytes apart.
#[cfg(feature = "wide-unroll")]
#[inline(always)]
unsafe fn copy_group(from: *const u8, to: *mut u8) {
    unsafe {
        let a = u64::load(from);
        let b = u64::load(from.add(8));
        let c = u64::load(from.add(16));
        let d = u64::load(from.add(24));
        u64::store(to, a);
        u64::store(to.add(8), b);
        u64::store(to.add(16), c);
        u64::store(to.add(24), d);
    }
}
