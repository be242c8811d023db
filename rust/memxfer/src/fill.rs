//! Repeated-byte fill.
//!
//! Uses the same zone split as [`chunk`](crate::chunk). A fill has no source, so the
//! destination always pairs with itself at long alignment: the lower remainder brings
//! it to an 8-byte boundary and the bulk zone is written in longs.

use memxfer_bytes::align::align_down;
use memxfer_common::fatal::check_precondition;

use crate::{
    alignment::{AlignmentClass, lower_remainder},
    unit::Unit,
};

/// Sets `extent` bytes starting at `to` to `value`.
///
/// A zero extent never touches `to`.
///
/// # Safety
///
/// - `to` must be valid for writes of `extent` bytes.
/// - Nothing else may write to the region for the duration of the call.
///
/// A null `to` with a non-zero extent is a fatal precondition violation.
///
/// ```
/// let mut buf = [0u8; 13];
/// unsafe { memxfer::fill(buf.as_mut_ptr().wrapping_add(1), 11, 0x7F) };
/// assert_eq!(buf[0], 0);
/// assert!(buf[1..12].iter().all(|&b| b == 0x7F));
/// assert_eq!(buf[12], 0);
/// ```
#[inline]
pub unsafe fn fill(to: *mut u8, extent: usize, value: u8) {
    if extent == 0 {
        return;
    }
    check_precondition(!to.is_null(), "to", "to != null");
    unsafe { fill_chunks(to, extent, value) }
}

/// Same as [`fill`]. Every aligned unit of the bulk zone is written with a single
/// store, so a reader observing the destination at the width of
/// [`AtomicityPolicy::tear_free_fill_granularity`] never sees a mix of old and new
/// bytes within one unit.
///
/// [`AtomicityPolicy::tear_free_fill_granularity`]:
///     crate::atomicity::AtomicityPolicy::tear_free_fill_granularity
///
/// # Safety
///
/// As for [`fill`].
#[inline]
pub unsafe fn fill_atomic(to: *mut u8, extent: usize, value: u8) {
    unsafe { fill(to, extent, value) }
}

unsafe fn fill_chunks(to: *mut u8, extent: usize, value: u8) {
    let head = lower_remainder(to.addr(), extent, AlignmentClass::Long);
    let bulk = align_down(extent - head, AlignmentClass::Long.bytes());
    let tail = extent - head - bulk;

    unsafe {
        let mut off = 0;
        if head & 1 != 0 {
            u8::store(to, value);
            off += 1;
        }
        if head & 2 != 0 {
            u16::store(to.add(off), u16::splat(value));
            off += 2;
        }
        if head & 4 != 0 {
            u32::store(to.add(off), u32::splat(value));
        }

        let bulk_to = to.add(head);
        fill_longs(bulk_to, bulk, value);

        let tail_to = bulk_to.add(bulk);
        let mut off = 0;
        if tail & 4 != 0 {
            u32::store(tail_to, u32::splat(value));
            off += 4;
        }
        if tail & 2 != 0 {
            u16::store(tail_to.add(off), u16::splat(value));
            off += 2;
        }
        if tail & 1 != 0 {
            u8::store(tail_to.add(off), value);
        }
    }
}

#[inline(always)]
unsafe fn fill_units<U: Unit>(to: *mut u8, len: usize, value: u8) {
    let word = U::splat(value);
    for i in 0..len / U::SIZE {
        unsafe { U::store(to.add(i * U::SIZE), word) };
    }
}

#[cfg(feature = "wide-unroll")]
#[inline(always)]
unsafe fn fill_longs(to: *mut u8, len: usize, value: u8) {
    use crate::UNROLL_BYTES;

    let word = u64::splat(value);
    let grouped = align_down(len, UNROLL_BYTES);
    unsafe {
        for g in 0..grouped / UNROLL_BYTES {
            let p = to.add(g * UNROLL_BYTES);
            u64::store(p, word);
            u64::store(p.add(8), word);
            u64::store(p.add(16), word);
            u64::store(p.add(24), word);
        }
        fill_units::<u64>(to.add(grouped), len - grouped, value);
    }
}

#[cfg(not(feature = "wide-unroll"))]
#[inline(always)]
unsafe fn fill_longs(to: *mut u8, len: usize, value: u8) {
    unsafe { fill_units::<u64>(to, len, value) }
}
