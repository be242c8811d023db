//! Copy entry points.

use memxfer_common::fatal::check_precondition;

use crate::{
    alignment::alignment_of_pair,
    chunk::copy_chunks,
    direction::{Direction, select_direction},
};

/// Copies `extent` bytes from `from` to `to` with `memmove` semantics.
///
/// The regions may overlap arbitrarily; the scan direction is chosen from the address
/// order. Copying a region onto itself does nothing.
///
/// # Safety
///
/// - `from` must be valid for reads and `to` for writes of `extent` bytes.
/// - Nothing else may write to either region for the duration of the call.
///
/// A null address with a non-zero extent is a fatal precondition violation.
#[inline]
pub unsafe fn copy(from: *const u8, to: *mut u8, extent: usize) {
    if extent == 0 {
        return;
    }
    check_addresses(from, to);
    let direction = select_direction(from, to.cast_const());
    unsafe { copy_chunks(from, to, extent, alignment_of_pair(from, to), direction) }
}

/// Copies `extent` bytes from `from` to `to`, scanning from low to high addresses.
///
/// # Safety
///
/// As for [`copy`]; in addition, if the regions overlap `to` must not lie above
/// `from`.
#[inline]
pub unsafe fn copy_forward(from: *const u8, to: *mut u8, extent: usize) {
    if extent == 0 {
        return;
    }
    check_addresses(from, to);
    debug_assert!(!overlaps(from, to, extent) || to.addr() <= from.addr());
    unsafe {
        copy_chunks(
            from,
            to,
            extent,
            alignment_of_pair(from, to),
            Direction::Forward,
        )
    }
}

/// Copies `extent` bytes from `from` to `to`, scanning from high to low addresses.
///
/// # Safety
///
/// As for [`copy`]; in addition, if the regions overlap `to` must not lie below
/// `from`.
#[inline]
pub unsafe fn copy_backward(from: *const u8, to: *mut u8, extent: usize) {
    if extent == 0 {
        return;
    }
    check_addresses(from, to);
    debug_assert!(!overlaps(from, to, extent) || to.addr() >= from.addr());
    unsafe {
        copy_chunks(
            from,
            to,
            extent,
            alignment_of_pair(from, to),
            Direction::Backward,
        )
    }
}

#[inline]
fn check_addresses(from: *const u8, to: *mut u8) {
    check_precondition(
        !from.is_null() && !to.is_null(),
        "address",
        "from != null && to != null",
    );
}

#[inline]
fn overlaps(from: *const u8, to: *mut u8, extent: usize) -> bool {
    from.addr() < to.addr().wrapping_add(extent) && to.addr() < from.addr().wrapping_add(extent)
}
