//! Lexicographic comparison of two raw regions.

use std::cmp::Ordering;

use memxfer_common::fatal::check_precondition;

use crate::{
    alignment::{AlignmentClass, alignment_of_pair, lower_remainder},
    unit::Unit,
};

/// Compares `extent` bytes at `a` with `extent` bytes at `b` as unsigned bytes, in
/// address order.
///
/// When the two addresses share long alignment the aligned middle is compared a
/// word at a time; the first differing word is then resolved byte by byte.
///
/// # Safety
///
/// Both regions must be valid for reads of `extent` bytes and must not be written
/// during the call.
///
/// A null address with a non-zero extent is a fatal precondition violation.
///
/// ```
/// use std::cmp::Ordering;
///
/// let a = *b"memory-transfer";
/// let b = *b"memory-transfex";
/// assert_eq!(unsafe { memxfer::compare(a.as_ptr(), b.as_ptr(), a.len()) }, Ordering::Less);
/// assert_eq!(unsafe { memxfer::compare(a.as_ptr(), b.as_ptr(), 14) }, Ordering::Equal);
/// ```
pub unsafe fn compare(a: *const u8, b: *const u8, extent: usize) -> Ordering {
    if extent == 0 {
        return Ordering::Equal;
    }
    check_precondition(
        !a.is_null() && !b.is_null(),
        "address",
        "a != null && b != null",
    );
    if a == b {
        return Ordering::Equal;
    }

    let mut off = 0;
    unsafe {
        if alignment_of_pair(a, b) == AlignmentClass::Long {
            let head = lower_remainder(a.addr(), extent, AlignmentClass::Long);
            let ord = compare_bytes(a, b, head);
            if ord.is_ne() {
                return ord;
            }
            off = head;
            while extent - off >= 8 {
                let x = u64::load(a.add(off));
                let y = u64::load(b.add(off));
                if x != y {
                    return x.to_ne_bytes().cmp(&y.to_ne_bytes());
                }
                off += 8;
            }
        }
        compare_bytes(a.add(off), b.add(off), extent - off)
    }
}

#[inline]
unsafe fn compare_bytes(a: *const u8, b: *const u8, len: usize) -> Ordering {
    for i in 0..len {
        let (x, y) = unsafe { (a.add(i).read(), b.add(i).read()) };
        if x != y {
            return x.cmp(&y);
        }
    }
    Ordering::Equal
}
