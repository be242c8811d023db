//! Bounds-checked transfers over Rust slices.
//!
//! These functions drive the same engine as the raw entry points but take slices,
//! so the borrow checker rules out invalid addresses and concurrent writers. Range
//! and length mismatches are ordinary caller input at this level and are reported
//! as [`Result`] errors instead of being fatal.

use std::{
    cmp::Ordering,
    ops::{Bound, Range, RangeBounds},
};

use memxfer_common::{Result, error::Error, verify_arg};

use crate::swap::{ElementWidth, swap_elements};

/// Copies the bytes of `src` within `buf` to the position starting at `dest`, like
/// [`slice::copy_within`], with `memmove` semantics for overlap.
///
/// ```
/// let mut buf = *b"0123456789";
/// memxfer::region::copy_within(&mut buf, 1..6, 4).unwrap();
/// assert_eq!(&buf, b"0123123459");
/// ```
pub fn copy_within(buf: &mut [u8], src: impl RangeBounds<usize>, dest: usize) -> Result<()> {
    let src = resolve_range(buf.len(), src)?;
    let len = src.len();
    verify_arg!(dest, dest <= buf.len() && buf.len() - dest >= len);
    let base = buf.as_mut_ptr();
    unsafe { crate::copy(base.add(src.start), base.add(dest), len) };
    Ok(())
}

/// Copies all of `src` into `dst`; the lengths must match.
pub fn copy_to(src: &[u8], dst: &mut [u8]) -> Result<()> {
    verify_arg!(dst, dst.len() == src.len());
    unsafe { crate::copy_forward(src.as_ptr(), dst.as_mut_ptr(), src.len()) };
    Ok(())
}

/// Sets every byte of `dst` to `value`.
pub fn fill(dst: &mut [u8], value: u8) {
    unsafe { crate::fill(dst.as_mut_ptr(), dst.len(), value) };
}

/// Copies `src` into `dst`, reversing the byte order of every element.
///
/// ```
/// use memxfer::ElementWidth;
///
/// let src = 0x0A0B0C0Du32.to_le_bytes();
/// let mut dst = [0u8; 4];
/// memxfer::region::swap_copy(&src, &mut dst, ElementWidth::Four).unwrap();
/// assert_eq!(dst, 0x0A0B0C0Du32.to_be_bytes());
/// ```
pub fn swap_copy(src: &[u8], dst: &mut [u8], width: ElementWidth) -> Result<()> {
    verify_arg!(dst, dst.len() == src.len());
    check_whole_elements(src.len(), width)?;
    unsafe { swap_elements(src.as_ptr(), dst.as_mut_ptr(), src.len(), width) };
    Ok(())
}

/// Reverses the byte order of every element of `buf` in place.
pub fn swap_in_place(buf: &mut [u8], width: ElementWidth) -> Result<()> {
    check_whole_elements(buf.len(), width)?;
    let p = buf.as_mut_ptr();
    unsafe { swap_elements(p, p, buf.len(), width) };
    Ok(())
}

/// Byte-swapping counterpart of [`copy_within`]; the ranges may overlap.
pub fn swap_within(
    buf: &mut [u8],
    src: impl RangeBounds<usize>,
    dest: usize,
    width: ElementWidth,
) -> Result<()> {
    let src = resolve_range(buf.len(), src)?;
    let len = src.len();
    verify_arg!(dest, dest <= buf.len() && buf.len() - dest >= len);
    check_whole_elements(len, width)?;
    let base = buf.as_mut_ptr();
    unsafe { swap_elements(base.add(src.start), base.add(dest), len, width) };
    Ok(())
}

/// Compares two slices lexicographically as unsigned bytes; a proper prefix orders
/// before the longer slice.
pub fn compare(a: &[u8], b: &[u8]) -> Ordering {
    let common = a.len().min(b.len());
    let ord = unsafe { crate::compare(a.as_ptr(), b.as_ptr(), common) };
    ord.then(a.len().cmp(&b.len()))
}

fn check_whole_elements(len: usize, width: ElementWidth) -> Result<()> {
    if len % width.bytes() != 0 {
        return Err(Error::invalid_arg(
            "len",
            format!("{len} is not a multiple of the element width {}", width.bytes()),
        ));
    }
    Ok(())
}

fn resolve_range(len: usize, range: impl RangeBounds<usize>) -> Result<Range<usize>> {
    let start = match range.start_bound() {
        Bound::Included(&n) => n,
        Bound::Excluded(&n) => n
            .checked_add(1)
            .ok_or_else(|| Error::invalid_arg("range", "start out of range"))?,
        Bound::Unbounded => 0,
    };
    let end = match range.end_bound() {
        Bound::Included(&n) => n
            .checked_add(1)
            .ok_or_else(|| Error::invalid_arg("range", "end out of range"))?,
        Bound::Excluded(&n) => n,
        Bound::Unbounded => len,
    };
    verify_arg!(range, start <= end);
    verify_arg!(range, end <= len);
    Ok(start..end)
}

#[cfg(test)]
mod tests {
    use memxfer_common::error::ErrorKind;

    use super::*;

    #[test]
    fn test_copy_within_matches_std() {
        for (src, dest) in [(0..10, 5), (5..15, 0), (3..13, 3), (0..0, 20), (0..20, 0)] {
            let mut expected: Vec<u8> = (0u8..20).collect();
            expected.copy_within(src.clone(), dest);
            let mut actual: Vec<u8> = (0u8..20).collect();
            copy_within(&mut actual, src, dest).unwrap();
            assert_eq!(actual, expected);
        }
    }

    #[test]
    fn test_copy_within_range_forms() {
        let mut buf: Vec<u8> = (0u8..8).collect();
        copy_within(&mut buf, ..=2, 5).unwrap();
        assert_eq!(buf, [0, 1, 2, 3, 4, 0, 1, 2]);
        copy_within(&mut buf, 6.., 0).unwrap();
        assert_eq!(buf, [1, 2, 2, 3, 4, 0, 1, 2]);
    }

    #[test]
    fn test_copy_within_rejects_bad_ranges() {
        let mut buf = [0u8; 8];
        let err = copy_within(&mut buf, 4..9, 0).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::InvalidArgument { .. }));
        assert!(copy_within(&mut buf, 0..4, 5).is_err());
        assert!(copy_within(&mut buf, 0..4, 9).is_err());
        let reversed = (Bound::Included(5), Bound::Excluded(2));
        assert!(copy_within(&mut buf, reversed, 0).is_err());
        assert_eq!(buf, [0; 8]);
    }

    #[test]
    fn test_copy_to_length_mismatch() {
        let mut dst = [0u8; 3];
        assert!(copy_to(&[1, 2], &mut dst).is_err());
        copy_to(&[1, 2, 3], &mut dst).unwrap();
        assert_eq!(dst, [1, 2, 3]);
    }

    #[test]
    fn test_fill_slice() {
        let mut buf = [0u8; 37];
        fill(&mut buf[1..36], 0x5A);
        assert_eq!(buf[0], 0);
        assert!(buf[1..36].iter().all(|&b| b == 0x5A));
        assert_eq!(buf[36], 0);
        fill(&mut [], 1);
    }

    #[test]
    fn test_swap_in_place_round_trip() {
        let original: Vec<u8> = (0u8..24).collect();
        for width in [ElementWidth::Two, ElementWidth::Four, ElementWidth::Eight] {
            let mut buf = original.clone();
            swap_in_place(&mut buf, width).unwrap();
            assert_ne!(buf, original);
            swap_in_place(&mut buf, width).unwrap();
            assert_eq!(buf, original);
        }
    }

    #[test]
    fn test_swap_rejects_partial_element() {
        let mut buf = [0u8; 6];
        let err = swap_in_place(&mut buf, ElementWidth::Four).unwrap_err();
        assert!(err.to_string().contains("not a multiple of the element width 4"));
        let mut dst = [0u8; 6];
        assert!(swap_copy(&buf, &mut dst, ElementWidth::Eight).is_err());
        assert!(swap_copy(&buf, &mut dst[..4], ElementWidth::Two).is_err());
    }

    #[test]
    fn test_swap_within_overlapping() {
        let mut buf: Vec<u8> = (0u8..12).collect();
        swap_within(&mut buf, 0..8, 2, ElementWidth::Two).unwrap();
        assert_eq!(buf, [0, 1, 1, 0, 3, 2, 5, 4, 7, 6, 10, 11]);
        assert!(swap_within(&mut buf, 0..6, 2, ElementWidth::Four).is_err());
    }

    #[test]
    fn test_compare_prefix_and_content() {
        assert_eq!(compare(b"abc", b"abc"), Ordering::Equal);
        assert_eq!(compare(b"ab", b"abc"), Ordering::Less);
        assert_eq!(compare(b"abd", b"abc"), Ordering::Greater);
        assert_eq!(compare(b"", b""), Ordering::Equal);
        assert_eq!(compare(&[0x80], &[0x7F]), Ordering::Greater);
    }
}
