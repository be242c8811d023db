/// Aligns an address or length down to the previous multiple of `alignment`.
///
/// ```
/// use memxfer_bytes::align::align_down;
///
/// assert_eq!(align_down(7, 8), 0);
/// assert_eq!(align_down(15, 8), 8);
/// assert_eq!(align_down(16, 8), 16);
/// ```
#[inline]
pub fn align_down(n: usize, alignment: usize) -> usize {
    debug_assert!(alignment.is_power_of_two());
    n & !(alignment - 1)
}

/// Returns `true` if `n` is a multiple of `alignment`.
///
/// ```
/// use memxfer_bytes::align::is_aligned;
///
/// assert!(is_aligned(0, 8));
/// assert!(is_aligned(24, 8));
/// assert!(!is_aligned(25, 2));
/// ```
#[inline]
pub fn is_aligned(n: usize, alignment: usize) -> bool {
    debug_assert!(alignment.is_power_of_two());
    (n & (alignment - 1)) == 0
}

/// Number of bytes to skip from `n` to reach the next `alignment` boundary.
///
/// ```
/// use memxfer_bytes::align::bytes_to_boundary;
///
/// assert_eq!(bytes_to_boundary(0x1000, 8), 0);
/// assert_eq!(bytes_to_boundary(0x1001, 8), 7);
/// assert_eq!(bytes_to_boundary(0x1006, 4), 2);
/// ```
#[inline]
pub fn bytes_to_boundary(n: usize, alignment: usize) -> usize {
    debug_assert!(alignment.is_power_of_two());
    n.wrapping_neg() & (alignment - 1)
}

/// Largest power of two that divides `n`, capped at `max`.
///
/// Zero is divisible by everything and yields `max`.
///
/// ```
/// use memxfer_bytes::align::natural_alignment;
///
/// assert_eq!(natural_alignment(0, 8), 8);
/// assert_eq!(natural_alignment(0x1003, 8), 1);
/// assert_eq!(natural_alignment(0x1006, 8), 2);
/// assert_eq!(natural_alignment(0x1040, 8), 8);
/// ```
#[inline]
pub fn natural_alignment(n: usize, max: usize) -> usize {
    debug_assert!(max.is_power_of_two());
    let low = n & n.wrapping_neg();
    if low == 0 || low > max { max } else { low }
}
