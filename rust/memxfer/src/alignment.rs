//! Alignment analysis for transfer planning.
//!
//! The chunk width of a transfer is the largest power of two, capped at
//! [`MAX_ALIGNMENT`](crate::MAX_ALIGNMENT), that both addresses share. Using the
//! alignment the two pointers have *relative to each other* rather than assuming a
//! word-aligned pair lets misaligned regions (a buffer shifted by 4 bytes, say) still
//! move the aligned majority of their bytes in wide units.

use memxfer_bytes::align::natural_alignment;

use crate::MAX_ALIGNMENT;

/// Largest power-of-two byte alignment (up to 8) shared by a set of addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum AlignmentClass {
    Byte = 1,
    Short = 2,
    Int = 4,
    Long = 8,
}

impl AlignmentClass {
    /// All classes, narrowest first.
    pub const ALL: [AlignmentClass; 4] = [
        AlignmentClass::Byte,
        AlignmentClass::Short,
        AlignmentClass::Int,
        AlignmentClass::Long,
    ];

    /// Width of one unit of this class, in bytes.
    #[inline]
    pub const fn bytes(self) -> usize {
        self as usize
    }

    #[inline]
    fn from_natural(bits: usize) -> AlignmentClass {
        match natural_alignment(bits, MAX_ALIGNMENT) {
            1 => AlignmentClass::Byte,
            2 => AlignmentClass::Short,
            4 => AlignmentClass::Int,
            _ => AlignmentClass::Long,
        }
    }
}

/// Computes the alignment `from` and `to` share relative to each other.
///
/// This is the lowest set bit of `from ^ to`, clipped to `[1, 8]`; addresses that
/// agree modulo 8 yield [`AlignmentClass::Long`]. After skipping the same number of
/// leading bytes in both regions, both addresses are aligned to the returned class.
///
/// ```
/// use memxfer::alignment::alignment_of_pair;
/// use memxfer::AlignmentClass;
///
/// let buf = [0u64; 4];
/// let base = buf.as_ptr().cast::<u8>();
/// unsafe {
///     assert_eq!(alignment_of_pair(base, base.add(16)), AlignmentClass::Long);
///     assert_eq!(alignment_of_pair(base.add(1), base.add(13)), AlignmentClass::Int);
///     assert_eq!(alignment_of_pair(base, base.add(3)), AlignmentClass::Byte);
/// }
/// ```
#[inline]
pub fn alignment_of_pair(from: *const u8, to: *const u8) -> AlignmentClass {
    AlignmentClass::from_natural(from.addr() ^ to.addr())
}

/// Computes the widest class for which the whole transfer of `extent` bytes from
/// `from` to `to` has no unaligned remainder: both addresses and the extent are
/// multiples of it.
///
/// This never exceeds [`alignment_of_pair`] for the same addresses.
#[inline]
pub fn alignment_of_region(from: *const u8, to: *const u8, extent: usize) -> AlignmentClass {
    AlignmentClass::from_natural(from.addr() | to.addr() | extent)
}

/// Length of the unaligned lower remainder of a transfer starting at `addr`.
///
/// Walks bits 1, 2 and 4 of the address below `alignment`; every set bit adds a
/// byte, short or int transfer that brings the address to the next boundary. Stops
/// at the first transfer that would run past `extent`, in which case the rest of the
/// region is shorter than that transfer and is left to the upper remainder.
#[inline]
pub(crate) fn lower_remainder(addr: usize, extent: usize, alignment: AlignmentClass) -> usize {
    let mut head = 0;
    for width in [1usize, 2, 4] {
        if width >= alignment.bytes() {
            break;
        }
        if (addr + head) & width != 0 {
            if head + width > extent {
                break;
            }
            head += width;
        }
    }
    head
}
