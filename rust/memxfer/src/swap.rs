//! Copy with per-element byte-order reversal, for endianness conversion.
//!
//! Elements are visited one at a time with unaligned loads and stores; byte reversal
//! is inherently per element, so there is no chunked fast path. The scan direction
//! follows the same rule as a plain copy, which makes overlapping and in-place swaps
//! safe.

use memxfer_common::{
    error::Error,
    fatal::{check_precondition, fatal},
};

/// Width of one element of a byte-swapping copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ElementWidth {
    Two = 2,
    Four = 4,
    Eight = 8,
}

impl ElementWidth {
    #[inline]
    pub const fn bytes(self) -> usize {
        self as usize
    }
}

impl TryFrom<usize> for ElementWidth {
    type Error = Error;

    fn try_from(width: usize) -> Result<Self, Self::Error> {
        match width {
            2 => Ok(ElementWidth::Two),
            4 => Ok(ElementWidth::Four),
            8 => Ok(ElementWidth::Eight),
            _ => Err(Error::unsupported_width(width)),
        }
    }
}

/// Copies `extent` bytes from `from` to `to`, reversing the byte order of every
/// `element_width`-byte element.
///
/// Unlike [`copy`](crate::copy), `from == to` is not a no-op: the region is swapped
/// in place.
///
/// # Safety
///
/// - `from` must be valid for reads and `to` for writes of `extent` bytes.
/// - Nothing else may write to either region for the duration of the call.
///
/// The following are fatal: `element_width` not in {2, 4, 8}, `extent` not a
/// multiple of `element_width`, a null address.
///
/// ```
/// let src = [0x11u8, 0x22, 0x33, 0x44];
/// let mut dst = [0u8; 4];
/// unsafe { memxfer::copy_swapped(src.as_ptr(), dst.as_mut_ptr(), 4, 2) };
/// assert_eq!(dst, [0x22, 0x11, 0x44, 0x33]);
/// ```
pub unsafe fn copy_swapped(from: *const u8, to: *mut u8, extent: usize, element_width: usize) {
    let width = match ElementWidth::try_from(element_width) {
        Ok(width) => width,
        Err(e) => fatal(e),
    };
    check_precondition(
        !from.is_null() && !to.is_null(),
        "address",
        "from != null && to != null",
    );
    check_precondition(
        extent % element_width == 0,
        "extent",
        "extent % element_width == 0",
    );
    unsafe { swap_elements(from, to, extent, width) }
}

/// Element loop behind [`copy_swapped`]; arguments are already validated.
///
/// # Safety
///
/// As for [`copy_swapped`], with `extent` a multiple of `width`.
pub(crate) unsafe fn swap_elements(
    from: *const u8,
    to: *mut u8,
    extent: usize,
    width: ElementWidth,
) {
    let forward = from.addr() >= to.addr();
    unsafe {
        match width {
            ElementWidth::Two => swap_units::<u16>(from, to, extent, forward),
            ElementWidth::Four => swap_units::<u32>(from, to, extent, forward),
            ElementWidth::Eight => swap_units::<u64>(from, to, extent, forward),
        }
    }
}

trait SwapUnit: Copy {
    const SIZE: usize;
    fn reversed(self) -> Self;
}

macro_rules! impl_swap_unit {
    ($($ty:ty),*) => {
        $(
            impl SwapUnit for $ty {
                const SIZE: usize = std::mem::size_of::<$ty>();

                #[inline(always)]
                fn reversed(self) -> Self {
                    self.swap_bytes()
                }
            }
        )*
    };
}

impl_swap_unit!(u16, u32, u64);

#[inline(always)]
unsafe fn swap_units<T: SwapUnit>(from: *const u8, to: *mut u8, extent: usize, forward: bool) {
    let count = extent / T::SIZE;
    let step = |i: usize| unsafe {
        let v = from.add(i * T::SIZE).cast::<T>().read_unaligned();
        to.add(i * T::SIZE).cast::<T>().write_unaligned(v.reversed());
    };
    if forward {
        (0..count).for_each(step);
    } else {
        (0..count).rev().for_each(step);
    }
}
