//! Natural-width loads and stores on raw addresses.
//!
//! Stores are relaxed atomic operations of the unit's width. On mainstream targets
//! this compiles to a plain move, and it makes each aligned unit written to the
//! destination single-copy atomic with respect to concurrent readers. Loads are
//! plain aligned reads: the source is required to be stable for the duration of a
//! transfer, and it may live behind a shared borrow.

use std::sync::atomic::{AtomicU8, AtomicU16, AtomicU32, Ordering};

#[cfg(target_has_atomic = "64")]
use std::sync::atomic::AtomicU64;

/// A transfer unit: 1, 2, 4 or 8 bytes.
pub(crate) trait Unit: Copy + Eq {
    const SIZE: usize;

    /// Loads one unit from `src`.
    ///
    /// # Safety
    ///
    /// `src` must be valid for reads of `SIZE` bytes and aligned to `SIZE`.
    unsafe fn load(src: *const u8) -> Self;

    /// Stores one unit to `dst`.
    ///
    /// # Safety
    ///
    /// `dst` must be valid for writes of `SIZE` bytes and aligned to `SIZE`.
    unsafe fn store(dst: *mut u8, value: Self);

    /// The unit with every byte set to `byte`.
    fn splat(byte: u8) -> Self;

    /// Transfers one unit from `src` to `dst`.
    ///
    /// # Safety
    ///
    /// See [`Unit::load`] and [`Unit::store`].
    #[inline(always)]
    unsafe fn transfer(src: *const u8, dst: *mut u8) {
        unsafe { Self::store(dst, Self::load(src)) }
    }
}

macro_rules! impl_atomic_unit {
    ($ty:ty, $atomic:ty) => {
        impl Unit for $ty {
            const SIZE: usize = std::mem::size_of::<$ty>();

            #[inline(always)]
            unsafe fn load(src: *const u8) -> Self {
                debug_assert!(src.addr() % Self::SIZE == 0);
                unsafe { src.cast::<$ty>().read() }
            }

            #[inline(always)]
            unsafe fn store(dst: *mut u8, value: Self) {
                debug_assert!(dst.addr() % Self::SIZE == 0);
                unsafe {
                    <$atomic>::from_ptr(dst.cast::<$ty>()).store(value, Ordering::Relaxed)
                }
            }

            #[inline(always)]
            fn splat(byte: u8) -> Self {
                <$ty>::from_ne_bytes([byte; std::mem::size_of::<$ty>()])
            }
        }
    };
}

impl_atomic_unit!(u8, AtomicU8);
impl_atomic_unit!(u16, AtomicU16);
impl_atomic_unit!(u32, AtomicU32);

#[cfg(target_has_atomic = "64")]
impl_atomic_unit!(u64, AtomicU64);

// Without native 64-bit atomics a long unit is a plain access and may tear.
#[cfg(not(target_has_atomic = "64"))]
impl Unit for u64 {
    const SIZE: usize = 8;

    #[inline(always)]
    unsafe fn load(src: *const u8) -> Self {
        unsafe { src.cast::<u64>().read() }
    }

    #[inline(always)]
    unsafe fn store(dst: *mut u8, value: Self) {
        unsafe { dst.cast::<u64>().write(value) }
    }

    #[inline(always)]
    fn splat(byte: u8) -> Self {
        u64::from_ne_bytes([byte; 8])
    }
}

#[cfg(test)]
mod tests {
    use super::Unit;

    #[test]
    fn test_splat() {
        assert_eq!(u8::splat(0x5A), 0x5A);
        assert_eq!(u16::splat(0x5A), 0x5A5A);
        assert_eq!(u32::splat(0x01), 0x0101_0101);
        assert_eq!(u64::splat(0xFF), u64::MAX);
    }

    #[test]
    fn test_load_store_round_trip() {
        let mut words = [0u64; 2];
        let base = words.as_mut_ptr().cast::<u8>();
        unsafe {
            u64::store(base, 0x1122_3344_5566_7788);
            u32::store(base.add(8), 0xAABB_CCDD);
            u16::store(base.add(12), 0xEEFF);
            u8::store(base.add(14), 0x42);
            assert_eq!(u64::load(base), 0x1122_3344_5566_7788);
            assert_eq!(u32::load(base.add(8)), 0xAABB_CCDD);
            assert_eq!(u16::load(base.add(12)), 0xEEFF);
            assert_eq!(u8::load(base.add(14)), 0x42);
            u32::transfer(base.add(8), base.add(4));
            assert_eq!(u32::load(base.add(4)), 0xAABB_CCDD);
        }
    }
}
