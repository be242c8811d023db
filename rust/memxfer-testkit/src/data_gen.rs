//! Data generation utilities for testing.
//!
//! Everything here is deterministic for a given seed, so a failing case can be
//! replayed from the parameters printed by the assertion.

use memxfer_bytes::AlignedBuf;

/// Returns `len` pseudo-random bytes derived from `seed`.
pub fn random_bytes(len: usize, seed: u64) -> Vec<u8> {
    let mut rng = fastrand::Rng::with_seed(seed);
    (0..len).map(|_| rng.u8(..)).collect()
}

/// Returns `len` bytes `1, 2, 3, ...` wrapping at 255 and skipping zero, so that no
/// byte of the pattern equals a zero-filled destination.
pub fn ascending_bytes(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 255 + 1) as u8).collect()
}

/// Applies `memmove(buf + to, buf + from, extent)` using the standard library, as the
/// reference result for engine copies.
pub fn reference_memmove(buf: &mut [u8], from: usize, to: usize, extent: usize) {
    buf.copy_within(from..from + extent, to);
}

/// Reverses the byte order of every `width`-byte element of `data`.
///
/// # Panics
///
/// Panics if `data.len()` is not a multiple of `width`.
pub fn reference_swap(data: &[u8], width: usize) -> Vec<u8> {
    assert_eq!(data.len() % width, 0);
    data.chunks_exact(width)
        .flat_map(|c| c.iter().rev().copied())
        .collect()
}

/// A region surrounded by canary bytes on both sides.
///
/// The region starts `offset` bytes past a 64-byte boundary, so the offset selects
/// the alignment class of the region's base address.
pub struct GuardedRegion {
    buf: AlignedBuf,
    start: usize,
    len: usize,
    canary: u8,
}

impl GuardedRegion {
    /// Number of canary bytes on each side of the region.
    pub const GUARD: usize = 16;

    /// Creates a region of `len` bytes, filled with `fill`, whose start address is
    /// `offset` bytes past a 64-byte boundary. The guards hold `canary`.
    pub fn new(len: usize, offset: usize, fill: u8, canary: u8) -> GuardedRegion {
        let start = Self::GUARD + offset;
        let mut buf = AlignedBuf::filled(start + len + Self::GUARD, canary);
        buf[start..start + len].fill(fill);
        GuardedRegion {
            buf,
            start,
            len,
            canary,
        }
    }

    /// Start of the region.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut u8 {
        self.buf.mut_ptr_at(self.start)
    }

    /// Region contents, without the guards.
    #[inline]
    pub fn region(&self) -> &[u8] {
        &self.buf[self.start..self.start + self.len]
    }

    /// Returns `true` if no guard byte was modified.
    pub fn canaries_intact(&self) -> bool {
        let end = self.start + self.len;
        self.buf[..self.start].iter().all(|&b| b == self.canary)
            && self.buf[end..].iter().all(|&b| b == self.canary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_bytes_deterministic() {
        assert_eq!(random_bytes(64, 7), random_bytes(64, 7));
        assert_ne!(random_bytes(64, 7), random_bytes(64, 8));
    }

    #[test]
    fn test_ascending_bytes_has_no_zero() {
        let data = ascending_bytes(600);
        assert!(data.iter().all(|&b| b != 0));
        assert_eq!(&data[..3], &[1, 2, 3]);
        assert_eq!(data[255], 1);
    }

    #[test]
    fn test_reference_swap() {
        assert_eq!(reference_swap(&[1, 2, 3, 4], 2), [2, 1, 4, 3]);
        assert_eq!(reference_swap(&[1, 2, 3, 4], 4), [4, 3, 2, 1]);
    }

    #[test]
    fn test_guarded_region() {
        let mut r = GuardedRegion::new(10, 3, 0x00, 0xCC);
        assert!(r.canaries_intact());
        assert_eq!(r.region(), &[0; 10]);
        assert_eq!(r.as_mut_ptr().addr() % 64, (GuardedRegion::GUARD + 3) % 64);
        unsafe { r.as_mut_ptr().add(10).write(0) };
        assert!(!r.canaries_intact());
    }
}
