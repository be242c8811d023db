use crate::align::{bytes_to_boundary, is_aligned};

/// A fixed-length byte buffer whose first byte sits on a chosen power-of-two
/// boundary.
///
/// Unlike `Vec<u8>`, which only promises byte alignment, the base address of an
/// `AlignedBuf` is a multiple of [`AlignedBuf::alignment`]. Offsetting from the base
/// therefore produces addresses of a known alignment class, which is what transfer
/// tests need to exercise the byte, short, int and long paths deterministically.
///
/// The buffer never reallocates, so raw pointers into it stay valid for its lifetime
/// (as long as no `&mut` borrow is created in between).
pub struct AlignedBuf {
    /// Backing storage, `len + alignment` bytes, with leading padding.
    inner: Vec<u8>,
    /// Offset of the aligned base inside `inner`.
    start: usize,
    /// Visible length.
    len: usize,
    alignment: usize,
}

impl AlignedBuf {
    /// Alignment used by [`AlignedBuf::zeroed`] and friends.
    pub const DEFAULT_ALIGNMENT: usize = 64;

    /// Creates a zero-filled buffer of `len` bytes aligned to
    /// [`Self::DEFAULT_ALIGNMENT`].
    pub fn zeroed(len: usize) -> AlignedBuf {
        Self::filled(len, 0)
    }

    /// Creates a buffer of `len` bytes, every byte set to `value`.
    pub fn filled(len: usize, value: u8) -> AlignedBuf {
        Self::with_alignment(len, Self::DEFAULT_ALIGNMENT, value)
    }

    /// Creates a buffer of `len` bytes set to `value`, with the base address aligned
    /// to `alignment`.
    ///
    /// # Panics
    ///
    /// Panics if `alignment` is not a power of two.
    pub fn with_alignment(len: usize, alignment: usize, value: u8) -> AlignedBuf {
        assert!(alignment.is_power_of_two(), "alignment must be a power of two");
        let total = len.checked_add(alignment).expect("add");
        let inner = vec![value; total];
        let start = bytes_to_boundary(inner.as_ptr() as usize, alignment);
        debug_assert!(start + len <= inner.len());
        AlignedBuf {
            inner,
            start,
            len,
            alignment,
        }
    }

    /// Creates a buffer holding a copy of `data`, aligned to
    /// [`Self::DEFAULT_ALIGNMENT`].
    pub fn copy_from_slice(data: &[u8]) -> AlignedBuf {
        let mut buf = Self::zeroed(data.len());
        buf.as_mut_slice().copy_from_slice(data);
        buf
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The boundary the base address is guaranteed to sit on.
    #[inline]
    pub fn alignment(&self) -> usize {
        self.alignment
    }

    #[inline]
    pub fn as_ptr(&self) -> *const u8 {
        unsafe { self.inner.as_ptr().add(self.start) }
    }

    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut u8 {
        unsafe { self.inner.as_mut_ptr().add(self.start) }
    }

    /// Returns a raw pointer to the byte at `offset`.
    ///
    /// # Panics
    ///
    /// Panics if `offset > len`. One-past-the-end is allowed.
    #[inline]
    pub fn ptr_at(&self, offset: usize) -> *const u8 {
        assert!(offset <= self.len);
        unsafe { self.as_ptr().add(offset) }
    }

    /// Mutable counterpart of [`AlignedBuf::ptr_at`].
    #[inline]
    pub fn mut_ptr_at(&mut self, offset: usize) -> *mut u8 {
        assert!(offset <= self.len);
        unsafe { self.as_mut_ptr().add(offset) }
    }

    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.inner[self.start..self.start + self.len]
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        let start = self.start;
        &mut self.inner[start..start + self.len]
    }

    /// Checks whether the address of the byte at `offset` is a multiple of
    /// `alignment`.
    ///
    /// # Panics
    ///
    /// Panics if `offset > len`.
    pub fn is_aligned_at(&self, offset: usize, alignment: usize) -> bool {
        is_aligned(self.ptr_at(offset) as usize, alignment)
    }

    /// Views the buffer as a slice of `T`.
    ///
    /// # Panics
    ///
    /// Panics (via `bytemuck`) if the length is not a multiple of `size_of::<T>()` or
    /// the buffer alignment is smaller than `align_of::<T>()`.
    #[inline]
    pub fn typed_data<T>(&self) -> &[T]
    where
        T: bytemuck::AnyBitPattern,
    {
        bytemuck::cast_slice(self.as_slice())
    }

    /// Mutable counterpart of [`AlignedBuf::typed_data`].
    #[inline]
    pub fn typed_data_mut<T>(&mut self) -> &mut [T]
    where
        T: bytemuck::AnyBitPattern + bytemuck::NoUninit,
    {
        bytemuck::cast_slice_mut(self.as_mut_slice())
    }
}

impl std::ops::Deref for AlignedBuf {
    type Target = [u8];

    #[inline]
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl std::ops::DerefMut for AlignedBuf {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl Clone for AlignedBuf {
    fn clone(&self) -> AlignedBuf {
        let mut buf = AlignedBuf::with_alignment(self.len, self.alignment, 0);
        buf.as_mut_slice().copy_from_slice(self.as_slice());
        buf
    }
}

impl PartialEq for AlignedBuf {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for AlignedBuf {}

impl std::fmt::Debug for AlignedBuf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlignedBuf")
            .field("values", &self.as_slice())
            .field("len", &self.len)
            .field("alignment", &self.alignment)
            .finish_non_exhaustive()
    }
}
