use std::alloc::{alloc_zeroed, dealloc, handle_alloc_error, Layout};
use std::mem;
use std::ptr::NonNull;

use crate::error::{layout_error, Result};
use crate::simd::traits::Lane;

/// Alignment of every scratch block: the width of a quad register.
pub const SCRATCH_ALIGNMENT: usize = 16;

/// A zero-initialised, aligned byte block with typed lane views.
///
/// This is the raw lane buffer the fixture writes sample windows into and
/// the test functions read operands from. The same bytes can be viewed as
/// any lane type (`i8` through `u64`, `f32`), which is what lets a float
/// window be loaded with `vld1_s8` or an integer window be reinterpreted.
///
/// # Memory Safety
///
/// - Allocated with `std::alloc::alloc_zeroed` and freed with
///   `std::alloc::dealloc` using the same layout on drop
/// - Views are bounds checked and always start at a multiple of the view's
///   lane size, so they are properly aligned for the lane type
/// - Every [`Lane`] type is valid for any bit pattern, so a view never
///   exposes an invalid value
///
/// # Example
///
/// ```rust
/// use lanecheck::utils::AlignedBlock;
///
/// let mut block = AlignedBlock::new(16);
/// block.lanes_mut::<i32>(0, 16).copy_from_slice(&[1, 2, 3, 4]);
/// assert_eq!(block.lanes::<u8>(0, 4), &1i32.to_ne_bytes());
/// ```
pub struct AlignedBlock {
    ptr: NonNull<u8>,
    layout: Layout,
}

impl AlignedBlock {
    /// Allocates `size` zeroed bytes aligned to [`SCRATCH_ALIGNMENT`].
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero. Allocation failure aborts the process
    /// through `std::alloc::handle_alloc_error`.
    pub fn new(size: usize) -> Self {
        match Self::with_alignment(size, SCRATCH_ALIGNMENT) {
            Ok(block) => block,
            Err(error) => panic!("{error}"),
        }
    }

    /// Allocates `size` zeroed bytes with the given alignment.
    ///
    /// # Errors
    ///
    /// Returns a layout error when `size` is zero or `align` is not a power
    /// of two no smaller than 8 (the widest lane).
    pub fn with_alignment(size: usize, align: usize) -> Result<Self> {
        if size == 0 {
            return Err(layout_error(size, align, "scratch blocks cannot be empty"));
        }
        if !align.is_power_of_two() || align < mem::align_of::<u64>() {
            return Err(layout_error(
                size,
                align,
                "alignment must be a power of two of at least 8 bytes",
            ));
        }

        let layout = Layout::from_size_align(size, align)
            .map_err(|e| layout_error(size, align, e.to_string()))?;

        // SAFETY: the layout has a non-zero size.
        let ptr = unsafe { alloc_zeroed(layout) };

        match NonNull::new(ptr) {
            Some(ptr) => Ok(AlignedBlock { ptr, layout }),
            None => {
                eprintln!(
                    "scratch allocation of {} bytes ({} byte alignment) failed",
                    size, align
                );
                handle_alloc_error(layout)
            }
        }
    }

    /// Size of the block in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.layout.size()
    }

    /// Always false; kept for symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.layout.size() == 0
    }

    /// Alignment of the block in bytes.
    #[inline]
    pub fn alignment(&self) -> usize {
        self.layout.align()
    }

    /// Start address of the block.
    #[inline]
    pub fn as_ptr(&self) -> *const u8 {
        self.ptr.as_ptr()
    }

    /// The whole block as bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        // SAFETY: the block owns `len` initialised bytes.
        unsafe { std::slice::from_raw_parts(self.ptr.as_ptr(), self.len()) }
    }

    /// Views `byte_len` bytes starting at `byte_offset` as lanes of `T`.
    ///
    /// # Panics
    ///
    /// Panics if the range leaves the block or is not a whole number of
    /// lanes starting on a lane boundary.
    pub fn lanes<T: Lane>(&self, byte_offset: usize, byte_len: usize) -> &[T] {
        self.check_view::<T>(byte_offset, byte_len);
        // SAFETY: the range is in bounds and aligned for `T` (checked above),
        // and any bit pattern is a valid `T`.
        unsafe {
            std::slice::from_raw_parts(
                self.ptr.as_ptr().add(byte_offset) as *const T,
                byte_len / T::BYTES,
            )
        }
    }

    /// Mutable counterpart of [`AlignedBlock::lanes`].
    pub fn lanes_mut<T: Lane>(&mut self, byte_offset: usize, byte_len: usize) -> &mut [T] {
        self.check_view::<T>(byte_offset, byte_len);
        // SAFETY: as in `lanes`; `&mut self` guarantees exclusive access.
        unsafe {
            std::slice::from_raw_parts_mut(
                self.ptr.as_ptr().add(byte_offset) as *mut T,
                byte_len / T::BYTES,
            )
        }
    }

    fn check_view<T: Lane>(&self, byte_offset: usize, byte_len: usize) {
        assert!(
            byte_offset + byte_len <= self.len(),
            "view {}..{} exceeds a {} byte block",
            byte_offset,
            byte_offset + byte_len,
            self.len()
        );
        assert!(
            byte_offset % T::BYTES == 0 && byte_len % T::BYTES == 0,
            "view {}..{} is not a whole number of {} byte lanes",
            byte_offset,
            byte_offset + byte_len,
            T::BYTES
        );
    }
}

impl Drop for AlignedBlock {
    fn drop(&mut self) {
        // SAFETY: allocated in `with_alignment` with exactly this layout.
        unsafe { dealloc(self.ptr.as_ptr(), self.layout) }
    }
}

// The block owns its allocation outright; nothing aliases it.
unsafe impl Send for AlignedBlock {}
unsafe impl Sync for AlignedBlock {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_is_zeroed_and_aligned() {
        let block = AlignedBlock::new(32);
        assert_eq!(block.len(), 32);
        assert_eq!(block.as_ptr() as usize % SCRATCH_ALIGNMENT, 0);
        assert!(block.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_views_share_bytes() {
        let mut block = AlignedBlock::new(16);
        block.lanes_mut::<f32>(0, 16).copy_from_slice(&[1.0, -0.0, 2.5, f32::INFINITY]);

        let bits = block.lanes::<u32>(0, 16);
        assert_eq!(bits, &[0x3f80_0000, 0x8000_0000, 0x4020_0000, 0x7f80_0000]);

        let bytes = block.lanes::<u8>(4, 4);
        assert_eq!(bytes, &[0x00, 0x00, 0x00, 0x80]);
    }

    #[test]
    fn test_rejects_bad_layouts() {
        assert!(matches!(
            AlignedBlock::with_alignment(0, 16),
            Err(crate::error::HarnessError::LayoutError { .. })
        ));
        assert!(AlignedBlock::with_alignment(16, 12).is_err());
        assert!(AlignedBlock::with_alignment(16, 4).is_err());
        assert!(AlignedBlock::with_alignment(64, 64).is_ok());
    }

    #[test]
    #[should_panic(expected = "exceeds")]
    fn test_out_of_bounds_view_panics() {
        let block = AlignedBlock::new(16);
        let _ = block.lanes::<u64>(8, 16);
    }

    #[test]
    #[should_panic(expected = "whole number")]
    fn test_misaligned_view_panics() {
        let block = AlignedBlock::new(16);
        let _ = block.lanes::<u32>(2, 8);
    }
}
