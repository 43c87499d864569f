//! Shared pixel memory
//!
//! A [`PixelBuffer`] owns the bytes pushed to the strip. Strips borrow it
//! and mutate it through a `RefCell`, so several windows can alias the same
//! memory while the buffer itself stays on the stack or in a `static`.

use core::cell::RefCell;
use core::ops::Range;

use crate::layout::{DEFAULT_LAYOUT, PixelLayout};

/// Bytes needed to hold `pixel_count` pixels in `layout`
///
/// Meant for the buffer's const parameter:
/// `PixelBuffer::<{ buffer_bytes(30, PixelLayout::Grb) }>`.
pub const fn buffer_bytes(pixel_count: usize, layout: PixelLayout) -> usize {
    pixel_count * layout.stride()
}

/// Flat byte buffer of `MAX_BYTES` bytes
///
/// Holds as many whole pixels as fit. Only the first `capacity * stride`
/// bytes are in use, so the visible buffer is always a whole number of pixels.
#[derive(Debug)]
pub struct PixelBuffer<const MAX_BYTES: usize> {
    layout: PixelLayout,
    capacity: usize,
    storage: RefCell<[u8; MAX_BYTES]>,
}

impl<const MAX_BYTES: usize> PixelBuffer<MAX_BYTES> {
    /// Create a GRB buffer for `pixel_count` pixels
    ///
    /// The count is clamped to the pixels that fit in `MAX_BYTES`.
    pub const fn new(pixel_count: usize) -> Self {
        Self::with_layout(pixel_count, DEFAULT_LAYOUT)
    }

    /// Create a buffer with an explicit channel layout
    pub const fn with_layout(pixel_count: usize, layout: PixelLayout) -> Self {
        let fits = MAX_BYTES / layout.stride();
        let capacity = if pixel_count < fits { pixel_count } else { fits };
        Self {
            layout,
            capacity,
            storage: RefCell::new([0; MAX_BYTES]),
        }
    }

    pub const fn layout(&self) -> PixelLayout {
        self.layout
    }

    /// Number of pixels the buffer holds
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Bytes per pixel
    pub const fn stride(&self) -> usize {
        self.layout.stride()
    }

    /// Length of the visible byte buffer
    pub const fn len_bytes(&self) -> usize {
        self.capacity * self.layout.stride()
    }

    /// Run `f` over the raw bytes
    ///
    /// Returns `None` if the buffer is currently borrowed for writing.
    pub fn with_bytes<R>(&self, f: impl FnOnce(&[u8]) -> R) -> Option<R> {
        let storage = self.storage.try_borrow().ok()?;
        let bytes = storage.get(..self.len_bytes())?;
        Some(f(bytes))
    }

    /// Run `f` over the bytes of pixels `pixels.start..pixels.end`
    ///
    /// Out of range windows and contended borrows yield `None`.
    pub(crate) fn with_pixels_mut<R>(
        &self,
        pixels: Range<usize>,
        f: impl FnOnce(&mut [u8]) -> R,
    ) -> Option<R> {
        if pixels.end > self.capacity {
            return None;
        }
        let stride = self.stride();
        let mut storage = self.storage.try_borrow_mut().ok()?;
        let bytes = storage.get_mut(pixels.start * stride..pixels.end * stride)?;
        Some(f(bytes))
    }

    /// Run `f` over the bytes of pixels `pixels.start..pixels.end`, read only
    pub(crate) fn with_pixels<R>(&self, pixels: Range<usize>, f: impl FnOnce(&[u8]) -> R) -> Option<R> {
        if pixels.end > self.capacity {
            return None;
        }
        let stride = self.stride();
        let storage = self.storage.try_borrow().ok()?;
        let bytes = storage.get(pixels.start * stride..pixels.end * stride)?;
        Some(f(bytes))
    }
}
