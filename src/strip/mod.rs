//! Strip views
//!
//! A [`Strip`] is a window (`start`, `length`) over a [`PixelBuffer`] with its
//! own brightness and optional matrix width. Views are cheap copies that
//! borrow the buffer, so a sub-range written through one view is visible
//! through every other view of the same buffer.

mod matrix;
mod transform;

use core::ops::Range;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::buffer::PixelBuffer;
use crate::color::{Rgb, rgb_from_u32};
use crate::driver::{Frame, OutputDriver, Pin, PinControl};
use crate::layout::PixelLayout;
use crate::math8::brightness8;

/// Brightness of a freshly created strip
pub const DEFAULT_BRIGHTNESS: u8 = 128;

/// Window over a shared pixel buffer
#[derive(Debug, Clone, Copy)]
pub struct Strip<'a, const MAX_BYTES: usize> {
    buffer: &'a PixelBuffer<MAX_BYTES>,
    pin: Pin,
    brightness: u8,
    /// First pixel of the window in the buffer
    start: usize,
    /// Number of pixels in the window
    length: usize,
    /// Row length when the window is a matrix, 0 otherwise
    matrix_width: usize,
}

impl<'a, const MAX_BYTES: usize> Strip<'a, MAX_BYTES> {
    /// Create the root strip covering the whole buffer
    ///
    /// The data line is driven low and brightness starts at
    /// [`DEFAULT_BRIGHTNESS`].
    pub fn create(buffer: &'a PixelBuffer<MAX_BYTES>, pin: Pin, pins: &mut impl PinControl) -> Self {
        let mut strip = Self {
            buffer,
            pin,
            brightness: DEFAULT_BRIGHTNESS,
            start: 0,
            length: buffer.capacity(),
            matrix_width: 0,
        };
        strip.set_pin(pin, pins);
        strip
    }

    /// Gets the number of pixels in the strip
    pub const fn length(&self) -> usize {
        self.length
    }

    /// Offset of the strip in the underlying buffer
    pub const fn start(&self) -> usize {
        self.start
    }

    pub const fn brightness(&self) -> u8 {
        self.brightness
    }

    pub const fn pin(&self) -> Pin {
        self.pin
    }

    pub const fn layout(&self) -> PixelLayout {
        self.buffer.layout()
    }

    pub const fn buffer(&self) -> &'a PixelBuffer<MAX_BYTES> {
        self.buffer
    }

    /// Set the brightness of the strip
    ///
    /// Only applies to future writes, stored pixels are not rescaled.
    pub fn set_brightness(&mut self, brightness: u8) {
        self.brightness = brightness;
    }

    /// Set the data line and drive it low
    pub fn set_pin(&mut self, pin: Pin, pins: &mut impl PinControl) {
        self.pin = pin;
        pins.set_low(pin);
        #[cfg(feature = "esp32-log")]
        println!("[Strip.set_pin] data line on pin {}", pin.0);
    }

    /// Set a pixel to a packed RGB color
    ///
    /// Indices outside the strip are ignored.
    pub fn set_pixel_color(&self, index: usize, rgb: u32) {
        if index >= self.length {
            return;
        }
        let color = self.scaled(rgb_from_u32(rgb));
        let layout = self.layout();
        let at = self.start + index;
        let _ = self
            .buffer
            .with_pixels_mut(at..at + 1, |pixel| layout.encode(pixel, color));
    }

    /// Set the white channel of a pixel
    ///
    /// Ignored unless the buffer is RGBW.
    pub fn set_pixel_white(&self, index: usize, white: u8) {
        if !self.layout().has_white() || index >= self.length {
            return;
        }
        let white = brightness8(white, self.brightness);
        let at = self.start + index;
        let _ = self
            .buffer
            .with_pixels_mut(at..at + 1, |pixel| pixel[3] = white);
    }

    /// Set every pixel of the strip to a packed RGB color
    pub fn set_all_color(&self, rgb: u32) {
        let color = self.scaled(rgb_from_u32(rgb));
        let layout = self.layout();
        self.with_bytes_mut(|bytes| {
            for pixel in bytes.chunks_exact_mut(layout.stride()) {
                layout.encode(pixel, color);
            }
        });
    }

    /// Set the white channel of every pixel
    ///
    /// Ignored unless the buffer is RGBW.
    pub fn set_all_white(&self, white: u8) {
        let layout = self.layout();
        if !layout.has_white() {
            return;
        }
        let white = brightness8(white, self.brightness);
        self.with_bytes_mut(|bytes| {
            for pixel in bytes.chunks_exact_mut(layout.stride()) {
                pixel[3] = white;
            }
        });
    }

    /// Turn off all pixels of the strip
    pub fn clear(&self) {
        self.with_bytes_mut(|bytes| bytes.fill(0));
    }

    /// Stored color of a pixel, brightness already applied
    pub fn pixel(&self, index: usize) -> Option<Rgb> {
        if index >= self.length {
            return None;
        }
        let layout = self.layout();
        let at = self.start + index;
        self.buffer
            .with_pixels(at..at + 1, |pixel| layout.decode(pixel))
    }

    /// Stored white channel of a pixel, `None` unless the buffer is RGBW
    pub fn white(&self, index: usize) -> Option<u8> {
        if !self.layout().has_white() || index >= self.length {
            return None;
        }
        let at = self.start + index;
        self.buffer.with_pixels(at..at + 1, |pixel| pixel[3])
    }

    /// Create a sub-strip sharing this strip's buffer
    ///
    /// `start` is clamped into the strip and `length` to the pixels left
    /// after it. Brightness and pin are inherited, matrix width is reset.
    #[must_use]
    pub fn range(&self, start: usize, length: usize) -> Self {
        let start = start.min(self.length.saturating_sub(1));
        let length = length.min(self.length - start);
        Self {
            start: self.start + start,
            length,
            matrix_width: 0,
            ..*self
        }
    }

    /// Send the whole buffer to the strip
    ///
    /// The driver runs inside a critical section so nothing can disturb the
    /// output timing.
    pub fn show<D: OutputDriver + ?Sized>(&self, driver: &mut D) {
        let pin = self.pin;
        let layout = self.layout();
        let sent = self.buffer.with_bytes(|bytes| {
            let frame = Frame { pin, layout, bytes };
            critical_section::with(|_| driver.write(&frame));
        });
        if sent.is_none() {
            #[cfg(feature = "esp32-log")]
            println!("[Strip.show] buffer is busy, frame skipped");
        }
    }

    /// Pixel range of the strip in the buffer
    pub(crate) const fn pixels(&self) -> Range<usize> {
        self.start..self.start + self.length
    }

    /// Run `f` over the strip's bytes
    pub(crate) fn with_bytes<R>(&self, f: impl FnOnce(&[u8]) -> R) -> Option<R> {
        self.buffer.with_pixels(self.pixels(), f)
    }

    /// Run `f` over the strip's bytes, mutably
    pub(crate) fn with_bytes_mut(&self, f: impl FnOnce(&mut [u8])) {
        let _ = self.buffer.with_pixels_mut(self.pixels(), f);
    }

    const fn scaled(&self, color: Rgb) -> Rgb {
        Rgb {
            r: brightness8(color.r, self.brightness),
            g: brightness8(color.g, self.brightness),
            b: brightness8(color.b, self.brightness),
        }
    }
}
