//! Hardware boundary
//!
//! The core never touches pins or timing itself. Implement [`OutputDriver`]
//! to push a finished buffer to the strip and [`PinControl`] to prepare the
//! data line.

#[cfg(feature = "esp32-log")]
use esp_println::println;
use smart_leds::SmartLedsWrite;

use crate::color::Rgb;
use crate::layout::PixelLayout;

/// Digital pin identifier of the strip data line
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pin(pub u8);

/// A finished buffer ready for transmission
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    /// Data line of the strip
    pub pin: Pin,
    /// Channel order of `bytes`
    pub layout: PixelLayout,
    /// Whole pixel buffer in wire order
    pub bytes: &'a [u8],
}

impl<'a> Frame<'a> {
    /// Number of pixels in the frame
    pub const fn len(&self) -> usize {
        self.bytes.len() / self.layout.stride()
    }

    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Decode the frame into logical RGB pixels
    pub fn pixels(&self) -> impl Iterator<Item = Rgb> + use<'a> {
        let layout = self.layout;
        self.bytes
            .chunks_exact(layout.stride())
            .map(move |pixel| layout.decode(pixel))
    }
}

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// `write` runs inside a critical section and must return in bounded time.
pub trait OutputDriver {
    /// Write a frame to the LED strip
    fn write(&mut self, frame: &Frame<'_>);
}

/// Digital pin configuration service
pub trait PinControl {
    /// Drive `pin` low
    fn set_low(&mut self, pin: Pin);
}

/// [`OutputDriver`] over any `smart-leds` writer
///
/// The frame is decoded to `RGB8`, the writer applies its own wire order.
/// The white channel of RGBW frames is dropped.
#[derive(Debug)]
pub struct SmartLedsOutput<W> {
    writer: W,
}

impl<W> SmartLedsOutput<W> {
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> OutputDriver for SmartLedsOutput<W>
where
    W: SmartLedsWrite,
    W::Color: From<Rgb>,
{
    fn write(&mut self, frame: &Frame<'_>) {
        // Transport errors belong to the writer
        if self.writer.write(frame.pixels()).is_err() {
            #[cfg(feature = "esp32-log")]
            println!("[SmartLedsOutput.write] failed to write {} pixels", frame.len());
        }
    }
}
