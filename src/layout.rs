//! Channel order and stride of the pixel buffer
//!
//! The raw ids match the mode numbers used by the NeoPixel tooling:
//! GRB = 1, RGBW = 2, RGB = 3.

use crate::color::Rgb;

const LAYOUT_NAME_GRB: &str = "grb";
const LAYOUT_NAME_RGBW: &str = "rgbw";
const LAYOUT_NAME_RGB: &str = "rgb";

const LAYOUT_ID_GRB: u8 = 1;
const LAYOUT_ID_RGBW: u8 = 2;
const LAYOUT_ID_RGB: u8 = 3;

/// Layout used by the strip factory
pub const DEFAULT_LAYOUT: PixelLayout = PixelLayout::Grb;

/// Byte ordering of color channels within a pixel
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum PixelLayout {
    /// RGB strip, green byte first
    #[default]
    Grb = LAYOUT_ID_GRB,
    /// RGB+W strip, green first with the white byte appended
    Rgbw = LAYOUT_ID_RGBW,
    /// RGB strip, red byte first
    Rgb = LAYOUT_ID_RGB,
}

impl PixelLayout {
    /// Bytes per pixel
    pub const fn stride(self) -> usize {
        match self {
            Self::Rgbw => 4,
            Self::Grb | Self::Rgb => 3,
        }
    }

    /// Whether pixels carry a separate white channel
    pub const fn has_white(self) -> bool {
        matches!(self, Self::Rgbw)
    }

    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            LAYOUT_ID_GRB => Self::Grb,
            LAYOUT_ID_RGBW => Self::Rgbw,
            LAYOUT_ID_RGB => Self::Rgb,
            _ => return None,
        })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Grb => LAYOUT_NAME_GRB,
            Self::Rgbw => LAYOUT_NAME_RGBW,
            Self::Rgb => LAYOUT_NAME_RGB,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            LAYOUT_NAME_GRB => Some(Self::Grb),
            LAYOUT_NAME_RGBW => Some(Self::Rgbw),
            LAYOUT_NAME_RGB => Some(Self::Rgb),
            _ => None,
        }
    }

    /// Write color channels into a pixel slot
    ///
    /// `pixel` must be at least three bytes long. The white byte, if any,
    /// is left untouched.
    pub(crate) fn encode(self, pixel: &mut [u8], color: Rgb) {
        match self {
            Self::Rgb => {
                pixel[0] = color.r;
                pixel[1] = color.g;
            }
            Self::Grb | Self::Rgbw => {
                pixel[0] = color.g;
                pixel[1] = color.r;
            }
        }
        pixel[2] = color.b;
    }

    /// Read color channels back from a pixel slot
    pub(crate) fn decode(self, pixel: &[u8]) -> Rgb {
        match self {
            Self::Rgb => Rgb {
                r: pixel[0],
                g: pixel[1],
                b: pixel[2],
            },
            Self::Grb | Self::Rgbw => Rgb {
                r: pixel[1],
                g: pixel[0],
                b: pixel[2],
            },
        }
    }
}
