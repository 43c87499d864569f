#![no_std]

pub mod buffer;
pub mod color;
pub mod driver;
pub mod layout;
pub mod math8;
pub mod pattern;
pub mod strip;

pub use buffer::{PixelBuffer, buffer_bytes};
pub use driver::{Frame, OutputDriver, Pin, PinControl, SmartLedsOutput};
pub use layout::{DEFAULT_LAYOUT, PixelLayout};
pub use pattern::{BarGraph, HueDirection, Pattern, Rainbow, StaticColor};
pub use strip::{DEFAULT_BRIGHTNESS, Strip};

pub use color::{NamedColor, Rgb, colors, hsl, hsl_f32, pack, rgb, unpack_b, unpack_g, unpack_r};
