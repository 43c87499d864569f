mod codec;
mod hsl;
mod named;

use smart_leds::RGB8;

pub use codec::{pack, rgb, rgb_from_u32, rgb_to_u32, unpack_b, unpack_g, unpack_r};
pub use hsl::{hsl, hsl_f32};
pub use named::{NamedColor, colors};

pub type Rgb = RGB8;
