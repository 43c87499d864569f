const COLOR_RED: u32 = 0xFF_00_00;
const COLOR_ORANGE: u32 = 0xFF_3A_00;
const COLOR_YELLOW: u32 = 0xFF_8A_00;
const COLOR_GREEN: u32 = 0x00_FF_00;
const COLOR_BLUE: u32 = 0x00_00_FF;
const COLOR_INDIGO: u32 = 0x5B_00_FF;
const COLOR_PURPLE: u32 = 0xFF_00_FF;
const COLOR_WHITE: u32 = 0xFF_FF_FF;
const COLOR_BLACK: u32 = 0x00_00_00;

/// Well known colors for a strip, tuned for WS2812 output
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum NamedColor {
    Red = COLOR_RED,
    Orange = COLOR_ORANGE,
    Yellow = COLOR_YELLOW,
    Green = COLOR_GREEN,
    Blue = COLOR_BLUE,
    Indigo = COLOR_INDIGO,
    Purple = COLOR_PURPLE,
    White = COLOR_WHITE,
    Black = COLOR_BLACK,
}

impl NamedColor {
    /// Packed `0xRRGGBB` value of the color
    pub const fn packed(self) -> u32 {
        self as u32
    }
}

impl From<NamedColor> for u32 {
    fn from(color: NamedColor) -> Self {
        color.packed()
    }
}

/// Gets the RGB value of a known color
pub const fn colors(color: NamedColor) -> u32 {
    color.packed()
}
