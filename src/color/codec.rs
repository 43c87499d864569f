use super::Rgb;

/// Pack red, green and blue channels into a `0xRRGGBB` value.
///
/// Each channel is masked to its low byte before packing.
#[inline]
pub const fn pack(r: u32, g: u32, b: u32) -> u32 {
    ((r & 0xFF) << 16) | ((g & 0xFF) << 8) | (b & 0xFF)
}

/// Converts red, green, blue channels into a packed RGB color
#[inline]
#[allow(clippy::cast_lossless)]
pub const fn rgb(red: u8, green: u8, blue: u8) -> u32 {
    pack(red as u32, green as u32, blue as u32)
}

/// Red channel of a packed color
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn unpack_r(rgb: u32) -> u8 {
    ((rgb >> 16) & 0xFF) as u8
}

/// Green channel of a packed color
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn unpack_g(rgb: u32) -> u8 {
    ((rgb >> 8) & 0xFF) as u8
}

/// Blue channel of a packed color
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn unpack_b(rgb: u32) -> u8 {
    (rgb & 0xFF) as u8
}

/// Create an RGB color from a u32 value (0xRRGGBB format)
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: unpack_r(color),
        g: unpack_g(color),
        b: unpack_b(color),
    }
}

/// Pack an RGB color back into a u32 value (0xRRGGBB format)
pub const fn rgb_to_u32(color: Rgb) -> u32 {
    rgb(color.r, color.g, color.b)
}
