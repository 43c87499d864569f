use super::pack;

const HUE_CIRCLE: i32 = 360;
const HUE_SEXTANT: i32 = 60;
const MAX_PERCENT: i32 = 99;

/// Converts a hue saturation luminosity value into a packed RGB color
///
/// Integer only: every division truncates toward zero, so the result is
/// stable across targets without an FPU.
///
/// # Arguments
/// * `h` - hue, taken modulo 360
/// * `s` - saturation, clamped to 0-99
/// * `l` - luminosity, clamped to 0-99
#[allow(clippy::cast_sign_loss)]
pub fn hsl(h: i32, s: i32, l: i32) -> u32 {
    let h = h % HUE_CIRCLE;
    let s = s.clamp(0, MAX_PERCENT);
    let l = l.clamp(0, MAX_PERCENT);

    // Chroma, [0, 255]
    let c = (((100 - (2 * l - 100).abs()) * s) << 8) / 10_000;
    let h1 = h / HUE_SEXTANT;
    let h2 = ((h - h1 * HUE_SEXTANT) * 256) / HUE_SEXTANT;
    let temp = ((((h1 % 2) << 8) + h2) - 256).abs();
    // Second largest component
    let x = (c * (256 - temp)) >> 8;

    let (r, g, b) = match h1 {
        0 => (c, x, 0),
        1 => (x, c, 0),
        2 => (0, c, x),
        3 => (0, x, c),
        4 => (x, 0, c),
        5 => (c, 0, x),
        // Negative hues below -59 fall outside every sextant
        _ => (0, 0, 0),
    };

    let m = ((((l * 2) << 8) / 100) - c) / 2;
    pack((r + m) as u32, (g + m) as u32, (b + m) as u32)
}

/// [`hsl`] for fractional inputs
///
/// Each component is rounded half-up before conversion.
#[allow(clippy::cast_possible_truncation)]
pub fn hsl_f32(h: f32, s: f32, l: f32) -> u32 {
    let round = |value: f32| libm::floorf(value + 0.5) as i32;
    hsl(round(h), round(s), round(l))
}
