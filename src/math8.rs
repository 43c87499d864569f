/// Scale an 8-bit value by a factor (0-255 = 0.0-~1.0)
///
/// Plain `(value * scale) >> 8`, so a full-scale 255 still drops one step.
#[inline]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn dim8(value: u8, scale: u8) -> u8 {
    ((value as u16 * scale as u16) >> 8) as u8
}

/// Apply strip brightness to a channel value
///
/// Brightness 255 leaves the value untouched.
#[inline]
pub const fn brightness8(value: u8, brightness: u8) -> u8 {
    if brightness < 255 {
        dim8(value, brightness)
    } else {
        value
    }
}

/// Parabolic envelope peaking at the middle of a run of `length` pixels
///
/// Returns the 0-255 scale for pixel `k`. Runs shorter than two pixels have
/// no usable midpoint and scale to zero.
#[allow(clippy::cast_possible_truncation)]
pub const fn quad_envelope(k: usize, length: usize) -> u8 {
    let mid = length / 2;
    if mid == 0 {
        return 0;
    }
    let distance = if k > mid {
        length.saturating_sub(1 + k)
    } else {
        k
    };
    let scale = (255 * distance * distance) / (mid * mid);
    if scale > 255 { 255 } else { scale as u8 }
}
