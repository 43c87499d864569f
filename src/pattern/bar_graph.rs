//! Bar graph
//!
//! Lights the first pixels of the strip in proportion to `value / high`,
//! fading from blue at the start to red at the end.

use super::Pattern;
use crate::color::{NamedColor, rgb};
use crate::strip::Strip;

/// Shown on pixel 0 when the value rounds down to an empty bar
pub const BAR_GRAPH_WARNING_COLOR: u32 = 0x66_66_00;

/// Bar graph of `value` out of `high`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarGraph {
    value: i32,
    high: i32,
}

impl BarGraph {
    /// Negative values are plotted by magnitude
    pub const fn new(value: i32, high: i32) -> Self {
        Self { value, high }
    }
}

/// Blue to red gradient color of pixel `index` out of `last`
#[allow(clippy::cast_possible_truncation)]
fn gradient(index: usize, last: usize) -> u32 {
    let red = if last == 0 {
        0
    } else {
        (index.min(last) * 255 / last) as u8
    };
    rgb(red, 0, 255 - red)
}

impl Pattern for BarGraph {
    #[allow(clippy::cast_possible_wrap)]
    fn render<const MAX_BYTES: usize>(&self, strip: &Strip<'_, MAX_BYTES>) {
        if self.high <= 0 {
            strip.clear();
            strip.set_pixel_color(0, NamedColor::Yellow.packed());
            return;
        }

        let length = strip.length();
        let value = i64::from(self.value).abs();
        let lit = value * length as i64 / i64::from(self.high);

        if lit == 0 {
            strip.set_pixel_color(0, BAR_GRAPH_WARNING_COLOR);
            for i in 1..length {
                strip.set_pixel_color(i, 0);
            }
            return;
        }

        let last = length.saturating_sub(1);
        for i in 0..length {
            if i as i64 <= lit {
                strip.set_pixel_color(i, gradient(i, last));
            } else {
                strip.set_pixel_color(i, 0);
            }
        }
    }
}
