//! Rainbow sweep
//!
//! Interpolates hue across the strip in 100x fixed point so that short
//! strips still land close to the requested end hue. Saturation and
//! luminosity are fixed; `hsl` clamps the saturation to 99.

use super::Pattern;
use crate::color::hsl;
use crate::strip::Strip;

const DEFAULT_START_HUE: i32 = 1;
const DEFAULT_END_HUE: i32 = 360;
const SATURATION: i32 = 100;
const LUMINANCE: i32 = 50;
const HUE_CIRCLE: i64 = 360;
const FIXED_POINT: i64 = 100;

/// Direction of travel around the hue circle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HueDirection {
    #[default]
    Clockwise,
    CounterClockwise,
    /// Whichever way covers the shorter arc, clockwise on ties
    Shortest,
}

/// Rainbow from a start hue to an end hue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rainbow {
    start_hue: i32,
    end_hue: i32,
    direction: HueDirection,
}

impl Default for Rainbow {
    fn default() -> Self {
        Self::new(DEFAULT_START_HUE, DEFAULT_END_HUE)
    }
}

impl Rainbow {
    /// Create a clockwise rainbow
    pub const fn new(start_hue: i32, end_hue: i32) -> Self {
        Self {
            start_hue,
            end_hue,
            direction: HueDirection::Clockwise,
        }
    }

    /// Set the direction of travel
    #[must_use]
    pub const fn with_direction(mut self, direction: HueDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Hue increment per pixel, scaled by 100
    fn hue_step(&self, steps: i64) -> i64 {
        let start = i64::from(self.start_hue);
        let end = i64::from(self.end_hue);
        let cw_distance = ((end + HUE_CIRCLE) - start) % HUE_CIRCLE;
        let ccw_distance = ((start + HUE_CIRCLE) - end) % HUE_CIRCLE;
        let cw_step = (cw_distance * FIXED_POINT) / steps;
        let ccw_step = -(ccw_distance * FIXED_POINT) / steps;
        match self.direction {
            HueDirection::Clockwise => cw_step,
            HueDirection::CounterClockwise => ccw_step,
            HueDirection::Shortest => {
                if cw_distance < ccw_distance {
                    cw_step
                } else {
                    ccw_step
                }
            }
        }
    }
}

/// Reduce a widened hue to the `i32` range without changing `hsl`'s result
#[allow(clippy::cast_possible_truncation)]
const fn hue(value: i64) -> i32 {
    (value % HUE_CIRCLE) as i32
}

impl Pattern for Rainbow {
    #[allow(clippy::cast_possible_wrap)]
    fn render<const MAX_BYTES: usize>(&self, strip: &Strip<'_, MAX_BYTES>) {
        let length = strip.length();
        if length == 0 {
            return;
        }
        let steps = length as i64;
        let hue_step = self.hue_step(steps);
        let start = i64::from(self.start_hue);

        if length == 1 {
            // Single pixel strips take one full step from the start
            strip.set_pixel_color(0, hsl(hue(start + hue_step), SATURATION, LUMINANCE));
            return;
        }

        strip.set_pixel_color(0, hsl(self.start_hue, SATURATION, LUMINANCE));
        for i in 1..length - 1 {
            let h = (start * FIXED_POINT + i as i64 * hue_step) / FIXED_POINT + HUE_CIRCLE;
            strip.set_pixel_color(i, hsl(hue(h), SATURATION, LUMINANCE));
        }
        strip.set_pixel_color(length - 1, hsl(self.end_hue, SATURATION, LUMINANCE));
    }
}
