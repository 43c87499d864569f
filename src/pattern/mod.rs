//! Procedural patterns
//!
//! Patterns are stateless: each one is a single pass over a strip built
//! from the strip's own setters. The `show_*` helpers render a pattern and
//! commit the buffer right away.

mod bar_graph;
mod envelope;
mod power;
mod rainbow;
mod static_color;

pub use bar_graph::{BAR_GRAPH_WARNING_COLOR, BarGraph};
pub use rainbow::{HueDirection, Rainbow};
pub use static_color::StaticColor;

use crate::driver::OutputDriver;
use crate::strip::Strip;

pub trait Pattern {
    /// Render the pattern into the strip buffer
    fn render<const MAX_BYTES: usize>(&self, strip: &Strip<'_, MAX_BYTES>);
}

impl<const MAX_BYTES: usize> Strip<'_, MAX_BYTES> {
    /// Render a pattern and send the buffer to the strip
    pub fn show_pattern<P, D>(&self, pattern: &P, driver: &mut D)
    where
        P: Pattern,
        D: OutputDriver + ?Sized,
    {
        pattern.render(self);
        self.show(driver);
    }

    /// Shows all pixels in a given color
    pub fn show_color<D: OutputDriver + ?Sized>(&self, rgb: u32, driver: &mut D) {
        self.show_pattern(&StaticColor::new(rgb), driver);
    }

    /// Shows a clockwise rainbow from `start_hue` to `end_hue`
    ///
    /// The usual full sweep is `1..360`, see [`Rainbow::default`].
    pub fn show_rainbow<D: OutputDriver + ?Sized>(
        &self,
        start_hue: i32,
        end_hue: i32,
        driver: &mut D,
    ) {
        self.show_pattern(&Rainbow::new(start_hue, end_hue), driver);
    }

    /// Displays a bar graph of `value` out of `high`
    pub fn show_bar_graph<D: OutputDriver + ?Sized>(&self, value: i32, high: i32, driver: &mut D) {
        self.show_pattern(&BarGraph::new(value, high), driver);
    }
}
