//! Static color fill

use super::Pattern;
use crate::strip::Strip;

/// Fills every pixel with one packed color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticColor {
    color: u32,
}

impl StaticColor {
    pub const fn new(color: u32) -> Self {
        Self { color }
    }
}

impl Pattern for StaticColor {
    fn render<const MAX_BYTES: usize>(&self, strip: &Strip<'_, MAX_BYTES>) {
        strip.set_all_color(self.color);
    }
}
