//! Brightness easing over the stored buffer

use crate::math8::{dim8, quad_envelope};
use crate::strip::Strip;

impl<const MAX_BYTES: usize> Strip<'_, MAX_BYTES> {
    /// Apply a quadratic brightness envelope to the current colors
    ///
    /// Pixels fade in from the start, peak at `length / 2` and fade out
    /// towards the end. Stored bytes are rescaled in place, so the envelope
    /// compounds with the strip brightness they were written with.
    pub fn ease_brightness(&self) {
        let length = self.length();
        let stride = self.layout().stride();
        self.with_bytes_mut(|bytes| {
            for (k, pixel) in bytes.chunks_exact_mut(stride).enumerate() {
                let scale = quad_envelope(k, length);
                for channel in pixel {
                    *channel = dim8(*channel, scale);
                }
            }
        });
    }
}
