//! Current draw estimate

use crate::strip::Strip;

/// Idle draw per pixel, in tenths of a milliamp
const IDLE_DECI_MA_PER_PIXEL: u64 = 7;
/// Draw per unit of channel intensity, in 1/10000 mA
const CHANNEL_DRAW: u64 = 480;

impl<const MAX_BYTES: usize> Strip<'_, MAX_BYTES> {
    /// Estimate the current (mA) drawn by the strip's pixels
    ///
    /// A fixed 0.7 mA per pixel plus a rough linear model of every stored
    /// channel byte.
    pub fn power(&self) -> u32 {
        let intensity: u64 = self
            .with_bytes(|bytes| bytes.iter().map(|&channel| u64::from(channel)).sum::<u64>())
            .unwrap_or(0);
        let idle = self.length() as u64 * IDLE_DECI_MA_PER_PIXEL / 10;
        let lit = intensity * CHANNEL_DRAW / 10_000;
        u32::try_from(idle + lit).unwrap_or(u32::MAX)
    }
}
