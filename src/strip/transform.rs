use super::Strip;

impl<const MAX_BYTES: usize> Strip<'_, MAX_BYTES> {
    /// Shift pixels forward and clear with zeros
    ///
    /// Positive offsets move pixels towards the end of the strip, negative
    /// ones towards the start. Pixels pushed out of the strip are lost.
    #[allow(clippy::cast_possible_truncation)]
    pub fn shift(&self, offset: i32) {
        let stride = self.layout().stride();
        let distance = (offset.unsigned_abs() as usize).saturating_mul(stride);
        self.with_bytes_mut(|bytes| {
            let len = bytes.len();
            let distance = distance.min(len);
            if offset >= 0 {
                bytes.copy_within(..len - distance, distance);
                bytes[..distance].fill(0);
            } else {
                bytes.copy_within(distance.., 0);
                bytes[len - distance..].fill(0);
            }
        });
    }

    /// Rotate pixels forward
    ///
    /// Same direction as [`Strip::shift`], but pixels leaving one end come
    /// back at the other.
    #[allow(clippy::cast_possible_truncation)]
    pub fn rotate(&self, offset: i32) {
        if self.length == 0 {
            return;
        }
        let stride = self.layout().stride();
        let distance = (offset.unsigned_abs() as usize % self.length) * stride;
        self.with_bytes_mut(|bytes| {
            if offset >= 0 {
                bytes.rotate_right(distance);
            } else {
                bytes.rotate_left(distance);
            }
        });
    }
}
