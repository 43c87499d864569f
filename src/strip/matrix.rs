use super::Strip;

impl<const MAX_BYTES: usize> Strip<'_, MAX_BYTES> {
    /// Sets the number of pixels in a matrix row
    ///
    /// Capped at the strip length, 0 disables matrix addressing.
    pub fn set_matrix_width(&mut self, width: usize) {
        self.matrix_width = width.min(self.length);
    }

    pub const fn matrix_width(&self) -> usize {
        self.matrix_width
    }

    /// Number of complete rows in the matrix
    pub const fn matrix_rows(&self) -> usize {
        if self.matrix_width == 0 {
            return 0;
        }
        self.length / self.matrix_width
    }

    /// Set a pixel of a matrix shaped strip
    ///
    /// Ignored when the strip is not a matrix or `(x, y)` is outside it.
    pub fn set_matrix_color(&self, x: usize, y: usize, rgb: u32) {
        if self.matrix_width == 0 {
            return;
        }
        if x >= self.matrix_width || y >= self.matrix_rows() {
            return;
        }
        self.set_pixel_color(x + y * self.matrix_width, rgb);
    }
}
