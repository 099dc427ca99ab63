use bytemuck::{Pod, Zeroable};

use crate::pixel::Complex;

#[repr(C)]
#[derive(Pod, Zeroable, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Length of the pixel data in a P6 file, excluding the header.
    pub fn byte_len(&self) -> usize {
        self.pixel_count() * 3
    }

    /**
    Map a pixel to the complex plane.

    The image spans `[-2, 1]` on the real axis and `[-1, 1]` on the imaginary
    axis. Row 0 is the top of the image and maps to `-1`, so the picture is
    mirrored vertically compared to the usual mathematical orientation. The
    set is symmetric about the real axis, so this doesn't show.
    */
    pub fn point(&self, x: u32, y: u32) -> Complex {
        Complex::new(
            x as f64 / self.width as f64 * 3.0 - 2.0,
            y as f64 / self.height as f64 * 2.0 - 1.0,
        )
    }
}
