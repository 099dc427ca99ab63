use bytemuck::{Pod, Zeroable};

#[repr(C)]
#[derive(Pod, Zeroable, Clone, Copy, Debug, PartialEq)]
pub struct Complex {
    pub real: f64,
    pub imaginary: f64,
}

impl Complex {
    pub const ZERO: Self = Complex {
        real: 0.0,
        imaginary: 0.0,
    };

    pub fn new(real: f64, imaginary: f64) -> Self {
        Self { real, imaginary }
    }

    /// Squared magnitude. Compared against `4.0` instead of taking a square root.
    pub fn norm_sqr(self) -> f64 {
        self.real * self.real + self.imaginary * self.imaginary
    }
}

/// One output pixel, laid out exactly as it appears in a P6 pixel stream.
#[repr(C)]
#[derive(Pod, Zeroable, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Rgb { r: 0, g: 0, b: 0 };

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_rows_cast_to_packed_bytes() {
        let row = [Rgb::new(1, 2, 3), Rgb::new(4, 5, 6)];
        let bytes: &[u8] = bytemuck::cast_slice(&row);
        assert_eq!(bytes, &[1, 2, 3, 4, 5, 6]);
        assert_eq!(std::mem::size_of::<Rgb>(), 3);
    }

    #[test]
    fn norm_sqr() {
        assert_eq!(Complex::ZERO.norm_sqr(), 0.0);
        assert_eq!(Complex::new(3.0, -4.0).norm_sqr(), 25.0);
    }
}
