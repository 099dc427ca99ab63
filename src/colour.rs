//! Colouring algorithms.

use crate::pixel::Rgb;

/// Linear colour gradient over escape times.
///
/// Points that reach the iteration limit are drawn black. Every other
/// escape time `n` is placed at `t = n / (max_iterations - 1)` between
/// `from` and `to`, so `n = 0` gives exactly `from` and the largest escaping
/// count gives exactly `to`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Gradient {
    pub from: Rgb,
    pub to: Rgb,
}

impl Gradient {
    pub fn colour(&self, iteration_count: u32, max_iterations: u32) -> Rgb {
        if iteration_count == max_iterations {
            return Rgb::BLACK;
        }

        let t = if max_iterations > 1 {
            iteration_count as f64 / (max_iterations - 1) as f64
        } else {
            0.0
        };

        Rgb {
            r: lerp(t, self.from.r, self.to.r),
            g: lerp(t, self.from.g, self.to.g),
            b: lerp(t, self.from.b, self.to.b),
        }
    }
}

impl Default for Gradient {
    fn default() -> Self {
        Self {
            from: Rgb::new(194, 252, 199),
            to: Rgb::new(140, 10, 196),
        }
    }
}

/// Interpolate from `a` to `b`, truncating towards zero.
fn lerp(t: f64, a: u8, b: u8) -> u8 {
    (t * b as f64 + (1.0 - t) * a as f64) as u8
}
