use crate::pixel::Complex;

/// Iteration limit used for the full-size render.
pub const MAX_ITERATIONS: u32 = 100;

/// Squared escape radius. `|z| > 2` is checked as `|z|^2 > 4` to avoid a square root.
const ESCAPE_RADIUS_SQR: f64 = 4.0;

/**
Escape-time for the point `c` ([Wikipedia](https://en.wikipedia.org/wiki/Plotting_algorithms_for_the_Mandelbrot_set#Escape_time_algorithm)).

Iterates `z = z^2 + c` from `z = 0` and returns the number of updates made
before `|z|` exceeded 2, capped at `max_iterations`. A result of
`max_iterations` means the point didn't escape within the limit; it is
treated as inside the set.

The magnitude is checked *before* each update. The first check sees `z = 0`,
so any `max_iterations > 0` gives a result of at least 1, even for points far
outside the escape radius.
*/
pub fn escape_time(c: Complex, max_iterations: u32) -> u32 {
    let mut z = Complex::ZERO;
    let mut iteration_count = 0;

    while iteration_count < max_iterations && z.norm_sqr() <= ESCAPE_RADIUS_SQR {
        z = Complex {
            real: z.real * z.real - z.imaginary * z.imaginary + c.real,
            imaginary: 2.0 * z.real * z.imaginary + c.imaginary,
        };
        iteration_count += 1;
    }

    iteration_count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_never_escapes() {
        assert_eq!(escape_time(Complex::ZERO, MAX_ITERATIONS), MAX_ITERATIONS);
        assert_eq!(escape_time(Complex::ZERO, 10), 10);
    }

    #[test]
    fn outside_radius_escapes_after_first_update() {
        for c in [
            Complex::new(-2.0, -1.0),
            Complex::new(3.0, 0.0),
            Complex::new(0.0, -2.5),
            Complex::new(1e6, 1e6),
        ] {
            assert!(c.norm_sqr() > ESCAPE_RADIUS_SQR);
            assert_eq!(escape_time(c, MAX_ITERATIONS), 1, "{:?}", c);
        }
    }

    #[test]
    fn zero_limit() {
        assert_eq!(escape_time(Complex::new(-2.0, -1.0), 0), 0);
        assert_eq!(escape_time(Complex::ZERO, 0), 0);
    }

    #[test]
    fn known_points() {
        // -1 cycles between -1 and 0.
        assert_eq!(escape_time(Complex::new(-1.0, 0.0), MAX_ITERATIONS), MAX_ITERATIONS);
        // -2 lands on the boundary and stays at 2, which doesn't count as escaping.
        assert_eq!(escape_time(Complex::new(-2.0, 0.0), MAX_ITERATIONS), MAX_ITERATIONS);
        // 1 goes 0, 1, 2, 5.
        assert_eq!(escape_time(Complex::new(1.0, 0.0), MAX_ITERATIONS), 3);
        assert_eq!(escape_time(Complex::new(-1.25, -1.0), 10), 3);
        assert_eq!(escape_time(Complex::new(-0.5, -1.0), 10), 4);
    }

    #[test]
    fn bounded_and_deterministic() {
        let mut real = -2.5;
        while real <= 1.5 {
            let mut imaginary = -1.5;
            while imaginary <= 1.5 {
                let c = Complex::new(real, imaginary);
                let first = escape_time(c, MAX_ITERATIONS);
                assert!(first <= MAX_ITERATIONS);
                assert_eq!(first, escape_time(c, MAX_ITERATIONS));
                imaginary += 0.0625;
            }
            real += 0.0625;
        }
    }
}
