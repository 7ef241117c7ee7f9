//! Escape-time evaluation of the quadratic recurrence `z -> z^2 + c`.

use num_complex::Complex;

use crate::point::Point;

/**
Iterate `z_{n+1} = z_n^2 + c` from `z_0 = 0` for at most `steps` iterations.

Returns `threshold` exactly as soon as `|z|` exceeds it, so escaped points
saturate to a single value. A point that survives every iteration returns its
final `|z|` instead, which is at most `threshold`.
*/
pub fn escape_magnitude(c: Complex<f64>, steps: u32, threshold: f64) -> f64 {
    let mut z = Complex::new(0.0, 0.0);
    for _ in 0..steps {
        z = z * z + c;
        if z.norm() > threshold {
            return threshold;
        }
    }
    z.norm()
}

/// [`escape_magnitude`] for a world-space point, with `x` as the real part.
pub fn escape_magnitude_at(point: Point<f64>, steps: u32, threshold: f64) -> f64 {
    escape_magnitude(Complex::new(point.x, point.y), steps, threshold)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_never_escapes() {
        for steps in [1, 10, 500] {
            assert_eq!(escape_magnitude(Complex::new(0.0, 0.0), steps, 1000.0), 0.0);
        }
    }

    #[test]
    fn test_points_outside_radius_two_saturate() {
        let outside = [
            Complex::new(-2.5, -1.5),
            Complex::new(2.1, 0.0),
            Complex::new(0.0, -3.0),
            Complex::new(1.5, 1.5),
        ];
        for c in outside {
            assert_eq!(escape_magnitude(c, 50, 1000.0), 1000.0, "c = {c}");
        }
    }

    #[test]
    fn test_zero_steps_returns_zero() {
        assert_eq!(escape_magnitude(Complex::new(5.0, 5.0), 0, 1000.0), 0.0);
    }

    #[test]
    fn test_non_positive_threshold_escapes_on_first_nonzero_iterate() {
        assert_eq!(escape_magnitude(Complex::new(0.1, 0.0), 100, 0.0), 0.0);
        assert_eq!(escape_magnitude(Complex::new(0.1, 0.0), 100, -1.0), -1.0);
        // z stays at zero, so nothing escapes even with a zero threshold
        assert_eq!(escape_magnitude(Complex::new(0.0, 0.0), 100, 0.0), 0.0);
    }

    #[test]
    fn test_bounded_point_returns_final_magnitude() {
        // c = -1 cycles 0 -> -1 -> 0 -> -1
        assert_eq!(escape_magnitude(Complex::new(-1.0, 0.0), 3, 1000.0), 1.0);
        assert_eq!(escape_magnitude(Complex::new(-1.0, 0.0), 4, 1000.0), 0.0);
    }

    #[test]
    fn test_point_wrapper_uses_x_as_real_part() {
        assert_eq!(
            escape_magnitude_at(Point::new(-2.5, -1.5), 50, 1000.0),
            escape_magnitude(Complex::new(-2.5, -1.5), 50, 1000.0)
        );
    }
}
