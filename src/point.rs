//! Two-dimensional points over a numeric field.

use std::ops::{Add, Mul, Neg, Sub};

use num_traits::Num;

/// A point (or vector) in the plane. Works for integers, reals and complex numbers alike.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point<T> {
    pub x: T,
    pub y: T,
}

impl<T: Num + Copy> Point<T> {
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero())
    }

    pub fn add(self, other: Self) -> Self {
        self + other
    }

    pub fn sub(self, other: Self) -> Self {
        self - other
    }

    pub fn scale(self, k: T) -> Self {
        Self::new(self.x * k, self.y * k)
    }

    /// `zero - self`.
    pub fn negate(self) -> Self {
        Self::zero() - self
    }

    /// Multiplies each axis by the matching axis of `factors`.
    pub fn scale_components(self, factors: Self) -> Self {
        Self::new(self.x * factors.x, self.y * factors.y)
    }

    pub fn halved(self) -> Self {
        let two = T::one() + T::one();
        Self::new(self.x / two, self.y / two)
    }
}

impl<T: Num + Copy> Add for Point<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<T: Num + Copy> Sub for Point<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<T: Num + Copy> Mul<T> for Point<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        self.scale(rhs)
    }
}

impl<T: Num + Copy> Neg for Point<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Point::zero() - self
    }
}

#[cfg(test)]
mod tests {
    use num_complex::Complex;

    use super::*;

    #[test]
    fn test_integer_arithmetic() {
        let a = Point::new(3, -4);
        let b = Point::new(1, 2);

        assert_eq!(a + b, Point::new(4, -2));
        assert_eq!(a - b, Point::new(2, -6));
        assert_eq!(a * 3, Point::new(9, -12));
        assert_eq!(-a, Point::new(-3, 4));
    }

    #[test]
    fn test_negate_is_zero_minus_point() {
        let p = Point::new(0.25, -7.5);
        assert_eq!(p.negate(), Point::zero().sub(p));
    }

    #[test]
    fn test_scale_components_is_per_axis() {
        let size = Point::new(3.5, 3.0);
        assert_eq!(
            size.scale_components(Point::new(0.5, 0.25)),
            Point::new(1.75, 0.75)
        );
    }

    #[test]
    fn test_halved_real() {
        assert_eq!(Point::new(2.0, -3.0).halved(), Point::new(1.0, -1.5));
    }

    #[test]
    fn test_complex_field() {
        let i = Complex::new(0.0, 1.0);
        let p = Point::new(Complex::new(1.0, 0.0), i);

        assert_eq!(p * i, Point::new(i, Complex::new(-1.0, 0.0)));
        assert_eq!(p.halved(), Point::new(Complex::new(0.5, 0.0), Complex::new(0.0, 0.5)));
    }
}
