//! Three-component vectors
//!
//! A `Vec3` holds either an XYZ tristimulus value or one row of a 3x3
//! matrix. Arithmetic follows IEEE-754 semantics: NaN and infinities
//! propagate without special handling.

use std::ops::{Add, Index, IndexMut, Mul, Sub};

use bytemuck::{Pod, Zeroable};

/// An ordered triple of `f64`
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Vec3 {
    pub v: [f64; 3],
}

impl Vec3 {
    /// Create a new vector
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { v: [x, y, z] }
    }

    /// Create a vector with all three components set to `value`
    #[inline]
    pub const fn splat(value: f64) -> Self {
        Self {
            v: [value, value, value],
        }
    }

    #[inline]
    pub const fn x(&self) -> f64 {
        self.v[0]
    }

    /// Luminance when the vector holds an XYZ value
    #[inline]
    pub const fn y(&self) -> f64 {
        self.v[1]
    }

    #[inline]
    pub const fn z(&self) -> f64 {
        self.v[2]
    }

    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        self.v
    }

    /// Sum of elementwise products
    #[inline]
    pub fn dot(&self, other: &Self) -> f64 {
        self.v[0] * other.v[0] + self.v[1] * other.v[1] + self.v[2] * other.v[2]
    }

    /// Multiply every component by `factor`
    #[inline]
    pub fn scale(&self, factor: f64) -> Self {
        Self {
            v: [self.v[0] * factor, self.v[1] * factor, self.v[2] * factor],
        }
    }

    /// True when no component is NaN or infinite
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.v.iter().all(|c| c.is_finite())
    }

    /// Check if approximately equal to another vector
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.v[0] - other.v[0]).abs() < epsilon
            && (self.v[1] - other.v[1]).abs() < epsilon
            && (self.v[2] - other.v[2]).abs() < epsilon
    }
}

/// Free-standing dot product
#[inline]
pub fn dot(a: &Vec3, b: &Vec3) -> f64 {
    a.dot(b)
}

impl From<[f64; 3]> for Vec3 {
    fn from(v: [f64; 3]) -> Self {
        Self { v }
    }
}

impl From<Vec3> for [f64; 3] {
    fn from(vec: Vec3) -> Self {
        vec.v
    }
}

impl Index<usize> for Vec3 {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.v[index]
    }
}

impl IndexMut<usize> for Vec3 {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.v[index]
    }
}

impl Add for Vec3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(
            self.v[0] + rhs.v[0],
            self.v[1] + rhs.v[1],
            self.v[2] + rhs.v[2],
        )
    }
}

impl Sub for Vec3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(
            self.v[0] - rhs.v[0],
            self.v[1] - rhs.v[1],
            self.v[2] - rhs.v[2],
        )
    }
}

impl Mul<f64> for Vec3 {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        self.scale(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dot() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, -5.0, 6.0);
        assert_eq!(a.dot(&b), 12.0);
        assert_eq!(dot(&a, &b), dot(&b, &a));
    }

    #[test]
    fn test_scale() {
        let a = Vec3::new(0.5, -1.0, 2.0);
        assert_eq!(a.scale(2.0), Vec3::new(1.0, -2.0, 4.0));
        assert_eq!(a * 2.0, a.scale(2.0));
    }

    #[test]
    fn test_arithmetic() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(0.1, 0.2, 0.3);
        assert!((a + b).approx_eq(&Vec3::new(1.1, 2.2, 3.3), 1e-12));
        assert!((a - b).approx_eq(&Vec3::new(0.9, 1.8, 2.7), 1e-12));
    }

    #[test]
    fn test_nan_propagates() {
        let a = Vec3::new(f64::NAN, 0.0, 0.0);
        assert!(a.dot(&Vec3::splat(1.0)).is_nan());
        assert!(!a.is_finite());
        assert!(Vec3::splat(1.0).scale(f64::INFINITY).x().is_infinite());
    }

    #[test]
    fn test_array_conversion() {
        let arr = [0.1, 0.2, 0.3];
        let v: Vec3 = arr.into();
        assert_eq!(v.to_array(), arr);
        assert_eq!(v[1], 0.2);
    }
}
