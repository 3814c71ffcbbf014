//! CIE 1931 xy chromaticity coordinates

use crate::math::Vec3;

/// A point in the CIE 1931 xy chromaticity plane
///
/// xy is the projection of XYZ onto the X + Y + Z = 1 plane. Coordinates
/// outside [0, 1] are accepted; they produce out-of-gamut XYZ vectors.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chromaticity {
    pub x: f64,
    pub y: f64,
}

impl Chromaticity {
    /// Create a new chromaticity
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Lift to an XYZ basis vector on the X + Y + Z = 1 plane
    ///
    /// `(x, y) -> (x, y, 1 - x - y)`
    #[inline]
    pub fn to_xyz(&self) -> Vec3 {
        Vec3::new(self.x, self.y, 1.0 - self.x - self.y)
    }

    /// Project an XYZ value back onto the xy plane
    ///
    /// Returns the origin when X + Y + Z is zero.
    #[inline]
    pub fn from_xyz(xyz: Vec3) -> Self {
        let sum = xyz.x() + xyz.y() + xyz.z();
        if sum != 0.0 {
            Self::new(xyz.x() / sum, xyz.y() / sum)
        } else {
            Self::new(0.0, 0.0)
        }
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.x - other.x).abs() < epsilon && (self.y - other.y).abs() < epsilon
    }
}

impl From<(f64, f64)> for Chromaticity {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Free-standing form of [`Chromaticity::to_xyz`]
#[inline]
pub fn primary_to_xyz(primary: &Chromaticity) -> Vec3 {
    primary.to_xyz()
}
