//! 3x3 Matrix operations for RGB↔XYZ transforms
//!
//! Matrices are stored row-major: `m[row][col]`. A colour space matrix keeps
//! one primary per column, so `XYZ = M × RGB`.

use std::ops::{Index, IndexMut, Mul};

use bytemuck::{Pod, Zeroable};

use crate::math::Vec3;
use crate::{Error, Result};

/// A 3x3 matrix for colour space transformations
///
/// Stored in row-major order: m[row][col]
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Matrix3x3 {
    /// Matrix elements in row-major order
    pub m: [[f64; 3]; 3],
}

impl Matrix3x3 {
    /// Create a new matrix from row-major elements
    #[inline]
    pub const fn new(m: [[f64; 3]; 3]) -> Self {
        Self { m }
    }

    /// Create an identity matrix
    #[inline]
    pub const fn identity() -> Self {
        Self {
            m: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
        }
    }

    /// Create a zero matrix
    #[inline]
    pub const fn zero() -> Self {
        Self {
            m: [[0.0, 0.0, 0.0], [0.0, 0.0, 0.0], [0.0, 0.0, 0.0]],
        }
    }

    /// Create a matrix whose rows are the given vectors
    #[inline]
    pub const fn from_rows(r0: Vec3, r1: Vec3, r2: Vec3) -> Self {
        Self {
            m: [r0.v, r1.v, r2.v],
        }
    }

    /// Create a matrix whose columns are the given vectors
    ///
    /// Row i holds `(c0[i], c1[i], c2[i])`.
    #[inline]
    pub const fn from_columns(c0: Vec3, c1: Vec3, c2: Vec3) -> Self {
        Self {
            m: [
                [c0.v[0], c1.v[0], c2.v[0]],
                [c0.v[1], c1.v[1], c2.v[1]],
                [c0.v[2], c1.v[2], c2.v[2]],
            ],
        }
    }

    #[inline]
    pub const fn row(&self, index: usize) -> Vec3 {
        Vec3 { v: self.m[index] }
    }

    #[inline]
    pub const fn column(&self, index: usize) -> Vec3 {
        Vec3::new(self.m[0][index], self.m[1][index], self.m[2][index])
    }

    /// Multiply this matrix by a vector
    ///
    /// Row i of the result is `dot(row(i), v)`.
    #[inline]
    pub fn multiply_vec(&self, v: Vec3) -> Vec3 {
        Vec3::new(self.row(0).dot(&v), self.row(1).dot(&v), self.row(2).dot(&v))
    }

    /// Multiply this matrix by another matrix
    ///
    /// Returns self × other
    #[inline]
    pub fn multiply(&self, other: &Self) -> Self {
        let mut result = Self::zero();
        for i in 0..3 {
            for j in 0..3 {
                result.m[i][j] = self.m[i][0] * other.m[0][j]
                    + self.m[i][1] * other.m[1][j]
                    + self.m[i][2] * other.m[2][j];
            }
        }
        result
    }

    /// Transpose this matrix
    #[inline]
    pub fn transpose(&self) -> Self {
        Self::from_columns(self.row(0), self.row(1), self.row(2))
    }

    /// Calculate the determinant
    #[inline]
    pub fn determinant(&self) -> f64 {
        let m = &self.m;
        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }

    /// Calculate the inverse with Gauss-Jordan elimination
    ///
    /// Uses partial pivoting: for each column the remaining row with the
    /// largest absolute value becomes the pivot row. Returns `None` when a
    /// pivot is exactly zero. There is no tolerance, so a nearly singular
    /// matrix yields a finite but poorly conditioned inverse.
    pub fn inverse(&self) -> Option<Self> {
        let mut m = *self;
        let mut res = Self::identity();

        for p in 0..3 {
            // First maximum wins on ties
            let mut max_row = p;
            let mut max_v = m.m[p][p].abs();
            for r in (p + 1)..3 {
                let v = m.m[r][p].abs();
                if v > max_v {
                    max_row = r;
                    max_v = v;
                }
            }

            if max_row != p {
                m.m.swap(p, max_row);
                res.m.swap(p, max_row);
            }

            let pivot = m.m[p][p];
            if pivot == 0.0 {
                return None;
            }

            let scale = 1.0 / pivot;
            for c in 0..3 {
                m.m[p][c] *= scale;
                res.m[p][c] *= scale;
            }

            for r in 0..3 {
                if r == p {
                    continue;
                }

                let v = m.m[r][p];
                for c in 0..3 {
                    m.m[r][c] -= v * m.m[p][c];
                    res.m[r][c] -= v * res.m[p][c];
                }
            }
        }

        Some(res)
    }

    /// Calculate the inverse, reporting a singular matrix as an error
    #[inline]
    pub fn invert(&self) -> Result<Self> {
        self.inverse().ok_or(Error::SingularMatrix)
    }

    /// Row-major elements as a flat array
    #[inline]
    pub fn to_flat(&self) -> [f64; 9] {
        bytemuck::cast(self.m)
    }

    /// Row-major elements as a flat array reference
    #[inline]
    pub fn as_flat(&self) -> &[f64; 9] {
        bytemuck::cast_ref(&self.m)
    }

    /// Largest absolute elementwise difference
    pub fn max_abs_diff(&self, other: &Self) -> f64 {
        self.as_flat()
            .iter()
            .zip(other.as_flat())
            .map(|(a, b)| (a - b).abs())
            .fold(0.0, f64::max)
    }

    /// Check if this matrix is approximately equal to another
    ///
    /// NaN elements never compare equal.
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.as_flat()
            .iter()
            .zip(other.as_flat())
            .all(|(a, b)| (a - b).abs() <= epsilon)
    }

    /// Check if this is approximately an identity matrix
    pub fn is_identity(&self, epsilon: f64) -> bool {
        self.approx_eq(&Self::identity(), epsilon)
    }
}

impl Default for Matrix3x3 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Index<usize> for Matrix3x3 {
    type Output = [f64; 3];

    fn index(&self, row: usize) -> &Self::Output {
        &self.m[row]
    }
}

impl IndexMut<usize> for Matrix3x3 {
    fn index_mut(&mut self, row: usize) -> &mut Self::Output {
        &mut self.m[row]
    }
}

impl Mul for Matrix3x3 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}

impl Mul<Vec3> for Matrix3x3 {
    type Output = Vec3;

    fn mul(self, rhs: Vec3) -> Self::Output {
        self.multiply_vec(rhs)
    }
}

impl Mul<&Vec3> for Matrix3x3 {
    type Output = Vec3;

    fn mul(self, rhs: &Vec3) -> Self::Output {
        self.multiply_vec(*rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_identity() {
        let id = Matrix3x3::identity();
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert!(id.multiply_vec(v).approx_eq(&v, EPSILON));
    }

    #[test]
    fn test_rows_and_columns() {
        let a = Matrix3x3::new([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
        assert_eq!(a.row(1), Vec3::new(4.0, 5.0, 6.0));
        assert_eq!(a.column(2), Vec3::new(3.0, 6.0, 9.0));

        let cols = Matrix3x3::from_columns(a.column(0), a.column(1), a.column(2));
        assert_eq!(cols, a);
        let rows = Matrix3x3::from_rows(a.row(0), a.row(1), a.row(2));
        assert_eq!(rows, a);
    }

    #[test]
    fn test_multiply_matrices() {
        let a = Matrix3x3::new([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
        let id = Matrix3x3::identity();

        assert!(a.multiply(&id).approx_eq(&a, EPSILON));
        assert!(id.multiply(&a).approx_eq(&a, EPSILON));
    }

    #[test]
    fn test_transpose() {
        let a = Matrix3x3::new([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
        let expected = Matrix3x3::new([[1.0, 4.0, 7.0], [2.0, 5.0, 8.0], [3.0, 6.0, 9.0]]);
        assert_eq!(a.transpose(), expected);
        assert_eq!(a.transpose().transpose(), a);
    }

    #[test]
    fn test_determinant() {
        assert!((Matrix3x3::identity().determinant() - 1.0).abs() < EPSILON);

        let a = Matrix3x3::new([[1.0, 2.0, 3.0], [0.0, 1.0, 4.0], [5.0, 6.0, 0.0]]);
        assert!((a.determinant() - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_inverse() {
        let id = Matrix3x3::identity();
        assert_eq!(id.inverse(), Some(id));

        // A × A⁻¹ = I
        let a = Matrix3x3::new([[1.0, 2.0, 3.0], [0.0, 1.0, 4.0], [5.0, 6.0, 0.0]]);
        let a_inv = a.inverse().unwrap();
        assert!(a.multiply(&a_inv).is_identity(1e-9));
        assert!(a_inv.multiply(&a).is_identity(1e-9));

        let expected = Matrix3x3::new([[-24.0, 18.0, 5.0], [20.0, -15.0, -4.0], [-5.0, 4.0, 1.0]]);
        assert!(a_inv.approx_eq(&expected, 1e-9));
    }

    #[test]
    fn test_inverse_needs_row_swap() {
        // Zero in the top-left forces a pivot swap
        let a = Matrix3x3::new([[0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 2.0]]);
        let a_inv = a.inverse().unwrap();
        let expected = Matrix3x3::new([[0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 0.5]]);
        assert!(a_inv.approx_eq(&expected, EPSILON));
    }

    #[test]
    fn test_inverse_swap_after_elimination() {
        // Column 1 only has a usable pivot once column 0 has been eliminated
        let a = Matrix3x3::new([[1.0, 1.0, 0.0], [1.0, 1.0, 1.0], [0.0, 1.0, 0.0]]);
        let a_inv = a.inverse().unwrap();
        assert!(a.multiply(&a_inv).is_identity(1e-12));
    }

    #[test]
    fn test_inverse_does_not_mutate_input() {
        let a = Matrix3x3::new([[2.0, 0.0, 1.0], [1.0, 3.0, 0.0], [0.0, 1.0, 4.0]]);
        let copy = a;
        let _ = a.inverse();
        assert_eq!(a, copy);
    }

    #[test]
    fn test_singular_matrix() {
        // Row 2 = 2 × row 1, eliminated to an exact zero pivot
        let singular = Matrix3x3::new([[1.0, 2.0, 3.0], [2.0, 4.0, 6.0], [0.0, 0.0, 1.0]]);
        assert!(singular.inverse().is_none());
        assert_eq!(singular.invert(), Err(Error::SingularMatrix));

        assert!(Matrix3x3::zero().inverse().is_none());
    }

    #[test]
    fn test_rounded_singular_matrix_is_not_detected() {
        // Row 3 = row 1 + row 2, but rounding leaves a pivot near 1e-16
        let singular = Matrix3x3::new([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [5.0, 7.0, 9.0]]);
        assert_eq!(singular.determinant(), 0.0);

        let inverse = singular
            .inverse()
            .expect("only exact-zero pivots are reported as singular");
        let finite = inverse.as_flat().iter().all(|v| v.is_finite());
        let largest = inverse.as_flat().iter().fold(0.0_f64, |m, v| m.max(v.abs()));
        assert!(!finite || largest > 1e12, "inverse {:?}", inverse.m);
    }

    #[test]
    fn test_flat_view() {
        let a = Matrix3x3::new([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
        assert_eq!(a.to_flat(), [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
        assert_eq!(a.as_flat()[5], 6.0);
    }

    #[test]
    fn test_max_abs_diff() {
        let a = Matrix3x3::identity();
        let mut b = a;
        b[2][1] = -0.25;
        assert_eq!(a.max_abs_diff(&b), 0.25);
        assert!(!a.approx_eq(&b, 0.1));
        assert!(a.approx_eq(&b, 0.25));
    }

    #[test]
    fn test_operator_overloads() {
        let a = Matrix3x3::identity();
        let c = a * a;
        assert!(c.is_identity(EPSILON));

        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(a * v, v);
        assert_eq!(a * &v, v);
    }
}
