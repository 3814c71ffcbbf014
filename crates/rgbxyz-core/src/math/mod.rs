//! Fixed-size linear algebra for colour space derivation
//!
//! - `Vec3` for XYZ values and matrix rows
//! - `Matrix3x3` with Gauss-Jordan inversion

pub mod matrix;
pub mod vector;

pub use matrix::Matrix3x3;
pub use vector::{Vec3, dot};
