//! RGB to XYZ matrix derivation
//!
//! Builds the matrix `M` with `XYZ = M × RGB` for a colour space given as
//! xy primaries and a white point:
//!
//! 1. Lift each chromaticity to XYZ on the X + Y + Z = 1 plane
//! 2. Place the red, green and blue vectors in the columns of a basis matrix
//! 3. Invert the basis and multiply by the white vector to get per-primary
//!    scales `S`, so that `basis × S = white`
//! 4. Divide `S` by the white luminance so RGB (1, 1, 1) maps to Y = 1
//! 5. Scale each primary and reassemble the columns
//!
//! Every intermediate value is kept in [`Derivation`] so callers can inspect
//! or print it without the computation doing any output.

use log::{debug, trace};

use crate::color::ColourSpace;
use crate::math::{Matrix3x3, Vec3};
use crate::{Error, Result};

/// All intermediate values of one RGB to XYZ derivation
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Derivation {
    /// Input primaries and white point
    pub colour_space: ColourSpace,
    /// Red primary lifted to XYZ
    pub red: Vec3,
    /// Green primary lifted to XYZ
    pub green: Vec3,
    /// Blue primary lifted to XYZ
    pub blue: Vec3,
    /// White point lifted to XYZ
    pub white: Vec3,
    /// Columns are the red, green and blue XYZ vectors
    pub base_matrix: Matrix3x3,
    /// Inverse of `base_matrix`
    pub inverse_matrix: Matrix3x3,
    /// `inverse_matrix × white`, before luminance normalization
    pub raw_scales: Vec3,
    /// Y of the white XYZ vector
    pub white_luminance: f64,
    /// `raw_scales / white_luminance`
    pub scales: Vec3,
    /// Red XYZ vector times `scales[0]`, the first column of `matrix`
    pub scaled_red: Vec3,
    /// Green XYZ vector times `scales[1]`
    pub scaled_green: Vec3,
    /// Blue XYZ vector times `scales[2]`
    pub scaled_blue: Vec3,
    /// The RGB to XYZ matrix
    pub matrix: Matrix3x3,
}

impl Derivation {
    /// Run the derivation for `colour_space`
    ///
    /// # Errors
    ///
    /// - [`Error::NonFiniteChromaticity`] if any coordinate is NaN or infinite
    /// - [`Error::SingularMatrix`] if the primaries are linearly dependent
    /// - [`Error::InvalidWhitePoint`] if the white point has y = 0
    pub fn new(colour_space: &ColourSpace) -> Result<Self> {
        colour_space.validate()?;
        debug!("Deriving RGB to XYZ matrix for {:?}", colour_space);

        let red = colour_space.red.to_xyz();
        let green = colour_space.green.to_xyz();
        let blue = colour_space.blue.to_xyz();
        let white = colour_space.white.to_xyz();

        let base_matrix = Matrix3x3::from_columns(red, green, blue);
        trace!("Base matrix: {:?}", base_matrix.m);

        let inverse_matrix = base_matrix.invert().inspect_err(|_| {
            debug!("Basis matrix is singular, primaries are linearly dependent");
        })?;
        trace!("Inverse matrix: {:?}", inverse_matrix.m);

        let raw_scales = inverse_matrix.multiply_vec(white);

        let white_luminance = white.y();
        if white_luminance == 0.0 {
            return Err(Error::InvalidWhitePoint {
                x: colour_space.white.x,
                y: colour_space.white.y,
            });
        }

        let scales = raw_scales.scale(1.0 / white_luminance);
        trace!("Scales: {:?} -> {:?}", raw_scales.v, scales.v);

        let scaled_red = red.scale(scales[0]);
        let scaled_green = green.scale(scales[1]);
        let scaled_blue = blue.scale(scales[2]);

        let matrix = Matrix3x3::from_columns(scaled_red, scaled_green, scaled_blue);
        debug!("RGB to XYZ matrix: {:?}", matrix.m);

        Ok(Self {
            colour_space: *colour_space,
            red,
            green,
            blue,
            white,
            base_matrix,
            inverse_matrix,
            raw_scales,
            white_luminance,
            scales,
            scaled_red,
            scaled_green,
            scaled_blue,
            matrix,
        })
    }

    /// The XYZ to RGB matrix, the inverse of [`Derivation::matrix`]
    pub fn xyz_to_rgb(&self) -> Result<Matrix3x3> {
        self.matrix.invert()
    }

    /// XYZ of RGB (1, 1, 1): the white point scaled to unit luminance
    pub fn white_xyz(&self) -> Vec3 {
        self.matrix.multiply_vec(Vec3::splat(1.0))
    }
}

/// Derive the RGB to XYZ matrix for `colour_space`
///
/// See [`Derivation::new`] for the error conditions.
pub fn colour_space_to_xyz_matrix(colour_space: &ColourSpace) -> Result<Matrix3x3> {
    Derivation::new(colour_space).map(|d| d.matrix)
}
