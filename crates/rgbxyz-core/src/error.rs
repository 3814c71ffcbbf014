//! Error types for rgbxyz

use thiserror::Error;

use crate::color::Channel;

/// Result type for rgbxyz operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while deriving a colour space matrix
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// The primaries are linearly dependent in XYZ, so the basis has no inverse
    #[error("Singular matrix: primaries are linearly dependent in XYZ")]
    SingularMatrix,

    /// The white point has zero luminance and cannot normalize the scales
    #[error("Invalid white point ({x}, {y}): luminance must be non-zero")]
    InvalidWhitePoint { x: f64, y: f64 },

    /// A chromaticity coordinate is NaN or infinite
    #[error("Non-finite chromaticity for {channel}: ({x}, {y})")]
    NonFiniteChromaticity { channel: Channel, x: f64, y: f64 },

    /// No built-in colour space with this name
    #[error("Unknown colour space preset: {0}")]
    UnknownPreset(String),

    /// No built-in illuminant with this name
    #[error("Unknown illuminant: {0}")]
    UnknownIlluminant(String),
}
