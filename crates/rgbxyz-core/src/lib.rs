//! # rgbxyz - RGB to XYZ matrices from chromaticity primaries
//!
//! Derives the 3x3 matrix that maps linear RGB of a colour space into CIE
//! XYZ, given the xy chromaticities of its red, green and blue primaries and
//! its white point. `XYZ = M × RGB`.
//!
//! ## Quick Start
//!
//! ```
//! use rgbxyz_core::{Chromaticity, ColourSpace, colour_space_to_xyz_matrix};
//!
//! // sRGB primaries with a D65 white point
//! let srgb = ColourSpace::new(
//!     Chromaticity::new(0.64, 0.33),
//!     Chromaticity::new(0.30, 0.60),
//!     Chromaticity::new(0.15, 0.06),
//!     Chromaticity::new(0.3127, 0.3290),
//! );
//!
//! let m = colour_space_to_xyz_matrix(&srgb).unwrap();
//! assert!((m[0][0] - 0.4124).abs() < 1e-4);
//! assert!((m[1][1] - 0.7152).abs() < 1e-4);
//! ```
//!
//! Intermediate values (XYZ basis vectors, basis matrix and inverse, scale
//! vector, scaled primaries) are available through [`Derivation`], and
//! [`Report`] renders them as a step-by-step explanation.
//!
//! ## Limitations
//!
//! - Singularity is detected with an exact-zero pivot test. Nearly
//!   degenerate primaries produce a finite but ill-conditioned matrix.
//! - No chromatic adaptation: the matrix maps to XYZ relative to the colour
//!   space's own white point.

pub mod color;
pub mod derive;
pub mod error;
pub mod math;
pub mod report;

pub use color::{Channel, Chromaticity, ColourSpace, WhitePoint, primary_to_xyz};
pub use derive::{Derivation, colour_space_to_xyz_matrix};
pub use error::{Error, Result};
pub use math::{Matrix3x3, Vec3, dot};
pub use report::{Report, ReportOptions, format_matrix};

/// Version of rgbxyz
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
