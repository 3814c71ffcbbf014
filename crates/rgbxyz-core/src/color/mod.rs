//! Colour space definitions
//!
//! This module provides:
//! - CIE xy chromaticity coordinates and their XYZ lift
//! - Standard illuminant white points
//! - RGB colour spaces and named presets

pub mod chromaticity;
pub mod colour_space;
pub mod white_point;

pub use chromaticity::{Chromaticity, primary_to_xyz};
pub use colour_space::{Channel, ColourSpace};
pub use white_point::{D50, D65, WhitePoint};
