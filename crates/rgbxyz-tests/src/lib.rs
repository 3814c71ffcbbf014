//! # rgbxyz-tests
//!
//! Test support for rgbxyz:
//! - Published matrices for the built-in colour spaces
//! - Seeded random colour space generators
//! - Error statistics over batches of derivations
//!
//! ## Test Categories
//!
//! 1. **Worked examples**: presets against published matrices
//! 2. **Properties**: round-trip, luminance and white reconstruction on
//!    random colour spaces
//! 3. **Degenerate input**: singular bases, zero-luminance white points
//! 4. **JSON output**: serialized derivations

pub mod generate;
pub mod reference;

use rgbxyz_core::{Derivation, Matrix3x3, Vec3};
use serde::Serialize;

/// Summary of elementwise errors across many matrices
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct ErrorStats {
    pub count: usize,
    pub max: f64,
    pub mean: f64,
}

impl ErrorStats {
    pub fn from_errors(errors: &[f64]) -> Self {
        if errors.is_empty() {
            return Self::default();
        }
        Self {
            count: errors.len(),
            max: errors.iter().copied().fold(0.0, f64::max),
            mean: errors.iter().sum::<f64>() / errors.len() as f64,
        }
    }
}

/// Worst deviation of `inverse × base` from the identity
pub fn round_trip_error(derivation: &Derivation) -> f64 {
    derivation
        .inverse_matrix
        .multiply(&derivation.base_matrix)
        .max_abs_diff(&Matrix3x3::identity())
}

/// Deviation of Y of `M × (1, 1, 1)` from one
pub fn luminance_error(derivation: &Derivation) -> f64 {
    (derivation.matrix.multiply_vec(Vec3::splat(1.0)).y() - 1.0).abs()
}

/// Worst deviation of the summed scaled primaries from the normalized white
pub fn white_reconstruction_error(derivation: &Derivation) -> f64 {
    let sum = derivation.scaled_red + derivation.scaled_green + derivation.scaled_blue;
    let target = derivation.white.scale(1.0 / derivation.white_luminance);
    let diff = sum - target;
    diff.v.iter().map(|d| d.abs()).fold(0.0, f64::max)
}
