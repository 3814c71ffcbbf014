//! Seeded random colour spaces
//!
//! All generators take an explicit seed so failures reproduce.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rgbxyz_core::{Chromaticity, ColourSpace, Matrix3x3};

/// Smallest |det| of the basis matrix accepted by [`arbitrary_space`]
pub const MIN_BASIS_DETERMINANT: f64 = 1e-3;

/// Smallest white point y accepted by [`arbitrary_space`]
pub const MIN_WHITE_Y: f64 = 1e-2;

pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// A display-like colour space: primaries in the usual red, green and blue
/// regions around a daylight white
pub fn display_like_space(rng: &mut impl Rng) -> ColourSpace {
    ColourSpace::new(
        Chromaticity::new(rng.gen_range(0.55..0.75), rng.gen_range(0.25..0.35)),
        Chromaticity::new(rng.gen_range(0.10..0.30), rng.gen_range(0.55..0.85)),
        Chromaticity::new(rng.gen_range(0.10..0.17), rng.gen_range(0.00..0.10)),
        Chromaticity::new(rng.gen_range(0.28..0.38), rng.gen_range(0.28..0.38)),
    )
}

/// Any well-conditioned colour space, including chromaticities outside the
/// spectral locus and outside [0, 1]
pub fn arbitrary_space(rng: &mut impl Rng) -> ColourSpace {
    loop {
        let mut point = || Chromaticity::new(rng.gen_range(-0.2..1.2), rng.gen_range(-0.2..1.2));
        let space = ColourSpace::new(point(), point(), point(), point());

        if space.white.y.abs() < MIN_WHITE_Y {
            continue;
        }

        let basis = Matrix3x3::from_columns(
            space.red.to_xyz(),
            space.green.to_xyz(),
            space.blue.to_xyz(),
        );
        if basis.determinant().abs() >= MIN_BASIS_DETERMINANT {
            return space;
        }
    }
}

/// A colour space whose blue primary lies on the line through red and green
///
/// Rounding in the interpolation usually leaves the basis a hair away from
/// singular, so inversion may or may not hit an exact-zero pivot.
pub fn collinear_space(rng: &mut impl Rng) -> ColourSpace {
    let red = Chromaticity::new(rng.gen_range(0.5..0.8), rng.gen_range(0.2..0.4));
    let green = Chromaticity::new(rng.gen_range(0.1..0.3), rng.gen_range(0.5..0.8));
    let t = f64::from(rng.gen_range(1u8..8)) / 8.0;
    let blue = Chromaticity::new(
        red.x + t * (green.x - red.x),
        red.y + t * (green.y - red.y),
    );
    ColourSpace::new(red, green, blue, Chromaticity::new(0.3127, 0.3290))
}
