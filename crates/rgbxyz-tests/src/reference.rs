//! Published RGB to XYZ matrices
//!
//! Values from the defining standards, used to check derived matrices. Some
//! standards round their white point differently from the 4-digit xy values
//! of the presets, so each case carries its own tolerance.

use rgbxyz_core::color::colour_space::{
    ACES_AP0, ACES_AP1, ADOBE_RGB, BT2020, DISPLAY_P3, PROPHOTO_RGB, SRGB,
};
use rgbxyz_core::{ColourSpace, Matrix3x3};

/// A colour space with its published matrices
#[derive(Debug, Clone, Copy)]
pub struct ReferenceCase {
    pub name: &'static str,
    pub space: ColourSpace,
    pub to_xyz: Matrix3x3,
    pub from_xyz: Option<Matrix3x3>,
    /// Largest accepted elementwise difference
    pub tolerance: f64,
}

/// sRGB to XYZ matrix (D65 white point)
///
/// From IEC 61966-2-1:1999
pub const SRGB_TO_XYZ: Matrix3x3 = Matrix3x3::new([
    [0.4124564, 0.3575761, 0.1804375],
    [0.2126729, 0.7151522, 0.0721750],
    [0.0193339, 0.1191920, 0.9503041],
]);

/// XYZ to sRGB matrix (D65 white point)
pub const XYZ_TO_SRGB: Matrix3x3 = Matrix3x3::new([
    [3.2404542, -1.5371385, -0.4985314],
    [-0.9692660, 1.8760108, 0.0415560],
    [0.0556434, -0.2040259, 1.0572252],
]);

/// sRGB to XYZ at the 4 decimals IEC 61966-2-1 prints
pub const SRGB_TO_XYZ_4DP: Matrix3x3 = Matrix3x3::new([
    [0.4124, 0.3576, 0.1805],
    [0.2126, 0.7152, 0.0722],
    [0.0193, 0.1192, 0.9505],
]);

/// Display P3 to XYZ matrix (D65 white point)
pub const DISPLAY_P3_TO_XYZ: Matrix3x3 = Matrix3x3::new([
    [0.4865709, 0.2656677, 0.1982173],
    [0.2289746, 0.6917385, 0.0792869],
    [0.0000000, 0.0451134, 1.0439444],
]);

/// XYZ to Display P3 matrix (D65 white point)
pub const XYZ_TO_DISPLAY_P3: Matrix3x3 = Matrix3x3::new([
    [2.4934969, -0.9313836, -0.4027108],
    [-0.8294890, 1.7626641, 0.0236247],
    [0.0358458, -0.0761724, 0.9568845],
]);

/// Adobe RGB (1998) to XYZ matrix (D65 white point)
pub const ADOBE_RGB_TO_XYZ: Matrix3x3 = Matrix3x3::new([
    [0.5767309, 0.1855540, 0.1881852],
    [0.2973769, 0.6273491, 0.0752741],
    [0.0270343, 0.0706872, 0.9911085],
]);

/// BT.2020 to XYZ matrix (D65 white point)
pub const BT2020_TO_XYZ: Matrix3x3 = Matrix3x3::new([
    [0.6369580, 0.1446169, 0.1688810],
    [0.2627002, 0.6779981, 0.0593017],
    [0.0000000, 0.0280727, 1.0609851],
]);

/// XYZ to BT.2020 matrix (D65 white point)
pub const XYZ_TO_BT2020: Matrix3x3 = Matrix3x3::new([
    [1.7166512, -0.3556708, -0.2533663],
    [-0.6666844, 1.6164812, 0.0157685],
    [0.0176399, -0.0427706, 0.9421031],
]);

/// ProPhoto RGB to XYZ matrix (D50 white point)
pub const PROPHOTO_TO_XYZ_D50: Matrix3x3 = Matrix3x3::new([
    [0.7976749, 0.1351917, 0.0313534],
    [0.2880402, 0.7118741, 0.0000857],
    [0.0000000, 0.0000000, 0.8252100],
]);

/// ACES 2065-1 (AP0) to XYZ matrix, from SMPTE ST 2065-1
pub const ACES_AP0_TO_XYZ: Matrix3x3 = Matrix3x3::new([
    [0.9525523959, 0.0000000000, 0.0000936786],
    [0.3439664498, 0.7281660966, -0.0721325464],
    [0.0000000000, 0.0000000000, 1.0088251844],
]);

/// ACEScg (AP1) to XYZ matrix, from Academy S-2014-004
pub const ACES_AP1_TO_XYZ: Matrix3x3 = Matrix3x3::new([
    [0.6624541811, 0.1340042065, 0.1561876870],
    [0.2722287168, 0.6740817658, 0.0536895174],
    [-0.0055746495, 0.0040607335, 1.0103391003],
]);

/// Every reference case
pub fn cases() -> Vec<ReferenceCase> {
    vec![
        ReferenceCase {
            name: "sRGB (IEC 61966-2-1, 4 decimals)",
            space: SRGB,
            to_xyz: SRGB_TO_XYZ_4DP,
            from_xyz: None,
            tolerance: 5e-5,
        },
        ReferenceCase {
            // The 7-digit IEC values use a slightly different D65
            name: "sRGB (IEC 61966-2-1, 7 digits)",
            space: SRGB,
            to_xyz: SRGB_TO_XYZ,
            from_xyz: Some(XYZ_TO_SRGB),
            tolerance: 1e-3,
        },
        ReferenceCase {
            name: "Display P3",
            space: DISPLAY_P3,
            to_xyz: DISPLAY_P3_TO_XYZ,
            from_xyz: Some(XYZ_TO_DISPLAY_P3),
            tolerance: 1e-6,
        },
        ReferenceCase {
            name: "Adobe RGB (1998)",
            space: ADOBE_RGB,
            to_xyz: ADOBE_RGB_TO_XYZ,
            from_xyz: None,
            tolerance: 5e-4,
        },
        ReferenceCase {
            name: "BT.2020",
            space: BT2020,
            to_xyz: BT2020_TO_XYZ,
            from_xyz: Some(XYZ_TO_BT2020),
            tolerance: 1e-6,
        },
        ReferenceCase {
            name: "ProPhoto RGB",
            space: PROPHOTO_RGB,
            to_xyz: PROPHOTO_TO_XYZ_D50,
            from_xyz: None,
            tolerance: 5e-4,
        },
        ReferenceCase {
            name: "ACES AP0",
            space: ACES_AP0,
            to_xyz: ACES_AP0_TO_XYZ,
            from_xyz: None,
            tolerance: 1e-6,
        },
        ReferenceCase {
            name: "ACEScg",
            space: ACES_AP1,
            to_xyz: ACES_AP1_TO_XYZ,
            from_xyz: None,
            tolerance: 1e-6,
        },
    ]
}
