//! CIE Standard Illuminant White Points
//!
//! White points are given as CIE 1931 xy chromaticities. The builder lifts
//! them to XYZ and normalizes the result so the white has luminance Y = 1.
//!
//! Values are from CIE 15:2004 unless noted.

use crate::color::Chromaticity;
use crate::{Error, Result};

/// A named white point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WhitePoint {
    /// Name of the illuminant
    pub name: &'static str,
    /// CIE xy chromaticity
    pub chromaticity: Chromaticity,
}

impl WhitePoint {
    /// Create a new white point
    pub const fn new(name: &'static str, x: f64, y: f64) -> Self {
        Self {
            name,
            chromaticity: Chromaticity::new(x, y),
        }
    }

    /// Look up a standard white point by name, case-insensitively
    pub fn from_name(name: &str) -> Result<Self> {
        from_name(name).ok_or_else(|| Error::UnknownIlluminant(name.to_string()))
    }
}

// ============================================================================
// Standard CIE Illuminants
// ============================================================================

/// CIE Standard Illuminant D50 (Horizon Light)
///
/// Correlated Color Temperature: ~5003K
/// ICC profile connection space white, ProPhoto RGB.
pub const D50: WhitePoint = WhitePoint::new("D50", 0.3457, 0.3585);

/// CIE Standard Illuminant D55 (Mid-morning/Mid-afternoon Daylight)
pub const D55: WhitePoint = WhitePoint::new("D55", 0.3324, 0.3474);

/// ACES white point, approximately D60
///
/// From SMPTE ST 2065-1.
pub const D60: WhitePoint = WhitePoint::new("D60", 0.32168, 0.33767);

/// CIE Standard Illuminant D65 (Noon Daylight)
///
/// Correlated Color Temperature: ~6504K
/// Standard white point for sRGB, Adobe RGB, and most display color spaces.
pub const D65: WhitePoint = WhitePoint::new("D65", 0.3127, 0.3290);

/// CIE Standard Illuminant D75 (North Sky Daylight)
pub const D75: WhitePoint = WhitePoint::new("D75", 0.2990, 0.3149);

/// DCI-P3 theatrical white point
///
/// Slightly greenish compared to D65.
pub const DCI_P3: WhitePoint = WhitePoint::new("DCI-P3", 0.314, 0.351);

/// CIE Standard Illuminant A (Incandescent)
pub const A: WhitePoint = WhitePoint::new("A", 0.44757, 0.40745);

/// CIE Standard Illuminant E (Equal Energy)
pub const E: WhitePoint = WhitePoint::new("E", 1.0 / 3.0, 1.0 / 3.0);

/// CIE Standard Illuminant F2 (Cool White Fluorescent)
pub const F2: WhitePoint = WhitePoint::new("F2", 0.37208, 0.37529);

/// CIE Standard Illuminant F7 (Broadband Daylight Fluorescent)
pub const F7: WhitePoint = WhitePoint::new("F7", 0.31292, 0.32933);

/// CIE Standard Illuminant F11 (Narrow Band White Fluorescent)
pub const F11: WhitePoint = WhitePoint::new("F11", 0.38052, 0.37713);

/// Every built-in white point
pub const ALL: [WhitePoint; 11] = [D50, D55, D60, D65, D75, DCI_P3, A, E, F2, F7, F11];

/// Get a standard white point by name
pub fn from_name(name: &str) -> Option<WhitePoint> {
    match name.to_uppercase().as_str() {
        "D50" => Some(D50),
        "D55" => Some(D55),
        "D60" | "ACES" => Some(D60),
        "D65" => Some(D65),
        "D75" => Some(D75),
        "DCI-P3" | "DCI" => Some(DCI_P3),
        "A" => Some(A),
        "E" => Some(E),
        "F2" => Some(F2),
        "F7" => Some(F7),
        "F11" => Some(F11),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_d65_values() {
        assert_eq!(D65.chromaticity, Chromaticity::new(0.3127, 0.3290));
    }

    #[test]
    fn test_d65_xyz_normalized() {
        // X = 0.9505, Y = 1.0, Z = 1.0891 once scaled to unit luminance
        let xyz = D65.chromaticity.to_xyz();
        let normalized = xyz.scale(1.0 / xyz.y());
        assert!((normalized.x() - 0.9505).abs() < 0.001);
        assert!((normalized.y() - 1.0).abs() < 1e-12);
        assert!((normalized.z() - 1.0891).abs() < 0.001);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(from_name("D50"), Some(D50));
        assert_eq!(from_name("d65"), Some(D65));
        assert_eq!(from_name("DCI-P3"), Some(DCI_P3));
        assert!(from_name("unknown").is_none());
    }

    #[test]
    fn test_from_name_error() {
        assert_eq!(
            WhitePoint::from_name("D93"),
            Err(Error::UnknownIlluminant("D93".to_string()))
        );
    }

    #[test]
    fn test_all_names_resolve() {
        for wp in ALL {
            assert_eq!(from_name(wp.name), Some(wp), "{}", wp.name);
        }
    }
}
