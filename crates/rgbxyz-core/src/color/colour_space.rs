//! RGB colour space definitions
//!
//! A colour space is three primaries plus a white point, each a CIE xy
//! chromaticity. Named presets cover the common working and display spaces.
//!
//! Sources:
//! - ITU-R BT.709-6 (sRGB primaries)
//! - SMPTE EG 432-1 (Display P3), SMPTE RP 431-2 (DCI-P3)
//! - Adobe RGB (1998) Color Image Encoding
//! - ITU-R BT.2020-2
//! - ISO 22028-2:2013 (ProPhoto / ROMM RGB)
//! - SMPTE ST 2065-1 (ACES AP0), S-2014-004 (ACEScg AP1)

use std::fmt;

use crate::color::white_point::{self, WhitePoint};
use crate::color::Chromaticity;
use crate::{Error, Result};

/// One of the four chromaticities of a colour space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Channel {
    Red,
    Green,
    Blue,
    White,
}

impl Channel {
    pub const ALL: [Channel; 4] = [Channel::Red, Channel::Green, Channel::Blue, Channel::White];

    /// Human-readable label, "white point" for the white channel
    pub const fn label(self) -> &'static str {
        match self {
            Channel::Red => "red primary",
            Channel::Green => "green primary",
            Channel::Blue => "blue primary",
            Channel::White => "white point",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An RGB working space: three primaries and a white point
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColourSpace {
    pub red: Chromaticity,
    pub green: Chromaticity,
    pub blue: Chromaticity,
    pub white: Chromaticity,
}

impl ColourSpace {
    /// Create a colour space from its four chromaticities
    pub const fn new(
        red: Chromaticity,
        green: Chromaticity,
        blue: Chromaticity,
        white: Chromaticity,
    ) -> Self {
        Self {
            red,
            green,
            blue,
            white,
        }
    }

    const fn from_xy(rgb: [(f64, f64); 3], white: WhitePoint) -> Self {
        Self::new(
            Chromaticity::new(rgb[0].0, rgb[0].1),
            Chromaticity::new(rgb[1].0, rgb[1].1),
            Chromaticity::new(rgb[2].0, rgb[2].1),
            white.chromaticity,
        )
    }

    /// Replace the white point, keeping the primaries
    pub const fn with_white(self, white: Chromaticity) -> Self {
        Self { white, ..self }
    }

    pub const fn channel(&self, channel: Channel) -> Chromaticity {
        match channel {
            Channel::Red => self.red,
            Channel::Green => self.green,
            Channel::Blue => self.blue,
            Channel::White => self.white,
        }
    }

    /// Reject NaN or infinite coordinates
    pub fn validate(&self) -> Result<()> {
        for channel in Channel::ALL {
            let c = self.channel(channel);
            if !c.is_finite() {
                return Err(Error::NonFiniteChromaticity {
                    channel,
                    x: c.x,
                    y: c.y,
                });
            }
        }
        Ok(())
    }

    /// Look up a built-in colour space by name, case-insensitively
    ///
    /// Spaces, dashes and underscores in `name` are ignored.
    pub fn from_name(name: &str) -> Result<Self> {
        let key: String = name
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_lowercase();

        PRESETS
            .iter()
            .find(|preset| preset.key == key || preset.aliases.contains(&key.as_str()))
            .map(|preset| preset.space)
            .ok_or_else(|| Error::UnknownPreset(name.to_string()))
    }

    /// Names and definitions of every built-in colour space
    pub fn presets() -> impl Iterator<Item = (&'static str, ColourSpace)> {
        PRESETS.iter().map(|preset| (preset.name, preset.space))
    }
}

// ============================================================================
// Standard colour spaces
// ============================================================================

/// sRGB / BT.709 (D65)
pub const SRGB: ColourSpace =
    ColourSpace::from_xy([(0.64, 0.33), (0.30, 0.60), (0.15, 0.06)], white_point::D65);

/// Display P3 (D65)
pub const DISPLAY_P3: ColourSpace =
    ColourSpace::from_xy([(0.680, 0.320), (0.265, 0.690), (0.150, 0.060)], white_point::D65);

/// DCI-P3 theatrical (DCI white)
pub const DCI_P3: ColourSpace = ColourSpace::from_xy(
    [(0.680, 0.320), (0.265, 0.690), (0.150, 0.060)],
    white_point::DCI_P3,
);

/// Adobe RGB (1998) (D65)
pub const ADOBE_RGB: ColourSpace =
    ColourSpace::from_xy([(0.64, 0.33), (0.21, 0.71), (0.15, 0.06)], white_point::D65);

/// ITU-R BT.2020 (D65)
pub const BT2020: ColourSpace = ColourSpace::from_xy(
    [(0.708, 0.292), (0.170, 0.797), (0.131, 0.046)],
    white_point::D65,
);

/// ProPhoto / ROMM RGB (D50)
pub const PROPHOTO_RGB: ColourSpace = ColourSpace::from_xy(
    [(0.7347, 0.2653), (0.1596, 0.8404), (0.0366, 0.0001)],
    white_point::D50,
);

/// ACES 2065-1, AP0 primaries (ACES white)
pub const ACES_AP0: ColourSpace = ColourSpace::from_xy(
    [(0.7347, 0.2653), (0.0, 1.0), (0.0001, -0.0770)],
    white_point::D60,
);

/// ACEScg, AP1 primaries (ACES white)
pub const ACES_AP1: ColourSpace = ColourSpace::from_xy(
    [(0.713, 0.293), (0.165, 0.830), (0.128, 0.044)],
    white_point::D60,
);

struct Preset {
    name: &'static str,
    key: &'static str,
    aliases: &'static [&'static str],
    space: ColourSpace,
}

static PRESETS: [Preset; 8] = [
    Preset {
        name: "sRGB",
        key: "srgb",
        aliases: &["bt709", "rec709"],
        space: SRGB,
    },
    Preset {
        name: "Display P3",
        key: "displayp3",
        aliases: &["p3", "p3d65"],
        space: DISPLAY_P3,
    },
    Preset {
        name: "DCI-P3",
        key: "dcip3",
        aliases: &["dci"],
        space: DCI_P3,
    },
    Preset {
        name: "Adobe RGB",
        key: "adobergb",
        aliases: &["adobergb1998", "adobe"],
        space: ADOBE_RGB,
    },
    Preset {
        name: "BT.2020",
        key: "bt2020",
        aliases: &["bt.2020", "rec2020"],
        space: BT2020,
    },
    Preset {
        name: "ProPhoto RGB",
        key: "prophoto",
        aliases: &["prophotorgb", "romm", "rommrgb"],
        space: PROPHOTO_RGB,
    },
    Preset {
        name: "ACES AP0",
        key: "acesap0",
        aliases: &["ap0", "aces", "aces2065"],
        space: ACES_AP0,
    },
    Preset {
        name: "ACEScg",
        key: "acescg",
        aliases: &["ap1", "acesap1"],
        space: ACES_AP1,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(ColourSpace::from_name("sRGB"), Ok(SRGB));
        assert_eq!(ColourSpace::from_name("display-p3"), Ok(DISPLAY_P3));
        assert_eq!(ColourSpace::from_name("Rec 2020"), Ok(BT2020));
        assert_eq!(ColourSpace::from_name("ACES_AP1"), Ok(ACES_AP1));
        assert_eq!(
            ColourSpace::from_name("cmyk"),
            Err(Error::UnknownPreset("cmyk".to_string()))
        );
    }

    #[test]
    fn test_preset_names_resolve() {
        for (name, space) in ColourSpace::presets() {
            assert_eq!(ColourSpace::from_name(name), Ok(space), "{name}");
        }
        assert_eq!(ColourSpace::presets().count(), PRESETS.len());
    }

    #[test]
    fn test_with_white() {
        let space = SRGB.with_white(white_point::D50.chromaticity);
        assert_eq!(space.red, SRGB.red);
        assert_eq!(space.white, white_point::D50.chromaticity);
    }

    #[test]
    fn test_validate() {
        assert!(SRGB.validate().is_ok());

        let mut space = SRGB;
        space.blue.y = f64::NAN;
        match space.validate() {
            Err(Error::NonFiniteChromaticity { channel, x, .. }) => {
                assert_eq!(channel, Channel::Blue);
                assert_eq!(x, 0.15);
            }
            other => panic!("expected non-finite error, got {other:?}"),
        }
    }

    #[test]
    fn test_channel_display() {
        assert_eq!(Channel::Green.to_string(), "green primary");
        assert_eq!(Channel::White.to_string(), "white point");
    }
}
