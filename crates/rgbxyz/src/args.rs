//! Command-line argument definitions and colour space resolution

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use rgbxyz_core::{Channel, Chromaticity, ColourSpace, ReportOptions, WhitePoint};

#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// The matrix as three comma-separated rows
    #[default]
    Text,
    /// Every intermediate value as JSON
    Json,
}

/// Colour space tool
///
/// Enter a colour space as xy primaries. Prints the matrix M that maps
/// linear RGB to CIE XYZ, XYZ = M * RGB.
#[derive(Debug, Parser)]
#[command(name = "rgbxyz", version, about, long_about)]
pub struct Args {
    /// Red primary
    #[arg(short = 'r', long = "red", num_args = 2, value_names = ["X", "Y"], allow_negative_numbers = true)]
    pub red: Option<Vec<f64>>,

    /// Green primary
    #[arg(short = 'g', long = "green", num_args = 2, value_names = ["X", "Y"], allow_negative_numbers = true)]
    pub green: Option<Vec<f64>>,

    /// Blue primary
    #[arg(short = 'b', long = "blue", num_args = 2, value_names = ["X", "Y"], allow_negative_numbers = true)]
    pub blue: Option<Vec<f64>>,

    /// White point
    #[arg(short = 'w', long = "white", num_args = 2, value_names = ["X", "Y"], allow_negative_numbers = true)]
    pub white: Option<Vec<f64>>,

    /// Start from a built-in colour space (srgb, display-p3, dci-p3,
    /// adobe-rgb, bt2020, prophoto, aces-ap0, acescg); -r/-g/-b/-w override it
    #[arg(long, value_name = "NAME")]
    pub preset: Option<String>,

    /// White point by illuminant name (D50, D65, DCI-P3, ...); -w overrides it
    #[arg(long, value_name = "NAME")]
    pub illuminant: Option<String>,

    /// Explain every step of the derivation
    #[arg(long = "v", visible_alias = "verbose")]
    pub verbose: bool,

    /// Also print the XYZ to RGB matrix
    #[arg(long)]
    pub inverse: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Digits after the decimal point
    #[arg(long, default_value_t = 8)]
    pub precision: usize,
}

impl Args {
    pub fn report_options(&self) -> ReportOptions {
        ReportOptions {
            precision: self.precision,
        }
    }

    /// Combine the preset, illuminant and explicit chromaticities
    ///
    /// Fails with one line per channel that is still unset.
    pub fn colour_space(&self) -> Result<ColourSpace> {
        let preset = self
            .preset
            .as_deref()
            .map(ColourSpace::from_name)
            .transpose()?;

        let illuminant = self
            .illuminant
            .as_deref()
            .map(WhitePoint::from_name)
            .transpose()?
            .map(|wp| wp.chromaticity);

        let red = pair(&self.red).or(preset.map(|p| p.red));
        let green = pair(&self.green).or(preset.map(|p| p.green));
        let blue = pair(&self.blue).or(preset.map(|p| p.blue));
        let white = pair(&self.white)
            .or(illuminant)
            .or(preset.map(|p| p.white));

        let missing: Vec<String> = [
            (Channel::Red, red),
            (Channel::Green, green),
            (Channel::Blue, blue),
            (Channel::White, white),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_none())
        .map(|(channel, _)| missing_message(channel))
        .collect();

        if !missing.is_empty() {
            bail!("{}", missing.join("\n"));
        }

        // Every channel is set once `missing` is empty
        let space = red
            .zip(green)
            .zip(blue)
            .zip(white)
            .map(|(((r, g), b), w)| ColourSpace::new(r, g, b, w))
            .context("incomplete colour space")?;

        log::debug!("Resolved colour space: {:?}", space);
        Ok(space)
    }
}

/// The last `X Y` pair given for an option
fn pair(values: &Option<Vec<f64>>) -> Option<Chromaticity> {
    values
        .as_deref()?
        .chunks_exact(2)
        .last()
        .map(|xy| Chromaticity::new(xy[0], xy[1]))
}

fn flag(channel: Channel) -> &'static str {
    match channel {
        Channel::Red => "-r",
        Channel::Green => "-g",
        Channel::Blue => "-b",
        Channel::White => "-w",
    }
}

fn missing_message(channel: Channel) -> String {
    let label = channel.label();
    let mut capitalized = label[..1].to_uppercase();
    capitalized.push_str(&label[1..]);
    format!(
        "{capitalized} not provided. Use option {} [x] [y] to specify {label}",
        flag(channel)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rgbxyz_core::color::colour_space::{ADOBE_RGB, SRGB};
    use rgbxyz_core::color::white_point;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("rgbxyz").chain(args.iter().copied())).unwrap()
    }

    const SRGB_ARGS: [&str; 12] = [
        "-r", "0.64", "0.33", "-g", "0.30", "0.60", "-b", "0.15", "0.06", "-w", "0.3127", "0.3290",
    ];

    #[test]
    fn test_parse_primaries() {
        let args = parse(&SRGB_ARGS);
        assert_eq!(args.red, Some(vec![0.64, 0.33]));
        assert!(!args.verbose);
        assert_eq!(args.format, OutputFormat::Text);
        assert_eq!(args.precision, 8);
        assert_eq!(args.colour_space().unwrap(), SRGB);
    }

    #[test]
    fn test_verbose_flag() {
        let mut argv = SRGB_ARGS.to_vec();
        argv.push("--v");
        assert!(parse(&argv).verbose);

        argv.pop();
        argv.push("--verbose");
        assert!(parse(&argv).verbose);
    }

    #[test]
    fn test_negative_coordinates() {
        let args = parse(&["-b", "0.0001", "-0.0770"]);
        assert_eq!(args.blue, Some(vec![0.0001, -0.0770]));
    }

    #[test]
    fn test_missing_primaries() {
        let args = parse(&["-r", "0.64", "0.33", "-b", "0.15", "0.06"]);
        let message = args.colour_space().unwrap_err().to_string();
        assert_eq!(
            message,
            "Green primary not provided. Use option -g [x] [y] to specify green primary\n\
             White point not provided. Use option -w [x] [y] to specify white point"
        );
    }

    #[test]
    fn test_unparseable_number() {
        let result = Args::try_parse_from(["rgbxyz", "-r", "red", "0.33"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_wrong_value_count() {
        let result = Args::try_parse_from(["rgbxyz", "-r", "0.64"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_preset_with_override() {
        let args = parse(&["--preset", "srgb", "-g", "0.21", "0.71"]);
        assert_eq!(args.colour_space().unwrap(), ADOBE_RGB);
    }

    #[test]
    fn test_illuminant() {
        let args = parse(&["--preset", "srgb", "--illuminant", "d50"]);
        let space = args.colour_space().unwrap();
        assert_eq!(space.white, white_point::D50.chromaticity);

        // Explicit -w wins over --illuminant
        let args = parse(&["--preset", "srgb", "--illuminant", "d50", "-w", "0.3", "0.3"]);
        assert_eq!(args.colour_space().unwrap().white, Chromaticity::new(0.3, 0.3));
    }

    #[test]
    fn test_unknown_preset() {
        let args = parse(&["--preset", "cmyk"]);
        assert!(args.colour_space().is_err());
    }

    #[test]
    fn test_repeated_option_uses_last_pair() {
        let args = parse(&["-r", "0.1", "0.2", "-r", "0.64", "0.33"]);
        assert_eq!(pair(&args.red), Some(Chromaticity::new(0.64, 0.33)));
    }

    #[test]
    fn test_command_definition() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
