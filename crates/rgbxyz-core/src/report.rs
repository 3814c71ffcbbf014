//! Human-readable narration of a derivation
//!
//! [`Report`] walks through every step of a [`Derivation`]: the inputs,
//! the XYZ lift, the basis matrix and its inverse, the scale vector and
//! the scaled primaries. It only reads the derivation.

use std::fmt;

use crate::derive::Derivation;
use crate::math::{Matrix3x3, Vec3};

/// Formatting options for reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    /// Digits after the decimal point
    pub precision: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self { precision: 8 }
    }
}

/// Step-by-step explanation of a derivation
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    derivation: &'a Derivation,
    options: ReportOptions,
}

impl<'a> Report<'a> {
    pub fn new(derivation: &'a Derivation) -> Self {
        Self::with_options(derivation, ReportOptions::default())
    }

    pub fn with_options(derivation: &'a Derivation, options: ReportOptions) -> Self {
        Self {
            derivation,
            options,
        }
    }
}

struct Tuple(Vec3, usize);

impl fmt::Display for Tuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Tuple(v, p) = self;
        write!(f, "({:.p$}, {:.p$}, {:.p$})", v[0], v[1], v[2], p = *p)
    }
}

/// Bracketed matrix rows, every row after the first indented by `indent`
struct Bracketed<'a>(&'a Matrix3x3, usize, &'a str);

impl fmt::Display for Bracketed<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let &Bracketed(m, p, indent) = self;
        for (i, row) in m.m.iter().enumerate() {
            if i > 0 {
                write!(f, "\n{indent}")?;
            }
            write!(f, "[ {:.p$}, {:.p$}, {:.p$} ]", row[0], row[1], row[2])?;
        }
        Ok(())
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = self.derivation;
        let p = self.options.precision;
        let cs = &d.colour_space;

        writeln!(f, "Constructing matrix from colour space to XYZ:")?;
        writeln!(f)?;
        writeln!(f, "Primaries:")?;
        for (label, c) in [
            ("Red", cs.red),
            ("Green", cs.green),
            ("Blue", cs.blue),
            ("White", cs.white),
        ] {
            writeln!(f, "{label}: x = {:.p$} y = {:.p$}", c.x, c.y)?;
        }
        writeln!(f)?;

        writeln!(f, "Convert from xy to XYZ")?;
        writeln!(f, "xy coordinate is the projection of XYZ onto X + Y + Z = 1 plane")?;
        writeln!(f, "X = x")?;
        writeln!(f, "Y = y")?;
        writeln!(f, "Z = 1 - x - y")?;
        writeln!(f)?;

        writeln!(f, "Converting primaries and white point to XYZ vectors:")?;
        for (label, v) in [
            ("Red", d.red),
            ("Green", d.green),
            ("Blue", d.blue),
            ("White", d.white),
        ] {
            writeln!(f, "{label} = {}", Tuple(v, p))?;
        }
        writeln!(f)?;

        writeln!(
            f,
            "The XYZ primary vectors must be independently scaled such that they sum to white"
        )?;
        writeln!(f, "This means White = M * S")?;
        writeln!(f, "Where M = [ Xr, Xg, Xb ]")?;
        writeln!(f, "          [ Yr, Yg, Yb ]")?;
        writeln!(f, "          [ Zr, Zg, Zb ]")?;
        writeln!(f, "= {}", Bracketed(&d.base_matrix, p, "  "))?;
        writeln!(f)?;
        writeln!(f, "For the primaries provided")?;
        writeln!(f)?;

        writeln!(f, "To calculate S, we must multiply W by the inverse of M:")?;
        writeln!(f, "S = InvM * W")?;
        writeln!(f)?;
        writeln!(f, "The inverse of M")?;
        writeln!(f, "= {}", Bracketed(&d.inverse_matrix, p, "  "))?;
        writeln!(f)?;
        writeln!(f, "For the primaries provided")?;
        writeln!(f)?;

        writeln!(f, "This gives S as:")?;
        writeln!(f, "{}", Tuple(d.raw_scales, p))?;
        writeln!(
            f,
            "The white point is specified such that the luminance, or Yw, should equal 1"
        )?;
        writeln!(
            f,
            "This means we must divide S by Yw so that when our primaries are summed together the results Y value equals 1"
        )?;
        writeln!(
            f,
            "{} / {:.p$} = {}",
            Tuple(d.raw_scales, p),
            d.white_luminance,
            Tuple(d.scales, p)
        )?;

        writeln!(f, "Scaling our primaries by S gives:")?;
        for (label, v) in [
            ("Red", d.scaled_red),
            ("Green", d.scaled_green),
            ("Blue", d.scaled_blue),
        ] {
            writeln!(f, "{label} = {}", Tuple(v, p))?;
        }
        writeln!(f)
    }
}

/// Render a matrix as three comma-separated rows
///
/// ```
/// use rgbxyz_core::{Matrix3x3, format_matrix};
///
/// let text = format_matrix(&Matrix3x3::identity(), 2);
/// assert_eq!(text, "1.00, 0.00, 0.00\n0.00, 1.00, 0.00\n0.00, 0.00, 1.00\n");
/// ```
pub fn format_matrix(m: &Matrix3x3, precision: usize) -> String {
    let p = precision;
    m.m.iter()
        .map(|row| format!("{:.p$}, {:.p$}, {:.p$}\n", row[0], row[1], row[2]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::colour_space::SRGB;

    #[test]
    fn test_format_matrix() {
        let m = Matrix3x3::new([[0.5, -0.25, 1.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
        assert_eq!(
            format_matrix(&m, 8),
            "0.50000000, -0.25000000, 1.00000000\n\
             0.00000000, 1.00000000, 0.00000000\n\
             0.00000000, 0.00000000, 1.00000000\n"
        );
    }

    #[test]
    fn test_report_sections() {
        let d = Derivation::new(&SRGB).unwrap();
        let text = Report::new(&d).to_string();

        assert!(text.starts_with("Constructing matrix from colour space to XYZ:\n\n"));
        assert!(text.contains("Red: x = 0.64000000 y = 0.33000000\n"));
        assert!(text.contains("White: x = 0.31270000 y = 0.32900000\n"));
        assert!(text.contains("Green = (0.30000000, 0.60000000, 0.10000000)\n"));
        assert!(text.contains("= [ 0.64000000, 0.30000000, 0.15000000 ]\n  [ 0.33000000,"));
        assert!(text.contains("S = InvM * W\n"));
        assert!(text.contains(" / 0.32900000 = ("));
        assert!(text.ends_with("\n\n"));
    }

    #[test]
    fn test_report_precision() {
        let d = Derivation::new(&SRGB).unwrap();
        let text = Report::with_options(&d, ReportOptions { precision: 3 }).to_string();
        assert!(text.contains("Red: x = 0.640 y = 0.330\n"));
        assert!(!text.contains("0.64000000"));
    }

    #[test]
    fn test_report_does_not_change_derivation() {
        let d = Derivation::new(&SRGB).unwrap();
        let before = d;
        let _ = Report::new(&d).to_string();
        assert_eq!(d, before);
    }
}
