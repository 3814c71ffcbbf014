//! rgbxyz - print the RGB to XYZ matrix of a colour space
//!
//! ```text
//! rgbxyz -r 0.64 0.33 -g 0.30 0.60 -b 0.15 0.06 -w 0.3127 0.3290
//! rgbxyz --preset bt2020 --inverse --format json
//! ```
//!
//! Set `RUST_LOG=debug` to trace the derivation.

mod args;

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use args::{Args, OutputFormat};
use clap::Parser;
use rgbxyz_core::{Derivation, Matrix3x3, Report, format_matrix};
use serde::Serialize;

#[derive(Serialize)]
struct JsonOutput<'a> {
    #[serde(flatten)]
    derivation: &'a Derivation,
    #[serde(skip_serializing_if = "Option::is_none")]
    xyz_to_rgb: Option<Matrix3x3>,
}

fn setup_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
}

fn run(args: &Args) -> Result<()> {
    let colour_space = args.colour_space()?;

    let derivation =
        Derivation::new(&colour_space).context("Cannot derive matrix for this colour space")?;

    let xyz_to_rgb = if args.inverse {
        Some(
            derivation
                .xyz_to_rgb()
                .context("Cannot invert the RGB to XYZ matrix")?,
        )
    } else {
        None
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.format {
        OutputFormat::Text => {
            let precision = args.precision;
            if args.verbose {
                write!(
                    out,
                    "{}",
                    Report::with_options(&derivation, args.report_options())
                )?;
            }

            writeln!(out, "Result:")?;
            writeln!(out)?;
            write!(out, "{}", format_matrix(&derivation.matrix, precision))?;

            if let Some(inverse) = xyz_to_rgb {
                writeln!(out)?;
                writeln!(out, "Inverse:")?;
                writeln!(out)?;
                write!(out, "{}", format_matrix(&inverse, precision))?;
            }
        }
        OutputFormat::Json => {
            if args.verbose {
                log::info!("--v has no effect on JSON output, intermediates are always included");
            }
            let output = JsonOutput {
                derivation: &derivation,
                xyz_to_rgb,
            };
            writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?;
        }
    }

    out.flush()?;
    Ok(())
}

/// True when the reader on stdout went away, e.g. `rgbxyz --v | head -3`
fn is_broken_pipe(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        cause
            .downcast_ref::<io::Error>()
            .is_some_and(|e| e.kind() == io::ErrorKind::BrokenPipe)
    })
}

fn main() -> ExitCode {
    setup_logger();

    let args = Args::parse();
    log::debug!("{:?}", args);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if is_broken_pipe(&e) => {
            log::debug!("stdout closed early: {e}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
