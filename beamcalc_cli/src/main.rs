//! # BeamCalc CLI Application
//!
//! Sizes a rectangular beam for a bounding box and a uniform load, either
//! from flags (`beamcalc size ...`) or from interactive prompts
//! (`beamcalc interactive`).
//!
//! # Logging
//!
//! Set the `RUST_LOG` environment variable to control log output:
//! - `RUST_LOG=beamcalc_core=debug` - Intermediate sizing values
//! - `RUST_LOG=debug` - All debug output
//!
//! # Example
//!
//! ```bash
//! beamcalc size --x-min 0 --y-min 0 --x-max 6 --y-max 0.5 --load 10
//! beamcalc --format svg size --x-max 6 --y-max 0.5 --load 10 > beam.svg
//! RUST_LOG=beamcalc_core=debug beamcalc --config steel.json interactive
//! ```

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use beamcalc_core::export::{ExportSink, TracingSink};
use beamcalc_core::{BoundingBox, LoadCase, SessionSettings, SizingInput};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod adapters;
mod session;

use adapters::{FlagInput, JsonRenderer, PromptInput, ResultRenderer, SvgRenderer, TextRenderer};
use session::Session;

/// beamcalc - size a simply-supported rectangular beam under a uniform load.
#[derive(Parser)]
#[command(name = "beamcalc")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format for results
    #[arg(long, global = true, default_value = "text")]
    format: OutputFormat,

    /// Session settings file (JSON)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Modulus of elasticity (overrides the settings file)
    #[arg(long, global = true)]
    modulus: Option<f64>,

    /// Allowable bending stress (overrides the settings file)
    #[arg(long, global = true)]
    allowable_stress: Option<f64>,

    /// Send sized beams to the export sink (logged placements)
    #[arg(long, global = true)]
    export: bool,

    /// Suppress all non-error log output
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Increase output verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(long, short, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Human-readable text output
    Text,
    /// JSON output for scripting
    Json,
    /// SVG section diagram
    Svg,
}

#[derive(Subcommand)]
enum Commands {
    /// Size one beam from flags
    Size {
        #[arg(long, default_value = "0.0", allow_negative_numbers = true)]
        x_min: f64,

        #[arg(long, default_value = "0.0", allow_negative_numbers = true)]
        y_min: f64,

        #[arg(long, allow_negative_numbers = true)]
        x_max: f64,

        #[arg(long, allow_negative_numbers = true)]
        y_max: f64,

        /// Uniform distributed load (force per length; sign is direction)
        #[arg(long, allow_negative_numbers = true)]
        load: f64,

        /// Label for the beam
        #[arg(long, default_value = "B-1")]
        label: String,
    },

    /// Prompt for beams until a blank line or end of input
    Interactive,
}

/// Initialize the tracing subscriber based on verbosity level.
fn init_tracing(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    // RUST_LOG wins over -v flags
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        let level = match verbose {
            0 => "warn",
            1 => "beamcalc_core=info,beamcalc_cli=info",
            2 => "beamcalc_core=debug,beamcalc_cli=debug",
            _ => "trace",
        };
        EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .with(filter)
        .init();
}

/// Settings file (or defaults) with command-line overrides applied.
fn load_settings(cli: &Cli) -> Result<SessionSettings> {
    let mut settings = match &cli.config {
        Some(path) => SessionSettings::load(path)
            .with_context(|| format!("Failed to load settings from {:?}", path))?,
        None => SessionSettings::default(),
    };

    if let Some(e) = cli.modulus {
        settings.material.modulus_of_elasticity = e;
    }
    if let Some(fb) = cli.allowable_stress {
        settings.material.allowable_bending_stress = fb;
    }
    if cli.export {
        settings.export_enabled = true;
    }

    settings.validate().context("Invalid material settings")?;
    Ok(settings)
}

fn renderer_for(format: OutputFormat) -> Box<dyn ResultRenderer> {
    match format {
        OutputFormat::Text => Box::new(TextRenderer),
        OutputFormat::Json => Box::new(JsonRenderer),
        OutputFormat::Svg => Box::new(SvgRenderer),
    }
}

/// Only plain text output can share stdout with the interactive prompts.
fn prompts_on_stdout(format: OutputFormat) -> bool {
    matches!(format, OutputFormat::Text)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose, cli.quiet);

    let settings = load_settings(&cli)?;
    tracing::debug!(?settings, "session settings");

    let sink: Option<Box<dyn ExportSink>> = if settings.export_enabled {
        Some(Box::new(TracingSink::new()))
    } else {
        None
    };
    let mut session = Session::new(renderer_for(cli.format), sink);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &cli.command {
        Commands::Size {
            x_min,
            y_min,
            x_max,
            y_max,
            load,
            label,
        } => {
            let mut source = FlagInput::new(SizingInput::new(
                label.clone(),
                BoundingBox::new(*x_min, *y_min, *x_max, *y_max),
                settings.material,
                LoadCase::uniform(*load),
            ));
            let failures = session.run(&mut source, &mut out)?;
            out.flush()?;
            if failures > 0 {
                std::process::exit(1);
            }
        }
        Commands::Interactive => {
            // Banner and prompts stay off stdout when it carries JSON or SVG
            let mut console: Box<dyn Write> = if prompts_on_stdout(cli.format) {
                Box::new(io::stdout())
            } else {
                Box::new(io::stderr())
            };
            writeln!(console, "BeamCalc - Rectangular Beam Sizing")?;
            writeln!(
                console,
                "E = {}, σ_allow = {}",
                settings.material.modulus_of_elasticity, settings.material.allowable_bending_stress
            )?;
            writeln!(console)?;

            let stdin = io::stdin();
            let mut source = PromptInput::new(stdin.lock(), console, settings.material);
            session.run(&mut source, &mut out)?;

            if !session.log().is_empty() {
                if prompts_on_stdout(cli.format) {
                    writeln!(out)?;
                }
                session.write_history(&mut out)?;
            }
        }
    }

    Ok(())
}
