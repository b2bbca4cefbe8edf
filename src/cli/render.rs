//! Render command: generate the simulator documents.

use clap::{Args, Subcommand};
use std::path::{Path, PathBuf};

use crate::cli::common::{CliError, CliResult, DeviceOpts};
use crate::config::Config;
use crate::metrics::derive_metrics;
use crate::parser::extract_px_values;
use crate::render::{
    build_document, render_font_sample, render_pixel_pattern, render_px_boxes, PatternKind,
};

/// Generate one of the simulator documents
#[derive(Debug, Clone, Args)]
pub struct RenderArgs {
    #[command(subcommand)]
    pub target: RenderTarget,
}

/// Which document to generate.
#[derive(Debug, Clone, Subcommand)]
pub enum RenderTarget {
    /// Wrap a snippet into the document under test
    Doc(DocArgs),
    /// Font-size sample sheet
    Font(FontArgs),
    /// Tiled pixel-pattern sheet
    Pattern(PatternArgs),
    /// Physical-size boxes for the px literals in a snippet
    Boxes(BoxesArgs),
}

/// Arguments for the document-under-test renderer.
#[derive(Debug, Clone, Args)]
pub struct DocArgs {
    /// Path to the HTML/CSS/JS snippet
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Write the document here instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Arguments for the font-sample renderer.
#[derive(Debug, Clone, Args)]
pub struct FontArgs {
    /// Font size to sample, in CSS pixels
    #[arg(short, long, value_name = "PX", default_value_t = 16.0)]
    pub size: f64,

    #[command(flatten)]
    pub device: DeviceOpts,

    /// Write the document here instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Arguments for the pixel-pattern renderer.
#[derive(Debug, Clone, Args)]
pub struct PatternArgs {
    /// Tile pattern to draw
    #[arg(short, long, value_enum, default_value_t = PatternKind::Grid)]
    pub kind: PatternKind,

    /// Pattern cell size, in CSS pixels
    #[arg(short, long, value_name = "PX", default_value_t = 10.0)]
    pub cell: f64,

    #[command(flatten)]
    pub device: DeviceOpts,

    /// Write the document here instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Arguments for the px-box renderer.
#[derive(Debug, Clone, Args)]
pub struct BoxesArgs {
    /// Path to the HTML/CSS/JS snippet to scan
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    #[command(flatten)]
    pub device: DeviceOpts,

    /// Write the document here instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl RenderArgs {
    /// Execute the render command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load().unwrap_or_default();

        match &self.target {
            RenderTarget::Doc(args) => {
                let snippet = read_snippet(&args.input)?;
                write_output(args.output.as_deref(), &build_document(&snippet))
            }
            RenderTarget::Font(args) => {
                let metrics = derive_metrics(&args.device.to_inputs(&config));
                write_output(
                    args.output.as_deref(),
                    &render_font_sample(args.size, &metrics),
                )
            }
            RenderTarget::Pattern(args) => {
                let metrics = derive_metrics(&args.device.to_inputs(&config));
                write_output(
                    args.output.as_deref(),
                    &render_pixel_pattern(args.kind, args.cell, &metrics),
                )
            }
            RenderTarget::Boxes(args) => {
                let snippet = read_snippet(&args.input)?;
                let values = extract_px_values(&snippet);
                if values.is_empty() {
                    return Err(CliError::validation("No px values found in snippet"));
                }
                let metrics = derive_metrics(&args.device.to_inputs(&config));
                write_output(args.output.as_deref(), &render_px_boxes(&values, &metrics))
            }
        }
    }
}

fn read_snippet(path: &Path) -> CliResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| CliError::io(format!("Failed to read snippet {}: {e}", path.display())))
}

fn write_output(output: Option<&Path>, html: &str) -> CliResult<()> {
    match output {
        Some(path) => std::fs::write(path, html)
            .map_err(|e| CliError::io(format!("Failed to write output file: {e}"))),
        None => {
            println!("{html}");
            Ok(())
        }
    }
}
