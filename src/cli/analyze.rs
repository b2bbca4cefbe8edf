//! Analyze command: scan a snippet for literal px values.

use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

use crate::cli::common::{CliError, CliResult, DeviceOpts};
use crate::config::Config;
use crate::metrics::derive_metrics;
use crate::models::round2;
use crate::parser::extract_px_values;

/// Scan a snippet for px literals and report their physical sizes
#[derive(Debug, Clone, Args)]
pub struct AnalyzeArgs {
    /// Path to the HTML/CSS/JS snippet to scan
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    #[command(flatten)]
    pub device: DeviceOpts,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct AnalyzeReport {
    mm_per_px: f64,
    values: Vec<PxValue>,
}

#[derive(Debug, Serialize)]
struct PxValue {
    px: f64,
    mm: f64,
}

impl AnalyzeArgs {
    /// Execute the analyze command
    pub fn execute(&self) -> CliResult<()> {
        let snippet = std::fs::read_to_string(&self.input).map_err(|e| {
            CliError::io(format!(
                "Failed to read snippet {}: {e}",
                self.input.display()
            ))
        })?;

        let config = Config::load().unwrap_or_default();
        let metrics = derive_metrics(&self.device.to_inputs(&config));
        let values = extract_px_values(&snippet);

        if self.json {
            let report = AnalyzeReport {
                mm_per_px: (metrics.mm_per_px * 1000.0).round() / 1000.0,
                values: values
                    .iter()
                    .map(|&px| PxValue {
                        px,
                        mm: round2(px * metrics.mm_per_px),
                    })
                    .collect(),
            };
            println!(
                "{}",
                serde_json::to_string_pretty(&report)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
            return Ok(());
        }

        if values.is_empty() {
            println!("No px values found.");
            return Ok(());
        }

        println!("1 px ≈ {:.3} mm", metrics.mm_per_px);
        for px in &values {
            println!("{px}px ≈ {:.2} mm", px * metrics.mm_per_px);
        }
        Ok(())
    }
}
