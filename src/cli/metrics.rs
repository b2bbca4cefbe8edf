//! Metrics command: derive and print display metrics for a device.

use clap::Args;
use serde::Serialize;

use crate::cli::common::{CliError, CliResult, DeviceOpts};
use crate::config::Config;
use crate::metrics::derive_metrics;
use crate::models::{DisplayMetrics, SimulatorInputs};

/// Compute physical and CSS metrics for a device
#[derive(Debug, Clone, Args)]
pub struct MetricsArgs {
    #[command(flatten)]
    pub device: DeviceOpts,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct MetricsReport {
    inputs: SimulatorInputs,
    metrics: DisplayMetrics,
}

impl MetricsArgs {
    /// Execute the metrics command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load().unwrap_or_default();
        let inputs = self.device.to_inputs(&config);
        let metrics = derive_metrics(&inputs).rounded();

        if self.json {
            let report = MetricsReport { inputs, metrics };
            println!(
                "{}",
                serde_json::to_string_pretty(&report)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            println!("Computed PPI:  {}", metrics.ppi);
            println!(
                "Physical size: {} in x {} in",
                metrics.width_in, metrics.height_in
            );
            println!(
                "CSS box:       {} x {} px @ {} dpi",
                metrics.css_width_px, metrics.css_height_px, inputs.calibration_dpi
            );
            println!("1 px ≈ {} mm", metrics.mm_per_px);
        }

        Ok(())
    }
}
