//! Presets command: load and list device presets.

use clap::Args;
use serde::Serialize;

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use crate::models::DeviceProfile;
use crate::services::PresetService;

/// Load a preset document and list the recognized devices
#[derive(Debug, Clone, Args)]
pub struct PresetsArgs {
    /// Preset document to load: a file path or an HTTP(S) URL.
    /// Defaults to the configured source, then to the built-in list.
    #[arg(short, long, value_name = "PATH|URL")]
    pub source: Option<String>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct PresetsReport<'a> {
    source: String,
    count: usize,
    selected: usize,
    presets: &'a [DeviceProfile],
}

impl PresetsArgs {
    /// Execute the presets command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load().unwrap_or_default();
        let source = self
            .source
            .as_deref()
            .or(config.presets.source.as_deref());

        let (collection, note) = PresetService::load_or_builtin(source);
        if let Some(note) = note {
            eprintln!("{note}");
        }

        let selected = PresetService::preferred_index(collection.profiles());

        if self.json {
            let report = PresetsReport {
                source: collection.source().to_string(),
                count: collection.len(),
                selected,
                presets: collection.profiles(),
            };
            println!(
                "{}",
                serde_json::to_string_pretty(&report)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            println!("Presets from {}:", collection.source());
            for (idx, profile) in collection.profiles().iter().enumerate() {
                let marker = if idx == selected { "*" } else { " " };
                println!("{marker} [{idx}] {}", profile.label());
            }
        }

        Ok(())
    }
}
