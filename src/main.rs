//! Screen Simulator - screen-size and pixel-density simulation for web snippets
//!
//! This binary provides headless access to the simulator: computing display
//! metrics, loading device presets, scanning snippets for px literals, and
//! generating the simulator's HTML documents.

use clap::{Parser, Subcommand};

use screensim::cli::{AnalyzeArgs, MetricsArgs, PresetsArgs, RenderArgs};

/// Screen Simulator - screen-size and pixel-density simulation for web snippets
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compute physical and CSS metrics for a device
    Metrics(MetricsArgs),
    /// Load a preset document and list the recognized devices
    Presets(PresetsArgs),
    /// Generate one of the simulator documents
    Render(RenderArgs),
    /// Scan a snippet for px literals and report their physical sizes
    Analyze(AnalyzeArgs),
}

fn main() {
    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::Metrics(args) => args.execute(),
        Commands::Presets(args) => args.execute(),
        Commands::Render(args) => args.execute(),
        Commands::Analyze(args) => args.execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code());
    }
}
