use anyhow::Result;
use clap::Parser;
use predictr::cli::{Cli, Commands};
use predictr::commands::analyze::{handle_analyze, AnalyzeConfig};
use predictr::commands::validate::{validate_survey, ValidateConfig};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbosity);

    match cli.command {
        Commands::Analyze {
            roster,
            responses,
            config,
            format,
            output,
            top,
            grade,
        } => handle_analyze(AnalyzeConfig {
            roster,
            responses,
            config,
            format: format.into(),
            output,
            top,
            grade,
        }),
        Commands::Validate {
            roster,
            responses,
            config,
        } => validate_survey(ValidateConfig {
            roster,
            responses,
            config,
        }),
        Commands::Init { force } => predictr::commands::init::init_config(force),
    }
}

// Pure function to map -v count to a default filter
fn default_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

// RUST_LOG wins when set; diagnostics go to stderr so stdout stays parseable
fn init_tracing(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbosity)));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
