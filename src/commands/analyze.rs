use crate::config::{load_config, load_config_from_path, RiskConfig};
use crate::core::Student;
use crate::io::output::{create_writer, OutputFormat, OutputOptions};
use crate::io::{load_responses, load_roster};
use crate::pipeline::analyze_with_config;
use crate::report::{attach_report, UnconfiguredReportGenerator};
use crate::survey::ResponseSet;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub struct AnalyzeConfig {
    pub roster: PathBuf,
    pub responses: PathBuf,
    pub config: Option<PathBuf>,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub top: usize,
    pub grade: Option<String>,
}

/// Explicit config paths must load; otherwise fall back to discovery.
pub fn resolve_config(path: Option<&Path>) -> Result<RiskConfig> {
    match path {
        Some(path) => load_config_from_path(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Ok(load_config()),
    }
}

fn classroom_label(grade: Option<String>, roster: &[Student]) -> String {
    grade
        .or_else(|| roster.first().map(|s| s.grade.clone()))
        .unwrap_or_default()
}

pub fn handle_analyze(config: AnalyzeConfig) -> Result<()> {
    let risk_config = resolve_config(config.config.as_deref())?;
    let roster = load_roster(&config.roster)?;

    // Later submissions from the same student replace earlier ones
    let responses: ResponseSet = load_responses(&config.responses)?
        .into_iter()
        .map(|r| r.normalized())
        .collect();

    let coverage = responses.coverage(&roster);
    info!(
        received = coverage.received,
        roster_size = coverage.roster_size,
        "Loaded survey responses"
    );
    if coverage.received < coverage.roster_size {
        warn!(
            missing = coverage.roster_size - coverage.received,
            "Some students have not answered; their climate risk uses the neutral value"
        );
    }

    let mut results = analyze_with_config(&roster, responses.as_slice(), &risk_config)?;

    let grade = classroom_label(config.grade, &roster);
    results.analysis = attach_report(results.analysis, &grade, &UnconfiguredReportGenerator);

    let writer: Box<dyn Write> = match &config.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path)
                .with_context(|| format!("Failed to create output file {}", path.display()))?,
        )),
        None => Box::new(std::io::stdout()),
    };
    let options = OutputOptions {
        grade,
        top: config.top,
        thresholds: risk_config.thresholds,
    };
    create_writer(config.format, writer, options).write_results(&results)?;
    Ok(())
}
