use super::analyze::resolve_config;
use crate::io::{load_responses, load_roster};
use crate::survey::{validate_responses, SurveyIssue};
use anyhow::Result;
use colored::*;
use std::path::PathBuf;

pub struct ValidateConfig {
    pub roster: PathBuf,
    pub responses: PathBuf,
    pub config: Option<PathBuf>,
}

/// Every issue in the response file, without running the analysis.
pub fn collect_issues(config: &ValidateConfig) -> Result<Vec<SurveyIssue>> {
    let risk_config = resolve_config(config.config.as_deref())?;
    let roster = load_roster(&config.roster)?;
    let responses = load_responses(&config.responses)?;
    Ok(validate_responses(
        &responses,
        &roster,
        &risk_config.survey,
        &risk_config.climate,
    ))
}

pub fn validate_survey(config: ValidateConfig) -> Result<()> {
    let issues = collect_issues(&config)?;

    if issues.is_empty() {
        println!("{}", "All survey responses are valid".green());
        return Ok(());
    }

    for issue in &issues {
        println!("  {} {}", "warning:".yellow().bold(), issue);
    }
    anyhow::bail!("{} survey issue(s) found", issues.len())
}
