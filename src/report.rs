//! Contract with the natural-language report generator.
//!
//! The generator receives an anonymized summary (ids only, no names) and
//! returns free text. Whatever it returns is attached to the analysis
//! verbatim; predictr never parses it.

use crate::core::{RiskAnalysis, StudentId};
use serde::Serialize;
use std::fmt::Write;

/// Returned when no generator backend is configured.
pub const NOT_CONFIGURED_PLACEHOLDER: &str =
    "Report generator is not configured. No narrative report was produced.";

/// Implementors return this when the backend cannot be reached.
pub const TRANSPORT_ERROR_PLACEHOLDER: &str =
    "Could not reach the report generation service. Check the connection and try again.";

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AtRiskEntry {
    pub id: StudentId,
    pub risk_score: u8,
    pub in_degree: u32,
    pub conflict_score: u32,
}

/// Everything the report generator is allowed to see.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub grade: String,
    pub global_risk: u8,
    pub at_risk: Vec<AtRiskEntry>,
    pub tension_pairs: Vec<(StudentId, StudentId)>,
    pub isolated_count: usize,
}

impl ReportSummary {
    pub fn from_analysis(grade: impl Into<String>, analysis: &RiskAnalysis) -> Self {
        Self {
            grade: grade.into(),
            global_risk: analysis.global_risk,
            at_risk: analysis
                .at_risk_students
                .iter()
                .map(|node| AtRiskEntry {
                    id: node.id().clone(),
                    risk_score: node.risk_score(),
                    in_degree: node.in_degree(),
                    conflict_score: node.conflict_score(),
                })
                .collect(),
            tension_pairs: analysis
                .tension_groups
                .iter()
                .map(|pair| (pair.first().clone(), pair.second().clone()))
                .collect(),
            isolated_count: analysis.isolated_students.len(),
        }
    }

    /// Prompt text for a text-generation backend.
    pub fn prompt(&self) -> String {
        let mut prompt = String::new();
        // Writing into a String cannot fail
        let _ = self.write_prompt(&mut prompt);
        prompt
    }

    fn write_prompt(&self, out: &mut String) -> std::fmt::Result {
        writeln!(
            out,
            "Act as a school coexistence specialist (educational psychologist)."
        )?;
        writeln!(
            out,
            "Analyze the following processed data for the class {}.",
            self.grade
        )?;
        writeln!(out)?;
        writeln!(out, "PREDICTIVE MODEL DATA:")?;
        writeln!(out, "- Global class risk: {}/100", self.global_risk)?;
        writeln!(out, "- Students at high risk:")?;
        for entry in &self.at_risk {
            writeln!(
                out,
                "  - Student ID {}: risk {}/100 (popularity: {}, conflicts received: {})",
                entry.id, entry.risk_score, entry.in_degree, entry.conflict_score
            )?;
        }
        writeln!(out, "- Conflict dynamics (pairs with mutual rejection):")?;
        for (first, second) in &self.tension_pairs {
            writeln!(out, "  - Reciprocal tension between ID {first} and ID {second}")?;
        }
        writeln!(
            out,
            "- Isolated students (nobody chose them): {}",
            self.isolated_count
        )?;
        writeln!(out)?;
        writeln!(out, "TASK:")?;
        writeln!(
            out,
            "Write a short technical report (at most 3 paragraphs and a list of actions):"
        )?;
        writeln!(out, "1. Diagnosis: interpret the overall climate.")?;
        writeln!(out, "2. Early warning: explain what the detected tensions mean.")?;
        writeln!(
            out,
            "3. Action plan: suggest 3 concrete strategies (mediation, group intervention, family meetings)."
        )?;
        writeln!(
            out,
            "Keep a professional, confidential and preventive tone. Refer to students by ID only."
        )
    }
}

/// A backend that turns a summary into prose.
///
/// Implementations must not fail: unavailable or misconfigured backends
/// return a placeholder string instead.
pub trait ReportGenerator {
    fn generate(&self, summary: &ReportSummary) -> String;
}

/// Generator used when no backend is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnconfiguredReportGenerator;

impl ReportGenerator for UnconfiguredReportGenerator {
    fn generate(&self, _summary: &ReportSummary) -> String {
        NOT_CONFIGURED_PLACEHOLDER.to_string()
    }
}

/// Summarize `analysis`, ask `generator` for prose and attach it.
pub fn attach_report<G: ReportGenerator + ?Sized>(
    analysis: RiskAnalysis,
    grade: &str,
    generator: &G,
) -> RiskAnalysis {
    let summary = ReportSummary::from_analysis(grade, &analysis);
    let text = generator.generate(&summary);
    analysis.with_recommendations(text)
}
