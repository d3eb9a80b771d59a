//! The Predictive Risk Estimator pipeline.
//!
//! GraphBuilder -> RiskScorer -> AggregateAnalyzer, recomputed from scratch on
//! every call. Nothing is cached between calls and the inputs are never mutated.

use crate::config::RiskConfig;
use crate::core::{ClassroomAnalysis, Student, SurveyResponse};
use crate::errors::{Error, Result};
use crate::graph::GraphBuilder;
use crate::risk::{AggregateAnalyzer, RiskScorer};
use tracing::{debug, info_span};

/// Analyze a classroom with the default configuration.
pub fn analyze(roster: &[Student], responses: &[SurveyResponse]) -> Result<ClassroomAnalysis> {
    analyze_with_config(roster, responses, &RiskConfig::default())
}

/// Analyze a classroom with explicit weights and thresholds.
///
/// Fails with [`Error::EmptyRoster`] when `roster` is empty and with
/// [`Error::Configuration`] when `config` does not validate.
pub fn analyze_with_config(
    roster: &[Student],
    responses: &[SurveyResponse],
    config: &RiskConfig,
) -> Result<ClassroomAnalysis> {
    let _span = info_span!(
        "classroom_analysis",
        students = roster.len(),
        responses = responses.len()
    )
    .entered();

    config.validate()?;
    if roster.is_empty() {
        return Err(Error::EmptyRoster);
    }

    let mut graph = {
        let _span = info_span!("graph_building").entered();
        GraphBuilder::build(roster, responses)
    };

    {
        let _span = info_span!("risk_scoring").entered();
        RiskScorer::new(config).score(&mut graph.nodes, responses);
    }

    let analysis = {
        let _span = info_span!("aggregation").entered();
        let analysis =
            AggregateAnalyzer::new(&config.thresholds).analyze(&graph.nodes, &graph.edges)?;
        debug!(
            global_risk = analysis.global_risk,
            at_risk = analysis.at_risk_students.len(),
            isolated = analysis.isolated_students.len(),
            tension_pairs = analysis.tension_groups.len(),
            "Aggregation complete"
        );
        analysis
    };

    Ok(ClassroomAnalysis {
        nodes: graph.nodes,
        edges: graph.edges,
        analysis,
    })
}
