pub mod aggregate;
pub mod level;

pub use aggregate::AggregateAnalyzer;
pub use level::RiskLevel;

use crate::config::RiskConfig;
use crate::core::{GraphNode, NodeMetrics, SurveyResponse};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The three normalized factors behind a risk score, each in [0, 1].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RiskFactors {
    pub conflict: f64,
    pub isolation: f64,
    pub climate: f64,
}

/// Assigns `risk_score` to every node of a built graph.
pub struct RiskScorer<'a> {
    config: &'a RiskConfig,
}

impl<'a> RiskScorer<'a> {
    pub fn new(config: &'a RiskConfig) -> Self {
        Self { config }
    }

    /// Largest in-degree in the classroom, floored at 1.
    pub fn max_in_degree(nodes: &[GraphNode]) -> u32 {
        nodes.iter().map(GraphNode::in_degree).max().unwrap_or(0).max(1)
    }

    /// Low popularity relative to the classroom maximum, plus a flat share
    /// when the student chose nobody.
    pub fn isolation_risk(&self, metrics: &NodeMetrics, max_in_degree: u32) -> f64 {
        let split = &self.config.isolation;
        let not_chosen = (1.0 - metrics.in_degree as f64 / max_in_degree as f64) * split.not_chosen;
        let not_choosing = if metrics.out_degree == 0 {
            split.not_choosing
        } else {
            0.0
        };
        not_chosen + not_choosing
    }

    /// Received rejections, saturating at the configured count.
    pub fn conflict_risk(&self, conflict_score: u32) -> f64 {
        let saturation = self.config.thresholds.conflict_saturation.max(1);
        (conflict_score as f64 / saturation as f64).min(1.0)
    }

    /// Inverted self-reported climate; neutral when there is no response.
    pub fn climate_risk(&self, rating: Option<u8>) -> f64 {
        let scale = &self.config.climate;
        match rating {
            Some(rating) => {
                let max = i32::from(scale.max_rating.max(1));
                ((max + 1 - i32::from(rating)) as f64 / max as f64).clamp(0.0, 1.0)
            }
            None => scale.neutral_risk,
        }
    }

    pub fn factors(
        &self,
        metrics: &NodeMetrics,
        climate_rating: Option<u8>,
        max_in_degree: u32,
    ) -> RiskFactors {
        RiskFactors {
            conflict: self.conflict_risk(metrics.conflict_score),
            isolation: self.isolation_risk(metrics, max_in_degree),
            climate: self.climate_risk(climate_rating),
        }
    }

    /// Weighted sum of the factors, rounded to the nearest point.
    pub fn combine(&self, factors: &RiskFactors) -> u8 {
        let weights = &self.config.weights;
        let raw = factors.conflict * weights.conflict
            + factors.isolation * weights.isolation
            + factors.climate * weights.climate;
        raw.round().clamp(0.0, 100.0) as u8
    }

    /// Score every node in place. Node order is untouched.
    ///
    /// Each node reads only its own metrics, its owner's climate rating and
    /// the precomputed `max_in_degree`, so the parallel and sequential passes
    /// produce identical results.
    pub fn score(&self, nodes: &mut [GraphNode], responses: &[SurveyResponse]) {
        let max_in_degree = Self::max_in_degree(nodes);
        let ratings = climate_ratings(responses);

        let score_node = |node: &mut GraphNode| {
            let rating = ratings.get(node.id().as_str()).copied();
            let factors = self.factors(&node.metrics, rating, max_in_degree);
            node.metrics.risk_score = self.combine(&factors);
        };

        if self.config.parallel {
            nodes.par_iter_mut().for_each(score_node);
        } else {
            nodes.iter_mut().for_each(score_node);
        }
    }
}

// First response per student wins, matching lookup by first match
fn climate_ratings(responses: &[SurveyResponse]) -> HashMap<&str, u8> {
    let mut ratings = HashMap::with_capacity(responses.len());
    for response in responses {
        ratings
            .entry(response.student_id.as_str())
            .or_insert(response.climate_rating);
    }
    ratings
}
