//! Classroom-level aggregation over scored nodes.

use crate::config::Thresholds;
use crate::core::{GraphEdge, GraphNode, RiskAnalysis};
use crate::errors::{Error, Result};
use crate::graph::find_tension_pairs;

pub struct AggregateAnalyzer<'a> {
    thresholds: &'a Thresholds,
}

impl<'a> AggregateAnalyzer<'a> {
    pub fn new(thresholds: &'a Thresholds) -> Self {
        Self { thresholds }
    }

    /// Rounded mean risk score. Fails on an empty node set.
    pub fn global_risk(nodes: &[GraphNode]) -> Result<u8> {
        if nodes.is_empty() {
            return Err(Error::EmptyRoster);
        }
        let total: u64 = nodes.iter().map(|n| u64::from(n.risk_score())).sum();
        Ok((total as f64 / nodes.len() as f64).round() as u8)
    }

    /// Nodes strictly above the at-risk threshold, highest first.
    /// Ties keep roster order.
    pub fn at_risk_students(&self, nodes: &[GraphNode]) -> Vec<GraphNode> {
        let mut at_risk: Vec<GraphNode> = nodes
            .iter()
            .filter(|n| n.risk_score() > self.thresholds.at_risk)
            .cloned()
            .collect();
        at_risk.sort_by(|a, b| b.risk_score().cmp(&a.risk_score()));
        at_risk
    }

    /// Nodes with no incoming positive edge, fewest outgoing choices first.
    pub fn isolated_students(nodes: &[GraphNode]) -> Vec<GraphNode> {
        let mut isolated: Vec<GraphNode> = nodes
            .iter()
            .filter(|n| n.in_degree() == 0)
            .cloned()
            .collect();
        isolated.sort_by_key(GraphNode::out_degree);
        isolated
    }

    pub fn analyze(&self, nodes: &[GraphNode], edges: &[GraphEdge]) -> Result<RiskAnalysis> {
        Ok(RiskAnalysis {
            global_risk: Self::global_risk(nodes)?,
            at_risk_students: self.at_risk_students(nodes),
            isolated_students: Self::isolated_students(nodes),
            tension_groups: find_tension_pairs(edges),
            recommendations: String::new(),
        })
    }
}
