//! Social graph construction from survey responses.
//!
//! Every response contributes directed edges from its owner:
//! - a POSITIVE edge (weight 1) per resolvable preferred peer
//! - a NEGATIVE edge (weight 2) per resolvable uncomfortable peer
//!
//! Degree counters are accumulated in a metrics table indexed by roster
//! position, so `Student` records are never mutated.

use crate::core::{
    EdgeKind, GraphEdge, GraphNode, NodeMetrics, Student, StudentId, SurveyResponse,
};
use std::collections::HashMap;
use tracing::debug;

/// Vertices and edges of one classroom, with scores not yet assigned.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SocialGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

/// References that did not become edges.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BuildStats {
    /// Responses whose owner is not on the roster
    pub skipped_responses: usize,
    /// Peer ids that were unknown or pointed at the owner
    pub dropped_references: usize,
}

pub struct GraphBuilder<'a> {
    roster: &'a [Student],
    index: HashMap<&'a str, usize>,
    metrics: Vec<NodeMetrics>,
    edges: Vec<GraphEdge>,
    stats: BuildStats,
}

impl<'a> GraphBuilder<'a> {
    pub fn new(roster: &'a [Student]) -> Self {
        let mut index = HashMap::with_capacity(roster.len());
        for (position, student) in roster.iter().enumerate() {
            index.entry(student.id.as_str()).or_insert(position);
        }

        Self {
            roster,
            index,
            metrics: vec![NodeMetrics::default(); roster.len()],
            edges: Vec::new(),
            stats: BuildStats::default(),
        }
    }

    /// Build the graph for `roster` from all `responses` in one call.
    pub fn build(roster: &'a [Student], responses: &[SurveyResponse]) -> SocialGraph {
        let mut builder = Self::new(roster);
        for response in responses {
            builder.add_response(response);
        }
        builder.finish()
    }

    pub fn add_response(&mut self, response: &SurveyResponse) {
        let Some(&owner) = self.index.get(response.student_id.as_str()) else {
            debug!(student = %response.student_id, "Skipping response from student not on roster");
            self.stats.skipped_responses += 1;
            return;
        };

        for peer in &response.preferred_peers {
            if let Some(target) = self.resolve(owner, peer) {
                self.push_edge(owner, target, EdgeKind::Positive);
                self.metrics[target].in_degree += 1;
                self.metrics[owner].out_degree += 1;
            }
        }

        for peer in &response.uncomfortable_peers {
            if let Some(target) = self.resolve(owner, peer) {
                self.push_edge(owner, target, EdgeKind::Negative);
                self.metrics[target].conflict_score += 1;
            }
        }
    }

    pub fn stats(&self) -> BuildStats {
        self.stats
    }

    pub fn finish(self) -> SocialGraph {
        debug!(
            nodes = self.roster.len(),
            edges = self.edges.len(),
            skipped_responses = self.stats.skipped_responses,
            dropped_references = self.stats.dropped_references,
            "Social graph built"
        );

        let nodes = self
            .roster
            .iter()
            .zip(self.metrics)
            .map(|(student, metrics)| GraphNode::new(student.clone(), metrics))
            .collect();

        SocialGraph {
            nodes,
            edges: self.edges,
        }
    }

    // Roster position of `peer`, unless it is unknown or the owner itself
    fn resolve(&mut self, owner: usize, peer: &StudentId) -> Option<usize> {
        match self.index.get(peer.as_str()) {
            Some(&target) if target != owner => Some(target),
            _ => {
                self.stats.dropped_references += 1;
                None
            }
        }
    }

    fn push_edge(&mut self, source: usize, target: usize, kind: EdgeKind) {
        self.edges.push(GraphEdge::new(
            self.roster[source].id.clone(),
            self.roster[target].id.clone(),
            kind,
        ));
    }
}
