//! Reciprocal-conflict detection.
//!
//! A tension pair exists when A marked B as uncomfortable and B marked A.
//! Only mutual pairs (2-cycles) are reported; longer chains are not.

use crate::core::{GraphEdge, TensionPair};
use petgraph::graphmap::DiGraphMap;
use std::collections::HashSet;

/// Mutual negative pairs in order of first discovery over `edges`.
///
/// Negative edges are indexed in a `DiGraphMap` so each reciprocal lookup is
/// a hash probe rather than a scan of the edge list.
pub fn find_tension_pairs(edges: &[GraphEdge]) -> Vec<TensionPair> {
    let negative: DiGraphMap<&str, ()> = DiGraphMap::from_edges(
        edges
            .iter()
            .filter(|edge| edge.is_negative())
            .map(|edge| (edge.source.as_str(), edge.target.as_str())),
    );

    let mut seen = HashSet::new();
    edges
        .iter()
        .filter(|edge| edge.is_negative() && edge.source != edge.target)
        .filter(|edge| negative.contains_edge(edge.target.as_str(), edge.source.as_str()))
        .map(|edge| TensionPair::new(edge.source.clone(), edge.target.clone()))
        .filter(|pair| seen.insert(pair.clone()))
        .collect()
}
