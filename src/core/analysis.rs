//! Result types produced by a classroom analysis run.

use super::{GraphEdge, GraphNode, StudentId};
use serde::{Deserialize, Serialize};

/// Two students who each marked the other as an uncomfortable peer.
///
/// Always stored with the smaller id first so `(A, B)` and `(B, A)` compare equal.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(StudentId, StudentId)", into = "(StudentId, StudentId)")]
pub struct TensionPair(StudentId, StudentId);

impl TensionPair {
    pub fn new(a: StudentId, b: StudentId) -> Self {
        if a <= b {
            Self(a, b)
        } else {
            Self(b, a)
        }
    }

    pub fn first(&self) -> &StudentId {
        &self.0
    }

    pub fn second(&self) -> &StudentId {
        &self.1
    }

    pub fn contains(&self, id: &StudentId) -> bool {
        &self.0 == id || &self.1 == id
    }
}

impl From<(StudentId, StudentId)> for TensionPair {
    fn from((a, b): (StudentId, StudentId)) -> Self {
        Self::new(a, b)
    }
}

impl From<TensionPair> for (StudentId, StudentId) {
    fn from(pair: TensionPair) -> Self {
        (pair.0, pair.1)
    }
}

/// Classroom-level summary derived from the scored graph.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAnalysis {
    /// Rounded mean of all risk scores, 0-100
    pub global_risk: u8,
    /// Nodes above the at-risk threshold, highest score first
    pub at_risk_students: Vec<GraphNode>,
    /// Nodes nobody chose as a preferred peer, fewest outgoing choices first
    pub isolated_students: Vec<GraphNode>,
    pub tension_groups: Vec<TensionPair>,
    /// Free text supplied by a report generator; empty until attached
    #[serde(default)]
    pub recommendations: String,
}

impl RiskAnalysis {
    /// Attach report text verbatim. The text is never inspected.
    pub fn with_recommendations(mut self, text: impl Into<String>) -> Self {
        self.recommendations = text.into();
        self
    }
}

/// Everything a single `analyze` call returns.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassroomAnalysis {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
    pub analysis: RiskAnalysis,
}

impl ClassroomAnalysis {
    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.id().as_str() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tension_pair_is_canonical() {
        let ab = TensionPair::new("s-2".into(), "s-1".into());
        let ba = TensionPair::new("s-1".into(), "s-2".into());
        assert_eq!(ab, ba);
        assert_eq!(ab.first().as_str(), "s-1");
        assert_eq!(ab.second().as_str(), "s-2");
    }

    #[test]
    fn test_tension_pair_canonicalizes_on_deserialize() {
        let pair: TensionPair = serde_json::from_str(r#"["zed", "amy"]"#).unwrap();
        assert_eq!(pair.first().as_str(), "amy");
        assert_eq!(serde_json::to_string(&pair).unwrap(), r#"["amy","zed"]"#);
    }

    #[test]
    fn test_recommendations_attached_verbatim() {
        let analysis = RiskAnalysis {
            global_risk: 10,
            at_risk_students: vec![],
            isolated_students: vec![],
            tension_groups: vec![],
            recommendations: String::new(),
        }
        .with_recommendations("  {not json} ");
        assert_eq!(analysis.recommendations, "  {not json} ");
    }
}
