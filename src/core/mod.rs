pub mod analysis;

pub use analysis::{ClassroomAnalysis, RiskAnalysis, TensionPair};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Opaque student identifier.
///
/// Ordering is byte-wise on the underlying string, which is the total order
/// used to canonicalize tension pairs.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(String);

impl StudentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for StudentId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for StudentId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for StudentId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    pub grade: String,
}

impl Student {
    pub fn new(
        id: impl Into<StudentId>,
        name: impl Into<String>,
        grade: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            grade: grade.into(),
        }
    }
}

/// One student's answers to the peer-relationship survey.
///
/// Only `preferred_peers`, `uncomfortable_peers` and `climate_rating` feed the
/// risk model; the remaining fields are carried through for collaborators.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyResponse {
    pub student_id: StudentId,
    #[serde(
        default,
        with = "chrono::serde::ts_milliseconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub preferred_peers: Vec<StudentId>,
    #[serde(default)]
    pub uncomfortable_peers: Vec<StudentId>,
    #[serde(default)]
    pub perceived_isolated: Vec<StudentId>,
    /// Likert 1-5, where 1 is a very bad classroom climate
    pub climate_rating: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub safety_rating: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub belonging_rating: Option<u8>,
    #[serde(default)]
    pub comments: String,
}

impl SurveyResponse {
    pub fn new(student_id: impl Into<StudentId>, climate_rating: u8) -> Self {
        Self {
            student_id: student_id.into(),
            timestamp: None,
            preferred_peers: Vec::new(),
            uncomfortable_peers: Vec::new(),
            perceived_isolated: Vec::new(),
            climate_rating,
            safety_rating: None,
            belonging_rating: None,
            comments: String::new(),
        }
    }

    pub fn with_preferred<I, S>(mut self, peers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<StudentId>,
    {
        self.preferred_peers = peers.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_uncomfortable<I, S>(mut self, peers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<StudentId>,
    {
        self.uncomfortable_peers = peers.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }
}

/// Metrics derived for a vertex during graph building and scoring.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeMetrics {
    /// Positive edges received (popularity)
    pub in_degree: u32,
    /// Positive edges sent (sociability)
    pub out_degree: u32,
    /// Negative edges received
    pub conflict_score: u32,
    /// Integrated risk, 0-100
    pub risk_score: u8,
    /// Reserved for community detection; always 0
    pub cluster_id: u32,
}

/// A roster member together with its derived graph metrics.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphNode {
    #[serde(flatten)]
    pub student: Student,
    #[serde(flatten)]
    pub metrics: NodeMetrics,
}

impl GraphNode {
    pub fn new(student: Student, metrics: NodeMetrics) -> Self {
        Self { student, metrics }
    }

    pub fn id(&self) -> &StudentId {
        &self.student.id
    }

    pub fn in_degree(&self) -> u32 {
        self.metrics.in_degree
    }

    pub fn out_degree(&self) -> u32 {
        self.metrics.out_degree
    }

    pub fn conflict_score(&self) -> u32 {
        self.metrics.conflict_score
    }

    pub fn risk_score(&self) -> u8 {
        self.metrics.risk_score
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EdgeKind {
    /// Source lists target as a preferred peer
    Positive,
    /// Source lists target as an uncomfortable peer
    Negative,
}

impl EdgeKind {
    pub fn weight(self) -> u8 {
        match self {
            EdgeKind::Positive => 1,
            EdgeKind::Negative => 2,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub source: StudentId,
    pub target: StudentId,
    #[serde(rename = "type")]
    pub kind: EdgeKind,
    pub weight: u8,
}

impl GraphEdge {
    pub fn new(source: StudentId, target: StudentId, kind: EdgeKind) -> Self {
        Self {
            source,
            target,
            kind,
            weight: kind.weight(),
        }
    }

    pub fn is_negative(&self) -> bool {
        self.kind == EdgeKind::Negative
    }
}
