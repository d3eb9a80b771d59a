//! Predictive Risk Estimator for classroom peer-relationship surveys.
//!
//! Survey answers become a directed, weighted social graph: preferred peers
//! are POSITIVE edges, uncomfortable peers NEGATIVE ones. Each student gets a
//! 0-100 risk score combining received rejection, structural isolation and
//! their own climate perception, and the classroom gets a global index plus
//! lists of at-risk students, isolated students and mutual-conflict pairs.
//!
//! ```rust
//! use predictr::{analyze, Student, SurveyResponse};
//!
//! let roster = vec![
//!     Student::new("x", "Ximena", "6A"),
//!     Student::new("y", "Yolanda", "6A"),
//! ];
//! let responses = vec![
//!     SurveyResponse::new("x", 2).with_uncomfortable(["y"]),
//!     SurveyResponse::new("y", 4).with_uncomfortable(["x"]),
//! ];
//!
//! let result = analyze(&roster, &responses).unwrap();
//! assert_eq!(result.analysis.tension_groups.len(), 1);
//! ```

// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod errors;
pub mod graph;
pub mod io;
pub mod pipeline;
pub mod report;
pub mod risk;
pub mod survey;

// Re-export commonly used types
pub use crate::core::{
    ClassroomAnalysis, EdgeKind, GraphEdge, GraphNode, NodeMetrics, RiskAnalysis, Student,
    StudentId, SurveyResponse, TensionPair,
};

pub use crate::config::RiskConfig;
pub use crate::errors::{Error, Result};
pub use crate::graph::{find_tension_pairs, GraphBuilder, SocialGraph};
pub use crate::pipeline::{analyze, analyze_with_config};
pub use crate::report::{ReportGenerator, ReportSummary, UnconfiguredReportGenerator};
pub use crate::risk::{AggregateAnalyzer, RiskFactors, RiskLevel, RiskScorer};
pub use crate::survey::{ResponseCoverage, ResponseSet, SurveyIssue};
