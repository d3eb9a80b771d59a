//! Survey intake on the caller side of the risk model.
//!
//! The analysis itself processes whatever responses it is given. This module
//! provides the conventions a survey collector is expected to uphold: one
//! live response per student, deduplicated peer lists, and form limits.

pub mod validation;

pub use validation::{validate_response, validate_responses, SurveyIssue};

use crate::core::{Student, StudentId, SurveyResponse};
use serde::Serialize;
use std::collections::HashSet;

impl SurveyResponse {
    /// Copy of this response with self references removed and each peer list
    /// deduplicated, keeping first occurrences.
    pub fn normalized(&self) -> Self {
        let owner = &self.student_id;
        let dedup = |peers: &[StudentId]| -> Vec<StudentId> {
            let mut seen = HashSet::new();
            peers
                .iter()
                .filter(|peer| *peer != owner && seen.insert(*peer))
                .cloned()
                .collect()
        };

        Self {
            preferred_peers: dedup(&self.preferred_peers),
            uncomfortable_peers: dedup(&self.uncomfortable_peers),
            perceived_isolated: dedup(&self.perceived_isolated),
            ..self.clone()
        }
    }
}

/// How many roster members have answered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseCoverage {
    pub received: usize,
    pub roster_size: usize,
}

impl ResponseCoverage {
    pub fn ratio(&self) -> f64 {
        if self.roster_size == 0 {
            0.0
        } else {
            self.received as f64 / self.roster_size as f64
        }
    }
}

/// Response store that keeps at most one response per student.
///
/// Submitting again for the same student removes the earlier response and
/// appends the new one, so iteration order reflects submission recency.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResponseSet {
    responses: Vec<SurveyResponse>,
}

impl ResponseSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `response`, returning the one it replaced.
    pub fn submit(&mut self, response: SurveyResponse) -> Option<SurveyResponse> {
        let replaced = self
            .responses
            .iter()
            .position(|r| r.student_id == response.student_id)
            .map(|index| self.responses.remove(index));
        self.responses.push(response);
        replaced
    }

    pub fn get(&self, student_id: &str) -> Option<&SurveyResponse> {
        self.responses
            .iter()
            .find(|r| r.student_id.as_str() == student_id)
    }

    pub fn len(&self) -> usize {
        self.responses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }

    pub fn as_slice(&self) -> &[SurveyResponse] {
        &self.responses
    }

    pub fn coverage(&self, roster: &[Student]) -> ResponseCoverage {
        let members: HashSet<&str> = roster.iter().map(|s| s.id.as_str()).collect();
        ResponseCoverage {
            received: self
                .responses
                .iter()
                .filter(|r| members.contains(r.student_id.as_str()))
                .count(),
            roster_size: roster.len(),
        }
    }
}

impl FromIterator<SurveyResponse> for ResponseSet {
    fn from_iter<I: IntoIterator<Item = SurveyResponse>>(iter: I) -> Self {
        let mut set = Self::new();
        for response in iter {
            set.submit(response);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_normalized_dedups_and_drops_self() {
        let response = SurveyResponse::new("a", 4)
            .with_preferred(["b", "a", "c", "b"])
            .with_uncomfortable(["d", "d"]);

        let normalized = response.normalized();
        assert_eq!(
            normalized.preferred_peers,
            vec![StudentId::from("b"), StudentId::from("c")]
        );
        assert_eq!(normalized.uncomfortable_peers, vec![StudentId::from("d")]);
        assert_eq!(normalized.climate_rating, 4);
    }

    #[test]
    fn test_later_submission_replaces_earlier() {
        let mut set = ResponseSet::new();
        set.submit(SurveyResponse::new("a", 2));
        set.submit(SurveyResponse::new("b", 3));
        let replaced = set.submit(SurveyResponse::new("a", 5));

        assert_eq!(replaced.map(|r| r.climate_rating), Some(2));
        assert_eq!(set.len(), 2);
        assert_eq!(set.get("a").map(|r| r.climate_rating), Some(5));
        let order: Vec<_> = set.as_slice().iter().map(|r| r.student_id.as_str()).collect();
        assert_eq!(order, vec!["b", "a"]);
    }

    #[test]
    fn test_coverage_counts_roster_members_only() {
        let roster = vec![
            Student::new("a", "A", "6A"),
            Student::new("b", "B", "6A"),
            Student::new("c", "C", "6A"),
            Student::new("d", "D", "6A"),
        ];
        let set: ResponseSet = vec![
            SurveyResponse::new("a", 3),
            SurveyResponse::new("b", 3),
            SurveyResponse::new("outsider", 3),
        ]
        .into_iter()
        .collect();

        let coverage = set.coverage(&roster);
        assert_eq!(
            coverage,
            ResponseCoverage {
                received: 2,
                roster_size: 4
            }
        );
        assert_eq!(coverage.ratio(), 0.5);
    }
}
