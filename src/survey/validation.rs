//! Survey response validation.
//!
//! Validation accumulates every issue in a response rather than stopping at
//! the first one. Issues are advisory: the analysis still silently drops
//! whatever it cannot resolve.

use crate::config::{ClimateScale, SurveyLimits};
use crate::core::{Student, StudentId, SurveyResponse};
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SurveyIssue {
    #[error("response from {student} who is not on the roster")]
    UnknownRespondent { student: StudentId },

    #[error("{student} references {peer} who is not on the roster")]
    UnknownPeer { student: StudentId, peer: StudentId },

    #[error("{student} lists themselves as a peer")]
    SelfReference { student: StudentId },

    #[error("{student} lists {peer} more than once")]
    DuplicatePeer { student: StudentId, peer: StudentId },

    #[error("{student} chose {count} preferred peers (max {max})")]
    TooManyPreferred {
        student: StudentId,
        count: usize,
        max: usize,
    },

    #[error("{student} chose {count} uncomfortable peers (max {max})")]
    TooManyUncomfortable {
        student: StudentId,
        count: usize,
        max: usize,
    },

    #[error("{student} rated climate {rating}, outside 1-{max}")]
    ClimateOutOfRange { student: StudentId, rating: u8, max: u8 },
}

/// Every issue found in one response.
pub fn validate_response(
    response: &SurveyResponse,
    roster: &[Student],
    limits: &SurveyLimits,
    climate: &ClimateScale,
) -> Vec<SurveyIssue> {
    let members: HashSet<&StudentId> = roster.iter().map(|s| &s.id).collect();
    check_response(response, &members, limits, climate)
}

/// Every issue across a batch of responses, in input order.
pub fn validate_responses(
    responses: &[SurveyResponse],
    roster: &[Student],
    limits: &SurveyLimits,
    climate: &ClimateScale,
) -> Vec<SurveyIssue> {
    let members: HashSet<&StudentId> = roster.iter().map(|s| &s.id).collect();
    responses
        .iter()
        .flat_map(|response| check_response(response, &members, limits, climate))
        .collect()
}

fn check_response(
    response: &SurveyResponse,
    members: &HashSet<&StudentId>,
    limits: &SurveyLimits,
    climate: &ClimateScale,
) -> Vec<SurveyIssue> {
    let student = &response.student_id;
    let mut issues = Vec::new();

    if !members.contains(student) {
        issues.push(SurveyIssue::UnknownRespondent {
            student: student.clone(),
        });
    }

    if response.preferred_peers.len() > limits.max_preferred {
        issues.push(SurveyIssue::TooManyPreferred {
            student: student.clone(),
            count: response.preferred_peers.len(),
            max: limits.max_preferred,
        });
    }

    if response.uncomfortable_peers.len() > limits.max_uncomfortable {
        issues.push(SurveyIssue::TooManyUncomfortable {
            student: student.clone(),
            count: response.uncomfortable_peers.len(),
            max: limits.max_uncomfortable,
        });
    }

    for peers in [&response.preferred_peers, &response.uncomfortable_peers] {
        issues.extend(check_peer_list(student, peers, members));
    }

    if !climate.contains(response.climate_rating) {
        issues.push(SurveyIssue::ClimateOutOfRange {
            student: student.clone(),
            rating: response.climate_rating,
            max: climate.max_rating,
        });
    }

    issues
}

fn check_peer_list(
    student: &StudentId,
    peers: &[StudentId],
    members: &HashSet<&StudentId>,
) -> Vec<SurveyIssue> {
    let mut seen = HashSet::new();
    let mut issues = Vec::new();

    for peer in peers {
        if peer == student {
            issues.push(SurveyIssue::SelfReference {
                student: student.clone(),
            });
        } else if !members.contains(peer) {
            issues.push(SurveyIssue::UnknownPeer {
                student: student.clone(),
                peer: peer.clone(),
            });
        }
        if !seen.insert(peer) {
            issues.push(SurveyIssue::DuplicatePeer {
                student: student.clone(),
                peer: peer.clone(),
            });
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn roster() -> Vec<Student> {
        ["a", "b", "c", "d", "e"]
            .iter()
            .map(|id| Student::new(*id, id.to_uppercase(), "6A"))
            .collect()
    }

    fn check(response: &SurveyResponse) -> Vec<SurveyIssue> {
        validate_response(
            response,
            &roster(),
            &SurveyLimits::default(),
            &ClimateScale::default(),
        )
    }

    #[test]
    fn test_clean_response_has_no_issues() {
        let response = SurveyResponse::new("a", 4)
            .with_preferred(["b", "c", "d"])
            .with_uncomfortable(["e"]);
        assert!(check(&response).is_empty());
    }

    #[test]
    fn test_all_issues_accumulated() {
        let response = SurveyResponse::new("a", 7)
            .with_preferred(["a", "b", "b", "ghost"])
            .with_uncomfortable(["c", "d", "e"]);

        let issues = check(&response);
        assert_eq!(
            issues,
            vec![
                SurveyIssue::TooManyPreferred {
                    student: "a".into(),
                    count: 4,
                    max: 3
                },
                SurveyIssue::TooManyUncomfortable {
                    student: "a".into(),
                    count: 3,
                    max: 2
                },
                SurveyIssue::SelfReference { student: "a".into() },
                SurveyIssue::DuplicatePeer {
                    student: "a".into(),
                    peer: "b".into()
                },
                SurveyIssue::UnknownPeer {
                    student: "a".into(),
                    peer: "ghost".into()
                },
                SurveyIssue::ClimateOutOfRange {
                    student: "a".into(),
                    rating: 7,
                    max: 5
                },
            ]
        );
    }

    #[test]
    fn test_unknown_respondent_reported() {
        let issues = check(&SurveyResponse::new("zed", 3));
        assert_eq!(
            issues,
            vec![SurveyIssue::UnknownRespondent {
                student: "zed".into()
            }]
        );
        assert_eq!(
            issues[0].to_string(),
            "response from zed who is not on the roster"
        );
    }

    #[test]
    fn test_batch_validation_preserves_order() {
        let responses = vec![
            SurveyResponse::new("a", 0),
            SurveyResponse::new("b", 3).with_uncomfortable(["b"]),
        ];
        let issues = validate_responses(
            &responses,
            &roster(),
            &SurveyLimits::default(),
            &ClimateScale::default(),
        );
        assert_eq!(issues.len(), 2);
        assert!(matches!(issues[0], SurveyIssue::ClimateOutOfRange { .. }));
        assert!(matches!(issues[1], SurveyIssue::SelfReference { .. }));
    }
}
