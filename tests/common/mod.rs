// Test utility module for predictr integration tests
#![allow(dead_code)]

use predictr::{ClassroomAnalysis, GraphNode, Student, SurveyResponse};

/// Roster with ids `s-1` ..= `s-n`.
pub fn numbered_roster(n: usize) -> Vec<Student> {
    (1..=n)
        .map(|i| Student::new(format!("s-{i}"), format!("Student {i}"), "6º Básico A"))
        .collect()
}

pub fn roster(ids: &[&str]) -> Vec<Student> {
    ids.iter()
        .map(|id| Student::new(*id, format!("Student {id}"), "6º Básico A"))
        .collect()
}

pub fn node<'a>(result: &'a ClassroomAnalysis, id: &str) -> &'a GraphNode {
    result
        .node(id)
        .unwrap_or_else(|| panic!("node {id} missing from result"))
}

pub fn ids(nodes: &[GraphNode]) -> Vec<&str> {
    nodes.iter().map(|n| n.id().as_str()).collect()
}

/// Literal version of a 20-student class: s-1 and s-2 are popular, s-5 and
/// s-6 reject each other, s-20 chooses peers but is never chosen.
pub fn demo_class() -> (Vec<Student>, Vec<SurveyResponse>) {
    let roster = numbered_roster(20);
    let mut responses = Vec::new();
    for i in 1..=20 {
        let id = format!("s-{i}");
        let response = match i {
            20 => SurveyResponse::new(id, 2).with_preferred(["s-1", "s-2"]),
            5 => SurveyResponse::new(id, 3)
                .with_preferred(["s-8", "s-9"])
                .with_uncomfortable(["s-6"]),
            6 => SurveyResponse::new(id, 3)
                .with_preferred(["s-2", "s-3"])
                .with_uncomfortable(["s-5"]),
            1 => SurveyResponse::new(id, 4).with_preferred(["s-2", "s-3", "s-4"]),
            2 => SurveyResponse::new(id, 5).with_preferred(["s-1", "s-3", "s-7"]),
            _ => {
                let third = format!("s-{}", (i % 17) + 3);
                SurveyResponse::new(id, 3 + (i % 3) as u8).with_preferred([
                    "s-1".to_string(),
                    "s-2".to_string(),
                    third,
                ])
            }
        };
        responses.push(response.normalized());
    }
    (roster, responses)
}
