//! End-to-end scenarios over literal classroom fixtures.

mod common;

use common::{demo_class, ids, node, numbered_roster, roster};
use predictr::{
    analyze, analyze_with_config, Error, RiskConfig, RiskScorer, SurveyResponse, TensionPair,
};
use pretty_assertions::assert_eq;

#[test]
fn test_preferences_and_missing_response() {
    let students = roster(&["X", "Y", "Z"]);
    let responses = vec![
        SurveyResponse::new("X", 4).with_preferred(["Y", "Z"]),
        SurveyResponse::new("Y", 3).with_preferred(["X"]),
    ];

    let result = analyze(&students, &responses).unwrap();

    for id in ["X", "Y", "Z"] {
        assert_eq!(node(&result, id).in_degree(), 1, "in-degree of {id}");
    }
    assert_eq!(node(&result, "X").out_degree(), 2);
    assert_eq!(node(&result, "Y").out_degree(), 1);
    assert_eq!(node(&result, "Z").out_degree(), 0);

    let config = RiskConfig::default();
    let scorer = RiskScorer::new(&config);
    assert_eq!(scorer.climate_risk(None), 0.5);

    // Z: isolation 0.3 (chose nobody) -> 9 points, neutral climate -> 10 points
    assert_eq!(node(&result, "Z").risk_score(), 19);
    // X: climate (6 - 4) / 5 = 0.4 -> 8 points
    assert_eq!(node(&result, "X").risk_score(), 8);
    // Y: climate 0.6 -> 12 points
    assert_eq!(node(&result, "Y").risk_score(), 12);
    assert!(result.analysis.isolated_students.is_empty());
}

#[test]
fn test_mutual_rejection_creates_single_tension_pair() {
    let students = roster(&["X", "Y"]);
    let responses = vec![
        SurveyResponse::new("X", 3).with_uncomfortable(["Y"]),
        SurveyResponse::new("Y", 3).with_uncomfortable(["X"]),
    ];

    let result = analyze(&students, &responses).unwrap();

    assert_eq!(
        result.analysis.tension_groups,
        vec![TensionPair::new("X".into(), "Y".into())]
    );
    assert_eq!(node(&result, "X").conflict_score(), 1);
    assert_eq!(node(&result, "Y").conflict_score(), 1);
}

#[test]
fn test_tension_pair_independent_of_response_order() {
    let students = roster(&["b", "a"]);
    let forward = vec![
        SurveyResponse::new("a", 3).with_uncomfortable(["b"]),
        SurveyResponse::new("b", 3).with_uncomfortable(["a"]),
    ];
    let backward: Vec<_> = forward.iter().rev().cloned().collect();

    let first = analyze(&students, &forward).unwrap();
    let second = analyze(&students, &backward).unwrap();

    assert_eq!(first.analysis.tension_groups, second.analysis.tension_groups);
    assert_eq!(first.analysis.tension_groups[0].first().as_str(), "a");
}

#[test]
fn test_student_never_chosen_is_isolated() {
    let (students, responses) = demo_class();
    assert_eq!(students.len(), 20);

    let result = analyze(&students, &responses).unwrap();
    let s20 = node(&result, "s-20");

    assert_eq!(s20.in_degree(), 0);
    assert_eq!(s20.out_degree(), 2);
    assert!(ids(&result.analysis.isolated_students).contains(&"s-20"));

    let config = RiskConfig::default();
    let scorer = RiskScorer::new(&config);
    let max_in = RiskScorer::max_in_degree(&result.nodes);
    assert!((scorer.isolation_risk(&s20.metrics, max_in) - 0.7).abs() < 1e-12);

    assert_eq!(
        result.analysis.tension_groups,
        vec![TensionPair::new("s-5".into(), "s-6".into())]
    );
}

#[test]
fn test_conflict_saturates_at_threshold() {
    let students = roster(&["v", "a", "b", "c", "d", "e", "f"]);
    let five: Vec<_> = ["a", "b", "c", "d", "e"]
        .iter()
        .map(|id| SurveyResponse::new(*id, 3).with_uncomfortable(["v"]))
        .collect();
    let mut six = five.clone();
    six.push(SurveyResponse::new("f", 3).with_uncomfortable(["v"]));

    let with_five = analyze(&students, &five).unwrap();
    let with_six = analyze(&students, &six).unwrap();

    let v = node(&with_five, "v");
    assert_eq!(v.conflict_score(), 5);

    let config = RiskConfig::default();
    assert_eq!(RiskScorer::new(&config).conflict_risk(5), 1.0);

    // 50 conflict + 30 isolation (disconnected) + 10 neutral climate
    assert_eq!(v.risk_score(), 90);
    assert_eq!(node(&with_six, "v").risk_score(), 90);
    assert_eq!(ids(&with_five.analysis.at_risk_students), vec!["v"]);
}

#[test]
fn test_no_responses_gives_uniform_scores() {
    let students = numbered_roster(6);
    let result = analyze(&students, &[]).unwrap();

    assert!(result.edges.is_empty());
    assert!(result.nodes.iter().all(|n| n.risk_score() == 40));
    assert_eq!(result.analysis.global_risk, 40);
    assert!(result.analysis.at_risk_students.is_empty());
    assert_eq!(result.analysis.isolated_students.len(), 6);
    assert!(result.analysis.tension_groups.is_empty());
}

#[test]
fn test_empty_roster_is_error() {
    assert!(matches!(analyze(&[], &[]), Err(Error::EmptyRoster)));
}

#[test]
fn test_inputs_untouched_and_nodes_in_roster_order() {
    let (students, responses) = demo_class();
    let students_before = students.clone();
    let responses_before = responses.clone();

    let result = analyze(&students, &responses).unwrap();

    assert_eq!(students, students_before);
    assert_eq!(responses, responses_before);
    let node_ids: Vec<_> = result.nodes.iter().map(|n| n.student.clone()).collect();
    assert_eq!(node_ids, students);
}

#[test]
fn test_raised_threshold_shrinks_at_risk_list() {
    let students = roster(&["v", "a", "b", "c"]);
    let responses: Vec<_> = ["a", "b", "c"]
        .iter()
        .map(|id| SurveyResponse::new(*id, 3).with_uncomfortable(["v"]))
        .collect();

    let default_result = analyze(&students, &responses).unwrap();
    assert_eq!(ids(&default_result.analysis.at_risk_students), vec!["v"]);

    let mut config = RiskConfig::default();
    config.thresholds.at_risk = 95;
    let strict = analyze_with_config(&students, &responses, &config).unwrap();
    assert!(strict.analysis.at_risk_students.is_empty());
    assert_eq!(strict.nodes, default_result.nodes);
}

#[test]
fn test_output_survives_clone_and_annotation() {
    let (students, responses) = demo_class();
    let result = analyze(&students, &responses).unwrap();

    // Layout engines attach position fields to copies of the node objects
    let mut layout_nodes = serde_json::to_value(&result.nodes).unwrap();
    for value in layout_nodes.as_array_mut().unwrap() {
        value["x"] = serde_json::json!(0.0);
        value["y"] = serde_json::json!(0.0);
    }

    let again = analyze(&students, &responses).unwrap();
    assert_eq!(result, again);
    assert_eq!(layout_nodes.as_array().unwrap().len(), result.nodes.len());
}
