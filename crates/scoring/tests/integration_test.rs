//! Integration tests for the scorers.
//!
//! These run raw questionnaire payloads through coercion and both scorers,
//! the way the recommendation service does.

use chrono::NaiveDate;
use questionnaire::{parse_profile, Course};
use scoring::{CourseScorer, ExpertScorer, FallbackScorer, NoJitter, SeededJitter};
use serde_json::json;

fn fixed_time() -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 5, 14)
        .unwrap()
        .and_hms_opt(9, 30, 15)
        .unwrap()
}

#[test]
fn test_worked_example_from_json() {
    let profile = parse_profile(&json!({
        "cgpa": 3.8,
        "programming": 4,
        "gameDevelopment": 4,
        "difficulty": 2,
        "learningStyle": 1
    }));

    let rec = ExpertScorer::new().recommend_at(&profile, fixed_time());

    assert_eq!(rec.first_recommended_course, Course::Gaming);
    assert_eq!(rec.alternative_recommended_course, Course::WebDevelopment);
    assert_eq!(rec.probability(Course::Gaming), 1.563);
    assert_eq!(rec.probability(Course::WebDevelopment), 1.25);
    assert_eq!(rec.probability(Course::FuzzyLogic), 0.711);
    assert_eq!(rec.probability(Course::DatabaseDesign), 0.878);
    assert_eq!(rec.probability(Course::SoftwareValidation), 0.961);
    assert_eq!(rec.timestamp, "2025-05-14 09:30:15");
}

#[test]
fn test_empty_payload_is_complete() {
    let profile = parse_profile(&json!({}));
    let rec = ExpertScorer::new().recommend_at(&profile, fixed_time());

    for course in Course::ALL {
        assert!(rec.probability(course) >= 0.1, "{} below floor", course);
    }
    // Defaults land in the "solid grades" branch, class 2.5 → Web Development
    assert_eq!(rec.tree_recommendation, Course::WebDevelopment);
    assert_eq!(rec.first_recommended_course, Course::WebDevelopment);
    assert_eq!(rec.first_confidence, 0.45);

    let json = serde_json::to_value(&rec).unwrap();
    for key in [
        "probability_Gaming",
        "probability_WebDevelopment",
        "probability_FuzzyLogic",
        "probability_DatabaseDesign",
        "probability_SoftwareValidation_Verification",
    ] {
        assert!(json[key].as_f64().unwrap() >= 0.1);
    }
}

#[test]
fn test_high_achiever_rule_order_from_json() {
    let scorer = ExpertScorer::new();
    let tree = |payload: serde_json::Value| {
        scorer
            .recommend_at(&parse_profile(&payload), fixed_time())
            .tree_recommendation
    };

    let all_interested = json!({
        "cgpa": 4.0, "programming": 5,
        "gameDevelopment": 3, "webDevelopment": 3,
        "artificialIntelligence": 3, "databaseSystem": 3
    });
    assert_eq!(tree(all_interested), Course::Gaming);

    let web_first = json!({
        "cgpa": 4.0, "programming": 5,
        "gameDevelopment": 2, "webDevelopment": 3,
        "artificialIntelligence": 5, "databaseSystem": 5
    });
    assert_eq!(tree(web_first), Course::WebDevelopment);

    let ai_first = json!({
        "cgpa": 4.0, "programming": 5,
        "webDevelopment": 0, "artificialIntelligence": 3, "databaseSystem": 4
    });
    assert_eq!(tree(ai_first), Course::FuzzyLogic);

    let db_only = json!({ "cgpa": 4.0, "programming": 5, "databaseSystem": 3 });
    assert_eq!(tree(db_only), Course::DatabaseDesign);

    let none = json!({ "cgpa": 4.0, "programming": 5 });
    assert_eq!(tree(none), Course::SoftwareValidation);
}

#[test]
fn test_zero_cgpa_tie_break_follows_table_order() {
    let profile = parse_profile(&json!({ "cgpa": 0 }));
    let rec = ExpertScorer::new().recommend_at(&profile, fixed_time());

    assert_eq!(rec.first_recommended_course, Course::DatabaseDesign);
    assert_eq!(rec.first_confidence, 0.33);
    // The remaining four all sit on the floor; Gaming comes first in the table
    assert_eq!(rec.alternative_recommended_course, Course::Gaming);
    assert_eq!(rec.second_confidence, 0.1);
}

#[test]
fn test_primary_is_idempotent() {
    let profile = parse_profile(&json!({
        "cgpa": "3.3", "multimedia": 5, "softwareEngineering": 2,
        "softwareValidation": 4, "difficulty": 1, "learningStyle": 3
    }));
    let scorer = ExpertScorer::new();
    let first = scorer.recommend_at(&profile, fixed_time());
    let second = scorer.recommend_at(&profile, fixed_time());
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn test_fallback_shape_matches_primary() {
    let profile = parse_profile(&json!({ "cgpa": 3.1, "webDevelopment": 5 }));
    let primary = serde_json::to_value(ExpertScorer::new().recommend_at(&profile, fixed_time())).unwrap();
    let fallback = serde_json::to_value(
        FallbackScorer::new(SeededJitter::new(1)).recommend_at(&profile, fixed_time()),
    )
    .unwrap();

    let primary_keys: Vec<&String> = primary.as_object().unwrap().keys().collect();
    let fallback_obj = fallback.as_object().unwrap();
    for key in primary_keys {
        assert!(fallback_obj.contains_key(key), "fallback missing {}", key);
    }
    assert_eq!(fallback["method"], "Intelligent Fallback Algorithm");
    assert_eq!(fallback["firstRecommendedCourse"], "Web Development");
}

#[test]
fn test_fallback_without_jitter_is_deterministic() {
    let profile = parse_profile(&json!({ "programming": 5, "artificialIntelligence": 5, "difficulty": 3 }));
    let scorer = FallbackScorer::new(NoJitter);
    let a = scorer.recommend_at(&profile, fixed_time());
    let b = scorer.recommend_at(&profile, fixed_time());
    assert_eq!(a, b);
    assert_eq!(a.first_recommended_course, Course::FuzzyLogic);
}
