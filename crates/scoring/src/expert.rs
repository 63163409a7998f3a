//! The primary ("expert") recommendation scorer.
//!
//! ## Algorithm
//! 1. Subject strengths, weighted per course
//! 2. Interests, one-to-one onto courses
//! 3. CGPA multiplier, capped at 1.25
//! 4. Flat bonus for the rule-classification course
//! 5. Difficulty and learning-style multipliers
//! 6. Floor at 0.1, then a stable descending sort
//!
//! The scorer is a pure function of the profile; only `recommend` reads
//! the clock.

use chrono::NaiveDateTime;
use questionnaire::{Course, StudentProfile};

use crate::recommendation::{Recommendation, Rounding};
use crate::rules::{classify, Classification};
use crate::stage_pipeline::{StagePipeline, StageSnapshot};
use crate::stages::*;
use crate::table::CourseScores;
use crate::traits::CourseScorer;
use crate::weights::{RULE_BONUS, SCORE_FLOOR};

/// Decimal places reported by the primary scorer
pub const EXPERT_PRECISION: i32 = 3;

const EXPERT_ROUNDING: Rounding = Rounding::Decimal(EXPERT_PRECISION);

/// Final scores plus the rule classification that shaped them
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreSheet {
    pub scores: CourseScores,
    pub classification: Classification,
}

impl ScoreSheet {
    pub fn ranked(&self) -> Vec<(Course, f64)> {
        self.scores.ranked()
    }
}

/// Stage-by-stage account of one scoring run
#[derive(Debug, Clone)]
pub struct Explanation {
    pub classification: Classification,
    pub stages: Vec<StageSnapshot>,
}

pub struct ExpertScorer {
    pipeline: StagePipeline,
}

impl ExpertScorer {
    pub fn new() -> Self {
        let pipeline = StagePipeline::new()
            .add_stage(SubjectStrengthStage)
            .add_stage(InterestStage::new(1.0))
            .add_stage(CgpaFactorStage)
            .add_stage(RuleBonusStage::new(RULE_BONUS))
            .add_stage(DifficultyStage)
            .add_stage(LearningStyleStage)
            .add_stage(FloorStage::new(SCORE_FLOOR));
        Self { pipeline }
    }

    /// Score a profile without ranking or rounding.
    pub fn score(&self, profile: &StudentProfile) -> ScoreSheet {
        ScoreSheet {
            scores: self.pipeline.apply(profile),
            classification: classify(profile),
        }
    }

    pub fn explain(&self, profile: &StudentProfile) -> Explanation {
        Explanation {
            classification: classify(profile),
            stages: self.pipeline.trace(profile),
        }
    }
}

impl Default for ExpertScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl CourseScorer for ExpertScorer {
    fn name(&self) -> &str {
        "expert"
    }

    fn recommend_at(&self, profile: &StudentProfile, timestamp: NaiveDateTime) -> Recommendation {
        let sheet = self.score(profile);
        let tree = sheet.classification;

        let mut recommendation =
            Recommendation::from_scores(&sheet.scores, EXPERT_ROUNDING, timestamp);
        recommendation.tree_recommendation = tree.course;
        recommendation.confidence_tree = EXPERT_ROUNDING.apply(sheet.scores.get(tree.course));
        recommendation.fis_output = EXPERT_ROUNDING.apply(tree.class);
        recommendation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_worked_example() {
        let mut profile = StudentProfile::default();
        profile.cgpa = 3.8;
        profile.subjects.programming = 4;
        profile.interests.game_development = 4;

        let sheet = ExpertScorer::new().score(&profile);
        let s = &sheet.scores;

        // Gaming: (0.8*0.7 + 0.8) * 0.95 * 1.1 (moderate) * 1.1 (visual)
        assert!(approx(s.get(Course::Gaming), 1.36 * 0.95 * 1.1 * 1.1));
        // Web Development: (0.8 + 0.2) * 0.95 + 0.3 rule bonus
        assert!(approx(s.get(Course::WebDevelopment), 0.95 + 0.3));
        assert!(approx(s.get(Course::FuzzyLogic), 0.68 * 0.95 * 1.1));
        assert!(approx(s.get(Course::DatabaseDesign), 0.84 * 0.95 * 1.1));
        assert!(approx(s.get(Course::SoftwareValidation), 0.92 * 0.95 * 1.1));
        assert_eq!(sheet.classification.class, 2.5);
    }

    #[test]
    fn test_recommend_fields() {
        let mut profile = StudentProfile::default();
        profile.cgpa = 3.8;
        profile.subjects.programming = 4;
        profile.interests.game_development = 4;

        let rec = ExpertScorer::new().recommend(&profile);
        assert_eq!(rec.first_recommended_course, Course::Gaming);
        assert_eq!(rec.alternative_recommended_course, Course::WebDevelopment);
        assert_eq!(rec.first_confidence, 1.563);
        assert_eq!(rec.second_confidence, 1.25);
        assert_eq!(rec.confidence_expert, 1.563);
        assert_eq!(rec.tree_recommendation, Course::WebDevelopment);
        assert_eq!(rec.confidence_tree, 1.25);
        assert_eq!(rec.fis_output, 2.5);
        assert_eq!(rec.expert_recommendation, Course::Gaming);
        assert_eq!(rec.final_recommendation, Course::Gaming);
        assert!(!rec.is_fallback());
        assert_eq!(rec.timestamp.len(), 19);
    }

    #[test]
    fn test_zero_cgpa_boundary() {
        let mut profile = StudentProfile::default();
        profile.cgpa = 0.0;

        let sheet = ExpertScorer::new().score(&profile);
        // Only the rule bonus survives the zero multiplier, then gets the
        // visual boost; everything else sits on the floor.
        assert!(approx(sheet.scores.get(Course::DatabaseDesign), 0.33));
        let ranked: Vec<Course> = sheet.ranked().into_iter().map(|(c, _)| c).collect();
        assert_eq!(
            ranked,
            vec![
                Course::DatabaseDesign,
                Course::Gaming,
                Course::WebDevelopment,
                Course::FuzzyLogic,
                Course::SoftwareValidation,
            ]
        );
        for course in [Course::Gaming, Course::WebDevelopment, Course::FuzzyLogic] {
            assert_eq!(sheet.scores.get(course), SCORE_FLOOR);
        }
    }

    #[test]
    fn test_explain_traces_every_stage() {
        let explanation = ExpertScorer::new().explain(&StudentProfile::default());
        let names: Vec<&str> = explanation.stages.iter().map(|s| s.stage.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "subject strengths",
                "interests",
                "cgpa factor",
                "rule bonus",
                "difficulty",
                "learning style",
                "floor",
            ]
        );
        assert_eq!(explanation.classification.rule, "solid grades");
    }
}
