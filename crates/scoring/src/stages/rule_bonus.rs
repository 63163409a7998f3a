//! Stage blending in the rule classification.

use crate::rules::classify;
use crate::table::CourseScores;
use crate::traits::ScoreStage;
use questionnaire::StudentProfile;
use tracing::debug;

/// Adds a flat bonus to the course picked by the rule cascade.
pub struct RuleBonusStage {
    bonus: f64,
}

impl RuleBonusStage {
    pub fn new(bonus: f64) -> Self {
        Self { bonus }
    }
}

impl ScoreStage for RuleBonusStage {
    fn name(&self) -> &str {
        "rule bonus"
    }

    fn apply(&self, scores: &mut CourseScores, profile: &StudentProfile) {
        let classification = classify(profile);
        debug!(
            "Rule '{}' fired (class {}), boosting {}",
            classification.rule, classification.class, classification.course
        );
        scores.add(classification.course, self.bonus);
    }
}
