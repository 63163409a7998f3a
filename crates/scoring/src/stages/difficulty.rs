//! Stage applying the preferred-difficulty multipliers.

use crate::table::CourseScores;
use crate::traits::ScoreStage;
use crate::weights::difficulty_multipliers;
use questionnaire::StudentProfile;

/// Boosts the courses that suit the student's preferred difficulty.
/// Unknown difficulty codes leave the table untouched.
pub struct DifficultyStage;

impl ScoreStage for DifficultyStage {
    fn name(&self) -> &str {
        "difficulty"
    }

    fn apply(&self, scores: &mut CourseScores, profile: &StudentProfile) {
        if let Some(difficulty) = profile.difficulty {
            for &(course, factor) in difficulty_multipliers(difficulty) {
                scores.scale(course, factor);
            }
        }
    }
}
