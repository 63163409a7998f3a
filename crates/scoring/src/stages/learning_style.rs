//! Stage applying the learning-style multipliers.

use crate::table::CourseScores;
use crate::traits::ScoreStage;
use crate::weights::learning_style_multipliers;
use questionnaire::StudentProfile;

/// Boosts the courses that suit the student's learning style.
/// Unknown style codes leave the table untouched.
pub struct LearningStyleStage;

impl ScoreStage for LearningStyleStage {
    fn name(&self) -> &str {
        "learning style"
    }

    fn apply(&self, scores: &mut CourseScores, profile: &StudentProfile) {
        if let Some(style) = profile.learning_style {
            for &(course, factor) in learning_style_multipliers(style) {
                scores.scale(course, factor);
            }
        }
    }
}
