//! Stage enforcing the minimum score.

use crate::table::CourseScores;
use crate::traits::ScoreStage;
use questionnaire::StudentProfile;

/// Raises every score to at least `min`.
pub struct FloorStage {
    min: f64,
}

impl FloorStage {
    pub fn new(min: f64) -> Self {
        Self { min }
    }
}

impl ScoreStage for FloorStage {
    fn name(&self) -> &str {
        "floor"
    }

    fn apply(&self, scores: &mut CourseScores, _profile: &StudentProfile) {
        scores.floor(self.min);
    }
}
