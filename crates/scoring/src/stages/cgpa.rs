//! Stage scaling every course by grade performance.

use crate::table::CourseScores;
use crate::traits::ScoreStage;
use crate::weights::{CGPA_FACTOR_CAP, CGPA_SCALE};
use questionnaire::StudentProfile;

/// Multiplies every score by `min(cgpa / 4, 1.25)`.
pub struct CgpaFactorStage;

impl CgpaFactorStage {
    pub fn factor(cgpa: f64) -> f64 {
        (cgpa / CGPA_SCALE).min(CGPA_FACTOR_CAP)
    }
}

impl ScoreStage for CgpaFactorStage {
    fn name(&self) -> &str {
        "cgpa factor"
    }

    fn apply(&self, scores: &mut CourseScores, profile: &StudentProfile) {
        scores.scale_all(Self::factor(profile.cgpa));
    }
}
