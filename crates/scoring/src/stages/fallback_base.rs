//! Stage seeding the fallback scorer's shared base score.

use crate::table::CourseScores;
use crate::traits::ScoreStage;
use questionnaire::{Course, StudentProfile};

/// Divisor the fallback applies to CGPA (not the 4.0 CGPA scale)
const FALLBACK_CGPA_DIVISOR: f64 = 5.0;
const CGPA_WEIGHT: f64 = 2.0;
const PROGRAMMING_WEIGHT: f64 = 1.5;

/// Adds `(cgpa / 5) * 2 + (programming / 5) * 1.5` to every course.
pub struct FallbackBaseStage;

impl FallbackBaseStage {
    pub fn base(profile: &StudentProfile) -> f64 {
        (profile.cgpa / FALLBACK_CGPA_DIVISOR) * CGPA_WEIGHT
            + (profile.subjects.programming as f64 / 5.0) * PROGRAMMING_WEIGHT
    }
}

impl ScoreStage for FallbackBaseStage {
    fn name(&self) -> &str {
        "fallback base"
    }

    fn apply(&self, scores: &mut CourseScores, profile: &StudentProfile) {
        let base = Self::base(profile);
        for course in Course::ALL {
            scores.add(course, base);
        }
    }
}
