//! Stage adding interest contributions.

use crate::table::CourseScores;
use crate::traits::ScoreStage;
use crate::weights::RATING_SCALE;
use questionnaire::{Course, StudentProfile};

/// Adds `interest / 5 * weight` to the course each interest maps onto.
///
/// Unlike subject strengths, interests apply whatever their sign.
pub struct InterestStage {
    weight: f64,
}

impl InterestStage {
    /// # Arguments
    /// * `weight` - Multiplier on the normalized interest (1.0 for the
    ///   primary scorer, 2.0 for the fallback)
    pub fn new(weight: f64) -> Self {
        Self { weight }
    }
}

impl ScoreStage for InterestStage {
    fn name(&self) -> &str {
        "interests"
    }

    fn apply(&self, scores: &mut CourseScores, profile: &StudentProfile) {
        for course in Course::ALL {
            let interest = profile.interests.for_course(course) as f64;
            scores.add(course, interest / RATING_SCALE * self.weight);
        }
    }
}
