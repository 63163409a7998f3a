//! Stage adding subject-strength contributions.

use crate::table::CourseScores;
use crate::traits::ScoreStage;
use crate::weights::{subject_weight, RATING_SCALE};
use questionnaire::{Course, StudentProfile, Subject};

/// Adds `strength / 5 * weight` to each course for every subject rated
/// above zero, using the subject weight table.
pub struct SubjectStrengthStage;

impl ScoreStage for SubjectStrengthStage {
    fn name(&self) -> &str {
        "subject strengths"
    }

    fn apply(&self, scores: &mut CourseScores, profile: &StudentProfile) {
        for subject in Subject::ALL {
            let strength = profile.subjects.get(subject);
            if strength <= 0 {
                continue;
            }
            let normalized = strength as f64 / RATING_SCALE;
            for course in Course::ALL {
                scores.add(course, normalized * subject_weight(subject, course));
            }
        }
    }
}
