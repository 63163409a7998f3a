//! Fixed weight tables and constants of the scoring model.
//!
//! Everything the scorers multiply or add lives here so the model can be
//! audited in one place.

use questionnaire::{Course, Difficulty, LearningStyle, Subject};

/// Top of the 0-5 rating scale; ratings are divided by this to normalize
pub const RATING_SCALE: f64 = 5.0;

/// Top of the CGPA scale
pub const CGPA_SCALE: f64 = 4.0;

/// Upper bound on the CGPA multiplier
pub const CGPA_FACTOR_CAP: f64 = 1.25;

/// Flat bonus for the course picked by the rule classification
pub const RULE_BONUS: f64 = 0.3;

/// Minimum primary score for any course
pub const SCORE_FLOOR: f64 = 0.1;

/// Subject-strength weights, indexed `[subject][course]`.
///
/// Columns follow course table order: Gaming, Web Development,
/// Fuzzy Logic, Database Design, Software Validation & Verification.
pub const SUBJECT_WEIGHTS: [[f64; Course::COUNT]; Subject::COUNT] = [
    // programming
    [0.7, 1.0, 0.6, 0.8, 0.9],
    // multimedia
    [1.0, 0.8, 0.0, 0.0, 0.0],
    // machine learning
    [0.0, 0.0, 1.0, 0.0, 0.0],
    // database
    [0.0, 0.0, 0.0, 1.0, 0.0],
    // software engineering
    [0.0, 0.8, 0.0, 0.0, 1.0],
];

pub fn subject_weight(subject: Subject, course: Course) -> f64 {
    SUBJECT_WEIGHTS[subject.index()][course.index()]
}

const EASY: &[(Course, f64)] = &[(Course::WebDevelopment, 1.2), (Course::DatabaseDesign, 1.2)];
const MODERATE: &[(Course, f64)] = &[(Course::Gaming, 1.1), (Course::SoftwareValidation, 1.1)];
const DIFFICULT: &[(Course, f64)] = &[(Course::FuzzyLogic, 1.2)];

/// Course multipliers for a preferred difficulty
pub fn difficulty_multipliers(difficulty: Difficulty) -> &'static [(Course, f64)] {
    match difficulty {
        Difficulty::Easy => EASY,
        Difficulty::Moderate => MODERATE,
        Difficulty::Difficult => DIFFICULT,
    }
}

const VISUAL: &[(Course, f64)] = &[
    (Course::Gaming, 1.1),
    (Course::FuzzyLogic, 1.1),
    (Course::DatabaseDesign, 1.1),
];
const KINESTHETIC: &[(Course, f64)] = &[
    (Course::Gaming, 1.15),
    (Course::WebDevelopment, 1.15),
    (Course::DatabaseDesign, 1.15),
];
const READING_WRITING: &[(Course, f64)] = &[
    (Course::WebDevelopment, 1.1),
    (Course::SoftwareValidation, 1.1),
];
const AUDITORY: &[(Course, f64)] = &[
    (Course::FuzzyLogic, 1.05),
    (Course::SoftwareValidation, 1.05),
];

/// Course multipliers for a learning style
pub fn learning_style_multipliers(style: LearningStyle) -> &'static [(Course, f64)] {
    match style {
        LearningStyle::Visual => VISUAL,
        LearningStyle::Kinesthetic => KINESTHETIC,
        LearningStyle::ReadingWriting => READING_WRITING,
        LearningStyle::Auditory => AUDITORY,
    }
}
