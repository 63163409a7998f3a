//! Core domain types for the course questionnaire.
//!
//! The five courses, the answer enums and the coerced student profile
//! that every scorer consumes.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Courses
// =============================================================================

/// One of the five fixed recommendation outcomes.
///
/// The declaration order is the course table order: it is used for ranking
/// tie-breaks and for mapping rule classes (1-based) onto courses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Course {
    #[serde(rename = "Gaming")]
    Gaming,
    #[serde(rename = "Web Development")]
    WebDevelopment,
    #[serde(rename = "Fuzzy Logic")]
    FuzzyLogic,
    #[serde(rename = "Database Design")]
    DatabaseDesign,
    #[serde(rename = "Software Validation & Verification")]
    SoftwareValidation,
}

impl Course {
    pub const COUNT: usize = 5;

    /// All courses in table order
    pub const ALL: [Course; Course::COUNT] = [
        Course::Gaming,
        Course::WebDevelopment,
        Course::FuzzyLogic,
        Course::DatabaseDesign,
        Course::SoftwareValidation,
    ];

    /// Position of this course in the table (0-based)
    pub fn index(self) -> usize {
        self as usize
    }

    /// Display name, as emitted in recommendation records
    pub fn name(self) -> &'static str {
        match self {
            Course::Gaming => "Gaming",
            Course::WebDevelopment => "Web Development",
            Course::FuzzyLogic => "Fuzzy Logic",
            Course::DatabaseDesign => "Database Design",
            Course::SoftwareValidation => "Software Validation & Verification",
        }
    }

    /// Look up a course by its 1-based class number.
    pub fn from_class(class: usize) -> Option<Course> {
        class.checked_sub(1).and_then(|idx| Course::ALL.get(idx).copied())
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Answer enums
// =============================================================================

/// Preferred course difficulty (questionnaire codes 1-3)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Moderate,
    Difficult,
}

impl Difficulty {
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(Difficulty::Easy),
            2 => Some(Difficulty::Moderate),
            3 => Some(Difficulty::Difficult),
            _ => None,
        }
    }
}

/// Preferred learning style (questionnaire codes 1-4)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LearningStyle {
    Visual,
    Kinesthetic,
    ReadingWriting,
    Auditory,
}

impl LearningStyle {
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(LearningStyle::Visual),
            2 => Some(LearningStyle::Kinesthetic),
            3 => Some(LearningStyle::ReadingWriting),
            4 => Some(LearningStyle::Auditory),
            _ => None,
        }
    }
}

/// Subjects the student rates their own strength in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subject {
    Programming,
    Multimedia,
    MachineLearning,
    Database,
    SoftwareEngineering,
}

impl Subject {
    pub const COUNT: usize = 5;

    pub const ALL: [Subject; Subject::COUNT] = [
        Subject::Programming,
        Subject::Multimedia,
        Subject::MachineLearning,
        Subject::Database,
        Subject::SoftwareEngineering,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Request field holding this subject's strength
    pub fn key(self) -> &'static str {
        match self {
            Subject::Programming => "programming",
            Subject::Multimedia => "multimedia",
            Subject::MachineLearning => "machineLearning",
            Subject::Database => "database",
            Subject::SoftwareEngineering => "softwareEngineering",
        }
    }
}

// =============================================================================
// Student profile
// =============================================================================

/// Self-rated subject strengths, nominally 0-5
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SubjectStrengths {
    pub programming: i64,
    pub multimedia: i64,
    pub machine_learning: i64,
    pub database: i64,
    pub software_engineering: i64,
}

impl SubjectStrengths {
    pub fn get(&self, subject: Subject) -> i64 {
        match subject {
            Subject::Programming => self.programming,
            Subject::Multimedia => self.multimedia,
            Subject::MachineLearning => self.machine_learning,
            Subject::Database => self.database,
            Subject::SoftwareEngineering => self.software_engineering,
        }
    }

    pub fn set(&mut self, subject: Subject, value: i64) {
        match subject {
            Subject::Programming => self.programming = value,
            Subject::Multimedia => self.multimedia = value,
            Subject::MachineLearning => self.machine_learning = value,
            Subject::Database => self.database = value,
            Subject::SoftwareEngineering => self.software_engineering = value,
        }
    }
}

/// Interest in each course area, nominally 0-5.
///
/// Interests map one-to-one onto courses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interests {
    pub game_development: i64,
    pub web_development: i64,
    pub artificial_intelligence: i64,
    pub database_system: i64,
    pub software_validation: i64,
}

impl Interests {
    pub fn for_course(&self, course: Course) -> i64 {
        match course {
            Course::Gaming => self.game_development,
            Course::WebDevelopment => self.web_development,
            Course::FuzzyLogic => self.artificial_intelligence,
            Course::DatabaseDesign => self.database_system,
            Course::SoftwareValidation => self.software_validation,
        }
    }

    pub fn set(&mut self, course: Course, value: i64) {
        match course {
            Course::Gaming => self.game_development = value,
            Course::WebDevelopment => self.web_development = value,
            Course::FuzzyLogic => self.artificial_intelligence = value,
            Course::DatabaseDesign => self.database_system = value,
            Course::SoftwareValidation => self.software_validation = value,
        }
    }

    /// Request field holding the interest that maps onto `course`
    pub fn key(course: Course) -> &'static str {
        match course {
            Course::Gaming => "gameDevelopment",
            Course::WebDevelopment => "webDevelopment",
            Course::FuzzyLogic => "artificialIntelligence",
            Course::DatabaseDesign => "databaseSystem",
            Course::SoftwareValidation => "softwareValidation",
        }
    }
}

impl Default for Interests {
    fn default() -> Self {
        Self {
            game_development: 1,
            web_development: 1,
            artificial_intelligence: 1,
            database_system: 1,
            software_validation: 1,
        }
    }
}

/// A fully coerced questionnaire.
///
/// `difficulty` and `learning_style` are `None` when the submitted code was a
/// number outside its enum; such answers apply no multiplier.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentProfile {
    pub cgpa: f64,
    pub subjects: SubjectStrengths,
    pub interests: Interests,
    pub difficulty: Option<Difficulty>,
    pub learning_style: Option<LearningStyle>,
}

impl Default for StudentProfile {
    fn default() -> Self {
        Self {
            cgpa: 3.0,
            subjects: SubjectStrengths::default(),
            interests: Interests::default(),
            difficulty: Some(Difficulty::Moderate),
            learning_style: Some(LearningStyle::Visual),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_table_order() {
        let names: Vec<_> = Course::ALL.iter().map(|c| c.name()).collect();
        assert_eq!(
            names,
            vec![
                "Gaming",
                "Web Development",
                "Fuzzy Logic",
                "Database Design",
                "Software Validation & Verification",
            ]
        );
        for (idx, course) in Course::ALL.iter().enumerate() {
            assert_eq!(course.index(), idx);
        }
    }

    #[test]
    fn test_course_from_class() {
        assert_eq!(Course::from_class(1), Some(Course::Gaming));
        assert_eq!(Course::from_class(5), Some(Course::SoftwareValidation));
        assert_eq!(Course::from_class(0), None);
        assert_eq!(Course::from_class(6), None);
    }

    #[test]
    fn test_course_serializes_as_display_name() {
        let json = serde_json::to_string(&Course::SoftwareValidation).unwrap();
        assert_eq!(json, "\"Software Validation & Verification\"");
    }

    #[test]
    fn test_enum_codes() {
        assert_eq!(Difficulty::from_code(3), Some(Difficulty::Difficult));
        assert_eq!(Difficulty::from_code(4), None);
        assert_eq!(LearningStyle::from_code(2), Some(LearningStyle::Kinesthetic));
        assert_eq!(LearningStyle::from_code(0), None);
    }

    #[test]
    fn test_profile_defaults() {
        let profile = StudentProfile::default();
        assert_eq!(profile.cgpa, 3.0);
        assert_eq!(profile.subjects.get(Subject::Programming), 0);
        for course in Course::ALL {
            assert_eq!(profile.interests.for_course(course), 1);
        }
        assert_eq!(profile.difficulty, Some(Difficulty::Moderate));
        assert_eq!(profile.learning_style, Some(LearningStyle::Visual));
    }
}
