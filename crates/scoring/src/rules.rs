//! Rule-based course classification.
//!
//! A coarse expert cascade layered on top of the weighted score. Rules are
//! evaluated top to bottom and the first match wins; the resulting class
//! (1.0-5.0, possibly fractional) picks the course that gets the flat
//! rule bonus.

use questionnaire::{Course, Difficulty, StudentProfile};

/// Class used if no rule matches. The cascade ends in a catch-all, so this
/// only guards against edits to the table.
pub const DEFAULT_CLASS: f64 = 3.0;

/// Shared interest threshold for every rule
const INTEREST_THRESHOLD: i64 = 3;

/// One (condition, class) pair of the cascade
#[derive(Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    pub condition: fn(&StudentProfile) -> bool,
    pub class: f64,
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("class", &self.class)
            .finish()
    }
}

fn high_achiever(p: &StudentProfile) -> bool {
    p.cgpa >= 4.0 && p.subjects.programming >= 4
}

fn solid_grades(p: &StudentProfile) -> bool {
    p.cgpa >= 3.0
}

/// The cascade, in evaluation order
pub static RULES: [Rule; 11] = [
    Rule {
        name: "high achiever, game development interest",
        condition: |p| high_achiever(p) && p.interests.game_development >= INTEREST_THRESHOLD,
        class: 1.0,
    },
    Rule {
        name: "high achiever, web development interest",
        condition: |p| high_achiever(p) && p.interests.web_development >= INTEREST_THRESHOLD,
        class: 2.0,
    },
    Rule {
        name: "high achiever, AI interest",
        condition: |p| high_achiever(p) && p.interests.artificial_intelligence >= INTEREST_THRESHOLD,
        class: 3.0,
    },
    Rule {
        name: "high achiever, database interest",
        condition: |p| high_achiever(p) && p.interests.database_system >= INTEREST_THRESHOLD,
        class: 4.0,
    },
    Rule {
        name: "high achiever",
        condition: high_achiever,
        class: 5.0,
    },
    Rule {
        name: "solid grades, AI interest, prefers difficult",
        condition: |p| {
            solid_grades(p)
                && p.interests.artificial_intelligence >= INTEREST_THRESHOLD
                && p.difficulty == Some(Difficulty::Difficult)
        },
        class: 3.0,
    },
    Rule {
        name: "solid grades, database interest",
        condition: |p| solid_grades(p) && p.interests.database_system >= INTEREST_THRESHOLD,
        class: 4.0,
    },
    Rule {
        name: "solid grades, web development interest",
        condition: |p| solid_grades(p) && p.interests.web_development >= INTEREST_THRESHOLD,
        class: 2.0,
    },
    Rule {
        name: "solid grades",
        condition: solid_grades,
        class: 2.5,
    },
    Rule {
        name: "web development interest",
        condition: |p| p.interests.web_development >= INTEREST_THRESHOLD,
        class: 2.0,
    },
    Rule {
        name: "default",
        condition: |_| true,
        class: 4.0,
    },
];

/// Result of running the cascade
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    /// Name of the rule that fired
    pub rule: &'static str,
    /// Raw class value, e.g. 2.5
    pub class: f64,
    /// Course the class maps to
    pub course: Course,
}

/// Map a class value onto a course.
///
/// Rounds half to even (2.5 → 2) and clamps to 1..=5.
pub fn course_for_class(class: f64) -> Course {
    let rounded = class.round_ties_even().clamp(1.0, Course::COUNT as f64) as usize;
    Course::from_class(rounded).unwrap_or(Course::FuzzyLogic)
}

/// Run the cascade against a profile
pub fn classify(profile: &StudentProfile) -> Classification {
    let (rule, class) = RULES
        .iter()
        .find(|rule| (rule.condition)(profile))
        .map(|rule| (rule.name, rule.class))
        .unwrap_or(("none", DEFAULT_CLASS));

    Classification {
        rule,
        class,
        course: course_for_class(class),
    }
}
