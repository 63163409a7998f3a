//! The per-request course score table.

use questionnaire::Course;
use std::cmp::Ordering;

/// Scores for the five courses, stored in course table order.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CourseScores {
    scores: [f64; Course::COUNT],
}

impl CourseScores {
    /// A table with every course at 0.0
    pub fn new() -> Self {
        Self::default()
    }

    /// A table with every course at `value`
    pub fn filled(value: f64) -> Self {
        Self {
            scores: [value; Course::COUNT],
        }
    }

    pub fn get(&self, course: Course) -> f64 {
        self.scores[course.index()]
    }

    pub fn set(&mut self, course: Course, value: f64) {
        self.scores[course.index()] = value;
    }

    pub fn add(&mut self, course: Course, delta: f64) {
        self.scores[course.index()] += delta;
    }

    pub fn scale(&mut self, course: Course, factor: f64) {
        self.scores[course.index()] *= factor;
    }

    pub fn scale_all(&mut self, factor: f64) {
        for score in &mut self.scores {
            *score *= factor;
        }
    }

    /// Raise every score below `min` to `min`
    pub fn floor(&mut self, min: f64) {
        for score in &mut self.scores {
            *score = score.max(min);
        }
    }

    /// Iterate `(course, score)` pairs in table order
    pub fn iter(&self) -> impl Iterator<Item = (Course, f64)> + '_ {
        Course::ALL.iter().map(move |&course| (course, self.get(course)))
    }

    /// Courses sorted by score, highest first.
    ///
    /// The sort is stable, so equal scores keep table order.
    pub fn ranked(&self) -> Vec<(Course, f64)> {
        let mut ranked: Vec<(Course, f64)> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_table_is_zeroed() {
        let scores = CourseScores::new();
        assert!(scores.iter().all(|(_, s)| s == 0.0));
    }

    #[test]
    fn test_add_and_scale() {
        let mut scores = CourseScores::new();
        scores.add(Course::Gaming, 0.5);
        scores.add(Course::Gaming, 0.25);
        scores.scale(Course::Gaming, 2.0);
        scores.add(Course::FuzzyLogic, 1.0);
        scores.scale_all(0.5);

        assert_eq!(scores.get(Course::Gaming), 0.75);
        assert_eq!(scores.get(Course::FuzzyLogic), 0.5);
        assert_eq!(scores.get(Course::WebDevelopment), 0.0);
    }

    #[test]
    fn test_floor_only_raises() {
        let mut scores = CourseScores::new();
        scores.set(Course::DatabaseDesign, 0.9);
        scores.set(Course::SoftwareValidation, -0.4);
        scores.floor(0.1);

        assert_eq!(scores.get(Course::DatabaseDesign), 0.9);
        assert_eq!(scores.get(Course::SoftwareValidation), 0.1);
        assert_eq!(scores.get(Course::Gaming), 0.1);
    }

    #[test]
    fn test_ranked_sorts_descending() {
        let mut scores = CourseScores::new();
        scores.set(Course::Gaming, 0.2);
        scores.set(Course::WebDevelopment, 0.9);
        scores.set(Course::FuzzyLogic, 0.5);

        let ranked = scores.ranked();
        assert_eq!(ranked[0], (Course::WebDevelopment, 0.9));
        assert_eq!(ranked[1], (Course::FuzzyLogic, 0.5));
        assert_eq!(ranked[2], (Course::Gaming, 0.2));
    }

    #[test]
    fn test_ranked_ties_keep_table_order() {
        let scores = CourseScores::filled(0.1);
        let order: Vec<Course> = scores.ranked().into_iter().map(|(c, _)| c).collect();
        assert_eq!(order, Course::ALL.to_vec());
    }

    #[test]
    fn test_ranked_handles_nan() {
        let mut scores = CourseScores::filled(0.3);
        scores.set(Course::FuzzyLogic, f64::NAN);
        assert_eq!(scores.ranked().len(), Course::COUNT);
    }
}
