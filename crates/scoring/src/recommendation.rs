//! The recommendation record returned to callers.
//!
//! Field names match the JSON consumed by the questionnaire front end,
//! including its mixed-case confidence and probability keys.

use chrono::NaiveDateTime;
use questionnaire::Course;
use serde::{Deserialize, Serialize};

use crate::table::CourseScores;

/// Second-precision local timestamp format
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Ranked recommendation for one questionnaire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub first_recommended_course: Course,
    pub alternative_recommended_course: Course,
    pub first_confidence: f64,
    pub second_confidence: f64,

    #[serde(rename = "Confidence_Expert")]
    pub confidence_expert: f64,
    /// Score of the rule-classification course (primary scorer), or the
    /// top score (fallback)
    #[serde(rename = "Confidence_Tree")]
    pub confidence_tree: f64,

    #[serde(rename = "probability_Gaming")]
    pub probability_gaming: f64,
    #[serde(rename = "probability_WebDevelopment")]
    pub probability_web_development: f64,
    #[serde(rename = "probability_FuzzyLogic")]
    pub probability_fuzzy_logic: f64,
    #[serde(rename = "probability_DatabaseDesign")]
    pub probability_database_design: f64,
    #[serde(rename = "probability_SoftwareValidation_Verification")]
    pub probability_software_validation: f64,

    pub expert_recommendation: Course,
    pub tree_recommendation: Course,
    pub final_recommendation: Course,
    pub fis_output: f64,

    /// Provenance, set only by the fallback scorer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    pub timestamp: String,
}

impl Recommendation {
    /// Build the ranking fields from a final score table, rounding every
    /// reported score with `rounding`.
    ///
    /// The tree fields default to the top course and `fis_output` to the
    /// mean of the top two scores; scorers that run the rule cascade
    /// overwrite them.
    pub(crate) fn from_scores(
        scores: &CourseScores,
        rounding: Rounding,
        timestamp: NaiveDateTime,
    ) -> Self {
        let ranked = scores.ranked();
        let (first, first_score) = ranked[0];
        let (second, second_score) = ranked[1];
        let round = |value: f64| rounding.apply(value);

        Self {
            first_recommended_course: first,
            alternative_recommended_course: second,
            first_confidence: round(first_score),
            second_confidence: round(second_score),
            confidence_expert: round(first_score),
            confidence_tree: round(first_score),
            probability_gaming: round(scores.get(Course::Gaming)),
            probability_web_development: round(scores.get(Course::WebDevelopment)),
            probability_fuzzy_logic: round(scores.get(Course::FuzzyLogic)),
            probability_database_design: round(scores.get(Course::DatabaseDesign)),
            probability_software_validation: round(scores.get(Course::SoftwareValidation)),
            expert_recommendation: first,
            tree_recommendation: first,
            final_recommendation: first,
            fis_output: round((first_score + second_score) / 2.0),
            method: None,
            note: None,
            timestamp: format_timestamp(timestamp),
        }
    }

    /// The rounded score reported for `course`
    pub fn probability(&self, course: Course) -> f64 {
        match course {
            Course::Gaming => self.probability_gaming,
            Course::WebDevelopment => self.probability_web_development,
            Course::FuzzyLogic => self.probability_fuzzy_logic,
            Course::DatabaseDesign => self.probability_database_design,
            Course::SoftwareValidation => self.probability_software_validation,
        }
    }

    /// True when produced by the fallback scorer
    pub fn is_fallback(&self) -> bool {
        self.method.is_some()
    }
}

/// How a scorer rounds the scores it reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rounding {
    /// Nearest `n`-decimal value to the exact stored binary value
    Decimal(i32),
    /// Scale by `10^n`, round half away from zero, scale back
    Scaled(i32),
}

impl Rounding {
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Rounding::Decimal(places) => round_decimal(value, places),
            Rounding::Scaled(places) => round_to(value, places),
        }
    }
}

/// Round to `places` decimals using the exact binary value.
///
/// `1.0005` is stored just below the half, so it rounds down to `1.0`.
pub fn round_decimal(value: f64, places: i32) -> f64 {
    let digits = usize::try_from(places).unwrap_or(0);
    format!("{:.*}", digits, value).parse().unwrap_or(value)
}

/// Round to `places` decimal places, half away from zero, after scaling.
///
/// Scaling can lift a value sitting just below a half onto it, so
/// `round_to(2.675, 2)` gives `2.68`.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

pub fn format_timestamp(timestamp: NaiveDateTime) -> String {
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn epoch() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(1970, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(1.56332, 3), 1.563);
        assert_eq!(round_to(0.9614, 2), 0.96);
        assert_eq!(round_to(2.0, 3), 2.0);
        // Scaling lifts these onto the half
        assert_eq!(round_to(1.0005, 3), 1.001);
        assert_eq!(round_to(2.675, 2), 2.68);
    }

    #[test]
    fn test_round_decimal_uses_stored_value() {
        assert_eq!(round_decimal(1.0005, 3), 1.0);
        assert_eq!(round_decimal(2.675, 2), 2.67);
        assert_eq!(round_decimal(1.56332, 3), 1.563);
        assert_eq!(round_decimal(0.9614, 2), 0.96);
        assert_eq!(round_decimal(2.0, 3), 2.0);
    }

    #[test]
    fn test_rounding_modes() {
        assert_eq!(Rounding::Decimal(3).apply(1.0005), 1.0);
        assert_eq!(Rounding::Scaled(3).apply(1.0005), 1.001);
    }

    #[test]
    fn test_from_scores_ranks_and_rounds() {
        let mut scores = CourseScores::filled(0.1);
        scores.set(Course::FuzzyLogic, 1.23456);
        scores.set(Course::SoftwareValidation, 0.98765);

        let rec = Recommendation::from_scores(&scores, Rounding::Decimal(3), epoch());
        assert_eq!(rec.first_recommended_course, Course::FuzzyLogic);
        assert_eq!(rec.alternative_recommended_course, Course::SoftwareValidation);
        assert_eq!(rec.first_confidence, 1.235);
        assert_eq!(rec.second_confidence, 0.988);
        assert_eq!(rec.confidence_expert, rec.first_confidence);
        assert_eq!(rec.probability(Course::Gaming), 0.1);
        assert_eq!(rec.final_recommendation, Course::FuzzyLogic);
        assert!(!rec.is_fallback());
        assert_eq!(rec.timestamp, "1970-01-01 00:00:00");
    }

    #[test]
    fn test_json_field_names() {
        let rec = Recommendation::from_scores(&CourseScores::filled(0.5), Rounding::Decimal(3), epoch());
        let json = serde_json::to_value(&rec).unwrap();

        for key in [
            "firstRecommendedCourse",
            "alternativeRecommendedCourse",
            "firstConfidence",
            "secondConfidence",
            "Confidence_Expert",
            "Confidence_Tree",
            "probability_Gaming",
            "probability_WebDevelopment",
            "probability_FuzzyLogic",
            "probability_DatabaseDesign",
            "probability_SoftwareValidation_Verification",
            "expertRecommendation",
            "treeRecommendation",
            "finalRecommendation",
            "fisOutput",
            "timestamp",
        ] {
            assert!(json.get(key).is_some(), "missing {}", key);
        }
        assert!(json.get("method").is_none());
        assert_eq!(json["firstRecommendedCourse"], "Gaming");
    }

    #[test]
    fn test_format_timestamp() {
        let ts = NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(7, 5, 0)
            .unwrap();
        assert_eq!(format_timestamp(ts), "2024-03-09 07:05:00");
    }
}
