//! Lenient coercion of questionnaire payloads.
//!
//! Request payloads come from web forms, so numbers may arrive as strings,
//! fields may be missing and some may be garbage. Coercion never fails:
//! - missing or `null` fields take their default
//! - numbers and numeric strings are accepted; integer fields truncate
//! - anything else takes the default and is logged
//!
//! Out-of-range values are kept as submitted.

use crate::error::{QuestionnaireError, Result};
use crate::types::*;
use rayon::prelude::*;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

pub const DEFAULT_CGPA: f64 = 3.0;
pub const DEFAULT_SUBJECT_STRENGTH: i64 = 0;
pub const DEFAULT_INTEREST: i64 = 1;
pub const DEFAULT_DIFFICULTY: i64 = 2;
pub const DEFAULT_LEARNING_STYLE: i64 = 1;

const CGPA_RANGE: (f64, f64) = (0.0, 4.0);
const RATING_RANGE: (i64, i64) = (0, 5);

/// Outcome of reading one numeric field
#[derive(Debug, Clone, Copy, PartialEq)]
enum Coerced {
    Missing,
    Valid(f64),
    Invalid,
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn read_number(fields: &Map<String, Value>, key: &str) -> Coerced {
    let parsed = match fields.get(key) {
        None | Some(Value::Null) => return Coerced::Missing,
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        Some(_) => None,
    };
    match parsed {
        Some(n) if n.is_finite() => Coerced::Valid(n),
        _ => Coerced::Invalid,
    }
}

fn float_field(fields: &Map<String, Value>, key: &str, default: f64) -> f64 {
    match read_number(fields, key) {
        Coerced::Valid(n) => n,
        Coerced::Missing => default,
        Coerced::Invalid => {
            warn!("Invalid value for {}: {:?}, using default {}", key, fields.get(key), default);
            default
        }
    }
}

fn int_field(fields: &Map<String, Value>, key: &str, default: i64) -> i64 {
    match read_number(fields, key) {
        // `as` saturates on overflow
        Coerced::Valid(n) => n.trunc() as i64,
        Coerced::Missing => default,
        Coerced::Invalid => {
            warn!("Invalid value for {}: {:?}, using default {}", key, fields.get(key), default);
            default
        }
    }
}

fn note_rating_range(key: &str, value: i64) {
    if value < RATING_RANGE.0 || value > RATING_RANGE.1 {
        debug!("{} = {} is outside the expected range {:?}", key, value, RATING_RANGE);
    }
}

/// Coerce a decoded request into a [`StudentProfile`].
///
/// A payload that is not an object yields the all-defaults profile.
pub fn parse_profile(value: &Value) -> StudentProfile {
    match value {
        Value::Object(fields) => profile_from_fields(fields),
        other => {
            warn!("Questionnaire payload is a {}, using defaults", json_kind(other));
            StudentProfile::default()
        }
    }
}

fn profile_from_fields(fields: &Map<String, Value>) -> StudentProfile {
    let cgpa = float_field(fields, "cgpa", DEFAULT_CGPA);
    if cgpa < CGPA_RANGE.0 || cgpa > CGPA_RANGE.1 {
        debug!("cgpa = {} is outside the expected range {:?}", cgpa, CGPA_RANGE);
    }

    let mut subjects = SubjectStrengths::default();
    for subject in Subject::ALL {
        let value = int_field(fields, subject.key(), DEFAULT_SUBJECT_STRENGTH);
        note_rating_range(subject.key(), value);
        subjects.set(subject, value);
    }

    let mut interests = Interests::default();
    for course in Course::ALL {
        let key = Interests::key(course);
        let value = int_field(fields, key, DEFAULT_INTEREST);
        note_rating_range(key, value);
        interests.set(course, value);
    }

    let difficulty_code = int_field(fields, "difficulty", DEFAULT_DIFFICULTY);
    let difficulty = Difficulty::from_code(difficulty_code);
    if difficulty.is_none() {
        debug!("difficulty code {} has no adjustment", difficulty_code);
    }

    let style_code = int_field(fields, "learningStyle", DEFAULT_LEARNING_STYLE);
    let learning_style = LearningStyle::from_code(style_code);
    if learning_style.is_none() {
        debug!("learningStyle code {} has no adjustment", style_code);
    }

    StudentProfile {
        cgpa,
        subjects,
        interests,
        difficulty,
        learning_style,
    }
}

/// Parse a JSON document that must hold a single questionnaire object.
///
/// Unlike [`parse_profile`], this rejects documents that are not JSON
/// objects, since it is used on operator-supplied input.
pub fn parse_request_str(content: &str) -> Result<Value> {
    let value: Value = serde_json::from_str(content)?;
    if !value.is_object() {
        return Err(QuestionnaireError::NotAnObject {
            found: json_kind(&value),
        });
    }
    Ok(value)
}

/// Load a single questionnaire from a JSON file
pub fn load_request(path: &Path) -> Result<Value> {
    if !path.exists() {
        return Err(QuestionnaireError::FileNotFound {
            path: path.display().to_string(),
        });
    }
    let content = fs::read_to_string(path)?;
    parse_request_str(&content)
}

/// One entry of a JSON Lines batch
#[derive(Debug)]
pub struct BatchEntry {
    /// 1-based line number in the source
    pub line: usize,
    pub request: Result<Value>,
}

/// Parse a JSON Lines batch, one questionnaire per non-blank line.
///
/// Lines are decoded in parallel; the output keeps source order. A bad
/// line is reported in its entry and does not abort the batch.
pub fn parse_batch(content: &str) -> Vec<BatchEntry> {
    let lines: Vec<(usize, &str)> = content
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
        .collect();

    lines
        .par_iter()
        .map(|&(line, text)| BatchEntry {
            line,
            request: parse_request_str(text).map_err(|e| QuestionnaireError::BatchLine {
                line,
                reason: e.to_string(),
            }),
        })
        .collect()
}

/// Load a JSON Lines batch from disk
pub fn load_batch(path: &Path) -> Result<Vec<BatchEntry>> {
    if !path.exists() {
        return Err(QuestionnaireError::FileNotFound {
            path: path.display().to_string(),
        });
    }
    let content = fs::read_to_string(path)?;
    Ok(parse_batch(&content))
}
