//! # Questionnaire Crate
//!
//! Domain types and input handling for the course recommendation engine.
//!
//! ## Main Components
//!
//! - **types**: `Course`, `Difficulty`, `LearningStyle`, `Subject` and the
//!   coerced `StudentProfile`
//! - **parser**: lenient coercion of JSON payloads, file and batch loading
//! - **error**: error types for the operator-facing loaders
//!
//! ## Example Usage
//!
//! ```ignore
//! use questionnaire::{parse_profile, Course};
//! use serde_json::json;
//!
//! let profile = parse_profile(&json!({ "cgpa": "3.6", "programming": 4 }));
//! assert_eq!(profile.subjects.programming, 4);
//! assert_eq!(profile.interests.for_course(Course::Gaming), 1);
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;

// Re-export commonly used types for convenience
pub use error::{QuestionnaireError, Result};
pub use parser::{
    load_batch, load_request, parse_batch, parse_profile, parse_request_str, BatchEntry,
};
pub use types::{
    Course, Difficulty, Interests, LearningStyle, StudentProfile, Subject, SubjectStrengths,
};
