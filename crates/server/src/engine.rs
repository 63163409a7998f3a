//! The primary scoring engine seam.
//!
//! The service talks to its primary scorer through [`PrimaryEngine`] so
//! that the scorer can be replaced (or made to fail in tests) without
//! touching the fallback path.

use std::time::Duration;

use questionnaire::StudentProfile;
use scoring::{CourseScorer, ExpertScorer, Recommendation};
use thiserror::Error;

/// Ways the primary path can fail. None of these reach the caller.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Primary scorer unavailable: {0}")]
    Unavailable(String),

    #[error("Primary scorer timed out after {0:?}")]
    Timeout(Duration),

    #[error("Primary scorer task failed: {0}")]
    TaskFailed(String),

    #[error("Primary scorer disabled by configuration")]
    Disabled,
}

/// A scorer that may fail.
pub trait PrimaryEngine: Send + Sync {
    fn name(&self) -> &str;

    fn recommend(&self, profile: &StudentProfile) -> Result<Recommendation, EngineError>;
}

/// Runs the expert scorer in the current process
#[derive(Default)]
pub struct InProcessEngine {
    scorer: ExpertScorer,
}

impl InProcessEngine {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PrimaryEngine for InProcessEngine {
    fn name(&self) -> &str {
        self.scorer.name()
    }

    fn recommend(&self, profile: &StudentProfile) -> Result<Recommendation, EngineError> {
        Ok(self.scorer.recommend(profile))
    }
}
