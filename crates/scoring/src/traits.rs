//! Core traits for the scoring pipeline.
//!
//! `ScoreStage` is one step of a scoring algorithm; stages are composed into
//! a [`StagePipeline`](crate::StagePipeline). `CourseScorer` is the contract
//! both the primary and fallback scorers expose to callers.

use chrono::{Local, NaiveDateTime};
use questionnaire::StudentProfile;

use crate::recommendation::Recommendation;
use crate::table::CourseScores;

/// One step of a scoring algorithm.
///
/// ## Design Note
/// - `Send + Sync` allows pipelines to be shared across request tasks
/// - Stages mutate the table in place; they never fail
pub trait ScoreStage: Send + Sync {
    /// Returns the name of this stage (for logging/explanations)
    fn name(&self) -> &str;

    /// Apply this stage to the running score table.
    fn apply(&self, scores: &mut CourseScores, profile: &StudentProfile);
}

/// A complete recommendation algorithm.
pub trait CourseScorer: Send + Sync {
    fn name(&self) -> &str;

    /// Produce a recommendation stamped with `timestamp`.
    fn recommend_at(&self, profile: &StudentProfile, timestamp: NaiveDateTime) -> Recommendation;

    /// Produce a recommendation stamped with the current local time.
    fn recommend(&self, profile: &StudentProfile) -> Recommendation {
        self.recommend_at(profile, Local::now().naive_local())
    }
}
