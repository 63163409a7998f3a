//! The fallback recommendation scorer.
//!
//! Used whenever the primary scorer is unavailable. It reuses the difficulty
//! and learning-style multipliers, but starts from a simpler shared base and
//! perturbs each course by a small random amount. It has no floor and
//! reports two decimal places.

use std::sync::{Mutex, PoisonError};

use chrono::NaiveDateTime;
use questionnaire::{Course, StudentProfile};
use tracing::debug;

use crate::jitter::{JitterSource, ThreadJitter};
use crate::recommendation::{Recommendation, Rounding};
use crate::stage_pipeline::StagePipeline;
use crate::stages::{DifficultyStage, FallbackBaseStage, InterestStage, LearningStyleStage};
use crate::table::CourseScores;
use crate::traits::CourseScorer;

/// Decimal places reported by the fallback scorer
pub const FALLBACK_PRECISION: i32 = 2;

pub const FALLBACK_METHOD: &str = "Intelligent Fallback Algorithm";
pub const FALLBACK_NOTE: &str = "Generated using backup system for reliability";

pub struct FallbackScorer {
    pipeline: StagePipeline,
    jitter: Mutex<Box<dyn JitterSource>>,
}

impl FallbackScorer {
    /// Create a fallback scorer drawing perturbations from `jitter`.
    pub fn new(jitter: impl JitterSource + 'static) -> Self {
        let pipeline = StagePipeline::new()
            .add_stage(FallbackBaseStage)
            .add_stage(InterestStage::new(2.0))
            .add_stage(DifficultyStage)
            .add_stage(LearningStyleStage);
        Self {
            pipeline,
            jitter: Mutex::new(Box::new(jitter)),
        }
    }

    /// Scores before the random perturbation
    pub fn base_scores(&self, profile: &StudentProfile) -> CourseScores {
        self.pipeline.apply(profile)
    }

    /// Scores with one perturbation per course
    pub fn jittered_scores(&self, profile: &StudentProfile) -> CourseScores {
        let mut scores = self.base_scores(profile);
        // A poisoned lock still holds a usable RNG
        let mut jitter = self.jitter.lock().unwrap_or_else(PoisonError::into_inner);
        for course in Course::ALL {
            scores.add(course, jitter.next_jitter());
        }
        scores
    }
}

impl Default for FallbackScorer {
    fn default() -> Self {
        Self::new(ThreadJitter)
    }
}

impl CourseScorer for FallbackScorer {
    fn name(&self) -> &str {
        "fallback"
    }

    fn recommend_at(&self, profile: &StudentProfile, timestamp: NaiveDateTime) -> Recommendation {
        let scores = self.jittered_scores(profile);
        debug!("Fallback scores: {:?}", scores);

        let mut recommendation =
            Recommendation::from_scores(&scores, Rounding::Scaled(FALLBACK_PRECISION), timestamp);
        recommendation.method = Some(FALLBACK_METHOD.to_string());
        recommendation.note = Some(FALLBACK_NOTE.to_string());
        recommendation
    }
}
