//! The StagePipeline chains scoring stages.
//!
//! Both scorers are built as pipelines so that each step can be tested in
//! isolation and traced for explanations.

use crate::table::CourseScores;
use crate::traits::ScoreStage;
use questionnaire::StudentProfile;

/// Snapshot of the score table after one stage
#[derive(Debug, Clone)]
pub struct StageSnapshot {
    pub stage: String,
    pub scores: CourseScores,
}

/// Chains multiple stages into a scoring algorithm.
///
/// ## Usage
/// ```ignore
/// let pipeline = StagePipeline::new()
///     .add_stage(SubjectStrengthStage)
///     .add_stage(InterestStage::new(1.0))
///     .add_stage(FloorStage::new(0.1));
///
/// let scores = pipeline.apply(&profile);
/// ```
pub struct StagePipeline {
    stages: Vec<Box<dyn ScoreStage>>,
}

impl StagePipeline {
    /// Create a new empty StagePipeline.
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Add a stage to the pipeline (builder pattern).
    pub fn add_stage(mut self, stage: impl ScoreStage + 'static) -> Self {
        self.stages.push(Box::new(stage));
        self
    }

    /// Names of the stages, in order
    pub fn stage_names(&self) -> Vec<&str> {
        self.stages.iter().map(|s| s.name()).collect()
    }

    /// Run every stage in sequence on a zeroed table.
    pub fn apply(&self, profile: &StudentProfile) -> CourseScores {
        let mut scores = CourseScores::new();
        for stage in &self.stages {
            stage.apply(&mut scores, profile);
            tracing::debug!("Stage {} applied: {:?}", stage.name(), scores);
        }
        scores
    }

    /// Like [`apply`](Self::apply), but keep a snapshot after each stage.
    pub fn trace(&self, profile: &StudentProfile) -> Vec<StageSnapshot> {
        let mut scores = CourseScores::new();
        self.stages
            .iter()
            .map(|stage| {
                stage.apply(&mut scores, profile);
                StageSnapshot {
                    stage: stage.name().to_string(),
                    scores,
                }
            })
            .collect()
    }
}

impl Default for StagePipeline {
    fn default() -> Self {
        Self::new()
    }
}
