//! Course scoring for the recommendation engine.
//!
//! This crate provides:
//! - `ScoreStage` trait and stage implementations
//! - `StagePipeline` for composing stages
//! - `ExpertScorer`, the primary weighted-sum scorer with its rule cascade
//! - `FallbackScorer`, the jittered backup scorer
//!
//! ## Architecture
//! Both scorers run a pipeline over a five-course score table:
//! 1. Stages add contributions and apply multipliers in order
//! 2. The final table is ranked with a stable descending sort
//! 3. The ranking is rounded into a `Recommendation`
//!
//! ## Example Usage
//! ```ignore
//! use scoring::{CourseScorer, ExpertScorer, FallbackScorer};
//! use questionnaire::parse_profile;
//!
//! let profile = parse_profile(&request);
//! let recommendation = ExpertScorer::new().recommend(&profile);
//! println!("{}", recommendation.first_recommended_course);
//!
//! // Reproducible fallback output
//! let fallback = FallbackScorer::new(scoring::SeededJitter::new(42));
//! let backup = fallback.recommend(&profile);
//! ```

pub mod traits;
pub mod table;
pub mod weights;
pub mod rules;
pub mod stages;
pub mod stage_pipeline;
pub mod jitter;
pub mod recommendation;
pub mod expert;
pub mod fallback;

// Re-export main types
pub use traits::{CourseScorer, ScoreStage};
pub use table::CourseScores;
pub use rules::{classify, Classification, Rule, RULES};
pub use stage_pipeline::{StagePipeline, StageSnapshot};
pub use jitter::{JitterSource, NoJitter, SeededJitter, ThreadJitter, JITTER_BOUND};
pub use recommendation::{Recommendation, Rounding, TIMESTAMP_FORMAT};
pub use expert::{ExpertScorer, Explanation, ScoreSheet};
pub use fallback::FallbackScorer;
