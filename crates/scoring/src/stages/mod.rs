//! Stage implementations for the scoring pipelines.
//!
//! This module contains all the concrete stages that can be composed into
//! a StagePipeline.

pub mod cgpa;
pub mod difficulty;
pub mod fallback_base;
pub mod floor;
pub mod interests;
pub mod learning_style;
pub mod rule_bonus;
pub mod subjects;

// Re-export for convenience
pub use cgpa::CgpaFactorStage;
pub use difficulty::DifficultyStage;
pub use fallback_base::FallbackBaseStage;
pub use floor::FloorStage;
pub use interests::InterestStage;
pub use learning_style::LearningStyleStage;
pub use rule_bonus::RuleBonusStage;
pub use subjects::SubjectStrengthStage;
