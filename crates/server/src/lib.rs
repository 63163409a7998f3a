//! Server crate for the course recommendation engine.
//!
//! This crate contains the service that turns raw questionnaire payloads
//! into recommendation responses: it tries the primary scorer and absorbs
//! any failure with the fallback scorer.

pub mod config;
pub mod engine;
pub mod orchestrator;
pub mod response;

pub use config::ServiceConfig;
pub use engine::{EngineError, InProcessEngine, PrimaryEngine};
pub use orchestrator::RecommendationService;
pub use response::RecommendResponse;
