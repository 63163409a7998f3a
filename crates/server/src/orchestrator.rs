//! # Recommendation Service
//!
//! This module coordinates one recommendation request:
//! 1. Coerce the raw payload into a student profile
//! 2. Run the primary engine on the blocking pool, under a timeout
//! 3. On any primary failure, score with the fallback instead
//! 4. Wrap the result in a success envelope
//!
//! The caller never sees an error.

use std::sync::Arc;
use std::time::Instant;

use questionnaire::{parse_profile, StudentProfile};
use scoring::{CourseScorer, FallbackScorer, Recommendation, SeededJitter};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::config::ServiceConfig;
use crate::engine::{EngineError, InProcessEngine, PrimaryEngine};
use crate::response::RecommendResponse;

/// Main service that coordinates the primary and fallback scorers
#[derive(Clone)]
pub struct RecommendationService {
    engine: Arc<dyn PrimaryEngine>,
    fallback: Arc<FallbackScorer>,
    config: ServiceConfig,
}

impl RecommendationService {
    /// Create a service backed by the in-process expert scorer
    pub fn new(config: ServiceConfig) -> Self {
        Self::with_engine(Arc::new(InProcessEngine::new()), config)
    }

    /// Create a service with a custom primary engine
    pub fn with_engine(engine: Arc<dyn PrimaryEngine>, config: ServiceConfig) -> Self {
        let fallback = match config.jitter_seed {
            Some(seed) => FallbackScorer::new(SeededJitter::new(seed)),
            None => FallbackScorer::default(),
        };
        Self {
            engine,
            fallback: Arc::new(fallback),
            config,
        }
    }

    /// Main entry point: recommend courses for a raw questionnaire payload
    pub async fn recommend(&self, request: &Value) -> RecommendResponse {
        info!("Received recommendation request: {}", request);
        let profile = parse_profile(request);
        self.recommend_profile(profile).await
    }

    /// Recommend courses for an already coerced profile
    pub async fn recommend_profile(&self, profile: StudentProfile) -> RecommendResponse {
        let start_time = Instant::now();

        let data = match self.try_primary(&profile).await {
            Ok(recommendation) => {
                info!(
                    "Generated recommendation: {} (via {})",
                    recommendation.first_recommended_course,
                    self.engine.name()
                );
                recommendation
            }
            Err(e) => {
                warn!("Recommendation error: {}", e);
                let recommendation = self.fallback.recommend(&profile);
                info!(
                    "Using fallback recommendation: {} (via {})",
                    recommendation.first_recommended_course,
                    self.fallback.name()
                );
                recommendation
            }
        };

        debug!("Recommendation completed in {:.2?}", start_time.elapsed());
        RecommendResponse::new(data)
    }

    /// Run the primary engine once. No retries.
    async fn try_primary(&self, profile: &StudentProfile) -> Result<Recommendation, EngineError> {
        if self.config.fallback_only {
            return Err(EngineError::Disabled);
        }

        let task = tokio::task::spawn_blocking({
            let engine = Arc::clone(&self.engine);
            let profile = profile.clone();
            move || engine.recommend(&profile)
        });

        match tokio::time::timeout(self.config.primary_timeout, task).await {
            Ok(Ok(result)) => result,
            Ok(Err(join_error)) => Err(EngineError::TaskFailed(join_error.to_string())),
            Err(_elapsed) => Err(EngineError::Timeout(self.config.primary_timeout)),
        }
    }
}
