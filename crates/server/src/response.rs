//! Response envelope returned for every recommendation request.

use scoring::Recommendation;
use serde::{Deserialize, Serialize};

/// `{ "success": true, "data": { ... } }`.
///
/// The service never reports failure; `success` is always true.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendResponse {
    pub success: bool,
    pub data: Recommendation,
}

impl RecommendResponse {
    pub fn new(data: Recommendation) -> Self {
        Self {
            success: true,
            data,
        }
    }
}
