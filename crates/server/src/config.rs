//! Service configuration.

use std::time::Duration;

/// How long the primary scorer may run before the fallback takes over
pub const DEFAULT_PRIMARY_TIMEOUT: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub primary_timeout: Duration,
    /// Seed for the fallback's jitter; `None` draws from the thread RNG
    pub jitter_seed: Option<u64>,
    /// Skip the primary scorer entirely
    pub fallback_only: bool,
}

impl ServiceConfig {
    pub fn with_primary_timeout(mut self, timeout: Duration) -> Self {
        self.primary_timeout = timeout;
        self
    }

    pub fn with_jitter_seed(mut self, seed: Option<u64>) -> Self {
        self.jitter_seed = seed;
        self
    }

    pub fn with_fallback_only(mut self, fallback_only: bool) -> Self {
        self.fallback_only = fallback_only;
        self
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            primary_timeout: DEFAULT_PRIMARY_TIMEOUT,
            jitter_seed: None,
            fallback_only: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let config = ServiceConfig::default()
            .with_primary_timeout(Duration::from_millis(50))
            .with_jitter_seed(Some(9))
            .with_fallback_only(true);

        assert_eq!(config.primary_timeout, Duration::from_millis(50));
        assert_eq!(config.jitter_seed, Some(9));
        assert!(config.fallback_only);
        assert_eq!(ServiceConfig::default().primary_timeout, DEFAULT_PRIMARY_TIMEOUT);
    }
}
