//! Runtime configuration for a card session.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::walker::EndPolicy;

/// Settings chosen at launch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardConfig {
    /// Seed for decorative randomness; `None` draws from the OS
    pub seed: Option<u64>,
    pub end_policy: EndPolicy,
    /// Burst confetti as soon as the card opens
    pub opening_confetti: bool,
    pub confetti_ms: u64,
    pub sparkle_ms: u64,
    pub banner_ms: u64,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            seed: None,
            end_policy: EndPolicy::Halt,
            opening_confetti: true,
            confetti_ms: 5000,
            sparkle_ms: 1500,
            banner_ms: 4000,
        }
    }
}

impl CardConfig {
    pub fn confetti_duration(&self) -> Duration {
        Duration::from_millis(self.confetti_ms)
    }

    pub fn sparkle_duration(&self) -> Duration {
        Duration::from_millis(self.sparkle_ms)
    }

    pub fn banner_duration(&self) -> Duration {
        Duration::from_millis(self.banner_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CardConfig::default();
        assert_eq!(config.seed, None);
        assert_eq!(config.end_policy, EndPolicy::Halt);
        assert!(config.opening_confetti);
        assert_eq!(config.confetti_duration(), Duration::from_secs(5));
        assert_eq!(config.sparkle_duration(), Duration::from_millis(1500));
        assert_eq!(config.banner_duration(), Duration::from_secs(4));
    }

    #[test]
    fn test_serializes_for_startup_log() {
        let json = serde_json::to_string(&CardConfig::default()).unwrap();
        assert!(json.contains("\"end_policy\":\"halt\""));
    }
}
