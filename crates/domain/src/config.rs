//! Configuration management

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{
    ANIMATION_TICK_MS, DEFAULT_SERVICE_URL, SCORE_ANIMATION_MS, TAG_STAGGER_MS,
};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Analysis service location and transport settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub base_url: String,
    /// Request timeout. `None` or `0` leaves the transport default in place.
    pub timeout_secs: Option<u64>,
}

/// Report presentation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Animate the score; when off the final value is written at once.
    pub animate: bool,
    pub score_animation_ms: u64,
    pub tick_ms: u64,
    pub tag_stagger_ms: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_SERVICE_URL.to_string(), timeout_secs: None }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            animate: true,
            score_animation_ms: SCORE_ANIMATION_MS,
            tick_ms: ANIMATION_TICK_MS,
            tag_stagger_ms: TAG_STAGGER_MS,
        }
    }
}

impl ServiceConfig {
    /// Configured request timeout; a zero timeout counts as none.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.filter(|secs| *secs > 0).map(Duration::from_secs)
    }
}

impl DisplayConfig {
    /// Duration of the score animation, zero when animation is off.
    pub fn score_animation(&self) -> Duration {
        if self.animate {
            Duration::from_millis(self.score_animation_ms)
        } else {
            Duration::ZERO
        }
    }

    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms.max(1))
    }

    pub fn tag_stagger(&self) -> Duration {
        Duration::from_millis(self.tag_stagger_ms)
    }
}
