//! Configuration type definitions and defaults

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub demo: DemoConfig,
}

/// Timing knobs for the demo driver
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Delay between animation frames, in milliseconds
    #[serde(default = "default_frame_delay_ms")]
    pub frame_delay_ms: u64,
    /// Number of frames the animation phase draws before stopping on its own
    #[serde(default = "default_frame_count")]
    pub frame_count: u32,
    /// Pause after drawing the back layer in the z-index phase, in milliseconds
    #[serde(default = "default_layer_pause_ms")]
    pub layer_pause_ms: u64,
}

pub fn default_frame_delay_ms() -> u64 {
    100
}

pub fn default_frame_count() -> u32 {
    100
}

pub fn default_layer_pause_ms() -> u64 {
    500
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            frame_delay_ms: default_frame_delay_ms(),
            frame_count: default_frame_count(),
            layer_pause_ms: default_layer_pause_ms(),
        }
    }
}

impl DemoConfig {
    pub fn frame_delay(&self) -> Duration {
        Duration::from_millis(self.frame_delay_ms)
    }

    pub fn layer_pause(&self) -> Duration {
        Duration::from_millis(self.layer_pause_ms)
    }
}
