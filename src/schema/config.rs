//! Configuration types for the console simulation driver.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::Seed;

fn default_frame_delay_ms() -> u64 {
    100
}

fn default_mutation_interval() -> u64 {
    2
}

/// Top-level simulation configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Grid width in cells.
    pub width: usize,
    /// Grid height in cells.
    pub height: usize,
    /// Stop once the generation counter reaches this value.
    pub max_generations: u64,
    /// Delay between rendered generations, in milliseconds.
    #[serde(default = "default_frame_delay_ms")]
    pub frame_delay_ms: u64,
    /// Toggle one random cell every N generations (0 disables).
    #[serde(default = "default_mutation_interval")]
    pub mutation_interval: u64,
    /// Initial pattern.
    #[serde(default)]
    pub seed: Seed,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            width: 20,
            height: 20,
            max_generations: 50,
            frame_delay_ms: default_frame_delay_ms(),
            mutation_interval: default_mutation_interval(),
            seed: Seed::default(),
        }
    }
}

impl SimulationConfig {
    /// Load configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config: SimulationConfig = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Get total grid size (width * height).
    #[inline]
    pub fn grid_size(&self) -> usize {
        self.width * self.height
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidDimensions);
        }
        Ok(())
    }
}

/// Configuration loading and validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Grid dimensions (width, height) must be non-zero")]
    InvalidDimensions,
    #[error("Error reading config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Error parsing config: {0}")]
    Parse(#[from] serde_json::Error),
}
