//! Grid statistics for monitoring.

use serde::{Deserialize, Serialize};

use super::GridEngine;

/// Snapshot of grid-level counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridStats {
    pub width: usize,
    pub height: usize,
    pub generation: u64,
    pub population: usize,
}

impl GridStats {
    /// Compute statistics from an engine.
    pub fn from_engine<S>(engine: &GridEngine<S>) -> Self
    where
        S: AsRef<[u8]> + AsMut<[u8]>,
    {
        Self {
            width: engine.width(),
            height: engine.height(),
            generation: engine.generation(),
            population: engine.population(),
        }
    }

    /// Fraction of cells alive (0.0-1.0).
    pub fn density(&self) -> f32 {
        self.population as f32 / (self.width * self.height) as f32
    }
}
