//! Seed types for initializing Game of Life grids.

use serde::{Deserialize, Serialize};

use crate::compute::{GridEngine, GridError};

/// Complete seed specification for grid initialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seed {
    /// Pattern to use for seeding.
    pub pattern: Pattern,
}

impl Default for Seed {
    fn default() -> Self {
        Self {
            pattern: Pattern::Random { count: 30, seed: 1 },
        }
    }
}

/// Predefined patterns for initialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Pattern {
    /// Toggle `count` pseudo-random cells. A coordinate drawn twice is
    /// toggled back to dead.
    Random {
        /// Number of toggles.
        count: usize,
        /// Random seed.
        seed: u64,
    },
    /// Explicit live cells as (x, y) coordinates.
    Cells {
        /// Cells to set alive.
        cells: Vec<(usize, usize)>,
    },
    /// 2x2 still life with its top-left corner at `origin`.
    Block { origin: (usize, usize) },
    /// Horizontal period-2 oscillator starting at `origin`.
    Blinker { origin: (usize, usize) },
    /// South-east travelling glider in a 3x3 box at `origin`.
    Glider { origin: (usize, usize) },
}

const BLOCK: &[(usize, usize)] = &[(0, 0), (1, 0), (0, 1), (1, 1)];
const BLINKER: &[(usize, usize)] = &[(0, 0), (1, 0), (2, 0)];
const GLIDER: &[(usize, usize)] = &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)];

impl Seed {
    /// Apply the pattern on top of the engine's current cells.
    ///
    /// Shape patterns wrap around the torus from their origin. Explicit
    /// cells outside the grid fail with `OutOfBounds`.
    pub fn apply<S>(&self, engine: &mut GridEngine<S>) -> Result<(), GridError>
    where
        S: AsRef<[u8]> + AsMut<[u8]>,
    {
        match &self.pattern {
            Pattern::Random { count, seed } => {
                apply_random(engine, *count, *seed)?;
            }
            Pattern::Cells { cells } => {
                for &(x, y) in cells {
                    engine.set_cell(x, y, true)?;
                }
            }
            Pattern::Block { origin } => apply_shape(engine, BLOCK, *origin)?,
            Pattern::Blinker { origin } => apply_shape(engine, BLINKER, *origin)?,
            Pattern::Glider { origin } => apply_shape(engine, GLIDER, *origin)?,
        }
        Ok(())
    }
}

fn apply_shape<S>(
    engine: &mut GridEngine<S>,
    shape: &[(usize, usize)],
    origin: (usize, usize),
) -> Result<(), GridError>
where
    S: AsRef<[u8]> + AsMut<[u8]>,
{
    let (width, height) = (engine.width(), engine.height());
    for &(dx, dy) in shape {
        let x = (origin.0 % width + dx) % width;
        let y = (origin.1 % height + dy) % height;
        engine.set_cell(x, y, true)?;
    }
    Ok(())
}

fn apply_random<S>(engine: &mut GridEngine<S>, count: usize, seed: u64) -> Result<(), GridError>
where
    S: AsRef<[u8]> + AsMut<[u8]>,
{
    // Simple LCG PRNG so seeding is reproducible on every target
    let mut state = seed;
    let mut lcg_next = |bound: usize| -> usize {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        ((state >> 33) % bound as u64) as usize
    };

    let (width, height) = (engine.width(), engine.height());
    for _ in 0..count {
        let x = lcg_next(width);
        let y = lcg_next(height);
        engine.toggle_cell(x, y)?;
    }
    Ok(())
}
