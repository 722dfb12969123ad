//! Grid engine - Cell storage and generation advancement.
//!
//! Cells are stored as a dense row-major array of bytes, one per cell,
//! indexed as `y * width + x`. The backing storage can be owned by the
//! engine or handed in by the embedding layer.

use super::advance_into;

/// Errors raised by grid construction and coordinate access.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("Grid dimensions (width, height) must be non-zero, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    #[error("Grid dimensions {width}x{height} overflow the addressable cell count")]
    DimensionsTooLarge { width: usize, height: usize },
    #[error("Storage holds {actual} cells but the grid needs {expected}")]
    StorageSizeMismatch { expected: usize, actual: usize },
    #[error("Cell ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
}

/// Game of Life engine on a toroidal grid.
///
/// `S` is the backing storage: a `Vec<u8>` owned by the engine by default,
/// or any caller-supplied byte buffer (`Box<[u8]>`, `&mut [u8]`, ...).
/// The engine never reads the storage through anything but its own
/// operations while it holds it.
#[derive(Debug, Clone)]
pub struct GridEngine<S = Vec<u8>> {
    cells: S,
    width: usize,
    height: usize,
    generation: u64,
}

impl GridEngine<Vec<u8>> {
    /// Create an engine that owns its storage. All cells start dead.
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        let len = cell_count(width, height)?;
        log::debug!("Creating a game of life world of size {width}x{height}");

        Ok(Self {
            cells: vec![0u8; len],
            width,
            height,
            generation: 0,
        })
    }
}

impl<S> GridEngine<S>
where
    S: AsRef<[u8]> + AsMut<[u8]>,
{
    /// Create an engine on top of a caller-allocated buffer.
    ///
    /// The buffer must hold exactly `width * height` bytes. It is zeroed so
    /// the engine starts with every cell dead.
    pub fn with_storage(mut storage: S, width: usize, height: usize) -> Result<Self, GridError> {
        let expected = cell_count(width, height)?;
        let actual = storage.as_ref().len();
        if actual != expected {
            return Err(GridError::StorageSizeMismatch { expected, actual });
        }

        storage.as_mut().fill(0);
        log::debug!("Creating a game of life world of size {width}x{height} on external storage");

        Ok(Self {
            cells: storage,
            width,
            height,
            generation: 0,
        })
    }

    /// Grid width in cells.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of completed steps since construction or the last `clear`.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Read-only view of the row-major cell bytes.
    #[inline]
    pub fn cells(&self) -> &[u8] {
        self.cells.as_ref()
    }

    /// Release the engine and hand the backing storage back.
    pub fn into_storage(self) -> S {
        self.cells
    }

    /// Flat index of (x, y), or `OutOfBounds`.
    fn index(&self, x: usize, y: usize) -> Result<usize, GridError> {
        if x >= self.width || y >= self.height {
            return Err(GridError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(y * self.width + x)
    }

    /// Whether the cell at (x, y) is alive.
    pub fn get_cell(&self, x: usize, y: usize) -> Result<bool, GridError> {
        let idx = self.index(x, y)?;
        Ok(self.cells.as_ref()[idx] != 0)
    }

    /// Flip the cell at (x, y). Does not touch neighbors or the generation.
    pub fn toggle_cell(&mut self, x: usize, y: usize) -> Result<(), GridError> {
        let idx = self.index(x, y)?;
        let cell = &mut self.cells.as_mut()[idx];
        *cell = (*cell == 0) as u8;
        Ok(())
    }

    /// Set the cell at (x, y) to the given state.
    pub fn set_cell(&mut self, x: usize, y: usize, alive: bool) -> Result<(), GridError> {
        let idx = self.index(x, y)?;
        self.cells.as_mut()[idx] = alive as u8;
        Ok(())
    }

    /// Kill every cell and reset the generation counter.
    pub fn clear(&mut self) {
        self.cells.as_mut().fill(0);
        self.generation = 0;
    }

    /// Advance one generation.
    ///
    /// The next state is computed into a scratch buffer from the state at
    /// the start of the call, then copied back in one pass.
    pub fn step(&mut self) {
        let mut next = vec![0u8; self.width * self.height];
        advance_into(self.cells.as_ref(), &mut next, self.width, self.height);
        self.cells.as_mut().copy_from_slice(&next);

        self.generation += 1;
        log::trace!("Advanced to generation {}", self.generation);
    }

    /// Run simulation for specified number of steps.
    pub fn run(&mut self, steps: u64) {
        for _ in 0..steps {
            self.step();
        }
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.as_ref().iter().filter(|&&c| c != 0).count()
    }
}

/// Validate dimensions and return `width * height`.
fn cell_count(width: usize, height: usize) -> Result<usize, GridError> {
    if width == 0 || height == 0 {
        return Err(GridError::InvalidDimensions { width, height });
    }
    width
        .checked_mul(height)
        .ok_or(GridError::DimensionsTooLarge { width, height })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn engine_with(width: usize, height: usize, live: &[(usize, usize)]) -> GridEngine {
        let mut engine = GridEngine::new(width, height).unwrap();
        for &(x, y) in live {
            engine.set_cell(x, y, true).unwrap();
        }
        engine
    }

    fn live_cells<S: AsRef<[u8]> + AsMut<[u8]>>(engine: &GridEngine<S>) -> Vec<(usize, usize)> {
        let mut live = Vec::new();
        for y in 0..engine.height() {
            for x in 0..engine.width() {
                if engine.get_cell(x, y).unwrap() {
                    live.push((x, y));
                }
            }
        }
        live
    }

    #[test]
    fn test_new_is_empty() {
        let engine = GridEngine::new(7, 5).unwrap();
        assert_eq!(engine.width(), 7);
        assert_eq!(engine.height(), 5);
        assert_eq!(engine.generation(), 0);
        assert_eq!(engine.cells().len(), 35);
        assert_eq!(engine.population(), 0);
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert_eq!(
            GridEngine::new(0, 5).unwrap_err(),
            GridError::InvalidDimensions {
                width: 0,
                height: 5
            }
        );
        assert!(matches!(
            GridEngine::new(5, 0),
            Err(GridError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_overflowing_dimensions_rejected() {
        assert!(matches!(
            GridEngine::new(usize::MAX, 2),
            Err(GridError::DimensionsTooLarge { .. })
        ));
    }

    #[test]
    fn test_out_of_bounds_access() {
        let mut engine = GridEngine::new(4, 3).unwrap();
        let err = GridError::OutOfBounds {
            x: 4,
            y: 0,
            width: 4,
            height: 3,
        };
        assert_eq!(engine.get_cell(4, 0).unwrap_err(), err);
        assert_eq!(engine.toggle_cell(4, 0).unwrap_err(), err);
        assert!(engine.get_cell(0, 3).is_err());
        assert!(engine.set_cell(0, 3, true).is_err());

        // A failed call leaves the engine untouched
        assert_eq!(engine.population(), 0);
        engine.step();
        assert_eq!(engine.generation(), 1);
    }

    #[test]
    fn test_toggle_flips_single_cell() {
        let mut engine = GridEngine::new(4, 4).unwrap();
        engine.toggle_cell(1, 2).unwrap();
        assert!(engine.get_cell(1, 2).unwrap());
        assert_eq!(engine.population(), 1);
        assert_eq!(engine.generation(), 0);

        engine.toggle_cell(1, 2).unwrap();
        assert!(!engine.get_cell(1, 2).unwrap());
    }

    #[test]
    fn test_block_still_life() {
        let block = [(1, 1), (2, 1), (1, 2), (2, 2)];
        let mut engine = engine_with(4, 4, &block);
        for _ in 0..5 {
            engine.step();
            assert_eq!(live_cells(&engine), block.to_vec());
        }
        assert_eq!(engine.generation(), 5);
    }

    #[test]
    fn test_blinker_period_two() {
        let horizontal = vec![(1, 2), (2, 2), (3, 2)];
        let mut engine = engine_with(5, 5, &horizontal);

        engine.step();
        assert_eq!(live_cells(&engine), vec![(2, 1), (2, 2), (2, 3)]);

        engine.step();
        assert_eq!(live_cells(&engine), horizontal);
        assert_eq!(engine.generation(), 2);
    }

    #[test]
    fn test_lonely_cell_dies() {
        let mut engine = engine_with(3, 3, &[(0, 0)]);
        engine.step();
        assert_eq!(engine.population(), 0);
    }

    #[test]
    fn test_birth_across_edges() {
        // Three cells around the (0, 0) corner on a 6x6 torus; only wrap
        // makes them neighbors of (0, 0).
        let mut engine = engine_with(6, 6, &[(5, 5), (0, 5), (5, 0)]);
        engine.step();
        assert!(engine.get_cell(0, 0).unwrap());
    }

    #[test]
    fn test_glider_translates_across_edge() {
        // Glider moves (+1, +1) every 4 generations. On an 8x8 torus it is
        // back where it started after 32.
        let glider = [(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)];
        let mut engine = engine_with(8, 8, &glider);
        engine.run(32);

        let mut expected = glider.to_vec();
        expected.sort_by_key(|&(x, y)| (y, x));
        assert_eq!(live_cells(&engine), expected);
        assert_eq!(engine.generation(), 32);
    }

    #[test]
    fn test_clear_resets_cells_and_generation() {
        let mut engine = engine_with(5, 5, &[(1, 2), (2, 2), (3, 2)]);
        engine.run(3);
        engine.clear();

        assert_eq!(engine.generation(), 0);
        assert!(live_cells(&engine).is_empty());
        assert_eq!(engine.width(), 5);
        assert_eq!(engine.height(), 5);
    }

    #[test]
    fn test_external_storage_is_zeroed() {
        let storage = vec![1u8; 12];
        let engine = GridEngine::with_storage(storage, 4, 3).unwrap();
        assert_eq!(engine.population(), 0);
        assert_eq!(engine.into_storage(), vec![0u8; 12]);
    }

    #[test]
    fn test_external_storage_size_mismatch() {
        let err = GridEngine::with_storage(vec![0u8; 10], 4, 3).unwrap_err();
        assert_eq!(
            err,
            GridError::StorageSizeMismatch {
                expected: 12,
                actual: 10
            }
        );
    }

    #[test]
    fn test_borrowed_storage_reflects_steps() {
        let mut buffer = [0u8; 25];
        {
            let mut engine = GridEngine::with_storage(&mut buffer[..], 5, 5).unwrap();
            engine.toggle_cell(1, 2).unwrap();
            engine.toggle_cell(2, 2).unwrap();
            engine.toggle_cell(3, 2).unwrap();
            engine.step();
        }
        // Vertical blinker phase, written back to the caller's buffer
        assert_eq!(buffer[5 + 2], 1);
        assert_eq!(buffer[2 * 5 + 2], 1);
        assert_eq!(buffer[3 * 5 + 2], 1);
        assert_eq!(buffer.iter().map(|&c| c as usize).sum::<usize>(), 3);
    }

    fn arb_grid() -> impl Strategy<Value = (usize, usize, Vec<bool>)> {
        (1usize..12, 1usize..12).prop_flat_map(|(w, h)| {
            (Just(w), Just(h), proptest::collection::vec(any::<bool>(), w * h))
        })
    }

    fn engine_from(width: usize, height: usize, cells: &[bool]) -> GridEngine {
        let mut engine = GridEngine::new(width, height).unwrap();
        for (i, &alive) in cells.iter().enumerate() {
            engine.set_cell(i % width, i / width, alive).unwrap();
        }
        engine
    }

    proptest! {
        #[test]
        fn prop_step_is_deterministic((w, h, cells) in arb_grid()) {
            let mut a = engine_from(w, h, &cells);
            let mut b = engine_from(w, h, &cells);
            a.step();
            b.step();
            prop_assert_eq!(a.cells(), b.cells());
            prop_assert_eq!(a.generation(), 1);
            prop_assert_eq!(b.generation(), 1);
        }

        #[test]
        fn prop_toggle_twice_restores((w, h, cells) in arb_grid(), px in 0usize..12, py in 0usize..12) {
            let mut engine = engine_from(w, h, &cells);
            let (x, y) = (px % w, py % h);
            let before = engine.get_cell(x, y).unwrap();
            engine.toggle_cell(x, y).unwrap();
            prop_assert_eq!(engine.get_cell(x, y).unwrap(), !before);
            engine.toggle_cell(x, y).unwrap();
            prop_assert_eq!(engine.get_cell(x, y).unwrap(), before);
            prop_assert_eq!(engine.generation(), 0);
        }

        #[test]
        fn prop_generation_counts_steps((w, h, cells) in arb_grid(), steps in 0u64..8) {
            let mut engine = engine_from(w, h, &cells);
            for i in 0..steps {
                prop_assert_eq!(engine.generation(), i);
                engine.toggle_cell(0, 0).unwrap();
                let _ = engine.get_cell(0, 0).unwrap();
                engine.step();
            }
            prop_assert_eq!(engine.generation(), steps);
        }

        #[test]
        fn prop_clear_kills_everything((w, h, cells) in arb_grid(), steps in 0u64..4) {
            let mut engine = engine_from(w, h, &cells);
            engine.run(steps);
            engine.clear();
            prop_assert_eq!(engine.generation(), 0);
            for y in 0..h {
                for x in 0..w {
                    prop_assert!(!engine.get_cell(x, y).unwrap());
                }
            }
        }
    }
}
