//! Neighbor counting and the B3/S23 transition rule.
//!
//! The grid is a torus: neighbor lookups wrap modulo width and height on
//! both axes independently, so edge and corner cells need no special case.

/// Relative offsets of the 8-cell Moore neighborhood.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Count alive cells among the 8 toroidal neighbors of (x, y).
///
/// `cells` is a dense row-major grid of `width * height` bytes where any
/// non-zero byte is alive. On grids narrower than 3 cells several offsets
/// land on the same cell and each one is counted.
#[inline]
pub fn count_alive_neighbors(cells: &[u8], width: usize, height: usize, x: usize, y: usize) -> u8 {
    debug_assert_eq!(cells.len(), width * height);

    let mut count = 0u8;
    for &(dx, dy) in &NEIGHBOR_OFFSETS {
        let nx = wrap(x, dx, width);
        let ny = wrap(y, dy, height);
        if cells[ny * width + nx] != 0 {
            count += 1;
        }
    }
    count
}

/// Wrap `coord + offset` onto `0..len`.
#[inline]
fn wrap(coord: usize, offset: isize, len: usize) -> usize {
    (coord as isize + offset).rem_euclid(len as isize) as usize
}

/// Standard Game of Life rule (B3/S23).
///
/// - A live cell with 2 or 3 live neighbors survives.
/// - A dead cell with exactly 3 live neighbors is born.
/// - Every other cell is dead in the next generation.
#[inline]
pub fn next_state(alive: bool, neighbors: u8) -> bool {
    matches!((alive, neighbors), (true, 2) | (true, 3) | (false, 3))
}

/// Compute the next generation of `current` into `next`.
///
/// Both slices must hold `width * height` cells and must not alias.
pub fn advance_into(current: &[u8], next: &mut [u8], width: usize, height: usize) {
    debug_assert_eq!(current.len(), next.len());

    for y in 0..height {
        for x in 0..width {
            let idx = y * width + x;
            let neighbors = count_alive_neighbors(current, width, height, x, y);
            next[idx] = next_state(current[idx] != 0, neighbors) as u8;
        }
    }
}
