use rand::Rng;

use super::store::Grid;
use crate::core::CellState;

/// Percentage of cells that come out as land when the caller does not say.
pub const DEFAULT_LAND_THRESHOLD: u32 = 60;

/// Overwrites every cell with a fresh sea/land draw.
///
/// Each cell draws uniformly from `0..100` and becomes land when the draw is
/// below `threshold`, so a threshold of 0 gives an all-sea grid and 100 or more
/// an all-land one. Colors revert to the land/sea constants and island ids are
/// cleared. Returns the number of land cells.
pub fn generate<R: Rng + ?Sized>(grid: &mut Grid, threshold: u32, rng: &mut R) -> usize {
    let size = grid.size();
    let mut land = 0;
    for col in 0..size {
        for row in 0..size {
            let draw: u32 = rng.gen_range(0..100);
            let state = if draw < threshold { CellState::Land } else { CellState::Sea };
            if state == CellState::Land {
                land += 1;
            }
            grid.reset_cell(row * size + col, state);
        }
    }
    land
}
