use crate::core::{CellState, Color, Result, SEA_COLOR};
use crate::grid::Grid;

/// Repaints the island under (`row`, `col`) with `color`.
///
/// Only a `Discovered` cell starts a flood; sea and unlabeled land are left
/// alone. The flood crosses any non-sea neighbor whose color is not already
/// `color`, so repeating the call is a no-op. States and island ids are not
/// touched. Returns the number of repainted cells.
pub fn recolor_region(grid: &mut Grid, row: usize, col: usize, color: Color) -> Result<usize> {
    let start = grid.index(row, col)?;
    if grid.state_at(start) != CellState::Discovered || grid.color_at(start) == color {
        return Ok(0);
    }

    let mut painted = 0;
    let mut stack = vec![start];
    grid.paint(start, color);

    while let Some(idx) = stack.pop() {
        painted += 1;
        let (adjacent, count) = grid.adjacent(idx);
        for &n in &adjacent[..count] {
            if grid.state_at(n).is_land() && grid.color_at(n) != color {
                grid.paint(n, color);
                stack.push(n);
            }
        }
    }
    Ok(painted)
}

/// Paints every land cell, discovered or not, with one flat color and resets
/// sea cells to the sea constant. Returns the number of land cells painted.
pub fn recolor_all(grid: &mut Grid, color: Color) -> usize {
    let mut painted = 0;
    for idx in 0..grid.cell_count() {
        if grid.state_at(idx).is_land() {
            grid.paint(idx, color);
            painted += 1;
        } else {
            grid.paint(idx, SEA_COLOR);
        }
    }
    painted
}
