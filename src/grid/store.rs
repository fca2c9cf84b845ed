// Grid store: a fixed N×N board kept as parallel arrays indexed by
// `row * N + col`. State, display color and island id live side by side;
// every index always has all three.

use crate::core::{CellState, Color, IslandError, IslandId, Result, LAND_COLOR, SEA_COLOR};

/// Moore neighborhood, row-major from the top-left.
static NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    size: usize,
    states: Vec<CellState>,
    colors: Vec<Color>,
    islands: Vec<Option<IslandId>>,
}

impl Grid {
    /// All-sea grid of `size` × `size` cells.
    pub fn new(size: usize) -> Self {
        let cells = size * size;
        Self {
            size,
            states: vec![CellState::Sea; cells],
            colors: vec![SEA_COLOR; cells],
            islands: vec![None; cells],
        }
    }

    /// Builds a grid from text rows: `#` is land, anything else is sea.
    /// Rows must form a square.
    pub fn from_pattern(rows: &[&str]) -> Result<Self> {
        let size = rows.len();
        let mut grid = Self::new(size);
        for (r, line) in rows.iter().enumerate() {
            let width = line.chars().count();
            if width != size {
                return Err(IslandError::InvalidConfig(format!(
                    "pattern row {} has {} cells, expected {}", r, width, size
                )));
            }
            for (c, ch) in line.chars().enumerate() {
                if ch == '#' {
                    let idx = grid.idx(r, c);
                    grid.states[idx] = CellState::Land;
                    grid.colors[idx] = LAND_COLOR;
                }
            }
        }
        Ok(grid)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn cell_count(&self) -> usize {
        self.states.len()
    }

    pub fn index(&self, row: usize, col: usize) -> Result<usize> {
        if row >= self.size || col >= self.size {
            return Err(IslandError::OutOfBounds { row, col, size: self.size });
        }
        Ok(self.idx(row, col))
    }

    pub fn position(&self, idx: usize) -> (usize, usize) {
        (idx / self.size, idx % self.size)
    }

    pub fn state(&self, row: usize, col: usize) -> Result<CellState> {
        self.index(row, col).map(|i| self.states[i])
    }

    pub fn set_state(&mut self, row: usize, col: usize, state: CellState) -> Result<()> {
        let i = self.index(row, col)?;
        self.states[i] = state;
        Ok(())
    }

    pub fn color(&self, row: usize, col: usize) -> Result<Color> {
        self.index(row, col).map(|i| self.colors[i])
    }

    pub fn set_color(&mut self, row: usize, col: usize, color: Color) -> Result<()> {
        let i = self.index(row, col)?;
        self.colors[i] = color;
        Ok(())
    }

    pub fn island_at(&self, row: usize, col: usize) -> Result<Option<IslandId>> {
        self.index(row, col).map(|i| self.islands[i])
    }

    pub fn states(&self) -> &[CellState] {
        &self.states
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn islands(&self) -> &[Option<IslandId>] {
        &self.islands
    }

    // Unchecked linear-index access for the flood passes. Callers only
    // pass indices produced by `index`, `adjacent` or a `0..cell_count()` sweep.

    pub(crate) fn state_at(&self, idx: usize) -> CellState {
        self.states[idx]
    }

    pub(crate) fn color_at(&self, idx: usize) -> Color {
        self.colors[idx]
    }

    /// Resets one cell to a freshly generated state: initial color, no island.
    pub(crate) fn reset_cell(&mut self, idx: usize, state: CellState) {
        self.states[idx] = state;
        self.colors[idx] = if state == CellState::Sea { SEA_COLOR } else { LAND_COLOR };
        self.islands[idx] = None;
    }

    pub(crate) fn discover(&mut self, idx: usize, island: IslandId, color: Color) {
        self.states[idx] = CellState::Discovered;
        self.colors[idx] = color;
        self.islands[idx] = Some(island);
    }

    pub(crate) fn paint(&mut self, idx: usize, color: Color) {
        self.colors[idx] = color;
    }

    /// In-bounds 8-neighbors of a linear index.
    pub fn neighbors(&self, idx: usize) -> impl Iterator<Item = usize> {
        let (adjacent, count) = self.adjacent(idx);
        adjacent.into_iter().take(count)
    }

    /// In-bounds 8-neighbors packed at the front of a fixed buffer, with
    /// their count. The floods use this to avoid a heap allocation per cell.
    pub(crate) fn adjacent(&self, idx: usize) -> ([usize; 8], usize) {
        let (row, col) = self.position(idx);
        let mut out = [0usize; 8];
        let mut count = 0;
        for &(dr, dc) in &NEIGHBOR_OFFSETS {
            let (Some(nr), Some(nc)) = (row.checked_add_signed(dr), col.checked_add_signed(dc)) else {
                continue;
            };
            if nr < self.size && nc < self.size {
                out[count] = self.idx(nr, nc);
                count += 1;
            }
        }
        (out, count)
    }

    fn idx(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }
}
