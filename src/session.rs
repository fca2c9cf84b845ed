// The surface a UI drives: one owned grid plus the random source that feeds
// generation and island colors. Every call runs to completion on `&mut self`.

use std::time::Instant;

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::config::GridConfig;
use crate::core::{CellState, Color, IslandId, Result};
use crate::discovery;
use crate::grid::{self, Grid};
use crate::view::GridSnapshot;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelReport {
    pub islands: usize,
    /// Wall-clock time of the labeling pass, floored to 0.01 ms.
    pub elapsed_ms: f64,
}

impl LabelReport {
    pub fn print_summary(&self) {
        println!("Islands: {} | Labeling: {:.2}ms", self.islands, self.elapsed_ms);
    }
}

pub struct IslandMap<R: Rng = ChaCha8Rng> {
    grid: Grid,
    rng: R,
    islands: usize,
}

impl IslandMap<ChaCha8Rng> {
    pub fn from_config(config: &GridConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config.size, config.rng()))
    }
}

impl<R: Rng> IslandMap<R> {
    /// All-sea map; call `generate` or `regenerate` to populate it.
    pub fn new(size: usize, rng: R) -> Self {
        Self::with_grid(Grid::new(size), rng)
    }

    /// Wraps a prepared grid, e.g. one built with `Grid::from_pattern`.
    pub fn with_grid(grid: Grid, rng: R) -> Self {
        let islands = grid.islands().iter().flatten().max().copied().unwrap_or(0) as usize;
        Self { grid, rng, islands }
    }

    pub fn size(&self) -> usize {
        self.grid.size()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Islands discovered since the last generation.
    pub fn island_count(&self) -> usize {
        self.islands
    }

    /// Fills the grid with fresh sea/land. Returns the number of land cells.
    pub fn generate(&mut self, threshold: u32) -> usize {
        self.islands = 0;
        grid::generate(&mut self.grid, threshold, &mut self.rng)
    }

    pub fn label_all(&mut self) -> LabelReport {
        let start = Instant::now();
        let found = discovery::label_all(&mut self.grid, &mut self.rng);
        let elapsed = start.elapsed().as_secs_f64() * 1000.0;
        self.islands += found;
        LabelReport {
            islands: found,
            elapsed_ms: (elapsed * 100.0).floor() / 100.0,
        }
    }

    pub fn regenerate(&mut self, threshold: u32) -> LabelReport {
        self.generate(threshold);
        self.label_all()
    }

    pub fn recolor_region(&mut self, row: usize, col: usize, color: Color) -> Result<usize> {
        discovery::recolor_region(&mut self.grid, row, col, color)
    }

    pub fn recolor_all(&mut self, color: Color) -> usize {
        discovery::recolor_all(&mut self.grid, color)
    }

    pub fn state(&self, row: usize, col: usize) -> Result<CellState> {
        self.grid.state(row, col)
    }

    pub fn color(&self, row: usize, col: usize) -> Result<Color> {
        self.grid.color(row, col)
    }

    pub fn island_at(&self, row: usize, col: usize) -> Result<Option<IslandId>> {
        self.grid.island_at(row, col)
    }

    pub fn snapshot(&self) -> GridSnapshot {
        GridSnapshot::capture(&self.grid, self.islands)
    }
}
