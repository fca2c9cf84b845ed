// Read-only views of a grid for whatever draws it: a serializable snapshot
// (one entry per cell, row-major) and a plain-text map.

use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::core::{CellState, Color, IslandId};
use crate::grid::Grid;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CellView {
    pub state: CellState,
    pub color: Color,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub island: Option<IslandId>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridSnapshot {
    pub size: usize,
    pub islands: usize,
    pub rows: Vec<Vec<CellView>>,
}

impl GridSnapshot {
    pub fn capture(grid: &Grid, islands: usize) -> Self {
        let size = grid.size();
        let rows = (0..size)
            .map(|r| {
                (r * size..(r + 1) * size)
                    .map(|i| CellView {
                        state: grid.states()[i],
                        color: grid.colors()[i],
                        island: grid.islands()[i],
                    })
                    .collect()
            })
            .collect();
        Self { size, islands, rows }
    }

    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// `~` for sea, `#` for unlabeled land, base-36 island id (wrapping) for
/// discovered cells.
pub fn render_ascii(grid: &Grid) -> String {
    let size = grid.size();
    let mut out = String::with_capacity(size * (size + 1));
    for r in 0..size {
        for c in 0..size {
            let i = r * size + c;
            let ch = match (grid.states()[i], grid.islands()[i]) {
                (CellState::Sea, _) => '~',
                (CellState::Discovered, Some(id)) => {
                    std::char::from_digit(id % 36, 36).unwrap_or('?')
                }
                _ => '#',
            };
            out.push(ch);
        }
        if r + 1 < size {
            out.push('\n');
        }
    }
    out
}

/// Cell count per island, ordered by id.
pub fn island_sizes(grid: &Grid) -> Vec<(IslandId, usize)> {
    let mut counts: FxHashMap<IslandId, usize> = FxHashMap::default();
    for id in grid.islands().iter().flatten() {
        *counts.entry(*id).or_default() += 1;
    }
    let mut sizes: Vec<_> = counts.into_iter().collect();
    sizes.sort_by_key(|&(id, _)| id);
    sizes
}
