// Component labeler: one sweep over the grid, flooding each undiscovered
// land cell into a new island.
//
// Every root gets a fresh id and a fresh color. The flood only walks cells
// still in `Land`, so each land cell is discovered (and painted) exactly once
// per sweep, and a second sweep finds no roots at all.

use rand::Rng;
use rustc_hash::FxHashSet;

use crate::core::{CellState, Color, IslandId, LAND_COLOR, SEA_COLOR};
use crate::grid::Grid;

/// Hands out island colors that never repeat within one labeling pass and
/// never match the sea or land constants.
pub struct Palette {
    used: FxHashSet<Color>,
}

impl Palette {
    pub fn new() -> Self {
        let mut used = FxHashSet::default();
        used.insert(SEA_COLOR);
        used.insert(LAND_COLOR);
        Self { used }
    }

    pub fn fresh<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Color {
        // Past this point the RGB space is exhausted and repeats are unavoidable.
        if self.used.len() > Color::MAX as usize {
            return Color::from_u32(rng.gen());
        }
        loop {
            let color = Color::from_u32(rng.gen());
            if self.used.insert(color) {
                return color;
            }
        }
    }

    /// Colors handed out or reserved so far, the two constants included.
    pub fn len(&self) -> usize {
        self.used.len()
    }

    pub fn is_empty(&self) -> bool {
        self.used.is_empty()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new()
    }
}

/// Labels every remaining `Land` cell and returns how many islands were found.
pub fn label_all<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) -> usize {
    let size = grid.size();
    let mut palette = Palette::new();
    let mut islands = 0usize;
    let mut stack = Vec::new();

    for col in 0..size {
        for row in 0..size {
            let root = row * size + col;
            if grid.state_at(root) != CellState::Land {
                continue;
            }
            islands += 1;
            let color = palette.fresh(rng);
            flood_discover(grid, root, islands as IslandId, color, &mut stack);
        }
    }
    islands
}

/// Discovers every `Land` cell 8-connected to `root`.
fn flood_discover(grid: &mut Grid, root: usize, island: IslandId, color: Color, stack: &mut Vec<usize>) {
    stack.clear();
    grid.discover(root, island, color);
    stack.push(root);

    while let Some(idx) = stack.pop() {
        let (adjacent, count) = grid.adjacent(idx);
        for &n in &adjacent[..count] {
            if grid.state_at(n) == CellState::Land {
                grid.discover(n, island, color);
                stack.push(n);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{RngCore, SeedableRng};
    use rand_chacha::ChaCha8Rng;
    use rustc_hash::FxHashMap;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(3)
    }

    /// Replays a fixed cycle of words.
    struct Cycle {
        words: Vec<u32>,
        pos: usize,
    }

    impl RngCore for Cycle {
        fn next_u32(&mut self) -> u32 {
            let w = self.words[self.pos % self.words.len()];
            self.pos += 1;
            w
        }

        fn next_u64(&mut self) -> u64 {
            ((self.next_u32() as u64) << 32) | self.next_u32() as u64
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            for b in dest.iter_mut() {
                *b = self.next_u32() as u8;
            }
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
            self.fill_bytes(dest);
            Ok(())
        }
    }

    /// Independent connectivity reference: union-find over 8-adjacent land.
    struct Dsu {
        parent: Vec<usize>,
    }

    impl Dsu {
        fn new(n: usize) -> Self {
            Self { parent: (0..n).collect() }
        }

        fn find(&mut self, x: usize) -> usize {
            let mut root = x;
            while self.parent[root] != root {
                root = self.parent[root];
            }
            let mut cur = x;
            while self.parent[cur] != root {
                let next = self.parent[cur];
                self.parent[cur] = root;
                cur = next;
            }
            root
        }

        fn union(&mut self, a: usize, b: usize) {
            let (ra, rb) = (self.find(a), self.find(b));
            if ra != rb {
                self.parent[ra] = rb;
            }
        }
    }

    fn reference_components(grid: &Grid) -> Dsu {
        let mut dsu = Dsu::new(grid.cell_count());
        for i in 0..grid.cell_count() {
            if !grid.state_at(i).is_land() {
                continue;
            }
            for n in grid.neighbors(i) {
                if grid.state_at(n).is_land() {
                    dsu.union(i, n);
                }
            }
        }
        dsu
    }

    const FIXTURE: [&str; 8] = [
        "##....#.",
        "#...#..#",
        "...##...",
        "#.......",
        ".#.####.",
        "..#....#",
        "#......#",
        "##.#.#.#",
    ];

    #[test]
    fn l_shape_is_one_island() {
        let mut grid = Grid::from_pattern(&["##.", "#..", "..."]).unwrap();
        assert_eq!(label_all(&mut grid, &mut rng()), 1);

        let c = grid.color(0, 0).unwrap();
        assert_eq!(grid.color(0, 1).unwrap(), c);
        assert_eq!(grid.color(1, 0).unwrap(), c);
        for (r, col) in [(0, 2), (1, 1), (1, 2), (2, 0), (2, 1), (2, 2)] {
            assert_eq!(grid.state(r, col).unwrap(), CellState::Sea);
            assert_eq!(grid.color(r, col).unwrap(), SEA_COLOR);
        }
    }

    #[test]
    fn full_two_by_two_is_one_island() {
        let mut grid = Grid::from_pattern(&["##", "##"]).unwrap();
        assert_eq!(label_all(&mut grid, &mut rng()), 1);
        assert!(grid.islands().iter().all(|&i| i == Some(1)));
    }

    #[test]
    fn diagonal_touch_counts_as_connected() {
        let mut grid = Grid::from_pattern(&["#..", ".#.", "..."]).unwrap();
        assert_eq!(label_all(&mut grid, &mut rng()), 1);
        assert_eq!(grid.color(0, 0).unwrap(), grid.color(1, 1).unwrap());
    }

    #[test]
    fn no_land_left_after_labeling() {
        let original = Grid::from_pattern(&FIXTURE).unwrap();
        let mut grid = original.clone();
        label_all(&mut grid, &mut rng());
        for i in 0..grid.cell_count() {
            match original.state_at(i) {
                CellState::Land => assert_eq!(grid.state_at(i), CellState::Discovered),
                CellState::Sea => {
                    assert_eq!(grid.state_at(i), CellState::Sea);
                    assert_eq!(grid.color_at(i), SEA_COLOR);
                }
                CellState::Discovered => unreachable!(),
            }
        }
    }

    #[test]
    fn same_color_iff_connected() {
        let mut grid = Grid::from_pattern(&FIXTURE).unwrap();
        let mut dsu = reference_components(&grid);
        label_all(&mut grid, &mut rng());

        let land: Vec<usize> = (0..grid.cell_count())
            .filter(|&i| grid.state_at(i) == CellState::Discovered)
            .collect();
        for &a in &land {
            for &b in &land {
                let connected = dsu.find(a) == dsu.find(b);
                assert_eq!(grid.color_at(a) == grid.color_at(b), connected, "cells {} and {}", a, b);
                assert_eq!(grid.islands()[a] == grid.islands()[b], connected);
            }
        }
    }

    #[test]
    fn count_matches_distinct_colors() {
        let mut grid = Grid::new(50);
        crate::grid::generate(&mut grid, 45, &mut rng());
        let count = label_all(&mut grid, &mut rng());

        let colors: FxHashSet<Color> = (0..grid.cell_count())
            .filter(|&i| grid.state_at(i) == CellState::Discovered)
            .map(|i| grid.color_at(i))
            .collect();
        assert_eq!(colors.len(), count);
        assert!(!colors.contains(&SEA_COLOR));
        assert!(!colors.contains(&LAND_COLOR));
    }

    #[test]
    fn fixture_island_count_and_ids() {
        let mut grid = Grid::from_pattern(&FIXTURE).unwrap();
        let mut dsu = reference_components(&grid);
        let count = label_all(&mut grid, &mut rng());

        let mut roots = FxHashSet::default();
        for i in 0..grid.cell_count() {
            if grid.state_at(i).is_land() {
                roots.insert(dsu.find(i));
            }
        }
        assert_eq!(count, roots.len());

        let mut sizes: FxHashMap<IslandId, usize> = FxHashMap::default();
        for id in grid.islands().iter().flatten() {
            *sizes.entry(*id).or_default() += 1;
        }
        let mut ids: Vec<_> = sizes.keys().copied().collect();
        ids.sort();
        assert_eq!(ids, (1..=count as IslandId).collect::<Vec<_>>());
    }

    #[test]
    fn second_pass_is_a_no_op() {
        let mut grid = Grid::from_pattern(&FIXTURE).unwrap();
        label_all(&mut grid, &mut rng());
        let labeled = grid.clone();
        assert_eq!(label_all(&mut grid, &mut rng()), 0);
        assert_eq!(grid, labeled);
    }

    #[test]
    fn all_land_grid_floods_without_recursion() {
        let mut grid = Grid::new(300);
        crate::grid::generate(&mut grid, 100, &mut rng());
        assert_eq!(label_all(&mut grid, &mut rng()), 1);
        assert!(grid.states().iter().all(|&s| s == CellState::Discovered));
    }

    #[test]
    fn colliding_draws_are_redrawn() {
        // first draw hits the land constant, third repeats the first island's color
        let mut cycle = Cycle { words: vec![0xBB_BB_BB, 1, 1, 2], pos: 0 };
        let mut grid = Grid::from_pattern(&["#.#", "...", "..."]).unwrap();
        assert_eq!(label_all(&mut grid, &mut cycle), 2);
        assert_eq!(grid.color(0, 0).unwrap(), Color::from_u32(1));
        assert_eq!(grid.color(0, 2).unwrap(), Color::from_u32(2));
    }

    #[test]
    fn palette_starts_with_reserved_colors() {
        let mut palette = Palette::default();
        assert_eq!(palette.len(), 2);
        assert!(!palette.is_empty());
        let c = palette.fresh(&mut rng());
        assert_ne!(c, SEA_COLOR);
        assert_ne!(c, LAND_COLOR);
        assert_eq!(palette.len(), 3);
    }

    #[test]
    fn empty_grid_has_no_islands() {
        let mut grid = Grid::new(0);
        assert_eq!(label_all(&mut grid, &mut rng()), 0);
    }
}
