//! Seeded map generation.
//!
//! [`MapGen`] owns a walkable grid, a terrain layer and a random number
//! generator. All randomness comes from the generator it was built with, so
//! a seeded RNG reproduces the same map.

use gridroute_core::{CellGrid, CellKind, Grid, Point, Range, Terrain, TerrainMap};
use rand::{Rng, RngExt};

use crate::layout::Layout;

/// Map generator over a [`CellGrid`] and its [`TerrainMap`].
pub struct MapGen<R: Rng> {
    pub rng: R,
    pub grid: CellGrid,
    pub terrain: TerrainMap,
}

impl<R: Rng> MapGen<R> {
    /// An all-empty, all-road map of the given size.
    pub fn new(width: i32, height: i32, rng: R) -> Self {
        Self {
            rng,
            grid: Grid::new(width, height),
            terrain: Grid::new(width, height),
        }
    }

    /// Turn empty cells into walls, each with probability `density`
    /// (0.0–1.0). Only cells for which `keep` returns `true` are considered.
    /// Cells are visited in row-major order.
    ///
    /// Returns the number of walls placed.
    pub fn scatter_walls(&mut self, density: f64, keep: impl Fn(Point) -> bool) -> usize {
        let mut placed = 0;
        for p in self.grid.bounds().iter() {
            if !keep(p) || self.grid.at(p) != Some(CellKind::Empty) {
                continue;
            }
            let r: f64 = self.rng.random();
            if r < density {
                self.grid.set(p, CellKind::Wall);
                placed += 1;
            }
        }
        placed
    }

    /// Wall off row `y`, except the columns where `gap` returns `true`.
    pub fn wall_row(&mut self, y: i32, gap: impl Fn(i32) -> bool) {
        for x in 0..self.grid.width() {
            if !gap(x) {
                self.grid.set(Point::new(x, y), CellKind::Wall);
            }
        }
    }

    /// Set the terrain of every cell in `rng`.
    pub fn paint_terrain(&mut self, rng: Range, terrain: Terrain) {
        self.terrain.fill_range(rng, terrain);
    }

    /// Put `kind` at `p`, replacing whatever was there.
    pub fn place(&mut self, p: Point, kind: CellKind) {
        self.grid.set(p, kind);
    }

    pub fn into_layout(self) -> Layout {
        Layout::new(self.grid, self.terrain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn scatter_respects_keep_and_density() {
        let mut mg = MapGen::new(20, 20, StdRng::seed_from_u64(7));
        let placed = mg.scatter_walls(1.0, |p| p.x < 5);
        assert_eq!(placed, 100);
        assert_eq!(mg.grid.count(CellKind::Wall), 100);
        assert_eq!(mg.grid.at(Point::new(5, 0)), Some(CellKind::Empty));

        let none = mg.scatter_walls(0.0, |_| true);
        assert_eq!(none, 0);
    }

    #[test]
    fn scatter_skips_endpoints() {
        let mut mg = MapGen::new(3, 1, StdRng::seed_from_u64(1));
        mg.place(Point::new(0, 0), CellKind::Start);
        mg.place(Point::new(2, 0), CellKind::End);
        mg.scatter_walls(1.0, |_| true);
        assert_eq!(mg.grid.at(Point::new(0, 0)), Some(CellKind::Start));
        assert_eq!(mg.grid.at(Point::new(1, 0)), Some(CellKind::Wall));
        assert_eq!(mg.grid.at(Point::new(2, 0)), Some(CellKind::End));
    }

    #[test]
    fn same_seed_same_map() {
        let gen_map = |seed| {
            let mut mg = MapGen::new(16, 16, StdRng::seed_from_u64(seed));
            mg.scatter_walls(0.3, |_| true);
            mg.grid
        };
        assert_eq!(gen_map(99), gen_map(99));
    }

    #[test]
    fn wall_row_leaves_gaps() {
        let mut mg = MapGen::new(13, 3, StdRng::seed_from_u64(0));
        mg.wall_row(1, |x| x % 6 == 0);
        assert_eq!(mg.grid.count(CellKind::Wall), 10);
        assert_eq!(mg.grid.at(Point::new(6, 1)), Some(CellKind::Empty));
        assert_eq!(mg.grid.at(Point::new(7, 1)), Some(CellKind::Wall));
    }

    #[test]
    fn painted_terrain_survives_into_layout() {
        let mut mg = MapGen::new(4, 4, StdRng::seed_from_u64(0));
        mg.paint_terrain(Range::new(0, 0, 2, 4), Terrain::Grass);
        let layout = mg.into_layout();
        let t = layout.terrain.unwrap();
        assert_eq!(t.count(Terrain::Grass), 8);
    }
}
