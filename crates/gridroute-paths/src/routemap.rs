use gridroute_core::{CellGrid, GridError, Point, ROAD_COST, TerrainMap};

use crate::distance::manhattan;
use crate::search::{SearchResult, search};
use crate::traits::{AstarPather, Pather, WeightedPather};
use crate::Algorithm;

/// A walkable grid plus its optional terrain, seen through the pather
/// traits.
///
/// Movement is 4-connected. Walls and out-of-bounds cells are never
/// neighbors. Entering a cell costs its terrain cost; without a terrain map
/// every cell costs [`ROAD_COST`].
#[derive(Debug, Clone, Copy)]
pub struct RouteMap<'a> {
    grid: &'a CellGrid,
    terrain: Option<&'a TerrainMap>,
}

impl<'a> RouteMap<'a> {
    /// A map with uniform road cost.
    pub fn new(grid: &'a CellGrid) -> Self {
        Self {
            grid,
            terrain: None,
        }
    }

    /// A map with a terrain layer. The terrain must have the grid's size.
    pub fn with_terrain(grid: &'a CellGrid, terrain: &'a TerrainMap) -> Result<Self, GridError> {
        if terrain.size() != grid.size() {
            return Err(GridError::SizeMismatch {
                expected: grid.size(),
                found: terrain.size(),
            });
        }
        Ok(Self {
            grid,
            terrain: Some(terrain),
        })
    }

    /// A map from an optional terrain layer without a size check. Cells the
    /// terrain does not cover cost [`ROAD_COST`].
    pub fn from_parts(grid: &'a CellGrid, terrain: Option<&'a TerrainMap>) -> Self {
        Self { grid, terrain }
    }

    #[inline]
    pub fn grid(&self) -> &'a CellGrid {
        self.grid
    }

    #[inline]
    pub fn terrain(&self) -> Option<&'a TerrainMap> {
        self.terrain
    }

    /// Whether a route may enter `p`.
    #[inline]
    pub fn passable(&self, p: Point) -> bool {
        self.grid.at(p).is_some_and(|c| c.is_passable())
    }

    /// Cost of entering `p`.
    #[inline]
    pub fn entry_cost(&self, p: Point) -> i32 {
        self.terrain
            .and_then(|t| t.at(p))
            .map_or(ROAD_COST, |t| t.cost())
    }

    /// Run one search over this map.
    pub fn search(&self, algorithm: Algorithm, start: Option<Point>, end: Option<Point>) -> SearchResult {
        search(algorithm, self, start, end)
    }

    /// Sum of entry costs along `path`, excluding its first cell.
    pub fn path_cost(&self, path: &[Point]) -> i32 {
        path.iter().skip(1).map(|&p| self.entry_cost(p)).sum()
    }
}

impl Pather for RouteMap<'_> {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        buf.extend(p.neighbors_4().into_iter().filter(|&n| self.passable(n)));
    }

    fn contains(&self, p: Point) -> bool {
        self.grid.contains(p)
    }
}

impl WeightedPather for RouteMap<'_> {
    fn cost(&self, _from: Point, to: Point) -> i32 {
        self.entry_cost(to)
    }
}

impl AstarPather for RouteMap<'_> {
    fn estimate(&self, from: Point, to: Point) -> i32 {
        manhattan(from, to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridroute_core::{CellKind, Grid, Terrain};

    #[test]
    fn neighbors_skip_walls_and_edges() {
        let mut g: CellGrid = Grid::new(3, 3);
        g.set(Point::new(1, 0), CellKind::Wall);
        let map = RouteMap::new(&g);
        let mut buf = Vec::new();
        map.neighbors(Point::new(1, 1), &mut buf);
        // up is a wall; down, left, right remain in that order.
        assert_eq!(buf, vec![Point::new(1, 2), Point::new(0, 1), Point::new(2, 1)]);

        buf.clear();
        map.neighbors(Point::new(0, 0), &mut buf);
        assert_eq!(buf, vec![Point::new(0, 1)]);
    }

    #[test]
    fn costs_follow_entered_terrain() {
        let g: CellGrid = Grid::new(3, 1);
        let t = Grid::from_rows(&[[Terrain::Road, Terrain::Grass, Terrain::Water]]).unwrap();
        let map = RouteMap::with_terrain(&g, &t).unwrap();
        assert_eq!(map.cost(Point::new(0, 0), Point::new(1, 0)), 3);
        assert_eq!(map.cost(Point::new(1, 0), Point::new(2, 0)), 5);
        assert_eq!(map.cost(Point::new(1, 0), Point::new(0, 0)), 1);
        assert_eq!(
            map.path_cost(&[Point::new(0, 0), Point::new(1, 0), Point::new(2, 0)]),
            8
        );
    }

    #[test]
    fn missing_terrain_costs_road() {
        let g: CellGrid = Grid::new(4, 4);
        let map = RouteMap::new(&g);
        assert_eq!(map.entry_cost(Point::new(2, 2)), ROAD_COST);
        let small: TerrainMap = Grid::filled(2, 2, Terrain::Water);
        let lenient = RouteMap::from_parts(&g, Some(&small));
        assert_eq!(lenient.entry_cost(Point::new(1, 1)), 5);
        assert_eq!(lenient.entry_cost(Point::new(3, 3)), ROAD_COST);
    }

    #[test]
    fn terrain_size_must_match() {
        let g: CellGrid = Grid::new(4, 4);
        let t: TerrainMap = Grid::new(4, 3);
        assert_eq!(
            RouteMap::with_terrain(&g, &t).err(),
            Some(GridError::SizeMismatch {
                expected: Point::new(4, 4),
                found: Point::new(4, 3),
            })
        );
    }
}
