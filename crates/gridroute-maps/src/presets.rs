//! Built-in maps.

use std::fmt;
use std::str::FromStr;

use gridroute_core::{CellKind, Point, Range, Terrain};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::layout::Layout;
use crate::mapgen::MapGen;

const SMALL_OFFICE: &str = "\
S...#.....
.##.#.###.
.#......#.
.#.####.#.
......#...
#####.###.
....#.....
.##.#####.
........#E";

/// A built-in map.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Preset {
    /// Fixed 10x9 office floor.
    SmallOffice,
    /// 25x15 warehouse with scattered shelving, a grass band and a pond.
    MediumWarehouse,
    /// 40x25 blocks of buildings separated by open streets.
    LargeCityBlock,
    /// 25x15 highway lanes separated by barriers with regular gaps.
    DynamicHighway,
}

impl Preset {
    pub const ALL: [Preset; 4] = [
        Preset::SmallOffice,
        Preset::MediumWarehouse,
        Preset::LargeCityBlock,
        Preset::DynamicHighway,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Preset::SmallOffice => "Small Office",
            Preset::MediumWarehouse => "Medium Warehouse (with Terrain)",
            Preset::LargeCityBlock => "Large City Block",
            Preset::DynamicHighway => "Dynamic Highway",
        }
    }

    /// Short identifier, accepted by [`FromStr`].
    pub const fn key(self) -> &'static str {
        match self {
            Preset::SmallOffice => "small",
            Preset::MediumWarehouse => "medium",
            Preset::LargeCityBlock => "large",
            Preset::DynamicHighway => "dynamic",
        }
    }

    /// Build the map. Randomised presets are reproducible for a given seed.
    pub fn build(self, seed: u64) -> Layout {
        let rng = StdRng::seed_from_u64(seed);
        match self {
            Preset::SmallOffice => small_office(),
            Preset::MediumWarehouse => medium_warehouse(MapGen::new(25, 15, rng)),
            Preset::LargeCityBlock => large_city_block(MapGen::new(40, 25, rng)),
            Preset::DynamicHighway => dynamic_highway(MapGen::new(25, 15, rng)),
        }
    }
}

fn small_office() -> Layout {
    match Layout::parse(SMALL_OFFICE) {
        Ok(layout) => layout,
        Err(e) => unreachable!("built-in layout is malformed: {e}"),
    }
}

fn medium_warehouse(mut mg: MapGen<StdRng>) -> Layout {
    mg.place(Point::new(2, 2), CellKind::Start);
    mg.place(Point::new(22, 12), CellKind::End);
    mg.scatter_walls(0.2, |_| true);
    mg.paint_terrain(Range::new(6, 0, 19, 15), Terrain::Grass);
    mg.paint_terrain(Range::new(9, 5, 16, 10), Terrain::Water);
    mg.into_layout()
}

fn large_city_block(mut mg: MapGen<StdRng>) -> Layout {
    // Rows 2 and 3 of every four are buildings, cut by an alley every fifth
    // column.
    let keep = |p: Point| p.y % 4 >= 2 && p.x % 5 != 0;
    mg.scatter_walls(0.9, keep);
    mg.place(Point::new(2, 2), CellKind::Start);
    mg.place(Point::new(37, 22), CellKind::End);
    mg.into_layout()
}

fn dynamic_highway(mut mg: MapGen<StdRng>) -> Layout {
    mg.place(Point::new(2, 7), CellKind::Start);
    mg.place(Point::new(22, 7), CellKind::End);
    for y in [2, 4, 10, 12] {
        mg.wall_row(y, |x| x % 6 == 0);
    }
    mg.into_layout()
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = ParsePresetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Preset::ALL
            .into_iter()
            .find(|p| p.key().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParsePresetError(s.to_string()))
    }
}

/// An unrecognised preset name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePresetError(pub String);

impl fmt::Display for ParsePresetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown map \u{201c}{}\u{201d} (expected small, medium, large or dynamic)",
            self.0
        )
    }
}

impl std::error::Error for ParsePresetError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_office_shape() {
        let l = Preset::SmallOffice.build(0);
        assert_eq!(l.grid.size(), Point::new(10, 9));
        assert_eq!(l.endpoints(), (Some(Point::new(0, 0)), Some(Point::new(9, 8))));
        assert!(l.terrain.is_none());
        assert_eq!(l.render(), SMALL_OFFICE);
    }

    #[test]
    fn every_preset_has_one_start_and_end() {
        for preset in Preset::ALL {
            for seed in [0, 1, 42] {
                let l = preset.build(seed);
                assert_eq!(l.grid.count(CellKind::Start), 1, "{preset}");
                assert_eq!(l.grid.count(CellKind::End), 1, "{preset}");
            }
        }
    }

    #[test]
    fn medium_warehouse_terrain() {
        let l = Preset::MediumWarehouse.build(3);
        assert_eq!(l.grid.size(), Point::new(25, 15));
        assert_eq!(l.endpoints(), (Some(Point::new(2, 2)), Some(Point::new(22, 12))));
        assert_eq!(l.terrain_at(Point::new(2, 2)), Terrain::Road);
        assert_eq!(l.terrain_at(Point::new(6, 0)), Terrain::Grass);
        assert_eq!(l.terrain_at(Point::new(18, 14)), Terrain::Grass);
        assert_eq!(l.terrain_at(Point::new(19, 14)), Terrain::Road);
        assert_eq!(l.terrain_at(Point::new(12, 7)), Terrain::Water);
        assert_eq!(l.terrain_at(Point::new(12, 10)), Terrain::Grass);
    }

    #[test]
    fn random_presets_are_seeded() {
        for preset in [Preset::MediumWarehouse, Preset::LargeCityBlock] {
            assert_eq!(preset.build(11), preset.build(11));
        }
        assert_ne!(
            Preset::MediumWarehouse.build(1).grid,
            Preset::MediumWarehouse.build(2).grid
        );
    }

    #[test]
    fn large_city_streets_stay_open() {
        let l = Preset::LargeCityBlock.build(5);
        assert_eq!(l.grid.size(), Point::new(40, 25));
        for x in 0..40 {
            assert_ne!(l.grid.at(Point::new(x, 0)), Some(CellKind::Wall));
            assert_ne!(l.grid.at(Point::new(x, 1)), Some(CellKind::Wall));
        }
        for y in 0..25 {
            assert_ne!(l.grid.at(Point::new(5, y)), Some(CellKind::Wall));
        }
    }

    #[test]
    fn dynamic_highway_barriers() {
        let l = Preset::DynamicHighway.build(0);
        assert_eq!(l.endpoints(), (Some(Point::new(2, 7)), Some(Point::new(22, 7))));
        assert_eq!(l.grid.at(Point::new(1, 2)), Some(CellKind::Wall));
        assert_eq!(l.grid.at(Point::new(6, 2)), Some(CellKind::Empty));
        assert_eq!(l.grid.count(CellKind::Wall), 4 * 20);
    }

    #[test]
    fn parse_keys() {
        for preset in Preset::ALL {
            assert_eq!(preset.key().parse::<Preset>(), Ok(preset));
        }
        assert_eq!("MEDIUM".parse::<Preset>(), Ok(Preset::MediumWarehouse));
        assert!("huge".parse::<Preset>().is_err());
    }
}
