//! Terrain kinds and the traversal cost model.

use std::fmt;

/// Cost of entering a road cell. Also the cost of every cell when no
/// terrain map is supplied.
pub const ROAD_COST: i32 = 1;
/// Cost of entering a grass cell.
pub const GRASS_COST: i32 = 3;
/// Cost of entering a water cell.
pub const WATER_COST: i32 = 5;

/// Surface type of a cell. Determines the cost of entering it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Terrain {
    #[default]
    Road,
    Grass,
    Water,
}

impl Terrain {
    /// Traversal cost of entering a cell of this terrain. Always positive.
    #[inline]
    pub const fn cost(self) -> i32 {
        match self {
            Terrain::Road => ROAD_COST,
            Terrain::Grass => GRASS_COST,
            Terrain::Water => WATER_COST,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Terrain::Road => "road",
            Terrain::Grass => "grass",
            Terrain::Water => "water",
        }
    }
}

impl fmt::Display for Terrain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn costs() {
        assert_eq!(Terrain::Road.cost(), 1);
        assert_eq!(Terrain::Grass.cost(), 3);
        assert_eq!(Terrain::Water.cost(), 5);
        assert_eq!(Terrain::default().cost(), ROAD_COST);
    }

    #[test]
    fn display_uses_name() {
        assert_eq!(Terrain::Water.to_string(), "water");
        assert_eq!(Terrain::Grass.name(), "grass");
    }
}
