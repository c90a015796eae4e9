//! The [`CellKind`] type: what occupies a single grid cell.

/// Occupant of a grid cell.
///
/// Only [`Wall`](CellKind::Wall) blocks movement; `Start` and `End` are
/// ordinary traversable cells that also mark the route endpoints.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellKind {
    #[default]
    Empty,
    Wall,
    Start,
    End,
}

impl CellKind {
    /// Whether a route may enter this cell.
    #[inline]
    pub const fn is_passable(self) -> bool {
        !matches!(self, CellKind::Wall)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_walls_block() {
        assert!(CellKind::Empty.is_passable());
        assert!(CellKind::Start.is_passable());
        assert!(CellKind::End.is_passable());
        assert!(!CellKind::Wall.is_passable());
    }
}
