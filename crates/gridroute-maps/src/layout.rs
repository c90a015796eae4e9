//! Maps written as text.
//!
//! A [`Layout`] parses an ASCII picture into a walkable grid and an optional
//! terrain layer:
//!
//! | Char | Cell | Terrain |
//! |---|---|---|
//! | `#` | wall | road |
//! | `.` | empty | road |
//! | `,` | empty | grass |
//! | `~` | empty | water |
//! | `S` | start | road |
//! | `E` | end | road |
//!
//! Lines are separated by `'\n'` and must all have the same width.

use std::fmt;

use gridroute_core::{CellGrid, CellKind, Grid, Point, Terrain, TerrainMap};

/// A walkable grid with its terrain.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Layout {
    pub grid: CellGrid,
    /// `None` when every cell is road.
    pub terrain: Option<TerrainMap>,
}

impl Layout {
    /// Pair a grid with its terrain. A terrain layer holding nothing but
    /// road is dropped.
    pub fn new(grid: CellGrid, terrain: TerrainMap) -> Self {
        let all_road = terrain.count(Terrain::Road) == terrain.bounds().len();
        Self {
            grid,
            terrain: if all_road { None } else { Some(terrain) },
        }
    }

    /// Parse a text map. Leading and trailing whitespace of the whole string
    /// is ignored, along with `'\r'` line endings.
    pub fn parse(s: &str) -> Result<Self, LayoutError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(LayoutError::Empty);
        }
        let lines: Vec<&str> = s.lines().map(|l| l.trim_end_matches('\r')).collect();
        let width = lines[0].chars().count();
        let height = lines.len();

        let mut grid: CellGrid = Grid::new(width as i32, height as i32);
        let mut terrain: TerrainMap = Grid::new(width as i32, height as i32);

        for (y, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(LayoutError::InconsistentWidth {
                    line: y,
                    expected: width,
                    found,
                });
            }
            for (x, ch) in line.chars().enumerate() {
                let p = Point::new(x as i32, y as i32);
                let (cell, surface) = match ch {
                    '#' => (CellKind::Wall, Terrain::Road),
                    '.' => (CellKind::Empty, Terrain::Road),
                    ',' => (CellKind::Empty, Terrain::Grass),
                    '~' => (CellKind::Empty, Terrain::Water),
                    'S' => (CellKind::Start, Terrain::Road),
                    'E' => (CellKind::End, Terrain::Road),
                    _ => return Err(LayoutError::InvalidRune { ch, pos: p }),
                };
                grid.set(p, cell);
                terrain.set(p, surface);
            }
        }
        Ok(Self::new(grid, terrain))
    }

    /// The character for one cell; cell kind takes precedence over terrain.
    pub fn glyph(&self, p: Point) -> char {
        match self.grid.at(p) {
            Some(CellKind::Wall) => '#',
            Some(CellKind::Start) => 'S',
            Some(CellKind::End) => 'E',
            _ => match self.terrain_at(p) {
                Terrain::Road => '.',
                Terrain::Grass => ',',
                Terrain::Water => '~',
            },
        }
    }

    /// Terrain at `p`; road where no terrain layer covers it.
    pub fn terrain_at(&self, p: Point) -> Terrain {
        self.terrain
            .as_ref()
            .and_then(|t| t.at(p))
            .unwrap_or_default()
    }

    /// Render back to text, one line per row.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.grid.bounds().len() + self.grid.height() as usize);
        for y in 0..self.grid.height() {
            if y > 0 {
                out.push('\n');
            }
            for x in 0..self.grid.width() {
                out.push(self.glyph(Point::new(x, y)));
            }
        }
        out
    }

    /// Start and End positions, as found by a row-major scan.
    pub fn endpoints(&self) -> (Option<Point>, Option<Point>) {
        self.grid.find_endpoints()
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Errors that can occur when parsing a layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// Nothing but whitespace.
    Empty,
    /// A line's width differs from the first line's.
    InconsistentWidth {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// A character outside the layout alphabet.
    InvalidRune { ch: char, pos: Point },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "layout: empty map"),
            Self::InconsistentWidth {
                line,
                expected,
                found,
            } => write!(
                f,
                "layout: line {line} is {found} cells wide, expected {expected}"
            ),
            Self::InvalidRune { ch, pos } => {
                write!(f, "layout contains invalid rune \u{201c}{ch}\u{201d} at {pos}")
            }
        }
    }
}

impl std::error::Error for LayoutError {}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn layout_json_round_trip() {
        let l = Layout::parse("S,~\n.#E").unwrap();
        let json = serde_json::to_string(&l).unwrap();
        let back: Layout = serde_json::from_str(&json).unwrap();
        assert_eq!(back, l);
    }
}
