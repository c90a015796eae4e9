//! The [`Grid`] type: a dense 2D array of cell values.
//!
//! A `Grid` owns its storage. The route planner borrows it immutably for the
//! duration of a search; mutation (e.g. injecting an obstacle) needs `&mut`.

use std::fmt;

use crate::cell::CellKind;
use crate::geom::{Point, Range};
use crate::terrain::Terrain;

/// Grid of [`CellKind`] values: the walkable map.
pub type CellGrid = Grid<CellKind>;

/// Grid of [`Terrain`] values, parallel to a [`CellGrid`].
pub type TerrainMap = Grid<Terrain>;

/// A rectangular grid of `T` values with origin (0, 0).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "GridParts<T>"))]
pub struct Grid<T> {
    cells: Vec<T>,
    width: i32,
    height: i32,
}

/// Unchecked wire form of a [`Grid`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct GridParts<T> {
    cells: Vec<T>,
    width: i32,
    height: i32,
}

#[cfg(feature = "serde")]
impl<T> TryFrom<GridParts<T>> for Grid<T> {
    type Error = GridError;

    fn try_from(parts: GridParts<T>) -> Result<Self, GridError> {
        let GridParts {
            cells,
            width,
            height,
        } = parts;
        let fits = width >= 0
            && height >= 0
            && (width as usize).checked_mul(height as usize) == Some(cells.len());
        if !fits {
            return Err(GridError::Malformed {
                width,
                height,
                cells: cells.len(),
            });
        }
        Ok(Self {
            cells,
            width,
            height,
        })
    }
}

impl<T: Copy + Default> Grid<T> {
    /// Create a new grid filled with `T::default()`.
    pub fn new(width: i32, height: i32) -> Self {
        Self::filled(width, height, T::default())
    }
}

impl<T: Copy> Grid<T> {
    /// Create a new grid with every cell set to `value`.
    pub fn filled(width: i32, height: i32, value: T) -> Self {
        let w = width.max(0);
        let h = height.max(0);
        Self {
            cells: vec![value; (w as usize) * (h as usize)],
            width: w,
            height: h,
        }
    }

    /// Build a grid from row-major rows. All rows must have the same,
    /// non-zero length.
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self, GridError> {
        let Some(first) = rows.first() else {
            return Err(GridError::Empty);
        };
        let width = first.as_ref().len();
        if width == 0 {
            return Err(GridError::Empty);
        }
        let mut cells = Vec::with_capacity(width * rows.len());
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(GridError::Ragged {
                    row: y,
                    expected: width,
                    found: row.len(),
                });
            }
            cells.extend_from_slice(row);
        }
        Ok(Self {
            cells,
            width: width as i32,
            height: rows.len() as i32,
        })
    }

    /// Bounding range, always anchored at the origin.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.width, self.height)
    }

    /// Size as a `Point` (width, height).
    #[inline]
    pub fn size(&self) -> Point {
        Point::new(self.width, self.height)
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds().contains(p)
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some((p.y as usize) * (self.width as usize) + (p.x as usize))
    }

    /// Get the value at `p`, or `None` if `p` is out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<T> {
        self.index(p).map(|i| self.cells[i])
    }

    /// Set the value at `p`. Does nothing if out of bounds.
    pub fn set(&mut self, p: Point, value: T) {
        if let Some(i) = self.index(p) {
            self.cells[i] = value;
        }
    }

    /// Fill every cell with `value`.
    pub fn fill(&mut self, value: T) {
        self.cells.fill(value);
    }

    /// Set every cell inside `rng` (clipped to the grid) to `value`.
    pub fn fill_range(&mut self, rng: Range, value: T) {
        for p in self.bounds().intersect(rng).iter() {
            self.set(p, value);
        }
    }

    /// Iterate over `(Point, T)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, T)> + '_ {
        self.bounds().iter().zip(self.cells.iter().copied())
    }
}

impl<T: Copy + PartialEq> Grid<T> {
    /// Count how many cells equal `value`.
    pub fn count(&self, value: T) -> usize {
        self.cells.iter().filter(|&&c| c == value).count()
    }

    /// Position of the last cell (row-major) equal to `value`.
    pub fn find_last(&self, value: T) -> Option<Point> {
        self.iter().filter(|&(_, c)| c == value).map(|(p, _)| p).last()
    }
}

impl CellGrid {
    /// Scan for the Start and End cells.
    ///
    /// Maps are expected to hold exactly one of each; when several exist the
    /// last one in row-major order wins.
    pub fn find_endpoints(&self) -> (Option<Point>, Option<Point>) {
        (self.find_last(CellKind::Start), self.find_last(CellKind::End))
    }
}

/// Errors building a [`Grid`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// No rows, or a first row of length zero.
    Empty,
    /// A row's length differs from the first row's.
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// Two grids that must be parallel have different sizes.
    SizeMismatch { expected: Point, found: Point },
    /// Stored cells that do not fill the stated dimensions.
    Malformed {
        width: i32,
        height: i32,
        cells: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "grid: no cells"),
            Self::Ragged {
                row,
                expected,
                found,
            } => write!(f, "grid: row {row} has {found} cells, expected {expected}"),
            Self::SizeMismatch { expected, found } => write!(
                f,
                "grid: size {}x{} does not match {}x{}",
                found.x, found.y, expected.x, expected.y
            ),
            Self::Malformed {
                width,
                height,
                cells,
            } => write!(f, "grid: {cells} cells do not fill {width}x{height}"),
        }
    }
}

impl std::error::Error for GridError {}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_round_trip() {
        let mut g: CellGrid = Grid::new(3, 2);
        g.set(Point::new(1, 1), CellKind::Wall);
        let json = serde_json::to_string(&g).unwrap();
        let back: CellGrid = serde_json::from_str(&json).unwrap();
        assert_eq!(g, back);
    }

    #[test]
    fn inconsistent_dimensions_are_rejected() {
        let short = r#"{"cells":["Empty","Wall"],"width":3,"height":2}"#;
        let err = serde_json::from_str::<CellGrid>(short).unwrap_err();
        assert!(err.to_string().contains("2 cells do not fill 3x2"), "{err}");

        let negative = r#"{"cells":[],"width":-1,"height":0}"#;
        assert!(serde_json::from_str::<CellGrid>(negative).is_err());

        let ok = r#"{"cells":["Empty","Wall"],"width":2,"height":1}"#;
        let g: CellGrid = serde_json::from_str(ok).unwrap();
        assert_eq!(g.at(Point::new(1, 0)), Some(CellKind::Wall));
    }
}
