//! The [`Grid`] type — a fixed `rows × cols` board of [`Cell`]s.
//!
//! The grid is the only owner of its cells. Searches borrow it mutably for
//! their whole run, so a wall edit or a second search can never overlap one
//! in progress.
//!
//! Grids also have a small text form used for fixtures and debugging:
//!
//! ```text
//! S.#.
//! ..#F
//! ....
//! ```
//!
//! `.` is open, `#` a wall, `S` the start and `F` the finish.

use std::fmt;
use std::str::FromStr;

use crate::cell::Cell;
use crate::config::GridConfig;
use crate::error::GridError;
use crate::geom::Point;

/// A rectangular board with exactly one start and one finish cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,
    rows: i32,
    cols: i32,
    start: Point,
    finish: Point,
}

impl Grid {
    /// Create a wall-free grid.
    pub fn new(rows: i32, cols: i32, start: Point, finish: Point) -> Result<Self, GridError> {
        if rows <= 0 || cols <= 0 {
            return Err(GridError::Empty);
        }
        let area = rows
            .checked_mul(cols)
            .ok_or(GridError::TooLarge { rows, cols })?;
        let mut grid = Self {
            cells: Vec::with_capacity(area as usize),
            rows,
            cols,
            start,
            finish,
        };
        for p in [start, finish] {
            if !grid.contains(p) {
                return Err(GridError::OutOfBounds(p));
            }
        }
        if start == finish {
            return Err(GridError::SameEndpoints(start));
        }
        for row in 0..rows {
            for col in 0..cols {
                let pos = Point::new(row, col);
                let mut cell = Cell::new(pos);
                cell.is_start = pos == start;
                cell.is_finish = pos == finish;
                grid.cells.push(cell);
            }
        }
        Ok(grid)
    }

    /// Create a wall-free grid from a [`GridConfig`].
    pub fn from_config(cfg: &GridConfig) -> Result<Self, GridError> {
        Self::new(cfg.rows, cfg.cols, cfg.start, cfg.finish)
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// Total number of cells (never zero).
    #[inline]
    pub fn area(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    #[inline]
    pub fn finish(&self) -> Point {
        self.finish
    }

    /// The configuration this grid was built from.
    pub fn config(&self) -> GridConfig {
        GridConfig::new(self.rows, self.cols, self.start, self.finish)
    }

    /// Whether `p` lies inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.row >= 0 && p.col >= 0 && p.row < self.rows && p.col < self.cols
    }

    /// Row-major index of `p`, or `None` when out of bounds.
    #[inline]
    pub fn index(&self, p: Point) -> Option<usize> {
        if self.contains(p) {
            Some(p.row as usize * self.cols as usize + p.col as usize)
        } else {
            None
        }
    }

    /// Cell at `p`, or `None` when out of bounds.
    #[inline]
    pub fn get(&self, p: Point) -> Option<&Cell> {
        self.index(p).map(|i| &self.cells[i])
    }

    /// Mutable cell at `p`, or `None` when out of bounds.
    ///
    /// Position and endpoint flags stay read-only through the returned
    /// reference; walls go through [`set_wall`](Self::set_wall).
    #[inline]
    pub fn get_mut(&mut self, p: Point) -> Option<&mut Cell> {
        let i = self.index(p)?;
        Some(&mut self.cells[i])
    }

    /// Row-major iterator over cells.
    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }

    /// Whether the cell at `p` is a wall. Out-of-bounds counts as a wall.
    #[inline]
    pub fn is_wall(&self, p: Point) -> bool {
        self.get(p).is_none_or(|c| c.is_wall)
    }

    /// Make the cell at `p` a wall or open it. Returns the previous value.
    pub fn set_wall(&mut self, p: Point, wall: bool) -> Result<bool, GridError> {
        let cell = self.get_mut(p).ok_or(GridError::OutOfBounds(p))?;
        if cell.is_endpoint() {
            return Err(GridError::ReservedCell(p));
        }
        Ok(std::mem::replace(&mut cell.is_wall, wall))
    }

    /// Flip the wall flag at `p`. Returns the new value.
    pub fn toggle_wall(&mut self, p: Point) -> Result<bool, GridError> {
        let was = self.is_wall(p);
        self.set_wall(p, !was)?;
        Ok(!was)
    }

    /// Open every cell.
    pub fn clear_walls(&mut self) {
        for c in self.cells.iter_mut() {
            c.is_wall = false;
        }
    }

    /// Number of wall cells.
    pub fn wall_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_wall).count()
    }

    /// Restore every cell's distance, visited flag and predecessor to their
    /// initial values. Walls are kept.
    ///
    /// A search writes into the grid in place, so call this before searching
    /// the same grid again.
    pub fn reset_search_state(&mut self) {
        for c in self.cells.iter_mut() {
            c.reset_search_state();
        }
    }

    /// Whether any cell carries state from a previous search.
    pub fn has_search_state(&self) -> bool {
        self.cells
            .iter()
            .any(|c| c.is_visited || c.is_reached() || c.previous.is_some())
    }
}

impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = s.lines().filter(|l| !l.trim().is_empty()).collect();
        let Some(first) = lines.first() else {
            return Err(GridError::Empty);
        };
        let width = first.trim().chars().count();

        let mut start = None;
        let mut finish = None;
        let mut walls = Vec::new();
        for (row, line) in lines.iter().enumerate() {
            let line = line.trim();
            let found = line.chars().count();
            if found != width {
                return Err(GridError::InconsistentWidth {
                    line: row,
                    expected: width,
                    found,
                });
            }
            for (col, ch) in line.chars().enumerate() {
                let pos = Point::new(row as i32, col as i32);
                match ch {
                    '.' => {}
                    '#' => walls.push(pos),
                    'S' => {
                        if start.replace(pos).is_some() {
                            return Err(GridError::DuplicateStart(pos));
                        }
                    }
                    'F' => {
                        if finish.replace(pos).is_some() {
                            return Err(GridError::DuplicateFinish(pos));
                        }
                    }
                    _ => return Err(GridError::InvalidChar { ch, pos }),
                }
            }
        }

        let start = start.ok_or(GridError::MissingStart)?;
        let finish = finish.ok_or(GridError::MissingFinish)?;
        let mut grid = Grid::new(lines.len() as i32, width as i32, start, finish)?;
        for p in walls {
            grid.set_wall(p, true)?;
        }
        Ok(grid)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(self.cols as usize).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for c in row {
                let ch = if c.is_start() {
                    'S'
                } else if c.is_finish() {
                    'F'
                } else if c.is_wall {
                    '#'
                } else {
                    '.'
                };
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}

// Serialized through the text form so a deserialized grid always satisfies
// the endpoint invariants. Search state is not carried over.
#[cfg(feature = "serde")]
impl serde::Serialize for Grid {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Grid {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = <String as serde::Deserialize>::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
