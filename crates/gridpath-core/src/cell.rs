//! The [`Cell`] type — one grid position with wall, endpoint and search state.

use crate::geom::Point;

/// Sentinel distance meaning "not reached yet".
pub const UNREACHED: u32 = u32::MAX;

/// A single grid cell.
///
/// `previous` is the predecessor on the current best path back to the start.
/// It is a position, not a reference: the [`Grid`](crate::Grid) owns every
/// cell and the link only ever points towards the start.
///
/// Position and endpoint flags are fixed when the grid is built:
///
/// ```compile_fail
/// use gridpath_core::{Grid, Point};
///
/// let mut g = Grid::new(2, 2, Point::new(0, 0), Point::new(1, 1)).unwrap();
/// g.get_mut(Point::new(0, 1)).unwrap().is_start = true;
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub(crate) pos: Point,
    pub is_wall: bool,
    pub(crate) is_start: bool,
    pub(crate) is_finish: bool,
    pub distance: u32,
    pub is_visited: bool,
    pub previous: Option<Point>,
}

impl Cell {
    /// An open, unreached cell at `pos`.
    #[inline]
    pub const fn new(pos: Point) -> Self {
        Self {
            pos,
            is_wall: false,
            is_start: false,
            is_finish: false,
            distance: UNREACHED,
            is_visited: false,
            previous: None,
        }
    }

    /// Set the wall flag (builder).
    #[inline]
    pub const fn with_wall(mut self, is_wall: bool) -> Self {
        self.is_wall = is_wall;
        self
    }

    #[inline]
    pub const fn pos(&self) -> Point {
        self.pos
    }

    #[inline]
    pub const fn is_start(&self) -> bool {
        self.is_start
    }

    #[inline]
    pub const fn is_finish(&self) -> bool {
        self.is_finish
    }

    /// Whether the search has assigned this cell a finite distance.
    #[inline]
    pub const fn is_reached(&self) -> bool {
        self.distance != UNREACHED
    }

    /// Start or finish.
    #[inline]
    pub const fn is_endpoint(&self) -> bool {
        self.is_start || self.is_finish
    }

    /// Forget distance, visited flag and predecessor.
    #[inline]
    pub fn reset_search_state(&mut self) {
        self.distance = UNREACHED;
        self.is_visited = false;
        self.previous = None;
    }
}
