//! Board configuration.

use crate::geom::Point;

/// Dimensions and endpoints used to build a [`Grid`](crate::Grid).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridConfig {
    pub rows: i32,
    pub cols: i32,
    pub start: Point,
    pub finish: Point,
}

impl GridConfig {
    pub const fn new(rows: i32, cols: i32, start: Point, finish: Point) -> Self {
        Self {
            rows,
            cols,
            start,
            finish,
        }
    }
}

impl Default for GridConfig {
    /// The 16 × 50 board with start (8, 10) and finish (8, 40).
    fn default() -> Self {
        Self {
            rows: 16,
            cols: 50,
            start: Point::new(8, 10),
            finish: Point::new(8, 40),
        }
    }
}
