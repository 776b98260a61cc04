//! Errors raised while building or editing a [`Grid`](crate::Grid).

use std::fmt;

use crate::geom::Point;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Zero rows or zero columns.
    Empty,
    /// `rows × cols` does not fit the index type.
    TooLarge { rows: i32, cols: i32 },
    /// A position outside the grid.
    OutOfBounds(Point),
    /// Start and finish at the same position.
    SameEndpoints(Point),
    /// Start and finish cells cannot become walls.
    ReservedCell(Point),
    /// Text map lines have different widths.
    InconsistentWidth { line: usize, expected: usize, found: usize },
    /// A character other than `.`, `#`, `S` or `F` in a text map.
    InvalidChar { ch: char, pos: Point },
    MissingStart,
    MissingFinish,
    DuplicateStart(Point),
    DuplicateFinish(Point),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "grid: empty dimensions"),
            Self::TooLarge { rows, cols } => write!(f, "grid: {rows}x{cols} is too large"),
            Self::OutOfBounds(p) => write!(f, "grid: position {p} out of bounds"),
            Self::SameEndpoints(p) => write!(f, "grid: start and finish both at {p}"),
            Self::ReservedCell(p) => write!(f, "grid: cell {p} is the start or finish"),
            Self::InconsistentWidth {
                line,
                expected,
                found,
            } => write!(
                f,
                "grid: line {line} has width {found}, expected {expected}"
            ),
            Self::InvalidChar { ch, pos } => {
                write!(f, "grid: invalid character \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::MissingStart => write!(f, "grid: no start cell"),
            Self::MissingFinish => write!(f, "grid: no finish cell"),
            Self::DuplicateStart(p) => write!(f, "grid: second start cell at {p}"),
            Self::DuplicateFinish(p) => write!(f, "grid: second finish cell at {p}"),
        }
    }
}

impl std::error::Error for GridError {}
