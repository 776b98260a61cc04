use std::fmt;

use gridpath_core::Point;

/// Why a search request was refused. The grid is untouched in every case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// Start or destination not given.
    MissingEndpoint,
    /// Start and destination are the same cell.
    SameEndpoints(Point),
    /// Start or destination outside the grid.
    OutOfBounds(Point),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingEndpoint => write!(f, "invalid search request: missing endpoint"),
            Self::SameEndpoints(p) => {
                write!(f, "invalid search request: start and destination both at {p}")
            }
            Self::OutOfBounds(p) => {
                write!(f, "invalid search request: {p} is outside the grid")
            }
        }
    }
}

impl std::error::Error for SearchError {}
