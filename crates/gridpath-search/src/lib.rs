//! Shortest-path search on a [`Grid`](gridpath_core::Grid).
//!
//! The search is Dijkstra's algorithm specialised to unit edge weights (so it
//! visits cells in the same order as a breadth-first search). Moves are the
//! four cardinal directions; walls are impassable.
//!
//! - [`PathSearch::search`] finalises cells one at a time and returns them in
//!   visit order, writing distance, visited flag and predecessor into the
//!   grid as it goes.
//! - [`shortest_path`] follows the predecessor links back from a destination
//!   and returns the route start → destination.
//!
//! The frontier is a binary heap, so a search costs `O((V + E) log V)` for
//! `V` cells and `E` adjacencies. Cells at equal distance are finalised in
//! the order they were first discovered.
//!
//! ```
//! use gridpath_core::Grid;
//! use gridpath_search::{reached, search_grid, shortest_path};
//!
//! let mut grid: Grid = "S..\n.#.\n..F".parse().unwrap();
//! let visits = search_grid(&mut grid).unwrap();
//! assert!(reached(&visits, grid.finish()));
//! assert_eq!(shortest_path(&grid, grid.finish()).len(), 5);
//! ```

mod error;
mod frontier;
mod path;
mod search;

pub use error::SearchError;
pub use path::{reached, shortest_path};
pub use search::{PathSearch, Visit, search, search_grid};
