use gridpath_core::{Grid, Point};

use crate::search::Visit;

/// Rebuild the route start → `dest` by following `previous` links back from
/// `dest`.
///
/// If `dest` was never reached the result is just `[dest]`; check
/// `is_visited` on the destination (or [`reached`]) before treating the
/// result as a real path. Reading the links does not change the grid, so
/// calling this twice gives the same route.
pub fn shortest_path(grid: &Grid, dest: Point) -> Vec<Point> {
    let mut path = Vec::new();
    let mut cur = Some(dest);
    while let Some(p) = cur {
        // A chain longer than the grid must contain a cycle.
        if path.len() >= grid.area() {
            log::warn!("predecessor chain from {dest} does not terminate");
            break;
        }
        path.push(p);
        cur = grid.get(p).and_then(|c| c.previous);
    }
    path.reverse();
    path
}

/// Whether a visit list ends at `dest`, i.e. the search found a path.
pub fn reached(visits: &[Visit], dest: Point) -> bool {
    visits.last().is_some_and(|v| v.pos == dest)
}
