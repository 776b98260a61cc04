//! Random wall placement.

use rand::{Rng, RngExt};

use crate::grid::Grid;

/// Turn each open, non-endpoint cell into a wall with probability `density`
/// (clamped to 0.0–1.0). Existing walls are kept.
///
/// Returns the number of walls placed by this call.
pub fn scatter_walls(grid: &mut Grid, rng: &mut impl Rng, density: f64) -> usize {
    let density = density.clamp(0.0, 1.0);
    let candidates: Vec<_> = grid
        .iter()
        .filter(|c| !c.is_wall && !c.is_endpoint())
        .map(|c| c.pos())
        .collect();

    let mut placed = 0;
    for p in candidates {
        let r: f64 = rng.random();
        if r < density && grid.set_wall(p, true).is_ok() {
            placed += 1;
        }
    }
    placed
}
