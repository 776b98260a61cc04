use gridpath_core::{Grid, Point};

use crate::error::SearchError;
use crate::frontier::Frontier;

/// A finalised cell: its position and its (now final) distance from the start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Visit {
    pub pos: Point,
    pub distance: u32,
}

/// Reusable shortest-path searcher.
///
/// Owns the frontier so repeated searches reuse its allocation. The grid is
/// borrowed mutably for the duration of a call; searches on one grid are
/// therefore always serialised.
#[derive(Debug, Default)]
pub struct PathSearch {
    frontier: Frontier,
    visit_limit: Option<usize>,
}

impl PathSearch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop after `limit` cells have been finalised (builder).
    ///
    /// A search cut short this way returns its partial visit list just like
    /// a search whose destination is unreachable.
    pub fn with_visit_limit(mut self, limit: usize) -> Self {
        self.visit_limit = Some(limit);
        self
    }

    pub fn visit_limit(&self) -> Option<usize> {
        self.visit_limit
    }

    /// Search from `start` to `dest`, returning every finalised cell in the
    /// order it was finalised.
    ///
    /// On success the last element is `dest` exactly when a path exists (see
    /// [`reached`](crate::reached)). Along the way each finalised cell gets
    /// `is_visited`, its final `distance` and the `previous` link that
    /// [`shortest_path`](crate::shortest_path) follows.
    ///
    /// The request is validated before anything is written: missing or
    /// identical endpoints and endpoints outside the grid are refused with a
    /// [`SearchError`].
    ///
    /// The grid is not reset first. Call
    /// [`Grid::reset_search_state`] before searching a grid a second time.
    pub fn search(
        &mut self,
        grid: &mut Grid,
        start: Option<Point>,
        dest: Option<Point>,
    ) -> Result<Vec<Visit>, SearchError> {
        let (Some(start), Some(dest)) = (start, dest) else {
            return Err(SearchError::MissingEndpoint);
        };
        if start == dest {
            return Err(SearchError::SameEndpoints(start));
        }
        for p in [start, dest] {
            if !grid.contains(p) {
                return Err(SearchError::OutOfBounds(p));
            }
        }
        if grid.has_search_state() {
            log::warn!("searching a grid that still holds state from an earlier search");
        }
        log::debug!("search {start} -> {dest} on {}x{} grid", grid.rows(), grid.cols());

        let mut visits = Vec::new();
        self.frontier.clear();
        if let Some(c) = grid.get_mut(start) {
            c.distance = 0;
        }
        self.frontier.push(start, 0);

        while let Some(entry) = self.frontier.pop() {
            let pos = entry.pos;
            let Some(cell) = grid.get_mut(pos) else {
                continue;
            };
            // Stale entry: a shorter distance was pushed later, or the cell
            // is already final.
            if cell.is_visited || entry.distance != cell.distance {
                continue;
            }
            if cell.is_wall {
                continue;
            }
            if self.visit_limit.is_some_and(|limit| visits.len() >= limit) {
                log::debug!("search stopped at visit limit after {} cells", visits.len());
                return Ok(visits);
            }

            cell.is_visited = true;
            let distance = cell.distance;
            visits.push(Visit { pos, distance });
            log::trace!(
                "visit {pos} at distance {distance}, frontier {}",
                self.frontier.len()
            );

            if pos == dest {
                log::debug!("reached {dest} at distance {distance} after {} visits", visits.len());
                return Ok(visits);
            }

            // Unit weights: only a strictly shorter distance replaces the
            // current one, so the first cell to discover a neighbour stays its
            // predecessor.
            let next = distance + 1;
            for np in pos.neighbors_4() {
                let Some(n) = grid.get_mut(np) else {
                    continue;
                };
                if n.is_visited || n.is_wall || next >= n.distance {
                    continue;
                }
                n.distance = next;
                n.previous = Some(pos);
                self.frontier.push(np, next);
            }
        }

        log::debug!("{dest} unreachable from {start}, {} cells visited", visits.len());
        Ok(visits)
    }
}

/// Search with a fresh [`PathSearch`].
pub fn search(
    grid: &mut Grid,
    start: Option<Point>,
    dest: Option<Point>,
) -> Result<Vec<Visit>, SearchError> {
    PathSearch::new().search(grid, start, dest)
}

/// Search from the grid's start cell to its finish cell.
pub fn search_grid(grid: &mut Grid) -> Result<Vec<Visit>, SearchError> {
    let (start, finish) = (grid.start(), grid.finish());
    search(grid, Some(start), Some(finish))
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use gridpath_core::{GridConfig, UNREACHED, manhattan, scatter_walls};

    use super::*;
    use crate::{reached, shortest_path};

    fn open_3x3() -> Grid {
        Grid::new(3, 3, Point::new(0, 0), Point::new(2, 2)).unwrap()
    }

    fn positions(visits: &[Visit]) -> Vec<Point> {
        visits.iter().map(|v| v.pos).collect()
    }

    /// Plain BFS distances, used as an oracle.
    fn bfs_distances(grid: &Grid, start: Point) -> Vec<u32> {
        let mut dist = vec![UNREACHED; grid.area()];
        let mut queue = VecDeque::new();
        dist[grid.index(start).unwrap()] = 0;
        queue.push_back(start);
        while let Some(p) = queue.pop_front() {
            let d = dist[grid.index(p).unwrap()];
            for np in p.neighbors_4() {
                let Some(ni) = grid.index(np) else {
                    continue;
                };
                if grid.is_wall(np) || dist[ni] != UNREACHED {
                    continue;
                }
                dist[ni] = d + 1;
                queue.push_back(np);
            }
        }
        dist
    }

    #[test]
    fn open_grid_3x3() {
        let mut g = open_3x3();
        let visits = search_grid(&mut g).unwrap();
        assert!(reached(&visits, Point::new(2, 2)));
        assert!((5..=9).contains(&visits.len()));
        assert_eq!(visits.last().unwrap().distance, 4);

        let path = shortest_path(&g, Point::new(2, 2));
        assert_eq!(path.len() - 1, 4);
        assert_eq!(path.first(), Some(&Point::new(0, 0)));
        assert_eq!(path.last(), Some(&Point::new(2, 2)));
        for w in path.windows(2) {
            assert_eq!(manhattan(w[0], w[1]), 1);
        }
    }

    #[test]
    fn visit_order_is_deterministic() {
        let mut g = open_3x3();
        let visits = search_grid(&mut g).unwrap();
        // Up, left, down, right expansion with FIFO ties.
        assert_eq!(
            positions(&visits),
            vec![
                Point::new(0, 0),
                Point::new(1, 0),
                Point::new(0, 1),
                Point::new(2, 0),
                Point::new(1, 1),
                Point::new(0, 2),
                Point::new(2, 1),
                Point::new(1, 2),
                Point::new(2, 2),
            ]
        );
        assert_eq!(
            shortest_path(&g, Point::new(2, 2)),
            vec![
                Point::new(0, 0),
                Point::new(1, 0),
                Point::new(2, 0),
                Point::new(2, 1),
                Point::new(2, 2),
            ]
        );
    }

    #[test]
    fn visit_distances_never_decrease() {
        let mut g = Grid::from_config(&GridConfig::default()).unwrap();
        let visits = search_grid(&mut g).unwrap();
        assert!(visits.windows(2).all(|w| w[0].distance <= w[1].distance));
        assert_eq!(visits[0], Visit { pos: g.start(), distance: 0 });
        assert_eq!(visits.last().unwrap().distance, 30);
    }

    #[test]
    fn walled_column_is_unreachable() {
        let mut g: Grid = "S#.\n.#.\n.#F".parse().unwrap();
        let visits = search_grid(&mut g).unwrap();
        assert!(!reached(&visits, Point::new(2, 2)));
        assert!(!positions(&visits).contains(&Point::new(2, 2)));
        assert_eq!(
            positions(&visits),
            vec![Point::new(0, 0), Point::new(1, 0), Point::new(2, 0)]
        );
        assert!(!g.get(Point::new(2, 2)).unwrap().is_visited);
        assert_eq!(shortest_path(&g, Point::new(2, 2)), vec![Point::new(2, 2)]);
    }

    #[test]
    fn walls_are_never_visited() {
        let mut g: Grid = "S.#.\n.##.\n...F".parse().unwrap();
        let visits = search_grid(&mut g).unwrap();
        assert!(reached(&visits, g.finish()));
        for v in &visits {
            assert!(!g.is_wall(v.pos));
        }
        for c in g.iter().filter(|c| c.is_wall) {
            assert!(!c.is_visited);
            assert!(!c.is_reached());
        }
    }

    #[test]
    fn detour_around_wall() {
        let mut g: Grid = "\
S#...
.#.#.
...#F"
            .parse()
            .unwrap();
        let visits = search_grid(&mut g).unwrap();
        assert!(reached(&visits, g.finish()));
        let path = shortest_path(&g, g.finish());
        assert_eq!(path.len() - 1, 10);
        for p in &path {
            assert!(!g.is_wall(*p));
        }
    }

    #[test]
    fn same_endpoints_fail_without_mutation() {
        let mut g = open_3x3();
        let before = g.clone();
        let p = Point::new(1, 1);
        assert_eq!(
            search(&mut g, Some(p), Some(p)),
            Err(SearchError::SameEndpoints(p))
        );
        assert_eq!(g, before);
        assert!(!g.get(p).unwrap().is_reached());
    }

    #[test]
    fn missing_or_foreign_endpoints_fail() {
        let mut g = open_3x3();
        let before = g.clone();
        assert_eq!(
            search(&mut g, None, Some(Point::new(2, 2))),
            Err(SearchError::MissingEndpoint)
        );
        assert_eq!(
            search(&mut g, Some(Point::new(0, 0)), None),
            Err(SearchError::MissingEndpoint)
        );
        assert_eq!(
            search(&mut g, Some(Point::new(0, 0)), Some(Point::new(3, 0))),
            Err(SearchError::OutOfBounds(Point::new(3, 0)))
        );
        assert_eq!(
            search(&mut g, Some(Point::new(-1, 0)), Some(Point::new(2, 2))),
            Err(SearchError::OutOfBounds(Point::new(-1, 0)))
        );
        assert_eq!(g, before);
    }

    #[test]
    fn arbitrary_endpoints() {
        let mut g = Grid::new(5, 5, Point::new(0, 0), Point::new(4, 4)).unwrap();
        let (a, b) = (Point::new(3, 1), Point::new(0, 4));
        let visits = search(&mut g, Some(a), Some(b)).unwrap();
        assert!(reached(&visits, b));
        assert_eq!(shortest_path(&g, b).len() - 1, manhattan(a, b) as usize);
    }

    #[test]
    fn visit_limit_returns_partial_list() {
        let mut g = Grid::from_config(&GridConfig::default()).unwrap();
        let mut ps = PathSearch::new().with_visit_limit(10);
        assert_eq!(ps.visit_limit(), Some(10));
        let (start, finish) = (g.start(), g.finish());
        let visits = ps.search(&mut g, Some(start), Some(finish)).unwrap();
        assert_eq!(visits.len(), 10);
        assert!(!reached(&visits, finish));
        assert!(!g.get(finish).unwrap().is_visited);
    }

    #[test]
    fn rerun_after_reset_matches() {
        let mut g: Grid = "S..#\n.#..\n...F".parse().unwrap();
        let mut ps = PathSearch::new();
        let (start, finish) = (g.start(), g.finish());
        let first = ps.search(&mut g, Some(start), Some(finish)).unwrap();
        let path = shortest_path(&g, finish);
        g.reset_search_state();
        let second = ps.search(&mut g, Some(start), Some(finish)).unwrap();
        assert_eq!(first, second);
        assert_eq!(path, shortest_path(&g, finish));
    }

    #[test]
    fn open_grids_are_manhattan_optimal() {
        for (rows, cols) in [(1, 2), (2, 7), (6, 4), (9, 9)] {
            let finish = Point::new(rows - 1, cols - 1);
            let mut g = Grid::new(rows, cols, Point::ZERO, finish).unwrap();
            for target in g.iter().map(|c| c.pos()).collect::<Vec<_>>() {
                if target == Point::ZERO {
                    continue;
                }
                g.reset_search_state();
                let visits = search(&mut g, Some(Point::ZERO), Some(target)).unwrap();
                assert!(reached(&visits, target));
                let path = shortest_path(&g, target);
                assert_eq!(path.len() - 1, manhattan(Point::ZERO, target) as usize);
            }
        }
    }

    #[test]
    fn random_grids_match_bfs() {
        let mut rng = rand::rng();
        for _ in 0..50 {
            let mut g = Grid::new(12, 17, Point::new(0, 0), Point::new(11, 16)).unwrap();
            scatter_walls(&mut g, &mut rng, 0.3);
            let oracle = bfs_distances(&g, g.start());
            let visits = search_grid(&mut g).unwrap();

            let finish_idx = g.index(g.finish()).unwrap();
            assert_eq!(reached(&visits, g.finish()), oracle[finish_idx] != UNREACHED);

            for v in &visits {
                let cell = g.get(v.pos).unwrap();
                assert!(cell.is_visited);
                assert_eq!(cell.distance, v.distance);
                assert_eq!(v.distance, oracle[g.index(v.pos).unwrap()]);
                // Predecessor chain length equals distance.
                let path = shortest_path(&g, v.pos);
                assert_eq!(path.len() - 1, v.distance as usize);
                assert_eq!(path[0], g.start());
            }
        }
    }
}
