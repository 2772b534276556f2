use log::{debug, warn};
use pathviz_core::{Grid, GridError, Point};

/// Walk `previous` links back from `finish` and return the path in
/// start-to-finish order.
///
/// Returns an empty vector when `finish` was never reached, and a single
/// element when `finish` is the search origin itself (distance 0).
pub fn reconstruct_path(grid: &Grid, finish: Point) -> Result<Vec<Point>, GridError> {
    let last = grid.node(finish)?;
    if last.previous.is_none() && last.distance != 0 {
        debug!("no path to {finish}");
        return Ok(Vec::new());
    }

    let mut path = Vec::new();
    let mut cur = Some(finish);
    while let Some(p) = cur {
        if path.len() >= grid.bounds().len() {
            warn!("back-link chain from {finish} exceeds grid size; truncating");
            break;
        }
        path.push(p);
        cur = grid.node(p)?.previous;
    }
    path.reverse();
    debug!("path to {finish}: {} nodes", path.len());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dijkstra::dijkstra;
    use crate::distance::manhattan;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn reference_grid() -> Grid {
        Grid::new(20, 50, Point::new(10, 10), Point::new(10, 40)).unwrap()
    }

    fn solve(mut g: Grid) -> (Grid, Vec<Point>, Vec<Point>) {
        let (start, finish) = (g.start(), g.finish());
        let visited = dijkstra(&mut g, start, finish).unwrap();
        let path = reconstruct_path(&g, finish).unwrap();
        (g, visited, path)
    }

    fn assert_chain(g: &Grid, path: &[Point]) {
        assert_eq!(path.first(), Some(&g.start()));
        assert_eq!(path.last(), Some(&g.finish()));
        for w in path.windows(2) {
            assert!(w[0].is_adjacent(w[1]), "{} -> {} not adjacent", w[0], w[1]);
        }
        assert!(path.iter().all(|&p| !g.is_wall(p)));
    }

    /// Hop distance from start by plain breadth-first flood over open cells.
    fn bfs_distance(g: &Grid) -> Option<u32> {
        let mut dist = vec![u32::MAX; g.bounds().len()];
        let mut queue = std::collections::VecDeque::new();
        let si = g.bounds().index(g.start())?;
        dist[si] = 0;
        queue.push_back(g.start());
        while let Some(p) = queue.pop_front() {
            let d = dist[g.bounds().index(p)?];
            if p == g.finish() {
                return Some(d);
            }
            for n in p.neighbors_4() {
                if let Some(ni) = g.bounds().index(n) {
                    if dist[ni] == u32::MAX && !g.is_wall(n) {
                        dist[ni] = d + 1;
                        queue.push_back(n);
                    }
                }
            }
        }
        None
    }

    #[test]
    fn open_grid_path_is_manhattan_length() {
        let (g, _, path) = solve(reference_grid());
        assert_chain(&g, &path);
        // 30 hops, 31 nodes including both endpoints.
        assert_eq!(path.len(), 31);
        assert_eq!(path.len() as u32 - 1, manhattan(g.start(), g.finish()));
    }

    #[test]
    fn wall_column_with_gap_on_direct_line() {
        let g = reference_grid()
            .with_walls((0..20).filter(|&r| r != 10).map(|r| Point::new(r, 25)))
            .unwrap();
        let (g, _, path) = solve(g);
        assert_chain(&g, &path);
        assert_eq!(path.len(), 31);
        assert!(path.contains(&Point::new(10, 25)));
    }

    #[test]
    fn wall_column_without_gap_has_no_path() {
        let g = reference_grid()
            .with_walls((0..20).map(|r| Point::new(r, 25)))
            .unwrap();
        let (_, visited, path) = solve(g);
        assert!(path.is_empty());
        assert!(!visited.is_empty());
    }

    #[test]
    fn enclosed_finish_has_no_path() {
        let g = reference_grid()
            .with_walls(Point::new(10, 40).neighbors_4())
            .unwrap();
        let (g, visited, path) = solve(g);
        assert!(path.is_empty());
        assert_eq!(g.node(g.finish()).unwrap().previous, None);
        assert!(!visited.contains(&g.finish()));
    }

    #[test]
    fn detour_around_partial_wall() {
        // Wall on the direct line with the gap at the top row.
        let g = reference_grid()
            .with_walls((1..20).map(|r| Point::new(r, 25)))
            .unwrap();
        let (g, _, path) = solve(g);
        assert_chain(&g, &path);
        // Up 10 rows to row 0, across, down 10 rows.
        assert_eq!(path.len() as u32 - 1, 30 + 20);
        assert!(path.contains(&Point::new(0, 25)));
    }

    #[test]
    fn origin_path_is_single_node() {
        let mut g = reference_grid();
        let p = Point::new(3, 3);
        dijkstra(&mut g, p, p).unwrap();
        assert_eq!(reconstruct_path(&g, p).unwrap(), vec![p]);
    }

    #[test]
    fn unsearched_grid_has_no_path() {
        let g = reference_grid();
        assert!(reconstruct_path(&g, g.finish()).unwrap().is_empty());
        assert!(reconstruct_path(&g, Point::new(-1, 0)).is_err());
    }

    #[test]
    fn random_grids_match_breadth_first_distance() {
        const N_GRIDS: usize = 500;
        let mut rng = StdRng::seed_from_u64(0);
        for _ in 0..N_GRIDS {
            let rows = rng.random_range(2..12);
            let cols = rng.random_range(2..12);
            let g = Grid::new(rows, cols, Point::new(0, 0), Point::new(rows - 1, cols - 1))
                .unwrap()
                .randomize_walls((rows * cols / 2) as usize, &mut rng);
            let expected = bfs_distance(&g);
            let (g, visited, path) = solve(g);
            match expected {
                Some(d) => {
                    assert_chain(&g, &path);
                    assert_eq!(path.len() as u32 - 1, d, "\n{g}");
                    assert_eq!(visited.last(), Some(&g.finish()));
                }
                None => {
                    assert!(path.is_empty(), "\n{g}");
                    assert_eq!(g.node(g.finish()).unwrap().previous, None);
                }
            }
        }
    }
}
