use std::collections::BinaryHeap;

use log::debug;
use pathviz_core::{Grid, GridError, Point};

use crate::neighbors::FourConnected;
use crate::traits::WeightedPather;

/// Reference into the node array, ordered for use in `BinaryHeap`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct NodeRef {
    idx: usize,
    distance: u32,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest distance first,
        // and the lowest row-major index among equal distances.
        other
            .distance
            .cmp(&self.distance)
            .then_with(|| other.idx.cmp(&self.idx))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Run Dijkstra with unit weights on the 4-connected grid.
///
/// See [`dijkstra_with`].
pub fn dijkstra(grid: &mut Grid, start: Point, finish: Point) -> Result<Vec<Point>, GridError> {
    let pather = FourConnected::new(grid.bounds());
    dijkstra_with(grid, &pather, start, finish)
}

/// Run Dijkstra from `start` towards `finish` and return the visitation order.
///
/// Search state on every node is reset first. Nodes are finalized in order of
/// increasing distance, ties broken row-major. Each finalized node is marked
/// visited and appended to the result; the search stops right after
/// finalizing `finish`, or once no reachable node remains. Walls are
/// finalized like any other reached node but never expanded.
///
/// On return every node carries its distance and a `previous` back-link;
/// `finish.previous` stays `None` when the finish was not reached.
pub fn dijkstra_with<P: WeightedPather>(
    grid: &mut Grid,
    pather: &P,
    start: Point,
    finish: Point,
) -> Result<Vec<Point>, GridError> {
    grid.node(finish)?;
    grid.clear_search_state();

    let bounds = grid.bounds();
    let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
    {
        let node = grid.node_mut(start)?;
        node.distance = 0;
    }
    if let Some(si) = bounds.index(start) {
        open.push(NodeRef { idx: si, distance: 0 });
    }

    let mut visited = Vec::new();
    let mut nbuf = Vec::with_capacity(4);

    while let Some(current) = open.pop() {
        let cp = bounds.point(current.idx);
        let node = grid.node_mut(cp)?;
        // Skip stale entries.
        if node.is_visited || node.distance != current.distance {
            continue;
        }
        node.is_visited = true;
        visited.push(cp);

        if cp == finish {
            break;
        }
        if node.is_wall {
            continue;
        }

        nbuf.clear();
        pather.neighbors(cp, &mut nbuf);

        for &np in nbuf.iter() {
            let Some(ni) = bounds.index(np) else {
                continue;
            };
            let tentative = current.distance.saturating_add(pather.cost(cp, np));
            let n = grid.node_mut(np)?;
            if n.is_visited || tentative >= n.distance {
                continue;
            }
            n.distance = tentative;
            n.previous = Some(cp);
            open.push(NodeRef {
                idx: ni,
                distance: tentative,
            });
        }
    }

    debug!(
        "dijkstra {start} -> {finish}: visited {} of {} nodes, finish {}",
        visited.len(),
        bounds.len(),
        if grid.node(finish)?.is_visited {
            "reached"
        } else {
            "unreachable"
        }
    );
    Ok(visited)
}
