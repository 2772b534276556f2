use pathviz_core::{Grid, GridError, Point};

use crate::dijkstra::dijkstra;
use crate::path::reconstruct_path;

/// Visitation order and reconstructed path of one search run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchOutcome {
    pub visited: Vec<Point>,
    /// Start-to-finish path; empty when the finish is unreachable.
    pub path: Vec<Point>,
}

impl SearchOutcome {
    /// Whether a path to the finish was found.
    #[inline]
    pub fn found(&self) -> bool {
        !self.path.is_empty()
    }

    /// Path length in hops, or `None` when no path was found.
    pub fn hops(&self) -> Option<usize> {
        self.path.len().checked_sub(1)
    }
}

/// Search from the grid's start to its finish and reconstruct the path.
pub fn find_path(grid: &mut Grid) -> Result<SearchOutcome, GridError> {
    let (start, finish) = (grid.start(), grid.finish());
    let visited = dijkstra(grid, start, finish)?;
    let path = reconstruct_path(grid, finish)?;
    Ok(SearchOutcome { visited, path })
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn outcome_round_trip() {
        let out = SearchOutcome {
            visited: vec![Point::new(0, 0), Point::new(0, 1)],
            path: vec![Point::new(0, 0), Point::new(0, 1)],
        };
        let json = serde_json::to_string(&out).unwrap();
        let back: SearchOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(out, back);
    }
}
