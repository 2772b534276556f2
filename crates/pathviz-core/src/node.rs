//! The grid cell entity.

use crate::geom::Point;

/// Sentinel distance for a node the search has not reached.
pub const UNREACHABLE: u32 = u32::MAX;

/// A single grid cell and its search state.
///
/// `previous` is a coordinate into the owning grid, never a handle to
/// another node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    pub pos: Point,
    pub is_start: bool,
    pub is_finish: bool,
    pub is_wall: bool,
    /// Tentative hop distance from the start, or [`UNREACHABLE`].
    pub distance: u32,
    pub is_visited: bool,
    pub previous: Option<Point>,
}

impl Node {
    /// A fresh open node with no search state.
    pub const fn new(pos: Point) -> Self {
        Self {
            pos,
            is_start: false,
            is_finish: false,
            is_wall: false,
            distance: UNREACHABLE,
            is_visited: false,
            previous: None,
        }
    }

    /// Whether the search has assigned a finite distance.
    #[inline]
    pub fn is_reached(&self) -> bool {
        self.distance != UNREACHABLE
    }

    /// Copy of this node with `is_wall` inverted.
    #[inline]
    pub fn with_wall_toggled(self) -> Self {
        Self {
            is_wall: !self.is_wall,
            ..self
        }
    }

    /// Clear distance, visited flag and back-link.
    #[inline]
    pub fn clear_search_state(&mut self) {
        self.distance = UNREACHABLE;
        self.is_visited = false;
        self.previous = None;
    }
}
