//! The node grid and its mutation operations.
//!
//! Mutating operations consume the grid and return the next version, so a
//! caller that wants a snapshot simply clones before editing.

use std::fmt;
use std::ops::RangeInclusive;

use log::debug;
use rand::Rng;

use crate::config::{VisualizerConfig, validate_layout};
use crate::error::GridError;
#[cfg(feature = "serde")]
use crate::error::ConfigIssue;
use crate::geom::{Bounds, Point};
use crate::node::Node;

/// A row-major grid of [`Node`]s with exactly one start and one finish.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "GridData"))]
pub struct Grid {
    bounds: Bounds,
    start: Point,
    finish: Point,
    nodes: Vec<Node>,
}

impl Grid {
    /// Build a fresh `rows x cols` grid with no walls and no search state.
    pub fn new(rows: i32, cols: i32, start: Point, finish: Point) -> Result<Self, GridError> {
        let bounds = Bounds::new(rows, cols);
        validate_layout(bounds, start, finish)?;
        let nodes = bounds
            .iter()
            .map(|p| Node {
                is_start: p == start,
                is_finish: p == finish,
                ..Node::new(p)
            })
            .collect();
        Ok(Self {
            bounds,
            start,
            finish,
            nodes,
        })
    }

    /// Build a fresh grid from the layout part of a config.
    pub fn from_config(cfg: &VisualizerConfig) -> Result<Self, GridError> {
        Self::new(cfg.rows, cfg.cols, cfg.start, cfg.finish)
    }

    /// Grid dimensions.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    #[inline]
    pub fn rows(&self) -> i32 {
        self.bounds.rows
    }

    #[inline]
    pub fn cols(&self) -> i32 {
        self.bounds.cols
    }

    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    #[inline]
    pub fn finish(&self) -> Point {
        self.finish
    }

    /// Whether `p` lies inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// The node at `p`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<&Node> {
        self.bounds.index(p).and_then(|i| self.nodes.get(i))
    }

    /// The node at `p`.
    pub fn node(&self, p: Point) -> Result<&Node, GridError> {
        self.at(p).ok_or(self.out_of_bounds(p))
    }

    /// Mutable access to the node at `p`, for search engines that write
    /// distance, visited flag and back-link in place.
    pub fn node_mut(&mut self, p: Point) -> Result<&mut Node, GridError> {
        let err = self.out_of_bounds(p);
        self.bounds
            .index(p)
            .and_then(|i| self.nodes.get_mut(i))
            .ok_or(err)
    }

    /// All nodes in row-major order.
    #[inline]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Iterate over all nodes in row-major order.
    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.nodes.iter()
    }

    /// Whether the node at `p` is an in-bounds wall.
    #[inline]
    pub fn is_wall(&self, p: Point) -> bool {
        self.at(p).is_some_and(|n| n.is_wall)
    }

    /// Number of wall nodes.
    pub fn wall_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_wall).count()
    }

    /// Return the grid with the wall flag at `p` inverted.
    ///
    /// Exactly one cell changes: a copy of the node with `is_wall` flipped is
    /// written back in place. Toggling the start or finish is a no-op.
    pub fn toggle_wall(mut self, p: Point) -> Result<Self, GridError> {
        self.toggle_in_place(p)?;
        Ok(self)
    }

    /// Return the grid with every point in `points` made a wall.
    ///
    /// Points that already are walls, and the start/finish cells, are left
    /// unchanged.
    pub fn with_walls(mut self, points: impl IntoIterator<Item = Point>) -> Result<Self, GridError> {
        for p in points {
            if !self.node(p)?.is_wall {
                self.toggle_in_place(p)?;
            }
        }
        Ok(self)
    }

    /// Return a fresh grid with the same dimensions, start and finish: no
    /// walls and no search state.
    pub fn reset_walls(self) -> Self {
        let nodes = self
            .bounds
            .iter()
            .map(|p| Node {
                is_start: p == self.start,
                is_finish: p == self.finish,
                ..Node::new(p)
            })
            .collect();
        Self { nodes, ..self }
    }

    /// Toggle walls at `count` uniformly drawn interior coordinates.
    ///
    /// Draws are independent and with replacement, so a repeated coordinate
    /// is toggled back. Rows come from `1..=rows-2` and columns from
    /// `1..=cols-2`; a dimension smaller than 3 uses its full extent.
    pub fn randomize_walls(mut self, count: usize, rng: &mut impl Rng) -> Self {
        let rows = interior(self.bounds.rows);
        let cols = interior(self.bounds.cols);
        let mut toggled = 0usize;
        for _ in 0..count {
            let p = Point::new(rng.random_range(rows.clone()), rng.random_range(cols.clone()));
            if self.toggle_in_place(p).unwrap_or(false) {
                toggled += 1;
            }
        }
        debug!(
            "randomized {count} draws on {} grid: {toggled} toggles, {} walls",
            self.bounds,
            self.wall_count()
        );
        self
    }

    /// Reset distance, visited flag and back-link on every node.
    pub fn clear_search_state(&mut self) {
        for n in &mut self.nodes {
            n.clear_search_state();
        }
    }

    /// Flip the wall flag at `p`. Returns whether the node changed.
    fn toggle_in_place(&mut self, p: Point) -> Result<bool, GridError> {
        let Some(i) = self.bounds.index(p) else {
            return Err(self.out_of_bounds(p));
        };
        let Some(&node) = self.nodes.get(i) else {
            return Err(self.out_of_bounds(p));
        };
        if node.is_start || node.is_finish {
            debug!("ignoring wall toggle on endpoint {p}");
            return Ok(false);
        }
        self.nodes[i] = node.with_wall_toggled();
        Ok(true)
    }

    fn out_of_bounds(&self, point: Point) -> GridError {
        GridError::OutOfBounds {
            point,
            bounds: self.bounds,
        }
    }
}

/// Serialized form of [`Grid`], checked before it becomes one.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct GridData {
    bounds: Bounds,
    start: Point,
    finish: Point,
    nodes: Vec<Node>,
}

#[cfg(feature = "serde")]
impl TryFrom<GridData> for Grid {
    type Error = GridError;

    fn try_from(data: GridData) -> Result<Self, GridError> {
        let GridData {
            bounds,
            start,
            finish,
            nodes,
        } = data;
        validate_layout(bounds, start, finish)?;
        if nodes.len() != bounds.len() {
            return Err(ConfigIssue::NodeCount {
                expected: bounds.len(),
                found: nodes.len(),
            }
            .into());
        }
        for (p, n) in bounds.iter().zip(&nodes) {
            let consistent = n.pos == p
                && n.is_start == (p == start)
                && n.is_finish == (p == finish)
                && !(n.is_wall && (n.is_start || n.is_finish));
            if !consistent {
                return Err(ConfigIssue::InconsistentNode(p).into());
            }
        }
        Ok(Self {
            bounds,
            start,
            finish,
            nodes,
        })
    }
}

/// Inclusive sampling range for one axis of random wall placement.
fn interior(len: i32) -> RangeInclusive<i32> {
    if len >= 3 { 1..=len - 2 } else { 0..=len - 1 }
}

impl<'a> IntoIterator for &'a Grid {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// One character per cell: `S` start, `F` finish, `#` wall, `.` open.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.nodes.chunks(self.bounds.cols as usize) {
            for n in row {
                let ch = if n.is_start {
                    'S'
                } else if n.is_finish {
                    'F'
                } else if n.is_wall {
                    '#'
                } else {
                    '.'
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
