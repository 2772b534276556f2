//! Text frame shared by the demo binaries.
//!
//! [`Frame`] mirrors a grid as characters and paints animation events onto
//! it: `S` start, `F` finish, `#` wall, `.` open, `o` visited, `*` path.

use std::fmt;

use pathviz_anim::AnimationSink;
use pathviz_core::{Bounds, Grid, Point};

const VISITED: char = 'o';
const PATH: char = '*';

/// Character buffer for one grid, updated event by event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    bounds: Bounds,
    cells: Vec<char>,
    visits: usize,
    path: usize,
}

impl Frame {
    /// Draw the grid without any search state.
    pub fn new(grid: &Grid) -> Self {
        let cells = grid
            .iter()
            .map(|n| {
                if n.is_start {
                    'S'
                } else if n.is_finish {
                    'F'
                } else if n.is_wall {
                    '#'
                } else {
                    '.'
                }
            })
            .collect();
        Self {
            bounds: grid.bounds(),
            cells,
            visits: 0,
            path: 0,
        }
    }

    /// Character at `p`, if in bounds.
    pub fn at(&self, p: Point) -> Option<char> {
        self.bounds.index(p).map(|i| self.cells[i])
    }

    pub fn visits(&self) -> usize {
        self.visits
    }

    pub fn path_len(&self) -> usize {
        self.path
    }

    fn paint(&mut self, p: Point, c: char) {
        if let Some(i) = self.bounds.index(p) {
            // Endpoints keep their letters.
            if !matches!(self.cells[i], 'S' | 'F') {
                self.cells[i] = c;
            }
        }
    }
}

impl AnimationSink for Frame {
    fn on_visit(&mut self, p: Point) {
        self.visits += 1;
        self.paint(p, VISITED);
    }

    fn on_path(&mut self, p: Point) {
        self.path += 1;
        self.paint(p, PATH);
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cols = self.bounds.cols.max(1) as usize;
        for row in self.cells.chunks(cols) {
            let line: String = row.iter().collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
