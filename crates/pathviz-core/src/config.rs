//! Named configuration for a visualizer session.

use std::time::Duration;

use crate::error::{ConfigIssue, GridError};
use crate::geom::{Bounds, Point};

/// Default number of rows.
pub const DEFAULT_ROWS: i32 = 20;
/// Default number of columns.
pub const DEFAULT_COLS: i32 = 50;
/// Default start cell.
pub const DEFAULT_START: Point = Point::new(10, 10);
/// Default finish cell.
pub const DEFAULT_FINISH: Point = Point::new(10, 40);
/// Default number of random wall toggles.
pub const DEFAULT_RANDOM_WALLS: usize = 250;
/// Default delay between two visit events.
pub const DEFAULT_VISIT_INTERVAL_MS: u64 = 10;
/// Default delay between two path events.
pub const DEFAULT_PATH_INTERVAL_MS: u64 = 50;

/// Configuration for grid construction and animation pacing.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct VisualizerConfig {
    pub rows: i32,
    pub cols: i32,
    pub start: Point,
    pub finish: Point,
    /// How many coordinates [`Grid::randomize_walls`](crate::Grid::randomize_walls)
    /// draws when invoked through a session.
    pub random_walls: usize,
    pub visit_interval_ms: u64,
    pub path_interval_ms: u64,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            start: DEFAULT_START,
            finish: DEFAULT_FINISH,
            random_walls: DEFAULT_RANDOM_WALLS,
            visit_interval_ms: DEFAULT_VISIT_INTERVAL_MS,
            path_interval_ms: DEFAULT_PATH_INTERVAL_MS,
        }
    }
}

impl VisualizerConfig {
    /// Grid dimensions.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.rows, self.cols)
    }

    /// Delay between consecutive visit events.
    #[inline]
    pub fn visit_interval(&self) -> Duration {
        Duration::from_millis(self.visit_interval_ms)
    }

    /// Delay between consecutive path events.
    #[inline]
    pub fn path_interval(&self) -> Duration {
        Duration::from_millis(self.path_interval_ms)
    }

    /// Check the grid layout and the animation intervals.
    pub fn validate(&self) -> Result<(), GridError> {
        validate_layout(self.bounds(), self.start, self.finish)?;
        if self.visit_interval_ms == 0 {
            return Err(ConfigIssue::ZeroInterval("visit").into());
        }
        if self.path_interval_ms == 0 {
            return Err(ConfigIssue::ZeroInterval("path").into());
        }
        Ok(())
    }
}

/// Validate dimensions and the start/finish pair of a grid.
pub(crate) fn validate_layout(bounds: Bounds, start: Point, finish: Point) -> Result<(), GridError> {
    if bounds.is_empty() {
        return Err(ConfigIssue::EmptyGrid(bounds).into());
    }
    if !bounds.contains(start) {
        return Err(ConfigIssue::StartOutOfBounds(start).into());
    }
    if !bounds.contains(finish) {
        return Err(ConfigIssue::FinishOutOfBounds(finish).into());
    }
    if start == finish {
        return Err(ConfigIssue::StartIsFinish(start).into());
    }
    Ok(())
}
