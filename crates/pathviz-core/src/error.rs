//! Error types for grid construction and coordinate operations.
//!
//! An unreachable finish is not an error; it surfaces as an empty path.

use std::fmt;

use crate::geom::{Bounds, Point};

/// Why a configuration was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigIssue {
    /// Rows or columns is zero or negative.
    EmptyGrid(Bounds),
    /// The start cell lies outside the grid.
    StartOutOfBounds(Point),
    /// The finish cell lies outside the grid.
    FinishOutOfBounds(Point),
    /// Start and finish name the same cell.
    StartIsFinish(Point),
    /// An animation interval of zero milliseconds.
    ZeroInterval(&'static str),
    /// A stored grid whose node list does not cover its dimensions.
    NodeCount { expected: usize, found: usize },
    /// A stored node whose position or flags disagree with its grid.
    InconsistentNode(Point),
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid(b) => write!(f, "grid dimensions {b} are empty"),
            Self::StartOutOfBounds(p) => write!(f, "start {p} lies outside the grid"),
            Self::FinishOutOfBounds(p) => write!(f, "finish {p} lies outside the grid"),
            Self::StartIsFinish(p) => write!(f, "start and finish coincide at {p}"),
            Self::ZeroInterval(which) => write!(f, "{which} interval must be non-zero"),
            Self::NodeCount { expected, found } => {
                write!(f, "expected {expected} nodes, found {found}")
            }
            Self::InconsistentNode(p) => write!(f, "node at {p} does not match the grid"),
        }
    }
}

/// Errors raised by grid operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// A coordinate outside the grid dimensions.
    OutOfBounds { point: Point, bounds: Bounds },
    /// The grid could not be built from the given configuration.
    InvalidConfiguration(ConfigIssue),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { point, bounds } => {
                write!(f, "point {point} is outside the {bounds} grid")
            }
            Self::InvalidConfiguration(issue) => write!(f, "invalid configuration: {issue}"),
        }
    }
}

impl std::error::Error for GridError {}

impl From<ConfigIssue> for GridError {
    fn from(issue: ConfigIssue) -> Self {
        Self::InvalidConfiguration(issue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let e = GridError::OutOfBounds {
            point: Point::new(20, 3),
            bounds: Bounds::new(20, 50),
        };
        assert_eq!(e.to_string(), "point (20, 3) is outside the 20x50 grid");

        let e: GridError = ConfigIssue::StartIsFinish(Point::new(1, 1)).into();
        assert_eq!(
            e.to_string(),
            "invalid configuration: start and finish coincide at (1, 1)"
        );
    }
}
