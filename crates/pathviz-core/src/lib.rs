//! **pathviz-core**: grid model for the pathfinding visualizer.
//!
//! This crate provides the foundational types shared by the search engine
//! and the animation sequencer: `(row, col)` geometry, the [`Node`] entity,
//! the [`Grid`] with its wall-editing operations, configuration, and errors.

pub mod config;
pub mod error;
pub mod geom;
pub mod grid;
pub mod node;

pub use config::VisualizerConfig;
pub use error::{ConfigIssue, GridError};
pub use geom::{Bounds, Point};
pub use grid::Grid;
pub use node::{Node, UNREACHABLE};
