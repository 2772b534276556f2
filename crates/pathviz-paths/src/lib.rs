//! Shortest-path search for the pathfinding visualizer.
//!
//! - **Dijkstra** with unit weights on the 4-connected grid ([`dijkstra`]),
//!   generic over a [`WeightedPather`] ([`dijkstra_with`])
//! - **Path reconstruction** from per-node back-links ([`reconstruct_path`])
//!
//! The search writes distance, visited flag and back-link into the grid's
//! nodes and returns the visitation order as coordinates.

mod dijkstra;
mod distance;
mod neighbors;
mod outcome;
mod path;
mod traits;

pub use dijkstra::{dijkstra, dijkstra_with};
pub use distance::manhattan;
pub use neighbors::FourConnected;
pub use outcome::{SearchOutcome, find_path};
pub use path::reconstruct_path;
pub use traits::{Pather, WeightedPather};
