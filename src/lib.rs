//! # gridwalk
//!
//! Classic grid and graph traversal problems, each solved several ways:
//! breadth-first search, recursive and iterative depth-first search, and
//! union-find where connectivity is all that matters.
//!
//! - [`algo::flood_fill`]: recolor a 4-connected region.
//! - [`algo::can_reach`]: jump game reachability.
//! - [`algo::knight_min_steps`]: knight's shortest path.
//! - [`algo::count_islands`]: connected components of land.
//! - [`algo::rot_time`]: multi-source propagation (rotting oranges).
//! - [`algo::shortest_path`] / [`algo::is_reachable`]: binary maze.

pub mod algo;
pub mod base;
pub mod testing;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
