//! Traversal algorithms over grids and arrays.
//!
//! 每个问题一个模块；同一问题的 BFS / DFS / 并查集实现通过 [`Strategy`] 选择。

mod flood_fill;
mod islands;
mod jump_game;
mod knight;
mod maze;
mod rotting;
mod strategy;

pub use self::{
    flood_fill::flood_fill,
    islands::count_islands,
    jump_game::can_reach,
    knight::knight_min_steps,
    maze::{distances, is_reachable, shortest_path},
    rotting::{Orange, rot_time},
    strategy::{Strategy, UnknownStrategy},
};
