//! Fixed inputs of the demo drivers. Tests and the `gridwalk` binary both
//! build their default grids from here.

use crate::{algo::Orange, base::Grid};

/// Flood fill demo image.
///
/// ```text
/// 1 1 1
/// 1 1 0
/// 1 0 1
/// ```
///
/// Filling from `(1, 1)` with `2` leaves only the bottom-right `1` and the
/// two zeros untouched.
pub fn flood_fill_image() -> Grid<i32> {
    grid(vec![vec![1, 1, 1], vec![1, 1, 0], vec![1, 0, 1]])
}

/// Jump game demo array; index 3 holds the only zero.
pub fn jump_game_array() -> Vec<usize> {
    vec![4, 2, 3, 0, 3, 1, 2]
}

/// Islands demo, three islands.
///
/// ```text
/// 1 1 0 0 0
/// 1 1 0 0 0
/// 0 0 1 0 0
/// 0 0 0 1 1
/// ```
pub fn islands_grid() -> Grid<bool> {
    let rows = [
        "11000", //
        "11000", //
        "00100", //
        "00011",
    ];
    grid(
        rows.iter()
            .map(|r| r.bytes().map(|b| b == b'1').collect())
            .collect(),
    )
}

/// Rotting oranges demo. The orange in the bottom-left corner is walled
/// off by empty cells and never rots.
///
/// ```text
/// 2 1 1
/// 0 1 1
/// 1 0 1
/// ```
pub fn rotting_grid() -> Grid<Orange> {
    use Orange::*;
    grid(vec![
        vec![Rotten, Fresh, Fresh],
        vec![Empty, Fresh, Fresh],
        vec![Fresh, Empty, Fresh],
    ])
}

/// Binary maze demo, `true` is walkable.
///
/// ```text
/// 1 1 1 1 1
/// 1 1 1 1 1
/// 1 1 1 1 0
/// 1 0 1 0 1
/// ```
pub fn maze_grid() -> Grid<bool> {
    let rows: [[u8; 5]; 4] = [
        [1, 1, 1, 1, 1],
        [1, 1, 1, 1, 1],
        [1, 1, 1, 1, 0],
        [1, 0, 1, 0, 1],
    ];
    grid(
        rows.iter()
            .map(|r| r.iter().map(|&v| v == 1).collect())
            .collect(),
    )
}

fn grid<T>(rows: Vec<Vec<T>>) -> Grid<T> {
    match Grid::from_rows(rows) {
        Ok(grid) => grid,
        Err(err) => panic!("built-in case is malformed: {err}"),
    }
}
