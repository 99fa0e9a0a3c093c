//! Rotting oranges: every minute each rotten orange rots its fresh
//! orthogonal neighbours. How long until nothing fresh is left?

use std::{collections::VecDeque, fmt};

use crate::{
    algo::Strategy,
    base::{Grid, GridErr, GridRes, ORTHOGONAL, Pos},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Orange {
    #[default]
    Empty = 0,
    Fresh = 1,
    Rotten = 2,
}

impl TryFrom<i64> for Orange {
    type Error = GridErr;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Orange::Empty),
            1 => Ok(Orange::Fresh),
            2 => Ok(Orange::Rotten),
            _ => Err(GridErr::InvalidCell(value)),
        }
    }
}

impl fmt::Display for Orange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", *self as u8)
    }
}

impl Orange {
    pub fn grid_from_values(values: &Grid<i64>) -> GridRes<Grid<Orange>> {
        let mut invalid = None;
        let grid = values.map(|&v| {
            Orange::try_from(v).unwrap_or_else(|err| {
                if invalid.is_none() {
                    invalid = Some(err);
                }
                Orange::Empty
            })
        });
        match invalid {
            Some(err) => Err(err),
            None => Ok(grid),
        }
    }
}

/// Minutes until no fresh orange remains, or `None` if some fresh orange
/// can never be reached. Rots the grid in place.
///
/// A grid without fresh oranges takes 0 minutes, rotten ones or not.
pub fn rot_time(grid: &mut Grid<Orange>, strategy: Strategy) -> GridRes<Option<u32>> {
    let minutes = match strategy {
        Strategy::Bfs => rot_bfs(grid),
        Strategy::DfsRecursive => {
            let mut min_time = Grid::filled(grid.rows(), grid.cols(), u32::MAX)?;
            let sources: Vec<Pos> = rotten_cells(grid).collect();
            for src in sources {
                relax_dfs_rec(grid, src, 0, &mut min_time);
            }
            collect_min_time(grid, &min_time)
        }
        Strategy::DfsIterative => {
            let mut min_time = Grid::filled(grid.rows(), grid.cols(), u32::MAX)?;
            relax_dfs_iter(grid, &mut min_time);
            collect_min_time(grid, &min_time)
        }
        Strategy::UnionFind => {
            // 连通性回答不了“多久”，只能回答“能不能”
            return Err(GridErr::UnsupportedStrategy {
                algo: "rotting oranges",
                strategy,
            });
        }
    };
    log::debug!("rotting oranges via {strategy}: {minutes:?}");
    Ok(minutes)
}

fn rotten_cells(grid: &Grid<Orange>) -> impl Iterator<Item = Pos> + '_ {
    grid.iter()
        .filter(|(_, o)| **o == Orange::Rotten)
        .map(|(p, _)| p)
}

/// Multi-source BFS, one layer per minute.
fn rot_bfs(grid: &mut Grid<Orange>) -> Option<u32> {
    let mut queue: VecDeque<Pos> = rotten_cells(grid).collect();
    let mut fresh = grid.iter().filter(|(_, o)| **o == Orange::Fresh).count();
    let mut minutes = 0;

    while !queue.is_empty() && fresh > 0 {
        // 当前队列里的全部烂橘子属于同一分钟
        for _ in 0..queue.len() {
            let Some(cell) = queue.pop_front() else {
                break;
            };
            for next in grid.neighbors(cell, &ORTHOGONAL) {
                if grid[next] == Orange::Fresh {
                    grid[next] = Orange::Rotten;
                    fresh -= 1;
                    queue.push_back(next);
                }
            }
        }
        minutes += 1;
        log::trace!("minute {minutes}: {fresh} fresh left");
    }
    if log::log_enabled!(log::Level::Trace) {
        log::trace!("grid after {minutes} minutes:\n{grid}");
    }
    (fresh == 0).then_some(minutes)
}

fn relax_dfs_rec(grid: &mut Grid<Orange>, cell: Pos, time: u32, min_time: &mut Grid<u32>) {
    if grid[cell] == Orange::Empty || time >= min_time[cell] {
        return;
    }
    min_time[cell] = time;
    grid[cell] = Orange::Rotten;
    for next in grid.neighbors(cell, &ORTHOGONAL) {
        relax_dfs_rec(grid, next, time + 1, min_time);
    }
}

fn relax_dfs_iter(grid: &mut Grid<Orange>, min_time: &mut Grid<u32>) {
    let mut stack: Vec<(Pos, u32)> = rotten_cells(grid).map(|p| (p, 0)).collect();
    while let Some((cell, time)) = stack.pop() {
        if grid[cell] == Orange::Empty || time >= min_time[cell] {
            continue;
        }
        min_time[cell] = time;
        grid[cell] = Orange::Rotten;
        stack.extend(grid.neighbors(cell, &ORTHOGONAL).map(|n| (n, time + 1)));
    }
}

/// Reads the answer off a relaxed `min_time` grid: `None` if any orange
/// stayed fresh, the slowest finite time otherwise.
fn collect_min_time(grid: &Grid<Orange>, min_time: &Grid<u32>) -> Option<u32> {
    let mut slowest = 0;
    for (cell, orange) in grid.iter() {
        if *orange == Orange::Fresh {
            return None;
        }
        if min_time[cell] != u32::MAX {
            slowest = slowest.max(min_time[cell]);
        }
    }
    Some(slowest)
}
