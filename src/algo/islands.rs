//! Number of islands: 4-connected components of land cells.

use std::collections::VecDeque;

use crate::{
    algo::Strategy,
    base::{DSU, Grid, GridRes, ORTHOGONAL, Pos, Step, VisitMap},
};

/// Counts islands in `grid`, where `true` marks land.
///
/// The traversal strategies scan every cell and flood each unvisited land
/// cell; union-find starts from the land count and loses one per merge.
pub fn count_islands(grid: &Grid<bool>, strategy: Strategy) -> GridRes<usize> {
    let sink: fn(&Grid<bool>, Pos, &mut VisitMap) = match strategy {
        Strategy::Bfs => sink_bfs,
        Strategy::DfsRecursive => sink_dfs_rec,
        Strategy::DfsIterative => sink_dfs_iter,
        Strategy::UnionFind => {
            let count = count_union_find(grid);
            log::debug!("{count} islands via {strategy}");
            return Ok(count);
        }
    };

    let mut visited = VisitMap::new(grid.rows(), grid.cols());
    let mut count = 0;
    for cell in grid.positions() {
        if !grid[cell] || visited.contains(cell) {
            continue;
        }
        count += 1;
        sink(grid, cell, &mut visited);
        log::trace!("island #{count} starts at {cell}, {} land cells so far", visited.count());
    }
    log::debug!("{count} islands via {strategy}");
    Ok(count)
}

fn sink_bfs(grid: &Grid<bool>, start: Pos, visited: &mut VisitMap) {
    let mut queue = VecDeque::from([start]);
    visited.insert(start);
    while let Some(cell) = queue.pop_front() {
        for next in grid.neighbors(cell, &ORTHOGONAL) {
            if grid[next] && visited.insert(next) {
                queue.push_back(next);
            }
        }
    }
}

fn sink_dfs_rec(grid: &Grid<bool>, cell: Pos, visited: &mut VisitMap) {
    if !grid[cell] || !visited.insert(cell) {
        return;
    }
    for next in grid.neighbors(cell, &ORTHOGONAL) {
        sink_dfs_rec(grid, next, visited);
    }
}

fn sink_dfs_iter(grid: &Grid<bool>, start: Pos, visited: &mut VisitMap) {
    let mut stack = vec![start];
    visited.insert(start);
    while let Some(cell) = stack.pop() {
        for next in grid.neighbors(cell, &ORTHOGONAL) {
            if grid[next] && visited.insert(next) {
                stack.push(next);
            }
        }
    }
}

/// Only the up and left neighbours are unioned: both are scanned, and
/// therefore counted, before the current cell.
fn count_union_find(grid: &Grid<bool>) -> usize {
    const SCANNED: [Step; 2] = [(-1, 0), (0, -1)];

    let mut dsu = DSU::new(grid.len());
    let mut land = 0;
    for cell in grid.positions() {
        if !grid[cell] {
            continue;
        }
        land += 1;
        let id = grid.index_of(cell);
        for next in grid.neighbors(cell, &SCANNED) {
            if grid[next] && dsu.union(id, grid.index_of(next)) {
                land -= 1;
            }
        }
    }
    land
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::cases;

    fn islands(text: &str) -> Grid<bool> {
        Grid::<u8>::parse(text).unwrap().map(|v| *v == 1)
    }

    #[test]
    fn test_demo_grid() {
        let grid = cases::islands_grid();
        for strategy in Strategy::ALL {
            assert_eq!(count_islands(&grid, strategy), Ok(3), "{strategy}");
        }
    }

    #[test]
    fn test_one_big_island() {
        let grid = islands("11110\n11010\n11000\n00000");
        for strategy in Strategy::ALL {
            assert_eq!(count_islands(&grid, strategy), Ok(1), "{strategy}");
        }
    }

    #[test]
    fn test_no_land_and_all_land() {
        let water = Grid::filled(3, 7, false).unwrap();
        let land = Grid::filled(4, 4, true).unwrap();
        for strategy in Strategy::ALL {
            assert_eq!(count_islands(&water, strategy), Ok(0));
            assert_eq!(count_islands(&land, strategy), Ok(1));
        }
    }

    #[test]
    fn test_union_find_adjacent_land() {
        let block = islands("11\n11");
        assert_eq!(count_islands(&block, Strategy::UnionFind), Ok(1));

        // 两条竖臂直到最后一行才连起来
        let cup = islands("101\n101\n111");
        assert_eq!(count_islands(&cup, Strategy::UnionFind), Ok(1));
        let comb = islands("111\n101\n101");
        assert_eq!(count_islands(&comb, Strategy::UnionFind), Ok(1));
    }

    #[test]
    fn test_checkerboard() {
        // 对角不相连，每块陆地都是独立的岛
        let grid = islands("10101\n01010\n10101");
        for strategy in Strategy::ALL {
            assert_eq!(count_islands(&grid, strategy), Ok(8), "{strategy}");
        }
    }

    #[test]
    fn test_ring_with_lake() {
        let grid = islands("11111\n10001\n10101\n10001\n11111");
        for strategy in Strategy::ALL {
            assert_eq!(count_islands(&grid, strategy), Ok(2), "{strategy}");
        }
    }
}
