//! Shortest path and reachability in a binary maze (`true` = walkable).
//!
//! Only BFS yields shortest distances. DFS and union-find can still answer
//! whether the destination is reachable at all.

use std::collections::VecDeque;

use crate::{
    algo::Strategy,
    base::{DSU, Grid, GridRes, ORTHOGONAL, Pos, VisitMap},
};

/// BFS distance from `src` to every cell; `None` marks cells never reached.
///
/// A blocked `src` reaches nothing, not even itself.
pub fn distances(mat: &Grid<bool>, src: Pos) -> GridRes<Grid<Option<usize>>> {
    mat.check(src)?;
    let mut dist = Grid::filled(mat.rows(), mat.cols(), None)?;
    if !mat[src] {
        return Ok(dist);
    }

    let mut queue = VecDeque::from([src]);
    dist[src] = Some(0);
    while let Some(cell) = queue.pop_front() {
        let next_dist = dist[cell].map(|d| d + 1);
        for next in mat.neighbors(cell, &ORTHOGONAL) {
            if mat[next] && dist[next].is_none() {
                dist[next] = next_dist;
                queue.push_back(next);
            }
        }
    }
    Ok(dist)
}

/// Number of steps on a shortest walkable path from `src` to `dst`.
pub fn shortest_path(mat: &Grid<bool>, src: Pos, dst: Pos) -> GridRes<Option<usize>> {
    mat.check(dst)?;
    let dist = distances(mat, src)?;
    let steps = dist[dst];
    log::debug!("maze {src} -> {dst}: {steps:?}");
    Ok(steps)
}

/// Whether `dst` can be reached from `src` at all.
pub fn is_reachable(mat: &Grid<bool>, src: Pos, dst: Pos, strategy: Strategy) -> GridRes<bool> {
    mat.check(src)?;
    mat.check(dst)?;
    if !mat[src] || !mat[dst] {
        return Ok(false);
    }
    let reachable = match strategy {
        Strategy::Bfs => distances(mat, src)?[dst].is_some(),
        Strategy::DfsRecursive => {
            let mut visited = VisitMap::new(mat.rows(), mat.cols());
            reach_dfs_rec(mat, src, dst, &mut visited)
        }
        Strategy::DfsIterative => reach_dfs_iter(mat, src, dst),
        Strategy::UnionFind => {
            let mut dsu = walkable_components(mat);
            dsu.is_connected(mat.index_of(src), mat.index_of(dst))
        }
    };
    log::debug!("maze {src} -> {dst} via {strategy}: reachable = {reachable}");
    Ok(reachable)
}

fn reach_dfs_rec(mat: &Grid<bool>, cell: Pos, dst: Pos, visited: &mut VisitMap) -> bool {
    if cell == dst {
        return true;
    }
    visited.insert(cell);
    for next in mat.neighbors(cell, &ORTHOGONAL) {
        if mat[next] && !visited.contains(next) && reach_dfs_rec(mat, next, dst, visited) {
            return true;
        }
    }
    false
}

fn reach_dfs_iter(mat: &Grid<bool>, src: Pos, dst: Pos) -> bool {
    let mut visited = VisitMap::new(mat.rows(), mat.cols());
    let mut stack = vec![src];
    while let Some(cell) = stack.pop() {
        if cell == dst {
            return true;
        }
        if !visited.insert(cell) {
            continue;
        }
        stack.extend(
            mat.neighbors(cell, &ORTHOGONAL)
                .filter(|&n| mat[n] && !visited.contains(n)),
        );
    }
    false
}

/// Unions every pair of orthogonally adjacent walkable cells. Only the
/// right and down neighbours are needed to cover each edge once.
fn walkable_components(mat: &Grid<bool>) -> DSU {
    let mut dsu = DSU::new(mat.len());
    for cell in mat.positions() {
        if !mat[cell] {
            continue;
        }
        for next in mat.neighbors(cell, &[(1, 0), (0, 1)]) {
            if mat[next] {
                dsu.union(mat.index_of(cell), mat.index_of(next));
            }
        }
    }
    dsu
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{base::GridErr, testing::cases};

    #[test]
    fn test_demo_maze_shortest_path() {
        let mat = cases::maze_grid();
        assert_eq!(shortest_path(&mat, Pos::new(0, 0), Pos::new(3, 2)), Ok(Some(5)));
        assert_eq!(shortest_path(&mat, Pos::new(0, 0), Pos::new(2, 3)), Ok(Some(5)));
        assert_eq!(shortest_path(&mat, Pos::new(0, 0), Pos::new(0, 0)), Ok(Some(0)));
        // (3,4) 被 0 包围
        assert_eq!(shortest_path(&mat, Pos::new(0, 0), Pos::new(3, 4)), Ok(None));
        // 终点本身是墙
        assert_eq!(shortest_path(&mat, Pos::new(0, 0), Pos::new(2, 4)), Ok(None));
    }

    #[test]
    fn test_detour_around_wall() {
        let mat = Grid::<u8>::parse("111\n001\n111").unwrap().map(|v| *v == 1);
        assert_eq!(shortest_path(&mat, Pos::new(0, 0), Pos::new(2, 0)), Ok(Some(6)));

        let dist = distances(&mat, Pos::new(0, 0)).unwrap();
        assert_eq!(dist[Pos::new(1, 2)], Some(3));
        assert_eq!(dist[Pos::new(1, 0)], None);
    }

    #[test]
    fn test_blocked_source() {
        let mat = cases::maze_grid();
        let src = Pos::new(3, 1);
        assert_eq!(shortest_path(&mat, src, src), Ok(None));
        for strategy in Strategy::ALL {
            assert_eq!(is_reachable(&mat, src, Pos::new(0, 0), strategy), Ok(false));
        }
    }

    #[test]
    fn test_reachability_all_strategies() {
        let mat = cases::maze_grid();
        for strategy in Strategy::ALL {
            assert_eq!(
                is_reachable(&mat, Pos::new(0, 0), Pos::new(3, 2), strategy),
                Ok(true),
                "{strategy}"
            );
            assert_eq!(
                is_reachable(&mat, Pos::new(0, 0), Pos::new(3, 4), strategy),
                Ok(false),
                "{strategy}"
            );
            assert_eq!(
                is_reachable(&mat, Pos::new(3, 4), Pos::new(3, 4), strategy),
                Ok(true),
                "{strategy}"
            );
        }
    }

    #[test]
    fn test_out_of_bounds() {
        let mat = cases::maze_grid();
        assert!(matches!(
            shortest_path(&mat, Pos::new(0, 0), Pos::new(4, 0)),
            Err(GridErr::OutOfBounds { .. })
        ));
        assert!(matches!(
            is_reachable(&mat, Pos::new(0, 5), Pos::new(0, 0), Strategy::Bfs),
            Err(GridErr::OutOfBounds { .. })
        ));
    }
}
