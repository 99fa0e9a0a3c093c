//! Flood fill: recolor the 4-connected region around a start cell.
//!
//! 所有实现都直接在图像上改色，已经改过色的格子不再等于原色，
//! 因此不需要额外的 visited 标记。

use std::collections::VecDeque;

use crate::{
    algo::Strategy,
    base::{DSU, Grid, GridRes, ORTHOGONAL, Pos},
};

/// Recolors the region of cells equal to `image[start]` that is
/// 4-connected to `start`, and returns how many cells changed.
///
/// When the start cell already has `color` nothing changes.
pub fn flood_fill<T>(
    image: &mut Grid<T>,
    start: Pos,
    color: T,
    strategy: Strategy,
) -> GridRes<usize>
where
    T: Copy + PartialEq,
{
    image.check(start)?;
    let prev = image[start];
    if prev == color {
        log::debug!("flood fill at {start}: already colored, nothing to do");
        return Ok(0);
    }
    let painted = match strategy {
        Strategy::Bfs => fill_bfs(image, start, prev, color),
        Strategy::DfsRecursive => fill_dfs_rec(image, start, prev, color),
        Strategy::DfsIterative => fill_dfs_iter(image, start, prev, color),
        Strategy::UnionFind => fill_union_find(image, start, prev, color),
    };
    log::debug!("flood fill at {start} via {strategy}: {painted} cells");
    Ok(painted)
}

fn fill_bfs<T: Copy + PartialEq>(image: &mut Grid<T>, start: Pos, prev: T, color: T) -> usize {
    let mut queue = VecDeque::from([start]);
    image[start] = color;
    let mut painted = 1;

    while let Some(cell) = queue.pop_front() {
        for next in image.neighbors(cell, &ORTHOGONAL) {
            if image[next] == prev {
                // 入队时立即改色，保证每个格子只入队一次
                image[next] = color;
                painted += 1;
                queue.push_back(next);
            }
        }
    }
    painted
}

fn fill_dfs_rec<T: Copy + PartialEq>(image: &mut Grid<T>, cell: Pos, prev: T, color: T) -> usize {
    if image[cell] != prev {
        return 0;
    }
    image[cell] = color;
    let mut painted = 1;
    for next in image.neighbors(cell, &ORTHOGONAL) {
        painted += fill_dfs_rec(image, next, prev, color);
    }
    painted
}

fn fill_dfs_iter<T: Copy + PartialEq>(image: &mut Grid<T>, start: Pos, prev: T, color: T) -> usize {
    let mut stack = vec![start];
    let mut painted = 0;

    while let Some(cell) = stack.pop() {
        if image[cell] != prev {
            continue;
        }
        image[cell] = color;
        painted += 1;
        stack.extend(image.neighbors(cell, &ORTHOGONAL));
    }
    painted
}

fn fill_union_find<T: Copy + PartialEq>(
    image: &mut Grid<T>,
    start: Pos,
    prev: T,
    color: T,
) -> usize {
    let mut dsu = DSU::new(image.len());
    for cell in image.positions() {
        if image[cell] != prev {
            continue;
        }
        for next in image.neighbors(cell, &ORTHOGONAL) {
            if image[next] == prev {
                dsu.union(image.index_of(cell), image.index_of(next));
            }
        }
    }

    let comp = dsu.find(image.index_of(start));
    let mut painted = 0;
    for cell in image.positions() {
        if dsu.find(image.index_of(cell)) == comp {
            image[cell] = color;
            painted += 1;
        }
    }
    painted
}
