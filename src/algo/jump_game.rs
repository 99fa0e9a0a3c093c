//! Jump game III: from index `i` one may jump to `i + arr[i]` or
//! `i - arr[i]`. Can any zero be reached from `start`?

use std::collections::VecDeque;

use smallvec::SmallVec;

use crate::{
    algo::Strategy,
    base::{GridErr, GridRes},
};

pub fn can_reach(arr: &[usize], start: usize, strategy: Strategy) -> GridRes<bool> {
    if arr.is_empty() {
        return Err(GridErr::EmptyGrid);
    }
    if start >= arr.len() {
        return Err(GridErr::IndexOutOfRange {
            index: start,
            len: arr.len(),
        });
    }
    // 跳转是有向的：i 能到 j 不代表 j 能到 i，并查集无能为力
    let mut visited = vec![false; arr.len()];
    let found = match strategy {
        Strategy::Bfs => reach_bfs(arr, start, &mut visited),
        Strategy::DfsRecursive => reach_dfs_rec(arr, start, &mut visited),
        Strategy::DfsIterative => reach_dfs_iter(arr, start, &mut visited),
        Strategy::UnionFind => {
            return Err(GridErr::UnsupportedStrategy {
                algo: "jump game",
                strategy,
            });
        }
    };
    log::debug!(
        "jump game from {start} via {strategy}: {found}, visited {} of {}",
        visited.iter().filter(|v| **v).count(),
        arr.len()
    );
    Ok(found)
}

fn jumps(arr: &[usize], i: usize) -> SmallVec<[usize; 2]> {
    let mut out = SmallVec::new();
    if let Some(back) = i.checked_sub(arr[i]) {
        out.push(back);
    }
    if let Some(fwd) = i.checked_add(arr[i]).filter(|&j| j < arr.len()) {
        out.push(fwd);
    }
    out
}

fn reach_bfs(arr: &[usize], start: usize, visited: &mut [bool]) -> bool {
    let mut queue = VecDeque::from([start]);
    visited[start] = true;
    while let Some(i) = queue.pop_front() {
        if arr[i] == 0 {
            return true;
        }
        for j in jumps(arr, i) {
            if !visited[j] {
                visited[j] = true;
                queue.push_back(j);
            }
        }
    }
    false
}

fn reach_dfs_rec(arr: &[usize], i: usize, visited: &mut [bool]) -> bool {
    if visited[i] {
        return false;
    }
    visited[i] = true;
    arr[i] == 0 || jumps(arr, i).into_iter().any(|j| reach_dfs_rec(arr, j, visited))
}

fn reach_dfs_iter(arr: &[usize], start: usize, visited: &mut [bool]) -> bool {
    let mut stack = vec![start];
    while let Some(i) = stack.pop() {
        if visited[i] {
            continue;
        }
        visited[i] = true;
        if arr[i] == 0 {
            return true;
        }
        stack.extend(jumps(arr, i).into_iter().filter(|&j| !visited[j]));
    }
    false
}
