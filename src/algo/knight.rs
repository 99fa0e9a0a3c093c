use std::collections::VecDeque;

use crate::base::{GridErr, GridRes, KNIGHT, Pos};

/// Minimum number of knight moves from `from` to `to` on an `n x n` board.
///
/// Positions are 0-indexed. Returns `None` when the target cannot be
/// reached, e.g. the centre of a 3x3 board.
pub fn knight_min_steps(n: usize, from: Pos, to: Pos) -> GridRes<Option<u32>> {
    if n == 0 {
        return Err(GridErr::EmptyGrid);
    }
    for pos in [from, to] {
        if pos.row >= n || pos.col >= n {
            return Err(GridErr::OutOfBounds {
                pos,
                rows: n,
                cols: n,
            });
        }
    }
    if from == to {
        return Ok(Some(0));
    }

    // dist[r * n + c]: 到达该格的最少步数，None 表示尚未访问
    let mut dist: Vec<Option<u32>> = vec![None; n * n];
    let mut queue = VecDeque::from([from]);
    dist[from.row * n + from.col] = Some(0);

    while let Some(cell) = queue.pop_front() {
        let steps = dist[cell.row * n + cell.col].unwrap_or_default() + 1;
        for next in KNIGHT.iter().filter_map(|&d| cell.step(d, n, n)) {
            if next == to {
                log::debug!("knight {from} -> {to} on {n}x{n}: {steps} moves");
                return Ok(Some(steps));
            }
            let slot = &mut dist[next.row * n + next.col];
            if slot.is_none() {
                *slot = Some(steps);
                queue.push_back(next);
            }
        }
    }
    log::debug!("knight {from} -> {to} on {n}x{n}: unreachable");
    Ok(None)
}
