//! Every strategy of a problem must give the same answer. Checked on
//! seeded random grids of varying density.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::{
    algo::{
        Orange, Strategy, can_reach, count_islands, distances, flood_fill, is_reachable, rot_time,
        shortest_path,
    },
    base::{Grid, ORTHOGONAL, Pos},
};

const SEED: u64 = 0x6772_6964;

fn random_bools(rng: &mut impl Rng, rows: usize, cols: usize, density: f64) -> Grid<bool> {
    let cells = (0..rows)
        .map(|_| (0..cols).map(|_| rng.gen_bool(density)).collect())
        .collect();
    Grid::from_rows(cells).unwrap()
}

fn random_pos(rng: &mut impl Rng, grid: &Grid<impl Sized>) -> Pos {
    Pos::new(rng.gen_range(0..grid.rows()), rng.gen_range(0..grid.cols()))
}

#[test]
fn test_islands_strategies_agree() {
    let mut rng = ChaCha8Rng::seed_from_u64(SEED);
    for round in 0..200 {
        let rows = rng.gen_range(1..12);
        let cols = rng.gen_range(1..12);
        let density = [0.2, 0.45, 0.6, 0.85][round % 4];
        let grid = random_bools(&mut rng, rows, cols, density);

        let expected = count_islands(&grid, Strategy::Bfs).unwrap();
        for strategy in Strategy::ALL {
            assert_eq!(
                count_islands(&grid, strategy).unwrap(),
                expected,
                "round {round} strategy {strategy}\n{}",
                grid.map(|&v| v as u8)
            );
        }
    }
}

#[test]
fn test_flood_fill_strategies_agree() {
    let mut rng = ChaCha8Rng::seed_from_u64(SEED + 1);
    for round in 0..200 {
        let rows = rng.gen_range(1..10);
        let cols = rng.gen_range(1..10);
        let cells = (0..rows)
            .map(|_| (0..cols).map(|_| rng.gen_range(0..3u8)).collect())
            .collect();
        let image = Grid::from_rows(cells).unwrap();
        let start = random_pos(&mut rng, &image);
        let color = rng.gen_range(0..4u8);

        let mut expected = image.clone();
        let painted = flood_fill(&mut expected, start, color, Strategy::Bfs).unwrap();
        for strategy in Strategy::ALL {
            let mut got = image.clone();
            assert_eq!(flood_fill(&mut got, start, color, strategy).unwrap(), painted);
            assert_eq!(got, expected, "round {round} strategy {strategy}");
        }
    }
}

#[test]
fn test_rotting_strategies_agree() {
    let mut rng = ChaCha8Rng::seed_from_u64(SEED + 2);
    for round in 0..200 {
        let rows = rng.gen_range(1..9);
        let cols = rng.gen_range(1..9);
        let cells = (0..rows)
            .map(|_| {
                (0..cols)
                    .map(|_| match rng.gen_range(0..10) {
                        0..=1 => Orange::Empty,
                        2 => Orange::Rotten,
                        _ => Orange::Fresh,
                    })
                    .collect()
            })
            .collect();
        let grid = Grid::from_rows(cells).unwrap();

        let mut expected_grid = grid.clone();
        let expected = rot_time(&mut expected_grid, Strategy::Bfs).unwrap();
        for strategy in [Strategy::DfsRecursive, Strategy::DfsIterative] {
            let mut got_grid = grid.clone();
            let got = rot_time(&mut got_grid, strategy).unwrap();
            assert_eq!(got, expected, "round {round} strategy {strategy}\n{grid}");
            assert_eq!(got_grid, expected_grid, "round {round} strategy {strategy}");
        }
    }
}

#[test]
fn test_maze_reachability_agrees_with_bfs() {
    let mut rng = ChaCha8Rng::seed_from_u64(SEED + 3);
    for round in 0..200 {
        let rows = rng.gen_range(1..12);
        let cols = rng.gen_range(1..12);
        let mat = random_bools(&mut rng, rows, cols, 0.65);
        let src = random_pos(&mut rng, &mat);
        let dst = random_pos(&mut rng, &mat);

        let expected = shortest_path(&mat, src, dst).unwrap().is_some();
        for strategy in Strategy::ALL {
            assert_eq!(
                is_reachable(&mat, src, dst, strategy).unwrap(),
                expected,
                "round {round} strategy {strategy} {src} -> {dst}"
            );
        }
    }
}

#[test]
fn test_maze_distances_are_consistent() {
    let mut rng = ChaCha8Rng::seed_from_u64(SEED + 4);
    for _ in 0..100 {
        let mat = random_bools(&mut rng, 10, 10, 0.7);
        let src = random_pos(&mut rng, &mat);
        let dist = distances(&mat, src).unwrap();

        for cell in mat.positions() {
            let Some(d) = dist[cell] else { continue };
            assert!(mat[cell]);
            if cell == src {
                assert_eq!(d, 0);
                continue;
            }
            // 除起点外，每个可达格子都有一个距离恰好少 1 的邻居
            let has_parent = mat
                .neighbors(cell, &ORTHOGONAL)
                .any(|n| dist[n] == Some(d - 1));
            assert!(has_parent, "{cell} at distance {d} has no parent");
            for n in mat.neighbors(cell, &ORTHOGONAL) {
                if let Some(dn) = dist[n] {
                    assert!(dn.abs_diff(d) <= 1);
                }
            }
        }
    }
}

#[test]
fn test_jump_game_strategies_agree() {
    let mut rng = ChaCha8Rng::seed_from_u64(SEED + 5);
    for _ in 0..300 {
        let len = rng.gen_range(1..20);
        let arr: Vec<usize> = (0..len).map(|_| rng.gen_range(0..len)).collect();
        let start = rng.gen_range(0..len);

        let expected = can_reach(&arr, start, Strategy::Bfs).unwrap();
        for strategy in [Strategy::DfsRecursive, Strategy::DfsIterative] {
            assert_eq!(can_reach(&arr, start, strategy).unwrap(), expected, "{arr:?} from {start}");
        }
    }
}
