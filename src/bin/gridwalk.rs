//! Demo driver for the gridwalk algorithms.
//!
//! Usage:
//!   gridwalk flood-fill 1 1 2            Fill the demo image from (1,1) with 2
//!   gridwalk knight 6 3 4 0 0            Knight moves on a 6x6 board
//!   gridwalk -s union-find islands       Count islands with union-find
//!   gridwalk maze --grid maze.txt 0 0 3 2
//!
//! Integer arguments left off the command line are read from stdin.
//! Set `RUST_LOG=debug` to see what the algorithms are doing.

use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
};

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use gridwalk::{
    algo::{self, Orange, Strategy},
    base::{Grid, Pos},
    testing::cases,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "gridwalk", version, about = "Grid traversal exercises")]
struct Args {
    /// Traversal to use: bfs, dfs, dfs-iter or union-find
    #[arg(short, long, global = true, default_value = "bfs")]
    strategy: Strategy,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Recolor the region around SR SC with COLOR and print the image
    FloodFill {
        #[arg(long)]
        grid: Option<PathBuf>,
        /// SR SC COLOR
        #[arg(allow_negative_numbers = true)]
        nums: Vec<i64>,
    },
    /// Can a zero be reached from START by jumping arr[i] left or right?
    JumpGame {
        /// Whitespace separated array, defaults to the demo array
        #[arg(long)]
        array: Option<String>,
        /// START
        nums: Vec<i64>,
    },
    /// Minimum knight moves on an N x N board
    Knight {
        /// N KR KC TR TC
        nums: Vec<i64>,
    },
    /// Count 4-connected islands of 1s
    Islands {
        #[arg(long)]
        grid: Option<PathBuf>,
    },
    /// Minutes until every orange is rotten, -1 if impossible
    Rotting {
        #[arg(long)]
        grid: Option<PathBuf>,
    },
    /// Shortest path length in a binary maze, -1 if unreachable
    Maze {
        #[arg(long)]
        grid: Option<PathBuf>,
        /// SR SC DR DC
        nums: Vec<i64>,
    },
    /// Whether DR DC can be reached from SR SC in a binary maze
    Reach {
        #[arg(long)]
        grid: Option<PathBuf>,
        /// SR SC DR DC
        nums: Vec<i64>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let strategy = args.strategy;
    log::debug!("{} {}: {:?}", gridwalk::NAME, gridwalk::VERSION, args.command);

    match args.command {
        Command::FloodFill { grid, nums } => {
            let mut image = match grid {
                Some(path) => load_grid::<i32>(&path)?,
                None => cases::flood_fill_image(),
            };
            let nums = read_ints(nums, 3)?;
            let start = Pos::new(to_usize(nums[0])?, to_usize(nums[1])?);
            let color = i32::try_from(nums[2]).context("color does not fit in i32")?;
            algo::flood_fill(&mut image, start, color, strategy)?;
            print!("{image}");
        }
        Command::JumpGame { array, nums } => {
            let arr = match array {
                Some(text) => text
                    .split_whitespace()
                    .map(|t| t.parse::<usize>().with_context(|| format!("bad array entry `{t}`")))
                    .collect::<anyhow::Result<Vec<_>>>()?,
                None => cases::jump_game_array(),
            };
            let start = to_usize(read_ints(nums, 1)?[0])?;
            println!("{}", algo::can_reach(&arr, start, strategy)?);
        }
        Command::Knight { nums } => {
            let nums = read_ints(nums, 5)?
                .into_iter()
                .map(to_usize)
                .collect::<anyhow::Result<Vec<_>>>()?;
            let steps = algo::knight_min_steps(
                nums[0],
                Pos::new(nums[1], nums[2]),
                Pos::new(nums[3], nums[4]),
            )?;
            print_or_minus_one(steps);
        }
        Command::Islands { grid } => {
            let grid = match grid {
                Some(path) => load_grid::<u8>(&path)?.map(|v| *v != 0),
                None => cases::islands_grid(),
            };
            println!("{}", algo::count_islands(&grid, strategy)?);
        }
        Command::Rotting { grid } => {
            let mut grid = match grid {
                Some(path) => Orange::grid_from_values(&load_grid::<i64>(&path)?)?,
                None => cases::rotting_grid(),
            };
            print_or_minus_one(algo::rot_time(&mut grid, strategy)?);
            print!("{grid}");
        }
        Command::Maze { grid, nums } => {
            let mat = load_maze(grid.as_deref())?;
            let (src, dst) = read_endpoints(nums)?;
            print_or_minus_one(algo::shortest_path(&mat, src, dst)?);
        }
        Command::Reach { grid, nums } => {
            let mat = load_maze(grid.as_deref())?;
            let (src, dst) = read_endpoints(nums)?;
            println!("{}", algo::is_reachable(&mat, src, dst, strategy)?);
        }
    }
    Ok(())
}

fn load_grid<T: std::str::FromStr>(path: &Path) -> anyhow::Result<Grid<T>> {
    let text =
        fs::read_to_string(path).with_context(|| format!("cannot read {}", path.display()))?;
    Grid::parse(&text).with_context(|| format!("bad grid in {}", path.display()))
}

fn load_maze(path: Option<&Path>) -> anyhow::Result<Grid<bool>> {
    match path {
        Some(path) => Ok(load_grid::<u8>(path)?.map(|v| *v != 0)),
        None => Ok(cases::maze_grid()),
    }
}

fn read_endpoints(nums: Vec<i64>) -> anyhow::Result<(Pos, Pos)> {
    let n = read_ints(nums, 4)?
        .into_iter()
        .map(to_usize)
        .collect::<anyhow::Result<Vec<_>>>()?;
    Ok((Pos::new(n[0], n[1]), Pos::new(n[2], n[3])))
}

/// Returns exactly `need` integers: the ones given on the command line, or
/// if none were given, the first `need` read from stdin.
fn read_ints(given: Vec<i64>, need: usize) -> anyhow::Result<Vec<i64>> {
    read_ints_from(given, need, io::stdin().lock())
}

fn read_ints_from(given: Vec<i64>, need: usize, mut input: impl Read) -> anyhow::Result<Vec<i64>> {
    if !given.is_empty() {
        if given.len() != need {
            bail!("expected {need} integers, got {}", given.len());
        }
        return Ok(given);
    }
    let mut text = String::new();
    input
        .read_to_string(&mut text)
        .context("cannot read stdin")?;
    let nums = text
        .split_whitespace()
        .take(need)
        .map(|t| t.parse::<i64>().with_context(|| format!("not an integer: `{t}`")))
        .collect::<anyhow::Result<Vec<_>>>()?;
    if nums.len() < need {
        bail!("expected {need} integers on stdin, got {}", nums.len());
    }
    Ok(nums)
}

fn to_usize(v: i64) -> anyhow::Result<usize> {
    usize::try_from(v).with_context(|| format!("{v} is not a valid index"))
}

fn or_minus_one<T: std::fmt::Display>(value: Option<T>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "-1".to_string(),
    }
}

fn print_or_minus_one<T: std::fmt::Display>(value: Option<T>) {
    println!("{}", or_minus_one(value));
}
