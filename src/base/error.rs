use crate::{algo::Strategy, base::Pos};

#[derive(Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridErr {
    #[error("grid is empty")]
    EmptyGrid,
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("a {rows}x{cols} grid needs {} cells, found {found}", rows * cols)]
    CellCount {
        rows: usize,
        cols: usize,
        found: usize,
    },
    #[error("position {pos} is outside the {rows}x{cols} grid")]
    OutOfBounds { pos: Pos, rows: usize, cols: usize },
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("cannot parse `{token}` on line {line}")]
    Parse { line: usize, token: String },
    #[error("invalid cell value {0}")]
    InvalidCell(i64),

    #[error("{algo} has no {strategy} variant")]
    UnsupportedStrategy {
        algo: &'static str,
        strategy: Strategy,
    },
}

pub type GridRes<T = ()> = Result<T, GridErr>;

impl std::fmt::Debug for GridErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(self, f)
    }
}
