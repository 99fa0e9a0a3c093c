//! Rectangular row-major grid shared by every traversal in this crate.

use std::{
    fmt,
    ops::{Index, IndexMut},
    str::FromStr,
};

use crate::base::{GridErr, GridRes, Pos, Step};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawGrid<T>"))]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

/// Unchecked wire form of [`Grid`]; deserialized grids go through
/// [`Grid::from_raw`] so the shape invariants hold.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawGrid<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

#[cfg(feature = "serde")]
impl<T> TryFrom<RawGrid<T>> for Grid<T> {
    type Error = GridErr;

    fn try_from(raw: RawGrid<T>) -> GridRes<Self> {
        Self::from_raw(raw.rows, raw.cols, raw.cells)
    }
}

impl<T> Grid<T> {
    /// Builds a grid from nested rows.
    ///
    /// 空网格（没有行或没有列）和参差不齐的行都会被拒绝。
    pub fn from_rows(rows: Vec<Vec<T>>) -> GridRes<Self> {
        let cols = match rows.first() {
            Some(first) if !first.is_empty() => first.len(),
            _ => return Err(GridErr::EmptyGrid),
        };
        let nrows = rows.len();
        let mut cells = Vec::with_capacity(nrows * cols);
        for (row, line) in rows.into_iter().enumerate() {
            if line.len() != cols {
                return Err(GridErr::RaggedRow {
                    row,
                    expected: cols,
                    found: line.len(),
                });
            }
            cells.extend(line);
        }
        Ok(Self {
            rows: nrows,
            cols,
            cells,
        })
    }

    /// Builds a grid from row-major cells.
    pub fn from_raw(rows: usize, cols: usize, cells: Vec<T>) -> GridRes<Self> {
        if rows == 0 || cols == 0 {
            return Err(GridErr::EmptyGrid);
        }
        if rows.checked_mul(cols) != Some(cells.len()) {
            return Err(GridErr::CellCount {
                rows,
                cols,
                found: cells.len(),
            });
        }
        Ok(Self { rows, cols, cells })
    }

    pub fn filled(rows: usize, cols: usize, value: T) -> GridRes<Self>
    where
        T: Clone,
    {
        if rows == 0 || cols == 0 {
            return Err(GridErr::EmptyGrid);
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![value; rows * cols],
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }
    pub fn cols(&self) -> usize {
        self.cols
    }
    pub fn len(&self) -> usize {
        self.cells.len()
    }
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, pos: Pos) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }
    pub fn check(&self, pos: Pos) -> GridRes {
        if self.contains(pos) {
            Ok(())
        } else {
            Err(GridErr::OutOfBounds {
                pos,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// Row-major linear index of `pos`. Doubles as the DSU node id.
    pub fn index_of(&self, pos: Pos) -> usize {
        pos.row * self.cols + pos.col
    }
    pub fn pos_of(&self, index: usize) -> Pos {
        Pos::new(index / self.cols, index % self.cols)
    }

    pub fn get(&self, pos: Pos) -> Option<&T> {
        if self.contains(pos) {
            Some(&self.cells[self.index_of(pos)])
        } else {
            None
        }
    }

    pub fn positions(&self) -> impl Iterator<Item = Pos> + use<T> {
        let cols = self.cols;
        (0..self.cells.len()).map(move |i| Pos::new(i / cols, i % cols))
    }

    /// In-bounds neighbours of `pos` under the given move table.
    pub fn neighbors<'a>(
        &self,
        pos: Pos,
        dirs: &'a [Step],
    ) -> impl Iterator<Item = Pos> + use<'a, T> {
        let (rows, cols) = (self.rows, self.cols);
        dirs.iter().filter_map(move |&d| pos.step(d, rows, cols))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Pos, &T)> {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, v)| (Pos::new(i / cols, i % cols), v))
    }

    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Grid<U> {
        Grid {
            rows: self.rows,
            cols: self.cols,
            cells: self.cells.iter().map(f).collect(),
        }
    }

    pub fn row(&self, row: usize) -> &[T] {
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }
}

impl<T: FromStr> Grid<T> {
    /// Parses one row per non-blank line. Cells are whitespace separated;
    /// a line without whitespace is split per character, so `11000` and
    /// `1 1 0 0 0` describe the same row.
    pub fn parse(text: &str) -> GridRes<Self> {
        let mut rows = Vec::new();
        for (lineno, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let row = if line.contains(char::is_whitespace) {
                line.split_whitespace()
                    .map(|tok| parse_token(tok, lineno + 1))
                    .collect::<GridRes<Vec<T>>>()?
            } else {
                line.char_indices()
                    .map(|(i, c)| parse_token(&line[i..i + c.len_utf8()], lineno + 1))
                    .collect::<GridRes<Vec<T>>>()?
            };
            rows.push(row);
        }
        Self::from_rows(rows)
    }
}

fn parse_token<T: FromStr>(token: &str, line: usize) -> GridRes<T> {
    token.parse().map_err(|_| GridErr::Parse {
        line,
        token: token.to_string(),
    })
}

impl<T> Index<Pos> for Grid<T> {
    type Output = T;

    fn index(&self, pos: Pos) -> &T {
        assert!(self.contains(pos), "{pos} outside {}x{} grid", self.rows, self.cols);
        &self.cells[self.index_of(pos)]
    }
}

impl<T> IndexMut<Pos> for Grid<T> {
    fn index_mut(&mut self, pos: Pos) -> &mut T {
        assert!(self.contains(pos), "{pos} outside {}x{} grid", self.rows, self.cols);
        let index = self.index_of(pos);
        &mut self.cells[index]
    }
}

impl<T: fmt::Display> fmt::Display for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows {
            for (c, v) in self.row(r).iter().enumerate() {
                if c > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{v}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
