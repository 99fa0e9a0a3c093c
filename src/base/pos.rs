use std::fmt;

/// A `(row, col)` cell coordinate. Always non-negative; moves that would
/// leave the grid never produce a `Pos`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

/// Row/column delta of a single move.
pub type Step = (isize, isize);

/// 上、下、左、右
pub const ORTHOGONAL: [Step; 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// The eight L-shaped knight moves.
pub const KNIGHT: [Step; 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (-1, 2),
    (1, -2),
    (-1, -2),
];

impl Pos {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Moves by `step` and returns the new position if it still lies inside
    /// a `rows x cols` area.
    pub fn step(self, (dr, dc): Step, rows: usize, cols: usize) -> Option<Pos> {
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        if row < rows && col < cols {
            Some(Pos { row, col })
        } else {
            None
        }
    }
}

impl From<(usize, usize)> for Pos {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_stays_in_bounds() {
        let corner = Pos::new(0, 0);
        assert_eq!(corner.step((-1, 0), 3, 3), None);
        assert_eq!(corner.step((0, -1), 3, 3), None);
        assert_eq!(corner.step((1, 0), 3, 3), Some(Pos::new(1, 0)));

        let far = Pos::new(2, 2);
        assert_eq!(far.step((1, 0), 3, 3), None);
        assert_eq!(far.step((0, 1), 3, 3), None);
        assert_eq!(far.step((-2, -1), 3, 3), Some(Pos::new(0, 1)));
    }

    #[test]
    fn knight_moves_from_center() {
        let center = Pos::new(3, 3);
        let n = KNIGHT
            .iter()
            .filter_map(|&d| center.step(d, 8, 8))
            .count();
        assert_eq!(n, 8);

        // 角落只有两步可走
        let corner = Pos::new(0, 0);
        let n = KNIGHT
            .iter()
            .filter_map(|&d| corner.step(d, 8, 8))
            .count();
        assert_eq!(n, 2);
    }
}
