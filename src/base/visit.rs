use smallvec::SmallVec;

use crate::base::Pos;

/// One bit per grid cell. Grids up to 128 cells keep their bits inline.
#[derive(Debug, Clone)]
pub struct VisitMap {
    words: SmallVec<[u64; 2]>,
    rows: usize,
    cols: usize,
}

impl VisitMap {
    pub fn new(rows: usize, cols: usize) -> Self {
        let nwords = (rows * cols).div_ceil(64);
        Self {
            words: SmallVec::from_elem(0, nwords),
            rows,
            cols,
        }
    }

    fn locate(&self, pos: Pos) -> Option<(usize, u64)> {
        if pos.row >= self.rows || pos.col >= self.cols {
            return None; // 越界一律视为未访问
        }
        let bit = pos.row * self.cols + pos.col;
        Some((bit / 64, 1u64 << (bit % 64)))
    }

    /// Marks `pos` visited. Returns `true` if it was not visited before.
    pub fn insert(&mut self, pos: Pos) -> bool {
        let Some((word, mask)) = self.locate(pos) else {
            return false;
        };
        let fresh = self.words[word] & mask == 0;
        self.words[word] |= mask;
        fresh
    }

    pub fn contains(&self, pos: Pos) -> bool {
        self.locate(pos)
            .is_some_and(|(word, mask)| self.words[word] & mask != 0)
    }

    pub fn count(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    pub fn clear(&mut self) {
        self.words.iter_mut().for_each(|w| *w = 0);
    }

    pub fn spilled(&self) -> bool {
        self.words.spilled()
    }
}
