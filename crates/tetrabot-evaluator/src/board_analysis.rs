//! Lazily computed surface metrics of a [`Board`].

use std::{cell::OnceCell, iter};

use tetrabot_engine::Board;

/// Board-shape features consumed by placement evaluators.
///
/// Each metric is computed on first access and cached, so evaluators that only look
/// at a subset of them pay only for what they use.
#[derive(Debug)]
pub struct BoardAnalysis {
    board: Board,
    column_heights: OnceCell<[u8; Board::WIDTH]>,
    aggregate_height: OnceCell<u32>,
    num_holes: OnceCell<u32>,
    bumpiness: OnceCell<u32>,
}

impl BoardAnalysis {
    #[must_use]
    pub fn from_board(board: &Board) -> Self {
        Self {
            board: board.clone(),
            column_heights: OnceCell::new(),
            aggregate_height: OnceCell::new(),
            num_holes: OnceCell::new(),
            bumpiness: OnceCell::new(),
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Distance from each column's topmost occupied cell to the floor; 0 for empty
    /// columns.
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub fn column_heights(&self) -> &[u8; Board::WIDTH] {
        self.column_heights.get_or_init(|| {
            let mut column_heights = [0; Board::WIDTH];
            for (x, h) in column_heights.iter_mut().enumerate() {
                let top = (0..Board::HEIGHT).find(|&y| self.board.is_cell_occupied(x, y));
                if let Some(top) = top {
                    *h = (Board::HEIGHT - top) as u8;
                }
            }
            column_heights
        })
    }

    #[must_use]
    pub fn aggregate_height(&self) -> u32 {
        *self
            .aggregate_height
            .get_or_init(|| self.column_heights().iter().copied().map(u32::from).sum())
    }

    /// Empty cells lying below their column's topmost occupied cell.
    #[must_use]
    pub fn num_holes(&self) -> u32 {
        *self.num_holes.get_or_init(|| {
            let mut holes = 0;
            for (x, &h) in self.column_heights().iter().enumerate() {
                let top = Board::HEIGHT - usize::from(h);
                holes += (top..Board::HEIGHT)
                    .filter(|&y| !self.board.is_cell_occupied(x, y))
                    .count();
            }
            u32::try_from(holes).unwrap_or(u32::MAX)
        })
    }

    /// Sum of absolute height differences between adjacent columns.
    #[must_use]
    pub fn bumpiness(&self) -> u32 {
        *self.bumpiness.get_or_init(|| {
            let heights = self.column_heights();
            iter::zip(heights, &heights[1..])
                .map(|(a, b)| u32::from(a.abs_diff(*b)))
                .sum()
        })
    }
}
