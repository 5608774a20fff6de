use super::piece::{Piece, PieceKind, Position};

/// A single cell of the [`Board`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Block {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell locked by a piece of the given kind.
    Piece(PieceKind),
}

impl Block {
    #[must_use]
    pub fn is_empty(self) -> bool {
        self == Block::Empty
    }

    /// Returns the numeric cell value: `0` when empty, `ordinal + 1` when locked.
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        match self {
            Block::Empty => 0,
            Block::Piece(kind) => kind.color(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct BlockRow {
    cells: [Block; Board::WIDTH],
}

impl BlockRow {
    const EMPTY: Self = Self {
        cells: [Block::Empty; Board::WIDTH],
    };

    fn is_filled(&self) -> bool {
        self.cells.iter().all(|b| !b.is_empty())
    }

    fn is_empty(&self) -> bool {
        self.cells.iter().all(|b| b.is_empty())
    }
}

/// Fixed-size occupancy grid and the only source of truth for collisions.
///
/// Row `0` is the top of the board. Every non-empty cell was produced by
/// [`Board::place`]; the grid is otherwise changed only by [`Board::clear_lines`]
/// and [`Board::reset`].
///
/// None of the operations fail: out-of-bounds lookups read as empty cells and
/// out-of-bounds stamps are skipped.
///
/// # Example
///
/// ```
/// use tetrabot_engine::{Board, Piece, PieceKind, Position};
///
/// let mut board = Board::INITIAL;
/// let piece = Piece::new(PieceKind::O);
///
/// assert!(board.can_place(&piece, Position::new(4, 18)));
/// board.place(&piece, Position::new(4, 18));
/// assert_eq!(board.cell(4, 19), PieceKind::O.color());
/// assert!(!board.can_place(&piece, Position::new(4, 17)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: [BlockRow; Board::HEIGHT],
}

impl Default for Board {
    fn default() -> Self {
        Self::INITIAL
    }
}

impl Board {
    pub const WIDTH: usize = 10;
    pub const HEIGHT: usize = 20;

    pub const INITIAL: Self = Self {
        rows: [BlockRow::EMPTY; Board::HEIGHT],
    };

    #[must_use]
    pub const fn width(&self) -> usize {
        Self::WIDTH
    }

    #[must_use]
    pub const fn height(&self) -> usize {
        Self::HEIGHT
    }

    fn index(x: i32, y: i32) -> Option<(usize, usize)> {
        let x = usize::try_from(x).ok().filter(|x| *x < Self::WIDTH)?;
        let y = usize::try_from(y).ok().filter(|y| *y < Self::HEIGHT)?;
        Some((x, y))
    }

    /// Returns `true` when every cell of `piece` at `position` is on the board and empty.
    #[must_use]
    pub fn can_place(&self, piece: &Piece, position: Position) -> bool {
        piece.occupied_positions(position).all(|p| {
            Self::index(p.x, p.y).is_some_and(|(x, y)| self.rows[y].cells[x].is_empty())
        })
    }

    /// Stamps `piece` into the grid. Does not check legality; cells that fall outside
    /// the board are skipped.
    pub fn place(&mut self, piece: &Piece, position: Position) {
        let block = Block::Piece(piece.kind());
        for p in piece.occupied_positions(position) {
            if let Some((x, y)) = Self::index(p.x, p.y) {
                self.rows[y].cells[x] = block;
            }
        }
    }

    /// Removes every full row and returns how many were removed.
    ///
    /// Rows are scanned bottom to top. After a clear the rows above shift down by
    /// one, so the same row index is examined again before the scan continues; this
    /// keeps the count exact when several non-adjacent rows are full.
    pub fn clear_lines(&mut self) -> usize {
        let mut count = 0;
        let mut y = Self::HEIGHT;
        while y > 0 {
            let row = y - 1;
            if self.rows[row].is_filled() {
                count += 1;
                self.rows.copy_within(..row, 1);
                self.rows[0] = BlockRow::EMPTY;
                continue;
            }
            y -= 1;
        }
        count
    }

    /// Returns `true` when the top row holds any locked cell.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        !self.rows[0].is_empty()
    }

    /// Returns the numeric cell value at `(x, y)`, or `0` when out of bounds.
    #[must_use]
    pub fn cell(&self, x: i32, y: i32) -> u8 {
        self.block(x, y).as_u8()
    }

    /// Returns the block at `(x, y)`, or [`Block::Empty`] when out of bounds.
    #[must_use]
    pub fn block(&self, x: i32, y: i32) -> Block {
        Self::index(x, y).map_or(Block::Empty, |(x, y)| self.rows[y].cells[x])
    }

    #[must_use]
    pub fn is_cell_occupied(&self, x: usize, y: usize) -> bool {
        !self.rows[y].cells[x].is_empty()
    }

    /// Overwrites a single cell.
    ///
    /// Intended for building fixtures; gameplay only changes cells via [`Board::place`].
    pub fn fill_block_at(&mut self, x: usize, y: usize, block: Block) {
        self.rows[y].cells[x] = block;
    }

    /// Iterates over the rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Block; Board::WIDTH]> {
        self.rows.iter().map(|row| &row.cells)
    }

    /// Clears every cell.
    pub fn reset(&mut self) {
        self.rows = Self::INITIAL.rows;
    }
}
