//! Analysis of the board after a hypothetical placement.
//!
//! [`PlacementAnalysis`] stamps a piece onto a copy of the board, clears full rows and
//! keeps the number of cleared lines together with a [`BoardAnalysis`] of what is
//! left. The live board is never touched.

use tetrabot_engine::{Board, Piece, Position};

use crate::board_analysis::BoardAnalysis;

#[derive(Debug)]
pub struct PlacementAnalysis {
    piece: Piece,
    position: Position,
    cleared_lines: usize,
    board_analysis: BoardAnalysis,
}

impl PlacementAnalysis {
    /// Simulates locking `piece` at `position`.
    ///
    /// Returns `None` when the placement is illegal.
    #[must_use]
    pub fn from_board(before_placement: &Board, piece: &Piece, position: Position) -> Option<Self> {
        if !before_placement.can_place(piece, position) {
            return None;
        }
        let mut board = before_placement.clone();
        board.place(piece, position);
        let cleared_lines = board.clear_lines();

        Some(Self {
            piece: *piece,
            position,
            cleared_lines,
            board_analysis: BoardAnalysis::from_board(&board),
        })
    }

    #[must_use]
    pub fn piece(&self) -> &Piece {
        &self.piece
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub fn cleared_lines(&self) -> usize {
        self.cleared_lines
    }

    #[must_use]
    pub fn board_analysis(&self) -> &BoardAnalysis {
        &self.board_analysis
    }
}

#[cfg(test)]
mod tests {
    use tetrabot_engine::{Block, PieceKind};

    use super::*;

    #[test]
    fn test_illegal_placement() {
        let piece = Piece::new(PieceKind::I);
        let analyze = |position| PlacementAnalysis::from_board(&Board::INITIAL, &piece, position);
        assert!(analyze(Position::new(7, 0)).is_none());
        assert!(analyze(Position::new(0, 20)).is_none());
    }

    #[test]
    fn test_placement_does_not_touch_board() {
        let board = Board::INITIAL;
        let piece = Piece::new(PieceKind::O);
        let analysis = PlacementAnalysis::from_board(&board, &piece, Position::new(0, 18)).unwrap();
        assert_eq!(board, Board::INITIAL);
        assert_eq!(analysis.cleared_lines(), 0);
        assert_eq!(analysis.board_analysis().aggregate_height(), 4);
        assert_eq!(analysis.board_analysis().board().cell(1, 19), PieceKind::O.color());
    }

    #[test]
    fn test_placement_clears_lines() {
        let mut board = Board::INITIAL;
        for x in 0..Board::WIDTH - 4 {
            board.fill_block_at(x, 19, Block::Piece(PieceKind::S));
        }
        let piece = Piece::new(PieceKind::I);
        let analysis = PlacementAnalysis::from_board(&board, &piece, Position::new(6, 19)).unwrap();
        assert_eq!(analysis.cleared_lines(), 1);
        assert_eq!(analysis.board_analysis().aggregate_height(), 0);
        assert_eq!(analysis.position(), Position::new(6, 19));
        assert_eq!(analysis.piece().kind(), PieceKind::I);
    }
}
