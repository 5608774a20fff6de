//! Exhaustive one-piece lookahead.
//!
//! [`Planner::find_best_move`] tries every rotation of the active piece at every
//! column in `[-3, WIDTH + 3)`, drops it from the top row, scores each landing spot
//! with a [`PlacementEvaluator`] and keeps the best one. The live match is only read.
//!
//! Columns outside the board are included so that pieces whose shape does not
//! start at offset 0 can still reach the walls.

use serde::Serialize;
use tetrabot_engine::{Board, Match, Piece, Position};

use crate::placement_evaluator::{HeuristicEvaluator, MIN_SCORE, PlacementEvaluator};

#[expect(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
const BOARD_WIDTH: i32 = Board::WIDTH as i32;
const COLUMN_MARGIN: i32 = 3;

/// A placement chosen by the planner, relative to the active piece.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MoveCommand {
    /// Clockwise rotations to apply to the active piece, in `[0, 4)`.
    pub rotation: u8,
    /// Target x of the piece origin.
    pub column: i32,
    pub score: f32,
}

impl MoveCommand {
    /// Returned when no placement is legal.
    pub const NONE: Self = Self {
        rotation: 0,
        column: 0,
        score: MIN_SCORE,
    };

    #[must_use]
    pub fn is_legal(&self) -> bool {
        self.score > MIN_SCORE
    }
}

/// Selects the highest-scoring placement for the active piece of a [`Match`].
///
/// # Example
///
/// ```
/// use tetrabot_engine::{Match, PieceSeed};
/// use tetrabot_evaluator::planner::Planner;
///
/// let game = Match::with_seed(PieceSeed::from_u128(3));
/// let planner = Planner::default();
/// let command = planner.find_best_move(&game);
///
/// assert!(command.is_legal());
/// assert!(command.rotation < 4);
/// ```
#[derive(Debug)]
pub struct Planner {
    placement_evaluator: Box<dyn PlacementEvaluator>,
}

impl Default for Planner {
    fn default() -> Self {
        Self::new(Box::new(HeuristicEvaluator::default()))
    }
}

impl Planner {
    #[must_use]
    pub fn new(placement_evaluator: Box<dyn PlacementEvaluator>) -> Self {
        Self {
            placement_evaluator,
        }
    }

    /// Every legal landing spot of the active piece with its score, rotation-major and
    /// then by ascending column.
    pub fn candidate_moves<'a>(
        &'a self,
        game: &'a Match,
    ) -> impl Iterator<Item = MoveCommand> + 'a {
        let board = game.board();
        let piece = *game.piece();
        (0..4u8).flat_map(move |rotation| {
            let mut rotated = piece;
            for _ in 0..rotation {
                rotated.rotate();
            }
            (-COLUMN_MARGIN..BOARD_WIDTH + COLUMN_MARGIN).filter_map(move |column| {
                let position = landing_position(board, &rotated, column)?;
                let score = self
                    .placement_evaluator
                    .evaluate_position(board, &rotated, position);
                Some(MoveCommand {
                    rotation,
                    column,
                    score,
                })
            })
        })
    }

    /// Returns the best placement, or [`MoveCommand::NONE`] if nothing fits.
    ///
    /// Ties keep the earliest candidate: lowest rotation count first, then lowest
    /// column.
    #[must_use]
    pub fn find_best_move(&self, game: &Match) -> MoveCommand {
        let mut best = MoveCommand::NONE;
        for command in self.candidate_moves(game) {
            if command.score > best.score {
                best = command;
            }
        }
        best
    }
}

/// Drops `piece` from the top row in `column` and returns where it rests, or `None`
/// if it does not fit even at the top.
fn landing_position(board: &Board, piece: &Piece, column: i32) -> Option<Position> {
    let mut position = Position::new(column, 0);
    while board.can_place(piece, position) {
        position = position.down();
    }
    let landed = position.offset(0, -1);
    (landed.y >= 0).then_some(landed)
}
