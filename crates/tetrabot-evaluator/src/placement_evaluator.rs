//! Placement evaluation: scoring a single hypothetical piece placement.
//!
//! The [`HeuristicEvaluator`] combines four features of the board left behind by a
//! placement into one linear score:
//!
//! ```text
//! score = w_lines·lines_cleared
//!       − w_height·aggregate_height
//!       − w_holes·holes
//!       − w_bump·bumpiness
//! ```
//!
//! Illegal placements score [`MIN_SCORE`]. Legal scores are clamped to at least
//! [`LOWEST_LEGAL_SCORE`], so they stay above it even when huge weights overflow the
//! sum to negative infinity.

use std::fmt;

use tetrabot_engine::{Board, Piece, Position};

use crate::{placement_analysis::PlacementAnalysis, weights::EvaluatorWeights};

/// Score given to placements that do not fit on the board.
pub const MIN_SCORE: f32 = f32::MIN;

/// Smallest score a legal placement can receive: the next `f32` above [`MIN_SCORE`].
pub const LOWEST_LEGAL_SCORE: f32 = f32::from_bits(MIN_SCORE.to_bits() - 1);

/// Evaluates piece placements by assigning scores (higher is better).
pub trait PlacementEvaluator: fmt::Debug + Send + Sync {
    fn evaluate_placement(&self, analysis: &PlacementAnalysis) -> f32;

    /// Scores locking `piece` at `position` on `board`, or [`MIN_SCORE`] if it does not
    /// fit.
    ///
    /// Legal placements never score below [`LOWEST_LEGAL_SCORE`]. A NaN from
    /// [`evaluate_placement`](Self::evaluate_placement) also maps to it.
    fn evaluate_position(&self, board: &Board, piece: &Piece, position: Position) -> f32 {
        PlacementAnalysis::from_board(board, piece, position).map_or(MIN_SCORE, |analysis| {
            self.evaluate_placement(&analysis).max(LOWEST_LEGAL_SCORE)
        })
    }
}

/// Weighted sum of cleared lines, aggregate height, holes and bumpiness.
///
/// # Example
///
/// ```
/// use tetrabot_engine::{Board, Piece, PieceKind, Position};
/// use tetrabot_evaluator::placement_evaluator::{
///     HeuristicEvaluator, MIN_SCORE, PlacementEvaluator as _,
/// };
///
/// let evaluator = HeuristicEvaluator::default();
/// let piece = Piece::new(PieceKind::O);
///
/// let flat = evaluator.evaluate_position(&Board::INITIAL, &piece, Position::new(0, 18));
/// assert_eq!(flat, -40.0);
///
/// let off_board = evaluator.evaluate_position(&Board::INITIAL, &piece, Position::new(9, 18));
/// assert_eq!(off_board, MIN_SCORE);
/// ```
#[derive(Debug, Clone, Default)]
pub struct HeuristicEvaluator {
    weights: EvaluatorWeights,
}

impl HeuristicEvaluator {
    #[must_use]
    pub fn new(weights: EvaluatorWeights) -> Self {
        Self { weights }
    }

    #[must_use]
    pub fn weights(&self) -> &EvaluatorWeights {
        &self.weights
    }
}

impl PlacementEvaluator for HeuristicEvaluator {
    #[expect(clippy::cast_precision_loss)]
    fn evaluate_placement(&self, analysis: &PlacementAnalysis) -> f32 {
        let board = analysis.board_analysis();
        let w = &self.weights;
        w.lines_cleared * analysis.cleared_lines() as f32
            - w.aggregate_height * board.aggregate_height() as f32
            - w.holes * board.num_holes() as f32
            - w.bumpiness * board.bumpiness() as f32
    }
}
