//! Drives a [`Match`] with planner decisions through its public movement operations.

use std::cmp::Ordering;

use tetrabot_engine::Match;

use crate::planner::{MoveCommand, Planner};

/// Applies `command` to the active piece: `rotation` rotations, horizontal moves until
/// the piece origin reaches `column`, then one hard drop.
///
/// The horizontal walk stops early when a move is rejected, and the piece is dropped
/// from wherever it got to. Returns the number of lines cleared by the drop.
pub fn apply_move(game: &mut Match, command: &MoveCommand) -> usize {
    for _ in 0..command.rotation {
        game.rotate();
    }
    loop {
        let moved = match game.position().x.cmp(&command.column) {
            Ordering::Less => game.move_right(),
            Ordering::Greater => game.move_left(),
            Ordering::Equal => break,
        };
        if !moved {
            break;
        }
    }
    game.hard_drop()
}

/// Plans and applies one move. Returns `None` if the match is already over.
pub fn play_turn(planner: &Planner, game: &mut Match) -> Option<usize> {
    if game.state().is_game_over() {
        return None;
    }
    let command = planner.find_best_move(game);
    Some(apply_move(game, &command))
}

/// Plays until the match ends or `turn_limit` turns have been played, returning the
/// number of turns played.
pub fn play_session(planner: &Planner, game: &mut Match, turn_limit: usize) -> usize {
    let mut turns = 0;
    while turns < turn_limit && play_turn(planner, game).is_some() {
        turns += 1;
    }
    turns
}

#[cfg(test)]
mod tests {
    use tetrabot_engine::{Block, Board, Piece, PieceKind, PieceSeed};

    use super::*;

    const SEED: PieceSeed = PieceSeed::from_u128(0x5eed);

    #[test]
    fn test_apply_move_reaches_target() {
        let mut game = Match::with_seed(SEED);
        assert!(game.set_piece(Piece::new(PieceKind::I), Match::SPAWN_POSITION));
        let command = MoveCommand {
            rotation: 1,
            column: 0,
            score: 0.0,
        };
        assert_eq!(apply_move(&mut game, &command), 0);
        for y in 16..20 {
            assert_eq!(game.board().cell(0, y), PieceKind::I.color());
        }
        assert_eq!(game.stats().completed_pieces(), 1);
    }

    #[test]
    fn test_apply_move_stops_at_wall() {
        let mut game = Match::with_seed(SEED);
        assert!(game.set_piece(Piece::new(PieceKind::O), Match::SPAWN_POSITION));
        let command = MoveCommand {
            rotation: 0,
            column: 12,
            score: 0.0,
        };
        apply_move(&mut game, &command);
        assert_eq!(game.board().cell(8, 19), PieceKind::O.color());
        assert_eq!(game.board().cell(9, 18), PieceKind::O.color());
    }

    #[test]
    fn test_apply_move_stops_at_obstacle() {
        let mut board = Board::INITIAL;
        board.fill_block_at(2, 0, Block::Piece(PieceKind::Z));
        let mut game = Match::from_board(board, SEED);
        assert!(game.set_piece(Piece::new(PieceKind::O), Match::SPAWN_POSITION));
        let command = MoveCommand {
            rotation: 0,
            column: 0,
            score: 0.0,
        };
        apply_move(&mut game, &command);
        assert_eq!(game.board().cell(3, 19), PieceKind::O.color());
        assert_eq!(game.board().cell(4, 18), PieceKind::O.color());
    }

    #[test]
    fn test_play_turn_follows_planner() {
        let planner = Planner::default();
        let mut expected = Match::with_seed(SEED);
        let mut game = Match::with_seed(SEED);

        let command = planner.find_best_move(&expected);
        apply_move(&mut expected, &command);
        assert_eq!(play_turn(&planner, &mut game), Some(0));
        assert_eq!(game.board(), expected.board());
    }

    #[test]
    fn test_play_turn_after_game_over() {
        let mut board = Board::INITIAL;
        for x in 4..8 {
            board.fill_block_at(x, 0, Block::Piece(PieceKind::T));
        }
        let mut game = Match::from_board(board, SEED);
        assert!(game.state().is_game_over());
        assert_eq!(play_turn(&Planner::default(), &mut game), None);
        assert_eq!(play_session(&Planner::default(), &mut game, 10), 0);
    }

    #[test]
    fn test_session_respects_turn_limit() {
        let planner = Planner::default();
        let mut game = Match::with_seed(SEED);
        assert_eq!(play_session(&planner, &mut game, 25), 25);
        assert_eq!(game.stats().completed_pieces(), 25);
        assert!(game.state().is_playing());
    }

    #[test]
    fn test_autopilot_clears_lines() {
        let planner = Planner::default();
        let mut game = Match::with_seed(SEED);
        let turns = play_session(&planner, &mut game, 200);
        assert!(turns > 0);
        assert!(game.lines_cleared() > 0);
        assert_eq!(game.stats().completed_pieces(), turns);
    }
}
