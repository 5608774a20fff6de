use crate::core::{
    board::Board,
    piece::{Piece, Position},
};

use super::{
    game_stats::GameStats,
    piece_generator::{PieceGenerator, PieceSeed},
};

/// Lifecycle state of a [`Match`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum MatchState {
    Playing,
    GameOver,
}

/// A single game: the board, the active piece and the scoring state machine.
///
/// While [`MatchState::Playing`], the movement operations shift or rotate the
/// active piece and lock it when it can no longer fall. Illegal moves are rejected
/// silently and the piece stays where it was. Once [`MatchState::GameOver`] is
/// reached every operation except the resets is a no-op.
///
/// Each match owns its own [`PieceGenerator`], so a match built with
/// [`Match::with_seed`] replays the same piece sequence every time.
///
/// # Example
///
/// ```
/// use tetrabot_engine::{Match, PieceSeed};
///
/// let mut game = Match::with_seed(PieceSeed::from_u128(42));
/// game.move_left();
/// game.rotate();
/// let cleared = game.hard_drop();
///
/// assert_eq!(cleared, 0);
/// assert_eq!(game.stats().completed_pieces(), 1);
/// assert!(game.state().is_playing());
/// ```
#[derive(Debug, Clone)]
pub struct Match {
    board: Board,
    piece: Piece,
    position: Position,
    stats: GameStats,
    state: MatchState,
    generator: PieceGenerator,
}

impl Default for Match {
    fn default() -> Self {
        Self::new()
    }
}

impl Match {
    /// Where every new piece appears: column `WIDTH / 2 - 1`, top row.
    #[expect(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    pub const SPAWN_POSITION: Position = Position::new((Board::WIDTH / 2) as i32 - 1, 0);

    /// Creates a match with a random seed.
    #[must_use]
    pub fn new() -> Self {
        Self::with_generator(Board::INITIAL, PieceGenerator::new())
    }

    #[must_use]
    pub fn with_seed(seed: PieceSeed) -> Self {
        Self::with_generator(Board::INITIAL, PieceGenerator::with_seed(seed))
    }

    /// Creates a match on a prepared board. The first piece spawns immediately; if it
    /// does not fit the match starts in [`MatchState::GameOver`].
    #[must_use]
    pub fn from_board(board: Board, seed: PieceSeed) -> Self {
        Self::with_generator(board, PieceGenerator::with_seed(seed))
    }

    fn with_generator(board: Board, mut generator: PieceGenerator) -> Self {
        let piece = Piece::new(generator.next_kind());
        let mut this = Self {
            board,
            piece,
            position: Self::SPAWN_POSITION,
            stats: GameStats::new(),
            state: MatchState::Playing,
            generator,
        };
        this.check_spawn();
        this
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn piece(&self) -> &Piece {
        &self.piece
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Absolute cells of the active piece.
    pub fn piece_cells(&self) -> impl Iterator<Item = Position> + '_ {
        self.piece.occupied_positions(self.position)
    }

    #[must_use]
    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.stats.score()
    }

    #[must_use]
    pub fn level(&self) -> usize {
        self.stats.level()
    }

    #[must_use]
    pub fn lines_cleared(&self) -> usize {
        self.stats.total_cleared_lines()
    }

    #[must_use]
    pub fn state(&self) -> MatchState {
        self.state
    }

    #[must_use]
    pub fn seed(&self) -> PieceSeed {
        self.generator.seed()
    }

    /// Returns where the active piece would land if hard dropped now.
    #[must_use]
    pub fn drop_position(&self) -> Position {
        let mut position = self.position;
        while self.board.can_place(&self.piece, position.down()) {
            position = position.down();
        }
        position
    }

    /// Replaces the active piece and its position.
    ///
    /// Returns `false` and changes nothing if the match is over or the piece does
    /// not fit there.
    pub fn set_piece(&mut self, piece: Piece, position: Position) -> bool {
        if !self.state.is_playing() || !self.board.can_place(&piece, position) {
            return false;
        }
        self.piece = piece;
        self.position = position;
        true
    }

    pub fn move_left(&mut self) -> bool {
        self.state.is_playing() && self.try_move(-1, 0)
    }

    pub fn move_right(&mut self) -> bool {
        self.state.is_playing() && self.try_move(1, 0)
    }

    /// Moves the piece down one row, locking it instead when it cannot fall.
    ///
    /// Returns `true` only if the piece moved.
    pub fn move_down(&mut self) -> bool {
        if !self.state.is_playing() {
            return false;
        }
        if self.try_move(0, 1) {
            return true;
        }
        self.lock_piece();
        false
    }

    /// Rotates the piece clockwise, trying one column left and then one column right
    /// if the rotated piece collides. When neither fits the rotation is undone.
    ///
    /// Returns `true` if the piece ends up rotated.
    pub fn rotate(&mut self) -> bool {
        if !self.state.is_playing() {
            return false;
        }
        self.piece.rotate();
        if self.board.can_place(&self.piece, self.position) {
            return true;
        }
        if self.try_move(-1, 0) || self.try_move(1, 0) {
            return true;
        }
        self.piece.rotate_back();
        false
    }

    /// Drops the piece as far as it goes and locks it.
    ///
    /// Returns the number of lines cleared by the lock.
    pub fn hard_drop(&mut self) -> usize {
        if !self.state.is_playing() {
            return 0;
        }
        while self.try_move(0, 1) {}
        self.lock_piece()
    }

    /// Gravity step, called by the driver on a fixed cadence.
    pub fn update(&mut self) {
        self.move_down();
    }

    /// Starts over with an empty board, continuing the current piece sequence.
    pub fn reset(&mut self) {
        self.board.reset();
        self.stats = GameStats::new();
        self.state = MatchState::Playing;
        self.spawn_piece();
    }

    /// Starts over with an empty board and a freshly seeded piece sequence.
    pub fn reset_with_seed(&mut self, seed: PieceSeed) {
        self.generator = PieceGenerator::with_seed(seed);
        self.reset();
    }

    fn try_move(&mut self, dx: i32, dy: i32) -> bool {
        let position = self.position.offset(dx, dy);
        if self.board.can_place(&self.piece, position) {
            self.position = position;
            return true;
        }
        false
    }

    fn lock_piece(&mut self) -> usize {
        self.board.place(&self.piece, self.position);
        let cleared_lines = self.board.clear_lines();
        self.stats.complete_piece_drop(cleared_lines);

        if self.board.is_game_over() {
            self.state = MatchState::GameOver;
        } else {
            self.spawn_piece();
        }
        cleared_lines
    }

    fn spawn_piece(&mut self) {
        self.piece = Piece::new(self.generator.next_kind());
        self.position = Self::SPAWN_POSITION;
        self.check_spawn();
    }

    fn check_spawn(&mut self) {
        if !self.board.can_place(&self.piece, self.position) {
            self.state = MatchState::GameOver;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{
        board::Block,
        piece::{PieceKind, PieceRotation},
    };

    const SEED: PieceSeed = PieceSeed::from_u128(7);
    const FILL: Block = Block::Piece(PieceKind::Z);

    fn match_with(kind: PieceKind) -> Match {
        let mut game = Match::with_seed(SEED);
        assert!(game.set_piece(Piece::new(kind), Match::SPAWN_POSITION));
        game
    }

    #[test]
    fn test_new_match() {
        let game = Match::with_seed(SEED);
        assert_eq!(game.score(), 0);
        assert_eq!(game.level(), 1);
        assert_eq!(game.lines_cleared(), 0);
        assert_eq!(game.state(), MatchState::Playing);
        assert_eq!(game.position(), Position::new(4, 0));
        assert_eq!(game.piece().rotation().as_u8(), 0);
    }

    #[test]
    fn test_same_seed_same_pieces() {
        let mut a = Match::with_seed(SEED);
        let mut b = Match::with_seed(SEED);
        for _ in 0..20 {
            assert_eq!(a.piece().kind(), b.piece().kind());
            a.hard_drop();
            b.hard_drop();
        }
    }

    #[test]
    fn test_horizontal_moves_stop_at_walls() {
        let mut game = match_with(PieceKind::O);
        for _ in 0..4 {
            assert!(game.move_left());
        }
        assert_eq!(game.position().x, 0);
        assert!(!game.move_left());
        assert_eq!(game.position().x, 0);

        for _ in 0..8 {
            assert!(game.move_right());
        }
        assert_eq!(game.position().x, 8);
        assert!(!game.move_right());
        assert_eq!(game.position().x, 8);
    }

    #[test]
    fn test_move_down_until_lock() {
        let mut game = match_with(PieceKind::O);
        let mut moves = 0;
        while game.move_down() {
            moves += 1;
        }
        assert_eq!(moves, 18);
        assert_eq!(game.board().cell(4, 19), PieceKind::O.color());
        assert_eq!(game.board().cell(5, 18), PieceKind::O.color());
        assert_eq!(game.stats().completed_pieces(), 1);
        assert_eq!(game.position(), Match::SPAWN_POSITION);
        assert_eq!(game.score(), 0);
        assert_eq!(game.level(), 1);
        assert_eq!(game.lines_cleared(), 0);
        assert!(game.state().is_playing());
    }

    #[test]
    fn test_piece_cells_follow_position() {
        let mut game = match_with(PieceKind::O);
        let cells: Vec<_> = game.piece_cells().collect();
        assert_eq!(
            cells,
            [(4, 0), (5, 0), (4, 1), (5, 1)].map(|(x, y)| Position::new(x, y))
        );
        assert!(game.move_left());
        assert!(game.piece_cells().all(|p| p.x == 3 || p.x == 4));
    }

    #[test]
    fn test_drop_position_stops_on_stack() {
        let mut board = Board::INITIAL;
        board.fill_block_at(5, 12, FILL);
        let mut game = Match::from_board(board, SEED);
        assert!(game.set_piece(Piece::new(PieceKind::O), Match::SPAWN_POSITION));
        assert_eq!(game.drop_position(), Position::new(4, 10));
        assert_eq!(game.position(), Match::SPAWN_POSITION);
    }

    #[test]
    fn test_seed_tracks_reseeding() {
        let mut game = Match::with_seed(SEED);
        assert_eq!(game.seed(), SEED);
        game.reset();
        assert_eq!(game.seed(), SEED);
        let other = PieceSeed::from_u128(8);
        game.reset_with_seed(other);
        assert_eq!(game.seed(), other);
    }

    #[test]
    fn test_update_is_one_move_down() {
        let mut game = match_with(PieceKind::T);
        game.update();
        assert_eq!(game.position(), Position::new(4, 1));
    }

    #[test]
    fn test_hard_drop_locks_at_floor() {
        let mut game = match_with(PieceKind::I);
        assert_eq!(game.drop_position(), Position::new(4, 19));
        assert_eq!(game.hard_drop(), 0);
        for x in 4..8 {
            assert_eq!(game.board().cell(x, 19), PieceKind::I.color());
        }
        assert_eq!(game.stats().completed_pieces(), 1);
    }

    #[test]
    fn test_rotate_in_open_space() {
        let mut game = match_with(PieceKind::T);
        game.move_down();
        assert!(game.rotate());
        assert_eq!(game.piece().rotation().as_u8(), 1);
        assert_eq!(game.position(), Position::new(4, 1));
    }

    fn piece_at_rotation(kind: PieceKind, rotation: u8) -> Piece {
        Piece::with_rotation(kind, PieceRotation::new(rotation))
    }

    #[test]
    fn test_rotate_kicks_left_off_right_wall() {
        let mut game = Match::with_seed(SEED);
        // Vertical I hugging the right wall: neither kick can fit a horizontal I.
        assert!(game.set_piece(piece_at_rotation(PieceKind::I, 1), Position::new(9, 5)));
        assert!(!game.rotate());
        assert_eq!(game.piece().rotation().as_u8(), 1);
        assert_eq!(game.position(), Position::new(9, 5));

        // T rotation 3 spans two columns, rotation 0 spans three.
        assert!(game.set_piece(piece_at_rotation(PieceKind::T, 3), Position::new(8, 5)));
        assert!(game.rotate());
        assert_eq!(game.piece().rotation().as_u8(), 0);
        assert_eq!(game.position(), Position::new(7, 5));
    }

    #[test]
    fn test_rotate_kicks_right_off_left_wall() {
        let mut game = Match::with_seed(SEED);
        // T rotation 1 has no cell at offset x=0, so x=-1 keeps it on the board.
        assert!(game.set_piece(piece_at_rotation(PieceKind::T, 1), Position::new(-1, 5)));
        assert!(game.rotate());
        assert_eq!(game.piece().rotation().as_u8(), 2);
        assert_eq!(game.position(), Position::new(0, 5));
    }

    #[test]
    fn test_blocked_rotation_is_reverted() {
        let mut board = Board::INITIAL;
        for y in 4..Board::HEIGHT {
            board.fill_block_at(3, y, FILL);
            board.fill_block_at(5, y, FILL);
        }
        let mut game = Match::from_board(board, SEED);
        assert!(game.set_piece(piece_at_rotation(PieceKind::I, 1), Position::new(4, 5)));

        assert!(!game.rotate());
        assert_eq!(game.piece().rotation().as_u8(), 1);
        assert_eq!(*game.piece().cells(), PieceKind::I.shape_at(game.piece().rotation()));
        assert_eq!(game.position(), Position::new(4, 5));
    }

    #[test]
    fn test_single_line_clear_scores_by_level() {
        let mut board = Board::INITIAL;
        for x in 0..Board::WIDTH {
            if x != 9 {
                board.fill_block_at(x, 19, FILL);
            }
        }
        let mut game = Match::from_board(board, SEED);
        let mut vertical = Piece::new(PieceKind::I);
        vertical.rotate();
        assert!(game.set_piece(vertical, Position::new(9, 0)));

        let level = game.level();
        assert_eq!(game.hard_drop(), 1);
        assert_eq!(game.score(), 100 * level);
        assert_eq!(game.lines_cleared(), 1);
        // The remaining three I cells shift down into rows 17..=19.
        for y in 17..20 {
            assert_eq!(game.board().cell(9, y), PieceKind::I.color());
        }
        assert_eq!(game.board().cell(0, 19), 0);
        assert!(game.state().is_playing());
    }

    #[test]
    fn test_lock_in_top_row_is_game_over() {
        let mut board = Board::INITIAL;
        for x in 0..4 {
            board.fill_block_at(x, 1, FILL);
        }
        let mut game = Match::from_board(board, SEED);
        assert!(game.set_piece(Piece::new(PieceKind::I), Position::new(0, 0)));
        assert!(!game.move_down());
        assert_eq!(game.state(), MatchState::GameOver);
        assert_eq!(game.stats().completed_pieces(), 1);

        let board = game.board().clone();
        let position = game.position();
        assert!(!game.move_left());
        assert!(!game.move_right());
        assert!(!game.move_down());
        assert!(!game.rotate());
        assert_eq!(game.hard_drop(), 0);
        assert!(!game.set_piece(Piece::new(PieceKind::O), Position::new(0, 10)));
        game.update();
        assert_eq!(game.board(), &board);
        assert_eq!(game.position(), position);
        assert_eq!(game.stats().completed_pieces(), 1);
        assert!(game.state().is_game_over());
    }

    #[test]
    fn test_blocked_spawn_is_game_over() {
        let mut board = Board::INITIAL;
        // Every spawn shape has a cell in row 0 within columns 4..=7.
        for x in 4..8 {
            board.fill_block_at(x, 0, FILL);
        }
        let game = Match::from_board(board, SEED);
        assert_eq!(game.state(), MatchState::GameOver);
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut game = Match::with_seed(SEED);
        while game.state().is_playing() {
            game.hard_drop();
        }
        assert!(game.stats().completed_pieces() > 0);

        game.reset();
        assert_eq!(game.board(), &Board::INITIAL);
        assert_eq!(game.score(), 0);
        assert_eq!(game.level(), 1);
        assert_eq!(game.lines_cleared(), 0);
        assert_eq!(game.stats().completed_pieces(), 0);
        assert_eq!(game.state(), MatchState::Playing);
        assert_eq!(game.position(), Match::SPAWN_POSITION);
    }

    #[test]
    fn test_reset_with_seed_replays_sequence() {
        let mut game = Match::with_seed(SEED);
        let first = game.piece().kind();
        game.hard_drop();
        game.hard_drop();
        game.reset_with_seed(SEED);
        assert_eq!(game.piece().kind(), first);
    }
}
