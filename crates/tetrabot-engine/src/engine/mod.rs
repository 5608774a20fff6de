//! Match logic on top of the core board and piece types.
//!
//! - [`Match`] - the game-state machine: active piece, gravity, locking, game over
//! - [`GameStats`] - score, level and line counters for one match
//! - [`PieceGenerator`] - seeded source of piece kinds
//! - [`PieceSeed`] - 128-bit seed for reproducible piece sequences
//!
//! # Game Flow
//!
//! 1. Create a [`Match`], optionally from a [`PieceSeed`]
//! 2. A player or the autopilot moves and rotates the active piece
//! 3. The piece locks when it cannot fall further (gravity or hard drop)
//! 4. Full rows are cleared, [`GameStats`] is updated and the next piece spawns
//! 5. Repeat until the top row is occupied or a spawn collides
//!
//! # Example
//!
//! ```
//! use tetrabot_engine::{Match, PieceSeed};
//!
//! let mut game = Match::with_seed(PieceSeed::from_u128(1));
//! while game.state().is_playing() {
//!     game.hard_drop();
//! }
//! assert!(game.stats().completed_pieces() > 0);
//! ```

pub use self::{game_match::*, game_stats::*, piece_generator::*};

mod game_match;
mod game_stats;
mod piece_generator;
