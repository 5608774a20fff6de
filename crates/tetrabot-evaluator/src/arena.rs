//! Several autopilot matches advanced in lockstep.

use arrayvec::ArrayVec;
use tetrabot_engine::{Match, PieceSeed};

use crate::{autopilot, planner::Planner};

/// Largest number of matches an [`Arena`] can hold.
pub const MAX_PLAYERS: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ArenaError {
    #[display("number of players must be between 1 and {}, got {count}", MAX_PLAYERS)]
    InvalidPlayerCount { count: usize },
}

/// Independent matches sharing one planner.
///
/// Each [`Arena::update`] gives every match that is still playing one full planned
/// turn, in index order. Matches share no state, so one player's game over does not
/// affect the others.
///
/// # Example
///
/// ```
/// use tetrabot_engine::PieceSeed;
/// use tetrabot_evaluator::{arena::Arena, planner::Planner};
///
/// let seeds = [PieceSeed::from_u128(1), PieceSeed::from_u128(2)];
/// let mut arena = Arena::with_seeds(&seeds, Planner::default()).unwrap();
/// arena.update();
///
/// assert_eq!(arena.num_players(), 2);
/// assert_eq!(arena.active_players(), 2);
/// ```
#[derive(Debug)]
pub struct Arena {
    planner: Planner,
    matches: ArrayVec<Match, MAX_PLAYERS>,
}

impl Arena {
    /// Creates `num_players` matches with random seeds.
    pub fn new(num_players: usize, planner: Planner) -> Result<Self, ArenaError> {
        Self::check_player_count(num_players)?;
        let matches = (0..num_players).map(|_| Match::new()).collect();
        Ok(Self { planner, matches })
    }

    /// Creates one match per seed.
    pub fn with_seeds(seeds: &[PieceSeed], planner: Planner) -> Result<Self, ArenaError> {
        Self::check_player_count(seeds.len())?;
        let matches = seeds.iter().map(|seed| Match::with_seed(*seed)).collect();
        Ok(Self { planner, matches })
    }

    fn check_player_count(count: usize) -> Result<(), ArenaError> {
        if (1..=MAX_PLAYERS).contains(&count) {
            Ok(())
        } else {
            Err(ArenaError::InvalidPlayerCount { count })
        }
    }

    pub fn update(&mut self) {
        for game in &mut self.matches {
            if game.state().is_playing() {
                autopilot::play_turn(&self.planner, game);
            }
        }
    }

    /// Resets every match, including those still playing.
    pub fn reset(&mut self) {
        for game in &mut self.matches {
            game.reset();
        }
    }

    #[must_use]
    pub fn planner(&self) -> &Planner {
        &self.planner
    }

    #[must_use]
    pub fn num_players(&self) -> usize {
        self.matches.len()
    }

    #[must_use]
    pub fn match_at(&self, index: usize) -> Option<&Match> {
        self.matches.get(index)
    }

    #[must_use]
    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    #[must_use]
    pub fn is_any_playing(&self) -> bool {
        self.matches.iter().any(|game| game.state().is_playing())
    }

    #[must_use]
    pub fn active_players(&self) -> usize {
        self.matches
            .iter()
            .filter(|game| game.state().is_playing())
            .count()
    }
}
