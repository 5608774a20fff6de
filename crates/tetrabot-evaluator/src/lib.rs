//! Heuristic placement search for the tetrabot engine.
//!
//! The crate is layered bottom-up:
//!
//! ```text
//! Arena (several matches in lockstep)
//!     ↓ uses
//! autopilot (apply a move to a live Match)
//!     ↓ uses
//! Planner (try every rotation and column, keep the best)
//!     ↓ uses
//! PlacementEvaluator (score one hypothetical placement)
//! ```
//!
//! - [`board_analysis`] - lazily computed heights, holes and bumpiness of a board
//! - [`placement_analysis`] - board state after stamping a piece and clearing rows
//! - [`weights`] - tunable evaluator weights, loadable from JSON
//! - [`placement_evaluator`] - the [`PlacementEvaluator`](placement_evaluator::PlacementEvaluator)
//!   trait and the default heuristic
//! - [`planner`] - exhaustive search over placements of the active piece
//! - [`autopilot`] - turns a [`MoveCommand`](planner::MoveCommand) into movement calls
//! - [`arena`] - multiple independent AI matches
//!
//! # Example
//!
//! ```
//! use tetrabot_engine::{Match, PieceSeed};
//! use tetrabot_evaluator::{
//!     autopilot,
//!     placement_evaluator::HeuristicEvaluator,
//!     planner::Planner,
//!     weights::EvaluatorWeights,
//! };
//!
//! let planner = Planner::new(Box::new(HeuristicEvaluator::new(EvaluatorWeights::DEFAULT)));
//! let mut game = Match::with_seed(PieceSeed::from_u128(9));
//! let turns = autopilot::play_session(&planner, &mut game, 50);
//!
//! assert_eq!(turns, game.stats().completed_pieces());
//! ```

pub mod arena;
pub mod autopilot;
pub mod board_analysis;
pub mod placement_analysis;
pub mod placement_evaluator;
pub mod planner;
pub mod weights;
