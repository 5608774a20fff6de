use std::path::PathBuf;

use rand::Rng as _;
use serde::Serialize;
use tetrabot_engine::{GameStats, Match, PieceSeed};
use tetrabot_evaluator::{
    autopilot, placement_evaluator::HeuristicEvaluator, planner::Planner,
    weights::EvaluatorWeights,
};

use crate::util::{self, Output};

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct SimulateArg {
    /// Number of matches to play
    #[clap(long, default_value_t = 10)]
    games: usize,
    /// Maximum number of pieces per match
    #[clap(long, default_value_t = 5000)]
    turn_limit: usize,
    /// Seed of the first match (32 hex digits); later matches count up from it
    #[clap(long)]
    seed: Option<PieceSeed>,
    /// Evaluator weights file (JSON)
    #[clap(long)]
    weights: Option<PathBuf>,
    /// Report file; the report goes to stdout when omitted
    #[clap(long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct SimulationReport {
    weights: EvaluatorWeights,
    turn_limit: usize,
    summary: Summary,
    games: Vec<GameReport>,
}

#[derive(Debug, Serialize)]
struct GameReport {
    seed: PieceSeed,
    turns: usize,
    game_over: bool,
    stats: GameStats,
}

#[derive(Debug, Serialize)]
struct Summary {
    games: usize,
    game_overs: usize,
    max_score: usize,
    mean_score: f64,
    mean_lines: f64,
    mean_turns: f64,
}

impl Summary {
    #[expect(clippy::cast_precision_loss)]
    fn from_games(games: &[GameReport]) -> Self {
        let mean = |f: fn(&GameReport) -> usize| {
            if games.is_empty() {
                0.0
            } else {
                games.iter().map(f).sum::<usize>() as f64 / games.len() as f64
            }
        };
        Self {
            games: games.len(),
            game_overs: games.iter().filter(|g| g.game_over).count(),
            max_score: games.iter().map(|g| g.stats.score()).max().unwrap_or(0),
            mean_score: mean(|g| g.stats.score()),
            mean_lines: mean(|g| g.stats.total_cleared_lines()),
            mean_turns: mean(|g| g.turns),
        }
    }
}

pub(crate) fn run(arg: &SimulateArg) -> anyhow::Result<()> {
    let SimulateArg {
        games,
        turn_limit,
        seed,
        weights,
        output,
    } = arg;

    let weights = util::load_weights(weights.as_deref())?;
    let planner = Planner::new(Box::new(HeuristicEvaluator::new(weights)));
    let base_seed = seed.unwrap_or_else(|| rand::rng().random());

    eprintln!("Simulating {games} games (turn limit {turn_limit}, base seed {base_seed})...");
    let reports: Vec<_> = (0..*games)
        .map(|i| {
            let seed = PieceSeed::from_u128(base_seed.as_u128().wrapping_add(i as u128));
            let report = play_game(&planner, seed, *turn_limit);
            eprintln!(
                "Game {}/{games}: {} turns, {} lines, score {}{}",
                i + 1,
                report.turns,
                report.stats.total_cleared_lines(),
                report.stats.score(),
                if report.game_over { " (game over)" } else { "" },
            );
            report
        })
        .collect();

    let report = SimulationReport {
        weights,
        turn_limit: *turn_limit,
        summary: Summary::from_games(&reports),
        games: reports,
    };
    Output::save_json(&report, output.clone())?;
    eprintln!(
        "Done: mean score {:.1}, max score {}",
        report.summary.mean_score, report.summary.max_score
    );
    Ok(())
}

fn play_game(planner: &Planner, seed: PieceSeed, turn_limit: usize) -> GameReport {
    let mut game = Match::with_seed(seed);
    let turns = autopilot::play_session(planner, &mut game, turn_limit);
    GameReport {
        seed: game.seed(),
        turns,
        game_over: game.state().is_game_over(),
        stats: game.stats().clone(),
    }
}
