use std::path::PathBuf;

use tetrabot_engine::{Match, PieceSeed};

use crate::{command::play::app::PlayApp, tui::Tui, util};

mod app;

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct PlayArg {
    /// Start with manual control instead of the autopilot
    #[clap(long)]
    manual: bool,
    /// Seed for the piece sequence (32 hex digits)
    #[clap(long)]
    seed: Option<PieceSeed>,
    /// Evaluator weights file (JSON)
    #[clap(long)]
    weights: Option<PathBuf>,
}

pub(crate) fn run(arg: &PlayArg) -> anyhow::Result<()> {
    let PlayArg {
        manual,
        seed,
        weights,
    } = arg;

    let planner = util::build_planner(weights.as_deref())?;
    let game = seed.map_or_else(Match::new, Match::with_seed);
    let mut app = PlayApp::new(game, planner, !*manual);
    Tui::new().run(&mut app)
}
