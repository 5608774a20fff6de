use std::path::PathBuf;

use tetrabot_evaluator::arena::Arena;

use crate::{command::arena::app::ArenaApp, tui::Tui, util};

mod app;

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct ArenaArg {
    /// Number of autopilot matches (1 to 8)
    #[clap(long, default_value_t = 2)]
    players: usize,
    /// Evaluator weights file (JSON)
    #[clap(long)]
    weights: Option<PathBuf>,
}

pub(crate) fn run(arg: &ArenaArg) -> anyhow::Result<()> {
    let ArenaArg { players, weights } = arg;

    let planner = util::build_planner(weights.as_deref())?;
    let arena = Arena::new(*players, planner)?;
    let mut app = ArenaApp::new(arena);
    Tui::new().run(&mut app)
}
