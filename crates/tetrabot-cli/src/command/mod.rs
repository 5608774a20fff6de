use clap::{Parser, Subcommand};

use self::{arena::ArenaArg, play::PlayArg, simulate::SimulateArg};

mod arena;
mod play;
mod simulate;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Play a single match, steered by the autopilot or by hand
    Play(#[clap(flatten)] PlayArg),
    /// Watch several autopilot matches side by side
    Arena(#[clap(flatten)] ArenaArg),
    /// Run autopilot matches without a terminal UI and report the results as JSON
    Simulate(#[clap(flatten)] SimulateArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode.unwrap_or(Mode::Play(PlayArg::default())) {
        Mode::Play(arg) => play::run(&arg)?,
        Mode::Arena(arg) => arena::run(&arg)?,
        Mode::Simulate(arg) => simulate::run(&arg)?,
    }
    Ok(())
}
