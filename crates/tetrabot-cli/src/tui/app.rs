use crossterm::event::Event;
use ratatui::Frame;

use crate::tui::Tui;

/// Applications executed by [`Tui::run`].
pub trait App {
    /// Called once before the event loop starts. Use this to set the tick interval.
    fn init(&mut self, tui: &mut Tui);

    fn should_exit(&self) -> bool;

    /// Handles terminal events (key input, resize, etc.).
    fn handle_event(&mut self, tui: &mut Tui, event: &Event);

    fn draw(&self, frame: &mut Frame);

    /// Advances the game (called on each tick).
    fn update(&mut self, tui: &mut Tui);
}
